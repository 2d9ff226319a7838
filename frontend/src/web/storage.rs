//! LocalStorage 封装模块
//!
//! 直接使用 `web_sys::Storage`，按原样读写字符串，不做 JSON 编码，
//! `userType` 的值保持为 `worker` / `customer`。
//! 存储被浏览器禁用时读取返回 `None`，写入返回 `false`，不会中断应用。

use rozgaar_setu::KeyValueStore;

/// 本地存储操作封装
#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    /// 获取 LocalStorage 实例
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorage {
    /// 获取存储的字符串值
    ///
    /// # 返回
    /// - `Some(String)` 如果键存在且有值
    /// - `None` 如果键不存在、存储不可用或发生错误
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    fn delete(&self, key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}
