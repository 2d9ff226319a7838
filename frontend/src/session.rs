//! 会话模块
//!
//! 记住上次登录的身份 (`userType`)。只在登录成功时写入，不做路由守卫，也没有注销。

use leptos::prelude::*;
use rozgaar_setu::{AppResult, Session};
use rozgaar_setu_shared::UserRole;

use crate::web::LocalStorage;

/// 会话上下文
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// 启动时加载的会话，之后只通过 `remember` 修改
    session: StoredValue<Session<LocalStorage>>,
    role: RwSignal<Option<UserRole>>,
}

impl SessionContext {
    /// 从 LocalStorage 加载上次的身份
    pub fn new() -> Self {
        let session = Session::load(LocalStorage);
        let role = RwSignal::new(session.role());
        Self {
            session: StoredValue::new(session),
            role,
        }
    }

    pub fn role(&self) -> Option<UserRole> {
        self.role.get()
    }

    /// 写入身份，写入失败时内存状态不变
    pub fn remember(&self, role: UserRole) -> AppResult<()> {
        let remembered = self
            .session
            .try_update_value(|session| session.set_role(role).map(|_| session.role()))
            .unwrap_or(Ok(Some(role)))?;
        self.role.set(remembered);
        Ok(())
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}
