//! 定时器封装模块
//!
//! 基于 `gloo-timers` 的 Future 接口实现流程引擎需要的 `Sleeper`。

use std::time::Duration;

use async_trait::async_trait;
use rozgaar_setu::Sleeper;

/// 浏览器定时器
#[derive(Clone, Copy, Default)]
pub struct TimerSleep;

#[async_trait(?Send)]
impl Sleeper for TimerSleep {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
