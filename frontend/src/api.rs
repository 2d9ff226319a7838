//! 模拟后端服务
//!
//! 页面通过 `use_api()` 取得身份服务和招工服务，延迟时长来自构建时配置。

use leptos::prelude::*;
use rozgaar_setu::{SimulatedIdentity, SimulatedJobBoard, SimulationConfig};

use crate::web::TimerSleep;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RozgaarApi {
    pub config: SimulationConfig,
}

impl RozgaarApi {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn identity(&self) -> SimulatedIdentity<TimerSleep> {
        SimulatedIdentity::new(TimerSleep, self.config.auth_delay)
    }

    pub fn job_board(&self) -> SimulatedJobBoard<TimerSleep> {
        SimulatedJobBoard::new(TimerSleep, self.config.post_job_delay)
    }
}

pub fn use_api() -> RozgaarApi {
    use_context::<RozgaarApi>().expect("RozgaarApi should be provided")
}
