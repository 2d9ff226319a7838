//! 构建时配置
//!
//! 通过 `option_env!` 在编译期读取变量，例如：
//! `ROZGAAR_AUTH_DELAY_MS=0 trunk serve`

use rozgaar_setu::SimulationConfig;
use rozgaar_setu::config::{VAR_AUTH_DELAY_MS, VAR_POST_JOB_DELAY_MS, VAR_TOAST_MS, VarSource};

/// 编译期捕获的变量
struct BuildVars;

impl VarSource for BuildVars {
    fn var(&self, name: &str) -> Option<String> {
        let value = match name {
            VAR_AUTH_DELAY_MS => option_env!("ROZGAAR_AUTH_DELAY_MS"),
            VAR_POST_JOB_DELAY_MS => option_env!("ROZGAAR_POST_JOB_DELAY_MS"),
            VAR_TOAST_MS => option_env!("ROZGAAR_TOAST_MS"),
            _ => None,
        };
        value.map(str::to_string)
    }
}

pub fn load_config() -> SimulationConfig {
    let config = SimulationConfig::from_vars(&BuildVars);
    log::debug!("[Config] {:?}", config);
    config
}
