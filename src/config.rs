use crate::domain::services::booking_store::Latency;
use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub latency: Latency,
    pub seed_demo_data: bool,
}

fn millis_var(key: &str, default: u64) -> Duration {
    let ms = env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default);
    Duration::from_millis(ms)
}

impl Config {
    pub fn from_env() -> Self {
        let demo = Latency::demo();
        Self {
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            latency: Latency {
                create: millis_var("CREATE_LATENCY_MS", demo.create.as_millis() as u64),
                update_status: millis_var("STATUS_LATENCY_MS", demo.update_status.as_millis() as u64),
            },
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .map(|v| !matches!(v.to_lowercase().as_str(), "0" | "false" | "no"))
                .unwrap_or(true),
        }
    }

    pub fn for_tests() -> Self {
        Self {
            port: 0,
            latency: Latency::none(),
            seed_demo_data: false,
        }
    }
}
