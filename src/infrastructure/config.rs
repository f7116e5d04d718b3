use crate::application::poller::PollIntervals;
use crate::domain::branding::Credit;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub backend: BackendSettings,
    pub poll: PollSettings,
    pub branding: BrandingSettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BackendSettings {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:9999".to_string(),
            timeout_ms: 5000,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PollSettings {
    pub interval_ms: u64,
    pub chart_interval_ms: u64,
    pub traffic_interval_ms: u64,
    pub k8s_interval_ms: u64,
    pub history_capacity: usize,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval_ms: 3000,
            chart_interval_ms: 5000,
            traffic_interval_ms: 5000,
            k8s_interval_ms: 10000,
            history_capacity: crate::domain::series::DEFAULT_CAPACITY,
        }
    }
}

impl PollSettings {
    /// Zero intervals would spin; they are raised to one millisecond.
    pub fn intervals(&self) -> PollIntervals {
        let ms = |v: u64| Duration::from_millis(v.max(1));
        PollIntervals {
            main: ms(self.interval_ms),
            charts: ms(self.chart_interval_ms),
            traffic: ms(self.traffic_interval_ms),
            kubernetes: ms(self.k8s_interval_ms),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BrandingSettings {
    pub author: String,
    pub donation_title: String,
}

impl Default for BrandingSettings {
    fn default() -> Self {
        let credit = Credit::default();
        Self {
            author: credit.author,
            donation_title: credit.donation_title,
        }
    }
}

impl BrandingSettings {
    pub fn credit(&self) -> Credit {
        Credit::new(self.author.clone(), self.donation_title.clone())
    }
}

/// Load `config/dashboard.toml` (optional) overlaid with `SYSDASH_*`
/// environment variables, e.g. `SYSDASH_BACKEND__BASE_URL`.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_from("config/dashboard")
}

fn load_from(path: &str) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(
            config::Environment::with_prefix("SYSDASH")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let config = load_from("config/does-not-exist").unwrap();

        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.backend.timeout_ms, 5000);
        assert_eq!(config.poll.interval_ms, 3000);
        assert_eq!(config.poll.history_capacity, 30);
        assert_eq!(config.branding.author, "M. Nafiurohman");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = std::env::temp_dir().join(format!("sysdash-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("dashboard.toml");
        std::fs::write(
            &file,
            "[backend]\nbase_url = \"http://10.0.0.5:9999\"\n\n[poll]\ninterval_ms = 1500\n",
        )
        .unwrap();

        let config = load_from(file.with_extension("").to_str().unwrap()).unwrap();

        assert_eq!(config.backend.base_url, "http://10.0.0.5:9999");
        assert_eq!(config.poll.interval_ms, 1500);
        assert_eq!(config.poll.chart_interval_ms, 5000);
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_intervals() {
        let poll = PollSettings {
            interval_ms: 0,
            ..PollSettings::default()
        };
        let intervals = poll.intervals();
        assert_eq!(intervals.main, Duration::from_millis(1));
        assert_eq!(intervals.kubernetes, Duration::from_secs(10));
    }
}
