#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeProfile {
    Development,
    Production,
}

#[derive(Debug, Clone)]
pub struct BridgeConfig {
    pub proxy_url: Option<String>,
    pub request_timeout_ms: u64,
    pub runtime_profile: RuntimeProfile,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            proxy_url: None,
            request_timeout_ms: 15_000,
            runtime_profile: RuntimeProfile::Development,
        }
    }
}

impl BridgeConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("ETHER_BRIDGE_PROXY_URL") {
            if !url.is_empty() {
                config.proxy_url = Some(url);
            }
        }
        if let Ok(raw) = std::env::var("ETHER_BRIDGE_TIMEOUT_MS") {
            if let Ok(ms) = raw.parse() {
                config.request_timeout_ms = ms;
            }
        }
        if let Ok(profile) = std::env::var("ETHER_BRIDGE_RUNTIME_PROFILE") {
            if profile.eq_ignore_ascii_case("production") {
                config.runtime_profile = RuntimeProfile::Production;
            }
        }
        config
    }

    pub fn strict_runtime_required(&self) -> bool {
        self.runtime_profile == RuntimeProfile::Production
    }
}
