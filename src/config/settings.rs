use std::env;

pub const API_URL_ENV: &str = "TIERLIST_API_URL";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://papayas-api-production.up.railway.app/api".to_string(),
            user_agent: "TierlistViewer/1.0",
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AvatarSettings {
    pub base_url: &'static str,
    pub size: u32,
    /// Skin shown for non-premium accounts
    pub placeholder: &'static str,
}

impl Default for AvatarSettings {
    fn default() -> Self {
        Self {
            base_url: "https://mc-heads.net",
            size: 50,
            placeholder: "Steve",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RefreshSettings {
    pub interval_secs: u64,
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self { interval_secs: 60 }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiSettings,
    pub avatar: AvatarSettings,
    pub refresh: RefreshSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            api: ApiSettings::default(),
            avatar: AvatarSettings::default(),
            refresh: RefreshSettings::default(),
        }
    }

    /// Defaults, then the environment, then an explicit override.
    pub fn load(api_url: Option<&str>) -> Self {
        let env_url = env::var(API_URL_ENV).ok();
        Self::new().with_api_url(api_url.or(env_url.as_deref()))
    }

    pub fn with_api_url(mut self, api_url: Option<&str>) -> Self {
        if let Some(url) = api_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.trim_end_matches('/').to_string();
        }
        self
    }
}
