use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ConsoleConfig {
    pub auth: AuthConfig,
    pub lists: ListsConfig,
    pub codes: CodesConfig,
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AuthConfig {
    pub demo_email: String,
    pub demo_password: String,
    /// Искусственная задержка «запроса» входа
    pub login_delay_ms: u32,
    /// Ключ флага авторизации в localStorage
    pub storage_key: String,
}

/// Размеры страниц списков
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListsConfig {
    pub promo_groups_page_size: usize,
    pub promo_codes_page_size: usize,
    pub usage_history_page_size: usize,
    pub team_members_page_size: usize,
    pub team_usage_page_size: usize,
    pub transactions_page_size: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CodesConfig {
    /// Сколько символов имени группы попадает в префикс кода
    pub prefix_len: usize,
    /// Минимальная длина случайного суффикса
    pub suffix_len: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationsConfig {
    pub ttl_ms: u32,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[auth]
demo_email = "user@example.com"
demo_password = "password"
login_delay_ms = 500
storage_key = "isAuthenticated"

[lists]
promo_groups_page_size = 10
promo_codes_page_size = 5
usage_history_page_size = 5
team_members_page_size = 10
team_usage_page_size = 5
transactions_page_size = 5

[codes]
prefix_len = 4
suffix_len = 4

[notifications]
ttl_ms = 4000
"#;

impl ConsoleConfig {
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: ConsoleConfig =
            toml::from_str(contents).context("Failed to parse console configuration")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        let sizes = [
            ("promo_groups_page_size", self.lists.promo_groups_page_size),
            ("promo_codes_page_size", self.lists.promo_codes_page_size),
            ("usage_history_page_size", self.lists.usage_history_page_size),
            ("team_members_page_size", self.lists.team_members_page_size),
            ("team_usage_page_size", self.lists.team_usage_page_size),
            ("transactions_page_size", self.lists.transactions_page_size),
        ];
        for (name, size) in sizes {
            if size == 0 {
                anyhow::bail!("lists.{} must be greater than zero", name);
            }
        }
        if self.codes.prefix_len == 0 || self.codes.suffix_len == 0 {
            anyhow::bail!("codes.prefix_len and codes.suffix_len must be greater than zero");
        }
        Ok(())
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        DEFAULT.clone()
    }
}

static DEFAULT: once_cell::sync::Lazy<ConsoleConfig> = once_cell::sync::Lazy::new(|| {
    match ConsoleConfig::from_toml(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => panic!("embedded default configuration is invalid: {e:#}"),
    }
});

/// Load configuration
///
/// Search order:
/// 1. The override document (browser storage on the client)
/// 2. Falls back to embedded default config
pub fn load_config(override_toml: Option<&str>) -> ConsoleConfig {
    if let Some(contents) = override_toml.filter(|c| !c.trim().is_empty()) {
        match ConsoleConfig::from_toml(contents) {
            Ok(config) => {
                log::info!("Using console configuration override");
                return config;
            }
            Err(e) => log::warn!("Ignoring console configuration override: {:#}", e),
        }
    }

    log::info!("Using default embedded configuration");
    ConsoleConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = ConsoleConfig::from_toml(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.auth.storage_key, "isAuthenticated");
        assert_eq!(config.auth.login_delay_ms, 500);
        assert_eq!(config.lists.team_members_page_size, 10);
        assert_eq!(config.codes.prefix_len, 4);
    }

    #[test]
    fn test_override_is_used() {
        let custom = DEFAULT_CONFIG.replace("login_delay_ms = 500", "login_delay_ms = 10");
        let config = load_config(Some(&custom));
        assert_eq!(config.auth.login_delay_ms, 10);
    }

    #[test]
    fn test_invalid_override_falls_back() {
        assert_eq!(load_config(Some("not = [valid")), ConsoleConfig::default());

        let zero_page = DEFAULT_CONFIG.replace(
            "usage_history_page_size = 5",
            "usage_history_page_size = 0",
        );
        assert!(ConsoleConfig::from_toml(&zero_page).is_err());
        assert_eq!(load_config(Some(&zero_page)), ConsoleConfig::default());
    }

    #[test]
    fn test_blank_override_ignored() {
        assert_eq!(load_config(Some("   ")), ConsoleConfig::default());
        assert_eq!(load_config(None), ConsoleConfig::default());
    }
}
