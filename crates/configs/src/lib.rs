use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub mail: MailConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            acquire_timeout_secs: default_acquire_timeout(),
        }
    }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_acquire_timeout() -> u64 { 30 }

/// Outbound mail settings for the contact notification.
///
/// Every field is optional: a missing `admin_address` disables the admin
/// notification entirely, and missing credentials mean the SMTP transport
/// connects unauthenticated.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct MailConfig {
    #[serde(default)]
    pub admin_address: Option<String>,
    #[serde(default)]
    pub sender_address: Option<String>,
    #[serde(default)]
    pub smtp_host: Option<String>,
    #[serde(default)]
    pub smtp_username: Option<String>,
    #[serde(default)]
    pub smtp_password: Option<String>,
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.normalize_from_env();
        self.database.validate()?;
        self.mail.normalize_from_env();
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl DatabaseConfig {
    /// Fill the URL from the environment when the TOML omits it.
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!(
                "database.url is empty; provide it in config.toml or via DATABASE_URL"
            ));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://")) {
            return Err(anyhow!("database.url must start with postgresql:// or postgres://"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

impl MailConfig {
    /// Env fallbacks kept compatible with the deployment the frontend was
    /// written against: ADMIN_EMAIL, DEFAULT_FROM_EMAIL, SMTP_HOST,
    /// SMTP_USERNAME, SMTP_PASSWORD.
    pub fn normalize_from_env(&mut self) {
        fn fill(slot: &mut Option<String>, var: &str) {
            if slot.as_deref().map_or(true, |v| v.trim().is_empty()) {
                if let Ok(v) = std::env::var(var) {
                    if !v.trim().is_empty() {
                        *slot = Some(v);
                    }
                }
            }
        }
        fill(&mut self.admin_address, "ADMIN_EMAIL");
        fill(&mut self.sender_address, "DEFAULT_FROM_EMAIL");
        fill(&mut self.smtp_host, "SMTP_HOST");
        fill(&mut self.smtp_username, "SMTP_USERNAME");
        fill(&mut self.smtp_password, "SMTP_PASSWORD");
    }

    /// The notification collaborator is enabled only when an admin address
    /// is configured.
    pub fn notifications_enabled(&self) -> bool {
        self.admin_address.as_deref().map_or(false, |a| !a.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_defaults_are_sane() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 8080);
    }

    #[test]
    fn mail_config_disabled_without_admin_address() {
        let cfg = MailConfig::default();
        assert!(!cfg.notifications_enabled());
        let cfg = MailConfig { admin_address: Some("   ".into()), ..Default::default() };
        assert!(!cfg.notifications_enabled());
        let cfg = MailConfig { admin_address: Some("ops@example.com".into()), ..Default::default() };
        assert!(cfg.notifications_enabled());
    }

    #[test]
    fn toml_parses_partial_sections() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000

            [mail]
            admin_address = "admin@example.com"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.mail.admin_address.as_deref(), Some("admin@example.com"));
        assert_eq!(cfg.database.max_connections, 10);
    }
}
