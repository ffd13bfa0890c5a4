use config::{Config, ConfigError, Environment};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database_url: String,
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
    #[serde(default = "default_pool_timeout_secs")]
    pub pool_timeout_secs: u8,
    #[serde(default = "default_statement_timeout_ms")]
    pub statement_timeout_ms: u64,
    /// Enables `clear_table` and `delete_tables`. Off unless set explicitly.
    #[serde(default)]
    pub allow_destructive_admin: bool,
}

fn default_pool_size() -> u32 {
    10
}

fn default_pool_timeout_secs() -> u8 {
    5
}

fn default_statement_timeout_ms() -> u64 {
    30_000
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_source(Environment::default().try_parsing(true))
    }

    fn from_source(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    /// Connection URL with the server-side statement timeout attached as a
    /// libpq `options` parameter, so every pooled connection inherits it.
    pub fn connection_url(&self) -> String {
        if self.statement_timeout_ms == 0 {
            return self.database_url.clone();
        }

        let separator = if self.database_url.contains('?') {
            '&'
        } else {
            '?'
        };

        format!(
            "{}{}options=-c%20statement_timeout%3D{}",
            self.database_url, separator, self.statement_timeout_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(url: &str, statement_timeout_ms: u64) -> Settings {
        Settings {
            database_url: url.to_string(),
            pool_size: 10,
            pool_timeout_secs: 5,
            statement_timeout_ms,
            allow_destructive_admin: false,
        }
    }

    fn env_source(vars: &[(&str, &str)]) -> Environment {
        let map = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<config::Map<String, String>>();
        Environment::default().try_parsing(true).source(Some(map))
    }

    #[test]
    fn defaults_apply_when_only_url_is_set() {
        let settings =
            Settings::from_source(env_source(&[("DATABASE_URL", "postgres://localhost/food")]))
                .unwrap();

        assert_eq!(settings.database_url, "postgres://localhost/food");
        assert_eq!(settings.pool_size, 10);
        assert_eq!(settings.pool_timeout_secs, 5);
        assert_eq!(settings.statement_timeout_ms, 30_000);
        assert!(!settings.allow_destructive_admin);
    }

    #[test]
    fn destructive_admin_must_be_enabled_explicitly() {
        let settings = Settings::from_source(env_source(&[
            ("DATABASE_URL", "postgres://localhost/food"),
            ("ALLOW_DESTRUCTIVE_ADMIN", "true"),
            ("POOL_SIZE", "3"),
        ]))
        .unwrap();

        assert!(settings.allow_destructive_admin);
        assert_eq!(settings.pool_size, 3);
    }

    #[test]
    fn missing_database_url_is_an_error() {
        assert!(Settings::from_source(env_source(&[])).is_err());
    }

    #[test]
    fn statement_timeout_is_appended_to_the_url() {
        assert_eq!(
            settings("postgres://localhost/food", 5000).connection_url(),
            "postgres://localhost/food?options=-c%20statement_timeout%3D5000"
        );
        assert_eq!(
            settings("postgres://localhost/food?sslmode=disable", 250).connection_url(),
            "postgres://localhost/food?sslmode=disable&options=-c%20statement_timeout%3D250"
        );
    }

    #[test]
    fn zero_statement_timeout_leaves_url_untouched() {
        assert_eq!(
            settings("postgres://localhost/food", 0).connection_url(),
            "postgres://localhost/food"
        );
    }
}
