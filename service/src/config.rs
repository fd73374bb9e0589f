use axum::http::HeaderValue;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use secure_headers::WriteMode;
use serde::{Deserialize, Serialize};

/// Application configuration loaded from multiple sources.
///
/// Configuration is loaded in priority order (lowest to highest):
/// 1. Struct defaults
/// 2. config.yaml file (if exists)
/// 3. Environment variables with SH_ prefix (always wins)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub headers: HeadersConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// HTTP server bind address.
    #[serde(default = "default_host")]
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log filter directive (debug, info, warn, error, or a full `EnvFilter` string).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Which response header injectors wrap the API, and with what values.
///
/// String values are sent verbatim. `None` disables that injector; an empty
/// string is sent as an empty header.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HeadersConfig {
    /// Master switch for all injectors (default: true).
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether injected values replace handler-set ones (default: override).
    #[serde(default)]
    pub write_mode: HeaderWriteMode,

    /// `Cache-Control: no-store` (default: true).
    #[serde(default = "default_true")]
    pub cache_control: bool,

    /// `Content-Type` value, also enables `X-Content-Type-Options: nosniff`
    /// (default: "application/json").
    #[serde(default = "default_content_type")]
    pub content_type: Option<String>,

    /// `Access-Control-Allow-Origin` value (default: unset).
    #[serde(default)]
    pub cors_origin: Option<String>,

    /// `Content-Security-Policy: frame-ancestors 'none'` and
    /// `X-Frame-Options: DENY` (default: true).
    #[serde(default = "default_true")]
    pub frame_protection: bool,

    /// `Strict-Transport-Security` directive (default: unset, enable in
    /// production behind HTTPS).
    #[serde(default)]
    pub hsts: Option<String>,
}

impl Default for HeadersConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            write_mode: HeaderWriteMode::default(),
            cache_control: default_true(),
            content_type: default_content_type(),
            cors_origin: None,
            frame_protection: default_true(),
            hsts: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderWriteMode {
    #[default]
    Override,
    IfNotPresent,
}

impl From<HeaderWriteMode> for WriteMode {
    fn from(mode: HeaderWriteMode) -> Self {
        match mode {
            HeaderWriteMode::Override => Self::Override,
            HeaderWriteMode::IfNotPresent => Self::IfNotPresent,
        }
    }
}

// These functions cannot be const because serde uses function pointers for defaults
#[allow(clippy::missing_const_for_fn)]
fn default_port() -> u16 {
    8080
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_true() -> bool {
    true
}

#[allow(clippy::unnecessary_wraps)]
fn default_content_type() -> Option<String> {
    Some("application/json".to_string())
}

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

impl Config {
    /// Load configuration from all sources, reading `config.yaml` from the
    /// working directory.
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config.yaml")
    }

    /// Load configuration with a custom YAML file path.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load_from(yaml_path: &str) -> Result<Self, ConfigError> {
        let config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Yaml::file(yaml_path))
            .merge(Env::prefixed("SH_").split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Header strings are only checked for bytes HTTP cannot carry; their
    /// contents are sent as configured.
    ///
    /// # Errors
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Port must be non-zero
        if self.server.port == 0 {
            return Err(ConfigError::Validation("server.port cannot be 0".into()));
        }

        let headers = [
            ("headers.content_type", &self.headers.content_type),
            ("headers.cors_origin", &self.headers.cors_origin),
            ("headers.hsts", &self.headers.hsts),
        ];
        for (key, value) in headers {
            if let Some(value) = value {
                if HeaderValue::from_str(value).is_err() {
                    return Err(ConfigError::Validation(format!(
                        "{key} contains characters that are not allowed in an HTTP header value"
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.level, "info");
        assert!(config.headers.enabled);
        assert!(config.headers.cache_control);
        assert!(config.headers.frame_protection);
        assert_eq!(config.headers.content_type.as_deref(), Some("application/json"));
        assert!(config.headers.cors_origin.is_none());
        assert!(config.headers.hsts.is_none());
        assert_eq!(config.headers.write_mode, HeaderWriteMode::Override);
    }

    #[test]
    fn test_validation_accepts_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("server.port"));
    }

    #[test]
    fn test_validation_rejects_crlf_in_header_values() {
        let cases = [
            ("headers.content_type", "application/json\r\nX-Evil: 1"),
            ("headers.cors_origin", "https://example.com\n"),
            ("headers.hsts", "max-age=1\r"),
        ];

        for (key, value) in cases {
            let mut config = Config::default();
            match key {
                "headers.content_type" => config.headers.content_type = Some(value.into()),
                "headers.cors_origin" => config.headers.cors_origin = Some(value.into()),
                _ => config.headers.hsts = Some(value.into()),
            }
            let err = config.validate().expect_err(key);
            assert!(err.to_string().contains(key), "case '{key}': {err}");
        }
    }

    #[test]
    fn test_validation_does_not_judge_header_syntax() {
        let mut config = Config::default();
        config.headers.content_type = Some(String::new());
        config.headers.cors_origin = Some("*".into());
        config.headers.hsts = Some("not a directive".into());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_write_mode_deserializes_snake_case() {
        let json = r#"{"write_mode": "if_not_present"}"#;
        let config: HeadersConfig = serde_json::from_str(json).expect("should parse");
        assert_eq!(config.write_mode, HeaderWriteMode::IfNotPresent);
        assert_eq!(WriteMode::from(config.write_mode), WriteMode::IfNotPresent);
    }

    #[test]
    fn test_write_mode_rejects_unknown_value() {
        let json = r#"{"write_mode": "append"}"#;
        let result: Result<HeadersConfig, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_headers_content_type_can_be_disabled() {
        let json = r#"{"content_type": null}"#;
        let config: HeadersConfig = serde_json::from_str(json).expect("should parse");
        assert!(config.content_type.is_none());
    }

    #[test]
    fn test_load_from_yaml_and_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "headers.yaml",
                r#"
                server:
                  port: 9000
                headers:
                  cors_origin: "https://app.example.com"
                  frame_protection: false
                "#,
            )?;
            jail.set_env("SH_HEADERS__HSTS", "max-age=63072000; includeSubDomains");
            jail.set_env("SH_SERVER__PORT", "9100");

            let config = Config::load_from("headers.yaml").map_err(|e| e.to_string())?;

            assert_eq!(config.server.port, 9100);
            assert_eq!(
                config.headers.cors_origin.as_deref(),
                Some("https://app.example.com")
            );
            assert!(!config.headers.frame_protection);
            assert_eq!(
                config.headers.hsts.as_deref(),
                Some("max-age=63072000; includeSubDomains")
            );
            assert!(config.headers.cache_control);
            Ok(())
        });
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        Jail::expect_with(|_jail| {
            let config = Config::load().map_err(|e| e.to_string())?;
            assert_eq!(config.server.port, 8080);
            assert!(config.headers.enabled);
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        Jail::expect_with(|jail| {
            jail.set_env("SH_SERVER__PORT", "0");
            let result = Config::load();
            assert!(matches!(result, Err(ConfigError::Validation(_))));
            Ok(())
        });
    }

    #[test]
    fn port_boundaries() {
        let cases = [
            (0u16, false, "zero port"),
            (1, true, "minimum valid port"),
            (8080, true, "default port"),
            (65535, true, "maximum port"),
        ];

        for (port, should_pass, desc) in cases {
            let mut config = Config::default();
            config.server.port = port;
            let result = config.validate();
            assert_eq!(result.is_ok(), should_pass, "case '{}': {:?}", desc, result);
        }
    }
}
