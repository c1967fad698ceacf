//! HTTP listener configuration.
//!
//! # Environment Variables
//!
//! - `PORT`: listening port (default `3000`)
//! - `METRICS_PORT`: port of the Prometheus listener (default `9000`)
//! - `RUN_MIGRATIONS`: apply embedded migrations at startup (default `true`)
//! - `OBSERVABILITY_ENABLED`: file logs, OTLP export and metrics (default `true`)

use std::env;

use crate::{parse_flag, parse_var};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_METRICS_PORT: u16 = 9000;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub metrics_port: u16,
    pub run_migrations: bool,
    pub observability_enabled: bool,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            port: parse_var(&lookup, "PORT", DEFAULT_PORT)?,
            metrics_port: parse_var(&lookup, "METRICS_PORT", DEFAULT_METRICS_PORT)?,
            run_migrations: parse_flag(&lookup, "RUN_MIGRATIONS", true),
            observability_enabled: parse_flag(&lookup, "OBSERVABILITY_ENABLED", true),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    pub fn metrics_addr(&self) -> String {
        format!("0.0.0.0:{}", self.metrics_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_port_defaults_to_3000() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert!(config.run_migrations);
        assert!(config.observability_enabled);
    }

    #[test]
    fn test_blank_port_falls_back_to_default() {
        let config = ServerConfig::from_lookup(lookup(&[("PORT", "  ")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_explicit_values() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("METRICS_PORT", "9100"),
            ("RUN_MIGRATIONS", "false"),
            ("OBSERVABILITY_ENABLED", "0"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.metrics_addr(), "0.0.0.0:9100");
        assert!(!config.run_migrations);
        assert!(!config.observability_enabled);
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
