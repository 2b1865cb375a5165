use std::fs;

use anyhow::Result;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

#[test]
fn it_serializes_to_valid_toml() -> Result<()> {
    let res = Config::serialize_default(cli::build());
    let doc = res.parse::<toml_edit::Document>()?;

    assert_eq!(
        doc.get("chat-url").and_then(|e| return e.as_str()),
        Some("http://127.0.0.1:8000/chat")
    );
    assert_eq!(
        doc.get("health-check-timeout")
            .and_then(|e| return e.as_integer()),
        Some(1000)
    );
    assert!(doc.get("config-file").is_none());
    assert!(doc.get("username").is_none());
    assert!(res.contains("# username = \"\""));

    return Ok(());
}

#[test]
fn it_parses_config_from_file() -> Result<()> {
    let toml_str = fs::read_to_string("./config.example.toml")?;
    let values = Config::parse_document(&cli::build(), &toml_str)?;

    assert!(values.contains(&(ConfigKey::HealthCheckTimeout, "2000".to_string())));
    assert!(values.contains(&(ConfigKey::BotName, "CocoBot".to_string())));
    assert!(!values.iter().any(|(key, _)| return *key == ConfigKey::Username));

    return Ok(());
}

#[test]
fn it_fails_to_parse_config_from_file() -> Result<()> {
    let toml_str = fs::read_to_string("./test/bad-config.toml")?;
    let res = Config::parse_document(&cli::build(), &toml_str);
    assert!(res.is_err());

    return Ok(());
}

#[test]
fn it_fails_to_parse_invalid_url() {
    let res = Config::parse_document(&cli::build(), "chat-url = \"not a url\"");
    assert!(res.is_err());
}

#[test]
fn it_fails_to_parse_invalid_toml() {
    let res = Config::parse_document(&cli::build(), "chat-url = ");
    assert!(res.is_err());
}

#[test]
fn it_skips_empty_values() -> Result<()> {
    let values = Config::parse_document(&cli::build(), "greeting = \"\"")?;
    assert!(values.is_empty());

    return Ok(());
}

#[test]
fn it_falls_back_to_defaults() {
    assert_eq!(
        Config::get(ConfigKey::Placeholder),
        Config::default(ConfigKey::Placeholder)
    );
}

#[test]
fn it_validates_timeouts() {
    assert!(Config::validate(ConfigKey::HealthCheckTimeout, "250").is_ok());
    assert!(Config::validate(ConfigKey::HealthCheckTimeout, "-1").is_err());
    assert!(Config::validate(ConfigKey::Greeting, "anything goes").is_ok());
}
