#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::env;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::fs;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    BotName,
    ChatURL,
    ConfigFile,
    Greeting,
    HealthCheckTimeout,
    Placeholder,
    Username,
}

pub struct Config {}

impl Config {
    /// Returns the active value for a key, falling back to its default when
    /// nothing has been loaded for it yet.
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return Config::default(key);
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        if key == ConfigKey::Username {
            let mut user = env::var("USER").unwrap_or_else(|_| return "".to_string());
            if user.is_empty() {
                user = "User".to_string();
            }

            return user;
        }

        let config_path = dirs::config_dir()
            .unwrap_or_else(env::temp_dir)
            .join("cocochat/config.toml");

        let res = match key {
            ConfigKey::BotName => "CocoBot",
            ConfigKey::ChatURL => "http://127.0.0.1:8000/chat",
            ConfigKey::Greeting => {
                "Hi there! I'm CocoBot. Ask me about your skin type or any Cocoon product!"
            }
            ConfigKey::HealthCheckTimeout => "1000",
            ConfigKey::Placeholder => "I'm working on it...",

            // Special
            ConfigKey::ConfigFile => return config_path.to_string_lossy().to_string(),
            ConfigKey::Username => "",
        };

        return res.to_string();
    }

    /// Checks values that clap can't validate on its own, as they arrive as
    /// plain strings from either the CLI or the config file.
    pub fn validate(key: ConfigKey, value: &str) -> Result<()> {
        match key {
            ConfigKey::HealthCheckTimeout => {
                if value.parse::<u64>().is_err() {
                    bail!(format!(
                        "Invalid value for '{key}': {value}\nExpected a number of milliseconds."
                    ));
                }
            }
            ConfigKey::ChatURL => {
                if let Err(err) = reqwest::Url::parse(value) {
                    bail!(format!("Invalid value for '{key}': {value}\n{err}"));
                }
            }
            _ => (),
        }

        return Ok(());
    }

    /// Reads every known key out of a config file's contents.
    pub fn parse_document(cmd: &Command, toml_str: &str) -> Result<Vec<(ConfigKey, String)>> {
        let doc = toml_str.parse::<toml_edit::Document>()?;
        let mut values = vec![];

        for key in ConfigKey::iter() {
            let val = match doc.get(&key.to_string()) {
                Some(val) => val,
                None => continue,
            };

            // Use clap value parsers to do validation.
            let mut possible_values = vec![];
            if let Some(arg) = cmd
                .get_arguments()
                .find(|e| return e.get_long() == Some(key.to_string().as_str()))
            {
                possible_values = arg
                    .get_possible_values()
                    .iter()
                    .map(|e| return e.get_name().to_string())
                    .collect::<Vec<String>>();
            }

            if let Some(val_int) = val.as_integer() {
                let val_str = val_int.to_string();
                Config::validate(key, &val_str)?;
                values.push((key, val_str));
            } else if let Some(val_str) = val.as_str() {
                if val_str.is_empty() {
                    continue;
                }
                if !possible_values.is_empty() && !possible_values.contains(&val_str.to_string())
                {
                    bail!(format!("config.toml has an invalid value for key '{key}': {val_str}\nPossible values are: {}", possible_values.join(", ")));
                }
                Config::validate(key, val_str)?;
                values.push((key, val_str.to_string()));
            } else {
                bail!(format!("config.toml has an invalid value for key '{key}'"));
            }
        }

        return Ok(values);
    }

    pub async fn load(cmd: Command, clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches.as_slice() {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }

        let config_path = path::PathBuf::from(config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(config_path).await?;
            for (key, val) in Config::parse_document(&cmd, &toml_str)? {
                Config::set(key, &val);
            }
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::validate(key, val)?;
                    Config::set(key, val)
                }
            }
        }

        tracing::debug!(
            username = Config::get(ConfigKey::Username),
            bot_name = Config::get(ConfigKey::BotName),
            chat_url = Config::get(ConfigKey::ChatURL),
            health_check_timeout = Config::get(ConfigKey::HealthCheckTimeout),
            "config"
        );

        return Ok(());
    }

    pub fn serialize_default(cmd: Command) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key == ConfigKey::ConfigFile {
                    return None;
                }

                if key == ConfigKey::Username {
                    return Some(
                        "# Your user name displayed in all chat bubbles.\n# username = \"\""
                            .to_string(),
                    );
                }

                let arg = cmd
                    .get_arguments()
                    .find(|e| return e.get_long() == Some(key.to_string().as_str()))?;

                let mut description = arg
                    .get_help()
                    .map(|help| return help.to_string())
                    .unwrap_or_default();

                description = description
                    .split("[default:")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();

                let mut val = Config::default(key);
                if val.is_empty() {
                    val = format!("# {key} = \"\"");
                } else if val.parse::<i32>().is_ok() {
                    val = format!("{key} = {val}");
                } else {
                    val = format!("{key} = \"{val}\"");
                }

                return Some(format!("# {description}\n{val}"));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}
