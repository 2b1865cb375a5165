#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::env;
use std::io;
use std::path;
use std::process;

use anyhow::bail;
use anyhow::Result;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::BackendBox;
use crate::domain::models::ChatRequest;
use crate::domain::services::actions::help_text;
use crate::domain::services::actions::CONNECTION_ERROR_TEXT;
use crate::infrastructure::backends::BackendManager;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    process::exit(0);
}

/// Directory receiving `debug.log` when running with `RUST_LOG=cocochat`.
pub fn debug_log_dir() -> path::PathBuf {
    if let Ok(dir) = env::var("COCOCHAT_LOG_DIR") {
        return path::PathBuf::from(dir);
    }

    return dirs::cache_dir()
        .unwrap_or_else(env::temp_dir)
        .join("cocochat");
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

/// Joins the words of the `ask` subcommand the same way a shell user would
/// expect, then trims the result.
pub fn ask_text(matches: &ArgMatches) -> String {
    return matches
        .get_many::<String>("text")
        .map(|words| return words.map(|e| return e.as_str()).collect::<Vec<&str>>())
        .unwrap_or_default()
        .join(" ")
        .trim()
        .to_string();
}

async fn ask(backend: &BackendBox, text: &str, as_json: bool) -> Result<()> {
    if text.is_empty() {
        bail!("There's nothing to ask, the message is empty.");
    }

    let response = match backend.send(ChatRequest::new(text)).await {
        Ok(response) => response,
        Err(err) => {
            tracing::error!(error = ?err, "chat request failed");
            return Err(err.context(CONNECTION_ERROR_TEXT));
        }
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!(
            "{}",
            response.reply_text(&Config::get(ConfigKey::Placeholder))
        );
    }

    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    return Command::new("debug")
        .about("Debug helpers for cocochat")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running cocochat with environment variable RUST_LOG=cocochat")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        );
}

fn subcommand_ask() -> Command {
    return Command::new("ask")
        .about("Sends a single message to the chat API and prints the reply.")
        .arg(
            Arg::new("text")
                .help("Message to send.")
                .num_args(1..)
                .required(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the full response as JSON, including the detected intent and entities.")
                .action(ArgAction::SetTrue),
        );
}

fn subcommand_chat() -> Command {
    return Command::new("chat").about("Start a new chat session. This is the default.");
}

pub fn build() -> Command {
    let commands_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("COMMANDS:") || line.starts_with("HOTKEYS:") {
                return Paint::new(format!("CHAT {line}"))
                    .underline()
                    .bold()
                    .to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}\nCommit: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    );

    return Command::new("cocochat")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(commands_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_ask())
        .subcommand(subcommand_chat())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .subcommand(Command::new("manpages").about("Generates manpages and outputs to stdout."))
        .arg(
            Arg::new(ConfigKey::ChatURL.to_string())
                .short('u')
                .long(ConfigKey::ChatURL.to_string())
                .env("COCOCHAT_CHAT_URL")
                .num_args(1)
                .help(format!("Endpoint receiving chat messages as JSON. [default: {}]", Config::default(ConfigKey::ChatURL)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::HealthCheckTimeout.to_string())
                .long(ConfigKey::HealthCheckTimeout.to_string())
                .env("COCOCHAT_HEALTH_CHECK_TIMEOUT")
                .num_args(1)
                .help(format!("Time to wait in milliseconds before timing out when checking that the chat API is up. [default: {}]", Config::default(ConfigKey::HealthCheckTimeout)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Username.to_string())
                .long(ConfigKey::Username.to_string())
                .env("COCOCHAT_USERNAME")
                .num_args(1)
                .help("Your user name displayed in all chat bubbles. [default: $USER]")
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::BotName.to_string())
                .long(ConfigKey::BotName.to_string())
                .env("COCOCHAT_BOT_NAME")
                .num_args(1)
                .help(format!("Name displayed on the chat bubbles of the assistant. [default: {}]", Config::default(ConfigKey::BotName)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Greeting.to_string())
                .long(ConfigKey::Greeting.to_string())
                .env("COCOCHAT_GREETING")
                .num_args(1)
                .help("First message shown by the assistant when the chat starts.")
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Placeholder.to_string())
                .long(ConfigKey::Placeholder.to_string())
                .env("COCOCHAT_PLACEHOLDER")
                .num_args(1)
                .help("Text shown when the chat API answers without a reply.")
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("COCOCHAT_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true),
        );
}

/// Handles every subcommand that doesn't need the chat UI. Returns true when
/// the UI should start.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("ask", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            let as_json = subcmd_matches.get_flag("json");
            ask(&BackendManager::get(), &ask_text(subcmd_matches), as_json).await?;
            return Ok(false);
        }
        Some(("chat", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
            return Ok(false);
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("log-path", _)) => {
                    let log_path = debug_log_dir().join("debug.log");
                    println!("{}", log_path.to_string_lossy());
                }
                Some(("enum-config", _)) => {
                    println!("{}", ConfigKey::VARIANTS.join("\n"));
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(false);
        }
        Some(("manpages", _)) => {
            clap_mangen::Man::new(build()).render(&mut io::stdout())?;
            return Ok(false);
        }
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(true);
}
