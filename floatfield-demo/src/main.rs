//! Interactive demo form built from floating label text fields.

mod app;
mod keymap;
mod terminal;
mod validation;

use std::{fs::File, path::PathBuf, str::FromStr, sync::Mutex, time::Duration};

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Report, Result, WrapErr};
use floatfield::{ErrorStyle, FieldConfig, TextBinding, load_field_config};
use ratatui::style::Color;
use serde_json::{Map, Value};
use tracing_subscriber::EnvFilter;

use app::{App, AppOptions, FormField, Outcome};

#[derive(Debug, Parser)]
#[command(
    name = "floatfield",
    version,
    about = "Try out floating label text fields in the terminal"
)]
struct Cli {
    /// Field titles, one field per flag use
    #[arg(short = 'f', long = "field", value_name = "TITLE", action = ArgAction::Append)]
    fields: Vec<String>,

    /// Initial text of the first field
    #[arg(short = 't', long = "text", value_name = "TEXT")]
    text: Option<String>,

    /// Prompt shown in every empty, revealed input
    #[arg(short = 'p', long = "placeholder", value_name = "TEXT")]
    placeholder: Option<String>,

    /// Fixed error message shown under the first field
    #[arg(short = 'e', long = "error", value_name = "MESSAGE")]
    error: Option<String>,

    /// Validate every field as an email address while typing
    #[arg(long = "validate-email")]
    validate_email: bool,

    /// Hide the clear button
    #[arg(long = "no-clear-button")]
    no_clear_button: bool,

    /// Border color of idle fields (name such as "gray" or hex such as "#444444")
    #[arg(long = "border-color", value_name = "COLOR", value_parser = parse_color)]
    border_color: Option<Color>,

    /// Base field config document (JSON, or YAML/TOML when enabled)
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Event poll interval in milliseconds
    #[arg(long = "tick-rate-ms", value_name = "MS", default_value_t = 50)]
    tick_rate_ms: u64,

    /// Write debug logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn parse_color(raw: &str) -> Result<Color, String> {
    Color::from_str(raw).map_err(|err| format!("invalid color '{raw}': {err}"))
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let base = base_config(&cli)?;
    let fields = build_fields(&cli, &base);
    let mut app = App::new(
        fields,
        AppOptions {
            tick_rate: Duration::from_millis(cli.tick_rate_ms.max(1)),
            validate_email: cli.validate_email,
        },
    );

    match app.run()? {
        Outcome::Submitted => {
            let values = app
                .fields()
                .iter()
                .map(|field| (field.title().to_string(), Value::String(field.binding.get())))
                .collect::<Map<_, _>>();
            println!("{}", serde_json::to_string_pretty(&Value::Object(values))?);
        }
        Outcome::Cancelled => tracing::info!("form cancelled"),
    }
    Ok(())
}

fn init_logging(path: Option<&PathBuf>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("floatfield=debug,floatfield_demo=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn base_config(cli: &Cli) -> Result<FieldConfig> {
    let mut config = match &cli.config {
        Some(path) => load_field_config(path).map_err(Report::msg)?,
        None => FieldConfig::titled("Email"),
    };
    if cli.no_clear_button {
        config = config.with_clear_button(false);
    }
    if let Some(color) = cli.border_color {
        config = config.with_border_color(color);
    }
    if let Some(placeholder) = &cli.placeholder {
        config = config.with_placeholder(placeholder.clone());
    }
    Ok(config)
}

fn build_fields(cli: &Cli, base: &FieldConfig) -> Vec<FormField> {
    let titles = if cli.fields.is_empty() {
        vec![base.title().text().to_string()]
    } else {
        cli.fields.clone()
    };

    titles
        .into_iter()
        .enumerate()
        .map(|(index, title)| {
            let first = index == 0;
            let title_style = base.title().clone().with_text(title);
            let mut config = base.clone().with_title(title_style);
            if first && let Some(message) = &cli.error {
                config = config.with_error(Some(ErrorStyle::new(message.clone())));
            } else if !first {
                config = config.with_error(None);
            }
            let text = if first {
                cli.text.clone().unwrap_or_default()
            } else {
                String::new()
            };
            FormField::new(TextBinding::new(text), config)
        })
        .collect()
}
