use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use medisia_core::Clock;
use services::{ContentService, DEFAULT_QUOTE_COUNT};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt as tracing_fmt};
use ui::{App, UiApp, WizardConfig, build_app_context};

const LOG_ENV: &str = "MEDISIA_LOG";
const QUOTES_ENV: &str = "MEDISIA_QUOTES";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidQuoteCount { raw: String },
    EmptyName,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidQuoteCount { raw } => {
                write!(f, "invalid quote count (expected a positive number): {raw}")
            }
            ArgsError::EmptyName => write!(f, "--name must not be blank"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_quote_count(raw: String) -> Result<usize, ArgsError> {
    match raw.trim().parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(ArgsError::InvalidQuoteCount { raw }),
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--name <text>] [--quotes <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --quotes {DEFAULT_QUOTE_COUNT}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {QUOTES_ENV}, {LOG_ENV} (tracing filter, default: info)");
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(Args),
    Help,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    initial_name: Option<String>,
    quote_count: usize,
}

impl Args {
    /// Flags win over the environment value passed in `env_quotes`.
    fn parse(
        args: impl IntoIterator<Item = String>,
        env_quotes: Option<String>,
    ) -> Result<Command, ArgsError> {
        let mut quote_count = match env_quotes {
            Some(raw) => parse_quote_count(raw)?,
            None => DEFAULT_QUOTE_COUNT,
        };
        let mut initial_name = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--name" => {
                    let value = require_value(&mut args, "--name")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyName);
                    }
                    initial_name = Some(value);
                }
                "--quotes" => {
                    let value = require_value(&mut args, "--quotes")?;
                    quote_count = parse_quote_count(value)?;
                }
                "--help" | "-h" => return Ok(Command::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Command::Run(Self {
            initial_name,
            quote_count,
        }))
    }
}

struct DesktopApp {
    clock: Clock,
    config: WizardConfig,
    content: Arc<ContentService>,
}

impl UiApp for DesktopApp {
    fn clock(&self) -> Clock {
        self.clock
    }

    fn config(&self) -> WizardConfig {
        self.config.clone()
    }

    fn content(&self) -> Arc<ContentService> {
        Arc::clone(&self.content)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tracing_fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let env_quotes = std::env::var(QUOTES_ENV).ok();
    let command = Args::parse(std::env::args().skip(1), env_quotes).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let args = match command {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Run(args) => args,
    };

    init_tracing();
    tracing::info!(
        quote_count = args.quote_count,
        prefilled_name = args.initial_name.is_some(),
        "starting medisia"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        clock: Clock::system(),
        config: WizardConfig {
            initial_name: args.initial_name,
        },
        content: Arc::new(ContentService::new().with_quote_count(args.quote_count)),
    });
    let context = build_app_context(&app);

    // Keep the window a normal, non-floating window across platforms.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Medisia")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
