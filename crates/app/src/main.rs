use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{CatalogConfig, QuizCatalog};
use services::{Clock, QuizLoopService};
use sources::{FileSource, HttpSource, QuestionSource};
use tracing_subscriber::EnvFilter;
use ui::{App, DEFAULT_ANSWER_DELAY, UiApp, build_app_context};
use url::Url;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDelay { raw: String },
    InvalidBaseUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDelay { raw } => write!(f, "invalid --answer-delay-ms value: {raw}"),
            ArgsError::InvalidBaseUrl { raw } => write!(f, "invalid --base-url value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Debug)]
struct CheckFailed {
    failures: usize,
}

impl fmt::Display for CheckFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} question set(s) failed to load", self.failures)
    }
}

impl std::error::Error for CheckFailed {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    quiz_loop: Arc<QuizLoopService>,
    answer_delay: Duration,
}

impl UiApp for DesktopApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn answer_delay(&self) -> Duration {
        self.answer_delay
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    assets_dir: PathBuf,
    base_url: Option<String>,
    catalog: Option<PathBuf>,
    answer_delay: Duration,
    verbose: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [options]");
    eprintln!("  cargo run -p app -- check [options]   # load every set and report counts");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --assets <dir>           directory set paths resolve against (default .)");
    eprintln!("  --base-url <url>         fetch sets over HTTP instead of from disk");
    eprintln!("  --catalog <file.json>    catalog of sets (default: Set 1..30, first 20 aggregated)");
    eprintln!("  --answer-delay-ms <n>    test mode pause before the next question (default 300)");
    eprintln!("  --verbose, -v            debug logging unless RUST_LOG is set");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_ASSETS_DIR, QUIZ_BASE_URL, QUIZ_CATALOG, QUIZ_ANSWER_DELAY_MS, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

impl Args {
    /// Flags win over environment values, which win over defaults.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut assets_dir = env("QUIZ_ASSETS_DIR").map_or_else(|| PathBuf::from("."), PathBuf::from);
        let mut base_url = env("QUIZ_BASE_URL").map(parse_base_url).transpose()?;
        let mut catalog = env("QUIZ_CATALOG").map(PathBuf::from);
        let mut answer_delay = env("QUIZ_ANSWER_DELAY_MS")
            .map(parse_delay)
            .transpose()?
            .unwrap_or(DEFAULT_ANSWER_DELAY);
        let mut verbose = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--assets" => assets_dir = PathBuf::from(require_value(args, "--assets")?),
                "--base-url" => base_url = Some(parse_base_url(require_value(args, "--base-url")?)?),
                "--catalog" => catalog = Some(PathBuf::from(require_value(args, "--catalog")?)),
                "--answer-delay-ms" => {
                    answer_delay = parse_delay(require_value(args, "--answer-delay-ms")?)?;
                }
                "--verbose" | "-v" => verbose = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            assets_dir,
            base_url,
            catalog,
            answer_delay,
            verbose,
        })
    }
}

fn parse_delay(raw: String) -> Result<Duration, ArgsError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ArgsError::InvalidDelay { raw })
}

fn parse_base_url(raw: String) -> Result<String, ArgsError> {
    match Url::parse(raw.trim()) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {
            Ok(raw.trim().trim_end_matches('/').to_string())
        }
        _ => Err(ArgsError::InvalidBaseUrl { raw }),
    }
}

fn load_catalog(path: Option<&PathBuf>) -> Result<QuizCatalog, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(QuizCatalog::default());
    };
    let raw = std::fs::read(path)?;
    let config: CatalogConfig = serde_json::from_slice(&raw)?;
    let catalog = config.into_catalog()?;
    tracing::debug!(path = %path.display(), sets = catalog.sets().len(), "catalog loaded");
    Ok(catalog)
}

fn build_source(args: &Args) -> Arc<dyn QuestionSource> {
    match &args.base_url {
        Some(base_url) => {
            tracing::info!(%base_url, "fetching question sets over HTTP");
            Arc::new(HttpSource::new(base_url.clone()))
        }
        None => {
            tracing::info!(root = %args.assets_dir.display(), "reading question sets from disk");
            Arc::new(FileSource::new(args.assets_dir.clone()))
        }
    }
}

async fn check(quiz_loop: &QuizLoopService) -> Result<(), CheckFailed> {
    let loader = quiz_loop.loader();
    let mut failures = 0;

    for (index, set) in loader.catalog().sets().iter().enumerate() {
        match loader.load_set(index).await {
            Ok(loaded) => println!("{}: {} questions", set.label, loaded.len()),
            Err(err) => {
                failures += 1;
                eprintln!("{}: {err}", set.label);
            }
        }
    }

    let aggregate_label = loader.catalog().aggregate_label().to_string();
    match loader.load_aggregate().await {
        Ok(loaded) => println!("{aggregate_label}: {} questions", loaded.len()),
        Err(err) => {
            failures += 1;
            eprintln!("{aggregate_label}: {err}");
        }
    }

    if failures == 0 {
        Ok(())
    } else {
        Err(CheckFailed { failures })
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with('-') => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with('-') {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let default_level = if parsed.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let catalog = Arc::new(load_catalog(parsed.catalog.as_ref())?);
    let source = build_source(&parsed);
    let quiz_loop = Arc::new(QuizLoopService::new(Clock::system(), source, catalog));

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                quiz_loop,
                answer_delay: parsed.answer_delay,
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Quiz")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Check => {
            check(&quiz_loop).await?;
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
