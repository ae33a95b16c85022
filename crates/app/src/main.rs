use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use interview_core::Clock;
use interview_core::model::CategoryName;
use services::WorkspaceService;
use storage::{InMemoryWorkspace, QuestionLibrary};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
    InvalidCategory { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidCategory { raw } => write!(f, "invalid --category value: {raw:?}"),
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

struct DesktopApp {
    workspace_service: Arc<WorkspaceService>,
    open_interview_on_launch: bool,
}

impl UiApp for DesktopApp {
    fn workspace_service(&self) -> Arc<WorkspaceService> {
        Arc::clone(&self.workspace_service)
    }

    fn open_interview_on_launch(&self) -> bool {
        self.open_interview_on_launch
    }
}

#[derive(Debug, Default)]
struct Args {
    library: Option<PathBuf>,
    categories: Vec<CategoryName>,
    seed: Option<u64>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--library <path>] [--category <name>]... [--seed <u64>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --library  bundled sample library");
    eprintln!("  --category none, pick categories on the start screen");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  INTERVIEW_LIBRARY, INTERVIEW_SEED, INTERVIEW_LOG (tracing filter, default info)");
}

fn parse_seed(raw: String) -> Result<u64, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidSeed { raw })
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            library: std::env::var_os("INTERVIEW_LIBRARY").map(PathBuf::from),
            categories: Vec::new(),
            seed: std::env::var("INTERVIEW_SEED").ok().map(parse_seed).transpose()?,
        };

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--library" => {
                    parsed.library = Some(PathBuf::from(require_value(&mut args, "--library")?));
                }
                "--category" => {
                    let value = require_value(&mut args, "--category")?;
                    let name = CategoryName::new(value.clone())
                        .map_err(|_| ArgsError::InvalidCategory { raw: value })?;
                    if !parsed.categories.contains(&name) {
                        parsed.categories.push(name);
                    }
                }
                "--seed" => {
                    parsed.seed = Some(parse_seed(require_value(&mut args, "--seed")?)?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("INTERVIEW_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse(std::env::args().skip(1)).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let library = match &args.library {
        Some(path) => QuestionLibrary::from_path(path)?,
        None => QuestionLibrary::sample()?,
    };

    let service = WorkspaceService::new(Clock::system(), library, Arc::new(InMemoryWorkspace::new()))
        .with_seed(args.seed);

    let open_interview_on_launch = if args.categories.is_empty() {
        false
    } else {
        let remaining = service.select(&args.categories).await?;
        tracing::info!(remaining, "categories preselected from the command line");
        true
    };

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        workspace_service: Arc::new(service),
        open_interview_on_launch,
    });
    let context = build_app_context(&app);

    // Some dev setups default to an always-on-top window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Interview")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        tracing::error!(error = %err, "interview app failed to start");
        eprintln!("{err}");
        std::process::exit(2);
    }
}
