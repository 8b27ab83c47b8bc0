use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::QuestionBank;
use services::{
    AppServices, Clock, IdentityService, QuizService, ThemeService, default_bank,
    load_bank_from_path,
};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://quiz.sqlite3";

#[derive(Debug)]
enum ArgsError {
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Parser, Debug)]
#[command(
    name = "app",
    version,
    about = "Topic quiz desktop app",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    // Launching the UI is the default when no subcommand is given.
    #[command(flatten)]
    ui: UiArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Launch the desktop UI
    Ui(UiArgs),

    /// Load and validate a question bank, then list its topics
    CheckBank {
        /// Question bank JSON file
        #[arg(long, env = "QUIZ_BANK_PATH")]
        bank: PathBuf,
    },
}

#[derive(Args, Debug)]
struct UiArgs {
    /// SQLite URL or file path for preferences
    #[arg(long = "db", env = "QUIZ_DB_URL", default_value = DEFAULT_DB_URL)]
    db_url: String,

    /// Question bank JSON file (built-in bank when omitted)
    #[arg(long, env = "QUIZ_BANK_PATH")]
    bank: Option<PathBuf>,
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn quiz(&self) -> Arc<QuizService> {
        self.services.quiz()
    }

    fn identity(&self) -> Arc<IdentityService> {
        self.services.identity()
    }

    fn theme(&self) -> Arc<ThemeService> {
        self.services.theme()
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn load_bank(path: Option<&Path>) -> Result<QuestionBank, Box<dyn std::error::Error>> {
    let bank = match path {
        Some(path) => load_bank_from_path(path)?,
        None => default_bank()?,
    };
    Ok(bank)
}

fn check_bank(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let bank = load_bank(Some(path))?;
    for topic in bank.iter() {
        println!("{}: {} question(s)", topic.name(), topic.question_count());
    }
    println!("{} topic(s) OK", bank.len());
    Ok(())
}

async fn launch_ui(args: UiArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.db_url.trim().is_empty() {
        return Err(ArgsError::InvalidDbUrl { raw: args.db_url }.into());
    }
    let db_url = normalize_sqlite_url(args.db_url);

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&db_url)?;
    let bank = load_bank(args.bank.as_deref())?;
    let services = AppServices::new_sqlite(&db_url, bank, Clock::default_clock()).await?;
    tracing::info!(db = %db_url, "launching desktop ui");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Topic Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    match cli.command {
        Some(Command::CheckBank { bank }) => check_bank(&bank),
        Some(Command::Ui(args)) => launch_ui(args).await,
        None => launch_ui(cli.ui).await,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
