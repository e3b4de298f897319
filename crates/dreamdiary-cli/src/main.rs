use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use dreamdiary_core::dream::DreamMood;
use dreamdiary_core::statistics::TimeRange;
use dreamdiary_infrastructure::DreamDiaryPaths;
use dreamdiary_interaction::ImageProvider;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

mod commands;

#[derive(Parser)]
#[command(name = "dreamdiary")]
#[command(
    about = "DreamDiary - dream journal with AI analysis and illustration",
    long_about = None
)]
struct Cli {
    /// Keep every file (settings, secrets, dreams, images, logs) under this directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new dream
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long, default_value = "Neutral")]
        mood: DreamMood,
        /// May be repeated
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// List dreams, newest first
    List,
    /// Show one dream with its analysis
    Show { id: Uuid },
    /// Delete a dream and its illustration
    Delete { id: Uuid },
    /// Analyze a dream with the local Ollama server
    Analyze { id: Uuid },
    /// Generate an illustration for a dream
    Image {
        id: Uuid,
        #[arg(long, value_enum, default_value_t = Provider::Openai)]
        provider: Provider,
    },
    /// Search title, content, tags and analysis
    Search {
        query: Option<String>,
        /// Exact tag match instead of free text
        #[arg(long, conflicts_with = "query")]
        tag: Option<String>,
    },
    /// List every tag in use
    Tags,
    /// Journal statistics
    Stats {
        /// week, month, three_months, six_months, year or all_time
        #[arg(long, default_value = "month")]
        range: TimeRange,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the current settings
    Show,
    /// Change one setting
    Set { key: String, value: String },
    /// Print a lucid dreaming tip for the selected technique
    Tip,
}

#[derive(Clone, Copy, ValueEnum)]
enum Provider {
    Openai,
    Huggingface,
}

impl From<Provider> for ImageProvider {
    fn from(provider: Provider) -> Self {
        match provider {
            Provider::Openai => ImageProvider::OpenAI,
            Provider::Huggingface => ImageProvider::HuggingFace,
        }
    }
}

/// Installs stderr and daily-rolling file logging. The returned guard must
/// stay alive for the file writer to flush.
fn init_logging(paths: &DreamDiaryPaths) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    std::fs::create_dir_all(paths.logs_dir())?;
    let file_appender = tracing_appender::rolling::daily(paths.logs_dir(), "dreamdiary.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(file_writer),
        )
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = DreamDiaryPaths::new(cli.data_dir.as_deref())?;
    let _guard = init_logging(&paths)?;
    let app = commands::AppContext::new(paths)?;

    match cli.command {
        Commands::Add {
            title,
            content,
            mood,
            tags,
        } => commands::dreams::add(&app, title, content, mood, tags).await?,
        Commands::List => commands::dreams::list(&app).await?,
        Commands::Show { id } => commands::dreams::show(&app, &id).await?,
        Commands::Delete { id } => commands::dreams::delete(&app, &id).await?,
        Commands::Analyze { id } => commands::ai::analyze(&app, &id).await?,
        Commands::Image { id, provider } => commands::ai::image(&app, &id, provider.into()).await?,
        Commands::Search { query, tag } => {
            commands::dreams::search(&app, query.as_deref(), tag.as_deref()).await?
        }
        Commands::Tags => commands::dreams::tags(&app).await?,
        Commands::Stats { range, json } => commands::stats::show(&app, range, json).await?,
        Commands::Settings { action } => match action {
            SettingsAction::Show => commands::settings::show(&app).await?,
            SettingsAction::Set { key, value } => {
                commands::settings::set(&app, &key, &value).await?
            }
            SettingsAction::Tip => commands::settings::tip(&app).await?,
        },
    }

    Ok(())
}
