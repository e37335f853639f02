mod menu;

use clap::{Parser, Subcommand};
use gemini_agent::GeminiClient;
use skillforge_core::{Config, FirestoreStore, Workflow};

#[derive(Parser)]
#[command(
    name = "skillforge",
    about = "SkillForge — intelligent career path builder",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the web UI
    Serve {
        /// Port to listen on (0 = OS-assigned)
        #[arg(long, default_value = "0")]
        port: u16,

        /// Don't open browser automatically
        #[arg(long)]
        no_open: bool,
    },
}

fn main() {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Some(Commands::Serve { .. }) => tracing::Level::INFO,
        None => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Some(Commands::Serve { port, no_open }) => serve(port, !no_open),
        None => menu::run(),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

/// Wire up the production workflow. A missing environment variable aborts
/// startup — this is the one unrecoverable failure.
fn build_workflow() -> anyhow::Result<Workflow> {
    let config = Config::from_env()?;
    let store = FirestoreStore::new(
        config.firestore_project_id.clone(),
        config.firestore_api_key.clone(),
    );
    let roadmap = GeminiClient::new(config.gemini_api_key, config.gemini_model);
    Ok(Workflow::new(Box::new(store), Box::new(roadmap)))
}

fn serve(port: u16, open_browser: bool) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let state = skillforge_server::AppState::from_config(&config);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
        skillforge_server::serve_on(state, listener, open_browser).await
    })
}
