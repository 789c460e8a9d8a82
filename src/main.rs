use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::Path;
use tracing::info;

use spamsieve::classifier::artifacts::ModelState;
use spamsieve::config::Config;
use spamsieve::prediction::PredictionService;

/// spamsieve: spam detection for short text messages.
///
/// Normalizes a message, vectorizes it with a trained bag-of-words model,
/// and reports whether it looks like spam.
#[derive(Parser)]
#[command(name = "spamsieve", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database
    Init,

    /// Show how a message is normalized before vectorization
    Normalize {
        /// The raw message text
        text: String,
    },

    /// Classify a single message as spam or ham
    Classify {
        /// The raw message text
        text: String,
    },

    /// Create a local account for the web API
    AddUser {
        /// Account email
        email: String,

        /// Account password
        #[arg(long)]
        password: String,
    },

    /// Download the trained vectorizer and classifier artifacts
    DownloadModel {
        /// Base URL the artifacts are published under (overrides SPAMSIEVE_MODEL_URL)
        #[arg(long)]
        url: Option<String>,
    },

    /// Show system status (DB stats, model availability)
    Status,

    /// Start the JSON API server
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "3000")]
        port: u16,

        /// Address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("spamsieve=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            info!("Initializing spamsieve database...");
            let config = Config::load()?;
            let db = spamsieve::db::initialize_sqlite(&config.db_path)?;
            let table_count = db.table_count().await?;
            println!("Database initialized at: {}", config.db_path);
            println!("Tables created: {table_count}");

            if spamsieve::classifier::artifacts::model_files_present(&config.model_dir) {
                println!("\nModel found in {}", config.model_dir.display());
                println!("spamsieve is ready. Try: spamsieve classify \"Free prize!\"");
            } else {
                println!("\nNo model found in {}", config.model_dir.display());
                println!("Next step: run `spamsieve download-model --url <base-url>`");
                println!("  (or point SPAMSIEVE_MODEL_DIR at assets/sample-model)");
            }
        }

        Commands::Normalize { text } => {
            // Use the pipeline the installed model was trained with, if any.
            let config = Config::load()?;
            let model = ModelState::load(&config.model_dir);
            match model.model() {
                Some(model) => {
                    let normalized = model.normalizer.normalize(&text);
                    spamsieve::output::terminal::display_normalization(
                        &text,
                        &normalized,
                        model.normalizer.pipeline(),
                    );
                }
                None => {
                    let normalized = spamsieve::text::normalize(&text);
                    spamsieve::output::terminal::display_normalization(
                        &text,
                        &normalized,
                        spamsieve::text::TextPipeline::default(),
                    );
                }
            }
        }

        Commands::Classify { text } => {
            let config = Config::load()?;
            config.require_model()?;
            let predictor = PredictionService::new(ModelState::load(&config.model_dir));

            match predictor.predict(&text) {
                Ok(verdict) => spamsieve::output::terminal::display_verdict(&text, &verdict),
                Err(e) => {
                    spamsieve::output::terminal::display_prediction_error(&e);
                    std::process::exit(1);
                }
            }
        }

        Commands::AddUser { email, password } => {
            let config = Config::load()?;
            let db = spamsieve::db::open_sqlite(&config.db_path)?;
            let user = spamsieve::users::register(&db, &email, &password).await?;
            println!("{} Created account {} (id {})", "✓".green(), user.email, user.id);
        }

        Commands::DownloadModel { url } => {
            let config = Config::load()?;
            let base_url = config.require_model_url(url)?;
            let model_dir = &config.model_dir;

            println!("Downloading model artifacts...");
            println!("  Source: {}", base_url);
            println!("  Destination: {}", model_dir.display());

            spamsieve::classifier::download::download_model(&base_url, model_dir).await?;

            // Verify the downloaded pair loads together.
            match ModelState::load(model_dir) {
                ModelState::Loaded(_) => {
                    println!("\n{}", "Model downloaded successfully.".bold());
                    println!("You can now run `spamsieve classify \"...\"` or `spamsieve serve`.");
                }
                ModelState::Unavailable { reason } => {
                    anyhow::bail!("Downloaded artifacts failed to load: {reason}");
                }
            }
        }

        Commands::Status => {
            let config = Config::load()?;
            let db = if Path::new(&config.db_path).exists() {
                Some(spamsieve::db::open_sqlite(&config.db_path)?)
            } else {
                None
            };
            let model = ModelState::load(&config.model_dir);
            spamsieve::status::show(db.as_ref(), &config.db_path, &config.model_dir, &model)
                .await?;
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            config.require_session_secret()?;
            let db = spamsieve::db::initialize_sqlite(&config.db_path)?;

            // A missing model doesn't stop the server; /api/predict reports it.
            let model = ModelState::load(&config.model_dir);
            if !model.is_loaded() {
                println!(
                    "{}",
                    "Warning: no usable model loaded. /api/predict will return 503.".yellow()
                );
            }

            let state = spamsieve::web::AppState::new(config, db, PredictionService::new(model));
            let db_users = state.db.user_count().await?;
            info!(users = db_users, "Starting web server");
            spamsieve::web::run_server(state, port, &bind).await?;
        }
    }

    Ok(())
}
