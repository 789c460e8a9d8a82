// System status display: shows DB stats and model availability.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::sync::Arc;

use crate::classifier::artifacts::ModelState;
use crate::db::Database;

/// Display system status to the terminal.
///
/// `db` is `None` when the database hasn't been initialized yet; the model
/// section is shown either way.
pub async fn show(
    db: Option<&Arc<dyn Database>>,
    db_path: &str,
    model_dir: &Path,
    model: &ModelState,
) -> Result<()> {
    match db {
        Some(db) if Path::new(db_path).exists() => {
            let file_size = std::fs::metadata(db_path)
                .map(|m| format_bytes(m.len()))
                .unwrap_or_else(|_| "unknown".to_string());
            println!("Database: {} ({})", db_path, file_size);
            println!("Users: {}", db.user_count().await?);
        }
        _ => {
            println!("Database: not initialized");
            println!("  Run `spamsieve init` to set up the database.");
        }
    }

    println!("Model directory: {}", model_dir.display());
    match model {
        ModelState::Loaded(model) => {
            println!("Model: {}", "loaded".green());
            println!("  Classifier: {}", model.classifier.name());
            println!(
                "  Vectorizer: {:?}, {} terms",
                model.vectorizer.weighting(),
                model.vectorizer.vocabulary_len()
            );
            println!("  Pipeline: {}", model.vectorizer.text_pipeline());
            if model.classifier.n_features() != model.vectorizer.vocabulary_len() {
                println!(
                    "  {} classifier expects {} features; predictions will fail",
                    "!!".red().bold(),
                    model.classifier.n_features()
                );
            }
        }
        ModelState::Unavailable { reason } => {
            println!("Model: {}", "unavailable".red());
            for line in reason.lines() {
                println!("  {}", line.dimmed());
            }
        }
    }

    Ok(())
}

pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
