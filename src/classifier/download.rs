// Model artifact download.
//
// Fetches vectorizer.json and model.json from a base URL (wherever the
// training job publishes them) into the model directory. Files are stored in
// a platform-appropriate directory (~/.local/share/spamsieve/models/ on
// Linux) unless SPAMSIEVE_MODEL_DIR says otherwise.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use super::artifacts::{MODEL_FILE, VECTORIZER_FILE};

/// Returns the default directory for storing model artifacts.
pub fn default_model_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("spamsieve")
        .join("models")
}

/// URL of a single artifact under `base_url`.
pub fn artifact_url(base_url: &str, file: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), file)
}

/// Download both artifacts. Skips files that already exist and creates the
/// directory as needed.
pub async fn download_model(base_url: &str, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create model directory: {}", dir.display()))?;

    for file in [VECTORIZER_FILE, MODEL_FILE] {
        let dest = dir.join(file);
        if dest.exists() {
            info!(file, "Artifact already exists, skipping");
            println!("  {} (already exists)", file);
            continue;
        }
        println!("  Downloading {}...", file);
        download_file(&artifact_url(base_url, file), &dest).await?;
    }

    Ok(())
}

async fn download_file(url: &str, dest: &Path) -> Result<()> {
    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to download {}", url))?;

    if !response.status().is_success() {
        anyhow::bail!("Download failed with status {}: {}", response.status(), url);
    }

    let pb = match response.content_length() {
        Some(size) => {
            let pb = ProgressBar::new(size);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("    [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                    .context("Invalid progress bar template")?
                    .progress_chars("=> "),
            );
            pb
        }
        None => {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("    {spinner} {bytes}")
                    .context("Invalid progress bar template")?,
            );
            pb
        }
    };

    let bytes = response
        .bytes()
        .await
        .context("Failed to read response body")?;
    pb.set_position(bytes.len() as u64);

    // Only bodies that parse as JSON are written to disk.
    serde_json::from_slice::<serde_json::Value>(&bytes)
        .with_context(|| format!("{} did not return JSON", url))?;

    std::fs::write(dest, &bytes).with_context(|| format!("Failed to write {}", dest.display()))?;
    pb.finish_and_clear();

    info!("Downloaded {} to {}", url, dest.display());
    Ok(())
}
