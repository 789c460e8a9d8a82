use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    pub db_path: String,
    /// Directory holding vectorizer.json and model.json
    pub model_dir: PathBuf,
    /// Base URL the trained artifacts are published under (SPAMSIEVE_MODEL_URL)
    pub model_url: Option<String>,
    /// Secret for HMAC session token signing (SPAMSIEVE_SESSION_SECRET env var)
    #[cfg(feature = "web")]
    pub session_secret: String,
    /// Add the Secure flag to session cookies (SPAMSIEVE_SECURE_COOKIES=true)
    #[cfg(feature = "web")]
    pub secure_cookies: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default except the model URL and session secret,
    /// which are only checked by the commands that need them.
    pub fn load() -> Result<Self> {
        let model_dir = env::var("SPAMSIEVE_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| crate::classifier::download::default_model_dir());

        #[cfg(feature = "web")]
        let session_secret = env::var("SPAMSIEVE_SESSION_SECRET").unwrap_or_default();
        #[cfg(feature = "web")]
        let secure_cookies = matches!(
            env::var("SPAMSIEVE_SECURE_COOKIES").as_deref(),
            Ok("1") | Ok("true") | Ok("yes")
        );

        Ok(Self {
            db_path: env::var("SPAMSIEVE_DB_PATH")
                .unwrap_or_else(|_| "./spamsieve.db".to_string()),
            model_dir,
            model_url: env::var("SPAMSIEVE_MODEL_URL")
                .ok()
                .filter(|url| !url.is_empty()),
            #[cfg(feature = "web")]
            session_secret,
            #[cfg(feature = "web")]
            secure_cookies,
        })
    }

    /// Resolve the artifact base URL, preferring an explicit override.
    /// Call this before `download-model`.
    pub fn require_model_url(&self, override_url: Option<String>) -> Result<String> {
        match override_url.or_else(|| self.model_url.clone()) {
            Some(url) => Ok(url),
            None => anyhow::bail!(
                "No model URL given. Pass --url or set SPAMSIEVE_MODEL_URL in your .env file.\n\
                 See .env.example for the available variables."
            ),
        }
    }

    /// Check that the model artifacts are in place.
    /// The server starts without them; the CLI classify command does not.
    pub fn require_model(&self) -> Result<()> {
        if !crate::classifier::artifacts::model_files_present(&self.model_dir) {
            anyhow::bail!(
                "Model artifacts not found in {}\n\
                 Run `spamsieve download-model` to fetch them, or set SPAMSIEVE_MODEL_DIR.",
                self.model_dir.display()
            );
        }
        Ok(())
    }

    /// Check that a usable session secret is configured.
    /// Call this before starting the web server.
    #[cfg(feature = "web")]
    pub fn require_session_secret(&self) -> Result<()> {
        if self.session_secret.len() < 32 {
            anyhow::bail!(
                "SPAMSIEVE_SESSION_SECRET must be set to at least 32 characters.\n\
                 Generate one with: openssl rand -hex 32"
            );
        }
        Ok(())
    }
}
