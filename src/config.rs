//! Command-line and environment configuration.
//!
//! Every flag can also be supplied through the environment variable named
//! next to it, which is how the Hugging Face key normally arrives:
//!
//! ```bash
//! HF_API_KEY=hf_xxx fit-analyzer --port 3000
//! ```

use crate::classifier::DEFAULT_ENDPOINT;
use clap::Parser;
use std::path::PathBuf;

/// 200 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 200 * 1024 * 1024;

#[derive(Parser, Debug, Clone)]
#[command(name = "fit-analyzer", about = "Scores outfit photos using an image classifier")]
pub struct Args {
    /// Bearer token for the classification API
    #[arg(long, env = "HF_API_KEY", hide_env_values = true)]
    pub hf_api_key: String,

    /// Address to bind the HTTP server to
    #[arg(long, env = "FIT_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "FIT_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Classification model endpoint
    #[arg(long, env = "FIT_CLASSIFIER_URL", default_value = DEFAULT_ENDPOINT)]
    pub classifier_url: String,

    /// Parent directory for per-request upload spools (system temp dir if unset)
    #[arg(long, env = "FIT_UPLOAD_DIR")]
    pub upload_dir: Option<PathBuf>,

    /// Largest accepted `file` part, in bytes
    #[arg(long, env = "FIT_MAX_FILE_SIZE", default_value_t = DEFAULT_MAX_FILE_SIZE)]
    pub max_file_size: u64,
}

/// Where uploads are spooled and how large they may get.
#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub root: PathBuf,
    pub max_file_size: u64,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            root: std::env::temp_dir(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl From<&Args> for UploadSettings {
    fn from(args: &Args) -> Self {
        Self {
            root: args.upload_dir.clone().unwrap_or_else(std::env::temp_dir),
            max_file_size: args.max_file_size,
        }
    }
}
