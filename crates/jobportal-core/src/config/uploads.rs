//! Resume upload configuration.

use serde::{Deserialize, Serialize};

/// Where uploaded resumes live and how large they may be.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Root directory served publicly under `public_prefix`.
    #[serde(default = "default_root_dir")]
    pub root_dir: String,
    /// URL prefix the root directory is served under.
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,
    /// Maximum resume size in bytes (default 2 MB).
    #[serde(default = "default_resume_max")]
    pub resume_max_bytes: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
            public_prefix: default_public_prefix(),
            resume_max_bytes: default_resume_max(),
        }
    }
}

fn default_root_dir() -> String {
    "uploads".to_string()
}

fn default_public_prefix() -> String {
    "/uploads".to_string()
}

fn default_resume_max() -> u64 {
    2 * 1024 * 1024 // 2 MB
}
