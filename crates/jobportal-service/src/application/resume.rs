//! Resume file persistence.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

use jobportal_core::config::UploadConfig;
use jobportal_core::error::AppError;

/// The only accepted resume content type.
pub const PDF_MIME: &str = "application/pdf";

/// Subdirectory of the upload root holding resumes.
const RESUME_DIR: &str = "resumes";

/// A resume as received from the client.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    /// Client-supplied file name, used only for its extension.
    pub file_name: Option<String>,
    /// Declared content type.
    pub content_type: Option<String>,
    /// File contents.
    pub data: Bytes,
}

/// A resume written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredResume {
    /// Location on disk.
    pub path: PathBuf,
    /// Path under which the static file server exposes it.
    pub public_path: String,
}

/// Writes resumes under `{root_dir}/resumes/`.
#[derive(Debug, Clone)]
pub struct ResumeStorage {
    root_dir: PathBuf,
    public_prefix: String,
    max_bytes: u64,
}

impl ResumeStorage {
    /// Creates storage from upload configuration.
    pub fn new(config: &UploadConfig) -> Self {
        Self {
            root_dir: PathBuf::from(&config.root_dir),
            public_prefix: config.public_prefix.trim_end_matches('/').to_string(),
            max_bytes: config.resume_max_bytes,
        }
    }

    /// Rejects non-PDF content (`Validation`) and oversized files
    /// (`PayloadTooLarge`), in that order.
    pub fn validate(&self, upload: &ResumeUpload) -> Result<(), AppError> {
        if upload.content_type.as_deref() != Some(PDF_MIME) {
            return Err(AppError::validation("Only PDF files allowed"));
        }
        if upload.data.len() as u64 > self.max_bytes {
            return Err(AppError::payload_too_large(format!(
                "Resume exceeds the {} byte limit",
                self.max_bytes
            )));
        }
        Ok(())
    }

    /// Writes the file as `{applicant_id}-{unix_millis}{ext}`.
    pub async fn save(
        &self,
        applicant_id: Uuid,
        upload: &ResumeUpload,
    ) -> Result<StoredResume, AppError> {
        let file_name = format!(
            "{applicant_id}-{}{}",
            Utc::now().timestamp_millis(),
            extension_of(upload.file_name.as_deref())
        );
        let dir = self.root_dir.join(RESUME_DIR);
        tokio::fs::create_dir_all(&dir).await?;
        let path = dir.join(&file_name);
        tokio::fs::write(&path, &upload.data).await?;

        debug!(path = %path.display(), bytes = upload.data.len(), "Resume stored");

        Ok(StoredResume {
            path,
            public_path: format!("{}/{RESUME_DIR}/{file_name}", self.public_prefix),
        })
    }

    /// Best-effort removal of a stored resume.
    pub async fn remove(&self, stored: &StoredResume) {
        if let Err(e) = tokio::fs::remove_file(&stored.path).await {
            warn!(path = %stored.path.display(), error = %e, "Failed to remove resume");
        }
    }
}

/// `.ext` of the client file name, or empty when it has none.
fn extension_of(file_name: Option<&str>) -> String {
    file_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}
