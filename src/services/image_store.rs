use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::utils::consts::DEFAULT_PROFILE_IMAGE;

/// Blob store for uploaded profile images, addressable by the public
/// `/images/<file>` path that ends up in the user record. Files live in a
/// flat upload directory which is created at startup and served by
/// `ServeDir`.
pub struct ImageStore {
    upload_dir: PathBuf,
}

impl ImageStore {
    pub fn new(upload_dir: &str) -> io::Result<Self> {
        let upload_dir = PathBuf::from(upload_dir);
        std::fs::create_dir_all(&upload_dir)?;
        Ok(Self { upload_dir })
    }

    /// Write `bytes` under a fresh unique name and return the public path.
    /// The original filename only contributes its extension; uploads never
    /// collide or overwrite each other.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> io::Result<String> {
        let extension = Path::new(original_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("jpg");
        let file_name = format!("{}.{}", Uuid::new_v4(), extension);

        tokio::fs::write(self.upload_dir.join(&file_name), bytes).await?;
        Ok(format!("/images/{}", file_name))
    }

    /// Remove a previously stored image. The default image is shared by
    /// every account without an upload and is never deleted. A path that
    /// is already gone is not an error.
    pub async fn delete(&self, public_path: &str) -> io::Result<()> {
        if public_path == DEFAULT_PROFILE_IMAGE {
            return Ok(());
        }
        let Some(file_name) = public_path.strip_prefix("/images/") else {
            return Ok(());
        };

        match tokio::fs::remove_file(self.upload_dir.join(file_name)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}
