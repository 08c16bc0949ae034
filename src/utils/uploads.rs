use std::path::{Path, PathBuf};

use actix_multipart::form::tempfile::TempFile;
use actix_web::web;
use tracing::{error, info};

use crate::types::error::AppError;

/// Last path component of a client-supplied file name, if it is usable.
pub fn sanitize_file_name(name: &str) -> Option<String> {
    let name = name.rsplit(|c| c == '/' || c == '\\').next()?.trim();
    if name.is_empty() || name == "." || name == ".." {
        return None;
    }
    Some(name.to_string())
}

/// Copies an uploaded picture into `dir` under its client-side name and
/// returns that name. An empty file part (no file picked) stores nothing.
pub async fn store_picture(dir: &Path, file: TempFile) -> Result<Option<String>, AppError> {
    let Some(name) = file.file_name.as_deref().and_then(sanitize_file_name) else {
        return Ok(None);
    };
    if file.size == 0 {
        return Ok(None);
    }

    let dir: PathBuf = dir.to_path_buf();
    let dest = dir.join(&name);
    web::block(move || {
        std::fs::create_dir_all(&dir)?;
        std::fs::copy(file.file.path(), &dest).map(|_| ())
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))?
    .map_err(|e| {
        error!("Failed storing upload {}: {}", name, e);
        AppError::Internal("could not store upload".into())
    })?;

    info!("Stored upload {}", name);
    Ok(Some(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_lose_their_directories() {
        assert_eq!(sanitize_file_name("p1.jpeg").as_deref(), Some("p1.jpeg"));
        assert_eq!(sanitize_file_name("../../etc/passwd").as_deref(), Some("passwd"));
        assert_eq!(sanitize_file_name("C:\\photos\\me.png").as_deref(), Some("me.png"));
    }

    #[test]
    fn unusable_file_names() {
        assert_eq!(sanitize_file_name(""), None);
        assert_eq!(sanitize_file_name("uploads/"), None);
        assert_eq!(sanitize_file_name(".."), None);
    }
}
