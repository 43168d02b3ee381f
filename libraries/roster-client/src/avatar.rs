//! Avatar file to data URI conversion.

use crate::error::{ClientError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tracing::debug;

/// Read an image file and encode it as a `data:` URI.
///
/// Only image types are accepted; the size is not checked.
pub async fn read_avatar_data_uri(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ClientError::FileNotFound(path.display().to_string()));
    }

    let mime = mime_type_for_file(path)
        .ok_or_else(|| ClientError::UnsupportedAvatar(path.display().to_string()))?;

    let mut file = File::open(path).await?;
    let mut contents = Vec::new();
    file.read_to_end(&mut contents).await?;

    debug!(file = %path.display(), bytes = contents.len(), mime, "Encoded avatar");

    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(&contents)))
}

/// Image MIME type from the file extension, `None` for anything else.
pub fn mime_type_for_file(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();

    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}
