//! Client-side hashing and inline encoding of local files.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use sha2::{Digest, Sha256};

use docket_core::error::AppError;
use docket_service::UploadFile;

/// Lowercase hex SHA-256 digest of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// `data:<mime>;base64,<payload>` URL for inline upload.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Lowercased extension of `path`, or empty.
pub fn file_type(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default()
}

fn mime_for(file_type: &str) -> &'static str {
    match file_type {
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

/// Read and hash a local file.
///
/// The content is embedded inline unless `external_base` is given, in which
/// case the file is recorded as `{external_base}/{file name}`.
pub async fn describe_file(path: &Path, external_base: Option<&str>) -> Result<UploadFile, AppError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        AppError::validation(format!("Cannot read '{}': {e}", path.display()))
    })?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| AppError::validation(format!("'{}' has no file name", path.display())))?
        .to_string();
    let file_type = file_type(path);

    let data_source = match external_base {
        Some(base) => format!("{}/{file_name}", base.trim_end_matches('/')),
        None => data_url(mime_for(&file_type), &bytes),
    };

    Ok(UploadFile {
        hash: sha256_hex(&bytes),
        file_name,
        file_type,
        data_source,
    })
}
