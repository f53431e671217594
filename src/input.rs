//! Reading import files from disk.
//!
//! The catalog only consumes a text blob; this is the edge that produces it.

use crate::error::{CatalogError, Result};
use std::path::Path;

/// Check that `path` names an existing regular file.
pub fn validate_file_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let metadata = std::fs::metadata(path)
        .map_err(|e| CatalogError::file_error("Failed to read file metadata", e))?;

    if !metadata.is_file() {
        return Err(CatalogError::file_error(
            format!("Path is not a file: {}", path.display()),
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "Not a file"),
        ));
    }

    Ok(())
}

/// Read a whole import file as UTF-8 text.
///
/// A leading byte order mark is dropped so the first header is recognized.
pub async fn read_import_file(path: &Path) -> Result<String> {
    validate_file_path(path)?;

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| CatalogError::file_error(format!("Cannot read {}", path.display()), e))?;

    let text = String::from_utf8(bytes).map_err(|_| CatalogError::InvalidEncoding {
        path: path.to_path_buf(),
    })?;

    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn create_test_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content).expect("Failed to write test content");
        file.flush().expect("Failed to flush test file");
        file
    }

    #[tokio::test]
    async fn test_reads_utf8_text() {
        let file = create_test_file("brand;model\nŠkoda;Octavia\n".as_bytes());
        let text = read_import_file(file.path()).await.unwrap();
        assert_eq!(text, "brand;model\nŠkoda;Octavia\n");
    }

    #[tokio::test]
    async fn test_strips_byte_order_mark() {
        let file = create_test_file(b"\xEF\xBB\xBFbrand,model\n");
        let text = read_import_file(file.path()).await.unwrap();
        assert!(text.starts_with("brand"));
    }

    #[tokio::test]
    async fn test_rejects_invalid_utf8() {
        let file = create_test_file(b"brand\n\xFF\xFE\n");
        let result = read_import_file(file.path()).await;
        assert!(matches!(result, Err(CatalogError::InvalidEncoding { .. })));
    }

    #[tokio::test]
    async fn test_reports_missing_file() {
        let result = read_import_file(Path::new("/this/file/does/not/exist.csv")).await;
        assert!(matches!(result, Err(CatalogError::FileNotFound { .. })));
    }

    #[test]
    fn test_rejects_directories() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        match validate_file_path(dir.path()) {
            Err(CatalogError::FileError { message, .. }) => {
                assert!(message.contains("Path is not a file"));
            }
            other => panic!("Expected FileError for directory, got {:?}", other),
        }
    }
}
