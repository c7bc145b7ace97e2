use std::path::Path;

/// Creates `dir` and any missing parents. Succeeds without changes when it already exists.
pub async fn ensure_directory(dir: &Path) -> std::io::Result<()> {
    if !dir.is_dir() {
        tracing::debug!("Creating directory {}", dir.display());
    }
    tokio::fs::create_dir_all(dir).await
}

#[cfg(test)]
mod tests {
    use super::ensure_directory;

    #[tokio::test]
    async fn test_creates_missing_parents() {
        let temp_dir = tempfile::TempDir::new().expect("Could not create tmp directory");
        let nested = temp_dir.path().join("a").join("b").join("logs");

        ensure_directory(&nested)
            .await
            .expect("Could not create directory");
        assert!(nested.is_dir());
    }

    #[tokio::test]
    async fn test_is_idempotent() {
        let temp_dir = tempfile::TempDir::new().expect("Could not create tmp directory");
        let logs = temp_dir.path().join("logs");

        ensure_directory(&logs)
            .await
            .expect("Could not create directory");
        std::fs::write(logs.join("existing"), b"keep").expect("Could not write file");

        ensure_directory(&logs)
            .await
            .expect("Second call should succeed");
        let entries: Vec<_> = std::fs::read_dir(&logs)
            .expect("Could not read directory")
            .collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(
            std::fs::read(logs.join("existing")).expect("Could not read file"),
            b"keep"
        );
    }

    #[tokio::test]
    async fn test_fails_when_path_is_a_file() {
        let temp_dir = tempfile::TempDir::new().expect("Could not create tmp directory");
        let file = temp_dir.path().join("logs");
        std::fs::write(&file, b"").expect("Could not write file");

        assert!(ensure_directory(&file).await.is_err());
    }
}
