use crate::error::RainfallError;
use log::info;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Reads rainfall dataset files from disk.
pub struct DatasetLoader {
    path: PathBuf,
}

impl DatasetLoader {
    pub fn new(path: &Path) -> DatasetLoader {
        DatasetLoader {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole dataset into memory. Aggregation needs every row before it can
    /// produce anything, so there is nothing to gain from streaming.
    pub async fn read(&self) -> Result<String, RainfallError> {
        let text = fs::read_to_string(&self.path)
            .await
            .map_err(|e| RainfallError::DatasetRead(self.path.clone(), e))?;
        info!(
            "Read {} bytes ({} lines) from {:?}",
            text.len(),
            text.lines().count(),
            self.path
        );
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_read_dataset_file() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = NamedTempFile::new()?;
        write!(file, "meta\n1961,1,0.5\n")?;
        file.flush()?;

        let text = DatasetLoader::new(file.path()).read().await?;
        assert_eq!(text, "meta\n1961,1,0.5\n");
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_file_names_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("missing.csv");

        let result = DatasetLoader::new(&missing).read().await;
        match result {
            Err(RainfallError::DatasetRead(path, _)) => assert_eq!(path, missing),
            other => panic!("expected DatasetRead error, got {:?}", other),
        }
    }
}
