use crate::{DataError, DataSource};
use bytes::Bytes;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Keeps the payload in a single file, overwriting it on every write.
#[derive(Debug, Clone)]
pub struct FileDataSource {
    path: PathBuf,
}

impl FileDataSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for FileDataSource {
    fn write_data(&mut self, data: Bytes) -> Result<(), DataError> {
        fs::write(&self.path, &data)?;
        debug!(path = %self.path.display(), len = data.len(), "wrote payload");
        Ok(())
    }

    fn read_data(&self) -> Result<Option<Bytes>, DataError> {
        match fs::read(&self.path) {
            Ok(data) => {
                debug!(path = %self.path.display(), len = data.len(), "read payload");
                Ok(Some(Bytes::from(data)))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no payload stored");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileDataSource::new(dir.path().join("OutputDemo.txt"));

        assert_eq!(source.read_data().unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let mut source = FileDataSource::new(dir.path().join("OutputDemo.txt"));

        source.write_data(Bytes::from_static(b"first")).unwrap();
        source.write_data(Bytes::from_static(b"second")).unwrap();

        assert_eq!(source.read_data().unwrap(), Some(Bytes::from_static(b"second")));
        assert_eq!(fs::read(source.path()).unwrap(), b"second");
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut source = FileDataSource::new(dir.path().join("missing").join("OutputDemo.txt"));

        let result = source.write_data(Bytes::from_static(b"data"));
        assert!(matches!(result, Err(DataError::Io { .. })));
    }
}
