use crate::{DataError, DataSource};
use bytes::Bytes;
use tracing::debug;

/// Keeps the payload in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryDataSource {
    data: Option<Bytes>,
}

impl MemoryDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw payload as stored, without any decoding.
    pub fn data(&self) -> Option<&Bytes> {
        self.data.as_ref()
    }
}

impl DataSource for MemoryDataSource {
    fn write_data(&mut self, data: Bytes) -> Result<(), DataError> {
        debug!(len = data.len(), "wrote payload");
        self.data = Some(data);
        Ok(())
    }

    fn read_data(&self) -> Result<Option<Bytes>, DataError> {
        Ok(self.data.clone())
    }
}
