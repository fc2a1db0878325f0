//! A byte store wrapped in stacked encryption and compression decorators.
//!
//! [`DataSource`] is the capability: write a payload, read it back. [`FileDataSource`]
//! and [`MemoryDataSource`] are terminal sources that simply keep the bytes. A
//! [`DataSourceDecorator`] encodes the payload before handing it to the source it wraps
//! and decodes what that source returns, so on write the outermost layer runs first and
//! on read it runs last.
//!
//! # Example
//! ```
//! use bytes::Bytes;
//! use micro_data::{Algorithm, Compression, CompressionDecorator, DataSource, Encryption, EncryptionDecorator, MemoryDataSource};
//!
//! let encrypted = EncryptionDecorator::new(MemoryDataSource::new(), Encryption::new("secret"));
//! let mut source = CompressionDecorator::new(encrypted, Compression::new(Algorithm::Gzip));
//!
//! source.write_data(Bytes::from_static(b"Name,Salary\nJohn Smith,100000")).unwrap();
//! assert_eq!(source.read_data().unwrap(), Some(Bytes::from_static(b"Name,Salary\nJohn Smith,100000")));
//! ```

mod codec;
mod config;
mod decorator;
mod error;
mod source;

pub use codec::Algorithm;
pub use codec::Compression;
pub use codec::Encryption;
pub use codec::PayloadCodec;
pub use config::DataLayer;
pub use config::compose_data_source;
pub use config::parse_layers;
pub use decorator::CompressionDecorator;
pub use decorator::DataSourceDecorator;
pub use decorator::EncryptionDecorator;
pub use error::DataError;
pub use source::FileDataSource;
pub use source::MemoryDataSource;

use bytes::Bytes;

/// A store which keeps one payload.
#[cfg_attr(test, mockall::automock)]
pub trait DataSource {
    fn write_data(&mut self, data: Bytes) -> Result<(), DataError>;

    /// Reads the payload back, `Ok(None)` if nothing was written yet.
    fn read_data(&self) -> Result<Option<Bytes>, DataError>;
}

impl<D: DataSource + ?Sized> DataSource for Box<D> {
    fn write_data(&mut self, data: Bytes) -> Result<(), DataError> {
        (**self).write_data(data)
    }

    fn read_data(&self) -> Result<Option<Bytes>, DataError> {
        (**self).read_data()
    }
}

impl<D: DataSource + ?Sized> DataSource for &mut D {
    fn write_data(&mut self, data: Bytes) -> Result<(), DataError> {
        (**self).write_data(data)
    }

    fn read_data(&self) -> Result<Option<Bytes>, DataError> {
        (**self).read_data()
    }
}
