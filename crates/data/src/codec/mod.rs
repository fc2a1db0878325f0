//! Payload codecs applied by [`DataSourceDecorator`](crate::DataSourceDecorator).
//!
//! A codec encodes a payload on its way into a source and decodes it on its way out.
//! The compression codecs rely on `flate2`, `zstd` and `brotli`; the encryption codec
//! is a keyed scramble armored with base64.

use crate::DataError;
use bytes::{Bytes, BytesMut};
use std::io;

mod compression;
mod encryption;

pub use compression::Algorithm;
pub use compression::Compression;
pub use encryption::Encryption;

pub trait PayloadCodec {
    /// the codec's name, used in logs and errors
    fn name(&self) -> &'static str;

    fn encode(&self, data: Bytes) -> Result<Bytes, DataError>;

    fn decode(&self, data: Bytes) -> Result<Bytes, DataError>;
}

// an in-memory sink for the streaming compressors
pub(crate) struct Writer {
    buf: BytesMut,
}

impl Writer {
    fn with_capacity(capacity: usize) -> Self {
        Self { buf: BytesMut::with_capacity(capacity) }
    }

    fn freeze(self) -> Bytes {
        self.buf.freeze()
    }
}

impl io::Write for Writer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
