use crate::DataError;
use crate::codec::{PayloadCodec, Writer};
use brotli::{CompressorWriter, Decompressor};
use bytes::Bytes;
use flate2::read::{GzDecoder, ZlibDecoder};
use flate2::write::{GzEncoder, ZlibEncoder};
use serde::{Deserialize, Serialize};
use std::io::{self, Read, Write};
use std::ops::RangeInclusive;
use zstd::stream::write::Encoder as ZstdEncoder;

const BUFFER_SIZE: usize = 4096;
// BROTLI_PARAM_LGWIN
const BROTLI_LG_WINDOW: u32 = 22;

/// The compression format of a [`Compression`] codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Gzip,
    /// zlib wrapped deflate
    Deflate,
    Zstd,
    #[serde(alias = "brotli")]
    Br,
}

impl Algorithm {
    /// Returns the name of the algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Gzip => "gzip",
            Algorithm::Deflate => "deflate",
            Algorithm::Zstd => "zstd",
            Algorithm::Br => "br",
        }
    }

    /// The levels accepted by the algorithm.
    pub fn levels(&self) -> RangeInclusive<u32> {
        match self {
            Algorithm::Gzip | Algorithm::Deflate => 0..=9,
            Algorithm::Zstd => 1..=22,
            Algorithm::Br => 0..=11,
        }
    }

    /// The level used when none is configured.
    pub fn default_level(&self) -> u32 {
        match self {
            Algorithm::Gzip | Algorithm::Deflate => 6,
            Algorithm::Zstd | Algorithm::Br => 3,
        }
    }
}

/// Compresses payloads on write and decompresses them on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compression {
    algorithm: Algorithm,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    level: Option<u32>,
}

impl Compression {
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm, level: None }
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The configured level, or the algorithm's default.
    pub fn level(&self) -> u32 {
        self.level.unwrap_or_else(|| self.algorithm.default_level())
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    pub fn set_level(&mut self, level: Option<u32>) {
        self.level = level;
    }

    fn compress(&self, data: &[u8]) -> io::Result<Bytes> {
        let level = self.level();
        let writer = Writer::with_capacity(BUFFER_SIZE);

        match self.algorithm {
            Algorithm::Gzip => {
                let mut encoder = GzEncoder::new(writer, flate2::Compression::new(level));
                encoder.write_all(data)?;
                Ok(encoder.finish()?.freeze())
            }

            Algorithm::Deflate => {
                let mut encoder = ZlibEncoder::new(writer, flate2::Compression::new(level));
                encoder.write_all(data)?;
                Ok(encoder.finish()?.freeze())
            }

            Algorithm::Zstd => {
                let level = i32::try_from(level).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
                let mut encoder = ZstdEncoder::new(writer, level)?;
                encoder.write_all(data)?;
                Ok(encoder.finish()?.freeze())
            }

            Algorithm::Br => {
                let mut encoder = CompressorWriter::new(writer, BUFFER_SIZE, level, BROTLI_LG_WINDOW);
                encoder.write_all(data)?;
                encoder.flush()?;
                Ok(encoder.into_inner().freeze())
            }
        }
    }

    fn decompress(&self, data: &[u8]) -> io::Result<Bytes> {
        let mut buf = Vec::with_capacity(data.len().saturating_mul(2));

        match self.algorithm {
            Algorithm::Gzip => GzDecoder::new(data).read_to_end(&mut buf)?,
            Algorithm::Deflate => ZlibDecoder::new(data).read_to_end(&mut buf)?,
            Algorithm::Zstd => zstd::stream::read::Decoder::new(data)?.read_to_end(&mut buf)?,
            Algorithm::Br => Decompressor::new(data, BUFFER_SIZE).read_to_end(&mut buf)?,
        };

        Ok(Bytes::from(buf))
    }
}

impl PayloadCodec for Compression {
    fn name(&self) -> &'static str {
        self.algorithm.name()
    }

    fn encode(&self, data: Bytes) -> Result<Bytes, DataError> {
        self.compress(&data).map_err(|e| DataError::codec(self.name(), e))
    }

    fn decode(&self, data: Bytes) -> Result<Bytes, DataError> {
        self.decompress(&data).map_err(|e| DataError::codec(self.name(), e))
    }
}
