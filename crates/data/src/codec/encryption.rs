use crate::DataError;
use crate::codec::PayloadCodec;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A keyed XOR scramble armored with standard base64.
///
/// This only hides the payload from a casual look, it is not a cipher to protect data with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encryption {
    key: String,
}

impl Encryption {
    pub fn new<S: Into<String>>(key: S) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn set_key<S: Into<String>>(&mut self, key: S) {
        self.key = key.into();
    }

    fn scramble(&self, data: &[u8]) -> Vec<u8> {
        let key = self.key.as_bytes();
        if key.is_empty() {
            return data.to_vec();
        }
        data.iter().zip(key.iter().cycle()).map(|(byte, k)| byte ^ k).collect()
    }
}

impl PayloadCodec for Encryption {
    fn name(&self) -> &'static str {
        "encryption"
    }

    fn encode(&self, data: Bytes) -> Result<Bytes, DataError> {
        Ok(Bytes::from(STANDARD.encode(self.scramble(&data))))
    }

    fn decode(&self, data: Bytes) -> Result<Bytes, DataError> {
        let scrambled = STANDARD.decode(&data).map_err(DataError::decrypt)?;
        Ok(Bytes::from(self.scramble(&scrambled)))
    }
}
