//! Serializable description of a data pipeline, innermost layer first:
//!
//! ```json
//! [
//!   { "kind": "encryption", "key": "secret" },
//!   { "kind": "compression", "algorithm": "gzip", "level": 9 }
//! ]
//! ```

use crate::DataSource;
use crate::codec::{Compression, Encryption};
use crate::decorator::DataSourceDecorator;
use micro_decorator::{CompositionBuilder, InvalidCompositionError, Layer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataLayer {
    Encryption(Encryption),
    Compression(Compression),
}

impl Layer<dyn DataSource> for DataLayer {
    fn name(&self) -> &'static str {
        match self {
            Self::Encryption(_) => "encryption",
            Self::Compression(_) => "compression",
        }
    }

    fn wrap(&self, inner: Box<dyn DataSource>) -> Result<Box<dyn DataSource>, InvalidCompositionError> {
        let source: Box<dyn DataSource> = match self {
            Self::Encryption(encryption) => {
                if encryption.key().is_empty() {
                    return Err(InvalidCompositionError::invalid_parameter(self.name(), "key must not be empty"));
                }
                Box::new(DataSourceDecorator::new(inner, encryption.clone()))
            }
            Self::Compression(compression) => {
                let levels = compression.algorithm().levels();
                if !levels.contains(&compression.level()) {
                    return Err(InvalidCompositionError::invalid_parameter(
                        self.name(),
                        format!(
                            "{} level must be within {}..={}, got {}",
                            compression.algorithm().name(),
                            levels.start(),
                            levels.end(),
                            compression.level()
                        ),
                    ));
                }
                Box::new(DataSourceDecorator::new(inner, *compression))
            }
        };
        Ok(source)
    }
}

/// Parses a JSON array of [`DataLayer`]s.
pub fn parse_layers(json: &str) -> Result<Vec<DataLayer>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Lays `layers` over `base`, the first layer being the innermost one.
pub fn compose_data_source<D>(base: D, layers: &[DataLayer]) -> Result<Box<dyn DataSource>, InvalidCompositionError>
where
    D: DataSource + 'static,
{
    let base: Box<dyn DataSource> = Box::new(base);
    CompositionBuilder::new().base(base).layers(layers.iter().cloned()).build()
}
