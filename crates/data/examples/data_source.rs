use bytes::Bytes;
use micro_data::{
    Algorithm, Compression, CompressionDecorator, DataSource, Encryption, EncryptionDecorator, FileDataSource,
    parse_layers,
};
use micro_decorator::CompositionBuilder;
use std::env;
use std::error::Error;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

const SALARY_RECORDS: &str = "Name,Salary\nJohn Smith,100000\nSteven Jobs,912000";

fn main() -> Result<(), Box<dyn Error>> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let path = env::temp_dir().join("micro-data-output.txt");

    let encoded = EncryptionDecorator::new(FileDataSource::new(&path), Encryption::new("secret"));
    let mut encoded = CompressionDecorator::new(encoded, Compression::new(Algorithm::Gzip));
    encoded.write_data(Bytes::from_static(SALARY_RECORDS.as_bytes()))?;

    let plain = FileDataSource::new(&path);
    if let Some(stored) = plain.read_data()? {
        info!("- Encoded --------------\n{}", String::from_utf8_lossy(&stored));
    }
    if let Some(decoded) = encoded.read_data()? {
        info!("- Decoded --------------\n{}", String::from_utf8_lossy(&decoded));
    }

    // the same pipeline, described as configuration
    let layers = parse_layers(
        r#"[
            { "kind": "encryption", "key": "secret" },
            { "kind": "compression", "algorithm": "gzip" }
        ]"#,
    )?;
    let base: Box<dyn DataSource> = Box::new(FileDataSource::new(&path));
    let configured = CompositionBuilder::new().base(base).layers(layers).build()?;
    if let Some(decoded) = configured.read_data()? {
        info!("- Decoded from configured pipeline --------------\n{}", String::from_utf8_lossy(&decoded));
    }

    Ok(())
}
