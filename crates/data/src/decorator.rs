use crate::codec::{Compression, Encryption, PayloadCodec};
use crate::{DataError, DataSource};
use bytes::Bytes;
use micro_decorator::Decorator;
use tracing::trace;

/// Wraps a [`DataSource`], encoding payloads before they are written to it and
/// decoding the payloads read from it.
#[derive(Debug, Clone)]
pub struct DataSourceDecorator<D, C> {
    source: D,
    codec: C,
}

pub type EncryptionDecorator<D> = DataSourceDecorator<D, Encryption>;
pub type CompressionDecorator<D> = DataSourceDecorator<D, Compression>;

impl<D, C> DataSourceDecorator<D, C> {
    pub fn new(source: D, codec: C) -> Self {
        Self { source, codec }
    }

    /// Gets a reference to the wrapped source.
    pub fn get_ref(&self) -> &D {
        &self.source
    }

    /// Gets a mutable reference to the wrapped source.
    pub fn get_mut(&mut self) -> &mut D {
        &mut self.source
    }

    pub fn into_inner(self) -> D {
        self.source
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    pub fn codec_mut(&mut self) -> &mut C {
        &mut self.codec
    }
}

impl<D: DataSource, C: PayloadCodec> DataSource for DataSourceDecorator<D, C> {
    fn write_data(&mut self, data: Bytes) -> Result<(), DataError> {
        let len = data.len();
        let encoded = self.codec.encode(data)?;
        trace!(codec = self.codec.name(), from = len, to = encoded.len(), "encoded payload");
        self.source.write_data(encoded)
    }

    fn read_data(&self) -> Result<Option<Bytes>, DataError> {
        let Some(data) = self.source.read_data()? else {
            return Ok(None);
        };

        let len = data.len();
        let decoded = self.codec.decode(data)?;
        trace!(codec = self.codec.name(), from = len, to = decoded.len(), "decoded payload");
        Ok(Some(decoded))
    }
}

impl<D: DataSource> Decorator<D> for Encryption {
    type Out = EncryptionDecorator<D>;

    fn decorate(&self, raw: D) -> Self::Out {
        DataSourceDecorator::new(raw, self.clone())
    }
}

impl<D: DataSource> Decorator<D> for Compression {
    type Out = CompressionDecorator<D>;

    fn decorate(&self, raw: D) -> Self::Out {
        DataSourceDecorator::new(raw, *self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Algorithm;
    use crate::{MemoryDataSource, MockDataSource};
    use micro_decorator::DecoratorComposer;
    use mockall::Sequence;
    use std::cell::RefCell;
    use std::rc::Rc;

    const RECORDS: &[u8] = b"Name,Salary\nJohn Smith,100000\nSteven Jobs,912000";

    /// Appends its tag on encode, strips it on decode, and logs both steps.
    struct Tag {
        tag: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl PayloadCodec for Tag {
        fn name(&self) -> &'static str {
            self.tag
        }

        fn encode(&self, data: Bytes) -> Result<Bytes, DataError> {
            self.log.borrow_mut().push(format!("encode {}", self.tag));
            Ok(Bytes::from([data.as_ref(), self.tag.as_bytes()].concat()))
        }

        fn decode(&self, data: Bytes) -> Result<Bytes, DataError> {
            self.log.borrow_mut().push(format!("decode {}", self.tag));
            let stripped = data.strip_suffix(self.tag.as_bytes()).ok_or_else(|| DataError::codec(self.tag, "missing tag"))?;
            Ok(Bytes::copy_from_slice(stripped))
        }
    }

    fn tag(tag: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Tag {
        Tag { tag, log: Rc::clone(log) }
    }

    #[test]
    fn test_steps_follow_nesting_order() {
        let log = Rc::new(RefCell::new(vec![]));
        let inner = DataSourceDecorator::new(MemoryDataSource::new(), tag("a", &log));
        let middle = DataSourceDecorator::new(inner, tag("b", &log));
        let mut outer = DataSourceDecorator::new(middle, tag("c", &log));

        outer.write_data(Bytes::from_static(b"x")).unwrap();
        assert_eq!(outer.get_ref().get_ref().get_ref().data(), Some(&Bytes::from_static(b"xcba")));

        assert_eq!(outer.read_data().unwrap(), Some(Bytes::from_static(b"x")));
        assert_eq!(*log.borrow(), ["encode c", "encode b", "encode a", "decode a", "decode b", "decode c"]);
    }

    #[test]
    fn test_layer_order_changes_stored_payload() {
        let encryption = Encryption::new("secret");
        let compression = Compression::new(Algorithm::Gzip);

        let mut compress_outside = DecoratorComposer::new(encryption.clone(), compression).decorate(MemoryDataSource::new());
        let mut encrypt_outside = DecoratorComposer::new(compression, encryption).decorate(MemoryDataSource::new());

        compress_outside.write_data(Bytes::from_static(RECORDS)).unwrap();
        encrypt_outside.write_data(Bytes::from_static(RECORDS)).unwrap();

        let stored_compress_outside = compress_outside.get_ref().get_ref().data().unwrap().clone();
        let stored_encrypt_outside = encrypt_outside.get_ref().get_ref().data().unwrap().clone();
        assert_ne!(stored_compress_outside, stored_encrypt_outside);
        // the innermost layer encodes last, right before the payload is stored
        assert!(stored_compress_outside.iter().all(u8::is_ascii));
        assert_eq!(&stored_encrypt_outside[..2], &[0x1f, 0x8b]);

        assert_eq!(compress_outside.read_data().unwrap(), Some(Bytes::from_static(RECORDS)));
        assert_eq!(encrypt_outside.read_data().unwrap(), Some(Bytes::from_static(RECORDS)));
    }

    #[test]
    fn test_write_delegates_encoded_payload_once() {
        let encryption = Encryption::new("secret");
        let expected = encryption.encode(Bytes::from_static(RECORDS)).unwrap();

        let mut seq = Sequence::new();
        let mut source = MockDataSource::new();
        source.expect_write_data().times(1).in_sequence(&mut seq).withf(move |data| *data == expected).returning(|_| Ok(()));
        source.expect_read_data().times(1).in_sequence(&mut seq).returning(|| Ok(None));

        let mut decorated = encryption.decorate(source);
        decorated.write_data(Bytes::from_static(RECORDS)).unwrap();
        assert_eq!(decorated.read_data().unwrap(), None);
    }

    #[test]
    fn test_read_without_data_skips_decoding() {
        let log = Rc::new(RefCell::new(vec![]));
        let source = DataSourceDecorator::new(MemoryDataSource::new(), tag("a", &log));

        assert_eq!(source.read_data().unwrap(), None);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_source_errors_are_propagated() {
        let mut source = MockDataSource::new();
        source.expect_read_data().returning(|| Err(DataError::codec("mock", "broken")));

        let decorated = Compression::new(Algorithm::Zstd).decorate(source);
        assert!(matches!(decorated.read_data(), Err(DataError::Codec { codec: "mock", .. })));
    }

    #[test]
    fn test_latest_codec_settings_are_used() {
        let mut source = Encryption::new("first").decorate(MemoryDataSource::new());
        source.write_data(Bytes::from_static(RECORDS)).unwrap();

        source.codec_mut().set_key("second");
        assert_ne!(source.read_data().unwrap(), Some(Bytes::from_static(RECORDS)));

        source.write_data(Bytes::from_static(RECORDS)).unwrap();
        assert_eq!(source.read_data().unwrap(), Some(Bytes::from_static(RECORDS)));
    }
}
