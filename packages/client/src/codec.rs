//! Structured-value codec capability.
//!
//! The builder never touches serde directly at dispatch time; it talks to a
//! [`Codec`] so tests can substitute their own and the decode format stays a
//! single seam. The structured value type is [`serde_json::Value`], the
//! tagged null/bool/number/string/array/object variant.

use bytes::Bytes;
use serde_json::Value;

use crate::error::HttpError;

/// Byte <-> structured-value conversion used for request bodies and decoded
/// responses.
pub trait Codec: Send + Sync {
    /// Encode a structured value to payload bytes.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Encoding`] when the value is not representable.
    fn encode(&self, value: &Value) -> Result<Bytes, HttpError>;

    /// Decode payload bytes to a structured value.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Decode`] when the bytes do not parse.
    fn decode(&self, bytes: &[u8]) -> Result<Value, HttpError>;
}

/// Default serde_json-backed codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode(&self, value: &Value) -> Result<Bytes, HttpError> {
        serde_json::to_vec(value)
            .map(Bytes::from)
            .map_err(HttpError::Encoding)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Value, HttpError> {
        serde_json::from_slice(bytes).map_err(HttpError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn encode_decode_round_trip() {
        let codec = JsonCodec;
        let value = json!({"a": 1, "nested": {"flag": true}});
        let bytes = codec.encode(&value).expect("encode");
        let back = codec.decode(&bytes).expect("decode");
        assert_eq!(back, value);
    }

    #[test]
    fn decode_failure_is_a_decode_error() {
        let codec = JsonCodec;
        let err = codec.decode(b"<html>not json</html>").expect_err("must fail");
        assert!(err.is_decode());
    }
}
