//! Body mutators.

use bytes::Bytes;
use serde::Serialize;

use courier_client::error::HttpError;

use crate::builder::core::RequestBuilder;

impl RequestBuilder {
    /// Set body bytes and their content type atomically.
    ///
    /// The content-type header is installed together with the body; there is
    /// never a state where one exists without the other.
    pub fn body(&mut self, data: impl Into<Bytes>, mime: &str) -> &mut Self {
        self.request.set_body(data.into(), mime);
        self
    }

    /// Encode `value` through the codec and attach it as an
    /// `application/json` body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Encoding`] synchronously when the value is not
    /// representable by the codec. Encoding failures never reach a
    /// completion callback.
    pub fn json_body<T>(&mut self, value: &T) -> Result<&mut Self, HttpError>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(value).map_err(HttpError::Encoding)?;
        let bytes = self.codec.encode(&value)?;
        Ok(self.body(bytes, "application/json"))
    }
}
