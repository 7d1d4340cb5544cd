//! Header mutators.

use http::{HeaderName, HeaderValue};

use crate::builder::core::RequestBuilder;

impl RequestBuilder {
    /// Set or overwrite one header on the descriptor. Last write wins.
    ///
    /// Invalid header names or values are skipped with a warning rather than
    /// poisoning the chain.
    pub fn header(&mut self, name: &str, value: &str) -> &mut Self {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                self.request.insert_header(name, value);
            }
            _ => log::warn!("skipping invalid header {name:?}"),
        }
        self
    }

    /// Set several headers at once; equivalent to repeated `header` calls.
    pub fn headers<I, K, V>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (name, value) in pairs {
            self.header(name.as_ref(), value.as_ref());
        }
        self
    }
}
