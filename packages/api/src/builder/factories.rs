//! Static per-verb convenience factories.
//!
//! Thin sugar over the builder primitives, one family per verb. Every
//! variant preserves the same effect order: headers first, then body, then
//! dispatch. The data-carrying variants exist for POST and PUT only.

use http::Method;
use serde::Serialize;
use serde_json::Value;

use courier_client::error::HttpError;
use courier_client::response::HttpResponse;
use courier_client::url::compose_url;

use crate::builder::core::RequestBuilder;

impl RequestBuilder {
    fn with_verb(method: Method, url: impl AsRef<str>) -> Result<Self, HttpError> {
        let mut builder = Self::new();
        let url = compose_url(None, url.as_ref())?;
        builder.request.set_route(method, url);
        Ok(builder)
    }

    // GET

    /// Builder resolved to `GET url`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Configuration`] when `url` is not absolute.
    pub fn get(url: impl AsRef<str>) -> Result<Self, HttpError> {
        Self::with_verb(Method::GET, url)
    }

    /// `GET url` with headers applied.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Configuration`] when `url` is not absolute.
    pub fn get_with_headers<I, K, V>(url: impl AsRef<str>, headers: I) -> Result<Self, HttpError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut builder = Self::get(url)?;
        builder.headers(headers);
        Ok(builder)
    }

    /// `GET url` dispatched immediately through [`send`](Self::send).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Configuration`] when `url` is not absolute.
    pub fn get_then<F>(url: impl AsRef<str>, done: F) -> Result<Self, HttpError>
    where
        F: FnOnce(Option<Value>, Option<HttpResponse>, Option<HttpError>) + Send + 'static,
    {
        let mut builder = Self::get(url)?;
        builder.send(done)?;
        Ok(builder)
    }

    /// `GET url` with headers, dispatched immediately.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Configuration`] when `url` is not absolute.
    pub fn get_with_headers_then<I, K, V, F>(
        url: impl AsRef<str>,
        headers: I,
        done: F,
    ) -> Result<Self, HttpError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
        F: FnOnce(Option<Value>, Option<HttpResponse>, Option<HttpError>) + Send + 'static,
    {
        let mut builder = Self::get_with_headers(url, headers)?;
        builder.send(done)?;
        Ok(builder)
    }

    // POST

    /// Builder resolved to `POST url`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Configuration`] when `url` is not absolute.
    pub fn post(url: impl AsRef<str>) -> Result<Self, HttpError> {
        Self::with_verb(Method::POST, url)
    }

    /// `POST url` with headers applied.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Configuration`] when `url` is not absolute.
    pub fn post_with_headers<I, K, V>(url: impl AsRef<str>, headers: I) -> Result<Self, HttpError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut builder = Self::post(url)?;
        builder.headers(headers);
        Ok(builder)
    }

    /// `POST url` dispatched immediately.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Configuration`] when `url` is not absolute.
    pub fn post_then<F>(url: impl AsRef<str>, done: F) -> Result<Self, HttpError>
    where
        F: FnOnce(Option<Value>, Option<HttpResponse>, Option<HttpError>) + Send + 'static,
    {
        let mut builder = Self::post(url)?;
        builder.send(done)?;
        Ok(builder)
    }

    /// `POST url` with a JSON body attached.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Configuration`] for a non-absolute URL or
    /// [`HttpError::Encoding`] when `data` is not codec-representable.
    pub fn post_data<T>(url: impl AsRef<str>, data: &T) -> Result<Self, HttpError>
    where
        T: Serialize + ?Sized,
    {
        let mut builder = Self::post(url)?;
        builder.json_body(data)?;
        Ok(builder)
    }

    /// `POST url` with a JSON body, dispatched immediately.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Configuration`] or [`HttpError::Encoding`] as
    /// for [`post_data`](Self::post_data).
    pub fn post_data_then<T, F>(url: impl AsRef<str>, data: &T, done: F) -> Result<Self, HttpError>
    where
        T: Serialize + ?Sized,
        F: FnOnce(Option<Value>, Option<HttpResponse>, Option<HttpError>) + Send + 'static,
    {
        let mut builder = Self::post_data(url, data)?;
        builder.send(done)?;
        Ok(builder)
    }

    /// `POST url` with headers and a JSON body; headers are applied before
    /// the body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Configuration`] or [`HttpError::Encoding`].
    pub fn post_with_headers_data<I, K, V, T>(
        url: impl AsRef<str>,
        headers: I,
        data: &T,
    ) -> Result<Self, HttpError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
        T: Serialize + ?Sized,
    {
        let mut builder = Self::post_with_headers(url, headers)?;
        builder.json_body(data)?;
        Ok(builder)
    }

    /// `POST url` with headers and a JSON body, dispatched immediately.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Configuration`] or [`HttpError::Encoding`].
    pub fn post_with_headers_data_then<I, K, V, T, F>(
        url: impl AsRef<str>,
        headers: I,
        data: &T,
        done: F,
    ) -> Result<Self, HttpError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
        T: Serialize + ?Sized,
        F: FnOnce(Option<Value>, Option<HttpResponse>, Option<HttpError>) + Send + 'static,
    {
        let mut builder = Self::post_with_headers_data(url, headers, data)?;
        builder.send(done)?;
        Ok(builder)
    }

    // PUT

    /// Builder resolved to `PUT url`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Configuration`] when `url` is not absolute.
    pub fn put(url: impl AsRef<str>) -> Result<Self, HttpError> {
        Self::with_verb(Method::PUT, url)
    }

    /// `PUT url` with headers applied.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Configuration`] when `url` is not absolute.
    pub fn put_with_headers<I, K, V>(url: impl AsRef<str>, headers: I) -> Result<Self, HttpError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut builder = Self::put(url)?;
        builder.headers(headers);
        Ok(builder)
    }

    /// `PUT url` dispatched immediately.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Configuration`] when `url` is not absolute.
    pub fn put_then<F>(url: impl AsRef<str>, done: F) -> Result<Self, HttpError>
    where
        F: FnOnce(Option<Value>, Option<HttpResponse>, Option<HttpError>) + Send + 'static,
    {
        let mut builder = Self::put(url)?;
        builder.send(done)?;
        Ok(builder)
    }

    /// `PUT url` with a JSON body attached.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Configuration`] or [`HttpError::Encoding`].
    pub fn put_data<T>(url: impl AsRef<str>, data: &T) -> Result<Self, HttpError>
    where
        T: Serialize + ?Sized,
    {
        let mut builder = Self::put(url)?;
        builder.json_body(data)?;
        Ok(builder)
    }

    /// `PUT url` with a JSON body, dispatched immediately.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Configuration`] or [`HttpError::Encoding`].
    pub fn put_data_then<T, F>(url: impl AsRef<str>, data: &T, done: F) -> Result<Self, HttpError>
    where
        T: Serialize + ?Sized,
        F: FnOnce(Option<Value>, Option<HttpResponse>, Option<HttpError>) + Send + 'static,
    {
        let mut builder = Self::put_data(url, data)?;
        builder.send(done)?;
        Ok(builder)
    }

    /// `PUT url` with headers and a JSON body; headers are applied before
    /// the body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Configuration`] or [`HttpError::Encoding`].
    pub fn put_with_headers_data<I, K, V, T>(
        url: impl AsRef<str>,
        headers: I,
        data: &T,
    ) -> Result<Self, HttpError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
        T: Serialize + ?Sized,
    {
        let mut builder = Self::put_with_headers(url, headers)?;
        builder.json_body(data)?;
        Ok(builder)
    }

    /// `PUT url` with headers and a JSON body, dispatched immediately.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Configuration`] or [`HttpError::Encoding`].
    pub fn put_with_headers_data_then<I, K, V, T, F>(
        url: impl AsRef<str>,
        headers: I,
        data: &T,
        done: F,
    ) -> Result<Self, HttpError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
        T: Serialize + ?Sized,
        F: FnOnce(Option<Value>, Option<HttpResponse>, Option<HttpError>) + Send + 'static,
    {
        let mut builder = Self::put_with_headers_data(url, headers, data)?;
        builder.send(done)?;
        Ok(builder)
    }

    // DELETE

    /// Builder resolved to `DELETE url`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Configuration`] when `url` is not absolute.
    pub fn delete(url: impl AsRef<str>) -> Result<Self, HttpError> {
        Self::with_verb(Method::DELETE, url)
    }

    /// `DELETE url` with headers applied.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Configuration`] when `url` is not absolute.
    pub fn delete_with_headers<I, K, V>(url: impl AsRef<str>, headers: I) -> Result<Self, HttpError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut builder = Self::delete(url)?;
        builder.headers(headers);
        Ok(builder)
    }

    /// `DELETE url` dispatched immediately.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Configuration`] when `url` is not absolute.
    pub fn delete_then<F>(url: impl AsRef<str>, done: F) -> Result<Self, HttpError>
    where
        F: FnOnce(Option<Value>, Option<HttpResponse>, Option<HttpError>) + Send + 'static,
    {
        let mut builder = Self::delete(url)?;
        builder.send(done)?;
        Ok(builder)
    }

    /// `DELETE url` with headers, dispatched immediately.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Configuration`] when `url` is not absolute.
    pub fn delete_with_headers_then<I, K, V, F>(
        url: impl AsRef<str>,
        headers: I,
        done: F,
    ) -> Result<Self, HttpError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
        F: FnOnce(Option<Value>, Option<HttpResponse>, Option<HttpError>) + Send + 'static,
    {
        let mut builder = Self::delete_with_headers(url, headers)?;
        builder.send(done)?;
        Ok(builder)
    }
}
