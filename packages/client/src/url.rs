//! Base/path URL composition.

use url::Url;

use crate::error::HttpError;

/// Resolve the final request URL from an optional base and a path.
///
/// With a base present the path is appended as a path component: exactly one
/// separating slash regardless of a trailing slash on the base or a leading
/// slash on the path. Without a base the path must itself be an absolute URL.
///
/// # Errors
///
/// Returns [`HttpError::Configuration`] when the composed string does not
/// parse, or when the path is relative and no base is set.
pub fn compose_url(base: Option<&Url>, path: &str) -> Result<Url, HttpError> {
    match base {
        Some(base) => {
            let joined = format!(
                "{}/{}",
                base.as_str().trim_end_matches('/'),
                path.trim_start_matches('/')
            );
            Url::parse(&joined).map_err(|e| {
                HttpError::configuration(format!(
                    "cannot compose path {path:?} against base {base}: {e}"
                ))
            })
        }
        None => Url::parse(path).map_err(|_| {
            HttpError::configuration(format!(
                "path {path:?} is not an absolute URL and no base URL is set"
            ))
        }),
    }
}
