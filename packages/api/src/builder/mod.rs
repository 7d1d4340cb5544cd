//! Fluent request builder.
//!
//! Split by concern, mirroring the call surface: [`core`] holds the builder
//! struct, construction and configuration; `headers` and `body` the chained
//! mutators; `methods` the terminal dispatch operations; `factories` the
//! static per-verb sugar.

pub mod body;
pub mod core;
pub mod factories;
pub mod headers;
pub mod methods;

pub use self::core::{DecodePolicy, RequestBuilder};
