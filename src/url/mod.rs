//! URL handling module for robotxt
//!
//! This module normalizes bind targets, derives robots.txt locations and
//! normalizes the request paths that queries are evaluated against.

mod normalize;

pub use normalize::{normalize_request_path, normalize_target, robots_url};
