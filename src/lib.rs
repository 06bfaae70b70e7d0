//! Turns captured HTTP request configurations into equivalent curl commands.
//!
//! [`translate`] is the whole contract: a pure function from a
//! [`RequestConfig`] to a shell-ready command string. The remaining modules
//! are the thin layers the `curlify` binary wraps around it.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::translator::{translate, translate_with};
pub use domain::entities::RequestConfig;
