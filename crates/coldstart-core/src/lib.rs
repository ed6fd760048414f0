//! ColdStart Core Library
//!
//! Configuration models, the options catalog, and the template engine
//! behind the ColdStart rule scaffolder.

pub mod config;
pub mod error;
pub mod options;
pub mod paths;
pub mod placeholders;
pub mod template;

pub use error::{ColdstartError, ColdstartResult};
