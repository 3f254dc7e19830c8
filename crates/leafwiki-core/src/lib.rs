//! leafwiki Core Library
//!
//! Language constants, root-relative path math, site configuration and error
//! handling shared by the leafwiki generator and CLI.

pub mod config;
pub mod error;
pub mod lang;

pub use config::Config;
pub use error::{CoreError, Result};
pub use lang::{DEFAULT_LANGUAGE, root_dir, site_root_dir, slugify};
