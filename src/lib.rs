//! Unsplash photo search exposed as Model Context Protocol tools.
//!
//! [`unsplash::Client`] talks to the REST API, [`tools`] turns tool arguments
//! into requests and responses into text, and [`server::UnsplashServer`]
//! registers the tools with `rmcp`.

pub mod format;
pub mod server;
pub mod tools;
pub mod unsplash;

pub use server::UnsplashServer;
pub use unsplash::{Client, Error, Photo, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
