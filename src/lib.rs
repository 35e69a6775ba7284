// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]
#![warn(missing_docs)]

//! # Paging Fixture
//!
//! A mock HTTP API for exercising client-side pagination, discovery and
//! bearer-token authentication. Every response is computed from the request
//! alone: collections are synthetic and deterministic, and there is no
//! persistence.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use paging_fixture::{cli::serve, FixtureConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     serve(FixtureConfig::default()).await
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                  HTTP router (axum, cli::server)             │
//! └──────────────────────────────────────────────────────────────┘
//!          │                    │                      │
//! ┌────────┴───────┐  ┌─────────┴────────┐  ┌──────────┴─────────┐
//! │     Params     │  │    Pagination    │  │        Auth        │
//! ├────────────────┤  ├──────────────────┤  ├────────────────────┤
//! │ Validate ints  │→ │ Slice / modes    │  │ Login → JWT        │
//! │ Defaults       │  │ Links / headers  │  │ Bearer middleware  │
//! └────────────────┘  └──────────────────┘  └────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the fixture
pub mod error;

/// Query parameter validation
pub mod params;

/// Synthetic collection generation
pub mod collection;

/// Pagination engine
pub mod pagination;

/// Navigation link rendering
pub mod links;

/// Bearer token authentication
pub mod auth;

/// Server configuration
pub mod config;

/// Command-line interface and HTTP server
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::FixtureConfig;
pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
