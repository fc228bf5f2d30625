//! # Noticeboard
//!
//! A campus notice board with student complaints and feedback, usable both as
//! a standalone binary and as a library.
//!
//! ## Library Usage
//!
//! ```toml
//! [dependencies]
//! noticeboard = { version = "0.0.1", default-features = false }
//! ```
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use noticeboard::auth::CredentialHasher;
//! use noticeboard::config::ServerConfig;
//! use noticeboard::portal::bootstrap::ensure_seed_admin;
//! use noticeboard::server::{AppState, create_router};
//! use noticeboard::store::{SqliteStore, Store};
//!
//! let config = ServerConfig::default();
//! let store = SqliteStore::new(config.db_path()).unwrap();
//! store.initialize().unwrap();
//! ensure_seed_admin(&store, &CredentialHasher::new(), &config.seed_admin).unwrap();
//!
//! let state = Arc::new(AppState::new(Arc::new(store), &config));
//! let router = create_router(state);
//! // Serve with axum...
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): Builds the `noticeboard` binary. Disable with `default-features = false`.

pub mod auth;
pub mod config;
pub mod error;
pub mod portal;
pub mod server;
pub mod store;
pub mod types;
pub mod views;
