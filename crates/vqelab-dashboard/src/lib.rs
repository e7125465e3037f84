//! VQE Lab Dashboard - local web interface for simulated VQE runs.
//!
//! The dashboard serves a single page plus a JSON API and a WebSocket event
//! stream. Researchers can:
//!
//! - Edit the molecule / ansatz / backend configuration
//! - Start a convergence run and watch energies and snapshots arrive live
//! - Compare the result against Hartree-Fock and exact energies
//! - Generate the dissociation curve
//! - Download everything as one JSON file
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vqelab_dashboard::{AppState, DashboardConfig, create_router};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = DashboardConfig::default();
//!     let state = Arc::new(AppState::with_config(config.clone()));
//!
//!     let app = create_router(state);
//!     let listener = tokio::net::TcpListener::bind(config.bind_address).await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod api;
pub mod dto;
pub mod error;
pub mod processor;
pub mod server;
pub mod state;
pub mod ws;

pub use dto::{ComparisonResponse, HealthResponse, RunAccepted, StatusResponse};
pub use error::ApiError;
pub use server::create_router;
pub use state::{AppState, DashboardConfig};
pub use ws::events::DashboardEvent;
