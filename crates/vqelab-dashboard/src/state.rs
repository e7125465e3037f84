//! Application state for the dashboard server.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::{RwLock, broadcast};
use vqelab_core::{MoleculeConfig, Pacing, Session};

use crate::ws::events::DashboardEvent;

/// Dashboard configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Address to bind the server to.
    pub bind_address: SocketAddr,
    /// Step delays of the generators.
    pub pacing: Pacing,
    /// Fixed jitter seed; `None` draws a fresh seed per run.
    pub seed: Option<u64>,
    /// Events buffered per WebSocket subscriber before it starts lagging.
    pub event_capacity: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bind_address: ([127, 0, 0, 1], 3000).into(),
            pacing: Pacing::default(),
            seed: None,
            event_capacity: 256,
        }
    }
}

/// Shared application state.
pub struct AppState {
    /// Configuration, run guard and published results.
    pub session: Arc<RwLock<Session>>,
    /// Fan-out of run events to WebSocket clients.
    pub events: broadcast::Sender<DashboardEvent>,
    /// Dashboard configuration.
    pub config: DashboardConfig,
}

impl AppState {
    /// Create a new application state with default configuration.
    pub fn new() -> Self {
        Self::with_config(DashboardConfig::default())
    }

    /// Create application state with custom configuration.
    pub fn with_config(config: DashboardConfig) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity.max(1));
        Self {
            session: Arc::new(RwLock::new(Session::default())),
            events,
            config,
        }
    }

    /// Replace the initial molecule configuration.
    pub fn with_molecule_config(self, molecule_config: MoleculeConfig) -> Self {
        Self {
            session: Arc::new(RwLock::new(Session::new(molecule_config))),
            ..self
        }
    }

    /// Subscribe to run events.
    pub fn subscribe(&self) -> broadcast::Receiver<DashboardEvent> {
        self.events.subscribe()
    }

    /// Send an event to every subscriber. Having none is not an error.
    pub fn broadcast(&self, event: DashboardEvent) {
        let _ = self.events.send(event);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
