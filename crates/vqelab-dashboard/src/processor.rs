//! Background run processor: starts a generator and folds its events into the session.
//!
//! Every run is two tasks: the producer from [`vqelab_core::runner`] and a
//! consumer that holds the [`RunTicket`], applies each event to the session
//! and then re-broadcasts it to WebSocket clients.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use vqelab_core::runner::{run_convergence, run_dissociation};
use vqelab_core::{
    ConvergenceSimulator, DissociationGenerator, RunEvent, RunId, RunKind, RunTicket, SeededJitter,
};

use crate::error::ApiError;
use crate::state::AppState;
use crate::ws::events::DashboardEvent;

/// Events buffered between producer and consumer.
const RUN_EVENT_BUFFER: usize = 64;

/// Start a run of the given kind in the background.
///
/// Fails with a conflict if a run is already in flight; otherwise returns as
/// soon as the guard is taken.
pub async fn start_run(state: &Arc<AppState>, kind: RunKind) -> Result<RunId, ApiError> {
    let (ticket, config) = {
        let mut session = state.session.write().await;
        let ticket = session.try_start(kind)?;
        state.broadcast(DashboardEvent::RunStarted {
            run_id: ticket.id().to_string(),
            kind,
        });
        (ticket, session.config().clone())
    };
    let run_id = ticket.id();

    let (tx, rx) = mpsc::channel(RUN_EVENT_BUFFER);
    let pacing = state.config.pacing;
    let producer = match kind {
        RunKind::Convergence => {
            let jitter = state
                .config
                .seed
                .map_or_else(SeededJitter::from_entropy, SeededJitter::from_seed);
            let simulator = ConvergenceSimulator::new(&config, jitter);
            tokio::spawn(run_convergence(simulator, pacing.convergence_step, tx))
        }
        RunKind::Dissociation => tokio::spawn(run_dissociation(
            DissociationGenerator::new(),
            pacing.dissociation_step,
            tx,
        )),
    };

    tokio::spawn(consume_events(Arc::clone(state), ticket, rx, producer));
    Ok(run_id)
}

async fn consume_events(
    state: Arc<AppState>,
    ticket: RunTicket,
    mut events: mpsc::Receiver<RunEvent>,
    producer: JoinHandle<vqelab_core::Result<()>>,
) {
    while let Some(event) = events.recv().await {
        let outgoing = DashboardEvent::from_run_event(ticket.id(), ticket.kind(), &event);
        let terminal = event.is_terminal();

        // Broadcast under the lock so no later run's events can overtake this one
        let mut session = state.session.write().await;
        if let Err(e) = session.apply(&ticket, event) {
            warn!("Dropping events of run {}: {}", ticket.id(), e);
            break;
        }
        state.broadcast(outgoing);
        drop(session);

        if terminal {
            break;
        }
    }
    drop(events);

    match producer.await {
        Ok(Ok(())) => info!("Run {} ({}) completed", ticket.id(), ticket.kind()),
        Ok(Err(e)) => error!("Run {} ({}) failed: {}", ticket.id(), ticket.kind(), e),
        Err(e) => error!("Run {} ({}) panicked: {}", ticket.id(), ticket.kind(), e),
    }

    // A producer that stopped early never sent `Finished`; release the guard anyway
    let mut session = state.session.write().await;
    if session.state().active().map(|(_, id)| id) == Some(ticket.id()) {
        let _ = session.finish(&ticket);
        state.broadcast(DashboardEvent::RunFinished {
            run_id: ticket.id().to_string(),
            kind: ticket.kind(),
        });
    }
}
