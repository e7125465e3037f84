//! Paced drivers for the generators.
//!
//! Each driver runs as a single task, waits its step delay before computing
//! each step and sends [`RunEvent`]s down an mpsc channel. Steps are strictly
//! sequential: step `i` is fully sent before step `i + 1` is computed.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::debug;

use crate::convergence::ConvergenceSimulator;
use crate::dissociation::DissociationGenerator;
use crate::error::{Result, VqeError};
use crate::event::RunEvent;
use crate::jitter::Jitter;

/// Delay between steps of each generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Delay before each convergence iteration.
    pub convergence_step: Duration,
    /// Delay before each dissociation point.
    pub dissociation_step: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            convergence_step: Duration::from_millis(100),
            dissociation_step: Duration::from_millis(200),
        }
    }
}

impl Pacing {
    /// No delays; steps only yield to the runtime.
    pub fn immediate() -> Self {
        Self {
            convergence_step: Duration::ZERO,
            dissociation_step: Duration::ZERO,
        }
    }
}

async fn pace(delay: Duration) {
    if delay.is_zero() {
        tokio::task::yield_now().await;
    } else {
        tokio::time::sleep(delay).await;
    }
}

async fn send(events: &mpsc::Sender<RunEvent>, event: RunEvent) -> Result<()> {
    events.send(event).await.map_err(|_| VqeError::ChannelClosed)
}

/// Drive a convergence simulator to completion.
///
/// Per iteration: `Point`, then `Progress`, then `Snapshot` on snapshot
/// iterations. Ends with `Finished`.
pub async fn run_convergence<J: Jitter>(
    mut simulator: ConvergenceSimulator<J>,
    step_delay: Duration,
    events: mpsc::Sender<RunEvent>,
) -> Result<()> {
    while !simulator.is_finished() {
        pace(step_delay).await;
        let Some(step) = simulator.next() else {
            break;
        };

        send(&events, RunEvent::Point(step.point)).await?;
        send(&events, RunEvent::Progress(step.progress)).await?;
        if let Some(snapshot) = step.snapshot {
            debug!("Publishing snapshot at iteration {}", step.point.iteration);
            send(&events, RunEvent::Snapshot(snapshot)).await?;
        }
    }
    send(&events, RunEvent::Finished).await
}

/// Drive the dissociation generator to completion.
///
/// Emits `Progress` per point, then the whole curve once, then `Finished`.
pub async fn run_dissociation(
    generator: DissociationGenerator,
    step_delay: Duration,
    events: mpsc::Sender<RunEvent>,
) -> Result<()> {
    let mut curve = Vec::with_capacity(generator.len());
    for step in generator {
        pace(step_delay).await;

        curve.push(step.point);
        send(&events, RunEvent::Progress(step.progress)).await?;
    }
    send(&events, RunEvent::Curve(curve)).await?;
    send(&events, RunEvent::Finished).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MoleculeConfig;
    use crate::jitter::{NoJitter, SeededJitter};

    async fn collect(mut rx: mpsc::Receiver<RunEvent>) -> Vec<RunEvent> {
        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn test_convergence_event_order() {
        let (tx, rx) = mpsc::channel(8);
        let sim = ConvergenceSimulator::new(&MoleculeConfig::default(), NoJitter);
        let driver = tokio::spawn(run_convergence(sim, Duration::ZERO, tx));

        let events = collect(rx).await;
        driver.await.unwrap().unwrap();

        // 51 points + 51 progress + 11 snapshots + finished
        assert_eq!(events.len(), 51 + 51 + 11 + 1);
        assert!(matches!(events[0], RunEvent::Point(p) if p.iteration == 0));
        assert!(matches!(events[1], RunEvent::Progress(p) if p == 0.0));
        assert!(matches!(events[2], RunEvent::Snapshot(_)));
        assert!(events.last().unwrap().is_terminal());

        let snapshots = events
            .iter()
            .filter(|e| matches!(e, RunEvent::Snapshot(_)))
            .count();
        assert_eq!(snapshots, 11);
    }

    #[tokio::test]
    async fn test_dissociation_publishes_curve_once() {
        let (tx, rx) = mpsc::channel(4);
        let driver = tokio::spawn(run_dissociation(
            DissociationGenerator::new(),
            Duration::ZERO,
            tx,
        ));

        let events = collect(rx).await;
        driver.await.unwrap().unwrap();

        assert_eq!(events.len(), 15 + 2);
        let curves: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                RunEvent::Curve(curve) => Some(curve),
                _ => None,
            })
            .collect();
        assert_eq!(curves.len(), 1);
        assert_eq!(curves[0].len(), 15);
        assert!(matches!(events[15], RunEvent::Curve(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dissociation_pacing() {
        let (tx, rx) = mpsc::channel(32);
        let start = tokio::time::Instant::now();
        let driver = tokio::spawn(run_dissociation(
            DissociationGenerator::new(),
            Pacing::default().dissociation_step,
            tx,
        ));

        collect(rx).await;
        driver.await.unwrap().unwrap();
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(15 * 200), "elapsed {elapsed:?}");
        assert!(elapsed < Duration::from_millis(16 * 200), "elapsed {elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_convergence_pacing() {
        let (tx, mut rx) = mpsc::channel(256);
        let start = tokio::time::Instant::now();
        let sim = ConvergenceSimulator::new(&MoleculeConfig::default(), SeededJitter::from_seed(5));
        let driver = tokio::spawn(run_convergence(sim, Pacing::default().convergence_step, tx));

        // Each point arrives one step after the previous one
        let mut arrivals = Vec::new();
        while let Some(event) = rx.recv().await {
            if let RunEvent::Point(point) = event {
                arrivals.push((point.iteration, start.elapsed()));
            }
        }
        driver.await.unwrap().unwrap();

        assert_eq!(arrivals.len(), 51);
        for (iteration, at) in &arrivals {
            assert!(*at >= Duration::from_millis(100 * (u64::from(*iteration) + 1)));
        }
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(51 * 100), "elapsed {elapsed:?}");
        assert!(elapsed < Duration::from_millis(52 * 100), "elapsed {elapsed:?}");
    }

    #[tokio::test]
    async fn test_closed_channel_stops_driver() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let sim = ConvergenceSimulator::new(&MoleculeConfig::default(), NoJitter);
        let err = run_convergence(sim, Duration::ZERO, tx).await.unwrap_err();
        assert!(matches!(err, VqeError::ChannelClosed));
    }
}
