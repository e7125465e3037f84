//! Convergence simulator.
//!
//! Produces the energy trace of a pretend VQE optimisation: each estimate is
//! the molecule's reference energy plus jitter damped by `exp(-0.1 * i)`.
//! Every [`SNAPSHOT_INTERVAL`] iterations a full [`VqeResult`] is attached to
//! the step so the dashboard can publish it.
//!
//! The simulator is a plain [`Iterator`] and never sleeps; pacing is added by
//! [`crate::runner::run_convergence`].

use crate::config::MoleculeConfig;
use crate::jitter::Jitter;
use crate::model::{ConvergencePoint, Diagnostics, VqeResult};

/// Iterations per run. Points are produced for `0..=ITERATION_BUDGET`.
pub const ITERATION_BUDGET: u32 = 50;

/// A snapshot is published whenever `iteration % SNAPSHOT_INTERVAL == 0`.
pub const SNAPSHOT_INTERVAL: u32 = 5;

/// Damping rate of the jitter envelope.
const DECAY_RATE: f64 = 0.1;

/// Noise envelope at iteration `i`: `exp(-0.1 * i)`.
pub fn decay(iteration: u32) -> f64 {
    (-DECAY_RATE * f64::from(iteration)).exp()
}

/// Progress percentage after computing `iteration`.
pub fn progress(iteration: u32) -> f64 {
    100.0 * f64::from(iteration) / f64::from(ITERATION_BUDGET)
}

/// One iteration of the simulator.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceStep {
    /// Newly computed point.
    pub point: ConvergencePoint,
    /// Progress after this point (0–100).
    pub progress: f64,
    /// Snapshot to publish, on every [`SNAPSHOT_INTERVAL`]th iteration.
    pub snapshot: Option<VqeResult>,
}

/// Iterator over the 51 steps of a convergence run.
pub struct ConvergenceSimulator<J> {
    config: MoleculeConfig,
    reference: f64,
    jitter: J,
    next_iteration: u32,
    history: Vec<ConvergencePoint>,
}

impl<J: Jitter> ConvergenceSimulator<J> {
    /// Create a simulator for a configuration. The configuration is copied and
    /// does not change for the lifetime of the run.
    pub fn new(config: &MoleculeConfig, jitter: J) -> Self {
        Self {
            config: config.clone(),
            reference: config.molecule.reference_energy(),
            jitter,
            next_iteration: 0,
            history: Vec::with_capacity(ITERATION_BUDGET as usize + 1),
        }
    }

    /// Convergence target of this run (Ha).
    pub fn reference_energy(&self) -> f64 {
        self.reference
    }

    /// Configuration the run was started with.
    pub fn config(&self) -> &MoleculeConfig {
        &self.config
    }

    /// Points produced so far.
    pub fn history(&self) -> &[ConvergencePoint] {
        &self.history
    }

    /// Whether every iteration has been produced.
    pub fn is_finished(&self) -> bool {
        self.next_iteration > ITERATION_BUDGET
    }

    /// Build a result from the latest point.
    ///
    /// The trace is cloned so the published result never aliases the
    /// simulator's buffer.
    fn snapshot(&self, energy: f64, iteration: u32) -> VqeResult {
        VqeResult {
            energy,
            convergence: self.history.clone(),
            diagnostics: Diagnostics::compute(&self.config, energy, iteration + 1),
        }
    }
}

impl<J: Jitter> Iterator for ConvergenceSimulator<J> {
    type Item = ConvergenceStep;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            return None;
        }

        let iteration = self.next_iteration;
        self.next_iteration += 1;

        let energy = self.reference + decay(iteration) * self.jitter.sample();
        let point = ConvergencePoint { iteration, energy };
        self.history.push(point);

        let snapshot = (iteration % SNAPSHOT_INTERVAL == 0).then(|| self.snapshot(energy, iteration));

        Some(ConvergenceStep {
            point,
            progress: progress(iteration),
            snapshot,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (ITERATION_BUDGET + 1).saturating_sub(self.next_iteration) as usize;
        (remaining, Some(remaining))
    }
}

impl<J: Jitter> ExactSizeIterator for ConvergenceSimulator<J> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Molecule;
    use crate::jitter::{NoJitter, SeededJitter};

    #[test]
    fn test_decay_starts_at_one() {
        assert_eq!(decay(0), 1.0);
        assert!(decay(1) < decay(0));
        assert!((decay(10) - (-1.0f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_progress_bounds() {
        assert_eq!(progress(0), 0.0);
        assert_eq!(progress(25), 50.0);
        assert_eq!(progress(ITERATION_BUDGET), 100.0);
    }

    #[test]
    fn test_zero_jitter_hits_reference() {
        for molecule in Molecule::ALL {
            let config = MoleculeConfig::for_molecule(molecule);
            for step in ConvergenceSimulator::new(&config, NoJitter) {
                assert_eq!(step.point.energy, molecule.reference_energy());
                if let Some(snapshot) = step.snapshot {
                    assert_eq!(snapshot.diagnostics.error, 0.0);
                }
            }
        }
    }

    #[test]
    fn test_snapshot_schedule() {
        let steps: Vec<_> =
            ConvergenceSimulator::new(&MoleculeConfig::default(), NoJitter).collect();
        assert_eq!(steps.len(), 51);

        let snapshot_iterations: Vec<u32> = steps
            .iter()
            .filter(|s| s.snapshot.is_some())
            .map(|s| s.point.iteration)
            .collect();
        assert_eq!(snapshot_iterations, (0..=50).step_by(5).collect::<Vec<_>>());

        let last = steps.last().and_then(|s| s.snapshot.as_ref()).unwrap();
        assert_eq!(last.diagnostics.evaluations, 51);
        assert_eq!(last.convergence.len(), 51);
    }

    #[test]
    fn test_snapshot_carries_trace_so_far() {
        let mut sim = ConvergenceSimulator::new(&MoleculeConfig::default(), SeededJitter::from_seed(3));
        let steps: Vec<_> = sim.by_ref().take(11).collect();
        let snapshot = steps[10].snapshot.as_ref().unwrap();

        assert_eq!(snapshot.convergence.len(), 11);
        assert_eq!(snapshot.energy, steps[10].point.energy);
        assert_eq!(snapshot.convergence, sim.history());
    }

    #[test]
    fn test_error_tracks_latest_energy() {
        let config = MoleculeConfig::for_molecule(Molecule::LiH);
        for step in ConvergenceSimulator::new(&config, SeededJitter::from_seed(11)) {
            if let Some(snapshot) = step.snapshot {
                let expected = (snapshot.energy - config.molecule.reference_energy()).abs() * 1000.0;
                assert_eq!(snapshot.diagnostics.error, expected);
            }
        }
    }

    #[test]
    fn test_noise_is_damped() {
        let config = MoleculeConfig::default();
        let reference = config.molecule.reference_energy();
        for step in ConvergenceSimulator::new(&config, SeededJitter::from_seed(5)) {
            let deviation = (step.point.energy - reference).abs();
            assert!(deviation <= 0.005 * decay(step.point.iteration) + 1e-15);
        }
    }

    #[test]
    fn test_size_hint_counts_down() {
        let mut sim = ConvergenceSimulator::new(&MoleculeConfig::default(), NoJitter);
        assert_eq!(sim.len(), 51);
        sim.next();
        assert_eq!(sim.len(), 50);
        assert!(!sim.is_finished());
        sim.by_ref().for_each(drop);
        assert!(sim.is_finished());
        assert_eq!(sim.len(), 0);
    }
}
