//! Dissociation curve generator.
//!
//! Evaluates a fixed H₂-shaped Morse potential over a fixed grid of bond
//! lengths. The configured molecule and bond length are deliberately not
//! consulted: the curve is the same for every run.

use crate::model::DissociationPoint;

/// Number of points on the curve.
pub const NUM_POINTS: usize = 15;

/// Bond lengths sampled by the generator (Å): 0.40 to 2.50 in 0.15 steps.
pub const BOND_LENGTHS: [f64; NUM_POINTS] = [
    0.40, 0.55, 0.70, 0.85, 1.00, 1.15, 1.30, 1.45, 1.60, 1.75, 1.90, 2.05, 2.20, 2.35, 2.50,
];

/// Energy offset of the curve (Ha).
pub const MORSE_OFFSET: f64 = -1.13727;
/// Well depth `D` (Ha).
pub const MORSE_DEPTH: f64 = 0.4556;
/// Width parameter `a` (1/Å).
pub const MORSE_WIDTH: f64 = 1.44;
/// Equilibrium bond length `re` (Å).
pub const MORSE_EQUILIBRIUM: f64 = 0.74;

/// `E(r) = offset + D (1 - exp(-a (r - re)))² - D`.
pub fn morse_energy(r: f64) -> f64 {
    let x = 1.0 - (-MORSE_WIDTH * (r - MORSE_EQUILIBRIUM)).exp();
    MORSE_OFFSET + MORSE_DEPTH * x * x - MORSE_DEPTH
}

/// One computed point of the curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DissociationStep {
    /// Position of the point on the grid.
    pub index: usize,
    /// The point.
    pub point: DissociationPoint,
    /// Progress after this point (0–100).
    pub progress: f64,
}

/// Iterator over the points of the dissociation curve.
#[derive(Debug, Clone, Default)]
pub struct DissociationGenerator {
    next_index: usize,
}

impl DissociationGenerator {
    /// Create a generator positioned at the first bond length.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the whole curve at once.
    pub fn curve() -> Vec<DissociationPoint> {
        Self::new().map(|step| step.point).collect()
    }
}

impl Iterator for DissociationGenerator {
    type Item = DissociationStep;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next_index;
        let r = *BOND_LENGTHS.get(index)?;
        self.next_index += 1;

        Some(DissociationStep {
            index,
            point: DissociationPoint {
                r,
                energy: morse_energy(r),
            },
            progress: 100.0 * (index + 1) as f64 / NUM_POINTS as f64,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = NUM_POINTS.saturating_sub(self.next_index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DissociationGenerator {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_spacing() {
        assert_eq!(BOND_LENGTHS.len(), 15);
        assert_eq!(BOND_LENGTHS[0], 0.40);
        assert_eq!(BOND_LENGTHS[14], 2.50);
        for pair in BOND_LENGTHS.windows(2) {
            assert!((pair[1] - pair[0] - 0.15).abs() < 1e-9);
        }
    }

    #[test]
    fn test_minimum_at_equilibrium() {
        assert!((morse_energy(MORSE_EQUILIBRIUM) - (-1.59287)).abs() < 1e-12);
    }

    #[test]
    fn test_curve_rises_away_from_minimum() {
        let curve = DissociationGenerator::curve();
        let min = curve
            .iter()
            .min_by(|a, b| a.energy.total_cmp(&b.energy))
            .unwrap();
        // Closest grid point to re = 0.74
        assert_eq!(min.r, 0.70);
        assert!(curve[0].energy > min.energy);
        assert!(curve[14].energy > min.energy);
        // Dissociation limit approaches offset (D cancels as r grows)
        assert!(curve[14].energy < MORSE_OFFSET);
    }

    #[test]
    fn test_progress_reaches_100() {
        let steps: Vec<_> = DissociationGenerator::new().collect();
        assert_eq!(steps.len(), NUM_POINTS);
        assert!((steps[0].progress - 100.0 / 15.0).abs() < 1e-12);
        assert_eq!(steps[14].progress, 100.0);
        assert!(steps.windows(2).all(|w| w[0].progress < w[1].progress));
    }
}
