use serde::Serialize;

use super::sir::SirTrajectory;

/// Which compartment a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Compartment {
    Susceptible,
    Infected,
    Recovered,
}

/// A non-fatal numeric irregularity observed in a finished trajectory.
///
/// Fixed-step RK4 at dt = 1 can push a compartment slightly negative or
/// blow up under extreme parameter choices. The integrator neither clamps
/// nor aborts on this; callers that care run this scan afterwards and
/// decide what to surface.
#[derive(Debug, Clone, Serialize)]
pub struct NumericAnomaly {
    pub step: usize,
    pub compartment: Compartment,
    pub value: f64,
    pub kind: AnomalyKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnomalyKind {
    /// Value below zero by more than the tolerance.
    Negative,
    /// NaN or infinite value.
    NonFinite,
}

/// Absolute tolerance below zero before a value counts as anomalous.
/// Ordinary RK4 truncation noise stays far inside this.
pub const NEGATIVE_TOLERANCE: f64 = 1e-6;

pub fn scan(traj: &SirTrajectory) -> Vec<NumericAnomaly> {
    let mut out = Vec::new();
    let series = [
        (Compartment::Susceptible, &traj.s),
        (Compartment::Infected, &traj.i),
        (Compartment::Recovered, &traj.r),
    ];
    for (compartment, values) in series {
        for (step, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                out.push(NumericAnomaly {
                    step,
                    compartment,
                    value,
                    kind: AnomalyKind::NonFinite,
                });
            } else if value < -NEGATIVE_TOLERANCE {
                out.push(NumericAnomaly {
                    step,
                    compartment,
                    value,
                    kind: AnomalyKind::Negative,
                });
            }
        }
    }
    out.sort_by_key(|a| a.step);
    out
}
