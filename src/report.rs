use serde::Serialize;

use crate::model::sir::{SirConfig, SirTrajectory};

/// How aggressively the epidemic spreads, judged on the beta/gamma ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpreadLevel {
    /// beta/gamma > 1.5
    Aggressive,
    /// beta/gamma > 1.0
    Elevated,
    /// beta/gamma <= 1.0
    Controlled,
}

/// Simulated peak relative to the observed peak of active cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Simulated peak more than 20% above the observed one.
    Worse,
    /// Simulated peak more than 20% below the observed one.
    Milder,
    Similar,
}

/// Headline numbers of a finished run. Pure data; any narrative rendering
/// belongs to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub peak_infected: f64,
    pub peak_day: usize,
    pub final_active: f64,
    pub transmission_ratio: f64,
    pub spread_level: SpreadLevel,
}

impl RunSummary {
    pub fn from_trajectory(cfg: &SirConfig, traj: &SirTrajectory) -> Self {
        let mut peak_infected = f64::NEG_INFINITY;
        let mut peak_day = 0;
        for (t, &v) in traj.i.iter().enumerate() {
            if v > peak_infected {
                peak_infected = v;
                peak_day = t;
            }
        }
        let final_active = *traj.i.last().unwrap_or(&0.0);
        let transmission_ratio = cfg.r0();
        let spread_level = if transmission_ratio > 1.5 {
            SpreadLevel::Aggressive
        } else if transmission_ratio > 1.0 {
            SpreadLevel::Elevated
        } else {
            SpreadLevel::Controlled
        };
        Self {
            peak_infected,
            peak_day,
            final_active,
            transmission_ratio,
            spread_level,
        }
    }
}

/// Compare the simulated peak of infections against the observed peak of
/// active cases. Returns None when the observed series has no positive
/// peak to compare against.
pub fn severity_vs_observed(summary: &RunSummary, observed_active: &[f64]) -> Option<Severity> {
    let real_peak = observed_active.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if !(real_peak > 0.0) {
        return None;
    }
    let ratio = summary.peak_infected / real_peak;
    Some(if ratio > 1.2 {
        Severity::Worse
    } else if ratio < 0.8 {
        Severity::Milder
    } else {
        Severity::Similar
    })
}
