use serde::{Deserialize, Serialize};

use crate::math::ode::rk4_step;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SirConfig {
    // Rates (per day)
    pub beta: f64,  // transmission rate
    pub gamma: f64, // recovery rate, 1/infectious mean
}

impl SirConfig {
    /// Basic reproduction number for the unstructured SIR system.
    pub fn r0(&self) -> f64 {
        self.beta / self.gamma
    }
}

/// Compartment counts at a single time point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SirState {
    pub s: f64,
    pub i: f64,
    pub r: f64,
}

impl SirState {
    pub fn new(s: f64, i: f64, r: f64) -> Self {
        Self { s, i, r }
    }

    pub fn total(&self) -> f64 {
        self.s + self.i + self.r
    }
}

/// Daily S/I/R series of identical length; index 0 is the initial condition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SirTrajectory {
    pub s: Vec<f64>,
    pub i: Vec<f64>,
    pub r: Vec<f64>,
}

impl SirTrajectory {
    pub fn len(&self) -> usize {
        self.s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.s.is_empty()
    }

    pub fn at(&self, t: usize) -> SirState {
        SirState::new(self.s[t], self.i[t], self.r[t])
    }
}

pub struct SirModel {
    pub cfg: SirConfig,
}

impl SirModel {
    pub fn new(cfg: SirConfig) -> Self {
        Self { cfg }
    }

    /// Instantaneous SIR derivatives (dS, dI, dR) at the given state.
    ///
    /// Pure function of its inputs. Transiently negative S/I/R values are
    /// legal here: RK4 stage points may overshoot the physical range, and
    /// the integrator needs the true derivative there, not a clamped one.
    /// `n` must be strictly positive; `simulate` checks that once up front.
    pub fn deriv(&self, _t: f64, y: &[f64; 3], n: f64) -> [f64; 3] {
        let [s, i, _r] = *y;
        let infection = self.cfg.beta * s * i / n;
        [-infection, infection - self.cfg.gamma * i, self.cfg.gamma * i]
    }

    /// Integrate the SIR system with classical RK4 at dt = 1 day.
    ///
    /// Produces series of length `days`, with `init` at index 0 and
    /// `days - 1` integration steps after it. The total population
    /// N = S0 + I0 + R0 is fixed once here and reused for every stage
    /// evaluation of every step.
    pub fn simulate(&self, init: SirState, days: usize) -> anyhow::Result<SirTrajectory> {
        anyhow::ensure!(days >= 1, "days must be >= 1 (got {})", days);
        let n = init.total();
        anyhow::ensure!(
            n > 0.0,
            "total population S0 + I0 + R0 must be positive (got {})",
            n
        );

        let mut traj = SirTrajectory {
            s: Vec::with_capacity(days),
            i: Vec::with_capacity(days),
            r: Vec::with_capacity(days),
        };
        let mut y = [init.s, init.i, init.r];
        traj.s.push(y[0]);
        traj.i.push(y[1]);
        traj.r.push(y[2]);

        let dt = 1.0;
        for t in 0..days - 1 {
            rk4_step(&mut y, t as f64, dt, |tt, yy| self.deriv(tt, yy, n));
            traj.s.push(y[0]);
            traj.i.push(y[1]);
            traj.r.push(y[2]);
        }
        Ok(traj)
    }
}
