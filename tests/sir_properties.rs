use approx::assert_relative_eq;

use sirsim::{SirConfig, SirModel, SirState};

fn model(beta: f64, gamma: f64) -> SirModel {
    SirModel::new(SirConfig { beta, gamma })
}

#[test]
fn initial_condition_is_preserved_exactly() {
    let traj = model(0.3, 0.1)
        .simulate(SirState::new(999.0, 1.0, 0.0), 50)
        .expect("simulate");
    assert_eq!(traj.s[0], 999.0);
    assert_eq!(traj.i[0], 1.0);
    assert_eq!(traj.r[0], 0.0);
}

#[test]
fn population_is_conserved_at_every_step() {
    let traj = model(0.3, 0.1)
        .simulate(SirState::new(999.0, 1.0, 0.0), 200)
        .expect("simulate");
    let n0 = 1000.0;
    for t in 0..traj.len() {
        let total = traj.s[t] + traj.i[t] + traj.r[t];
        assert_relative_eq!(total, n0, max_relative = 1e-6);
    }
}

#[test]
fn susceptibles_never_increase() {
    let traj = model(0.3, 0.1)
        .simulate(SirState::new(999.0, 1.0, 0.0), 200)
        .expect("simulate");
    for t in 1..traj.len() {
        assert!(
            traj.s[t] <= traj.s[t - 1],
            "S increased at t={}: {} -> {}",
            t,
            traj.s[t - 1],
            traj.s[t]
        );
    }
}

#[test]
fn recovered_never_decrease() {
    let traj = model(0.3, 0.1)
        .simulate(SirState::new(999.0, 1.0, 0.0), 200)
        .expect("simulate");
    for t in 1..traj.len() {
        assert!(
            traj.r[t] >= traj.r[t - 1],
            "R decreased at t={}: {} -> {}",
            t,
            traj.r[t - 1],
            traj.r[t]
        );
    }
}

#[test]
fn zero_transmission_decays_exponentially() {
    let gamma = 0.1;
    let traj = model(0.0, gamma)
        .simulate(SirState::new(500.0, 100.0, 0.0), 60)
        .expect("simulate");
    for t in 0..traj.len() {
        // With beta = 0 the infected compartment follows I' = -gamma * I;
        // one RK4 step at dt = 1 matches exp(-gamma) to its fourth-order
        // Taylor truncation, well inside 1e-4 relative over 60 days.
        let exact = 100.0 * (-gamma * t as f64).exp();
        assert_relative_eq!(traj.i[t], exact, max_relative = 1e-4);
        // dS is identically zero, so S must not move at all.
        assert_eq!(traj.s[t], 500.0);
    }
}

#[test]
fn golden_five_day_scenario() {
    // Reference values computed independently from the same RK4 formulas.
    let expected_s = [
        999.0,
        998.668344031214,
        998.2635719567545,
        997.769665358557,
        997.1671457140674,
    ];
    let expected_i = [
        1.0,
        1.220974937809955,
        1.490615680548283,
        1.819559546887498,
        2.220729550676446,
    ];
    let expected_r = [
        0.0,
        0.11068103097598948,
        0.24581236269718965,
        0.410775094555572,
        0.6121247352562302,
    ];

    let traj = model(0.3, 0.1)
        .simulate(SirState::new(999.0, 1.0, 0.0), 5)
        .expect("simulate");
    assert_eq!(traj.len(), 5);
    for t in 0..5 {
        assert_relative_eq!(traj.s[t], expected_s[t], max_relative = 1e-9);
        assert_relative_eq!(traj.i[t], expected_i[t], max_relative = 1e-9);
        if t == 0 {
            assert_eq!(traj.r[t], 0.0);
        } else {
            assert_relative_eq!(traj.r[t], expected_r[t], max_relative = 1e-9);
        }
    }
}

#[test]
fn single_day_run_returns_only_the_initial_condition() {
    let traj = model(0.3, 0.1)
        .simulate(SirState::new(999.0, 1.0, 0.0), 1)
        .expect("simulate");
    assert_eq!(traj.len(), 1);
    assert_eq!(traj.s, vec![999.0]);
    assert_eq!(traj.i, vec![1.0]);
    assert_eq!(traj.r, vec![0.0]);
}

#[test]
fn zero_days_is_rejected() {
    let err = model(0.3, 0.1)
        .simulate(SirState::new(999.0, 1.0, 0.0), 0)
        .expect_err("days=0 must be rejected");
    assert!(err.to_string().contains("days"), "unexpected error: {err}");
}

#[test]
fn empty_population_is_rejected() {
    let err = model(0.3, 0.1)
        .simulate(SirState::new(0.0, 0.0, 0.0), 10)
        .expect_err("N=0 must be rejected");
    assert!(err.to_string().contains("population"), "unexpected error: {err}");
}

#[test]
fn negative_rates_are_not_rejected() {
    // Out-of-range rates are a caller policy, not an integrator error.
    model(-0.1, -0.05)
        .simulate(SirState::new(999.0, 1.0, 0.0), 10)
        .expect("negative rates are mathematically valid");
}
