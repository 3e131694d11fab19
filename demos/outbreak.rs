use sirsim::calibration::beta_from_r0;
use sirsim::report::RunSummary;
use sirsim::{SirConfig, SirModel, SirState};

fn main() -> anyhow::Result<()> {
    // Toy single-population outbreak; no input files needed.
    let gamma = 1.0 / 10.0; // infectious mean 10 days
    let r0 = 2.5;
    let beta = beta_from_r0(gamma, r0);

    let cfg = SirConfig { beta, gamma };
    let model = SirModel::new(cfg);

    // One seed case in a population of one million.
    let n = 1_000_000.0;
    let init = SirState::new(n - 1.0, 1.0, 0.0);

    let traj = model.simulate(init, 180)?;

    println!("day,S,I,R");
    for t in (0..traj.len()).step_by(5) {
        println!("{},{:.0},{:.0},{:.0}", t, traj.s[t], traj.i[t], traj.r[t]);
    }

    let summary = RunSummary::from_trajectory(&cfg, &traj);
    println!();
    println!(
        "peak {:.0} infected on day {}, {:.0} still active on day {}",
        summary.peak_infected,
        summary.peak_day,
        summary.final_active,
        traj.len() - 1
    );
    println!(
        "beta/gamma = {:.2} ({:?})",
        summary.transmission_ratio, summary.spread_level
    );

    Ok(())
}
