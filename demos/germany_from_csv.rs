use sirsim::io::covid_csv::{initial_conditions, load_covid_series};
use sirsim::report::{severity_vs_observed, RunSummary};
use sirsim::{SirConfig, SirModel};

/// Re-run the reference Germany scenario against the Kaggle combined
/// time series. Pass the CSV path via DATA_CSV.
fn main() -> anyhow::Result<()> {
    let path = std::env::var("DATA_CSV")
        .unwrap_or_else(|_| "data/time-series-19-covid-combined.csv".to_string());
    let country = std::env::var("COUNTRY").unwrap_or_else(|_| "Germany".to_string());

    let series = load_covid_series(&path, &country)?;
    let n = 83_000_000.0;
    let init = initial_conditions(&series, n)?;

    let cfg = SirConfig {
        beta: 0.3,
        gamma: 0.1,
    };
    let model = SirModel::new(cfg);
    let traj = model.simulate(init, series.len())?;

    println!("date,active_observed,I_model");
    for (day, rec) in series.iter().enumerate() {
        println!("{},{:.0},{:.0}", rec.date, rec.active, traj.i[day]);
    }

    let summary = RunSummary::from_trajectory(&cfg, &traj);
    let observed_active: Vec<f64> = series.iter().map(|d| d.active).collect();
    println!();
    println!(
        "model peak {:.0} on day {} ({})",
        summary.peak_infected, summary.peak_day, series[summary.peak_day].date
    );
    if let Some(severity) = severity_vs_observed(&summary, &observed_active) {
        println!("model peak vs observed peak: {:?}", severity);
    }

    Ok(())
}
