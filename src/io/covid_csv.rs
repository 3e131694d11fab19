use std::collections::BTreeMap;

use anyhow::Context;
use serde::Deserialize;

use crate::model::sir::SirState;

#[derive(Debug, Deserialize)]
struct CovidRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Country/Region")]
    country: String,
    #[serde(rename = "Province/State")]
    #[allow(dead_code)]
    province: Option<String>,
    #[serde(rename = "Confirmed")]
    confirmed: Option<f64>,
    #[serde(rename = "Recovered")]
    recovered: Option<f64>,
    #[serde(rename = "Deaths")]
    deaths: Option<f64>,
}

/// One day of observed counts for a single country, provinces summed.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord {
    pub date: String,
    pub confirmed: f64,
    pub recovered: f64,
    pub deaths: f64,
    /// confirmed - recovered - deaths
    pub active: f64,
}

/// Load the Kaggle combined COVID-19 time series for one country.
///
/// Columns: `Date,Country/Region,Province/State,Confirmed,Recovered,Deaths`.
/// Rows for the same date (multiple provinces) are summed; empty numeric
/// cells count as zero. Dates are ISO-8601 so lexicographic order is
/// chronological order.
pub fn load_covid_series(path: &str, country: &str) -> anyhow::Result<Vec<DailyRecord>> {
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open COVID time series CSV: {}", path))?;

    let mut by_date: BTreeMap<String, (f64, f64, f64)> = BTreeMap::new();
    for result in rdr.deserialize::<CovidRow>() {
        let row = result?;
        if row.country != country {
            continue;
        }
        let entry = by_date.entry(row.date).or_insert((0.0, 0.0, 0.0));
        entry.0 += row.confirmed.unwrap_or(0.0);
        entry.1 += row.recovered.unwrap_or(0.0);
        entry.2 += row.deaths.unwrap_or(0.0);
    }
    anyhow::ensure!(
        !by_date.is_empty(),
        "no rows for country '{}' in {}",
        country,
        path
    );

    let series = by_date
        .into_iter()
        .map(|(date, (confirmed, recovered, deaths))| DailyRecord {
            date,
            confirmed,
            recovered,
            deaths,
            active: confirmed - recovered - deaths,
        })
        .collect();
    Ok(series)
}

/// Derive the SIR initial condition from the first observed day.
///
/// I0 is floored at one case so the epidemic can actually start; R0 takes
/// the recoveries already on the books; S0 is the remainder of the fixed
/// total population `n`.
pub fn initial_conditions(series: &[DailyRecord], n: f64) -> anyhow::Result<SirState> {
    anyhow::ensure!(!series.is_empty(), "observed series is empty");
    anyhow::ensure!(n > 0.0, "total population must be positive (got {})", n);
    let first = &series[0];
    let i0 = first.active.max(1.0);
    let r0 = first.recovered;
    let s0 = n - i0 - r0;
    Ok(SirState::new(s0, i0, r0))
}
