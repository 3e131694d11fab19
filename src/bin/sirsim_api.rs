use std::net::SocketAddr;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use sirsim::io::covid_csv::{initial_conditions, load_covid_series};
use sirsim::report::{severity_vs_observed, RunSummary, Severity};
use sirsim::{SirConfig, SirModel, SirState};

const DEFAULT_POPULATION: f64 = 83_000_000.0;

#[derive(Clone)]
struct AppState {
    /// Path of the observed case-count CSV, if one was configured.
    data_csv: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RunRequest {
    beta: f64,
    gamma: f64,
    days: Option<usize>,

    // Either explicit initial compartments...
    s0: Option<f64>,
    i0: Option<f64>,
    r0: Option<f64>,

    // ...or derive them from the configured CSV.
    country: Option<String>,
    population: Option<f64>,
}

#[derive(Debug, Serialize)]
struct RunResponse {
    days: usize,
    population: f64,
    summary: RunSummary,
    severity_vs_observed: Option<Severity>,
    s: Vec<f64>,
    i: Vec<f64>,
    r: Vec<f64>,
}

#[tokio::main]
async fn main() {
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8000);
    let data_csv = std::env::var("DATA_CSV").ok();

    let state = AppState { data_csv };

    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/run_simulation", post(run_simulation))
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse().expect("invalid HOST/PORT");
    println!("[sirsim-api] listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.expect("bind failed");
    axum::serve(listener, app).await.expect("server failed");
}

async fn healthz() -> impl IntoResponse {
    Json(json!({"ok": true}))
}

async fn run_simulation(State(st): State<AppState>, Json(req): Json<RunRequest>) -> impl IntoResponse {
    // CSV parsing and integration are blocking work; keep them off the
    // async executor.
    let join = tokio::task::spawn_blocking(move || run_simulation_sync(&st, req));

    match join.await {
        Ok(Ok(resp)) => (StatusCode::OK, Json(resp)).into_response(),
        Ok(Err((code, body))) => (code, Json(body)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("join error: {e}")})),
        )
            .into_response(),
    }
}

fn run_simulation_sync(
    st: &AppState,
    req: RunRequest,
) -> Result<RunResponse, (StatusCode, serde_json::Value)> {
    let cfg = SirConfig {
        beta: req.beta,
        gamma: req.gamma,
    };

    let mut observed_active: Option<Vec<f64>> = None;
    let (init, days) = match (req.s0, req.i0, req.r0) {
        (Some(s0), Some(i0), Some(r0)) => {
            let days = req.days.ok_or_else(|| {
                bad_request("days is required with explicit initial compartments")
            })?;
            (SirState::new(s0, i0, r0), days)
        }
        (None, None, None) => {
            let path = st.data_csv.as_deref().ok_or_else(|| {
                bad_request("no initial compartments given and DATA_CSV is not configured")
            })?;
            let country = req.country.as_deref().unwrap_or("Germany");
            let series = load_covid_series(path, country)
                .map_err(|e| bad_request(&format!("loading observed series failed: {e:#}")))?;
            let n = req.population.unwrap_or(DEFAULT_POPULATION);
            let init = initial_conditions(&series, n)
                .map_err(|e| bad_request(&format!("{e:#}")))?;
            let days = req.days.unwrap_or(series.len());
            observed_active = Some(series.iter().map(|d| d.active).collect());
            (init, days)
        }
        _ => {
            return Err(bad_request(
                "s0, i0 and r0 must be given together (or all omitted to use the CSV)",
            ))
        }
    };

    let model = SirModel::new(cfg);
    let traj = model
        .simulate(init, days)
        .map_err(|e| bad_request(&format!("{e:#}")))?;

    let summary = RunSummary::from_trajectory(&cfg, &traj);
    let severity = observed_active
        .as_deref()
        .and_then(|active| severity_vs_observed(&summary, active));

    Ok(RunResponse {
        days: traj.len(),
        population: init.total(),
        summary,
        severity_vs_observed: severity,
        s: traj.s,
        i: traj.i,
        r: traj.r,
    })
}

fn bad_request(msg: &str) -> (StatusCode, serde_json::Value) {
    (StatusCode::BAD_REQUEST, json!({"error": msg}))
}
