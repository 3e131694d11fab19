use anyhow::Context;

use crate::model::sir::{SirConfig, SirTrajectory};

/// Write a plain-text log of one simulation run.
///
/// Header lines carry the parameters, then one `t,S,I,R,total` row per
/// day at six decimal places. Returns the path of the written file.
pub fn write_sir_run_log(
    out_dir: impl AsRef<std::path::Path>,
    run_id: &str,
    cfg: &SirConfig,
    population: f64,
    traj: &SirTrajectory,
) -> anyhow::Result<std::path::PathBuf> {
    use std::io::Write;

    std::fs::create_dir_all(out_dir.as_ref()).context("create logs dir failed")?;
    let path = out_dir.as_ref().join(format!("sir_{}.txt", run_id));
    let mut f = std::fs::File::create(&path)
        .with_context(|| format!("create run log file failed (path={:?})", path))?;

    writeln!(f, "run_id={}", run_id)?;
    writeln!(f, "beta={:.6}", cfg.beta)?;
    writeln!(f, "gamma={:.6}", cfg.gamma)?;
    writeln!(f, "population={:.6}", population)?;
    writeln!(f, "days={}", traj.len())?;
    writeln!(f)?;
    writeln!(f, "t,S,I,R,total")?;

    for t in 0..traj.len() {
        let (s, i, r) = (traj.s[t], traj.i[t], traj.r[t]);
        writeln!(f, "{},{:.6},{:.6},{:.6},{:.6}", t, s, i, r, s + i + r)?;
    }

    Ok(path)
}
