pub mod calibration;
pub mod io;
pub mod math;
pub mod model;
pub mod report;

pub use model::sir::{SirConfig, SirModel, SirState, SirTrajectory};
pub use report::RunSummary;
