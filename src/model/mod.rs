pub mod diagnostics;
pub mod sir;
