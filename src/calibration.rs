/// Compute beta for a target basic reproduction number.
///
/// For unstructured SIR, R0 = beta / gamma, so beta = R0 * gamma. This is
/// a closed-form conversion, not a fit against observed data.
pub fn beta_from_r0(gamma: f64, r0: f64) -> f64 {
    r0 * gamma
}
