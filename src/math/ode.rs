/// Fixed-step RK4 for a three-component state vector.
///
/// The state dimension is fixed at compile time so a step needs no heap
/// allocation. The derivative closure receives (t, state) and returns the
/// full derivative triple; all three components advance on the same set of
/// stage evaluations.
pub fn rk4_step<F>(y: &mut [f64; 3], t: f64, dt: f64, mut f: F)
where
    F: FnMut(f64, &[f64; 3]) -> [f64; 3],
{
    let k1 = f(t, y);

    let mut ytmp = [0.0; 3];
    for i in 0..3 {
        ytmp[i] = y[i] + 0.5 * dt * k1[i];
    }
    let k2 = f(t + 0.5 * dt, &ytmp);

    for i in 0..3 {
        ytmp[i] = y[i] + 0.5 * dt * k2[i];
    }
    let k3 = f(t + 0.5 * dt, &ytmp);

    for i in 0..3 {
        ytmp[i] = y[i] + dt * k3[i];
    }
    let k4 = f(t + dt, &ytmp);

    for i in 0..3 {
        y[i] += (dt / 6.0) * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]);
    }
}
