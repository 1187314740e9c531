/// Linear interpolation `a + (b - a) * t`.
///
/// `t` is not clamped; callers pass normalized progress.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Clamp `t` into `[0, 1]`, mapping NaN to 0.
pub fn clamp01(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

/// Normalized position of `v` in `[a, b]`, clamped to `[0, 1]`.
///
/// Degenerate ranges (`a == b`) report 1 once `v` reaches `a`.
pub fn inverse_lerp_clamped(a: f64, b: f64, v: f64) -> f64 {
    let span = b - a;
    if span == 0.0 {
        return if v >= a { 1.0 } else { 0.0 };
    }
    clamp01((v - a) / span)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
