//! Scalar activations behind the vector transforms.
//!
//! Both functions are rearranged so that `exp` only ever sees a non-positive
//! argument. The literal forms `1 / (1 + 1 / exp(x))` and `ln(1 + exp(x))`
//! overflow once `x` passes ~709; these agree with them to rounding error
//! everywhere the literal forms are finite.

/// Logistic sigmoid: σ(x) = 1 / (1 + e^(-x)).
///
/// `sigmoid(+inf) == 1.0`, `sigmoid(-inf) == 0.0`, NaN propagates.
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Softplus: ln(1 + e^x), evaluated as `max(x, 0) + ln(1 + e^(-|x|))`.
///
/// `softplus(+inf) == +inf`, `softplus(-inf) == 0.0`, NaN propagates.
#[inline]
pub fn softplus(x: f64) -> f64 {
    x.max(0.0) + (-x.abs()).exp().ln_1p()
}
