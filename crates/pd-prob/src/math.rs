//! Small exact/stable numeric helpers shared by the models.

use statrs::function::factorial::ln_binomial;

/// `1 / sqrt(2π)`.
pub const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Exact binomial coefficient `C(n, k)`, or `None` if an intermediate product
/// overflows `u128`.
///
/// Multiplicative form: after step `i` the accumulator equals `C(n, i+1)`, so
/// every division is exact.
pub fn choose_exact(n: u64, k: u64) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        acc = acc.checked_mul(u128::from(n - i))? / u128::from(i + 1);
    }
    Some(acc)
}

/// `ln C(n, k)`, used only once the exact coefficient no longer fits.
pub fn ln_choose(n: u64, k: u64) -> f64 {
    ln_binomial(n, k)
}

/// Arithmetic mean. `NaN` for an empty slice; callers validate first.
pub fn mean_of(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sum of squared deviations from `mean`, divided by `len - ddof`.
///
/// `ddof = 1` is the Bessel-corrected sample variance, `ddof = 0` the
/// population variance. Callers guarantee `len > ddof`.
pub fn variance_of(values: &[f64], mean: f64, ddof: usize) -> f64 {
    let ss: f64 = values.iter().map(|x| (x - mean) * (x - mean)).sum();
    ss / (values.len() - ddof) as f64
}
