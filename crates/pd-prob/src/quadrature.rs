//! Adaptive Gauss–Kronrod quadrature.
//!
//! G7/K15 rule on each segment; the segment with the largest error estimate
//! is bisected until the summed error meets the tolerance or the segment
//! budget is spent. The interval always starts as two halves: a lone K15
//! segment can report zero error when the integrand is odd about its midpoint. Infinite bounds are folded onto a finite interval first:
//!
//! - `(-∞, ∞)`: `x = t / (1 - t²)`, `t ∈ (-1, 1)`
//! - `[a, ∞)`:  `x = a + t / (1 - t)`, `t ∈ [0, 1)`
//! - `(-∞, b]`: `x = b - (1 - t) / t`, `t ∈ (0, 1]`
//!
//! The Kronrod nodes are interior, so the singular endpoints of the
//! substitutions are never evaluated.

use pd_core::{Error, Result};

/// Kronrod abscissae on `[0, 1)`, descending; odd indices are the Gauss nodes.
const XGK: [f64; 8] = [
    0.991_455_371_120_812_6,
    0.949_107_912_342_758_5,
    0.864_864_423_359_769_1,
    0.741_531_185_599_394_4,
    0.586_087_235_467_691_1,
    0.405_845_151_377_397_2,
    0.207_784_955_007_898_5,
    0.0,
];

/// Kronrod weights matching [`XGK`].
const WGK: [f64; 8] = [
    0.022_935_322_010_529_22,
    0.063_092_092_629_978_55,
    0.104_790_010_322_250_2,
    0.140_653_259_715_525_9,
    0.169_004_726_639_267_9,
    0.190_350_578_064_785_4,
    0.204_432_940_075_298_9,
    0.209_482_141_084_727_8,
];

/// 7-point Gauss weights for `XGK[1]`, `XGK[3]`, `XGK[5]`, `XGK[7]`.
const WG: [f64; 4] = [
    0.129_484_966_168_869_7,
    0.279_705_391_489_276_7,
    0.381_830_050_505_118_9,
    0.417_959_183_673_469_4,
];

/// Options for adaptive quadrature.
#[derive(Debug, Clone)]
pub struct QuadOptions {
    /// Relative tolerance (default: 1e-10)
    pub rtol: f64,
    /// Absolute tolerance (default: 1e-12)
    pub atol: f64,
    /// Maximum number of segments (default: 50)
    pub limit: usize,
}

impl Default for QuadOptions {
    fn default() -> Self {
        Self { rtol: 1e-10, atol: 1e-12, limit: 50 }
    }
}

/// Result of adaptive quadrature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadResult {
    /// Integral estimate
    pub value: f64,
    /// Estimated absolute error
    pub error: f64,
    /// Number of integrand evaluations
    pub neval: usize,
    /// Whether the tolerance was met
    pub converged: bool,
}

#[derive(Debug, Clone, Copy)]
struct Segment {
    a: f64,
    b: f64,
    value: f64,
    error: f64,
}

/// Integrate `f` over `[a, b]`; either bound may be infinite.
///
/// Reversed bounds give the negated integral. Hitting `options.limit` is not
/// an error: the best estimate comes back with `converged == false`.
pub fn quad<F>(f: F, a: f64, b: f64, options: &QuadOptions) -> Result<QuadResult>
where
    F: Fn(f64) -> f64,
{
    if a.is_nan() || b.is_nan() {
        return Err(Error::InvalidParameter(format!(
            "integration bounds must not be NaN, got [{}, {}]",
            a, b
        )));
    }
    if options.limit == 0 {
        return Err(Error::InvalidParameter("quadrature limit must be >= 1".to_string()));
    }
    if a == b {
        return Ok(QuadResult { value: 0.0, error: 0.0, neval: 0, converged: true });
    }
    if a > b {
        let r = quad(f, b, a, options)?;
        return Ok(QuadResult { value: -r.value, ..r });
    }

    match (a.is_infinite(), b.is_infinite()) {
        (false, false) => adaptive(&f, a, b, options),
        (true, true) => adaptive(
            &|t: f64| {
                let d = 1.0 - t * t;
                f(t / d) * (1.0 + t * t) / (d * d)
            },
            -1.0,
            1.0,
            options,
        ),
        (false, true) => adaptive(
            &|t: f64| {
                let d = 1.0 - t;
                f(a + t / d) / (d * d)
            },
            0.0,
            1.0,
            options,
        ),
        (true, false) => adaptive(&|t: f64| f(b - (1.0 - t) / t) / (t * t), 0.0, 1.0, options),
    }
}

fn adaptive<G>(g: &G, a: f64, b: f64, options: &QuadOptions) -> Result<QuadResult>
where
    G: Fn(f64) -> f64,
{
    let mid = 0.5 * (a + b);
    let mut segments = vec![kronrod15(g, a, mid)?, kronrod15(g, mid, b)?];
    let mut neval = 30;

    loop {
        let value: f64 = segments.iter().map(|s| s.value).sum();
        let error: f64 = segments.iter().map(|s| s.error).sum();
        if error <= options.atol.max(options.rtol * value.abs()) {
            return Ok(QuadResult { value, error, neval, converged: true });
        }
        if segments.len() >= options.limit {
            tracing::warn!(value, error, segments = segments.len(), "quadrature hit segment limit");
            return Ok(QuadResult { value, error, neval, converged: false });
        }

        let worst = segments
            .iter()
            .enumerate()
            .max_by(|(_, x), (_, y)| x.error.total_cmp(&y.error))
            .map(|(i, _)| i)
            .unwrap_or(0);
        let seg = segments[worst];
        let mid = 0.5 * (seg.a + seg.b);
        if !(seg.a < mid && mid < seg.b) {
            tracing::warn!(value, error, a = seg.a, b = seg.b, "quadrature segment cannot be split");
            return Ok(QuadResult { value, error, neval, converged: false });
        }
        segments.swap_remove(worst);
        segments.push(kronrod15(g, seg.a, mid)?);
        segments.push(kronrod15(g, mid, seg.b)?);
        neval += 30;
    }
}

fn kronrod15<G>(g: &G, a: f64, b: f64) -> Result<Segment>
where
    G: Fn(f64) -> f64,
{
    let center = 0.5 * (a + b);
    let half = 0.5 * (b - a);

    let fc = g(center);
    let mut resk = WGK[7] * fc;
    let mut resg = WG[3] * fc;
    for j in 0..7 {
        let dx = half * XGK[j];
        let pair = g(center - dx) + g(center + dx);
        resk += WGK[j] * pair;
        if j % 2 == 1 {
            resg += WG[j / 2] * pair;
        }
    }

    let value = resk * half;
    let error = ((resk - resg) * half).abs();
    if !value.is_finite() || !error.is_finite() {
        return Err(Error::Computation(format!(
            "integrand is not finite on [{}, {}]",
            a, b
        )));
    }
    Ok(Segment { a, b, value, error })
}
