//! Row kernels shared by every table builder.
//!
//! Expectancy rows hold one value per dealer up-card, so most calls work on
//! ten lanes at a time. All kernels operate on the overlapping prefix of
//! their arguments; callers pass rows of equal width.
//!
//! - [`fill`]: `dst[i] = value`
//! - [`copy`]: `dst[i] = src[i]`
//! - [`scale`]: `x[i] *= a`
//! - [`accumulate`]: `y[i] += a * x[i]`
//! - [`accumulate_strided`]: `y[i * ys] += a * x[i * xs]`, walks columns of wider rows
//! - [`accumulate_max`]: `y[i] += a * max(x[i], x_alt[i])`
//! - [`compare_and_track_max`]: `y[i] = max(y[i], x[i])`, returns the lanes where `x` won

#[inline]
pub fn fill(dst: &mut [f64], value: f64) {
    for d in dst.iter_mut() {
        *d = value;
    }
}

#[inline]
pub fn copy(src: &[f64], dst: &mut [f64]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d = *s;
    }
}

#[inline]
pub fn scale(a: f64, x: &mut [f64]) {
    for v in x.iter_mut() {
        *v *= a;
    }
}

#[inline]
pub fn accumulate(a: f64, x: &[f64], y: &mut [f64]) {
    for (d, s) in y.iter_mut().zip(x) {
        *d += a * s;
    }
}

/// `y[i * y_stride] += a * x[i * x_stride]` for `i` in `0..n`.
///
/// # Panics
///
/// Panics if either slice is too short for `n` strided lanes.
#[inline]
pub fn accumulate_strided(
    n: usize,
    a: f64,
    x: &[f64],
    x_stride: usize,
    y: &mut [f64],
    y_stride: usize,
) {
    for i in 0..n {
        y[i * y_stride] += a * x[i * x_stride];
    }
}

/// `y[i] += a * max(x[i], x_alt[i])`.
#[inline]
pub fn accumulate_max(a: f64, x: &[f64], x_alt: &[f64], y: &mut [f64]) {
    for ((d, s), alt) in y.iter_mut().zip(x).zip(x_alt) {
        *d += a * s.max(*alt);
    }
}

/// Raises `y` to `x` lane by lane and reports which lanes were raised.
///
/// Bit `i` of the result is set when `x[i] > y[i]`; ties keep `y`. Only the
/// first 16 lanes can be reported.
#[inline]
pub fn compare_and_track_max(x: &[f64], y: &mut [f64]) -> u16 {
    let mut mask = 0u16;
    for (i, (d, s)) in y.iter_mut().zip(x).enumerate().take(16) {
        if *s > *d {
            *d = *s;
            mask |= 1 << i;
        }
    }
    mask
}
