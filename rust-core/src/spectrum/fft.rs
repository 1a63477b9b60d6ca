//! Radix-2 FFT
//!
//! Iterative decimation-in-time Cooley-Tukey transform operating in place
//! on a power-of-two length buffer of `Complex64` values.

use num_complex::Complex64;
use std::f64::consts::PI;

/// Largest FFT size accepted from user input (2^22 points)
pub const MAX_FFT_SIZE: usize = 1 << 22;

/// Smallest power of two >= `n`
///
/// `0` and `1` both map to `1`. Callers bound `n` by [`MAX_FFT_SIZE`].
pub fn next_power_of_two(n: usize) -> usize {
    n.max(1).next_power_of_two()
}

/// Reorder `buffer` so that element `i` moves to the bit-reversed index of `i`
///
/// `buffer.len()` must be a power of two.
pub fn bit_reverse_permutation<T>(buffer: &mut [T]) {
    let n = buffer.len();
    let mut j = 0;
    for i in 1..n {
        // increment j as a bit-reversed counter
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;

        if i < j {
            buffer.swap(i, j);
        }
    }
}

/// Forward, unnormalized DFT computed in place
///
/// X[k] = sum_n x[n] * exp(-2πi·k·n/N). No scaling by `N` is applied.
///
/// # Panics
/// If `buffer.len()` is greater than 1 and not a power of two.
pub fn transform(buffer: &mut [Complex64]) {
    let n = buffer.len();
    if n <= 1 {
        return;
    }
    assert!(
        n.is_power_of_two(),
        "FFT length must be a power of two, got {}",
        n
    );

    bit_reverse_permutation(buffer);

    let mut len = 2;
    while len <= n {
        let half = len / 2;
        let wn = Complex64::from_polar(1.0, -2.0 * PI / len as f64);

        for block in buffer.chunks_exact_mut(len) {
            let (lower, upper) = block.split_at_mut(half);
            let mut w = Complex64::new(1.0, 0.0);
            for (a, b) in lower.iter_mut().zip(upper.iter_mut()) {
                let u = *a;
                let t = w * *b;
                *a = u + t;
                *b = u - t;
                w *= wn;
            }
        }

        len <<= 1;
    }
}

/// FFT of a fixed size with frequency-axis helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FftEngine {
    /// FFT size (power of two)
    fft_size: usize,
}

impl FftEngine {
    /// Create new FFT engine
    ///
    /// # Arguments
    /// * `requested_size` - Requested number of points, rounded up to a power of two
    pub fn new(requested_size: usize) -> Self {
        Self {
            fft_size: next_power_of_two(requested_size),
        }
    }

    /// Transform `buffer` in place
    ///
    /// # Panics
    /// If `buffer.len()` differs from the engine size.
    pub fn process(&self, buffer: &mut [Complex64]) {
        assert_eq!(
            buffer.len(),
            self.fft_size,
            "buffer length does not match FFT size"
        );
        transform(buffer);
    }

    /// Get FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Number of non-negative frequency bins, Nyquist included
    pub fn num_bins(&self) -> usize {
        self.fft_size / 2 + 1
    }

    /// Bin spacing in Hz
    pub fn bin_width(&self, sample_rate: f64) -> f64 {
        sample_rate / self.fft_size as f64
    }

    /// Center frequency of `bin` in Hz
    pub fn bin_to_hz(&self, bin: usize, sample_rate: f64) -> f64 {
        bin as f64 * self.bin_width(sample_rate)
    }
}
