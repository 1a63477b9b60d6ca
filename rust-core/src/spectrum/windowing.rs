//! Windowing functions for spectral analysis
//!
//! Tapers the analyzed segment before the FFT to reduce spectral leakage

use num_complex::Complex64;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use super::fft::next_power_of_two;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowType {
    /// Hann window: w[n] = 0.5 - 0.5*cos(2πn/(M-1))
    /// Raised cosine, 0 at both ends and 1 at the center
    #[default]
    Hann,

    /// Hamming window: w[n] = 0.54 - 0.46*cos(2πn/(M-1))
    Hamming,

    /// Blackman window: w[n] = 0.42 - 0.5*cos(2πn/(M-1)) + 0.08*cos(4πn/(M-1))
    Blackman,

    /// Rectangular window (no windowing)
    Rectangular,
}

impl FromStr for WindowType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hann" | "hanning" => Ok(WindowType::Hann),
            "hamming" => Ok(WindowType::Hamming),
            "blackman" => Ok(WindowType::Blackman),
            "rectangular" | "rect" | "none" => Ok(WindowType::Rectangular),
            other => Err(format!(
                "unknown window '{}' (expected hann, hamming, blackman or rectangular)",
                other
            )),
        }
    }
}

impl fmt::Display for WindowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WindowType::Hann => "hann",
            WindowType::Hamming => "hamming",
            WindowType::Blackman => "blackman",
            WindowType::Rectangular => "rectangular",
        };
        f.write_str(name)
    }
}

/// Generate window coefficients
///
/// # Arguments
/// * `window_type` - Type of window function
/// * `length` - Number of samples (M)
///
/// # Returns
/// Vector of window coefficients w[n] for n = 0..M-1.
/// For M <= 1 every shape degenerates to unity weight.
pub fn generate_window(window_type: WindowType, length: usize) -> Vec<f64> {
    if length <= 1 || window_type == WindowType::Rectangular {
        return vec![1.0; length];
    }

    let denom = (length - 1) as f64;
    (0..length)
        .map(|n| {
            let angle = 2.0 * PI * n as f64 / denom;
            match window_type {
                WindowType::Hann => 0.5 * (1.0 - angle.cos()),
                WindowType::Hamming => 0.54 - 0.46 * angle.cos(),
                WindowType::Blackman => 0.42 - 0.5 * angle.cos() + 0.08 * (2.0 * angle).cos(),
                WindowType::Rectangular => 1.0,
            }
        })
        .collect()
}

/// Window the start of `samples` into a zero-padded complex FFT buffer
///
/// # Arguments
/// * `samples` - Real input signal
/// * `fft_size` - Requested FFT size, rounded up to a power of two
/// * `window_type` - Taper applied to the segment
///
/// # Returns
/// Buffer of length `next_power_of_two(fft_size)` holding the windowed first
/// `min(len, samples.len())` samples followed by zeros.
pub fn apply_window(samples: &[f64], fft_size: usize, window_type: WindowType) -> Vec<Complex64> {
    let padded_len = next_power_of_two(fft_size);
    let segment_len = padded_len.min(samples.len());
    let window = generate_window(window_type, segment_len);

    let mut buffer = vec![Complex64::new(0.0, 0.0); padded_len];
    for ((out, &s), &w) in buffer.iter_mut().zip(samples).zip(&window) {
        *out = Complex64::new(s * w, 0.0);
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hann_shape() {
        let window = generate_window(WindowType::Hann, 101);

        assert_eq!(window.len(), 101);
        assert!(window[0].abs() < 1e-12);
        assert!(window[100].abs() < 1e-12);
        assert!((window[50] - 1.0).abs() < 1e-12);

        // symmetric
        for i in 0..101 {
            assert!((window[i] - window[100 - i]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_window_generation() {
        let length = 161;

        let hamming = generate_window(WindowType::Hamming, length);
        let blackman = generate_window(WindowType::Blackman, length);

        let center = length / 2;
        assert!((hamming[center] - 1.0).abs() < 1e-10);
        assert!((blackman[center] - 1.0).abs() < 1e-10);

        // Hamming keeps non-zero endpoints (0.08)
        assert!(hamming[0] > 0.07 && hamming[0] < 0.09);
        assert!(blackman[0].abs() < 1e-10);
    }

    #[test]
    fn test_degenerate_lengths_are_unity() {
        for window_type in [
            WindowType::Hann,
            WindowType::Hamming,
            WindowType::Blackman,
            WindowType::Rectangular,
        ] {
            assert!(generate_window(window_type, 0).is_empty());
            assert_eq!(generate_window(window_type, 1), vec![1.0]);
        }
    }

    #[test]
    fn test_apply_window_pads_to_power_of_two() {
        let samples = vec![1.0; 100];
        let buffer = apply_window(&samples, 100, WindowType::Hann);

        assert_eq!(buffer.len(), 128);
        // segment is the full 100 samples
        assert!(buffer[0].norm() < 1e-12);
        assert!(buffer[99].norm() < 1e-12);
        assert!(buffer[50].re > 0.99);
        assert!(buffer[100..].iter().all(|c| *c == Complex64::new(0.0, 0.0)));
        assert!(buffer.iter().all(|c| c.im == 0.0));
    }

    #[test]
    fn test_apply_window_uses_first_segment_only() {
        let samples: Vec<f64> = (0..5000).map(|i| i as f64).collect();
        let buffer = apply_window(&samples, 1024, WindowType::Rectangular);

        assert_eq!(buffer.len(), 1024);
        assert_eq!(buffer[1023].re, 1023.0);
    }

    #[test]
    fn test_apply_window_empty_and_single_sample() {
        let buffer = apply_window(&[], 1024, WindowType::Hann);
        assert_eq!(buffer.len(), 1024);
        assert!(buffer.iter().all(|c| c.norm() == 0.0));

        let buffer = apply_window(&[0.75], 8, WindowType::Hann);
        assert_eq!(buffer.len(), 8);
        assert_eq!(buffer[0].re, 0.75);
        assert!(buffer.iter().all(|c| !c.re.is_nan()));
    }

    #[test]
    fn test_apply_window_zero_size_request() {
        let buffer = apply_window(&[0.5, 0.25], 0, WindowType::Hann);
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer[0].re, 0.5);
    }

    #[test]
    fn test_window_type_parsing() {
        assert_eq!("Hann".parse::<WindowType>(), Ok(WindowType::Hann));
        assert_eq!("hanning".parse::<WindowType>(), Ok(WindowType::Hann));
        assert_eq!("rect".parse::<WindowType>(), Ok(WindowType::Rectangular));
        assert!("kaiser".parse::<WindowType>().is_err());
        assert_eq!(WindowType::Blackman.to_string(), "blackman");
    }
}
