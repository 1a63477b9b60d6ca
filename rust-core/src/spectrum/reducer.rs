//! Magnitude spectrum reduction
//!
//! Turns raw FFT output into normalized magnitudes for the non-negative
//! frequencies and picks out the dominant bin.

use num_complex::Complex64;

/// Default display threshold, relative to the dominant magnitude
pub const DEFAULT_THRESHOLD: f64 = 0.01;

/// One bin of the magnitude spectrum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumEntry {
    /// Bin index in [0, N/2]
    pub bin: usize,

    /// Bin frequency in Hz
    pub frequency: f64,

    /// |X[bin]| / N
    pub magnitude: f64,
}

/// Magnitude spectrum of one transformed segment
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    fft_size: usize,
    bin_width: f64,
    magnitudes: Vec<f64>,
    dominant_bin: usize,
}

impl Spectrum {
    /// FFT size N the spectrum was computed with
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Bin spacing in Hz
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Normalized magnitudes for bins 0..=N/2
    pub fn magnitudes(&self) -> &[f64] {
        &self.magnitudes
    }

    pub fn num_bins(&self) -> usize {
        self.magnitudes.len()
    }

    pub fn entry(&self, bin: usize) -> Option<SpectrumEntry> {
        self.magnitudes.get(bin).map(|&magnitude| SpectrumEntry {
            bin,
            frequency: bin as f64 * self.bin_width,
            magnitude,
        })
    }

    /// Bin with the largest magnitude (lowest index on ties)
    pub fn dominant(&self) -> SpectrumEntry {
        SpectrumEntry {
            bin: self.dominant_bin,
            frequency: self.dominant_bin as f64 * self.bin_width,
            magnitude: self.magnitudes[self.dominant_bin],
        }
    }

    /// Bins whose magnitude exceeds `ratio` times the dominant magnitude
    ///
    /// An all-zero spectrum yields no entries.
    pub fn entries_above(&self, ratio: f64) -> Vec<SpectrumEntry> {
        let cutoff = self.dominant().magnitude * ratio;
        (0..self.magnitudes.len())
            .filter(|&bin| self.magnitudes[bin] > cutoff)
            .filter_map(|bin| self.entry(bin))
            .collect()
    }

    /// Entries above the default 1% threshold
    pub fn entries(&self) -> Vec<SpectrumEntry> {
        self.entries_above(DEFAULT_THRESHOLD)
    }
}

/// Reduce a transformed buffer to its magnitude spectrum
///
/// # Arguments
/// * `transformed` - FFT output of length N (N >= 1)
/// * `sample_rate` - Sample rate in Hz
///
/// # Returns
/// Magnitudes |X[k]| / N for k = 0..=N/2 with the dominant bin
pub fn reduce(transformed: &[Complex64], sample_rate: f64) -> Spectrum {
    let n = transformed.len().max(1);

    let magnitudes: Vec<f64> = if transformed.is_empty() {
        vec![0.0]
    } else {
        transformed[..n / 2 + 1]
            .iter()
            .map(|x| x.norm() / n as f64)
            .collect()
    };

    let mut dominant_bin = 0;
    for (bin, &magnitude) in magnitudes.iter().enumerate() {
        if magnitude > magnitudes[dominant_bin] {
            dominant_bin = bin;
        }
    }

    Spectrum {
        fft_size: n,
        bin_width: sample_rate / n as f64,
        magnitudes,
        dominant_bin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum::fft::transform;
    use std::f64::consts::PI;

    #[test]
    fn test_reduce_sine() {
        let n = 64;
        let mut buffer: Vec<Complex64> = (0..n)
            .map(|i| Complex64::new((2.0 * PI * 5.0 * i as f64 / n as f64).cos(), 0.0))
            .collect();
        transform(&mut buffer);

        let spectrum = reduce(&buffer, 6400.0);
        assert_eq!(spectrum.fft_size(), 64);
        assert_eq!(spectrum.num_bins(), 33);
        assert!((spectrum.bin_width() - 100.0).abs() < 1e-12);

        let peak = spectrum.dominant();
        assert_eq!(peak.bin, 5);
        assert!((peak.frequency - 500.0).abs() < 1e-9);
        // amplitude 1 cosine: N/2 / N
        assert!((peak.magnitude - 0.5).abs() < 1e-9);

        let entries = spectrum.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0], peak);
    }

    #[test]
    fn test_nyquist_bin_included() {
        // alternating +1/-1 is pure Nyquist
        let mut buffer: Vec<Complex64> = (0..16)
            .map(|i| Complex64::new(if i % 2 == 0 { 1.0 } else { -1.0 }, 0.0))
            .collect();
        transform(&mut buffer);

        let spectrum = reduce(&buffer, 16.0);
        assert_eq!(spectrum.num_bins(), 9);
        assert_eq!(spectrum.dominant().bin, 8);
        assert!((spectrum.dominant().frequency - 8.0).abs() < 1e-12);
        assert!((spectrum.dominant().magnitude - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_ties_pick_first_bin() {
        let buffer = vec![
            Complex64::new(0.0, 0.0),
            Complex64::new(3.0, 4.0),
            Complex64::new(-5.0, 0.0),
            Complex64::new(0.0, 0.0),
        ];
        let spectrum = reduce(&buffer, 4.0);
        assert_eq!(spectrum.dominant().bin, 1);
        assert!((spectrum.dominant().magnitude - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_threshold_filter() {
        let buffer = vec![
            Complex64::new(100.0, 0.0),
            Complex64::new(0.5, 0.0),
            Complex64::new(2.0, 0.0),
            Complex64::new(50.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
        ];
        let spectrum = reduce(&buffer, 8000.0);

        let bins: Vec<usize> = spectrum.entries().iter().map(|e| e.bin).collect();
        assert_eq!(bins, vec![0, 2, 3]);

        let bins: Vec<usize> = spectrum.entries_above(0.6).iter().map(|e| e.bin).collect();
        assert_eq!(bins, vec![0]);

        // full spectrum stays available
        assert_eq!(spectrum.magnitudes().len(), 5);
        assert!((spectrum.magnitudes()[1] - 0.5 / 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_all_zero_spectrum() {
        let buffer = vec![Complex64::new(0.0, 0.0); 1024];
        let spectrum = reduce(&buffer, 44100.0);

        assert_eq!(spectrum.num_bins(), 513);
        assert_eq!(spectrum.dominant().bin, 0);
        assert_eq!(spectrum.dominant().magnitude, 0.0);
        assert!(spectrum.entries().is_empty());
    }

    #[test]
    fn test_single_point_spectrum() {
        let spectrum = reduce(&[Complex64::new(0.25, 0.0)], 8000.0);
        assert_eq!(spectrum.num_bins(), 1);
        assert_eq!(spectrum.dominant().bin, 0);
        assert!((spectrum.dominant().magnitude - 0.25).abs() < 1e-12);
        assert!((spectrum.bin_width() - 8000.0).abs() < 1e-12);
    }
}
