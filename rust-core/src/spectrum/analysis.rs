//! High-level spectrum analyzer
//!
//! Combines windowing, the FFT and spectrum reduction for the first
//! segment of one decoded channel.

use super::fft::FftEngine;
use super::reducer::{reduce, Spectrum, DEFAULT_THRESHOLD};
use super::windowing::{apply_window, WindowType};

/// Default FFT size in frames
pub const DEFAULT_FFT_SIZE: usize = 1024;

/// Spectrum analyzer configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyzerConfig {
    /// Requested FFT size, rounded up to a power of two
    pub fft_size: usize,

    /// Window type for spectral analysis
    pub window_type: WindowType,

    /// Display threshold relative to the dominant magnitude
    pub threshold: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            fft_size: DEFAULT_FFT_SIZE,
            window_type: WindowType::Hann,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Single-segment spectrum analyzer
#[derive(Debug, Clone)]
pub struct SpectrumAnalyzer {
    config: AnalyzerConfig,
    fft_engine: FftEngine,
}

impl SpectrumAnalyzer {
    /// Create new spectrum analyzer
    pub fn new(config: AnalyzerConfig) -> Self {
        let fft_engine = FftEngine::new(config.fft_size);
        Self { config, fft_engine }
    }

    /// Analyze the first segment of `samples`
    ///
    /// # Arguments
    /// * `samples` - Normalized samples of one channel (may be empty)
    /// * `sample_rate` - Sample rate in Hz
    ///
    /// # Returns
    /// Magnitude spectrum of the windowed, zero-padded segment
    pub fn analyze(&self, samples: &[f64], sample_rate: f64) -> Spectrum {
        let mut buffer = apply_window(samples, self.fft_engine.fft_size(), self.config.window_type);
        log::debug!(
            "analyzing {} of {} samples with a {}-point FFT ({} window)",
            samples.len().min(buffer.len()),
            samples.len(),
            buffer.len(),
            self.config.window_type
        );

        self.fft_engine.process(&mut buffer);
        reduce(&buffer, sample_rate)
    }

    /// Effective FFT size (power of two)
    pub fn fft_size(&self) -> usize {
        self.fft_engine.fft_size()
    }

    /// Get current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}
