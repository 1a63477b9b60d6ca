//! Spectral analysis with a radix-2 FFT

pub mod fft;
pub mod windowing;
pub mod reducer;
pub mod analysis;

pub use fft::{next_power_of_two, transform, FftEngine, MAX_FFT_SIZE};
pub use windowing::{apply_window, generate_window, WindowType};
pub use reducer::{reduce, Spectrum, SpectrumEntry};
pub use analysis::{AnalyzerConfig, SpectrumAnalyzer};
