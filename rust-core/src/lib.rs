//! WAV Spectrum - PCM WAV decoding and FFT magnitude analysis
//!
//! Decodes integer PCM WAV files into normalized per-channel samples and
//! computes the windowed magnitude spectrum of the first segment of a channel.

pub mod audio;
pub mod spectrum;
pub mod report;

pub use audio::{read_wav, Channel, WavError, WavFile};
pub use spectrum::{AnalyzerConfig, Spectrum, SpectrumAnalyzer, WindowType};
pub use report::Report;
