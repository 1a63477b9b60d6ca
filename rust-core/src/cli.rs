use clap::Parser;
use std::path::PathBuf;

use wav_spectrum::spectrum::{MAX_FFT_SIZE, WindowType};
use wav_spectrum::Channel;

#[derive(Parser, Debug)]
#[command(
    name = "wav-spectrum",
    version,
    about = "Print the FFT magnitude spectrum of the first segment of a PCM WAV file"
)]
pub struct Cli {
    /// Input PCM WAV file
    pub input: PathBuf,

    /// FFT size in frames (rounded up to the next power of two)
    #[arg(default_value_t = 1024, value_parser = parse_fft_size)]
    pub fft_size: usize,

    /// Window applied to the segment (hann, hamming, blackman, rectangular)
    #[arg(short, long, default_value_t = WindowType::Hann)]
    pub window: WindowType,

    /// Channel to analyze (left, right)
    #[arg(short, long, default_value_t = Channel::Left)]
    pub channel: Channel,

    /// Only list bins above this fraction of the peak magnitude
    #[arg(short, long, default_value_t = 0.01, value_parser = parse_threshold)]
    pub threshold: f64,
}

fn parse_fft_size(s: &str) -> Result<usize, String> {
    let size: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid FFT size", s))?;
    if size > MAX_FFT_SIZE {
        return Err(format!("FFT size must be at most {}", MAX_FFT_SIZE));
    }
    Ok(size)
}

fn parse_threshold(s: &str) -> Result<f64, String> {
    let ratio: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid threshold", s))?;
    if !ratio.is_finite() || ratio < 0.0 {
        return Err(format!("threshold must be a finite value >= 0, got {}", s));
    }
    Ok(ratio)
}
