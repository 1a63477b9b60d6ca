//! Plain-text analysis report

use std::fmt;
use std::path::Path;

use crate::audio::{Channel, WavFile};
use crate::spectrum::{Spectrum, WindowType};

/// Everything printed for one analysis run
pub struct Report<'a> {
    pub path: &'a Path,
    pub wav: &'a WavFile,
    pub channel: Channel,
    pub window_type: WindowType,
    pub spectrum: &'a Spectrum,

    /// Bins at or below `threshold * peak` are left out of the table
    pub threshold: f64,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = &self.wav.header;

        writeln!(f, "=== WAV Info ===")?;
        writeln!(f, "  File:             {}", self.path.display())?;
        writeln!(f, "  Sample rate:      {} Hz", header.sample_rate)?;
        writeln!(f, "  Channels:         {}", header.channels)?;
        writeln!(f, "  Bits per sample:  {}", header.bits_per_sample)?;
        writeln!(f, "  Total frames:     {}", self.wav.frames())?;
        writeln!(f, "  Duration:         {:.3} s", self.wav.duration_secs())?;
        writeln!(f)?;

        writeln!(
            f,
            "=== FFT Magnitude (first segment, {} points, {} window, {} channel) ===",
            self.spectrum.fft_size(),
            self.window_type,
            self.channel
        )?;
        writeln!(f, "  Bin    |  Freq (Hz)   |  Magnitude")?;
        writeln!(f, "  -------|--------------|------------")?;

        let entries = self.spectrum.entries_above(self.threshold);
        if entries.is_empty() {
            writeln!(f, "  (no bins above threshold)")?;
        }
        for entry in &entries {
            writeln!(
                f,
                "  {:<7}|  {:<12.2}|  {:.6}",
                entry.bin, entry.frequency, entry.magnitude
            )?;
        }
        writeln!(f)?;

        let peak = self.spectrum.dominant();
        writeln!(f, "=== Dominant Peak ===")?;
        write!(
            f,
            "  Bin {} -> {:.2} Hz (mag: {:.6})",
            peak.bin, peak.frequency, peak.magnitude
        )
    }
}
