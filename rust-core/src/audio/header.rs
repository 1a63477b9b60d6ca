//! RIFF/WAVE header decoding
//!
//! Reads the fixed 36-byte region at the start of a PCM WAV file
//! (RIFF descriptor + `fmt ` chunk) field by field from a byte cursor.

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Read, Seek, SeekFrom};

use super::reader::WavError;

pub const RIFF_MARKER: [u8; 4] = *b"RIFF";
pub const WAVE_MARKER: [u8; 4] = *b"WAVE";
pub const FMT_MARKER: [u8; 4] = *b"fmt ";
pub const DATA_MARKER: [u8; 4] = *b"data";

/// Format code for uncompressed integer PCM
pub const WAVE_FORMAT_PCM: u16 = 1;

/// Size of the `fmt ` body for plain PCM
const PCM_FMT_SIZE: u32 = 16;

/// Decoded WAV header
///
/// Built once by [`WavHeader::read_from`] and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// Declared RIFF size (file size - 8)
    pub riff_size: u32,

    /// Length of the `fmt ` chunk body
    pub fmt_size: u32,

    /// Numeric format code (1 = PCM)
    pub audio_format: u16,

    pub channels: u16,

    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Bytes per second (informational)
    pub byte_rate: u32,

    /// Bytes per frame
    pub block_align: u16,

    pub bits_per_sample: u16,
}

impl WavHeader {
    /// Read and validate the header from the start of `reader`
    ///
    /// On success the reader is positioned at the first chunk following
    /// the `fmt ` chunk.
    ///
    /// # Errors
    /// * `WavError::Io` if the stream ends inside the `fmt ` chunk
    /// * `WavError::Format` on a bad marker, an input shorter than the
    ///   RIFF/WAVE descriptor or an inconsistent field
    /// * `WavError::UnsupportedFormat` for non-PCM data or an unsupported bit depth
    pub fn read_from<R: Read + Seek>(reader: &mut R) -> Result<Self, WavError> {
        let riff_id = read_descriptor_tag(reader)?;
        if riff_id != RIFF_MARKER {
            return Err(WavError::Format(format!(
                "not a RIFF/WAVE file (found {:?})",
                String::from_utf8_lossy(&riff_id),
            )));
        }
        let riff_size = reader
            .read_u32::<LittleEndian>()
            .map_err(descriptor_error)?;
        let wave_id = read_descriptor_tag(reader)?;
        if wave_id != WAVE_MARKER {
            return Err(WavError::Format(format!(
                "not a RIFF/WAVE file (found {:?})",
                String::from_utf8_lossy(&wave_id),
            )));
        }

        let fmt_id = read_tag(reader)?;
        if fmt_id != FMT_MARKER {
            return Err(WavError::Format(format!(
                "expected 'fmt ' chunk at offset 12, found {:?}",
                String::from_utf8_lossy(&fmt_id),
            )));
        }

        let fmt_size = reader.read_u32::<LittleEndian>()?;
        let audio_format = reader.read_u16::<LittleEndian>()?;
        let channels = reader.read_u16::<LittleEndian>()?;
        let sample_rate = reader.read_u32::<LittleEndian>()?;
        let byte_rate = reader.read_u32::<LittleEndian>()?;
        let block_align = reader.read_u16::<LittleEndian>()?;
        let bits_per_sample = reader.read_u16::<LittleEndian>()?;

        let header = Self {
            riff_size,
            fmt_size,
            audio_format,
            channels,
            sample_rate,
            byte_rate,
            block_align,
            bits_per_sample,
        };
        header.validate()?;

        // WAVEFORMATEX and friends append extra bytes to the fmt body
        if fmt_size > PCM_FMT_SIZE {
            let extra = i64::from(fmt_size - PCM_FMT_SIZE);
            log::debug!("skipping {} bytes of fmt extension", extra);
            reader.seek(SeekFrom::Current(extra))?;
        }

        Ok(header)
    }

    fn validate(&self) -> Result<(), WavError> {
        if self.audio_format != WAVE_FORMAT_PCM {
            return Err(WavError::UnsupportedFormat(format!(
                "only PCM (format 1) is supported, found format {}",
                self.audio_format
            )));
        }
        if self.fmt_size < PCM_FMT_SIZE {
            return Err(WavError::Format(format!(
                "fmt chunk too short: {} bytes",
                self.fmt_size
            )));
        }
        if self.channels == 0 {
            return Err(WavError::Format("channel count is zero".to_string()));
        }
        if self.sample_rate == 0 {
            return Err(WavError::Format("sample rate is zero".to_string()));
        }
        if self.bits_per_sample == 0 {
            return Err(WavError::Format("bits per sample is zero".to_string()));
        }
        if !matches!(self.bits_per_sample, 8 | 16 | 24 | 32) {
            return Err(WavError::UnsupportedFormat(format!(
                "unsupported bit depth: {} bits per sample",
                self.bits_per_sample
            )));
        }
        Ok(())
    }

    /// Bytes used by one sample of one channel
    pub fn bytes_per_sample(&self) -> usize {
        usize::from(self.bits_per_sample / 8)
    }

    /// Bytes used by one frame (one sample for every channel)
    ///
    /// Derived from the bit depth rather than trusting `block_align`.
    pub fn frame_size(&self) -> usize {
        self.bytes_per_sample() * usize::from(self.channels)
    }

    /// Largest positive sample value for the bit depth, 2^(bits-1) - 1
    pub fn max_amplitude(&self) -> f64 {
        ((1u64 << (self.bits_per_sample - 1)) - 1) as f64
    }
}

/// Input too short to hold the 12-byte RIFF/WAVE descriptor is not a WAV file
fn descriptor_error(e: std::io::Error) -> WavError {
    if e.kind() == std::io::ErrorKind::UnexpectedEof {
        WavError::Format("not a RIFF/WAVE file".to_string())
    } else {
        WavError::Io(e)
    }
}

fn read_descriptor_tag<R: Read>(reader: &mut R) -> Result<[u8; 4], WavError> {
    read_tag(reader).map_err(descriptor_error)
}

/// Read a 4-byte chunk tag
pub(crate) fn read_tag<R: Read>(reader: &mut R) -> std::io::Result<[u8; 4]> {
    let mut tag = [0u8; 4];
    reader.read_exact(&mut tag)?;
    Ok(tag)
}
