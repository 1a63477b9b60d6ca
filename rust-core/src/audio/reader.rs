//! PCM WAV reader
//!
//! Loads a whole WAV file, locates the `data` chunk and decodes the
//! interleaved integer samples into normalized per-channel buffers.

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::path::Path;
use thiserror::Error;

use super::buffer::SampleBuffer;
use super::header::{read_tag, WavHeader, DATA_MARKER};

#[derive(Error, Debug)]
pub enum WavError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid WAV file: {0}")]
    Format(String),

    #[error("Unsupported WAV encoding: {0}")]
    UnsupportedFormat(String),
}

/// A decoded WAV file
#[derive(Debug, Clone)]
pub struct WavFile {
    pub header: WavHeader,

    /// Declared length of the `data` chunk in bytes
    pub data_size: u32,

    pub samples: SampleBuffer,
}

impl WavFile {
    /// Number of complete frames decoded
    pub fn frames(&self) -> usize {
        self.samples.frames()
    }

    /// Duration in seconds
    pub fn duration_secs(&self) -> f64 {
        self.frames() as f64 / f64::from(self.header.sample_rate)
    }
}

/// Read and decode a PCM WAV file from disk
///
/// The file is read into memory in one go and closed before decoding starts.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<WavFile, WavError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    decode_wav(&bytes)
}

/// Decode a PCM WAV file held in memory
///
/// # Errors
/// * `WavError::Io` if the header or the sample payload is truncated
/// * `WavError::Format` on bad markers, degenerate fields or a missing `data` chunk
/// * `WavError::UnsupportedFormat` for non-PCM encodings or unsupported bit depths
pub fn decode_wav(bytes: &[u8]) -> Result<WavFile, WavError> {
    let mut cursor = Cursor::new(bytes);
    let header = WavHeader::read_from(&mut cursor)?;
    let data_size = find_data_chunk(&mut cursor)?;

    let frame_size = header.frame_size();
    let frames = data_size as usize / frame_size;
    let remainder = data_size as usize % frame_size;
    if remainder != 0 {
        // trailing partial frame is dropped, not an error
        log::warn!(
            "data chunk ends with a partial frame ({} of {} bytes), ignoring it",
            remainder,
            frame_size
        );
    }

    let available = bytes.len() as u64 - cursor.position();
    let needed = (frames * frame_size) as u64;
    if needed > available {
        return Err(WavError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!(
                "data chunk truncated: {} bytes declared, {} present",
                needed, available
            ),
        )));
    }

    if header.channels > 2 {
        log::warn!(
            "{} channels present, only the first two are kept",
            header.channels
        );
    }

    let samples = decode_samples(&mut cursor, &header, frames)?;
    log::debug!(
        "decoded {} frames ({} ch, {} bit, {} Hz)",
        frames,
        header.channels,
        header.bits_per_sample,
        header.sample_rate
    );

    Ok(WavFile {
        header,
        data_size,
        samples,
    })
}

/// Advance past every chunk until the `data` chunk header
///
/// Returns the declared payload length with the cursor positioned at the
/// first payload byte.
fn find_data_chunk<R: Read + Seek>(reader: &mut R) -> Result<u32, WavError> {
    loop {
        let tag = match read_tag(reader) {
            Ok(tag) => tag,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(WavError::Format("no data chunk found".to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        let size = match reader.read_u32::<LittleEndian>() {
            Ok(size) => size,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(WavError::Format("no data chunk found".to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        if tag == DATA_MARKER {
            return Ok(size);
        }

        log::debug!(
            "skipping chunk {:?} ({} bytes)",
            String::from_utf8_lossy(&tag),
            size
        );
        reader.seek(SeekFrom::Current(i64::from(size)))?;
    }
}

fn decode_samples<R: Read>(
    reader: &mut R,
    header: &WavHeader,
    frames: usize,
) -> Result<SampleBuffer, WavError> {
    let channels = usize::from(header.channels);
    let max_amplitude = header.max_amplitude();

    let mut left = Vec::with_capacity(frames);
    let mut right = (channels >= 2).then(|| Vec::with_capacity(frames));

    for _ in 0..frames {
        for ch in 0..channels {
            let raw = read_sample(reader, header.bits_per_sample)?;
            let normalized = f64::from(raw) / max_amplitude;
            match (ch, right.as_mut()) {
                (0, _) => left.push(normalized),
                (1, Some(right)) => right.push(normalized),
                _ => {}
            }
        }
    }

    Ok(SampleBuffer::new(left, right))
}

/// Read one little-endian sample as a sign-extended integer
///
/// 8-bit WAV data is unsigned with a 128 offset.
fn read_sample<R: Read>(reader: &mut R, bits_per_sample: u16) -> Result<i32, WavError> {
    let value = match bits_per_sample {
        8 => i32::from(reader.read_u8()?) - 128,
        16 => i32::from(reader.read_i16::<LittleEndian>()?),
        24 => reader.read_i24::<LittleEndian>()?,
        32 => reader.read_i32::<LittleEndian>()?,
        other => {
            return Err(WavError::UnsupportedFormat(format!(
                "unsupported bit depth: {} bits per sample",
                other
            )))
        }
    };
    Ok(value)
}
