//! PCM WAV container parsing

pub mod header;
pub mod buffer;
pub mod reader;

pub use header::WavHeader;
pub use buffer::{Channel, SampleBuffer};
pub use reader::{decode_wav, read_wav, WavError, WavFile};
