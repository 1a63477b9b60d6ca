//! Decoded sample storage
//!
//! Holds the normalized samples of the first two channels of a WAV file

use std::fmt;
use std::str::FromStr;

/// Channel selector for analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Channel {
    #[default]
    Left,
    Right,
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "l" | "0" => Ok(Channel::Left),
            "right" | "r" | "1" => Ok(Channel::Right),
            other => Err(format!("unknown channel '{}' (expected left or right)", other)),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Left => write!(f, "left"),
            Channel::Right => write!(f, "right"),
        }
    }
}

/// Per-channel normalized samples in [-1, 1]
///
/// `right` is `None` for mono input. Channels past the second are never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleBuffer {
    left: Vec<f64>,
    right: Option<Vec<f64>>,
}

impl SampleBuffer {
    /// Create buffer from already decoded channels
    ///
    /// # Arguments
    /// * `left` - Samples of channel 0
    /// * `right` - Samples of channel 1, `None` for mono
    pub fn new(left: Vec<f64>, right: Option<Vec<f64>>) -> Self {
        debug_assert!(right.as_ref().map_or(true, |r| r.len() == left.len()));
        Self { left, right }
    }

    /// Number of frames
    pub fn frames(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    pub fn is_stereo(&self) -> bool {
        self.right.is_some()
    }

    pub fn left(&self) -> &[f64] {
        &self.left
    }

    /// Samples of channel 1, empty for mono
    pub fn right(&self) -> &[f64] {
        self.right.as_deref().unwrap_or(&[])
    }

    /// Samples of the requested channel, `None` if it was not decoded
    pub fn channel(&self, channel: Channel) -> Option<&[f64]> {
        match channel {
            Channel::Left => Some(&self.left),
            Channel::Right => self.right.as_deref(),
        }
    }
}
