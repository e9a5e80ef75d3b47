//! # Scale Table
//!
//! Static definitions of the supported modes and the `Key` value type.
//!
//! Each mode is an ordered set of seven semitone offsets from a tonic:
//!
//! ```text
//! major         [0, 2, 4, 5, 7, 9, 11]
//! naturalMinor  [0, 2, 3, 5, 7, 8, 10]
//! harmonicMinor [0, 2, 3, 5, 7, 8, 11]
//! ```
//!
//! Offsets are strictly increasing, start at 0 and stay within an octave, so
//! each interval occurs at most once per scale and degree lookup by interval
//! is unambiguous.

use crate::error::TheoryError;
use crate::note::pitch_class_name;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three supported scale modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[serde(rename = "major")]
    Major,
    #[serde(rename = "naturalMinor")]
    NaturalMinor,
    #[serde(rename = "harmonicMinor")]
    HarmonicMinor,
}

/// Enumeration order for key detection candidates.
pub const ALL_MODES: [Mode; 3] = [Mode::Major, Mode::NaturalMinor, Mode::HarmonicMinor];

impl Mode {
    /// Semitone offsets of the seven scale degrees from the tonic.
    pub fn offsets(self) -> [u8; 7] {
        match self {
            Mode::Major => [0, 2, 4, 5, 7, 9, 11],
            Mode::NaturalMinor => [0, 2, 3, 5, 7, 8, 10],
            Mode::HarmonicMinor => [0, 2, 3, 5, 7, 8, 11],
        }
    }

    /// Degree index (0-6) of an interval from the tonic, if the interval is
    /// diatonic to this mode.
    pub fn degree_of(self, interval: u8) -> Option<usize> {
        self.offsets().iter().position(|&o| o == interval)
    }

    /// Parse a mode identifier.
    ///
    /// Accepts the canonical camelCase identifiers ("major", "naturalMinor",
    /// "harmonicMinor") plus the space/hyphen-separated forms and the bare
    /// "minor" alias for the natural minor.
    ///
    /// # Errors
    /// Returns [`TheoryError::UnknownMode`] for anything else; modes are never
    /// silently defaulted.
    pub fn from_name(name: &str) -> Result<Mode, TheoryError> {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "major" => Ok(Mode::Major),
            "naturalminor" | "natural minor" | "natural-minor" | "minor" => Ok(Mode::NaturalMinor),
            "harmonicminor" | "harmonic minor" | "harmonic-minor" => Ok(Mode::HarmonicMinor),
            _ => Err(TheoryError::UnknownMode {
                name: name.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Mode::Major => "major",
            Mode::NaturalMinor => "natural minor",
            Mode::HarmonicMinor => "harmonic minor",
        };
        write!(f, "{}", label)
    }
}

/// A key: a tonic pitch class (0-11) plus a mode. Plain value type, no
/// identity beyond its two fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    pub tonic: u8,
    pub mode: Mode,
}

impl Key {
    pub fn new(tonic: u8, mode: Mode) -> Key {
        Key {
            tonic: tonic % 12,
            mode,
        }
    }

    /// Parse a key like "D harmonicMinor", "Bb minor" or just "G" (mode
    /// defaults to major).
    ///
    /// # Example
    /// ```rust
    /// use keyshift::{Key, Mode};
    ///
    /// assert_eq!(Key::parse("D harmonicMinor")?, Key::new(2, Mode::HarmonicMinor));
    /// assert_eq!(Key::parse("Bb")?, Key::new(10, Mode::Major));
    /// # Ok::<(), keyshift::TheoryError>(())
    /// ```
    pub fn parse(text: &str) -> Result<Key, TheoryError> {
        let trimmed = text.trim();
        let (tonic_str, mode_str) = match trimmed.split_once(char::is_whitespace) {
            Some((t, m)) => (t, Some(m)),
            None => (trimmed, None),
        };
        // The tonic is a bare pitch class; reuse the note grammar at octave 4.
        let tonic = crate::note::parse_note(tonic_str)? % 12;
        let mode = match mode_str {
            Some(m) => Mode::from_name(m)?,
            None => Mode::Major,
        };
        Ok(Key { tonic, mode })
    }

    /// The seven pitch classes of this key's scale, tonic first.
    pub fn scale_pitch_classes(&self) -> [u8; 7] {
        let mut pcs = [0u8; 7];
        for (slot, offset) in pcs.iter_mut().zip(self.mode.offsets()) {
            *slot = (self.tonic + offset) % 12;
        }
        pcs
    }

    /// Whether a pitch class is diatonic to this key.
    pub fn contains(&self, pc: u8) -> bool {
        let interval = (pc % 12 + 12 - self.tonic) % 12;
        self.mode.degree_of(interval).is_some()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", pitch_class_name(self.tonic), self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_increasing_from_zero() {
        for mode in ALL_MODES {
            let offsets = mode.offsets();
            assert_eq!(offsets[0], 0);
            for pair in offsets.windows(2) {
                assert!(pair[0] < pair[1], "{:?} offsets not increasing", mode);
            }
            assert!(offsets[6] < 12);
        }
    }

    #[test]
    fn test_degree_lookup() {
        assert_eq!(Mode::Major.degree_of(4), Some(2));
        assert_eq!(Mode::HarmonicMinor.degree_of(11), Some(6));
        assert_eq!(Mode::Major.degree_of(3), None);
    }

    #[test]
    fn test_mode_from_name() {
        assert_eq!(Mode::from_name("major").unwrap(), Mode::Major);
        assert_eq!(Mode::from_name("naturalMinor").unwrap(), Mode::NaturalMinor);
        assert_eq!(Mode::from_name("minor").unwrap(), Mode::NaturalMinor);
        assert_eq!(
            Mode::from_name("harmonic minor").unwrap(),
            Mode::HarmonicMinor
        );
        assert!(matches!(
            Mode::from_name("dorian"),
            Err(TheoryError::UnknownMode { .. })
        ));
    }

    #[test]
    fn test_key_parse() {
        assert_eq!(
            Key::parse("D harmonicMinor").unwrap(),
            Key::new(2, Mode::HarmonicMinor)
        );
        assert_eq!(Key::parse("Bb").unwrap(), Key::new(10, Mode::Major));
        assert!(Key::parse("H major").is_err());
    }

    #[test]
    fn test_scale_pitch_classes() {
        let c_major = Key::new(0, Mode::Major);
        assert_eq!(c_major.scale_pitch_classes(), [0, 2, 4, 5, 7, 9, 11]);
        let a_minor = Key::new(9, Mode::NaturalMinor);
        assert_eq!(a_minor.scale_pitch_classes(), [9, 11, 0, 2, 4, 5, 7]);
    }

    #[test]
    fn test_contains() {
        let c_major = Key::new(0, Mode::Major);
        assert!(c_major.contains(7));
        assert!(!c_major.contains(10));
    }

    #[test]
    fn test_mode_serde_names() {
        assert_eq!(
            serde_json::to_string(&Mode::HarmonicMinor).unwrap(),
            "\"harmonicMinor\""
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Key::new(2, Mode::HarmonicMinor).to_string(), "D harmonic minor");
    }
}
