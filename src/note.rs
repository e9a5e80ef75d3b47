//! # Note Codec
//!
//! Bidirectional mapping between note names and pitch numbers on the standard
//! 128-key keyboard scale.
//!
//! ## Encoding
//! `pitch = pitch_class + 12 * (octave + 1)`, so middle C ("C4") is pitch 60
//! and the full range 0-127 spans C-1 through G9.
//!
//! ## Spelling
//! Parsing accepts both sharp and flat spellings ("C#" and "Db" are the same
//! pitch class) and is case-insensitive. Formatting always produces the sharp
//! spelling; a melody parsed from "Bb3" comes back as "A#3". This
//! canonicalization is deliberate and lossy.
//!
//! ## Example
//! ```rust
//! use keyshift::{parse_note, format_note};
//!
//! assert_eq!(parse_note("C4")?, 60);
//! assert_eq!(parse_note("bb3")?, 58);
//! assert_eq!(format_note(58)?, "A#3");
//! # Ok::<(), keyshift::TheoryError>(())
//! ```

use crate::error::TheoryError;

/// Canonical display names for the 12 pitch classes, sharp-spelled.
pub const PITCH_CLASS_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Octave assumed when a note name carries no octave digits.
pub const DEFAULT_OCTAVE: i32 = 4;

/// Resolve a normalized letter + optional accidental to a pitch class.
///
/// Only spellings that name one of the 12 pitch classes are accepted; the
/// enharmonic oddballs (E#, Cb, ...) are not recognized.
fn pitch_class_from_name(name: &str) -> Option<u8> {
    let pc = match name {
        "C" => 0,
        "C#" | "Db" => 1,
        "D" => 2,
        "D#" | "Eb" => 3,
        "E" => 4,
        "F" => 5,
        "F#" | "Gb" => 6,
        "G" => 7,
        "G#" | "Ab" => 8,
        "A" => 9,
        "A#" | "Bb" => 10,
        "B" => 11,
        _ => return None,
    };
    Some(pc)
}

/// The pitch class (0-11) of a pitch number.
pub fn pitch_class(pitch: u8) -> u8 {
    pitch % 12
}

/// Canonical sharp-spelled name of a pitch class (0-11).
pub fn pitch_class_name(pc: u8) -> &'static str {
    PITCH_CLASS_NAMES[(pc % 12) as usize]
}

/// Parse a note name like "C#4", "Bb3" or "g" into a pitch number.
///
/// Octave digits are optional and default to octave 4, so `parse_note("C")`
/// is middle C. See [`parse_note_with_octave`] for a different default.
///
/// # Errors
/// - [`TheoryError::InvalidNoteFormat`] if the text does not match
///   `[A-G][#b]?(-?digits)?`
/// - [`TheoryError::UnknownPitchClass`] if the spelling names no pitch class
/// - [`TheoryError::PitchOutOfRange`] if the encoded pitch falls outside 0-127
pub fn parse_note(name: &str) -> Result<u8, TheoryError> {
    parse_note_with_octave(name, DEFAULT_OCTAVE)
}

/// Parse a note name, substituting `default_octave` when no octave digits are
/// present.
pub fn parse_note_with_octave(name: &str, default_octave: i32) -> Result<u8, TheoryError> {
    let token = name.trim();
    let invalid = || TheoryError::InvalidNoteFormat {
        input: name.to_string(),
    };

    let mut chars = token.chars();
    let letter = chars.next().ok_or_else(invalid)?;
    if !letter.is_ascii_alphabetic() || !('A'..='G').contains(&letter.to_ascii_uppercase()) {
        return Err(invalid());
    }

    // Normalize spelling: first letter upper, accidental lower.
    let mut spelling = String::new();
    spelling.push(letter.to_ascii_uppercase());

    let rest: &str = chars.as_str();
    let octave_str = match rest.chars().next() {
        Some('#') => {
            spelling.push('#');
            &rest[1..]
        }
        Some(c) if c.to_ascii_lowercase() == 'b' => {
            spelling.push('b');
            &rest[1..]
        }
        _ => rest,
    };

    let octave = if octave_str.is_empty() {
        default_octave
    } else {
        let digits_ok = octave_str
            .strip_prefix('-')
            .unwrap_or(octave_str)
            .chars()
            .all(|c| c.is_ascii_digit())
            && octave_str != "-";
        if !digits_ok {
            return Err(invalid());
        }
        octave_str.parse::<i32>().map_err(|_| invalid())?
    };

    let pc = pitch_class_from_name(&spelling).ok_or_else(|| TheoryError::UnknownPitchClass {
        name: spelling.clone(),
    })?;

    let pitch = pc as i32 + 12 * (octave + 1);
    if !(0..=127).contains(&pitch) {
        return Err(TheoryError::PitchOutOfRange { pitch });
    }
    Ok(pitch as u8)
}

/// Format a pitch number as its canonical sharp-spelled name, e.g. `60` ->
/// `"C4"`.
///
/// # Errors
/// Returns [`TheoryError::PitchOutOfRange`] for pitches above 127.
pub fn format_note(pitch: u8) -> Result<String, TheoryError> {
    if pitch > 127 {
        return Err(TheoryError::PitchOutOfRange {
            pitch: pitch as i32,
        });
    }
    let octave = (pitch as i32 / 12) - 1;
    Ok(format!("{}{}", pitch_class_name(pitch % 12), octave))
}

/// Parse a whitespace-separated melody string, failing on the first bad token.
///
/// # Example
/// ```rust
/// use keyshift::parse_melody;
///
/// assert_eq!(parse_melody("C4 E4 G4")?, vec![60, 64, 67]);
/// # Ok::<(), keyshift::TheoryError>(())
/// ```
pub fn parse_melody(text: &str) -> Result<Vec<u8>, TheoryError> {
    text.split_whitespace().map(parse_note).collect()
}

/// Parse a whitespace-separated melody string, silently dropping tokens that
/// do not parse.
///
/// One bad token in a large pasted melody should not discard the rest, so
/// this is the variant interactive callers feed raw text into.
pub fn parse_melody_lossy(text: &str) -> Vec<u8> {
    text.split_whitespace()
        .filter_map(|token| parse_note(token).ok())
        .collect()
}
