//! # Error Types
//!
//! This module defines all error types for the keyshift engine.
//!
//! Errors carry the offending input so callers can surface a useful message.
//!
//! ## Error Types
//! - `InvalidNoteFormat` - Note text does not match the note-name grammar
//! - `UnknownPitchClass` - Letter + accidental does not name one of the 12 pitch classes
//! - `PitchOutOfRange` - Pitch number outside the playable 0-127 range
//! - `UnknownMode` - Mode identifier is not major/naturalMinor/harmonicMinor
//!
//! ## Usage
//! ```rust
//! use keyshift::{parse_note, TheoryError};
//!
//! match parse_note("H4") {
//!     Ok(pitch) => println!("pitch {}", pitch),
//!     Err(TheoryError::InvalidNoteFormat { input }) => {
//!         eprintln!("not a note: {}", input);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TheoryError {
    /// Note text does not match `[A-G][#b]?(-?digits)?`.
    ///
    /// # Example
    /// ```
    /// # use keyshift::TheoryError;
    /// let err = TheoryError::InvalidNoteFormat { input: "X9!".to_string() };
    /// assert_eq!(err.to_string(), "Invalid note format: 'X9!'");
    /// ```
    #[error("Invalid note format: '{input}'")]
    InvalidNoteFormat { input: String },

    /// Letter + accidental does not resolve to a pitch class.
    ///
    /// The grammar already restricts letters to A-G, so this is a defensive
    /// check rather than an expected path.
    #[error("Unknown pitch class: '{name}'")]
    UnknownPitchClass { name: String },

    /// Pitch number outside the 0-127 keyboard range.
    ///
    /// # Example
    /// ```
    /// # use keyshift::TheoryError;
    /// let err = TheoryError::PitchOutOfRange { pitch: 140 };
    /// assert_eq!(err.to_string(), "Pitch 140 out of range 0-127");
    /// ```
    #[error("Pitch {pitch} out of range 0-127")]
    PitchOutOfRange { pitch: i32 },

    /// Mode identifier is not one of the three recognized modes.
    #[error("Unknown mode: '{name}' (expected major, naturalMinor or harmonicMinor)")]
    UnknownMode { name: String },
}
