pub mod detect;
pub mod error;
pub mod note;
pub mod scale;
pub mod transpose;

pub use detect::{detect_key, DetectionReport, KeyCandidate, KeyGuess};
pub use error::TheoryError;
pub use note::{
    format_note, parse_melody, parse_melody_lossy, parse_note, parse_note_with_octave,
    pitch_class, pitch_class_name, DEFAULT_OCTAVE, PITCH_CLASS_NAMES,
};
pub use scale::{Key, Mode, ALL_MODES};
pub use transpose::transpose_scale_aware;

/// Detect the key of a melody written as whitespace-separated note names.
/// Unparseable tokens are dropped; an empty melody yields `None`.
pub fn detect_key_in_text(text: &str) -> Option<DetectionReport> {
    detect_key(&parse_melody_lossy(text))
}

/// Transpose a melody written as note names and return it as note names.
/// This is the main text-in/text-out entry point for the library.
pub fn transpose_text(text: &str, from: Key, to: Key) -> Result<String, TheoryError> {
    let melody = parse_melody(text)?;
    let transposed = transpose_scale_aware(&melody, from, to);
    let names: Result<Vec<String>, TheoryError> =
        transposed.iter().map(|&p| format_note(p)).collect();
    Ok(names?.join(" "))
}
