//! # Scale-Aware Transposition
//!
//! Maps each pitch of a melody from a source key to a target key, preserving
//! the scale degree rather than applying a blanket chromatic shift.
//!
//! ## Why not a plain chromatic shift?
//! A fixed-interval shift keeps intervals but destroys modal character when
//! the source and target modes differ: degree 7 of C major sits 11 semitones
//! above the tonic, but degree 7 of a natural minor sits at 10. Mapping by
//! degree index keeps each note's melodic function; only genuinely
//! out-of-scale (chromatic) notes fall back to a literal semitone shift.
//!
//! ## Boundary policy
//! Results are clamped to the 0-127 keyboard range, never rejected.
//! Transposition always produces a playable melody.

use crate::scale::Key;

/// Transpose a melody from `from` to `to`, preserving scale degrees.
///
/// The output has the same length and order as the input; each pitch maps to
/// exactly one pitch. Diatonic notes keep their degree index in the target
/// scale, anchored to the tonic octave nearest the original note; chromatic
/// notes shift by the tonic-to-tonic interval. Never fails.
///
/// # Example
/// ```rust
/// use keyshift::{transpose_scale_aware, Key, Mode};
///
/// let melody = [60, 64, 67, 70]; // C4 E4 G4 Bb4
/// let out = transpose_scale_aware(
///     &melody,
///     Key::new(0, Mode::Major),
///     Key::new(2, Mode::HarmonicMinor),
/// );
/// assert_eq!(out, vec![62, 65, 69, 72]);
/// ```
pub fn transpose_scale_aware(melody: &[u8], from: Key, to: Key) -> Vec<u8> {
    let from_tonic = from.tonic as i32;
    let to_tonic = to.tonic as i32;
    let semitone_shift = (to_tonic - from_tonic + 12) % 12;
    let from_offsets = from.mode.offsets();
    let to_offsets = to.mode.offsets();

    melody
        .iter()
        .map(|&pitch| {
            let pitch = pitch as i32;
            let pc = pitch % 12;
            let interval_from_tonic = (pc - from_tonic + 12) % 12;

            let result = match from_offsets
                .iter()
                .position(|&o| o as i32 == interval_from_tonic)
            {
                // Chromatic note: literal tonic-to-tonic shift.
                None => pitch + semitone_shift,
                // Diatonic note: same degree in the target scale, anchored to
                // the tonic octave underlying the original pitch.
                Some(degree) => {
                    let ideal_tonic_pitch = pitch - interval_from_tonic;
                    let tonic_octave =
                        ((ideal_tonic_pitch - from_tonic) as f64 / 12.0).round() as i32;
                    let target_tonic_pitch = to_tonic + 12 * tonic_octave;
                    target_tonic_pitch + to_offsets[degree] as i32
                }
            };

            result.clamp(0, 127) as u8
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::Mode;

    #[test]
    fn test_identity_transpose() {
        let melody = [60, 62, 64, 65, 67, 70, 0, 127];
        for mode in crate::scale::ALL_MODES {
            let key = Key::new(5, mode);
            assert_eq!(transpose_scale_aware(&melody, key, key), melody.to_vec());
        }
    }

    #[test]
    fn test_chromatic_shift_same_mode() {
        // C major -> D major is a plain +2 on every diatonic note
        let melody = [60, 62, 64, 65, 67, 69, 71, 72];
        let out = transpose_scale_aware(
            &melody,
            Key::new(0, Mode::Major),
            Key::new(2, Mode::Major),
        );
        assert_eq!(out, vec![62, 64, 66, 67, 69, 71, 73, 74]);
    }

    #[test]
    fn test_major_to_harmonic_minor_example() {
        // C4 E4 G4 are degrees 1/3/5 of C major; Bb4 is chromatic
        let melody = [60, 64, 67, 70];
        let out = transpose_scale_aware(
            &melody,
            Key::new(0, Mode::Major),
            Key::new(2, Mode::HarmonicMinor),
        );
        // D4, F4 (degree 3 of D harm. minor = +3), A4, Bb4 + 2
        assert_eq!(out, vec![62, 65, 69, 72]);
    }

    #[test]
    fn test_degree_preserved_across_modes() {
        let from = Key::new(0, Mode::Major);
        let to = Key::new(9, Mode::NaturalMinor);
        let melody = [60, 62, 64, 65, 67, 69, 71];
        let out = transpose_scale_aware(&melody, from, to);
        for (i, (&orig, &mapped)) in melody.iter().zip(&out).enumerate() {
            let from_interval = (orig as i32 - from.tonic as i32).rem_euclid(12) as u8;
            let to_interval = (mapped as i32 - to.tonic as i32).rem_euclid(12) as u8;
            assert_eq!(
                from.mode.degree_of(from_interval),
                to.mode.degree_of(to_interval),
                "note {} lost its degree",
                i
            );
        }
    }

    #[test]
    fn test_length_and_order_preserved() {
        let melody = [67, 60, 67, 60, 61];
        let out = transpose_scale_aware(
            &melody,
            Key::new(0, Mode::Major),
            Key::new(7, Mode::HarmonicMinor),
        );
        assert_eq!(out.len(), melody.len());
    }

    #[test]
    fn test_clamped_at_top_of_range() {
        // G9 (127) is degree 5 of C major; shifting toward a high tonic clamps
        let out = transpose_scale_aware(
            &[127],
            Key::new(0, Mode::Major),
            Key::new(11, Mode::Major),
        );
        assert_eq!(out, vec![127]);
    }

    #[test]
    fn test_empty_melody() {
        let out = transpose_scale_aware(
            &[],
            Key::new(0, Mode::Major),
            Key::new(5, Mode::NaturalMinor),
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_tonic_octave_anchoring() {
        // B3 (59) is degree 7 of C major. Its underlying tonic is
        // 59 - 11 = 48 (C3), so the target tonic is D3 (50) and the
        // result is 50 + 11 = 61.
        let out = transpose_scale_aware(
            &[59],
            Key::new(0, Mode::Major),
            Key::new(2, Mode::Major),
        );
        assert_eq!(out, vec![61]);
    }
}
