//! # Key Detection
//!
//! Scores all 36 candidate keys (12 tonics x 3 modes) against an unlabeled
//! melody and ranks them with a weighted confidence score.
//!
//! ## Scoring
//! Two signals are blended per candidate:
//! - **Coverage**: the fraction of the melody's distinct pitch classes that
//!   belong to the candidate scale.
//! - **Weighted emphasis**: scale tones accumulate `weight * occurrence
//!   count`, where the tonic weighs 2.0, the dominant 1.5, the subdominant
//!   1.2 and (for harmonic-minor candidates) the raised leading tone 1.3.
//!   The sum is normalized by the maximum possible weight total times the
//!   highest single pitch-class count in the melody.
//!
//! `total = 0.4 * coverage + 0.6 * weighted`. The displayed confidence is
//! `min(1, total * 1.3)` - a calibration constant, not a probability.
//!
//! The detector never declines to answer: purely chromatic material still
//! yields a best guess, with low confidence as the only uncertainty signal.
//! Only an empty melody produces no result.

use crate::note::pitch_class_name;
use crate::scale::{Key, Mode, ALL_MODES};
use serde::Serialize;

/// The winning candidate, with a prose rationale.
#[derive(Debug, Clone, Serialize)]
pub struct KeyGuess {
    pub key: Key,
    pub confidence: f64,
    pub explanation: String,
}

/// A runner-up candidate.
#[derive(Debug, Clone, Serialize)]
pub struct KeyCandidate {
    pub key: Key,
    pub confidence: f64,
    pub score: f64,
}

/// Full detection output: best guess, ranked alternatives and the raw note
/// statistics the scores were computed from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub best: KeyGuess,
    pub alternatives: Vec<KeyCandidate>,
    /// Occurrence count per pitch class across the full melody.
    pub note_distribution: [u32; 12],
    /// Distinct pitch classes, in order of first appearance.
    pub melody_notes: Vec<u8>,
}

/// Raw scores land well below 1.0 even for a perfect diatonic melody, so the
/// displayed confidence is inflated by this factor and capped at 1.
const CONFIDENCE_SCALE: f64 = 1.3;

fn confidence(score: f64) -> f64 {
    (score * CONFIDENCE_SCALE).min(1.0)
}

/// Fraction of the melody's distinct pitch classes covered by the scale.
fn coverage_score(normalized: &[u8], key: &Key) -> f64 {
    let members = normalized.iter().filter(|&&pc| key.contains(pc)).count();
    members as f64 / normalized.len() as f64
}

fn degree_weight(pc: u8, key: &Key) -> f64 {
    let tonic = key.tonic;
    let dominant = (tonic + 7) % 12;
    let subdominant = (tonic + 5) % 12;
    if pc == tonic {
        2.0
    } else if pc == dominant {
        1.5
    } else if pc == subdominant {
        1.2
    } else if key.mode == Mode::HarmonicMinor && pc == (tonic + 11) % 12 {
        1.3
    } else {
        1.0
    }
}

/// Emphasis score: rewards repetition of structurally important scale tones.
///
/// The denominator intentionally uses the single highest pitch-class count in
/// the whole melody, including counts of non-scale tones. Repetition of a
/// chromatic note therefore depresses every candidate's weighted score.
fn weighted_score(normalized: &[u8], key: &Key, freq: &[u32; 12]) -> f64 {
    let mut score = 0.0;
    let mut max_possible = 0.0;
    for &pc in normalized {
        let weight = degree_weight(pc, key);
        max_possible += weight;
        if key.contains(pc) {
            score += weight * freq[pc as usize].max(1) as f64;
        }
    }
    let max_freq = *freq.iter().max().unwrap_or(&1) as f64;
    score / (max_possible * max_freq)
}

fn explain(best: &Key, score: f64, normalized: &[u8], freq: &[u32; 12]) -> String {
    let mut text = format!(
        "Most likely key: {} (score {:.2}). ",
        best,
        score
    );

    let scale = best.scale_pitch_classes();
    let missing: Vec<&str> = scale
        .iter()
        .filter(|pc| !normalized.contains(pc))
        .map(|&pc| pitch_class_name(pc))
        .collect();
    let extra: Vec<&str> = normalized
        .iter()
        .filter(|&&pc| !scale.contains(&pc))
        .map(|&pc| pitch_class_name(pc))
        .collect();

    if !missing.is_empty() {
        text.push_str(&format!("Scale tones absent from the melody: {}. ", missing.join(", ")));
    }
    if !extra.is_empty() {
        text.push_str(&format!(
            "Out-of-scale notes present: {}; possibly modulation or chromaticism. ",
            extra.join(", ")
        ));
    }

    let tonic_count = freq[best.tonic as usize];
    let dominant_pc = (best.tonic + 7) % 12;
    let dominant_count = freq[dominant_pc as usize];
    if tonic_count > 0 || dominant_count > 0 {
        text.push_str(&format!(
            "The tonic ({}) occurs {} time(s) and the dominant ({}) {} time(s), which is characteristic of a settled key.",
            pitch_class_name(best.tonic),
            tonic_count,
            pitch_class_name(dominant_pc),
            dominant_count
        ));
    }

    text.trim_end().to_string()
}

/// Detect the most likely key of a melody.
///
/// Returns `None` for an empty melody; never fails otherwise. Scoring is
/// deterministic: identical input yields an identical report, and candidates
/// with equal scores keep their enumeration order (tonic C upward, major
/// before natural minor before harmonic minor).
///
/// # Example
/// ```rust
/// use keyshift::{detect_key, parse_melody, Key, Mode};
///
/// let melody = parse_melody("C4 D4 E4 F4 G4 A4 B4 C5")?;
/// let report = detect_key(&melody).unwrap();
/// assert_eq!(report.best.key, Key::new(0, Mode::Major));
/// # Ok::<(), keyshift::TheoryError>(())
/// ```
pub fn detect_key(melody: &[u8]) -> Option<DetectionReport> {
    if melody.is_empty() {
        return None;
    }

    let mut freq = [0u32; 12];
    let mut normalized: Vec<u8> = Vec::new();
    for &pitch in melody {
        let pc = pitch % 12;
        if freq[pc as usize] == 0 {
            normalized.push(pc);
        }
        freq[pc as usize] += 1;
    }

    let mut candidates: Vec<KeyCandidate> = Vec::with_capacity(36);
    for tonic in 0..12u8 {
        for mode in ALL_MODES {
            let key = Key::new(tonic, mode);
            let simple = coverage_score(&normalized, &key);
            let weighted = weighted_score(&normalized, &key, &freq);
            let score = 0.4 * simple + 0.6 * weighted;
            candidates.push(KeyCandidate {
                key,
                confidence: confidence(score),
                score,
            });
        }
    }

    // Stable sort keeps enumeration order for tied scores.
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

    let top = candidates[0].clone();
    let best = KeyGuess {
        key: top.key,
        confidence: top.confidence,
        explanation: explain(&top.key, top.score, &normalized, &freq),
    };

    Some(DetectionReport {
        best,
        alternatives: candidates.into_iter().skip(1).take(4).collect(),
        note_distribution: freq,
        melody_notes: normalized,
    })
}
