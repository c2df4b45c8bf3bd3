use crate::types::scoring::{Level, OverallLevel, Score, IDENTITY_MAX};

const IDENTITY_BANDS: [(Level, Score, Score); 4] = [
    (Level::Low, 0, 3),
    (Level::Moderate, 4, 7),
    (Level::High, 8, 10),
    (Level::VeryHigh, 11, 15),
];

const CATEGORY_BANDS: [(Level, Score, Score); 4] = [
    (Level::Low, 0, 3),
    (Level::Moderate, 4, 7),
    (Level::High, 8, 10),
    (Level::VeryHigh, 11, 12),
];

const OVERALL_BANDS: [(OverallLevel, Score, Score); 4] = [
    (OverallLevel::Low, 0, 10),
    (OverallLevel::Moderate, 11, 20),
    (OverallLevel::Elevated, 21, 30),
    (OverallLevel::High, 31, 39),
];

/// Qualitative band for a category score. Identity (out of 15) has a wider
/// top band; every other dimension is out of 12. Scores outside every band
/// fall back to `Level::Low`.
pub fn level_for(score: Score, max_score: Score) -> Level {
    let bands = if max_score == IDENTITY_MAX {
        &IDENTITY_BANDS
    } else {
        &CATEGORY_BANDS
    };
    bands
        .iter()
        .find(|(_, lo, hi)| (*lo..=*hi).contains(&score))
        .map(|(level, _, _)| *level)
        .unwrap_or(bands[0].0)
}

pub fn overall_level(lock_in_index: Score) -> OverallLevel {
    OVERALL_BANDS
        .iter()
        .find(|(_, lo, hi)| (*lo..=*hi).contains(&lock_in_index))
        .map(|(level, _, _)| *level)
        .unwrap_or(OverallLevel::High)
}
