//! Quiz Classifier
//!
//! Maps Likert answers to one of two fixed personality profiles.
//! A stand-in for real MBTI/OCEAN scoring.

use super::types::{OceanScores, PersonalityProfile, QuizSubmission};

/// Answers above this value count as positive
pub const POSITIVE_THRESHOLD: i64 = 3;

/// Count positive answers; a strict majority gets the outgoing profile
pub fn classify_personality(submission: &QuizSubmission) -> PersonalityProfile {
    let positive = submission
        .answers
        .iter()
        .filter(|a| a.answer > POSITIVE_THRESHOLD)
        .count();

    // positive > len / 2 without rounding the half
    if positive * 2 > submission.answers.len() {
        outgoing_profile()
    } else {
        reflective_profile()
    }
}

/// Profile for a mostly positive quiz
pub fn outgoing_profile() -> PersonalityProfile {
    PersonalityProfile {
        mbti: "ESTJ".to_string(),
        ocean: OceanScores {
            openness: 4,
            conscientiousness: 5,
            extraversion: 4,
            agreeableness: 3,
            neuroticism: 2,
        },
        interests: vec![
            "Technology".to_string(),
            "Leadership".to_string(),
            "Problem Solving".to_string(),
        ],
    }
}

pub fn reflective_profile() -> PersonalityProfile {
    PersonalityProfile {
        mbti: "INFP".to_string(),
        ocean: OceanScores {
            openness: 3,
            conscientiousness: 3,
            extraversion: 2,
            agreeableness: 4,
            neuroticism: 3,
        },
        interests: vec![
            "Art".to_string(),
            "Writing".to_string(),
            "Helping Others".to_string(),
        ],
    }
}
