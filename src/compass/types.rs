//! Career Compass Types
//!
//! Core data structures shared by the auth stub, the quiz classifier,
//! the static catalog and the mock data store.

use serde::{Deserialize, Serialize};

// ============================================================
// USERS
// ============================================================

/// Public view of a user (never carries the password hash)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub email: Option<String>,
    pub disabled: Option<bool>,
}

/// A user as held in the in-memory user table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub username: String,
    pub email: Option<String>,
    pub disabled: bool,
    /// Stored verbatim; compared as plain text by the login stub
    pub hashed_password: String,
}

impl UserRecord {
    pub fn new(username: &str, email: &str, hashed_password: &str) -> Self {
        Self {
            username: username.to_string(),
            email: Some(email.to_string()),
            disabled: false,
            hashed_password: hashed_password.to_string(),
        }
    }

    pub fn public(&self) -> User {
        User {
            username: self.username.clone(),
            email: self.email.clone(),
            disabled: Some(self.disabled),
        }
    }
}

// ============================================================
// QUIZ
// ============================================================

/// One answered question, usually on a 1-5 Likert scale
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizAnswer {
    pub question_id: String,
    pub answer: i64,
}

impl QuizAnswer {
    pub fn new(question_id: &str, answer: i64) -> Self {
        Self {
            question_id: question_id.to_string(),
            answer,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct QuizSubmission {
    pub answers: Vec<QuizAnswer>,
}

/// Big Five trait scores
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct OceanScores {
    pub openness: u8,
    pub conscientiousness: u8,
    pub extraversion: u8,
    pub agreeableness: u8,
    pub neuroticism: u8,
}

/// The profile assigned by the quiz classifier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonalityProfile {
    #[serde(rename = "MBTI")]
    pub mbti: String,
    #[serde(rename = "OCEAN")]
    pub ocean: OceanScores,
    pub interests: Vec<String>,
}

// ============================================================
// CAREER CATALOG
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CareerRecommendation {
    pub career: String,
    pub required_skills: Vec<String>,
    /// Salary range as display text, e.g. "$80,000 - $130,000"
    pub salary: String,
    pub growth_potential: String,
    pub future_trends: Vec<String>,
}

/// Direction a career trend is moving
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrendStatus {
    Rising,
    Falling,
    Stable,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CareerTrendItem {
    pub trend_name: String,
    pub summary: String,
    pub status: TrendStatus,
    /// Impact/relevance score from 0 to 1
    pub trend_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MicroOpportunity {
    pub opportunity: String,
    pub action: String,
}

/// A scripted workplace scenario
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimulationScenario {
    pub description: String,
    pub micro_opportunities: Vec<MicroOpportunity>,
}

// ============================================================
// TIMELINE SIMULATION
// ============================================================

/// An event template as stored under a persona's `events_template`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventTemplate {
    pub time: String,
    pub title: String,
    pub description: String,
    pub visual_prompt: String,
    pub media_type: String,
    #[serde(default)]
    pub media_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    pub time: String,
    pub title: String,
    pub description: String,
    pub visual_prompt: String,
    pub media_type: String,
    pub media_url: String,
}

impl From<EventTemplate> for Event {
    fn from(template: EventTemplate) -> Self {
        Self {
            time: template.time,
            title: template.title,
            description: template.description,
            visual_prompt: template.visual_prompt,
            media_type: template.media_type,
            // Generated media would be uploaded and linked here
            media_url: template.media_url.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineResponse {
    pub session_id: String,
    pub person_id: String,
    pub timeline: Vec<Event>,
}
