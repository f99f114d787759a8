use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::difficulties;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => difficulties::EASY,
            Difficulty::Medium => difficulties::MEDIUM,
            Difficulty::Hard => difficulties::HARD,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            difficulties::EASY => Some(Difficulty::Easy),
            difficulties::MEDIUM => Some(Difficulty::Medium),
            difficulties::HARD => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Problem {
    pub id: Uuid,
    pub title: String,
    pub difficulty: String,
    pub points: i32,
    /// Admin-authored display string such as "42%"; never recomputed here.
    pub acceptance: String,
    pub tags: Vec<String>,
    pub statement: String,
    pub input_format: String,
    pub output_format: String,
    pub constraints: String,
    pub sample_input: Option<String>,
    pub sample_output: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Problem {
    pub fn difficulty(&self) -> Option<Difficulty> {
        Difficulty::parse(&self.difficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_round_trips_through_str() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(Difficulty::parse(d.as_str()), Some(d));
        }
    }

    #[test]
    fn difficulty_rejects_unknown_values() {
        assert_eq!(Difficulty::parse("extreme"), None);
        assert_eq!(Difficulty::parse("EASY"), None);
        assert_eq!(Difficulty::parse(""), None);
    }
}
