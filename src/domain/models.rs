use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type GameId = i64;
pub type MatchId = i64;

/// A `{user, points}` pair in a leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub user: String,
    pub points: i64,
}

impl RankingEntry {
    pub fn new(user: impl Into<String>, points: i64) -> Self {
        Self { user: user.into(), points }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Easy" => Some(Difficulty::Easy),
            "Medium" => Some(Difficulty::Medium),
            "Hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub text: String,
    pub difficulty: Difficulty,
    pub answers: Vec<Answer>,
    pub correct_answer: usize,
}

/// Everything stored for a game except its id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameData {
    pub name: String,
    pub rating: f64,
    pub times_played: u32,
    pub creator: String,
    pub questions: Vec<Question>,
    pub ranking: Vec<RankingEntry>,
    pub creation_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    #[serde(flatten)]
    pub data: GameData,
}

/// The game a match is played on, as embedded in the match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub id: GameId,
    pub name: String,
}

/// Everything stored for a match except its id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchData {
    pub url: String,
    pub is_real_time: bool,
    pub started: bool,
    pub owner: String,
    pub ending_date: DateTime<Utc>,
    pub game: GameSummary,
    pub result: Vec<RankingEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    #[serde(flatten)]
    pub data: MatchData,
}

/// Public projection used by the landing page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub id: MatchId,
    pub url: String,
    pub is_real_time: bool,
    pub owner: String,
    pub game: GameSummary,
}

impl From<&Match> for MatchSummary {
    fn from(m: &Match) -> Self {
        Self {
            id: m.id,
            url: m.data.url.clone(),
            is_real_time: m.data.is_real_time,
            owner: m.data.owner.clone(),
            game: m.data.game.clone(),
        }
    }
}
