//! Ready-made documents and payloads for tests.

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use super::models::{
    Answer, Difficulty, Game, GameData, GameSummary, MatchData, Question, RankingEntry,
};

pub fn game_data(name: &str) -> GameData {
    GameData {
        name: name.to_string(),
        rating: 3.0,
        times_played: 0,
        creator: "creator-1".to_string(),
        questions: vec![Question {
            text: "ques".to_string(),
            difficulty: Difficulty::Easy,
            answers: vec![
                Answer { answer: "ans1".to_string() },
                Answer { answer: "ans2".to_string() },
            ],
            correct_answer: 1,
        }],
        ranking: vec![RankingEntry::new("ana", 10)],
        creation_date: Utc.with_ymd_and_hms(2017, 5, 1, 0, 0, 0).unwrap(),
    }
}

pub fn match_data(url: &str, game: &Game) -> MatchData {
    MatchData {
        url: url.to_lowercase(),
        is_real_time: false,
        started: false,
        owner: "owner-1".to_string(),
        ending_date: Utc.with_ymd_and_hms(2017, 6, 1, 12, 0, 0).unwrap(),
        game: GameSummary {
            id: game.id,
            name: game.data.name.clone(),
        },
        result: vec![RankingEntry::new("ana", 40), RankingEntry::new("bob", 20)],
    }
}

pub fn game_payload(name: &str) -> Value {
    json!({
        "name": name,
        "rating": 4,
        "timesPlayed": 2,
        "creator": "creator-1",
        "questions": [{
            "text": "ques",
            "difficulty": "Medium",
            "answers": [{ "answer": "ans1" }, { "answer": "ans2" }, { "answer": "ans3" }],
            "correctAnswer": 2
        }],
        "ranking": [],
        "creationDate": "2017-05-01T10:00:00Z"
    })
}

pub fn match_payload(url: &str, game_id: i64) -> Value {
    json!({
        "url": url,
        "isRealTime": false,
        "started": false,
        "owner": "owner-1",
        "endingDate": "2017-06-01T12:00:00Z",
        "game": { "id": game_id },
        "result": [{ "user": "ana", "points": 40 }, { "user": "bob", "points": 20 }]
    })
}
