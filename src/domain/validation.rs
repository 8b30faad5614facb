//! Ordered rule chains for game and match payloads.
//!
//! Payloads arrive loosely typed. Each rule looks at one concern and the
//! first failing rule is the one reported. Only after the whole chain passes
//! is the payload turned into a typed document.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;
use serde_json::{Map, Value};

use crate::domain::models::{
    Answer, Difficulty, GameData, GameId, GameSummary, MatchData, Question, RankingEntry,
};
use crate::errors::{QuizError, QuizResult, ValidationError};

pub type Payload = Map<String, Value>;

const MIN_RATING: f64 = 0.0;
const MAX_RATING: f64 = 5.0;
const MIN_ANSWERS: usize = 2;
const MAX_ANSWERS: usize = 6;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{N} _-]+$").expect("valid name pattern"));

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid url pattern"));

/// Unique-index probes the validators need from the store.
pub trait DocumentIndex {
    fn game_name_taken(&self, name: &str, exclude: Option<i64>) -> anyhow::Result<bool>;
    fn game_summary(&self, id: GameId) -> anyhow::Result<Option<GameSummary>>;
    fn match_url_taken(&self, url: &str, exclude: Option<i64>) -> anyhow::Result<bool>;
}

/// Which leaderboard an entry belongs to; decides the error wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leaderboard {
    GameRanking,
    MatchResult,
}

impl Leaderboard {
    fn missing_user(self) -> ValidationError {
        match self {
            Leaderboard::GameRanking => ValidationError::RankingWithoutUser,
            Leaderboard::MatchResult => ValidationError::ResultWithoutUser,
        }
    }

    fn missing_points(self) -> ValidationError {
        match self {
            Leaderboard::GameRanking => ValidationError::RankingWithoutPoints,
            Leaderboard::MatchResult => ValidationError::ResultWithoutPoints,
        }
    }
}

pub struct RuleInput<'a> {
    pub payload: &'a Payload,
    pub index: &'a dyn DocumentIndex,
    /// Document being updated, skipped by uniqueness checks.
    pub exclude: Option<i64>,
}

type Rule = fn(&RuleInput<'_>) -> QuizResult<()>;

const GAME_RULES: &[Rule] = &[
    game_name_present,
    game_name_pattern,
    game_name_unique,
    game_rating_in_range,
    game_times_played_non_negative,
    game_creator_present,
    game_questions_present,
    game_questions_well_formed,
    game_ranking_entries,
    game_creation_date,
];

const MATCH_RULES: &[Rule] = &[
    match_url_present,
    match_url_pattern,
    match_type_present,
    match_state_present,
    match_owner_present,
    match_result_entries,
    match_ending_date,
    match_game_present,
    match_game_well_formed,
    match_game_exists,
    match_url_unique,
];

fn run_rules(rules: &[Rule], input: &RuleInput<'_>) -> QuizResult<()> {
    rules.iter().try_for_each(|rule| rule(input))
}

pub fn validate_game(
    payload: &Payload,
    index: &dyn DocumentIndex,
    exclude: Option<GameId>,
) -> QuizResult<GameData> {
    let input = RuleInput { payload, index, exclude };
    run_rules(GAME_RULES, &input)?;
    build_game(payload)
}

pub fn validate_match(
    payload: &Payload,
    index: &dyn DocumentIndex,
    exclude: Option<i64>,
) -> QuizResult<MatchData> {
    let input = RuleInput { payload, index, exclude };
    run_rules(MATCH_RULES, &input)?;
    build_match(&input)
}

// --- Field readers ---

/// Missing and `null` are the same thing.
fn field<'a>(payload: &'a Payload, key: &str) -> Option<&'a Value> {
    payload.get(key).filter(|v| !v.is_null())
}

/// Strings as-is, numbers in their decimal form.
fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn whole_number(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

fn reference_id(value: &Value) -> Option<i64> {
    match value {
        Value::String(s) => s.trim().parse().ok(),
        other => whole_number(other),
    }
}

pub fn parse_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_date_str(s.trim()),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

fn parse_date_str(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(s) {
        return Some(date.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn raw_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Parses one `{user, points}` entry, reporting with the board's wording.
pub fn ranking_entry(value: &Value, board: Leaderboard) -> Result<RankingEntry, ValidationError> {
    let entry = value.as_object().ok_or(board.missing_user())?;
    let user = field(entry, "user").and_then(text).ok_or(board.missing_user())?;
    let points = field(entry, "points")
        .and_then(whole_number)
        .ok_or(board.missing_points())?;
    Ok(RankingEntry { user, points })
}

fn ranking_entries(value: Option<&Value>, board: Leaderboard) -> Result<Vec<RankingEntry>, ValidationError> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };
    let entries = value.as_array().ok_or(board.missing_user())?;
    entries.iter().map(|entry| ranking_entry(entry, board)).collect()
}

fn question(value: &Value) -> Result<Question, ValidationError> {
    let q = value.as_object().ok_or(ValidationError::QuestionWithoutText)?;

    let prompt = field(q, "text")
        .and_then(Value::as_str)
        .filter(|t| !t.trim().is_empty())
        .ok_or(ValidationError::QuestionWithoutText)?
        .to_string();

    let difficulty = field(q, "difficulty")
        .and_then(Value::as_str)
        .and_then(Difficulty::parse)
        .ok_or(ValidationError::InvalidDifficulty)?;

    let answers = field(q, "answers")
        .and_then(Value::as_array)
        .filter(|a| (MIN_ANSWERS..=MAX_ANSWERS).contains(&a.len()))
        .ok_or(ValidationError::InvalidAnswerCount)?
        .iter()
        .map(|a| {
            a.get("answer")
                .and_then(text)
                .map(|answer| Answer { answer })
                .ok_or(ValidationError::InvalidAnswerCount)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let correct_answer = field(q, "correctAnswer")
        .and_then(whole_number)
        .and_then(|i| usize::try_from(i).ok())
        .filter(|i| *i < answers.len())
        .ok_or(ValidationError::InvalidCorrectAnswer)?;

    Ok(Question { text: prompt, difficulty, answers, correct_answer })
}

fn questions(payload: &Payload) -> Result<Vec<Question>, ValidationError> {
    field(payload, "questions")
        .and_then(Value::as_array)
        .filter(|q| !q.is_empty())
        .ok_or(ValidationError::MissingQuestions)?
        .iter()
        .map(question)
        .collect()
}

// --- Game rules ---

fn game_name_present(input: &RuleInput<'_>) -> QuizResult<()> {
    match field(input.payload, "name") {
        Some(Value::String(s)) if s.is_empty() => Err(ValidationError::MissingName.into()),
        Some(_) => Ok(()),
        None => Err(ValidationError::MissingName.into()),
    }
}

fn game_name_pattern(input: &RuleInput<'_>) -> QuizResult<()> {
    field(input.payload, "name")
        .and_then(text)
        .filter(|name| NAME_PATTERN.is_match(name))
        .map(|_| ())
        .ok_or(ValidationError::InvalidName.into())
}

fn game_name_unique(input: &RuleInput<'_>) -> QuizResult<()> {
    let name = field(input.payload, "name").and_then(text).unwrap_or_default();
    if input.index.game_name_taken(&name, input.exclude)? {
        return Err(QuizError::DuplicateKey {
            collection: "games",
            index: "name",
            value: name.to_lowercase(),
        });
    }
    Ok(())
}

fn game_rating_in_range(input: &RuleInput<'_>) -> QuizResult<()> {
    match field(input.payload, "rating") {
        None => Ok(()),
        Some(value) => value
            .as_f64()
            .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
            .map(|_| ())
            .ok_or(ValidationError::InvalidRating.into()),
    }
}

fn game_times_played_non_negative(input: &RuleInput<'_>) -> QuizResult<()> {
    match field(input.payload, "timesPlayed") {
        None => Ok(()),
        Some(value) => whole_number(value)
            .and_then(|n| u32::try_from(n).ok())
            .map(|_| ())
            .ok_or(ValidationError::NegativeTimesPlayed.into()),
    }
}

fn game_creator_present(input: &RuleInput<'_>) -> QuizResult<()> {
    field(input.payload, "creator")
        .and_then(text)
        .map(|_| ())
        .ok_or(ValidationError::MissingCreator.into())
}

fn game_questions_present(input: &RuleInput<'_>) -> QuizResult<()> {
    field(input.payload, "questions")
        .and_then(Value::as_array)
        .filter(|q| !q.is_empty())
        .map(|_| ())
        .ok_or(ValidationError::MissingQuestions.into())
}

fn game_questions_well_formed(input: &RuleInput<'_>) -> QuizResult<()> {
    questions(input.payload)?;
    Ok(())
}

fn game_ranking_entries(input: &RuleInput<'_>) -> QuizResult<()> {
    ranking_entries(field(input.payload, "ranking"), Leaderboard::GameRanking)?;
    Ok(())
}

fn game_creation_date(input: &RuleInput<'_>) -> QuizResult<()> {
    match field(input.payload, "creationDate") {
        None => Ok(()),
        Some(value) => parse_date(value)
            .map(|_| ())
            .ok_or_else(|| ValidationError::InvalidCreationDate(raw_display(value)).into()),
    }
}

fn build_game(payload: &Payload) -> QuizResult<GameData> {
    let name = field(payload, "name").and_then(text).ok_or(ValidationError::MissingName)?;
    let rating = field(payload, "rating").and_then(Value::as_f64).unwrap_or(MIN_RATING);
    let times_played = field(payload, "timesPlayed")
        .and_then(whole_number)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0);
    let creator = field(payload, "creator").and_then(text).ok_or(ValidationError::MissingCreator)?;
    let creation_date = field(payload, "creationDate")
        .and_then(parse_date)
        .unwrap_or_else(Utc::now);

    let mut ranking = ranking_entries(field(payload, "ranking"), Leaderboard::GameRanking)?;
    crate::ranking::sort_descending(&mut ranking);

    Ok(GameData {
        name,
        rating,
        times_played,
        creator,
        questions: questions(payload)?,
        ranking,
        creation_date,
    })
}

// --- Match rules ---

fn match_url(payload: &Payload) -> Option<String> {
    field(payload, "url").and_then(text)
}

fn match_url_present(input: &RuleInput<'_>) -> QuizResult<()> {
    match field(input.payload, "url") {
        Some(Value::String(s)) if s.is_empty() => Err(ValidationError::MissingUrl.into()),
        Some(_) => Ok(()),
        None => Err(ValidationError::MissingUrl.into()),
    }
}

fn match_url_pattern(input: &RuleInput<'_>) -> QuizResult<()> {
    match_url(input.payload)
        .filter(|url| URL_PATTERN.is_match(url))
        .map(|_| ())
        .ok_or(ValidationError::InvalidUrl.into())
}

fn match_type_present(input: &RuleInput<'_>) -> QuizResult<()> {
    field(input.payload, "isRealTime")
        .and_then(Value::as_bool)
        .map(|_| ())
        .ok_or(ValidationError::MissingMatchType.into())
}

fn match_state_present(input: &RuleInput<'_>) -> QuizResult<()> {
    field(input.payload, "started")
        .and_then(Value::as_bool)
        .map(|_| ())
        .ok_or(ValidationError::MissingState.into())
}

fn match_owner_present(input: &RuleInput<'_>) -> QuizResult<()> {
    field(input.payload, "owner")
        .and_then(text)
        .map(|_| ())
        .ok_or(ValidationError::MissingOwner.into())
}

fn match_result_entries(input: &RuleInput<'_>) -> QuizResult<()> {
    ranking_entries(field(input.payload, "result"), Leaderboard::MatchResult)?;
    Ok(())
}

fn match_ending_date(input: &RuleInput<'_>) -> QuizResult<()> {
    field(input.payload, "endingDate")
        .and_then(parse_date)
        .map(|_| ())
        .ok_or(ValidationError::InvalidEndingDate.into())
}

fn match_game_present(input: &RuleInput<'_>) -> QuizResult<()> {
    field(input.payload, "game")
        .map(|_| ())
        .ok_or(ValidationError::MissingGame.into())
}

fn match_game_id(payload: &Payload) -> Option<GameId> {
    field(payload, "game")
        .and_then(Value::as_object)
        .and_then(|game| field(game, "id"))
        .and_then(reference_id)
}

fn match_game_well_formed(input: &RuleInput<'_>) -> QuizResult<()> {
    match_game_id(input.payload)
        .map(|_| ())
        .ok_or(ValidationError::MalformedGame.into())
}

fn resolve_game(input: &RuleInput<'_>) -> QuizResult<GameSummary> {
    let id = match_game_id(input.payload).ok_or(ValidationError::MalformedGame)?;
    input
        .index
        .game_summary(id)?
        .ok_or(ValidationError::MissingGame.into())
}

fn match_game_exists(input: &RuleInput<'_>) -> QuizResult<()> {
    resolve_game(input).map(|_| ())
}

fn match_url_unique(input: &RuleInput<'_>) -> QuizResult<()> {
    let url = match_url(input.payload).unwrap_or_default().to_lowercase();
    if input.index.match_url_taken(&url, input.exclude)? {
        return Err(ValidationError::UrlTaken.into());
    }
    Ok(())
}

fn build_match(input: &RuleInput<'_>) -> QuizResult<MatchData> {
    let payload = input.payload;
    let url = match_url(payload).ok_or(ValidationError::MissingUrl)?.to_lowercase();
    let is_real_time = field(payload, "isRealTime")
        .and_then(Value::as_bool)
        .ok_or(ValidationError::MissingMatchType)?;
    let started = field(payload, "started")
        .and_then(Value::as_bool)
        .ok_or(ValidationError::MissingState)?;
    let owner = field(payload, "owner").and_then(text).ok_or(ValidationError::MissingOwner)?;
    let ending_date = field(payload, "endingDate")
        .and_then(parse_date)
        .ok_or(ValidationError::InvalidEndingDate)?;

    let mut result = ranking_entries(field(payload, "result"), Leaderboard::MatchResult)?;
    crate::ranking::sort_descending(&mut result);

    Ok(MatchData {
        url,
        is_real_time,
        started,
        owner,
        ending_date,
        game: resolve_game(input)?,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct FakeIndex {
        game_names: Vec<&'static str>,
        games: Vec<GameSummary>,
        urls: Vec<(&'static str, i64)>,
    }

    impl Default for FakeIndex {
        fn default() -> Self {
            Self {
                game_names: vec!["quizzy", "Futbol"],
                games: vec![GameSummary { id: 1, name: "quizzy".to_string() }],
                urls: vec![("testurl", 1), ("testurl2", 2)],
            }
        }
    }

    impl DocumentIndex for FakeIndex {
        fn game_name_taken(&self, name: &str, _exclude: Option<i64>) -> anyhow::Result<bool> {
            Ok(self.game_names.iter().any(|n| n.to_lowercase() == name.to_lowercase()))
        }

        fn game_summary(&self, id: GameId) -> anyhow::Result<Option<GameSummary>> {
            Ok(self.games.iter().find(|g| g.id == id).cloned())
        }

        fn match_url_taken(&self, url: &str, exclude: Option<i64>) -> anyhow::Result<bool> {
            Ok(self.urls.iter().any(|(u, id)| *u == url && Some(*id) != exclude))
        }
    }

    fn payload(value: Value) -> Payload {
        value.as_object().cloned().unwrap()
    }

    fn valid_game() -> Value {
        json!({
            "name": "Trivia",
            "rating": 3,
            "timesPlayed": 4,
            "creator": "user-1",
            "questions": [{
                "text": "ques",
                "difficulty": "Easy",
                "answers": [{ "answer": "ans1" }, { "answer": "ans2" }],
                "correctAnswer": 1
            }],
            "ranking": [{ "user": "ana", "points": 3 }, { "user": "bob", "points": 9 }],
            "creationDate": "2017-05-01"
        })
    }

    fn valid_match() -> Value {
        json!({
            "url": "NewMatch",
            "isRealTime": false,
            "started": false,
            "owner": "user-1",
            "endingDate": "2017-06-01T12:00:00Z",
            "game": { "id": 1 },
            "result": [{ "user": "ana", "points": 3 }]
        })
    }

    fn game_error(overrides: Value) -> String {
        let mut doc = payload(valid_game());
        for (k, v) in payload(overrides) {
            doc.insert(k, v);
        }
        validate_game(&doc, &FakeIndex::default(), None)
            .unwrap_err()
            .to_string()
    }

    fn match_error(overrides: Value) -> String {
        let mut doc = payload(valid_match());
        for (k, v) in payload(overrides) {
            doc.insert(k, v);
        }
        validate_match(&doc, &FakeIndex::default(), None)
            .unwrap_err()
            .to_string()
    }

    #[test]
    fn test_valid_game_is_normalized() {
        let game = validate_game(&payload(valid_game()), &FakeIndex::default(), None).unwrap();

        assert_eq!(game.name, "Trivia");
        assert_eq!(game.times_played, 4);
        assert_eq!(game.ranking[0].user, "bob");
        assert_eq!(game.creation_date.to_rfc3339(), "2017-05-01T00:00:00+00:00");
    }

    #[test]
    fn test_game_defaults() {
        let mut doc = payload(valid_game());
        doc.remove("rating");
        doc.remove("timesPlayed");
        doc.remove("ranking");
        doc.remove("creationDate");

        let game = validate_game(&doc, &FakeIndex::default(), None).unwrap();
        assert_eq!(game.rating, 0.0);
        assert_eq!(game.times_played, 0);
        assert!(game.ranking.is_empty());
    }

    #[test]
    fn test_game_rule_messages() {
        assert_eq!(game_error(json!({ "name": null })), "You must enter a name");
        assert_eq!(game_error(json!({ "name": "" })), "You must enter a name");
        assert_eq!(game_error(json!({ "name": "tennis@2010" })), "invalid name");
        assert_eq!(
            game_error(json!({ "name": "Quizzy" })),
            "duplicate key error collection: games index: name_1 dup key: { name: \"quizzy\" }"
        );
        assert_eq!(game_error(json!({ "rating": -2 })), "there must be a correct rating");
        assert_eq!(game_error(json!({ "rating": 8 })), "there must be a correct rating");
        assert_eq!(game_error(json!({ "timesPlayed": -1 })), "timesPlayed must be positive");
        assert_eq!(game_error(json!({ "creator": null })), "must have a creator");
        assert_eq!(game_error(json!({ "questions": null })), "there must be at least one question");
        assert_eq!(game_error(json!({ "questions": [] })), "there must be at least one question");
        assert_eq!(game_error(json!({ "ranking": [{ "points": 8 }] })), "ranking must have a user");
        assert_eq!(game_error(json!({ "ranking": [{ "user": "sebas" }] })), "ranking must have a points");
        assert_eq!(
            game_error(json!({ "creationDate": "Lunes 20 de Julio de 1999" })),
            "Cast to Date failed for value \"Lunes 20 de Julio de 1999\" at path \"creationDate\""
        );
    }

    #[test]
    fn test_game_first_failure_wins() {
        let err = game_error(json!({
            "name": "bad@name",
            "rating": 9,
            "creator": null,
            "questions": []
        }));
        assert_eq!(err, "invalid name");

        let err = game_error(json!({ "rating": 9, "creator": null }));
        assert_eq!(err, "there must be a correct rating");
    }

    #[test]
    fn test_game_name_characters() {
        for name in ["1324", "Juego_Aleatorio-33 44 55", "Fútbol"] {
            let mut doc = payload(valid_game());
            doc.insert("name".to_string(), json!(name));
            assert!(validate_game(&doc, &FakeIndex::default(), None).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_rating_bounds_are_inclusive() {
        for rating in [0.0, 2.5, 5.0] {
            let mut doc = payload(valid_game());
            doc.insert("rating".to_string(), json!(rating));
            assert!(validate_game(&doc, &FakeIndex::default(), None).is_ok());
        }
    }

    #[test]
    fn test_answer_count() {
        let answers = |n: usize| -> Value {
            Value::Array((0..n).map(|i| json!({ "answer": format!("ans{i}") })).collect())
        };
        let with_answers = |n: usize| {
            let mut doc = payload(valid_game());
            doc.insert(
                "questions".to_string(),
                json!([{ "text": "ques", "difficulty": "Easy", "answers": answers(n), "correctAnswer": 1 }]),
            );
            validate_game(&doc, &FakeIndex::default(), None)
        };

        assert!(with_answers(2).is_ok());
        assert!(with_answers(6).is_ok());
        assert_eq!(
            with_answers(1).unwrap_err().to_string(),
            "a question must have between 2 and 6 answers"
        );
        assert!(with_answers(7).is_err());
    }

    #[test]
    fn test_question_shape() {
        let question_error = |question: Value| {
            let mut doc = payload(valid_game());
            doc.insert("questions".to_string(), json!([question]));
            validate_game(&doc, &FakeIndex::default(), None)
                .unwrap_err()
                .to_string()
        };
        let answers = json!([{ "answer": "a" }, { "answer": "b" }]);

        assert_eq!(
            question_error(json!({ "difficulty": "Easy", "answers": answers, "correctAnswer": 0 })),
            "a question must have a text"
        );
        assert_eq!(
            question_error(json!({ "text": "q", "difficulty": "Trivial", "answers": answers, "correctAnswer": 0 })),
            "invalid difficulty"
        );
        assert_eq!(
            question_error(json!({ "text": "q", "difficulty": "Hard", "answers": answers, "correctAnswer": 2 })),
            "correctAnswer must point to an answer"
        );
        assert_eq!(
            question_error(json!({
                "text": "q",
                "difficulty": "Easy",
                "answers": [{ "answer": "a" }, { "nope": 1 }],
                "correctAnswer": 0
            })),
            "a question must have between 2 and 6 answers"
        );
        assert_eq!(
            question_error(json!({ "text": "q", "difficulty": "Easy", "answers": ["a", "b"], "correctAnswer": 0 })),
            "a question must have between 2 and 6 answers"
        );
    }

    #[test]
    fn test_question_keeps_text_and_answers() {
        let game = validate_game(&payload(valid_game()), &FakeIndex::default(), None).unwrap();
        let question = &game.questions[0];

        assert_eq!(question.text, "ques");
        assert_eq!(question.answers, vec![Answer { answer: "ans1".to_string() }, Answer { answer: "ans2".to_string() }]);
        assert_eq!(question.correct_answer, 1);
    }

    #[test]
    fn test_name_uniqueness_folds_non_ascii() {
        let index = FakeIndex { game_names: vec!["Fútbol"], ..FakeIndex::default() };
        let mut doc = payload(valid_game());
        doc.insert("name".to_string(), json!("FÚTBOL"));

        let err = validate_game(&doc, &index, None).unwrap_err();
        assert!(matches!(err, QuizError::DuplicateKey { ref value, .. } if value == "fútbol"));
    }

    #[test]
    fn test_valid_match_is_normalized() {
        let m = validate_match(&payload(valid_match()), &FakeIndex::default(), None).unwrap();

        assert_eq!(m.url, "newmatch");
        assert_eq!(m.game, GameSummary { id: 1, name: "quizzy".to_string() });
        assert_eq!(m.result, vec![RankingEntry::new("ana", 3)]);
    }

    #[test]
    fn test_match_rule_precedence() {
        let broken = json!({
            "url": null,
            "isRealTime": null,
            "started": null,
            "owner": null,
            "result": [{ "points": 3 }, { "user": "user" }],
            "endingDate": "el dia de hoy",
            "game": null
        });
        assert_eq!(match_error(broken.clone()), "You must enter a url");

        let mut next = payload(broken);
        next.insert("url".to_string(), json!("s e b a s"));
        assert_eq!(match_error(Value::Object(next.clone())), "Invalid url");

        next.remove("url");
        assert_eq!(match_error(Value::Object(next.clone())), "You must enter a type of match");

        next.remove("isRealTime");
        assert_eq!(match_error(Value::Object(next.clone())), "you must enter a state");

        next.remove("started");
        assert_eq!(match_error(Value::Object(next.clone())), "Must have an owner");

        next.remove("owner");
        assert_eq!(match_error(Value::Object(next.clone())), "Result must have a user");

        next.insert("result".to_string(), json!([{ "user": "user" }]));
        assert_eq!(match_error(Value::Object(next.clone())), "Result must have points");

        next.remove("result");
        assert_eq!(match_error(Value::Object(next.clone())), "Invalid date");

        next.remove("endingDate");
        assert_eq!(match_error(Value::Object(next)), "There must be a game");

        assert_eq!(match_error(json!({ "game": {} })), "Error in the definition of the game");
        assert_eq!(match_error(json!({ "game": { "id": 42 } })), "There must be a game");
        assert_eq!(match_error(json!({ "url": "testURL" })), "The url already exists");
    }

    #[test]
    fn test_url_uniqueness_skips_self() {
        let mut doc = payload(valid_match());
        doc.insert("url".to_string(), json!("testurl"));

        assert!(validate_match(&doc, &FakeIndex::default(), Some(1)).is_ok());
        assert!(validate_match(&doc, &FakeIndex::default(), Some(2)).is_err());
    }

    #[test]
    fn test_date_formats() {
        assert!(parse_date(&json!("2017-06-01T12:00:00+02:00")).is_some());
        assert!(parse_date(&json!("2017-06-01T12:00:00")).is_some());
        assert!(parse_date(&json!("2017-06-01")).is_some());
        assert!(parse_date(&json!(1_496_318_400_000_i64)).is_some());
        assert!(parse_date(&json!("el dia de hoy")).is_none());
        assert!(parse_date(&json!(true)).is_none());
    }

    #[test]
    fn test_ranking_entry_wording() {
        let err = ranking_entry(&json!({ "user": "sebas" }), Leaderboard::MatchResult).unwrap_err();
        assert_eq!(err, ValidationError::ResultWithoutPoints);

        let err = ranking_entry(&json!({ "points": 1 }), Leaderboard::GameRanking).unwrap_err();
        assert_eq!(err, ValidationError::RankingWithoutUser);

        let entry = ranking_entry(&json!({ "user": "sebas", "points": 99999 }), Leaderboard::MatchResult).unwrap();
        assert_eq!(entry, RankingEntry::new("sebas", 99999));
    }
}
