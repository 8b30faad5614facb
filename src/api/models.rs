use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::models::{Game, Match, MatchSummary};
use crate::domain::validation::Payload;
use crate::errors::QuizError;

#[derive(Serialize)]
pub struct GameListResponse {
    pub games: Vec<Game>,
}

#[derive(Serialize)]
pub struct GameResponse {
    pub game: Game,
}

#[derive(Serialize)]
pub struct MatchListResponse {
    pub matches: Vec<Match>,
}

#[derive(Serialize)]
pub struct LandingResponse {
    pub matches: Vec<MatchSummary>,
}

#[derive(Serialize)]
pub struct MatchResponse {
    #[serde(rename = "match")]
    pub match_: Match,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealTimeResponse {
    pub is_real_time: bool,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `?v=` selects a single facet of the document; unknown values are ignored.
#[derive(Deserialize, Default)]
pub struct ViewParams {
    pub v: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Document,
    Ranking,
    RealTime,
}

impl ViewParams {
    pub fn view(&self) -> View {
        match self.v.as_deref() {
            Some("ranking") => View::Ranking,
            Some("isReal") => View::RealTime,
            _ => View::Document,
        }
    }
}

/// What a `PUT` on a game asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum GameUpdate {
    Document(Payload),
    Score(Payload),
}

/// What a `PUT` on a match asks for; matches also accept the state flag.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchUpdate {
    Document(Payload),
    Score(Payload),
    Started(Value),
}

enum Intent {
    Document(Payload),
    Score(Payload),
    Other(Payload),
}

pub fn parse_object(body: &[u8]) -> Option<Payload> {
    match serde_json::from_slice(body) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// The object under `key` in a create body, `{}` when absent.
pub fn wrapped_document(body: &[u8], key: &str) -> Payload {
    parse_object(body)
        .and_then(|mut outer| outer.remove(key))
        .and_then(|inner| match inner {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .unwrap_or_default()
}

/// `document_key` is `game` or `match`. An empty or non-object body, or an
/// empty document patch, is malformed.
fn classify(body: &[u8], document_key: &str) -> Result<Intent, QuizError> {
    let mut object = parse_object(body)
        .filter(|o| !o.is_empty())
        .ok_or(QuizError::MalformedRequest)?;

    if let Some(document) = object.remove(document_key) {
        return match document {
            Value::Object(patch) if !patch.is_empty() => Ok(Intent::Document(patch)),
            _ => Err(QuizError::MalformedRequest),
        };
    }
    if object.contains_key("user") || object.contains_key("points") {
        return Ok(Intent::Score(object));
    }
    Ok(Intent::Other(object))
}

impl GameUpdate {
    pub fn parse(body: &[u8]) -> Result<Self, QuizError> {
        match classify(body, "game")? {
            Intent::Document(patch) => Ok(GameUpdate::Document(patch)),
            Intent::Score(submission) => Ok(GameUpdate::Score(submission)),
            Intent::Other(_) => Err(QuizError::MalformedRequest),
        }
    }
}

impl MatchUpdate {
    pub fn parse(body: &[u8]) -> Result<Self, QuizError> {
        match classify(body, "match")? {
            Intent::Document(patch) => Ok(MatchUpdate::Document(patch)),
            Intent::Score(submission) => Ok(MatchUpdate::Score(submission)),
            Intent::Other(mut rest) => rest
                .remove("started")
                .map(MatchUpdate::Started)
                .ok_or(QuizError::MalformedRequest),
        }
    }
}
