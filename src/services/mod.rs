pub mod games;
pub mod matches;
pub mod server;

use serde::Serialize;
use serde_json::Value;

use crate::domain::validation::Payload;
use crate::errors::QuizResult;

/// The stored document with the patch's keys laid over it. `id` is not patchable.
fn merged_document<T: Serialize>(current: &T, patch: &Payload) -> QuizResult<Payload> {
    let mut document = match serde_json::to_value(current).map_err(anyhow::Error::from)? {
        Value::Object(map) => map,
        _ => Payload::new(),
    };
    for (key, value) in patch.iter().filter(|(key, _)| key.as_str() != "id") {
        document.insert(key.clone(), value.clone());
    }
    Ok(document)
}

/// Numeric keys are tried as ids before falling back to the natural key.
fn parse_id(key: &str) -> Option<i64> {
    key.trim().parse().ok()
}
