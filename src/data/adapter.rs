//! Normalization of raw character records.
//!
//! The dataset is loosely shaped: it may be an array or an id-keyed object,
//! and the age lives under one of several keys, sometimes as a number and
//! sometimes as free text such as `"17"` or `"Unknown"`.

use serde_json::{Map, Value};

use crate::error::QuizError;
use crate::models::Character;

/// Keys checked for the age, in priority order.
const AGE_KEYS: [&str; 3] = ["Age", "age", "CharacterAge"];
const ID_KEYS: [&str; 2] = ["Id", "id"];
const NAME_KEYS: [&str; 2] = ["Name", "name"];
/// Age values that mean "not known".
const UNKNOWN_AGES: [&str; 2] = ["Unknown", "?"];

/// Turns a fetched document into characters with a usable age.
///
/// Records without a positive integer age are dropped silently. Input order
/// is preserved. An empty result is reported as [`QuizError::NoValidData`].
pub fn normalize(document: Value) -> Result<Vec<Character>, QuizError> {
    let records = into_records(document);
    let total = records.len();

    let characters: Vec<Character> = records.iter().filter_map(normalize_record).collect();
    tracing::debug!(total, valid = characters.len(), "normalized character records");

    if characters.is_empty() {
        return Err(QuizError::NoValidData);
    }
    Ok(characters)
}

fn into_records(document: Value) -> Vec<Value> {
    match document {
        Value::Array(items) => items,
        Value::Object(map) => map.into_iter().map(|(_, record)| record).collect(),
        _ => Vec::new(),
    }
}

fn normalize_record(record: &Value) -> Option<Character> {
    let fields = record.as_object()?;

    // First non-empty alias wins, even if it then fails to parse.
    let raw_age = AGE_KEYS
        .iter()
        .filter_map(|key| fields.get(*key))
        .find(|value| is_present(value))?;
    let age = age_from_value(raw_age)?;

    let id = first_text(fields, &ID_KEYS).unwrap_or_default();
    let name = first_text(fields, &NAME_KEYS).unwrap_or_else(|| id.clone());

    Some(Character { id, name, age })
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn age_from_value(value: &Value) -> Option<u32> {
    let age = match value {
        Value::String(text) if UNKNOWN_AGES.contains(&text.as_str()) => return None,
        Value::String(text) => parse_leading_int(text)?,
        Value::Number(number) => match number.as_i64() {
            Some(n) => n,
            None => number.as_f64().filter(|n| n.is_finite())?.trunc() as i64,
        },
        _ => return None,
    };

    u32::try_from(age).ok().filter(|age| *age > 0)
}

fn first_text(fields: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .find_map(|value| match value {
            Value::String(text) if !text.is_empty() => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        })
}

/// Parses the integer at the start of `text`, ignoring anything after it.
///
/// Leading whitespace and a single sign are accepted, so `" 17 years"` gives
/// 17 and `"-4"` gives -4. Text without leading digits gives `None`.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
