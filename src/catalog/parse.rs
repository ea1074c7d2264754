//! # Record Mapping
//!
//! Turns raw document-store records into typed [`Module`]s.
//!
//! The inbound contract is semi-structured: fields may be missing or of
//! the wrong type, and extra fields show up routinely. So records are
//! walked as `serde_json::Value` field-by-field, defaulting instead of
//! failing. The one hard requirement is that `content` and `test` are
//! objects: a record without them has no tracks to navigate, so it is
//! skipped with a warning and the rest of the batch continues.

use log::warn;
use serde_json::Value;

use super::types::{Lesson, LessonContent, Module, Question, TestContent};

/// Why a record was rejected during a batch parse.
#[derive(Debug, PartialEq, Eq)]
pub enum RecordFault {
    /// The record itself was not a JSON object.
    NotAnObject,
    /// A required track (`content` or `test`) was absent or not an object.
    MissingTrack(&'static str),
}

impl std::fmt::Display for RecordFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordFault::NotAnObject => write!(f, "record is not an object"),
            RecordFault::MissingTrack(track) => {
                write!(f, "field '{track}' is missing or not an object")
            }
        }
    }
}

/// Maps a batch of raw records to modules, preserving source order.
///
/// Faulty records are logged and dropped; the batch never aborts.
pub fn parse_records(records: &[Value]) -> Vec<Module> {
    let mut modules = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        match parse_module(record) {
            Ok(module) => modules.push(module),
            Err(fault) => warn!("Skipping module record {i}: {fault}"),
        }
    }
    modules
}

/// Maps a single raw record to a [`Module`].
pub fn parse_module(record: &Value) -> Result<Module, RecordFault> {
    if !record.is_object() {
        return Err(RecordFault::NotAnObject);
    }

    let content = record
        .get("content")
        .filter(|v| v.is_object())
        .ok_or(RecordFault::MissingTrack("content"))?;
    let test = record
        .get("test")
        .filter(|v| v.is_object())
        .ok_or(RecordFault::MissingTrack("test"))?;

    Ok(Module {
        // Every module must stay addressable, so an absent or empty id
        // gets a synthesized one.
        id: match string_field(record, "id") {
            id if id.is_empty() => uuid::Uuid::new_v4().to_string(),
            id => id,
        },
        category: string_field(record, "category"),
        content: LessonContent {
            id: string_field(content, "id"),
            description: string_field(content, "description"),
            image: string_field(content, "image"),
            time: string_field(content, "time"),
            lessons: array_field(content, "lessons", parse_lesson),
        },
        test: TestContent {
            id: string_field(test, "id"),
            description: string_field(test, "description"),
            image: string_field(test, "image"),
            time: string_field(test, "time"),
            questions: array_field(test, "questions", parse_question),
        },
    })
}

fn parse_lesson(value: &Value) -> Lesson {
    Lesson {
        title: string_field(value, "title"),
        video: string_field(value, "video"),
        duration: string_field(value, "duration"),
        explanation: string_field(value, "explanation"),
    }
}

fn parse_question(value: &Value) -> Question {
    Question {
        content: string_field(value, "content"),
        answers: value
            .get("answers")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .map(|v| v.as_str().unwrap_or_default().to_string())
                    .collect()
            })
            .unwrap_or_default(),
        correct_index: value
            .get("correct_index")
            .and_then(Value::as_u64)
            .unwrap_or_default() as usize,
    }
}

/// String field lookup: missing or mistyped values become `""`.
fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Array field lookup: each entry is mapped with `parse`; a missing or
/// mistyped array yields an empty sequence. Entries are never dropped.
fn array_field<T>(value: &Value, key: &str, parse: fn(&Value) -> T) -> Vec<T> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().map(parse).collect())
        .unwrap_or_default()
}
