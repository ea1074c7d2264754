//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::catalog::store::{ModuleStore, StoreError};
use crate::catalog::types::{Lesson, LessonContent, Module, Question, TestContent};
use crate::core::navigator::Navigator;
use crate::core::styling::Styler;

/// An in-memory store serving canned modules, or a canned failure.
pub struct StaticStore {
    modules: Vec<Module>,
    fail: bool,
}

impl StaticStore {
    pub fn new(modules: Vec<Module>) -> Self {
        Self { modules, fail: false }
    }

    /// A store whose fetch always fails with a network error.
    pub fn failing() -> Self {
        Self {
            modules: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl ModuleStore for StaticStore {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_modules(&self) -> Result<Vec<Module>, StoreError> {
        if self.fail {
            return Err(StoreError::Network("connection refused".to_string()));
        }
        Ok(self.modules.clone())
    }
}

/// Builds a module with `lessons` numbered lessons and `questions`
/// numbered questions, titled after the module id.
pub fn sample_module(id: &str, lessons: usize, questions: usize) -> Module {
    Module {
        id: id.to_string(),
        category: "sample".to_string(),
        content: LessonContent {
            id: format!("{id}-content"),
            description: format!("{id} lessons"),
            image: String::new(),
            time: "10 mins".to_string(),
            lessons: (0..lessons)
                .map(|i| Lesson {
                    title: format!("{id} lesson {i}"),
                    video: String::new(),
                    duration: "2 mins".to_string(),
                    explanation: format!("<p>{id} lesson {i}</p>"),
                })
                .collect(),
        },
        test: TestContent {
            id: format!("{id}-test"),
            description: format!("{id} test"),
            image: String::new(),
            time: "5 mins".to_string(),
            questions: (0..questions)
                .map(|i| Question {
                    content: format!("<p>{id} question {i}</p>"),
                    answers: vec!["yes".to_string(), "no".to_string()],
                    correct_index: 0,
                })
                .collect(),
        },
    }
}

/// Creates a Navigator with an empty style prelude and three sample
/// modules: m1 (2 lessons, 1 question), m2 (3 lessons, 2 questions),
/// m3 (empty tracks).
pub fn test_navigator() -> Navigator {
    let mut nav = Navigator::new(Styler::with_prelude(String::new()));
    nav.replace_modules(vec![
        sample_module("m1", 2, 1),
        sample_module("m2", 3, 2),
        sample_module("m3", 0, 0),
    ]);
    nav
}
