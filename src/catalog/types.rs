use serde::{Deserialize, Serialize};

/// A top-level content unit: one lesson track plus one test track.
///
/// Modules are immutable once produced by a fetch. `id` is the identity
/// key used by all navigation selection; the parser guarantees it is
/// never empty (a UUID is synthesized when the source record has none).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Module {
    pub id: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub content: LessonContent,
    #[serde(default)]
    pub test: TestContent,
}

/// The lesson track of a module.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct LessonContent {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    /// Free-form display text ("45 mins"), passed through untouched.
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

/// A single lesson. Navigation addresses lessons by catalog order only;
/// the other fields are carried for the presentation layer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Lesson {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub video: String,
    #[serde(default)]
    pub duration: String,
    /// Raw HTML shown for this lesson, styled by the navigator on select.
    #[serde(default)]
    pub explanation: String,
}

/// The test track of a module.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TestContent {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// A single quiz question. Same ordering rule as lessons.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Question {
    /// Raw HTML for the question body.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub answers: Vec<String>,
    #[serde(default)]
    pub correct_index: usize,
}

impl Module {
    /// Number of lessons in this module's lesson track.
    pub fn lesson_count(&self) -> usize {
        self.content.lessons.len()
    }

    /// Number of questions in this module's test track.
    pub fn question_count(&self) -> usize {
        self.test.questions.len()
    }
}
