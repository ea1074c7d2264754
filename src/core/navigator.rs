//! # Navigation State
//!
//! The single holder of content/navigation state: the ordered module
//! collection plus three independent linear cursors.
//!
//! ```text
//! Navigator
//! ├── modules: Vec<Module>          // replaced wholesale per fetch
//! ├── current_module / index        // which module is open
//! ├── current_lesson / index        // position in the lesson track
//! ├── current_question / index      // position in the test track
//! ├── rendered_text: String         // last styled lesson/question HTML
//! └── styler: Styler                // prelude + fragment formatting
//! ```
//!
//! Cursors are mutated only through the operations below, so the index
//! bounds invariant lives in one place: whenever a cursor is non-empty,
//! its index is a valid position in the backing sequence. Advancing past
//! the end resets the cursor to the empty/zero state; there is no
//! wraparound. The cursors do not clear each other.
//!
//! Every mutation publishes a fresh [`Snapshot`] on a watch channel, so
//! presentation consumers react to changes instead of polling.

use std::fmt;

use tokio::sync::watch;

use crate::catalog::types::{Lesson, Module, Question};
use crate::core::styling::Styler;

/// Errors surfaced by navigation operations.
#[derive(Debug, PartialEq, Eq)]
pub enum NavError {
    /// No module with the requested id exists in the collection.
    /// The module cursor is left unchanged.
    ModuleNotFound(String),
    /// A lesson/question operation was called before any module was
    /// selected. Caller-contract violation, surfaced instead of a panic.
    NoModuleSelected,
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::ModuleNotFound(id) => write!(f, "no module with id '{id}'"),
            NavError::NoModuleSelected => write!(f, "no module selected"),
        }
    }
}

impl std::error::Error for NavError {}

/// Published view of the navigation state, sent to consumers on every
/// mutation. Carries the cursor state; the full module list is read
/// through [`Navigator::modules`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub module_count: usize,
    pub current_module: Option<Module>,
    pub current_lesson: Option<Lesson>,
    pub current_question: Option<Question>,
    pub rendered_text: String,
}

pub struct Navigator {
    modules: Vec<Module>,
    current_module: Option<Module>,
    current_module_index: usize,
    current_lesson: Option<Lesson>,
    current_lesson_index: usize,
    current_question: Option<Question>,
    current_question_index: usize,
    rendered_text: String,
    styler: Styler,
    snapshot_tx: watch::Sender<Snapshot>,
}

impl Navigator {
    pub fn new(styler: Styler) -> Self {
        let (snapshot_tx, _) = watch::channel(Snapshot::default());
        Self {
            modules: Vec::new(),
            current_module: None,
            current_module_index: 0,
            current_lesson: None,
            current_lesson_index: 0,
            current_question: None,
            current_question_index: 0,
            rendered_text: String::new(),
            styler,
            snapshot_tx,
        }
    }

    /// Subscribes to navigation state changes. The receiver holds the
    /// latest [`Snapshot`] and is notified after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshot_tx.subscribe()
    }

    // ========================================================================
    // Published state
    // ========================================================================

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn current_module(&self) -> Option<&Module> {
        self.current_module.as_ref()
    }

    pub fn current_lesson(&self) -> Option<&Lesson> {
        self.current_lesson.as_ref()
    }

    pub fn current_lesson_index(&self) -> usize {
        self.current_lesson_index
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_question.as_ref()
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    pub fn rendered_text(&self) -> &str {
        &self.rendered_text
    }

    // ========================================================================
    // Module navigation
    // ========================================================================

    /// Replaces the module collection wholesale with a fetch result.
    /// Cursors are left alone; a fetch completes before any selection
    /// in the intended flow.
    pub fn replace_modules(&mut self, modules: Vec<Module>) {
        self.modules = modules;
        self.publish();
    }

    /// Selects the first module whose id matches, in document order.
    /// On a miss the cursor is unchanged and the miss is surfaced.
    pub fn select_module(&mut self, module_id: &str) -> Result<(), NavError> {
        let index = self
            .modules
            .iter()
            .position(|m| m.id == module_id)
            .ok_or_else(|| NavError::ModuleNotFound(module_id.to_string()))?;

        self.current_module_index = index;
        self.current_module = Some(self.modules[index].clone());
        self.publish();
        Ok(())
    }

    // ========================================================================
    // Lesson traversal
    // ========================================================================

    /// Opens the lesson track at `lesson_index`. An out-of-range index
    /// falls back to 0. A module with no lessons leaves the cursor empty.
    pub fn begin_lesson(&mut self, lesson_index: usize) -> Result<(), NavError> {
        let module = self
            .current_module
            .as_ref()
            .ok_or(NavError::NoModuleSelected)?;

        self.current_lesson_index = if lesson_index < module.lesson_count() {
            lesson_index
        } else {
            0
        };

        self.set_lesson_at_cursor();
        self.publish();
        Ok(())
    }

    /// Advances the lesson cursor. Past the last lesson the cursor
    /// resets to the empty state; no wraparound content is shown.
    pub fn advance_lesson(&mut self) -> Result<(), NavError> {
        if self.current_module.is_none() {
            return Err(NavError::NoModuleSelected);
        }

        self.current_lesson_index += 1;
        self.set_lesson_at_cursor();
        self.publish();
        Ok(())
    }

    /// True iff another lesson follows the current cursor position.
    pub fn has_next_lesson(&self) -> bool {
        match &self.current_module {
            Some(module) => self.current_lesson_index + 1 < module.lesson_count(),
            None => false,
        }
    }

    /// Sets `current_lesson`/`rendered_text` from the lesson index, or
    /// resets the cursor when the index is past the end of the track.
    fn set_lesson_at_cursor(&mut self) {
        let module = self.current_module.as_ref().expect("module selected");
        match module.content.lessons.get(self.current_lesson_index) {
            Some(lesson) => {
                self.rendered_text = self.styler.render(&lesson.explanation);
                self.current_lesson = Some(lesson.clone());
            }
            None => {
                self.current_lesson_index = 0;
                self.current_lesson = None;
            }
        }
    }

    // ========================================================================
    // Test traversal
    // ========================================================================

    /// Selects a module and opens its test track at question 0. A module
    /// with no questions leaves the question cursor empty.
    pub fn begin_test(&mut self, module_id: &str) -> Result<(), NavError> {
        self.select_module(module_id)?;

        self.current_question_index = 0;
        let module = self.current_module.as_ref().expect("just selected");
        match module.test.questions.first() {
            Some(question) => {
                self.rendered_text = self.styler.render(&question.content);
                self.current_question = Some(question.clone());
            }
            None => self.current_question = None,
        }
        self.publish();
        Ok(())
    }

    /// Advances the question cursor. Past the last question the cursor
    /// resets to the empty state.
    pub fn advance_question(&mut self) -> Result<(), NavError> {
        let module = self
            .current_module
            .as_ref()
            .ok_or(NavError::NoModuleSelected)?;

        self.current_question_index += 1;
        match module.test.questions.get(self.current_question_index) {
            Some(question) => {
                self.rendered_text = self.styler.render(&question.content);
                self.current_question = Some(question.clone());
            }
            None => {
                self.current_question_index = 0;
                self.current_question = None;
            }
        }
        self.publish();
        Ok(())
    }

    /// True iff another question follows the current cursor position.
    pub fn has_next_question(&self) -> bool {
        match &self.current_module {
            Some(module) => self.current_question_index + 1 < module.question_count(),
            None => false,
        }
    }

    // ========================================================================
    // Publishing
    // ========================================================================

    fn publish(&self) {
        // send() only fails with no receivers, which is fine: consumers
        // may subscribe later and will see the latest snapshot.
        let _ = self.snapshot_tx.send(Snapshot {
            module_count: self.modules.len(),
            current_module: self.current_module.clone(),
            current_lesson: self.current_lesson.clone(),
            current_question: self.current_question.clone(),
            rendered_text: self.rendered_text.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_module, test_navigator};

    #[test]
    fn test_new_navigator_is_empty() {
        let nav = Navigator::new(Styler::with_prelude(String::new()));
        assert!(nav.modules().is_empty());
        assert!(nav.current_module().is_none());
        assert!(nav.current_lesson().is_none());
        assert!(nav.current_question().is_none());
        assert_eq!(nav.rendered_text(), "");
    }

    #[test]
    fn test_select_module_sets_cursor() {
        let mut nav = test_navigator();
        nav.select_module("m2").unwrap();
        assert_eq!(nav.current_module().unwrap().id, "m2");
    }

    #[test]
    fn test_select_module_is_idempotent() {
        let mut nav = test_navigator();
        nav.select_module("m1").unwrap();
        let first = nav.current_module().cloned();
        nav.select_module("m1").unwrap();
        assert_eq!(nav.current_module().cloned(), first);
        assert_eq!(nav.current_lesson_index(), 0);
    }

    #[test]
    fn test_select_unknown_module_leaves_cursor_unchanged() {
        let mut nav = test_navigator();
        nav.select_module("m1").unwrap();

        let result = nav.select_module("nope");
        assert_eq!(result, Err(NavError::ModuleNotFound("nope".to_string())));
        assert_eq!(nav.current_module().unwrap().id, "m1");
    }

    #[test]
    fn test_lesson_ops_require_a_selected_module() {
        let mut nav = test_navigator();
        assert_eq!(nav.begin_lesson(0), Err(NavError::NoModuleSelected));
        assert_eq!(nav.advance_lesson(), Err(NavError::NoModuleSelected));
        assert_eq!(nav.advance_question(), Err(NavError::NoModuleSelected));
        assert!(!nav.has_next_lesson());
        assert!(!nav.has_next_question());
    }

    #[test]
    fn test_lesson_walkthrough_resets_on_exhaustion() {
        // m1 has two lessons and one question.
        let mut nav = test_navigator();
        nav.select_module("m1").unwrap();

        nav.begin_lesson(0).unwrap();
        assert_eq!(nav.current_lesson().unwrap().title, "m1 lesson 0");
        assert!(nav.has_next_lesson());

        nav.advance_lesson().unwrap();
        assert_eq!(nav.current_lesson().unwrap().title, "m1 lesson 1");
        assert!(!nav.has_next_lesson());

        nav.advance_lesson().unwrap();
        assert!(nav.current_lesson().is_none());
        assert_eq!(nav.current_lesson_index(), 0);
    }

    #[test]
    fn test_full_traversal_resets_exactly_once() {
        let mut nav = test_navigator();
        nav.select_module("m1").unwrap();
        nav.begin_lesson(0).unwrap();

        let lesson_count = nav.current_module().unwrap().lesson_count();
        let mut resets = 0;
        for _ in 0..lesson_count {
            nav.advance_lesson().unwrap();
            if nav.current_lesson().is_none() {
                resets += 1;
            }
        }
        assert_eq!(resets, 1);
    }

    #[test]
    fn test_begin_lesson_out_of_range_falls_back_to_zero() {
        let mut nav = test_navigator();
        nav.select_module("m1").unwrap();
        nav.begin_lesson(99).unwrap();
        assert_eq!(nav.current_lesson_index(), 0);
        assert_eq!(nav.current_lesson().unwrap().title, "m1 lesson 0");
    }

    #[test]
    fn test_begin_lesson_on_empty_track_leaves_cursor_empty() {
        let mut nav = test_navigator();
        nav.select_module("m3").unwrap(); // no lessons, no questions
        nav.begin_lesson(0).unwrap();
        assert!(nav.current_lesson().is_none());
        assert_eq!(nav.current_lesson_index(), 0);
    }

    #[test]
    fn test_begin_lesson_renders_explanation() {
        let mut nav = test_navigator();
        nav.select_module("m1").unwrap();
        nav.begin_lesson(1).unwrap();
        assert_eq!(nav.rendered_text(), "<p>m1 lesson 1</p>");
    }

    #[test]
    fn test_single_question_test_walkthrough() {
        let mut nav = test_navigator();
        nav.begin_test("m1").unwrap();
        assert_eq!(nav.current_question().unwrap().content, "<p>m1 question 0</p>");
        assert_eq!(nav.rendered_text(), "<p>m1 question 0</p>");
        assert!(!nav.has_next_question());

        nav.advance_question().unwrap();
        assert!(nav.current_question().is_none());
        assert_eq!(nav.current_question_index(), 0);
    }

    #[test]
    fn test_begin_test_with_no_questions_leaves_cursor_empty() {
        let mut nav = test_navigator();
        nav.begin_test("m3").unwrap();
        assert!(nav.current_question().is_none());
        assert_eq!(nav.current_question_index(), 0);
    }

    #[test]
    fn test_begin_test_on_unknown_module_fails() {
        let mut nav = test_navigator();
        assert_eq!(
            nav.begin_test("nope"),
            Err(NavError::ModuleNotFound("nope".to_string()))
        );
        assert!(nav.current_module().is_none());
    }

    #[test]
    fn test_cursors_do_not_clear_each_other() {
        let mut nav = test_navigator();
        nav.select_module("m1").unwrap();
        nav.begin_lesson(1).unwrap();

        nav.begin_test("m1").unwrap();
        // Starting the test track leaves the lesson cursor alone.
        assert_eq!(nav.current_lesson().unwrap().title, "m1 lesson 1");
        assert_eq!(nav.current_lesson_index(), 1);
    }

    #[test]
    fn test_rendered_text_survives_exhaustion() {
        let mut nav = test_navigator();
        nav.select_module("m1").unwrap();
        nav.begin_lesson(1).unwrap();
        let last = nav.rendered_text().to_string();

        nav.advance_lesson().unwrap();
        assert!(nav.current_lesson().is_none());
        assert_eq!(nav.rendered_text(), last);
    }

    #[test]
    fn test_replace_modules_is_wholesale() {
        let mut nav = test_navigator();
        assert_eq!(nav.modules().len(), 3);
        nav.replace_modules(vec![sample_module("fresh", 1, 1)]);
        assert_eq!(nav.modules().len(), 1);
        assert_eq!(nav.modules()[0].id, "fresh");
    }

    #[test]
    fn test_styling_prelude_is_prepended() {
        let mut nav = test_navigator_with_prelude("<style/>");
        nav.select_module("m1").unwrap();
        nav.begin_lesson(0).unwrap();
        assert_eq!(nav.rendered_text(), "<style/><p>m1 lesson 0</p>");
    }

    #[test]
    fn test_snapshots_track_mutations() {
        let mut nav = test_navigator();
        let rx = nav.subscribe();

        nav.select_module("m1").unwrap();
        assert_eq!(rx.borrow().current_module.as_ref().unwrap().id, "m1");

        nav.begin_lesson(0).unwrap();
        assert_eq!(
            rx.borrow().current_lesson.as_ref().unwrap().title,
            "m1 lesson 0"
        );

        nav.advance_lesson().unwrap();
        nav.advance_lesson().unwrap();
        assert!(rx.borrow().current_lesson.is_none());
        assert_eq!(rx.borrow().module_count, 3);
    }

    fn test_navigator_with_prelude(prelude: &str) -> Navigator {
        let mut nav = Navigator::new(Styler::with_prelude(prelude.to_string()));
        nav.replace_modules(vec![sample_module("m1", 2, 1)]);
        nav
    }
}
