//! # Markup Styling
//!
//! Lesson explanations and question bodies arrive as raw HTML fragments.
//! Before the navigator exposes them, a static style prelude is
//! prepended so the presentation layer receives one self-contained
//! styled payload. The prelude is read once at startup; a missing or
//! unreadable file is non-fatal and leaves the prelude empty, so
//! fragments pass through unstyled.

use std::fs;
use std::path::Path;

use log::{info, warn};

/// Prepends a style prelude to raw HTML fragments.
#[derive(Debug, Clone, Default)]
pub struct Styler {
    prelude: String,
}

impl Styler {
    /// Reads the prelude from `path` once. Any read error is logged and
    /// degrades to an empty prelude.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(prelude) => {
                info!("Loaded style prelude from {}", path.display());
                Self { prelude }
            }
            Err(e) => {
                warn!(
                    "Couldn't read style prelude {}: {e}; rendering unstyled",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Builds a styler from an in-memory prelude.
    pub fn with_prelude(prelude: String) -> Self {
        Self { prelude }
    }

    /// Produces the styled payload for one fragment: prelude + fragment.
    /// Deterministic and uncached; recomputed on every cursor move.
    pub fn render(&self, fragment: &str) -> String {
        let mut styled = String::with_capacity(self.prelude.len() + fragment.len());
        styled.push_str(&self.prelude);
        styled.push_str(fragment);
        styled
    }
}
