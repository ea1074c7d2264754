//! # Core Navigation Logic
//!
//! This module contains Mentor's business state. It knows nothing about
//! any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Navigator (cursors)  │
//!                    │  • Styler (formatting)  │
//!                    │  • Config (settings)    │
//!                    │                         │
//!                    │  No I/O past startup.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    CLI     │      │    GUI     │      │    Web     │
//!     │   Shell    │      │  Adapter   │      │  (future)  │
//!     │ (main.rs)  │      │  (future)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`navigator`]: the `Navigator` struct — module collection plus the
//!   three traversal cursors, all navigation state in one place
//! - [`styling`]: the `Styler` — style prelude + fragment formatting
//! - [`config`]: settings with the defaults → file → env → CLI hierarchy

pub mod config;
pub mod navigator;
pub mod styling;
