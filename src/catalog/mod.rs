pub mod parse;
pub mod store;
pub mod stores;
pub mod types;

pub use parse::{parse_module, parse_records, RecordFault};
pub use store::{spawn_refresh, ModuleStore, StoreError};
pub use stores::{file::FileStore, http::HttpStore};
pub use types::{Lesson, LessonContent, Module, Question, TestContent};
