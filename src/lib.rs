//! Mentor library exports for testing

use clap::ValueEnum;

pub mod catalog;
pub mod core;

#[cfg(test)]
pub mod test_support;

/// Which document-store backend serves the module catalog.
#[derive(Clone, Debug, Default, ValueEnum)]
pub enum StoreKind {
    #[default]
    Http,
    File,
}
