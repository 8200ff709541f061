//! Storage layer for the Workbench design-system context.
//!
//! A context directory holds markdown documents grouped by [`Category`]. This
//! crate provides:
//!
//! - [`Storage`] trait with `hierarchy()`, `read()` and `mtime()` methods
//! - [`FsStorage`] reading from a directory on disk
//! - [`MockStorage`] for testing (behind `mock` feature flag)
//! - [`parse_front_matter`] for splitting the YAML header from the body
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use wb_storage::{FsStorage, Storage};
//!
//! let storage = FsStorage::new(PathBuf::from(".design-system-context"));
//! for (category, docs) in storage.hierarchy()?.iter() {
//!     println!("{category}: {} documents", docs.len());
//! }
//! # Ok::<(), wb_storage::StorageError>(())
//! ```

mod category;
mod front_matter;
mod fs;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod storage;

pub use category::{Category, CategoryRoot, SYSTEM_DIR, UnknownCategory, doc_for_source};
pub use front_matter::{FrontMatter, ParsedDocument, parse_front_matter};
pub use fs::FsStorage;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockStorage;
pub use storage::{
    DocContent, DocMetadata, DocsHierarchy, Storage, StorageError, StorageErrorKind,
    WORKFLOW_FILE, WORKFLOW_SLUG, WORKFLOW_TITLE, doc_href, format_title,
};
