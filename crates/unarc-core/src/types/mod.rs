//! Core types for extraction.
//!
//! Output paths only exist as [`ContainedPath`] values, which can only be
//! built by resolving an entry name against a [`DestDir`].

pub mod contained_path;
pub mod dest_dir;
pub mod entry_kind;

pub use contained_path::ContainedPath;
pub use dest_dir::DestDir;
pub use entry_kind::EntryKind;
