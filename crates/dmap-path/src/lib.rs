//! Dpath parsing for dmap.
//!
//! A dpath is a human-readable registry path such as `:free.vitalik`. Each
//! step is a rune followed by a name: `:` marks a step that must resolve
//! through a locked entry, `.` marks an open step. Names are `[a-z0-9]+`.
//!
//! # Modules
//!
//! - [`error`]: [`GrammarError`] and its reasons
//! - [`path`]: [`Path`] and [`Step`]
//! - [`parser`]: the [`parse`] entry point and the published [`GRAMMAR`]

pub mod error;
pub mod parser;
pub mod path;

pub use error::{GrammarError, GrammarReason, Result};
pub use parser::{parse, GRAMMAR};
pub use path::{Path, Step, LOCKED_RUNE, OPEN_RUNE};
