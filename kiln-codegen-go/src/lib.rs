//! Go code generator for kiln templates.
//!
//! Turns a parsed [`kiln_ir::Template`] into one compilable Go source file
//! whose render function reproduces the template's output into a
//! caller-supplied `bytes.Buffer`.
//!
//! # Architecture
//!
//! ```text
//! Template (kiln-ir) → Generator::render → Go source text → GoFile::write
//! ```
//!
//! - [`signature`](parse_render_fn) validates the user-declared render
//!   function and extracts the buffer parameter name.
//! - [`Generator`] walks the block sequence once, dispatching each block to
//!   a per-value-type write statement, and back-fills the `Grow` call with
//!   the statically-known output length.
//! - [`GoFile`] writes the finished text to the destination directory as
//!   `<template base name>.go`.
//!
//! Each template compiles in one synchronous pass over exclusively-owned
//! state; drivers may compile independent template files in parallel. A
//! validation failure aborts that template's compilation, and drivers are
//! expected to fail fast rather than continue with remaining templates.

mod builder;
mod error;
mod generator;
mod output;
pub mod runtime;
mod signature;
mod values;

pub use builder::SourceBuilder;
pub use error::{Error, Result};
pub use generator::{DEFAULT_PACKAGE, Generator};
pub use kiln_ir::{Block, BlockKind, Template, ValueType};
pub use output::GoFile;
pub use signature::{RenderSignature, parse_render_fn};
