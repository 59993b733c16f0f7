//! Intermediate representation for kiln template compilation.
//!
//! This crate defines the data contract between the template parser and the
//! code generators:
//!
//! ```text
//! template file → parser (blocks) → kiln-ir (this crate) → kiln-codegen-go
//! ```
//!
//! The IR is deliberately inert: a [`Template`] is an ordered sequence of
//! [`Block`] fragments plus the user-declared render function, and nothing
//! here inspects or transforms content. All types carry serde derives so a
//! parser running in another process can hand templates across the boundary.

mod block;
mod template;

pub use block::{Block, BlockKind, ValueType};
pub use template::Template;
