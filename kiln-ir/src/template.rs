//! The per-template input contract.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::Block;

/// Everything the parser hands a generator for one template file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Path of the template file the blocks were parsed from.
    #[serde(default)]
    pub path: PathBuf,
    /// Ordered fragments; order defines emission order.
    #[serde(default)]
    pub blocks: Vec<Block>,
    /// Host code hoisted above the render function, verbatim. May be empty.
    #[serde(default)]
    pub preamble: String,
    /// The user-declared render function, when the template declares one.
    ///
    /// `None` compiles to a header-only source file.
    #[serde(default)]
    pub render_fn: Option<Block>,
}

impl Template {
    /// Create an empty template for the given source path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Base name of the generated Go source file: the template's base file
    /// name with `.go` appended (`index.html` becomes `index.html.go`).
    pub fn output_name(&self) -> String {
        match self.path.file_name() {
            Some(name) => format!("{}.go", name.to_string_lossy()),
            None => "template.go".to_string(),
        }
    }

    /// Display name for diagnostics.
    pub fn origin(&self) -> String {
        if self.path.as_os_str().is_empty() {
            "<template>".to_string()
        } else {
            self.path.display().to_string()
        }
    }
}
