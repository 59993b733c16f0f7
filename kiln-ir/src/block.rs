//! Template fragment types.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One fragment of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// What the fragment is and how it must be emitted.
    pub kind: BlockKind,
    /// Raw fragment text.
    ///
    /// For [`BlockKind::Code`] this is host Go code spliced verbatim. For
    /// value-bearing kinds it is a Go expression; for [`BlockKind::Literal`]
    /// the parser hands the static text over as a quoted Go string literal.
    pub content: String,
    /// Declared type of the spliced expression.
    ///
    /// Only meaningful for value-bearing kinds; defaults to
    /// [`ValueType::String`].
    #[serde(default)]
    pub value_type: ValueType,
}

impl Block {
    /// A host-code fragment, emitted verbatim.
    pub fn code(content: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Code,
            content: content.into(),
            value_type: ValueType::default(),
        }
    }

    /// A static-text fragment, HTML-escaped at render time.
    pub fn literal(content: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Literal,
            content: content.into(),
            value_type: ValueType::String,
        }
    }

    /// An expression written to the buffer without escaping.
    pub fn value(value_type: ValueType, content: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Value,
            content: content.into(),
            value_type,
        }
    }

    /// An expression HTML-escaped before being written to the buffer.
    pub fn escaped(value_type: ValueType, content: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::EscapedValue,
            content: content.into(),
            value_type,
        }
    }

    /// A template-composition fragment. Reserved; generators skip it.
    pub fn extend(content: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Extend,
            content: content.into(),
            value_type: ValueType::default(),
        }
    }
}

/// Fragment kind, tagged by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Host Go code, passed through verbatim.
    Code,
    /// Static template text, escaped before writing.
    Literal,
    /// An expression escaped before writing.
    EscapedValue,
    /// An expression written as-is.
    Value,
    /// Template composition marker; currently a no-op.
    Extend,
}

/// Declared Go type of a value-bearing fragment's expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ValueType {
    #[default]
    String,
    Bytes,
    Int,
    Uint,
    Bool,
    Any,
    /// A type tag this engine does not know about. Parsers may grow new
    /// tags ahead of the generators; deserialization folds them here.
    Unknown,
}

impl ValueType {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Bytes => "bytes",
            ValueType::Int => "int",
            ValueType::Uint => "uint",
            ValueType::Bool => "bool",
            ValueType::Any => "any",
            ValueType::Unknown => "unknown",
        }
    }
}

impl Serialize for ValueType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// Unrecognized tags fold into `Unknown` rather than failing deserialization.
impl<'de> Deserialize<'de> for ValueType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(match tag.as_str() {
            "string" => ValueType::String,
            "bytes" => ValueType::Bytes,
            "int" => ValueType::Int,
            "uint" => ValueType::Uint,
            "bool" => ValueType::Bool,
            "any" => ValueType::Any,
            _ => ValueType::Unknown,
        })
    }
}
