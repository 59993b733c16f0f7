use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for kiln codegen operations (boxed to reduce size on stack).
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to write '{path}'")]
    #[diagnostic(
        code(kiln::io),
        help("check that the destination directory exists and is writable")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("render block is not a function declaration")]
    #[diagnostic(
        code(kiln::not_a_function),
        help("the render block must hold a single top-level `func` declaration")
    )]
    NotAFunction {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected a `func` declaration")]
        span: Option<SourceSpan>,
    },

    #[error("render function has no parameters")]
    #[diagnostic(
        code(kiln::missing_parameters),
        help("declare the output buffer as the final parameter, e.g. `w *bytes.Buffer`")
    )]
    MissingParameters {
        #[source_code]
        src: NamedSource<String>,
        #[label("empty parameter list")]
        span: Option<SourceSpan>,
    },

    #[error("render function must take a bytes.Buffer as its final parameter, found '{found}'")]
    #[diagnostic(
        code(kiln::invalid_buffer_parameter),
        help("change the final parameter's type to `*bytes.Buffer` or `bytes.Buffer`")
    )]
    InvalidBufferParameter {
        #[source_code]
        src: NamedSource<String>,
        #[label("this parameter")]
        span: Option<SourceSpan>,
        found: String,
    },
}
