//! Contract of the runtime support package linked by generated code.
//!
//! Generated files import the package at [`IMPORT_PATH`] (which declares
//! `package kiln`) and call these helpers, assumed to exist with these
//! signatures and never verified here:
//!
//! ```go
//! func FormatInt(v int64, buf *bytes.Buffer)
//! func FormatUint(v uint64, buf *bytes.Buffer)
//! func FormatBool(v bool, buf *bytes.Buffer)
//! func FormatAny(v any, buf *bytes.Buffer)
//! func EscapeHTML(s string, buf *bytes.Buffer)
//! func Bytes2String(b []byte) string
//! ```

/// Import path of the runtime support package.
pub const IMPORT_PATH: &str = "github.com/kiln-templates/kiln/runtime";

/// Package identifier the runtime declares; qualifies helper calls in
/// generated code.
pub const PACKAGE: &str = "kiln";
