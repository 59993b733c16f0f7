//! Per-value-type write statements.
//!
//! Maps a trimmed, non-empty expression plus its declared [`ValueType`] to
//! the Go statement that writes it into the render buffer. Two variants
//! share the dispatch: the plain path writes expressions as-is, the
//! escaping path routes text through the runtime's HTML escaper. Integer,
//! boolean, and `any` expressions format identically on both paths.

use kiln_ir::ValueType;

use crate::runtime;

/// Upper bound on the text length of a formatted boolean ("false").
const BOOL_RESERVE: usize = 5;

/// One generated write statement plus its statically-known output length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WriteCall {
    /// The Go statement, without indentation or trailing newline.
    pub code: String,
    /// Bytes this write is guaranteed to produce, for buffer preallocation.
    pub reserve: usize,
}

impl WriteCall {
    fn plain(code: String) -> Self {
        Self { code, reserve: 0 }
    }
}

/// Statement writing `expr` into `buf` without escaping.
///
/// Returns `None` for [`ValueType::Unknown`]: the plain path skips types it
/// does not understand.
pub(crate) fn value_write(ty: ValueType, expr: &str, buf: &str) -> Option<WriteCall> {
    match ty {
        ValueType::String => Some(WriteCall::plain(format!("{buf}.WriteString({expr})"))),
        ValueType::Bytes => Some(WriteCall::plain(format!("{buf}.Write({expr})"))),
        ValueType::Unknown => None,
        _ => Some(format_call(ty, expr, buf)),
    }
}

/// Statement writing `expr` into `buf`, HTML-escaping text types.
///
/// # Panics
///
/// Aborts with a descriptive message on [`ValueType::Unknown`]; the
/// escaping path never skips a value.
pub(crate) fn escaped_write(ty: ValueType, expr: &str, buf: &str) -> WriteCall {
    let rt = runtime::PACKAGE;
    match ty {
        ValueType::String => WriteCall::plain(format!("{rt}.EscapeHTML({expr}, {buf})")),
        ValueType::Bytes => WriteCall::plain(format!(
            "{rt}.EscapeHTML({rt}.Bytes2String({expr}), {buf})"
        )),
        ValueType::Unknown => panic!("unsupported value type: {}", ty.as_str()),
        _ => format_call(ty, expr, buf),
    }
}

/// Shared arms: types whose formatting is identical on both paths.
fn format_call(ty: ValueType, expr: &str, buf: &str) -> WriteCall {
    let rt = runtime::PACKAGE;
    match ty {
        ValueType::Int => WriteCall::plain(format!("{rt}.FormatInt(int64({expr}), {buf})")),
        ValueType::Uint => WriteCall::plain(format!("{rt}.FormatUint(uint64({expr}), {buf})")),
        ValueType::Bool => WriteCall {
            code: format!("{rt}.FormatBool({expr}, {buf})"),
            reserve: BOOL_RESERVE,
        },
        ValueType::Any => WriteCall::plain(format!("{rt}.FormatAny({expr}, {buf})")),
        ValueType::String | ValueType::Bytes | ValueType::Unknown => {
            unreachable!("handled by the dispatching variant")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_string_writes_directly() {
        let call = value_write(ValueType::String, "name", "w").unwrap();
        assert_eq!(call.code, "w.WriteString(name)");
        assert_eq!(call.reserve, 0);
    }

    #[test]
    fn test_plain_bytes_write_directly() {
        let call = value_write(ValueType::Bytes, "raw", "w").unwrap();
        assert_eq!(call.code, "w.Write(raw)");
    }

    #[test]
    fn test_int_widens_to_int64() {
        let call = value_write(ValueType::Int, "n", "w").unwrap();
        assert_eq!(call.code, "kiln.FormatInt(int64(n), w)");
    }

    #[test]
    fn test_uint_widens_to_uint64() {
        let call = value_write(ValueType::Uint, "n", "w").unwrap();
        assert_eq!(call.code, "kiln.FormatUint(uint64(n), w)");
    }

    #[test]
    fn test_bool_reserves_five_bytes() {
        let call = value_write(ValueType::Bool, "ok", "w").unwrap();
        assert_eq!(call.code, "kiln.FormatBool(ok, w)");
        assert_eq!(call.reserve, 5);
    }

    #[test]
    fn test_any_uses_generic_formatter() {
        let call = value_write(ValueType::Any, "v", "w").unwrap();
        assert_eq!(call.code, "kiln.FormatAny(v, w)");
    }

    #[test]
    fn test_escaped_string_routes_through_escaper() {
        let call = escaped_write(ValueType::String, "name", "w");
        assert_eq!(call.code, "kiln.EscapeHTML(name, w)");
    }

    #[test]
    fn test_escaped_bytes_convert_before_escaping() {
        let call = escaped_write(ValueType::Bytes, "raw", "w");
        assert_eq!(call.code, "kiln.EscapeHTML(kiln.Bytes2String(raw), w)");
    }

    #[test]
    fn test_escaped_numeric_types_match_plain_path() {
        for ty in [ValueType::Int, ValueType::Uint, ValueType::Bool, ValueType::Any] {
            assert_eq!(escaped_write(ty, "v", "w"), value_write(ty, "v", "w").unwrap());
        }
    }

    #[test]
    fn test_unknown_type_is_silently_skipped_on_plain_path() {
        assert_eq!(value_write(ValueType::Unknown, "v", "w"), None);
    }

    #[test]
    #[should_panic(expected = "unsupported value type")]
    fn test_unknown_type_aborts_on_escaping_path() {
        escaped_write(ValueType::Unknown, "v", "w");
    }
}
