//! Render-function declaration validation.
//!
//! The render block of a template holds one Go function declaration, e.g.
//! `func Render(u User, w *bytes.Buffer)`. The generator splices its body
//! into that declaration, so before emitting anything it checks the shape:
//! the declaration must be a `func`, the parameter list must be non-empty,
//! and the final parameter must be the output buffer, a `bytes.Buffer`
//! optionally behind a single pointer.
//!
//! A full Go parser is not required for a declaration this small; a scanner
//! that understands comments, balanced brackets, and top-level commas
//! covers the contract.

use miette::{NamedSource, SourceSpan};

use crate::error::{Error, Result};

/// Qualified type of the output buffer parameter.
const BUFFER_TYPE: &str = "bytes.Buffer";

/// A validated render-function declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSignature {
    /// The declaration text, verbatim as the template declared it.
    pub decl: String,
    /// Identifier bound to the final buffer parameter.
    ///
    /// Empty when the parameter is unnamed.
    pub buffer_name: String,
}

/// Validate a render-function declaration and extract the buffer parameter
/// name. `origin` names the source in diagnostics.
///
/// Pure function over its input; no state survives the call.
pub fn parse_render_fn(content: &str, origin: &str) -> Result<RenderSignature> {
    let src = || NamedSource::new(origin, content.to_string());
    let not_a_function = |at: usize| {
        Box::new(Error::NotAFunction {
            src: src(),
            span: Some(token_span(content, at)),
        })
    };

    let start = skip_trivia(content, 0);
    if !keyword_at(content, start, "func") {
        return Err(not_a_function(start));
    }
    let mut pos = skip_trivia(content, start + "func".len());

    // Optional method receiver: func (r *Repo) Render(...)
    if content[pos..].starts_with('(') {
        pos = skip_balanced(content, pos, '(', ')').ok_or_else(|| not_a_function(pos))?;
        pos = skip_trivia(content, pos);
    }

    let name_end = ident_end(content, pos);
    if name_end == pos {
        return Err(not_a_function(pos));
    }
    pos = skip_trivia(content, name_end);

    // Optional type parameter list: func Render[T any](...)
    if content[pos..].starts_with('[') {
        pos = skip_balanced(content, pos, '[', ']').ok_or_else(|| not_a_function(pos))?;
        pos = skip_trivia(content, pos);
    }

    if !content[pos..].starts_with('(') {
        return Err(not_a_function(pos));
    }
    let params_open = pos;
    let after_close = skip_balanced(content, params_open, '(', ')')
        .ok_or_else(|| not_a_function(params_open))?;
    let inner_start = params_open + 1;
    let inner = &content[inner_start..after_close - 1];

    let missing_parameters = || {
        Box::new(Error::MissingParameters {
            src: src(),
            span: Some((params_open, after_close - params_open).into()),
        })
    };
    let mut params = split_top_level(inner);
    // Go allows a trailing comma in parameter lists.
    if params.len() > 1 && params.last().is_some_and(|(_, s)| s.trim().is_empty()) {
        params.pop();
    }
    if params.iter().all(|(_, s)| s.trim().is_empty()) {
        return Err(missing_parameters());
    }

    let Some(&(rel, seg)) = params.last() else {
        return Err(missing_parameters());
    };
    let trimmed = seg.trim();
    let seg_span: SourceSpan = (
        inner_start + rel + (seg.len() - seg.trim_start().len()),
        trimmed.len(),
    )
        .into();

    // The last comma-separated segment carries the final parameter: either a
    // bare type (unnamed) or an identifier followed by its type. A grouped
    // declaration like `a, w *bytes.Buffer` lands here as `w *bytes.Buffer`,
    // so the segment's own name is always the last bound name.
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    // TODO: reject unnamed buffer parameters; an empty name makes the
    // emitted Grow/write calls receiverless.
    let (buffer_name, param_type) = match tokens.as_slice() {
        [ty] => ("", ty.to_string()),
        [name, rest @ ..] if is_ident(name) => (*name, rest.join(" ")),
        _ => ("", tokens.join(" ")),
    };

    let bare = param_type.strip_prefix('*').unwrap_or(&param_type);
    if bare != BUFFER_TYPE {
        return Err(Box::new(Error::InvalidBufferParameter {
            src: src(),
            span: Some(seg_span),
            found: param_type,
        }));
    }

    Ok(RenderSignature {
        decl: content.to_string(),
        buffer_name: buffer_name.to_string(),
    })
}

/// Advance past whitespace and Go comments.
fn skip_trivia(s: &str, mut pos: usize) -> usize {
    loop {
        while let Some(c) = s[pos..].chars().next() {
            if c.is_whitespace() {
                pos += c.len_utf8();
            } else {
                break;
            }
        }
        if s[pos..].starts_with("//") {
            match s[pos..].find('\n') {
                Some(i) => pos += i + 1,
                None => return s.len(),
            }
        } else if s[pos..].starts_with("/*") {
            match s[pos + 2..].find("*/") {
                Some(i) => pos += i + 4,
                None => return s.len(),
            }
        } else {
            return pos;
        }
    }
}

/// True if `word` sits at `pos` as a whole keyword.
fn keyword_at(s: &str, pos: usize, word: &str) -> bool {
    s[pos..].starts_with(word)
        && !s[pos + word.len()..]
            .chars()
            .next()
            .is_some_and(|c| c == '_' || c.is_alphanumeric())
}

/// End of the identifier starting at `pos`, or `pos` if none starts there.
fn ident_end(s: &str, pos: usize) -> usize {
    let mut end = pos;
    for (i, c) in s[pos..].char_indices() {
        let first = i == 0;
        let ok = c == '_' || c.is_alphabetic() || (!first && c.is_numeric());
        if !ok {
            break;
        }
        end = pos + i + c.len_utf8();
    }
    end
}

fn is_ident(s: &str) -> bool {
    !s.is_empty() && ident_end(s, 0) == s.len()
}

/// Position just past the bracket matching the opener at `open_pos`, or
/// `None` if the text ends first.
fn skip_balanced(s: &str, open_pos: usize, open: char, close: char) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s[open_pos..].char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return Some(open_pos + i + c.len_utf8());
            }
        }
    }
    None
}

/// Split on commas outside any bracket nesting, keeping segment offsets.
fn split_top_level(inner: &str) -> Vec<(usize, &str)> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in inner.char_indices() {
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                segments.push((start, &inner[start..i]));
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push((start, &inner[start..]));
    segments
}

/// Span of the whitespace-delimited token at `pos`, for diagnostics.
fn token_span(s: &str, pos: usize) -> SourceSpan {
    let pos = pos.min(s.len());
    let len = s[pos..]
        .split_whitespace()
        .next()
        .map(str::len)
        .unwrap_or(0);
    (pos, len).into()
}
