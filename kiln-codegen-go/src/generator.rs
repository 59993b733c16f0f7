//! The code emission engine.

use std::path::{Path, PathBuf};

use kiln_ir::{BlockKind, Template};

use crate::{builder::SourceBuilder, error::Result, output::GoFile, runtime, signature, values};

/// Package clause used when the driver configures none.
pub const DEFAULT_PACKAGE: &str = "template";

/// Compiles one parsed template into a Go source file.
///
/// # Example
///
/// ```
/// use kiln_codegen_go::{Block, Generator, Template, ValueType};
///
/// let template = Template {
///     blocks: vec![Block::value(ValueType::Int, "n")],
///     render_fn: Some(Block::code("func Render(n int, w *bytes.Buffer)")),
///     ..Template::new("count.html")
/// };
/// let source = Generator::new(&template).render().unwrap();
/// assert!(source.contains("kiln.FormatInt(int64(n), w)"));
/// ```
pub struct Generator<'a> {
    template: &'a Template,
    package: String,
}

impl<'a> Generator<'a> {
    pub fn new(template: &'a Template) -> Self {
        Self {
            template,
            package: DEFAULT_PACKAGE.to_string(),
        }
    }

    /// Override the package clause of the generated file. An empty name
    /// keeps [`DEFAULT_PACKAGE`].
    pub fn package(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.is_empty() {
            self.package = name;
        }
        self
    }

    /// Produce the complete Go source text for the template.
    ///
    /// A template without a render function compiles to the fixed header
    /// alone. A validation failure aborts this template's compilation.
    pub fn render(&self) -> Result<String> {
        let mut out = SourceBuilder::new();
        out.line("// Code generated by kiln - DO NOT EDIT");
        out.blank();
        out.line(&format!("package {}", self.package));
        out.blank();
        out.line("import (");
        out.indent();
        out.line("\"bytes\"");
        out.line(&format!("\"{}\"", runtime::IMPORT_PATH));
        out.dedent();
        out.line(")");
        out.blank();

        let Some(render_fn) = &self.template.render_fn else {
            return Ok(out.finish());
        };
        let sig = signature::parse_render_fn(&render_fn.content, &self.template.origin())?;

        if !self.template.preamble.is_empty() {
            out.raw(&self.template.preamble);
            if !self.template.preamble.ends_with('\n') {
                out.raw("\n");
            }
        }

        // The Grow argument is only final after the full block pass, so the
        // body accumulates in memory and lands after the growth call.
        let (body, reserve) = self.emit_body(&sig.buffer_name);

        out.raw(sig.decl.trim_end());
        out.raw(" {\n");
        out.indent();
        out.line(&format!("{}.Grow({})", sig.buffer_name, reserve));
        out.dedent();
        out.raw(&body);
        out.line("}");
        Ok(out.finish())
    }

    /// Render and write the output file into `out_dir`.
    pub fn generate(&self, out_dir: &Path) -> Result<PathBuf> {
        let source = self.render()?;
        GoFile::new(self.template.output_name(), source).write(out_dir)
    }

    /// Walk the blocks once, in order, collecting the function body and the
    /// statically-known number of output bytes.
    fn emit_body(&self, buffer_name: &str) -> (String, usize) {
        let mut body = SourceBuilder::new();
        body.indent();
        let mut reserve = 0;

        for block in &self.template.blocks {
            match block.kind {
                BlockKind::Code => {
                    // Host code keeps its own layout.
                    body.raw(&block.content);
                    body.raw("\n");
                }
                BlockKind::Literal | BlockKind::EscapedValue => {
                    let expr = block.content.trim();
                    if expr.is_empty() {
                        continue;
                    }
                    let call = values::escaped_write(block.value_type, expr, buffer_name);
                    reserve += call.reserve;
                    body.line(&call.code);
                }
                BlockKind::Value => {
                    let expr = block.content.trim();
                    if expr.is_empty() {
                        continue;
                    }
                    if let Some(call) = values::value_write(block.value_type, expr, buffer_name) {
                        reserve += call.reserve;
                        body.line(&call.code);
                    }
                }
                BlockKind::Extend => {}
            }
        }

        (body.finish(), reserve)
    }
}
