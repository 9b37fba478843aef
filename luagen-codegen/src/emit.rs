//! Lua Text Emission
//!
//! Writes statements one line at a time to a byte sink. Nothing written is
//! ever read back; buffering is left to whoever owns the sink.

use std::io::Write;
use log::trace;
use luagen_common::TranslateError;
use crate::lua::LuaStmt;

/// Indentation used for statements inside a function body
pub const DEFAULT_INDENT: &str = "    ";

/// Line writer over an append-only sink
pub struct LuaWriter<'w, W: Write + ?Sized> {
    out: &'w mut W,
    indent: String,
    lines: usize,
}

impl<'w, W: Write + ?Sized> LuaWriter<'w, W> {
    pub fn new(out: &'w mut W) -> Self {
        Self::with_indent(out, DEFAULT_INDENT)
    }

    pub fn with_indent(out: &'w mut W, indent: impl Into<String>) -> Self {
        Self {
            out,
            indent: indent.into(),
            lines: 0,
        }
    }

    /// Write one statement as a complete, newline-terminated line
    pub fn write_stmt(&mut self, stmt: &LuaStmt) -> Result<(), TranslateError> {
        trace!("emit: {}", stmt);
        if !stmt.is_unindented() {
            self.out.write_all(self.indent.as_bytes())?;
        }
        writeln!(self.out, "{}", stmt)?;
        self.lines += 1;
        Ok(())
    }

    pub fn write_all(&mut self, stmts: &[LuaStmt]) -> Result<(), TranslateError> {
        for stmt in stmts {
            self.write_stmt(stmt)?;
        }
        Ok(())
    }

    /// Number of lines written so far
    pub fn lines(&self) -> usize {
        self.lines
    }
}

/// Render a statement list to a string with the default indentation
pub fn emit_statements(stmts: &[LuaStmt]) -> Result<String, TranslateError> {
    let mut buf = Vec::new();
    LuaWriter::new(&mut buf).write_all(stmts)?;
    String::from_utf8(buf).map_err(|e| TranslateError::internal(e.to_string()))
}
