//! IR to Lua translator - Backend
//!
//! This crate translates a register-based IR module into Lua source text in
//! a single top-to-bottom pass: module → function → instruction → operand.
//! Nothing is reordered or optimized; jumps and labels are reproduced as
//! `goto` statements and `::label::` markers.

pub mod context;
pub mod function;
pub mod instr;
pub mod module;
pub mod operand;
pub mod table;

use std::io::Write;
use luagen_codegen::{LuaWriter, DEFAULT_INDENT};

// Re-export IR and error types for convenience
pub use luagen_common::{ErrorKind, ErrorReporter, ErrorSink, TranslateError};
pub use luagen_ir::{Function, Instruction, Item, Module, Opcode, Operand, Prototype};

pub use context::FunctionContext;
pub use function::emit_function;
pub use instr::translate_instruction;
pub use module::emit_module;
pub use operand::render_operand;
pub use table::{op_info, Family, OpInfo};

/// What to do after a recoverable error (call arity, unsupported opcode)
/// has been reported. Internal errors always abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop translating and return the error
    #[default]
    Abort,
    /// Produce no text for the failing instruction and go on
    Continue,
}

/// Options for translation
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    pub indent: String,
    pub error_policy: ErrorPolicy,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            error_policy: ErrorPolicy::Abort,
        }
    }
}

/// Translate a module, writing Lua text to `out`.
///
/// Errors are reported through `reporter` as they happen. On abort, the text
/// of everything translated before the failure has already been written.
pub fn translate<W: Write + ?Sized>(
    module: &Module,
    out: &mut W,
    reporter: &mut dyn ErrorSink,
    options: &TranslateOptions,
) -> Result<(), TranslateError> {
    let mut writer = LuaWriter::with_indent(out, options.indent.clone());
    emit_module(module, &mut writer, reporter, options)
}

/// Translate a module into a string
pub fn translate_to_string(
    module: &Module,
    reporter: &mut dyn ErrorSink,
    options: &TranslateOptions,
) -> Result<String, TranslateError> {
    let mut buf = Vec::new();
    translate(module, &mut buf, reporter, options)?;
    String::from_utf8(buf).map_err(|e| TranslateError::internal(e.to_string()))
}
