//! Function Emission
//!
//! Writes one function: signature, local declarations, the translated
//! instruction stream in its original order, and the closing `end`.

use std::io::Write;
use log::{debug, warn};
use luagen_codegen::{LuaStmt, LuaWriter};
use luagen_common::{ErrorSink, TranslateError};
use luagen_ir::{Function, Module};
use crate::context::FunctionContext;
use crate::instr::translate_instruction;
use crate::{ErrorPolicy, TranslateOptions};

/// Emit a single function of `module`
pub fn emit_function<W: Write + ?Sized>(
    module: &Module,
    func: &Function,
    writer: &mut LuaWriter<'_, W>,
    reporter: &mut dyn ErrorSink,
    options: &TranslateOptions,
) -> Result<(), TranslateError> {
    let ctx = match FunctionContext::new(module, func) {
        Ok(ctx) => ctx,
        Err(err) => return Err(report(reporter, err)),
    };

    debug!(
        "Emitting function '{}' ({} params, {} locals, {} instructions)",
        func.name,
        func.nargs,
        func.locals().len(),
        func.insns.len()
    );

    writer.write_stmt(&LuaStmt::FunctionHeader {
        name: func.name.clone(),
        params: func.params().iter().map(|v| v.name.clone()).collect(),
    })?;
    for local in func.locals() {
        writer.write_stmt(&LuaStmt::Local(local.name.clone()))?;
    }

    let last = func.insns.len().saturating_sub(1);
    for (i, insn) in func.insns.iter().enumerate() {
        match translate_instruction(&ctx, insn, i == last) {
            Ok(stmts) => writer.write_all(&stmts)?,
            Err(err) => {
                let fatal = err.is_fatal();
                let err = report(reporter, err);
                if fatal || options.error_policy == ErrorPolicy::Abort {
                    return Err(err);
                }
                warn!("Skipping '{}' in function '{}'", insn, func.name);
            }
        }
    }

    writer.write_stmt(&LuaStmt::End)?;
    Ok(())
}

/// Hand a reportable error to the facade, passing it through
fn report(reporter: &mut dyn ErrorSink, err: TranslateError) -> TranslateError {
    if let Some(kind) = err.kind() {
        reporter.report(kind, &err.to_string());
    }
    err
}
