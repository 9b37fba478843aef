//! Module Emission - Handles translation of entire modules
//!
//! Walks the module's items in stored order and emits every function.
//! Declarative items have no body and produce no text.

use std::io::Write;
use log::{debug, info, warn};
use luagen_codegen::LuaWriter;
use luagen_common::{ErrorSink, TranslateError};
use luagen_ir::{Item, Module};
use crate::function::emit_function;
use crate::TranslateOptions;

/// Emit every function of a module
pub fn emit_module<W: Write + ?Sized>(
    module: &Module,
    writer: &mut LuaWriter<'_, W>,
    reporter: &mut dyn ErrorSink,
    options: &TranslateOptions,
) -> Result<(), TranslateError> {
    info!("Translating module '{}' ({} items)", module.name, module.items.len());

    let mut emitted = 0;
    for item in &module.items {
        match item {
            Item::Function(func) => {
                emit_function(module, func, writer, reporter, options)?;
                emitted += 1;
            }
            Item::Data(_) | Item::Bss(_) => {
                warn!("Global storage '{}' has no Lua translation, skipping", item.name());
            }
            Item::Prototype(_) | Item::Import(_) | Item::Export(_) | Item::Forward(_) => {
                debug!("Skipping {} '{}'", item.kind_name(), item.name());
            }
        }
    }

    info!(
        "Module '{}' done: {} functions, {} lines",
        module.name,
        emitted,
        writer.lines()
    );
    Ok(())
}
