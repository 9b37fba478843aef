//! Translation Context
//!
//! Everything rendering needs to know about the function being translated:
//! its variable scope, the module it lives in and the label tokens assigned
//! by the pre-pass. Passed explicitly to every rendering call.

use std::collections::HashMap;
use log::debug;
use luagen_common::TranslateError;
use luagen_ir::{Function, Item, ItemId, LabelId, Module, Operand, Prototype, RegId};

/// Per-function translation context
#[derive(Debug)]
pub struct FunctionContext<'m> {
    module: &'m Module,
    func: &'m Function,
    labels: HashMap<LabelId, String>,
}

impl<'m> FunctionContext<'m> {
    /// Build the context, assigning a token to every label in the function.
    pub fn new(module: &'m Module, func: &'m Function) -> Result<Self, TranslateError> {
        if func.nargs > func.vars.len() {
            return Err(TranslateError::internal(format!(
                "function '{}' declares {} parameters but only {} variables",
                func.name,
                func.nargs,
                func.vars.len()
            )));
        }

        let mut labels = HashMap::new();
        for insn in func.labels() {
            let id = insn.label_id().ok_or_else(|| {
                TranslateError::internal(format!(
                    "label in function '{}' has no integer identity: {}",
                    func.name, insn
                ))
            })?;
            if labels.insert(id, label_token(id)).is_some() {
                return Err(TranslateError::internal(format!(
                    "label {} defined twice in function '{}'",
                    id, func.name
                )));
            }
        }
        debug!("Function '{}': {} labels", func.name, labels.len());

        Ok(Self { module, func, labels })
    }

    pub fn module(&self) -> &'m Module {
        self.module
    }

    pub fn function(&self) -> &'m Function {
        self.func
    }

    pub fn function_name(&self) -> &'m str {
        &self.func.name
    }

    /// Declared name of a register
    pub fn var_name(&self, reg: RegId) -> Result<&'m str, TranslateError> {
        self.func
            .var(reg)
            .map(|var| var.name.as_str())
            .ok_or_else(|| {
                TranslateError::internal(format!(
                    "register {} is not declared in function '{}'",
                    reg, self.func.name
                ))
            })
    }

    /// Token of a label defined in this function
    pub fn label(&self, id: LabelId) -> Result<&str, TranslateError> {
        self.labels.get(&id).map(String::as_str).ok_or_else(|| {
            TranslateError::internal(format!(
                "label {} is not defined in function '{}'",
                id, self.func.name
            ))
        })
    }

    pub fn item(&self, id: ItemId) -> Result<&'m Item, TranslateError> {
        self.module.item(id).ok_or_else(|| {
            TranslateError::internal(format!(
                "reference to item {} outside module '{}'",
                id, self.module.name
            ))
        })
    }

    /// The prototype a call instruction's first operand refers to
    pub fn prototype(&self, op: &Operand) -> Result<&'m Prototype, TranslateError> {
        let id = op.as_ref_item().ok_or_else(|| {
            TranslateError::internal(format!(
                "call in function '{}' has {} instead of a prototype reference",
                self.func.name, op
            ))
        })?;
        let item = self.item(id)?;
        item.as_prototype().ok_or_else(|| {
            TranslateError::internal(format!(
                "call in function '{}' refers to {} '{}', not a prototype",
                self.func.name,
                item.kind_name(),
                item.name()
            ))
        })
    }
}

/// Synthetic Lua label name for a label identity
pub fn label_token(id: LabelId) -> String {
    format!("l{}", id)
}
