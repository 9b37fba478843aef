//! IR Operands
//!
//! Defines values that can be used as operands in IR instructions:
//! registers, typed immediates, references to module items and labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use crate::{ItemId, LabelId, RegId};

/// IR Operand
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operand {
    /// Declared variable of the enclosing function
    Reg(RegId),

    /// Signed integer immediate
    Int(i64),

    /// Unsigned integer immediate
    Uint(u64),

    /// 32-bit float immediate
    Float(f32),

    /// 64-bit float immediate
    Double(f64),

    /// Extended precision immediate, carried at double precision
    LDouble(f64),

    /// Reference to a module item (function, prototype, import, ...)
    Ref(ItemId),

    /// Reference to a label instruction in the same function
    Label(LabelId),
}

impl Operand {
    pub fn as_label(&self) -> Option<LabelId> {
        match self {
            Operand::Label(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_ref_item(&self) -> Option<ItemId> {
        match self {
            Operand::Ref(id) => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Reg(id) => write!(f, "%{id}"),
            Operand::Int(val) => write!(f, "{val}"),
            Operand::Uint(val) => write!(f, "{val}u"),
            Operand::Float(val) => write!(f, "{val}f"),
            Operand::Double(val) => write!(f, "{val}"),
            Operand::LDouble(val) => write!(f, "{val}L"),
            Operand::Ref(id) => write!(f, "@{id}"),
            Operand::Label(id) => write!(f, "L{id}"),
        }
    }
}
