//! IR Instructions
//!
//! An instruction is an opcode plus an ordered operand list whose length and
//! meaning depend on the opcode. Destinations come first, as in
//! `add dst, a, b`.

use serde::{Deserialize, Serialize};
use std::fmt;
use crate::{LabelId, Opcode, Operand};

/// IR Instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub code: Opcode,
    pub ops: Vec<Operand>,
}

impl Instruction {
    pub fn new(code: Opcode, ops: Vec<Operand>) -> Self {
        Self { code, ops }
    }

    /// Label marker carrying its own identity in operand 0
    pub fn label(id: LabelId) -> Self {
        Self::new(Opcode::Label, vec![Operand::Int(i64::from(id))])
    }

    /// The identity of a label instruction, if this is one and its identity
    /// operand is well formed.
    pub fn label_id(&self) -> Option<LabelId> {
        if self.code != Opcode::Label {
            return None;
        }
        match self.ops.first() {
            Some(Operand::Int(id)) => LabelId::try_from(*id).ok(),
            Some(Operand::Uint(id)) => LabelId::try_from(*id).ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(id) = self.label_id() {
            return write!(f, "L{id}:");
        }
        write!(f, "{}", self.code)?;
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {op}")?;
        }
        Ok(())
    }
}
