//! Function Definitions
//!
//! Defines IR functions with their declared variables and instruction
//! stream. Parameters are the first `nargs` variables; locals follow them
//! with no interleaving.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use crate::{Instruction, LabelId, Opcode, Operand, RegId, Type};

/// A declared variable (parameter or local)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Var {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
}

impl Var {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Function in IR
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    pub nargs: usize,
    pub vars: Vec<Var>,
    #[serde(default)]
    pub res_types: Vec<Type>,
    #[serde(default)]
    pub insns: Vec<Instruction>,

    #[serde(skip)]
    next_label_id: LabelId,
}

impl Function {
    /// Create a function whose parameters are `params`, in order
    pub fn new(name: impl Into<String>, params: Vec<Var>) -> Self {
        Self {
            name: name.into(),
            nargs: params.len(),
            vars: params,
            res_types: Vec::new(),
            insns: Vec::new(),
            next_label_id: 0,
        }
    }

    pub fn with_results(mut self, res_types: Vec<Type>) -> Self {
        self.res_types = res_types;
        self
    }

    /// Declare a local after all parameters and existing locals
    pub fn add_local(&mut self, name: impl Into<String>, ty: Type) -> RegId {
        self.vars.push(Var::new(name, ty));
        (self.vars.len() - 1) as RegId
    }

    pub fn params(&self) -> &[Var] {
        &self.vars[..self.nargs.min(self.vars.len())]
    }

    pub fn locals(&self) -> &[Var] {
        &self.vars[self.nargs.min(self.vars.len())..]
    }

    pub fn var(&self, reg: RegId) -> Option<&Var> {
        self.vars.get(reg as usize)
    }

    /// Find the register of a variable by name
    pub fn reg(&self, name: &str) -> Option<RegId> {
        self.vars
            .iter()
            .position(|v| v.name == name)
            .map(|i| i as RegId)
    }

    /// Register operand for a named variable
    pub fn reg_op(&self, name: &str) -> Option<Operand> {
        self.reg(name).map(Operand::Reg)
    }

    pub fn push(&mut self, insn: Instruction) {
        self.insns.push(insn);
    }

    pub fn emit(&mut self, code: Opcode, ops: Vec<Operand>) {
        self.push(Instruction::new(code, ops));
    }

    /// Allocate a fresh label identity; place it with [`Function::place_label`]
    ///
    /// Identities continue after the highest placed label. Past `LabelId::MAX`
    /// allocation wraps around and skips identities already placed.
    pub fn new_label(&mut self) -> LabelId {
        let used: HashSet<LabelId> = self.insns.iter().filter_map(Instruction::label_id).collect();
        let after_used = used
            .iter()
            .max()
            .map_or(0, |max| max.checked_add(1).unwrap_or(0));
        let mut id = self.next_label_id.max(after_used);
        while used.contains(&id) {
            id = id.wrapping_add(1);
        }
        self.next_label_id = id.wrapping_add(1);
        id
    }

    pub fn place_label(&mut self, id: LabelId) {
        self.push(Instruction::label(id));
    }

    /// Label instructions in stream order
    pub fn labels(&self) -> impl Iterator<Item = &Instruction> {
        self.insns.iter().filter(|insn| insn.code.is_label())
    }
}

// The label counter is construction state, not part of the function.
impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.nargs == other.nargs
            && self.vars == other.vars
            && self.res_types == other.res_types
            && self.insns == other.insns
    }
}
