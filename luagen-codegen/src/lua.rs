//! Lua Statement Definitions
//!
//! The small subset of Lua the backend emits: assignments, calls, gotos,
//! conditional gotos, returns and labels inside flat function bodies.
//! Operands arrive already rendered as text.

use std::fmt;

/// Right-hand side of an assignment
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Rendered operand
    Atom(String),

    /// `lhs op rhs`
    Binary { lhs: String, op: &'static str, rhs: String },

    /// `(lhs op rhs)`, a boolean value
    Compare { lhs: String, op: &'static str, rhs: String },
}

impl Expr {
    pub fn atom(text: impl Into<String>) -> Self {
        Expr::Atom(text.into())
    }

    pub fn binary(lhs: impl Into<String>, op: &'static str, rhs: impl Into<String>) -> Self {
        Expr::Binary {
            lhs: lhs.into(),
            op,
            rhs: rhs.into(),
        }
    }

    pub fn compare(lhs: impl Into<String>, op: &'static str, rhs: impl Into<String>) -> Self {
        Expr::Compare {
            lhs: lhs.into(),
            op,
            rhs: rhs.into(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Atom(text) => write!(f, "{}", text),
            Expr::Binary { lhs, op, rhs } => write!(f, "{} {} {}", lhs, op, rhs),
            Expr::Compare { lhs, op, rhs } => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}

/// Condition of a conditional goto
#[derive(Debug, Clone, PartialEq)]
pub enum Cond {
    Truthy(String),
    Falsy(String),
    Compare { lhs: String, op: &'static str, rhs: String },
}

impl fmt::Display for Cond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cond::Truthy(value) => write!(f, "{}", value),
            Cond::Falsy(value) => write!(f, "not {}", value),
            Cond::Compare { lhs, op, rhs } => write!(f, "{} {} {}", lhs, op, rhs),
        }
    }
}

/// Lua statements
#[derive(Debug, Clone, PartialEq)]
pub enum LuaStmt {
    // Function shell
    FunctionHeader { name: String, params: Vec<String> },
    Local(String),
    End,

    // Data flow
    Assign { dst: String, expr: Expr },
    Call { dst: Option<String>, callee: String, args: Vec<String> },

    // Control flow
    Goto(String),
    IfGoto { cond: Cond, target: String },
    IfChain(Vec<(Cond, String)>),
    Return(Option<String>),
    /// `do return ... end`, for returns that are not last in the body
    ReturnBlock(Option<String>),
    Label(String),
}

impl LuaStmt {
    /// Statements written at column zero
    pub fn is_unindented(&self) -> bool {
        matches!(
            self,
            LuaStmt::FunctionHeader { .. } | LuaStmt::End | LuaStmt::Label(_)
        )
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[String]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for LuaStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LuaStmt::FunctionHeader { name, params } => {
                write!(f, "function {}(", name)?;
                write_list(f, params)?;
                write!(f, ")")
            }
            LuaStmt::Local(name) => write!(f, "local {}", name),
            LuaStmt::End => write!(f, "end"),

            LuaStmt::Assign { dst, expr } => write!(f, "{} = {}", dst, expr),
            LuaStmt::Call { dst, callee, args } => {
                if let Some(dst) = dst {
                    write!(f, "{} = ", dst)?;
                }
                write!(f, "{}(", callee)?;
                write_list(f, args)?;
                write!(f, ");")
            }

            LuaStmt::Goto(target) => write!(f, "goto {}", target),
            LuaStmt::IfGoto { cond, target } => {
                write!(f, "if {} then goto {} end", cond, target)
            }
            LuaStmt::IfChain(arms) => {
                for (i, (cond, target)) in arms.iter().enumerate() {
                    let keyword = if i == 0 { "if" } else { " elseif" };
                    write!(f, "{} {} then goto {}", keyword, cond, target)?;
                }
                write!(f, " end")
            }
            LuaStmt::Return(Some(value)) => write!(f, "return {}", value),
            LuaStmt::Return(None) => write!(f, "return"),
            LuaStmt::ReturnBlock(Some(value)) => write!(f, "do return {} end", value),
            LuaStmt::ReturnBlock(None) => write!(f, "do return end"),
            LuaStmt::Label(name) => write!(f, "::{}::", name),
        }
    }
}
