//! IR Type System
//!
//! Types of variables, prototype arguments and call results. The Lua target
//! is untyped, so these only matter to producers of the IR.

use serde::{Deserialize, Serialize};
use std::fmt;

/// IR value type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    I8, U8,
    I16, U16,
    I32, U32,
    I64, U64,
    /// 32-bit float
    F,
    /// 64-bit float
    D,
    /// Extended precision float
    LD,
    /// Pointer
    P,
    /// Memory block passed by value
    Blk,
    /// Memory block returned by value
    RBlk,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Type::I8 => "i8",
            Type::U8 => "u8",
            Type::I16 => "i16",
            Type::U16 => "u16",
            Type::I32 => "i32",
            Type::U32 => "u32",
            Type::I64 => "i64",
            Type::U64 => "u64",
            Type::F => "f",
            Type::D => "d",
            Type::LD => "ld",
            Type::P => "p",
            Type::Blk => "blk",
            Type::RBlk => "rblk",
        };
        write!(f, "{name}")
    }
}
