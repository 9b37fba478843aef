//! Register-based Intermediate Representation
//!
//! This crate defines the typed, register-based IR consumed by the Lua
//! backend. Modules are built once (by a front end, a deserializer or the
//! construction helpers here) and are read-only afterwards.
//!
//! ## Architecture
//!
//! - `types` - Value types of variables and results (erased on output)
//! - `operand` - Operands: registers, immediates, references, labels
//! - `opcode` - The closed opcode enumeration
//! - `instruction` - Opcode plus operand list
//! - `function` - Functions with their variables and instruction stream
//! - `module` - Modules, items and prototypes

// Public exports - clean API surface
pub use self::types::Type;
pub use self::operand::Operand;
pub use self::opcode::Opcode;
pub use self::instruction::Instruction;
pub use self::function::{Function, Var};
pub use self::module::{Bss, Data, Item, Module, Prototype};

// Internal modules
mod types;
mod operand;
mod opcode;
mod instruction;
mod function;
mod module;


/// Index of a declared variable within its function
pub type RegId = u32;

/// Identity a label instruction carries in its first operand
pub type LabelId = u32;

/// Index of an item within its module
pub type ItemId = u32;
