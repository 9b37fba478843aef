//! IR to Lua translator - Code Generation
//!
//! This crate handles the last step of translation: turning Lua statements
//! into text. It includes:
//!
//! - The statement model the backend produces (`lua`)
//! - The line writer that indents and terminates statements (`emit`)

pub mod lua;
pub mod emit;

pub use lua::{Cond, Expr, LuaStmt};
pub use emit::{emit_statements, LuaWriter, DEFAULT_INDENT};
