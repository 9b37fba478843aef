//! Operand Rendering
//!
//! Turns one IR operand into Lua text. Numeric types are erased: integers
//! become decimal literals (hex where decimal would read back as a float),
//! floating values become fixed-point literals with six fractional digits.

use luagen_common::TranslateError;
use luagen_ir::Operand;
use crate::context::FunctionContext;

/// Render an operand in the scope of the current function
pub fn render_operand(ctx: &FunctionContext<'_>, op: &Operand) -> Result<String, TranslateError> {
    let text = match *op {
        Operand::Reg(reg) => ctx.var_name(reg)?.to_string(),
        Operand::Int(val) => render_int(val),
        Operand::Uint(val) => match i64::try_from(val) {
            Ok(val) => val.to_string(),
            // Lua reads hex literals modulo 2^64, keeping the bits as an integer.
            Err(_) => format!("0x{:x}", val),
        },
        Operand::Float(val) => render_float(f64::from(val)),
        Operand::Double(val) | Operand::LDouble(val) => render_float(val),
        Operand::Ref(id) => ctx.item(id)?.name().to_string(),
        Operand::Label(id) => ctx.label(id)?.to_string(),
    };
    Ok(text)
}

/// Render a list of operands
pub fn render_operands(ctx: &FunctionContext<'_>, ops: &[Operand]) -> Result<Vec<String>, TranslateError> {
    ops.iter().map(|op| render_operand(ctx, op)).collect()
}

/// Render an operand that must be written to
pub fn render_destination(ctx: &FunctionContext<'_>, op: &Operand) -> Result<String, TranslateError> {
    match op {
        Operand::Reg(reg) => Ok(ctx.var_name(*reg)?.to_string()),
        other => Err(TranslateError::internal(format!(
            "destination {} in function '{}' is not a register",
            other,
            ctx.function_name()
        ))),
    }
}

/// Decimal, except for the one value whose magnitude Lua would read as a float
fn render_int(val: i64) -> String {
    if val == i64::MIN {
        format!("0x{:x}", val)
    } else {
        val.to_string()
    }
}

/// Fixed-point rendering; Lua has no literals for infinities and NaN.
fn render_float(val: f64) -> String {
    if val.is_nan() {
        "(0/0)".to_string()
    } else if val == f64::INFINITY {
        "(1/0)".to_string()
    } else if val == f64::NEG_INFINITY {
        "(-1/0)".to_string()
    } else {
        format!("{:.6}", val)
    }
}
