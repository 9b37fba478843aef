//! Instruction Translation
//!
//! Translates one IR instruction into the Lua statements that implement it,
//! dispatching on the opcode's table entry. Either the whole instruction is
//! translated or an error is returned and nothing is produced for it.

use log::trace;
use luagen_codegen::{Cond, Expr, LuaStmt};
use luagen_common::TranslateError;
use luagen_ir::{Instruction, Operand};
use crate::context::{label_token, FunctionContext};
use crate::operand::{render_destination, render_operand, render_operands};
use crate::table::{op_info, Family, OpInfo, EQ};

/// Translate a single instruction. `is_last` tells whether it ends the
/// function body, which decides how a return is written.
pub fn translate_instruction(
    ctx: &FunctionContext<'_>,
    insn: &Instruction,
    is_last: bool,
) -> Result<Vec<LuaStmt>, TranslateError> {
    let info = op_info(insn.code);
    trace!("{}: {} -> {:?}", ctx.function_name(), insn, info.family);

    if !info.arity.accepts(insn.ops.len()) {
        return Err(TranslateError::internal(format!(
            "{} in function '{}' has {} operands, expected {:?}",
            insn.code,
            ctx.function_name(),
            insn.ops.len(),
            info.arity
        )));
    }

    let ops = &insn.ops;
    let stmt = match info.family {
        Family::Move => LuaStmt::Assign {
            dst: render_destination(ctx, &ops[0])?,
            expr: Expr::Atom(render_operand(ctx, &ops[1])?),
        },

        Family::Negate => LuaStmt::Assign {
            dst: render_destination(ctx, &ops[0])?,
            expr: Expr::binary("0", operator(&info)?, render_operand(ctx, &ops[1])?),
        },

        Family::Binary => LuaStmt::Assign {
            dst: render_destination(ctx, &ops[0])?,
            expr: Expr::binary(
                render_operand(ctx, &ops[1])?,
                operator(&info)?,
                render_operand(ctx, &ops[2])?,
            ),
        },

        Family::Compare => LuaStmt::Assign {
            dst: render_destination(ctx, &ops[0])?,
            expr: Expr::compare(
                render_operand(ctx, &ops[1])?,
                operator(&info)?,
                render_operand(ctx, &ops[2])?,
            ),
        },

        Family::Jump => LuaStmt::Goto(jump_target(ctx, &ops[0])?),

        Family::BranchTrue => LuaStmt::IfGoto {
            cond: Cond::Truthy(render_operand(ctx, &ops[1])?),
            target: jump_target(ctx, &ops[0])?,
        },

        Family::BranchFalse => LuaStmt::IfGoto {
            cond: Cond::Falsy(render_operand(ctx, &ops[1])?),
            target: jump_target(ctx, &ops[0])?,
        },

        Family::BranchCompare => LuaStmt::IfGoto {
            cond: Cond::Compare {
                lhs: render_operand(ctx, &ops[1])?,
                op: operator(&info)?,
                rhs: render_operand(ctx, &ops[2])?,
            },
            target: jump_target(ctx, &ops[0])?,
        },

        Family::Call => translate_call(ctx, insn)?,

        Family::Switch => match translate_switch(ctx, ops)? {
            Some(stmt) => stmt,
            None => return Ok(Vec::new()),
        },

        Family::Return => {
            let values = render_operands(ctx, ops)?;
            let value = if values.is_empty() {
                None
            } else {
                Some(values.join(", "))
            };
            if is_last {
                LuaStmt::Return(value)
            } else {
                LuaStmt::ReturnBlock(value)
            }
        }

        Family::Label => {
            // The pre-pass already validated the identity.
            let id = insn.label_id().ok_or_else(|| {
                TranslateError::internal(format!("malformed label: {}", insn))
            })?;
            LuaStmt::Label(label_token(id))
        }

        Family::Unsupported => {
            return Err(TranslateError::Unsupported {
                function: ctx.function_name().to_string(),
                opcode: insn.code.to_string(),
            })
        }
    };

    Ok(vec![stmt])
}

fn operator(info: &OpInfo) -> Result<&'static str, TranslateError> {
    info.op.ok_or_else(|| {
        TranslateError::internal(format!("{:?} entry without an operator", info.family))
    })
}

fn jump_target(ctx: &FunctionContext<'_>, op: &Operand) -> Result<String, TranslateError> {
    let id = op.as_label().ok_or_else(|| {
        TranslateError::internal(format!(
            "jump target {} in function '{}' is not a label",
            op,
            ctx.function_name()
        ))
    })?;
    Ok(ctx.label(id)?.to_string())
}

/// Operand layout: prototype, result (if any), callee, arguments.
fn translate_call(ctx: &FunctionContext<'_>, insn: &Instruction) -> Result<LuaStmt, TranslateError> {
    let ops = &insn.ops;
    let proto = ctx.prototype(&ops[0])?;
    let nres = proto.nres();

    if nres > 1 {
        return Err(TranslateError::CallArity {
            function: ctx.function_name().to_string(),
            results: nres,
        });
    }

    let callee_index = 1 + nres;
    if ops.len() <= callee_index {
        return Err(TranslateError::internal(format!(
            "{} in function '{}' has no callee operand",
            insn.code,
            ctx.function_name()
        )));
    }

    let args = &ops[callee_index + 1..];
    let args_ok = if proto.vararg {
        args.len() >= proto.nargs()
    } else {
        args.len() == proto.nargs()
    };
    if !args_ok {
        return Err(TranslateError::internal(format!(
            "{} in function '{}' passes {} arguments to prototype '{}' declaring {}",
            insn.code,
            ctx.function_name(),
            args.len(),
            proto.name,
            proto.nargs()
        )));
    }

    let dst = if nres == 1 {
        Some(render_destination(ctx, &ops[1])?)
    } else {
        None
    };

    Ok(LuaStmt::Call {
        dst,
        callee: render_operand(ctx, &ops[callee_index])?,
        args: render_operands(ctx, args)?,
    })
}

/// `switch idx, L0, L1, ...` jumps to the label at position `idx`.
fn translate_switch(ctx: &FunctionContext<'_>, ops: &[Operand]) -> Result<Option<LuaStmt>, TranslateError> {
    let index = render_operand(ctx, &ops[0])?;
    let mut arms = Vec::with_capacity(ops.len() - 1);
    for (case, target) in ops[1..].iter().enumerate() {
        let cond = Cond::Compare {
            lhs: index.clone(),
            op: EQ,
            rhs: case.to_string(),
        };
        arms.push((cond, jump_target(ctx, target)?));
    }

    if arms.is_empty() {
        Ok(None)
    } else {
        Ok(Some(LuaStmt::IfChain(arms)))
    }
}
