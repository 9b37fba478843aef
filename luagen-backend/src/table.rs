//! Opcode Table
//!
//! Maps every opcode to the template family it is translated with, the Lua
//! operator token the template uses and the operand count it expects.
//! Signed, unsigned, 32-bit and floating variants of one operation share an
//! entry shape; the `match` is exhaustive so a new opcode cannot slip past.

use luagen_ir::Opcode;

/// Translation template families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// `dst = src`; conversions erase numeric types
    Move,
    /// `dst = 0 - src`
    Negate,
    /// `dst = a OP b`
    Binary,
    /// `dst = (a OP b)`
    Compare,
    /// `goto target`
    Jump,
    /// `if cond then goto target end`
    BranchTrue,
    /// `if not cond then goto target end`
    BranchFalse,
    /// `if a OP b then goto target end`
    BranchCompare,
    /// `[dst = ]callee(args...);`
    Call,
    /// `if idx == 0 then goto .. elseif .. end`
    Switch,
    /// `return [values]`
    Return,
    /// `::target::`
    Label,
    /// No Lua counterpart; reported instead of translated
    Unsupported,
}

/// Expected operand count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

/// Table entry for one opcode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpInfo {
    pub family: Family,
    pub op: Option<&'static str>,
    pub arity: Arity,
}

impl OpInfo {
    const fn new(family: Family, op: Option<&'static str>, arity: Arity) -> Self {
        Self { family, op, arity }
    }
}

// Lua operator tokens
pub const ADD: &str = "+";
pub const SUB: &str = "-";
pub const MUL: &str = "*";
pub const IDIV: &str = "//";
pub const FDIV: &str = "/";
pub const MOD: &str = "%";
pub const AND: &str = "&";
pub const OR: &str = "|";
pub const XOR: &str = "~";
pub const SHL: &str = "<<";
pub const SHR: &str = ">>";
pub const EQ: &str = "==";
pub const NE: &str = "~=";
pub const LT: &str = "<";
pub const LE: &str = "<=";
pub const GT: &str = ">";
pub const GE: &str = ">=";

const MOVE: OpInfo = OpInfo::new(Family::Move, None, Arity::Exact(2));
const NEGATE: OpInfo = OpInfo::new(Family::Negate, Some(SUB), Arity::Exact(2));
const JUMP: OpInfo = OpInfo::new(Family::Jump, None, Arity::Exact(1));
const BRANCH_TRUE: OpInfo = OpInfo::new(Family::BranchTrue, None, Arity::Exact(2));
const BRANCH_FALSE: OpInfo = OpInfo::new(Family::BranchFalse, None, Arity::Exact(2));
const CALL: OpInfo = OpInfo::new(Family::Call, None, Arity::AtLeast(2));
const SWITCH: OpInfo = OpInfo::new(Family::Switch, None, Arity::AtLeast(1));
const RETURN: OpInfo = OpInfo::new(Family::Return, None, Arity::AtLeast(0));
const LABEL: OpInfo = OpInfo::new(Family::Label, None, Arity::Exact(1));
const UNSUPPORTED: OpInfo = OpInfo::new(Family::Unsupported, None, Arity::AtLeast(0));

const fn binary(op: &'static str) -> OpInfo {
    OpInfo::new(Family::Binary, Some(op), Arity::Exact(3))
}

const fn compare(op: &'static str) -> OpInfo {
    OpInfo::new(Family::Compare, Some(op), Arity::Exact(3))
}

const fn branch(op: &'static str) -> OpInfo {
    OpInfo::new(Family::BranchCompare, Some(op), Arity::Exact(3))
}

/// Look up the table entry for an opcode
pub fn op_info(code: Opcode) -> OpInfo {
    use Opcode as O;

    match code {
        O::Mov | O::FMov | O::DMov | O::LDMov
        | O::Ext8 | O::Ext16 | O::Ext32
        | O::UExt8 | O::UExt16 | O::UExt32
        | O::I2F | O::I2D | O::I2LD
        | O::UI2F | O::UI2D | O::UI2LD
        | O::F2I | O::D2I | O::LD2I
        | O::F2D | O::F2LD | O::D2F | O::D2LD | O::LD2F | O::LD2D => MOVE,

        O::Neg | O::NegS | O::FNeg | O::DNeg | O::LDNeg => NEGATE,

        O::Add | O::AddS | O::FAdd | O::DAdd | O::LDAdd => binary(ADD),
        O::Sub | O::SubS | O::FSub | O::DSub | O::LDSub => binary(SUB),
        O::Mul | O::MulS | O::FMul | O::DMul | O::LDMul => binary(MUL),
        O::Div | O::DivS | O::UDiv | O::UDivS => binary(IDIV),
        O::FDiv | O::DDiv | O::LDDiv => binary(FDIV),
        O::Mod | O::ModS | O::UMod | O::UModS => binary(MOD),
        O::And | O::AndS => binary(AND),
        O::Or | O::OrS => binary(OR),
        O::Xor | O::XorS => binary(XOR),
        O::Lsh | O::LshS => binary(SHL),
        O::Rsh | O::RshS | O::URsh | O::URshS => binary(SHR),

        O::Eq | O::EqS | O::FEq | O::DEq | O::LDEq => compare(EQ),
        O::Ne | O::NeS | O::FNe | O::DNe | O::LDNe => compare(NE),
        O::Lt | O::LtS | O::ULt | O::ULtS | O::FLt | O::DLt | O::LDLt => compare(LT),
        O::Le | O::LeS | O::ULe | O::ULeS | O::FLe | O::DLe | O::LDLe => compare(LE),
        O::Gt | O::GtS | O::UGt | O::UGtS | O::FGt | O::DGt | O::LDGt => compare(GT),
        O::Ge | O::GeS | O::UGe | O::UGeS | O::FGe | O::DGe | O::LDGe => compare(GE),

        O::Jmp => JUMP,
        O::Bt | O::BtS => BRANCH_TRUE,
        O::Bf | O::BfS => BRANCH_FALSE,

        O::BEq | O::BEqS | O::FBEq | O::DBEq | O::LDBEq => branch(EQ),
        O::BNe | O::BNeS | O::FBNe | O::DBNe | O::LDBNe => branch(NE),
        O::BLt | O::BLtS | O::UBLt | O::UBLtS | O::FBLt | O::DBLt | O::LDBLt => branch(LT),
        O::BLe | O::BLeS | O::UBLe | O::UBLeS | O::FBLe | O::DBLe | O::LDBLe => branch(LE),
        O::BGt | O::BGtS | O::UBGt | O::UBGtS | O::FBGt | O::DBGt | O::LDBGt => branch(GT),
        O::BGe | O::BGeS | O::UBGe | O::UBGeS | O::FBGe | O::DBGe | O::LDBGe => branch(GE),

        O::Call | O::Inline => CALL,
        O::Switch => SWITCH,
        O::Ret => RETURN,
        O::Label => LABEL,

        // Stack allocation and varargs have no Lua equivalent.
        O::Alloca | O::BStart | O::BEnd | O::VaArg | O::VaStart | O::VaEnd => UNSUPPORTED,
    }
}
