//! IR Opcodes
//!
//! The closed set of operations an instruction can carry. Most arithmetic,
//! comparison and branch operations come in several flavours: 64-bit integer,
//! 32-bit integer (`S` suffix), unsigned (`U` prefix) and float/double/long
//! double (`F`, `D`, `LD` prefixes).

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! opcodes {
    [$($variant:ident => $name:literal),* $(,)?] => {
        /// IR operation code
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum Opcode {
            $(#[serde(rename = $name)] $variant,)*
        }

        impl Opcode {
            /// Every opcode, in declaration order
            pub const ALL: &'static [Opcode] = &[$(Opcode::$variant,)*];

            /// Lower-case mnemonic used in the textual IR
            pub fn name(self) -> &'static str {
                match self {
                    $(Opcode::$variant => $name,)*
                }
            }

            /// Look an opcode up by its mnemonic
            pub fn from_name(name: &str) -> Option<Opcode> {
                match name {
                    $($name => Some(Opcode::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

opcodes![
    // Moves and conversions
    Mov => "mov", FMov => "fmov", DMov => "dmov", LDMov => "ldmov",
    Ext8 => "ext8", Ext16 => "ext16", Ext32 => "ext32",
    UExt8 => "uext8", UExt16 => "uext16", UExt32 => "uext32",
    I2F => "i2f", I2D => "i2d", I2LD => "i2ld",
    UI2F => "ui2f", UI2D => "ui2d", UI2LD => "ui2ld",
    F2I => "f2i", D2I => "d2i", LD2I => "ld2i",
    F2D => "f2d", F2LD => "f2ld", D2F => "d2f", D2LD => "d2ld", LD2F => "ld2f", LD2D => "ld2d",

    // Negation
    Neg => "neg", NegS => "negs", FNeg => "fneg", DNeg => "dneg", LDNeg => "ldneg",

    // Arithmetic
    Add => "add", AddS => "adds", FAdd => "fadd", DAdd => "dadd", LDAdd => "ldadd",
    Sub => "sub", SubS => "subs", FSub => "fsub", DSub => "dsub", LDSub => "ldsub",
    Mul => "mul", MulS => "muls", FMul => "fmul", DMul => "dmul", LDMul => "ldmul",
    Div => "div", DivS => "divs", UDiv => "udiv", UDivS => "udivs",
    FDiv => "fdiv", DDiv => "ddiv", LDDiv => "lddiv",
    Mod => "mod", ModS => "mods", UMod => "umod", UModS => "umods",

    // Bitwise
    And => "and", AndS => "ands", Or => "or", OrS => "ors", Xor => "xor", XorS => "xors",
    Lsh => "lsh", LshS => "lshs", Rsh => "rsh", RshS => "rshs", URsh => "ursh", URshS => "urshs",

    // Comparisons producing a value
    Eq => "eq", EqS => "eqs", FEq => "feq", DEq => "deq", LDEq => "ldeq",
    Ne => "ne", NeS => "nes", FNe => "fne", DNe => "dne", LDNe => "ldne",
    Lt => "lt", LtS => "lts", ULt => "ult", ULtS => "ults", FLt => "flt", DLt => "dlt", LDLt => "ldlt",
    Le => "le", LeS => "les", ULe => "ule", ULeS => "ules", FLe => "fle", DLe => "dle", LDLe => "ldle",
    Gt => "gt", GtS => "gts", UGt => "ugt", UGtS => "ugts", FGt => "fgt", DGt => "dgt", LDGt => "ldgt",
    Ge => "ge", GeS => "ges", UGe => "uge", UGeS => "uges", FGe => "fge", DGe => "dge", LDGe => "ldge",

    // Jumps and single-operand branches
    Jmp => "jmp", Bt => "bt", BtS => "bts", Bf => "bf", BfS => "bfs",

    // Compare-and-branch
    BEq => "beq", BEqS => "beqs", FBEq => "fbeq", DBEq => "dbeq", LDBEq => "ldbeq",
    BNe => "bne", BNeS => "bnes", FBNe => "fbne", DBNe => "dbne", LDBNe => "ldbne",
    BLt => "blt", BLtS => "blts", UBLt => "ublt", UBLtS => "ublts", FBLt => "fblt", DBLt => "dblt", LDBLt => "ldblt",
    BLe => "ble", BLeS => "bles", UBLe => "uble", UBLeS => "ubles", FBLe => "fble", DBLe => "dble", LDBLe => "ldble",
    BGt => "bgt", BGtS => "bgts", UBGt => "ubgt", UBGtS => "ubgts", FBGt => "fbgt", DBGt => "dbgt", LDBGt => "ldbgt",
    BGe => "bge", BGeS => "bges", UBGe => "ubge", UBGeS => "ubges", FBGe => "fbge", DBGe => "dbge", LDBGe => "ldbge",

    // Calls and control transfer
    Call => "call", Inline => "inline", Switch => "switch", Ret => "ret",

    // Stack and varargs
    Alloca => "alloca", BStart => "bstart", BEnd => "bend",
    VaArg => "va_arg", VaStart => "va_start", VaEnd => "va_end",

    // Pseudo
    Label => "label",
];

impl Opcode {
    pub fn is_label(self) -> bool {
        self == Opcode::Label
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
