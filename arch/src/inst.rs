use crate::{alu::AluMode, reg::Pattern};

/// Instruction with every operand resolved to its bit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    Fixed(u16),
    Short(u8, u8),
    Long(u8, u16),
    Indexed(u8, Pattern, u8),
    Alu(u8, AluMode, u8),
}

impl Inst {
    pub fn to_bin(&self) -> u16 {
        match *self {
            Inst::Fixed(word) => word,
            Inst::Short(op, imm) => (op as u16) << 8 | imm as u16,
            Inst::Long(op, addr) => (op as u16 & 0x7) << 13 | addr & 0x1FFF,
            Inst::Indexed(op, pattern, imm) => {
                (op as u16 & 0x7) << 13 | (pattern.bits() as u16 & 0x1F) << 8 | imm as u16
            }
            Inst::Alu(op, mode, imm) => {
                (op as u16 & 0x3F) << 10 | (u8::from(mode) as u16) << 8 | imm as u16
            }
        }
    }
}
