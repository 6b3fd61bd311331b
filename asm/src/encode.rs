use arch::{alu::AluMode, inst::Inst, op::Family, reg::Reg};

use crate::{
    error::Error,
    eval::{Operands, Slot},
};

/// Picks the family of `mnemonic`, checks the operand count and packs the
/// evaluated operands into an instruction.
pub fn encode(mnemonic: &str, operands: &Operands) -> Result<Inst, Error> {
    let family =
        Family::lookup(mnemonic).ok_or_else(|| Error::UnknownOpcode(mnemonic.to_string()))?;
    if !family.accepts(operands.count()) {
        return Err(Error::Arity(mnemonic.to_string(), family.expected()));
    }

    match family {
        Family::Fixed(word) => Ok(Inst::Fixed(word)),
        Family::Short(op) => Ok(Inst::Short(op, operands.evaluate(Slot::Primary, false)? as u8)),
        Family::Long(op) => Ok(Inst::Long(op, operands.evaluate(Slot::Primary, true)?)),
        Family::Indexed(op) => {
            let pattern = operands.pattern()?;
            let imm = operands.evaluate(Slot::Secondary, false)? as u8;
            Ok(Inst::Indexed(op, pattern, imm))
        }
        Family::Alu(op) => {
            if operands.count() == 1 {
                let imm = operands.evaluate(Slot::Primary, false)? as u8;
                return Ok(Inst::Alu(op, AluMode::Acc, imm));
            }
            let mode = operands
                .get(Slot::Primary)
                .and_then(Reg::parse)
                .map(AluMode::from)
                .ok_or_else(|| Error::AluRegister(mnemonic.to_string()))?;
            let imm = operands.evaluate(Slot::Secondary, false)? as u8;
            Ok(Inst::Alu(op, mode, imm))
        }
    }
}
