use crate::reg::Reg;
use num_enum::IntoPrimitive;

/// Operand source of an ALU instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, IntoPrimitive)]
#[repr(u8)]
pub enum AluMode {
    #[default]
    Acc = 0b00,
    X = 0b01,
    S = 0b10,
}

impl From<Reg> for AluMode {
    fn from(reg: Reg) -> Self {
        match reg {
            Reg::S => AluMode::S,
            Reg::X => AluMode::X,
        }
    }
}

#[test]
fn test() {
    assert_eq!(u8::from(AluMode::Acc), 0b00);
    assert_eq!(u8::from(AluMode::from(Reg::X)), 0b01);
    assert_eq!(u8::from(AluMode::from(Reg::S)), 0b10);
}
