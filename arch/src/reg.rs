use num_enum::IntoPrimitive;
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, EnumString, Display)]
#[repr(u8)]
pub enum Reg {
    S = 0,
    X = 1,
}

impl Reg {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, EnumString, Display)]
#[repr(u8)]
pub enum Step {
    #[strum(serialize = "+")]
    Inc = 0,
    #[strum(serialize = "-")]
    Dec = 1,
}

/// Addressing pattern of the first `ST`/`LD` operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// `S`, `X`
    Direct(Reg),
    /// `+S`, `-X`, ...
    Pre(Step, Reg),
    /// `S+`, `X-`, ...
    Post(Reg, Step),
}

impl Pattern {
    pub fn parse(s: &str) -> Option<Pattern> {
        if let Some(reg) = Reg::parse(s) {
            return Some(Pattern::Direct(reg));
        }
        if !s.is_ascii() || s.len() != 2 {
            return None;
        }
        let (head, tail) = s.split_at(1);
        if let (Ok(step), Some(reg)) = (head.parse::<Step>(), Reg::parse(tail)) {
            return Some(Pattern::Pre(step, reg));
        }
        if let (Some(reg), Ok(step)) = (Reg::parse(head), tail.parse::<Step>()) {
            return Some(Pattern::Post(reg, step));
        }
        None
    }

    /// 5-bit field: prepost, incdec, register, then the 2-bit addressing mode.
    pub fn bits(&self) -> u8 {
        let (prepost, step, reg, mode): (u8, u8, u8, u8) = match *self {
            Pattern::Direct(reg) => (1, Step::Inc.into(), reg.into(), 0b11),
            Pattern::Pre(step, reg) => (0, step.into(), reg.into(), 0b10),
            Pattern::Post(reg, step) => (1, step.into(), reg.into(), 0b10),
        };
        prepost << 4 | step << 3 | reg << 2 | mode
    }
}
