use arch::reg::Pattern;
use log::trace;

use crate::{error::Error, ident::Idents};

/// Pseudo-register holding the address of the current instruction.
pub const IP: &str = ".IP";

const MAX_SHORT: i64 = 0xFF;
const MAX_LONG: i64 = 0x1FFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Primary,
    Secondary,
}

/// Operand tokens of one instruction, with what is needed to resolve them.
#[derive(Debug, Clone, Copy)]
pub struct Operands<'a> {
    args: &'a [String],
    code: &'a Idents,
    data: &'a Idents,
    ip: u16,
}

impl<'a> Operands<'a> {
    pub fn new(args: &'a [String], code: &'a Idents, data: &'a Idents, ip: u16) -> Self {
        Operands {
            args,
            code,
            data,
            ip,
        }
    }

    pub fn count(&self) -> usize {
        self.args.len()
    }

    pub fn get(&self, slot: Slot) -> Option<&'a str> {
        let idx = match slot {
            Slot::Primary => 0,
            Slot::Secondary => 1,
        };
        self.args.get(idx).map(String::as_str)
    }

    /// Resolves an operand to its value. Absolute operands take 13 bits, the
    /// rest take 8 bits with code addresses turned into a displacement from
    /// the next instruction.
    pub fn evaluate(&self, slot: Slot, absolute: bool) -> Result<u16, Error> {
        let token = self
            .get(slot)
            .ok_or_else(|| Error::InvalidArgument(String::new()))?;

        let value = if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
            token
                .parse::<i64>()
                .map_err(|_| Error::OutOfRange(token.to_string()))?
        } else if let Some(addr) = self.code.get_val(token) {
            self.displace(addr, absolute)
        } else if let Some(addr) = self.data.get_val(token) {
            addr as i64
        } else if token == IP {
            self.displace(self.ip, absolute)
        } else {
            return Err(Error::InvalidArgument(token.to_string()));
        };

        let max = if absolute { MAX_LONG } else { MAX_SHORT };
        if !(0..=max).contains(&value) {
            return Err(Error::OutOfRange(token.to_string()));
        }
        trace!("{} = {:#06X} @ {:04X}", token, value, self.ip);
        Ok(value as u16)
    }

    fn displace(&self, addr: u16, absolute: bool) -> i64 {
        if absolute {
            return addr as i64;
        }
        let offset = addr as i64 - self.ip as i64 - 1;
        if offset < 0 {
            offset + 256
        } else {
            offset
        }
    }

    /// Addressing pattern of the primary operand.
    pub fn pattern(&self) -> Result<Pattern, Error> {
        let token = self.get(Slot::Primary).unwrap_or("");
        Pattern::parse(token).ok_or_else(|| Error::InvalidArgument(token.to_string()))
    }
}
