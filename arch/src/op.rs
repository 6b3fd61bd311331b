use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Encoding family of a mnemonic together with its opcode bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// No operand, the table value is the whole word.
    Fixed(u16),
    /// 8-bit opcode, 8-bit operand.
    Short(u8),
    /// 3-bit opcode, 13-bit absolute operand.
    Long(u8),
    /// 3-bit opcode, 5-bit addressing pattern, 8-bit operand.
    Indexed(u8),
    /// 6-bit opcode, 2-bit mode, 8-bit operand.
    Alu(u8),
}

static FIXED: Lazy<HashMap<&'static str, u16>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert("ASR", 0b0111_0001_0000_0001);
    map.insert("DEC", 0b0111_1011_0000_0000);
    map.insert("INC", 0b0000_0000_0000_0000);
    map.insert("LSL", 0b0101_1000_0000_0000);
    map.insert("LSR", 0b0111_0001_0000_0000);
    map.insert("NEG", 0b0010_0111_0000_0000);
    map.insert("NOT", 0b0010_1101_0000_0000);
    map.insert("RLC", 0b0101_0000_0000_0000);
    map.insert("ROL", 0b0101_0010_0000_0000);
    map.insert("ROR", 0b0111_0001_0000_0010);
    map.insert("RRC", 0b0111_0001_0000_0011);
    map.insert("STI", 0b0111_1111_1000_0001);
    map.insert("CLI", 0b0000_0111_0110_1001);
    map.insert("STU", 0b0111_1111_0010_0010);
    map.insert("CLU", 0b0000_0111_1100_1010);
    map.insert("STC", 0b0111_1111_0000_1100);
    map.insert("CLC", 0b0000_0111_1110_0100);
    map.insert("TAX", 0b0000_0111_1000_0000);
    map.insert("TXA", 0b0110_0111_0000_0001);
    map.insert("INX", 0b0000_0101_1000_0000);
    map.insert("DEX", 0b0000_1101_1000_0000);
    map.insert("TAS", 0b0000_0111_0101_0000);
    map.insert("TSA", 0b0110_0111_0000_0000);
    map.insert("INS", 0b0000_0110_0100_0000);
    map.insert("DES", 0b0000_1110_0100_0000);
    map.insert("RTS", 0b0001_1111_0000_0000);
    map.insert("POPF", 0b0000_0010_0000_0000);
    map.insert("PUSHF", 0b0000_1110_0000_0000);
    map.insert("NOP", 0b0001_1111_1000_0000);
    map
});

static SHORT: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert("ADCI", 0b0110_0011);
    map.insert("ADDI", 0b0110_1011);
    map.insert("ANDI", 0b0100_0111);
    map.insert("CMPI", 0b0011_0011);
    map.insert("ORI", 0b0111_0111);
    map.insert("SBBI", 0b0001_1011);
    map.insert("SUBI", 0b0001_0011);
    map.insert("TSTI", 0b0100_1111);
    map.insert("XORI", 0b0011_0111);
    map.insert("LDI", 0b1000_1001);
    map.insert("LDD", 0b1000_0000);
    map.insert("STD", 0b1010_0000);
    map.insert("JA", 0b1000_1000);
    map.insert("JNC", 0b1000_1100);
    map.insert("JAE", 0b1000_1100);
    map.insert("JC", 0b1000_1111);
    map.insert("JB", 0b1000_1111);
    map.insert("JBE", 0b1000_1011);
    map.insert("JE", 0b1001_1111);
    map.insert("JZ", 0b1001_1111);
    map.insert("JG", 0b1010_1111);
    map.insert("JGE", 0b1011_1011);
    map.insert("JL", 0b1011_1000);
    map.insert("JLE", 0b1010_1100);
    map.insert("JNZ", 0b1001_1100);
    map.insert("JNE", 0b1001_1100);
    map.insert("JNS", 0b1001_1000);
    map.insert("JNU", 0b1011_1100);
    map.insert("JNV", 0b1010_1000);
    map.insert("JS", 0b1001_1011);
    map.insert("JU", 0b1011_1111);
    map.insert("JV", 0b1010_1011);
    map.insert("IN", 0b1001_0000);
    map.insert("OUT", 0b1011_0000);
    map
});

static LONG: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert("JMP", 0b110);
    map.insert("CALL", 0b111);
    map
});

static INDEXED: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert("ST", 0b101);
    map.insert("LD", 0b100);
    map
});

static ALU: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert("ADC", 0b01_1000);
    map.insert("ADD", 0b01_1010);
    map.insert("AND", 0b01_0001);
    map.insert("CMP", 0b00_1100);
    map.insert("OR", 0b01_1101);
    map.insert("SBB", 0b00_0110);
    map.insert("SUB", 0b00_0100);
    map.insert("TST", 0b01_0011);
    map.insert("XOR", 0b00_1101);
    map
});

impl Family {
    pub fn lookup(mnemonic: &str) -> Option<Family> {
        if let Some(word) = FIXED.get(mnemonic) {
            return Some(Family::Fixed(*word));
        }
        if let Some(op) = SHORT.get(mnemonic) {
            return Some(Family::Short(*op));
        }
        if let Some(op) = LONG.get(mnemonic) {
            return Some(Family::Long(*op));
        }
        if let Some(op) = INDEXED.get(mnemonic) {
            return Some(Family::Indexed(*op));
        }
        ALU.get(mnemonic).map(|op| Family::Alu(*op))
    }

    /// Whether the family takes `count` operands.
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            Family::Fixed(_) => count == 0,
            Family::Short(_) | Family::Long(_) => count == 1,
            Family::Indexed(_) => count == 2,
            Family::Alu(_) => count == 1 || count == 2,
        }
    }

    pub fn expected(&self) -> &'static str {
        match self {
            Family::Fixed(_) => "no arguments",
            Family::Short(_) | Family::Long(_) => "1 argument",
            Family::Indexed(_) => "2 arguments",
            Family::Alu(_) => "1 or 2 arguments",
        }
    }
}
