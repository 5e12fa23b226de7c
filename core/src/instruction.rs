use std::fmt;

use crate::opcode::Opcode;

/// A decoded Chip-8 instruction.
///
/// Operands are pulled out of the opcode once, at decode time:
/// - `x`, `y` register indices (0x0..=0xF)
/// - `kk` an immediate byte
/// - `addr` a 12-bit address
/// - `n` a sprite height in rows
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// 00E0
    Cls,
    /// 00EE
    Ret,
    /// 1nnn
    Jp { addr: u16 },
    /// 2nnn
    Call { addr: u16 },
    /// 3xkk
    SeByte { x: u8, kk: u8 },
    /// 4xkk
    SneByte { x: u8, kk: u8 },
    /// 5xy0
    SeReg { x: u8, y: u8 },
    /// 6xkk
    LdByte { x: u8, kk: u8 },
    /// 7xkk
    AddByte { x: u8, kk: u8 },
    /// 8xy0
    LdReg { x: u8, y: u8 },
    /// 8xy1
    Or { x: u8, y: u8 },
    /// 8xy2
    And { x: u8, y: u8 },
    /// 8xy3
    Xor { x: u8, y: u8 },
    /// 8xy4
    AddReg { x: u8, y: u8 },
    /// 8xy5
    Sub { x: u8, y: u8 },
    /// 8xy6
    Shr { x: u8 },
    /// 8xy7
    Subn { x: u8, y: u8 },
    /// 8xyE
    Shl { x: u8 },
    /// 9xy0
    SneReg { x: u8, y: u8 },
    /// Annn
    LdI { addr: u16 },
    /// Bnnn
    JpV0 { addr: u16 },
    /// Cxkk
    Rnd { x: u8, kk: u8 },
    /// Dxyn
    Drw { x: u8, y: u8, n: u8 },
    /// Ex9E
    Skp { x: u8 },
    /// ExA1
    Sknp { x: u8 },
    /// Fx07
    LdVxDt { x: u8 },
    /// Fx0A
    LdVxKey { x: u8 },
    /// Fx15
    LdDtVx { x: u8 },
    /// Fx18
    LdStVx { x: u8 },
    /// Fx1E
    AddI { x: u8 },
    /// Fx29
    LdGlyph { x: u8 },
    /// Fx33
    LdBcd { x: u8 },
    /// Fx55
    Store { x: u8 },
    /// Fx65
    Read { x: u8 },
}

impl Instruction {
    /// Selects the correct Instruction for a given Opcode.
    /// Returns `None` for opcodes with no Chip-8 meaning (including the 0nnn SYS calls).
    pub fn decode(op: u16) -> Option<Instruction> {
        let (x, y, n, kk, addr) = (op.x(), op.y(), op.n(), op.kk(), op.addr());
        let instruction = match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Instruction::Cls,
            (0x0, 0x0, 0xE, 0xE) => Instruction::Ret,
            (0x1, ..) => Instruction::Jp { addr },
            (0x2, ..) => Instruction::Call { addr },
            (0x3, ..) => Instruction::SeByte { x, kk },
            (0x4, ..) => Instruction::SneByte { x, kk },
            (0x5, .., 0x0) => Instruction::SeReg { x, y },
            (0x6, ..) => Instruction::LdByte { x, kk },
            (0x7, ..) => Instruction::AddByte { x, kk },
            (0x8, .., 0x0) => Instruction::LdReg { x, y },
            (0x8, .., 0x1) => Instruction::Or { x, y },
            (0x8, .., 0x2) => Instruction::And { x, y },
            (0x8, .., 0x3) => Instruction::Xor { x, y },
            (0x8, .., 0x4) => Instruction::AddReg { x, y },
            (0x8, .., 0x5) => Instruction::Sub { x, y },
            (0x8, .., 0x6) => Instruction::Shr { x },
            (0x8, .., 0x7) => Instruction::Subn { x, y },
            (0x8, .., 0xE) => Instruction::Shl { x },
            (0x9, .., 0x0) => Instruction::SneReg { x, y },
            (0xA, ..) => Instruction::LdI { addr },
            (0xB, ..) => Instruction::JpV0 { addr },
            (0xC, ..) => Instruction::Rnd { x, kk },
            (0xD, ..) => Instruction::Drw { x, y, n },
            (0xE, .., 0x9, 0xE) => Instruction::Skp { x },
            (0xE, .., 0xA, 0x1) => Instruction::Sknp { x },
            (0xF, .., 0x0, 0x7) => Instruction::LdVxDt { x },
            (0xF, .., 0x0, 0xA) => Instruction::LdVxKey { x },
            (0xF, .., 0x1, 0x5) => Instruction::LdDtVx { x },
            (0xF, .., 0x1, 0x8) => Instruction::LdStVx { x },
            (0xF, .., 0x1, 0xE) => Instruction::AddI { x },
            (0xF, .., 0x2, 0x9) => Instruction::LdGlyph { x },
            (0xF, .., 0x3, 0x3) => Instruction::LdBcd { x },
            (0xF, .., 0x5, 0x5) => Instruction::Store { x },
            (0xF, .., 0x6, 0x5) => Instruction::Read { x },
            _ => return None,
        };
        Some(instruction)
    }
}

/// Canonical assembler mnemonics, used when tracing execution
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Instruction::Cls => write!(f, "CLS"),
            Instruction::Ret => write!(f, "RET"),
            Instruction::Jp { addr } => write!(f, "JP {:#05X}", addr),
            Instruction::Call { addr } => write!(f, "CALL {:#05X}", addr),
            Instruction::SeByte { x, kk } => write!(f, "SE V{:X}, {:#04X}", x, kk),
            Instruction::SneByte { x, kk } => write!(f, "SNE V{:X}, {:#04X}", x, kk),
            Instruction::SeReg { x, y } => write!(f, "SE V{:X}, V{:X}", x, y),
            Instruction::LdByte { x, kk } => write!(f, "LD V{:X}, {:#04X}", x, kk),
            Instruction::AddByte { x, kk } => write!(f, "ADD V{:X}, {:#04X}", x, kk),
            Instruction::LdReg { x, y } => write!(f, "LD V{:X}, V{:X}", x, y),
            Instruction::Or { x, y } => write!(f, "OR V{:X}, V{:X}", x, y),
            Instruction::And { x, y } => write!(f, "AND V{:X}, V{:X}", x, y),
            Instruction::Xor { x, y } => write!(f, "XOR V{:X}, V{:X}", x, y),
            Instruction::AddReg { x, y } => write!(f, "ADD V{:X}, V{:X}", x, y),
            Instruction::Sub { x, y } => write!(f, "SUB V{:X}, V{:X}", x, y),
            Instruction::Shr { x } => write!(f, "SHR V{:X}", x),
            Instruction::Subn { x, y } => write!(f, "SUBN V{:X}, V{:X}", x, y),
            Instruction::Shl { x } => write!(f, "SHL V{:X}", x),
            Instruction::SneReg { x, y } => write!(f, "SNE V{:X}, V{:X}", x, y),
            Instruction::LdI { addr } => write!(f, "LD I, {:#05X}", addr),
            Instruction::JpV0 { addr } => write!(f, "JP V0, {:#05X}", addr),
            Instruction::Rnd { x, kk } => write!(f, "RND V{:X}, {:#04X}", x, kk),
            Instruction::Drw { x, y, n } => write!(f, "DRW V{:X}, V{:X}, {}", x, y, n),
            Instruction::Skp { x } => write!(f, "SKP V{:X}", x),
            Instruction::Sknp { x } => write!(f, "SKNP V{:X}", x),
            Instruction::LdVxDt { x } => write!(f, "LD V{:X}, DT", x),
            Instruction::LdVxKey { x } => write!(f, "LD V{:X}, K", x),
            Instruction::LdDtVx { x } => write!(f, "LD DT, V{:X}", x),
            Instruction::LdStVx { x } => write!(f, "LD ST, V{:X}", x),
            Instruction::AddI { x } => write!(f, "ADD I, V{:X}", x),
            Instruction::LdGlyph { x } => write!(f, "LD F, V{:X}", x),
            Instruction::LdBcd { x } => write!(f, "LD B, V{:X}", x),
            Instruction::Store { x } => write!(f, "LD [I], V{:X}", x),
            Instruction::Read { x } => write!(f, "LD V{:X}, [I]", x),
        }
    }
}
