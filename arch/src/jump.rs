use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Jump condition of a C-instruction, tested against the ALU output.
/// Bits are `lt eq gt`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Default,
    IntoPrimitive,
    TryFromPrimitive,
    EnumString,
    EnumIter,
    Display,
)]
#[repr(u8)]
pub enum Jump {
    #[default]
    #[strum(to_string = "null")]
    NULL = 0b000,
    JGT = 0b001,
    JEQ = 0b010,
    JGE = 0b011,
    JLT = 0b100,
    JNE = 0b101,
    JLE = 0b110,
    JMP = 0b111,
}

impl Jump {
    pub const WIDTH: u32 = 3;

    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }
}

#[test]
fn test() {
    assert_eq!(Jump::parse("JMP"), Some(Jump::JMP));
    assert_eq!(Jump::parse("null"), Some(Jump::NULL));
    assert_eq!(Jump::parse("jmp"), None);
    assert_eq!(u8::from(Jump::JGT), 0b001);
    assert_eq!(u8::from(Jump::JLE), 0b110);
}
