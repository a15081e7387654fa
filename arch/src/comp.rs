use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// ALU computation field of a C-instruction.
///
/// The discriminant is the 7-bit `a cccccc` code; the `a` bit selects `M`
/// instead of `A` as the second ALU operand.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    IntoPrimitive,
    TryFromPrimitive,
    EnumString,
    EnumIter,
    Display,
)]
#[repr(u8)]
pub enum Comp {
    #[strum(to_string = "0")]
    ZERO = 0b0101010,
    #[strum(to_string = "1")]
    ONE = 0b0111111,
    #[strum(to_string = "-1")]
    NEG1 = 0b0111010,
    #[strum(to_string = "D")]
    D = 0b0001100,
    #[strum(to_string = "A")]
    A = 0b0110000,
    #[strum(to_string = "!D")]
    NOTD = 0b0001101,
    #[strum(to_string = "!A")]
    NOTA = 0b0110001,
    #[strum(to_string = "-D")]
    NEGD = 0b0001111,
    #[strum(to_string = "-A")]
    NEGA = 0b0110011,
    #[strum(to_string = "D+1")]
    INCD = 0b0011111,
    #[strum(to_string = "A+1")]
    INCA = 0b0110111,
    #[strum(to_string = "D-1")]
    DECD = 0b0001110,
    #[strum(to_string = "A-1")]
    DECA = 0b0110010,
    #[strum(to_string = "D+A")]
    ADDA = 0b0000010,
    #[strum(to_string = "D-A")]
    SUBA = 0b0010011,
    #[strum(to_string = "A-D")]
    RSUBA = 0b0000111,
    #[strum(to_string = "D&A")]
    ANDA = 0b0000000,
    #[strum(to_string = "D|A")]
    ORA = 0b0010101,

    #[strum(to_string = "M")]
    M = 0b1110000,
    #[strum(to_string = "!M")]
    NOTM = 0b1110001,
    #[strum(to_string = "-M")]
    NEGM = 0b1110011,
    #[strum(to_string = "M+1")]
    INCM = 0b1110111,
    #[strum(to_string = "M-1")]
    DECM = 0b1110010,
    #[strum(to_string = "D+M")]
    ADDM = 0b1000010,
    #[strum(to_string = "D-M")]
    SUBM = 0b1010011,
    #[strum(to_string = "M-D")]
    RSUBM = 0b1000111,
    #[strum(to_string = "D&M")]
    ANDM = 0b1000000,
    #[strum(to_string = "D|M")]
    ORM = 0b1010101,
}

impl Comp {
    pub const WIDTH: u32 = 7;

    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }

    /// Whether the computation reads memory (`a` bit set).
    pub fn reads_memory(&self) -> bool {
        u8::from(*self) & 0b1000000 != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn table_is_complete() {
        assert_eq!(Comp::iter().count(), 28);
    }

    #[test]
    fn parse() {
        assert_eq!(Comp::parse("D+1"), Some(Comp::INCD));
        assert_eq!(Comp::parse("0"), Some(Comp::ZERO));
        assert_eq!(Comp::parse("D|M"), Some(Comp::ORM));
        assert_eq!(Comp::parse("1+D"), None);
        assert_eq!(Comp::parse("d+1"), None);
        assert_eq!(Comp::parse(""), None);
    }

    #[test]
    fn display_matches_mnemonic() {
        for comp in Comp::iter() {
            assert_eq!(Comp::parse(&comp.to_string()), Some(comp));
        }
    }

    #[test]
    fn memory_bit() {
        assert!(Comp::M.reads_memory());
        assert!(Comp::ANDM.reads_memory());
        assert!(!Comp::A.reads_memory());
        assert!(!Comp::ZERO.reads_memory());
    }
}
