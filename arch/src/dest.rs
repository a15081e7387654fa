use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Destination field of a C-instruction. Bits are `A D M`.
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
pub enum Dest {
    #[default]
    #[strum(to_string = "null")]
    NULL = 0b000,
    M = 0b001,
    D = 0b010,
    MD = 0b011,
    A = 0b100,
    AM = 0b101,
    AD = 0b110,
    AMD = 0b111,
}

impl Dest {
    pub const WIDTH: u32 = 3;

    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }
}

#[test]
fn test() {
    assert_eq!(Dest::parse("null"), Some(Dest::NULL));
    assert_eq!(Dest::parse("AMD"), Some(Dest::AMD));
    assert_eq!(Dest::parse("MA"), None);
    assert_eq!(u8::from(Dest::MD), 0b011);
    assert_eq!(Dest::default().to_string(), "null");
}
