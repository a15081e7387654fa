use serde::{Deserialize, Serialize};
use std::fmt;

pub const WORD_WIDTH: u32 = 16;

/// Width of the value field of an A-instruction.
pub const ADDR_WIDTH: u32 = 15;
pub const ADDR_MAX: u16 = (1 << ADDR_WIDTH) - 1;

/// One 16-bit machine word in ROM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word(pub u16);

impl Word {
    /// A-instructions have the most significant bit cleared.
    pub fn is_addr(&self) -> bool {
        self.0 >> (WORD_WIDTH - 1) == 0
    }
}

/// Value field of an A-instruction, at most `ADDR_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Addr(u16);

impl Addr {
    pub fn new(value: u16) -> Option<Self> {
        (value <= ADDR_MAX).then_some(Addr(value))
    }

    pub fn get(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.0, width = WORD_WIDTH as usize)
    }
}

#[test]
fn test() {
    assert_eq!(Word(0).to_string(), "0000000000000000");
    assert_eq!(Word(0xE7D1).to_string(), "1110011111010001");
    assert!(Word(ADDR_MAX).is_addr());
    assert!(!Word(0x8000).is_addr());

    assert_eq!(Addr::new(ADDR_MAX).map(|a| a.get()), Some(32767));
    assert_eq!(Addr::new(ADDR_MAX + 1), None);
    assert_eq!(Addr::new(u16::MAX), None);
}
