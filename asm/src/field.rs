use arch::{
    comp::Comp,
    dest::Dest,
    inst::Inst,
    jump::Jump,
    word::{Addr, Word, ADDR_MAX, WORD_WIDTH},
};

use crate::error::Error;

fn check_range(n: i64, width: u32) -> Result<u64, Error> {
    let max = (1u64 << width) - 1;
    match u64::try_from(n) {
        Ok(v) if v <= max => Ok(v),
        _ => Err(Error::OutOfRange {
            value: n.to_string(),
            max,
        }),
    }
}

/// Formats `n` as exactly `width` binary digits, most significant first.
/// Values that do not fit are rejected, never truncated.
/// `width` must be between 1 and `WORD_WIDTH`.
pub fn to_binary(n: i64, width: u32) -> Result<String, Error> {
    if !(1..=WORD_WIDTH).contains(&width) {
        return Err(Error::InvalidWidth(width));
    }
    let v = check_range(n, width)?;
    Ok(format!("{:0width$b}", v, width = width as usize))
}

/// Builds the A-instruction word loading `n`.
pub fn encode_address(n: i64) -> Result<Word, Error> {
    let addr = u16::try_from(n)
        .ok()
        .and_then(Addr::new)
        .ok_or_else(|| Error::OutOfRange {
            value: n.to_string(),
            max: ADDR_MAX as u64,
        })?;
    Ok(Inst::A(addr).to_word())
}

/// Splits `[dest=]comp[;jump]` into its fields.
pub fn parse_computation(mnemonic: &str) -> Result<Inst, Error> {
    let (rest, jump) = match mnemonic.split_once(';') {
        Some((rest, jump)) => (rest, Some(jump)),
        None => (mnemonic, None),
    };
    let (dest, comp) = match rest.split_once('=') {
        Some((dest, comp)) => (Some(dest), comp),
        None => (None, rest),
    };

    let dest = match dest {
        Some(tok) => Dest::parse(tok).ok_or_else(|| Error::UnknownDest(tok.to_string()))?,
        None => Dest::NULL,
    };
    let comp = Comp::parse(comp).ok_or_else(|| Error::UnknownComp(comp.to_string()))?;
    let jump = match jump {
        Some(tok) => Jump::parse(tok).ok_or_else(|| Error::UnknownJump(tok.to_string()))?,
        None => Jump::NULL,
    };

    Ok(Inst::C(dest, comp, jump))
}

pub fn encode_computation(mnemonic: &str) -> Result<Word, Error> {
    parse_computation(mnemonic).map(|inst| inst.to_word())
}
