use crate::{
    comp::Comp,
    dest::Dest,
    jump::Jump,
    word::{Addr, Word},
};

use color_print::cformat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inst {
    /// `@value`, loads a 15-bit constant or address into A.
    A(Addr),
    /// `dest=comp;jump`
    C(Dest, Comp, Jump),
}

const C_PREFIX: u16 = 0b111;

impl Inst {
    pub fn to_word(&self) -> Word {
        match self {
            Inst::A(addr) => Word(addr.get()),
            Inst::C(dest, comp, jump) => {
                let comp: u8 = (*comp).into();
                let dest: u8 = (*dest).into();
                let jump: u8 = (*jump).into();
                Word(
                    C_PREFIX << (Comp::WIDTH + Dest::WIDTH + Jump::WIDTH)
                        | (comp as u16) << (Dest::WIDTH + Jump::WIDTH)
                        | (dest as u16) << Jump::WIDTH
                        | jump as u16,
                )
            }
        }
    }

    /// Decodes a word produced by `to_word`. Returns `None` for C-instructions
    /// whose prefix or comp bits are not part of the instruction set.
    pub fn from_word(word: Word) -> Option<Inst> {
        let bin = word.0;
        if word.is_addr() {
            return Addr::new(bin).map(Inst::A);
        }
        if bin >> (Comp::WIDTH + Dest::WIDTH + Jump::WIDTH) != C_PREFIX {
            return None;
        }
        let comp = (bin >> (Dest::WIDTH + Jump::WIDTH)) & 0b1111111;
        let dest = (bin >> Jump::WIDTH) & 0b111;
        let jump = bin & 0b111;
        Some(Inst::C(
            Dest::try_from(dest as u8).ok()?,
            Comp::try_from(comp as u8).ok()?,
            Jump::try_from(jump as u8).ok()?,
        ))
    }
}

impl Inst {
    pub fn cformat(&self) -> String {
        match self {
            Inst::A(value) => cformat!("<r>@</><y>{}</>", value),
            Inst::C(dest, comp, jump) => {
                // operands read from memory are underlined
                let comp = if comp.reads_memory() {
                    cformat!("<c,u>{}</>", comp)
                } else {
                    cformat!("<c>{}</>", comp)
                };
                let dest = match dest {
                    Dest::NULL => String::new(),
                    dest => cformat!("<b>{}</>=", dest),
                };
                let jump = match jump {
                    Jump::NULL => String::new(),
                    jump => cformat!(";<r>{}</>", jump),
                };
                format!("{}{}{}", dest, comp, jump)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::ADDR_MAX;

    fn addr(value: u16) -> Inst {
        Inst::A(Addr::new(value).unwrap())
    }

    macro_rules! test_inst {
        ($($name:ident: $inst:expr => $bin:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let inst = $inst;
                    let word = inst.to_word();
                    assert_eq!(word.to_string(), $bin);
                    assert_eq!(Inst::from_word(word), Some(inst));
                }
            )*
        }
    }

    test_inst! {
        test_addr_zero: addr(0) => "0000000000000000",
        test_addr_max: addr(ADDR_MAX) => "0111111111111111",
        test_inc_jgt: Inst::C(Dest::D, Comp::INCD, Jump::JGT) => "1110011111010001",
        test_jmp: Inst::C(Dest::NULL, Comp::ZERO, Jump::JMP) => "1110101010000111",
        test_mem: Inst::C(Dest::AMD, Comp::DECM, Jump::NULL) => "1111110010111000",
    }

    #[test]
    fn undefined_comp() {
        // 111 0000001 000 000: comp code 0000001 is unassigned
        assert_eq!(Inst::from_word(Word(0b1110000001000000)), None);
        // C-instruction with the unused bits cleared
        assert_eq!(Inst::from_word(Word(0b1000101010000111)), None);
    }

    #[test]
    fn memory_operand_is_marked() {
        let reg = Inst::C(Dest::D, Comp::A, Jump::NULL).cformat();
        let mem = Inst::C(Dest::D, Comp::M, Jump::NULL).cformat();
        assert_ne!(reg.replace('A', "M"), mem);
        assert!(reg.contains('A'));
        assert!(mem.contains('M'));
    }
}
