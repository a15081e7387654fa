use arch::{
    comp::Comp,
    dest::Dest,
    inst::Inst,
    jump::Jump,
    word::{Word, ADDR_WIDTH},
};
use color_print::cformat;

use crate::{
    error::Error,
    field::to_binary,
    label::parse_label,
    normalize::Line,
    symbol::{is_ident, SymbolKind, SymbolTable},
};

const FIELDS_WIDTH: usize = 19;

/// Splits a word into the bit groups of its instruction format.
pub fn split_fields(word: Word) -> Result<Vec<String>, Error> {
    let bin = word.0 as i64;
    if word.is_addr() {
        return Ok(vec![to_binary(0, 1)?, to_binary(bin, ADDR_WIDTH)?]);
    }
    let jump_shift = 0;
    let dest_shift = jump_shift + Jump::WIDTH;
    let comp_shift = dest_shift + Dest::WIDTH;
    let prefix_shift = comp_shift + Comp::WIDTH;
    let field = |shift: u32, width: u32| to_binary((bin >> shift) & ((1 << width) - 1), width);
    Ok(vec![
        field(prefix_shift, 3)?,
        field(comp_shift, Comp::WIDTH)?,
        field(dest_shift, Dest::WIDTH)?,
        field(jump_shift, Jump::WIDTH)?,
    ])
}

/// Prints every source line next to its ROM address and encoding.
pub fn print_dump(path: &str, source: &str, words: &[Word], symbols: &SymbolTable) {
    println!(
        "{}+------[{}]{}",
        "-".repeat(27),
        path,
        "-".repeat(45usize.saturating_sub(path.len()))
    );

    let mut pc = 0;
    for (idx, raw) in source.lines().enumerate() {
        let line_num = idx + 1;
        let comment = raw
            .split_once("//")
            .map(|(_, c)| cformat!("<dim>//{}</>", c))
            .unwrap_or_default();

        let body = match Line::new(idx, raw) {
            None => format!("{:27}| {:>4}: {}", "", line_num, comment),
            Some(line) => match parse_label(line.code()) {
                Some(_) => {
                    let label = cformat!("<g>{}</>", line.code());
                    format!("{:27}| {:>4}: {} {}", "", line_num, label, comment)
                }
                None => {
                    let word = words.get(pc).copied();
                    let addr = format!("{:04X}", pc);
                    pc += 1;
                    let (fields, inst) = match word {
                        Some(word) => (
                            split_fields(word)
                                .map(|f| f.join(" "))
                                .unwrap_or_default(),
                            describe(word, line.code(), symbols),
                        ),
                        None => (String::new(), cformat!("<r,s>!! {}</>", line.code())),
                    };
                    format!(
                        "[{}] {:<w$} | {:>4}:   {} {}",
                        addr,
                        fields,
                        line_num,
                        inst,
                        comment,
                        w = FIELDS_WIDTH
                    )
                }
            },
        };
        println!("{}", body);
    }
    println!("{}+{}", "-".repeat(27), "-".repeat(53));
}

/// Decoded instruction, with the symbol an A-instruction refers to.
fn describe(word: Word, code: &str, symbols: &SymbolTable) -> String {
    let inst = match Inst::from_word(word) {
        Some(inst) => inst,
        None => return cformat!("<r,s>?? {}</>", code),
    };
    match annotate(&inst, code, symbols) {
        Some(note) => cformat!("{} <g>({})</>", inst.cformat(), note),
        None => inst.cformat(),
    }
}

/// Symbolic operands show their kind; literal operands that hit a label
/// show the label name.
fn annotate(inst: &Inst, code: &str, symbols: &SymbolTable) -> Option<String> {
    let Inst::A(addr) = inst else {
        return None;
    };
    match code.strip_prefix('@').filter(|operand| is_ident(operand)) {
        Some(name) => symbols
            .lookup(name)
            .map(|symbol| format!("{}, {:?}", name, symbol.kind)),
        None => symbols
            .name_of(addr.get(), SymbolKind::Label)
            .map(|label| format!("= {}", label)),
    }
}

#[test]
fn test() {
    use crate::field::{encode_address, encode_computation};

    let word = encode_address(21).unwrap();
    assert_eq!(split_fields(word).unwrap(), vec!["0", "000000000010101"]);

    let word = encode_computation("D=D+1;JGT").unwrap();
    assert_eq!(
        split_fields(word).unwrap(),
        vec!["111", "0011111", "010", "001"]
    );
    assert_eq!(split_fields(word).unwrap().join(" ").len(), FIELDS_WIDTH);
}

#[test]
fn annotations() {
    use crate::field::encode_address;

    let mut symbols = SymbolTable::new();
    symbols.define_label("LOOP", 4, 1).unwrap();
    symbols.resolve_variable("i", 2).unwrap();

    let note = |value: i64, code: &str| {
        let inst = Inst::from_word(encode_address(value).unwrap()).unwrap();
        annotate(&inst, code, &symbols)
    };
    assert_eq!(note(4, "@LOOP").as_deref(), Some("LOOP, Label"));
    assert_eq!(note(16, "@i").as_deref(), Some("i, Variable"));
    assert_eq!(note(4, "@4").as_deref(), Some("= LOOP"));
    assert_eq!(note(5, "@5"), None);

    let inst = Inst::from_word(crate::field::encode_computation("0;JMP").unwrap()).unwrap();
    assert_eq!(annotate(&inst, "0;JMP", &symbols), None);
}
