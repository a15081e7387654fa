use arch::word::{Word, ADDR_MAX};

use crate::{
    error::{Diag, Error},
    field::{encode_address, encode_computation},
    normalize::Line,
    symbol::{is_ident, SymbolTable},
};

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Resolves the operand of an A-instruction to the value it loads.
fn resolve_operand(operand: &str, line: usize, table: &mut SymbolTable) -> Result<i64, Error> {
    let out_of_range = || Error::OutOfRange {
        value: operand.to_string(),
        max: ADDR_MAX as u64,
    };
    if is_digits(operand) {
        // only overflow can fail here
        operand.parse::<i64>().map_err(|_| out_of_range())
    } else if operand.strip_prefix('-').is_some_and(is_digits) {
        // negative literals, `-0` included, are never encoded
        Err(out_of_range())
    } else if is_ident(operand) {
        table.resolve_variable(operand, line).map(i64::from)
    } else {
        Err(Error::InvalidOperand(operand.to_string()))
    }
}

pub fn encode_line(line: &Line, table: &mut SymbolTable) -> Result<Word, Error> {
    match line.code().strip_prefix('@') {
        Some(operand) => encode_address(resolve_operand(operand, line.no(), table)?),
        None => encode_computation(line.code()),
    }
}

/// Second pass: encodes the label-free instruction stream, allocating
/// variables on first reference.
///
/// All encoding errors are collected; on failure no words are returned.
pub fn encode(lines: &[Line], table: &mut SymbolTable) -> Result<Vec<Word>, Vec<Diag>> {
    let mut words = Vec::with_capacity(lines.len());
    let mut diags = vec![];

    for line in lines {
        match encode_line(line, table) {
            Ok(word) => words.push(word),
            Err(err) => diags.push(Diag::new(line, err)),
        }
    }

    if diags.is_empty() {
        Ok(words)
    } else {
        Err(diags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorKind, normalize::normalize};

    fn run(src: &str, table: &mut SymbolTable) -> Result<Vec<String>, Vec<Diag>> {
        encode(&normalize(src), table).map(|words| words.iter().map(|w| w.to_string()).collect())
    }

    #[test]
    fn literals() {
        let mut table = SymbolTable::new();
        let words = run("@0\n@21\n@32767\n", &mut table).unwrap();
        assert_eq!(
            words,
            vec!["0000000000000000", "0000000000010101", "0111111111111111"]
        );
        assert_eq!(table.len(), 23);
    }

    #[test]
    fn variables() {
        let mut table = SymbolTable::new();
        let words = run("@foo\n@bar\n@foo\n", &mut table).unwrap();
        assert_eq!(
            words,
            vec!["0000000000010000", "0000000000010001", "0000000000010000"]
        );
    }

    #[test]
    fn labels_are_not_reallocated() {
        let mut table = SymbolTable::new();
        table.define_label("LOOP", 7, 1).unwrap();
        let words = run("@LOOP\n@n\n", &mut table).unwrap();
        assert_eq!(words, vec!["0000000000000111", "0000000000010000"]);
    }

    #[test]
    fn operand_errors() {
        let mut table = SymbolTable::new();
        let src = "@-1\n@32768\n@99999999999999999999\n@1abc\n@\nD=D+A\n@x+1\n@-0\n@-\n";
        let diags = run(src, &mut table).unwrap_err();
        let found: Vec<(usize, ErrorKind)> =
            diags.iter().map(|d| (d.line, d.error.kind())).collect();
        assert_eq!(
            found,
            vec![
                (1, ErrorKind::OutOfRange),
                (2, ErrorKind::OutOfRange),
                (3, ErrorKind::OutOfRange),
                (4, ErrorKind::Syntax),
                (5, ErrorKind::Syntax),
                (7, ErrorKind::Syntax),
                (8, ErrorKind::OutOfRange),
                (9, ErrorKind::Syntax),
            ]
        );
        // nothing was allocated for malformed operands
        assert_eq!(table.len(), 23);
    }
}
