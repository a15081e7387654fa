use crate::{
    error::{Diag, Error},
    normalize::Line,
    symbol::{is_ident, SymbolTable},
};

/// Returns the label name if `code` is a label definition `(NAME)`.
pub fn parse_label(code: &str) -> Option<Result<&str, Error>> {
    let body = code.strip_prefix('(')?;
    let label = body
        .strip_suffix(')')
        .filter(|name| is_ident(name))
        .ok_or_else(|| Error::MalformedLabel(code.to_string()));
    Some(label)
}

/// First pass: binds every label to the ROM address of the instruction that
/// follows it and returns the remaining instructions in program order.
///
/// All label errors are collected; on failure nothing is returned.
pub fn resolve_labels(lines: Vec<Line>, table: &mut SymbolTable) -> Result<Vec<Line>, Vec<Diag>> {
    let mut pc: usize = 0;
    let mut code = vec![];
    let mut diags = vec![];

    for line in lines {
        let label = parse_label(line.code()).map(|res| res.map(str::to_string));
        match label {
            None => {
                pc += 1;
                code.push(line);
            }
            Some(Ok(name)) => {
                let defined = u16::try_from(pc)
                    .map_err(|_| Error::OutOfRange {
                        value: pc.to_string(),
                        max: u16::MAX as u64,
                    })
                    .and_then(|addr| table.define_label(&name, addr, line.no()));
                if let Err(err) = defined {
                    diags.push(Diag::new(&line, err));
                }
            }
            Some(Err(err)) => diags.push(Diag::new(&line, err)),
        }
    }

    if diags.is_empty() {
        Ok(code)
    } else {
        Err(diags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorKind, normalize::normalize, symbol::SymbolKind};

    #[test]
    fn label_syntax() {
        assert_eq!(parse_label("(LOOP)").unwrap().unwrap(), "LOOP");
        assert!(parse_label("@LOOP").is_none());
        assert!(parse_label("0;JMP").is_none());
        for bad in ["(LOOP", "()", "(1ST)", "(A B)", "(END))"] {
            assert!(matches!(
                parse_label(bad),
                Some(Err(Error::MalformedLabel(_)))
            ));
        }
    }

    #[test]
    fn labels_take_next_pc() {
        let src = "(START)\n@i\nM=1\n(LOOP)\n(ALIAS)\n@LOOP\n0;JMP\n(END)\n";
        let mut table = SymbolTable::new();
        let code = resolve_labels(normalize(src), &mut table).unwrap();

        let codes: Vec<&str> = code.iter().map(|line| line.code()).collect();
        assert_eq!(codes, vec!["@i", "M=1", "@LOOP", "0;JMP"]);
        assert_eq!(table.get_val("START"), Some(0));
        assert_eq!(table.get_val("LOOP"), Some(2));
        assert_eq!(table.get_val("ALIAS"), Some(2));
        assert_eq!(table.get_val("END"), Some(4));
        assert_eq!(table.lookup("LOOP").unwrap().kind, SymbolKind::Label);
        assert_eq!(table.lookup("LOOP").unwrap().line, Some(4));
        // variables are left for the second pass
        assert_eq!(table.lookup("i"), None);
    }

    #[test]
    fn collects_every_error() {
        let src = "(A)\n@0\n(A)\n(B\n(R1)\nD=M\n";
        let mut table = SymbolTable::new();
        let diags = resolve_labels(normalize(src), &mut table).unwrap_err();

        let found: Vec<(usize, ErrorKind)> =
            diags.iter().map(|d| (d.line, d.error.kind())).collect();
        assert_eq!(
            found,
            vec![
                (3, ErrorKind::DuplicateSymbol),
                (4, ErrorKind::Syntax),
                (5, ErrorKind::DuplicateSymbol),
            ]
        );
        assert_eq!(diags[1].raw, "(B");
        assert!(matches!(
            diags[0].error,
            Error::DuplicateSymbol { prev: Some(1), .. }
        ));
    }
}
