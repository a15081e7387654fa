use arch::{
    symbol::{PREDEFINED, VAR_BASE},
    word::ADDR_MAX,
};
use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Predefined,
    Label,
    Variable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub addr: u16,
    pub kind: SymbolKind,
    /// Line that defined the label or first referenced the variable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

/// Symbol table of one assembly run. Entries keep insertion order:
/// predefined symbols, then labels, then variables.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    symbols: IndexMap<String, Symbol>,
    next_var: u16,
}

impl SymbolTable {
    pub fn new() -> Self {
        let symbols = PREDEFINED
            .iter()
            .map(|(name, addr)| {
                let symbol = Symbol {
                    addr: *addr,
                    kind: SymbolKind::Predefined,
                    line: None,
                };
                (name.clone(), symbol)
            })
            .collect();
        SymbolTable {
            symbols,
            next_var: VAR_BASE,
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn get_val(&self, name: &str) -> Option<u16> {
        self.lookup(name).map(|symbol| symbol.addr)
    }

    /// Binds `name` to the ROM address `addr`. Labels are never re-bound, and
    /// predefined names cannot be shadowed.
    pub fn define_label(&mut self, name: &str, addr: u16, line: usize) -> Result<(), Error> {
        if let Some(prev) = self.symbols.get(name) {
            return Err(Error::DuplicateSymbol {
                name: name.to_string(),
                prev: prev.line,
            });
        }
        let symbol = Symbol {
            addr,
            kind: SymbolKind::Label,
            line: Some(line),
        };
        self.symbols.insert(name.to_string(), symbol);
        Ok(())
    }

    /// Returns the address bound to `name`, allocating the next free variable
    /// slot on first reference.
    pub fn resolve_variable(&mut self, name: &str, line: usize) -> Result<u16, Error> {
        if let Some(symbol) = self.symbols.get(name) {
            return Ok(symbol.addr);
        }
        if self.next_var > ADDR_MAX {
            return Err(Error::OutOfRange {
                value: self.next_var.to_string(),
                max: ADDR_MAX as u64,
            });
        }
        let addr = self.next_var;
        let symbol = Symbol {
            addr,
            kind: SymbolKind::Variable,
            line: Some(line),
        };
        self.symbols.insert(name.to_string(), symbol);
        self.next_var += 1;
        Ok(addr)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Symbol)> {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// First name bound to `addr` with the given kind.
    pub fn name_of(&self, addr: u16, kind: SymbolKind) -> Option<&str> {
        self.symbols
            .iter()
            .find(|(_, symbol)| symbol.addr == addr && symbol.kind == kind)
            .map(|(name, _)| name.as_str())
    }

    pub fn to_yaml(&self) -> Result<String, Error> {
        serde_yaml::to_string(&self.symbols).map_err(Error::SymbolExport)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifier syntax shared by labels and symbolic operands: letters, digits,
/// `_`, `.`, `$` and `:`, not starting with a digit.
pub fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(head) if !head.is_ascii_digit() && is_ident_char(head) => chars.all(is_ident_char),
        _ => false,
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '$' | ':')
}
