//! Two-pass assembler for the Hack computer.
//!
//! ```
//! let words = hackasm::assemble("(LOOP)\n@LOOP\n0;JMP\n").unwrap();
//! assert_eq!(words[0].to_string(), "0000000000000000");
//! assert_eq!(words[1].to_string(), "1110101010000111");
//! ```

pub mod encode;
pub mod error;
pub mod field;
pub mod label;
pub mod normalize;
pub mod symbol;
pub mod util;

pub use arch::word::Word;
pub use error::{Diag, Error, ErrorKind, Errors};
pub use field::{encode_computation, to_binary};
pub use normalize::{normalize, Line};
pub use symbol::{Symbol, SymbolKind, SymbolTable};

/// Assembles `source` into machine words, one per instruction.
pub fn assemble(source: &str) -> Result<Vec<Word>, Errors> {
    assemble_with_symbols(source).map(|(words, _)| words)
}

/// Like `assemble`, also returning the final symbol table.
///
/// Label errors stop the run before any instruction is encoded; within each
/// pass every error is collected.
pub fn assemble_with_symbols(source: &str) -> Result<(Vec<Word>, SymbolTable), Errors> {
    let lines = normalize(source);
    let mut symbols = SymbolTable::new();
    let code = label::resolve_labels(lines, &mut symbols).map_err(Errors)?;
    let words = encode::encode(&code, &mut symbols).map_err(Errors)?;
    Ok((words, symbols))
}
