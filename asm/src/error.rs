use color_print::ceprintln;
use thiserror::Error;

use crate::normalize::Line;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown dest: `{0}`")]
    UnknownDest(String),

    #[error("Unknown comp: `{0}`")]
    UnknownComp(String),

    #[error("Unknown jump: `{0}`")]
    UnknownJump(String),

    #[error("Malformed label: `{0}`")]
    MalformedLabel(String),

    #[error("Invalid address operand: `{0}`")]
    InvalidOperand(String),

    #[error("Value out of range: `{value}` (expected 0 to {max})")]
    OutOfRange { value: String, max: u64 },

    #[error("Field width out of range: {0} (expected 1 to 16)")]
    InvalidWidth(u32),

    #[error("Re-defined symbol: `{name}`")]
    DuplicateSymbol { name: String, prev: Option<usize> },

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read file: {0}")]
    FileRead(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to export symbols")]
    SymbolExport(#[source] serde_yaml::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    OutOfRange,
    DuplicateSymbol,
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnknownDest(_)
            | Error::UnknownComp(_)
            | Error::UnknownJump(_)
            | Error::MalformedLabel(_)
            | Error::InvalidOperand(_) => ErrorKind::Syntax,
            Error::OutOfRange { .. } | Error::InvalidWidth(_) => ErrorKind::OutOfRange,
            Error::DuplicateSymbol { .. } => ErrorKind::DuplicateSymbol,
            Error::FileOpen(..)
            | Error::FileRead(..)
            | Error::FileCreate(..)
            | Error::FileWrite(..)
            | Error::SymbolExport(_) => ErrorKind::Io,
        }
    }
}

/// An error tied to the source line that caused it.
#[derive(Error, Debug)]
#[error("line {line}: {error}")]
pub struct Diag {
    /// 1-based line number in the source text
    pub line: usize,
    pub raw: String,
    #[source]
    pub error: Error,
}

impl Diag {
    pub fn new(line: &Line, error: Error) -> Self {
        Diag {
            line: line.no(),
            raw: line.raw().to_string(),
            error,
        }
    }

    /// Print error with the file location and line content
    pub fn print(&self, file: &str) {
        ceprintln!("<red,bold>error</>: {}", self.error);
        ceprintln!("     <blue>--></> <underline>{}:{}</>", file, self.line);
        ceprintln!("      <blue>|</>");
        ceprintln!(" <blue>{:>4} |</> {}", self.line, self.raw);
        ceprintln!("      <blue>|</>");
        if let Error::DuplicateSymbol {
            name,
            prev: Some(prev),
        } = &self.error
        {
            ceprintln!(
                "<green,bold>note</>: `{}` is already defined at <underline>{}:{}</>",
                name,
                file,
                prev
            );
        }
    }
}

/// Every diagnostic collected by one failed assembly run, in source order.
#[derive(Error, Debug)]
#[error("could not assemble due to {} previous error(s)", .0.len())]
pub struct Errors(pub Vec<Diag>);

impl Errors {
    pub fn iter(&self) -> impl Iterator<Item = &Diag> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
