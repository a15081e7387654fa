//! Hack instruction set: the closed field tables, the instruction model and
//! the machine word.

pub mod comp;
pub mod dest;
pub mod inst;
pub mod jump;
pub mod symbol;
pub mod word;
