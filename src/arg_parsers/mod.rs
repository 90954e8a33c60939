//! Parsers for specific command-line argument formats.

mod filename;
pub use filename::*;
mod kernel_size;
pub use kernel_size::*;
pub mod numbers;

pub use crate::arg_parse_err::ArgParseErr;
