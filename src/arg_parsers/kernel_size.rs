use std::{ffi::OsStr, str::FromStr};

use crate::{arg_parse_err::ArgParseErr, arg_parsers::numbers::strip_and_parse_number};

/// The span of the convolution window: a validated positive odd integer.
/// Even sizes have no center pixel and are rejected before the
/// convolution engine is ever invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelSize(usize);

impl KernelSize {
    pub fn new(size: usize) -> Result<Self, ArgParseErr> {
        if size == 0 {
            return Err(ArgParseErr::with_msg("kernel size must be positive"));
        }
        if size % 2 == 0 {
            return Err(ArgParseErr::with_msg("kernel size must be odd"));
        }
        Ok(Self(size))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl FromStr for KernelSize {
    type Err = ArgParseErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(OsStr::new(s))
    }
}

impl TryFrom<&OsStr> for KernelSize {
    type Error = ArgParseErr;

    fn try_from(s: &OsStr) -> Result<Self, Self::Error> {
        let string: &str = s.try_into().map_err(|_e| ArgParseErr::new())?;
        let size = strip_and_parse_number::<usize>(string).map_err(|_e| ArgParseErr::new())?;
        Self::new(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_odd_sizes() {
        assert_eq!(KernelSize::from_str("1").unwrap().get(), 1);
        assert_eq!(KernelSize::from_str("5").unwrap().get(), 5);
        assert_eq!(KernelSize::from_str(" 31 ").unwrap().get(), 31);
    }

    #[test]
    fn rejects_even_sizes_with_a_message() {
        let err = KernelSize::from_str("4").unwrap_err();
        assert_eq!(err.message.as_deref(), Some("kernel size must be odd"));
    }

    #[test]
    fn rejects_zero_with_a_message() {
        let err = KernelSize::from_str("0").unwrap_err();
        assert_eq!(err.message.as_deref(), Some("kernel size must be positive"));
    }

    #[test]
    fn rejects_garbage() {
        assert!(KernelSize::from_str("").is_err());
        assert!(KernelSize::from_str("abc").is_err());
        assert!(KernelSize::from_str("-3").is_err());
        assert!(KernelSize::from_str("3.5").is_err());
    }
}
