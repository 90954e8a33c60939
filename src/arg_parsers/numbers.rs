use std::str::FromStr;

/// Strips leading and trailing whitespace from the input and attempts
/// to parse the remaining string into the numeric type `T`.
pub fn strip_and_parse_number<T>(input: &str) -> Result<T, T::Err>
where
    T: FromStr,
    T::Err: std::error::Error,
{
    input.trim().parse::<T>()
}
