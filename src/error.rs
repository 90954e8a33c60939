use std::fmt::{Debug, Display};

/// The single error type the tool reports to the user.
/// Constructed via [`crate::wb_err`] so that every error
/// carries the location in the code it originated from.
pub struct BlurError(pub String);

impl Display for BlurError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Debug for BlurError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("BlurError").field(&self.0).finish()
    }
}

impl std::error::Error for BlurError {}

#[macro_export]
macro_rules! wb_err {
    ($($arg:tt)+) => {
        BlurError(format!(
            "wonderblur: {} @ {}:{}:{}",
            format!($($arg)+),
            file!(),
            line!(),
            column!()
        ))
    };
}

#[macro_export]
macro_rules! wb_try {
    ($expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err(wb_err!("{}", err));
            }
        }
    };
}
