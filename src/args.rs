//! Command-line argument parsing.
//!
//! The arguments are imagemagick-style and unconventional:
//! they are prefixed by -, not --. So we need to hand-roll our own parser.

use std::ffi::{OsStr, OsString};

use strum::{EnumString, IntoStaticStr, VariantArray};

use crate::{
    arg_parsers::{parse_output_filename, InputFileArg, KernelSize},
    error::BlurError,
    operations::Operation,
    plan::ExecutionPlan,
    wb_err,
};

#[derive(EnumString, IntoStaticStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum Arg {
    Blur,
    GaussianBlur,
}

impl Arg {
    pub fn needs_value(&self) -> bool {
        match self {
            Arg::Blur => true,
            Arg::GaussianBlur => true,
        }
    }

    pub fn to_operation(&self, value: Option<&OsStr>) -> Result<Operation, BlurError> {
        let arg_string: &'static str = self.into();
        if self.needs_value() != value.is_some() {
            return Err(wb_err!("argument requires a value: {arg_string}"));
        };
        let value = value.unwrap_or_default();

        let parsed = match self {
            Arg::Blur => KernelSize::try_from(value).map(Operation::Blur),
            Arg::GaussianBlur => KernelSize::try_from(value).map(Operation::GaussianBlur),
        };
        parsed.map_err(|arg_err| wb_err!("{}", arg_err.display_with_arg(arg_string, value)))
    }

    pub fn help_text(&self) -> &'static str {
        match self {
            Arg::Blur => "blur the image with a fast two-pass separable gaussian",
            Arg::GaussianBlur => "blur the image with a full 2-D gaussian convolution",
        }
    }
}

pub fn parse_args(mut args: Vec<OsString>) -> Result<ExecutionPlan, BlurError> {
    // maybe_print_help_and_exit should take care of it, but this won't hurt
    if args.len() <= 1 {
        return Err(wb_err!("no command-line arguments provided"));
    }

    // The output filename comes last; filenames that look like
    // arguments are rejected rather than silently consumed.
    let output_filename = args.pop().unwrap();
    if starts_with_sign(&output_filename) {
        return Err(wb_err!(
            "missing an image filename `{}'",
            output_filename.to_string_lossy()
        ));
    }

    let mut plan = ExecutionPlan::default();
    let (location, format) = parse_output_filename(&output_filename);
    plan.set_output_file(location, format);

    let mut iter = args.into_iter().skip(1); // skip argv[0], path to our binary
    while let Some(raw_arg) = iter.next() {
        if raw_arg.as_encoded_bytes() == [b'-'] {
            // bare `-` is stdin
            plan.add_input_file(InputFileArg::parse(&raw_arg));
        } else if starts_with_sign(&raw_arg) {
            // A file named "-foobar.jpg" will be parsed as an option.
            // There is no -- convention to separate options and filenames.
            let (_sign, string_arg) = sign_and_arg_name(raw_arg)?;
            let arg = Arg::try_from(string_arg.as_str())
                .map_err(|_| wb_err!("unrecognized option `{}'", string_arg))?;
            let operation = if arg.needs_value() {
                let value = iter.next();
                arg.to_operation(value.as_deref())?
            } else {
                arg.to_operation(None)?
            };
            plan.add_operation(operation);
        } else {
            plan.add_input_file(InputFileArg::parse(&raw_arg));
        }
    }

    Ok(plan)
}

/// Checks if the string starts with a `-` or a `+`
fn starts_with_sign(arg: &OsStr) -> bool {
    let first_byte = arg.as_encoded_bytes().first();
    first_byte == Some(&b'-')
        || first_byte == Some(&b'+')
    // Anything starting with two dashes instead of one is treated as filename
    && arg.as_encoded_bytes().get(1) != Some(&b'-')
}

/// Splits the string into a sign (- or +) and argument name
fn sign_and_arg_name(raw_arg: OsString) -> Result<(u8, String), BlurError> {
    let mut string = raw_arg
        .into_string()
        .map_err(|s| wb_err!("unrecognized option `{}'", s.to_string_lossy()))?;
    let sign = string.remove(0);
    assert!(sign == '-' || sign == '+');
    Ok((sign as u8, string))
}
