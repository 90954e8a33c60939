use std::process::ExitCode;

use wonderblur::{args, error::BlurError, help};

fn main() -> ExitCode {
    help::maybe_print_help_and_exit("wb-blur");
    match real_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn real_main() -> Result<(), BlurError> {
    let arguments: Vec<_> = std::env::args_os().collect();
    let plan = args::parse_args(arguments)?;
    plan.execute()
}
