mod platform;

use std::process::ExitCode;

use platform::cli::{parse_args, usage, Invocation};
use platform::terminal::TerminalError;

fn main() -> ExitCode {
    match parse_args(std::env::args()) {
        Invocation::Usage { program } => {
            eprintln!("{}", usage(&program));
            ExitCode::SUCCESS
        }
        Invocation::Browse { initial_query } => match platform::run_app(initial_query) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                // The terminal session is already restored at this point.
                match err.downcast_ref::<TerminalError>() {
                    Some(too_small @ TerminalError::TooSmall { .. }) => eprintln!("{too_small}"),
                    _ => eprintln!("sailboat: {err:#}"),
                }
                ExitCode::FAILURE
            }
        },
    }
}
