use std::io;
use std::process::ExitCode;

use paddle_tables::listing::{emit_listing, exit_status};
use paddle_tables::utils::log::init_logger;

fn main() -> ExitCode {
    init_logger();

    let stdout = io::stdout();
    let outcome = emit_listing(&mut stdout.lock());
    ExitCode::from(exit_status(&outcome))
}
