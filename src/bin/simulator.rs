//! Line-protocol driver for the keyboard session, for scripting and tests.
//!
//! Commands (one per line on stdin):
//!   INPUT <text>   replace the buffer (trailing spaces are kept)
//!   KEY <char>     type one character
//!   BACKSPACE      delete the last character
//!   SELECT <n>     accept suggestion n (1-based)
//!   SUBMIT         send the buffer to the transcript
//!   EXIT           quit

use clap::Parser;
use smart_type_core::cli::{init_logging, run_protocol, EngineArgs};
use std::io;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "simulator", about = "Drive a keyboard session over stdin/stdout")]
struct SimulatorArgs {
    #[command(flatten)]
    engine: EngineArgs,
}

fn main() {
    let args = SimulatorArgs::parse();
    init_logging(args.engine.verbosity());

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: &SimulatorArgs) -> smart_type_core::Result<()> {
    let mut session = args.engine.build_session()?;
    run_protocol(&mut session, io::stdin().lock(), io::stdout().lock())
}
