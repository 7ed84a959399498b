//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use promenade_cli::CliError;

fn main() {
    match promenade_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            report(&err);
            std::process::exit(err.exit_code());
        }
    }
}

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn report(err: &CliError) {
    eprintln!("promenade: {err}");
}
