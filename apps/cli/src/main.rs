use std::process::ExitCode;

fn main() -> ExitCode {
    warung_cli::run()
}
