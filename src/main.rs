use std::process::ExitCode;

fn main() -> ExitCode {
    match bar_graph::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_broken_pipe() => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(">> Error: {e}");
            ExitCode::FAILURE
        }
    }
}
