//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = lectoria_cli::run() {
        eprintln!("lectoria: {err}");
        std::process::exit(1);
    }
}
