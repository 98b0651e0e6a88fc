//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = nutriscan_cli::run() {
        eprintln!("nutriscan: {err}");
        std::process::exit(1);
    }
}
