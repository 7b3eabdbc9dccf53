mod cli;
mod modes;

use plango_core::ValidationError;

fn main() {
    if let Err(e) = cli::run() {
        // `check` already printed the notice for a rejected attempt.
        if e.downcast_ref::<ValidationError>().is_some() {
            std::process::exit(1);
        }
        eprintln!("{e:#}"); // pretty anyhow chain
        std::process::exit(1);
    }
}
