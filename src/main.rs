//! rClinicBook main entrypoint.

use rclinicbook::run;
use rclinicbook::utils::logging::init_tracing;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
