//! hosgrid main entrypoint.

use hosgrid::run;
use hosgrid::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
