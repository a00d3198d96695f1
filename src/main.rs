//! tablebuilder main entrypoint.

use tablebuilder::run;
use tablebuilder::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
