//! tallysheet main entrypoint.

use tallysheet::run;
use tallysheet::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
