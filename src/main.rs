//! knitcount main entrypoint.

use knitcount::run;
use knitcount::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
