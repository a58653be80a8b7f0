//! Binary shim; the application lives in the library so tests can
//! drive it end to end.

use kiosko_terminal::error::TerminalError;

fn main() -> Result<(), TerminalError> {
    kiosko_terminal::run()
}
