//! `SIGINT`/`SIGTERM` handling (§5, §6): immediate process exit, no
//! graceful cancellation. Library crates never touch signals; this is the
//! only place in the workspace that does.

use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook::iterator::Signals;
use std::thread;

/// Exit code conventionally used for a process killed by a signal:
/// `128 + signal number`.
const SIGINT_EXIT: i32 = 130;
const SIGTERM_EXIT: i32 = 143;

/// Spawn a background thread that exits the process the moment `SIGINT` or
/// `SIGTERM` arrives.
pub fn install() {
    let mut signals = match Signals::new([SIGINT, SIGTERM]) {
        Ok(s) => s,
        Err(err) => {
            log::warn!("failed to install signal handler: {err}");
            return;
        }
    };
    thread::spawn(move || {
        if let Some(signal) = signals.forever().next() {
            match signal {
                SIGINT => std::process::exit(SIGINT_EXIT),
                SIGTERM => std::process::exit(SIGTERM_EXIT),
                _ => std::process::exit(1),
            }
        }
    });
}
