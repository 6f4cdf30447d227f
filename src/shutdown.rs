/*
 * Shutdown Module
 *
 * Termination signals (SIGINT, SIGTERM) only raise an atomic flag here.
 * The frame loop polls the flag and shuts the window down itself.
 */

use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
#[cfg(unix)]
use anyhow::bail;

static STOP_REQUESTED: AtomicBool = AtomicBool::new(false);

#[cfg_attr(not(unix), allow(dead_code))]
extern "C" fn request_stop(_signal: libc::c_int) {
    // Nothing but an atomic store is safe in here
    STOP_REQUESTED.store(true, Ordering::SeqCst);
}

// Register the stop handler for the termination signals
#[cfg(unix)]
pub fn install() -> Result<()> {
    let handler = request_stop as extern "C" fn(libc::c_int) as libc::sighandler_t;

    for signal in [libc::SIGINT, libc::SIGTERM] {
        // SAFETY: the handler only performs an atomic store
        let previous = unsafe { libc::signal(signal, handler) };
        if previous == libc::SIG_ERR {
            bail!("failed to register handler for signal {signal}");
        }
    }

    log::debug!("termination signal handlers installed");
    Ok(())
}

#[cfg(not(unix))]
pub fn install() -> Result<()> {
    log::warn!("termination signals are not handled on this platform");
    Ok(())
}

pub fn stop_flag() -> &'static AtomicBool {
    &STOP_REQUESTED
}
