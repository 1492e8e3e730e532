//! Logging and debug utilities.
//!
//! This module provides functions for development and troubleshooting support.

use std::env;

/// Print debug messages to stderr if DEBUG environment variable is set.
///
/// This function checks for the presence of the `DEBUG` environment
/// variable and only outputs the message if it's set. This allows for
/// conditional debug output without any setup in normal runs.
///
/// # Arguments
///
/// * `message` - The debug message to print
///
/// # Examples
///
/// ```
/// # use kolorship::logs::debug;
/// debug("scheme name resolved");
/// debug(&format!("accent={:?}", Some("#3daee9")));
/// ```
pub fn debug(message: &str) {
    if env::var("DEBUG").is_ok() {
        eprintln!("{message}");
    }
}
