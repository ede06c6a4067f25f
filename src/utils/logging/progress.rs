//! Spinners for the command line tool
//!
//! Reading and writing a table has no meaningful length, so only indicatif
//! spinners are used.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Template used for all spinners
pub const SPINNER_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] {msg}";

const TICK: Duration = Duration::from_millis(100);

/// Create a ticking spinner
#[must_use]
pub fn create_spinner(message: Option<&str>) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template(SPINNER_TEMPLATE) {
        spinner.set_style(style);
    }
    if let Some(message) = message {
        spinner.set_message(message.to_string());
    }
    spinner.enable_steady_tick(TICK);
    spinner
}

/// Run `work` behind a spinner
///
/// On success the spinner stays on screen with `done`; on failure it is
/// cleared so the error message stands alone.
pub fn with_spinner<T, E>(
    message: &str,
    done: &str,
    work: impl FnOnce() -> Result<T, E>,
) -> Result<T, E> {
    let spinner = create_spinner(Some(message));
    let result = work();
    match &result {
        Ok(_) => spinner.finish_with_message(done.to_string()),
        Err(_) => spinner.finish_and_clear(),
    }
    result
}
