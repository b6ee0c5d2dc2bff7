//! Browser timers.

use core::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::dom;
use crate::error::Result;

/// A repeating `setInterval` timer, cleared when dropped.
pub struct Interval {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    /// Call `callback` every `every`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no window or the timer is refused.
    pub fn start(every: Duration, callback: impl FnMut() + 'static) -> Result<Self> {
        let callback = Closure::<dyn FnMut()>::new(callback);
        let handle = dom::window()?.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            millis(every),
        )?;
        Ok(Self {
            handle,
            _callback: callback,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.handle);
        }
    }
}

/// Call `callback` once after `delay`. There is no way to cancel it.
///
/// # Errors
///
/// Returns an error if there is no window or the timer is refused.
pub fn after(delay: Duration, callback: impl FnOnce() + 'static) -> Result<()> {
    let callback = Closure::once_into_js(callback);
    dom::window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        millis(delay),
    )?;
    Ok(())
}

/// Like [`after`], logging instead of returning a failure. For use inside
/// event handlers, where there is nobody to return to.
pub fn after_or_log(delay: Duration, callback: impl FnOnce() + 'static) {
    if let Err(err) = after(delay, callback) {
        tracing::warn!(error = %err, "failed to schedule timeout");
    }
}

fn millis(duration: Duration) -> i32 {
    i32::try_from(duration.as_millis()).unwrap_or(i32::MAX)
}

/// `Duration` from a config value in milliseconds.
#[must_use]
pub fn ms(value: u32) -> Duration {
    Duration::from_millis(u64::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ms_from_config() {
        assert_eq!(ms(5000), Duration::from_secs(5));
        assert_eq!(ms(0), Duration::ZERO);
    }

    #[test]
    fn test_millis_clamps_to_timer_range() {
        assert_eq!(millis(Duration::from_millis(300)), 300);
        assert_eq!(millis(Duration::from_secs(u64::MAX)), i32::MAX);
    }
}
