use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use pt_core::ports::LoadingIndicatorPort;

/// Prints a one-line loading notice on stderr while the launch sequence runs.
#[derive(Debug, Default)]
pub struct ConsoleLoadingIndicator {
    visible: AtomicBool,
}

impl ConsoleLoadingIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
}

impl LoadingIndicatorPort for ConsoleLoadingIndicator {
    fn show(&self) {
        if !self.visible.swap(true, Ordering::SeqCst) {
            let mut stderr = std::io::stderr();
            let _ = write!(stderr, "Loading your companions...");
            let _ = stderr.flush();
        }
    }

    fn clear(&self) {
        if self.visible.swap(false, Ordering::SeqCst) {
            let _ = writeln!(std::io::stderr(), "\r\x1b[2K");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_hides_indicator_even_when_called_twice() {
        let indicator = ConsoleLoadingIndicator::new();

        indicator.show();
        assert!(indicator.is_visible());
        indicator.clear();
        indicator.clear();

        assert!(!indicator.is_visible());
    }
}
