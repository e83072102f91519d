//! Terminal setup and teardown.

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error};

/// Terminal drawing to stdout.
pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// Terminal that is put back to normal when dropped.
pub type TerminalGuard = RestoreGuard<Term, fn(&mut Term) -> io::Result<()>>;

/// Owns a value and runs `restore` on it when dropped, including while
/// unwinding from a panic. A failed restore is logged.
pub struct RestoreGuard<T, F>
where
    F: FnMut(&mut T) -> io::Result<()>,
{
    value: T,
    restore: F,
}

impl<T, F> RestoreGuard<T, F>
where
    F: FnMut(&mut T) -> io::Result<()>,
{
    /// Wraps `value`; `restore` runs exactly once, on drop.
    pub fn new(value: T, restore: F) -> Self {
        Self { value, restore }
    }

    /// Mutable access to the guarded value.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T, F> Drop for RestoreGuard<T, F>
where
    F: FnMut(&mut T) -> io::Result<()>,
{
    fn drop(&mut self) {
        match (self.restore)(&mut self.value) {
            Ok(()) => debug!("Terminal restored"),
            Err(e) => error!(error = %e, "Failed to restore terminal"),
        }
    }
}

/// Switches to raw mode, the alternate screen and mouse capture.
pub fn enter() -> io::Result<TerminalGuard> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e);
    }
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(RestoreGuard::new(terminal, restore as fn(&mut Term) -> io::Result<()>))
}

fn restore(terminal: &mut Term) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[test]
    fn test_restore_runs_once_on_drop() {
        let calls = Cell::new(0);
        {
            let mut guard = RestoreGuard::new(1u8, |value: &mut u8| {
                calls.set(calls.get() + 1);
                assert_eq!(*value, 2);
                Ok(())
            });
            *guard.get_mut() += 1;
            assert_eq!(calls.get(), 0);
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_restore_runs_when_loop_panics() {
        let restored = Cell::new(false);
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _guard = RestoreGuard::new((), |_: &mut ()| {
                restored.set(true);
                Ok(())
            });
            panic!("draw failed");
        }));
        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_failed_restore_does_not_panic() {
        let guard = RestoreGuard::new((), |_: &mut ()| Err(io::Error::other("no tty")));
        drop(guard);
    }
}
