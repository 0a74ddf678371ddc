use std::io;

use ratatui::layout::Size;
use ratatui::{DefaultTerminal, Frame};
use sailboat_logging::sail_info;

use super::ui::constants::{MIN_HEIGHT, MIN_WIDTH};

#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("Make sure your terminal screen size is at least {min_width}x{min_height}.")]
    TooSmall { min_width: u16, min_height: u16 },
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

/// The one handle to the terminal: raw mode and the alternate screen are
/// entered on [`TerminalSession::start`] and always left again on drop, or on
/// SIGINT/SIGTERM from outside the process.
pub struct TerminalSession {
    terminal: DefaultTerminal,
    #[cfg(unix)]
    _signals: SignalGuard,
}

impl TerminalSession {
    pub fn start() -> Result<Self, TerminalError> {
        // Installed before raw mode so a failure leaves the terminal untouched.
        #[cfg(unix)]
        let signals = SignalGuard::new()?;
        let terminal = ratatui::try_init()?;
        let session = Self {
            terminal,
            #[cfg(unix)]
            _signals: signals,
        };
        let size = session.size()?;
        check_size(size)?;
        sail_info!("terminal session started at {}x{}", size.width, size.height);
        Ok(session)
    }

    pub fn size(&self) -> io::Result<Size> {
        self.terminal.size()
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> io::Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        ratatui::restore();
        sail_info!("terminal session restored");
    }
}

/// Restores the terminal and exits when a termination signal arrives.
#[cfg(unix)]
struct SignalGuard {
    handle: signal_hook::iterator::Handle,
    thread: Option<std::thread::JoinHandle<()>>,
}

#[cfg(unix)]
impl SignalGuard {
    fn new() -> io::Result<Self> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};

        let mut signals =
            signal_hook::iterator::Signals::new([SIGINT, SIGTERM]).map_err(io::Error::other)?;
        let handle = signals.handle();
        let thread = std::thread::spawn(move || {
            if let Some(signal) = signals.forever().next() {
                sailboat_logging::sail_warn!("signal {} received, restoring terminal", signal);
                ratatui::restore();
                std::process::exit(signal_exit_code(signal));
            }
        });
        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }
}

#[cfg(unix)]
impl Drop for SignalGuard {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Shell convention for a process ended by `signal`.
#[cfg(unix)]
fn signal_exit_code(signal: i32) -> i32 {
    128 + signal
}

pub(crate) fn check_size(size: Size) -> Result<(), TerminalError> {
    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        return Err(TerminalError::TooSmall {
            min_width: MIN_WIDTH,
            min_height: MIN_HEIGHT,
        });
    }
    Ok(())
}
