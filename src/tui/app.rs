//! Main TUI application.

use std::io;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::debug;

use crate::collector::MetricSource;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::DashboardState;

/// Main TUI application.
pub struct App {
    source: Box<dyn MetricSource>,
    state: DashboardState,
    should_quit: bool,
}

impl App {
    /// Creates a new App over the given metric source.
    ///
    /// The host-identity snapshot is taken here, once; a failed probe means
    /// the dashboard runs without the host block.
    pub fn new(mut source: Box<dyn MetricSource>) -> Self {
        let host = source.host_info();
        Self {
            source,
            state: DashboardState::new(host),
            should_quit: false,
        }
    }

    /// Runs the TUI application until quit.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Create event handler
        let events = EventHandler::new(tick_rate);

        // Initial sample: the first tick fires at loop entry, not after one
        // full interval.
        self.tick();

        // Main loop
        loop {
            terminal.draw(|frame| render(frame, &self.state))?;

            match events.next() {
                Ok(Event::Tick) => self.tick(),
                Ok(Event::Key(key)) => {
                    if handle_key(key) == KeyAction::Quit {
                        self.should_quit = true;
                    }
                }
                Ok(Event::Resize(..)) => {
                    // Static layout; the next draw repaints the whole frame.
                }
                Err(_) => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Samples the metric source and merges the result.
    ///
    /// A failed tick keeps the previous values; nothing is surfaced to the
    /// rendered view.
    fn tick(&mut self) {
        match self.source.sample() {
            Ok(sample) => self.state.apply(sample),
            Err(e) => debug!("sample failed, keeping previous values: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockSource;

    fn app_with(source: MockSource) -> App {
        App::new(Box::new(source))
    }

    #[test]
    fn test_new_captures_host_identity_once() {
        let app = app_with(MockSource::typical_host());
        assert_eq!(app.state.host.as_ref().unwrap().hostname, "testbox");

        let app = app_with(MockSource::new());
        assert!(app.state.host.is_none());
    }

    #[test]
    fn test_tick_merges_successful_sample() {
        let mut app = app_with(MockSource::new().push_sample(37.2, 81.0, 5.5));
        app.tick();
        assert_eq!(app.state.cpu_percent, 37.2);
        assert_eq!(app.state.mem_percent, 81.0);
        assert_eq!(app.state.disk_percent, 5.5);
    }

    #[test]
    fn test_failed_tick_retains_stale_values() {
        let mut app = app_with(
            MockSource::new()
                .push_sample(37.2, 81.0, 5.5)
                .push_failure(),
        );
        app.tick();
        app.tick();
        assert_eq!(app.state.cpu_percent, 37.2);
        assert_eq!(app.state.mem_percent, 81.0);
        assert_eq!(app.state.disk_percent, 5.5);
        assert!(app.state.last_error.is_none());
    }

    #[test]
    fn test_failed_first_tick_keeps_zero_defaults() {
        let mut app = app_with(MockSource::new().push_failure());
        app.tick();
        assert_eq!(app.state.cpu_percent, 0.0);
        assert_eq!(app.state.mem_percent, 0.0);
        assert_eq!(app.state.disk_percent, 0.0);
    }
}
