//! Terminal setup and teardown
//!
//! Initializes and restores the terminal state, including a panic hook
//! that restores the terminal on crash, and runs the demo event loop.

use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::store::CategoryQuery;

use super::app::App;
use super::dialogs::cover::CoverProps;
use super::event::{next_event, Event};

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the cover dialog demo until the dialog flow finishes.
///
/// Opens the cover dialog over the given store and pumps events; the demo
/// ends when the stack empties or the user quits.
pub fn run_demo(store: &dyn CategoryQuery, props: CoverProps) -> Result<()> {
    let mut terminal = init_terminal()?;

    let mut app = App::new(store);
    app.open_cover(props);

    loop {
        terminal.draw(|frame| app.render(frame))?;

        match next_event(TICK_RATE)? {
            Event::Key(key) => app.on_key(key),
            Event::Resize(_, _) => {
                // Terminal redraws on the next loop iteration
            }
            Event::Tick => {}
        }

        // The demo hosts a single dialog flow
        if app.modals.is_empty() {
            app.quit();
        }
        if app.should_quit {
            break;
        }
    }

    restore_terminal()?;
    Ok(())
}
