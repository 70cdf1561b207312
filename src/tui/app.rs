//! Application state for the demo host
//!
//! The App wires the injected category store to the modal stack and draws
//! the background chrome the dialogs float over.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tracing::warn;

use crate::store::CategoryQuery;

use super::dialogs::cover::CoverProps;
use super::modal::{ModalRequest, ModalStack};

/// Host state for the dialog demo
pub struct App<'a> {
    /// The injected category read capability
    pub store: &'a dyn CategoryQuery,

    /// Mounted dialogs
    pub modals: ModalStack,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message shown at the bottom
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App over a category store
    pub fn new(store: &'a dyn CategoryQuery) -> Self {
        Self {
            store,
            modals: ModalStack::new(),
            should_quit: false,
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Open the cover dialog over a fresh snapshot of the store's groups.
    ///
    /// A failing store degrades to an empty selectable set plus a status
    /// message; the dialog still opens.
    pub fn open_cover(&mut self, props: CoverProps) {
        let groups = match self.store.grouped() {
            Ok(groups) => groups,
            Err(err) => {
                warn!(%err, "category store unavailable");
                self.set_status(format!("Could not load categories: {err}"));
                Vec::new()
            }
        };
        self.modals.open(ModalRequest::Cover { props, groups });
    }

    /// Handle a key event, giving mounted dialogs first refusal
    pub fn on_key(&mut self, key: KeyEvent) {
        if self.modals.handle_key(key) {
            return;
        }
        if let KeyCode::Char('q') | KeyCode::Esc = key.code {
            self.quit();
        }
    }

    /// Render the background chrome and every mounted dialog
    pub fn render(&self, frame: &mut Frame) {
        let [body, status_bar] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

        let header = Paragraph::new(Line::from(Span::styled(
            " cover-modal demo ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(header, body);

        if let Some(ref message) = self.status_message {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    message.as_str(),
                    Style::default().fg(Color::Yellow),
                ))),
                status_bar,
            );
        }

        self.modals.render(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoverError, CoverResult};
    use crate::models::CategoryGroup;
    use crate::store::InMemoryCategories;
    use crate::tui::modal::ActiveModal;
    use ratatui::{backend::TestBackend, Terminal};

    struct BrokenStore;

    impl CategoryQuery for BrokenStore {
        fn grouped(&self) -> CoverResult<Vec<CategoryGroup>> {
            Err(CoverError::Store("backing file missing".into()))
        }
    }

    #[test]
    fn test_open_cover_mounts_dialog() {
        let store = InMemoryCategories::sample();
        let mut app = App::new(&store);
        app.open_cover(CoverProps::new("Cover Overspending", "2024-05"));
        assert_eq!(app.modals.len(), 1);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_broken_store_degrades_to_empty_set() {
        let store = BrokenStore;
        let mut app = App::new(&store);
        app.open_cover(CoverProps::new("Cover Overspending", "2024-05"));

        assert_eq!(app.modals.len(), 1);
        assert!(app.status_message.is_some());
        match app.modals.top().unwrap() {
            ActiveModal::Cover(dialog) => assert!(dialog.candidates().is_empty()),
            _ => panic!("expected the cover dialog on top"),
        }
    }

    #[test]
    fn test_q_quits_only_when_no_dialog_consumes() {
        let store = InMemoryCategories::sample();
        let mut app = App::new(&store);
        app.open_cover(CoverProps::new("Cover Overspending", "2024-05"));

        // 'q' is not a dialog key; the cover dialog ignores it, so it
        // falls through to the host
        app.on_key(KeyEvent::new(
            KeyCode::Char('q'),
            crossterm::event::KeyModifiers::NONE,
        ));
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_smoke() {
        let store = InMemoryCategories::sample();
        let mut app = App::new(&store);
        app.open_cover(CoverProps::new("Cover Overspending", "2024-05"));

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Cover Overspending"));
        assert!(text.contains("Cover from category:"));
        assert!(text.contains("Transfer"));
    }

    #[test]
    fn test_render_shows_picker_above_cover() {
        let store = InMemoryCategories::sample();
        let mut app = App::new(&store);
        app.open_cover(CoverProps::new("Cover Overspending", "2024-05"));
        app.on_key(KeyEvent::new(
            KeyCode::Enter,
            crossterm::event::KeyModifiers::NONE,
        ));

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Select Category (2024-05)"));
        assert!(text.contains("To Be Budgeted"));
    }
}
