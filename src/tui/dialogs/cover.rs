//! Cover overspending dialog
//!
//! Lets the user pick a source category whose balance will cover another
//! category's deficit. The dialog shows a tappable "cover from" field;
//! activating it opens the nested category picker, pre-seeded with the
//! filtered group list. Confirming hands the chosen category ID to the
//! caller-supplied callback and closes the dialog. Confirming with nothing
//! selected just closes.

use std::fmt;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tracing::debug;

use crate::budget::cover_candidates;
use crate::models::{Category, CategoryGroup, CategoryId};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::modal::{DialogEffect, ModalOutcome, ModalRequest};
use crate::tui::widgets::{button_row, field_label, tap_field};

use super::category_picker::PickerProps;

/// Configuration for opening the cover dialog
pub struct CoverProps {
    /// Dialog title shown in the header
    pub title: String,

    /// Budget month the cover applies to; opaque token passed through to
    /// the nested picker
    pub month: String,

    /// The category being covered, excluded from the selectable set so it
    /// can never cover itself
    pub category_id: Option<CategoryId>,

    /// Whether "To Be Budgeted" is offered as a source
    pub show_to_be_budgeted: bool,

    /// Invoked with the chosen source category when the user confirms
    pub on_submit: Box<dyn FnMut(CategoryId)>,
}

impl CoverProps {
    /// Create props with the defaults: no exclusion, "To Be Budgeted"
    /// shown, no-op submit callback
    pub fn new(title: impl Into<String>, month: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            month: month.into(),
            category_id: None,
            show_to_be_budgeted: true,
            on_submit: Box::new(|_| {}),
        }
    }

    /// Exclude the category being covered from the selectable set
    pub fn exclude(mut self, id: CategoryId) -> Self {
        self.category_id = Some(id);
        self
    }

    /// Control whether the synthetic "To Be Budgeted" entry is offered
    pub fn show_to_be_budgeted(mut self, show: bool) -> Self {
        self.show_to_be_budgeted = show;
        self
    }

    /// Set the submit callback
    pub fn on_submit(mut self, f: impl FnMut(CategoryId) + 'static) -> Self {
        self.on_submit = Box::new(f);
        self
    }
}

impl fmt::Debug for CoverProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoverProps")
            .field("title", &self.title)
            .field("month", &self.month)
            .field("category_id", &self.category_id)
            .field("show_to_be_budgeted", &self.show_to_be_budgeted)
            .finish_non_exhaustive()
    }
}

/// Which control currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoverFocus {
    #[default]
    Field,
    Submit,
}

impl CoverFocus {
    fn toggle(self) -> Self {
        match self {
            Self::Field => Self::Submit,
            Self::Submit => Self::Field,
        }
    }
}

/// The cover overspending dialog
pub struct CoverModal {
    title: String,
    month: String,

    /// Filtered groups, the seed for the nested picker
    category_groups: Vec<CategoryGroup>,

    /// Flattened candidates, for id-to-name lookup at render time
    categories: Vec<Category>,

    /// The chosen source category; starts unset on every mount
    from_category_id: Option<CategoryId>,

    focus: CoverFocus,

    on_submit: Box<dyn FnMut(CategoryId)>,
}

impl CoverModal {
    /// The identifier the host routes cover open requests by
    pub const NAME: &'static str = "cover";

    /// Mount the dialog over a snapshot of the host's category groups.
    ///
    /// The selectable set is derived once here; the inputs cannot change
    /// for a mounted dialog.
    pub fn new(props: CoverProps, groups: Vec<CategoryGroup>) -> Self {
        let (category_groups, categories) =
            cover_candidates(groups, props.category_id, props.show_to_be_budgeted);

        Self {
            title: props.title,
            month: props.month,
            category_groups,
            categories,
            from_category_id: None,
            focus: CoverFocus::default(),
            on_submit: props.on_submit,
        }
    }

    /// The currently selected source category, if any
    pub fn from_category_id(&self) -> Option<CategoryId> {
        self.from_category_id
    }

    /// The flattened selectable set
    pub fn candidates(&self) -> &[Category] {
        &self.categories
    }

    /// Handle a key event while this dialog is on top of the stack
    pub fn handle_key(&mut self, key: KeyEvent) -> DialogEffect {
        match key.code {
            KeyCode::Esc => DialogEffect::Close,

            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                DialogEffect::Consumed
            }

            KeyCode::Enter => match self.focus {
                CoverFocus::Field => {
                    DialogEffect::Push(ModalRequest::CategoryAutocomplete(PickerProps {
                        month: self.month.clone(),
                        groups: self.category_groups.clone(),
                        initial: None,
                    }))
                }
                CoverFocus::Submit => {
                    // Confirming with nothing selected is a no-op, not an
                    // error; the dialog still closes.
                    if let Some(id) = self.from_category_id {
                        debug!(category = %id, month = %self.month, "cover submitted");
                        (self.on_submit)(id);
                    }
                    DialogEffect::Close
                }
            },

            _ => DialogEffect::Ignored,
        }
    }

    /// Receive the nested picker's result
    pub fn on_child_closed(&mut self, outcome: ModalOutcome) {
        match outcome {
            ModalOutcome::CategorySelected(id) => {
                self.from_category_id = Some(id);
                self.focus = CoverFocus::Submit;
            }
            // Cancelling the picker keeps the previous selection
            ModalOutcome::Cancelled => {}
        }
    }

    /// Render the dialog as a centered popup
    pub fn render(&self, frame: &mut Frame) {
        let area = centered_rect_fixed(52, 9, frame.area());

        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let from_name = self
            .from_category_id
            .and_then(|id| self.categories.iter().find(|c| c.id == id))
            .map(|c| c.name.as_str());

        let lines = vec![
            field_label("Cover from category:"),
            tap_field(from_name, "(press Enter to select)", self.focus == CoverFocus::Field),
            Line::from(""),
            button_row("Transfer", self.focus == CoverFocus::Submit),
            Line::from(""),
            Line::from(vec![
                Span::styled("[Tab]", Style::default().fg(Color::White)),
                Span::raw(" Switch  "),
                Span::styled("[Enter]", Style::default().fg(Color::Green)),
                Span::raw(" Activate  "),
                Span::styled("[Esc]", Style::default().fg(Color::Red)),
                Span::raw(" Close"),
            ]),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl fmt::Debug for CoverModal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoverModal")
            .field("title", &self.title)
            .field("month", &self.month)
            .field("from_category_id", &self.from_category_id)
            .field("focus", &self.focus)
            .field("candidates", &self.categories.len())
            .finish_non_exhaustive()
    }
}
