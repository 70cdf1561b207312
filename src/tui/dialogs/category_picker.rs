//! Category autocomplete picker
//!
//! The nested modal the cover dialog opens to choose a source category.
//! It operates only on the groups it was seeded with; any income or
//! self-cover filtering has already happened upstream. Typing narrows the
//! list by case-insensitive substring match on the category name.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::{Category, CategoryGroup, CategoryId};
use crate::tui::layout::centered_rect;
use crate::tui::modal::{DialogEffect, ModalOutcome};
use crate::tui::widgets::SearchInput;

/// Configuration for opening the picker
#[derive(Debug, Clone)]
pub struct PickerProps {
    /// Budget month token, shown in the title
    pub month: String,

    /// The selectable groups, already filtered by the caller
    pub groups: Vec<CategoryGroup>,

    /// Category to highlight initially, if it is in the list
    pub initial: Option<CategoryId>,
}

/// A selectable entry, a category tagged with its group's name
#[derive(Debug, Clone)]
struct PickerEntry {
    category: Category,
    group: String,
}

/// The category autocomplete picker dialog
#[derive(Debug)]
pub struct CategoryPicker {
    month: String,

    /// Every entry in display order, the haystack for filtering
    entries: Vec<PickerEntry>,

    filter: SearchInput,

    /// Indices into `entries` matching the current filter
    matches: Vec<usize>,

    /// Selected position within `matches`
    selected: usize,
}

impl CategoryPicker {
    /// The identifier the host routes picker open requests by
    pub const NAME: &'static str = "category-autocomplete";

    /// Mount the picker over its seeded groups
    pub fn new(props: PickerProps) -> Self {
        let entries: Vec<PickerEntry> = props
            .groups
            .iter()
            .flat_map(|g| {
                g.categories.iter().map(|c| PickerEntry {
                    category: c.clone(),
                    group: g.name.clone(),
                })
            })
            .collect();

        let matches: Vec<usize> = (0..entries.len()).collect();
        let selected = props
            .initial
            .and_then(|id| entries.iter().position(|e| e.category.id == id))
            .unwrap_or(0);

        Self {
            month: props.month,
            entries,
            filter: SearchInput::new(),
            matches,
            selected,
        }
    }

    /// The categories currently visible under the filter, in order
    pub fn visible_categories(&self) -> impl Iterator<Item = &Category> + '_ {
        self.matches.iter().map(|&i| &self.entries[i].category)
    }

    fn refresh_matches(&mut self) {
        let needle = self.filter.value().to_lowercase();
        self.matches = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| needle.is_empty() || e.category.name.to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect();
        // Editing the filter re-ranks the list; highlight the top match
        self.selected = 0;
    }

    /// Handle a key event while this dialog is on top of the stack
    pub fn handle_key(&mut self, key: KeyEvent) -> DialogEffect {
        match key.code {
            KeyCode::Esc => DialogEffect::CloseWith(ModalOutcome::Cancelled),

            KeyCode::Enter => match self.matches.get(self.selected) {
                Some(&i) => {
                    DialogEffect::CloseWith(ModalOutcome::CategorySelected(self.entries[i].category.id))
                }
                None => DialogEffect::Consumed,
            },

            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                DialogEffect::Consumed
            }

            KeyCode::Down => {
                if self.selected + 1 < self.matches.len() {
                    self.selected += 1;
                }
                DialogEffect::Consumed
            }

            KeyCode::Left => {
                self.filter.move_left();
                DialogEffect::Consumed
            }

            KeyCode::Right => {
                self.filter.move_right();
                DialogEffect::Consumed
            }

            KeyCode::Backspace => {
                self.filter.backspace();
                self.refresh_matches();
                DialogEffect::Consumed
            }

            KeyCode::Char(c) => {
                self.filter.insert(c);
                self.refresh_matches();
                DialogEffect::Consumed
            }

            _ => DialogEffect::Ignored,
        }
    }

    /// Render the picker as a centered popup
    pub fn render(&self, frame: &mut Frame) {
        let area = centered_rect(50, 60, frame.area());

        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(format!(" Select Category ({}) ", self.month))
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [filter_area, list_area, hints_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(self.filter.line("Type to filter...")),
            filter_area,
        );

        let items: Vec<ListItem> = self
            .matches
            .iter()
            .map(|&i| {
                let entry = &self.entries[i];
                let mut spans = vec![Span::styled(
                    entry.category.name.clone(),
                    Style::default().fg(Color::White),
                )];
                if entry.group != entry.category.name {
                    spans.push(Span::styled(
                        format!("  {}", entry.group),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut state = ListState::default();
        if !self.matches.is_empty() {
            state.select(Some(self.selected));
        }
        frame.render_stateful_widget(list, list_area, &mut state);

        let hints = Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Select  "),
            Span::styled("[Esc]", Style::default().fg(Color::Red)),
            Span::raw(" Cancel"),
        ]);
        frame.render_widget(Paragraph::new(hints), hints_area);
    }
}
