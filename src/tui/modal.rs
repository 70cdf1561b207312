//! Modal stack
//!
//! Dialogs mount on a stack; the top dialog receives key events and
//! renders last. Instead of sharing closures across dialogs, a child
//! reports its result as a [`ModalOutcome`] when it closes, and the stack
//! delivers it to the dialog underneath. On a single event thread this
//! guarantees the picker's outcome lands strictly after the push that
//! opened it and strictly before any later key reaches the parent.

use std::fmt;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use tracing::debug;

use crate::models::{CategoryGroup, CategoryId};

use super::dialogs::category_picker::{CategoryPicker, PickerProps};
use super::dialogs::cover::{CoverModal, CoverProps};

/// A child dialog's result, delivered to its parent when it closes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalOutcome {
    /// The picker confirmed a category
    CategorySelected(CategoryId),
    /// The child was dismissed without choosing
    Cancelled,
}

/// A request to mount a dialog.
///
/// Requests are routed by variant, so an unknown modal name is
/// unrepresentable. Each dialog still exposes the string identifier the
/// original host routes by (see [`ModalRequest::name`]).
pub enum ModalRequest {
    /// Open the cover dialog over a snapshot of the host's groups
    Cover {
        props: CoverProps,
        groups: Vec<CategoryGroup>,
    },
    /// Open the category autocomplete picker
    CategoryAutocomplete(PickerProps),
}

impl ModalRequest {
    /// The static identifier of the requested modal
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cover { .. } => CoverModal::NAME,
            Self::CategoryAutocomplete(_) => CategoryPicker::NAME,
        }
    }
}

impl fmt::Debug for ModalRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ModalRequest").field(&self.name()).finish()
    }
}

/// What the stack should do after a dialog handled a key
pub enum DialogEffect {
    /// The dialog did not recognize the key
    Ignored,
    /// The key was handled, nothing further to do
    Consumed,
    /// Mount another dialog on top
    Push(ModalRequest),
    /// Close this dialog with no result
    Close,
    /// Close this dialog and deliver a result to the dialog underneath
    CloseWith(ModalOutcome),
}

/// A mounted dialog
pub enum ActiveModal {
    Cover(CoverModal),
    CategoryPicker(CategoryPicker),
}

impl ActiveModal {
    /// The mounted dialog's modal name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cover(_) => CoverModal::NAME,
            Self::CategoryPicker(_) => CategoryPicker::NAME,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> DialogEffect {
        match self {
            Self::Cover(dialog) => dialog.handle_key(key),
            Self::CategoryPicker(dialog) => dialog.handle_key(key),
        }
    }

    fn on_child_closed(&mut self, outcome: ModalOutcome) {
        match self {
            Self::Cover(dialog) => dialog.on_child_closed(outcome),
            // The picker opens no children
            Self::CategoryPicker(_) => {}
        }
    }

    fn render(&self, frame: &mut Frame) {
        match self {
            Self::Cover(dialog) => dialog.render(frame),
            Self::CategoryPicker(dialog) => dialog.render(frame),
        }
    }
}

/// The stack of mounted dialogs
#[derive(Default)]
pub struct ModalStack {
    stack: Vec<ActiveModal>,
}

impl ModalStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no dialog is mounted
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Number of mounted dialogs
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// The dialog currently on top, if any
    pub fn top(&self) -> Option<&ActiveModal> {
        self.stack.last()
    }

    /// Mount the requested dialog on top of the stack
    pub fn open(&mut self, request: ModalRequest) {
        debug!(modal = request.name(), depth = self.stack.len(), "push modal");
        let modal = match request {
            ModalRequest::Cover { props, groups } => {
                ActiveModal::Cover(CoverModal::new(props, groups))
            }
            ModalRequest::CategoryAutocomplete(props) => {
                ActiveModal::CategoryPicker(CategoryPicker::new(props))
            }
        };
        self.stack.push(modal);
    }

    /// Route a key event to the top dialog.
    ///
    /// Returns true when a dialog consumed the key.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let Some(top) = self.stack.last_mut() else {
            return false;
        };

        match top.handle_key(key) {
            DialogEffect::Ignored => false,
            DialogEffect::Consumed => true,
            DialogEffect::Push(request) => {
                self.open(request);
                true
            }
            DialogEffect::Close => {
                let closed = self.stack.pop();
                if let Some(modal) = closed {
                    debug!(modal = modal.name(), "close modal");
                }
                true
            }
            DialogEffect::CloseWith(outcome) => {
                let closed = self.stack.pop();
                if let Some(modal) = closed {
                    debug!(modal = modal.name(), ?outcome, "close modal with outcome");
                }
                if let Some(parent) = self.stack.last_mut() {
                    parent.on_child_closed(outcome);
                }
                true
            }
        }
    }

    /// Render every mounted dialog, bottom to top
    pub fn render(&self, frame: &mut Frame) {
        for modal in &self.stack {
            modal.render(frame);
        }
    }
}
