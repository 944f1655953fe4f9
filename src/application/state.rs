//! Application state management for the multiplication table form.
//!
//! [`FormState`] is the form component itself: the two raw text fields,
//! the generated table and the error message, plus the handlers that
//! mutate them. [`App`] wraps it with the terminal-only state (focus,
//! cursor, scrolling, help popup) that never influences the form's result.

use crate::domain::{FormValidator, MultiplicationTable, TableGenerator};
use crate::infrastructure::ClipboardError;
use tracing::{debug, info, warn};

/// Represents the current mode of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// The form is shown and receives input
    Form,
    /// Help screen is displayed
    Help,
}

/// The control that currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The "Number" text field
    Number,
    /// The "Multiply till" text field
    UpperBound,
    /// The Generate button
    Generate,
    /// The Clear button
    Clear,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Number => Focus::UpperBound,
            Focus::UpperBound => Focus::Generate,
            Focus::Generate => Focus::Clear,
            Focus::Clear => Focus::Number,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Number => Focus::Clear,
            Focus::UpperBound => Focus::Number,
            Focus::Generate => Focus::UpperBound,
            Focus::Clear => Focus::Generate,
        }
    }

    pub fn is_text_field(self) -> bool {
        matches!(self, Focus::Number | Focus::UpperBound)
    }
}

/// A form submission.
///
/// Whoever raises the event performs its default action afterwards unless
/// a handler called [`prevent_default`](Self::prevent_default).
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// The multiplication table form.
///
/// Either `error_message` is `None` and `table` reflects the last valid
/// submission, or `error_message` is set and `table` is empty.
///
/// # Examples
///
/// ```
/// use timestable::application::FormState;
///
/// let mut form = FormState::default();
/// form.on_number_change("7");
/// form.on_upper_bound_change("5");
/// form.on_generate(None);
///
/// assert_eq!(form.table.len(), 5);
/// assert!(form.error_message.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    /// Raw text of the "Number" field
    pub number_text: String,
    /// Raw text of the "Multiply till" field
    pub upper_bound_text: String,
    /// Table produced by the last successful submission
    pub table: MultiplicationTable,
    /// Message explaining why the last submission was rejected
    pub error_message: Option<String>,
}

impl FormState {
    /// Replaces the "Number" text verbatim. Nothing is validated.
    pub fn on_number_change(&mut self, text: impl Into<String>) {
        self.number_text = text.into();
        debug!(number = %self.number_text, "number field changed");
    }

    /// Replaces the "Multiply till" text verbatim. Nothing is validated.
    pub fn on_upper_bound_change(&mut self, text: impl Into<String>) {
        self.upper_bound_text = text.into();
        debug!(upper_bound = %self.upper_bound_text, "upper bound field changed");
    }

    /// Validates both fields and regenerates the table.
    ///
    /// The submit event's default action is always suppressed. On failure
    /// the error message is set and the table is emptied; on success the
    /// error is cleared and the table replaced.
    pub fn on_generate(&mut self, event: Option<&mut SubmitEvent>) {
        if let Some(event) = event {
            event.prevent_default();
        }
        self.error_message = None;

        match FormValidator::validate(&self.number_text, &self.upper_bound_text) {
            Ok(params) => {
                self.table = TableGenerator::generate_from(params);
                info!(
                    base = params.base,
                    limit = params.limit,
                    rows = self.table.len(),
                    "generated multiplication table"
                );
            }
            Err(err) => {
                warn!(
                    number = %self.number_text,
                    upper_bound = %self.upper_bound_text,
                    "rejected submission: {err}"
                );
                self.error_message = Some(err.to_string());
                self.table = MultiplicationTable::empty();
            }
        }
    }

    /// Resets every field to its initial empty value.
    pub fn on_clear(&mut self) {
        *self = Self::default();
        info!("form cleared");
    }

    /// True when the form holds nothing at all, as it does on start-up.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Main application state containing the form and UI state.
///
/// # Examples
///
/// ```
/// use timestable::application::{App, Focus};
///
/// let app = App::default();
/// assert_eq!(app.focus, Focus::Number);
/// assert!(app.form.is_empty());
/// ```
#[derive(Debug)]
pub struct App {
    /// The form component
    pub form: FormState,
    /// Current application mode
    pub mode: AppMode,
    /// Control receiving keyboard input
    pub focus: Focus,
    /// Cursor position, in characters, within the focused text field
    pub cursor_position: usize,
    /// Zero-based index of the first table row in view
    pub table_scroll: u64,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Set once the user asked to leave
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            form: FormState::default(),
            mode: AppMode::Form,
            focus: Focus::Number,
            cursor_position: 0,
            table_scroll: 0,
            help_scroll: 0,
            status_message: None,
            should_quit: false,
        }
    }
}

impl App {
    /// Creates an app with both fields prefilled and the cursor at the end
    /// of the number.
    pub fn with_input(number_text: &str, upper_bound_text: &str) -> Self {
        let mut app = Self::default();
        app.form.on_number_change(number_text);
        app.form.on_upper_bound_change(upper_bound_text);
        app.cursor_position = number_text.chars().count();
        app
    }

    /// Submits the form.
    ///
    /// Performs the submit event's default action, advancing focus, only if
    /// the form did not suppress it.
    pub fn submit(&mut self) {
        let mut event = SubmitEvent::new();
        self.form.on_generate(Some(&mut event));
        self.table_scroll = 0;
        self.status_message = None;
        if !event.default_prevented() {
            self.focus_next();
        }
    }

    /// Clears the form and puts the cursor back into the "Number" field.
    pub fn clear(&mut self) {
        self.form.on_clear();
        self.focus = Focus::Number;
        self.cursor_position = 0;
        self.table_scroll = 0;
        self.status_message = None;
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_previous(&mut self) {
        self.set_focus(self.focus.previous());
    }

    /// Moves focus and places the cursor at the end of the new field.
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.cursor_position = self.focused_text().map_or(0, |text| text.chars().count());
        debug!(?focus, "focus moved");
    }

    /// Text of the focused field, or `None` when a button has focus.
    pub fn focused_text(&self) -> Option<&str> {
        match self.focus {
            Focus::Number => Some(self.form.number_text.as_str()),
            Focus::UpperBound => Some(self.form.upper_bound_text.as_str()),
            Focus::Generate | Focus::Clear => None,
        }
    }

    fn replace_focused_text(&mut self, text: String) {
        match self.focus {
            Focus::Number => self.form.on_number_change(text),
            Focus::UpperBound => self.form.on_upper_bound_change(text),
            Focus::Generate | Focus::Clear => {}
        }
    }

    /// Inserts a character at the cursor of the focused field.
    pub fn insert_char(&mut self, c: char) {
        let Some(text) = self.focused_text() else {
            return;
        };
        let mut text = text.to_string();
        let byte_pos = byte_index(&text, self.cursor_position);
        text.insert(byte_pos, c);
        self.replace_focused_text(text);
        self.cursor_position += 1;
    }

    /// Deletes the character before the cursor.
    pub fn delete_backward(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let Some(text) = self.focused_text() else {
            return;
        };
        let mut text = text.to_string();
        let byte_pos = byte_index(&text, self.cursor_position - 1);
        text.remove(byte_pos);
        self.replace_focused_text(text);
        self.cursor_position -= 1;
    }

    /// Deletes the character under the cursor.
    pub fn delete_forward(&mut self) {
        let Some(text) = self.focused_text() else {
            return;
        };
        if self.cursor_position >= text.chars().count() {
            return;
        }
        let mut text = text.to_string();
        let byte_pos = byte_index(&text, self.cursor_position);
        text.remove(byte_pos);
        self.replace_focused_text(text);
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        let len = self.focused_text().map_or(0, |text| text.chars().count());
        if self.cursor_position < len {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.focused_text().map_or(0, |text| text.chars().count());
    }

    /// Scrolls the table towards its end, stopping at the last row.
    pub fn scroll_table_down(&mut self, rows: u64) {
        let last = self.form.table.len().saturating_sub(1);
        self.table_scroll = self.table_scroll.saturating_add(rows).min(last);
    }

    pub fn scroll_table_up(&mut self, rows: u64) {
        self.table_scroll = self.table_scroll.saturating_sub(rows);
    }

    pub fn open_help(&mut self) {
        self.mode = AppMode::Help;
        self.help_scroll = 0;
    }

    pub fn close_help(&mut self) {
        self.mode = AppMode::Form;
    }

    /// Records the outcome of copying the table to the clipboard.
    pub fn set_copy_result(&mut self, result: Result<u64, ClipboardError>) {
        match result {
            Ok(rows) => {
                info!(rows, "copied table to clipboard");
                let noun = if rows == 1 { "row" } else { "rows" };
                self.status_message = Some(format!("Copied {rows} {noun} to clipboard"));
            }
            Err(err) => {
                warn!("clipboard copy failed: {err}");
                self.status_message = Some(err.to_string());
            }
        }
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }
}

/// Byte offset of the `char_pos`-th character, or the string length past
/// the last character.
fn byte_index(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map(|(byte_pos, _)| byte_pos)
        .unwrap_or(text.len())
}
