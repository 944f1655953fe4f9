//! Plain description of what the screen shows.
//!
//! [`FormView::from_app`] is a pure function of the application state. The
//! renderer only draws what it is given here, which keeps every display
//! rule testable without a terminal.

use crate::application::{App, Focus};
use crate::domain::{expression, format_number};

pub const TITLE: &str = "Multiplication Table Generator";
pub const NUMBER_LABEL: &str = "Number";
pub const NUMBER_PLACEHOLDER: &str = "Enter number (e.g. 7)";
pub const UPPER_BOUND_LABEL: &str = "Multiply till";
pub const UPPER_BOUND_PLACEHOLDER: &str = "Enter limit (e.g. 12)";
pub const KEY_HINTS: &str =
    "Enter: generate | Tab: next field | Ctrl+L: clear | Ctrl+Y: copy | PgUp/PgDn: scroll | F1: help | Esc: quit";

#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub label: &'static str,
    pub value: String,
    pub placeholder: &'static str,
    pub focused: bool,
}

impl FieldView {
    /// Text to draw in the box: the value, or the placeholder when empty.
    pub fn display_text(&self) -> &str {
        if self.value.is_empty() {
            self.placeholder
        } else {
            &self.value
        }
    }

    pub fn shows_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    /// "Table for <number>", with the number as currently typed
    pub heading: String,
    /// Visible rows as (index, expression, product) cells
    pub rows: Vec<[String; 3]>,
    /// Zero-based index of the first visible row
    pub first_row: u64,
    pub total_rows: u64,
}

impl TableView {
    /// Scroll position such as `rows 11-20 of 50`.
    pub fn position_label(&self) -> String {
        if self.rows.is_empty() {
            return format!("{} rows", self.total_rows);
        }
        let last = self.first_row + self.rows.len() as u64;
        format!("rows {}-{} of {}", self.first_row + 1, last, self.total_rows)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub title: &'static str,
    pub number: FieldView,
    pub upper_bound: FieldView,
    /// Present only when the error message is non-empty
    pub error: Option<String>,
    pub generate_focused: bool,
    pub clear_focused: bool,
    /// Present only when the table has rows
    pub table: Option<TableView>,
    pub status: String,
}

impl FormView {
    /// Builds the view for `app`, with room for `visible_rows` table rows.
    pub fn from_app(app: &App, visible_rows: usize) -> Self {
        let form = &app.form;

        let error = form
            .error_message
            .as_ref()
            .filter(|message| !message.is_empty())
            .cloned();

        let table = (!form.table.is_empty()).then(|| {
            let first_row = app.table_scroll.min(form.table.len().saturating_sub(1));
            let rows = form
                .table
                .window(first_row, visible_rows)
                .map(|row| {
                    [
                        row.multiplier.to_string(),
                        expression(&form.number_text, row.multiplier),
                        format_number(row.product),
                    ]
                })
                .collect();
            TableView {
                heading: format!("Table for {}", form.number_text),
                rows,
                first_row,
                total_rows: form.table.len(),
            }
        });

        Self {
            title: TITLE,
            number: FieldView {
                label: NUMBER_LABEL,
                value: form.number_text.clone(),
                placeholder: NUMBER_PLACEHOLDER,
                focused: app.focus == Focus::Number,
            },
            upper_bound: FieldView {
                label: UPPER_BOUND_LABEL,
                value: form.upper_bound_text.clone(),
                placeholder: UPPER_BOUND_PLACEHOLDER,
                focused: app.focus == Focus::UpperBound,
            },
            error,
            generate_focused: app.focus == Focus::Generate,
            clear_focused: app.focus == Focus::Clear,
            table,
            status: app
                .status_message
                .clone()
                .unwrap_or_else(|| KEY_HINTS.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitted(number: &str, upto: &str) -> App {
        let mut app = App::with_input(number, upto);
        app.submit();
        app
    }

    #[test]
    fn test_initial_view_shows_placeholders_only() {
        let view = FormView::from_app(&App::default(), 10);
        assert_eq!(view.title, TITLE);
        assert!(view.number.shows_placeholder());
        assert_eq!(view.number.display_text(), NUMBER_PLACEHOLDER);
        assert_eq!(view.upper_bound.display_text(), UPPER_BOUND_PLACEHOLDER);
        assert!(view.number.focused);
        assert!(view.error.is_none());
        assert!(view.table.is_none());
        assert_eq!(view.status, KEY_HINTS);
    }

    #[test]
    fn test_table_rows() {
        let view = FormView::from_app(&submitted("7", "5"), 10);
        let table = view.table.expect("table should be shown");
        assert_eq!(table.heading, "Table for 7");
        assert_eq!(table.total_rows, 5);
        assert_eq!(table.rows[0], ["1".to_string(), "7 × 1".to_string(), "7".to_string()]);
        assert_eq!(table.rows[4], ["5".to_string(), "7 × 5".to_string(), "35".to_string()]);
        assert_eq!(table.position_label(), "rows 1-5 of 5");
        assert!(view.error.is_none());
    }

    #[test]
    fn test_decimal_products() {
        let view = FormView::from_app(&submitted("2.5", "3"), 10);
        let products: Vec<String> = view
            .table
            .map(|t| t.rows.into_iter().map(|[_, _, product]| product).collect())
            .unwrap_or_default();
        assert_eq!(products, vec!["2.5", "5", "7.5"]);
    }

    #[test]
    fn test_heading_follows_current_number_text() {
        let mut app = submitted("7", "2");
        app.form.on_number_change("70");
        let table = FormView::from_app(&app, 10).table.unwrap();
        assert_eq!(table.heading, "Table for 70");
        assert_eq!(table.rows[1][1], "70 × 2");
        assert_eq!(table.rows[1][2], "14");
    }

    #[test]
    fn test_error_hides_table() {
        let view = FormView::from_app(&submitted("abc", "5"), 10);
        assert_eq!(view.error.as_deref(), Some("Please enter a valid number to multiply."));
        assert!(view.table.is_none());
    }

    #[test]
    fn test_only_visible_rows_are_built() {
        let mut app = submitted("3", "1000000");
        app.scroll_table_down(20);
        let table = FormView::from_app(&app, 4).table.unwrap();
        assert_eq!(table.rows.len(), 4);
        assert_eq!(table.rows[0][0], "21");
        assert_eq!(table.position_label(), "rows 21-24 of 1000000");
    }

    #[test]
    fn test_focus_flags() {
        let mut app = App::default();
        app.set_focus(Focus::Clear);
        let view = FormView::from_app(&app, 10);
        assert!(view.clear_focused);
        assert!(!view.generate_focused);
        assert!(!view.number.focused);
    }

    #[test]
    fn test_status_message_replaces_hints() {
        let mut app = App::default();
        app.status_message = Some("Nothing to copy".to_string());
        assert_eq!(FormView::from_app(&app, 10).status, "Nothing to copy");
    }
}
