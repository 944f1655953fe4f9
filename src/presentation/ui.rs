use crate::application::{App, AppMode};
use crate::domain::COLUMN_HEADERS;
use crate::presentation::view::{FieldView, FormView, TableView};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

/// Borders plus the column header row.
const TABLE_CHROME_HEIGHT: u16 = 3;

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let visible_rows = chunks[4].height.saturating_sub(TABLE_CHROME_HEIGHT) as usize;
    let view = FormView::from_app(app, visible_rows);

    render_header(f, &view, chunks[0]);
    render_fields(f, app, &view, chunks[1]);
    render_error(f, &view, chunks[2]);
    render_buttons(f, &view, chunks[3]);
    if let Some(table) = &view.table {
        render_table(f, table, chunks[4]);
    }
    render_status_bar(f, &view, chunks[5]);

    if app.mode == AppMode::Help {
        render_help_popup(f, app.help_scroll);
    }
}

fn render_header(f: &mut Frame, view: &FormView, area: Rect) {
    let header = Paragraph::new(view.title).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(header, area);
}

fn render_fields(f: &mut Frame, app: &App, view: &FormView, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_field(f, &view.number, columns[0]);
    render_field(f, &view.upper_bound, columns[1]);

    if app.mode == AppMode::Form {
        let field_area = if view.number.focused {
            Some(columns[0])
        } else if view.upper_bound.focused {
            Some(columns[1])
        } else {
            None
        };
        if let Some(field_area) = field_area {
            // Clamp in usize before narrowing; fields may hold any amount of text.
            let inner_width = field_area.width.saturating_sub(2);
            let offset = app
                .cursor_position
                .min(inner_width.saturating_sub(1) as usize) as u16;
            let x = field_area.x.saturating_add(1).saturating_add(offset);
            f.set_cursor_position(Position::new(x, field_area.y.saturating_add(1)));
        }
    }
}

fn render_field(f: &mut Frame, field: &FieldView, area: Rect) {
    let border_style = if field.focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let text_style = if field.shows_placeholder() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let widget = Paragraph::new(field.display_text().to_string())
        .style(text_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(field.label),
        );
    f.render_widget(widget, area);
}

fn render_error(f: &mut Frame, view: &FormView, area: Rect) {
    if let Some(error) = &view.error {
        let widget = Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red));
        f.render_widget(widget, area);
    }
}

fn render_buttons(f: &mut Frame, view: &FormView, area: Rect) {
    let button_style = |focused: bool, color: Color| {
        if focused {
            Style::default().bg(color).fg(Color::Black).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        }
    };
    let line = Line::from(vec![
        Span::styled("[ Generate ]", button_style(view.generate_focused, Color::Blue)),
        Span::raw(" "),
        Span::styled("[ Clear ]", button_style(view.clear_focused, Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_table(f: &mut Frame, table: &TableView, area: Rect) {
    let header = Row::new(
        COLUMN_HEADERS
            .iter()
            .map(|title| Cell::from(*title).style(Style::default().fg(Color::Yellow))),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = table.rows.iter().map(|cells| {
        Row::new(cells.iter().map(|cell| Cell::from(cell.as_str())))
    });

    let index_width = table.total_rows.to_string().len().max(1) as u16;
    let widths = [
        Constraint::Length(index_width),
        Constraint::Min(12),
        Constraint::Min(8),
    ];

    let widget = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(table.heading.as_str())
                .title_bottom(Line::from(table.position_label()).right_aligned()),
        )
        .column_spacing(2);

    f.render_widget(widget, area);
}

fn render_status_bar(f: &mut Frame, view: &FormView, area: Rect) {
    let widget = Paragraph::new(view.status.as_str())
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(widget, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_lines: Vec<&str> = HELP_TEXT.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Help (Line {}/{})", start_line + 1, help_lines.len()))
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

pub const HELP_TEXT: &str = r#"MULTIPLICATION TABLE GENERATOR

=== USAGE ===
Type a number into "Number" and an upper bound into "Multiply till",
then press Enter. One row is shown for every multiplier from 1 up to
the bound: 7 and 5 give 7 × 1 = 7 through 7 × 5 = 35.

• The number may be negative or a decimal (-3, 2.5, 1e3)
• The bound must be greater than zero
• A fractional bound is cut off, not rounded: 3.7 gives three rows
• A bound below 1 gives no rows at all

=== FORM KEYS ===
Tab / Down      Next field or button
Shift+Tab / Up  Previous field or button
Enter           Generate the table (clears the form on [ Clear ])
Space           Press the focused button
Ctrl+L          Clear both fields, the table and any error
←/→ Home/End    Move the cursor inside a field
Backspace/Del   Delete before / under the cursor

=== TABLE KEYS ===
PgUp / PgDn     Scroll the table
Ctrl+Y          Copy the table to the clipboard (tab separated)

=== OTHER ===
F1              Show this help
Esc / Ctrl+C    Quit

=== HELP NAVIGATION ===
↑↓ or j/k       Scroll help text up/down one line
Page Up/Down    Scroll help text up/down 5 lines
Home            Jump to top of help text
Esc/F1/q        Close this help window"#;
