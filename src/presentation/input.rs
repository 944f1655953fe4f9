use crate::application::{App, AppMode, Focus};
use crate::infrastructure::ClipboardService;
use crossterm::event::{KeyCode, KeyModifiers};

/// Rows moved by one PgUp/PgDn.
const TABLE_PAGE: u64 = 10;

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Form => Self::handle_form_mode(app, key, modifiers),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_form_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            match key {
                KeyCode::Char('c') => app.request_quit(),
                KeyCode::Char('l') => app.clear(),
                KeyCode::Char('y') => {
                    let result = ClipboardService::copy_table(&app.form.table, &app.form.number_text);
                    app.set_copy_result(result);
                }
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Esc => app.request_quit(),
            KeyCode::F(1) => app.open_help(),
            KeyCode::Tab | KeyCode::Down => app.focus_next(),
            KeyCode::BackTab | KeyCode::Up => app.focus_previous(),
            KeyCode::Enter => Self::activate(app),
            KeyCode::Char(' ') if !app.focus.is_text_field() => Self::activate(app),
            KeyCode::PageDown => app.scroll_table_down(TABLE_PAGE),
            KeyCode::PageUp => app.scroll_table_up(TABLE_PAGE),
            KeyCode::Backspace => app.delete_backward(),
            KeyCode::Delete => app.delete_forward(),
            KeyCode::Left => app.move_cursor_left(),
            KeyCode::Right => app.move_cursor_right(),
            KeyCode::Home => app.move_cursor_home(),
            KeyCode::End => app.move_cursor_end(),
            KeyCode::Char(c) => app.insert_char(c),
            _ => {}
        }
    }

    /// Enter submits the form from anywhere except the Clear button.
    fn activate(app: &mut App) {
        match app.focus {
            Focus::Clear => app.clear(),
            Focus::Number | Focus::UpperBound | Focus::Generate => app.submit(),
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') => {
                app.close_help();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.help_scroll = app.help_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, key: KeyCode) {
        InputHandler::handle_key_event(app, key, KeyModifiers::NONE);
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_type_and_submit() {
        let mut app = App::default();
        type_text(&mut app, "7");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "5");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.form.number_text, "7");
        assert_eq!(app.form.upper_bound_text, "5");
        assert_eq!(app.form.table.len(), 5);
        assert_eq!(app.focus, Focus::UpperBound);
    }

    #[test]
    fn test_enter_on_clear_button_clears() {
        let mut app = App::with_input("7", "5");
        press(&mut app, KeyCode::Enter);
        assert!(!app.form.table.is_empty());

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::Clear);
        press(&mut app, KeyCode::Enter);
        assert!(app.form.is_empty());
        assert_eq!(app.focus, Focus::Number);
    }

    #[test]
    fn test_space_presses_focused_button() {
        let mut app = App::with_input("3", "4");
        app.set_focus(Focus::Generate);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.form.table.len(), 4);
        assert_eq!(app.form.number_text, "3");
    }

    #[test]
    fn test_space_is_typed_into_fields() {
        let mut app = App::default();
        type_text(&mut app, "1 2");
        assert_eq!(app.form.number_text, "1 2");
    }

    #[test]
    fn test_ctrl_l_clears() {
        let mut app = App::with_input("abc", "5");
        press(&mut app, KeyCode::Enter);
        assert!(app.form.error_message.is_some());

        InputHandler::handle_key_event(&mut app, KeyCode::Char('l'), KeyModifiers::CONTROL);
        assert!(app.form.is_empty());
    }

    #[test]
    fn test_ctrl_y_on_empty_table_reports_nothing_to_copy() {
        let mut app = App::default();
        InputHandler::handle_key_event(&mut app, KeyCode::Char('y'), KeyModifiers::CONTROL);
        assert_eq!(app.status_message.as_deref(), Some("Nothing to copy"));
        assert!(app.form.number_text.is_empty());
    }

    #[test]
    fn test_control_chars_are_not_typed() {
        let mut app = App::default();
        InputHandler::handle_key_event(&mut app, KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert!(app.form.number_text.is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = App::default();
        InputHandler::handle_key_event(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_is_typed_not_quit() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.form.number_text, "q");
    }

    #[test]
    fn test_page_keys_scroll_table() {
        let mut app = App::with_input("2", "30");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.table_scroll, 10);
        press(&mut app, KeyCode::PageDown);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.table_scroll, 29);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.table_scroll, 19);
    }

    #[test]
    fn test_editing_keys() {
        let mut app = App::default();
        type_text(&mut app, "125");
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.form.number_text, "15");
        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.form.number_text, "5");
        press(&mut app, KeyCode::End);
        type_text(&mut app, ".5");
        assert_eq!(app.form.number_text, "5.5");
    }

    #[test]
    fn test_help_mode() {
        let mut app = App::default();
        press(&mut app, KeyCode::F(1));
        assert_eq!(app.mode, AppMode::Help);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.help_scroll, 6);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.help_scroll, 5);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.help_scroll, 0);

        // Keys typed while help is open never reach the form.
        press(&mut app, KeyCode::Char('7'));
        assert!(app.form.number_text.is_empty());

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Form);
        assert!(!app.should_quit);
    }
}
