use crate::application::{App, AppMode};
use crate::domain::Status;
use crate::infrastructure::{CsvRepository, FileRepository};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::Company => Self::handle_company_mode(app, key),
            AppMode::Help => Self::handle_help_mode(app, key),
            AppMode::SaveSession => Self::handle_filename_input_mode(app, key, "save_session"),
            AppMode::LoadSession => Self::handle_filename_input_mode(app, key, "load_session"),
            AppMode::ExportCsv => Self::handle_filename_input_mode(app, key, "csv_export"),
            AppMode::ImportCsv => Self::handle_filename_input_mode(app, key, "csv_import"),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            match key {
                KeyCode::Char('s') => {
                    app.start_save_session();
                    return;
                }
                KeyCode::Char('o') => {
                    app.start_load_session();
                    return;
                }
                KeyCode::Char('e') => {
                    app.start_csv_export();
                    return;
                }
                KeyCode::Char('i') => {
                    app.start_csv_import();
                    return;
                }
                KeyCode::Char('l') => {
                    app.start_csv_import();
                    return;
                }
                _ => {}
            }
        }

        app.status_message = None;

        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                app.previous_item();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.next_item();
            }
            KeyCode::PageUp => {
                for _ in 0..5 {
                    app.previous_item();
                }
            }
            KeyCode::PageDown => {
                for _ in 0..5 {
                    app.next_item();
                }
            }
            KeyCode::Home => {
                app.first_item();
            }
            KeyCode::End => {
                app.last_item();
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                app.cycle_selected_status();
            }
            KeyCode::Char('1') => {
                app.set_selected_status(Status::Done);
            }
            KeyCode::Char('2') => {
                app.set_selected_status(Status::NotDone);
            }
            KeyCode::Char('3') => {
                app.set_selected_status(Status::NotApplicable);
            }
            KeyCode::Char('s') => {
                app.save_progress();
            }
            KeyCode::Char('r') => {
                app.reset_checklist();
            }
            KeyCode::Char('c') => {
                app.start_company_input();
            }
            KeyCode::Tab => {
                app.next_company();
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.mode = AppMode::Help;
                app.help_scroll = 0;
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => {}
        }
    }

    fn handle_company_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => {
                app.finish_company_input();
            }
            KeyCode::Esc => {
                app.cancel_company_input();
            }
            KeyCode::Tab => {
                // Autocomplete with the first registered company still
                // matching the typed prefix
                let typed = app.company_input.clone();
                if let Some(name) = app
                    .store
                    .companies()
                    .iter()
                    .find(|c| c.starts_with(typed.trim()))
                {
                    app.company_input = name.clone();
                    app.cursor_position = app.company_input.len();
                }
            }
            KeyCode::Backspace => {
                if app.cursor_position > 0 {
                    app.company_input.remove(app.cursor_position - 1);
                    app.cursor_position -= 1;
                }
            }
            KeyCode::Delete => {
                if app.cursor_position < app.company_input.len() {
                    app.company_input.remove(app.cursor_position);
                }
            }
            KeyCode::Left => {
                if app.cursor_position > 0 {
                    app.cursor_position -= 1;
                }
            }
            KeyCode::Right => {
                if app.cursor_position < app.company_input.len() {
                    app.cursor_position += 1;
                }
            }
            KeyCode::Home => {
                app.cursor_position = 0;
            }
            KeyCode::End => {
                app.cursor_position = app.company_input.len();
            }
            KeyCode::Char(c) => {
                app.company_input.insert(app.cursor_position, c);
                app.cursor_position += 1;
            }
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.mode = AppMode::Normal;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if app.help_scroll > 0 {
                    app.help_scroll -= 1;
                }
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

    fn handle_filename_input_mode(app: &mut App, key: KeyCode, mode: &str) {
        match key {
            KeyCode::Enter => {
                match mode {
                    "save_session" => {
                        let filename = app.get_save_filename();
                        app.commit_working_copy();
                        let result = FileRepository::save_session(&app.store, &filename);
                        app.set_save_result(result);
                    }
                    "load_session" => {
                        let filename = app.get_load_filename();
                        let result = FileRepository::load_session(&filename);
                        app.set_load_result(result);
                    }
                    "csv_export" => {
                        let filename = app.get_csv_export_filename();
                        let result = CsvRepository::export_checklist(&app.checklist, &filename);
                        app.set_csv_export_result(result);
                    }
                    "csv_import" => {
                        let filename = app.get_csv_import_filename();
                        let result = CsvRepository::import_checklist(&filename);
                        app.set_csv_import_result(result);
                    }
                    _ => {}
                }
            }
            KeyCode::Esc => {
                app.cancel_filename_input();
            }
            KeyCode::Backspace => {
                if app.cursor_position > 0 {
                    app.filename_input.remove(app.cursor_position - 1);
                    app.cursor_position -= 1;
                }
            }
            KeyCode::Delete => {
                if app.cursor_position < app.filename_input.len() {
                    app.filename_input.remove(app.cursor_position);
                }
            }
            KeyCode::Left => {
                if app.cursor_position > 0 {
                    app.cursor_position -= 1;
                }
            }
            KeyCode::Right => {
                if app.cursor_position < app.filename_input.len() {
                    app.cursor_position += 1;
                }
            }
            KeyCode::Home => {
                app.cursor_position = 0;
            }
            KeyCode::End => {
                app.cursor_position = app.filename_input.len();
            }
            KeyCode::Char(c) => {
                app.filename_input.insert(app.cursor_position, c);
                app.cursor_position += 1;
            }
            _ => {}
        }
    }
}
