//! Application state management for the terminal checklist.
//!
//! This module contains the per-company checklist store, the main
//! application state, and mode management for the terminal user interface.

use crate::domain::{Checklist, ChecklistItem, Status};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents the current mode of the application.
///
/// The application can be in different modes that determine how user input
/// is interpreted and what UI elements are displayed.
#[derive(Debug)]
pub enum AppMode {
    /// Normal navigation mode - arrow keys move selection, shortcuts available
    Normal,
    /// Company entry mode - user is typing a company name to select or add
    Company,
    /// Help screen is displayed
    Help,
    /// Session save dialog is open
    SaveSession,
    /// Session load dialog is open
    LoadSession,
    /// CSV export dialog is open
    ExportCsv,
    /// CSV import dialog is open
    ImportCsv,
}

/// Keyed store mapping company name to its checklist.
///
/// Each company exclusively owns its checklist; scopes are created on first
/// reference with a freshly seeded catalog and are never deleted. The store
/// is owned by the composition root ([`App`]) rather than living in ambient
/// global state, so it can be exercised in isolation.
///
/// # Examples
///
/// ```
/// use tckl::application::ScopeStore;
///
/// let mut store = ScopeStore::default();
/// let checklist = store.load_scope("Posto A").clone();
/// assert_eq!(checklist.len(), 27);
/// assert_eq!(store.companies(), ["Posto A"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopeStore {
    /// Company names in registration order
    companies: Vec<String>,
    /// Checklist state per company
    tables: HashMap<String, Checklist>,
}

impl ScopeStore {
    /// Returns the checklist for a company, seeding it on first reference.
    ///
    /// If the company is not yet registered, a default catalog is created,
    /// registered under the name, and returned.
    pub fn load_scope(&mut self, company: &str) -> &Checklist {
        if !self.tables.contains_key(company) {
            self.companies.push(company.to_string());
            self.tables.insert(company.to_string(), Checklist::seeded());
        }
        &self.tables[company]
    }

    /// Persists the given checklist as the current state for a company,
    /// replacing any prior state. Never fails.
    pub fn save_scope(&mut self, company: &str, checklist: Checklist) {
        if !self.tables.contains_key(company) {
            self.companies.push(company.to_string());
        }
        self.tables.insert(company.to_string(), checklist);
    }

    /// Sets every item of the given checklist back to not done, persists
    /// it, and returns the updated checklist.
    pub fn reset_scope(&mut self, company: &str, mut checklist: Checklist) -> Checklist {
        checklist.reset();
        self.save_scope(company, checklist.clone());
        checklist
    }

    /// Company names in registration order.
    pub fn companies(&self) -> &[String] {
        &self.companies
    }

    pub fn contains(&self, company: &str) -> bool {
        self.tables.contains_key(company)
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}

/// Main application state containing the checklist store and UI state.
///
/// This structure holds all the data needed to render the terminal UI
/// and manage user interactions with the checklist.
///
/// # Examples
///
/// ```
/// use tckl::application::{App, AppMode};
///
/// let app = App::default();
/// assert!(matches!(app.mode, AppMode::Company));
/// assert!(app.company.is_none());
/// ```
#[derive(Debug)]
pub struct App {
    /// Per-company checklist store
    pub store: ScopeStore,
    /// Currently selected company, if any
    pub company: Option<String>,
    /// Working copy of the selected company's checklist
    pub checklist: Checklist,
    /// Selected position within the topic-ordered item sequence
    pub selected: usize,
    /// Top-most item row visible in the viewport
    pub scroll: usize,
    /// Current application mode
    pub mode: AppMode,
    /// Input buffer for company name entry
    pub company_input: String,
    /// Input buffer for filename entry
    pub filename_input: String,
    /// Cursor position within the active input buffer
    pub cursor_position: usize,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Current session filename (if the session has been saved/loaded)
    pub session_file: Option<String>,
    /// Viewport height in item rows (for scrolling calculations)
    pub viewport_rows: usize,
}

impl Default for App {
    fn default() -> Self {
        Self {
            store: ScopeStore::default(),
            company: None,
            checklist: Checklist::seeded(),
            selected: 0,
            scroll: 0,
            mode: AppMode::Company,
            company_input: String::new(),
            filename_input: String::new(),
            cursor_position: 0,
            help_scroll: 0,
            status_message: None,
            session_file: None,
            viewport_rows: 20,
        }
    }
}

impl App {
    /// Selects a company, creating it on first reference.
    ///
    /// Persists the current working copy first so switching companies never
    /// discards edits, then loads (or seeds) the requested company's
    /// checklist into the working copy.
    pub fn select_company(&mut self, company: &str) {
        let name = company.trim();
        if name.is_empty() {
            self.status_message =
                Some("Por favor, selecione ou adicione uma empresa para começar.".to_string());
            return;
        }

        self.commit_working_copy();

        let is_new = !self.store.contains(name);
        self.checklist = self.store.load_scope(name).clone();
        self.company = Some(name.to_string());
        self.selected = 0;
        self.scroll = 0;
        self.mode = AppMode::Normal;
        self.status_message = if is_new {
            Some(format!("Empresa '{}' adicionada com sucesso!", name))
        } else {
            Some(format!("Empresa '{}' selecionada.", name))
        };
    }

    /// Cycles to the next registered company, saving current edits first.
    pub fn next_company(&mut self) {
        let companies = self.store.companies().to_vec();
        if companies.len() < 2 {
            return;
        }
        let current = match &self.company {
            Some(name) => name.clone(),
            None => return,
        };
        if let Some(pos) = companies.iter().position(|c| *c == current) {
            let next = companies[(pos + 1) % companies.len()].clone();
            self.select_company(&next);
        }
    }

    /// Folds the working copy back into the store for the selected company.
    pub fn commit_working_copy(&mut self) {
        if let Some(company) = self.company.clone() {
            self.store.save_scope(&company, self.checklist.clone());
        }
    }

    /// Switches to company entry mode.
    pub fn start_company_input(&mut self) {
        self.mode = AppMode::Company;
        self.company_input.clear();
        self.cursor_position = 0;
        self.status_message = None;
    }

    /// Confirms company entry, selecting or registering the typed name.
    pub fn finish_company_input(&mut self) {
        let name = self.company_input.trim().to_string();
        self.company_input.clear();
        self.cursor_position = 0;
        self.select_company(&name);
    }

    /// Cancels company entry and returns to normal mode.
    ///
    /// Stays in company mode while no company is selected yet, since the
    /// checklist view has nothing to show without one.
    pub fn cancel_company_input(&mut self) {
        self.company_input.clear();
        self.cursor_position = 0;
        if self.company.is_some() {
            self.mode = AppMode::Normal;
        } else {
            self.status_message =
                Some("Por favor, selecione ou adicione uma empresa para começar.".to_string());
        }
    }

    /// Persists the working copy for the selected company.
    pub fn save_progress(&mut self) {
        if let Some(company) = self.company.clone() {
            self.store.save_scope(&company, self.checklist.clone());
            self.status_message = Some("Progresso salvo!".to_string());
        }
    }

    /// Resets every status of the selected company's checklist and persists
    /// the result.
    pub fn reset_checklist(&mut self) {
        if let Some(company) = self.company.clone() {
            self.checklist = self.store.reset_scope(&company, self.checklist.clone());
            self.selected = 0;
            self.scroll = 0;
            self.ensure_cursor_visible();
            self.status_message = Some("Checklist zerado com sucesso!".to_string());
        }
    }

    /// Item index (into the underlying row order) currently selected, if
    /// the checklist is non-empty.
    pub fn selected_item_index(&self) -> Option<usize> {
        self.checklist.display_indices().get(self.selected).copied()
    }

    pub fn selected_item(&self) -> Option<&ChecklistItem> {
        self.selected_item_index()
            .and_then(|index| self.checklist.item(index))
    }

    /// Advances the selected item's status to the next option.
    pub fn cycle_selected_status(&mut self) {
        if let Some(index) = self.selected_item_index() {
            self.checklist.cycle_status(index);
        }
    }

    /// Sets the selected item's status directly.
    pub fn set_selected_status(&mut self, status: Status) {
        if let Some(index) = self.selected_item_index() {
            self.checklist.set_status(index, status);
        }
    }

    pub fn next_item(&mut self) {
        if self.selected + 1 < self.checklist.len() {
            self.selected += 1;
            self.ensure_cursor_visible();
        }
    }

    pub fn previous_item(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.ensure_cursor_visible();
        }
    }

    pub fn first_item(&mut self) {
        self.selected = 0;
        self.ensure_cursor_visible();
    }

    pub fn last_item(&mut self) {
        self.selected = self.checklist.len().saturating_sub(1);
        self.ensure_cursor_visible();
    }

    /// Updates the viewport size for proper scrolling calculations.
    pub fn update_viewport_size(&mut self, rows: usize) {
        self.viewport_rows = rows.max(1);
    }

    /// Ensures the selected item is visible by adjusting scroll position.
    pub fn ensure_cursor_visible(&mut self) {
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + self.viewport_rows {
            self.scroll = self.selected.saturating_sub(self.viewport_rows - 1);
        }
    }

    /// Switches to session save mode to prompt for a filename.
    pub fn start_save_session(&mut self) {
        self.mode = AppMode::SaveSession;
        self.filename_input = self
            .session_file
            .clone()
            .unwrap_or_else(|| "checklist.json".to_string());
        self.cursor_position = self.filename_input.len();
        self.status_message = None;
    }

    /// Switches to session load mode to prompt for a filename.
    pub fn start_load_session(&mut self) {
        self.mode = AppMode::LoadSession;
        self.filename_input = self
            .session_file
            .clone()
            .unwrap_or_else(|| "checklist.json".to_string());
        self.cursor_position = self.filename_input.len();
        self.status_message = None;
    }

    /// Switches to CSV export mode to prompt for a filename.
    pub fn start_csv_export(&mut self) {
        self.mode = AppMode::ExportCsv;
        self.filename_input = "checklist.csv".to_string();
        self.cursor_position = self.filename_input.len();
        self.status_message = None;
    }

    /// Switches to CSV import mode to prompt for a filename.
    pub fn start_csv_import(&mut self) {
        self.mode = AppMode::ImportCsv;
        self.filename_input = "checklist.csv".to_string();
        self.cursor_position = self.filename_input.len();
        self.status_message = None;
    }

    /// Cancels filename input and returns to normal mode.
    pub fn cancel_filename_input(&mut self) {
        self.mode = AppMode::Normal;
        self.filename_input.clear();
        self.cursor_position = 0;
    }

    /// Gets the filename to use for saving the session.
    pub fn get_save_filename(&self) -> String {
        if self.filename_input.is_empty() {
            "checklist.json".to_string()
        } else {
            self.filename_input.clone()
        }
    }

    /// Gets the filename to use for loading a session.
    pub fn get_load_filename(&self) -> String {
        if self.filename_input.is_empty() {
            "checklist.json".to_string()
        } else {
            self.filename_input.clone()
        }
    }

    /// Gets the filename to use for CSV export.
    pub fn get_csv_export_filename(&self) -> String {
        if self.filename_input.is_empty() {
            "checklist.csv".to_string()
        } else {
            self.filename_input.clone()
        }
    }

    /// Gets the filename to use for CSV import.
    pub fn get_csv_import_filename(&self) -> String {
        if self.filename_input.is_empty() {
            "checklist.csv".to_string()
        } else {
            self.filename_input.clone()
        }
    }

    /// Processes the result of a session save operation.
    ///
    /// Persists the working copy into the store before saving happens at
    /// the call site, so this only records the outcome. Returns to normal
    /// mode.
    pub fn set_save_result(&mut self, result: Result<String, String>) {
        match result {
            Ok(filename) => {
                self.session_file = Some(filename.clone());
                self.status_message = Some(format!("Sessão salva em {}", filename));
            }
            Err(error) => {
                self.status_message = Some(format!("Falha ao salvar: {}", error));
            }
        }

        self.mode = AppMode::Normal;
        self.filename_input.clear();
        self.cursor_position = 0;
    }

    /// Processes the result of a session load operation.
    ///
    /// Replaces the store on success and reloads the working copy: the
    /// current company is kept if the loaded session knows it, otherwise
    /// the first registered company is selected, and company entry mode is
    /// reopened when the session is empty.
    pub fn set_load_result(&mut self, result: Result<(ScopeStore, String), String>) {
        match result {
            Ok((store, filename)) => {
                self.store = store;
                self.session_file = Some(filename.clone());
                self.status_message = Some(format!("Sessão carregada de {}", filename));
                self.mode = AppMode::Normal;

                let current = self
                    .company
                    .clone()
                    .filter(|name| self.store.contains(name))
                    .or_else(|| self.store.companies().first().cloned());
                match current {
                    Some(name) => {
                        self.checklist = self.store.load_scope(&name).clone();
                        self.company = Some(name);
                        self.selected = 0;
                        self.scroll = 0;
                    }
                    None => {
                        self.company = None;
                        self.mode = AppMode::Company;
                    }
                }
            }
            Err(error) => {
                self.status_message = Some(format!("Falha ao carregar: {}", error));
                self.mode = AppMode::Normal;
            }
        }

        self.filename_input.clear();
        self.cursor_position = 0;
    }

    /// Processes the result of a CSV export operation.
    pub fn set_csv_export_result(&mut self, result: Result<String, String>) {
        match result {
            Ok(filename) => {
                self.status_message = Some(format!("Checklist exportado para {}", filename));
            }
            Err(error) => {
                self.status_message = Some(format!("Falha ao exportar: {}", error));
            }
        }

        self.mode = AppMode::Normal;
        self.filename_input.clear();
        self.cursor_position = 0;
    }

    /// Processes the result of a CSV import operation.
    ///
    /// Replaces the working copy and persists it to the selected company on
    /// success. Sets an appropriate status message and returns to normal
    /// mode.
    pub fn set_csv_import_result(&mut self, result: Result<(Checklist, String), String>) {
        match result {
            Ok((checklist, filename)) => {
                self.checklist = checklist;
                self.commit_working_copy();
                self.selected = 0;
                self.scroll = 0;
                self.status_message = Some(format!("Checklist importado de {}", filename));
            }
            Err(error) => {
                self.status_message = Some(format!("Falha ao importar: {}", error));
            }
        }

        self.mode = AppMode::Normal;
        self.filename_input.clear();
        self.cursor_position = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Topic;

    #[test]
    fn test_store_load_scope_seeds_on_first_reference() {
        let mut store = ScopeStore::default();
        assert!(store.is_empty());

        let checklist = store.load_scope("Posto A").clone();
        assert_eq!(checklist.len(), 27);
        assert!(checklist.items.iter().all(|i| i.status == Status::NotDone));
        assert_eq!(store.companies(), ["Posto A"]);

        // Second load returns the same table, unchanged
        let again = store.load_scope("Posto A").clone();
        assert_eq!(again, checklist);
        assert_eq!(store.companies().len(), 1);
    }

    #[test]
    fn test_store_save_and_load_round_trip() {
        let mut store = ScopeStore::default();
        let mut checklist = store.load_scope("Posto A").clone();
        checklist.set_status(0, Status::Done);
        checklist.set_status(5, Status::NotApplicable);

        store.save_scope("Posto A", checklist.clone());

        assert_eq!(*store.load_scope("Posto A"), checklist);
    }

    #[test]
    fn test_store_reset_scope() {
        let mut store = ScopeStore::default();
        let mut checklist = store.load_scope("Posto A").clone();
        checklist.set_status(0, Status::Done);
        checklist.set_status(1, Status::NotApplicable);

        let reset = store.reset_scope("Posto A", checklist);

        assert!(reset.items.iter().all(|i| i.status == Status::NotDone));
        assert_eq!(*store.load_scope("Posto A"), reset);
    }

    #[test]
    fn test_store_scopes_are_independent() {
        let mut store = ScopeStore::default();
        let mut a = store.load_scope("Posto A").clone();
        store.load_scope("Posto B");

        a.set_status(0, Status::Done);
        store.save_scope("Posto A", a);

        assert_eq!(store.load_scope("Posto B").done_count(), 0);
        assert_eq!(store.load_scope("Posto A").done_count(), 1);
        assert_eq!(store.companies(), ["Posto A", "Posto B"]);
    }

    #[test]
    fn test_scenario_posto_a_tank_validation() {
        let mut store = ScopeStore::default();
        let mut checklist = store.load_scope("Posto A").clone();
        assert_eq!(checklist.len(), 27);
        assert!(checklist.items.iter().all(|i| i.status == Status::NotDone));

        let index = checklist.find_task("Validar a estrutura de Tanques").unwrap();
        checklist.set_status(index, Status::Done);
        store.save_scope("Posto A", checklist);

        let reloaded = store.load_scope("Posto A").clone();
        for (i, item) in reloaded.items.iter().enumerate() {
            if i == index {
                assert_eq!(item.status, Status::Done);
            } else {
                assert_eq!(item.status, Status::NotDone);
            }
        }
    }

    #[test]
    fn test_app_default_starts_in_company_mode() {
        let app = App::default();
        assert!(matches!(app.mode, AppMode::Company));
        assert!(app.company.is_none());
        assert_eq!(app.selected, 0);
        assert_eq!(app.scroll, 0);
        assert!(app.status_message.is_none());
        assert!(app.session_file.is_none());
    }

    #[test]
    fn test_select_company_registers_and_enters_normal_mode() {
        let mut app = App::default();
        app.company_input = "Posto A".to_string();
        app.finish_company_input();

        assert!(matches!(app.mode, AppMode::Normal));
        assert_eq!(app.company.as_deref(), Some("Posto A"));
        assert_eq!(app.checklist.len(), 27);
        assert!(app
            .status_message
            .as_ref()
            .unwrap()
            .contains("adicionada com sucesso"));
        assert!(app.company_input.is_empty());
    }

    #[test]
    fn test_select_company_blank_name_rejected() {
        let mut app = App::default();
        app.company_input = "   ".to_string();
        app.finish_company_input();

        assert!(matches!(app.mode, AppMode::Company));
        assert!(app.company.is_none());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_cancel_company_input_without_company_stays() {
        let mut app = App::default();
        app.cancel_company_input();
        assert!(matches!(app.mode, AppMode::Company));

        app.select_company("Posto A");
        app.start_company_input();
        app.cancel_company_input();
        assert!(matches!(app.mode, AppMode::Normal));
    }

    #[test]
    fn test_switching_companies_keeps_edits() {
        let mut app = App::default();
        app.select_company("Posto A");
        app.set_selected_status(Status::Done);
        assert_eq!(app.checklist.done_count(), 1);

        app.select_company("Posto B");
        assert_eq!(app.checklist.done_count(), 0);

        app.select_company("Posto A");
        assert_eq!(app.checklist.done_count(), 1);
    }

    #[test]
    fn test_save_progress_persists_working_copy() {
        let mut app = App::default();
        app.select_company("Posto A");
        app.set_selected_status(Status::Done);

        app.save_progress();

        assert_eq!(app.status_message.as_deref(), Some("Progresso salvo!"));
        assert_eq!(app.store.load_scope("Posto A").done_count(), 1);
    }

    #[test]
    fn test_reset_checklist() {
        let mut app = App::default();
        app.select_company("Posto A");
        app.set_selected_status(Status::Done);
        app.next_item();
        app.set_selected_status(Status::NotApplicable);

        app.reset_checklist();

        assert_eq!(
            app.status_message.as_deref(),
            Some("Checklist zerado com sucesso!")
        );
        assert!(app.checklist.items.iter().all(|i| i.status == Status::NotDone));
        assert!(app
            .store
            .load_scope("Posto A")
            .items
            .iter()
            .all(|i| i.status == Status::NotDone));
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_cycle_selected_status() {
        let mut app = App::default();
        app.select_company("Posto A");

        app.cycle_selected_status();
        assert_eq!(app.selected_item().unwrap().status, Status::NotApplicable);
        app.cycle_selected_status();
        assert_eq!(app.selected_item().unwrap().status, Status::Done);
        app.cycle_selected_status();
        assert_eq!(app.selected_item().unwrap().status, Status::NotDone);
    }

    #[test]
    fn test_selection_follows_display_order() {
        let mut app = App::default();
        app.select_company("Posto A");

        assert_eq!(app.selected_item().unwrap().topic, Topic::PreInstallation);
        app.last_item();
        assert_eq!(app.selected, 26);
        assert_eq!(app.selected_item().unwrap().topic, Topic::PostInstallation);

        // Does not run past either end
        app.next_item();
        assert_eq!(app.selected, 26);
        app.first_item();
        app.previous_item();
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_next_company_cycles_in_registration_order() {
        let mut app = App::default();
        app.select_company("Posto A");
        app.select_company("Posto B");
        app.select_company("Posto C");

        app.next_company();
        assert_eq!(app.company.as_deref(), Some("Posto A"));
        app.next_company();
        assert_eq!(app.company.as_deref(), Some("Posto B"));
        app.next_company();
        assert_eq!(app.company.as_deref(), Some("Posto C"));
    }

    #[test]
    fn test_viewport_and_scrolling() {
        let mut app = App::default();
        app.select_company("Posto A");
        app.update_viewport_size(10);

        for _ in 0..15 {
            app.next_item();
        }
        assert_eq!(app.selected, 15);
        assert_eq!(app.scroll, 6);

        app.first_item();
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_session_dialog_defaults() {
        let mut app = App::default();
        app.select_company("Posto A");

        app.start_save_session();
        assert!(matches!(app.mode, AppMode::SaveSession));
        assert_eq!(app.get_save_filename(), "checklist.json");
        app.cancel_filename_input();

        app.session_file = Some("implantacao.json".to_string());
        app.start_load_session();
        assert!(matches!(app.mode, AppMode::LoadSession));
        assert_eq!(app.get_load_filename(), "implantacao.json");
        app.cancel_filename_input();
        assert!(matches!(app.mode, AppMode::Normal));
    }

    #[test]
    fn test_set_save_result() {
        let mut app = App::default();
        app.select_company("Posto A");
        app.start_save_session();

        app.set_save_result(Ok("checklist.json".to_string()));
        assert!(matches!(app.mode, AppMode::Normal));
        assert_eq!(app.session_file.as_deref(), Some("checklist.json"));
        assert!(app.status_message.as_ref().unwrap().contains("Sessão salva"));

        app.start_save_session();
        app.set_save_result(Err("permission denied".to_string()));
        assert!(app
            .status_message
            .as_ref()
            .unwrap()
            .contains("Falha ao salvar"));
    }

    #[test]
    fn test_set_load_result_keeps_known_company() {
        let mut app = App::default();
        app.select_company("Posto A");

        let mut store = ScopeStore::default();
        let mut checklist = store.load_scope("Posto A").clone();
        checklist.set_status(3, Status::Done);
        store.save_scope("Posto A", checklist);
        store.load_scope("Posto B");

        app.set_load_result(Ok((store, "checklist.json".to_string())));

        assert!(matches!(app.mode, AppMode::Normal));
        assert_eq!(app.company.as_deref(), Some("Posto A"));
        assert_eq!(app.checklist.done_count(), 1);
    }

    #[test]
    fn test_set_load_result_falls_back_to_first_company() {
        let mut app = App::default();
        app.select_company("Posto Z");

        let mut store = ScopeStore::default();
        store.load_scope("Posto A");
        store.load_scope("Posto B");

        app.set_load_result(Ok((store, "checklist.json".to_string())));
        assert_eq!(app.company.as_deref(), Some("Posto A"));
    }

    #[test]
    fn test_set_load_result_empty_session_reopens_company_entry() {
        let mut app = App::default();
        app.select_company("Posto A");

        app.set_load_result(Ok((ScopeStore::default(), "empty.json".to_string())));
        assert!(matches!(app.mode, AppMode::Company));
        assert!(app.company.is_none());
    }

    #[test]
    fn test_set_load_result_failure_keeps_state() {
        let mut app = App::default();
        app.select_company("Posto A");
        app.set_selected_status(Status::Done);

        app.set_load_result(Err("arquivo não encontrado".to_string()));

        assert!(matches!(app.mode, AppMode::Normal));
        assert_eq!(app.company.as_deref(), Some("Posto A"));
        assert_eq!(app.checklist.done_count(), 1);
        assert!(app
            .status_message
            .as_ref()
            .unwrap()
            .contains("Falha ao carregar"));
    }

    #[test]
    fn test_set_csv_import_result_replaces_and_persists() {
        let mut app = App::default();
        app.select_company("Posto A");

        let mut imported = Checklist::seeded();
        imported.set_status(0, Status::Done);

        app.set_csv_import_result(Ok((imported.clone(), "checklist.csv".to_string())));

        assert!(matches!(app.mode, AppMode::Normal));
        assert_eq!(app.checklist, imported);
        assert_eq!(*app.store.load_scope("Posto A"), imported);
        assert!(app
            .status_message
            .as_ref()
            .unwrap()
            .contains("Checklist importado"));

        app.set_csv_import_result(Err("coluna ausente".to_string()));
        assert!(app
            .status_message
            .as_ref()
            .unwrap()
            .contains("Falha ao importar"));
        // Working copy unchanged on failure
        assert_eq!(app.checklist, imported);
    }

    #[test]
    fn test_status_message_handling() {
        let mut app = App::default();
        app.select_company("Posto A");
        assert!(app.status_message.is_some());

        app.start_save_session();
        assert!(app.status_message.is_none());

        app.set_save_result(Err("erro".to_string()));
        assert!(app.status_message.is_some());

        app.start_csv_export();
        assert!(app.status_message.is_none());
    }
}
