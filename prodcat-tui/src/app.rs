use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use prodcat_core::{visible_products, Catalog, FilterState, ProductRow};

use crate::mode::AppMode;

/// Main application state
pub struct App {
    /// Current mode
    pub mode: AppMode,

    /// The static catalog, loaded once at startup
    pub catalog: Catalog,

    /// Owner filter + search text
    pub filter: FilterState,

    /// Status message (shown in hint bar)
    pub status_message: Option<String>,

    /// Should quit?
    pub should_quit: bool,
}

impl App {
    /// Create a new App over a loaded catalog
    pub fn new(catalog: Catalog) -> Self {
        Self {
            mode: AppMode::Normal,
            catalog,
            filter: FilterState::new(),
            status_message: None,
            should_quit: false,
        }
    }

    /// Rows currently passing both filters, in catalog order
    pub fn visible_rows(&self) -> Vec<ProductRow<'_>> {
        visible_products(&self.catalog, &self.filter)
    }

    /// Position of the active owner tab: 0 is the All tab, 1..=n the
    /// users in catalog order. An id matching no user maps to All.
    pub fn selected_tab(&self) -> usize {
        match self.filter.selected_user() {
            None => 0,
            Some(id) => self
                .catalog
                .users
                .iter()
                .position(|u| u.id == id)
                .map(|i| i + 1)
                .unwrap_or(0),
        }
    }

    fn select_tab(&mut self, tab: usize) {
        let user_id = if tab == 0 {
            None
        } else {
            self.catalog.users.get(tab - 1).map(|u| u.id)
        };
        self.filter.select_user(user_id);
        tracing::debug!(?user_id, "owner filter changed");
    }

    fn cycle_tab(&mut self, forward: bool) {
        let tabs = self.catalog.users.len() + 1;
        let current = self.selected_tab();
        let next = if forward {
            (current + 1) % tabs
        } else {
            (current + tabs - 1) % tabs
        };
        self.select_tab(next);
    }

    /// Handle keyboard input
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        match self.mode {
            AppMode::Normal => self.handle_normal_mode(key)?,
            AppMode::Search => self.handle_search_mode(key)?,
        }
        Ok(())
    }

    /// Handle normal mode keys
    fn handle_normal_mode(&mut self, key: KeyEvent) -> Result<()> {
        match (key.code, key.modifiers) {
            // Quit
            (KeyCode::Char('q'), KeyModifiers::NONE) => {
                self.should_quit = true;
            }

            // Enter search mode
            (KeyCode::Char('/'), KeyModifiers::NONE) => {
                self.mode = AppMode::Search;
                self.status_message = None;
            }

            // Clear search (no-op when the query is already empty)
            (KeyCode::Char('c'), KeyModifiers::NONE) => {
                if self.filter.is_query_active() {
                    self.filter.clear_query();
                    self.status_message = Some("Search cleared".to_string());
                }
            }

            // Reset all filters
            (KeyCode::Char('r'), KeyModifiers::NONE) => {
                self.filter.reset();
                self.status_message = Some("All filters reset".to_string());
            }

            // Cycle the owner filter
            (KeyCode::Left, KeyModifiers::NONE) => {
                self.cycle_tab(false);
            }
            (KeyCode::Right, KeyModifiers::NONE) => {
                self.cycle_tab(true);
            }

            // Jump straight to a tab: 0 is All, 1-9 the nth user
            (KeyCode::Char(c @ '0'..='9'), KeyModifiers::NONE) => {
                let tab = c as usize - '0' as usize;
                if tab <= self.catalog.users.len() {
                    self.select_tab(tab);
                }
            }

            // Dismiss status message
            (KeyCode::Esc, KeyModifiers::NONE) => {
                self.status_message = None;
            }

            _ => {}
        }
        Ok(())
    }

    /// Handle search mode keys
    fn handle_search_mode(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            // Leave search mode, keeping the query
            KeyCode::Esc | KeyCode::Enter => {
                self.mode = AppMode::Normal;
            }

            // Backspace
            KeyCode::Backspace => {
                self.filter.pop_query_char();
            }

            // Type characters
            KeyCode::Char(c) => {
                self.filter.push_query_char(c);
            }

            _ => {}
        }
        Ok(())
    }

    /// Poll for events with timeout
    pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}
