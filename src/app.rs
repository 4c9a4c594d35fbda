//! Application state management for MonkeyFinder
//!
//! This module contains the main application state, handling keyboard input,
//! data loading, and state transitions between the list and detail views.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};

use crate::cache::MonkeyCache;
use crate::cli::StartupConfig;
use crate::data::{HttpMonkeySource, Monkey, MonkeySource};
use crate::ratings::RatingStore;

/// Application state enum representing the current view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// Initial loading state while fetching data
    Loading,
    /// List view showing all monkeys
    MonkeyList,
    /// Detail view for the monkey with this name
    MonkeyDetail(String),
}

/// Main application struct managing state and data
pub struct App<S = HttpMonkeySource> {
    /// Current application state/view
    pub state: AppState,
    /// Index of currently selected monkey in list view
    pub selected_index: usize,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Monkey to open once data has loaded (from --name)
    pub pending_monkey: Option<String>,
    /// Open the monkey closest to this point once data has loaded (from --near)
    pub pending_location: Option<(f64, f64)>,
    /// Monkey list
    cache: MonkeyCache<S>,
    /// User ratings
    ratings: RatingStore,
    /// Raised by the rating observer and by navigation; cleared on redraw
    dirty: Arc<AtomicBool>,
}

impl App<HttpMonkeySource> {
    /// Creates a new App instance with the given startup configuration.
    pub fn with_startup_config(config: &StartupConfig) -> Self {
        let mut app = Self::with_source(HttpMonkeySource::with_url(config.url.clone()));
        app.pending_monkey = config.initial_monkey.clone();
        app.pending_location = config.near;
        app
    }
}

impl<S: MonkeySource> App<S> {
    /// Creates a new App fetching monkeys from `source`
    pub fn with_source(source: S) -> Self {
        let dirty = Arc::new(AtomicBool::new(true));
        let mut ratings = RatingStore::new();
        let flag = dirty.clone();
        ratings.subscribe(move || flag.store(true, Ordering::SeqCst));

        Self {
            state: AppState::Loading,
            selected_index: 0,
            should_quit: false,
            show_help: false,
            pending_monkey: None,
            pending_location: None,
            cache: MonkeyCache::with_source(source),
            ratings,
            dirty,
        }
    }

    /// Loads the monkey list and leaves the loading state
    ///
    /// Jumps straight to the detail view when a pending monkey was requested
    /// and exists in the list. A named monkey wins over a pending location.
    pub async fn load_monkeys(&mut self) {
        self.cache.get_monkeys().await;

        let location = self.pending_location.take();
        let target = match self.pending_monkey.take() {
            Some(name) => Some(name),
            None => location
                .and_then(|(lat, lon)| self.cache.closest_to(lat, lon))
                .map(|monkey| monkey.name.clone()),
        };

        self.state = AppState::MonkeyList;
        if let Some(name) = target {
            if let Some(index) = self.monkeys().iter().position(|m| m.name == name) {
                self.selected_index = index;
                self.state = AppState::MonkeyDetail(name);
            }
        }
        self.mark_dirty();
    }

    /// Returns the cached monkey list
    pub fn monkeys(&self) -> &[Monkey] {
        self.cache.monkeys()
    }

    /// Returns the currently selected monkey, if any
    pub fn selected_monkey(&self) -> Option<&Monkey> {
        self.monkeys().get(self.selected_index)
    }

    /// Returns the monkey shown in the detail view, if any
    pub fn detail_monkey(&self) -> Option<&Monkey> {
        match &self.state {
            AppState::MonkeyDetail(name) => self.cache.find_monkey_by_name(name).ok(),
            _ => None,
        }
    }

    /// Returns the rating store
    pub fn ratings(&self) -> &RatingStore {
        &self.ratings
    }

    /// Returns and clears the redraw flag
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::SeqCst)
    }

    fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Moves selection up in the monkey list
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Moves selection down in the monkey list
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.monkeys().len() {
            self.selected_index += 1;
        }
    }

    /// Rates the monkey currently shown in the detail view
    fn rate_detail_monkey(&mut self, value: i32) {
        if let AppState::MonkeyDetail(name) = &self.state {
            if let Ok(monkey) = self.cache.find_monkey_by_name(name) {
                self.ratings.set_rating(monkey, value);
            }
        }
    }

    /// Handles keyboard input
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        self.mark_dirty();

        // Help overlay intercepts all keys when shown
        if self.show_help {
            if matches!(
                key_event.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return;
        }

        match self.state {
            AppState::Loading => {
                if key_event.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
            }
            AppState::MonkeyList => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.move_selection_up();
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.move_selection_down();
                }
                KeyCode::Enter => {
                    if let Some(monkey) = self.selected_monkey() {
                        self.state = AppState::MonkeyDetail(monkey.name.clone());
                    }
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
            AppState::MonkeyDetail(_) => match key_event.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                KeyCode::Esc | KeyCode::Backspace => {
                    self.state = AppState::MonkeyList;
                }
                KeyCode::Char(c @ '0'..='5') => {
                    let value = c as i32 - '0' as i32;
                    self.rate_detail_monkey(value);
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
        }
    }
}
