//! Transient UI state of the page and the only operations that change it.
//!
//! Browser effects go through [`Document`] and [`ThemeStore`], so every
//! transition here runs the same way in the WASM client and in unit tests.

use std::time::Duration;

use crate::{
    scroll::{ScrollMetrics, ScrollState},
    theme::{initial_theme, Theme, ThemeStore, THEME_ATTRIBUTE},
};

/// How long the splash overlay stays up after startup.
pub const SPLASH_DURATION: Duration = Duration::from_millis(1000);

/// The parts of the DOM the page controller touches.
pub trait Document {
    fn set_root_attribute(&mut self, name: &str, value: &str);
    /// Smooth-scroll the element with `id` into view. False if there is none.
    fn scroll_into_view(&mut self, id: &str) -> bool;
    fn scroll_to_top(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageState {
    theme: Theme,
    menu_open: bool,
    loading: bool,
    scroll: ScrollState,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl PageState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            menu_open: false,
            loading: true,
            scroll: ScrollState::default(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    pub fn progress_percent(&self) -> f64 {
        self.scroll.progress_percent
    }

    pub fn show_back_to_top(&self) -> bool {
        self.scroll.past_threshold
    }

    /// Adopt the persisted preference and mirror it onto the root element.
    pub fn init_theme(&mut self, store: &impl ThemeStore, document: &mut impl Document) -> Theme {
        self.theme = initial_theme(store);
        document.set_root_attribute(THEME_ATTRIBUTE, self.theme.as_str());
        self.theme
    }

    pub fn toggle_theme(
        &mut self,
        store: &mut impl ThemeStore,
        document: &mut impl Document,
    ) -> Theme {
        self.theme = self.theme.toggled();
        store.save(self.theme.as_str());
        document.set_root_attribute(THEME_ATTRIBUTE, self.theme.as_str());
        log::debug!("theme switched to {}", self.theme);
        self.theme
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    pub fn on_scroll(&mut self, metrics: ScrollMetrics) {
        self.scroll = ScrollState::from_metrics(metrics);
    }

    /// Scroll to a section by element id. The mobile menu closes either way.
    pub fn navigate_to(&mut self, section_id: &str, document: &mut impl Document) -> bool {
        let found = document.scroll_into_view(section_id);
        if !found {
            log::debug!("no section with id {section_id:?}");
        }
        self.menu_open = false;
        found
    }

    pub fn back_to_top(&self, document: &mut impl Document) {
        document.scroll_to_top();
    }
}
