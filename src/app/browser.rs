//! Browser bindings for the page controller.
//!
//! Everything touching `window` is compiled for the `hydrate` build only; the
//! server render sees the same types as no-ops.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::{use_local_storage_with_options, UseStorageOptions};

use crate::{
    contact::Notifier,
    page::{Document, PageState},
    theme::ThemeStore,
};
#[cfg(feature = "hydrate")]
use crate::{
    page::SPLASH_DURATION,
    scroll::{ScrollCoalescer, ScrollMetrics},
    theme::THEME_STORAGE_KEY,
};

/// Theme preference in `localStorage`, stored as the bare string.
#[derive(Debug, Clone, Copy)]
pub struct LocalThemeStore {
    #[cfg(feature = "hydrate")]
    stored: Signal<String>,
    #[cfg(feature = "hydrate")]
    set_stored: WriteSignal<String>,
}

impl LocalThemeStore {
    pub fn new() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let options = UseStorageOptions::default()
                .listen_to_storage_changes(false)
                .on_error(|e| log::warn!("theme storage unavailable: {e:?}"));
            let (stored, set_stored, _) = use_local_storage_with_options::<String, FromToStringCodec>(
                THEME_STORAGE_KEY,
                options,
            );
            Self { stored, set_stored }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self {}
        }
    }
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            Some(self.stored.get_untracked()).filter(|v| !v.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&mut self, value: &str) {
        #[cfg(feature = "hydrate")]
        self.set_stored.set(value.to_string());
        #[cfg(not(feature = "hydrate"))]
        let _ = value;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDocument;

impl Document for BrowserDocument {
    fn set_root_attribute(&mut self, name: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        if let Some(root) = root_element() {
            if let Err(e) = root.set_attribute(name, value) {
                log::warn!("couldn't set {name} on <html>: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (name, value);
    }

    fn scroll_into_view(&mut self, id: &str) -> bool {
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(id))
            else {
                return false;
            };
            let opts = web_sys::ScrollIntoViewOptions::new();
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
            true
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            false
        }
    }

    fn scroll_to_top(&mut self) {
        #[cfg(feature = "hydrate")]
        if let Some(window) = web_sys::window() {
            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
    }
}

/// `window.alert`, which blocks until dismissed.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&mut self, message: &str) {
        #[cfg(feature = "hydrate")]
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("alert failed: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = message;
    }
}

/// Click handler body shared by every navigation entry.
pub fn navigate(page: RwSignal<PageState>, section_id: &str) {
    page.update(|p| {
        p.navigate_to(section_id, &mut BrowserDocument);
    });
}

pub fn toggle_theme(page: RwSignal<PageState>, store: LocalThemeStore) {
    let mut store = store;
    page.update(|p| {
        p.toggle_theme(&mut store, &mut BrowserDocument);
    });
}

#[cfg(feature = "hydrate")]
fn root_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

#[cfg(feature = "hydrate")]
fn scroll_metrics() -> Option<ScrollMetrics> {
    let root = root_element()?;
    Some(ScrollMetrics::new(
        f64::from(root.scroll_top()),
        f64::from(root.scroll_height()),
        f64::from(root.client_height()),
    ))
}

/// Wire the controller to the browser: stored theme, splash timer, scroll
/// tracking. Timer and listener are released when the app unmounts.
#[cfg(feature = "hydrate")]
pub fn install(page: RwSignal<PageState>, store: LocalThemeStore) {
    Effect::watch(
        || (),
        move |_, _, _| {
            page.update(|p| {
                let theme = p.init_theme(&store, &mut BrowserDocument);
                log::debug!("starting with {theme} theme");
            });
        },
        true,
    );

    match set_timeout_with_handle(move || page.update(PageState::finish_loading), SPLASH_DURATION)
    {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => {
            log::warn!("couldn't schedule splash timer: {e:?}");
            page.update(PageState::finish_loading);
        }
    }

    let coalescer = StoredValue::new(ScrollCoalescer::default());
    let listener = window_event_listener(leptos::ev::scroll, move |_| {
        if !coalescer.try_update_value(ScrollCoalescer::schedule).unwrap_or(false) {
            return;
        }
        request_animation_frame(move || {
            coalescer.update_value(ScrollCoalescer::flush);
            if let Some(metrics) = scroll_metrics() {
                page.update(|p| p.on_scroll(metrics));
            }
        });
    });
    on_cleanup(move || listener.remove());
}
