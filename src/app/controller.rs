use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::{
    section::Section,
    viewport::{PageCommand, PageState, SectionGeometry, SectionHost},
};

/// [`SectionHost`] backed by the live DOM.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentHost;

impl DocumentHost {
    fn element(section: Section) -> Option<HtmlElement> {
        document()
            .get_element_by_id(section.id())?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

impl SectionHost for DocumentHost {
    fn geometry(&self, section: Section) -> Option<SectionGeometry> {
        let el = Self::element(section)?;
        Some(SectionGeometry::new(
            el.offset_top().max(0) as u32,
            el.offset_height().max(0) as u32,
        ))
    }

    fn scroll_into_view(&self, section: Section) -> bool {
        let Some(el) = Self::element(section) else {
            return false;
        };
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        true
    }
}

/// Page-level UI state. Views read the memos; all changes go through
/// [`dispatch`](PageController::dispatch).
#[derive(Debug, Clone, Copy)]
pub struct PageController {
    state: RwSignal<PageState>,
    menu_open: Memo<bool>,
    active: Memo<Section>,
}

impl PageController {
    pub fn new() -> Self {
        let state = RwSignal::new(PageState::new());
        Self {
            state,
            menu_open: Memo::new(move |_| state.with(PageState::menu_open)),
            active: Memo::new(move |_| state.with(PageState::active_section)),
        }
    }

    pub fn provide() -> Self {
        let controller = Self::new();
        provide_context(controller);
        controller
    }

    pub fn menu_open(&self) -> Memo<bool> {
        self.menu_open
    }

    pub fn active_section(&self) -> Memo<Section> {
        self.active
    }

    pub fn dispatch(&self, command: PageCommand) {
        if let PageCommand::Navigate(section) = command {
            log::debug!("navigating to #{section}");
        }
        self.state.update(|s| s.apply(command, &DocumentHost));
    }

    pub fn toggle_menu(&self) {
        self.dispatch(PageCommand::ToggleMenu);
    }

    pub fn navigate(&self, section: Section) {
        self.dispatch(PageCommand::Navigate(section));
    }
}

impl Default for PageController {
    fn default() -> Self {
        Self::new()
    }
}

fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

/// Recomputes the active section on every scroll event for as long as the
/// calling component is mounted.
pub fn use_section_tracking(page: PageController) {
    // removed again when the owner is disposed
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        page.dispatch(PageCommand::Scrolled(scroll_y()));
    });

    // a reload can land mid-page
    Effect::new(move |_| {
        page.dispatch(PageCommand::Scrolled(scroll_y()));
    });
}
