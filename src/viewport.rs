use crate::section::Section;

/// Distance below the top of the viewport used to decide which section is in view.
pub const SCROLL_MARKER_OFFSET: f64 = 200.0;

/// Rendered vertical extent of a section, in document pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionGeometry {
    pub top: u32,
    pub height: u32,
}

impl SectionGeometry {
    pub fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    /// Whether `y` falls inside `[top, top + height)`.
    pub fn contains(&self, y: f64) -> bool {
        let top = f64::from(self.top);
        y >= top && y < top + f64::from(self.height)
    }
}

/// The live document, as seen by the observer.
///
/// Both methods report a missing element instead of failing: `None` from
/// [`geometry`](SectionHost::geometry), `false` from
/// [`scroll_into_view`](SectionHost::scroll_into_view).
pub trait SectionHost {
    fn geometry(&self, section: Section) -> Option<SectionGeometry>;

    /// Smoothly scrolls the section into view. Returns `false` if it has no element.
    fn scroll_into_view(&self, section: Section) -> bool;
}

/// Mutations the page accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageCommand {
    ToggleMenu,
    Navigate(Section),
    Scrolled(f64),
}

/// UI state owned by the page: whether the mobile menu is open and which
/// section is highlighted in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageState {
    menu_open: bool,
    active: Section,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn active_section(&self) -> Section {
        self.active
    }

    pub fn apply<H: SectionHost + ?Sized>(&mut self, command: PageCommand, host: &H) {
        match command {
            PageCommand::ToggleMenu => {
                self.toggle_menu();
            }
            PageCommand::Navigate(section) => {
                self.navigate_to_section(section, host);
            }
            PageCommand::Scrolled(scroll_y) => {
                self.recompute_active_section(scroll_y, host);
            }
        }
    }

    /// Flips the mobile menu flag and returns the new value.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Scrolls to `section` if it exists, then closes the menu either way.
    ///
    /// Returns whether a scroll was requested.
    pub fn navigate_to_section<H: SectionHost + ?Sized>(
        &mut self,
        section: Section,
        host: &H,
    ) -> bool {
        let scrolled = host.scroll_into_view(section);
        self.menu_open = false;
        scrolled
    }

    /// Highlights the first section containing `scroll_y + SCROLL_MARKER_OFFSET`.
    ///
    /// When no section contains the marker the previous value is kept.
    pub fn recompute_active_section<H: SectionHost + ?Sized>(
        &mut self,
        scroll_y: f64,
        host: &H,
    ) -> Section {
        if let Some(section) = section_at(scroll_y, host) {
            self.active = section;
        }
        self.active
    }
}

/// First section, in document order, whose extent contains the scroll marker.
pub fn section_at<H: SectionHost + ?Sized>(scroll_y: f64, host: &H) -> Option<Section> {
    // overscroll can report negative offsets
    let scroll_y = if scroll_y.is_finite() {
        scroll_y.max(0.0)
    } else {
        0.0
    };
    let marker = scroll_y + SCROLL_MARKER_OFFSET;
    Section::ALL.into_iter().find(|&section| {
        host.geometry(section)
            .is_some_and(|geometry| geometry.contains(marker))
    })
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashMap};

    use super::*;

    #[derive(Default)]
    struct FakeDocument {
        sections: HashMap<Section, SectionGeometry>,
        scrolled_to: RefCell<Vec<Section>>,
    }

    impl FakeDocument {
        fn stacked(height: u32) -> Self {
            let sections = Section::ALL
                .into_iter()
                .enumerate()
                .map(|(i, s)| (s, SectionGeometry::new(i as u32 * height, height)))
                .collect();
            Self {
                sections,
                ..Default::default()
            }
        }

        fn without(mut self, section: Section) -> Self {
            self.sections.remove(&section);
            self
        }
    }

    impl SectionHost for FakeDocument {
        fn geometry(&self, section: Section) -> Option<SectionGeometry> {
            self.sections.get(&section).copied()
        }

        fn scroll_into_view(&self, section: Section) -> bool {
            if self.sections.contains_key(&section) {
                self.scrolled_to.borrow_mut().push(section);
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn test_initial_state() {
        let state = PageState::new();
        assert!(!state.menu_open());
        assert_eq!(state.active_section(), Section::Home);
    }

    #[test]
    fn test_marker_selects_section() {
        let doc = FakeDocument::stacked(800);
        let mut state = PageState::new();

        assert_eq!(state.recompute_active_section(0.0, &doc), Section::Home);
        assert_eq!(state.recompute_active_section(700.0, &doc), Section::About);
        assert_eq!(state.recompute_active_section(1500.0, &doc), Section::Work);
        assert_eq!(state.recompute_active_section(2300.0, &doc), Section::Contact);
    }

    #[test]
    fn test_marker_boundaries() {
        let doc = FakeDocument::stacked(800);
        let mut state = PageState::new();

        // marker 799 is the last pixel of home, 800 the first of about
        assert_eq!(state.recompute_active_section(599.0, &doc), Section::Home);
        assert_eq!(state.recompute_active_section(600.0, &doc), Section::About);
    }

    #[test]
    fn test_no_match_keeps_previous() {
        let doc = FakeDocument::stacked(800);
        let mut state = PageState::new();
        state.recompute_active_section(1500.0, &doc);

        // past the end of the last section
        assert_eq!(state.recompute_active_section(10_000.0, &doc), Section::Work);

        // gap above the first section
        let mut doc = FakeDocument::default();
        doc.sections
            .insert(Section::Home, SectionGeometry::new(500, 800));
        assert_eq!(state.recompute_active_section(0.0, &doc), Section::Work);
    }

    #[test]
    fn test_missing_elements_skipped() {
        let doc = FakeDocument::stacked(800).without(Section::About);
        let mut state = PageState::new();
        assert_eq!(state.recompute_active_section(700.0, &doc), Section::Home);
        assert_eq!(state.recompute_active_section(1500.0, &doc), Section::Work);

        let empty = FakeDocument::default();
        assert_eq!(state.recompute_active_section(0.0, &empty), Section::Work);
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let mut doc = FakeDocument::default();
        doc.sections
            .insert(Section::About, SectionGeometry::new(0, 1000));
        doc.sections
            .insert(Section::Contact, SectionGeometry::new(0, 1000));
        assert_eq!(section_at(0.0, &doc), Some(Section::About));
    }

    #[test]
    fn test_zero_height_never_matches() {
        let mut doc = FakeDocument::default();
        doc.sections
            .insert(Section::Home, SectionGeometry::new(200, 0));
        assert_eq!(section_at(0.0, &doc), None);
    }

    #[test]
    fn test_negative_and_nan_scroll_clamped() {
        let doc = FakeDocument::stacked(800);
        assert_eq!(section_at(-120.0, &doc), Some(Section::Home));
        assert_eq!(section_at(f64::NAN, &doc), Some(Section::Home));
    }

    #[test]
    fn test_any_offset_yields_known_section() {
        let doc = FakeDocument::stacked(613);
        let mut state = PageState::new();
        for step in 0..400 {
            let active = state.recompute_active_section(f64::from(step) * 7.5, &doc);
            assert!(Section::ALL.contains(&active));
        }
    }

    #[test]
    fn test_navigate_clears_menu() {
        let doc = FakeDocument::stacked(800);
        let mut state = PageState::new();
        state.toggle_menu();
        assert!(state.menu_open());

        assert!(state.navigate_to_section(Section::Work, &doc));
        assert!(!state.menu_open());
        assert_eq!(*doc.scrolled_to.borrow(), vec![Section::Work]);
        // navigating does not change the highlight, scrolling does
        assert_eq!(state.active_section(), Section::Home);
    }

    #[test]
    fn test_navigate_missing_element_still_clears_menu() {
        let doc = FakeDocument::stacked(800).without(Section::Contact);
        let mut state = PageState::new();
        state.toggle_menu();

        assert!(!state.navigate_to_section(Section::Contact, &doc));
        assert!(!state.menu_open());
        assert!(doc.scrolled_to.borrow().is_empty());

        // closed menu stays closed
        state.navigate_to_section(Section::Contact, &doc);
        assert!(!state.menu_open());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut state = PageState::new();
        assert!(state.toggle_menu());
        assert!(!state.toggle_menu());
        assert_eq!(state, PageState::new());
    }

    #[test]
    fn test_apply_commands() {
        let doc = FakeDocument::stacked(800);
        let mut state = PageState::new();

        state.apply(PageCommand::ToggleMenu, &doc);
        assert!(state.menu_open());

        state.apply(PageCommand::Scrolled(1500.0), &doc);
        assert_eq!(state.active_section(), Section::Work);
        assert!(state.menu_open());

        state.apply(PageCommand::Navigate(Section::About), &doc);
        assert!(!state.menu_open());
        assert_eq!(*doc.scrolled_to.borrow(), vec![Section::About]);
    }
}
