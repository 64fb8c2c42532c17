//! Page-level UI state driven by [`UiEvent`]s

use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::accordion::Accordion;
use super::events::{EventBus, FilterTarget, SubscriptionId, UiEvent};
use super::filter::FilterGroup;
use super::menu::MobileMenu;
use super::notify::Notifier;
use super::particles::{ParticleField, ResizeDebounce};
use super::reveal::{ProgressBars, RevealTracker};
use super::scroll::{anchor_target, ScrollToTop};
use super::theme::{PreferenceStore, ThemeToggle};

/// What the page contains
#[derive(Debug, Clone, Default)]
pub struct UiLayout {
    pub skill_filters: Vec<String>,
    /// Category of each skill card
    pub skill_cards: Vec<String>,
    pub project_filters: Vec<String>,
    pub project_cards: Vec<String>,
    pub faq_heights: Vec<u32>,
    /// `data-width` of each progress bar
    pub progress_targets: Vec<Option<String>>,
    /// Number of cards with an entrance animation
    pub animated_cards: usize,
    /// Element ids that in-page links may scroll to
    pub sections: Vec<String>,
}

pub struct UiState<S: PreferenceStore> {
    pub theme: ThemeToggle<S>,
    pub menu: MobileMenu,
    pub skills: FilterGroup,
    pub projects: FilterGroup,
    pub faq: Accordion,
    pub progress: ProgressBars,
    pub cards: RevealTracker,
    pub scroll_top: ScrollToTop,
    pub particles: ParticleField,
    resize: ResizeDebounce,
    sections: Vec<String>,
    scroll_target: Option<String>,
    notifier: Notifier,
    rng: StdRng,
}

impl<S: PreferenceStore> UiState<S> {
    pub fn new(layout: UiLayout, store: S, notifier: Notifier) -> Self {
        Self::with_rng(layout, store, notifier, StdRng::from_os_rng())
    }

    /// Initial particles are drawn from `rng`
    pub fn with_rng(layout: UiLayout, store: S, notifier: Notifier, mut rng: StdRng) -> Self {
        let mut particles = ParticleField::default();
        particles.regenerate(&mut rng);

        Self {
            theme: ThemeToggle::load(store),
            menu: MobileMenu::default(),
            skills: FilterGroup::new(layout.skill_filters, layout.skill_cards),
            projects: FilterGroup::new(layout.project_filters, layout.project_cards),
            faq: Accordion::new(layout.faq_heights),
            progress: ProgressBars::new(layout.progress_targets.iter().map(Option::as_deref)),
            cards: RevealTracker::new(layout.animated_cards),
            scroll_top: ScrollToTop::default(),
            particles,
            resize: ResizeDebounce::default(),
            sections: layout.sections,
            scroll_target: None,
            notifier,
            rng,
        }
    }

    pub const fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Section the view should smooth-scroll to, cleared on read
    pub fn take_scroll_target(&mut self) -> Option<String> {
        self.scroll_target.take()
    }

    pub fn dispatch(&mut self, event: &UiEvent) {
        match event {
            UiEvent::ThemeToggleClicked => {
                self.theme.toggle();
            }
            UiEvent::MenuButtonClicked => self.menu.open(),
            UiEvent::MenuCloseClicked | UiEvent::MenuLinkClicked => self.menu.close(),
            UiEvent::KeyDown(key) => {
                self.menu.on_key(key);
            }
            UiEvent::FilterClicked { target, filter } => {
                let group = match target {
                    FilterTarget::Skills => &mut self.skills,
                    FilterTarget::Projects => &mut self.projects,
                };
                group.select(filter);
            }
            UiEvent::FaqClicked(index) => self.faq.click(*index),
            UiEvent::CardVisibility { index, ratio } => {
                self.cards.observe(*index, *ratio);
            }
            UiEvent::CardHover { index, entered } => {
                self.cards.hover(*index, *entered);
            }
            UiEvent::ProgressVisibility { index, ratio } => {
                self.progress.observe(*index, *ratio);
            }
            UiEvent::Scrolled(offset) => {
                self.scroll_top.on_scroll(*offset);
            }
            UiEvent::AnchorClicked(href) => {
                if let Some(id) = anchor_target(href) {
                    if self.sections.iter().any(|s| s == id) {
                        self.scroll_target = Some(id.to_string());
                    }
                }
            }
            UiEvent::Resized(at) => self.resize.on_resize(*at),
            UiEvent::Tick(now) => {
                if self.resize.poll(*now) {
                    self.particles.regenerate(&mut self.rng);
                }
            }
            UiEvent::NotificationClosed(id) => {
                self.notifier.close(*id);
            }
        }
    }
}

/// Route every event on `bus` into `state`
pub fn attach<S>(state: Arc<Mutex<UiState<S>>>, bus: &mut EventBus<UiEvent>) -> SubscriptionId
where
    S: PreferenceStore + Send + 'static,
{
    bus.subscribe(move |event| {
        state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .dispatch(event);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::notify::NotificationKind;
    use crate::client::theme::{MemoryStore, Theme, THEME_KEY};
    use std::time::{Duration, Instant};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    fn layout() -> UiLayout {
        UiLayout {
            skill_filters: strings(&["all", "frontend", "backend"]),
            skill_cards: strings(&["frontend", "backend", "backend"]),
            project_filters: strings(&["all", "web", "security"]),
            project_cards: strings(&["web", "security"]),
            faq_heights: vec![100, 140],
            progress_targets: vec![Some("90%".to_string()), Some("75%".to_string())],
            animated_cards: 3,
            sections: strings(&["about", "contact"]),
        }
    }

    fn state() -> UiState<MemoryStore> {
        UiState::with_rng(
            layout(),
            MemoryStore::default(),
            Notifier::new(),
            StdRng::seed_from_u64(42),
        )
    }

    #[test]
    fn test_filter_groups_are_independent() {
        let mut ui = state();
        ui.dispatch(&UiEvent::FilterClicked {
            target: FilterTarget::Skills,
            filter: "backend".to_string(),
        });
        assert_eq!(ui.skills.visible_count(), 2);
        assert_eq!(ui.projects.active(), "all");
        assert_eq!(ui.projects.visible_count(), 2);
    }

    #[test]
    fn test_theme_toggle_persists() {
        let mut ui = state();
        ui.dispatch(&UiEvent::ThemeToggleClicked);
        assert_eq!(ui.theme.theme(), Theme::Light);
        assert_eq!(ui.theme.store().get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_menu_events() {
        let mut ui = state();
        ui.dispatch(&UiEvent::MenuButtonClicked);
        assert!(ui.menu.is_open());
        ui.dispatch(&UiEvent::KeyDown("Escape".to_string()));
        assert!(!ui.menu.is_open());

        ui.dispatch(&UiEvent::MenuButtonClicked);
        ui.dispatch(&UiEvent::MenuLinkClicked);
        assert_eq!(ui.menu.body_overflow(), "");
    }

    #[test]
    fn test_anchor_only_to_known_sections() {
        let mut ui = state();
        ui.dispatch(&UiEvent::AnchorClicked("#".to_string()));
        assert_eq!(ui.take_scroll_target(), None);
        ui.dispatch(&UiEvent::AnchorClicked("#missing".to_string()));
        assert_eq!(ui.take_scroll_target(), None);
        ui.dispatch(&UiEvent::AnchorClicked("#contact".to_string()));
        assert_eq!(ui.take_scroll_target().as_deref(), Some("contact"));
        assert_eq!(ui.take_scroll_target(), None);
    }

    #[test]
    fn test_resize_regenerates_after_debounce() {
        let mut ui = state();
        assert_eq!(ui.particles.generation(), 1);

        let start = Instant::now();
        ui.dispatch(&UiEvent::Resized(start));
        ui.dispatch(&UiEvent::Tick(start + Duration::from_millis(100)));
        assert_eq!(ui.particles.generation(), 1);

        ui.dispatch(&UiEvent::Tick(start + Duration::from_millis(250)));
        assert_eq!(ui.particles.generation(), 2);
        ui.dispatch(&UiEvent::Tick(start + Duration::from_secs(1)));
        assert_eq!(ui.particles.generation(), 2);
    }

    #[test]
    fn test_visibility_events() {
        let mut ui = state();
        ui.dispatch(&UiEvent::CardVisibility {
            index: 1,
            ratio: 0.5,
        });
        ui.dispatch(&UiEvent::ProgressVisibility {
            index: 0,
            ratio: 0.4,
        });
        ui.dispatch(&UiEvent::Scrolled(640.0));

        assert!(ui.cards.is_animated(1));
        assert!(!ui.cards.is_animated(0));
        assert_eq!(ui.progress.bar(0).unwrap().width, "90%");
        assert_eq!(ui.progress.bar(1).unwrap().width, "0");
        assert!(ui.scroll_top.is_visible());

        ui.dispatch(&UiEvent::CardHover {
            index: 0,
            entered: true,
        });
        ui.dispatch(&UiEvent::CardHover {
            index: 1,
            entered: true,
        });
        assert_eq!(ui.cards.transform(0), Some("translateY(-10px)"));
        assert_eq!(ui.cards.transform(1), None);
    }

    #[tokio::test]
    async fn test_attached_state_follows_bus() {
        let ui = Arc::new(Mutex::new(state()));
        let mut bus = EventBus::new();
        attach(Arc::clone(&ui), &mut bus);

        let id = ui
            .lock()
            .unwrap()
            .notifier()
            .show("hello", NotificationKind::Info);

        bus.publish(&UiEvent::FaqClicked(0));
        bus.publish(&UiEvent::FaqClicked(1));
        bus.publish(&UiEvent::NotificationClosed(id));

        let ui = ui.lock().unwrap();
        assert_eq!(ui.faq.open_item(), Some(1));
        assert!(ui.notifier().current().is_none());
    }
}
