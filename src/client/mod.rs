//! Client side of the site
//!
//! The renderer fetches the content endpoint and produces the markup the page
//! shows. The remaining modules model the page's cosmetic behaviors as plain
//! state objects; [`ui::UiState`] ties them together behind an [`EventBus`].

pub mod accordion;
pub mod events;
pub mod filter;
pub mod forms;
pub mod menu;
pub mod notify;
pub mod particles;
pub mod renderer;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod ui;

pub use events::{EventBus, UiEvent};
pub use notify::{NotificationKind, Notifier};
pub use renderer::{render, ContentClient, FetchError, FetchOutcome, RenderedView};
pub use ui::{UiLayout, UiState};
