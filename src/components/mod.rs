//! UI Components
//!
//! Reusable Leptos components.

mod calendar_links;
mod delete_confirm_button;
mod element_breakdown;
mod favorite_button;
mod install_banner;
mod nav_bar;
mod results_table;
mod stats_panel;
mod status;
mod toast_host;
mod tossie_modal;

pub use calendar_links::CalendarLinks;
pub use delete_confirm_button::DeleteConfirmButton;
pub use element_breakdown::ElementBreakdown;
pub use favorite_button::FavoriteButton;
pub use install_banner::InstallBanner;
pub use nav_bar::NavBar;
pub use results_table::ResultsTable;
pub use stats_panel::StatsPanel;
pub use status::{ErrorNotice, Loadable, Spinner};
pub use toast_host::ToastHost;
pub use tossie_modal::TossieModal;
