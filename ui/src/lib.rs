//! Shared UI crate for Docboard: report state, derived views and the Dioxus pages used by the
//! web and desktop shells.

pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}
