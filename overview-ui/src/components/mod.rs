//! UI Components
//!
//! Reusable Leptos components for the screens.

pub mod backdrop;
pub mod form_field;
pub mod history;
pub mod loading;
pub mod overview_panel;
pub mod upload_form;

pub use backdrop::Backdrop;
pub use form_field::FormField;
pub use history::HistorySidebar;
pub use loading::InlineLoading;
pub use overview_panel::OverviewPanel;
pub use upload_form::UploadForm;
