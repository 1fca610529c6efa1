//! Home Screen
//!
//! Static landing content with links to login and registration.

use super::Route;

/// A feature card on the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

/// Landing page content
pub struct HomeScreen;

impl HomeScreen {
    pub const TITLE: &'static str = "File Overview System";

    pub const TAGLINE: &'static str =
        "Upload your files and let AI generate smart overviews instantly.";

    pub const FEATURES: [Feature; 2] = [
        Feature {
            title: "Upload any file",
            description: "Drag & drop or browse your files. Documents, PDFs, and more.",
        },
        Feature {
            title: "AI-powered insights",
            description: "Get concise summaries and highlights from our LLM instantly.",
        },
    ];

    /// Call-to-action links, in display order
    pub fn links() -> [(&'static str, Route); 2] {
        [("Login", Route::Login), ("Register", Route::Register)]
    }
}
