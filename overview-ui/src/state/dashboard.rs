//! Dashboard State
//!
//! Reactive state for the dashboard page. The upload form, the overview panel
//! and the history sidebar each read from here; the loading flags are
//! independent of each other.

use leptos::*;

use super::messages::{self, OVERVIEW_PLACEHOLDER};
use crate::api::{self, FileEntry, Model};

#[derive(Clone, Copy)]
pub struct DashboardState {
    /// File chosen in the drop zone
    pub file: RwSignal<Option<web_sys::File>>,
    pub model: RwSignal<Model>,
    /// Overview text; empty shows the placeholder
    pub overview: RwSignal<String>,
    /// Upload in flight
    pub loading: RwSignal<bool>,
    pub files: RwSignal<Vec<FileEntry>>,
    /// History fetch in flight
    pub history_loading: RwSignal<bool>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            file: create_rw_signal(None),
            model: create_rw_signal(Model::default()),
            overview: create_rw_signal(String::new()),
            loading: create_rw_signal(false),
            files: create_rw_signal(Vec::new()),
            history_loading: create_rw_signal(false),
        }
    }

    pub fn can_upload(&self) -> bool {
        self.file.with(Option::is_some) && !self.loading.get()
    }

    pub fn overview_text(&self) -> String {
        let text = self.overview.get();
        if text.is_empty() {
            OVERVIEW_PLACEHOLDER.to_string()
        } else {
            text
        }
    }

    /// Re-fetch the history; failures leave it empty
    pub fn refresh_history(self) {
        spawn_local(async move {
            self.history_loading.set(true);
            let files = match api::fetch_files().await {
                Ok(files) => files,
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch files history: {}", e).into());
                    Vec::new()
                }
            };
            self.files.set(files);
            self.history_loading.set(false);
        });
    }

    /// Upload the selected file, then refresh the history once on success
    pub fn upload(self) {
        if !self.can_upload() {
            return;
        }
        let Some(file) = self.file.get_untracked() else {
            return;
        };
        let model = self.model.get_untracked();

        self.loading.set(true);
        self.overview.set(String::new());

        spawn_local(async move {
            let outcome = api::upload(&file, model).await;
            if let Err(e) = &outcome {
                web_sys::console::error_1(&format!("Upload failed: {}", e).into());
            }
            self.overview.set(messages::upload_result(&outcome));
            self.loading.set(false);

            if outcome.is_ok() {
                self.refresh_history();
            }
        });
    }

    /// Show the overview for a history entry
    pub fn open_entry(self, file_name: String) {
        if !messages::fetch_overviews() {
            self.overview.set(messages::preview_text(&file_name));
            return;
        }

        spawn_local(async move {
            let outcome = api::fetch_overview(&file_name).await;
            if let Err(e) = &outcome {
                web_sys::console::error_1(
                    &format!("Failed to fetch overview for {}: {}", file_name, e).into(),
                );
            }
            self.overview.set(messages::lookup_result(outcome));
        });
    }
}
