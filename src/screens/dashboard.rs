//! Dashboard Screen
//!
//! Upload a file with a model choice and read the generated overview. A
//! sidebar lists previously uploaded files; it is fetched on mount and again
//! after every successful upload.

use super::SOMETHING_WENT_WRONG;
use crate::api::{FileEntry, Model, OverviewApi, UploadFile};

pub const OVERVIEW_PLACEHOLDER: &str = "Your file overview will appear here.";
pub const NO_OVERVIEW_RECEIVED: &str = "No overview received.";
pub const UPLOAD_FAILED: &str = "Error: Failed to generate overview.";
pub const UPLOAD_WENT_WRONG: &str = "Something went wrong while uploading.";
pub const OVERVIEW_FETCH_FAILED: &str = "Error: Failed to fetch overview.";
pub const DROP_ZONE_PROMPT: &str = "Drag & drop a file here, or click to browse";
pub const HISTORY_LOADING: &str = "Loading history...";
pub const HISTORY_EMPTY: &str = "No files uploaded yet.";

/// What opening a history entry does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenMode {
    /// Ask the backend for the stored overview
    #[default]
    Fetch,
    /// Show a local placeholder without a network call
    Preview,
}

/// What the history sidebar shows
#[derive(Debug, PartialEq)]
pub enum HistoryView<'a> {
    Loading,
    Empty,
    Entries(&'a [FileEntry]),
}

impl HistoryView<'_> {
    /// Status line shown instead of the list
    pub fn message(&self) -> Option<&'static str> {
        match self {
            HistoryView::Loading => Some(HISTORY_LOADING),
            HistoryView::Empty => Some(HISTORY_EMPTY),
            HistoryView::Entries(_) => None,
        }
    }
}

/// Placeholder overview for an entry opened in preview mode
pub fn preview_text(file_name: &str) -> String {
    format!(
        "Overview for: {}\n\n(Click would fetch from backend)",
        file_name
    )
}

/// Dashboard state
#[derive(Debug, Clone, Default)]
pub struct DashboardScreen {
    file: Option<UploadFile>,
    model: Model,
    overview: String,
    loading: bool,
    files: Vec<FileEntry>,
    history_loading: bool,
    open_mode: OpenMode,
}

impl DashboardScreen {
    pub fn new(model: Model, open_mode: OpenMode) -> Self {
        Self {
            model,
            open_mode,
            ..Default::default()
        }
    }

    // ============ Upload form ============

    pub fn select_file(&mut self, file: UploadFile) {
        self.file = Some(file);
    }

    pub fn selected_file(&self) -> Option<&UploadFile> {
        self.file.as_ref()
    }

    /// Text shown in the drop zone
    pub fn drop_zone_label(&self) -> &str {
        self.file
            .as_ref()
            .map(|f| f.name.as_str())
            .unwrap_or(DROP_ZONE_PROMPT)
    }

    pub fn set_model(&mut self, model: Model) {
        self.model = model;
    }

    pub fn model(&self) -> Model {
        self.model
    }

    /// Upload control is enabled only with a file and no upload in flight
    pub fn can_upload(&self) -> bool {
        self.file.is_some() && !self.loading
    }

    pub fn upload_label(&self) -> &'static str {
        if self.loading {
            "Processing..."
        } else {
            "Upload & Generate Overview"
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    // ============ Overview ============

    /// Raw overview text; empty until something sets it
    pub fn overview(&self) -> &str {
        &self.overview
    }

    /// Overview text as displayed
    pub fn overview_text(&self) -> &str {
        if self.overview.is_empty() {
            OVERVIEW_PLACEHOLDER
        } else {
            &self.overview
        }
    }

    // ============ History ============

    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    pub fn is_history_loading(&self) -> bool {
        self.history_loading
    }

    pub fn history(&self) -> HistoryView<'_> {
        if self.history_loading {
            HistoryView::Loading
        } else if self.files.is_empty() {
            HistoryView::Empty
        } else {
            HistoryView::Entries(&self.files)
        }
    }

    pub fn open_mode(&self) -> OpenMode {
        self.open_mode
    }

    // ============ Operations ============

    /// Initial load
    pub async fn mount(&mut self, api: &dyn OverviewApi) {
        self.refresh_history(api).await;
    }

    /// Upload the selected file.
    ///
    /// Returns `true` when the backend accepted it. A successful upload is
    /// followed by exactly one history refresh.
    pub async fn upload(&mut self, api: &dyn OverviewApi) -> bool {
        if !self.can_upload() {
            return false;
        }
        let Some(file) = self.file.clone() else {
            return false;
        };

        self.loading = true;
        self.overview.clear();

        let accepted = match api.upload(&file, self.model).await {
            Ok(overview) => {
                tracing::info!(file = %file.name, model = %self.model, "Overview generated");
                self.overview = overview.unwrap_or_else(|| NO_OVERVIEW_RECEIVED.to_string());
                true
            }
            Err(e) if e.is_rejection() => {
                tracing::warn!(file = %file.name, error = %e, "Upload rejected");
                self.overview = UPLOAD_FAILED.to_string();
                false
            }
            Err(e) => {
                tracing::error!(file = %file.name, error = %e, "Upload failed");
                self.overview = UPLOAD_WENT_WRONG.to_string();
                false
            }
        };

        self.loading = false;

        if accepted {
            self.refresh_history(api).await;
        }
        accepted
    }

    /// Re-fetch the whole history; any failure leaves it empty
    pub async fn refresh_history(&mut self, api: &dyn OverviewApi) {
        self.history_loading = true;

        self.files = match api.list_files().await {
            Ok(files) => {
                tracing::debug!(count = files.len(), "History loaded");
                files
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch files history");
                Vec::new()
            }
        };

        self.history_loading = false;
    }

    /// Show the overview for a history entry.
    ///
    /// Returns `false` when the overview could not be retrieved.
    pub async fn open_entry(&mut self, api: &dyn OverviewApi, file_name: &str) -> bool {
        if self.open_mode == OpenMode::Preview {
            self.preview_entry(file_name);
            return true;
        }

        let (overview, found) = match api.fetch_overview(file_name).await {
            Ok(summary) => (summary, true),
            Err(e) if e.is_rejection() => {
                tracing::warn!(file = %file_name, error = %e, "Overview lookup rejected");
                (OVERVIEW_FETCH_FAILED.to_string(), false)
            }
            Err(e) => {
                tracing::error!(file = %file_name, error = %e, "Overview lookup failed");
                (SOMETHING_WENT_WRONG.to_string(), false)
            }
        };

        self.overview = overview;
        found
    }

    /// Show the local placeholder for a history entry
    pub fn preview_entry(&mut self, file_name: &str) {
        self.overview = preview_text(file_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{MockApi, Reply};

    fn report() -> UploadFile {
        UploadFile::new("report.pdf", b"%PDF-1.4".to_vec())
    }

    fn history() -> Vec<FileEntry> {
        vec![FileEntry::new("report.pdf", None), FileEntry::new("notes.txt", None)]
    }

    #[test]
    fn test_initial_state() {
        let screen = DashboardScreen::default();

        assert_eq!(screen.model(), Model::Gpt4);
        assert_eq!(screen.overview_text(), OVERVIEW_PLACEHOLDER);
        assert_eq!(screen.drop_zone_label(), DROP_ZONE_PROMPT);
        assert_eq!(screen.history(), HistoryView::Empty);
        assert_eq!(screen.history().message(), Some(HISTORY_EMPTY));
        assert_eq!(screen.upload_label(), "Upload & Generate Overview");
    }

    #[test]
    fn test_upload_disabled_without_file() {
        let mut screen = DashboardScreen::default();
        assert!(!screen.can_upload());

        screen.select_file(report());
        assert!(screen.can_upload());
        assert_eq!(screen.drop_zone_label(), "report.pdf");
    }

    #[tokio::test]
    async fn test_upload_without_file_makes_no_call() {
        let api = MockApi::default();
        let mut screen = DashboardScreen::default();

        assert!(!screen.upload(&api).await);
        assert_eq!(api.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_successful_upload_sets_overview_and_refreshes_once() {
        let api = MockApi {
            upload: Reply::Ok(Some("A two sentence summary.".to_string())),
            files: Reply::Ok(history()),
            ..Default::default()
        };
        let mut screen = DashboardScreen::new(Model::Claude3, OpenMode::Fetch);
        screen.select_file(report());

        assert!(screen.upload(&api).await);

        assert_eq!(screen.overview_text(), "A two sentence summary.");
        assert_eq!(MockApi::calls(&api.upload_calls), 1);
        assert_eq!(MockApi::calls(&api.files_calls), 1);
        assert_eq!(screen.files().len(), 2);
        assert!(!screen.is_loading());
        assert_eq!(
            *api.last_upload.lock().unwrap(),
            Some(("report.pdf".to_string(), Model::Claude3))
        );
    }

    #[tokio::test]
    async fn test_upload_without_overview_field() {
        let api = MockApi::default();
        let mut screen = DashboardScreen::default();
        screen.select_file(report());

        screen.upload(&api).await;
        assert_eq!(screen.overview_text(), NO_OVERVIEW_RECEIVED);
    }

    #[tokio::test]
    async fn test_rejected_upload_does_not_refresh() {
        let api = MockApi {
            upload: Reply::Rejected(401, Some("access denied")),
            ..Default::default()
        };
        let mut screen = DashboardScreen::default();
        screen.select_file(report());

        assert!(!screen.upload(&api).await);
        assert_eq!(screen.overview_text(), UPLOAD_FAILED);
        assert_eq!(MockApi::calls(&api.files_calls), 0);
        assert!(screen.can_upload());
    }

    #[tokio::test]
    async fn test_upload_transport_failure() {
        let api = MockApi {
            upload: Reply::Unavailable,
            ..Default::default()
        };
        let mut screen = DashboardScreen::default();
        screen.select_file(report());

        screen.upload(&api).await;
        assert_eq!(screen.overview_text(), UPLOAD_WENT_WRONG);
    }

    #[tokio::test]
    async fn test_mount_loads_history() {
        let api = MockApi {
            files: Reply::Ok(history()),
            ..Default::default()
        };
        let mut screen = DashboardScreen::default();

        screen.mount(&api).await;

        assert_eq!(MockApi::calls(&api.files_calls), 1);
        assert!(matches!(screen.history(), HistoryView::Entries(entries) if entries.len() == 2));
        assert_eq!(screen.history().message(), None);
    }

    #[tokio::test]
    async fn test_failed_history_fetch_is_empty() {
        let ok = MockApi {
            files: Reply::Ok(history()),
            ..Default::default()
        };
        let failing = MockApi {
            files: Reply::Rejected(500, Some("failed to list files")),
            ..Default::default()
        };
        let mut screen = DashboardScreen::default();
        screen.mount(&ok).await;
        assert_eq!(screen.files().len(), 2);

        screen.refresh_history(&failing).await;

        assert!(screen.files().is_empty());
        assert_eq!(screen.history().message(), Some(HISTORY_EMPTY));
        assert!(!screen.is_history_loading());
    }

    #[tokio::test]
    async fn test_preview_mode_makes_no_call() {
        let api = MockApi::default();
        let mut screen = DashboardScreen::new(Model::Gpt4, OpenMode::Preview);

        assert!(screen.open_entry(&api, "report.pdf").await);

        assert_eq!(
            screen.overview_text(),
            "Overview for: report.pdf\n\n(Click would fetch from backend)"
        );
        assert_eq!(api.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_fetch_mode_shows_stored_overview() {
        let api = MockApi {
            overview: Reply::Ok("Stored summary.".to_string()),
            ..Default::default()
        };
        let mut screen = DashboardScreen::default();

        screen.open_entry(&api, "report.pdf").await;

        assert_eq!(screen.overview_text(), "Stored summary.");
        assert_eq!(MockApi::calls(&api.overview_calls), 1);
    }

    #[tokio::test]
    async fn test_fetch_mode_failure() {
        let api = MockApi {
            overview: Reply::Rejected(500, Some("failed to fetch summary")),
            ..Default::default()
        };
        let mut screen = DashboardScreen::default();

        assert!(!screen.open_entry(&api, "report.pdf").await);
        assert_eq!(screen.overview_text(), OVERVIEW_FETCH_FAILED);
    }
}
