use std::path::{Path, PathBuf};

use crate::view_model::{DashboardViewModel, JobRowView};

/// One job posting as returned by the backend. Display-only; no identity
/// or uniqueness invariant is enforced on this side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub company: String,
    pub title: String,
    pub url: String,
    pub scraped_at: String,
}

/// Structured notification channel. Replaces blocking modal alerts so
/// failures are observable in state and testable without dialogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Upload was submitted without a selected file.
    SelectCsv,
    /// A fetch or health probe failed.
    Error(String),
    /// Upload succeeded; carries the backend's message.
    Uploaded(String),
    /// Upload failed.
    UploadFailed(String),
    /// Health probe succeeded.
    BackendHealthy,
}

impl Notice {
    /// Human-readable text for the notice line.
    pub fn message(&self) -> String {
        match self {
            Notice::SelectCsv => "Select CSV".to_string(),
            Notice::Error(text) => format!("Error: {text}"),
            Notice::Uploaded(text) => format!("Uploaded: {text}"),
            Notice::UploadFailed(text) => format!("Upload failed: {text}"),
            Notice::BackendHealthy => "Backend is healthy".to_string(),
        }
    }
}

/// The page state. All fields are ephemeral; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardState {
    jobs: Vec<Job>,
    fetch_in_flight: bool,
    upload_in_flight: bool,
    selected_file: Option<PathBuf>,
    notice: Option<Notice>,
    dirty: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> DashboardViewModel {
        DashboardViewModel {
            jobs: self
                .jobs
                .iter()
                .map(|job| JobRowView {
                    company: job.company.clone(),
                    title: job.title.clone(),
                    url: job.url.clone(),
                    scraped_at: job.scraped_at.clone(),
                })
                .collect(),
            job_count: self.jobs.len(),
            controls_enabled: !self.fetch_in_flight && !self.upload_in_flight,
            fetch_in_flight: self.fetch_in_flight,
            upload_in_flight: self.upload_in_flight,
            selected_file: self
                .selected_file
                .as_deref()
                .map(|path| path.display().to_string()),
            notice: self.notice.clone(),
        }
    }

    /// Returns whether a render is pending, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn fetch_in_flight(&self) -> bool {
        self.fetch_in_flight
    }

    pub fn upload_in_flight(&self) -> bool {
        self.upload_in_flight
    }

    pub fn selected_file(&self) -> Option<&Path> {
        self.selected_file.as_deref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub(crate) fn begin_fetch(&mut self) {
        self.fetch_in_flight = true;
        self.dirty = true;
    }

    /// The in-flight flag is reset on every settle outcome, so the page
    /// never stays stuck "loading" after a call completes.
    pub(crate) fn settle_fetch(&mut self) {
        self.fetch_in_flight = false;
        self.dirty = true;
    }

    pub(crate) fn begin_upload(&mut self) {
        self.upload_in_flight = true;
        self.dirty = true;
    }

    pub(crate) fn settle_upload(&mut self) {
        self.upload_in_flight = false;
        self.dirty = true;
    }

    /// Replaces the job list wholesale; order is the backend's.
    pub(crate) fn replace_jobs(&mut self, jobs: Vec<Job>) {
        self.jobs = jobs;
        self.dirty = true;
    }

    pub(crate) fn set_selected_file(&mut self, path: PathBuf) {
        self.selected_file = Some(path);
        self.dirty = true;
    }

    pub(crate) fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.dirty = true;
    }

    pub(crate) fn clear_notice(&mut self) {
        if self.notice.take().is_some() {
            self.dirty = true;
        }
    }
}
