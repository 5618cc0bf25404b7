use crate::Notice;

/// Snapshot of the page for rendering. Plain data; the renderer decides
/// how each field is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardViewModel {
    pub jobs: Vec<JobRowView>,
    pub job_count: usize,
    /// Both action controls are disabled while either operation is in
    /// flight, matching the page's single loading affordance.
    pub controls_enabled: bool,
    pub fetch_in_flight: bool,
    pub upload_in_flight: bool,
    pub selected_file: Option<String>,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub company: String,
    pub title: String,
    pub url: String,
    pub scraped_at: String,
}
