use crate::{DashboardState, Effect, Msg, Notice};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: DashboardState, msg: Msg) -> (DashboardState, Vec<Effect>) {
    let effects = match msg {
        Msg::FetchLatestClicked => {
            // Operations are serialized against themselves: a click while a
            // fetch is in flight is ignored, never queued or cancelled.
            if state.fetch_in_flight() {
                return (state, Vec::new());
            }
            state.begin_fetch();
            vec![Effect::FetchLatest]
        }
        Msg::FetchFinished(result) => {
            state.settle_fetch();
            match result {
                Ok(jobs) => state.replace_jobs(jobs),
                // Failed fetch leaves the previous job list untouched.
                Err(text) => state.set_notice(Notice::Error(text)),
            }
            Vec::new()
        }
        Msg::FileSelected(path) => {
            state.set_selected_file(path);
            Vec::new()
        }
        Msg::UploadSubmitted => {
            if state.upload_in_flight() {
                return (state, Vec::new());
            }
            let Some(path) = state.selected_file().map(ToOwned::to_owned) else {
                // Validation failure: no network call is issued.
                state.set_notice(Notice::SelectCsv);
                return (state, Vec::new());
            };
            state.begin_upload();
            vec![Effect::UploadCsv { path }]
        }
        Msg::UploadFinished(result) => {
            state.settle_upload();
            // The selected file is intentionally kept so the user can
            // re-submit the same file; the job list is not touched here.
            // Upload and fetch stay decoupled.
            match result {
                Ok(message) => state.set_notice(Notice::Uploaded(message)),
                Err(text) => state.set_notice(Notice::UploadFailed(text)),
            }
            Vec::new()
        }
        Msg::HealthCheckRequested => vec![Effect::CheckHealth],
        Msg::HealthChecked(result) => {
            match result {
                Ok(()) => state.set_notice(Notice::BackendHealthy),
                Err(text) => state.set_notice(Notice::Error(text)),
            }
            Vec::new()
        }
        Msg::NoticeDismissed => {
            state.clear_notice();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
