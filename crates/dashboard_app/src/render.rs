use dashboard_core::DashboardViewModel;

const HEADERS: [&str; 4] = ["Company", "Title", "URL", "When"];

pub fn banner() -> String {
    format!("The Career Stack\n{}", usage())
}

pub fn usage() -> String {
    concat!(
        "Commands:\n",
        "  fetch        fetch new jobs from the backend\n",
        "  file <path>  select a companies CSV for upload\n",
        "  upload       upload the selected CSV\n",
        "  health       probe the backend\n",
        "  dismiss      clear the notice line\n",
        "  quit         exit",
    )
    .to_string()
}

/// Draws the current view: notice line, control availability, selected
/// file, and the results table in backend order.
pub fn render(view: &DashboardViewModel) -> String {
    let mut out = String::new();

    if let Some(notice) = &view.notice {
        out.push_str(&format!("! {}\n", notice.message()));
    }
    if !view.controls_enabled {
        let mut busy = Vec::new();
        if view.fetch_in_flight {
            busy.push("fetch");
        }
        if view.upload_in_flight {
            busy.push("upload");
        }
        out.push_str(&format!("(controls disabled: {} in flight)\n", busy.join(", ")));
    }
    match &view.selected_file {
        Some(name) => out.push_str(&format!("Selected file: {name}\n")),
        None => out.push_str("Selected file: (none)\n"),
    }

    out.push_str(&format!("Results ({})\n", view.job_count));
    out.push_str(&render_table(view));
    out
}

fn render_table(view: &DashboardViewModel) -> String {
    let mut widths: Vec<usize> = HEADERS.iter().map(|header| header.len()).collect();
    for job in &view.jobs {
        let cells = [&job.company, &job.title, &job.url, &job.scraped_at];
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    out.push_str(&render_row(&HEADERS.map(String::from), &widths));
    out.push_str(&format!(
        "{}\n",
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-")
    ));
    for job in &view.jobs {
        let cells = [
            job.company.clone(),
            job.title.clone(),
            job.url.clone(),
            job.scraped_at.clone(),
        ];
        out.push_str(&render_row(&cells, &widths));
    }
    out
}

fn render_row(cells: &[String; 4], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    format!("{}\n", padded.join(" | ").trim_end())
}
