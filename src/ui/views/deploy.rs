use hashdeploy::application::{DeployOutcome, DeployReport, FileFailure};
use hashdeploy::domain::entities::ChangeSet;

/// Pending uploads and deletions shown before the confirmation prompt.
pub fn render_pending(changes: &ChangeSet) -> String {
    let mut blocks = Vec::new();
    if !changes.changed.is_empty() {
        blocks.push(render_list(
            &format!("Found {} files to upload:", changes.changed.len()),
            '+',
            changes.changed.iter().map(String::as_str),
        ));
    }
    if !changes.deleted.is_empty() {
        blocks.push(render_list(
            &format!("Found {} files to delete:", changes.deleted.len()),
            '-',
            changes.deleted.iter().map(String::as_str),
        ));
    }
    let mut rendered = blocks.join("\n\n");
    rendered.push('\n');
    rendered
}

pub fn render_outcome(outcome: &DeployOutcome) -> String {
    match outcome {
        DeployOutcome::NothingToDo => "No files need to be uploaded or deleted.".to_string(),
        DeployOutcome::Cancelled => "Deployment cancelled.".to_string(),
        DeployOutcome::Completed(report) => render_report(report),
    }
}

pub fn render_report(report: &DeployReport) -> String {
    if report.is_success() {
        return format!(
            "Deployment completed successfully. ({} uploaded, {} deleted)",
            report.uploaded.len(),
            report.deleted.len()
        );
    }

    let mut lines = vec!["Deployment completed with errors.".to_string()];
    if !report.delete_errors.is_empty() {
        lines.push(render_failures(
            "Failed to delete the following files:",
            '-',
            &report.delete_errors,
        ));
    }
    if !report.upload_errors.is_empty() {
        lines.push(render_failures(
            "Failed to upload the following files:",
            '+',
            &report.upload_errors,
        ));
    }
    lines.join("\n")
}

pub fn render_hashes_written(entries: usize) -> String {
    format!("Hash file generated/updated with {entries} entries.")
}

fn render_list<'a>(title: &str, marker: char, paths: impl Iterator<Item = &'a str>) -> String {
    let mut out = title.to_string();
    for path in paths {
        out.push_str(&format!("\n  {marker} {path}"));
    }
    out
}

fn render_failures(title: &str, marker: char, failures: &[FileFailure]) -> String {
    let mut out = title.to_string();
    for failure in failures {
        out.push_str(&format!("\n  {marker} {} ({})", failure.path, failure.error));
    }
    out
}
