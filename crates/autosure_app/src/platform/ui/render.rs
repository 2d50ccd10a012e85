use autosure_core::{AppViewModel, ResultCardView, SelectionView, UploadState};

use super::constants::*;

pub fn selected_file(name: &str) -> String {
    format!("{LABEL_SELECTED_FILE} {name}")
}

/// One line summarizing the button and message, printed on every change.
pub fn status_line(view: &AppViewModel) -> String {
    let button = if view.submit_enabled {
        format!("[{}]", view.submit_label)
    } else {
        format!("[{}] (disabled)", view.submit_label)
    };
    match &view.message {
        Some(message) => format!("{button} {message}"),
        None => button,
    }
}

pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![format!("== {TITLE} | {TAGLINE} ==")];
    lines.push(picker_line(LABEL_IMAGE_PICKER, view.image.as_ref()));
    lines.push(picker_line(LABEL_DOCUMENT_PICKER, view.document.as_ref()));
    lines.push(format!("State: {}", state_label(view.upload)));
    lines.push(status_line(view));

    for card in [&view.image_result, &view.document_result]
        .into_iter()
        .flatten()
    {
        lines.push(String::new());
        lines.extend(render_card(card));
    }
    lines
}

fn picker_line(label: &str, selection: Option<&SelectionView>) -> String {
    match selection {
        Some(selection) => format!(
            "{label}: {} ({}, {} bytes)",
            selection.name, selection.media_type, selection.size_bytes
        ),
        None => format!("{label}: {LABEL_NOTHING_SELECTED}"),
    }
}

fn state_label(state: UploadState) -> &'static str {
    match state {
        UploadState::Idle => "Idle",
        UploadState::Submitting => "Submitting",
        UploadState::Succeeded => "Succeeded",
        UploadState::Failed => "Failed",
    }
}

fn render_card(card: &ResultCardView) -> Vec<String> {
    vec![
        format!("-- {} --", card.title),
        format!("{ROW_STATUS} {}", card.status),
        format!("{ROW_RISK} {}", card.risk),
        format!("{ROW_COMPLIANCE} {}", card.compliance),
        format!("{ROW_CONFIDENCE} {}", card.confidence),
        format!("{ROW_SUMMARY} {}", card.summary),
    ]
}
