use std::sync::Once;

use autosure_core::{
    update, Affordance, AppState, Category, Effect, Msg, PickedFile, UploadState,
    DOCUMENT_REJECTED, IMAGE_REJECTED, MEDIA_DOC, MEDIA_PDF, MEDIA_PNG, MSG_NOTHING_SELECTED,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(autosure_logging::initialize_for_tests);
}

fn picked(name: &str, media_type: &str) -> PickedFile {
    PickedFile {
        name: name.to_string(),
        media_type: media_type.to_string(),
        bytes: name.as_bytes().to_vec(),
    }
}

fn pick(state: AppState, affordance: Affordance, file: PickedFile) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::FilePicked {
            affordance,
            file: Some(file),
        },
    )
}

#[test]
fn accepted_document_pick_is_held_and_announced() {
    init_logging();
    let (mut state, effects) = pick(
        AppState::new(),
        Affordance::Document,
        picked("policy.pdf", MEDIA_PDF),
    );

    assert_eq!(
        effects,
        vec![Effect::SelectionAccepted {
            affordance: Affordance::Document,
            category: Category::Document,
            name: "policy.pdf".to_string(),
        }]
    );
    let view = state.view();
    assert_eq!(view.document.as_ref().map(|s| s.name.as_str()), Some("policy.pdf"));
    assert!(view.image.is_none());
    assert_eq!(view.message, None);
    assert_eq!(view.upload, UploadState::Idle);
    assert!(state.consume_dirty());
}

#[test]
fn rejected_pick_sets_affordance_message_and_clears_slot() {
    init_logging();
    let (state, _) = pick(AppState::new(), Affordance::Image, picked("roof.png", MEDIA_PNG));
    assert!(state.selection(Category::Image).is_some());

    let (state, effects) = pick(state, Affordance::Image, picked("notes.txt", "text/plain"));
    assert!(effects.is_empty());
    assert!(state.selection(Category::Image).is_none());
    assert_eq!(state.message(), Some(IMAGE_REJECTED));

    let (state, effects) = pick(state, Affordance::Document, picked("photo.png", MEDIA_PNG));
    assert!(effects.is_empty());
    assert_eq!(state.message(), Some(DOCUMENT_REJECTED));
}

#[test]
fn rejected_pick_leaves_other_affordance_alone() {
    init_logging();
    let (state, _) = pick(
        AppState::new(),
        Affordance::Document,
        picked("policy.pdf", MEDIA_PDF),
    );
    let (state, _) = pick(state, Affordance::Image, picked("scan.bmp", "image/bmp"));

    assert!(state.selection(Category::Document).is_some());
    assert!(state.selection(Category::Image).is_none());
}

#[test]
fn empty_pick_is_rejected() {
    init_logging();
    let (state, _) = pick(
        AppState::new(),
        Affordance::Document,
        picked("policy.pdf", MEDIA_PDF),
    );
    let (state, effects) = update(
        state,
        Msg::FilePicked {
            affordance: Affordance::Document,
            file: None,
        },
    );

    assert!(effects.is_empty());
    assert!(state.selection(Category::Document).is_none());
    assert_eq!(state.message(), Some(DOCUMENT_REJECTED));
}

#[test]
fn accepted_pick_clears_previous_message() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::SubmitClicked);
    assert_eq!(state.message(), Some(MSG_NOTHING_SELECTED));

    let (state, _) = pick(state, Affordance::Image, picked("roof.png", MEDIA_PNG));
    assert_eq!(state.message(), None);
}

#[test]
fn reselecting_replaces_instead_of_accumulating() {
    init_logging();
    let (state, _) = pick(AppState::new(), Affordance::Image, picked("a.png", MEDIA_PNG));
    let (state, _) = pick(state, Affordance::Image, picked("a.png", MEDIA_PNG));
    let (state, _) = pick(state, Affordance::Image, picked("b.png", MEDIA_PNG));

    let view = state.view();
    assert_eq!(view.image.as_ref().map(|s| s.name.as_str()), Some("b.png"));
    assert!(view.document.is_none());
}

#[test]
fn legacy_picker_accepts_word_into_document_slot() {
    init_logging();
    let (state, effects) = pick(
        AppState::new(),
        Affordance::LegacyDocument,
        picked("claim.doc", MEDIA_DOC),
    );

    assert_eq!(
        effects,
        vec![Effect::SelectionAccepted {
            affordance: Affordance::LegacyDocument,
            category: Category::Document,
            name: "claim.doc".to_string(),
        }]
    );
    assert_eq!(
        state.selection(Category::Document).map(|s| s.media_type.as_str()),
        Some(MEDIA_DOC)
    );

    let (state, effects) = pick(state, Affordance::Document, picked("claim.doc", MEDIA_DOC));
    assert!(effects.is_empty());
    assert!(state.selection(Category::Document).is_none());
}

#[test]
fn submit_without_selection_sets_message_and_emits_nothing() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::SubmitClicked);

    assert!(effects.is_empty());
    assert_eq!(state.upload_state(), UploadState::Idle);
    assert_eq!(state.message(), Some(MSG_NOTHING_SELECTED));
    assert!(state.consume_dirty());
}

#[test]
fn submit_after_only_rejected_picks_emits_nothing() {
    init_logging();
    let (state, _) = pick(AppState::new(), Affordance::Document, picked("a.txt", "text/plain"));
    let (state, _) = pick(state, Affordance::Image, picked("b.gif", "image/gif"));
    let (state, effects) = update(state, Msg::SubmitClicked);

    assert!(effects.is_empty());
    assert_eq!(state.message(), Some(MSG_NOTHING_SELECTED));
}
