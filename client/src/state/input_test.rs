use super::*;

fn pdf(name: &str) -> Candidate {
    Candidate::new(name, "application/pdf")
}

#[test]
fn input_state_default_has_no_document() {
    let state = InputState::default();
    assert!(!state.has_document());
    assert_eq!(state.display_name(), None);
    assert!(!state.drag_over);
}

#[test]
fn picker_accepts_unconditionally() {
    let mut state = InputState::default();
    state.select_from_picker(Candidate::new("notes.txt", "text/plain"));
    assert!(state.has_document());
    assert_eq!(state.display_name(), Some("notes.txt"));
}

#[test]
fn drop_accepts_pdf() {
    let mut state = InputState::default();
    assert!(state.select_from_drop(pdf("annual.pdf")));
    assert_eq!(
        state.document,
        Some(SelectedDocument { name: "annual.pdf".to_owned(), mime_type: "application/pdf".to_owned() })
    );
}

#[test]
fn drop_of_non_pdf_is_silent_noop() {
    let mut state = InputState::default();
    assert!(!state.select_from_drop(Candidate::new("photo.png", "image/png")));
    assert!(!state.has_document());
}

#[test]
fn drop_of_non_pdf_keeps_previous_selection() {
    let mut state = InputState::default();
    state.select_from_picker(pdf("first.pdf"));
    assert!(!state.select_from_drop(Candidate::new("sheet.xlsx", "application/vnd.ms-excel")));
    assert_eq!(state.display_name(), Some("first.pdf"));
}

#[test]
fn drop_requires_exact_media_type() {
    let mut state = InputState::default();
    assert!(!state.select_from_drop(Candidate::new("a.pdf", "application/pdf; charset=binary")));
    assert!(!state.select_from_drop(Candidate::new("a.pdf", "APPLICATION/PDF")));
    assert!(!state.select_from_drop(Candidate::new("a.pdf", "")));
    assert!(!state.has_document());
}

#[test]
fn later_selection_replaces_earlier() {
    let mut state = InputState::default();
    state.select_from_picker(pdf("first.pdf"));
    assert!(state.select_from_drop(pdf("second.pdf")));
    assert_eq!(state.display_name(), Some("second.pdf"));
}

#[test]
fn drop_clears_drag_highlight_either_way() {
    let mut state = InputState::default();
    state.set_drag_over(true);
    state.select_from_drop(Candidate::new("x.png", "image/png"));
    assert!(!state.drag_over);
}

#[test]
fn clear_removes_document() {
    let mut state = InputState::default();
    state.select_from_picker(pdf("a.pdf"));
    state.set_drag_over(true);
    state.clear();
    assert!(!state.has_document());
    assert!(!state.drag_over);
}
