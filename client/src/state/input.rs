//! Document selection state for the upload panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the single `SelectedDocument`. The browser `File` behind it is not
//! `Send`, so the page keeps that handle in local storage and swaps it in
//! lockstep with this state; everything here stays plain data.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::ACCEPTED_MIME_TYPE;

/// Name and declared media type of a file offered by picker or drop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub mime_type: String,
}

impl Candidate {
    #[must_use]
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self { name: name.into(), mime_type: mime_type.into() }
    }

    /// Drag-and-drop accepts only an exact media-type match.
    #[must_use]
    pub fn is_accepted_type(&self) -> bool {
        self.mime_type == ACCEPTED_MIME_TYPE
    }
}

/// The document the user chose. Replaced wholesale by any later selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedDocument {
    pub name: String,
    pub mime_type: String,
}

impl From<Candidate> for SelectedDocument {
    fn from(candidate: Candidate) -> Self {
        Self { name: candidate.name, mime_type: candidate.mime_type }
    }
}

/// Upload panel state.
#[derive(Clone, Debug, Default)]
pub struct InputState {
    pub document: Option<SelectedDocument>,
    /// A drag is hovering over the drop zone.
    pub drag_over: bool,
}

impl InputState {
    /// Accept a file from the platform picker, which already filters by type.
    pub fn select_from_picker(&mut self, candidate: Candidate) {
        self.document = Some(candidate.into());
    }

    /// Accept a dropped file only if it is a PDF.
    ///
    /// Returns `false` and leaves the selection untouched otherwise.
    pub fn select_from_drop(&mut self, candidate: Candidate) -> bool {
        self.drag_over = false;
        if !candidate.is_accepted_type() {
            return false;
        }
        self.document = Some(candidate.into());
        true
    }

    pub fn set_drag_over(&mut self, over: bool) {
        self.drag_over = over;
    }

    pub fn clear(&mut self) {
        self.document = None;
        self.drag_over = false;
    }

    #[must_use]
    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }

    /// File name to show under the drop zone, if any.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.document.as_ref().map(|d| d.name.as_str())
    }
}
