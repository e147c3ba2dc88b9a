// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CaretLocation, DocumentStorage, FlexBoxId};

/// The view relevant data an editor publishes into the shared app state after
/// every applied input event, so peer components (menu, status line) can read
/// it during their render pass. The [`crate::GapBuffer`] itself stays
/// exclusively owned by the editor component and is never shared.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorContent {
    pub text: DocumentStorage,
    pub caret: CaretLocation,
}

// `DocumentStorage` is `SmallString<[u8; 4096]>`; `std` only implements
// `Default` for arrays up to length 32, so `#[derive(Default)]` cannot be used
// here. This manual impl reproduces the derived behavior (an empty document and
// the default caret).
impl Default for EditorContent {
    fn default() -> Self {
        Self {
            text: DocumentStorage::new(),
            caret: CaretLocation::default(),
        }
    }
}

/// Implemented by the app state struct `S` so that
/// [`crate::EditorComponent`] can publish its [`EditorContent`] into it, keyed
/// by the editor's [`FlexBoxId`]. Apps with several editors hold one entry per
/// id.
pub trait HasEditorContents {
    fn get_editor_content(&self, id: FlexBoxId) -> Option<&EditorContent>;
    fn insert_editor_content(&mut self, id: FlexBoxId, content: EditorContent);
}
