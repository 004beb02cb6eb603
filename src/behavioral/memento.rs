// Pattern: Memento
// A text editor hands out opaque snapshots of its content; a caretaker keeps
// a linear history of them with a cursor for undo/redo.

use tracing::debug;

// ============================================================================
// Originator and memento
// ============================================================================

/// Snapshot of an editor's content. Only [`TextEditor`] can read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorMemento {
    state: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextEditor {
    content: String,
}

impl TextEditor {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn save_to_memento(&self) -> EditorMemento {
        EditorMemento {
            state: self.content.clone(),
        }
    }

    pub fn restore_from_memento(&mut self, memento: &EditorMemento) {
        self.content.clone_from(&memento.state);
    }
}

// ============================================================================
// Caretaker
// ============================================================================

/// What `save` does with snapshots beyond the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryPolicy {
    /// Drop the redo tail before appending.
    #[default]
    Truncate,
    /// Keep every snapshot; the cursor still jumps to the new tail.
    Append,
}

#[derive(Debug, Default)]
pub struct Caretaker {
    editor: TextEditor,
    history: Vec<EditorMemento>,
    cursor: Option<usize>,
    policy: HistoryPolicy,
}

impl Caretaker {
    pub fn new(editor: TextEditor) -> Self {
        Self::with_policy(editor, HistoryPolicy::default())
    }

    pub fn with_policy(editor: TextEditor, policy: HistoryPolicy) -> Self {
        Self {
            editor,
            history: Vec::new(),
            cursor: None,
            policy,
        }
    }

    pub fn editor(&self) -> &TextEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut TextEditor {
        &mut self.editor
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn save(&mut self) {
        if self.policy == HistoryPolicy::Truncate {
            let keep = self.cursor.map_or(0, |c| c + 1);
            if keep < self.history.len() {
                debug!(dropped = self.history.len() - keep, "discarding redo tail");
                self.history.truncate(keep);
            }
        }
        self.history.push(self.editor.save_to_memento());
        self.cursor = Some(self.history.len() - 1);
    }

    /// Returns `false` when already at the oldest snapshot.
    pub fn undo(&mut self) -> bool {
        match self.cursor {
            Some(current) if current > 0 => {
                self.restore(current - 1);
                true
            }
            _ => false,
        }
    }

    /// Returns `false` when already at the newest snapshot.
    pub fn redo(&mut self) -> bool {
        match self.cursor {
            Some(current) if current + 1 < self.history.len() => {
                self.restore(current + 1);
                true
            }
            _ => false,
        }
    }

    fn restore(&mut self, index: usize) {
        self.cursor = Some(index);
        self.editor.restore_from_memento(&self.history[index]);
    }
}

// ============================================================================
// Demo
// ============================================================================

pub fn run_demo() {
    let mut caretaker = Caretaker::new(TextEditor::new("Initial content"));

    caretaker.save();
    caretaker.editor_mut().set_content("Updated content");

    caretaker.save();
    caretaker.editor_mut().set_content("More changes");

    caretaker.save();
    caretaker.editor_mut().set_content("Even more changes");

    println!("Current content: {}", caretaker.editor().content());

    caretaker.undo();
    println!("Undone content: {}", caretaker.editor().content());

    caretaker.undo();
    println!("Undone content: {}", caretaker.editor().content());

    caretaker.redo();
    println!("Redone content: {}", caretaker.editor().content());

    caretaker.redo();
    println!("Redone content: {}", caretaker.editor().content());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// History [s0, s1, s2] with the cursor on s2.
    fn three_snapshots(policy: HistoryPolicy) -> Caretaker {
        let mut caretaker = Caretaker::with_policy(TextEditor::new("s0"), policy);
        caretaker.save();
        caretaker.editor_mut().set_content("s1");
        caretaker.save();
        caretaker.editor_mut().set_content("s2");
        caretaker.save();
        caretaker
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut caretaker = Caretaker::new(TextEditor::new("x"));
        assert!(!caretaker.undo());
        assert!(!caretaker.redo());
        assert_eq!(caretaker.editor().content(), "x");
        assert_eq!(caretaker.cursor(), None);
    }

    #[test]
    fn test_undo_then_redo() {
        let mut caretaker = three_snapshots(HistoryPolicy::Truncate);
        assert_eq!(caretaker.cursor(), Some(2));

        caretaker.undo();
        assert_eq!(caretaker.editor().content(), "s1");

        caretaker.undo();
        caretaker.redo();
        assert_eq!(caretaker.editor().content(), "s1");
    }

    #[test]
    fn test_undo_at_start_keeps_position() {
        let mut caretaker = three_snapshots(HistoryPolicy::Truncate);
        caretaker.undo();
        caretaker.undo();
        assert!(!caretaker.undo());
        assert_eq!(caretaker.cursor(), Some(0));
        assert_eq!(caretaker.editor().content(), "s0");
    }

    #[test]
    fn test_redo_at_tail_is_noop() {
        let mut caretaker = three_snapshots(HistoryPolicy::Truncate);
        caretaker.editor_mut().set_content("unsaved");
        assert!(!caretaker.redo());
        assert_eq!(caretaker.cursor(), Some(2));
        assert_eq!(caretaker.editor().content(), "unsaved");
    }

    #[test]
    fn test_demo_sequence_skips_unsaved_edit() {
        let mut caretaker = three_snapshots(HistoryPolicy::Truncate);
        caretaker.editor_mut().set_content("unsaved");

        caretaker.undo();
        assert_eq!(caretaker.editor().content(), "s1");
        caretaker.undo();
        assert_eq!(caretaker.editor().content(), "s0");
        caretaker.redo();
        assert_eq!(caretaker.editor().content(), "s1");
        caretaker.redo();
        assert_eq!(caretaker.editor().content(), "s2");
    }

    #[test]
    fn test_save_after_undo_truncates_redo_tail() {
        let mut caretaker = three_snapshots(HistoryPolicy::Truncate);
        caretaker.undo();
        caretaker.editor_mut().set_content("branch");
        caretaker.save();

        assert_eq!(caretaker.history_len(), 3);
        assert!(!caretaker.redo());
        caretaker.undo();
        assert_eq!(caretaker.editor().content(), "s1");
    }

    #[test]
    fn test_append_policy_keeps_redo_tail() {
        let mut caretaker = three_snapshots(HistoryPolicy::Append);
        caretaker.undo();
        caretaker.editor_mut().set_content("branch");
        caretaker.save();

        assert_eq!(caretaker.history_len(), 4);
        assert_eq!(caretaker.cursor(), Some(3));
        assert!(!caretaker.redo());
        caretaker.undo();
        assert_eq!(caretaker.editor().content(), "s2");
    }

    #[test]
    fn test_memento_is_a_snapshot() {
        let mut editor = TextEditor::new("before");
        let memento = editor.save_to_memento();
        editor.set_content("after");
        editor.restore_from_memento(&memento);
        assert_eq!(editor.content(), "before");
    }

    proptest! {
        #[test]
        fn prop_cursor_stays_in_bounds(saves in 1usize..8, moves in proptest::collection::vec(any::<bool>(), 0..30)) {
            let mut caretaker = Caretaker::new(TextEditor::new("start"));
            for i in 0..saves {
                caretaker.editor_mut().set_content(format!("v{i}"));
                caretaker.save();
            }
            for undo in moves {
                if undo {
                    caretaker.undo();
                } else {
                    caretaker.redo();
                }
                let cursor = caretaker.cursor().unwrap();
                prop_assert!(cursor < caretaker.history_len());
                prop_assert_eq!(caretaker.editor().content(), format!("v{cursor}"));
            }
        }
    }
}
