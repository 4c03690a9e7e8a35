use log::debug;

use crate::key::{KeyCode, KeyEvent, Modifiers};
use crate::types::Intent;

pub(crate) const DEFAULT_COMMIT_KEYS: [KeyCode; 4] = [
    KeyCode::Enter,
    KeyCode::Space,
    KeyCode::Comma,
    KeyCode::Semicolon,
];

pub(crate) const DEFAULT_DELETE_KEYS: [KeyCode; 2] = [KeyCode::Backspace, KeyCode::Delete];

// Trips only fire on plain (or shifted) keystrokes.
const BLOCKING_MODS: Modifiers = Modifiers::CTRL.union(Modifiers::ALT).union(Modifiers::META);

/// Classifies raw keystrokes into commit and delete intents.
///
/// Stateless per event apart from two memories: the field text observed at
/// the end of the previous release — what the backspace emptiness check
/// compares against — and the last key code seen, kept for diagnostics.
#[derive(Debug, Clone)]
pub struct Interpreter {
    commit_keys: Vec<KeyCode>,
    delete_keys: Vec<KeyCode>,
    last_text: String,
    last_key: Option<KeyCode>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(DEFAULT_COMMIT_KEYS.to_vec(), DEFAULT_DELETE_KEYS.to_vec())
    }
}

impl Interpreter {
    pub(crate) fn new(commit_keys: Vec<KeyCode>, delete_keys: Vec<KeyCode>) -> Self {
        Self {
            commit_keys,
            delete_keys,
            last_text: String::new(),
            last_key: None,
        }
    }

    /// The most recent key code fed to either classifier.
    pub fn last_key(&self) -> Option<KeyCode> {
        self.last_key
    }

    /// Key-press phase: decide whether this keystroke finalizes the
    /// current field text into a commit candidate.
    ///
    /// A `Commit` intent carries `field_text` verbatim — no trimming — and
    /// obliges the host to suppress the key's default insertion whether or
    /// not the candidate survives validation.
    pub fn classify_press(&mut self, event: KeyEvent, field_text: &str) -> Intent {
        self.last_key = Some(event.code);
        debug!("keypress {:?}", event.code);

        if event.mods.intersects(BLOCKING_MODS) {
            return Intent::Pass;
        }
        if self.commit_keys.contains(&event.code) {
            return Intent::Commit(field_text.to_string());
        }
        Intent::Pass
    }

    /// Key-up phase: decide whether this keystroke deletes the most recent
    /// token, then remember `field_text` for the next release.
    ///
    /// The emptiness check runs against the text captured before this
    /// keystroke, so a single backspace on an already-empty field trips —
    /// the user is not asked to press it twice.
    pub fn classify_release(&mut self, event: KeyEvent, field_text: &str) -> Intent {
        self.last_key = Some(event.code);
        debug!("keyup {:?}", event.code);

        let intent = if self.delete_keys.contains(&event.code)
            && !event.mods.intersects(BLOCKING_MODS)
            && self.last_text.is_empty()
        {
            Intent::DeleteLast
        } else {
            Intent::Pass
        };
        self.last_text = field_text.to_string();
        intent
    }

    pub(crate) fn reset(&mut self) {
        self.last_text.clear();
        self.last_key = None;
    }
}
