use log::debug;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::interpreter::{DEFAULT_COMMIT_KEYS, DEFAULT_DELETE_KEYS, Interpreter};
use crate::key::{InputEvent, KeyCode};
use crate::mode::MatchMode;
use crate::traits::HostField;
use crate::types::{Intent, Outcome, Token, TokenId};

/// Token lifecycle manager for one attached input field.
///
/// Owns the ordered token collection, the identity counter, and the active
/// matching mode. Keystrokes arrive through [`Engine::handle_event`]; the
/// embedded [`Interpreter`] classifies them and the engine applies the
/// resulting intent. Every mutation calls back into the [`HostField`]
/// within the same call, keeping the collection and the rendered chips in
/// lockstep.
///
/// All rejection paths are silent no-ops: empty candidates, under-length
/// candidates, mode mismatches, and removals of unknown ids leave state
/// untouched and surface only as `None`/`false`/[`Outcome::Ignored`].
/// Rejected text stays in the field for the user to correct.
#[derive(Debug, Clone)]
pub struct Engine {
    items: Vec<Token>,
    mode: MatchMode,
    custom_pattern: Option<Regex>,
    min_length: usize,
    counter: u64,
    commit_on_blur: bool,
    interpreter: Interpreter,
}

/// Point-in-time view of engine state, for diagnostics and tests.
#[derive(Debug, Clone)]
pub struct EngineSnapshot {
    pub mode: &'static str,
    pub item_count: usize,
    pub min_length: usize,
    pub last_key: Option<KeyCode>,
}

pub struct EngineBuilder {
    min_length: usize,
    mode: MatchMode,
    custom_pattern: Option<Regex>,
    commit_keys: Vec<KeyCode>,
    delete_keys: Vec<KeyCode>,
    commit_on_blur: bool,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            min_length: 2,
            mode: MatchMode::None,
            custom_pattern: None,
            commit_keys: DEFAULT_COMMIT_KEYS.to_vec(),
            delete_keys: DEFAULT_DELETE_KEYS.to_vec(),
            commit_on_blur: false,
        }
    }
}

impl EngineBuilder {
    /// Minimum candidate length, counted in grapheme clusters of the
    /// untrimmed text. Default 2.
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn mode(mut self, mode: MatchMode) -> Self {
        if let MatchMode::Custom(re) = &mode {
            self.custom_pattern = Some(re.clone());
        }
        self.mode = mode;
        self
    }

    /// Installs a custom pattern and activates [`MatchMode::Custom`].
    pub fn custom_pattern(mut self, pattern: Regex) -> Self {
        self.custom_pattern = Some(pattern.clone());
        self.mode = MatchMode::Custom(pattern);
        self
    }

    /// Replaces the commit trip set (default: Enter, Space, Comma,
    /// Semicolon).
    pub fn commit_keys(mut self, keys: impl IntoIterator<Item = KeyCode>) -> Self {
        self.commit_keys = keys.into_iter().collect();
        self
    }

    /// Replaces the delete trip set (default: Backspace, Delete).
    pub fn delete_keys(mut self, keys: impl IntoIterator<Item = KeyCode>) -> Self {
        self.delete_keys = keys.into_iter().collect();
        self
    }

    /// Treat focus loss as a commit trigger for the current field text.
    /// Off by default.
    pub fn commit_on_blur(mut self, enabled: bool) -> Self {
        self.commit_on_blur = enabled;
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            items: Vec::new(),
            mode: self.mode,
            custom_pattern: self.custom_pattern,
            min_length: self.min_length,
            counter: 0,
            commit_on_blur: self.commit_on_blur,
            interpreter: Interpreter::new(self.commit_keys, self.delete_keys),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        EngineBuilder::default().build()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            mode: self.mode.name(),
            item_count: self.items.len(),
            min_length: self.min_length,
            last_key: self.interpreter.last_key(),
        }
    }

    /// Feeds one input event through the interpreter and applies the
    /// resulting intent.
    ///
    /// Hosts suppress the keystroke's default effect whenever the outcome
    /// reports [`Outcome::consumed`] — in particular a rejected commit
    /// still swallows the trigger character.
    pub fn handle_event<H: HostField>(&mut self, host: &mut H, input: InputEvent) -> Outcome {
        match input {
            InputEvent::Press(event) => {
                let text = host.field_text();
                match self.interpreter.classify_press(event, &text) {
                    Intent::Commit(candidate) => match self.attempt_commit(host, &candidate) {
                        Some(token) => Outcome::Committed(token),
                        None => Outcome::Suppressed,
                    },
                    _ => Outcome::Ignored,
                }
            }
            InputEvent::Release(event) => {
                let text = host.field_text();
                match self.interpreter.classify_release(event, &text) {
                    Intent::DeleteLast => {
                        if let Some(token) = self.items.last().cloned() {
                            self.remove_item(host, token.id);
                            Outcome::Removed(token)
                        } else {
                            Outcome::Ignored
                        }
                    }
                    _ => Outcome::Ignored,
                }
            }
            InputEvent::Blur => {
                if !self.commit_on_blur {
                    return Outcome::Ignored;
                }
                let text = host.field_text();
                match self.attempt_commit(host, &text) {
                    Some(token) => Outcome::Committed(token),
                    // Blur is not a keystroke; there is nothing to suppress.
                    None => Outcome::Ignored,
                }
            }
        }
    }

    /// Validates `candidate` and, on success, commits it as a new token,
    /// renders it, and clears the field.
    ///
    /// The length check counts grapheme clusters of the raw candidate;
    /// surrounding whitespace counts toward the minimum and is stored as
    /// typed.
    pub fn attempt_commit<H: HostField>(
        &mut self,
        host: &mut H,
        candidate: &str,
    ) -> Option<Token> {
        if candidate.is_empty() {
            return None;
        }
        if candidate.graphemes(true).count() < self.min_length {
            return None;
        }
        if !self.mode.accepts(candidate) {
            return None;
        }
        let token = self.push_token(host, candidate);
        host.set_field_text("");
        Some(token)
    }

    /// Programmatic insertion: bypasses the length and mode checks.
    pub fn insert_item<H: HostField>(&mut self, host: &mut H, text: &str) -> Token {
        self.push_token(host, text)
    }

    fn push_token<H: HostField>(&mut self, host: &mut H, text: &str) -> Token {
        self.counter += 1;
        let token = Token {
            id: TokenId::new(self.counter),
            text: text.to_string(),
        };
        debug!("insert {} {:?}", token.id, token.text);
        self.items.push(token.clone());
        host.render(&token);
        token
    }

    /// Removes the token with the given id, if present, and returns focus
    /// to the field.
    ///
    /// Remaining tokens keep their relative order, identities, and text.
    /// Returns `false` and changes nothing when no token matches.
    pub fn remove_item<H: HostField>(&mut self, host: &mut H, id: TokenId) -> bool {
        let Some(index) = self.items.iter().position(|t| t.id == id) else {
            return false;
        };
        host.unrender(id);
        let removed = self.items.remove(index);
        debug!("remove {} {:?}", removed.id, removed.text);
        host.focus();
        true
    }

    /// Removes the most recently inserted token. Returns `false` on an
    /// empty collection.
    pub fn remove_last<H: HostField>(&mut self, host: &mut H) -> bool {
        match self.items.last().map(|t| t.id) {
            Some(id) => self.remove_item(host, id),
            None => false,
        }
    }

    /// Selects the active matching mode by name, case-insensitively.
    ///
    /// `"REGEX"` activates the stored custom pattern; with no pattern
    /// installed it falls back to `None`, like any unrecognized or empty
    /// name. Already-committed tokens are not re-validated.
    pub fn set_type(&mut self, name: &str) {
        self.mode = match name.to_uppercase().as_str() {
            "EMAIL" => MatchMode::Email,
            "HASHTAG" => MatchMode::Hashtag,
            "REGEX" => match &self.custom_pattern {
                Some(re) => MatchMode::Custom(re.clone()),
                None => MatchMode::None,
            },
            _ => MatchMode::None,
        };
    }

    /// Replaces the active mode directly. A `Custom` mode also becomes the
    /// stored pattern that `set_type("REGEX")` re-activates.
    pub fn set_mode(&mut self, mode: MatchMode) {
        if let MatchMode::Custom(re) = &mode {
            self.custom_pattern = Some(re.clone());
        }
        self.mode = mode;
    }

    /// Compiles `pattern`, stores it, and activates [`MatchMode::Custom`].
    /// On a compile error the active mode is left unchanged.
    pub fn set_custom_pattern(&mut self, pattern: &str) -> Result<(), regex::Error> {
        let re = Regex::new(pattern)?;
        self.custom_pattern = Some(re.clone());
        self.mode = MatchMode::Custom(re);
        Ok(())
    }

    pub fn mode(&self) -> &MatchMode {
        &self.mode
    }

    /// Writes the host field's text.
    pub fn set_value<H: HostField>(&mut self, host: &mut H, value: &str) {
        host.set_field_text(value);
    }

    /// Reads the host field's text, verbatim.
    pub fn get_value<H: HostField>(&self, host: &H) -> String {
        host.field_text()
    }

    /// Committed tokens in insertion order — the only order there is.
    pub fn items(&self) -> &[Token] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The last key code observed by the interpreter.
    pub fn last_key(&self) -> Option<KeyCode> {
        self.interpreter.last_key()
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Detaches from the host: unrenders every chip and clears the
    /// collection and interpreter memories. The id counter is not reset,
    /// so identities stay unique even across re-attachment of the same
    /// engine value.
    pub fn detach<H: HostField>(&mut self, host: &mut H) {
        for token in self.items.drain(..) {
            host.unrender(token.id);
        }
        self.interpreter.reset();
    }
}
