use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([\w-]+(?:\.[\w-]+)*)@((?:[\w-]+\.)*\w[\w-]{0,66})\.([a-z]{2,6}(?:\.[a-z]{2})?)$")
        .expect("invalid email pattern")
});

static HASHTAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(#?)([a-z\d-]+)").expect("invalid hashtag pattern"));

/// Validation rule applied to candidate text before commit.
///
/// Exactly one mode is active per engine at a time. Switching modes never
/// re-validates tokens that were already committed.
#[derive(Debug, Clone, Default)]
pub enum MatchMode {
    /// Accept anything.
    #[default]
    None,
    /// Accept only email-shaped candidates (anchored, case-insensitive).
    Email,
    /// Accept hashtag-like candidates. Unanchored, so this is
    /// informational rather than strict: any candidate containing a
    /// hashtag-ish run passes.
    Hashtag,
    /// Accept candidates matching a caller-supplied pattern. There is no
    /// default pattern; see `Engine::set_custom_pattern`.
    Custom(Regex),
}

impl MatchMode {
    /// Canonical uppercase name, matching what `Engine::set_type` accepts.
    pub fn name(&self) -> &'static str {
        match self {
            MatchMode::None => "NONE",
            MatchMode::Email => "EMAIL",
            MatchMode::Hashtag => "HASHTAG",
            MatchMode::Custom(_) => "REGEX",
        }
    }

    /// Runs this mode's predicate against a candidate.
    pub fn accepts(&self, text: &str) -> bool {
        match self {
            MatchMode::None => true,
            MatchMode::Email => EMAIL.is_match(text),
            MatchMode::Hashtag => HASHTAG.is_match(text),
            MatchMode::Custom(re) => re.is_match(text),
        }
    }
}
