use tally_mini::traits::HostField;
use tally_mini::types::{Token, TokenId};

/// In-memory host: a flat text field plus the list of rendered chip ids,
/// in render order.
pub struct MockField {
    text: String,
    rendered: Vec<TokenId>,
    focus_count: u32,
}

impl MockField {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            rendered: Vec::new(),
            focus_count: 0,
        }
    }

    pub fn rendered(&self) -> &[TokenId] {
        &self.rendered
    }

    pub fn focus_count(&self) -> u32 {
        self.focus_count
    }
}

impl HostField for MockField {
    fn render(&mut self, token: &Token) {
        self.rendered.push(token.id);
    }

    fn unrender(&mut self, id: TokenId) {
        self.rendered.retain(|r| *r != id);
    }

    fn focus(&mut self) {
        self.focus_count += 1;
    }

    fn field_text(&self) -> String {
        self.text.clone()
    }

    fn set_field_text(&mut self, value: &str) {
        self.text = value.to_string();
    }
}
