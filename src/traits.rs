use crate::types::{Token, TokenId};

/// The rendering and field collaborator the engine drives.
///
/// The engine owns the token collection; the host owns the visible text
/// field and the rendered chips. Every engine operation that changes the
/// collection calls back into the host within the same call, so a token is
/// in the collection exactly when its chip is rendered.
pub trait HostField {
    /// Produce a visible chip for `token`. The host wires the chip's
    /// removal control to call `Engine::remove_item` with `token.id`.
    fn render(&mut self, token: &Token);

    /// Remove the chip associated with `id`.
    fn unrender(&mut self, id: TokenId);

    /// Give the text field input focus.
    fn focus(&mut self);

    /// The field's current raw text.
    fn field_text(&self) -> String;

    /// Replace the field's text.
    fn set_field_text(&mut self, value: &str);
}
