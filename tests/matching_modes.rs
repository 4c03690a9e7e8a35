use regex::Regex;
use tally_mini::{
    Engine, EngineBuilder, InputEvent, KeyCode, KeyEvent, MatchMode, Modifiers, types::Outcome,
};
mod support;
use support::mock_field::MockField;

fn press(code: KeyCode) -> InputEvent {
    InputEvent::Press(KeyEvent {
        code,
        mods: Modifiers::empty(),
    })
}

fn commit(eng: &mut Engine, field: &mut MockField, text: &str) -> Outcome {
    eng.set_value(field, text);
    eng.handle_event(field, press(KeyCode::Enter))
}

#[test]
fn email_mode_accepts_email_shaped_text() {
    let mut field = MockField::new();
    let mut eng = Engine::new();
    eng.set_type("EMAIL");

    let out = commit(&mut eng, &mut field, "testingemailaddress@gmail.com");
    assert!(matches!(&out, Outcome::Committed(t) if t.text == "testingemailaddress@gmail.com"));

    // Rejected regardless of length
    let out = commit(&mut eng, &mut field, "TESTNOTEMAIL");
    assert_eq!(out, Outcome::Suppressed);
    assert_eq!(eng.len(), 1);
    assert_eq!(eng.get_value(&field), "TESTNOTEMAIL");

    // Subdomains and two-part TLDs pass the shape check
    assert!(matches!(
        commit(&mut eng, &mut field, "user.name@mail.example.co.uk"),
        Outcome::Committed(_)
    ));
}

#[test]
fn set_type_is_case_insensitive() {
    let mut field = MockField::new();
    let mut eng = Engine::new();

    eng.set_type("email");
    assert_eq!(eng.snapshot().mode, "EMAIL");
    assert_eq!(commit(&mut eng, &mut field, "notanemail"), Outcome::Suppressed);
}

#[test]
fn unknown_type_falls_back_to_none() {
    let mut field = MockField::new();
    let mut eng = Engine::new();

    eng.set_type("EMAIL");
    eng.set_type("bogus");
    assert_eq!(eng.snapshot().mode, "NONE");

    // Back to accepting anything
    assert!(matches!(
        commit(&mut eng, &mut field, "definitely not an email"),
        Outcome::Committed(_)
    ));

    eng.set_type("");
    assert_eq!(eng.snapshot().mode, "NONE");
}

#[test]
fn regex_type_without_installed_pattern_falls_back_to_none() {
    let mut field = MockField::new();
    let mut eng = Engine::new();

    eng.set_type("REGEX");
    assert_eq!(eng.snapshot().mode, "NONE");
    assert!(matches!(
        commit(&mut eng, &mut field, "anything"),
        Outcome::Committed(_)
    ));
}

#[test]
fn custom_pattern_via_engine() {
    let mut field = MockField::new();
    let mut eng = Engine::new();

    eng.set_custom_pattern(r"^\d+$").unwrap();
    assert_eq!(eng.snapshot().mode, "REGEX");

    assert!(matches!(
        commit(&mut eng, &mut field, "12345"),
        Outcome::Committed(_)
    ));
    assert_eq!(commit(&mut eng, &mut field, "12a45"), Outcome::Suppressed);
    assert_eq!(eng.len(), 1);

    // Switching away and back by name keeps the stored pattern
    eng.set_type("NONE");
    eng.set_type("REGEX");
    assert_eq!(eng.snapshot().mode, "REGEX");
    assert_eq!(commit(&mut eng, &mut field, "nope"), Outcome::Suppressed);
}

#[test]
fn custom_pattern_via_builder() {
    let mut field = MockField::new();
    let mut eng = EngineBuilder::default()
        .custom_pattern(Regex::new(r"^[A-Z]{2,}$").unwrap())
        .build();

    assert_eq!(eng.snapshot().mode, "REGEX");
    assert!(matches!(
        commit(&mut eng, &mut field, "ABC"),
        Outcome::Committed(_)
    ));
    assert_eq!(commit(&mut eng, &mut field, "abc"), Outcome::Suppressed);
}

#[test]
fn invalid_custom_pattern_leaves_mode_unchanged() {
    let mut eng = Engine::new();
    eng.set_type("EMAIL");

    assert!(eng.set_custom_pattern("(").is_err());
    assert_eq!(eng.snapshot().mode, "EMAIL");
}

#[test]
fn hashtag_mode_matches_hashtag_like_text() {
    let mut field = MockField::new();
    let mut eng = Engine::new();
    eng.set_type("HASHTAG");

    assert!(matches!(
        commit(&mut eng, &mut field, "#rust-lang"),
        Outcome::Committed(_)
    ));
    assert!(matches!(
        commit(&mut eng, &mut field, "no-hash-needed"),
        Outcome::Committed(_)
    ));
    // Nothing hashtag-ish at all
    assert_eq!(commit(&mut eng, &mut field, "!!!"), Outcome::Suppressed);
}

#[test]
fn switching_modes_does_not_revalidate_committed_tokens() {
    let mut field = MockField::new();
    let mut eng = Engine::new();

    assert!(matches!(
        commit(&mut eng, &mut field, "plain old words"),
        Outcome::Committed(_)
    ));

    eng.set_type("EMAIL");
    assert_eq!(eng.len(), 1);
    assert_eq!(eng.items()[0].text, "plain old words");
}

#[test]
fn set_mode_replaces_directly() {
    let mut field = MockField::new();
    let mut eng = Engine::new();

    eng.set_mode(MatchMode::Email);
    assert_eq!(eng.mode().name(), "EMAIL");
    assert_eq!(commit(&mut eng, &mut field, "not-an-email"), Outcome::Suppressed);

    // A Custom mode set directly also becomes the stored pattern
    eng.set_mode(MatchMode::Custom(Regex::new(r"^x+$").unwrap()));
    eng.set_type("NONE");
    eng.set_type("REGEX");
    assert!(matches!(
        commit(&mut eng, &mut field, "xxx"),
        Outcome::Committed(_)
    ));
}

#[test]
fn insert_item_bypasses_mode_and_length() {
    let mut field = MockField::new();
    let mut eng = EngineBuilder::default()
        .min_length(5)
        .mode(MatchMode::Email)
        .build();

    let token = eng.insert_item(&mut field, "x");
    assert_eq!(token.text, "x");
    assert_eq!(eng.len(), 1);
    assert_eq!(field.rendered(), &[token.id]);
}
