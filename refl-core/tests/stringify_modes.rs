use pretty_assertions::assert_eq;
use refl_core::stringify::{KeyMode, StringifyFieldOptions, StringifyValue};

#[test]
fn default_mode_emits_key_value_pairs() {
    let opts = StringifyFieldOptions::default_opts();
    let mut out = String::new();
    out.push('{');
    refl_core::stringify::push_key(&mut out, &opts, Some("a"));
    25i32.stringify_value(&opts, &mut out);
    out.push('}');
    assert_eq!(out, "{.a: 25}");
}

#[test]
fn key_mode_none_suppresses_keys_entirely() {
    let mut opts = StringifyFieldOptions::default_opts();
    opts.key_mode = KeyMode::None;
    let mut out = String::new();
    refl_core::stringify::push_key(&mut out, &opts, Some("a"));
    assert!(out.is_empty());
}

#[test]
fn cpp_mode_uses_equals_separator() {
    let opts = StringifyFieldOptions::cpp();
    let mut out = String::new();
    refl_core::stringify::push_key(&mut out, &opts, Some("a"));
    assert_eq!(out, ".a = ");
}
