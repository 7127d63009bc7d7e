#![allow(non_snake_case)]

use super::*;
use crate::bundle::MapBundle;

// format_message tests

#[test]
fn format_message___two_placeholders___substitutes_in_order() {
    let result = format_message("hello {0} {1}", &[&"world", &"again"]);

    assert_eq!(result, "hello world again");
}

#[test]
fn format_message___placeholders_out_of_order___uses_index() {
    let result = format_message("{1} before {0}", &[&"a", &"b"]);

    assert_eq!(result, "b before a");
}

#[test]
fn format_message___repeated_placeholder___substitutes_each() {
    let result = format_message("{0}-{0}-{0}", &[&7]);

    assert_eq!(result, "7-7-7");
}

#[test]
fn format_message___index_out_of_range___left_verbatim() {
    let result = format_message("{0} and {3}", &[&"x"]);

    assert_eq!(result, "x and {3}");
}

#[test]
fn format_message___non_numeric_placeholder___left_verbatim() {
    let result = format_message("{name} {} {0,number} {0}", &[&1]);

    assert_eq!(result, "{name} {} {0,number} 1");
}

#[test]
fn format_message___unterminated_brace___is_literal() {
    let result = format_message("value {0} then {", &[&5]);

    assert_eq!(result, "value 5 then {");
}

#[test]
fn format_message___nested_open_brace___substitutes_inner() {
    let result = format_message("{{0}}", &[&"x"]);

    assert_eq!(result, "{x}");
}

#[test]
fn format_message___argument_text_is_not_rescanned() {
    let result = format_message("{0} {1}", &[&"{1}", &"b"]);

    assert_eq!(result, "{1} b");
}

#[test]
fn format_message___multibyte_text___preserved() {
    let result = format_message("gr\u{fc}\u{df}e {0} \u{2713}", &[&"\u{e9}t\u{e9}"]);

    assert_eq!(result, "gr\u{fc}\u{df}e \u{e9}t\u{e9} \u{2713}");
}

#[test]
fn format_message___display_arguments___use_display() {
    let err = std::io::Error::other("disk full");

    let result = format_message("failed: {0} after {1} tries", &[&err, &3]);

    assert_eq!(result, "failed: disk full after 3 tries");
}

// resolve_message tests

#[test]
fn resolve_message___no_bundle___returns_message_verbatim() {
    let result = resolve_message(None, "plain {0}");

    assert_eq!(result, "plain {0}");
}

#[test]
fn resolve_message___missing_key___returns_key() {
    let bundle = MapBundle::new().with("greet", "hi");

    let result = resolve_message(Some(&bundle), "missingKey");

    assert_eq!(result, "missingKey");
}

#[test]
fn resolve_message___string_entry___returns_entry() {
    let bundle = MapBundle::new().with("greet", "hi");

    let result = resolve_message(Some(&bundle), "greet");

    assert_eq!(result, "hi");
}

#[test]
fn resolve_message___non_string_entry___returns_rendered_value() {
    let bundle = MapBundle::new()
        .with("answer", 42)
        .with("flag", true)
        .with("list", serde_json::json!([1, 2]));

    assert_eq!(resolve_message(Some(&bundle), "answer"), "42");
    assert_eq!(resolve_message(Some(&bundle), "flag"), "true");
    assert_eq!(resolve_message(Some(&bundle), "list"), "[1,2]");
}

// message tests

#[test]
fn message___no_args___template_unmodified() {
    let bundle = MapBundle::new().with("greet", "hi {0}");

    let result = message(Some(&bundle), "greet", &[]);

    assert_eq!(result, "hi {0}");
}

#[test]
fn message___bundle_template_with_args___substitutes() {
    let bundle = MapBundle::new().with("greet", "hi {0}, you have {1} messages");

    let result = message(Some(&bundle), "greet", &[&"sam", &3]);

    assert_eq!(result, "hi sam, you have 3 messages");
}

#[test]
fn message___missing_key_with_args___formats_key() {
    let bundle = MapBundle::new();

    let result = message(Some(&bundle), "count={0}", &[&9]);

    assert_eq!(result, "count=9");
}

#[test]
fn message___no_args___borrows_input() {
    let result = message(None, "borrowed", &[]);

    assert!(matches!(result, Cow::Borrowed("borrowed")));
}
