use super::*;

// =============================================================
// escape_angle_brackets
// =============================================================

#[test]
fn escape_replaces_script_tags() {
    assert_eq!(escape_angle_brackets("<script>alert(1)</script>"), "&lt;script&gt;alert(1)&lt;/script&gt;");
}

#[test]
fn escape_leaves_ampersand_and_quotes() {
    assert_eq!(escape_angle_brackets(r#"a & b "c" 'd'"#), r#"a & b "c" 'd'"#);
}

#[test]
fn escape_does_not_double_escape_entities() {
    assert_eq!(escape_angle_brackets("&lt;"), "&lt;");
}

#[test]
fn escape_keeps_multibyte_text() {
    assert_eq!(escape_angle_brackets("¿qué <tal>?"), "¿qué &lt;tal&gt;?");
}

// =============================================================
// Message rendering
// =============================================================

#[test]
fn to_html_bolds_sender_label() {
    let msg = Message::you("Hello");
    assert_eq!(msg.to_html(), "<b>You:</b> Hello");
}

#[test]
fn to_html_escapes_only_the_text() {
    let msg = Message::assistant("<i>hi</i> & bye");
    assert_eq!(msg.to_html(), "<b>Assistant:</b> &lt;i&gt;hi&lt;/i&gt; & bye");
}

#[test]
fn to_plain_is_unescaped() {
    let msg = Message::system("Sorry, error: <x>");
    assert_eq!(msg.to_plain(), "System: Sorry, error: <x>");
}

#[test]
fn sender_labels() {
    assert_eq!(Sender::You.label(), "You");
    assert_eq!(Sender::Assistant.label(), "Assistant");
    assert_eq!(Sender::System.to_string(), "System");
}
