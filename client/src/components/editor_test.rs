use super::*;

#[test]
fn commands_map_to_exec_names() {
    let names: Vec<&str> = EditorCommand::ALL.iter().map(|c| c.exec_name()).collect();
    assert_eq!(
        names,
        vec!["bold", "italic", "insertUnorderedList", "insertOrderedList", "createLink", "removeFormat"]
    );
}

#[test]
fn formatting_commands_never_prompt() {
    for command in [EditorCommand::Bold, EditorCommand::ClearFormat] {
        let arg = command.argument(|_| panic!("should not prompt"));
        assert_eq!(arg.as_deref(), Some(""));
    }
}

#[test]
fn link_prompts_for_url() {
    let mut asked = None;
    let arg = EditorCommand::Link.argument(|msg| {
        asked = Some(msg.to_owned());
        Some("https://example.com".to_owned())
    });
    assert_eq!(asked.as_deref(), Some("Enter URL"));
    assert_eq!(arg.as_deref(), Some("https://example.com"));
}

#[test]
fn link_is_skipped_when_prompt_cancelled_or_empty() {
    assert_eq!(EditorCommand::Link.argument(|_| None), None);
    assert_eq!(EditorCommand::Link.argument(|_| Some("  ".to_owned())), None);
}

#[test]
fn resync_only_when_markup_differs() {
    assert!(!needs_resync("<b>x</b>", "<b>x</b>"));
    assert!(needs_resync("", "<p>loaded</p>"));
}
