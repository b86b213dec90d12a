//! Integration tests for wakflo-core's public text-surgery API.

use wakflo_core::domain::{
    ResourceKind, ResourceMetadata, ResourceSubtype, insert_after_anchor, merge_declarations,
    templates, upsert_section,
};

const LIB_GO: &str = "package slack

func (n *Slack) Triggers() []integration.Trigger {
\treturn []integration.Trigger{
\t\ttriggers.NewNewMessageTrigger(),
\t}
}

func (n *Slack) Actions() []integration.Action {
\treturn []integration.Action{}
}
";

#[test]
fn splicing_into_a_hand_maintained_registry() {
    let meta = ResourceMetadata::new(
        "Channel Created",
        "",
        ResourceKind::Trigger,
        ResourceSubtype::Event,
    )
    .unwrap();

    let out = ResourceKind::Trigger
        .registry_anchor()
        .splice(LIB_GO, &meta.registry_entry())
        .unwrap();

    assert!(out.contains(
        "return []integration.Trigger{\n\t\ttriggers.NewChannelCreatedTrigger(),\n\t\ttriggers.NewNewMessageTrigger(),\n\t}"
    ));
    assert!(out.contains("return []integration.Action{}"));
}

#[test]
fn raw_insertion_round_trips() {
    let line = "\t\tactions.NewPostAction(),";
    let out = insert_after_anchor(LIB_GO, "return []integration.Action{", line).unwrap();
    assert_eq!(out.replacen(&format!("\n{line}\n"), "", 1), LIB_GO);
}

#[test]
fn declarations_follow_folder_contents() {
    let first = merge_declarations("", ["send_message.md"], "actions").unwrap();
    let second = merge_declarations(&first, ["list_users.md", "send_message.md"], "actions").unwrap();

    assert!(second.starts_with(&first));
    assert!(second.contains("//go:embed list_users.md\nvar listUsersDocs string\n"));
    assert_eq!(merge_declarations(&second, ["list_users.md", "send_message.md"], "actions"), None);
}

#[test]
fn readme_gains_sections_for_both_kinds() {
    let mut readme = templates::fallback_readme("Slack");
    let original = readme.clone();

    let action = ResourceMetadata::new(
        "Send Message",
        "Posts a message",
        ResourceKind::Action,
        ResourceSubtype::Normal,
    )
    .unwrap();
    readme = upsert_section(
        &readme,
        ResourceKind::Action.readme_heading(),
        &action.readme_row(),
        &action.readme_key(),
    );
    assert!(readme.starts_with(&original));

    let trigger = ResourceMetadata::new(
        "New Message",
        "Fires on new messages",
        ResourceKind::Trigger,
        ResourceSubtype::Webhook,
    )
    .unwrap();
    readme = upsert_section(
        &readme,
        ResourceKind::Trigger.readme_heading(),
        &trigger.readme_row(),
        &trigger.readme_key(),
    );

    let again = upsert_section(
        &readme,
        ResourceKind::Action.readme_heading(),
        &action.readme_row(),
        &action.readme_key(),
    );
    assert_eq!(again, readme);
    assert!(readme.contains(
        "## Actions\n\n- **Send Message**: Posts a message ([Documentation](actions/send_message.md))\n\n## Triggers\n\n"
    ));
}
