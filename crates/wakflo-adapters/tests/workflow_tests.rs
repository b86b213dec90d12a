//! End-to-end workflows through the real adapters.

use std::path::Path;

use tempfile::TempDir;
use wakflo_adapters::{LocalFilesystem, MemoryFilesystem, SimpleRenderer};
use wakflo_core::prelude::*;

fn manifest() -> IntegrationManifest {
    IntegrationManifest::new("Slack", "Team chat")
        .with_icon("mdi:slack")
        .with_categories(vec!["communication".into()])
        .with_authors(vec!["Wakflo <integrations@wakflo.com>".into()])
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn create_integration_then_add_resources_on_disk() {
    let tmp = TempDir::new().unwrap();

    let integrations = IntegrationService::new(
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );
    let root = integrations
        .create(tmp.path(), &manifest(), "Slack lets teams talk.")
        .unwrap();
    assert_eq!(root, tmp.path().join("slack"));

    let resources =
        ResourceService::new(Box::new(SimpleRenderer::new()), Box::new(LocalFilesystem::new()));
    let project = resources.open_project(&root).unwrap();
    assert_eq!(project.manifest().name, "Slack");

    let send = ResourceMetadata::new(
        "Send Message",
        "Posts a message to a channel",
        ResourceKind::Action,
        ResourceSubtype::Normal,
    )
    .unwrap();
    let on_message = ResourceMetadata::new(
        "New Message",
        "Fires when a message is posted",
        ResourceKind::Trigger,
        ResourceSubtype::Webhook,
    )
    .unwrap();
    resources.create_resource(&project, &send).unwrap();
    resources.create_resource(&project, &on_message).unwrap();

    let source = read(&root.join("actions/send_message.go"));
    assert!(source.contains("func NewSendMessageAction() integration.Action"));
    assert!(source.contains("return sdkcore.ActionTypeNormal"));
    assert!(source.contains("Documentation: &sendMessageDocs,"));

    let trigger = read(&root.join("triggers/new_message.go"));
    assert!(trigger.contains("return sdkcore.TriggerTypeWebhook"));

    assert_eq!(
        read(&root.join("actions/doc.go")),
        "package actions\n\nimport _ \"embed\"\n\n//go:embed send_message.md\nvar sendMessageDocs string\n\n"
    );

    let lib = read(&root.join("lib.go"));
    assert!(lib.starts_with("package slack\n"));
    assert!(lib.contains("return []integration.Action{\n\t\tactions.NewSendMessageAction(),\n\t}"));
    assert!(lib.contains("return []integration.Trigger{\n\t\ttriggers.NewNewMessageTrigger(),\n\t}"));

    let readme = read(&root.join("README.md"));
    assert!(readme.starts_with("# Slack Integration\n"));
    assert!(readme.contains("Slack lets teams talk."));
    assert!(readme.contains(
        "## Actions\n\n- **Send Message**: Posts a message to a channel ([Documentation](actions/send_message.md))\n"
    ));
    assert!(readme.contains(
        "## Triggers\n\n- **New Message**: Fires when a message is posted ([Documentation](triggers/new_message.md))\n"
    ));
}

#[test]
fn hand_written_docs_are_declared_too() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    std::fs::write(root.join("flo.toml"), "[integration]\nname = \"Demo\"\n").unwrap();
    std::fs::write(root.join("lib.go"), "return []integration.Action{}\n").unwrap();
    std::fs::create_dir(root.join("actions")).unwrap();
    std::fs::write(root.join("actions/legacy.md"), "# Legacy\n").unwrap();

    let resources =
        ResourceService::new(Box::new(SimpleRenderer::new()), Box::new(LocalFilesystem::new()));
    let project = resources.open_project(root).unwrap();
    let meta =
        ResourceMetadata::new("Zeta", "", ResourceKind::Action, ResourceSubtype::Normal).unwrap();
    resources.create_resource(&project, &meta).unwrap();

    let doc = read(&root.join("actions/doc.go"));
    let legacy = doc.find("var legacyDocs string").unwrap();
    let zeta = doc.find("var zetaDocs string").unwrap();
    assert!(legacy < zeta);

    // The fallback README uses the integration's name.
    assert!(read(&root.join("README.md")).starts_with("# Demo Integration\n"));
}

#[test]
fn dry_run_plan_leaves_memory_filesystem_untouched() {
    let fs = MemoryFilesystem::new()
        .with_file("demo/flo.toml", "[integration]\nname = \"Demo\"\n")
        .with_file("demo/lib.go", "return []integration.Trigger{}\n");
    let resources = ResourceService::new(Box::new(SimpleRenderer::new()), Box::new(fs.clone()));
    let project = resources.open_project("demo").unwrap();
    let meta = ResourceMetadata::new(
        "Tick",
        "Every minute",
        ResourceKind::Trigger,
        ResourceSubtype::Scheduled,
    )
    .unwrap();

    let changes = resources.plan(&project, &meta).unwrap();

    assert!(changes.writes().any(|w| w.path == Path::new("triggers/tick.go")));
    assert_eq!(fs.paths().len(), 2);
}

#[test]
fn integration_folder_collision_is_rejected() {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir(tmp.path().join("slack")).unwrap();

    let integrations = IntegrationService::new(
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );
    let err = integrations.create(tmp.path(), &manifest(), "").unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert!(std::fs::read_dir(tmp.path().join("slack")).unwrap().next().is_none());
}
