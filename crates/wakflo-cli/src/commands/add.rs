//! Implementation of `wakflo add`.
//!
//! Opens the integration in the current directory, collects whatever the
//! flags left out, and hands the resource to `ResourceService`.

use std::path::Path;

use tracing::{debug, info, instrument};

use wakflo_adapters::{LocalFilesystem, SimpleRenderer};
use wakflo_core::{
    application::{Project, ResourceService},
    domain::{ResourceKind, ResourceMetadata, ResourceSubtype},
};

use super::{Session, print_changes};
use crate::{
    cli::{AddCommands, ResourceArgs},
    error::{CliError, CliResult},
    prompt::Prompter,
};

/// Execute `wakflo add <action|trigger|flow>`.
pub fn execute(cmd: AddCommands, session: &Session<'_>) -> CliResult<()> {
    let root = Path::new(".");
    match cmd {
        AddCommands::Action(args) => add_resource(ResourceKind::Action, &args, root, session),
        AddCommands::Trigger(args) => add_resource(ResourceKind::Trigger, &args, root, session),
        AddCommands::Flow => {
            session.output.success("Flow added successfully!")?;
            Ok(())
        }
    }
}

/// Add one action or trigger to the integration at `root`.
///
/// The project is opened before anything is asked, so running outside an
/// integration fails without prompting.
#[instrument(skip_all, fields(kind = %kind, root = %root.display()))]
pub fn add_resource(
    kind: ResourceKind,
    args: &ResourceArgs,
    root: &Path,
    session: &Session<'_>,
) -> CliResult<()> {
    let service = ResourceService::new(
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );
    let project = service.open_project(root)?;
    debug!(integration = %project.manifest().name, "Project opened");

    let meta = collect_metadata(kind, args, &project, session)?;
    let changes = service.plan(&project, &meta)?;

    if args.dry_run {
        session.output.header(&format!(
            "Dry run: adding {} '{}' would change:",
            kind,
            meta.name()
        ))?;
        print_changes(session.output, &changes)?;
        return Ok(());
    }

    service.commit(&project, &changes)?;
    info!(name = %meta.name(), files = changes.len(), "Resource added");

    session.output.success(&format!(
        "{} '{}' created successfully.",
        kind.title(),
        meta.name()
    ))?;
    print_changes(session.output, &changes)?;
    Ok(())
}

fn collect_metadata(
    kind: ResourceKind,
    args: &ResourceArgs,
    project: &Project,
    session: &Session<'_>,
) -> CliResult<ResourceMetadata> {
    let name = match &args.name {
        Some(name) => name.clone(),
        None => session.prompter.input("Enter Name", None, true)?,
    };

    let description = match &args.description {
        Some(description) => description.clone(),
        None => {
            let prompt = project.resource_prompt(kind, &name);
            let generated = session.output.with_spinner("Generating description...", || {
                session.backend.generate_description(&prompt, kind.as_str())
            })?;
            session
                .prompter
                .input("Enter Description", Some(&generated), false)?
        }
    };

    let subtype = match args.subtype {
        Some(subtype) => subtype.into(),
        None => choose_subtype(kind, session.prompter)?,
    };

    Ok(ResourceMetadata::new(name, description, kind, subtype).map_err(wakflo_core::error::WakfloError::from)?)
}

/// Ask for the subtype; a kind with a single subtype is not asked about.
fn choose_subtype(kind: ResourceKind, prompter: &dyn Prompter) -> CliResult<ResourceSubtype> {
    let options = kind.subtypes();
    if let [only] = options {
        return Ok(*only);
    }

    let labels: Vec<String> = options.iter().map(ToString::to_string).collect();
    let index = prompter.select(&format!("Select {} Type", kind.title()), &labels)?;
    options
        .get(index)
        .copied()
        .ok_or_else(|| CliError::InvalidInput {
            message: format!("no {} type at position {index}", kind),
            source: None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cli::{OutputFormat, Subtype},
        commands::test_support::FakeBackend,
        config::AppConfig,
        output::tests::make_manager,
        prompt::tests::{Answer, ScriptedPrompter},
    };
    use tempfile::TempDir;
    use wakflo_core::{application::ApplicationError, error::WakfloError};

    const LIB_GO: &str = "package demo\n\nfunc (n *Demo) Actions() []integration.Action {\n\treturn []integration.Action{}\n}\n\nfunc (n *Demo) Triggers() []integration.Trigger {\n\treturn []integration.Trigger{}\n}\n";

    fn project() -> TempDir {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("flo.toml"), "[integration]\nname = \"Demo\"\n").unwrap();
        std::fs::write(tmp.path().join("lib.go"), LIB_GO).unwrap();
        tmp
    }

    fn args(name: Option<&str>, description: Option<&str>, subtype: Option<Subtype>) -> ResourceArgs {
        ResourceArgs {
            name: name.map(String::from),
            description: description.map(String::from),
            subtype,
            dry_run: false,
        }
    }

    fn run(
        kind: ResourceKind,
        args: &ResourceArgs,
        root: &Path,
        prompter: &ScriptedPrompter,
        backend: &FakeBackend,
    ) -> CliResult<()> {
        let config = AppConfig::default();
        let output = make_manager(true, OutputFormat::Plain);
        let session = Session {
            config: &config,
            output: &output,
            prompter,
            backend,
        };
        add_resource(kind, args, root, &session)
    }

    fn read(root: &Path, path: &str) -> String {
        std::fs::read_to_string(root.join(path)).unwrap()
    }

    #[test]
    fn prompts_for_missing_values_and_generates_description() {
        let tmp = project();
        let prompter = ScriptedPrompter::new([Answer::Text("Run Python"), Answer::Default]);
        let backend = FakeBackend {
            description: Some("Runs a Python script".into()),
            ..FakeBackend::default()
        };

        run(ResourceKind::Action, &args(None, None, None), tmp.path(), &prompter, &backend).unwrap();

        assert_eq!(prompter.asked(), vec!["Enter Name", "Enter Description"]);
        assert_eq!(
            backend.calls(),
            vec!["description(Demo integration action called Run Python, action)"]
        );
        assert!(read(tmp.path(), "actions/run_python.go").contains("NewRunPythonAction"));
        assert!(read(tmp.path(), "README.md").contains("- **Run Python**: Runs a Python script"));
        assert!(read(tmp.path(), "lib.go").contains("actions.NewRunPythonAction(),"));
    }

    #[test]
    fn flags_skip_prompts_and_backend() {
        let tmp = project();
        let prompter = ScriptedPrompter::new([]);
        let backend = FakeBackend::offline();

        run(
            ResourceKind::Trigger,
            &args(Some("New Row"), Some("Fires on new rows"), Some(Subtype::Polling)),
            tmp.path(),
            &prompter,
            &backend,
        )
        .unwrap();

        assert!(prompter.asked().is_empty());
        assert!(backend.calls().is_empty());
        assert!(read(tmp.path(), "triggers/new_row.go").contains("sdkcore.TriggerTypePolling"));
    }

    #[test]
    fn trigger_type_is_selected_from_the_list() {
        let tmp = project();
        let prompter = ScriptedPrompter::new([Answer::Pick(2)]);

        run(
            ResourceKind::Trigger,
            &args(Some("Hook"), Some("Receives calls"), None),
            tmp.path(),
            &prompter,
            &FakeBackend::offline(),
        )
        .unwrap();

        assert_eq!(prompter.asked(), vec!["Select Trigger Type"]);
        assert!(read(tmp.path(), "triggers/hook.go").contains("sdkcore.TriggerTypeWebhook"));
    }

    #[test]
    fn action_type_is_not_asked() {
        assert_eq!(
            choose_subtype(ResourceKind::Action, &ScriptedPrompter::new([])).unwrap(),
            ResourceSubtype::Normal
        );
    }

    #[test]
    fn disallowed_type_is_rejected() {
        let tmp = project();
        let err = run(
            ResourceKind::Action,
            &args(Some("Tick"), Some("x"), Some(Subtype::Scheduled)),
            tmp.path(),
            &ScriptedPrompter::new([]),
            &FakeBackend::offline(),
        )
        .unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(!tmp.path().join("actions").exists());
    }

    #[test]
    fn dry_run_writes_nothing() {
        let tmp = project();
        let mut dry = args(Some("Run Python"), Some("Runs"), None);
        dry.dry_run = true;

        run(ResourceKind::Action, &dry, tmp.path(), &ScriptedPrompter::new([]), &FakeBackend::offline())
            .unwrap();

        assert!(!tmp.path().join("actions").exists());
        assert_eq!(read(tmp.path(), "lib.go"), LIB_GO);
    }

    #[test]
    fn missing_project_fails_before_prompting() {
        let tmp = TempDir::new().unwrap();
        let prompter = ScriptedPrompter::new([]);

        let err = run(ResourceKind::Action, &args(None, None, None), tmp.path(), &prompter, &FakeBackend::offline())
            .unwrap_err();

        assert!(matches!(
            err,
            CliError::Core(WakfloError::Application(ApplicationError::MissingProjectMarker { .. }))
        ));
        assert_eq!(err.exit_code(), 3);
        assert!(prompter.asked().is_empty());
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn backend_failure_aborts_without_writing() {
        let tmp = project();
        let err = run(
            ResourceKind::Action,
            &args(Some("Run Python"), None, None),
            tmp.path(),
            &ScriptedPrompter::new([]),
            &FakeBackend::offline(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            CliError::Core(WakfloError::Application(ApplicationError::ExternalService { .. }))
        ));
        assert!(!tmp.path().join("actions").exists());
    }

    #[test]
    fn cancelling_a_prompt_stops_the_command() {
        let tmp = project();
        let err = run(
            ResourceKind::Action,
            &args(None, None, None),
            tmp.path(),
            &ScriptedPrompter::new([Answer::Cancel]),
            &FakeBackend::offline(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Cancelled));
        assert!(!tmp.path().join("actions").exists());
    }
}
