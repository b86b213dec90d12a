//! Implementation of `wakflo create integration`.

use std::path::Path;

use tracing::{info, instrument};

use wakflo_adapters::{LocalFilesystem, SimpleRenderer};
use wakflo_core::{
    application::IntegrationService,
    domain::{IntegrationManifest, parse_authors},
};

use super::{Session, print_changes};
use crate::{
    cli::{CreateCommands, IntegrationArgs},
    error::{CliError, CliResult, IntoCli},
};

/// Backend `type` for everything generated about an integration.
const INTEGRATION_KIND: &str = "integration";

/// Execute `wakflo create <subcommand>`.
pub fn execute(cmd: CreateCommands, session: &Session<'_>) -> CliResult<()> {
    match cmd {
        CreateCommands::Integration(args) => {
            let parent = std::env::current_dir()
                .with_cli_context(|| "Failed to read the current directory")?;
            create_integration(&args, &parent, session)
        }
    }
}

/// Create a new integration folder under `parent`.
#[instrument(skip_all, fields(parent = %parent.display()))]
pub fn create_integration(
    args: &IntegrationArgs,
    parent: &Path,
    session: &Session<'_>,
) -> CliResult<()> {
    let (manifest, docs) = collect_manifest(args, session)?;
    let service = IntegrationService::new(
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    if args.dry_run {
        let changes = service.plan(&manifest, &docs)?;
        let folder = IntegrationService::target_folder(parent, &manifest);
        session
            .output
            .header(&format!("Dry run: would create {}", folder.display()))?;
        print_changes(session.output, &changes)?;
        if folder.exists() {
            session
                .output
                .warning("That folder already exists; the real run would fail")?;
        }
        return Ok(());
    }

    let folder = service.create(parent, &manifest, &docs)?;
    info!(folder = %folder.display(), "Integration created");

    session.output.success("Integration created successfully!")?;
    session.output.info(&format!(
        "Integration '{}' created in folder '{}'.",
        manifest.name,
        folder.display()
    ))?;
    session.output.print("")?;
    session.output.print("Next steps:")?;
    session
        .output
        .print(&format!("  cd {}", manifest.package_name()))?;
    session.output.print("  wakflo add action")?;
    Ok(())
}

/// Gather the manifest and README docs, asking the user and the backend for
/// whatever the flags left out.
fn collect_manifest(
    args: &IntegrationArgs,
    session: &Session<'_>,
) -> CliResult<(IntegrationManifest, String)> {
    let Session {
        config,
        output,
        prompter,
        backend,
    } = session;

    let name = match &args.name {
        Some(name) => name.clone(),
        None => prompter.input("Enter Name of the integration", None, true)?,
    };
    let prompt = IntegrationService::prompt(&name);

    let description = match &args.description {
        Some(description) => description.clone(),
        None => {
            let generated = output.with_spinner("Generating description...", || {
                backend.generate_description(&prompt, INTEGRATION_KIND)
            })?;
            prompter.input(
                "Enter Description of the integration",
                Some(&generated),
                false,
            )?
        }
    };

    let icon = match &args.icon {
        Some(icon) => icon.clone(),
        None => {
            let icons =
                output.with_spinner("Searching icons...", || backend.search_icons(&name))?;
            if icons.is_empty() {
                prompter.input("Enter an Icon for the integration", None, false)?
            } else {
                let index = prompter.select("Select an Icon for the integration", &icons)?;
                pick(&icons, index)?
            }
        }
    };

    let categories = if args.categories.is_empty() {
        let keys = output.with_spinner("Loading categories...", || backend.list_categories())?;
        let defaults: Vec<bool> = keys
            .iter()
            .map(|key| config.defaults.categories.contains(key))
            .collect();
        prompter
            .multi_select("Select Categories for the integration", &keys, &defaults)?
            .into_iter()
            .map(|index| pick(&keys, index))
            .collect::<CliResult<Vec<_>>>()?
    } else {
        args.categories.clone()
    };

    let authors = if args.authors.is_empty() {
        let default = config.defaults.authors.join(", ");
        let answer = prompter.input(
            "Enter Authors of the integration (comma-separated)",
            Some(&default),
            false,
        )?;
        parse_authors(&answer)
    } else {
        args.authors.clone()
    };

    let docs = match &args.docs {
        Some(docs) => docs.clone(),
        None => output.with_spinner("Generating documentation...", || {
            backend.generate_documentation(&prompt, INTEGRATION_KIND)
        })?,
    };

    let manifest = IntegrationManifest::new(name, description)
        .with_icon(icon)
        .with_categories(categories)
        .with_authors(authors)
        .with_version(config.defaults.version.clone());
    Ok((manifest, docs))
}

fn pick(items: &[String], index: usize) -> CliResult<String> {
    items.get(index).cloned().ok_or_else(|| CliError::InvalidInput {
        message: format!("no choice at position {index}"),
        source: None,
    })
}
