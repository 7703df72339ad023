//! deps.dev API CLI binary.
//!
//! A command-line interface for querying the deps.dev API.

use clap::Parser;
use depsdev::cli::{Cli, Command};
use depsdev::{
    DepsDevClient, Dependencies, Node, Package, PrettyPrint, ProjectKey, ProjectPackageVersion,
    QueryResult, Version, VersionKey,
};
use serde::Serialize;
use std::process::ExitCode;
use tabled::{Table, Tabled};
use tracing::Level;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    // --base-url replaces DEPSDEV_API_URL; the timeout still comes from the environment
    let client = match DepsDevClient::from_env() {
        Ok(c) => match cli.base_url.as_deref() {
            Some(url) => c.with_base_url(url),
            None => c,
        },
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Check DEPSDEV_API_URL and DEPSDEV_TIMEOUT_SECS");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &DepsDevClient, cli: Cli) -> depsdev::Result<()> {
    let json = cli.json;

    match &cli.command {
        Command::Package { system, name } => {
            let package = client.get_package(system, name).await?;
            output_package(&package, json)
        }
        Command::Version {
            system,
            name,
            version,
        } => {
            let version = client.get_version(system, name, version).await?;
            output_single(&version, json)
        }
        Command::Dependencies {
            system,
            name,
            version,
        } => {
            let deps = client
                .get_dependencies(VersionKey::new(system, name, version))
                .await?;
            output_dependencies(&deps, json)
        }
        Command::Requirements {
            system,
            name,
            version,
        } => {
            let reqs = client.get_requirements(system, name, version).await?;
            output_single(&reqs, json)
        }
        Command::Project { id } => {
            let project = client.get_project(id).await?;
            output_single(&project, json)
        }
        Command::ProjectVersions { id } => {
            let versions = client
                .get_project_package_versions(ProjectKey::new(id))
                .await?;
            output_rows(&versions, &versions.versions, json, |v| ProjectVersionRow::from(v))
        }
        Command::Advisory { id } => {
            let advisory = client.get_advisory(id).await?;
            output_single(&advisory, json)
        }
        Command::Query { .. } => {
            let options = cli.command.query_options().unwrap_or_default();
            let result = client.query(&options).await?;
            output_query(&result, json)
        }
    }
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> depsdev::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}

fn output_rows<T, I, R, F>(whole: &T, items: &[I], json: bool, to_row: F) -> depsdev::Result<()>
where
    T: Serialize,
    R: Tabled,
    F: Fn(&I) -> R,
{
    if json {
        println!("{}", serde_json::to_string_pretty(whole)?);
    } else {
        let rows: Vec<R> = items.iter().map(to_row).collect();
        println!("{}", Table::new(rows));
        println!("\n{} entries", items.len());
    }
    Ok(())
}

fn output_package(package: &Package, json: bool) -> depsdev::Result<()> {
    if !json {
        println!("{}\n", package.pretty_print());
    }
    output_rows(package, &package.versions, json, |v| VersionRow::from(v))
}

fn output_dependencies(deps: &Dependencies, json: bool) -> depsdev::Result<()> {
    if !json {
        println!("{}\n", deps.pretty_print());
    }
    output_rows(deps, &deps.nodes, json, |n| NodeRow::from(n))
}

fn output_query(result: &QueryResult, json: bool) -> depsdev::Result<()> {
    let versions: Vec<&Version> = result.versions().collect();
    output_rows(result, &versions, json, |v| VersionRow::from(*v))
}

// Table row types for non-JSON output

#[derive(Tabled)]
struct VersionRow {
    version: String,
    published: String,
    default: String,
}

impl From<&Version> for VersionRow {
    fn from(v: &Version) -> Self {
        Self {
            version: v.version_key.to_string(),
            published: v
                .published_at
                .map(|t| t.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            default: if v.is_default { "yes".to_string() } else { String::new() },
        }
    }
}

#[derive(Tabled)]
struct NodeRow {
    package: String,
    version: String,
    relation: String,
    errors: usize,
}

impl From<&Node> for NodeRow {
    fn from(n: &Node) -> Self {
        Self {
            package: n.version_key.name.clone(),
            version: n.version_key.version.clone(),
            relation: n.relation.to_string(),
            errors: n.errors.len(),
        }
    }
}

#[derive(Tabled)]
struct ProjectVersionRow {
    version: String,
    #[tabled(rename = "relation")]
    relation_type: String,
    provenance: String,
}

impl From<&ProjectPackageVersion> for ProjectVersionRow {
    fn from(v: &ProjectPackageVersion) -> Self {
        Self {
            version: v.version_key.to_string(),
            relation_type: v.relation_type.clone(),
            provenance: v.relation_provenance.clone(),
        }
    }
}
