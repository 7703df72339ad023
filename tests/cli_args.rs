//! CLI argument parsing tests.

use clap::Parser;
use depsdev::cli::{Cli, Command};
use depsdev::HashType;

#[test]
fn test_cli_parses_package_subcommand() {
    let cli = Cli::parse_from(["depsdev", "package", "npm", "react"]);

    assert!(!cli.json);
    assert!(!cli.verbose);
    match cli.command {
        Command::Package { system, name } => {
            assert_eq!(system, "npm");
            assert_eq!(name, "react");
        }
        _ => panic!("Expected Package command"),
    }
}

#[test]
fn test_cli_parses_version_subcommand() {
    let cli = Cli::parse_from(["depsdev", "version", "go", "rsc.io/github", "v0.4.1"]);

    match cli.command {
        Command::Version {
            system,
            name,
            version,
        } => {
            assert_eq!(system, "go");
            assert_eq!(name, "rsc.io/github");
            assert_eq!(version, "v0.4.1");
        }
        _ => panic!("Expected Version command"),
    }
}

#[test]
fn test_cli_deps_alias() {
    let cli = Cli::parse_from(["depsdev", "deps", "npm", "react", "18.2.0"]);

    assert!(matches!(cli.command, Command::Dependencies { .. }));
}

#[test]
fn test_cli_parses_project_versions_subcommand() {
    let cli = Cli::parse_from(["depsdev", "project-versions", "github.com/facebook/react"]);

    match cli.command {
        Command::ProjectVersions { id } => assert_eq!(id, "github.com/facebook/react"),
        _ => panic!("Expected ProjectVersions command"),
    }
}

#[test]
fn test_cli_global_flags_after_subcommand() {
    let cli = Cli::parse_from([
        "depsdev",
        "advisory",
        "GHSA-2qrg-x229-3v8q",
        "--json",
        "--base-url",
        "http://localhost:8080/v3",
        "-v",
    ]);

    assert!(cli.json);
    assert!(cli.verbose);
    assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8080/v3"));
}

#[test]
fn test_cli_query_builds_options() {
    let cli = Cli::parse_from([
        "depsdev",
        "query",
        "--hash-type",
        "sha1",
        "--hash-value",
        "ulXBPXrC/UTfnMgHRFVxmjPzdbk=",
        "--pkg-version",
        "18.2.0",
    ]);

    let options = cli.command.query_options().expect("query options");
    assert_eq!(options.hash_type, Some(HashType::Sha1));
    assert_eq!(options.hash_value.as_deref(), Some("ulXBPXrC/UTfnMgHRFVxmjPzdbk="));
    assert_eq!(options.version.as_deref(), Some("18.2.0"));
    assert_eq!(options.name, None);
}

#[test]
fn test_cli_non_query_has_no_options() {
    let cli = Cli::parse_from(["depsdev", "project", "github.com/facebook/react"]);

    assert!(cli.command.query_options().is_none());
}

#[test]
fn test_cli_rejects_unknown_hash_type() {
    let result = Cli::try_parse_from(["depsdev", "query", "--hash-type", "crc32"]);

    assert!(result.is_err());
}

#[test]
fn test_cli_requires_version_argument() {
    let result = Cli::try_parse_from(["depsdev", "requirements", "npm", "react"]);

    assert!(result.is_err());
}
