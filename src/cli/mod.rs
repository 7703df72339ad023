//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the depsdev binary.

use clap::{Parser, Subcommand};

use crate::{HashType, QueryOptions};

/// deps.dev API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "depsdev", about = "deps.dev API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Base URL of the API (overrides DEPSDEV_API_URL).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Log requests to stderr.
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show a package and its available versions.
    Package {
        /// Package management system (npm, go, maven, pypi, cargo, nuget, rubygems).
        system: String,
        /// Package name.
        name: String,
    },

    /// Show a single package version.
    Version {
        system: String,
        name: String,
        version: String,
    },

    /// Show the resolved dependency graph of a version.
    #[command(alias = "deps")]
    Dependencies {
        system: String,
        name: String,
        version: String,
    },

    /// Show the requirements declared by a version.
    Requirements {
        system: String,
        name: String,
        version: String,
    },

    /// Show a source project, e.g. github.com/facebook/react.
    Project {
        id: String,
    },

    /// List the package versions built from a project.
    ProjectVersions {
        id: String,
    },

    /// Show a security advisory by OSV id.
    Advisory {
        id: String,
    },

    /// Find versions by content hash and/or version key.
    Query {
        /// Hash algorithm (MD5, SHA1, SHA256, SHA512).
        #[arg(long)]
        hash_type: Option<HashType>,

        /// Base64-encoded file digest.
        #[arg(long)]
        hash_value: Option<String>,

        #[arg(long)]
        system: Option<String>,

        #[arg(long)]
        name: Option<String>,

        /// Version string to match.
        #[arg(long = "pkg-version")]
        pkg_version: Option<String>,
    },
}

impl Command {
    /// Build query filters from the `query` subcommand flags.
    pub fn query_options(&self) -> Option<QueryOptions> {
        match self {
            Command::Query {
                hash_type,
                hash_value,
                system,
                name,
                pkg_version,
            } => Some(QueryOptions {
                hash_type: *hash_type,
                hash_value: hash_value.clone(),
                system: system.clone(),
                name: name.clone(),
                version: pkg_version.clone(),
            }),
            _ => None,
        }
    }
}
