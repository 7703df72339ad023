//! Basic example demonstrating the deps.dev API client.
//!
//! Run with:
//! ```
//! cargo run --example basic
//! ```

use depsdev::{DepsDevClient, QueryOptions};

#[tokio::main]
async fn main() -> depsdev::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables, falling back to the public API
    let client = DepsDevClient::from_env()?;
    println!("Using: {}", client.base_url());

    println!("\n--- Package ---");
    let package = client.get_package("npm", "react").await?;
    println!("{} has {} versions", package.package_key, package.versions.len());

    let Some(default) = package.default_version() else {
        println!("No default version");
        return Ok(());
    };
    let key = default.version_key.clone();
    println!("Default version: {}", key.version);

    println!("\n--- Version ---");
    let version = client.get_version(&key.system, &key.name, &key.version).await?;
    println!("  Licenses: {}", version.licenses.join(", "));
    println!("  Advisories: {}", version.advisory_keys.len());
    if let Some(project) = version.source_project() {
        println!("  Source: {}", project);
    }

    println!("\n--- Dependencies ---");
    let deps = client.get_dependencies(key.clone()).await?;
    println!("Found {} nodes and {} edges", deps.nodes.len(), deps.edges.len());
    for node in deps.direct_dependencies().take(5) {
        println!("  - {}@{}", node.version_key.name, node.version_key.version);
    }

    if let Some(project_key) = version.source_project() {
        println!("\n--- Project ---");
        let project = client.get_project(&project_key.id).await?;
        println!("{}: {} stars", project.project_key, project.stars_count);
        if let Some(score) = project.overall_score() {
            println!("  Scorecard: {:.1}/10", score);
        }
    }

    for advisory_key in &version.advisory_keys {
        let advisory = client.get_advisory(&advisory_key.id).await?;
        println!("  {} [{}] {}", advisory.advisory_key, advisory.severity(), advisory.title);
    }

    println!("\n--- Query ---");
    let found = client
        .query(&QueryOptions::version(&key.system, &key.name, &key.version))
        .await?;
    println!("Query matched {} versions", found.len());

    println!("\nDone!");
    Ok(())
}
