//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::{Advisory, Dependencies, Package, Project, Requirements, Version};

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

fn divider(header: &str) -> String {
    "─".repeat(header.chars().count().max(30))
}

impl PrettyPrint for Package {
    fn pretty_print(&self) -> String {
        let header = format!("Package: {}", self.package_key);
        let divider = divider(&header);

        let mut lines = vec![
            header,
            divider,
            format!("Versions:       {}", self.versions.len()),
        ];

        if let Some(default) = self.default_version() {
            lines.push(format!("Default:        {}", default.version_key.version));
        }

        if let Some(latest) = self.latest_published() {
            if let Some(ref published) = latest.published_at {
                lines.push(format!(
                    "Latest:         {} ({})",
                    latest.version_key.version,
                    published.format("%Y-%m-%d")
                ));
            }
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Version {
    fn pretty_print(&self) -> String {
        let header = format!("Version: {}", self.version_key);
        let divider = divider(&header);

        let mut lines = vec![header, divider];

        if let Some(ref published) = self.published_at {
            lines.push(format!("Published:      {}", published.format("%Y-%m-%d %H:%M:%S UTC")));
        }

        lines.push(format!("Default:        {}", if self.is_default { "yes" } else { "no" }));

        if self.is_deprecated {
            lines.push("Deprecated:     yes".to_string());
        }

        if !self.licenses.is_empty() {
            lines.push(format!("Licenses:       {}", self.licenses.join(", ")));
        }

        if self.is_affected() {
            let ids: Vec<&str> = self.advisory_keys.iter().map(|k| k.id.as_str()).collect();
            lines.push(format!("Advisories:     {}", ids.join(", ")));
        }

        if let Some(project) = self.source_project() {
            lines.push(format!("Source:         {}", project));
        }

        for link in &self.links {
            lines.push(format!("Link:           {} {}", link.label, link.url));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Dependencies {
    fn pretty_print(&self) -> String {
        let root = self
            .root()
            .map(|n| n.version_key.to_string())
            .unwrap_or_else(|| "(empty graph)".to_string());
        let header = format!("Dependencies: {}", root);
        let divider = divider(&header);

        let mut lines = vec![
            header,
            divider,
            format!("Nodes:          {}", self.nodes.len()),
            format!("Edges:          {}", self.edges.len()),
            format!("Direct:         {}", self.direct_dependencies().count()),
        ];

        if let Some(ref error) = self.error {
            lines.push(format!("Error:          {}", error));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Requirements {
    fn pretty_print(&self) -> String {
        let header = format!("Requirements: {}", self.system().unwrap_or("unknown system"));
        let divider = divider(&header);
        let mut lines = vec![header, divider];

        if let Some(ref npm) = self.npm {
            let deps = &npm.dependencies;
            for (label, list) in [
                ("dependencies", &deps.dependencies),
                ("devDependencies", &deps.dev_dependencies),
                ("optional", &deps.optional_dependencies),
                ("peer", &deps.peer_dependencies),
            ] {
                for dep in list {
                    lines.push(format!("{:<16}{} {}", label, dep.name, dep.requirement));
                }
            }
        }

        if let Some(ref maven) = self.maven {
            if !maven.parent.name.is_empty() {
                lines.push(format!("Parent:         {}:{}", maven.parent.name, maven.parent.version));
            }
            for dep in &maven.dependencies {
                lines.push(format!("Dependency:     {} {}", dep.name, dep.version));
            }
        }

        if let Some(ref nuget) = self.nuget {
            for group in &nuget.dependency_groups {
                for dep in &group.dependencies {
                    lines.push(format!("{:<16}{} {}", group.target_framework, dep.name, dep.requirement));
                }
            }
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Project {
    fn pretty_print(&self) -> String {
        let header = format!("Project: {}", self.project_key);
        let divider = divider(&header);

        let mut lines = vec![
            header,
            divider,
            format!("Stars:          {}", self.stars_count),
            format!("Forks:          {}", self.forks_count),
            format!("Open issues:    {}", self.open_issues_count),
        ];

        if !self.license.is_empty() {
            lines.push(format!("License:        {}", self.license));
        }

        if !self.description.is_empty() {
            lines.push(format!("Description:    {}", self.description));
        }

        if let Some(score) = self.overall_score() {
            lines.push(format!("Scorecard:      {:.1}/10", score));
        }

        if let Some(coverage) = self.oss_fuzz.as_ref().and_then(|f| f.coverage()) {
            lines.push(format!("Fuzz coverage:  {:.1}%", coverage * 100.0));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Advisory {
    fn pretty_print(&self) -> String {
        let header = format!("Advisory: {}", self.advisory_key);
        let divider = divider(&header);

        let mut lines = vec![
            header,
            divider,
            format!("Title:          {}", self.title),
            format!("Severity:       {} ({:.1})", self.severity(), self.cvss3_score),
        ];

        if !self.aliases.is_empty() {
            lines.push(format!("Aliases:        {}", self.aliases.join(", ")));
        }

        if !self.url.is_empty() {
            lines.push(format!("URL:            {}", self.url));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_pretty_print_format() {
        let package: Package = serde_json::from_value(serde_json::json!({
            "packageKey": {"system": "NPM", "name": "react"},
            "versions": [
                {"versionKey": {"system": "NPM", "name": "react", "version": "18.2.0"}, "isDefault": true}
            ]
        }))
        .unwrap();

        let output = package.pretty_print();
        assert!(output.starts_with("Package: NPM:react"));
        assert!(output.contains("Default:        18.2.0"));
    }

    #[test]
    fn test_advisory_pretty_print_shows_severity() {
        let advisory = Advisory {
            cvss3_score: 7.5,
            title: "Prototype pollution".to_string(),
            ..Default::default()
        };
        let output = advisory.pretty_print();
        assert!(output.contains("HIGH (7.5)"));
    }
}
