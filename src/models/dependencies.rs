//! Resolved dependency graph model and trait implementations.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};

use crate::models::keys::VersionKey;
use crate::path;
use crate::traits::Get;

/// A resolved dependency graph for a package version.
///
/// The graph approximates installing the version on a generic 64-bit Linux
/// system with no other dependencies present; the precise meaning varies by
/// system. The first node is the root of the graph.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependencies {
    /// The nodes of the graph. The first node is the root.
    #[serde(default)]
    pub nodes: Vec<Node>,

    /// The edges of the graph.
    #[serde(default)]
    pub edges: Vec<Edge>,

    /// An error affecting the graph as a whole, for human consumption.
    /// The API sends an empty string when there is none.
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub error: Option<String>,
}

/// A node in a resolved dependency graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// The package version represented by this node. Names may differ from
    /// the request due to canonicalization, and some systems repeat the same
    /// version in several nodes.
    #[serde(default)]
    pub version_key: VersionKey,

    /// Whether this is a bundled dependency. Bundled names encode their
    /// location, e.g. `a>1.2.3>b>c`.
    #[serde(default)]
    pub bundled: bool,

    /// Whether the node is the root, a direct or an indirect dependency.
    #[serde(default)]
    pub relation: Relation,

    /// Errors attached to this node, such as an unresolved requirement.
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Relation of a node to the root of the graph. A dependency that is both
/// direct and indirect is marked direct.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Relation {
    /// The root of the graph.
    #[serde(rename = "SELF")]
    Itself,
    Direct,
    Indirect,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Itself => "self",
            Self::Direct => "direct",
            Self::Indirect => "indirect",
            Self::Unspecified => "unspecified",
        })
    }
}

/// A dependency relation between two nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// Index into `nodes` of the node declaring the dependency.
    #[serde(default)]
    pub from_node: usize,

    /// Index into `nodes` of the node resolving the dependency.
    #[serde(default)]
    pub to_node: usize,

    /// The requirement as declared by the "from" node, e.g. `^1.0.0`.
    #[serde(default)]
    pub requirement: String,
}

impl Dependencies {
    /// The root node of the graph.
    pub fn root(&self) -> Option<&Node> {
        self.nodes.first()
    }

    /// Nodes marked as direct dependencies of the root.
    pub fn direct_dependencies(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.relation == Relation::Direct)
    }

    /// Whether every edge points at existing nodes.
    pub fn has_valid_edges(&self) -> bool {
        let len = self.nodes.len();
        self.edges
            .iter()
            .all(|e| e.from_node < len && e.to_node < len)
    }

    /// Resolve an edge into its endpoint nodes.
    pub fn endpoints(&self, edge: &Edge) -> Option<(&Node, &Node)> {
        Some((self.nodes.get(edge.from_node)?, self.nodes.get(edge.to_node)?))
    }

    /// Whether the graph or any node reports an error.
    pub fn has_errors(&self) -> bool {
        self.error.is_some() || self.nodes.iter().any(|n| !n.errors.is_empty())
    }
}

impl Get for Dependencies {
    type Id = VersionKey;

    fn path(id: &VersionKey) -> String {
        path::dependencies(id)
    }
}
