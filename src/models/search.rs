//! Version query by content hash or version key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::client::DepsDevClient;
use crate::error::Result;
use crate::models::version::Version;
use crate::options::{add_options, QueryParams};
use crate::path;

/// Hash algorithms accepted by the query endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HashType {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl HashType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA1",
            Self::Sha256 => "SHA256",
            Self::Sha512 => "SHA512",
        }
    }
}

impl fmt::Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "MD5" => Ok(Self::Md5),
            "SHA1" => Ok(Self::Sha1),
            "SHA256" => Ok(Self::Sha256),
            "SHA512" => Ok(Self::Sha512),
            other => Err(format!("unknown hash type '{other}'")),
        }
    }
}

/// Filters for [`query`]. Unset or empty fields are not sent.
///
/// # Example
///
/// ```
/// use depsdev::QueryOptions;
///
/// let options = QueryOptions::version("npm", "react", "18.2.0");
/// assert_eq!(options.system.as_deref(), Some("npm"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Algorithm of `hash_value`.
    pub hash_type: Option<HashType>,
    /// Base64-encoded digest of a package file.
    pub hash_value: Option<String>,
    pub system: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
}

impl QueryOptions {
    /// Match an exact version key.
    pub fn version(
        system: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            system: Some(system.into()),
            name: Some(name.into()),
            version: Some(version.into()),
            ..Default::default()
        }
    }

    /// Match package files by content hash.
    pub fn hash(hash_type: HashType, value: impl Into<String>) -> Self {
        Self {
            hash_type: Some(hash_type),
            hash_value: Some(value.into()),
            ..Default::default()
        }
    }
}

impl QueryParams for QueryOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        vec![
            (
                "hash.type",
                self.hash_type.map(|h| h.to_string()).unwrap_or_default(),
            ),
            ("hash.value", text(&self.hash_value)),
            ("versionKey.system", text(&self.system)),
            ("versionKey.name", text(&self.name)),
            ("versionKey.version", text(&self.version)),
        ]
    }
}

/// Versions matching a query. The server caps the list at 1000 entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(default)]
    pub results: Vec<QueryMatch>,
}

/// One matching version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryMatch {
    #[serde(default)]
    pub version: Version,
}

impl QueryResult {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Iterate over the matched versions.
    pub fn versions(&self) -> impl Iterator<Item = &Version> {
        self.results.iter().map(|m| &m.version)
    }
}

impl IntoIterator for QueryResult {
    type Item = Version;
    type IntoIter = std::iter::Map<std::vec::IntoIter<QueryMatch>, fn(QueryMatch) -> Version>;

    fn into_iter(self) -> Self::IntoIter {
        self.results
            .into_iter()
            .map((|m: QueryMatch| m.version) as fn(QueryMatch) -> Version)
    }
}

/// Find package versions by content hash and/or version key.
///
/// A query may match zero, one or many versions; results beyond the
/// server's cap are not fetched.
///
/// # Errors
///
/// Returns an error if the query string cannot be built, the request fails
/// or the body does not decode.
#[tracing::instrument(skip(client))]
pub async fn query(client: &DepsDevClient, options: &QueryOptions) -> Result<QueryResult> {
    let path = add_options(path::QUERY, options)?;
    client.fetch(&path).await
}
