//! Query-string construction for option structs.
//!
//! Option types map their fields to query keys by hand through
//! [`QueryParams`]; [`add_options`] turns that mapping into an encoded,
//! deterministic query string.

use url::form_urlencoded;
use url::{ParseError, Url};

use crate::error::{DepsDevError, Result};

/// Placeholder used to validate relative references.
const VALIDATION_BASE: &str = "http://localhost/";

/// Explicit field-to-query-key mapping for an options struct.
pub trait QueryParams {
    /// Key/value pairs for every field. Empty values may be included; they
    /// are dropped by [`add_options`].
    fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

/// Append the parameters in `opts` to `path` as its query string.
///
/// Empty values are omitted, parameters are sorted by key and
/// form-encoded, and any query already present on `path` is replaced. When
/// nothing remains to encode, `path` is returned unchanged.
///
/// # Errors
///
/// Returns [`DepsDevError::InvalidPath`], carrying the original input, if
/// `path` is not a valid absolute or relative URL.
pub fn add_options<Q: QueryParams + ?Sized>(path: &str, opts: &Q) -> Result<String> {
    validate_reference(path).map_err(|source| DepsDevError::InvalidPath {
        path: path.to_string(),
        source,
    })?;

    let mut pairs: Vec<(&'static str, String)> = opts
        .query_pairs()
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect();
    if pairs.is_empty() {
        return Ok(path.to_string());
    }
    pairs.sort();

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())))
        .finish();

    // The input is kept byte for byte apart from its query.
    let (rest, fragment) = match path.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (path, None),
    };
    let base = rest.split_once('?').map_or(rest, |(base, _)| base);

    let mut out = format!("{base}?{query}");
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }
    Ok(out)
}

/// Check that `path` is an absolute URL or a relative reference.
///
/// A relative reference may not have a `:` in its first segment, since it
/// would read as a scheme.
fn validate_reference(path: &str) -> std::result::Result<(), ParseError> {
    match Url::parse(path) {
        Ok(_) => Ok(()),
        Err(ParseError::RelativeUrlWithoutBase) => {
            let first_segment = path.split(['/', '?', '#']).next().unwrap_or_default();
            if first_segment.contains(':') {
                return Err(ParseError::RelativeUrlWithoutBase);
            }
            Url::parse(VALIDATION_BASE)?.join(path)?;
            Ok(())
        }
        Err(e) => Err(e),
    }
}
