//! Pasted design-link parsing.
//!
//! Extracts the file key (and optional node id) from a URL copied out of the
//! design tool, e.g. `https://www.figma.com/design/AbC123/My-File?node-id=1-2`.

use url::Url;

use crate::error::{Error, Result};

/// The addressable parts of a pasted design link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignLink {
    pub file_key: String,
    pub node_id: Option<String>,
}

/// Parse a pasted link into a file key and optional node id.
///
/// The key is the path segment after `/file/` or `/design/`; the node id
/// comes from the `node-id` query parameter, with the URL form's `-`
/// separator mapped back to the API's `:`.
pub fn parse_design_link(raw: &str) -> Result<DesignLink> {
    let url = Url::parse(raw).map_err(|_| Error::UrlError(raw.to_string()))?;

    let mut segments = url
        .path_segments()
        .ok_or_else(|| Error::UrlError(raw.to_string()))?;
    let file_key = segments
        .find(|s| *s == "file" || *s == "design")
        .and_then(|_| segments.next())
        .filter(|key| !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric()))
        .ok_or_else(|| Error::UrlError(format!("no file key in {}", raw)))?
        .to_string();

    let node_id = url
        .query_pairs()
        .find(|(k, _)| k == "node-id")
        .map(|(_, v)| v.replace('-', ":"));

    Ok(DesignLink { file_key, node_id })
}
