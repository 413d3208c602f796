//! Maps request targets onto files under the document root.

use std::path::PathBuf;

use anyhow::Context;
use percent_encoding::percent_decode_str;
use tracing::info;
use url::Url;

use crate::config::ResolveMode;
use crate::server::root::{DocumentRoot, INDEX_FILE};

pub const NOT_FOUND_PAGE: &str = r#"<!DOCTYPE html>

<html>
<head>
    <meta charset="utf-8" />
    <title>Not found</title>
</head>

<body>
    <h1>Not found</h1>
    <p>The server could not find the resource you were looking for.</p>
</body>
</html>
"#;

const BASE_URL: &str = "http://localhost/";

/// Outcome of looking up a request target. Exactly one of the two holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedResource {
    Found { path: PathBuf, content: String },
    NotFound { path: PathBuf },
}

impl ResolvedResource {
    pub fn is_found(&self) -> bool {
        matches!(self, ResolvedResource::Found { .. })
    }

    /// The body to send: the file content, or the not-found page.
    pub fn content(&self) -> &str {
        match self {
            ResolvedResource::Found { content, .. } => content,
            ResolvedResource::NotFound { .. } => NOT_FOUND_PAGE,
        }
    }
}

/// Name of the file under the document root a target refers to.
///
/// In `IndexOnly` mode `/` is `index.html` and every other target yields an
/// empty name, which never names a file. `None` means the target was
/// rejected outright.
pub fn resource_name(target: &str, mode: ResolveMode) -> Option<String> {
    if target == "/" {
        return Some(INDEX_FILE.to_string());
    }

    match mode {
        ResolveMode::IndexOnly => Some(String::new()),
        ResolveMode::DocumentRoot => normalize_target(target),
    }
}

/// Normalises an origin-form target into a relative path.
///
/// Dot segments are collapsed by the URL parser (including `%2e%2e`), so the
/// result cannot climb out of the root. Each segment is then percent-decoded;
/// a segment that fails to decode as UTF-8, is empty or a dot segment, or
/// decodes to something holding a path separator rejects the target. A bare
/// `/` (after dropping query and fragment) is the index file.
fn normalize_target(target: &str) -> Option<String> {
    if !target.starts_with('/') {
        return None;
    }

    let base = Url::parse(BASE_URL).ok()?;
    let url = base.join(target).ok()?;
    if url.host_str() != base.host_str() || url.port() != base.port() {
        return None;
    }

    if url.path() == "/" {
        return Some(INDEX_FILE.to_string());
    }

    let mut decoded = Vec::new();
    for segment in url.path_segments()? {
        let segment = percent_decode_str(segment).decode_utf8().ok()?;
        if segment.is_empty()
            || segment == "."
            || segment == ".."
            || segment.contains(['/', '\\', '\0'])
        {
            return None;
        }
        decoded.push(segment.into_owned());
    }

    Some(decoded.join("/"))
}

/// Resolves `target` against `root`, reading the file if it exists.
pub async fn resolve(
    root: &DocumentRoot,
    target: &str,
    mode: ResolveMode,
) -> anyhow::Result<ResolvedResource> {
    let Some(name) = resource_name(target, mode) else {
        info!(request_target = %target, "Rejected resource target");
        return Ok(ResolvedResource::NotFound {
            path: root.path().to_path_buf(),
        });
    };

    info!(resource = %name, "Get resource");

    let path = match mode {
        ResolveMode::IndexOnly => root.join(&name.replace('/', "")),
        ResolveMode::DocumentRoot => root.join(&name),
    };

    let is_file = tokio::fs::metadata(&path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false);

    if !is_file {
        info!(path = %path.display(), "Could not locate resource");
        return Ok(ResolvedResource::NotFound { path });
    }

    let bytes = tokio::fs::read(&path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    info!(path = %path.display(), "Reading file");

    Ok(ResolvedResource::Found {
        content: String::from_utf8_lossy(&bytes).into_owned(),
        path,
    })
}
