//! Submission directive parsing
//!
//! Each layer record carries a `submission` string telling git how to check
//! out the precise content: comma-separated `key=value` pairs with the
//! recognized keys `branch`, `commit`, and `tag`. An empty string means the
//! default branch at remote HEAD.

use crate::error::{LayersetError, LayersetResult};

/// Which version of a layer's source to check out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSelector {
    /// Default branch, checked out at remote HEAD (usually origin/master,
    /// though remotes are free to point HEAD elsewhere)
    Default,

    /// Named branch at remote HEAD
    Branch(String),

    /// Default branch, pinned to a specific commit
    Commit(String),

    /// A tag
    Tag(String),

    /// Named branch, pinned to a specific commit on it
    BranchAtCommit { branch: String, commit: String },
}

impl VersionSelector {
    /// True when the selector pins an exact commit or tag, so repeated
    /// checkouts yield identical content
    pub fn is_pinned(&self) -> bool {
        matches!(
            self,
            Self::Commit(_) | Self::Tag(_) | Self::BranchAtCommit { .. }
        )
    }
}

/// Parse a submission directive string into a [`VersionSelector`].
///
/// Whitespace is trimmed around the whole string and around each key and
/// value, so `" branch = dylan , commit = bf2d538 "` is accepted. Pair order
/// is irrelevant: `commit=X,branch=Y` equals `branch=Y,commit=X`.
///
/// Fails with [`LayersetError::InvalidDirective`] on a malformed pair or an
/// unrecognized key, and with [`LayersetError::ConflictingDirective`] when a
/// key repeats or `tag` is combined with anything else.
pub fn parse_submission(raw: &str) -> LayersetResult<VersionSelector> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(VersionSelector::Default);
    }

    let mut branch: Option<String> = None;
    let mut commit: Option<String> = None;
    let mut tag: Option<String> = None;

    for pair in raw.split(',') {
        let pair = pair.trim();
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| LayersetError::invalid_directive(pair, "expected key=value"))?;

        let key = key.trim();
        let value = value.trim();
        if key.is_empty() {
            return Err(LayersetError::invalid_directive(pair, "empty key"));
        }
        if value.is_empty() {
            return Err(LayersetError::invalid_directive(pair, "empty value"));
        }

        let slot = match key {
            "branch" => &mut branch,
            "commit" => &mut commit,
            "tag" => &mut tag,
            _ => {
                return Err(LayersetError::invalid_directive(
                    pair,
                    format!("unrecognized key '{}'", key),
                ))
            }
        };

        if slot.is_some() {
            return Err(LayersetError::conflicting(format!(
                "key '{}' given more than once",
                key
            )));
        }
        *slot = Some(value.to_string());
    }

    match (branch, commit, tag) {
        // A tag is a complete selection on its own
        (None, None, Some(tag)) => Ok(VersionSelector::Tag(tag)),
        (Some(_), _, Some(_)) => Err(LayersetError::conflicting("'tag' conflicts with 'branch'")),
        (_, Some(_), Some(_)) => Err(LayersetError::conflicting("'tag' conflicts with 'commit'")),

        (Some(branch), Some(commit), None) => {
            Ok(VersionSelector::BranchAtCommit { branch, commit })
        }
        (Some(branch), None, None) => Ok(VersionSelector::Branch(branch)),
        (None, Some(commit), None) => Ok(VersionSelector::Commit(commit)),

        // Unreachable: every parsed pair fills a slot and the empty string
        // returned early
        (None, None, None) => Ok(VersionSelector::Default),
    }
}
