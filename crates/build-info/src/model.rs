use serde::Deserialize;

/// Build metadata returned by the build-info endpoint.
///
/// Deserialized straight from the JSON response body. The sample payloads
/// also carry a `timestamp` field; it and any other unknown field are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    /// SCM revision the artifact was built from.
    pub build_number: String,
    /// Project version string, e.g. "1.3.1-SNAPSHOT".
    pub project_version: String,
    /// Branch the artifact was built from, when the build recorded one.
    #[serde(default)]
    pub scm_branch: Option<String>,
}

impl BuildInfo {
    /// The branch the artifact was built from.
    ///
    /// Builds from a tag or a detached checkout report the branch as null or
    /// as an empty string; both count as "no branch" and suppress the branch
    /// suffix in the rendered output.
    pub fn branch(&self) -> Option<&str> {
        self.scm_branch
            .as_deref()
            .filter(|branch| !branch.is_empty())
    }
}
