//! The fixed display template for build metadata.
//!
//! Two renderings of the same line: the visible text form, and the HTML
//! fragment the widget mounts into a page. The HTML form keeps the branch
//! `<span>` in the markup at all times and hides it with the `hidden`
//! attribute when no branch is present, so a branchless build still renders
//! the same element tree.

use minijinja::{Environment, Error as JinjaError, context};
use thiserror::Error;

use crate::model::BuildInfo;

/// HTML fragment template. Interpolated values are HTML-escaped; the branch
/// span is always present and carries `hidden` when no branch is set.
const HTML_TEMPLATE: &str = r#"<p class="text-muted pull-right">Revision {{ build_number }} (Version {{ project_version }}<span{% if not branch %} hidden{% endif %}> from {{ branch }} branch</span>)</p>"#;

/// Errors that occur when rendering the HTML fragment.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template rendering failed.
    #[error("failed to render build info template")]
    Render {
        /// The underlying minijinja error.
        #[source]
        source: JinjaError,
    },

    /// Template compilation failed.
    #[error("invalid template syntax")]
    Template {
        /// The underlying minijinja error.
        #[source]
        source: JinjaError,
    },
}

/// Visible text form of the build line.
///
/// `None` renders the awaiting-response state: blank build number and
/// version, no branch suffix.
pub fn text(info: Option<&BuildInfo>) -> String {
    let (build_number, project_version, branch) = fields(info);
    if branch.is_empty() {
        format!("Revision {build_number} (Version {project_version})")
    } else {
        format!("Revision {build_number} (Version {project_version} from {branch} branch)")
    }
}

/// HTML fragment form of the build line.
///
/// All interpolations are escaped, never interpreted as markup. `None`
/// renders the awaiting-response state with blank values and a hidden
/// branch span.
pub fn html(info: Option<&BuildInfo>) -> Result<String, RenderError> {
    let (build_number, project_version, branch) = fields(info);

    let env = create_environment();
    let compiled = env
        .template_from_str(HTML_TEMPLATE)
        .map_err(|source| RenderError::Template { source })?;

    compiled
        .render(context! {
            build_number,
            project_version,
            branch,
        })
        .map_err(|source| RenderError::Render { source })
}

/// Create a minijinja environment with HTML auto-escaping enabled for all
/// templates, string-built ones included.
fn create_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| minijinja::AutoEscape::Html);
    env
}

/// Field values for the current widget state, with blanks before the fetch
/// resolves and an empty branch when the build has none.
fn fields(info: Option<&BuildInfo>) -> (&str, &str, &str) {
    match info {
        Some(info) => (
            info.build_number.as_str(),
            info.project_version.as_str(),
            info.branch().unwrap_or(""),
        ),
        None => ("", "", ""),
    }
}
