//! Build-info widget: fetches build metadata (build number, project version,
//! source-control branch) from a configured endpoint and renders it as a line
//! of text or as an HTML fragment.
//!
//! The widget is a plain exported type with no global registry: the embedding
//! application constructs it with the endpoint URL, awaits [`BuildWidget::load`]
//! once at initialization, and renders whenever it likes. Until the response
//! arrives the widget renders blank values; a failed fetch keeps it that way
//! (logged, never surfaced). The branch suffix is shown only when the
//! response carries a non-empty branch.
//!
//! # Example
//!
//! ```ignore
//! use build_info::BuildWidget;
//!
//! let mut widget = BuildWidget::new("https://app.example.org/api/build".parse()?);
//! widget.load().await;
//!
//! // "Revision f0b3539 (Version 1.3.1-SNAPSHOT from main branch)"
//! println!("{}", widget.render_text());
//! ```

use url::Url;

mod client;
mod model;
pub mod render;

pub use client::{BuildInfoClient, FetchError};
pub use model::BuildInfo;
pub use render::RenderError;

/// Widget displaying the build metadata of the embedding application.
///
/// Two observable states: awaiting the response (renders blanks) and
/// populated (renders the fetched values). The transition happens at most
/// once, when [`load`](Self::load) resolves successfully; there is no way
/// back and no retry.
#[derive(Debug)]
pub struct BuildWidget {
    client: BuildInfoClient,
    info: Option<BuildInfo>,
    loaded: bool,
}

impl BuildWidget {
    /// Create a widget that queries the given endpoint.
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(BuildInfoClient::new(endpoint))
    }

    /// Create a widget over an existing client, e.g. one configured with a
    /// custom timeout.
    pub fn with_client(client: BuildInfoClient) -> Self {
        Self {
            client,
            info: None,
            loaded: false,
        }
    }

    /// Fetch build metadata from the endpoint.
    ///
    /// Awaited once at initialization. The GET is issued at most once per
    /// widget: calls after the first are no-ops whether or not the fetch
    /// succeeded. A failed fetch is logged and leaves the widget rendering
    /// blank values; it is never surfaced to the caller.
    pub async fn load(&mut self) {
        if self.loaded {
            return;
        }
        self.loaded = true;

        match self.client.fetch().await {
            Ok(info) => self.info = Some(info),
            Err(err) => {
                tracing::warn!(
                    url = %self.client.endpoint(),
                    error = %err,
                    "failed to fetch build info, rendering blank values"
                );
            }
        }
    }

    /// The fetched build metadata, for embedders that want the raw fields
    /// instead of the rendered line. `None` until [`load`](Self::load) has
    /// resolved successfully.
    pub fn build_info(&self) -> Option<&BuildInfo> {
        self.info.as_ref()
    }

    /// The visible text of the widget in its current state.
    pub fn render_text(&self) -> String {
        render::text(self.info.as_ref())
    }

    /// The HTML fragment of the widget in its current state, with all field
    /// values escaped.
    pub fn render_html(&self) -> Result<String, RenderError> {
        render::html(self.info.as_ref())
    }
}
