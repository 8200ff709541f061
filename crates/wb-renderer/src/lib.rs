//! Markdown rendering for Workbench documentation pages.
//!
//! [`MarkdownRenderer`] turns a document body into HTML and collects:
//! - heading ids (`"Color Tokens"` -> `color-tokens`, duplicates suffixed `-1`, `-2`)
//! - a table of contents from level 2 and 3 headings
//! - the first H1 as a title candidate
//!
//! GitHub Flavored Markdown is on by default. Raw HTML in documents is shown as
//! text, never injected into the page.
//!
//! # Example
//!
//! ```
//! use wb_renderer::MarkdownRenderer;
//!
//! let result = MarkdownRenderer::new()
//!     .with_base_path("/docs/components")
//!     .render_markdown("See [Alert](alert.md).");
//!
//! assert_eq!(
//!     result.html,
//!     r#"<p>See <a href="/docs/components/alert">Alert</a>.</p>"#
//! );
//! ```

mod html;
mod renderer;
mod state;

pub use html::AlertKind;
pub use renderer::{MarkdownRenderer, RenderResult};
pub use state::{TocEntry, escape_html, slugify};
