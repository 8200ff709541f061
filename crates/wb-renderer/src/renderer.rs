//! Markdown renderer producing HTML, a table of contents and the first H1.

use std::fmt::Write;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use crate::html::{self, AlertKind};
use crate::state::{CodeBlockState, HeadingState, ImageState, TableState, TocEntry, escape_html};

/// Result of rendering markdown.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderResult {
    /// Rendered HTML.
    pub html: String,
    /// Text of the first H1 heading (if title extraction was enabled).
    pub h1_title: Option<String>,
    /// Level 2 and 3 headings.
    pub toc: Vec<TocEntry>,
    /// Markdown constructs that could not be rendered.
    pub warnings: Vec<String>,
}

/// Markdown to HTML renderer.
///
/// A renderer is single-use: create one per document.
///
/// ```
/// use wb_renderer::MarkdownRenderer;
///
/// let result = MarkdownRenderer::new()
///     .with_title_extraction()
///     .render_markdown("# Button\n\n## Usage\n\nPress it.");
///
/// assert_eq!(result.h1_title.as_deref(), Some("Button"));
/// assert_eq!(result.toc[0].id, "usage");
/// ```
pub struct MarkdownRenderer {
    output: String,
    code: CodeBlockState,
    table: TableState,
    image: ImageState,
    heading: HeadingState,
    base_path: Option<String>,
    pending_image: Option<(String, String)>,
    gfm: bool,
    /// Alert kinds of open blockquotes (`None` for a plain blockquote).
    alert_stack: Vec<Option<AlertKind>>,
    raw_html_seen: bool,
    warnings: Vec<String>,
}

impl MarkdownRenderer {
    /// Create a new renderer with GFM enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(4096),
            code: CodeBlockState::default(),
            table: TableState::default(),
            image: ImageState::default(),
            heading: HeadingState::new(false),
            base_path: None,
            pending_image: None,
            gfm: true,
            alert_stack: Vec::new(),
            raw_html_seen: false,
            warnings: Vec::new(),
        }
    }

    /// Record the first H1 as [`RenderResult::h1_title`]. The heading is still rendered.
    #[must_use]
    pub fn with_title_extraction(mut self) -> Self {
        self.heading = HeadingState::new(true);
        self
    }

    /// URL directory of the page, used to resolve relative `.md` links.
    #[must_use]
    pub fn with_base_path(mut self, path: impl Into<String>) -> Self {
        self.base_path = Some(path.into());
        self
    }

    /// Enable or disable GitHub Flavored Markdown (tables, strikethrough,
    /// task lists, alerts). Enabled by default.
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }

    /// Render markdown text using the configured parser options.
    pub fn render_markdown(mut self, markdown: &str) -> RenderResult {
        let options = self.parser_options();
        for event in Parser::new_ext(markdown, options) {
            self.process_event(event);
        }

        RenderResult {
            html: self.output,
            h1_title: self.heading.take_title(),
            toc: self.heading.take_toc(),
            warnings: self.warnings,
        }
    }

    /// Push content to output or heading buffer based on context.
    fn push_inline(&mut self, content: &str) {
        if self.heading.is_active() {
            self.heading.push_html(content);
        } else {
            self.output.push_str(content);
        }
    }

    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline_code(&code),
            Event::Html(raw) | Event::InlineHtml(raw) => self.raw_html(&raw),
            Event::SoftBreak => self.soft_break(),
            Event::HardBreak => self.push_inline("<br>"),
            Event::Rule => self.output.push_str("<hr>"),
            Event::TaskListMarker(checked) => html::task_list_marker(checked, &mut self.output),
            Event::FootnoteReference(_) | Event::InlineMath(_) | Event::DisplayMath(_) => {
                // Not enabled in parser options
            }
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.output.push_str("<p>"),
            Tag::Heading { level, .. } => {
                // Opening tag is written in end_tag once the id is known
                self.heading.start_heading(level as u8);
            }
            Tag::BlockQuote(kind) => {
                let alert = kind.map(AlertKind::from);
                self.alert_stack.push(alert);
                match alert {
                    Some(alert) => html::alert_start(alert, &mut self.output),
                    None => self.output.push_str("<blockquote>"),
                }
            }
            Tag::CodeBlock(kind) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .map(str::to_owned),
                    CodeBlockKind::Indented => None,
                };
                self.code.start(lang);
            }
            Tag::List(start) => match start {
                Some(1) => self.output.push_str("<ol>"),
                Some(n) => write!(self.output, r#"<ol start="{n}">"#).unwrap(),
                None => self.output.push_str("<ul>"),
            },
            Tag::Item => self.output.push_str("<li>"),
            Tag::FootnoteDefinition(_) | Tag::HtmlBlock | Tag::MetadataBlock(_) => {}
            Tag::DefinitionList => self.output.push_str("<dl>"),
            Tag::DefinitionListTitle => self.output.push_str("<dt>"),
            Tag::DefinitionListDefinition => self.output.push_str("<dd>"),
            Tag::Table(alignments) => {
                self.table.start(alignments);
                self.output.push_str("<table>");
            }
            Tag::TableHead => {
                self.table.start_head();
                self.output.push_str("<thead><tr>");
            }
            Tag::TableRow => {
                self.table.start_row();
                self.output.push_str("<tr>");
            }
            Tag::TableCell => {
                let align = self.table.current_alignment_style();
                let cell = if self.table.is_in_head() { "th" } else { "td" };
                write!(self.output, "<{cell}{align}>").unwrap();
            }
            Tag::Emphasis => self.push_inline("<em>"),
            Tag::Strong => self.push_inline("<strong>"),
            Tag::Strikethrough => self.push_inline("<del>"),
            Tag::Superscript => self.push_inline("<sup>"),
            Tag::Subscript => self.push_inline("<sub>"),
            Tag::Link { dest_url, .. } => {
                let href = html::transform_link(&dest_url, self.base_path.as_deref());
                let link = format!(r#"<a href="{}">"#, escape_html(&href));
                self.push_inline(&link);
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                self.image.start();
                self.pending_image = Some((dest_url.into_string(), title.into_string()));
            }
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.output.push_str("</p>"),
            TagEnd::Heading(_) => {
                if let Some((level, id, inner)) = self.heading.complete_heading() {
                    write!(
                        self.output,
                        r#"<h{level} id="{id}">{}</h{level}>"#,
                        inner.trim()
                    )
                    .unwrap();
                }
            }
            TagEnd::BlockQuote(_) => match self.alert_stack.pop() {
                Some(Some(_)) => html::alert_end(&mut self.output),
                _ => self.output.push_str("</blockquote>"),
            },
            TagEnd::CodeBlock => {
                let (lang, content) = self.code.end();
                html::code_block(lang.as_deref(), &content, &mut self.output);
            }
            TagEnd::List(ordered) => {
                self.output
                    .push_str(if ordered { "</ol>" } else { "</ul>" });
            }
            TagEnd::Item => self.output.push_str("</li>"),
            TagEnd::FootnoteDefinition | TagEnd::HtmlBlock | TagEnd::MetadataBlock(_) => {}
            TagEnd::DefinitionList => self.output.push_str("</dl>"),
            TagEnd::DefinitionListTitle => self.output.push_str("</dt>"),
            TagEnd::DefinitionListDefinition => self.output.push_str("</dd>"),
            TagEnd::Table => self.output.push_str("</tbody></table>"),
            TagEnd::TableHead => {
                self.output.push_str("</tr></thead><tbody>");
                self.table.end_head();
            }
            TagEnd::TableRow => self.output.push_str("</tr>"),
            TagEnd::TableCell => {
                self.output.push_str(if self.table.is_in_head() {
                    "</th>"
                } else {
                    "</td>"
                });
                self.table.next_cell();
            }
            TagEnd::Emphasis => self.push_inline("</em>"),
            TagEnd::Strong => self.push_inline("</strong>"),
            TagEnd::Strikethrough => self.push_inline("</del>"),
            TagEnd::Superscript => self.push_inline("</sup>"),
            TagEnd::Subscript => self.push_inline("</sub>"),
            TagEnd::Link => self.push_inline("</a>"),
            TagEnd::Image => {
                let alt = self.image.end();
                if let Some((src, title)) = self.pending_image.take() {
                    html::image(&src, &alt, &title, &mut self.output);
                }
            }
        }
    }

    fn text(&mut self, text: &str) {
        if self.code.is_active() {
            self.code.push_str(text);
        } else if self.image.is_active() {
            self.image.push_str(text);
        } else if self.heading.is_active() {
            self.heading.push_text(text);
            self.heading.push_html(&escape_html(text));
        } else {
            self.output.push_str(&escape_html(text));
        }
    }

    fn inline_code(&mut self, code: &str) {
        if self.heading.is_active() {
            self.heading.push_text(code);
        }
        let html = format!("<code>{}</code>", escape_html(code));
        self.push_inline(&html);
    }

    /// Raw HTML is shown as text.
    fn raw_html(&mut self, raw: &str) {
        if !self.raw_html_seen {
            self.raw_html_seen = true;
            self.warnings
                .push("Raw HTML is not rendered and is shown as text".to_owned());
        }
        let escaped = escape_html(raw);
        self.push_inline(&escaped);
    }

    fn soft_break(&mut self) {
        if self.heading.is_active() {
            self.heading.push_text(" ");
        }
        self.push_inline("\n");
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(markdown: &str) -> RenderResult {
        MarkdownRenderer::new().render_markdown(markdown)
    }

    fn render_with_title(markdown: &str) -> RenderResult {
        MarkdownRenderer::new()
            .with_title_extraction()
            .render_markdown(markdown)
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(render("Hello, world!").html, "<p>Hello, world!</p>");
    }

    #[test]
    fn test_heading_with_id() {
        let result = render("## Color Tokens");
        assert_eq!(result.html, r#"<h2 id="color-tokens">Color Tokens</h2>"#);
        assert_eq!(
            result.toc,
            vec![TocEntry {
                level: 2,
                title: "Color Tokens".to_owned(),
                id: "color-tokens".to_owned(),
            }]
        );
    }

    #[test]
    fn test_duplicate_heading_ids() {
        let result = render("## Usage\n\n## Usage\n\n### Usage");
        let ids: Vec<_> = result.toc.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["usage", "usage-1", "usage-2"]);
    }

    #[test]
    fn test_toc_skips_h1_and_deep_levels() {
        let result = render("# Title\n\n## A\n\n### B\n\n#### C");
        let levels: Vec<_> = result.toc.iter().map(|e| e.level).collect();
        assert_eq!(levels, vec![2, 3]);
    }

    #[test]
    fn test_title_extraction_keeps_heading() {
        let result = render_with_title("# Button\n\nIntro\n\n# Second");
        assert_eq!(result.h1_title.as_deref(), Some("Button"));
        assert!(result.html.contains(r#"<h1 id="button">Button</h1>"#));
    }

    #[test]
    fn test_no_title_without_extraction() {
        assert_eq!(render("# Button").h1_title, None);
    }

    #[test]
    fn test_heading_with_inline_code() {
        let result = render("## The `size` prop");
        assert_eq!(
            result.html,
            r#"<h2 id="the-size-prop">The <code>size</code> prop</h2>"#
        );
        assert_eq!(result.toc[0].title, "The size prop");
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let result = render("<script>alert(1)</script>\n\nInline <b>bold</b>");
        assert!(!result.html.contains("<script>"));
        assert!(result.html.contains("&lt;script&gt;"));
        assert!(result.html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }

    #[test]
    fn test_table_with_alignment() {
        let result = render("| Token | Value |\n|:--|--:|\n| space-1 | 4px |");
        assert_eq!(
            result.html,
            concat!(
                "<table><thead><tr>",
                r#"<th style="text-align:left">Token</th><th style="text-align:right">Value</th>"#,
                "</tr></thead><tbody><tr>",
                r#"<td style="text-align:left">space-1</td><td style="text-align:right">4px</td>"#,
                "</tr></tbody></table>"
            )
        );
    }

    #[test]
    fn test_strikethrough_and_tasklist() {
        let result = render("~~old~~\n\n- [x] done\n- [ ] open");
        assert!(result.html.contains("<del>old</del>"));
        assert!(result.html.contains(r#"<input type="checkbox" disabled checked>"#));
        assert!(result.html.contains(r#"<input type="checkbox" disabled>"#));
    }

    #[test]
    fn test_gfm_disabled() {
        let result = MarkdownRenderer::new()
            .with_gfm(false)
            .render_markdown("~~old~~");
        assert_eq!(result.html, "<p>~~old~~</p>");
    }

    #[test]
    fn test_alert() {
        let result = render("> [!NOTE]\n> Tokens are **required**.");
        assert!(result.html.contains(r#"class="alert alert-note""#));
        assert!(result.html.contains("<strong>required</strong>"));
    }

    #[test]
    fn test_plain_blockquote() {
        assert_eq!(
            render("> Quote").html,
            "<blockquote><p>Quote</p></blockquote>"
        );
    }

    #[test]
    fn test_code_block_language() {
        let result = render("```tsx title=Button\n<Button />\n```");
        assert_eq!(
            result.html,
            r#"<pre><code class="language-tsx">&lt;Button /&gt;
</code></pre>"#
        );
    }

    #[test]
    fn test_relative_md_link_rewritten() {
        let result = render("See [Button](button.md).");
        assert_eq!(result.html, r#"<p>See <a href="button">Button</a>.</p>"#);
    }

    #[test]
    fn test_link_with_base_path() {
        let result = MarkdownRenderer::new()
            .with_base_path("/docs/components")
            .render_markdown("[Colors](../tokens/colors.md) and [site](https://example.com)");
        assert!(result.html.contains(r#"<a href="/docs/tokens/colors">"#));
        assert!(result.html.contains(r#"<a href="https://example.com">"#));
    }

    #[test]
    fn test_image() {
        let result = render("![Logo](logo.png \"Brand\")");
        assert_eq!(
            result.html,
            r#"<p><img src="logo.png" title="Brand" alt="Logo" loading="lazy"></p>"#
        );
    }

    #[test]
    fn test_ordered_list_start() {
        assert_eq!(
            render("3. three\n4. four").html,
            r#"<ol start="3"><li>three</li><li>four</li></ol>"#
        );
    }

    #[test]
    fn test_raw_html_warns_once() {
        let result = render("<div>a</div>\n\nText <span>b</span>");
        assert_eq!(result.warnings.len(), 1);
        assert!(render("Plain text").warnings.is_empty());
    }
}
