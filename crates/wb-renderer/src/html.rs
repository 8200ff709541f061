//! HTML output helpers for elements with special markup.

use std::borrow::Cow;
use std::fmt::Write;

use pulldown_cmark::BlockQuoteKind;

use crate::state::escape_html;

// Octicons-style alert icons, 16x16
const SVG_INFO: &str = r#"<svg class="alert-icon" viewBox="0 0 16 16" width="16" height="16" aria-hidden="true"><path d="M0 8a8 8 0 1 1 16 0A8 8 0 0 1 0 8Zm8-6.5a6.5 6.5 0 1 0 0 13 6.5 6.5 0 0 0 0-13ZM6.5 7.75A.75.75 0 0 1 7.25 7h1a.75.75 0 0 1 .75.75v2.75h.25a.75.75 0 0 1 0 1.5h-2a.75.75 0 0 1 0-1.5h.25v-2h-.25a.75.75 0 0 1-.75-.75ZM8 6a1 1 0 1 1 0-2 1 1 0 0 1 0 2Z"></path></svg>"#;
const SVG_LIGHTBULB: &str = r#"<svg class="alert-icon" viewBox="0 0 16 16" width="16" height="16" aria-hidden="true"><path d="M8 1.5c-2.363 0-4 1.69-4 3.75 0 .984.424 1.625.984 2.304l.214.253c.223.264.47.556.673.848.284.411.537.896.621 1.49a.75.75 0 0 1-1.484.211c-.04-.282-.163-.547-.37-.847a8.456 8.456 0 0 0-.542-.68c-.084-.1-.173-.205-.268-.32C3.201 7.75 2.5 6.766 2.5 5.25 2.5 2.31 4.863 0 8 0s5.5 2.31 5.5 5.25c0 1.516-.701 2.5-1.328 3.259-.095.115-.184.22-.268.319-.207.245-.383.453-.541.681-.208.3-.33.565-.37.847a.751.751 0 0 1-1.485-.212c.084-.593.337-1.078.621-1.489.203-.292.45-.584.673-.848.075-.088.147-.173.213-.253.561-.679.985-1.32.985-2.304 0-2.06-1.637-3.75-4-3.75ZM5.75 12h4.5a.75.75 0 0 1 0 1.5h-4.5a.75.75 0 0 1 0-1.5ZM6 15.25a.75.75 0 0 1 .75-.75h2.5a.75.75 0 0 1 0 1.5h-2.5a.75.75 0 0 1-.75-.75Z"></path></svg>"#;
const SVG_REPORT: &str = r#"<svg class="alert-icon" viewBox="0 0 16 16" width="16" height="16" aria-hidden="true"><path d="M0 1.75C0 .784.784 0 1.75 0h12.5C15.216 0 16 .784 16 1.75v9.5A1.75 1.75 0 0 1 14.25 13H8.06l-2.573 2.573A1.458 1.458 0 0 1 3 14.543V13H1.75A1.75 1.75 0 0 1 0 11.25Zm1.75-.25a.25.25 0 0 0-.25.25v9.5c0 .138.112.25.25.25h2a.75.75 0 0 1 .75.75v2.19l2.72-2.72a.749.749 0 0 1 .53-.22h6.5a.25.25 0 0 0 .25-.25v-9.5a.25.25 0 0 0-.25-.25Zm7 2.25v2.5a.75.75 0 0 1-1.5 0v-2.5a.75.75 0 0 1 1.5 0ZM9 9a1 1 0 1 1-2 0 1 1 0 0 1 2 0Z"></path></svg>"#;
const SVG_ALERT: &str = r#"<svg class="alert-icon" viewBox="0 0 16 16" width="16" height="16" aria-hidden="true"><path d="M6.457 1.047c.659-1.234 2.427-1.234 3.086 0l6.082 11.378A1.75 1.75 0 0 1 14.082 15H1.918a1.75 1.75 0 0 1-1.543-2.575Zm1.763.707a.25.25 0 0 0-.44 0L1.698 13.132a.25.25 0 0 0 .22.368h12.164a.25.25 0 0 0 .22-.368Zm.53 3.996v2.5a.75.75 0 0 1-1.5 0v-2.5a.75.75 0 0 1 1.5 0ZM9 11a1 1 0 1 1-2 0 1 1 0 0 1 2 0Z"></path></svg>"#;
const SVG_STOP: &str = r#"<svg class="alert-icon" viewBox="0 0 16 16" width="16" height="16" aria-hidden="true"><path d="M4.47.22A.749.749 0 0 1 5 0h6c.199 0 .389.079.53.22l4.25 4.25c.141.14.22.331.22.53v6a.749.749 0 0 1-.22.53l-4.25 4.25A.749.749 0 0 1 11 16H5a.749.749 0 0 1-.53-.22L.22 11.53A.749.749 0 0 1 0 11V5c0-.199.079-.389.22-.53Zm.84 1.28L1.5 5.31v5.38l3.81 3.81h5.38l3.81-3.81V5.31L10.69 1.5ZM8 4a.75.75 0 0 1 .75.75v3.5a.75.75 0 0 1-1.5 0v-3.5A.75.75 0 0 1 8 4Zm0 8a1 1 0 1 1 0-2 1 1 0 0 1 0 2Z"></path></svg>"#;

/// GitHub alert type (`> [!NOTE]`, `> [!WARNING]`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Note,
    Tip,
    Important,
    Warning,
    Caution,
}

impl From<BlockQuoteKind> for AlertKind {
    fn from(kind: BlockQuoteKind) -> Self {
        match kind {
            BlockQuoteKind::Note => Self::Note,
            BlockQuoteKind::Tip => Self::Tip,
            BlockQuoteKind::Important => Self::Important,
            BlockQuoteKind::Warning => Self::Warning,
            BlockQuoteKind::Caution => Self::Caution,
        }
    }
}

pub(crate) fn code_block(lang: Option<&str>, content: &str, out: &mut String) {
    match lang {
        Some(lang) => write!(
            out,
            r#"<pre><code class="language-{}">{}</code></pre>"#,
            escape_html(lang),
            escape_html(content)
        ),
        None => write!(out, "<pre><code>{}</code></pre>", escape_html(content)),
    }
    .unwrap();
}

pub(crate) fn alert_start(kind: AlertKind, out: &mut String) {
    let (class, icon, title) = match kind {
        AlertKind::Note => ("note", SVG_INFO, "Note"),
        AlertKind::Tip => ("tip", SVG_LIGHTBULB, "Tip"),
        AlertKind::Important => ("important", SVG_REPORT, "Important"),
        AlertKind::Warning => ("warning", SVG_ALERT, "Warning"),
        AlertKind::Caution => ("caution", SVG_STOP, "Caution"),
    };
    write!(
        out,
        r#"<blockquote class="alert alert-{class}"><div class="alert-title">{icon}{title}</div><div class="alert-content">"#
    )
    .unwrap();
}

pub(crate) fn alert_end(out: &mut String) {
    out.push_str("</div></blockquote>");
}

pub(crate) fn image(src: &str, alt: &str, title: &str, out: &mut String) {
    let title_attr = if title.is_empty() {
        String::new()
    } else {
        format!(r#" title="{}""#, escape_html(title))
    };
    write!(
        out,
        r#"<img src="{}"{title_attr} alt="{}" loading="lazy">"#,
        escape_html(src),
        escape_html(alt)
    )
    .unwrap();
}

pub(crate) fn task_list_marker(checked: bool, out: &mut String) {
    if checked {
        out.push_str(r#"<input type="checkbox" disabled checked> "#);
    } else {
        out.push_str(r#"<input type="checkbox" disabled> "#);
    }
}

/// Rewrite a markdown link for the rendered site.
///
/// Relative links to `.md` files lose their extension. With a base path
/// (the URL directory of the current page, e.g. `/docs/components`) they are
/// resolved to absolute URLs:
///
/// - `button.md` -> `/docs/components/button`
/// - `../tokens/colors.md#scale` -> `/docs/tokens/colors#scale`
///
/// External links, fragment-only links, and non-markdown links are returned
/// unchanged.
pub(crate) fn transform_link<'a>(url: &'a str, base_path: Option<&str>) -> Cow<'a, str> {
    if is_external(url) {
        return Cow::Borrowed(url);
    }

    let (path, fragment) = match url.find('#') {
        Some(pos) => url.split_at(pos),
        None => (url, ""),
    };
    let Some(stem) = path.strip_suffix(".md") else {
        return Cow::Borrowed(url);
    };
    if stem.is_empty() {
        return Cow::Borrowed(url);
    }

    let target = match base_path {
        _ if stem.starts_with('/') => stem.to_owned(),
        Some(base) => format!("/{}", resolve_relative_path(stem, base)),
        None => stem.to_owned(),
    };
    Cow::Owned(format!("{target}{fragment}"))
}

fn is_external(url: &str) -> bool {
    url.starts_with("http://")
        || url.starts_with("https://")
        || url.starts_with("//")
        || url.starts_with("mailto:")
        || url.starts_with("tel:")
        || url.starts_with('#')
}

/// Resolve a relative path against a base directory.
///
/// `..` above the root is clamped.
fn resolve_relative_path(relative: &str, base: &str) -> String {
    let mut segments: Vec<&str> = base.split('/').filter(|s| !s.is_empty()).collect();

    for component in relative.split('/') {
        match component {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(component),
        }
    }

    segments.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_code_block_with_language() {
        let mut out = String::new();
        code_block(Some("css"), ".btn { color: red; }", &mut out);
        assert_eq!(
            out,
            r#"<pre><code class="language-css">.btn { color: red; }</code></pre>"#
        );
    }

    #[test]
    fn test_code_block_escapes_content() {
        let mut out = String::new();
        code_block(None, "<Button />", &mut out);
        assert_eq!(out, "<pre><code>&lt;Button /&gt;</code></pre>");
    }

    #[test]
    fn test_image_with_title() {
        let mut out = String::new();
        image("logo.png", "Logo", "Brand", &mut out);
        assert_eq!(
            out,
            r#"<img src="logo.png" title="Brand" alt="Logo" loading="lazy">"#
        );
    }

    #[test]
    fn test_alert_markup() {
        let mut out = String::new();
        alert_start(AlertKind::Warning, &mut out);
        out.push_str("<p>Careful</p>");
        alert_end(&mut out);

        assert!(out.starts_with(r#"<blockquote class="alert alert-warning">"#));
        assert!(out.contains(r#"<svg class="alert-icon""#));
        assert!(out.contains("Warning</div>"));
        assert!(out.ends_with("<p>Careful</p></div></blockquote>"));
    }

    #[test]
    fn test_transform_link_sibling_without_base() {
        assert_eq!(transform_link("button.md", None), "button");
        assert_eq!(transform_link("./button.md#props", None), "./button#props");
    }

    #[test]
    fn test_transform_link_with_base() {
        assert_eq!(
            transform_link("button.md", Some("/docs/components")),
            "/docs/components/button"
        );
        assert_eq!(
            transform_link("../tokens/colors.md#scale", Some("/docs/components")),
            "/docs/tokens/colors#scale"
        );
    }

    #[test]
    fn test_transform_link_absolute_md() {
        assert_eq!(
            transform_link("/docs/rules/tech-stack.md", Some("/docs/components")),
            "/docs/rules/tech-stack"
        );
    }

    #[test]
    fn test_transform_link_unchanged() {
        let base = Some("/docs/components");
        assert_eq!(transform_link("https://example.com/a.md", base), "https://example.com/a.md");
        assert_eq!(transform_link("mailto:team@example.com", base), "mailto:team@example.com");
        assert_eq!(transform_link("#usage", base), "#usage");
        assert_eq!(transform_link("./image.png", base), "./image.png");
        assert_eq!(transform_link(".md", base), ".md");
    }

    #[test]
    fn test_resolve_relative_path_clamps_traversal() {
        assert_eq!(resolve_relative_path("../../../etc/passwd", "docs/a"), "etc/passwd");
    }
}
