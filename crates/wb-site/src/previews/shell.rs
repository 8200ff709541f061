//! Preview shell: theme switcher plus titled sections.

use std::fmt::Write;

use serde::Serialize;

use wb_renderer::escape_html;

/// Design-system theme a preview can be shown in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PreviewTheme {
    pub id: &'static str,
    pub label: &'static str,
    /// Swatch color shown in the switcher.
    pub color: &'static str,
}

/// Available themes; the first one is active by default.
pub const THEMES: [PreviewTheme; 3] = [
    PreviewTheme {
        id: "higher-ed",
        label: "Higher Ed",
        color: "#19518B",
    },
    PreviewTheme {
        id: "k12",
        label: "K-12",
        color: "#19518B",
    },
    PreviewTheme {
        id: "admin",
        label: "Admin",
        color: "#18181B",
    },
];

/// One titled block of a preview.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewSection {
    pub title: &'static str,
    pub description: Option<&'static str>,
    /// Section markup.
    pub body: String,
}

impl PreviewSection {
    pub(crate) fn new(title: &'static str, description: &'static str, body: String) -> Self {
        Self {
            title,
            description: (!description.is_empty()).then_some(description),
            body,
        }
    }
}

/// Render sections inside the themeable preview shell.
pub(crate) fn render_shell(slug: &str, sections: &[PreviewSection]) -> String {
    let default = THEMES[0];
    let mut out = format!(
        r#"<div class="preview-shell" data-preview-shell data-preview="{}">"#,
        escape_html(slug)
    );

    out.push_str(concat!(
        r#"<div class="preview-toolbar">"#,
        r#"<div class="preview-theme-switcher" role="group" aria-label="Theme">"#,
        r#"<span class="preview-theme-label">Theme</span>"#
    ));
    for theme in THEMES {
        write!(
            out,
            r#"<button type="button" class="preview-theme" data-preview-theme="{id}" aria-pressed="{pressed}"><span class="preview-theme-swatch" style="background-color:{color}"></span>{label}</button>"#,
            id = theme.id,
            pressed = theme.id == default.id,
            color = theme.color,
            label = theme.label,
        )
        .unwrap();
    }
    out.push_str("</div></div>");

    write!(
        out,
        r#"<div class="preview-canvas ds-theme-{}" data-preview-canvas>"#,
        default.id
    )
    .unwrap();
    for section in sections {
        render_section(&mut out, section);
    }
    out.push_str("</div></div>");
    out
}

fn render_section(out: &mut String, section: &PreviewSection) {
    write!(
        out,
        r#"<section class="preview-section"><h3 class="preview-section-title">{}</h3>"#,
        escape_html(section.title)
    )
    .unwrap();
    if let Some(description) = section.description {
        write!(
            out,
            r#"<p class="preview-section-description">{}</p>"#,
            escape_html(description)
        )
        .unwrap();
    }
    write!(out, r#"<div class="preview-section-body">{}</div></section>"#, section.body).unwrap();
}

/// Shown when no preview is registered for a slug.
pub const PLACEHOLDER_HTML: &str = concat!(
    r#"<div class="preview-placeholder">"#,
    r#"<span class="ds-icon" data-icon="eye" aria-hidden="true"></span>"#,
    "<h3>Preview coming soon</h3>",
    "<p>A visual preview for this component will be added in a future update. ",
    "Check the Spec tab for the full documentation.</p>",
    "</div>"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_defaults_to_first_theme() {
        let html = render_shell("button", &[]);

        assert!(html.contains("ds-theme-higher-ed"));
        assert!(html.contains(r#"data-preview-theme="higher-ed" aria-pressed="true""#));
        assert!(html.contains(r#"data-preview-theme="admin" aria-pressed="false""#));
    }

    #[test]
    fn test_section_without_description() {
        let section = PreviewSection::new("Sizes", "", "<p>x</p>".to_owned());
        let html = render_shell("button", &[section]);

        assert!(html.contains(r#"<h3 class="preview-section-title">Sizes</h3>"#));
        assert!(!html.contains("preview-section-description"));
        assert!(html.contains("<p>x</p>"));
    }

    #[test]
    fn test_placeholder_text() {
        assert!(PLACEHOLDER_HTML.contains("Preview coming soon"));
        assert!(PLACEHOLDER_HTML.contains("Check the Spec tab"));
    }
}
