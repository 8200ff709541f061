//! HTML building blocks shared by the previews.
//!
//! Every helper escapes text arguments. Arguments named `html` or `body` are
//! inserted as-is and must already be markup.

use std::fmt::Write;

use wb_renderer::escape_html;

/// Button variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Variant {
    Default,
    Secondary,
    Outline,
    Ghost,
    Destructive,
    Link,
}

impl Variant {
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::Secondary,
        Self::Outline,
        Self::Ghost,
        Self::Destructive,
        Self::Link,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Destructive => "destructive",
            Self::Link => "link",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Secondary => "Secondary",
            Self::Outline => "Outline",
            Self::Ghost => "Ghost",
            Self::Destructive => "Destructive",
            Self::Link => "Link",
        }
    }
}

pub(crate) fn button(variant: Variant, label: &str) -> String {
    format!(
        r#"<button type="button" class="ds-btn ds-btn-{}">{}</button>"#,
        variant.as_str(),
        escape_html(label)
    )
}

/// Button with extra classes and inner markup (icons, spinners).
pub(crate) fn button_html(variant: Variant, classes: &str, html: &str, disabled: bool) -> String {
    let mut out = format!(r#"<button type="button" class="ds-btn ds-btn-{}"#, variant.as_str());
    if !classes.is_empty() {
        write!(out, " {classes}").unwrap();
    }
    out.push('"');
    if disabled {
        out.push_str(" disabled");
    }
    write!(out, ">{html}</button>").unwrap();
    out
}

/// Lucide icon placeholder, drawn by the stylesheet.
pub(crate) fn icon(name: &str) -> String {
    format!(
        r#"<span class="ds-icon" data-icon="{}" aria-hidden="true"></span>"#,
        escape_html(name)
    )
}

pub(crate) fn icon_label(name: &str, label: &str) -> String {
    format!("{}<span>{}</span>", icon(name), escape_html(label))
}

pub(crate) fn badge(variant: &str, label: &str) -> String {
    format!(
        r#"<span class="ds-badge ds-badge-{variant}">{}</span>"#,
        escape_html(label)
    )
}

/// Wrap markup in a `<div>` with the given classes.
pub(crate) fn div(classes: &str, html: &str) -> String {
    format!(r#"<div class="{classes}">{html}</div>"#)
}

/// Horizontal, wrapping row of items.
pub(crate) fn row<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    div("ds-row", &concat(items))
}

/// Vertical stack of items.
pub(crate) fn stack<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    div("ds-stack", &concat(items))
}

/// Responsive grid of items.
pub(crate) fn grid<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    div("ds-grid", &concat(items))
}

pub(crate) fn concat<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items.into_iter().fold(String::new(), |mut out, item| {
        out.push_str(item.as_ref());
        out
    })
}

/// Text element (`p`, `span`, `strong`, ...) with classes.
pub(crate) fn text(tag: &str, classes: &str, content: &str) -> String {
    format!(r#"<{tag} class="{classes}">{}</{tag}>"#, escape_html(content))
}

pub(crate) fn muted(content: &str) -> String {
    text("p", "ds-muted", content)
}

/// Card with title, optional description, body markup and optional footer markup.
pub(crate) fn card(
    title: &str,
    description: Option<&str>,
    body: &str,
    footer: Option<&str>,
) -> String {
    let mut out = String::from(r#"<div class="ds-card"><div class="ds-card-header">"#);
    write!(out, r#"<h4 class="ds-card-title">{}</h4>"#, escape_html(title)).unwrap();
    if let Some(description) = description {
        write!(out, r#"<p class="ds-card-description">{}</p>"#, escape_html(description)).unwrap();
    }
    out.push_str("</div>");
    if !body.is_empty() {
        write!(out, r#"<div class="ds-card-content">{body}</div>"#).unwrap();
    }
    if let Some(footer) = footer {
        write!(out, r#"<div class="ds-card-footer">{footer}</div>"#).unwrap();
    }
    out.push_str("</div>");
    out
}

/// Table from text cells. Cells are escaped.
pub(crate) fn table<'a, R: AsRef<[&'a str]>>(headers: &[&str], rows: &[R]) -> String {
    let html_rows: Vec<Vec<String>> = rows
        .iter()
        .map(|r| r.as_ref().iter().map(|c| escape_html(c)).collect())
        .collect();
    table_html(headers, &html_rows)
}

/// Table whose cells are markup.
pub(crate) fn table_html(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::from(r#"<table class="ds-table"><thead><tr>"#);
    for header in headers {
        write!(out, "<th>{}</th>", escape_html(header)).unwrap();
    }
    out.push_str("</tr></thead><tbody>");
    for row in rows {
        out.push_str("<tr>");
        for cell in row {
            write!(out, "<td>{cell}</td>").unwrap();
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    out
}

/// Text input.
pub(crate) fn input(placeholder: &str, value: &str, disabled: bool, invalid: bool) -> String {
    let mut out = format!(
        r#"<input class="ds-input" type="text" placeholder="{}" value="{}""#,
        escape_html(placeholder),
        escape_html(value)
    );
    if disabled {
        out.push_str(" disabled");
    }
    if invalid {
        out.push_str(r#" aria-invalid="true""#);
    }
    out.push('>');
    out
}

/// Labelled form field with optional description or error message.
pub(crate) fn field(
    label: &str,
    control: &str,
    description: Option<&str>,
    error: Option<&str>,
) -> String {
    let mut out = String::from(r#"<div class="ds-field">"#);
    write!(out, r#"<label class="ds-label">{}</label>{control}"#, escape_html(label)).unwrap();
    if let Some(description) = description {
        write!(out, r#"<p class="ds-field-description">{}</p>"#, escape_html(description)).unwrap();
    }
    if let Some(error) = error {
        write!(out, r#"<p class="ds-field-error">{}</p>"#, escape_html(error)).unwrap();
    }
    out.push_str("</div>");
    out
}

/// Menu panel from items; `None` renders a separator.
pub(crate) fn menu(items: &[Option<(&str, &str)>]) -> String {
    let mut out = String::from(r#"<div class="ds-menu" role="menu">"#);
    for item in items {
        match item {
            Some((label, shortcut)) => {
                write!(
                    out,
                    r#"<div class="ds-menu-item" role="menuitem"><span>{}</span>"#,
                    escape_html(label)
                )
                .unwrap();
                if !shortcut.is_empty() {
                    write!(out, r#"<kbd class="ds-kbd">{}</kbd>"#, escape_html(shortcut)).unwrap();
                }
                out.push_str("</div>");
            }
            None => out.push_str(r#"<div class="ds-menu-separator" role="separator"></div>"#),
        }
    }
    out.push_str("</div>");
    out
}

/// Avatar circle with initials.
pub(crate) fn avatar(initials: &str, size: &str) -> String {
    format!(
        r#"<span class="ds-avatar ds-avatar-{size}">{}</span>"#,
        escape_html(initials)
    )
}

/// Progress bar, `value` in percent.
pub(crate) fn progress(value: u8) -> String {
    format!(
        r#"<div class="ds-progress" role="progressbar" aria-valuenow="{value}" aria-valuemin="0" aria-valuemax="100"><div class="ds-progress-bar" style="width:{value}%"></div></div>"#
    )
}

/// Checkbox-like control: `checked` is `Some(true)`, `Some(false)` or `None`
/// for indeterminate.
pub(crate) fn checkbox(label: &str, checked: Option<bool>, disabled: bool) -> String {
    let state = match checked {
        Some(true) => "checked",
        Some(false) => "unchecked",
        None => "indeterminate",
    };
    let disabled = if disabled { " disabled" } else { "" };
    format!(
        r#"<label class="ds-check"><input type="checkbox" data-state="{state}"{}{disabled}><span>{}</span></label>"#,
        if checked == Some(true) { " checked" } else { "" },
        escape_html(label)
    )
}

pub(crate) fn radio(name: &str, label: &str, checked: bool, disabled: bool) -> String {
    format!(
        r#"<label class="ds-check"><input type="radio" name="{}"{}{}><span>{}</span></label>"#,
        escape_html(name),
        if checked { " checked" } else { "" },
        if disabled { " disabled" } else { "" },
        escape_html(label)
    )
}

pub(crate) fn switch(label: &str, on: bool, disabled: bool) -> String {
    format!(
        r#"<label class="ds-switch"><input type="checkbox" role="switch"{}{}><span class="ds-switch-track"></span><span>{}</span></label>"#,
        if on { " checked" } else { "" },
        if disabled { " disabled" } else { "" },
        escape_html(label)
    )
}

/// Skeleton bar with inline size.
pub(crate) fn skeleton(classes: &str, width: &str, height: &str) -> String {
    format!(r#"<div class="ds-skeleton {classes}" style="width:{width};height:{height}"></div>"#)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_button_escapes_label() {
        assert_eq!(
            button(Variant::Outline, "<b>"),
            r#"<button type="button" class="ds-btn ds-btn-outline">&lt;b&gt;</button>"#
        );
    }

    #[test]
    fn test_button_html_disabled() {
        assert_eq!(
            button_html(Variant::Default, "ds-btn-sm", "Go", true),
            r#"<button type="button" class="ds-btn ds-btn-default ds-btn-sm" disabled>Go</button>"#
        );
    }

    #[test]
    fn test_card_without_footer() {
        let html = card("Title", None, "<p>x</p>", None);
        assert!(html.contains(r#"<h4 class="ds-card-title">Title</h4>"#));
        assert!(!html.contains("ds-card-footer"));
        assert!(!html.contains("ds-card-description"));
    }

    #[test]
    fn test_table_escapes_cells() {
        let html = table(&["Name"], &[["a & b"]]);
        assert!(html.contains("<td>a &amp; b</td>"));
    }

    #[test]
    fn test_menu_separator() {
        let html = menu(&[Some(("Copy", "⌘C")), None, Some(("Delete", ""))]);
        assert_eq!(html.matches("ds-menu-item").count(), 2);
        assert_eq!(html.matches("ds-menu-separator").count(), 1);
        assert_eq!(html.matches("ds-kbd").count(), 1);
    }

    #[test]
    fn test_checkbox_states() {
        assert!(checkbox("A", Some(true), false).contains(" checked"));
        assert!(checkbox("B", None, false).contains(r#"data-state="indeterminate""#));
        assert!(checkbox("C", Some(false), true).contains(" disabled"));
    }
}
