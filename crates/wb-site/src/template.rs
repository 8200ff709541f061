//! Server-side HTML pages.
//!
//! Pages share one layout: a sidebar with the ordered categories and a main
//! column. All text coming from documents is escaped; rendered markdown and
//! preview markup are inserted as-is.

use std::fmt::Write;
use std::str::FromStr;

use chrono::NaiveDate;

use wb_renderer::{TocEntry, escape_html};
use wb_storage::{Category, doc_href};

use crate::navigation::NavSection;
use crate::previews;
use crate::site::DocPage;
use crate::todos::{self, Priority, TodoItem};

/// Branding shown in headers and footers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteInfo {
    /// Design-system name (home page heading).
    pub name: String,
    /// Product line shown in the home badge and page footers.
    pub product: String,
    /// Version badge.
    pub version: String,
    /// Context directory label for the "How it works" box.
    pub context_dir: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "Helix".to_owned(),
            product: "TimelyCare Design System".to_owned(),
            version: "v1.0.0".to_owned(),
            context_dir: ".design-system-context/".to_owned(),
        }
    }
}

/// Everything the layout needs besides the page body.
#[derive(Clone, Copy, Debug)]
pub struct PageContext<'a> {
    pub site: &'a SiteInfo,
    pub navigation: &'a [NavSection],
    /// URL of the current page, highlighted in the sidebar.
    pub active_path: Option<&'a str>,
    /// Include the live-reload client hook.
    pub live_reload: bool,
    /// URL prefix of the embedded assets (e.g. `/assets`).
    pub asset_prefix: &'a str,
    /// Date shown in page footers.
    pub today: NaiveDate,
}

/// Tab selected on a document page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DocTab {
    #[default]
    Spec,
    Preview,
}

impl DocTab {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Spec => "spec",
            Self::Preview => "preview",
        }
    }

    /// Tab from the `tab` query parameter. Unknown values select the Spec tab.
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for DocTab {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spec" => Ok(Self::Spec),
            "preview" => Ok(Self::Preview),
            _ => Err(()),
        }
    }
}

struct HomeCard {
    title: &'static str,
    description: &'static str,
    category: Category,
    slug: &'static str,
    icon: &'static str,
    color: &'static str,
}

const MAIN_CARDS: [HomeCard; 4] = [
    HomeCard {
        title: "Rules",
        description: "Tech stack, project structure, and accessibility requirements.",
        category: Category::Rules,
        slug: "tech-stack",
        icon: "book-open",
        color: "blue",
    },
    HomeCard {
        title: "Design Tokens",
        description: "Colors, typography, spacing, and theming for Member, Campus, and Admin.",
        category: Category::Tokens,
        slug: "themes",
        icon: "palette",
        color: "violet",
    },
    HomeCard {
        title: "Components",
        description: "Props, variants, and implementation specs for all UI components.",
        category: Category::Components,
        slug: "button",
        icon: "component",
        color: "emerald",
    },
    HomeCard {
        title: "Patterns",
        description: "Layout patterns, UI states, and component selection guidance.",
        category: Category::Patterns,
        slug: "component-match",
        icon: "rss",
        color: "amber",
    },
];

const SECONDARY_CARDS: [HomeCard; 3] = [
    HomeCard {
        title: "Tasks",
        description: "Workflows for creating, reviewing, and documenting components.",
        category: Category::Tasks,
        slug: "WORKFLOW",
        icon: "list-checks",
        color: "",
    },
    HomeCard {
        title: "Decisions",
        description: "Rationale behind color system, typography, and architecture choices.",
        category: Category::Decisions,
        slug: "README",
        icon: "scale",
        color: "",
    },
    HomeCard {
        title: "Accessibility",
        description: "Component-specific a11y requirements for forms, dialogs, tables.",
        category: Category::A11y,
        slug: "README",
        icon: "accessibility",
        color: "",
    },
];

const HOW_IT_WORKS_PATHS: [&str; 4] = [
    "system/tokens/",
    "system/components/",
    "system/patterns/",
    "tasks/",
];

fn icon(name: &str) -> String {
    format!(r#"<span class="ds-icon" data-icon="{name}" aria-hidden="true"></span>"#)
}

/// Render the overview page.
#[must_use]
pub fn render_home(ctx: &PageContext<'_>) -> String {
    let site = ctx.site;
    let mut body = String::with_capacity(8192);

    body.push_str(r#"<div class="page page-home"><header class="home-header">"#);
    let _ = write!(
        body,
        r#"<div class="home-badge"><span class="pulse"></span>{}</div>"#,
        escape_html(&site.product)
    );
    let _ = write!(
        body,
        r#"<h1>{}<br><span class="muted">Experience Design System</span></h1>"#,
        escape_html(&site.name)
    );
    body.push_str(
        "<p class=\"lead\">The design system lives in markdown. This is the front-end to read it, \
         structured for humans and readable by machines. Every page is a file; every file is the \
         source of truth for developers and AI agents.</p></header>",
    );

    body.push_str(r#"<div class="card-grid card-grid-2">"#);
    for card in &MAIN_CARDS {
        let _ = write!(
            body,
            r#"<a class="home-card" href="{href}"><span class="home-card-icon tone-{color}">{icon}</span><div><h2>{title}{arrow}</h2><p>{description}</p></div></a>"#,
            href = doc_href(card.category, card.slug),
            color = card.color,
            icon = icon(card.icon),
            title = card.title,
            arrow = icon("arrow-right"),
            description = card.description,
        );
    }
    body.push_str("</div>");

    body.push_str(r#"<div class="card-grid card-grid-3">"#);
    for card in &SECONDARY_CARDS {
        let _ = write!(
            body,
            r#"<a class="home-card home-card-small" href="{href}"><div class="home-card-heading">{icon}<h3>{title}</h3></div><p>{description}</p></a>"#,
            href = doc_href(card.category, card.slug),
            icon = icon(card.icon),
            title = card.title,
            description = card.description,
        );
    }
    body.push_str("</div>");

    render_todo_widget(&mut body);

    body.push_str(r#"<div class="panel"><h3>How it works</h3>"#);
    let _ = write!(
        body,
        "<p>Documentation is loaded from <code>{}</code>. Edits to markdown files sync automatically.</p>",
        escape_html(&ctx.site.context_dir)
    );
    body.push_str(r#"<div class="chips">"#);
    for path in HOW_IT_WORKS_PATHS {
        let _ = write!(body, r#"<span class="chip">{path}</span>"#);
    }
    body.push_str("</div></div></div>");

    render_layout(ctx, &site.product, &body)
}

fn render_todo_widget(body: &mut String) {
    let stats = todos::stats();

    body.push_str(r#"<div class="panel todo-widget"><div class="todo-widget-header">"#);
    let _ = write!(
        body,
        r#"<div class="todo-widget-title"><span class="tone-amber">{}</span><h3>Needs Human Input</h3></div>"#,
        icon("alert-circle")
    );
    let _ = write!(
        body,
        r#"<div class="todo-widget-stats"><span class="pill pill-amber">{} high priority</span><span class="muted">{} of {}</span></div></div>"#,
        stats.high_priority, stats.needs_input, stats.total
    );

    body.push_str(r#"<ul class="todo-list">"#);
    for todo in todos::incomplete() {
        render_todo_item(body, todo);
    }
    body.push_str("</ul>");
    body.push_str(
        r#"<p class="todo-widget-footer">Click an item to view the file. Update status in <code>crates/wb-site/src/todos.rs</code></p></div>"#,
    );
}

fn render_todo_item(body: &mut String, todo: &TodoItem) {
    let marker = if todo.is_complete() { "circle-check" } else { "circle" };
    let _ = write!(
        body,
        r#"<li><a class="todo-item" href="{href}">{marker}<div><div class="todo-item-title"><span>{title}</span>"#,
        href = escape_html(&todo.doc_href()),
        marker = icon(marker),
        title = escape_html(todo.title),
    );
    if todo.priority == Priority::High {
        body.push_str(r#"<span class="pill pill-amber">High</span>"#);
    }
    let _ = write!(
        body,
        r#"<span class="pill">{}</span></div><p class="muted">{}</p></div></a></li>"#,
        todo.category,
        escape_html(todo.description)
    );
}

/// Render a documentation page.
///
/// When the slug has a preview, both tab panels are rendered and `tab`
/// decides which one is visible.
#[must_use]
pub fn render_doc(ctx: &PageContext<'_>, page: &DocPage, tab: DocTab) -> String {
    let tab = if page.has_preview { tab } else { DocTab::Spec };
    let href = page.href();
    let mut body = String::with_capacity(page.html.len() + 4096);

    body.push_str(r#"<div class="page page-doc"><div class="doc-column"><header class="doc-header">"#);
    let _ = write!(
        body,
        r#"<a class="back-link" href="/">{}Back to Overview</a>"#,
        icon("arrow-left")
    );
    let _ = write!(
        body,
        r#"<div class="doc-meta"><span class="category-badge">{category}</span><span class="doc-location">{clock}{location}</span></div>"#,
        category = page.category,
        clock = icon("clock"),
        location = page.category.location_label(),
    );
    let _ = write!(body, "<h1>{}</h1>", escape_html(&page.title));
    if let Some(description) = &page.front_matter.description {
        let _ = write!(body, r#"<p class="lead">{}</p>"#, escape_html(description));
    }
    body.push_str("</header>");

    if page.has_preview {
        render_tabs(&mut body, &href, tab);
    }

    let _ = write!(
        body,
        r#"<article class="prose" data-tab-panel="spec"{}>{}</article>"#,
        hidden_unless(tab == DocTab::Spec),
        page.html
    );

    if page.has_preview {
        let _ = write!(
            body,
            r#"<div class="preview-panel" data-tab-panel="preview"{}>{}</div>"#,
            hidden_unless(tab == DocTab::Preview),
            previews::render_preview(&page.slug)
        );
    }

    render_footer(&mut body, ctx);
    body.push_str("</div>");

    if !page.toc.is_empty() {
        render_toc(&mut body, &page.toc);
    }
    body.push_str("</div>");

    let title = format!("{} | {}", page.title, ctx.site.product);
    render_layout(ctx, &title, &body)
}

fn hidden_unless(visible: bool) -> &'static str {
    if visible { "" } else { " hidden" }
}

fn render_tabs(body: &mut String, href: &str, active: DocTab) {
    body.push_str(r#"<nav class="doc-tabs" role="tablist">"#);
    for (tab, label) in [(DocTab::Spec, "Spec"), (DocTab::Preview, "Preview")] {
        let _ = write!(
            body,
            r#"<a class="doc-tab" role="tab" href="{href}?tab={id}" data-tab="{id}" aria-selected="{selected}">{label}</a>"#,
            id = tab.as_str(),
            selected = tab == active,
        );
    }
    body.push_str("</nav>");
}

fn render_toc(body: &mut String, toc: &[TocEntry]) {
    body.push_str(r#"<aside class="toc"><p class="toc-title">On this page</p><ul>"#);
    for entry in toc {
        let _ = write!(
            body,
            r##"<li class="toc-level-{}"><a href="#{}">{}</a></li>"##,
            entry.level,
            escape_html(&entry.id),
            escape_html(&entry.title)
        );
    }
    body.push_str("</ul></aside>");
}

fn render_footer(body: &mut String, ctx: &PageContext<'_>) {
    let _ = write!(
        body,
        r#"<footer class="doc-footer"><p>{product}</p><div class="doc-footer-badges"><span class="chip">{version}</span><span class="chip">{date}</span></div></footer>"#,
        product = escape_html(&ctx.site.product),
        version = escape_html(&ctx.site.version),
        date = ctx.today.format("%B %Y"),
    );
}

/// Render the 404 page.
#[must_use]
pub fn render_not_found(ctx: &PageContext<'_>, path: &str) -> String {
    let body = format!(
        r#"<div class="page page-not-found"><h1>Page not found</h1><p class="muted">No document at <code>{}</code>.</p><a class="back-link" href="/">{}Back to Overview</a></div>"#,
        escape_html(path),
        icon("arrow-left")
    );
    render_layout(ctx, "Not found", &body)
}

/// Standalone preview page (used by the static export).
#[must_use]
pub fn render_preview_page(ctx: &PageContext<'_>, slug: &str) -> String {
    let body = format!(
        r#"<div class="page page-preview"><h1>{}</h1>{}</div>"#,
        escape_html(slug),
        previews::render_preview(slug)
    );
    render_layout(ctx, slug, &body)
}

fn render_layout(ctx: &PageContext<'_>, title: &str, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + 8192);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(title));
    let _ = writeln!(html, "<link rel=\"stylesheet\" href=\"{}/app.css\">", ctx.asset_prefix);
    let _ = writeln!(html, "<script defer src=\"{}/app.js\"></script>", ctx.asset_prefix);
    html.push_str("</head>\n");
    let _ = writeln!(
        html,
        "<body class=\"app\" data-live-reload=\"{}\">",
        ctx.live_reload
    );

    render_sidebar(&mut html, ctx);

    html.push_str("<main class=\"main\">\n<div class=\"topbar\">");
    let _ = write!(
        html,
        r#"<button type="button" class="theme-toggle" data-theme-toggle aria-label="Toggle dark mode">{}{}</button>"#,
        icon("moon"),
        icon("sun")
    );
    html.push_str("</div>\n");
    html.push_str(body);
    html.push_str("\n</main>\n</body>\n</html>\n");
    html
}

fn render_sidebar(html: &mut String, ctx: &PageContext<'_>) {
    html.push_str("<aside class=\"sidebar\">\n");
    html.push_str(
        r#"<a class="logo" href="/"><span class="logo-mark"></span><span>Workbench</span></a>"#,
    );
    html.push_str("\n<nav class=\"sidebar-nav\">\n");
    let _ = write!(
        html,
        r#"<a class="nav-overview{}" href="/">{}Overview</a>"#,
        if ctx.active_path == Some("/") { " is-active" } else { "" },
        icon("home")
    );

    for section in ctx.navigation {
        let open = ctx
            .active_path
            .is_some_and(|p| section.items.iter().any(|i| i.path == p));
        let _ = write!(
            html,
            r#"<details class="nav-section"{open}><summary>{icon}<span>{label}</span><span class="nav-count">{count}</span></summary><ul>"#,
            open = if open { " open" } else { "" },
            icon = icon(section.icon),
            label = escape_html(&section.label),
            count = section.items.len(),
        );
        for item in &section.items {
            let active = ctx.active_path == Some(item.path.as_str());
            let _ = write!(
                html,
                r#"<li><a href="{}"{}>{}</a></li>"#,
                escape_html(&item.path),
                if active { r#" class="is-active" aria-current="page""# } else { "" },
                escape_html(&item.title)
            );
        }
        html.push_str("</ul></details>\n");
    }
    html.push_str("</nav>\n");

    if ctx.live_reload {
        html.push_str(
            r#"<div class="live-box"><p class="live-title"><span class="live-dot"></span>System Live</p><p>Connected to <code>/system</code> folder. Edits sync instantly.</p></div>"#,
        );
    }
    html.push_str("\n</aside>\n");
}
