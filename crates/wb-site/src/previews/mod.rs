//! Static preview registry.
//!
//! Previews are static HTML demonstrations of design-system components and
//! tokens, keyed by document slug. Lookup ignores the category, so a
//! `button.md` anywhere in the context gets the button preview.
//!
//! Each entry renders lazily on first use and keeps its HTML for the life of
//! the process.
//!
//! ```
//! use wb_site::previews;
//!
//! assert!(previews::has_preview("button"));
//! assert!(previews::render_preview("button").contains("Button Group"));
//! assert!(previews::render_preview("unknown").contains("Preview coming soon"));
//! ```

mod components;
mod markup;
mod shell;
mod tokens;

use std::sync::OnceLock;

use serde::Serialize;

pub use shell::{PLACEHOLDER_HTML, PreviewSection, PreviewTheme, THEMES};

/// What a preview demonstrates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewKind {
    Component,
    Token,
}

/// One registered preview.
pub struct PreviewEntry {
    pub slug: &'static str,
    pub kind: PreviewKind,
    build: fn() -> Vec<PreviewSection>,
    html: OnceLock<String>,
}

impl PreviewEntry {
    const fn new(
        slug: &'static str,
        kind: PreviewKind,
        build: fn() -> Vec<PreviewSection>,
    ) -> Self {
        Self {
            slug,
            kind,
            build,
            html: OnceLock::new(),
        }
    }

    /// Sections of the preview, built fresh.
    #[must_use]
    pub fn sections(&self) -> Vec<PreviewSection> {
        (self.build)()
    }

    /// Rendered preview inside the theme shell.
    pub fn html(&self) -> &str {
        self.html.get_or_init(|| {
            tracing::debug!(slug = self.slug, "Rendering preview");
            shell::render_shell(self.slug, &self.sections())
        })
    }
}

impl std::fmt::Debug for PreviewEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewEntry")
            .field("slug", &self.slug)
            .field("kind", &self.kind)
            .field("rendered", &self.html.get().is_some())
            .finish_non_exhaustive()
    }
}

const fn component(slug: &'static str, build: fn() -> Vec<PreviewSection>) -> PreviewEntry {
    PreviewEntry::new(slug, PreviewKind::Component, build)
}

const fn token(slug: &'static str, build: fn() -> Vec<PreviewSection>) -> PreviewEntry {
    PreviewEntry::new(slug, PreviewKind::Token, build)
}

static REGISTRY: [PreviewEntry; 60] = [
    component("accordion", components::accordion),
    component("alert", components::alert),
    component("alert-dialog", components::alert_dialog),
    component("aspect-ratio", components::aspect_ratio),
    component("avatar", components::avatar_preview),
    component("badge", components::badge_preview),
    component("breadcrumb", components::breadcrumb),
    component("button", components::button_preview),
    component("calendar", components::calendar),
    component("card", components::card_preview),
    component("carousel", components::carousel),
    component("chart", components::chart),
    component("checkbox", components::checkbox_preview),
    component("collapsible", components::collapsible),
    component("combobox", components::combobox),
    component("command", components::command),
    component("context-menu", components::context_menu),
    component("data-table", components::data_table),
    component("date-picker", components::date_picker),
    component("dialog", components::dialog),
    component("drawer", components::drawer),
    component("dropdown-menu", components::dropdown_menu),
    component("form", components::form),
    component("header", components::header),
    component("hover-card", components::hover_card),
    component("input", components::input_preview),
    component("input-otp", components::input_otp),
    component("label", components::label),
    component("menubar", components::menubar),
    component("navigation-menu", components::navigation_menu),
    component("pagination", components::pagination),
    component("popover", components::popover),
    component("progress", components::progress_preview),
    component("radio-group", components::radio_group),
    component("resizable", components::resizable),
    component("scroll-area", components::scroll_area),
    component("select", components::select),
    component("separator", components::separator),
    component("sheet", components::sheet),
    component("sidebar", components::sidebar),
    component("skeleton", components::skeleton_preview),
    component("slider", components::slider),
    component("sonner", components::sonner),
    component("switch", components::switch_preview),
    component("table", components::table_preview),
    component("tabs", components::tabs),
    component("textarea", components::textarea_preview),
    component("toggle", components::toggle),
    component("toggle-group", components::toggle_group),
    component("tooltip", components::tooltip),
    component("icons-full-list", components::icons_full_list),
    component("inventory", components::inventory),
    token("colors", tokens::colors),
    token("typography", tokens::typography),
    token("spacing", tokens::spacing),
    token("shadows", tokens::shadows),
    token("radii", tokens::radii),
    token("motion", tokens::motion),
    token("breakpoints", tokens::breakpoints),
    token("themes", tokens::themes),
];

/// Registered preview for `slug`.
#[must_use]
pub fn get_preview(slug: &str) -> Option<&'static PreviewEntry> {
    REGISTRY.iter().find(|entry| entry.slug == slug)
}

#[must_use]
pub fn has_preview(slug: &str) -> bool {
    get_preview(slug).is_some()
}

/// All registered slugs in registry order.
pub fn preview_slugs() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|entry| entry.slug)
}

/// All registered entries in registry order.
pub fn entries() -> impl Iterator<Item = &'static PreviewEntry> {
    REGISTRY.iter()
}

/// Preview HTML for `slug`, or the "coming soon" placeholder.
#[must_use]
pub fn render_preview(slug: &str) -> &'static str {
    get_preview(slug).map_or(PLACEHOLDER_HTML, PreviewEntry::html)
}
