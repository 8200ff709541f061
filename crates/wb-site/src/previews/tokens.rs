//! Design-token previews.

use super::markup::{
    Variant, badge, button, card, concat, div, grid, muted, row, stack, table, table_html, text,
};
use super::shell::{PreviewSection as S, THEMES};

type Sections = Vec<S>;

/// `(css variable, label, usage)`
const SEMANTIC_COLORS: [(&str, &str, &str); 12] = [
    ("--ds-primary", "Primary", "Main brand action color"),
    ("--ds-primary-foreground", "Primary Foreground", "Text on primary"),
    ("--ds-secondary", "Secondary", "Supporting backgrounds"),
    ("--ds-secondary-foreground", "Secondary Foreground", "Text on secondary"),
    ("--ds-accent", "Accent", "Highlight backgrounds"),
    ("--ds-accent-foreground", "Accent Foreground", "Text on accent"),
    ("--ds-destructive", "Destructive", "Error, danger actions"),
    ("--ds-destructive-foreground", "Destructive Foreground", "Text on destructive"),
    ("--ds-muted", "Muted", "Subtle backgrounds"),
    ("--ds-muted-foreground", "Muted Foreground", "Subdued text"),
    ("--ds-success", "Success", "Positive feedback"),
    ("--ds-warning", "Warning", "Caution feedback"),
];

const SURFACE_COLORS: [(&str, &str, &str); 7] = [
    ("--ds-background", "Background", "Page background"),
    ("--ds-foreground", "Foreground", "Default text"),
    ("--ds-card", "Card", "Card surfaces"),
    ("--ds-card-foreground", "Card Foreground", "Card text"),
    ("--ds-border", "Border", "Default borders"),
    ("--ds-input", "Input", "Input borders"),
    ("--ds-ring", "Ring", "Focus ring"),
];

fn swatch(var: &str, label: &str, usage: &str) -> String {
    div(
        "ds-swatch",
        &(format!(r#"<span class="ds-swatch-chip" style="background-color:var({var})"></span>"#)
            + &div("ds-swatch-text", &(text("strong", "", label) + &text("code", "", var)))
            + &text("span", "ds-muted", usage)),
    )
}

fn pair(background: &str, foreground: &str, label: &str) -> String {
    let style = format!("background-color:var({background});color:var({foreground})");
    format!(r#"<div class="ds-pair" style="{style}">{label}</div>"#)
}

pub(super) fn colors() -> Sections {
    vec![
        S::new(
            "Paired Previews",
            "Background + foreground combinations as they appear in UI.",
            grid([
                pair("--ds-primary", "--ds-primary-foreground", "Primary"),
                pair("--ds-secondary", "--ds-secondary-foreground", "Secondary"),
                pair("--ds-accent", "--ds-accent-foreground", "Accent"),
                pair("--ds-destructive", "--ds-destructive-foreground", "Destructive"),
                pair("--ds-muted", "--ds-muted-foreground", "Muted"),
            ]),
        ),
        S::new(
            "Semantic Colors",
            "All semantic color tokens for the active theme.",
            stack(SEMANTIC_COLORS.iter().map(|(var, label, usage)| swatch(var, label, usage))),
        ),
        S::new(
            "Surface & Layout",
            "Background, card, border, and ring tokens (shared across themes).",
            stack(SURFACE_COLORS.iter().map(|(var, label, usage)| swatch(var, label, usage))),
        ),
    ]
}

/// `(token, size, line height, weight, role)`
const TYPE_SCALE: [(&str, &str, &str, u16, &str); 9] = [
    ("5xl", "48px", "48px", 800, "H1 Desktop"),
    ("4xl", "36px", "40px", 800, "H1 Mobile"),
    ("3xl", "30px", "36px", 600, "H2"),
    ("2xl", "24px", "32px", 600, "H3"),
    ("xl", "20px", "28px", 600, "H4"),
    ("lg", "18px", "28px", 600, "Large"),
    ("base", "16px", "24px", 400, "Body"),
    ("sm", "14px", "20px", 400, "Small"),
    ("xs", "12px", "16px", 400, "Extra Small"),
];

const PANGRAM: &str = "The quick brown fox jumps over the lazy dog";

const FONT_WEIGHTS: [(&str, u16, &str); 5] = [
    ("normal", 400, "Regular"),
    ("medium", 500, "Medium"),
    ("semibold", 600, "Semibold"),
    ("bold", 700, "Bold"),
    ("extrabold", 800, "Extrabold"),
];

pub(super) fn typography() -> Sections {
    vec![
        S::new(
            "Type Scale",
            "Font sizes from xs (12px) to 5xl (48px) with corresponding line heights.",
            stack(TYPE_SCALE.iter().map(|(token, size, line_height, weight, role)| {
                let style =
                    format!("font-size:{size};line-height:{line_height};font-weight:{weight}");
                div(
                    "ds-type-row",
                    &(text("code", "", &format!("text-{token} · {size}/{line_height} · {role}"))
                        + &format!(r#"<p style="{style}">{PANGRAM}</p>"#)),
                )
            })),
        ),
        S::new(
            "Font Weights",
            "Available font weight tokens rendered at 20px.",
            stack(FONT_WEIGHTS.iter().map(|(token, weight, label)| {
                let code = format!("<code>font-{token} ({weight})</code>");
                format!(r#"<p style="font-size:20px;font-weight:{weight}">{label} {code}</p>"#)
            })),
        ),
        S::new(
            "Font Families",
            "Primary sans-serif and monospace families.",
            stack([
                r#"<p class="ds-font-sans">Adelle Sans, system-ui, sans-serif</p>"#,
                r#"<p class="ds-font-mono">ui-monospace, SFMono-Regular, Menlo, monospace</p>"#,
            ]),
        ),
    ]
}

const SPACING_SCALE: [(&str, u16); 16] = [
    ("0", 0),
    ("px", 1),
    ("0.5", 2),
    ("1", 4),
    ("1.5", 6),
    ("2", 8),
    ("3", 12),
    ("4", 16),
    ("5", 20),
    ("6", 24),
    ("8", 32),
    ("10", 40),
    ("12", 48),
    ("16", 64),
    ("20", 80),
    ("24", 96),
];

/// Labelled horizontal bar with a caption.
fn scale_row(token: &str, bar: &str, caption: &str) -> String {
    div(
        "ds-scale-row",
        &(text("code", "", token) + bar + &text("span", "ds-muted", caption)),
    )
}

pub(super) fn spacing() -> Sections {
    let box_content = concat!(
        r#"<div class="ds-box-model-content" style="display:grid;gap:16px">"#,
        "<span>p-6 (24px)</span><span>gap-4 (16px)</span></div>"
    );
    vec![
        S::new(
            "Spacing Scale",
            "Visual representation of the spacing token scale.",
            stack(SPACING_SCALE.iter().map(|(token, px)| {
                let bar = format!(r#"<span class="ds-scale-bar" style="width:{px}px"></span>"#);
                scale_row(token, &bar, &format!("{px}px"))
            })),
        ),
        S::new(
            "Common Usage",
            "Recommended spacing for common UI patterns.",
            table(
                &["Pattern", "Token", "Value"],
                &[
                    &["Icon to text gap", "2", "8px"],
                    &["Form field gap", "4", "16px"],
                    &["Card padding", "6", "24px"],
                    &["Section gap", "12", "48px"],
                ],
            ),
        ),
        S::new(
            "Box Model Demo",
            "Spacing applied to a card-like element.",
            format!(r#"<div class="ds-box-model" style="padding:24px">{box_content}</div>"#),
        ),
    ]
}

/// `(token, label, css, usage)`
const SHADOWS: [(&str, &str, &str, &str); 8] = [
    ("none", "None", "none", "No elevation"),
    ("sm", "Small", "0 1px 2px 0 rgb(0 0 0 / 0.05)", "Subtle lift, cards at rest"),
    (
        "DEFAULT",
        "Default",
        "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)",
        "Standard shadow",
    ),
    (
        "md",
        "Medium",
        "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
        "Cards on hover, tooltips",
    ),
    (
        "lg",
        "Large",
        "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
        "Dropdowns, popovers",
    ),
    (
        "xl",
        "Extra Large",
        "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)",
        "Modals, dialogs",
    ),
    ("2xl", "2X Large", "0 25px 50px -12px rgb(0 0 0 / 0.25)", "Maximum elevation"),
    ("inner", "Inner", "inset 0 2px 4px 0 rgb(0 0 0 / 0.05)", "Pressed/inset states"),
];

fn shadow_tile(label: &str, css: &str, caption: &str) -> String {
    let body = text("strong", "", label) + &text("span", "ds-muted", caption);
    format!(r#"<div class="ds-tile" style="box-shadow:{css}">{body}</div>"#)
}

pub(super) fn shadows() -> Sections {
    vec![
        S::new(
            "Shadow Scale",
            "All shadow elevation levels rendered on cards.",
            grid(SHADOWS.iter().map(|(token, label, css, _)| {
                shadow_tile(label, css, &format!("shadow-{token}"))
            })),
        ),
        S::new(
            "Elevation Comparison",
            "Side-by-side elevation levels on identical cards.",
            row(SHADOWS[1..6].iter().map(|(_, label, css, _)| shadow_tile(label, css, ""))),
        ),
        S::new(
            "Component Mapping",
            "Which shadow token to use for each component type.",
            table(
                &["Token", "Usage"],
                &SHADOWS.map(|(token, _, _, usage)| [token, usage]),
            ),
        ),
    ]
}

const RADII: [(&str, &str); 9] = [
    ("none", "0px"),
    ("sm", "6px"),
    ("DEFAULT", "8px"),
    ("md", "8px"),
    ("lg", "10px"),
    ("xl", "14px"),
    ("2xl", "16px"),
    ("3xl", "24px"),
    ("full", "9999px"),
];

pub(super) fn radii() -> Sections {
    vec![
        S::new(
            "Radius Scale",
            "All border radius tokens applied to shapes.",
            grid(RADII.iter().map(|(token, value)| {
                let style = format!("border-radius:{value}");
                let shape = format!(r#"<span class="ds-radius-shape" style="{style}"></span>"#);
                let body = shape
                    + &text("code", "", &format!("rounded-{token}"))
                    + &text("span", "ds-muted", value);
                div("ds-radius-demo", &body)
            })),
        ),
        S::new(
            "Applied to Cards",
            "Radius tokens on card-like surfaces.",
            row(["6px", "10px", "16px"].map(|value| {
                format!(r#"<div class="ds-tile" style="border-radius:{value}">{value}</div>"#)
            })),
        ),
        S::new(
            "Component Mapping",
            "Recommended radius per component type.",
            table(
                &["Component", "Token"],
                &[
                    &["Button, Input", "md (8px)"],
                    &["Card, Dialog", "xl (14px)"],
                    &["Badge", "full"],
                    &["Avatar", "full"],
                ],
            ),
        ),
    ]
}

const DURATIONS: [(u16, &str); 8] = [
    (75, "Micro-interactions (opacity)"),
    (100, "Quick feedback (hover)"),
    (150, "Standard transitions"),
    (200, "Slightly slower"),
    (300, "Accordion, collapse"),
    (500, "Page elements"),
    (700, "Dramatic reveals"),
    (1000, "Extended animations"),
];

const EASINGS: [(&str, &str, &str); 4] = [
    ("linear", "linear", "Constant speed, progress bars"),
    ("ease-in", "cubic-bezier(0.4, 0, 1, 1)", "Accelerating, elements leaving"),
    ("ease-out", "cubic-bezier(0, 0, 0.2, 1)", "Decelerating, elements entering"),
    ("ease-in-out", "cubic-bezier(0.4, 0, 0.2, 1)", "Smooth, elements moving"),
];

fn motion_row(label: &str, duration_ms: u16, easing: &str, usage: &str) -> String {
    let play = concat!(
        r#"<button type="button" class="ds-motion-play" data-motion-play aria-label="Play">"#,
        "▶</button>"
    );
    let style = format!("transition-duration:{duration_ms}ms;transition-timing-function:{easing}");
    let dot = format!(r#"<span class="ds-motion-dot" style="{style}"></span>"#);
    div(
        "ds-motion-row",
        &(play.to_owned()
            + &div("ds-motion-track", &dot)
            + &text("code", "", label)
            + &text("span", "ds-muted", usage)),
    )
}

pub(super) fn motion() -> Sections {
    vec![
        S::new(
            "Duration Scale",
            "Click play to see each duration. Shorter = faster.",
            stack(DURATIONS.iter().map(|(ms, usage)| {
                motion_row(&format!("duration-{ms}"), *ms, "cubic-bezier(0.4, 0, 0.2, 1)", usage)
            })),
        ),
        S::new(
            "Easing Functions",
            "Different easing curves at 600ms duration.",
            stack(EASINGS.iter().map(|(token, value, usage)| {
                motion_row(&format!("ease-{token}"), 600, value, usage)
            })),
        ),
        S::new(
            "Recommended Defaults",
            "Which duration + easing to use for common interactions.",
            table(
                &["Interaction", "Duration", "Easing"],
                &[
                    &["Hover, focus", "150ms", "ease-in-out"],
                    &["Dropdown open", "200ms", "ease-out"],
                    &["Accordion, collapse", "300ms", "ease-in-out"],
                    &["Dialog enter", "200ms", "ease-out"],
                    &["Dialog exit", "150ms", "ease-in"],
                ],
            ),
        ),
    ]
}

const BREAKPOINTS: [(&str, u16, &str); 5] = [
    ("sm", 640, "Large phones (landscape)"),
    ("md", 768, "Tablets"),
    ("lg", 1024, "Small laptops"),
    ("xl", 1280, "Desktops"),
    ("2xl", 1536, "Large desktops"),
];

pub(super) fn breakpoints() -> Sections {
    let widest = BREAKPOINTS[BREAKPOINTS.len() - 1].1;
    vec![
        S::new(
            "Breakpoint Scale",
            "Mobile-first breakpoints: styles apply at this width and above.",
            table_html(
                &["Token", "Min width", "Target"],
                &BREAKPOINTS
                    .iter()
                    .map(|(token, width, target)| {
                        vec![
                            format!("<code>{token}</code>"),
                            format!("{width}px"),
                            (*target).to_owned(),
                        ]
                    })
                    .collect::<Vec<_>>(),
            ),
        ),
        S::new(
            "Visual Comparison",
            "Relative widths of all breakpoints.",
            stack(BREAKPOINTS.iter().map(|(token, width, _)| {
                let percent = u32::from(*width) * 100 / u32::from(widest);
                let bar = format!(
                    r#"<span class="ds-scale-bar ds-bp-{token}" style="width:{percent}%"></span>"#
                );
                scale_row(token, &bar, &format!("{width}px"))
            })),
        ),
        S::new(
            "Common Patterns",
            "Typical responsive patterns using these breakpoints.",
            table(
                &["Pattern", "Classes"],
                &[
                    &["Stack to row", "flex-col md:flex-row"],
                    &["Grid columns", "grid-cols-1 sm:grid-cols-2 lg:grid-cols-3"],
                    &["Hide on mobile", "hidden md:block"],
                    &["Sidebar layout", "lg:grid-cols-[280px_1fr]"],
                ],
            ),
        ),
    ]
}

pub(super) fn themes() -> Sections {
    let sample = || {
        concat([
            button(Variant::Default, "Primary"),
            button(Variant::Outline, "Outline"),
            badge("default", "Badge"),
        ])
    };
    let shared = ["--ds-background", "--ds-border", "--ds-ring", "--ds-destructive"];
    vec![
        S::new(
            "Side-by-Side Themes",
            "All 3 themes rendered with identical UI elements.",
            grid(THEMES.iter().map(|theme| {
                format!(
                    r#"<div class="ds-theme-{}">{}</div>"#,
                    theme.id,
                    card(theme.label, Some(theme.color), &row([sample()]), None)
                )
            })),
        ),
        S::new(
            "Shared Tokens",
            "These tokens are identical across all themes.",
            stack([
                muted("Spacing, radii, shadows, motion, breakpoints and typography scale."),
                row(shared.map(|v| text("code", "", v))),
            ]),
        ),
        S::new(
            "Theme Selection Guide",
            "When to use each theme.",
            table(
                &["Theme", "Audience"],
                &[
                    &["Higher Ed", "Member-facing experiences for college students"],
                    &["K-12", "Campus and school-district experiences"],
                    &["Admin", "Internal and administrative tooling"],
                ],
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_lists_all_tokens() {
        let sections = colors();
        assert_eq!(sections[1].body.matches("ds-swatch-chip").count(), 12);
        assert_eq!(sections[2].body.matches("ds-swatch-chip").count(), 7);
    }

    #[test]
    fn test_motion_durations() {
        let html = &motion()[0].body;
        assert!(html.contains("transition-duration:75ms"));
        assert!(html.contains("transition-duration:1000ms"));
    }

    #[test]
    fn test_breakpoints_scale_to_widest() {
        let html = &breakpoints()[1].body;
        assert!(html.contains("width:100%"));
        assert!(html.contains("width:41%"));
    }

    #[test]
    fn test_themes_render_each_theme() {
        let html = &themes()[0].body;
        for theme in THEMES {
            assert!(html.contains(&format!("ds-theme-{}", theme.id)));
        }
    }
}
