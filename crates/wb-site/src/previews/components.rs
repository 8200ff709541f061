//! Component previews.

use std::fmt::Write;

use super::markup::{
    Variant, avatar, badge, button, button_html, card, checkbox, concat, div, field, grid, icon,
    icon_label, input, menu, muted, progress, radio, row, skeleton, stack, switch, table,
    table_html, text,
};
use super::shell::PreviewSection as S;

type Sections = Vec<S>;

pub(super) fn accordion() -> Sections {
    let items = [
        ("Is it accessible?", "Yes. It follows the WAI-ARIA disclosure pattern.", true),
        ("Is it styled?", "Yes. It uses the active theme tokens.", false),
        ("Is it animated?", "Yes. Expanding uses the 300ms collapse duration.", false),
    ];
    let body = concat(items.iter().map(|(q, a, open)| {
        format!(
            r#"<details class="ds-accordion-item"{}><summary>{}{}</summary><p>{}</p></details>"#,
            if *open { " open" } else { "" },
            wb_renderer::escape_html(q),
            icon("chevron-down"),
            wb_renderer::escape_html(a)
        )
    }));
    vec![S::new(
        "FAQ Accordion",
        "Click any item to expand or collapse it.",
        div("ds-accordion", &body),
    )]
}

fn alert_box(
    kind: &str,
    icon_name: &str,
    title: &str,
    description: &str,
    action: Option<&str>,
) -> String {
    let mut inner = icon(icon_name);
    inner.push_str(&div(
        "ds-alert-text",
        &(text("h5", "ds-alert-title", title) + &text("p", "ds-alert-description", description)),
    ));
    if let Some(action) = action {
        inner.push_str(&button_html(Variant::Outline, "ds-btn-sm", action, false));
    }
    format!(r#"<div class="ds-alert ds-alert-{kind}" role="alert">{inner}</div>"#)
}

pub(super) fn alert() -> Sections {
    vec![
        S::new(
            "Default Alert",
            "Alert with icon, title, and description.",
            alert_box(
                "default",
                "info",
                "Heads up!",
                "You can add components to your app using the CLI.",
                None,
            ),
        ),
        S::new(
            "Destructive Alert",
            "Alert for errors or destructive actions.",
            alert_box(
                "destructive",
                "alert-circle",
                "Error",
                "Your session has expired. Please log in again.",
                None,
            ),
        ),
        S::new(
            "Alert with Action",
            "Alert with an action button.",
            alert_box(
                "default",
                "info",
                "Update available",
                "A new version is ready to install.",
                Some("Update"),
            ),
        ),
    ]
}

pub(super) fn alert_dialog() -> Sections {
    let footer = row([button(Variant::Outline, "Cancel"), button(Variant::Destructive, "Delete")]);
    vec![S::new(
        "Alert Dialog",
        "Static dialog card with title, description, and action buttons.",
        div(
            "ds-dialog",
            &card(
                "Are you absolutely sure?",
                Some("This action cannot be undone. This will permanently delete your account."),
                "",
                Some(&footer),
            ),
        ),
    )]
}

pub(super) fn aspect_ratio() -> Sections {
    let boxes = [("16 / 9", "16:9"), ("4 / 3", "4:3"), ("1 / 1", "1:1")];
    vec![S::new(
        "Aspect Ratios",
        "Boxes with different aspect ratios and placeholder backgrounds.",
        grid(boxes.iter().map(|(ratio, label)| {
            format!(r#"<div class="ds-placeholder" style="aspect-ratio:{ratio}">{label}</div>"#)
        })),
    )]
}

pub(super) fn avatar_preview() -> Sections {
    vec![
        S::new(
            "Avatar Sizes",
            "Avatar circles in sm (32px), default (40px), and lg (48px).",
            row([avatar("JD", "sm"), avatar("JD", "default"), avatar("JD", "lg")]),
        ),
        S::new(
            "Fallback Avatar",
            "Avatar with User icon when no image or initials.",
            format!(r#"<span class="ds-avatar ds-avatar-default">{}</span>"#, icon("user")),
        ),
    ]
}

pub(super) fn badge_preview() -> Sections {
    let variants = [
        ("default", "Default"),
        ("secondary", "Secondary"),
        ("outline", "Outline"),
        ("destructive", "Destructive"),
        ("success", "Success"),
        ("warning", "Warning"),
    ];
    vec![
        S::new(
            "Variants",
            "All 6 badge variants with semantic color usage.",
            row(variants.iter().map(|(variant, label)| badge(variant, label))),
        ),
        S::new(
            "With Icons",
            "Badges with leading icons at 12x12px with 4px gap.",
            row([
                format!(
                    r#"<span class="ds-badge ds-badge-success">{}</span>"#,
                    icon_label("check", "Verified")
                ),
                format!(
                    r#"<span class="ds-badge ds-badge-warning">{}</span>"#,
                    icon_label("triangle-alert", "Pending")
                ),
                format!(
                    r#"<span class="ds-badge ds-badge-destructive">{}</span>"#,
                    icon_label("x", "Failed")
                ),
            ]),
        ),
        S::new(
            "Use Cases",
            "Common real-world badge applications.",
            row([
                badge("default", "New"),
                badge("secondary", "Draft"),
                badge("outline", "v1.0.0"),
                badge("success", "Active"),
            ]),
        ),
    ]
}

pub(super) fn breadcrumb() -> Sections {
    let trail = ["Home", "Components", "Breadcrumb"];
    let mut html = String::from(r#"<nav aria-label="breadcrumb"><ol class="ds-breadcrumb">"#);
    for (i, item) in trail.iter().enumerate() {
        if i + 1 == trail.len() {
            write!(html, r#"<li aria-current="page">{item}</li>"#).unwrap();
        } else {
            write!(
                html,
                r##"<li><a href="#">{item}</a></li><li aria-hidden="true">{}</li>"##,
                icon("chevron-right")
            )
            .unwrap();
        }
    }
    html.push_str("</ol></nav>");
    vec![S::new(
        "Breadcrumb Trail",
        "Navigation with ChevronRight separators. Last item is current page.",
        html,
    )]
}

pub(super) fn button_preview() -> Sections {
    vec![
        S::new(
            "Variants",
            "All 6 button variants using the active theme's primary color.",
            row(Variant::ALL.iter().map(|v| button(*v, v.label()))),
        ),
        S::new(
            "Sizes",
            "4 size options: default (36px), small (32px), large (40px), and icon (36x36px).",
            row([
                button_html(Variant::Default, "ds-btn-sm", "Small", false),
                button(Variant::Default, "Default"),
                button_html(Variant::Default, "ds-btn-lg", "Large", false),
                button_html(Variant::Outline, "ds-btn-icon", &icon("plus"), false),
            ]),
        ),
        S::new(
            "With Icons",
            "Icons at 16x16px with 8px gap between icon and text.",
            row([
                button_html(Variant::Default, "", &icon_label("download", "Download"), false),
                button_html(Variant::Outline, "", &icon_label("settings", "Settings"), false),
                button_html(Variant::Destructive, "", &icon_label("trash-2", "Delete"), false),
            ]),
        ),
        S::new(
            "States",
            "Disabled and loading states apply 50% opacity.",
            row([
                button_html(Variant::Default, "", "Disabled", true),
                button_html(
                    Variant::Default,
                    "",
                    &icon_label("loader-circle", "Please wait"),
                    true,
                ),
            ]),
        ),
        S::new(
            "Button Group",
            "Common pattern: outline cancel + primary action.",
            row([button(Variant::Outline, "Cancel"), button(Variant::Default, "Save changes")]),
        ),
    ]
}

pub(super) fn calendar() -> Sections {
    vec![S::new(
        "Month Calendar",
        "February 2026 with day headers, today highlighted, and selected range.",
        month_grid("February 2026", 0, 28, 10, (16, 20)),
    )]
}

/// Month view. `first_weekday` is 0 for Sunday.
fn month_grid(
    caption: &str,
    first_weekday: u32,
    days: u32,
    today: u32,
    range: (u32, u32),
) -> String {
    let mut html = format!(
        r#"<div class="ds-calendar"><div class="ds-calendar-caption">{}<span>{}</span>{}</div>"#,
        icon("chevron-left"),
        wb_renderer::escape_html(caption),
        icon("chevron-right")
    );
    html.push_str(r#"<div class="ds-calendar-grid">"#);
    for day in ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"] {
        write!(html, r#"<span class="ds-calendar-head">{day}</span>"#).unwrap();
    }
    for _ in 0..first_weekday {
        html.push_str("<span></span>");
    }
    for day in 1..=days {
        let class = if day == today {
            "ds-calendar-day is-today"
        } else if (range.0..=range.1).contains(&day) {
            "ds-calendar-day is-selected"
        } else {
            "ds-calendar-day"
        };
        write!(html, r#"<span class="{class}">{day}</span>"#).unwrap();
    }
    html.push_str("</div></div>");
    html
}

pub(super) fn card_preview() -> Sections {
    vec![
        S::new(
            "Default Card",
            "Standard card with header, content, and footer sections.",
            card(
                "Create project",
                Some("Deploy your new project in one click."),
                &field("Name", &input("Name of your project", "", false, false), None, None),
                Some(&row([
                    button(Variant::Outline, "Cancel"),
                    button(Variant::Default, "Deploy"),
                ])),
            ),
        ),
        S::new(
            "Header with Icon",
            "Card header with a leading icon using the theme's primary color.",
            card(
                "Notifications",
                Some("You have 3 unread messages."),
                &icon_label("message-square", "Open inbox"),
                None,
            ),
        ),
        S::new(
            "Compact Card",
            "Minimal card without footer, used for info display.",
            card("Total Revenue", None, &text("p", "ds-stat", "$45,231.89"), None),
        ),
    ]
}

pub(super) fn carousel() -> Sections {
    let slides = concat((1..=3).map(|n| format!(r#"<div class="ds-carousel-slide">{n}</div>"#)));
    vec![S::new(
        "Carousel",
        "Horizontal row of slides with prev/next arrow buttons.",
        row([
            button_html(Variant::Outline, "ds-btn-icon", &icon("chevron-left"), false),
            div("ds-carousel", &slides),
            button_html(Variant::Outline, "ds-btn-icon", &icon("chevron-right"), false),
        ]),
    )]
}

pub(super) fn chart() -> Sections {
    let data = [("Jan", 186), ("Feb", 305), ("Mar", 237), ("Apr", 73), ("May", 209), ("Jun", 214)];
    let max = data.iter().map(|(_, v)| *v).max().unwrap_or(1);
    let bars = concat(data.iter().map(|(month, value)| {
        let height = value * 100 / max;
        let bar =
            format!(r#"<div class="ds-chart-bar" style="height:{height}%" title="{value}"></div>"#);
        div("ds-chart-col", &(bar + &format!("<span>{month}</span>")))
    }));
    vec![S::new(
        "Bar Chart",
        "Static visual approximation of a bar chart.",
        div("ds-chart", &bars),
    )]
}

pub(super) fn checkbox_preview() -> Sections {
    vec![S::new(
        "Checkbox States",
        "Click any checkbox to toggle. Unchecked, checked, indeterminate, and disabled states.",
        stack([
            checkbox("Accept terms and conditions", Some(false), false),
            checkbox("Send me updates", Some(true), false),
            checkbox("Select all", None, false),
            checkbox("Unavailable option", Some(false), true),
        ]),
    )]
}

pub(super) fn collapsible() -> Sections {
    let summary = format!(
        "<summary>@peduarte starred 3 repositories {}</summary>",
        icon("chevrons-up-down")
    );
    let repos = ["@radix-ui/primitives", "@radix-ui/colors", "@stitches/react"];
    let items = stack(repos.map(|r| div("ds-collapsible-item", r)));
    let body = format!(r#"<details class="ds-collapsible" open>{summary}{items}</details>"#);
    vec![S::new("Collapsible", "Click the trigger to expand or collapse the content.", body)]
}

pub(super) fn combobox() -> Sections {
    let options = ["Next.js", "SvelteKit", "Nuxt.js", "Remix", "Astro"];
    let list = concat(options.iter().map(|o| format!(r#"<option value="{o}"></option>"#)));
    let trigger = concat!(
        r#"<input class="ds-input" list="ds-combobox-frameworks" "#,
        r#"placeholder="Select framework...">"#
    );
    let datalist = format!(r#"<datalist id="ds-combobox-frameworks">{list}</datalist>"#);
    vec![S::new(
        "Combobox",
        "Click to open, type to search, click an option to select.",
        div("ds-combobox", &(trigger.to_owned() + &datalist)),
    )]
}

pub(super) fn command() -> Sections {
    let search = format!(
        r#"<div class="ds-command-input">{}{}</div>"#,
        icon("search"),
        input("Type a command or search...", "", false, false)
    );
    let suggestions = menu(&[
        Some(("Calendar", "")),
        Some(("Search Emoji", "")),
        Some(("Calculator", "")),
    ]);
    let settings = menu(&[
        Some(("Profile", "⌘P")),
        Some(("Billing", "⌘B")),
        Some(("Settings", "⌘S")),
    ]);
    let body = search
        + &text("p", "ds-command-group", "Suggestions")
        + &suggestions
        + &text("p", "ds-command-group", "Settings")
        + &settings;
    vec![S::new(
        "Command Palette",
        "Type to filter commands. Click to select.",
        div("ds-command", &body),
    )]
}

pub(super) fn context_menu() -> Sections {
    vec![S::new(
        "Context Menu",
        "Right-click style menu with items and separators.",
        row([
            div("ds-placeholder ds-context-target", "Right click here"),
            menu(&[
                Some(("Back", "⌘[")),
                Some(("Forward", "⌘]")),
                Some(("Reload", "⌘R")),
                None,
                Some(("Save Page As...", "⇧⌘S")),
                Some(("Developer Tools", "")),
            ]),
        ]),
    )]
}

pub(super) fn data_table() -> Sections {
    let rows = [
        ("success", "ken99@example.com", "$316.00"),
        ("success", "abe45@example.com", "$242.00"),
        ("processing", "monserrat44@example.com", "$837.00"),
        ("failed", "carmella@example.com", "$721.00"),
    ];
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|(status, email, amount)| {
            vec![
                checkbox("", Some(false), false),
                badge("outline", status),
                (*email).to_owned(),
                (*amount).to_owned(),
            ]
        })
        .collect();
    vec![S::new(
        "Data Table",
        "Table with header row, checkbox column, and data rows.",
        table_html(&["", "Status", "Email", "Amount"], &rows),
    )]
}

pub(super) fn date_picker() -> Sections {
    vec![S::new(
        "Date Picker",
        "Trigger button and calendar month view.",
        stack([
            button_html(
                Variant::Outline,
                "ds-btn-justify-start",
                &icon_label("calendar", "Pick a date"),
                false,
            ),
            month_grid("February 2026", 0, 28, 10, (0, 0)),
        ]),
    )]
}

pub(super) fn dialog() -> Sections {
    let body = stack([
        field("Name", &input("", "Pedro Duarte", false, false), None, None),
        field("Username", &input("", "@peduarte", false, false), None, None),
    ]);
    vec![S::new(
        "Dialog",
        "Modal dialog with overlay hint, form fields, and footer.",
        div(
            "ds-overlay",
            &div(
                "ds-dialog",
                &card(
                    "Edit profile",
                    Some("Make changes to your profile here. Click save when you're done."),
                    &body,
                    Some(&button(Variant::Default, "Save changes")),
                ),
            ),
        ),
    )]
}

pub(super) fn drawer() -> Sections {
    let body = div("ds-drawer-handle", "")
        + &card(
            "Move Goal",
            Some("Set your daily activity goal."),
            &text("p", "ds-stat", "350 calories/day"),
            Some(&stack([button(Variant::Default, "Submit"), button(Variant::Outline, "Cancel")])),
        );
    vec![S::new(
        "Drawer",
        "Bottom sheet style panel with drag handle and form.",
        div("ds-drawer", &body),
    )]
}

pub(super) fn dropdown_menu() -> Sections {
    vec![S::new(
        "Dropdown Menu",
        "Click the button to open/close the menu.",
        stack([
            button_html(
                Variant::Outline,
                "",
                &(String::from("Open") + &icon("chevron-down")),
                false,
            ),
            menu(&[
                Some(("Profile", "⇧⌘P")),
                Some(("Billing", "⌘B")),
                Some(("Settings", "⌘S")),
                None,
                Some(("Log out", "⇧⌘Q")),
            ]),
        ]),
    )]
}

pub(super) fn form() -> Sections {
    vec![S::new(
        "Form",
        "Form with inputs, labels, descriptions, and error state.",
        format!(
            r#"<form class="ds-form">{}</form>"#,
            stack([
                field(
                    "Username",
                    &input("shadcn", "", false, false),
                    Some("This is your public display name."),
                    None,
                ),
                field(
                    "Email",
                    &input("m@example.com", "not-an-email", false, true),
                    None,
                    Some("Please enter a valid email address."),
                ),
                button(Variant::Default, "Submit"),
            ])
        ),
    )]
}

pub(super) fn header() -> Sections {
    let links = concat(
        ["Dashboard", "Courses", "Messages"]
            .iter()
            .map(|l| format!(r##"<a href="#">{l}</a>"##)),
    );
    let logo = r#"<strong class="ds-header-logo">Helix</strong>"#;
    let nav = format!(r#"<nav class="ds-header-nav">{links}</nav>"#);
    vec![S::new(
        "Header",
        "Navbar with logo, nav links, and user avatar.",
        format!(r#"<header class="ds-header">{logo}{nav}{}</header>"#, avatar("JD", "sm")),
    )]
}

pub(super) fn hover_card() -> Sections {
    vec![S::new(
        "Hover Card",
        "Trigger link with hover card content.",
        stack([
            r##"<a class="ds-link" href="#">@nextjs</a>"##.to_owned(),
            card(
                "@nextjs",
                Some("The React Framework, created and maintained by @vercel."),
                &icon_label("calendar", "Joined December 2021"),
                None,
            ),
        ]),
    )]
}

pub(super) fn input_preview() -> Sections {
    vec![
        S::new(
            "Default Input",
            "Standard text input with label and description (vertical layout).",
            field(
                "Email",
                &input("Enter your email", "", false, false),
                Some("We'll never share your email."),
                None,
            ),
        ),
        S::new(
            "With Leading Icon",
            "Search input with a prefix icon positioned absolutely.",
            div("ds-input-icon", &(icon("search") + &input("Search...", "", false, false))),
        ),
        S::new(
            "States",
            "Default, focus, disabled, and error states.",
            stack([
                input("Default", "", false, false),
                input("Focused", "", false, false).replace("ds-input", "ds-input is-focused"),
                input("Disabled", "", true, false),
                input("Error", "", false, true),
            ]),
        ),
        S::new(
            "Horizontal Layout",
            "Label and input side by side for compact forms.",
            div(
                "ds-field-horizontal",
                &field("Name", &input("Your name", "", false, false), None, None),
            ),
        ),
        S::new(
            "Input + Button",
            "Combined input and button pattern.",
            row([input("Email", "", false, false), button(Variant::Default, "Subscribe")]),
        ),
    ]
}

pub(super) fn input_otp() -> Sections {
    let group = || concat((0..3).map(|_| r#"<span class="ds-otp-slot"></span>"#));
    vec![S::new(
        "Input OTP",
        "OTP digit boxes with group separators.",
        row([div("ds-otp-group", &group()), icon("minus"), div("ds-otp-group", &group())]),
    )]
}

pub(super) fn label() -> Sections {
    vec![S::new(
        "Label",
        "Labels in different contexts.",
        stack([
            field("Email address", &input("", "", false, false), None, None),
            checkbox("Remember me", Some(false), false),
            field("Disabled field", &input("", "", true, false), None, None),
        ]),
    )]
}

pub(super) fn menubar() -> Sections {
    let bar = concat(
        ["File", "Edit", "View", "Profiles"]
            .iter()
            .map(|m| format!(r#"<span class="ds-menubar-trigger">{m}</span>"#)),
    );
    vec![S::new(
        "Menubar",
        "Horizontal menubar with dropdown menu.",
        stack([
            div("ds-menubar", &bar),
            menu(&[
                Some(("New Tab", "⌘T")),
                Some(("New Window", "⌘N")),
                None,
                Some(("Print...", "⌘P")),
            ]),
        ]),
    )]
}

pub(super) fn navigation_menu() -> Sections {
    let nav = concat(["Getting started", "Components", "Documentation"].iter().map(|i| {
        format!(r#"<span class="ds-nav-trigger">{i}{}</span>"#, icon("chevron-down"))
    }));
    let mega = grid([
        card(
            "Introduction",
            Some("Re-usable components built using Radix UI and Tailwind CSS."),
            "",
            None,
        ),
        card("Installation", Some("How to install dependencies and structure your app."), "", None),
        card("Typography", Some("Styles for headings, paragraphs, lists...etc"), "", None),
    ]);
    vec![S::new(
        "Navigation Menu",
        "Horizontal nav with mega-menu dropdown.",
        stack([div("ds-navigation-menu", &nav), div("ds-mega-menu", &mega)]),
    )]
}

pub(super) fn pagination() -> Sections {
    let previous = icon_label("chevron-left", "Previous");
    let next = String::from("<span>Next</span>") + &icon("chevron-right");
    let mut items = vec![button_html(Variant::Ghost, "", &previous, false)];
    for page in 1..=3 {
        let variant = if page == 2 { Variant::Outline } else { Variant::Ghost };
        items.push(button_html(variant, "ds-btn-icon", &page.to_string(), false));
    }
    items.push(text("span", "ds-ellipsis", "..."));
    items.push(button_html(Variant::Ghost, "", &next, false));
    vec![S::new(
        "Pagination",
        "Click page numbers or arrows to navigate.",
        format!(r#"<nav aria-label="pagination">{}</nav>"#, row(items)),
    )]
}

pub(super) fn popover() -> Sections {
    vec![S::new(
        "Popover",
        "Click the button to open/close the popover.",
        stack([
            button(Variant::Outline, "Open popover"),
            card(
                "Dimensions",
                Some("Set the dimensions for the layer."),
                &stack([
                    field("Width", &input("", "100%", false, false), None, None),
                    field("Height", &input("", "25px", false, false), None, None),
                ]),
                None,
            ),
        ]),
    )]
}

pub(super) fn progress_preview() -> Sections {
    vec![S::new(
        "Progress",
        "Progress bars at different completion levels.",
        stack([0u8, 25, 60, 100].map(|v| row([progress(v), format!("<span>{v}%</span>")]))),
    )]
}

pub(super) fn radio_group() -> Sections {
    vec![S::new(
        "Radio Group",
        "Click to select. Radio options with selected and disabled states.",
        format!(
            r#"<div role="radiogroup" class="ds-stack">{}</div>"#,
            concat([
                radio("density", "Default", true, false),
                radio("density", "Comfortable", false, false),
                radio("density", "Compact", false, true),
            ])
        ),
    )]
}

pub(super) fn resizable() -> Sections {
    let handle = concat!(
        r#"<div class="ds-resizable-handle" role="separator" "#,
        r#"aria-orientation="vertical"></div>"#
    );
    vec![S::new(
        "Resizable",
        "Side-by-side panels with a vertical divider handle.",
        div(
            "ds-resizable",
            &(div("ds-resizable-panel", "Sidebar")
                + handle
                + &div("ds-resizable-panel", "Content")),
        ),
    )]
}

pub(super) fn scroll_area() -> Sections {
    let tags = concat(
        (1..=50)
            .rev()
            .map(|n| format!(r#"<div class="ds-scroll-item">v1.2.0-beta.{n}</div>"#)),
    );
    vec![S::new(
        "Scroll Area",
        "Scrollable container with visible scrollbar.",
        div("ds-scroll-area", &(text("h4", "ds-scroll-title", "Tags") + &tags)),
    )]
}

pub(super) fn select() -> Sections {
    let fruits = ["Apple", "Banana", "Blueberry", "Grapes", "Pineapple"];
    let options = concat(fruits.map(|f| format!("<option>{f}</option>")));
    let placeholder = "<option disabled selected>Select a fruit</option>";
    vec![S::new(
        "Select",
        "Click the trigger to open the dropdown, then select an option.",
        format!(r#"<select class="ds-select">{placeholder}{options}</select>"#),
    )]
}

pub(super) fn separator() -> Sections {
    let sep = |o: &str| {
        format!(
            concat!(
                r#"<div class="ds-separator ds-separator-{0}" "#,
                r#"role="separator" aria-orientation="{0}"></div>"#
            ),
            o
        )
    };
    vec![
        S::new(
            "Horizontal",
            "Separators between text blocks.",
            stack([
                text("p", "", "Radix Primitives"),
                muted("An open-source UI component library."),
                sep("horizontal"),
                text("p", "", "Blog"),
            ]),
        ),
        S::new(
            "Vertical (Toolbar)",
            "Separators in a horizontal toolbar.",
            row([
                "Blog".to_owned(),
                sep("vertical"),
                "Docs".to_owned(),
                sep("vertical"),
                "Source".to_owned(),
            ]),
        ),
    ]
}

pub(super) fn sheet() -> Sections {
    vec![S::new(
        "Sheet",
        "Side sheet panel with form content.",
        div(
            "ds-sheet",
            &card(
                "Edit profile",
                Some("Make changes to your profile here."),
                &stack([
                    field("Name", &input("", "Pedro Duarte", false, false), None, None),
                    field("Username", &input("", "@peduarte", false, false), None, None),
                ]),
                Some(&button(Variant::Default, "Save changes")),
            ),
        ),
    )]
}

pub(super) fn sidebar() -> Sections {
    let nav = stack([
        text("p", "ds-sidebar-group", "Platform"),
        icon_label("layout-dashboard", "Dashboard"),
        icon_label("message-square", "Messages"),
        icon_label("settings", "Settings"),
    ]);
    let user = row([avatar("JD", "sm"), text("span", "", "Jane Doe")]);
    vec![S::new(
        "Sidebar",
        "Sidebar layout with nav sections and user area.",
        div(
            "ds-sidebar-demo",
            &(div("ds-sidebar-nav", &(nav + &user)) + &div("ds-sidebar-main", "Main content")),
        ),
    )]
}

pub(super) fn skeleton_preview() -> Sections {
    vec![
        S::new(
            "Card Skeleton",
            "Loading placeholder for a card with image, title, and text.",
            stack([
                skeleton("", "250px", "125px"),
                skeleton("", "250px", "16px"),
                skeleton("", "200px", "16px"),
            ]),
        ),
        S::new(
            "List Skeleton",
            "Three rows of circle and bar placeholders.",
            stack((0..3).map(|_| {
                row([
                    skeleton("ds-skeleton-circle", "40px", "40px"),
                    skeleton("", "200px", "16px"),
                ])
            })),
        ),
        S::new(
            "Avatar + Text Skeleton",
            "Inline avatar with text lines.",
            row([
                skeleton("ds-skeleton-circle", "48px", "48px"),
                stack([skeleton("", "250px", "16px"), skeleton("", "200px", "16px")]),
            ]),
        ),
    ]
}

fn slider_input(value: u8, disabled: bool) -> String {
    format!(
        r#"<input class="ds-slider" type="range" min="0" max="100" value="{value}"{}>"#,
        if disabled { " disabled" } else { "" }
    )
}

pub(super) fn slider() -> Sections {
    vec![
        S::new(
            "Default Slider",
            "Drag the thumb or click the track to adjust.",
            slider_input(50, false),
        ),
        S::new(
            "Range Slider",
            "Drag either thumb to adjust the range.",
            div("ds-slider-range", &(slider_input(25, false) + &slider_input(75, false))),
        ),
        S::new("Disabled", "Slider with reduced opacity.", slider_input(40, true)),
    ]
}

fn toast(
    kind: &str,
    icon_name: Option<&str>,
    title: &str,
    description: &str,
    action: Option<&str>,
) -> String {
    let mut inner = icon_name.map(icon).unwrap_or_default();
    inner.push_str(&div(
        "ds-toast-text",
        &(text("strong", "ds-toast-title", title)
            + &text("p", "ds-toast-description", description)),
    ));
    if let Some(action) = action {
        inner.push_str(&button_html(Variant::Outline, "ds-btn-sm", action, false));
    }
    format!(r#"<div class="ds-toast ds-toast-{kind}" role="status">{inner}</div>"#)
}

pub(super) fn sonner() -> Sections {
    vec![
        S::new(
            "Default Toast",
            "Standard toast notification with title and description.",
            toast(
                "default",
                None,
                "Event has been created",
                "Sunday, December 03, 2023 at 9:00 AM",
                None,
            ),
        ),
        S::new(
            "Success Toast",
            "Toast with success icon.",
            toast(
                "success",
                Some("circle-check"),
                "Saved",
                "Your changes have been saved.",
                None,
            ),
        ),
        S::new(
            "Error Toast",
            "Destructive toast for errors.",
            toast(
                "destructive",
                Some("alert-circle"),
                "Something went wrong",
                "There was a problem with your request.",
                None,
            ),
        ),
        S::new(
            "With Action",
            "Toast with an action button.",
            toast(
                "default",
                None,
                "Message archived",
                "1 conversation moved.",
                Some("Undo"),
            ),
        ),
    ]
}

pub(super) fn switch_preview() -> Sections {
    vec![
        S::new(
            "States",
            "Click to toggle. On, off, and disabled switch states.",
            row([
                switch("On", true, false),
                switch("Off", false, false),
                switch("Disabled", false, true),
            ]),
        ),
        S::new(
            "With Label",
            "Switch paired with a label and description.",
            row([
                stack([
                    text("strong", "", "Marketing emails"),
                    muted("Receive emails about new products."),
                ]),
                switch("", true, false),
            ]),
        ),
    ]
}

pub(super) fn table_preview() -> Sections {
    let rows: Vec<Vec<String>> = [
        ("INV001", "Paid", "success", "Credit Card", "$250.00"),
        ("INV002", "Pending", "warning", "PayPal", "$150.00"),
        ("INV003", "Unpaid", "destructive", "Bank Transfer", "$350.00"),
    ]
    .iter()
    .map(|(inv, status, variant, method, amount)| {
        vec![(*inv).to_owned(), badge(variant, status), (*method).to_owned(), (*amount).to_owned()]
    })
    .collect();
    let mut html = table_html(&["Invoice", "Status", "Method", "Amount"], &rows);
    html = html.replace(
        "</tbody></table>",
        r#"</tbody><tfoot><tr><td colspan="3">Total</td><td>$750.00</td></tr></tfoot></table>"#,
    );
    vec![S::new("Data Table", "Table with header, status badges, and footer total.", html)]
}

fn tab(label: &str, active: bool) -> String {
    format!(
        concat!(
            r#"<button type="button" role="tab" class="ds-tab" "#,
            r#"aria-selected="{}">{}</button>"#
        ),
        active,
        label
    )
}

pub(super) fn tabs() -> Sections {
    let list = concat([tab("Account", true), tab("Password", false)]);
    vec![S::new(
        "Default Tabs",
        "Click tabs to switch between panels.",
        stack([
            div("ds-tabs-list", &list),
            card(
                "Account",
                Some("Make changes to your account here."),
                &field("Name", &input("", "Pedro Duarte", false, false), None, None),
                None,
            ),
        ]),
    )]
}

fn textarea(placeholder: &str, disabled: bool, invalid: bool) -> String {
    format!(
        r#"<textarea class="ds-textarea" placeholder="{placeholder}"{}{}></textarea>"#,
        if disabled { " disabled" } else { "" },
        if invalid { r#" aria-invalid="true""# } else { "" }
    )
}

pub(super) fn textarea_preview() -> Sections {
    vec![
        S::new(
            "Default",
            "Standard textarea with placeholder.",
            textarea("Type your message here.", false, false),
        ),
        S::new(
            "With Label",
            "Textarea with label and description.",
            field(
                "Your message",
                &textarea("Type your message here.", false, false),
                Some("Your message will be copied to the support team."),
                None,
            ),
        ),
        S::new("Disabled", "Textarea in disabled state.", textarea("Disabled", true, false)),
        S::new(
            "Error State",
            "Textarea with validation error.",
            field(
                "Bio",
                &textarea("Tell us about yourself", false, true),
                None,
                Some("Bio must be at least 10 characters."),
            ),
        ),
        S::new(
            "With Character Count",
            "Textarea showing remaining characters.",
            stack([textarea("Write a short bio", false, false), muted("160 characters remaining")]),
        ),
    ]
}

fn toggle_button(html: &str, pressed: bool, disabled: bool, outline: bool) -> String {
    format!(
        r#"<button type="button" class="ds-toggle{}" aria-pressed="{pressed}"{}>{html}</button>"#,
        if outline { " ds-toggle-outline" } else { "" },
        if disabled { " disabled" } else { "" }
    )
}

pub(super) fn toggle() -> Sections {
    let formats = ["bold", "italic", "underline"];
    vec![
        S::new(
            "Toggle States",
            "Click to toggle. Off, pressed/on, and disabled.",
            row([
                toggle_button("Off", false, false, false),
                toggle_button("On", true, false, false),
                toggle_button("Disabled", false, true, false),
            ]),
        ),
        S::new(
            "With Icons",
            "Click to toggle format options: Bold, Italic, Underline.",
            row(formats.map(|i| toggle_button(&icon(i), i == "bold", false, false))),
        ),
        S::new(
            "Outline Variant",
            "Click to toggle outline style.",
            toggle_button(&icon("italic"), false, false, true),
        ),
    ]
}

pub(super) fn toggle_group() -> Sections {
    let alignments = ["align-left", "align-center", "align-right"];
    let formats = ["bold", "italic", "underline"];
    vec![
        S::new(
            "Single Select",
            "Click to switch alignment. Only one can be active.",
            div(
                "ds-toggle-group",
                &concat(alignments.map(|i| {
                    toggle_button(&icon(i), i == "align-left", false, false)
                })),
            ),
        ),
        S::new(
            "Multi Select",
            "Click to toggle. Multiple items can be selected.",
            div(
                "ds-toggle-group",
                &concat(formats.map(|i| toggle_button(&icon(i), i != "underline", false, false))),
            ),
        ),
    ]
}

pub(super) fn tooltip() -> Sections {
    vec![
        S::new(
            "Tooltip (Top)",
            "Static tooltip above a button.",
            stack([
                text("span", "ds-tooltip", "Add to library"),
                button(Variant::Outline, "Hover"),
            ]),
        ),
        S::new(
            "Tooltip Positions",
            "Conceptual labels for top, right, bottom, left.",
            row(["Top", "Right", "Bottom", "Left"].map(|p| text("span", "ds-tooltip", p))),
        ),
    ]
}

/// Icon names shown in the inventory, with their typical use.
const MOST_USED_ICONS: [(&str, &str); 21] = [
    ("LoaderCircle", "Loading/spinner"),
    ("X", "Close/dismiss"),
    ("ChevronDown", "Dropdown indicator"),
    ("ChevronLeft", "Nav prev"),
    ("ChevronRight", "Nav next"),
    ("Menu", "Menu toggle"),
    ("Search", "Search"),
    ("Settings", "Settings"),
    ("User", "User/profile"),
    ("Plus", "Add/create"),
    ("Trash2", "Delete"),
    ("Pencil", "Edit"),
    ("Check", "Success/check"),
    ("AlertCircle", "Error/warning"),
    ("Info", "Info"),
    ("ExternalLink", "External link"),
    ("Copy", "Copy"),
    ("Download", "Download"),
    ("Upload", "Upload"),
    ("MoreHorizontal", "More options"),
    ("Calendar", "Calendar/date"),
];

/// `LoaderCircle` -> `loader-circle`, `Trash2` -> `trash-2`.
fn kebab(name: &str) -> String {
    let mut out = String::new();
    for (i, c) in name.chars().enumerate() {
        if i > 0 && (c.is_ascii_uppercase() || (c.is_ascii_digit() && !out.ends_with('-'))) {
            out.push('-');
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

fn icon_tile(name: &str, note: &str) -> String {
    div(
        "ds-icon-tile",
        &(icon(&kebab(name)) + &text("code", "", name) + &text("span", "ds-muted", note)),
    )
}

pub(super) fn icons_full_list() -> Sections {
    let sizes = [("xs", "12px"), ("sm", "16px"), ("md", "20px"), ("lg", "24px"), ("xl", "32px")];
    vec![
        S::new(
            "Icon Browser",
            "Lucide icons. Search, browse, and click to copy the import statement.",
            stack([
                div(
                    "ds-input-icon",
                    &(icon("search") + &input("Search icons...", "", false, false)),
                ),
                row(sizes.iter().map(|(label, px)| badge("outline", &format!("{label} ({px})")))),
                grid(MOST_USED_ICONS.iter().map(|(name, _)| icon_tile(name, ""))),
            ]),
        ),
    ]
}

pub(super) fn inventory() -> Sections {
    let size_classes = [
        ("size-3", "12px"),
        ("size-4", "16px"),
        ("size-5", "20px"),
        ("size-6", "24px"),
    ];
    let status = [
        ("CircleCheck", "Success"),
        ("AlertCircle", "Error"),
        ("TriangleAlert", "Warning"),
        ("Info", "Info"),
    ];
    let used_in: [&[&str]; 10] = [
        &["Button (loading)", "Spinner", "LoaderCircle"],
        &["Select", "Dropdown", "ChevronDown"],
        &["Dialog / Sheet", "Close", "X"],
        &["Accordion", "Expand", "ChevronDown"],
        &["Collapsible", "Toggle", "ChevronsUpDown"],
        &["DropdownMenu", "Submenu", "ChevronRight"],
        &["Breadcrumb", "Separator", "ChevronRight"],
        &["Pagination", "Nav arrows", "ChevronLeft"],
        &["Sidebar", "Collapse", "PanelLeft"],
        &["Command", "Search", "Search"],
    ];
    let gotchas: [&[&str]; 4] = [
        &["MessageSquare", "MessageCircle"],
        &["UserRound", "CircleUser"],
        &["Pen", "Pencil"],
        &["CircleHelp", "HelpCircle"],
    ];
    vec![
        S::new(
            "Most Used Icons",
            "",
            grid(MOST_USED_ICONS.iter().map(|(name, note)| icon_tile(name, note))),
        ),
        S::new(
            "Size Classes",
            "",
            row(size_classes.iter().map(|(class, px)| {
                let sample = icon("star").replace("ds-icon", &format!("ds-icon {class}"));
                div("ds-icon-size", &(sample + &text("code", "", &format!("{class} ({px})"))))
            })),
        ),
        S::new("Status Icons", "", row(status.iter().map(|(name, label)| icon_tile(name, label)))),
        S::new("Icons Used in Components", "", table(&["Component", "Purpose", "Icon"], &used_in)),
        S::new("Common Naming Gotchas", "", table(&["Looks like", "Import as"], &gotchas)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kebab() {
        assert_eq!(kebab("LoaderCircle"), "loader-circle");
        assert_eq!(kebab("Trash2"), "trash-2");
        assert_eq!(kebab("X"), "x");
    }

    #[test]
    fn test_button_preview_sections() {
        let titles: Vec<_> = button_preview().iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Variants", "Sizes", "With Icons", "States", "Button Group"]);
    }

    #[test]
    fn test_calendar_highlights_today() {
        let html = month_grid("February 2026", 0, 28, 10, (16, 20));
        assert!(html.contains(r#"<span class="ds-calendar-day is-today">10</span>"#));
        assert_eq!(html.matches("is-selected").count(), 5);
    }

    #[test]
    fn test_chart_scales_to_max() {
        let html = &chart()[0].body;
        assert!(html.contains("height:100%"));
    }

    #[test]
    fn test_inventory_sections_have_no_description() {
        assert!(inventory().iter().all(|s| s.description.is_none()));
    }
}
