// Host-page wiring constants for the web front-end.

// Reference textures per section, as (section name, asset URL)
pub const SECTION_TEXTURES: &[(&str, &str)] = &[
    ("hero", "/textures/spider-web.jpeg"),
    ("about", "/textures/about-frame.jpg"),
    ("projects", "/textures/spider-web.jpeg"), // shares the hero web
];

// Canvas presentation
pub const CANVAS_LAYER_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("inset", "0"),
    ("z-index", "0"),
    ("display", "block"),
    ("pointer-events", "none"),
    ("touch-action", "none"),
];
pub const DARK_CANVAS_FILTER: &str = "contrast(1.1)"; // deepens the glow in dark mode
pub const LIGHT_CANVAS_FILTER: &str = "none";

// Media query used when the host does not pass a theme
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// CSS filter for the canvas element in the given theme.
#[inline]
pub fn canvas_filter(is_dark: bool) -> &'static str {
    if is_dark {
        DARK_CANVAS_FILTER
    } else {
        LIGHT_CANVAS_FILTER
    }
}
