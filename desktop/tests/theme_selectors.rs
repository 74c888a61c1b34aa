#![cfg(test)]
//! Selector lint for the shared theme embedded by the desktop shell.
//!
//! The desktop build inlines `ui/assets/theme/main.css`, so a renamed or dropped class only shows
//! up as broken styling at runtime. This checks that the classes the report components emit are
//! still defined. Add to the list when a component starts relying on new structural CSS.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    ":root",
    "--color-bg",
    "body {",
    ".page {",
    ".page__notice",
    ".button {",
    ".button--primary",
    ".button--accent",
    ".button--ghost",
    ".status-panel",
    ".status-panel--failed",
    ".results__header",
    ".results__panels",
    ".results-card",
    ".results-card__header",
    ".results-card__meta",
    ".results-card__placeholder",
    ".results-highlights",
    ".results-highlight",
    ".results-highlight__value",
    ".results-chart__svg",
    ".results-chart__note",
    ".results-list__items",
    ".results-list__item",
    ".results-list__metric-label",
    ".results-detail__grid",
    ".upload-widget__picker",
    ".upload-widget__error",
    ".data-table",
    ".data-table__numeric",
    ".tag-high",
    ".tag-medium",
    ".tag-low",
    ".field-coverage__fill",
    ".reports__filter",
    "@media (max-width: 720px)",
];

#[test]
fn embedded_theme_is_not_blank() {
    assert!(!THEME_CSS.trim().is_empty(), "ui/assets/theme/main.css is empty");
}

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(*sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} selector(s) in the shared theme:\n{:?}",
        missing.len(),
        missing
    );
}

#[test]
fn confidence_tier_classes_match_theme() {
    use ui::core::derive::{confidence_tier, ConfidenceTier};

    for tier in [ConfidenceTier::High, ConfidenceTier::Medium, ConfidenceTier::Low] {
        for class in tier.css_class().split_whitespace() {
            assert!(
                THEME_CSS.contains(&format!(".{class}")),
                "theme has no rule for .{class}"
            );
        }
    }
    assert_eq!(confidence_tier(0.9), ConfidenceTier::High);
}
