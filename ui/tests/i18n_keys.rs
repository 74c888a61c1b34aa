//! Keeps the Fluent bundles in step with the `t!` call sites.
//!
//! Key extraction is line based: any `id = ...` line outside comments is a message, and
//! indented variant lines (`[one] ...`) carry no `=` so they are skipped naturally.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "docboard-ui.ftl";
const FALLBACK: &str = "en-US";

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn message_ids(source: &str) -> Vec<String> {
    source
        .lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('=').map(|(id, _)| id.trim()))
        .filter(|id| !id.is_empty() && id.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-')))
        .map(str::to_string)
        .collect()
}

fn load_bundles() -> BTreeMap<String, Vec<String>> {
    let root = crate_root().join("i18n");
    let mut bundles = BTreeMap::new();
    for entry in fs::read_dir(&root).expect("i18n directory exists").flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let locale = entry.file_name().to_string_lossy().into_owned();
        let file = path.join(FTL_FILENAME);
        let source = fs::read_to_string(&file)
            .unwrap_or_else(|err| panic!("{locale}: cannot read {}: {err}", file.display()));
        bundles.insert(locale, message_ids(&source));
    }
    bundles
}

/// Literal first arguments of `t!("...")` across `src/`.
fn referenced_keys(dir: &Path, found: &mut BTreeSet<String>) {
    for entry in fs::read_dir(dir).expect("readable source dir").flatten() {
        let path = entry.path();
        if path.is_dir() {
            referenced_keys(&path, found);
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
            continue;
        }
        let source = fs::read_to_string(&path).unwrap_or_default();
        found.extend(t_macro_keys(&source));
    }
}

/// Keys of standalone `t!("...")` calls. `format!(`, `assert!(` and friends also end in `t!(`,
/// so the macro name must not be preceded by an identifier character.
fn t_macro_keys(source: &str) -> Vec<String> {
    const NEEDLE: &str = "t!(\"";
    source
        .match_indices(NEEDLE)
        .filter(|(at, _)| {
            !source[..*at]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric() || c == '_')
        })
        .filter_map(|(at, _)| {
            let rest = &source[at + NEEDLE.len()..];
            rest.split_once('"').map(|(key, _)| key.to_string())
        })
        .collect()
}

#[test]
fn scanner_skips_macros_ending_in_t() {
    let source = r#"
        let a = t!("nav-dashboard");
        let b = format!("{date} UTC");
        const CSS: Asset = asset!("/assets/x.css");
        let c = include_str!("x.ftl");
        let d = crate::t!("nav-reports", n = 1);
    "#;
    assert_eq!(t_macro_keys(source), ["nav-dashboard", "nav-reports"]);
}

#[test]
fn fluent_domain_matches_bundle_filename() {
    let config = fs::read_to_string(crate_root().join("i18n.toml")).expect("i18n.toml exists");
    let domain = config
        .lines()
        .filter_map(|line| line.split_once('='))
        .find(|(key, _)| key.trim() == "domain")
        .map(|(_, value)| value.trim().trim_matches('"'));
    assert_eq!(domain, FTL_FILENAME.strip_suffix(".ftl"));
}

#[test]
fn expected_locales_are_present() {
    let bundles = load_bundles();
    let locales: Vec<_> = bundles.keys().cloned().collect();
    assert_eq!(locales, ["en-US", "es-ES", "fr-FR"]);
}

#[test]
fn no_bundle_defines_a_key_twice() {
    for (locale, ids) in load_bundles() {
        let mut seen = BTreeSet::new();
        let dups: Vec<_> = ids.iter().filter(|id| !seen.insert(id.as_str())).collect();
        assert!(dups.is_empty(), "{locale} duplicates: {dups:?}");
    }
}

#[test]
fn every_locale_covers_the_fallback() {
    let bundles = load_bundles();
    let fallback: BTreeSet<_> = bundles[FALLBACK].iter().cloned().collect();
    assert!(!fallback.is_empty());

    for (locale, ids) in &bundles {
        let ids: BTreeSet<_> = ids.iter().cloned().collect();
        let missing: Vec<_> = fallback.difference(&ids).collect();
        let extra: Vec<_> = ids.difference(&fallback).collect();
        assert!(missing.is_empty(), "{locale} is missing {missing:?}");
        assert!(extra.is_empty(), "{locale} has keys unknown to {FALLBACK}: {extra:?}");
    }
}

#[test]
fn every_referenced_key_exists_in_fallback() {
    let bundles = load_bundles();
    let fallback: BTreeSet<_> = bundles[FALLBACK].iter().cloned().collect();

    let mut referenced = BTreeSet::new();
    referenced_keys(&crate_root().join("src"), &mut referenced);
    assert!(referenced.contains("nav-dashboard"));

    let missing: Vec<_> = referenced.difference(&fallback).collect();
    assert!(missing.is_empty(), "keys used in src/ but not in {FALLBACK}: {missing:?}");
}
