//! Localisation for `docboard-ui`.
//!
//! Built on `i18n-embed` with Fluent bundles embedded through `rust-embed`; the `fl!` macro from
//! `i18n-embed-fl` checks every key against the fallback bundle at compile time.
//!
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/docboard-ui.ftl   (fallback)
//!   es-ES/docboard-ui.ftl
//!   fr-FR/docboard-ui.ftl
//! ```
//!
//! Call [`init`] once at startup, then look strings up with [`t!`](crate::t):
//! ```ignore
//! ui::i18n::init();
//! let heading = ui::t!("dashboard-title");
//! ```
//!
//! Desktop builds take the requested locales from the OS, web builds from
//! `navigator.languages`.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::warn;
use unic_langid::{langid, LanguageIdentifier};

pub use i18n_embed_fl::fl;

/// Shorthand for `fl!(&*LOADER, ...)`.
///
/// ```ignore
/// t!("nav-dashboard")
/// t!("uncategorized-note", count = 3, percent = "30.0%")
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback bundle is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "docboard-ui";

pub const FALLBACK_LANGUAGE: LanguageIdentifier = langid!("en-US");

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> =
    Lazy::new(|| FluentLanguageLoader::new(DOMAIN, FALLBACK_LANGUAGE));

static INIT: Once = Once::new();

/// Load bundles for the platform's preferred languages. Idempotent.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!(error = %err, "language selection failed, using fallback");
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Embedded language tags, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_bundles_are_embedded() {
        let langs = available_languages();
        for expected in ["en-US", "es-ES", "fr-FR"] {
            assert!(langs.iter().any(|l| l == expected), "missing {expected}");
        }
    }

    #[test]
    fn fallback_lookup_and_arguments() {
        init();
        let _ = set_language("en-US");
        assert_eq!(fl!(&*LOADER, "nav-dashboard"), "Dashboard");
        let note = fl!(&*LOADER, "uncategorized-note", count = 2, percent = "40.0%");
        assert!(note.contains("40.0%"), "{note}");
    }

    #[test]
    fn card_labels_come_from_the_bundle() {
        init();
        let _ = set_language("en-US");
        assert_eq!(fl!(&*LOADER, "tier-high"), "High");
        assert_eq!(fl!(&*LOADER, "label-fields-extracted"), "Fields extracted");
        let split = fl!(&*LOADER, "overview-tier-split", medium = 3, low = 1, unscored = 0);
        assert!(split.contains("medium") && split.contains("unscored"), "{split}");
        let total = fl!(&*LOADER, "chart-total", total = 1);
        assert!(total.ends_with("1 document"), "{total}");
    }

    #[test]
    fn unknown_language_keeps_current_bundle() {
        init();
        let before = fl!(&*LOADER, "nav-reports");
        let _ = set_language("zz-ZZ");
        assert_eq!(before, fl!(&*LOADER, "nav-reports"));
    }
}
