// SPDX-License-Identifier: MPL-2.0
use crate::app::config::Config;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

const DEFAULT_LOCALE: &str = "en-US";

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                tracing::warn!("Skipping translation file with invalid locale: {filename}");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    tracing::warn!("{} parse errors in {filename}", errors.len());
                    resource
                }
            };
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // Plain strings only; isolation marks would leak into widget text.
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::warn!("{} duplicate messages in {filename}", errors.len());
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE.parse().unwrap_or_default();
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);
        tracing::debug!("Using locale {current_locale}");

        Self {
            bundles,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, None, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [
        cli_lang,
        config.general.language.clone(),
        sys_locale::get_locale(),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(|lang_str| lang_str.parse::<LanguageIdentifier>().ok())
        .find(|lang| available.contains(lang))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locales() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn test_resolve_locale_cli() {
        let config = Config::default();
        let lang = resolve_locale(Some("fr".to_string()), &config, &locales());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, &locales());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_skips_unknown_cli_value() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(Some("de".to_string()), &config, &locales());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_default() {
        let config = Config::default();
        let available = locales();
        // System dependent: only check that any answer is an available locale
        if let Some(l) = resolve_locale(None, &config, &available) {
            assert!(available.contains(&l));
        }
    }

    #[test]
    fn embedded_bundles_translate_gallery_strings() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(i18n.tr("search-placeholder"), "what are you looking for?");
        assert_eq!(
            i18n.tr("no-results-found"),
            "No results found, here are pictures of cats instead!"
        );
    }

    #[test]
    fn missing_key_is_reported() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("does-not-exist"), "MISSING: does-not-exist");
    }

    #[test]
    fn cli_locale_selects_french_bundle() {
        let i18n = I18n::new(Some("fr".to_string()), &Config::default());
        assert_eq!(i18n.current_locale().to_string(), "fr");
        assert_eq!(i18n.tr("search-placeholder"), "que cherchez-vous ?");
    }
}
