use serde_json::Value;
use std::cell::RefCell;

const LOCALE_TABLE: &[(&str, &str)] = &[("en", include_str!("../../i18n/en.json"))];

pub struct I18nBundle {
    pub lang: String,
    pub translations: Value,
}

fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    match serde_json::from_str(bundle) {
        Ok(value) => Some(value),
        Err(err) => {
            log::error!("translation bundle {lang} is invalid: {err}");
            None
        }
    }
}

fn build_bundle(lang: &str) -> I18nBundle {
    I18nBundle {
        lang: lang.to_string(),
        translations: load_translations(lang).unwrap_or(Value::Object(serde_json::Map::new())),
    }
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new(build_bundle("en"));
}

pub fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

/// Two-letter code of the active locale.
#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_bundle_loads() {
        let bundle = build_bundle("en");
        assert_eq!(bundle.lang, "en");
        assert!(bundle.translations.get("cart").is_some());
    }

    #[test]
    fn unknown_locale_falls_back_to_english_strings() {
        let bundle = build_bundle("xx");
        assert!(bundle.translations.get("menu").is_some());
    }
}
