use crate::i18n::locales::{DEFAULT_LANG, load_table};
use serde_json::{Map, Value};
use std::cell::RefCell;

/// Active string table plus the English table it falls back to.
pub struct Strings {
    pub lang: String,
    pub table: Value,
    pub fallback: Value,
}

impl Strings {
    fn load(lang: &str) -> Option<Self> {
        let fallback = load_table(DEFAULT_LANG).unwrap_or_else(|| Value::Object(Map::new()));
        let table = if lang == DEFAULT_LANG {
            fallback.clone()
        } else {
            load_table(lang)?
        };
        Some(Self {
            lang: lang.to_string(),
            table,
            fallback,
        })
    }

    fn english() -> Self {
        let fallback = load_table(DEFAULT_LANG).unwrap_or_else(|| Value::Object(Map::new()));
        Self {
            lang: DEFAULT_LANG.to_string(),
            table: fallback.clone(),
            fallback,
        }
    }
}

thread_local! {
    static CURRENT: RefCell<Strings> = RefCell::new(Strings::english());
}

pub(super) fn with_strings<R>(f: impl FnOnce(&Strings) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

/// Switch the active string table. Codes without a table are ignored.
///
/// In the browser this also sets `<html lang>`.
pub fn set_lang(lang: &str) {
    let Some(strings) = Strings::load(lang) else {
        log::warn!("no string table for `{lang}`");
        return;
    };
    CURRENT.with(|cell| cell.replace(strings));
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("lang", lang);
        }
    }
}

#[must_use]
pub fn current_lang() -> String {
    with_strings(|strings| strings.lang.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_is_the_default() {
        assert_eq!(current_lang(), "en");
        with_strings(|s| assert!(s.table.is_object()));
    }

    #[test]
    fn unknown_language_is_ignored() {
        set_lang("xx");
        assert_eq!(current_lang(), "en");
    }
}
