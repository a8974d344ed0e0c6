use serde_json::Value;

/// Language used when a requested table is missing.
pub const DEFAULT_LANG: &str = "en";

const TABLES: &[(&str, &str)] = &[("en", include_str!("../../i18n/en.json"))];

/// Codes with a bundled string table.
pub fn available() -> impl Iterator<Item = &'static str> {
    TABLES.iter().map(|(code, _)| *code)
}

pub(super) fn load_table(lang: &str) -> Option<Value> {
    let (_, raw) = TABLES.iter().find(|(code, _)| *code == lang)?;
    match serde_json::from_str(raw) {
        Ok(table) => Some(table),
        Err(err) => {
            log::error!("string table `{lang}` is not valid JSON: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_tables_parse() {
        for code in available() {
            assert!(load_table(code).is_some_and(|v| v.is_object()), "{code}");
        }
        assert!(load_table("xx").is_none());
    }
}
