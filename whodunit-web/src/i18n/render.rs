use crate::i18n::bundle::with_strings;
use serde_json::Value;
use std::collections::BTreeMap;

fn lookup<'a>(table: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(table, |node, part| node.get(part))
}

/// English plural rule; other locales fall back to `other` or `_`.
fn plural_form(count: &str) -> &'static str {
    match count.parse::<i64>() {
        Ok(1) => "one",
        Ok(0) => "zero",
        _ => "other",
    }
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Object(forms) => {
            let by_count = args
                .and_then(|m| m.get("count"))
                .and_then(|count| forms.get(plural_form(count)));
            by_count
                .or_else(|| forms.get("other"))
                .or_else(|| forms.get("_"))
                .and_then(Value::as_str)?
                .to_string()
        }
        _ => return None,
    };

    if let Some(args) = args {
        for (name, replacement) in args {
            text = text.replace(&format!("{{{name}}}"), replacement);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_strings(|strings| {
        lookup(&strings.table, key)
            .and_then(|v| render_value(v, args))
            .or_else(|| lookup(&strings.fallback, key).and_then(|v| render_value(v, args)))
    })
}

/// Translate a key, falling back to English and then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key, replacing `{name}` placeholders from `args`.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_forms_follow_count() {
        let value = serde_json::json!({ "one": "{count} guest", "other": "{count} guests" });
        let mut args = BTreeMap::new();
        args.insert("count", "1");
        assert_eq!(render_value(&value, Some(&args)).unwrap(), "1 guest");
        args.insert("count", "6");
        assert_eq!(render_value(&value, Some(&args)).unwrap(), "6 guests");
    }

    #[test]
    fn nested_keys_resolve_and_missing_keys_echo() {
        assert_eq!(t("setup.generate"), "Generate Game");
        assert_eq!(t("no.such.key"), "no.such.key");
    }

    #[test]
    fn placeholders_are_filled() {
        let mut args = BTreeMap::new();
        args.insert("name", "Ann Marsh");
        assert_eq!(
            tr("character.dialog_title", Some(&args)),
            "Character packet: Ann Marsh"
        );
    }
}
