use crate::language::Language;
use tabled::{Table, Tabled, settings::Style};

#[derive(Tabled)]
pub struct LanguageRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Language")]
    pub friendly_name: String,
    #[tabled(rename = "Files")]
    pub extension: String,
}

impl From<&Language> for LanguageRow {
    fn from(language: &Language) -> Self {
        Self {
            name: language.name().to_string(),
            friendly_name: language.friendly_name().to_string(),
            extension: language.extension_pattern().to_string(),
        }
    }
}

/// Render the available languages as a table, in registry order.
pub fn language_table(languages: &[Language]) -> String {
    if languages.is_empty() {
        return String::new();
    }

    let rows: Vec<LanguageRow> = languages.iter().map(LanguageRow::from).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

/// The available languages as a JSON array of `{key, name, friendlyName, extension}`.
pub fn language_json(languages: &[Language]) -> serde_json::Value {
    languages
        .iter()
        .map(|l| {
            serde_json::json!({
                "key": l.key(),
                "name": l.name(),
                "friendlyName": l.friendly_name(),
                "extension": l.extension_pattern(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::languages;

    #[test]
    fn test_language_table_lists_every_language() {
        let table = language_table(languages().languages());
        for language in languages().languages() {
            assert!(table.contains(language.name()));
            assert!(table.contains(language.friendly_name()));
        }
        assert!(table.contains(r"\.coffee$"));
    }

    #[test]
    fn test_language_json_shape() {
        let data = language_json(languages().languages());
        let entries = data.as_array().unwrap();
        assert_eq!(entries.len(), languages().languages().len());

        let livescript = entries.iter().find(|e| e["key"] == "livescript").unwrap();
        assert_eq!(
            *livescript,
            serde_json::json!({
                "key": "livescript",
                "name": "ls",
                "friendlyName": "LiveScript",
                "extension": r"\.ls$",
            })
        );
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(language_table(&[]), "");
    }
}
