//! Edit form: raw text inputs turned into a [`DetailPatch`].

use crate::domain::{DetailPatch, Record, RecordAbility, RecordType};

/// Raw inputs of the edit dialog.
///
/// `None` means the field was not submitted at all. Numeric text that fails
/// to parse falls back to the previous value; it is never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditForm {
    pub height: Option<String>,
    pub weight: Option<String>,
    /// Comma-separated type names.
    pub types: Option<String>,
    /// Comma-separated ability names.
    pub abilities: Option<String>,
}

impl EditForm {
    /// Pre-fill every input from the current record.
    pub fn from_record(record: &Record) -> Self {
        Self {
            height: Some(record.height.map(|h| h.to_string()).unwrap_or_default()),
            weight: Some(record.weight.map(|w| w.to_string()).unwrap_or_default()),
            types: Some(record.type_names().join(", ")),
            abilities: Some(record.ability_names().join(", ")),
        }
    }

    /// Build the patch to apply over `current`.
    pub fn to_patch(&self, current: &Record) -> DetailPatch {
        let height = self.height.as_deref().and_then(parse_leading_u32);
        let weight = self.weight.as_deref().and_then(parse_leading_u32);

        let types: Option<Vec<RecordType>> = self
            .types
            .as_deref()
            .map(split_names)
            .filter(|names| !names.is_empty())
            .map(|names| names.into_iter().map(RecordType::new).collect());

        let abilities: Option<Vec<RecordAbility>> = self
            .abilities
            .as_deref()
            .map(split_names)
            .filter(|names| !names.is_empty())
            .map(|names| {
                names
                    .into_iter()
                    .enumerate()
                    .map(|(i, name)| RecordAbility::new(name, i > 0))
                    .collect()
            });

        DetailPatch {
            height: height.or(current.height),
            weight: weight.or(current.weight),
            types: types.or_else(|| current.types.clone()),
            abilities: abilities.or_else(|| current.abilities.clone()),
            sprite: current.sprite.clone(),
        }
    }
}

/// Parse the leading decimal digits of `input`, ignoring surrounding space.
///
/// `"12cm"` parses as 12; `"abc"`, `""` and overflowing input give `None`.
pub fn parse_leading_u32(input: &str) -> Option<u32> {
    let trimmed = input.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
pub fn split_names(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current() -> Record {
        Record {
            height: Some(7),
            weight: Some(69),
            types: Some(vec![RecordType::new("grass"), RecordType::new("poison")]),
            abilities: Some(vec![RecordAbility::new("overgrow", false)]),
            sprite: Some("front.png".to_string()),
            ..Record::summary(1, "bulbasaur", "u")
        }
    }

    #[test]
    fn test_parse_leading_u32() {
        assert_eq!(parse_leading_u32("12"), Some(12));
        assert_eq!(parse_leading_u32("  12cm"), Some(12));
        assert_eq!(parse_leading_u32("abc"), None);
        assert_eq!(parse_leading_u32(""), None);
        assert_eq!(parse_leading_u32("-3"), None);
        assert_eq!(parse_leading_u32("99999999999"), None);
    }

    #[test]
    fn test_split_names() {
        assert_eq!(split_names(" fire ,flying,, "), vec!["fire", "flying"]);
        assert!(split_names(" , ").is_empty());
    }

    #[test]
    fn test_prefilled_form_round_trips_to_same_values() {
        let record = current();
        let patch = EditForm::from_record(&record).to_patch(&record);

        let mut edited = record.clone();
        edited.apply_patch(&patch);
        assert_eq!(edited, record);
    }

    #[test]
    fn test_types_only_submission() {
        let form = EditForm {
            types: Some("fire, flying".to_string()),
            ..Default::default()
        };

        let patch = form.to_patch(&current());

        assert_eq!(
            patch.types,
            Some(vec![RecordType::new("fire"), RecordType::new("flying")])
        );
        assert_eq!(patch.height, Some(7));
        assert_eq!(patch.weight, Some(69));
        assert_eq!(patch.abilities, current().abilities);
    }

    #[test]
    fn test_unparsable_number_falls_back_to_previous() {
        let form = EditForm {
            height: Some("tall".to_string()),
            weight: Some("120".to_string()),
            ..Default::default()
        };

        let patch = form.to_patch(&current());

        assert_eq!(patch.height, Some(7));
        assert_eq!(patch.weight, Some(120));
    }

    #[test]
    fn test_blank_lists_keep_previous() {
        let form = EditForm {
            types: Some("  ".to_string()),
            abilities: Some(String::new()),
            ..Default::default()
        };

        let patch = form.to_patch(&current());

        assert_eq!(patch.types, current().types);
        assert_eq!(patch.abilities, current().abilities);
    }

    #[test]
    fn test_later_abilities_are_hidden() {
        let form = EditForm {
            abilities: Some("blaze, solar-power".to_string()),
            ..Default::default()
        };

        let abilities = form.to_patch(&current()).abilities.unwrap();

        assert_eq!(
            abilities,
            vec![
                RecordAbility::new("blaze", false),
                RecordAbility::new("solar-power", true),
            ]
        );
    }
}
