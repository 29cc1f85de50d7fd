//! Catalog record domain types.
//!
//! A [`Record`] starts life as a summary (`id`, `name`, `url`) and gains its
//! detail fields once they are fetched, synthesized or edited. Detail fields
//! are individually optional so that a shallow merge can tell "absent" apart
//! from "present".

use serde::{Deserialize, Serialize};

/// A single elemental type entry (e.g. `grass`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordType {
    pub name: String,
}

impl RecordType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A single ability entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordAbility {
    pub name: String,
    /// Hidden abilities are only available through special means.
    #[serde(default)]
    pub is_hidden: bool,
}

impl RecordAbility {
    pub fn new(name: impl Into<String>, is_hidden: bool) -> Self {
        Self {
            name: name.into(),
            is_hidden,
        }
    }
}

/// A catalog record, summary plus optional detail extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier, fixed at creation.
    pub id: i64,
    pub name: String,
    /// Reference to the per-record detail endpoint.
    pub url: String,
    /// Height in decimetres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Weight in hectograms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<RecordType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abilities: Option<Vec<RecordAbility>>,
    /// Image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite: Option<String>,
}

impl Record {
    /// Create a summary record with no detail fields.
    pub fn summary(id: i64, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            url: url.into(),
            height: None,
            weight: None,
            types: None,
            abilities: None,
            sprite: None,
        }
    }

    /// Whether detail fields have been populated.
    ///
    /// `height` is the marker: a record with a height is never re-fetched.
    pub const fn is_detail_complete(&self) -> bool {
        self.height.is_some()
    }

    /// Shallow-merge `other` into `self`.
    ///
    /// `name` and `url` are always taken from `other`. Detail fields are only
    /// overridden when `other` carries them. The id is never touched.
    pub fn merge_from(&mut self, other: &Self) {
        self.name.clone_from(&other.name);
        self.url.clone_from(&other.url);
        if other.height.is_some() {
            self.height = other.height;
        }
        if other.weight.is_some() {
            self.weight = other.weight;
        }
        if other.types.is_some() {
            self.types.clone_from(&other.types);
        }
        if other.abilities.is_some() {
            self.abilities.clone_from(&other.abilities);
        }
        if other.sprite.is_some() {
            self.sprite.clone_from(&other.sprite);
        }
    }

    /// Merge a fetched detail payload over this summary.
    ///
    /// Fetched fields win over summary duplicates, except for the id.
    #[must_use]
    pub fn with_details(&self, details: &RecordDetails) -> Self {
        Self {
            id: self.id,
            name: details.name.clone(),
            url: self.url.clone(),
            height: Some(details.height),
            weight: Some(details.weight),
            types: Some(details.types.clone()),
            abilities: Some(details.abilities.clone()),
            sprite: details.sprite.clone().or_else(|| self.sprite.clone()),
        }
    }

    /// Apply a partial edit. Fields the patch omits are preserved.
    pub fn apply_patch(&mut self, patch: &DetailPatch) {
        if let Some(height) = patch.height {
            self.height = Some(height);
        }
        if let Some(weight) = patch.weight {
            self.weight = Some(weight);
        }
        if let Some(ref types) = patch.types {
            self.types = Some(types.clone());
        }
        if let Some(ref abilities) = patch.abilities {
            self.abilities = Some(abilities.clone());
        }
        if let Some(ref sprite) = patch.sprite {
            self.sprite = Some(sprite.clone());
        }
    }

    /// Type names in declared order.
    pub fn type_names(&self) -> Vec<&str> {
        self.types
            .iter()
            .flatten()
            .map(|t| t.name.as_str())
            .collect()
    }

    /// Ability names in declared order.
    pub fn ability_names(&self) -> Vec<&str> {
        self.abilities
            .iter()
            .flatten()
            .map(|a| a.name.as_str())
            .collect()
    }
}

/// A full detail payload as returned by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDetails {
    pub id: i64,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub types: Vec<RecordType>,
    pub abilities: Vec<RecordAbility>,
    pub sprite: Option<String>,
}

/// Partial detail update produced by an edit.
///
/// `None` means "keep the current value".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailPatch {
    pub height: Option<u32>,
    pub weight: Option<u32>,
    pub types: Option<Vec<RecordType>>,
    pub abilities: Option<Vec<RecordAbility>>,
    pub sprite: Option<String>,
}

impl DetailPatch {
    #[must_use]
    pub const fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub const fn with_weight(mut self, weight: u32) -> Self {
        self.weight = Some(weight);
        self
    }

    #[must_use]
    pub fn with_types<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = Some(names.into_iter().map(RecordType::new).collect());
        self
    }

    /// Whether applying this patch would change nothing.
    pub const fn is_empty(&self) -> bool {
        self.height.is_none()
            && self.weight.is_none()
            && self.types.is_none()
            && self.abilities.is_none()
            && self.sprite.is_none()
    }
}
