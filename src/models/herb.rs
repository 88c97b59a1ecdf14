//! Herb record model representing one entry of the herbal-medicine catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A herb in the catalog.
///
/// `name` is the primary key. Every other field is optional free text and may be
/// absent. The serde aliases accept the column names of the original herb table
/// so a raw table export loads without conversion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct HerbRecord {
    /// Unique, non-empty herb name
    #[serde(alias = "药名")]
    pub name: String,

    /// Alternate names, stored as unstructured text
    #[serde(alias = "别名")]
    pub alias: Option<String>,

    #[serde(alias = "性味")]
    pub taste: Option<String>,

    #[serde(alias = "归经")]
    pub meridian: Option<String>,

    #[serde(alias = "功效")]
    pub effect: Option<String>,

    #[serde(alias = "主治")]
    pub indication: Option<String>,

    #[serde(alias = "用法用量")]
    pub usage: Option<String>,

    #[serde(alias = "用药禁忌")]
    pub contraindication: Option<String>,

    #[serde(alias = "功效分类")]
    pub effect_class: Option<String>,

    #[serde(alias = "药理作用")]
    pub pharmacology: Option<String>,

    #[serde(alias = "中药化学成分")]
    pub chemistry: Option<String>,

    #[serde(alias = "选方")]
    pub prescription: Option<String>,

    #[serde(alias = "各家论述")]
    pub theory: Option<String>,

    #[serde(alias = "考证")]
    pub research: Option<String>,

    #[serde(alias = "科属分类")]
    pub taxonomy: Option<String>,

    #[serde(alias = "采收和储藏")]
    pub collection: Option<String>,

    #[serde(alias = "资源分布")]
    pub distribution: Option<String>,

    #[serde(alias = "动植物形态")]
    pub morphology: Option<String>,

    #[serde(alias = "生药材鉴定")]
    pub identification: Option<String>,

    #[serde(alias = "药用植物栽培")]
    pub cultivation: Option<String>,

    #[serde(alias = "药材基源")]
    pub source: Option<String>,

    #[serde(alias = "生态环境")]
    pub environment: Option<String>,
}

impl HerbRecord {
    /// Create a record with only a name set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Read one of the searchable fields.
    ///
    /// Returns `None` when the field is absent. `name` is always present.
    pub fn field(&self, field: HerbField) -> Option<&str> {
        match field {
            HerbField::Name => Some(self.name.as_str()),
            HerbField::Alias => self.alias.as_deref(),
            HerbField::Effect => self.effect.as_deref(),
            HerbField::Indication => self.indication.as_deref(),
            HerbField::EffectClass => self.effect_class.as_deref(),
            HerbField::Taste => self.taste.as_deref(),
            HerbField::Meridian => self.meridian.as_deref(),
        }
    }
}

/// Fields that take part in keyword matching or category browsing.
///
/// The informational fields (`usage`, `pharmacology`, ...) are carried through
/// to output but never searched, so they have no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HerbField {
    Name,
    Alias,
    Effect,
    Indication,
    EffectClass,
    Taste,
    Meridian,
}

impl HerbField {
    /// Stable field name, matching the serialized record key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Alias => "alias",
            Self::Effect => "effect",
            Self::Indication => "indication",
            Self::EffectClass => "effect_class",
            Self::Taste => "taste",
            Self::Meridian => "meridian",
        }
    }
}

impl fmt::Display for HerbField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
