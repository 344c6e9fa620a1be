//! Plant Record
//!
//! One entry of the externally supplied plant dataset. Read-only to the core.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::lenient;
use super::stage::GrowthStage;

/// Set of month indices (0 = January .. 11 = December)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct MonthSet(u16);

impl MonthSet {
    pub const ALL: MonthSet = MonthSet(0x0FFF);

    pub fn empty() -> Self {
        Self(0)
    }

    /// Out-of-range indices are ignored
    pub fn insert(&mut self, month0: u32) {
        if month0 < 12 {
            self.0 |= 1 << month0;
        }
    }

    pub fn contains(&self, month0: u32) -> bool {
        month0 < 12 && self.0 & (1 << month0) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        (0..12).filter(move |m| self.contains(*m))
    }
}

impl FromIterator<u32> for MonthSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut set = MonthSet::empty();
        for month0 in iter {
            set.insert(month0);
        }
        set
    }
}

impl Serialize for MonthSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for MonthSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let set = match value {
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_u64)
                .filter_map(|m| u32::try_from(m).ok())
                .collect(),
            _ => MonthSet::empty(),
        };
        Ok(set)
    }
}

/// A past care event (`history` entries of a plant)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CareEvent {
    #[serde(default, deserialize_with = "lenient::required_text")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient::required_text")]
    pub event: String,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Plant record (camelCase JSON, every field optional on input)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantRecord {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::required_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub light: Option<String>,
    /// Days between waterings, 1 = daily, 0 = not scheduled
    #[serde(default, deserialize_with = "lenient::frequency")]
    pub water_freq: u32,
    #[serde(default)]
    pub feed_months: MonthSet,
    #[serde(default, deserialize_with = "lenient::text")]
    pub feed_note: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub feed_short: Option<String>,
    #[serde(default)]
    pub prune_months: MonthSet,
    #[serde(default)]
    pub repot_months: MonthSet,
    #[serde(default, deserialize_with = "lenient::text")]
    pub repot_note: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub warning: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub stage: Option<String>,
    #[serde(default, deserialize_with = "history_list")]
    pub history: Vec<CareEvent>,
}

impl PlantRecord {
    pub fn new(id: &str, name: &str, water_freq: u32) -> Self {
        Self {
            id: Some(id.to_string()),
            name: name.to_string(),
            water_freq,
            ..Default::default()
        }
    }

    /// Store key: `id`, falling back to `name`
    pub fn key(&self) -> &str {
        match self.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id,
            _ => &self.name,
        }
    }

    /// Short feed advice, preferring `feedShort` over `feedNote`
    pub fn feed_text(&self) -> Option<&str> {
        non_blank(self.feed_short.as_deref()).or_else(|| non_blank(self.feed_note.as_deref()))
    }

    pub fn warning_text(&self) -> Option<&str> {
        non_blank(self.warning.as_deref())
    }

    pub fn repot_text(&self) -> Option<&str> {
        non_blank(self.repot_note.as_deref())
    }

    pub fn growth_stage(&self) -> Option<GrowthStage> {
        self.stage.as_deref().and_then(GrowthStage::from_label)
    }

    /// Last embedded history entry, if any
    pub fn last_event(&self) -> Option<&CareEvent> {
        self.history.last()
    }

    pub fn is_scheduled(&self) -> bool {
        self.water_freq >= 1
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}

fn history_list<'de, D>(deserializer: D) -> Result<Vec<CareEvent>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let events = match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    };
    Ok(events)
}
