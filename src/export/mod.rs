use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::de::{Deserialize as DeserializeTrait, Deserializer, Error};
use serde::Serializer;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::catalog::CATALOG_VERSION;

pub const EXPORT_VERSION: &str = "1.0";

pub const ANALYSIS_RECORD: &str = "nutrigene.analysis";
pub const RECOMMENDATIONS_RECORD: &str = "nutrigene.recommendations";
pub const RADAR_RECORD: &str = "nutrigene.radar";
pub const MEAL_PLAN_RECORD: &str = "nutrigene.meal_plan";

/// Root structure for all exports: a typed, timestamped wrapper around one result.
#[derive(Debug, Serialize, Deserialize)]
pub struct Export<T> {
    #[serde(rename = "$type")]
    pub record_type: String,

    pub version: String,
    #[serde(serialize_with = "serialize_datetime", deserialize_with = "deserialize_datetime")]
    pub created_at: DateTime<Utc>,
    pub tool_version: String,
    pub catalog_version: String,

    pub data: T,
}

fn serialize_datetime<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.to_rfc3339())
}

fn deserialize_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(D::Error::custom)
}

impl<T: Serialize> Export<T> {
    pub fn new(record_type: &str, data: T) -> Self {
        Self {
            record_type: record_type.to_string(),
            version: EXPORT_VERSION.to_string(),
            created_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            catalog_version: CATALOG_VERSION.to_string(),
            data,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radar::{score, RadarChart, RadarWeights};

    #[test]
    fn envelope_round_trips_timestamp() {
        let export = Export::new(RADAR_RECORD, score(&[], &RadarWeights::default()));
        let text = export.to_json().unwrap();
        assert!(text.contains("\"$type\": \"nutrigene.radar\""));

        let back: Export<RadarChart> = serde_json::from_str(&text).unwrap();
        assert_eq!(back.created_at.timestamp(), export.created_at.timestamp());
        assert_eq!(back.catalog_version, CATALOG_VERSION);
        assert!(back.data.categories.is_empty());
    }

    #[test]
    fn writes_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("radar.json");
        Export::new(RADAR_RECORD, score(&[], &RadarWeights::default()))
            .write_to(&path)
            .unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("}\n"));
    }
}
