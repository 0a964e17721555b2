use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// One click record from `last_clicks`, kept as raw JSON since any key may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawClick(Value);

impl RawClick {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn is_object(&self) -> bool {
        self.0.is_object()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.as_object().and_then(|map| map.get(key))
    }

    /// Scalar value of `key` as text. `null`, arrays and objects read as absent.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn non_empty_text(&self, key: &str) -> Option<String> {
        self.text(key).filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayClick {
    pub link: String,
    pub date: String,
    pub time: String,
    pub path: String,
    pub city: String,
}

impl DisplayClick {
    pub fn sort_key(&self) -> String {
        if self.date.is_empty() || self.time.is_empty() {
            String::new()
        } else {
            format!("{} {}", self.date, self.time)
        }
    }

    pub fn fields(&self) -> [&str; 5] {
        [&self.link, &self.date, &self.time, &self.path, &self.city]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Timezone {
    #[default]
    #[serde(rename = "UTC")]
    Utc,
    #[serde(rename = "Asia/Seoul")]
    AsiaSeoul,
}

impl Timezone {
    pub fn as_str(self) -> &'static str {
        match self {
            Timezone::Utc => "UTC",
            Timezone::AsiaSeoul => "Asia/Seoul",
        }
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported timezone '{0}', expected 'UTC' or 'Asia/Seoul'")]
pub struct UnknownTimezone(pub String);

impl FromStr for Timezone {
    type Err = UnknownTimezone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "UTC" => Ok(Timezone::Utc),
            "Asia/Seoul" => Ok(Timezone::AsiaSeoul),
            other => Err(UnknownTimezone(other.to_string())),
        }
    }
}

impl TryFrom<String> for Timezone {
    type Error = UnknownTimezone;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Deserialize)]
pub struct ClicksQuery {
    #[serde(default)]
    pub tz: Timezone,
    pub limit: Option<u32>,
    pub use_api: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClicksResponse {
    pub success: bool,
    pub data: Vec<DisplayClick>,
    pub count: usize,
    pub timezone: Timezone,
    pub status: String,
    pub fallback: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickSummary {
    pub total: usize,
    pub with_city: usize,
    pub with_path: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    #[serde(flatten)]
    pub summary: ClickSummary,
    pub timezone: Timezone,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_reads_scalars_and_skips_null() {
        let click = RawClick::new(json!({
            "url": "https://app.short.cm/login",
            "st": 302,
            "human": true,
            "ab_path": null,
            "tags": ["a"],
        }));

        assert_eq!(click.text("url").as_deref(), Some("https://app.short.cm/login"));
        assert_eq!(click.text("st").as_deref(), Some("302"));
        assert_eq!(click.text("human").as_deref(), Some("true"));
        assert_eq!(click.text("ab_path"), None);
        assert_eq!(click.text("tags"), None);
        assert_eq!(click.text("missing"), None);
    }

    #[test]
    fn accessors_tolerate_non_object_records() {
        let click = RawClick::new(json!("not a record"));
        assert!(!click.is_object());
        assert_eq!(click.get("url"), None);
        assert_eq!(click.text("url"), None);
    }

    #[test]
    fn timezone_parses_and_serializes_selector_names() {
        assert_eq!("UTC".parse::<Timezone>().unwrap(), Timezone::Utc);
        assert_eq!("Asia/Seoul".parse::<Timezone>().unwrap(), Timezone::AsiaSeoul);
        assert!("Europe/Rome".parse::<Timezone>().is_err());
        assert_eq!(serde_json::to_value(Timezone::AsiaSeoul).unwrap(), json!("Asia/Seoul"));
    }

    #[test]
    fn timezone_deserialization_reports_unknown_selector() {
        let tz: Timezone = serde_json::from_value(json!("Asia/Seoul")).unwrap();
        assert_eq!(tz, Timezone::AsiaSeoul);

        let err = serde_json::from_value::<Timezone>(json!("Mars/Olympus")).unwrap_err();
        assert!(err.to_string().contains("unsupported timezone 'Mars/Olympus'"), "{err}");
    }

    #[test]
    fn display_click_serializes_exactly_five_fields() {
        let value = serde_json::to_value(DisplayClick::default()).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 5);
        for key in ["link", "date", "time", "path", "city"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn sort_key_is_empty_without_full_timestamp() {
        let mut click = DisplayClick {
            date: "2020-05-20".into(),
            ..Default::default()
        };
        assert_eq!(click.sort_key(), "");
        click.time = "06:19:12".into();
        assert_eq!(click.sort_key(), "2020-05-20 06:19:12");
    }
}
