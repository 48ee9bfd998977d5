use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Top-level content section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Live,
    Movie,
    Series,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Live, Section::Movie, Section::Series];

    /// Key used in the favorites document and in the config file.
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Live => "live",
            Section::Movie => "movie",
            Section::Series => "series",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Live => "Live TV",
            Section::Movie => "Movies",
            Section::Series => "Series",
        }
    }

    pub fn categories_action(self) -> &'static str {
        match self {
            Section::Live => "get_live_categories",
            Section::Movie => "get_vod_categories",
            Section::Series => "get_series_categories",
        }
    }

    pub fn items_action(self) -> &'static str {
        match self {
            Section::Live => "get_live_streams",
            Section::Movie => "get_vod_streams",
            Section::Series => "get_series",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Section::Live => Section::Movie,
            Section::Movie => Section::Series,
            Section::Series => Section::Live,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Section::Live => Section::Series,
            Section::Movie => Section::Live,
            Section::Series => Section::Movie,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(Section::Live),
            "movie" | "movies" | "vod" => Ok(Section::Movie),
            "series" => Ok(Section::Series),
            other => anyhow::bail!("unknown section: {other} (expected live, movie or series)"),
        }
    }
}

/// Backend-provided category. The id is opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// One channel, movie or series in a section listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// `stream_id` for live/movie, `series_id` for series.
    pub id: u64,
    pub name: Option<String>,
    pub icon: Option<String>,
    pub extension: Option<String>,
    pub category_id: Option<String>,
}

impl ContentItem {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

/// Account attributes returned by the authentication call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserInfo {
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub auth: bool,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub exp_date: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub max_connections: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub active_cons: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AuthResponse {
    #[serde(default)]
    pub user_info: Option<UserInfo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCategory {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    category_id: Option<String>,
    #[serde(default)]
    category_name: Option<String>,
}

impl RawCategory {
    pub(crate) fn into_category(self) -> Option<Category> {
        let id = self.category_id.filter(|s| !s.is_empty())?;
        let name = self
            .category_name
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| id.clone());
        Some(Category { id, name })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawItem {
    #[serde(default, deserialize_with = "deserialize_optional_u64")]
    stream_id: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_optional_u64")]
    series_id: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    name: Option<String>,
    #[serde(default)]
    stream_icon: Option<String>,
    #[serde(default)]
    cover: Option<String>,
    #[serde(default)]
    container_extension: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    category_id: Option<String>,
}

impl RawItem {
    pub(crate) fn into_item(self, section: Section) -> Option<ContentItem> {
        let id = match section {
            Section::Series => self.series_id.or(self.stream_id),
            Section::Live | Section::Movie => self.stream_id.or(self.series_id),
        }?;
        let non_empty = |s: Option<String>| s.filter(|v| !v.trim().is_empty());
        Some(ContentItem {
            id,
            name: self.name,
            icon: non_empty(self.stream_icon).or_else(|| non_empty(self.cover)),
            extension: non_empty(self.container_extension),
            category_id: non_empty(self.category_id),
        })
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Value = Deserialize::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_i64().unwrap_or(0) != 0,
        Value::String(s) => !matches!(s.trim(), "" | "0" | "false"),
        _ => false,
    })
}

fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Value = Deserialize::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn deserialize_optional_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Value = Deserialize::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Value = Deserialize::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_section_parse() {
        assert_eq!("live".parse::<Section>().unwrap(), Section::Live);
        assert_eq!("VOD".parse::<Section>().unwrap(), Section::Movie);
        assert_eq!("series".parse::<Section>().unwrap(), Section::Series);
        assert!("radio".parse::<Section>().is_err());
    }

    #[test]
    fn test_user_info_auth_shapes() {
        let a: AuthResponse = serde_json::from_value(json!({"user_info": {"auth": 0}})).unwrap();
        assert!(!a.user_info.unwrap().auth);
        let b: AuthResponse =
            serde_json::from_value(json!({"user_info": {"auth": "1", "exp_date": "1735689600"}}))
                .unwrap();
        let info = b.user_info.unwrap();
        assert!(info.auth);
        assert_eq!(info.exp_date, Some(1_735_689_600));
    }

    #[test]
    fn test_raw_item_ids_follow_section() {
        let raw: RawItem = serde_json::from_value(json!({
            "series_id": 9, "name": "Show", "cover": "http://img/9.png", "category_id": 4
        }))
        .unwrap();
        let item = raw.into_item(Section::Series).unwrap();
        assert_eq!(item.id, 9);
        assert_eq!(item.icon.as_deref(), Some("http://img/9.png"));
        assert_eq!(item.category_id.as_deref(), Some("4"));
    }

    #[test]
    fn test_raw_item_empty_icon_is_absent() {
        let raw: RawItem = serde_json::from_value(json!({
            "stream_id": "12", "name": null, "stream_icon": ""
        }))
        .unwrap();
        let item = raw.into_item(Section::Live).unwrap();
        assert_eq!(item.id, 12);
        assert!(item.icon.is_none());
        assert!(item.name().is_none());
    }

    #[test]
    fn test_raw_item_without_id_is_skipped() {
        let raw: RawItem = serde_json::from_value(json!({"name": "orphan"})).unwrap();
        assert!(raw.into_item(Section::Movie).is_none());
    }
}
