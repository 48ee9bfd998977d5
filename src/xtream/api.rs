use crate::config::XtreamConfig;
use crate::session::Credentials;
use crate::xtream::Catalog;
use crate::xtream::models::{AuthResponse, Category, ContentItem, RawCategory, RawItem, Section, UserInfo};
use anyhow::Context;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug)]
struct Inner {
    http: reqwest::Client,
    credentials: Credentials,
}

/// Client for the `player_api.php` endpoint of an Xtream-Codes server.
#[derive(Debug, Clone)]
pub struct XtreamClient {
    inner: Arc<Inner>,
}

impl XtreamClient {
    pub fn new(credentials: Credentials, cfg: &XtreamConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&cfg.user_agent).context("invalid user agent")?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(cfg.timeout_secs.max(1)))
            .build()
            .context("build reqwest client")?;

        Ok(Self {
            inner: Arc::new(Inner { http, credentials }),
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    fn endpoint(&self) -> String {
        format!("{}/player_api.php", self.inner.credentials.base_url())
    }

    /// Authentication call (no `action`). The caller decides what `auth == 0` means.
    pub async fn authenticate(&self) -> anyhow::Result<UserInfo> {
        let v = self.get_json(None, None).await.context("authenticate")?;
        let resp: AuthResponse =
            serde_json::from_value(v).context("parse authentication response")?;
        resp.user_info.context("authentication response has no user_info")
    }

    async fn get_json(&self, action: Option<&str>, category_id: Option<&str>) -> anyhow::Result<Value> {
        let creds = &self.inner.credentials;
        let mut params: Vec<(&str, &str)> = vec![
            ("username", creds.username.as_str()),
            ("password", creds.password.as_str()),
        ];
        if let Some(action) = action {
            params.push(("action", action));
        }
        if let Some(id) = category_id {
            params.push(("category_id", id));
        }

        tracing::debug!(action = action.unwrap_or("auth"), category = category_id, "xtream request");

        let v: Value = self
            .inner
            .http
            .get(self.endpoint())
            .query(&params)
            .send()
            .await
            .context("send xtream request")?
            .error_for_status()
            .context("xtream http status")?
            .json()
            .await
            .context("parse xtream json")?;
        Ok(v)
    }
}

impl Catalog for XtreamClient {
    async fn list_categories(&self, section: Section) -> anyhow::Result<Vec<Category>> {
        let v = self
            .get_json(Some(section.categories_action()), None)
            .await
            .with_context(|| format!("list {section} categories"))?;
        Ok(extract_categories(v))
    }

    async fn list_items(&self, section: Section, category_id: Option<&str>) -> anyhow::Result<Vec<ContentItem>> {
        let v = self
            .get_json(Some(section.items_action()), category_id)
            .await
            .with_context(|| format!("list {section} items"))?;
        Ok(extract_items(v, section))
    }
}

/// Servers answer an empty listing with `[]`, `{}` or `null`; anything but an
/// array is treated as empty.
pub(crate) fn extract_categories(v: Value) -> Vec<Category> {
    let Value::Array(arr) = v else {
        return Vec::new();
    };
    arr.into_iter()
        .filter_map(|entry| match serde_json::from_value::<RawCategory>(entry) {
            Ok(raw) => raw.into_category(),
            Err(e) => {
                tracing::warn!("skipping malformed category: {e}");
                None
            }
        })
        .collect()
}

pub(crate) fn extract_items(v: Value, section: Section) -> Vec<ContentItem> {
    let Value::Array(arr) = v else {
        return Vec::new();
    };
    let total = arr.len();
    let items: Vec<ContentItem> = arr
        .into_iter()
        .filter_map(|entry| {
            serde_json::from_value::<RawItem>(entry)
                .ok()
                .and_then(|raw| raw.into_item(section))
        })
        .collect();
    if items.len() < total {
        tracing::warn!(
            section = section.as_str(),
            skipped = total - items.len(),
            "skipped items without a usable id"
        );
    }
    items
}
