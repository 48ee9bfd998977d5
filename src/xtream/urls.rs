use crate::session::Credentials;
use crate::xtream::models::{ContentItem, Section};

pub const DEFAULT_VOD_EXTENSION: &str = "mp4";

/// Playback URL for an item, or `None` for series (those need an episode).
pub fn stream_url(creds: &Credentials, section: Section, item: &ContentItem) -> Option<String> {
    let base = creds.base_url();
    let (user, pass) = (&creds.username, &creds.password);
    match section {
        Section::Live => Some(format!("{base}/live/{user}/{pass}/{}.m3u8", item.id)),
        Section::Movie => {
            let ext = item.extension.as_deref().unwrap_or(DEFAULT_VOD_EXTENSION);
            Some(format!("{base}/movie/{user}/{pass}/{}.{ext}", item.id))
        }
        Section::Series => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, ext: Option<&str>) -> ContentItem {
        ContentItem {
            id,
            name: Some("x".into()),
            icon: None,
            extension: ext.map(str::to_string),
            category_id: None,
        }
    }

    #[test]
    fn test_live_url_is_manifest() {
        let creds = Credentials::new("http://srv:80", "u", "p");
        assert_eq!(
            stream_url(&creds, Section::Live, &item(42, None)).as_deref(),
            Some("http://srv:80/live/u/p/42.m3u8")
        );
    }

    #[test]
    fn test_movie_url_uses_extension_or_default() {
        let creds = Credentials::new("http://srv:80/", "u", "p");
        assert_eq!(
            stream_url(&creds, Section::Movie, &item(7, Some("mkv"))).as_deref(),
            Some("http://srv:80/movie/u/p/7.mkv")
        );
        assert_eq!(
            stream_url(&creds, Section::Movie, &item(7, None)).as_deref(),
            Some("http://srv:80/movie/u/p/7.mp4")
        );
    }

    #[test]
    fn test_series_has_no_direct_url() {
        let creds = Credentials::new("http://srv", "u", "p");
        assert!(stream_url(&creds, Section::Series, &item(1, None)).is_none());
    }
}
