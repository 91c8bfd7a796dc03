use serde::Deserialize;

/// One feed entry, normalized away from the wire format. Immutable once
/// decoded; the presenter replaces whole lists rather than editing entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    /// ISO-8601 timestamp exactly as the server sent it. Kept opaque: the UI
    /// may truncate it for column width but never parses it.
    pub created_at: String,
    pub author: Author,
}

/// Display name and avatar URL attached to an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    /// May be empty or not a valid URL; only ever shown as text.
    pub avatar_url: String,
}

/// Qiita `/api/v2/items` response entry. The endpoint returns a top-level
/// JSON array of these; fields we don't display are ignored on decode.
#[derive(Debug, Deserialize)]
pub struct QiitaItem {
    pub title: String,
    pub created_at: String,
    pub user: QiitaUser,
}

#[derive(Debug, Deserialize)]
pub struct QiitaUser {
    pub name: String,
    pub profile_image_url: String,
}

impl From<QiitaItem> for Article {
    fn from(item: QiitaItem) -> Self {
        Self {
            title: item.title,
            created_at: item.created_at,
            author: Author {
                name: item.user.name,
                avatar_url: item.user.profile_image_url,
            },
        }
    }
}
