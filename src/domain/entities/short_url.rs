//! Short URL entity: the persisted mapping from identifier to original URL.

/// A stored short URL record.
///
/// `id` is the primary key. `redirect_count` starts at zero and only ever
/// grows through [`crate::domain::repositories::ShortUrlRepository::increment_and_fetch`].
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ShortUrl {
    pub id: String,
    pub url: String,
    pub redirect_count: i64,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(id: String, url: String, redirect_count: i64) -> Self {
        Self {
            id,
            url,
            redirect_count,
        }
    }
}

/// Input data for creating a new short URL.
///
/// Stores always persist it with a redirect count of zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortUrl {
    pub id: String,
    pub url: String,
}

impl From<NewShortUrl> for ShortUrl {
    fn from(new: NewShortUrl) -> Self {
        ShortUrl::new(new.id, new.url, 0)
    }
}
