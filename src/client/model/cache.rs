use crate::client::model::error::ApiError;

/// Lifecycle of one fetched slice of page state.
///
/// Keeps "still loading", "loaded but empty" and "failed" apart so each can be
/// rendered differently.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Cache<T> {
    #[default]
    NotFetched,
    Loading,
    Fetched(T),
    Error(ApiError),
}

impl<T> Cache<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Cache::Fetched(data),
            Err(error) => Cache::Error(error),
        }
    }

    /// True only once data has arrived, as for [`KeyedCache::is_fetched`].
    pub fn is_fetched(&self) -> bool {
        matches!(self, Cache::Fetched(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Cache::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Cache::Fetched(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Cache::Error(error) => Some(error),
            _ => None,
        }
    }
}

/// Like [`Cache`], but remembers which key the data belongs to.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum KeyedCache<K, T> {
    #[default]
    NotFetched,
    Loading {
        key: K,
    },
    Fetched {
        key: K,
        data: T,
    },
    Error {
        key: K,
        error: ApiError,
    },
}

impl<K, T> KeyedCache<K, T> {
    pub fn key(&self) -> Option<&K> {
        match self {
            KeyedCache::Loading { key }
            | KeyedCache::Fetched { key, .. }
            | KeyedCache::Error { key, .. } => Some(key),
            KeyedCache::NotFetched => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            KeyedCache::Fetched { data, .. } => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            KeyedCache::Error { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn is_fetched(&self) -> bool {
        matches!(self, KeyedCache::Fetched { .. })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, KeyedCache::Loading { .. })
    }
}

/// Identifies one issued request. Only the most recently issued token is current.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Monotonic source of [`RequestToken`]s for one page slice.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    /// Makes every outstanding token stale without issuing a new one.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}
