use serde::{Deserialize, Deserializer};

/// A page of search results.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct SearchResult<T> {
    pub items: Vec<T>,
    /// Total number of matching items
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: usize,
    /// One based page number
    #[serde(default = "first_page", deserialize_with = "null_as_first_page")]
    pub page: usize,
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: usize,
    /// Total number of pages
    #[serde(default, deserialize_with = "null_as_default")]
    pub pages: usize,
}

fn first_page() -> usize {
    1
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_first_page<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<usize>::deserialize(deserializer)?.unwrap_or_else(first_page))
}
