//! Query parameter types for the catalog endpoints.
//!
//! Names follow the snake_case convention of the API; the camelCase names
//! older clients send are accepted as aliases. Empty values (`?asc=`,
//! `?release_year=`) read as the field default.

use std::fmt::Display;
use std::str::FromStr;

use cinedex_core::filter::MovieFilter;
use cinedex_core::sort::SortRequest;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};

/// Parse a query value, treating an absent or blank value as `T::default()`.
fn blank_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => raw.trim().parse().map_err(DeError::custom),
        _ => Ok(T::default()),
    }
}

/// `?category=&genre=&release_year=`. Absent, blank or non-positive values
/// do not filter.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    pub category: Option<String>,
    pub genre: Option<String>,
    #[serde(default, alias = "releaseYear", deserialize_with = "blank_as_default")]
    pub release_year: i32,
}

impl FilterParams {
    pub fn to_filter(&self) -> MovieFilter {
        MovieFilter::new(
            self.category.as_deref(),
            self.genre.as_deref(),
            self.release_year,
        )
    }
}

/// `?date_of_release=&alphabetic=&asc=`. Every flag defaults to `false`.
#[derive(Debug, Default, Deserialize)]
pub struct SortParams {
    #[serde(default, alias = "dateOfRelease", deserialize_with = "blank_as_default")]
    pub date_of_release: bool,
    #[serde(default, deserialize_with = "blank_as_default")]
    pub alphabetic: bool,
    #[serde(default, deserialize_with = "blank_as_default")]
    pub asc: bool,
}

impl From<SortParams> for SortRequest {
    fn from(params: SortParams) -> Self {
        SortRequest::new(params.date_of_release, params.alphabetic, params.asc)
    }
}

/// `?q=`. A missing query searches for nothing.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default, alias = "text")]
    pub q: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;

    fn parse<T: serde::de::DeserializeOwned>(uri: &'static str) -> T {
        Query::<T>::try_from_uri(&Uri::from_static(uri)).unwrap().0
    }

    #[test]
    fn blank_year_is_unset() {
        let params: FilterParams = parse("/filter?category=Film&genre=&release_year=");
        assert_eq!(params.release_year, 0);
        assert_eq!(params.to_filter(), MovieFilter::new(Some("Film"), None, 0));
    }

    #[test]
    fn year_is_parsed_from_either_name() {
        assert_eq!(parse::<FilterParams>("/filter?release_year=2001").release_year, 2001);
        assert_eq!(parse::<FilterParams>("/filter?releaseYear=1999").release_year, 1999);
    }

    #[test]
    fn blank_flags_are_false() {
        let params: SortParams = parse("/sorted?alphabetic=true&asc=&dateOfRelease=");
        assert_eq!(SortRequest::from(params), SortRequest::new(false, true, false));
    }

    #[test]
    fn garbage_flag_is_rejected() {
        let uri = Uri::from_static("/sorted?asc=maybe");
        assert!(Query::<SortParams>::try_from_uri(&uri).is_err());
    }
}
