// Theatre and art domain types
//
// Theatre/arts records carry a `type` discriminator that is always one of
// "Theatre" or "Art". It is modelled as an enum rather than a free string.

use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Kind of theatre/arts event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub enum TheatreArtKind {
    Theatre,
    Art,
}

impl std::fmt::Display for TheatreArtKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TheatreArtKind::Theatre => write!(f, "Theatre"),
            TheatreArtKind::Art => write!(f, "Art"),
        }
    }
}

impl std::str::FromStr for TheatreArtKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "theatre" => Ok(TheatreArtKind::Theatre),
            "art" => Ok(TheatreArtKind::Art),
            other => Err(format!("unknown theatre/art kind: {other}")),
        }
    }
}

/// A theatre performance or art show.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct TheatreArtEvent {
    /// Identifier, unique within the theatre/arts catalog.
    #[cfg_attr(feature = "openapi", schema(example = "1"))]
    pub id: String,
    /// Display title.
    #[cfg_attr(feature = "openapi", schema(example = "Shakespeare's Hamlet - Live Play"))]
    pub title: String,
    /// Calendar date (`YYYY-MM-DD`).
    pub date: String,
    /// City or venue description.
    pub location: String,
    /// Poster image URI.
    pub image: String,
    /// Whether this is a theatre performance or an art event.
    #[serde(rename = "type")]
    pub kind: TheatreArtKind,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_serializes_under_type_key() {
        let event = TheatreArtEvent {
            id: "9".to_string(),
            title: "Gallery Walk".to_string(),
            date: "2025-01-01".to_string(),
            location: "Pune".to_string(),
            image: "/images/gallery.jpg".to_string(),
            kind: TheatreArtKind::Art,
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], json!("Art"));
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result: std::result::Result<TheatreArtEvent, _> = serde_json::from_value(json!({
            "id": "1",
            "title": "Mystery",
            "date": "2025-01-01",
            "location": "Mumbai",
            "image": "",
            "type": "Opera"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_kind_from_str_is_case_insensitive() {
        assert_eq!("theatre".parse::<TheatreArtKind>(), Ok(TheatreArtKind::Theatre));
        assert_eq!("ART".parse::<TheatreArtKind>(), Ok(TheatreArtKind::Art));
        assert!("dance".parse::<TheatreArtKind>().is_err());
    }
}
