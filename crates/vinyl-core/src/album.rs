use serde::{Deserialize, Serialize};

/// A record album in the catalog.
///
/// The identifier is supplied by the client and is intended to be unique
/// within the collection, but uniqueness is never enforced. Field names
/// are the wire contract for both JSON and BSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    /// Client-supplied identifier.
    pub id: String,
    /// Album title.
    pub title: String,
    /// Recording artist.
    pub artist: String,
    /// Price in whatever currency the caller has in mind.
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_field_names() {
        let album = Album {
            id: "1".to_string(),
            title: "Blue Train".to_string(),
            artist: "John Coltrane".to_string(),
            price: 56.99,
        };

        let json = serde_json::to_value(&album).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "title": "Blue Train",
                "artist": "John Coltrane",
                "price": 56.99,
            })
        );
    }

    #[test]
    fn deserializes_from_request_shape() {
        let album: Album = serde_json::from_str(
            r#"{"id":"2","title":"Jeru","artist":"Gerry Mulligan","price":17.99}"#,
        )
        .unwrap();

        assert_eq!(album.id, "2");
        assert_eq!(album.title, "Jeru");
        assert_eq!(album.artist, "Gerry Mulligan");
        assert_eq!(album.price, 17.99);
    }

    #[test]
    fn missing_field_fails_decoding() {
        let result = serde_json::from_str::<Album>(r#"{"id":"3","title":"Sarah Vaughan"}"#);
        assert!(result.is_err());
    }
}
