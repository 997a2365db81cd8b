//! Card records as served by the API.
//!
//! A `TarotCard` pairs a major arcana with the STEM pioneer ("goddess")
//! that embodies it. Cards are immutable once fetched; nothing in the crate
//! edits them.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Unique identifier of a card.
///
/// The API serves ids as strings (`"1"`), but numeric ids are accepted and
/// stringified on decode.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id can be placed in a URL path segment.
    ///
    /// Blank ids and ids containing `/` are rejected.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.0.trim().is_empty() && !self.0.contains('/')
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for CardId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for CardId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        string_or_number(deserializer).map(CardId)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Int(i64),
    Float(f64),
}

/// Accept either a JSON string or a JSON number, yielding a string.
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Text(s) => s,
        StringOrNumber::Int(n) => n.to_string(),
        StringOrNumber::Float(n) => n.to_string(),
    })
}

/// An image with its attribution.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageData {
    /// Image URL.
    #[serde(default)]
    pub image_src: String,

    /// Credited author.
    #[serde(default)]
    pub author: String,

    /// License name, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// License URL, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_url: Option<String>,
}

impl ImageData {
    /// Create image data without license information.
    #[must_use]
    pub fn new(image_src: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            image_src: image_src.into(),
            author: author.into(),
            license: None,
            license_url: None,
        }
    }

    /// Attach a license (builder pattern).
    #[must_use]
    pub fn with_license(mut self, license: impl Into<String>, url: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self.license_url = Some(url.into());
        self
    }

    /// One-line credit, e.g. `"by Jane Doe (CC BY)"`.
    #[must_use]
    pub fn credit(&self) -> String {
        match &self.license {
            Some(license) => format!("by {} ({})", self.author, license),
            None => format!("by {}", self.author),
        }
    }
}

/// A tarot card paired with a scientist.
///
/// ## Example
///
/// ```
/// use tarot_stem::cards::{ImageData, TarotCard};
///
/// let mago = TarotCard::new("1", "I", "El Mago", "Ada Lovelace")
///     .with_descriptions("Dominio de los elementos.", "Pionera en programación.")
///     .with_images(ImageData::new("arcano.png", "Autor Arcano"), ImageData::new("ada.png", "Autor Diosa"));
///
/// assert!(mago.validate());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TarotCard {
    /// Unique identifier.
    pub id: CardId,

    /// Arcana number, usually roman ("0".."XXI").
    #[serde(default, deserialize_with = "string_or_number")]
    pub arcane_number: String,

    /// Arcana name.
    #[serde(default)]
    pub arcane_name: String,

    /// Traditional meaning of the arcana.
    #[serde(default)]
    pub arcane_description: String,

    /// Arcana artwork.
    #[serde(default)]
    pub arcane_image: ImageData,

    /// Paired scientist.
    #[serde(default)]
    pub goddess_name: String,

    /// Who the scientist was and what she achieved.
    #[serde(default)]
    pub goddess_description: String,

    /// Portrait of the scientist.
    #[serde(default)]
    pub goddess_image: ImageData,
}

impl TarotCard {
    /// Create a card with names only; descriptions and images start empty.
    #[must_use]
    pub fn new(
        id: impl Into<CardId>,
        arcane_number: impl Into<String>,
        arcane_name: impl Into<String>,
        goddess_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            arcane_number: arcane_number.into(),
            arcane_name: arcane_name.into(),
            arcane_description: String::new(),
            arcane_image: ImageData::default(),
            goddess_name: goddess_name.into(),
            goddess_description: String::new(),
            goddess_image: ImageData::default(),
        }
    }

    /// Set both descriptions (builder pattern).
    #[must_use]
    pub fn with_descriptions(mut self, arcane: impl Into<String>, goddess: impl Into<String>) -> Self {
        self.arcane_description = arcane.into();
        self.goddess_description = goddess.into();
        self
    }

    /// Set both images (builder pattern).
    #[must_use]
    pub fn with_images(mut self, arcane: ImageData, goddess: ImageData) -> Self {
        self.arcane_image = arcane;
        self.goddess_image = goddess;
        self
    }

    /// Names of required fields that are blank.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let checks = [
            ("id", self.id.as_str()),
            ("arcaneName", self.arcane_name.as_str()),
            ("arcaneDescription", self.arcane_description.as_str()),
            ("goddessName", self.goddess_name.as_str()),
            ("goddessDescription", self.goddess_description.as_str()),
            ("arcaneImage.imageSrc", self.arcane_image.image_src.as_str()),
            ("goddessImage.imageSrc", self.goddess_image.image_src.as_str()),
        ];

        checks
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    /// Whether every required field is present.
    #[must_use]
    pub fn validate(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAGO_JSON: &str = r#"{
        "id": "1",
        "arcaneNumber": "I",
        "arcaneName": "El Mago",
        "arcaneDescription": "Dominio de los elementos.",
        "arcaneImage": {
            "imageSrc": "arcano.png",
            "author": "Autor Arcano",
            "license": "CC BY",
            "licenseUrl": "https://license.com"
        },
        "goddessName": "Ada Lovelace",
        "goddessDescription": "Pionera en programación.",
        "goddessImage": {
            "imageSrc": "ada.png",
            "author": "Autor Diosa",
            "licenseUrl": "https://license.com"
        }
    }"#;

    #[test]
    fn test_decode_api_record() {
        let card: TarotCard = serde_json::from_str(MAGO_JSON).unwrap();

        assert_eq!(card.id, CardId::new("1"));
        assert_eq!(card.arcane_name, "El Mago");
        assert_eq!(card.goddess_name, "Ada Lovelace");
        assert_eq!(card.arcane_image.license.as_deref(), Some("CC BY"));
        assert_eq!(card.goddess_image.license, None);
        assert_eq!(card.goddess_image.license_url.as_deref(), Some("https://license.com"));
        assert!(card.validate());
    }

    #[test]
    fn test_numeric_id_and_number() {
        let json = r#"{"id": 7, "arcaneNumber": 7, "arcaneName": "El Carro", "goddessName": "Hedy Lamarr"}"#;
        let card: TarotCard = serde_json::from_str(json).unwrap();

        assert_eq!(card.id.as_str(), "7");
        assert_eq!(card.arcane_number, "7");
    }

    #[test]
    fn test_omitted_names_decode_as_blank() {
        let json = r#"{"id": "4"}"#;
        let card: TarotCard = serde_json::from_str(json).unwrap();

        assert_eq!(card.arcane_number, "");
        let missing = card.missing_fields();
        assert!(missing.contains(&"arcaneName"));
        assert!(missing.contains(&"goddessName"));
    }

    #[test]
    fn test_missing_fields() {
        let card = TarotCard::new("3", "III", "La Emperatriz", "");
        let missing = card.missing_fields();

        assert!(!card.validate());
        assert!(missing.contains(&"goddessName"));
        assert!(missing.contains(&"arcaneDescription"));
        assert!(!missing.contains(&"arcaneName"));
    }

    #[test]
    fn test_card_id_validity() {
        assert!(CardId::new("12").is_valid());
        assert!(!CardId::new("").is_valid());
        assert!(!CardId::new("  ").is_valid());
        assert!(!CardId::new("1/2").is_valid());
        assert_eq!(CardId::from("4").to_string(), "4");
    }

    #[test]
    fn test_image_credit() {
        let plain = ImageData::new("a.png", "Jane");
        assert_eq!(plain.credit(), "by Jane");

        let licensed = plain.with_license("CC BY-SA", "https://cc.org");
        assert_eq!(licensed.credit(), "by Jane (CC BY-SA)");
    }

    #[test]
    fn test_serialization_keeps_camel_case() {
        let card: TarotCard = serde_json::from_str(MAGO_JSON).unwrap();
        let json = serde_json::to_string(&card).unwrap();

        assert!(json.contains("\"arcaneName\":\"El Mago\""));
        assert!(json.contains("\"imageSrc\":\"ada.png\""));

        let back: TarotCard = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }
}
