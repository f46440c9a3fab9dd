//! Catalog record types.

use serde::{Deserialize, Serialize};

/// A physical item attached to a bibliographic record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Item record number (numeric string).
    pub id: String,

    /// Record number of the owning bib.
    pub bib_id: String,

    /// Call number as shelved, if assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_number: Option<String>,

    /// Barcode, if the item has been barcoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,

    /// Code of the [`Location`] the item is shelved at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_code: Option<String>,

    /// Code of the item's [`ItemType`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type_code: Option<String>,

    /// Code of the item's [`ItemStatus`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,

    /// Copy number within the bib's holdings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_number: Option<u32>,

    /// Whether the item is suppressed from public display.
    #[serde(default)]
    pub suppressed: bool,
}

/// A bibliographic record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bib {
    /// Bib record number (numeric string).
    pub id: String,

    /// Title proper.
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<i32>,

    /// Material type code (book, score, map, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_number: Option<String>,

    /// Whether the bib is suppressed from public display.
    #[serde(default)]
    pub suppressed: bool,
}

/// The MARC rendition of a bibliographic record.
///
/// Identified by the owning bib's record number. Fields are kept in tag
/// order as exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarcRecord {
    pub id: String,

    /// MARC leader, when present in the export.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader: Option<String>,

    pub fields: Vec<MarcField>,
}

/// One MARC variable field.
///
/// Control fields (00X) carry `value` and no subfields; data fields carry
/// indicators and subfields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarcField {
    /// Three-character tag, e.g. `245`.
    pub tag: String,

    /// Control field value (00X tags only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator1: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator2: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subfields: Vec<MarcSubfield>,
}

/// A MARC subfield within a data field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarcSubfield {
    /// Single-character subfield code.
    pub code: String,
    pub value: String,
}

/// An electronic resource (database, e-journal package, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EResource {
    /// Resource record number (numeric string).
    pub id: String,

    pub title: String,

    /// Kind of e-resource (database, ejournal, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subjects: Vec<String>,

    /// Number of holdings records attached to this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holdings_count: Option<u32>,
}

/// A shelving location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Short alphanumeric location code, e.g. `w4422`.
    pub code: String,
    pub label: String,
}

/// An item type (circulation category).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemType {
    pub code: String,
    pub label: String,
}

/// An item status code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStatus {
    pub code: String,
    pub label: String,
}

/// A registered consumer of this API.
///
/// The only resource behind the authentication gate. The record's API key
/// lives in the store beside it and is deliberately not part of this
/// representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUser {
    pub username: String,

    #[serde(default)]
    pub permissions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn item_serializes_camel_case() {
        let item = Item {
            id: "450972300486".to_string(),
            bib_id: "420911802087".to_string(),
            call_number: Some("ML410 .B1 H3".to_string()),
            barcode: Some("1002077657".to_string()),
            location_code: Some("w4422".to_string()),
            item_type_code: Some("43".to_string()),
            status_code: Some("a".to_string()),
            copy_number: Some(1),
            suppressed: false,
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["bibId"], "420911802087");
        assert_eq!(value["callNumber"], "ML410 .B1 H3");
        assert_eq!(value["locationCode"], "w4422");
        assert_eq!(value["suppressed"], false);
    }

    #[test]
    fn item_omits_absent_fields() {
        let item = Item {
            id: "1".to_string(),
            bib_id: "2".to_string(),
            call_number: None,
            barcode: None,
            location_code: None,
            item_type_code: None,
            status_code: None,
            copy_number: None,
            suppressed: true,
        };

        let value = serde_json::to_value(&item).unwrap();
        assert!(value.get("callNumber").is_none());
        assert!(value.get("barcode").is_none());
    }

    #[test]
    fn marc_control_field_round_trip() {
        let record = MarcRecord {
            id: "420909507305".to_string(),
            leader: Some("00000cam a2200000 a 4500".to_string()),
            fields: vec![
                MarcField {
                    tag: "001".to_string(),
                    value: Some("ocm12345678".to_string()),
                    indicator1: None,
                    indicator2: None,
                    subfields: vec![],
                },
                MarcField {
                    tag: "245".to_string(),
                    value: None,
                    indicator1: Some("1".to_string()),
                    indicator2: Some("0".to_string()),
                    subfields: vec![MarcSubfield {
                        code: "a".to_string(),
                        value: "A title".to_string(),
                    }],
                },
            ],
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["fields"][0]["tag"], "001");
        assert!(value["fields"][0].get("subfields").is_none());
        assert_eq!(value["fields"][1]["subfields"][0]["code"], "a");

        let back: MarcRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn api_user_has_no_secret_material() {
        let user = ApiUser {
            username: "circdesk".to_string(),
            permissions: vec!["read".to_string()],
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            json!({"username": "circdesk", "permissions": ["read"]})
        );
    }
}
