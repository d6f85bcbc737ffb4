use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("period must not be empty")]
    EmptyPeriod,
}

/// One brief-generation request. Constructed per call, consumed once,
/// never persisted.
///
/// The serde aliases accept the field names the legacy clients send
/// (`periode`, `typeDoc`, `parfums`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BriefRequest {
    /// Human-entered period label, e.g. "Avril 2025".
    #[serde(alias = "periode")]
    pub period: String,
    /// Wire identifier of the document format; unknown values fall back
    /// to the default template.
    #[serde(default, alias = "typeDoc", rename = "documentType")]
    pub document_type: String,
    /// Names the caller kept from the detection result.
    #[serde(default, alias = "parfums", rename = "selectedItems")]
    pub selected_items: Vec<String>,
}

impl BriefRequest {
    /// Rejects unusable requests before any I/O happens.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.period.trim().is_empty() {
            return Err(RequestError::EmptyPeriod);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(period: &str) -> BriefRequest {
        BriefRequest {
            period: period.to_string(),
            document_type: "depliant_5volets".to_string(),
            selected_items: vec![],
        }
    }

    #[test]
    fn valid_period_passes() {
        assert_eq!(request("Avril 2025").validate(), Ok(()));
    }

    #[test]
    fn empty_period_is_rejected() {
        assert_eq!(request("").validate(), Err(RequestError::EmptyPeriod));
    }

    #[test]
    fn whitespace_only_period_is_rejected() {
        assert_eq!(request("   ").validate(), Err(RequestError::EmptyPeriod));
    }

    #[test]
    fn deserializes_legacy_field_names() {
        let json = r#"{"periode": "Avril 2025", "typeDoc": "brochure_16pages", "parfums": ["Etoile"]}"#;
        let req: BriefRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.period, "Avril 2025");
        assert_eq!(req.document_type, "brochure_16pages");
        assert_eq!(req.selected_items, vec!["Etoile"]);
    }

    #[test]
    fn missing_optional_fields_default() {
        let req: BriefRequest = serde_json::from_str(r#"{"period": "Mai 2025"}"#).unwrap();
        assert_eq!(req.document_type, "");
        assert!(req.selected_items.is_empty());
    }
}
