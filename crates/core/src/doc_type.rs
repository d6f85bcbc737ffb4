use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of document formats a brief can be generated for.
///
/// Each variant maps to exactly one template file. The mapping is total:
/// identifiers outside the table resolve to [`DocumentType::FALLBACK`],
/// never to an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "depliant_2volets")]
    Depliant2Volets,
    #[serde(rename = "depliant_3volets")]
    Depliant3Volets,
    #[serde(rename = "depliant_5volets")]
    Depliant5Volets,
    #[serde(rename = "depliant_6volets")]
    Depliant6Volets,
    #[serde(rename = "brochure_16pages")]
    Brochure16Pages,
    #[serde(rename = "catalogue_24pages")]
    Catalogue24Pages,
}

impl DocumentType {
    /// Used for unknown or missing identifiers.
    pub const FALLBACK: DocumentType = DocumentType::Depliant5Volets;

    pub const ALL: [DocumentType; 6] = [
        DocumentType::Depliant2Volets,
        DocumentType::Depliant3Volets,
        DocumentType::Depliant5Volets,
        DocumentType::Depliant6Volets,
        DocumentType::Brochure16Pages,
        DocumentType::Catalogue24Pages,
    ];

    /// Parse a wire identifier. `None` for anything outside the table.
    pub fn from_ident(s: &str) -> Option<Self> {
        match s {
            "depliant_2volets" => Some(DocumentType::Depliant2Volets),
            "depliant_3volets" => Some(DocumentType::Depliant3Volets),
            "depliant_5volets" => Some(DocumentType::Depliant5Volets),
            "depliant_6volets" => Some(DocumentType::Depliant6Volets),
            "brochure_16pages" => Some(DocumentType::Brochure16Pages),
            "catalogue_24pages" => Some(DocumentType::Catalogue24Pages),
            _ => None,
        }
    }

    /// Total mapping over all strings: unknown identifiers select the fallback.
    pub fn from_ident_or_fallback(s: &str) -> Self {
        Self::from_ident(s).unwrap_or(Self::FALLBACK)
    }

    pub fn ident(self) -> &'static str {
        match self {
            DocumentType::Depliant2Volets => "depliant_2volets",
            DocumentType::Depliant3Volets => "depliant_3volets",
            DocumentType::Depliant5Volets => "depliant_5volets",
            DocumentType::Depliant6Volets => "depliant_6volets",
            DocumentType::Brochure16Pages => "brochure_16pages",
            DocumentType::Catalogue24Pages => "catalogue_24pages",
        }
    }

    /// Template file name for this format.
    pub fn template_file(self) -> &'static str {
        match self {
            DocumentType::Depliant2Volets => "template_depliant_2volets.docx",
            DocumentType::Depliant3Volets => "template_depliant_3volets.docx",
            DocumentType::Depliant5Volets => "template_depliant_5volets.docx",
            DocumentType::Depliant6Volets => "template_depliant_6volets.docx",
            DocumentType::Brochure16Pages => "template_brochure_16pages.docx",
            DocumentType::Catalogue24Pages => "template_catalogue_24pages.docx",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ident())
    }
}
