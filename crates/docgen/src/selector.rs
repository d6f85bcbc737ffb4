use std::path::PathBuf;

use briefgen_core::DocumentType;

/// Resolves a document-type identifier to a concrete template path.
/// Total over all inputs: unknown identifiers get the fallback template.
#[derive(Debug, Clone)]
pub struct TemplateSelector {
    templates_dir: PathBuf,
}

impl TemplateSelector {
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
        }
    }

    pub fn select(&self, type_ident: &str) -> PathBuf {
        self.path_for(DocumentType::from_ident_or_fallback(type_ident))
    }

    pub fn path_for(&self, ty: DocumentType) -> PathBuf {
        self.templates_dir.join(ty.template_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn known_type_selects_its_template() {
        let selector = TemplateSelector::new("templates");
        assert_eq!(
            selector.select("brochure_16pages"),
            Path::new("templates/template_brochure_16pages.docx")
        );
    }

    #[test]
    fn unknown_type_selects_the_fallback() {
        let selector = TemplateSelector::new("templates");
        let fallback = Path::new("templates/template_depliant_5volets.docx");
        assert_eq!(selector.select("foo"), fallback);
        assert_eq!(selector.select(""), fallback);
    }

    #[test]
    fn every_type_resolves_to_some_path() {
        let selector = TemplateSelector::new("t");
        for ty in DocumentType::ALL {
            assert!(selector.path_for(ty).starts_with("t"));
        }
    }
}
