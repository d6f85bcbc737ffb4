use std::path::Path;

use docx_rs::{read_docx, Docx, DocumentChild, Paragraph, ParagraphChild, Run, RunChild};

use crate::backend::{BriefDocument, TemplateEngine, TemplateError};

/// `.docx` backend built on `docx-rs`.
///
/// The template is read paragraph by paragraph and the filled document is
/// rebuilt from the collected text blocks, so run-level styling inside a
/// paragraph is not preserved.
pub struct DocxEngine;

#[derive(Debug)]
enum Block {
    Paragraph(String),
    Heading(String, u8),
    ListItem(String),
}

#[derive(Debug)]
pub struct DocxDocument {
    blocks: Vec<Block>,
}

impl TemplateEngine for DocxEngine {
    type Document = DocxDocument;

    fn open(&self, path: &Path) -> Result<DocxDocument, TemplateError> {
        let bytes = std::fs::read(path)
            .map_err(|e| TemplateError::Unavailable(format!("{}: {e}", path.display())))?;
        let parsed = read_docx(&bytes)
            .map_err(|e| TemplateError::Unavailable(format!("{}: {e}", path.display())))?;

        let blocks = parsed
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(p) => Some(Block::Paragraph(paragraph_text(p))),
                _ => None,
            })
            .collect();
        Ok(DocxDocument { blocks })
    }
}

fn paragraph_text(para: &Paragraph) -> String {
    para.children
        .iter()
        .filter_map(|pc| {
            if let ParagraphChild::Run(run) = pc {
                Some(
                    run.children
                        .iter()
                        .filter_map(|rc| {
                            if let RunChild::Text(t) = rc {
                                Some(t.text.clone())
                            } else {
                                None
                            }
                        })
                        .collect::<Vec<_>>()
                        .join(""),
                )
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("")
}

fn text_paragraph(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

impl BriefDocument for DocxDocument {
    fn paragraphs(&self) -> Vec<String> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Paragraph(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    fn set_paragraph(&mut self, index: usize, text: String) {
        let mut paragraphs = self
            .blocks
            .iter_mut()
            .filter(|b| matches!(b, Block::Paragraph(_)));
        if let Some(Block::Paragraph(t)) = paragraphs.nth(index) {
            *t = text;
        }
    }

    fn append_heading(&mut self, text: &str, level: u8) {
        self.blocks.push(Block::Heading(text.to_string(), level));
    }

    fn append_list_item(&mut self, text: &str) {
        self.blocks.push(Block::ListItem(text.to_string()));
    }

    fn save(&self, path: &Path) -> Result<(), TemplateError> {
        let mut docx = Docx::new();
        for block in &self.blocks {
            docx = match block {
                Block::Paragraph(text) => docx.add_paragraph(text_paragraph(text)),
                Block::Heading(text, level) => {
                    docx.add_paragraph(text_paragraph(text).style(&format!("Heading{level}")))
                }
                Block::ListItem(text) => {
                    docx.add_paragraph(text_paragraph(&format!("• {text}")).style("ListParagraph"))
                }
            };
        }

        let file = std::fs::File::create(path)
            .map_err(|e| TemplateError::Write(format!("{}: {e}", path.display())))?;
        docx.build()
            .pack(file)
            .map_err(|e| TemplateError::Write(format!("{}: {e}", path.display())))?;
        Ok(())
    }
}
