use crate::document::{Document, ElementId};
use crate::error::Result;

/// An element cloned from a template that can be filled in and mounted.
#[derive(Debug, Clone, Copy)]
pub struct View {
    element: ElementId,
}

impl View {
    pub fn from_template(doc: &mut Document, template: &str) -> Result<Self> {
        let element = doc.clone_template(template)?;
        Ok(Self { element })
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    /// First descendant of the view matching `selector`.
    pub fn find(&self, doc: &Document, selector: &str) -> Result<ElementId> {
        doc.require_in(self.element, selector)
    }

    pub fn set_text(&self, doc: &mut Document, selector: &str, text: &str) -> Result<()> {
        let el = self.find(doc, selector)?;
        doc.set_text(el, text);
        Ok(())
    }

    /// Appends the view as the last child of the element matching `selector`.
    pub fn mount(&self, doc: &mut Document, selector: &str) -> Result<()> {
        let target = doc.require(selector)?;
        doc.append_child(target, self.element);
        Ok(())
    }
}
