use crate::document::{Document, ElementId};
use crate::error::Result;
use crate::host::TASK_LIST_TEMPLATE;
use crate::task::Status;
use crate::view::View;

/// One column of the board. Its `ul` carries the status as identifier, which is
/// how cards find the list to move into.
#[derive(Debug)]
pub struct TaskList {
    view: View,
    status: Status,
}

impl TaskList {
    pub fn new(doc: &mut Document, status: Status) -> Result<Self> {
        let view = View::from_template(doc, TASK_LIST_TEMPLATE)?;
        view.set_text(doc, "h2", status.as_str())?;
        let list = view.find(doc, "ul")?;
        doc.set_id(list, status.as_str());
        Ok(Self { view, status })
    }

    pub fn mount(&self, doc: &mut Document, selector: &str) -> Result<()> {
        self.view.mount(doc, selector)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn element(&self) -> ElementId {
        self.view.element()
    }

    pub fn list(&self, doc: &Document) -> Result<ElementId> {
        self.view.find(doc, "ul")
    }
}
