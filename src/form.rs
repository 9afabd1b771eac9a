use log::debug;

use crate::card::TaskItem;
use crate::document::{Document, ElementId};
use crate::error::Result;
use crate::host::{FORM_DESCRIPTION, FORM_TITLE, TASK_FORM};
use crate::task::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
}

/// The task creation form. Holds handles to its inputs; their values live in
/// the document.
#[derive(Debug)]
pub struct TaskForm {
    title_input: ElementId,
    description_input: ElementId,
}

impl TaskForm {
    pub fn new(doc: &Document) -> Result<Self> {
        doc.require(TASK_FORM)?;
        Ok(Self {
            title_input: doc.require(FORM_TITLE)?,
            description_input: doc.require(FORM_DESCRIPTION)?,
        })
    }

    pub fn input(&self, field: Field) -> ElementId {
        match field {
            Field::Title => self.title_input,
            Field::Description => self.description_input,
        }
    }

    /// Turns the current field values into a card in `#todo` and clears the
    /// fields. Values are taken as typed; empty ones are fine.
    pub fn submit(&self, doc: &mut Document) -> Result<TaskItem> {
        let task = self.make_new_task(doc);
        debug!(
            "submitting task {}",
            serde_json::to_string(&task).unwrap_or_default()
        );
        let item = TaskItem::new(doc, task)?;
        item.mount(doc)?;

        self.clear_inputs(doc);
        Ok(item)
    }

    fn make_new_task(&self, doc: &Document) -> Task {
        Task {
            title: doc.value(self.title_input).to_string(),
            description: doc.value(self.description_input).to_string(),
        }
    }

    fn clear_inputs(&self, doc: &mut Document) {
        doc.set_value(self.title_input, "");
        doc.set_value(self.description_input, "");
    }
}
