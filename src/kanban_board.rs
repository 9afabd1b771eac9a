use log::{error, info};

use crate::card::{CardState, Step, TaskItem};
use crate::column::TaskList;
use crate::document::{Document, ElementId};
use crate::error::Result;
use crate::form::{Field, TaskForm};
use crate::host::{self, CONTAINER};
use crate::task::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Board,
}

/// The running board: the page, its form and columns, and the cards on it.
#[derive(Debug)]
pub struct KanbanBoard {
    doc: Document,
    form: TaskForm,
    columns: Vec<TaskList>,
    cards: Vec<TaskItem>,
    pub selected_status: usize,
    pub selected_task: usize,
    pub focus: Focus,
    /// Message of the last interaction that failed, cleared by the next success.
    pub last_error: Option<String>,
}

impl KanbanBoard {
    pub fn new() -> Result<Self> {
        Self::from_page(host::kanban_page())
    }

    /// Wires the form and mounts one column per status into `#container`.
    pub fn from_page(mut doc: Document) -> Result<Self> {
        let form = TaskForm::new(&doc)?;
        let mut columns = Vec::with_capacity(Status::ALL.len());
        for status in Status::ALL {
            let list = TaskList::new(&mut doc, status)?;
            list.mount(&mut doc, CONTAINER)?;
            columns.push(list);
        }
        info!("board ready with {} columns", columns.len());

        Ok(Self {
            doc,
            form,
            columns,
            cards: Vec::new(),
            selected_status: 0,
            selected_task: 0,
            focus: Focus::Field(Field::Title),
            last_error: None,
        })
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn columns(&self) -> &[TaskList] {
        &self.columns
    }

    pub fn field_value(&self, field: Field) -> &str {
        self.doc.value(self.form.input(field))
    }

    pub fn submit(&mut self) -> Result<()> {
        let item = self.form.submit(&mut self.doc)?;
        info!("added {:?} to {}", item.task().title, Status::Todo);
        self.cards.push(item);
        Ok(())
    }

    /// Clicks the card rendered by `element`. Cards that leave the board are
    /// dropped.
    pub fn click(&mut self, element: ElementId) -> Result<Step> {
        let Some(idx) = self.cards.iter().position(|c| c.element() == element) else {
            return Ok(Step::Ignored);
        };
        let step = self.cards[idx].click(&mut self.doc)?;
        if self.cards[idx].state() == CardState::Removed {
            self.cards.remove(idx);
        }
        self.clamp_selection();
        Ok(step)
    }

    pub fn click_selected(&mut self) -> Result<Step> {
        match self.selected_card() {
            Some(element) => self.click(element),
            None => Ok(Step::Ignored),
        }
    }

    /// Cards in a column, in the order their elements appear in its list.
    pub fn cards_in(&self, status: Status) -> Vec<&TaskItem> {
        let Some(list) = self
            .columns
            .iter()
            .find(|column| column.status() == status)
            .and_then(|column| column.list(&self.doc).ok())
        else {
            return Vec::new();
        };
        self.doc
            .children(list)
            .iter()
            .filter_map(|&el| self.cards.iter().find(|c| c.element() == el))
            .collect()
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn selected_card(&self) -> Option<ElementId> {
        let status = Status::ALL[self.selected_status];
        self.cards_in(status)
            .get(self.selected_task)
            .map(|c| c.element())
    }

    pub fn move_selection(&mut self, direction: isize) {
        self.selected_status = (self.selected_status as isize + direction)
            .clamp(0, Status::ALL.len() as isize - 1) as usize;
        self.clamp_selection();
    }

    pub fn select_task(&mut self, direction: isize) {
        self.selected_task = (self.selected_task as isize + direction).max(0) as usize;
        self.clamp_selection();
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Field(Field::Title) => Focus::Field(Field::Description),
            Focus::Field(Field::Description) => Focus::Board,
            Focus::Board => Focus::Field(Field::Title),
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Focus::Field(Field::Title) => Focus::Board,
            Focus::Field(Field::Description) => Focus::Field(Field::Title),
            Focus::Board => Focus::Field(Field::Description),
        };
    }

    /// Types into the focused field. Ignored while the board has focus.
    pub fn type_char(&mut self, c: char) {
        if let Focus::Field(field) = self.focus {
            self.doc.value_mut(self.form.input(field)).push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Focus::Field(field) = self.focus {
            self.doc.value_mut(self.form.input(field)).pop();
        }
    }

    /// Logs a failed interaction and keeps its message for display.
    pub fn report<T>(&mut self, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => {
                self.last_error = None;
                Some(value)
            }
            Err(err) => {
                error!("{err}");
                self.last_error = Some(err.to_string());
                None
            }
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.cards_in(Status::ALL[self.selected_status]).len();
        self.selected_task = self.selected_task.min(len.saturating_sub(1));
    }
}
