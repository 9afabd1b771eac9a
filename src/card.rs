use log::{info, warn};

use crate::document::{Document, ElementId};
use crate::error::{Error, Result};
use crate::host::TASK_ITEM_TEMPLATE;
use crate::task::{Status, Task};
use crate::view::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    On(Status),
    Removed,
}

/// Outcome of clicking a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved { from: Status, to: Status },
    Removed,
    /// The card was already off the board.
    Ignored,
}

#[derive(Debug)]
pub struct TaskItem {
    view: View,
    task: Task,
    state: CardState,
}

impl TaskItem {
    pub fn new(doc: &mut Document, task: Task) -> Result<Self> {
        let view = View::from_template(doc, TASK_ITEM_TEMPLATE)?;
        view.set_text(doc, "h2", &task.title)?;
        view.set_text(doc, "p", &task.description)?;
        Ok(Self {
            view,
            task,
            state: CardState::On(Status::Todo),
        })
    }

    /// Mounts the card at the end of the list for its current status.
    pub fn mount(&self, doc: &mut Document) -> Result<()> {
        match self.state {
            CardState::On(status) => self.view.mount(doc, &status.selector()),
            CardState::Removed => Ok(()),
        }
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    pub fn element(&self) -> ElementId {
        self.view.element()
    }

    /// Advances the card one column, or takes it off the board from the last one.
    ///
    /// The list the element sits in must be the one for the recorded status;
    /// anything else leaves the card untouched and returns
    /// [`Error::InvalidStatus`].
    pub fn click(&mut self, doc: &mut Document) -> Result<Step> {
        let element = self.element();
        let Some(parent) = doc.parent(element) else {
            return Ok(Step::Ignored);
        };

        let list_id = doc.id(parent).unwrap_or_default();
        let current: Status = list_id.parse()?;
        if self.state != CardState::On(current) {
            warn!(
                "card {:?} recorded as {:?} but found in #{}",
                self.task.title, self.state, list_id
            );
            return Err(Error::InvalidStatus(list_id.to_string()));
        }

        match current.next() {
            Some(next) => {
                let target = doc.require(&next.selector())?;
                doc.append_child(target, element);
                self.state = CardState::On(next);
                info!("moved {:?} from {} to {}", self.task.title, current, next);
                Ok(Step::Moved {
                    from: current,
                    to: next,
                })
            }
            None => {
                doc.remove(element);
                self.state = CardState::Removed;
                info!("removed {:?} from {}", self.task.title, current);
                Ok(Step::Removed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::TaskList;
    use crate::document::Tag;
    use crate::host::{kanban_page, CONTAINER};

    fn board_page() -> Document {
        let mut doc = kanban_page();
        for status in Status::ALL {
            TaskList::new(&mut doc, status)
                .unwrap()
                .mount(&mut doc, CONTAINER)
                .unwrap();
        }
        doc
    }

    fn card(doc: &mut Document, title: &str, description: &str) -> TaskItem {
        let item = TaskItem::new(
            doc,
            Task {
                title: title.to_string(),
                description: description.to_string(),
            },
        )
        .unwrap();
        item.mount(doc).unwrap();
        item
    }

    fn list_of(doc: &Document, item: &TaskItem) -> Option<String> {
        doc.parent(item.element())
            .and_then(|p| doc.id(p))
            .map(str::to_string)
    }

    #[test]
    fn card_shows_task_fields() {
        let mut doc = board_page();
        let item = card(&mut doc, "Buy milk", "2%");

        let h2 = doc.require_in(item.element(), "h2").unwrap();
        let p = doc.require_in(item.element(), "p").unwrap();
        assert_eq!(doc.text(h2), "Buy milk");
        assert_eq!(doc.text(p), "2%");
        assert_eq!(list_of(&doc, &item).as_deref(), Some("todo"));
    }

    #[test]
    fn clicks_walk_the_card_off_the_board() {
        let mut doc = board_page();
        let mut item = card(&mut doc, "a", "b");

        assert_eq!(
            item.click(&mut doc).unwrap(),
            Step::Moved {
                from: Status::Todo,
                to: Status::Working
            }
        );
        assert_eq!(list_of(&doc, &item).as_deref(), Some("working"));

        assert_eq!(
            item.click(&mut doc).unwrap(),
            Step::Moved {
                from: Status::Working,
                to: Status::Done
            }
        );
        assert_eq!(list_of(&doc, &item).as_deref(), Some("done"));

        assert_eq!(item.click(&mut doc).unwrap(), Step::Removed);
        assert_eq!(doc.parent(item.element()), None);
        assert_eq!(item.state(), CardState::Removed);

        assert_eq!(item.click(&mut doc).unwrap(), Step::Ignored);
    }

    #[test]
    fn moved_card_lands_last() {
        let mut doc = board_page();
        let first = card(&mut doc, "first", "");
        let mut second = card(&mut doc, "second", "");
        let mut third = card(&mut doc, "third", "");
        second.click(&mut doc).unwrap();
        third.click(&mut doc).unwrap();

        let working = doc.require("#working").unwrap();
        assert_eq!(doc.children(working), &[second.element(), third.element()]);
        let todo = doc.require("#todo").unwrap();
        assert_eq!(doc.children(todo), &[first.element()]);
    }

    #[test]
    fn unknown_parent_is_an_error_and_card_stays() {
        let mut doc = board_page();
        let mut item = card(&mut doc, "a", "b");
        let stray = doc.create_element(Tag::Ul);
        doc.set_id(stray, "archive");
        doc.append_child(doc.body(), stray);
        doc.append_child(stray, item.element());

        let err = item.click(&mut doc).unwrap_err();
        assert!(matches!(err, Error::InvalidStatus(id) if id == "archive"));
        assert_eq!(doc.parent(item.element()), Some(stray));
        assert_eq!(item.state(), CardState::On(Status::Todo));
    }

    #[test]
    fn parent_disagreeing_with_recorded_status_is_an_error() {
        let mut doc = board_page();
        let mut item = card(&mut doc, "a", "b");
        let done = doc.require("#done").unwrap();
        doc.append_child(done, item.element());

        assert!(matches!(
            item.click(&mut doc),
            Err(Error::InvalidStatus(id)) if id == "done"
        ));
        assert_eq!(doc.parent(item.element()), Some(done));
    }

    #[test]
    fn missing_next_list_is_reported() {
        let mut doc = board_page();
        let mut item = card(&mut doc, "a", "b");
        let working = doc.require("#working").unwrap();
        doc.set_id(working, "paused");

        assert!(matches!(
            item.click(&mut doc),
            Err(Error::MissingElement(sel)) if sel == "#working"
        ));
        assert_eq!(list_of(&doc, &item).as_deref(), Some("todo"));
    }
}
