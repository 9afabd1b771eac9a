//! Skeleton page the board mounts into.

use crate::document::{Document, ElementId, Tag};

pub const TASK_FORM: &str = "#task-form";
pub const FORM_TITLE: &str = "#form-title";
pub const FORM_DESCRIPTION: &str = "#form-description";
pub const TASK_LIST_TEMPLATE: &str = "#task-list-template";
pub const TASK_ITEM_TEMPLATE: &str = "#task-item-template";
pub const CONTAINER: &str = "#container";

/// Builds the page: the creation form, both templates and an empty `#container`.
pub fn kanban_page() -> Document {
    let mut doc = Document::new();
    let body = doc.body();

    let form = element(&mut doc, body, Tag::Form, TASK_FORM);
    element(&mut doc, form, Tag::Input, FORM_TITLE);
    element(&mut doc, form, Tag::Textarea, FORM_DESCRIPTION);

    // <section><header><h2/></header><ul/></section>
    let list_template = element(&mut doc, body, Tag::Template, TASK_LIST_TEMPLATE);
    let section = doc.create_element(Tag::Section);
    let header = doc.create_element(Tag::Header);
    let h2 = doc.create_element(Tag::H2);
    let ul = doc.create_element(Tag::Ul);
    doc.append_child(header, h2);
    doc.append_child(section, header);
    doc.append_child(section, ul);
    doc.append_child(list_template, section);

    // <li><h2/><p/></li>
    let item_template = element(&mut doc, body, Tag::Template, TASK_ITEM_TEMPLATE);
    let li = doc.create_element(Tag::Li);
    let h2 = doc.create_element(Tag::H2);
    let p = doc.create_element(Tag::P);
    doc.append_child(li, h2);
    doc.append_child(li, p);
    doc.append_child(item_template, li);

    element(&mut doc, body, Tag::Div, CONTAINER);
    doc
}

fn element(doc: &mut Document, parent: ElementId, tag: Tag, selector: &str) -> ElementId {
    let el = doc.create_element(tag);
    doc.set_id(el, selector.trim_start_matches('#'));
    doc.append_child(parent, el);
    el
}
