//! Retained element tree the board is built on.
//!
//! Elements live in an arena owned by [`Document`] and are addressed by
//! [`ElementId`] handles. Lookups follow page semantics: `#id` and tag selectors
//! search in document order, template content is only reachable through
//! [`Document::clone_template`], and appending an attached element moves it.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Body,
    Form,
    Input,
    Textarea,
    Template,
    Div,
    Section,
    Header,
    H2,
    P,
    Ul,
    Li,
}

impl Tag {
    pub fn name(self) -> &'static str {
        match self {
            Tag::Body => "body",
            Tag::Form => "form",
            Tag::Input => "input",
            Tag::Textarea => "textarea",
            Tag::Template => "template",
            Tag::Div => "div",
            Tag::Section => "section",
            Tag::Header => "header",
            Tag::H2 => "h2",
            Tag::P => "p",
            Tag::Ul => "ul",
            Tag::Li => "li",
        }
    }

    fn from_name(name: &str) -> Option<Tag> {
        const TAGS: [Tag; 12] = [
            Tag::Body,
            Tag::Form,
            Tag::Input,
            Tag::Textarea,
            Tag::Template,
            Tag::Div,
            Tag::Section,
            Tag::Header,
            Tag::H2,
            Tag::P,
            Tag::Ul,
            Tag::Li,
        ];
        TAGS.into_iter().find(|tag| tag.name() == name)
    }
}

enum Selector<'a> {
    Id(&'a str),
    Tag(Tag),
}

impl<'a> Selector<'a> {
    fn parse(selector: &'a str) -> Option<Self> {
        match selector.strip_prefix('#') {
            Some(id) => Some(Selector::Id(id)),
            None => Tag::from_name(selector).map(Selector::Tag),
        }
    }
}

#[derive(Debug, Clone)]
struct Element {
    tag: Tag,
    id: Option<String>,
    text: String,
    value: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

#[derive(Debug)]
pub struct Document {
    elements: Vec<Element>,
    body: ElementId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let mut doc = Self {
            elements: Vec::new(),
            body: ElementId(0),
        };
        doc.body = doc.create_element(Tag::Body);
        doc
    }

    pub fn body(&self) -> ElementId {
        self.body
    }

    /// Creates a detached element.
    pub fn create_element(&mut self, tag: Tag) -> ElementId {
        self.elements.push(Element {
            tag,
            id: None,
            text: String::new(),
            value: String::new(),
            parent: None,
            children: Vec::new(),
        });
        ElementId(self.elements.len() - 1)
    }

    pub fn tag(&self, el: ElementId) -> Tag {
        self.elements[el.0].tag
    }

    pub fn id(&self, el: ElementId) -> Option<&str> {
        self.elements[el.0].id.as_deref()
    }

    pub fn set_id(&mut self, el: ElementId, id: impl Into<String>) {
        self.elements[el.0].id = Some(id.into());
    }

    pub fn text(&self, el: ElementId) -> &str {
        &self.elements[el.0].text
    }

    pub fn set_text(&mut self, el: ElementId, text: impl Into<String>) {
        self.elements[el.0].text = text.into();
    }

    /// Current value of an input or textarea.
    pub fn value(&self, el: ElementId) -> &str {
        &self.elements[el.0].value
    }

    pub fn value_mut(&mut self, el: ElementId) -> &mut String {
        &mut self.elements[el.0].value
    }

    pub fn set_value(&mut self, el: ElementId, value: impl Into<String>) {
        self.elements[el.0].value = value.into();
    }

    pub fn parent(&self, el: ElementId) -> Option<ElementId> {
        self.elements[el.0].parent
    }

    pub fn children(&self, el: ElementId) -> &[ElementId] {
        &self.elements[el.0].children
    }

    /// Appends `child` as the last child of `parent`, detaching it from its
    /// current parent first.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        self.detach(child);
        self.elements[parent.0].children.push(child);
        self.elements[child.0].parent = Some(parent);
    }

    /// Detaches `el` (and its subtree) from the tree. A no-op for detached elements.
    pub fn remove(&mut self, el: ElementId) {
        self.detach(el);
    }

    /// First connected element matching `selector`, in document order.
    pub fn query_selector(&self, selector: &str) -> Option<ElementId> {
        self.query_selector_in(self.body, selector)
    }

    /// First descendant of `root` matching `selector`, in document order.
    pub fn query_selector_in(&self, root: ElementId, selector: &str) -> Option<ElementId> {
        let selector = Selector::parse(selector)?;
        self.find_in(root, &selector)
    }

    pub fn require(&self, selector: &str) -> Result<ElementId> {
        self.query_selector(selector)
            .ok_or_else(|| Error::MissingElement(selector.to_string()))
    }

    pub fn require_in(&self, root: ElementId, selector: &str) -> Result<ElementId> {
        self.query_selector_in(root, selector)
            .ok_or_else(|| Error::MissingElement(selector.to_string()))
    }

    /// Deep-clones the first element of the template found by `selector`.
    /// The clone is detached.
    pub fn clone_template(&mut self, selector: &str) -> Result<ElementId> {
        let template = self.require(selector)?;
        let first = self
            .children(template)
            .first()
            .copied()
            .ok_or_else(|| Error::EmptyTemplate(selector.to_string()))?;
        Ok(self.deep_clone(first))
    }

    fn deep_clone(&mut self, source: ElementId) -> ElementId {
        let copy = Element {
            parent: None,
            children: Vec::new(),
            ..self.elements[source.0].clone()
        };
        self.elements.push(copy);
        let cloned = ElementId(self.elements.len() - 1);

        let children = self.elements[source.0].children.clone();
        for child in children {
            let child = self.deep_clone(child);
            self.append_child(cloned, child);
        }
        cloned
    }

    fn detach(&mut self, el: ElementId) {
        if let Some(parent) = self.elements[el.0].parent.take() {
            self.elements[parent.0].children.retain(|&c| c != el);
        }
    }

    fn matches(&self, el: ElementId, selector: &Selector<'_>) -> bool {
        let element = &self.elements[el.0];
        match selector {
            Selector::Id(id) => element.id.as_deref() == Some(*id),
            Selector::Tag(tag) => element.tag == *tag,
        }
    }

    fn find_in(&self, root: ElementId, selector: &Selector<'_>) -> Option<ElementId> {
        for &child in self.children(root) {
            if self.matches(child, selector) {
                return Some(child);
            }
            // template content is inert
            if self.tag(child) == Tag::Template {
                continue;
            }
            if let Some(found) = self.find_in(child, selector) {
                return Some(found);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_with_item(doc: &mut Document) -> (ElementId, ElementId) {
        let ul = doc.create_element(Tag::Ul);
        doc.set_id(ul, "list");
        let li = doc.create_element(Tag::Li);
        doc.append_child(ul, li);
        doc.append_child(doc.body(), ul);
        (ul, li)
    }

    #[test]
    fn append_moves_attached_element() {
        let mut doc = Document::new();
        let (ul, li) = list_with_item(&mut doc);
        let other = doc.create_element(Tag::Ul);
        doc.append_child(doc.body(), other);

        doc.append_child(other, li);

        assert!(doc.children(ul).is_empty());
        assert_eq!(doc.children(other), &[li]);
        assert_eq!(doc.parent(li), Some(other));
    }

    #[test]
    fn remove_detaches_subtree() {
        let mut doc = Document::new();
        let (ul, li) = list_with_item(&mut doc);

        doc.remove(ul);

        assert_eq!(doc.parent(ul), None);
        assert_eq!(doc.parent(li), Some(ul));
        assert_eq!(doc.query_selector("li"), None);
        assert_eq!(doc.query_selector("#list"), None);
        // removing twice is harmless
        doc.remove(ul);
    }

    #[test]
    fn selectors_skip_template_content() {
        let mut doc = Document::new();
        let template = doc.create_element(Tag::Template);
        doc.set_id(template, "tpl");
        let inner = doc.create_element(Tag::H2);
        doc.set_id(inner, "heading");
        doc.append_child(template, inner);
        doc.append_child(doc.body(), template);

        assert_eq!(doc.query_selector("#tpl"), Some(template));
        assert_eq!(doc.query_selector("#heading"), None);
        assert_eq!(doc.query_selector("h2"), None);
    }

    #[test]
    fn clone_template_is_deep_and_detached() {
        let mut doc = Document::new();
        let template = doc.create_element(Tag::Template);
        doc.set_id(template, "tpl");
        let li = doc.create_element(Tag::Li);
        let h2 = doc.create_element(Tag::H2);
        doc.set_text(h2, "placeholder");
        doc.append_child(li, h2);
        doc.append_child(template, li);
        doc.append_child(doc.body(), template);

        let clone = doc.clone_template("#tpl").unwrap();
        assert_ne!(clone, li);
        assert_eq!(doc.parent(clone), None);
        assert_eq!(doc.tag(clone), Tag::Li);

        let cloned_h2 = doc.require_in(clone, "h2").unwrap();
        doc.set_text(cloned_h2, "changed");
        assert_eq!(doc.text(h2), "placeholder");
    }

    #[test]
    fn missing_and_empty_templates_are_errors() {
        let mut doc = Document::new();
        assert!(matches!(
            doc.clone_template("#nope"),
            Err(Error::MissingElement(sel)) if sel == "#nope"
        ));

        let template = doc.create_element(Tag::Template);
        doc.set_id(template, "empty");
        doc.append_child(doc.body(), template);
        assert!(matches!(
            doc.clone_template("#empty"),
            Err(Error::EmptyTemplate(sel)) if sel == "#empty"
        ));
    }

    #[test]
    fn unknown_tag_selector_matches_nothing() {
        let doc = Document::new();
        assert!(matches!(doc.require("blink"), Err(Error::MissingElement(_))));
    }
}
