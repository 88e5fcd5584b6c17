use crate::{
    config::BoardConfig,
    surface::{ContentSource, EventHandler, EventKind, InsertPosition, UiEvent},
};
use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};
use tracing::trace;

struct NodeData {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    text: String,
    value: String,
    children: Vec<MemoryNode>,
    handlers: Vec<(EventKind, EventHandler)>,
}

/// Shared handle to an element in a [`MemoryDocument`]
///
/// Clones refer to the same element; equality is identity.
#[derive(Clone)]
pub struct MemoryNode(Rc<RefCell<NodeData>>);

impl MemoryNode {
    /// Creates a detached element with the given tag
    pub fn element(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(NodeData {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
            text: String::new(),
            value: String::new(),
            children: Vec::new(),
            handlers: Vec::new(),
        })))
    }

    pub fn with_id(self, id: &str) -> Self {
        self.0.borrow_mut().id = Some(id.to_string());
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.0.borrow_mut().classes.push(class.to_string());
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.0.borrow_mut().text = text.to_string();
        self
    }

    pub fn with_child(self, child: MemoryNode) -> Self {
        self.0.borrow_mut().children.push(child);
        self
    }

    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn id(&self) -> Option<String> {
        self.0.borrow().id.clone()
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    pub fn children(&self) -> Vec<MemoryNode> {
        self.0.borrow().children.clone()
    }

    /// Number of handlers registered for `kind`
    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.0
            .borrow()
            .handlers
            .iter()
            .filter(|(k, _)| *k == kind)
            .count()
    }

    fn matches(&self, selector: &str) -> bool {
        let data = self.0.borrow();
        if let Some(id) = selector.strip_prefix('#') {
            data.id.as_deref() == Some(id)
        } else if let Some(class) = selector.strip_prefix('.') {
            data.classes.iter().any(|c| c == class)
        } else {
            data.tag == selector
        }
    }

    /// Depth-first search over descendants, excluding `self`
    pub fn find(&self, selector: &str) -> Option<MemoryNode> {
        for child in self.children() {
            if child.matches(selector) {
                return Some(child);
            }
            if let Some(found) = child.find(selector) {
                return Some(found);
            }
        }
        None
    }

    /// Copies the element and its subtree; handlers are not copied
    fn deep_clone(&self) -> MemoryNode {
        let data = self.0.borrow();
        MemoryNode(Rc::new(RefCell::new(NodeData {
            tag: data.tag.clone(),
            id: data.id.clone(),
            classes: data.classes.clone(),
            text: data.text.clone(),
            value: data.value.clone(),
            children: data.children.iter().map(MemoryNode::deep_clone).collect(),
            handlers: Vec::new(),
        })))
    }

    fn handlers_for(&self, kind: EventKind) -> Vec<EventHandler> {
        self.0
            .borrow()
            .handlers
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, handler)| Rc::clone(handler))
            .collect()
    }
}

impl PartialEq for MemoryNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for MemoryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0.borrow();
        f.debug_struct("MemoryNode")
            .field("tag", &data.tag)
            .field("id", &data.id)
            .field("classes", &data.classes)
            .field("children", &data.children.len())
            .finish()
    }
}

/// Headless content source backed by an in-memory element tree
pub struct MemoryDocument {
    body: MemoryNode,
    templates: RefCell<HashMap<String, MemoryNode>>,
    alerts: RefCell<Vec<String>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self {
            body: MemoryNode::element("body"),
            templates: RefCell::new(HashMap::new()),
            alerts: RefCell::new(Vec::new()),
        }
    }

    /// Creates a document holding the board's templates and host element
    pub fn with_board_markup(config: &BoardConfig) -> Self {
        let document = Self::new();
        let form = &config.form;

        let field = |label: &str, tag: &str, id: &str| {
            MemoryNode::element("div")
                .with_class("form-control")
                .with_child(MemoryNode::element("label").with_text(label))
                .with_child(MemoryNode::element(tag).with_id(id))
        };

        document.add_template(
            &config.templates.form,
            MemoryNode::element("form")
                .with_child(field("Title", "input", form.title_field_id.as_str()))
                .with_child(field("Description", "textarea", form.description_field_id.as_str()))
                .with_child(field("People", "input", form.people_field_id.as_str()))
                .with_child(MemoryNode::element("button").with_text("ADD PROJECT")),
        );
        document.add_template(
            &config.templates.lane,
            MemoryNode::element("section")
                .with_class("projects")
                .with_child(MemoryNode::element("header").with_child(MemoryNode::element("h2")))
                .with_child(MemoryNode::element("ul")),
        );
        document.add_template(
            &config.templates.item,
            MemoryNode::element("li")
                .with_child(MemoryNode::element("h2"))
                .with_child(MemoryNode::element("h3"))
                .with_child(MemoryNode::element("p")),
        );
        document.append(MemoryNode::element("div").with_id(&config.host_id));

        document
    }

    /// Registers `content` as the single root of template `id`
    pub fn add_template(&self, id: &str, content: MemoryNode) {
        let template = MemoryNode::element("template").with_id(id).with_child(content);
        self.templates.borrow_mut().insert(id.to_string(), template);
    }

    /// Registers a template with no content
    pub fn add_empty_template(&self, id: &str) {
        let template = MemoryNode::element("template").with_id(id);
        self.templates.borrow_mut().insert(id.to_string(), template);
    }

    /// Attaches `node` at the end of the document body
    pub fn append(&self, node: MemoryNode) {
        self.body.0.borrow_mut().children.push(node);
    }

    pub fn body(&self) -> &MemoryNode {
        &self.body
    }

    /// Runs every handler `node` has for the event's kind
    ///
    /// Handlers are collected before any of them runs, so a handler may
    /// rebuild the tree it was registered in.
    pub fn dispatch(&self, node: &MemoryNode, event: &mut UiEvent) {
        let handlers = node.handlers_for(event.kind());
        trace!(kind = ?event.kind(), handlers = handlers.len(), "dispatching event");
        for handler in handlers {
            handler(&mut *event);
        }
    }

    /// Messages shown through [`ContentSource::alert`]
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentSource for MemoryDocument {
    type Node = MemoryNode;

    fn template(&self, template_id: &str) -> Option<MemoryNode> {
        self.templates.borrow().get(template_id).cloned()
    }

    fn element_by_id(&self, id: &str) -> Option<MemoryNode> {
        self.body.find(&format!("#{}", id))
    }

    fn instantiate(&self, template: &MemoryNode) -> Option<MemoryNode> {
        template.children().first().map(MemoryNode::deep_clone)
    }

    fn insert(&self, host: &MemoryNode, node: &MemoryNode, position: InsertPosition) {
        let mut data = host.0.borrow_mut();
        match position {
            InsertPosition::Start => data.children.insert(0, node.clone()),
            InsertPosition::End => data.children.push(node.clone()),
        }
    }

    fn query(&self, root: &MemoryNode, selector: &str) -> Option<MemoryNode> {
        root.find(selector)
    }

    fn set_element_id(&self, node: &MemoryNode, id: &str) {
        node.0.borrow_mut().id = Some(id.to_string());
    }

    fn element_id(&self, node: &MemoryNode) -> Option<String> {
        node.id()
    }

    fn set_text(&self, node: &MemoryNode, text: &str) {
        node.0.borrow_mut().text = text.to_string();
    }

    fn clear_children(&self, node: &MemoryNode) {
        node.0.borrow_mut().children.clear();
    }

    fn add_class(&self, node: &MemoryNode, class: &str) {
        let mut data = node.0.borrow_mut();
        if !data.classes.iter().any(|c| c == class) {
            data.classes.push(class.to_string());
        }
    }

    fn remove_class(&self, node: &MemoryNode, class: &str) {
        node.0.borrow_mut().classes.retain(|c| c != class);
    }

    fn field_value(&self, node: &MemoryNode) -> String {
        node.value()
    }

    fn set_field_value(&self, node: &MemoryNode, value: &str) {
        node.0.borrow_mut().value = value.to_string();
    }

    fn add_event_listener(&self, node: &MemoryNode, kind: EventKind, handler: EventHandler) {
        node.0.borrow_mut().handlers.push((kind, handler));
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_instantiate_copies_template_content() {
        let document = MemoryDocument::new();
        document.add_template(
            "card",
            MemoryNode::element("li").with_child(MemoryNode::element("h2")),
        );

        let template = document.template("card").unwrap();
        let first = document.instantiate(&template).unwrap();
        let second = document.instantiate(&template).unwrap();

        assert_eq!(first.tag(), "li");
        assert_ne!(first, second);
        document.set_text(&document.query(&first, "h2").unwrap(), "changed");
        assert_eq!(document.query(&second, "h2").unwrap().text(), "");
    }

    #[test]
    fn test_empty_template_has_nothing_to_instantiate() {
        let document = MemoryDocument::new();
        document.add_empty_template("blank");
        let template = document.template("blank").unwrap();
        assert!(document.instantiate(&template).is_none());
    }

    #[test]
    fn test_insert_positions() {
        let document = MemoryDocument::new();
        let host = MemoryNode::element("div").with_id("host");
        document.append(host.clone());

        let a = MemoryNode::element("p").with_id("a");
        let b = MemoryNode::element("p").with_id("b");
        let c = MemoryNode::element("p").with_id("c");
        document.insert(&host, &a, InsertPosition::End);
        document.insert(&host, &b, InsertPosition::End);
        document.insert(&host, &c, InsertPosition::Start);

        let ids: Vec<_> = host.children().iter().filter_map(|n| n.id()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_element_by_id_only_sees_attached_nodes() {
        let document = MemoryDocument::new();
        let host = MemoryNode::element("div").with_id("host");
        document.append(host.clone());
        document.insert(&host, &MemoryNode::element("p").with_id("inner"), InsertPosition::End);

        assert!(document.element_by_id("inner").is_some());
        document.clear_children(&host);
        assert!(document.element_by_id("inner").is_none());
    }

    #[test]
    fn test_query_selectors() {
        let root = MemoryNode::element("section").with_child(
            MemoryNode::element("header")
                .with_child(MemoryNode::element("h2").with_class("title").with_id("heading")),
        );

        assert_eq!(root.find("h2").unwrap().id().as_deref(), Some("heading"));
        assert!(root.find(".title").is_some());
        assert!(root.find("#heading").is_some());
        assert!(root.find("ul").is_none());
        assert!(root.find("section").is_none());
    }

    #[test]
    fn test_classes_are_a_set() {
        let document = MemoryDocument::new();
        let node = MemoryNode::element("ul");
        document.add_class(&node, "droppable");
        document.add_class(&node, "droppable");
        assert!(node.has_class("droppable"));
        document.remove_class(&node, "droppable");
        assert!(!node.has_class("droppable"));
    }

    #[test]
    fn test_dispatch_runs_matching_handlers() {
        let document = MemoryDocument::new();
        let node = MemoryNode::element("li");
        let hits = Rc::new(Cell::new(0));

        let counter = Rc::clone(&hits);
        document.add_event_listener(
            &node,
            EventKind::DragStart,
            Rc::new(move |_| counter.set(counter.get() + 1)),
        );

        document.dispatch(&node, &mut UiEvent::new(EventKind::DragEnd));
        assert_eq!(hits.get(), 0);
        document.dispatch(&node, &mut UiEvent::new(EventKind::DragStart));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_board_markup() {
        let config = BoardConfig::default();
        let document = MemoryDocument::with_board_markup(&config);

        assert!(document.element_by_id(&config.host_id).is_some());
        assert!(document.template(&config.templates.form).is_some());
        assert!(document.template(&config.templates.lane).is_some());
        assert!(document.template(&config.templates.item).is_some());
    }

    #[test]
    fn test_alerts_are_recorded() {
        let document = MemoryDocument::new();
        document.alert("Invalid input");
        assert_eq!(document.alerts(), vec!["Invalid input".to_string()]);
    }
}
