use std::fmt;
use std::rc::Rc;

pub mod memory;

pub use memory::{MemoryDocument, MemoryNode};

/// Where a freshly instantiated element lands inside its mount point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// Before the mount point's existing children
    Start,
    /// After the mount point's existing children
    End,
}

/// User interface events the board reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Submit,
    DragStart,
    DragEnd,
    DragOver,
    DragLeave,
    Drop,
}

/// Effect hint attached to a drag payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    Move,
}

/// Payload carried by a drag gesture, keyed by media type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTransfer {
    entries: Vec<(String, String)>,
    effect_allowed: Option<DropEffect>,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` under `format`, replacing any previous entry
    pub fn set_data(&mut self, format: &str, data: &str) {
        match self.entries.iter_mut().find(|(key, _)| key == format) {
            Some(entry) => entry.1 = data.to_string(),
            None => self.entries.push((format.to_string(), data.to_string())),
        }
    }

    pub fn get_data(&self, format: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == format)
            .map(|(_, data)| data.as_str())
    }

    /// Advertised media types in the order they were set
    pub fn types(&self) -> Vec<&str> {
        self.entries.iter().map(|(key, _)| key.as_str()).collect()
    }

    pub fn effect_allowed(&self) -> Option<DropEffect> {
        self.effect_allowed
    }

    pub fn set_effect_allowed(&mut self, effect: DropEffect) {
        self.effect_allowed = Some(effect);
    }
}

/// An event delivered to a component handler
#[derive(Debug, Clone)]
pub struct UiEvent {
    kind: EventKind,
    data_transfer: Option<DataTransfer>,
    default_prevented: bool,
}

impl UiEvent {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            data_transfer: None,
            default_prevented: false,
        }
    }

    /// Creates a drag event carrying `data_transfer`
    pub fn drag(kind: EventKind, data_transfer: DataTransfer) -> Self {
        Self {
            kind,
            data_transfer: Some(data_transfer),
            default_prevented: false,
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn data_transfer(&self) -> Option<&DataTransfer> {
        self.data_transfer.as_ref()
    }

    pub fn data_transfer_mut(&mut self) -> Option<&mut DataTransfer> {
        self.data_transfer.as_mut()
    }

    /// Consumes the payload, e.g. to hand it from drag start to drop
    pub fn into_data_transfer(self) -> Option<DataTransfer> {
        self.data_transfer
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Handler registered on an element
pub type EventHandler = Rc<dyn Fn(&mut UiEvent)>;

/// Rendering surface the components draw onto
///
/// Supplies templates and mount points by id and performs the element
/// operations components need. `Node` is a cheap handle to an element.
pub trait ContentSource {
    type Node: Clone + fmt::Debug;

    /// Looks up a template by id
    fn template(&self, template_id: &str) -> Option<Self::Node>;

    /// Looks up an attached element by id
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// Deep-copies a template's content and returns its first element
    fn instantiate(&self, template: &Self::Node) -> Option<Self::Node>;

    /// Inserts `node` into `host` at `position`
    fn insert(&self, host: &Self::Node, node: &Self::Node, position: InsertPosition);

    /// Finds the first descendant of `root` matching `selector`
    ///
    /// Supported selectors are `#id`, `.class` and a bare tag name.
    fn query(&self, root: &Self::Node, selector: &str) -> Option<Self::Node>;

    fn set_element_id(&self, node: &Self::Node, id: &str);

    fn element_id(&self, node: &Self::Node) -> Option<String>;

    fn set_text(&self, node: &Self::Node, text: &str);

    /// Detaches every child of `node`
    fn clear_children(&self, node: &Self::Node);

    fn add_class(&self, node: &Self::Node, class: &str);

    fn remove_class(&self, node: &Self::Node, class: &str);

    /// Current value of a form field
    fn field_value(&self, node: &Self::Node) -> String;

    fn set_field_value(&self, node: &Self::Node, value: &str);

    fn add_event_listener(&self, node: &Self::Node, kind: EventKind, handler: EventHandler);

    /// Shows a blocking message to the user
    fn alert(&self, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_transfer_keeps_type_order() {
        let mut data = DataTransfer::new();
        data.set_data("text/plain", "p1");
        data.set_data("text/uri-list", "http://example.com");
        data.set_data("text/plain", "p2");

        assert_eq!(data.types(), vec!["text/plain", "text/uri-list"]);
        assert_eq!(data.get_data("text/plain"), Some("p2"));
        assert_eq!(data.get_data("application/json"), None);
    }

    #[test]
    fn test_prevent_default() {
        let mut event = UiEvent::new(EventKind::DragOver);
        assert!(!event.is_default_prevented());
        event.prevent_default();
        assert!(event.is_default_prevented());
        assert!(event.data_transfer().is_none());
    }
}
