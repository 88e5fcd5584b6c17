//! Component lifecycle.
//!
//! A component is built in three steps that always run in this order:
//!
//! 1. [`Component::attach`] instantiates a template and inserts the copy into
//!    its mount point.
//! 2. [`Lifecycle::configure`] wires event handlers and store listeners.
//! 3. [`Lifecycle::render_content`] fills in the initial display.
//!
//! [`activate`] runs steps 2 and 3 on an attached component. Components are
//! never detached once mounted.

use crate::{
    error::{BoardError, Result},
    surface::{ContentSource, InsertPosition},
};
use std::rc::Rc;

pub mod dnd;
pub mod form;
pub mod item;
pub mod lane;

pub use dnd::{DragSource, DropState, DropTarget};
pub use form::{CreationForm, ProjectDraft};
pub use item::ItemView;
pub use lane::LaneView;

/// Where and how a component is mounted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountSpec {
    pub template_id: String,
    pub host_id: String,
    pub position: InsertPosition,
    /// Id stamped onto the instantiated root, if any
    pub element_id: Option<String>,
}

impl MountSpec {
    pub fn new(template_id: &str, host_id: &str, position: InsertPosition) -> Self {
        Self {
            template_id: template_id.to_string(),
            host_id: host_id.to_string(),
            position,
            element_id: None,
        }
    }

    pub fn with_element_id(mut self, element_id: &str) -> Self {
        self.element_id = Some(element_id.to_string());
        self
    }
}

/// An instantiated template attached to its mount point
pub struct Component<S: ContentSource> {
    surface: Rc<S>,
    host: S::Node,
    element: S::Node,
}

impl<S: ContentSource> Component<S> {
    /// Instantiates the template and inserts it into the mount point
    pub fn attach(surface: Rc<S>, spec: &MountSpec) -> Result<Self> {
        let template = surface
            .template(&spec.template_id)
            .ok_or_else(|| BoardError::TemplateNotFound(spec.template_id.clone()))?;
        let host = surface
            .element_by_id(&spec.host_id)
            .ok_or_else(|| BoardError::MountPointNotFound(spec.host_id.clone()))?;
        let element = surface
            .instantiate(&template)
            .ok_or_else(|| BoardError::EmptyTemplate(spec.template_id.clone()))?;

        if let Some(id) = &spec.element_id {
            surface.set_element_id(&element, id);
        }
        surface.insert(&host, &element, spec.position);

        Ok(Self {
            surface,
            host,
            element,
        })
    }

    pub fn surface(&self) -> &Rc<S> {
        &self.surface
    }

    /// The mount point this component was inserted into
    pub fn host(&self) -> &S::Node {
        &self.host
    }

    /// Root of the instantiated template
    pub fn element(&self) -> &S::Node {
        &self.element
    }

    /// Finds a descendant of the root element
    pub fn select(&self, selector: &str) -> Result<S::Node> {
        self.surface
            .query(&self.element, selector)
            .ok_or_else(|| BoardError::ElementNotFound {
                selector: selector.to_string(),
                within: self
                    .surface
                    .element_id(&self.element)
                    .unwrap_or_else(|| "component root".to_string()),
            })
    }
}

/// Setup hooks run once after a component is attached
pub trait Lifecycle {
    /// Wires event handlers and store listeners
    fn configure(self: &Rc<Self>) -> Result<()>;

    /// Populates the initial display from current data
    fn render_content(&self) -> Result<()>;
}

/// Runs `configure` then `render_content` and hands back the shared component
pub fn activate<C: Lifecycle>(component: C) -> Result<Rc<C>> {
    let component = Rc::new(component);
    component.configure()?;
    component.render_content()?;
    Ok(component)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{MemoryDocument, MemoryNode};
    use std::cell::RefCell;

    fn document() -> Rc<MemoryDocument> {
        let document = MemoryDocument::new();
        document.add_template(
            "card",
            MemoryNode::element("article").with_child(MemoryNode::element("h2")),
        );
        document.append(MemoryNode::element("div").with_id("host"));
        Rc::new(document)
    }

    struct Recorder {
        component: Component<MemoryDocument>,
        calls: RefCell<Vec<&'static str>>,
    }

    impl Lifecycle for Recorder {
        fn configure(self: &Rc<Self>) -> Result<()> {
            // attached before any hook runs
            assert!(self
                .component
                .surface()
                .element_by_id("card-1")
                .is_some());
            self.calls.borrow_mut().push("configure");
            Ok(())
        }

        fn render_content(&self) -> Result<()> {
            self.calls.borrow_mut().push("render");
            let heading = self.component.select("h2")?;
            self.component.surface().set_text(&heading, "hello");
            Ok(())
        }
    }

    #[test]
    fn test_attach_stamps_id_and_inserts() {
        let document = document();
        let spec = MountSpec::new("card", "host", InsertPosition::End).with_element_id("card-1");

        let component = Component::attach(Rc::clone(&document), &spec).unwrap();

        assert_eq!(component.element().id().as_deref(), Some("card-1"));
        assert_eq!(component.host().children(), vec![component.element().clone()]);
    }

    #[test]
    fn test_attach_respects_position() {
        let document = document();
        let first = Component::attach(
            Rc::clone(&document),
            &MountSpec::new("card", "host", InsertPosition::End).with_element_id("a"),
        )
        .unwrap();
        let second = Component::attach(
            Rc::clone(&document),
            &MountSpec::new("card", "host", InsertPosition::Start).with_element_id("b"),
        )
        .unwrap();

        let children = first.host().children();
        assert_eq!(children[0], *second.element());
        assert_eq!(children[1], *first.element());
    }

    #[test]
    fn test_attach_without_element_id() {
        let document = document();
        let component = Component::attach(
            Rc::clone(&document),
            &MountSpec::new("card", "host", InsertPosition::End),
        )
        .unwrap();
        assert_eq!(component.element().id(), None);
    }

    #[test]
    fn test_attach_errors() {
        let document = document();
        document.add_empty_template("blank");

        let missing_template = Component::attach(
            Rc::clone(&document),
            &MountSpec::new("nope", "host", InsertPosition::End),
        );
        assert!(matches!(missing_template, Err(BoardError::TemplateNotFound(_))));

        let missing_host = Component::attach(
            Rc::clone(&document),
            &MountSpec::new("card", "nowhere", InsertPosition::End),
        );
        assert!(matches!(missing_host, Err(BoardError::MountPointNotFound(_))));

        let empty = Component::attach(
            Rc::clone(&document),
            &MountSpec::new("blank", "host", InsertPosition::End),
        );
        assert!(matches!(empty, Err(BoardError::EmptyTemplate(_))));
    }

    #[test]
    fn test_select_missing_element() {
        let document = document();
        let component = Component::attach(
            Rc::clone(&document),
            &MountSpec::new("card", "host", InsertPosition::End).with_element_id("card-1"),
        )
        .unwrap();

        let err = component.select("ul").err().unwrap();
        assert!(matches!(err, BoardError::ElementNotFound { .. }));
    }

    #[test]
    fn test_activate_runs_hooks_in_order() {
        let document = document();
        let component = Component::attach(
            Rc::clone(&document),
            &MountSpec::new("card", "host", InsertPosition::End).with_element_id("card-1"),
        )
        .unwrap();

        let recorder = activate(Recorder {
            component,
            calls: RefCell::new(Vec::new()),
        })
        .unwrap();

        assert_eq!(*recorder.calls.borrow(), vec!["configure", "render"]);
        assert_eq!(recorder.component.select("h2").unwrap().text(), "hello");
    }
}
