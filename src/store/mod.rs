//! Reactive in-memory project store.
//!
//! The store is the single authority for projects. Components hold it behind
//! an `Rc` and mutate it only through [`ProjectStore::add_project`] and
//! [`ProjectStore::move_project`]. Every effective mutation hands each
//! listener a fresh snapshot, synchronously and in registration order.
//!
//! Registering a listener does not replay the current state; it only sees
//! mutations made after registration.

use crate::domain::{Project, ProjectId, ProjectStatus};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};

/// Callback invoked with a snapshot of every project after each mutation
pub type Listener = Rc<dyn Fn(&[Project]) -> anyhow::Result<()>>;

#[derive(Default)]
pub struct ProjectStore {
    projects: RefCell<Vec<Project>>,
    listeners: RefCell<Vec<Listener>>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener; it is not called until the next mutation
    pub fn add_listener<F>(&self, listener: F)
    where
        F: Fn(&[Project]) -> anyhow::Result<()> + 'static,
    {
        self.listeners.borrow_mut().push(Rc::new(listener));
        debug!(listeners = self.listeners.borrow().len(), "listener registered");
    }

    /// Appends a new active project and notifies listeners
    pub fn add_project(&self, title: &str, description: &str, people: u32) -> ProjectId {
        let project = Project::new(title.to_string(), description.to_string(), people);
        let id = project.id.clone();
        self.projects.borrow_mut().push(project);
        debug!(project_id = %id, people, "project added");
        self.notify();
        id
    }

    /// Moves a project to `status`
    ///
    /// Unknown ids and moves to the current status are ignored without
    /// notifying anyone. Returns whether the store changed.
    pub fn move_project(&self, id: &ProjectId, status: ProjectStatus) -> bool {
        {
            let mut projects = self.projects.borrow_mut();
            let Some(project) = projects.iter_mut().find(|p| &p.id == id) else {
                debug!(project_id = %id, "move ignored, unknown project");
                return false;
            };
            if project.status == status {
                debug!(project_id = %id, %status, "move ignored, status unchanged");
                return false;
            }
            project.status = status;
        }
        debug!(project_id = %id, %status, "project moved");
        self.notify();
        true
    }

    /// Copy of the current project sequence in insertion order
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.borrow().clone()
    }

    /// Looks up a project by id
    pub fn find(&self, id: &ProjectId) -> Option<Project> {
        self.projects.borrow().iter().find(|p| &p.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.projects.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.borrow().is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Hands each listener its own snapshot.
    ///
    /// The listener list is cloned first so a listener may register further
    /// listeners or mutate the store again. A failing listener is logged and
    /// does not stop the ones after it.
    fn notify(&self) {
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        for (index, listener) in listeners.iter().enumerate() {
            let snapshot = self.snapshot();
            if let Err(err) = listener(&snapshot) {
                warn!(listener = index, error = %err, "store listener failed");
            }
        }
    }
}
