use crate::{
    component::{activate, dnd, Component, DropState, DropTarget, ItemView, Lifecycle, MountSpec},
    config::{BoardConfig, DragConfig},
    domain::{LaneKind, Project, ProjectId},
    error::Result,
    store::ProjectStore,
    surface::{ContentSource, InsertPosition, UiEvent},
};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};
use tracing::{debug, warn};

/// One status lane of the board
///
/// Shows the projects whose status matches its kind and moves dropped
/// projects into that status. Every store change re-renders the whole lane.
pub struct LaneView<S: ContentSource> {
    component: Component<S>,
    list: S::Node,
    kind: LaneKind,
    store: Rc<ProjectStore>,
    config: BoardConfig,
    assigned: RefCell<Vec<Project>>,
    items: RefCell<Vec<Rc<ItemView<S>>>>,
    state: Cell<DropState>,
}

impl<S: ContentSource + 'static> LaneView<S> {
    pub fn mount(
        surface: Rc<S>,
        store: Rc<ProjectStore>,
        config: &BoardConfig,
        kind: LaneKind,
    ) -> Result<Rc<Self>> {
        let spec = MountSpec::new(&config.templates.lane, &config.host_id, InsertPosition::End)
            .with_element_id(&kind.element_id());
        let component = Component::attach(surface, &spec)?;
        let list = component.select("ul")?;

        activate(Self {
            component,
            list,
            kind,
            store,
            config: config.clone(),
            assigned: RefCell::new(Vec::new()),
            items: RefCell::new(Vec::new()),
            state: Cell::new(DropState::Idle),
        })
    }

    pub fn kind(&self) -> LaneKind {
        self.kind
    }

    pub fn state(&self) -> DropState {
        self.state.get()
    }

    pub fn element(&self) -> &S::Node {
        self.component.element()
    }

    /// The list element the lane's items are rendered into
    pub fn list(&self) -> &S::Node {
        &self.list
    }

    /// Projects currently shown, in store order
    pub fn projects(&self) -> Vec<Project> {
        self.assigned.borrow().clone()
    }

    /// Item views currently rendered
    pub fn items(&self) -> Vec<Rc<ItemView<S>>> {
        self.items.borrow().clone()
    }

    fn drag(&self) -> &DragConfig {
        &self.config.drag
    }

    /// Keeps this lane's projects from `snapshot` and redraws
    fn assign(&self, snapshot: &[Project]) -> Result<()> {
        *self.assigned.borrow_mut() = self.kind.filter(snapshot);
        self.render_projects()
    }

    /// Discards every rendered item and renders the assigned projects afresh
    ///
    /// A failed render leaves the list empty, so the list and the item views
    /// always agree.
    fn render_projects(&self) -> Result<()> {
        let surface = self.component.surface();
        surface.clear_children(&self.list);

        let list_id = self.kind.list_id();
        let assigned = self.assigned.borrow().clone();
        let mut items = Vec::with_capacity(assigned.len());
        let built = assigned.into_iter().try_for_each(|project| -> Result<()> {
            items.push(ItemView::mount(
                Rc::clone(surface),
                &list_id,
                project,
                &self.config,
            )?);
            Ok(())
        });

        if built.is_err() {
            surface.clear_children(&self.list);
            items.clear();
        }

        debug!(lane = %self.kind, items = items.len(), ok = built.is_ok(), "lane rendered");
        *self.items.borrow_mut() = items;
        built
    }

    fn set_highlight(&self, on: bool) {
        let surface = self.component.surface();
        if on {
            surface.add_class(&self.list, &self.drag().highlight_class);
        } else {
            surface.remove_class(&self.list, &self.drag().highlight_class);
        }
    }
}

impl<S: ContentSource + 'static> Lifecycle for LaneView<S> {
    fn configure(self: &Rc<Self>) -> Result<()> {
        dnd::wire_drop_target(
            self.component.surface().as_ref(),
            self.component.element(),
            self,
        );

        let lane = Rc::downgrade(self);
        self.store.add_listener(move |snapshot| {
            if let Some(lane) = lane.upgrade() {
                lane.assign(snapshot)?;
            }
            Ok(())
        });

        Ok(())
    }

    fn render_content(&self) -> Result<()> {
        let surface = self.component.surface();
        surface.set_element_id(&self.list, &self.kind.list_id());
        surface.set_text(&self.component.select("h2")?, &self.kind.heading());
        Ok(())
    }
}

impl<S: ContentSource + 'static> DropTarget for LaneView<S> {
    fn on_drag_over(&self, event: &mut UiEvent) {
        if !dnd::accepts_payload(event, &self.drag().media_type) {
            return;
        }
        event.prevent_default();
        self.set_highlight(true);
        self.state.set(DropState::Highlighted);
    }

    fn on_drag_leave(&self, _event: &mut UiEvent) {
        self.set_highlight(false);
        self.state.set(DropState::Idle);
    }

    fn on_drop(&self, event: &mut UiEvent) {
        let payload = event
            .data_transfer()
            .and_then(|data| data.get_data(&self.drag().media_type))
            .map(ProjectId::from);

        match payload {
            Some(id) => {
                self.state.set(DropState::Dropped);
                debug!(lane = %self.kind, project_id = %id, "project dropped");
                self.store.move_project(&id, self.kind.status());
            }
            None => warn!(lane = %self.kind, "drop without a project payload"),
        }

        self.set_highlight(false);
        self.state.set(DropState::Idle);
    }
}
