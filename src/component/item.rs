use crate::{
    component::{activate, dnd, Component, DragSource, Lifecycle, MountSpec},
    config::BoardConfig,
    domain::Project,
    error::Result,
    surface::{ContentSource, DropEffect, InsertPosition, UiEvent},
};
use std::rc::Rc;
use tracing::debug;

/// A single draggable project card
pub struct ItemView<S: ContentSource> {
    component: Component<S>,
    project: Project,
    media_type: String,
}

impl<S: ContentSource + 'static> ItemView<S> {
    /// Renders `project` at the end of the element with id `host_id`
    pub fn mount(
        surface: Rc<S>,
        host_id: &str,
        project: Project,
        config: &BoardConfig,
    ) -> Result<Rc<Self>> {
        let spec = MountSpec::new(&config.templates.item, host_id, InsertPosition::End)
            .with_element_id(project.id.as_str());
        let component = Component::attach(surface, &spec)?;

        activate(Self {
            component,
            project,
            media_type: config.drag.media_type.clone(),
        })
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn element(&self) -> &S::Node {
        self.component.element()
    }
}

impl<S: ContentSource + 'static> Lifecycle for ItemView<S> {
    fn configure(self: &Rc<Self>) -> Result<()> {
        dnd::wire_drag_source(
            self.component.surface().as_ref(),
            self.component.element(),
            self,
        );
        Ok(())
    }

    fn render_content(&self) -> Result<()> {
        let surface = self.component.surface();
        surface.set_text(&self.component.select("h2")?, &self.project.title);
        surface.set_text(
            &self.component.select("h3")?,
            &format!("{} assigned", self.project.persons()),
        );
        surface.set_text(&self.component.select("p")?, &self.project.description);
        Ok(())
    }
}

impl<S: ContentSource + 'static> DragSource for ItemView<S> {
    fn on_drag_start(&self, event: &mut UiEvent) {
        if let Some(data) = event.data_transfer_mut() {
            data.set_data(&self.media_type, self.project.id.as_str());
            data.set_effect_allowed(DropEffect::Move);
            debug!(project_id = %self.project.id, "drag started");
        }
    }

    fn on_drag_end(&self, _event: &mut UiEvent) {}
}
