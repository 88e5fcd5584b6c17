use crate::{
    component::{activate, Component, Lifecycle, MountSpec},
    config::{BoardConfig, FormConfig},
    domain::{validate, FieldValue},
    error::{BoardError, Result},
    store::ProjectStore,
    surface::{ContentSource, EventKind, InsertPosition, UiEvent},
};
use std::rc::Rc;
use tracing::{debug, info};

/// Validated input for a new project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// Form that collects and validates a new project
pub struct CreationForm<S: ContentSource> {
    component: Component<S>,
    title: S::Node,
    description: S::Node,
    people: S::Node,
    store: Rc<ProjectStore>,
    rules: FormConfig,
}

impl<S: ContentSource + 'static> CreationForm<S> {
    pub fn mount(surface: Rc<S>, store: Rc<ProjectStore>, config: &BoardConfig) -> Result<Rc<Self>> {
        let rules = config.form.clone();
        let spec = MountSpec::new(&config.templates.form, &config.host_id, InsertPosition::Start)
            .with_element_id(&rules.element_id);
        let component = Component::attach(surface, &spec)?;

        let title = component.select(&format!("#{}", rules.title_field_id))?;
        let description = component.select(&format!("#{}", rules.description_field_id))?;
        let people = component.select(&format!("#{}", rules.people_field_id))?;

        activate(Self {
            component,
            title,
            description,
            people,
            store,
            rules,
        })
    }

    pub fn element(&self) -> &S::Node {
        self.component.element()
    }

    /// Validates the current field values
    ///
    /// Returns `None` when any field fails; no per-field detail is kept.
    pub fn gather_input(&self) -> Option<ProjectDraft> {
        let surface = self.component.surface();
        let title = surface.field_value(&self.title);
        let description = surface.field_value(&self.description);
        let people_raw = surface.field_value(&self.people);
        let people = FieldValue::number_from_text(&people_raw);

        let valid = validate(&FieldValue::Text(title.clone()), &self.rules.title)
            && validate(&FieldValue::Text(description.clone()), &self.rules.description)
            && validate(&people, &self.rules.people);
        if !valid {
            return None;
        }

        match whole_people(&people) {
            Ok(people) => Some(ProjectDraft {
                title,
                description,
                people,
            }),
            Err(err) => {
                debug!(error = %err, "people count rejected");
                None
            }
        }
    }

    /// Submits the form; returns whether a project was created
    ///
    /// Invalid input raises a single alert and leaves every field as it was.
    pub fn submit(&self) -> bool {
        let Some(draft) = self.gather_input() else {
            debug!("submission rejected");
            self.component
                .surface()
                .alert(&self.rules.invalid_input_message);
            return false;
        };

        let id = self
            .store
            .add_project(&draft.title, &draft.description, draft.people);
        info!(project_id = %id, title = %draft.title, "project created");
        self.clear_inputs();
        true
    }

    fn handle_submit(&self, event: &mut UiEvent) {
        event.prevent_default();
        self.submit();
    }

    fn clear_inputs(&self) {
        let surface = self.component.surface();
        surface.set_field_value(&self.title, "");
        surface.set_field_value(&self.description, "");
        surface.set_field_value(&self.people, "");
    }
}

/// Converts a validated people value into a head count
fn whole_people(value: &FieldValue) -> Result<u32> {
    match value {
        FieldValue::Number(n) if n.fract() == 0.0 && *n >= 0.0 && *n <= u32::MAX as f64 => {
            Ok(*n as u32)
        }
        other => Err(BoardError::InvalidPeopleCount(other.to_string())),
    }
}

impl<S: ContentSource + 'static> Lifecycle for CreationForm<S> {
    fn configure(self: &Rc<Self>) -> Result<()> {
        let form = Rc::downgrade(self);
        self.component.surface().add_event_listener(
            self.component.element(),
            EventKind::Submit,
            Rc::new(move |event: &mut UiEvent| {
                if let Some(form) = form.upgrade() {
                    form.handle_submit(event);
                }
            }),
        );
        Ok(())
    }

    fn render_content(&self) -> Result<()> {
        Ok(())
    }
}
