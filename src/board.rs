use crate::{
    component::{CreationForm, LaneView},
    config::BoardConfig,
    domain::LaneKind,
    error::Result,
    store::ProjectStore,
    surface::ContentSource,
};
use std::rc::Rc;
use tracing::info;

/// The mounted board: a creation form above an active and a finished lane
///
/// All components share the one store passed in at mount time.
pub struct Board<S: ContentSource> {
    store: Rc<ProjectStore>,
    form: Rc<CreationForm<S>>,
    active: Rc<LaneView<S>>,
    finished: Rc<LaneView<S>>,
}

impl<S: ContentSource + 'static> Board<S> {
    /// Mounts the form and both lanes onto `surface`
    pub fn mount(surface: Rc<S>, store: Rc<ProjectStore>, config: &BoardConfig) -> Result<Self> {
        config.validate()?;

        let form = CreationForm::mount(Rc::clone(&surface), Rc::clone(&store), config)?;
        let active = LaneView::mount(
            Rc::clone(&surface),
            Rc::clone(&store),
            config,
            LaneKind::Active,
        )?;
        let finished = LaneView::mount(surface, Rc::clone(&store), config, LaneKind::Finished)?;

        info!(host = %config.host_id, "board mounted");
        Ok(Self {
            store,
            form,
            active,
            finished,
        })
    }

    pub fn store(&self) -> &Rc<ProjectStore> {
        &self.store
    }

    pub fn form(&self) -> &Rc<CreationForm<S>> {
        &self.form
    }

    pub fn lane(&self, kind: LaneKind) -> &Rc<LaneView<S>> {
        match kind {
            LaneKind::Active => &self.active,
            LaneKind::Finished => &self.finished,
        }
    }
}
