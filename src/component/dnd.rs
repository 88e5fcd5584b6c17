//! Drag-and-drop capabilities.
//!
//! A component opts into dragging by implementing [`DragSource`], into
//! accepting drops by implementing [`DropTarget`], or both. The `wire_*`
//! helpers register the matching event handlers on the component's root
//! element. Handlers hold a weak reference so an element outliving its
//! component does not keep the component alive.

use crate::surface::{ContentSource, EventKind, UiEvent};
use std::rc::{Rc, Weak};

/// Visual state of a drop target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropState {
    #[default]
    Idle,
    /// An acceptable payload is hovering over the target
    Highlighted,
    /// A drop is being applied; reverts to `Idle` once handled
    Dropped,
}

/// Something that can be picked up and dragged
pub trait DragSource {
    fn on_drag_start(&self, event: &mut UiEvent);
    fn on_drag_end(&self, event: &mut UiEvent);
}

/// Something that accepts dragged payloads
pub trait DropTarget {
    fn on_drag_over(&self, event: &mut UiEvent);
    fn on_drag_leave(&self, event: &mut UiEvent);
    fn on_drop(&self, event: &mut UiEvent);
}

/// Whether the event's payload leads with `media_type`
pub fn accepts_payload(event: &UiEvent, media_type: &str) -> bool {
    event
        .data_transfer()
        .and_then(|data| data.types().first().map(|kind| *kind == media_type))
        .unwrap_or(false)
}

fn bind<T, F>(target: &Rc<T>, call: F) -> Rc<dyn Fn(&mut UiEvent)>
where
    T: 'static,
    F: Fn(&T, &mut UiEvent) + 'static,
{
    let weak: Weak<T> = Rc::downgrade(target);
    Rc::new(move |event: &mut UiEvent| {
        if let Some(target) = weak.upgrade() {
            call(&*target, event);
        }
    })
}

/// Registers drag start and drag end handlers for `source` on `element`
pub fn wire_drag_source<S, T>(surface: &S, element: &S::Node, source: &Rc<T>)
where
    S: ContentSource,
    T: DragSource + 'static,
{
    surface.add_event_listener(element, EventKind::DragStart, bind(source, T::on_drag_start));
    surface.add_event_listener(element, EventKind::DragEnd, bind(source, T::on_drag_end));
}

/// Registers drag over, drag leave and drop handlers for `target` on `element`
pub fn wire_drop_target<S, T>(surface: &S, element: &S::Node, target: &Rc<T>)
where
    S: ContentSource,
    T: DropTarget + 'static,
{
    surface.add_event_listener(element, EventKind::DragOver, bind(target, T::on_drag_over));
    surface.add_event_listener(element, EventKind::DragLeave, bind(target, T::on_drag_leave));
    surface.add_event_listener(element, EventKind::Drop, bind(target, T::on_drop));
}
