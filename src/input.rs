//! Contact events as the sketchpad consumes them, plus conversion from DOM input.

use web_sys::{DomRect, MouseEvent, TouchEvent, TouchList};

use crate::state::{ContactId, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    pub id: ContactId,
    pub point: Point,
}

/// One batch of changed contacts, in the order the browser reported them.
#[derive(Clone, Debug, PartialEq)]
pub enum ContactEvent {
    Start(Vec<Contact>),
    Move(Vec<Contact>),
    End(Vec<ContactId>),
    /// The browser took the contacts away (e.g. a system gesture). Handled like `End`.
    Cancel(Vec<ContactId>),
}

/// Client position relative to the surface's current top-left corner.
pub fn surface_local(client_x: f64, client_y: f64, left: f64, top: f64) -> Point {
    Point::new(client_x - left, client_y - top)
}

fn changed(list: &TouchList) -> impl Iterator<Item = web_sys::Touch> + '_ {
    (0..list.length()).filter_map(move |i| list.item(i))
}

/// Changed touches of `e`, positioned against `rect` (the canvas's bounding rect for this event).
pub fn touch_contacts(e: &TouchEvent, rect: &DomRect) -> Vec<Contact> {
    let list = e.changed_touches();
    changed(&list)
        .map(|t| Contact {
            id: ContactId::Touch(t.identifier()),
            point: surface_local(t.client_x() as f64, t.client_y() as f64, rect.left(), rect.top()),
        })
        .collect()
}

pub fn touch_ids(e: &TouchEvent) -> Vec<ContactId> {
    let list = e.changed_touches();
    changed(&list)
        .map(|t| ContactId::Touch(t.identifier()))
        .collect()
}

pub fn mouse_contact(e: &MouseEvent, rect: &DomRect) -> Contact {
    Contact {
        id: ContactId::Mouse,
        point: surface_local(e.client_x() as f64, e.client_y() as f64, rect.left(), rect.top()),
    }
}
