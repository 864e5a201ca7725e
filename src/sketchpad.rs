//! Routes contact batches through the slot table to the stroke renderer.

use crate::input::ContactEvent;
use crate::render::{StrokeRenderer, Surface};
use crate::state::{Acquire, ContactTracker};

/// What one [`Sketchpad::handle`] call did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub drawn: usize,
    /// Starts refused because every slot was busy.
    pub full: usize,
    /// Moves for contacts that hold no slot.
    pub dropped: usize,
    pub released: usize,
}

#[derive(Debug)]
pub struct Sketchpad {
    tracker: ContactTracker,
    renderer: StrokeRenderer,
}

impl Sketchpad {
    pub fn new(renderer: StrokeRenderer) -> Self {
        Self {
            tracker: ContactTracker::new(),
            renderer,
        }
    }

    pub fn tracker(&self) -> &ContactTracker {
        &self.tracker
    }

    pub fn handle<S: Surface + ?Sized>(
        &mut self,
        event: &ContactEvent,
        surface: &mut S,
    ) -> DispatchReport {
        let mut report = DispatchReport::default();
        match event {
            ContactEvent::Start(contacts) => {
                for contact in contacts {
                    match self.tracker.acquire(contact.id) {
                        Acquire::Slot(slot) => {
                            self.renderer
                                .draw_segment(&mut self.tracker, slot, contact.point, surface);
                            report.drawn += 1;
                        }
                        Acquire::Full => report.full += 1,
                    }
                }
            }
            ContactEvent::Move(contacts) => {
                for contact in contacts {
                    match self.tracker.lookup(contact.id) {
                        Some(slot) => {
                            self.renderer
                                .draw_segment(&mut self.tracker, slot, contact.point, surface);
                            report.drawn += 1;
                        }
                        None => report.dropped += 1,
                    }
                }
            }
            ContactEvent::End(ids) | ContactEvent::Cancel(ids) => {
                for &id in ids {
                    if self.tracker.lookup(id).is_some() {
                        self.tracker.release(id);
                        report.released += 1;
                    }
                }
            }
        }
        report
    }

    /// Paints the background over everything. Strokes in progress continue from their last point.
    pub fn clear<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.renderer.clear(surface);
    }

    pub fn reset(&mut self) {
        self.tracker.reset();
    }
}
