// Touch slot table: up to three concurrent contacts, each remembering where its stroke left off.

/// Number of contacts that can draw at the same time.
pub const SLOT_COUNT: usize = 3;

/// Index into the slot table, only ever produced by [`ContactTracker`].
pub type SlotIndex = usize;

/// Opaque identity of one touch or pointer contact, valid from its start to its end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactId {
    /// `Touch.identifier` as reported by the browser.
    Touch(i32),
    /// The primary mouse button, held down.
    Mouse,
}

/// Surface-local position in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Slot {
    pub occupied_id: Option<ContactId>,
    /// Last drawn point of the current stroke; `None` right after the slot is assigned.
    pub last_point: Option<Point>,
}

impl Slot {
    pub fn is_free(&self) -> bool {
        self.occupied_id.is_none()
    }

    fn clear(&mut self) {
        self.occupied_id = None;
        self.last_point = None;
    }
}

/// Outcome of [`ContactTracker::acquire`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Acquire {
    Slot(SlotIndex),
    /// Every slot is held by another contact; the caller must not draw.
    Full,
}

#[derive(Clone, Debug, Default)]
pub struct ContactTracker {
    slots: [Slot; SLOT_COUNT],
}

impl ContactTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the slot already held by `id`, or assigns the lowest free one with a fresh stroke.
    pub fn acquire(&mut self, id: ContactId) -> Acquire {
        if let Some(index) = self.lookup(id) {
            return Acquire::Slot(index);
        }
        match self.slots.iter().position(Slot::is_free) {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.occupied_id = Some(id);
                slot.last_point = None;
                Acquire::Slot(index)
            }
            None => Acquire::Full,
        }
    }

    pub fn lookup(&self, id: ContactId) -> Option<SlotIndex> {
        self.slots
            .iter()
            .position(|slot| slot.occupied_id == Some(id))
    }

    /// Frees the slot held by `id`. Unknown ids are ignored.
    pub fn release(&mut self, id: ContactId) {
        if let Some(index) = self.lookup(id) {
            self.slots[index].clear();
        }
    }

    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(Slot::clear);
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_free()).count()
    }

    /// Panics if `index` did not come from this tracker.
    pub fn slot(&self, index: SlotIndex) -> &Slot {
        &self.slots[index]
    }

    pub(crate) fn slot_mut(&mut self, index: SlotIndex) -> &mut Slot {
        &mut self.slots[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(id: i32) -> ContactId {
        ContactId::Touch(id)
    }

    #[test]
    fn distinct_contacts_get_lowest_free_slots() {
        let mut tracker = ContactTracker::new();
        assert_eq!(tracker.acquire(touch(7)), Acquire::Slot(0));
        assert_eq!(tracker.acquire(touch(3)), Acquire::Slot(1));
        assert_eq!(tracker.acquire(ContactId::Mouse), Acquire::Slot(2));
        assert_eq!(tracker.active_count(), 3);
    }

    #[test]
    fn fourth_contact_is_refused() {
        let mut tracker = ContactTracker::new();
        for id in 0..3 {
            assert!(matches!(tracker.acquire(touch(id)), Acquire::Slot(_)));
        }
        assert_eq!(tracker.acquire(touch(99)), Acquire::Full);
        assert_eq!(tracker.lookup(touch(99)), None);
        assert_eq!(tracker.active_count(), 3);
    }

    #[test]
    fn reacquire_keeps_slot_and_last_point() {
        let mut tracker = ContactTracker::new();
        let Acquire::Slot(index) = tracker.acquire(touch(5)) else {
            panic!("empty tracker refused a contact");
        };
        tracker.slot_mut(index).last_point = Some(Point::new(4.0, 2.0));

        assert_eq!(tracker.acquire(touch(5)), Acquire::Slot(index));
        assert_eq!(tracker.slot(index).last_point, Some(Point::new(4.0, 2.0)));
        assert_eq!(tracker.active_count(), 1);
    }

    #[test]
    fn release_then_acquire_starts_a_fresh_stroke() {
        let mut tracker = ContactTracker::new();
        tracker.acquire(touch(1));
        tracker.acquire(touch(2));
        tracker.slot_mut(0).last_point = Some(Point::new(1.0, 1.0));

        tracker.release(touch(1));
        assert!(tracker.slot(0).is_free());
        assert_eq!(tracker.slot(0).last_point, None);

        // Freed slot 0 is reused before anything above it.
        assert_eq!(tracker.acquire(touch(1)), Acquire::Slot(0));
        assert_eq!(tracker.slot(0).last_point, None);
        assert_eq!(tracker.lookup(touch(2)), Some(1));
    }

    #[test]
    fn unknown_ids_are_no_ops() {
        let mut tracker = ContactTracker::new();
        tracker.acquire(touch(1));
        assert_eq!(tracker.lookup(touch(2)), None);
        tracker.release(touch(2));
        assert_eq!(tracker.lookup(touch(1)), Some(0));
        assert_eq!(tracker.active_count(), 1);
    }

    #[test]
    fn full_tracker_accepts_again_after_release() {
        let mut tracker = ContactTracker::new();
        for id in 0..3 {
            tracker.acquire(touch(id));
        }
        tracker.release(touch(1));
        assert_eq!(tracker.acquire(touch(42)), Acquire::Slot(1));
    }

    #[test]
    fn reset_frees_everything() {
        let mut tracker = ContactTracker::new();
        tracker.acquire(touch(1));
        tracker.acquire(ContactId::Mouse);
        tracker.reset();
        assert_eq!(tracker.active_count(), 0);
        assert_eq!(tracker.acquire(ContactId::Mouse), Acquire::Slot(0));
    }
}
