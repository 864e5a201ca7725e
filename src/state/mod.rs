pub mod touch;

pub use touch::{Acquire, ContactId, ContactTracker, Point, SLOT_COUNT, Slot, SlotIndex};
