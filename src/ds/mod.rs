pub mod frequency;
pub mod intrusive_list;
pub mod recency;
pub mod slot_arena;

pub use frequency::FrequencyTracker;
pub use intrusive_list::IntrusiveList;
pub use recency::RecencyTracker;
pub use slot_arena::{SlotArena, SlotId};
