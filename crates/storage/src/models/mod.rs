mod athlete;
mod competition;
mod divisions;
mod event;
mod routine;
mod score;

pub use athlete::Athlete;
pub use competition::Competition;
pub use divisions::{AGE_GROUP_ORDER, LEVEL_ORDER, NO_AGE_GROUP, NO_LEVEL};
pub use divisions::{age_group_sort_key, is_valid_age_group, level_sort_key};
pub use event::Event;
pub use routine::Routine;
pub use score::Score;
