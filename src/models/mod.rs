pub mod location;
pub mod week_id;
pub mod work_day;

pub use location::Location;
pub use week_id::WeekId;
pub use work_day::{RecentDay, WeekRecord, WeekSummary, WorkDay};
