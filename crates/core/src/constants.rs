/// Start used for a recurring definition that has neither a start date nor an anchor date
pub const RECURRENCE_EPOCH: (i32, u32, u32) = (1900, 1, 1);

/// Number of preceding calendar months sampled for the historical average
pub const DEFAULT_HISTORY_MONTHS: u32 = 3;

/// Trajectory points used by the recent-window baseline
pub const DEFAULT_RECENT_WINDOW_POINTS: usize = 7;

/// Months covered by the monthly overview
pub const DEFAULT_OVERVIEW_MONTHS: u32 = 12;

/// IANA zone used to turn stored UTC instants into calendar days
pub const DEFAULT_TIMEZONE: &str = "America/Sao_Paulo";
