pub const ANALYTICS_EVENTS_ENDPOINT: &str = "/api/analytics/events";
pub const ANALYTICS_SUMMARY_ENDPOINT: &str = "/api/analytics/summary";
pub const CONFIG_ENDPOINT: &str = "/api/config";

pub const DEFAULT_REDIRECT_URL: &str = "https://m.fun88ind.com/";

pub const SELECT_PROMPT_MESSAGE: &str = "SELECT A NUMBER TO BET";
pub const MISSING_SELECTION_MESSAGE: &str = "⚠️ PLEASE SELECT A NUMBER";
pub const SPINNING_MESSAGE: &str = "SPINNING...";
pub const LIMIT_REACHED_MESSAGE: &str = "LIMIT REACHED";

pub const INVALID_EVENT_TYPE_ERROR: &str = "Event type must be 1-64 characters of a-z, 0-9 or _";
pub const INVALID_DETAILS_ERROR: &str = "Event details must be at most 256 characters";

pub const MAX_EVENT_TYPE_LENGTH: usize = 64;
pub const MAX_DETAILS_LENGTH: usize = 256;
