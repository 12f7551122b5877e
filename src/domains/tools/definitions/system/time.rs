//! System time tool definition.
//!
//! Reports the server wall-clock time in India Standard Time, formatted the
//! way the `en-IN` locale renders a date and time.

use chrono::{DateTime, FixedOffset, Utc};
use rmcp::model::JsonObject;

use super::super::ToolExecutor;
use crate::domains::tools::error::{ToolError, ToolResult};
use crate::domains::tools::schema::ObjectSchema;

/// IST is UTC+05:30 with no daylight saving.
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// `en-IN` short date and 12-hour time, e.g. `5/1/2024, 3:07:09 pm`.
const EN_IN_FORMAT: &str = "%-d/%-m/%Y, %-I:%M:%S %P";

/// Source of the current time.
pub type Clock = fn() -> DateTime<Utc>;

/// System time tool - reports the current server time.
#[derive(Debug, Clone)]
pub struct SystemTimeTool {
    clock: Clock,
}

impl SystemTimeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_system_time";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the current time from the server";

    /// A tool reading the real system clock.
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    /// A tool reading from the given clock.
    pub fn with_clock(clock: Clock) -> Self {
        Self { clock }
    }

    /// Format an instant as the tool's result text.
    pub fn format_server_time(now: DateTime<Utc>) -> ToolResult<String> {
        let ist = FixedOffset::east_opt(IST_OFFSET_SECS)
            .ok_or_else(|| ToolError::internal("invalid IST offset"))?;

        Ok(format!(
            "Server time is {}",
            now.with_timezone(&ist).format(EN_IN_FORMAT)
        ))
    }
}

impl Default for SystemTimeTool {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolExecutor for SystemTimeTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn input_contract(&self) -> ObjectSchema {
        ObjectSchema::new()
    }

    fn execute(&self, _arguments: &JsonObject) -> ToolResult<String> {
        Self::format_server_time((self.clock)())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone};

    fn fixed_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 5, 6, 30, 0).unwrap()
    }

    fn evening_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 12, 31, 20, 5, 9).unwrap()
    }

    #[test]
    fn test_fixed_clock_noon_ist() {
        let tool = SystemTimeTool::with_clock(fixed_clock);
        let text = tool.execute(&JsonObject::new()).unwrap();
        assert_eq!(text, "Server time is 5/1/2024, 12:00:00 pm");
    }

    #[test]
    fn test_day_rollover_into_ist() {
        let tool = SystemTimeTool::with_clock(evening_clock);
        let text = tool.execute(&JsonObject::new()).unwrap();
        assert_eq!(text, "Server time is 1/1/2024, 1:35:09 am");
    }

    #[test]
    fn test_real_clock_produces_parsable_timestamp() {
        let text = SystemTimeTool::new().execute(&JsonObject::new()).unwrap();
        let stamp = text
            .strip_prefix("Server time is ")
            .expect("prefix should be present");

        let parsed = NaiveDateTime::parse_from_str(stamp, "%d/%m/%Y, %I:%M:%S %p");
        assert!(parsed.is_ok(), "unparsable timestamp: {}", stamp);
    }

    #[test]
    fn test_arguments_are_ignored() {
        let mut arguments = JsonObject::new();
        arguments.insert("tz".to_string(), serde_json::json!("UTC"));
        let text = SystemTimeTool::with_clock(fixed_clock)
            .execute(&arguments)
            .unwrap();
        assert!(text.ends_with("12:00:00 pm"));
    }
}
