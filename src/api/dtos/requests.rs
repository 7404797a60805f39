use serde::Deserialize;

#[derive(Deserialize)]
pub struct CalendarQuery {
    /// Zero-based month index; defaults to the current month, clamped into
    /// the navigable range.
    pub month: Option<u32>,
}

#[derive(Deserialize)]
pub struct SelectionRequest {
    pub month: Option<u32>,
    pub day: u32,
    pub time_zone: Option<String>,
    pub use_24h_clock: Option<bool>,
}

#[derive(Deserialize)]
pub struct SlotsQuery {
    pub date: String,
    pub time_format: Option<String>,
}

#[derive(Deserialize)]
pub struct PageQuery {
    #[serde(rename = "rescheduleUid")]
    pub reschedule_uid: Option<String>,
}
