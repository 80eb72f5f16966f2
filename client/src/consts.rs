//! Compile-time settings for the upload and dashboard flow.

// ── Remote service ──────────────────────────────────────────────

/// Relay endpoint that forwards the document to the analysis service.
pub const ANALYZE_ENDPOINT: &str = "/analyze";

/// Multipart field name carrying the document.
pub const DOCUMENT_FIELD: &str = "pdf";

/// The only media type accepted from drag-and-drop.
pub const ACCEPTED_MIME_TYPE: &str = "application/pdf";

// ── Status feedback ─────────────────────────────────────────────

pub const EXTRACTING_MESSAGE: &str = "Extracting PDF text…";
pub const ANALYZING_MESSAGE: &str = "Analyzing report…";

/// Delay before the loader switches to [`ANALYZING_MESSAGE`].
pub const ANALYZING_STATUS_DELAY_MS: u32 = 1_800;

// ── Report defaults ─────────────────────────────────────────────

pub const SITUATION_FALLBACK: &str = "No summary available.";
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred.";

// ── Counters ────────────────────────────────────────────────────

/// Counters reach their target in at most this many ticks.
pub const COUNTER_STEPS: usize = 20;

/// Interval between counter ticks.
pub const COUNTER_TICK_MS: u32 = 50;
