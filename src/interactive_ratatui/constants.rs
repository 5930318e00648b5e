//! Constants for the interactive palette
//!
//! This module centralizes magic numbers and configuration values
//! to improve maintainability and make the codebase more self-documenting.

// Timing constants
/// Status message auto-clear delay in milliseconds
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Spinner frame interval in milliseconds
pub const SPINNER_INTERVAL_MS: u64 = 120;

// Streaming results
/// Quick-win suggestions shown after a URL analysis
pub const MAX_QUICK_WIN_RESULTS: usize = 3;

/// Ideas shown after a generation request
pub const MAX_IDEA_RESULTS: usize = 5;

/// Ideas requested from the backend by default
pub const DEFAULT_IDEA_COUNT: usize = 5;

/// Remote request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// UI Layout constants
/// Height of the palette input
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the palette status line
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Maximum width of the palette overlay
pub const PALETTE_MAX_WIDTH: u16 = 90;

/// Maximum height of the palette overlay
pub const PALETTE_MAX_HEIGHT: u16 = 26;

/// Maximum width for help dialog
pub const HELP_DIALOG_MAX_WIDTH: u16 = 70;

/// Minimum margin around help dialog
pub const HELP_DIALOG_MARGIN: u16 = 4;

/// Spinner frames shown while a run is in flight
pub const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];
