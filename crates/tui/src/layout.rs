//! Centralized layout measurements for the TUI.
//!
//! This module defines shared constants for layout dimensions used across
//! multiple rendering components and by mouse hit-testing in the app.

/// Height of the header bar in rows (title and stats inside a border).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the creation form: three fields plus the border.
pub const FORM_HEIGHT: u16 = 5;

/// Height of the filter tab strip.
pub const TABS_HEIGHT: u16 = 1;

/// Height of the status bar.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Rows used by one task in the list: the title line and the detail line.
pub const TASK_ROW_HEIGHT: u16 = 2;

/// Minimum terminal height for useful rendering.
///
/// Form, tabs, status bar and a bordered list with room for two tasks.
pub const MIN_HEIGHT: u16 = FORM_HEIGHT + TABS_HEIGHT + STATUS_BAR_HEIGHT + 2 + 2 * TASK_ROW_HEIGHT;

/// Minimum terminal height for rendering with header.
///
/// Below this height the header is hidden to give the list more room.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// Wide enough for the three filter tabs with their counts.
pub const MIN_WIDTH: u16 = 50;
