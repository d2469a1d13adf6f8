use std::time::Duration;

pub(crate) const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub(crate) const TICK_RATE: Duration = Duration::from_millis(100);

/// Search keystrokes settle for this long before a fetch is issued.
pub(crate) const SEARCH_DEBOUNCE: Duration = Duration::from_millis(400);
/// Rapid page flips within this window collapse into one fetch.
pub(crate) const PAGE_DEBOUNCE: Duration = Duration::from_millis(100);
pub(crate) const TOAST_TTL: Duration = Duration::from_secs(5);

pub(crate) const PAGE_SIZES: [u32; 3] = [10, 25, 50];

pub(crate) const SKELETON_CELL: &str = "▒▒▒▒▒▒▒▒";

pub(crate) const STATUS_SEARCH: &str =
    "Search — type to filter, Enter applies now, Esc closes";
pub(crate) const STATUS_FORM: &str =
    "Tab/Shift+Tab move between fields • ←/→ cycle choices • Enter submit • Esc cancel";
pub(crate) const STATUS_CONFIRM_DELETE: &str =
    "Confirm deletion — arrows choose, Enter confirms, Esc cancels";
pub(crate) const STATUS_VIEW_DETAILS: &str = "Viewing details • Enter/Esc to close";
pub(crate) const STATUS_HELP: &str = "Keyboard reference — Enter/Esc to close";
pub(crate) const STATUS_READ_ONLY: &str = "This view is read-only";
