//! End-date follows start-date until the user edits it

/// Tracks whether the end-date field has been touched.
///
/// Once touched, the end date never follows the start date again for the
/// lifetime of the page. The transition is one-way.
///
/// # Examples
///
/// ```
/// use exterminus_ui::models::DateRangeSync;
///
/// let mut sync = DateRangeSync::new();
/// assert_eq!(sync.on_start_input("2025-07-01"), Some("2025-07-01".to_string()));
///
/// sync.on_end_input();
/// assert_eq!(sync.on_start_input("2025-07-04"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRangeSync {
    end_touched: bool,
}

impl DateRangeSync {
    #[must_use]
    pub const fn new() -> Self {
        Self { end_touched: false }
    }

    /// Value to seed an empty end field with on setup, if any.
    ///
    /// A pre-filled end field (e.g. a form re-rendered after a failed
    /// submit) is left alone.
    #[must_use]
    pub fn initial_end(start: &str, end: &str) -> Option<String> {
        end.is_empty().then(|| start.to_string())
    }

    /// Records a user edit of the end field
    pub const fn on_end_input(&mut self) {
        self.end_touched = true;
    }

    /// New end value after the user edits the start field
    #[must_use]
    pub fn on_start_input(&self, start: &str) -> Option<String> {
        (!self.end_touched).then(|| start.to_string())
    }

    #[must_use]
    pub const fn is_touched(&self) -> bool {
        self.end_touched
    }
}
