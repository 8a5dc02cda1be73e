//! Notification slot.
//!
//! Single-slot toast state machine, kept out of the view layer so the
//! replace and dismiss semantics are plain unit tests. A new notification
//! replaces the current one in place. Dismissal is two-phase: the toast first
//! enters a leaving state (the widget animates it out), then it is removed.
//! Both phases are keyed by the toast id, so a superseded toast's timers
//! cannot touch its replacement.

/// Notification severity. Fixed icon and color per severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
    Warning,
}

impl Severity {
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "✕",
            Severity::Info => "ℹ",
            Severity::Warning => "⚠",
        }
    }

    pub fn bg_class(self) -> &'static str {
        match self {
            Severity::Success => "bg-green-600",
            Severity::Error => "bg-red-600",
            Severity::Info => "bg-blue-600",
            Severity::Warning => "bg-yellow-600",
        }
    }
}

/// One notification occupying the slot.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    /// Monotonic id; dismiss timers only act on their own toast.
    pub id: u64,
    pub severity: Severity,
    pub text: String,
    /// True while the exit animation runs.
    pub leaving: bool,
}

/// The single toast slot.
#[derive(Debug, Default)]
pub struct ToastSlot {
    current: Option<ToastMessage>,
    next_id: u64,
}

impl ToastSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notification, replacing whatever occupies the slot.
    /// Returns the new toast's id for the dismiss timers.
    pub fn show(&mut self, severity: Severity, text: &str) -> u64 {
        self.next_id += 1;
        self.current = Some(ToastMessage {
            id: self.next_id,
            severity,
            text: text.to_string(),
            leaving: false,
        });
        self.next_id
    }

    /// Start the exit animation for toast `id`. Returns false when that toast
    /// no longer owns the slot (superseded, already leaving, or gone).
    pub fn begin_dismiss(&mut self, id: u64) -> bool {
        match &mut self.current {
            Some(toast) if toast.id == id && !toast.leaving => {
                toast.leaving = true;
                true
            }
            _ => false,
        }
    }

    /// Drop toast `id` once its exit animation has run.
    pub fn finish_dismiss(&mut self, id: u64) {
        if self.current.as_ref().map(|t| t.id) == Some(id) {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&ToastMessage> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_replaces_in_place() {
        let mut slot = ToastSlot::new();
        let first = slot.show(Severity::Success, "saved");
        let second = slot.show(Severity::Error, "failed");

        assert!(second > first);
        let current = slot.current().unwrap();
        assert_eq!(current.text, "failed");
        assert_eq!(current.severity, Severity::Error);
    }

    #[test]
    fn dismiss_runs_through_leaving_then_removed() {
        let mut slot = ToastSlot::new();
        let id = slot.show(Severity::Info, "hello");

        assert!(slot.begin_dismiss(id));
        assert!(slot.current().unwrap().leaving);

        slot.finish_dismiss(id);
        assert!(slot.current().is_none());
    }

    #[test]
    fn stale_timer_cannot_touch_the_replacement() {
        let mut slot = ToastSlot::new();
        let first = slot.show(Severity::Success, "one");
        let _second = slot.show(Severity::Warning, "two");

        assert!(!slot.begin_dismiss(first));
        slot.finish_dismiss(first);

        let current = slot.current().unwrap();
        assert_eq!(current.text, "two");
        assert!(!current.leaving);
    }

    #[test]
    fn begin_dismiss_is_one_shot() {
        let mut slot = ToastSlot::new();
        let id = slot.show(Severity::Info, "once");

        assert!(slot.begin_dismiss(id));
        assert!(!slot.begin_dismiss(id));
    }

    #[test]
    fn severity_presentation_is_fixed() {
        assert_eq!(Severity::Success.icon(), "✓");
        assert_eq!(Severity::Warning.bg_class(), "bg-yellow-600");
    }
}
