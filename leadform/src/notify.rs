//! Toast notices raised by the form.

/// Visual weight of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Lead stored
    Success,
    /// Something the visitor has to fix or retry
    Error,
}

impl Severity {
    /// CSS modifier used by the toaster (`toast-success`, `toast-error`).
    pub fn as_label(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

/// One toast: title, body line, severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Bold first line
    pub title: String,
    /// Explanation under the title
    pub description: String,
    /// Styling
    pub severity: Severity,
}

impl Notice {
    /// Error notice.
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Error,
        }
    }

    /// Success notice.
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Success,
        }
    }
}

/// Where notices go. The form never renders them itself.
pub trait Notifier {
    /// Show `notice` to the visitor.
    fn notify(&self, notice: Notice);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Collect(RefCell<Vec<Notice>>);

    impl Notifier for Collect {
        fn notify(&self, notice: Notice) {
            self.0.borrow_mut().push(notice);
        }
    }

    #[test]
    fn borrowed_notifier_forwards() {
        let sink = Collect::default();
        let by_ref = &sink;
        by_ref.notify(Notice::error("Oops", "try again"));
        assert_eq!(sink.0.borrow().len(), 1);
        assert_eq!(sink.0.borrow()[0].severity, Severity::Error);
    }

    #[test]
    fn severity_labels_are_css_modifiers() {
        assert_eq!(Severity::Success.as_label(), "success");
        assert_eq!(Severity::Error.as_label(), "error");
    }
}
