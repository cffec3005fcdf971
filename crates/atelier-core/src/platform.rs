//! Seams to the visitor's platform: share sheet, clipboard, toasts, link opening.
//!
//! Implementations live with the front end; the core only drives them.

use crate::error::PlatformError;
use crate::share::ShareData;

/// Native share sheet, when the platform offers one.
pub trait ShareSheet: Send + Sync {
    /// Whether this payload can be shared natively.
    fn can_share(&self, data: &ShareData) -> bool;

    fn share(&self, data: &ShareData) -> Result<(), PlatformError>;
}

pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), PlatformError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }
}

/// Transient notifications. Fire and forget.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Opens a URL in a new browsing context.
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<(), PlatformError>;
}

// Recording implementations for testing
#[cfg(any(test, feature = "test-utils"))]
pub mod memory {
    use super::*;
    use std::sync::Mutex;

    /// Share sheet that records payloads and answers with a fixed result.
    pub struct RecordingShareSheet {
        supported: bool,
        result: Result<(), PlatformError>,
        shared: Mutex<Vec<ShareData>>,
    }

    impl RecordingShareSheet {
        pub fn succeeding() -> Self {
            Self {
                supported: true,
                result: Ok(()),
                shared: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(error: PlatformError) -> Self {
            Self {
                supported: true,
                result: Err(error),
                shared: Mutex::new(Vec::new()),
            }
        }

        /// A sheet that exists but refuses every payload.
        pub fn unsupported() -> Self {
            Self {
                supported: false,
                result: Err(PlatformError::Unsupported),
                shared: Mutex::new(Vec::new()),
            }
        }

        pub fn shared(&self) -> Vec<ShareData> {
            self.shared.lock().unwrap().clone()
        }
    }

    impl ShareSheet for RecordingShareSheet {
        fn can_share(&self, _data: &ShareData) -> bool {
            self.supported
        }

        fn share(&self, data: &ShareData) -> Result<(), PlatformError> {
            self.shared.lock().unwrap().push(data.clone());
            self.result.clone()
        }
    }

    #[derive(Default)]
    pub struct RecordingClipboard {
        fail: bool,
        contents: Mutex<Option<String>>,
    }

    impl RecordingClipboard {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                contents: Mutex::new(None),
            }
        }

        pub fn contents(&self) -> Option<String> {
            self.contents.lock().unwrap().clone()
        }
    }

    impl Clipboard for RecordingClipboard {
        fn write_text(&self, text: &str) -> Result<(), PlatformError> {
            if self.fail {
                return Err(PlatformError::Failed("clipboard permission denied".to_string()));
            }
            *self.contents.lock().unwrap() = Some(text.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    pub struct RecordingNotifier {
        toasts: Mutex<Vec<Toast>>,
    }

    impl RecordingNotifier {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn toasts(&self) -> Vec<Toast> {
            self.toasts.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, toast: Toast) {
            self.toasts.lock().unwrap().push(toast);
        }
    }

    #[derive(Default)]
    pub struct RecordingLinkOpener {
        opened: Mutex<Vec<String>>,
    }

    impl RecordingLinkOpener {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn opened(&self) -> Vec<String> {
            self.opened.lock().unwrap().clone()
        }
    }

    impl LinkOpener for RecordingLinkOpener {
        fn open(&self, url: &str) -> Result<(), PlatformError> {
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }
}
