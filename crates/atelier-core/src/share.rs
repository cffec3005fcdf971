//! Best-effort sharing: native share sheet, else clipboard plus a toast.

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::artwork::Artwork;
use crate::error::PlatformError;
use crate::platform::{Clipboard, Notifier, ShareSheet, Toast};

pub const COPIED_MESSAGE: &str = "Link copied to clipboard!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareData {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareData {
    /// Payload with the default text for `title`.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            text: format!("Check out this amazing artwork: {}", title),
            title,
            url: url.into(),
        }
    }

    /// Payload pointing at the artwork page under `origin`.
    pub fn for_artwork(artwork: &Artwork, origin: &str) -> Self {
        Self {
            title: artwork.title.clone(),
            text: format!("Check out \"{}\" - {}", artwork.title, artwork.description),
            url: format!("{}/artwork/{}", origin.trim_end_matches('/'), artwork.id),
        }
    }

    pub fn clipboard_text(&self) -> String {
        format!("{}\n\n{}\n\n{}", self.title, self.text, self.url)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareOutcome {
    Shared,
    Copied,
    Failed,
}

/// Share `data` without ever surfacing an error.
///
/// A native sheet that accepts the payload is used exclusively; if it fails
/// the clipboard is not tried.
pub fn share(
    data: &ShareData,
    sheet: Option<&dyn ShareSheet>,
    clipboard: &dyn Clipboard,
    notifier: &dyn Notifier,
) -> ShareOutcome {
    if let Some(sheet) = sheet.filter(|s| s.can_share(data)) {
        return match sheet.share(data) {
            Ok(()) => ShareOutcome::Shared,
            Err(PlatformError::Cancelled) => {
                info!(title = %data.title, "Share cancelled");
                ShareOutcome::Failed
            }
            Err(e) => {
                error!(title = %data.title, error = %e, "Native share failed");
                ShareOutcome::Failed
            }
        };
    }

    match clipboard.write_text(&data.clipboard_text()) {
        Ok(()) => {
            notifier.notify(Toast::success(COPIED_MESSAGE));
            ShareOutcome::Copied
        }
        Err(e) => {
            error!(title = %data.title, error = %e, "Failed to copy to clipboard");
            ShareOutcome::Failed
        }
    }
}
