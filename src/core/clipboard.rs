//! System clipboard access.

use crate::error::BrowseError;

/// Destination for the `cd` command built when `.` is activated.
pub trait Clipboard {
    fn write(&mut self, text: &str) -> Result<(), BrowseError>;
}

/// The OS clipboard through `arboard`. The handle is opened on first use so a
/// session that never copies anything never touches the display server.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl Clipboard for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<(), BrowseError> {
        let clipboard = match self.inner.take() {
            Some(c) => c,
            None => {
                arboard::Clipboard::new().map_err(|e| BrowseError::Clipboard(e.to_string()))?
            }
        };
        let clipboard = self.inner.insert(clipboard);
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| BrowseError::Clipboard(e.to_string()))
    }
}
