//! System clipboard backed by arboard

use codesplit::split::clipboard::Clipboard;
use codesplit::SplitError;

/// Opens the platform clipboard for every write
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), SplitError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| SplitError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| SplitError::Clipboard(e.to_string()))
    }
}
