//! # Clipboard Writer
//!
//! Copies text to the system clipboard, fire-and-forget.
//!
//! The primary path talks to the platform clipboard via `copypasta`. If that
//! is unavailable or fails (headless session, missing display server, remote
//! shell), the fallback writes an OSC 52 escape sequence to the controlling
//! terminal, which hands the text to whatever terminal emulator is attached.
//! The fallback is treated as infallible; callers always proceed to show a
//! confirmation.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use copypasta::{ClipboardContext, ClipboardProvider};
use crossterm::execute;
use crossterm::style::Print;
use std::io;

/// Copy `text` to the clipboard. Never reports failure to the caller.
pub fn copy_text(text: &str) {
    if let Ok(mut ctx) = ClipboardContext::new() {
        if ctx.set_contents(text.to_owned()).is_ok() {
            return;
        }
    }
    let _ = copy_via_osc52(text);
}

fn copy_via_osc52(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, Print(osc52_sequence(text)))
}

fn osc52_sequence(text: &str) -> String {
    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence_format() {
        let seq = osc52_sequence("★");
        assert!(seq.starts_with("\x1b]52;c;"));
        assert!(seq.ends_with("\x1b\\"));
    }

    #[test]
    fn test_osc52_payload_is_base64() {
        let seq = osc52_sequence("&#9733;");
        let payload = seq
            .strip_prefix("\x1b]52;c;")
            .and_then(|s| s.strip_suffix("\x1b\\"))
            .expect("framed sequence");
        let decoded = STANDARD.decode(payload).expect("valid base64");
        assert_eq!(decoded, "&#9733;".as_bytes());
    }
}
