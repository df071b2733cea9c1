use base64::{engine::general_purpose::STANDARD, Engine as _};
use lotto_draw::{Clipboard, DrawError};
use std::cell::RefCell;
use std::io::Write;

/// Sets the terminal clipboard with an OSC 52 escape sequence.
///
/// Terminals that don't support OSC 52 silently ignore it.
pub struct Osc52Clipboard<W: Write> {
    out: RefCell<W>,
}

impl Osc52Clipboard<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn write_text(&self, text: &str) -> lotto_draw::Result<()> {
        let mut out = self.out.borrow_mut();
        out.write_all(osc52_sequence(text).as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| DrawError::clipboard(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_osc52_payload() {
        let clipboard = Osc52Clipboard::new(Vec::new());
        clipboard.write_text("3, 9, 27, 28, 38, 39").unwrap();

        let written = String::from_utf8(clipboard.into_inner()).unwrap();
        assert_eq!(written, "\x1b]52;c;MywgOSwgMjcsIDI4LCAzOCwgMzk=\x07");
    }

    #[test]
    fn test_write_failure_is_clipboard_error() {
        let clipboard = Osc52Clipboard::new(BrokenPipe);
        assert!(matches!(
            clipboard.write_text("1, 2, 3, 4, 5, 6"),
            Err(DrawError::Clipboard(_))
        ));
    }
}
