use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

/// Absolute-position text writer over a frame buffer.
///
/// Writes are best effort: anything past the right edge is cut off and a
/// line that starts outside the area is dropped. Nothing here can fail.
pub struct Canvas<'a> {
    buf: &'a mut Buffer,
    area: Rect,
}

impl<'a> Canvas<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect) -> Self {
        let area = area.intersection(buf.area);
        Self { buf, area }
    }

    pub fn height(&self) -> u16 {
        self.area.height
    }

    pub fn put(&mut self, x: u16, y: u16, text: &str, style: Style) {
        if y >= self.area.height || x >= self.area.width {
            return;
        }
        let max_width = (self.area.width - x) as usize;
        self.buf
            .set_stringn(self.area.x + x, self.area.y + y, text, max_width, style);
    }

    /// Horizontally centered; falls back to the left edge when too wide.
    pub fn put_centered(&mut self, y: u16, text: &str, style: Style) {
        let text_width = u16::try_from(text.width()).unwrap_or(u16::MAX);
        let x = self.area.width.saturating_sub(text_width) / 2;
        self.put(x, y, text, style);
    }
}
