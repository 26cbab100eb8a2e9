use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;

/// A centered rect of at most `width` x `height` inside `area`
pub(super) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

/// Truncate to a display width, appending an ellipsis when cut. Text that
/// already fits is returned whole; the ellipsis cell is only reserved once
/// truncation is actually needed.
pub(super) fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let cw = c.width().unwrap_or(0);
        if width + cw > max_width.saturating_sub(1) {
            break;
        }
        width += cw;
        out.push(c);
    }
    out.push('…');
    out
}
