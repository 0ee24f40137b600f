//! Border and title drawing on the frame surface.

use tracing::warn;
use unicode_width::UnicodeWidthChar;
use wdg_common::Align;
use wdg_curses::{Attr, Surface};

use crate::widget::{Flags, WidgetColors};

/// Column the title starts at on a frame `cols` wide, before clamping.
///
/// Left-aligned titles start three cells in, right-aligned ones end three
/// cells before the right edge, centered ones split the remaining space.
pub(crate) fn title_column(cols: usize, width: usize, align: Align) -> isize {
    let cols = cols as isize;
    let width = width as isize;
    match align {
        Align::Left => 3,
        Align::Center => (cols - width) / 2,
        Align::Right => cols - width - 3,
    }
}

/// Display width of a title character. Control characters are drawn as a
/// blank, see [`fit_title`].
fn char_width(c: char) -> usize {
    if c.is_control() {
        1
    } else {
        c.width().unwrap_or(0)
    }
}

pub(crate) fn text_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Where and what to draw for `title` on a frame `cols` wide.
///
/// The start column is clamped into the border interior `[1, cols - 2]`
/// and the text is cut so that it ends before the top-right corner. Titles
/// that fit are placed exactly as [`title_column`] says. Returns `None`
/// when there is no room for even one cell.
pub(crate) fn fit_title(cols: usize, title: &str, align: Align) -> Option<(usize, String)> {
    if cols < 3 {
        return None;
    }
    let last = cols - 2;
    let col = title_column(cols, text_width(title), align).clamp(1, last as isize) as usize;
    let room = last + 1 - col;

    let mut used = 0;
    let mut text = String::new();
    for c in title.chars() {
        let w = char_width(c);
        if used + w > room {
            break;
        }
        used += w;
        text.push(if c.is_control() { ' ' } else { c });
    }
    if text.is_empty() {
        None
    } else {
        Some((col, text))
    }
}

/// Draw the box and the title.
///
/// A focused window gets a bold border in the focus pair; the title is
/// written in the title pair, which stays the frame background afterwards.
pub(crate) fn draw_border(
    frame: &mut Surface,
    flags: Flags,
    colors: &WidgetColors,
    title: Option<&str>,
    align: Align,
) {
    let cols = frame.cols();
    let bold: &[Attr] = if flags.focused { &[Attr::Bold] } else { &[] };
    let mut frame = frame.attr_scope(bold);

    frame.set_background(if flags.focused {
        colors.focus
    } else {
        colors.border
    });
    frame.draw_box();

    frame.set_background(colors.title);
    if let Some((col, text)) = title.and_then(|t| fit_title(cols, t, align)) {
        if let Err(e) = frame.mv_add_str(0, col, &text) {
            warn!("failed to draw window title: {e}");
        }
    }
}
