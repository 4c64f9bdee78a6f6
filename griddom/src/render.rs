use crate::buffer::Buffer;
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{align_offset, char_width, display_width};
use crate::types::{Border, ColorContext, Rgb, Style, TextStyle};

/// Render an element tree into a cell buffer.
///
/// Elements are painted in tree order: background fill, border, then
/// content. Children paint over their parents, so containers provide the
/// backdrop for nested text.
pub fn render_to_buffer(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    color_ctx: &ColorContext,
) {
    render_element(element, layout, buf, color_ctx, None);
}

fn render_element(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    color_ctx: &ColorContext,
    clip: Option<Rect>,
) {
    let Some(rect) = layout.get(&element.id).copied() else {
        return;
    };

    if rect.is_empty() {
        return;
    }

    let style = effective_style(element);
    let fg = style.foreground.as_ref().map(|c| color_ctx.resolve(c));
    let bg = style.background.as_ref().map(|c| color_ctx.resolve(c));

    // Background fill
    if let Some(bg) = bg {
        fill_background(buf, rect, clip, bg);
    }

    // Border
    if style.border != Border::None {
        draw_border(buf, rect, clip, style.border, fg, bg);
    }

    let border_size = if style.border == Border::None { 0 } else { 1 };
    let inner = rect.shrink(
        element.padding.top + border_size,
        element.padding.right + border_size,
        element.padding.bottom + border_size,
        element.padding.left + border_size,
    );

    match &element.content {
        Content::Text(text) => {
            render_text(
                buf,
                inner,
                clip,
                text,
                element.text_align,
                fg,
                bg,
                style.text_style,
            );
        }
        Content::TextInput {
            value,
            cursor,
            placeholder,
            focused,
            mask,
        } => {
            render_text_input(
                buf,
                inner,
                clip,
                value,
                *cursor,
                placeholder.as_deref(),
                *focused,
                *mask,
                fg,
                bg,
                style.text_style,
                color_ctx,
            );
        }
        Content::Children(children) => {
            // Children of a bordered/padded element are clipped to its
            // inner rect so overflow never paints over the frame.
            let child_clip = intersect(clip, inner);
            for child in children {
                render_element(child, layout, buf, color_ctx, Some(child_clip));
            }
        }
        Content::None => {}
    }
}

/// Resolve the style for the element's current interaction state.
fn effective_style(element: &Element) -> Style {
    if element.disabled {
        if let Some(style) = &element.style_disabled {
            return style.clone();
        }
    }
    if element.focused {
        if let Some(style) = &element.style_focused {
            return style.clone();
        }
    }
    element.style.clone()
}

fn intersect(clip: Option<Rect>, rect: Rect) -> Rect {
    let Some(clip) = clip else {
        return rect;
    };
    let x1 = rect.x.max(clip.x);
    let y1 = rect.y.max(clip.y);
    let x2 = rect.right().min(clip.right());
    let y2 = rect.bottom().min(clip.bottom());
    Rect::new(
        x1,
        y1,
        x2.saturating_sub(x1),
        y2.saturating_sub(y1),
    )
}

fn in_clip(clip: Option<Rect>, x: u16, y: u16) -> bool {
    clip.map(|c| c.contains(x, y)).unwrap_or(true)
}

fn fill_background(buf: &mut Buffer, rect: Rect, clip: Option<Rect>, bg: Rgb) {
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            if !in_clip(clip, x, y) {
                continue;
            }
            if let Some(cell) = buf.get_mut(x, y) {
                cell.char = ' ';
                cell.bg = bg;
                cell.style = TextStyle::new();
            }
        }
    }
}

fn draw_border(
    buf: &mut Buffer,
    rect: Rect,
    clip: Option<Rect>,
    border: Border,
    fg: Option<Rgb>,
    bg: Option<Rgb>,
) {
    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let (tl, tr, bl, br, h, v) = match border {
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Double => ('╔', '╗', '╚', '╝', '═', '║'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
        Border::None => return,
    };

    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    let mut put = |buf: &mut Buffer, x: u16, y: u16, ch: char| {
        if !in_clip(clip, x, y) {
            return;
        }
        if let Some(cell) = buf.get_mut(x, y) {
            cell.char = ch;
            if let Some(fg) = fg {
                cell.fg = fg;
            }
            if let Some(bg) = bg {
                cell.bg = bg;
            }
        }
    };

    put(buf, rect.x, rect.y, tl);
    put(buf, right, rect.y, tr);
    put(buf, rect.x, bottom, bl);
    put(buf, right, bottom, br);

    for x in rect.x + 1..right {
        put(buf, x, rect.y, h);
        put(buf, x, bottom, h);
    }
    for y in rect.y + 1..bottom {
        put(buf, rect.x, y, v);
        put(buf, right, y, v);
    }
}

#[allow(clippy::too_many_arguments)]
fn render_text(
    buf: &mut Buffer,
    area: Rect,
    clip: Option<Rect>,
    text: &str,
    align: crate::types::TextAlign,
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    text_style: TextStyle,
) {
    if area.is_empty() {
        return;
    }

    for (line_idx, line) in text.lines().enumerate() {
        let y = area.y + line_idx as u16;
        if y >= area.bottom() {
            break;
        }

        let line = crate::text::truncate_to_width(line, area.width as usize);
        let offset = align_offset(display_width(&line), area.width as usize, align);
        let mut x = area.x + offset as u16;

        for ch in line.chars() {
            let w = char_width(ch).max(1) as u16;
            if x + w > area.right() {
                break;
            }
            if in_clip(clip, x, y) {
                if let Some(cell) = buf.get_mut(x, y) {
                    cell.char = ch;
                    if let Some(fg) = fg {
                        cell.fg = fg;
                    }
                    if let Some(bg) = bg {
                        cell.bg = bg;
                    }
                    cell.style = text_style;
                }
            }
            x += w;
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn render_text_input(
    buf: &mut Buffer,
    area: Rect,
    clip: Option<Rect>,
    value: &str,
    cursor: usize,
    placeholder: Option<&str>,
    focused: bool,
    mask: Option<char>,
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    text_style: TextStyle,
    color_ctx: &ColorContext,
) {
    if area.is_empty() {
        return;
    }

    let muted = color_ctx.resolve(&crate::types::Color::var("muted"));

    // Placeholder only when empty and not being edited
    let is_placeholder = value.is_empty() && !focused;
    let display: Vec<char> = if is_placeholder {
        placeholder.unwrap_or("").chars().collect()
    } else {
        match mask {
            Some(m) => value.chars().map(|_| m).collect(),
            None => value.chars().collect(),
        }
    };

    let visible_width = area.width as usize;

    // Scroll so the cursor stays visible
    let scroll = if focused && cursor + 1 > visible_width {
        cursor + 1 - visible_width
    } else {
        0
    };

    let mut x = area.x;
    for (i, ch) in display.iter().enumerate().skip(scroll) {
        let w = char_width(*ch).max(1) as u16;
        if x + w > area.right() {
            break;
        }
        if in_clip(clip, x, area.y) {
            if let Some(cell) = buf.get_mut(x, area.y) {
                cell.char = *ch;
                cell.fg = if is_placeholder {
                    muted
                } else {
                    fg.unwrap_or(cell.fg)
                };
                if let Some(bg) = bg {
                    cell.bg = bg;
                }
                cell.style = text_style;
                if focused && i == cursor {
                    // Invert at the cursor cell
                    std::mem::swap(&mut cell.fg, &mut cell.bg);
                }
            }
        }
        x += w;
    }

    // Cursor block past the end of the value
    if focused && cursor >= display.len() {
        let cursor_x = area.x + (display.len().saturating_sub(scroll)) as u16;
        if cursor_x < area.right() && in_clip(clip, cursor_x, area.y) {
            if let Some(cell) = buf.get_mut(cursor_x, area.y) {
                cell.char = ' ';
                std::mem::swap(&mut cell.fg, &mut cell.bg);
            }
        }
    }
}
