use std::collections::HashMap;

use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Align, Border, Direction, Justify, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn shrink(self, top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            x: self.x.saturating_add(left),
            y: self.y.saturating_add(top),
            width: self.width.saturating_sub(left + right),
            height: self.height.saturating_sub(top + bottom),
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

pub type LayoutResult = HashMap<String, Rect>;

/// Lay out an element tree within the available area.
///
/// Produces a map from element id to its assigned rectangle. The pass is
/// a single top-down flex computation: Fixed sizes are taken as-is, Auto
/// sizes are estimated from content, and remaining main-axis space is
/// split evenly between Fill children.
pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();

    let width = resolve_size(element.width, available.width, element, true);
    let height = resolve_size(element.height, available.height, element, false);
    let rect = Rect::new(available.x, available.y, width, height);
    result.insert(element.id.clone(), rect);

    layout_children(element, rect, &mut result);
    result
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    if children.is_empty() {
        return;
    }

    let border_size = if element.style.border == Border::None {
        0
    } else {
        1
    };

    let inner = rect.shrink(
        element.padding.top + border_size,
        element.padding.right + border_size,
        element.padding.bottom + border_size,
        element.padding.left + border_size,
    );

    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_size = if is_row { inner.height } else { inner.width };

    // First pass: fixed/auto sizes and Fill count
    let mut fixed_total = 0u16;
    let mut fill_count = 0u16;
    let gap_total = element.gap * children.len().saturating_sub(1) as u16;

    for child in children {
        let child_main = if is_row { child.width } else { child.height };
        match child_main {
            Size::Fixed(n) => fixed_total += n,
            Size::Auto => fixed_total += estimate_size(child, is_row),
            Size::Fill => fill_count += 1,
        }
    }

    let remaining = main_size.saturating_sub(fixed_total + gap_total);
    let fill_size = if fill_count > 0 {
        remaining / fill_count
    } else {
        0
    };

    // Resolve main-axis sizes
    let mut child_sizes: Vec<u16> = Vec::with_capacity(children.len());
    let mut total_child_size = 0u16;

    for child in children {
        let child_main = if is_row { child.width } else { child.height };
        let main = match child_main {
            Size::Fixed(n) => n,
            Size::Auto => estimate_size(child, is_row),
            Size::Fill => fill_size,
        };
        child_sizes.push(main);
        total_child_size += main;
    }

    // Justify spacing
    let extra_space = main_size.saturating_sub(total_child_size + gap_total);
    let (start_offset, between_gap) = match element.justify {
        Justify::Start => (0, element.gap),
        Justify::End => (extra_space, element.gap),
        Justify::Center => (extra_space / 2, element.gap),
        Justify::SpaceBetween => {
            if children.len() > 1 {
                (0, extra_space / (children.len() - 1) as u16 + element.gap)
            } else {
                (0, element.gap)
            }
        }
    };

    // Second pass: assign rects
    let mut offset = start_offset;

    for (i, child) in children.iter().enumerate() {
        let main = child_sizes[i];
        let child_align = element.align;

        let child_cross = if is_row { child.height } else { child.width };
        let cross = match child_cross {
            Size::Fixed(n) => n,
            Size::Fill => cross_size,
            Size::Auto => {
                if child_align == Align::Stretch {
                    cross_size
                } else {
                    estimate_size(child, !is_row).min(cross_size)
                }
            }
        };

        let clamped_main = main.min(main_size.saturating_sub(offset));
        let clamped_cross = cross.min(cross_size);

        let cross_offset = match child_align {
            Align::Start | Align::Stretch => 0,
            Align::Center => cross_size.saturating_sub(clamped_cross) / 2,
            Align::End => cross_size.saturating_sub(clamped_cross),
        };

        let child_rect = if is_row {
            Rect::new(
                inner.x + offset,
                inner.y + cross_offset,
                clamped_main,
                clamped_cross,
            )
        } else {
            Rect::new(
                inner.x + cross_offset,
                inner.y + offset,
                clamped_cross,
                clamped_main,
            )
        };

        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);

        offset += main + between_gap;
    }
}

fn resolve_size(size: Size, available: u16, element: &Element, is_width: bool) -> u16 {
    match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill => available,
        Size::Auto => estimate_size(element, is_width).min(available),
    }
}

fn estimate_size(element: &Element, is_width: bool) -> u16 {
    let border_size = if element.style.border == Border::None {
        0
    } else {
        2
    };
    let padding = if is_width {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };

    let content_size = match &element.content {
        Content::Text(text) => {
            if is_width {
                display_width(text) as u16
            } else {
                text.lines().count().max(1) as u16
            }
        }
        Content::TextInput {
            value, placeholder, ..
        } => {
            if is_width {
                let placeholder_width = placeholder
                    .as_deref()
                    .map(display_width)
                    .unwrap_or(0);
                // +1 for the cursor cell at end of value
                (display_width(value) + 1).max(placeholder_width) as u16
            } else {
                1
            }
        }
        Content::Children(children) => {
            if children.is_empty() {
                0
            } else if (element.direction == Direction::Row) == is_width {
                // Sum along main axis
                let gap_total = element.gap * (children.len().saturating_sub(1)) as u16;
                children
                    .iter()
                    .map(|c| estimate_child_size(c, is_width))
                    .sum::<u16>()
                    + gap_total
            } else {
                // Max along cross axis
                children
                    .iter()
                    .map(|c| estimate_child_size(c, is_width))
                    .max()
                    .unwrap_or(0)
            }
        }
        Content::None => 0,
    };

    content_size + padding + border_size
}

fn estimate_child_size(child: &Element, is_width: bool) -> u16 {
    let size = if is_width { child.width } else { child.height };
    match size {
        Size::Fixed(n) => n,
        // Fill contributes nothing to the parent's intrinsic size
        Size::Fill => 0,
        Size::Auto => estimate_size(child, is_width),
    }
}
