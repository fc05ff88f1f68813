use ratatui::layout::Rect;

/// Height of the text input box, borders included.
pub const INPUT_HEIGHT: u16 = 5;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub body: Rect,
    /// Present only while composing or editing.
    pub input: Option<Rect>,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect, show_input: bool) -> Regions {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let remaining = area
        .height
        .saturating_sub(header_height)
        .saturating_sub(footer_height);
    let input_height = if show_input {
        INPUT_HEIGHT.min(remaining)
    } else {
        0
    };

    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let input = show_input.then(|| Rect {
        x: area.x,
        y: footer.y.saturating_sub(input_height),
        width: area.width,
        height: input_height,
    });
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: remaining.saturating_sub(input_height),
    };

    Regions {
        header,
        body,
        input,
        footer,
    }
}

/// Fixed-size box anchored to one corner of `area`, shifted inwards by
/// `stack_index` boxes so several can sit on top of each other.
pub fn corner_rect(
    area: Rect,
    width: u16,
    height: u16,
    top: bool,
    right: bool,
    stack_index: u16,
) -> Option<Rect> {
    let width = width.min(area.width);
    let offset = height.checked_mul(stack_index)?;
    if offset.checked_add(height)? > area.height {
        return None;
    }
    let x = if right {
        area.x + area.width - width
    } else {
        area.x
    };
    let y = if top {
        area.y + offset
    } else {
        area.y + area.height - offset - height
    };
    Some(Rect {
        x,
        y,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        }
    }

    #[test]
    fn browse_layout_has_no_input() {
        let regions = layout_regions(screen(), false);
        assert!(regions.input.is_none());
        assert_eq!(regions.header.height, 3);
        assert_eq!(regions.footer.y, 21);
        assert_eq!(regions.body.height, 18);
    }

    #[test]
    fn input_sits_above_footer() {
        let regions = layout_regions(screen(), true);
        let input = regions.input.expect("input region");
        assert_eq!(input.height, INPUT_HEIGHT);
        assert_eq!(input.y + input.height, regions.footer.y);
        assert_eq!(regions.body.height, 18 - INPUT_HEIGHT);
    }

    #[test]
    fn tiny_screen_does_not_underflow() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 10,
            height: 4,
        };
        let regions = layout_regions(area, true);
        assert_eq!(regions.body.height, 0);
        assert_eq!(regions.input.map(|r| r.height), Some(0));
    }

    #[test]
    fn corner_rect_stacks_from_top_right() {
        let first = corner_rect(screen(), 30, 3, true, true, 0).unwrap();
        let second = corner_rect(screen(), 30, 3, true, true, 1).unwrap();
        assert_eq!((first.x, first.y), (50, 0));
        assert_eq!((second.x, second.y), (50, 3));
    }

    #[test]
    fn corner_rect_stacks_from_bottom_left() {
        let first = corner_rect(screen(), 30, 3, false, false, 0).unwrap();
        assert_eq!((first.x, first.y), (0, 21));
    }

    #[test]
    fn corner_rect_gives_up_when_full() {
        assert!(corner_rect(screen(), 30, 3, true, true, 8).is_none());
    }
}
