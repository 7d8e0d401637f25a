//! Screen regions derived from the battery and status bar constants.

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::config::{ICON_HEIGHT, ICON_WIDTH, STATUS_HEIGHT_BAR};
use crate::util::get_min;

/// Left edge of the battery icon, which sits flush with the right edge.
pub fn icon_pos_x(display_width: u32) -> i32 {
    display_width.saturating_sub(ICON_WIDTH) as i32
}

pub fn battery_icon_area(display: Size) -> Rectangle {
    Rectangle::new(
        Point::new(icon_pos_x(display.width), 0),
        Size::new(ICON_WIDTH, ICON_HEIGHT),
    )
}

/// Full-width strip along the top edge, clamped to the display height.
pub fn status_bar_area(display: Size) -> Rectangle {
    Rectangle::new(
        Point::zero(),
        Size::new(display.width, get_min(STATUS_HEIGHT_BAR, display.height)),
    )
}
