pub mod app;
pub mod edit_dialog;
pub mod form;
pub mod toast;

use ratatui::{
    layout::Rect,
    style::{
        palette::tailwind::{BLUE, GREEN, ORANGE, RED, SLATE},
        Color,
    },
};

use crate::tasks::Priority;

pub const TEXT_FG_COLOR: Color = SLATE.c200;
pub const MUTED_FG_COLOR: Color = SLATE.c400;
pub const BORDER_COLOR: Color = SLATE.c600;
pub const FOCUS_COLOR: Color = BLUE.c400;
pub const SUCCESS_COLOR: Color = GREEN.c500;
pub const ERROR_COLOR: Color = RED.c500;
pub const POPUP_BG: Color = SLATE.c900;

pub const fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => RED.c500,
        Priority::Medium => ORANGE.c500,
        Priority::Low => GREEN.c600,
    }
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_fits_inside() {
        let area = Rect::new(0, 0, 100, 30);
        assert_eq!(centered(area, 50, 10), Rect::new(25, 10, 50, 10));
        assert_eq!(centered(Rect::new(0, 0, 20, 5), 50, 10), Rect::new(0, 0, 20, 5));
    }
}
