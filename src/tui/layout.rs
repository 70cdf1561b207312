//! Dialog placement helpers

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Center a percentage-sized rect inside `area`
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    area
}

/// Center a fixed-size rect inside `area`, clamped to fit
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fixed_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect_fixed(50, 10, area);
        assert_eq!(rect.width, 50);
        assert_eq!(rect.height, 10);
        assert_eq!(rect.x, 25);
        assert_eq!(rect.y, 15);
    }

    #[test]
    fn test_centered_rect_fixed_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect_fixed(50, 10, area);
        assert!(rect.width <= area.width);
        assert!(rect.height <= area.height);
    }

    #[test]
    fn test_centered_rect_percentage() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(60, 50, area);
        assert_eq!(rect.width, 60);
        assert_eq!(rect.height, 20);
    }
}
