//! Swipe gestures from mouse drags.
//!
//! A drag is classified by its dominant axis: whichever of the horizontal and
//! vertical deltas has the larger magnitude wins, with ties going vertical.
//! Drags shorter than the dead zone on both axes are ignored.
//!
//! Terminal cells are roughly twice as tall as they are wide, so vertical
//! distances are doubled before comparing.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::Direction;

/// Minimum drag length (in columns) before a swipe registers.
pub const DEFAULT_DEAD_ZONE: i32 = 2;

/// Classify a drag delta; `None` inside the dead zone.
pub fn classify_swipe(dx: i32, dy: i32, dead_zone: i32) -> Option<Direction> {
    let dead_zone = dead_zone.max(1);
    if dx.abs() < dead_zone && dy.abs() < dead_zone {
        return None;
    }

    if dx.abs() > dy.abs() {
        if dx > 0 {
            Some(Direction::Right)
        } else {
            Some(Direction::Left)
        }
    } else if dy > 0 {
        Some(Direction::Down)
    } else {
        Some(Direction::Up)
    }
}

/// Tracks the press position of the left mouse button.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    origin: Option<(u16, u16)>,
    dead_zone: i32,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::with_dead_zone(DEFAULT_DEAD_ZONE)
    }

    pub fn with_dead_zone(dead_zone: i32) -> Self {
        Self {
            origin: None,
            dead_zone,
        }
    }

    /// Feed a mouse event; returns a direction once a drag leaves the dead zone.
    ///
    /// After a swipe fires, the origin moves to the current position so one
    /// continuous drag can steer several times.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> Option<Direction> {
        let here = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.origin = Some(here);
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let direction = self.classify_from_origin(here)?;
                self.origin = Some(here);
                Some(direction)
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let direction = self.classify_from_origin(here);
                self.origin = None;
                direction
            }
            _ => None,
        }
    }

    fn classify_from_origin(&self, here: (u16, u16)) -> Option<Direction> {
        let (ox, oy) = self.origin?;
        let dx = here.0 as i32 - ox as i32;
        let dy = (here.1 as i32 - oy as i32) * 2;
        classify_swipe(dx, dy, self.dead_zone)
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn classify_picks_dominant_axis() {
        assert_eq!(classify_swipe(5, 1, 2), Some(Direction::Right));
        assert_eq!(classify_swipe(-5, 3, 2), Some(Direction::Left));
        assert_eq!(classify_swipe(1, 4, 2), Some(Direction::Down));
        assert_eq!(classify_swipe(0, -4, 2), Some(Direction::Up));
    }

    #[test]
    fn classify_ties_go_vertical() {
        assert_eq!(classify_swipe(3, 3, 2), Some(Direction::Down));
        assert_eq!(classify_swipe(-3, -3, 2), Some(Direction::Up));
    }

    #[test]
    fn classify_ignores_dead_zone() {
        assert_eq!(classify_swipe(0, 0, 2), None);
        assert_eq!(classify_swipe(1, -1, 2), None);
        assert_eq!(classify_swipe(0, 0, 0), None);
    }

    #[test]
    fn tracker_fires_on_release() {
        let mut t = SwipeTracker::new();
        assert_eq!(t.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 10)), None);
        assert_eq!(
            t.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 4, 10)),
            Some(Direction::Left)
        );
    }

    #[test]
    fn tracker_fires_during_drag_and_rebases() {
        let mut t = SwipeTracker::new();
        t.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 10));
        assert_eq!(
            t.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 10, 12)),
            Some(Direction::Down)
        );
        // Small wobble after the swipe does not fire again.
        assert_eq!(t.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 11, 12)), None);
        assert_eq!(
            t.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 16, 12)),
            Some(Direction::Right)
        );
        assert_eq!(t.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 16, 12)), None);
    }

    #[test]
    fn tracker_scales_rows() {
        let mut t = SwipeTracker::new();
        t.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 10));
        // 3 columns right vs 2 rows up (4 column-equivalents): vertical wins.
        assert_eq!(
            t.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 13, 8)),
            Some(Direction::Up)
        );
    }

    #[test]
    fn tracker_ignores_drag_without_press() {
        let mut t = SwipeTracker::new();
        assert_eq!(t.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 30, 1)), None);
        assert_eq!(t.handle_mouse(mouse(MouseEventKind::Moved, 0, 0)), None);
    }
}
