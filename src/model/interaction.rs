//! Frameless window interaction
//!
//! The window has no native title bar or resize grips, so move and resize
//! behavior is derived purely from pointer coordinates relative to the
//! window bounds. The controller never touches the window itself: it
//! returns [`WindowEffect`] intents which the shell applies.

use super::geometry::{Point, Size, WindowGeometry};

// ═══════════════════════════════════════════════════════════════════════════════
// Edges
// ═══════════════════════════════════════════════════════════════════════════════

/// The subset of window edges a pointer position is close to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeSet {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl EdgeSet {
    pub const NONE: EdgeSet = EdgeSet {
        left: false,
        right: false,
        top: false,
        bottom: false,
    };

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        !(self.left || self.right || self.top || self.bottom)
    }

    /// Collapse the edge set into one of the eight named directions.
    ///
    /// Corners win over single edges; when a window is smaller than twice
    /// the margin both opposite edges can be set and left/top take priority.
    pub fn direction(&self) -> Option<ResizeDirection> {
        let direction = match (self.left, self.right, self.top, self.bottom) {
            (true, _, true, _) => ResizeDirection::TopLeft,
            (false, true, true, _) => ResizeDirection::TopRight,
            (true, _, false, true) => ResizeDirection::BottomLeft,
            (false, true, false, true) => ResizeDirection::BottomRight,
            (true, _, false, false) => ResizeDirection::Left,
            (false, true, false, false) => ResizeDirection::Right,
            (false, false, true, _) => ResizeDirection::Top,
            (false, false, false, true) => ResizeDirection::Bottom,
            (false, false, false, false) => return None,
        };
        Some(direction)
    }
}

/// Named resize direction: a single edge or a corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeDirection {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeDirection {
    /// The edges this direction drags
    pub fn edges(&self) -> EdgeSet {
        let mut edges = EdgeSet::NONE;
        match self {
            ResizeDirection::Left => edges.left = true,
            ResizeDirection::Right => edges.right = true,
            ResizeDirection::Top => edges.top = true,
            ResizeDirection::Bottom => edges.bottom = true,
            ResizeDirection::TopLeft => {
                edges.top = true;
                edges.left = true;
            }
            ResizeDirection::TopRight => {
                edges.top = true;
                edges.right = true;
            }
            ResizeDirection::BottomLeft => {
                edges.bottom = true;
                edges.left = true;
            }
            ResizeDirection::BottomRight => {
                edges.bottom = true;
                edges.right = true;
            }
        }
        edges
    }

    pub fn cursor(&self) -> CursorShape {
        match self {
            ResizeDirection::TopLeft | ResizeDirection::BottomRight => CursorShape::DiagonalNwSe,
            ResizeDirection::TopRight | ResizeDirection::BottomLeft => CursorShape::DiagonalNeSw,
            ResizeDirection::Left | ResizeDirection::Right => CursorShape::Horizontal,
            ResizeDirection::Top | ResizeDirection::Bottom => CursorShape::Vertical,
        }
    }
}

/// Pointer shape hint for the current hover position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    #[default]
    Arrow,
    Horizontal,
    Vertical,
    DiagonalNwSe,
    DiagonalNeSw,
}

impl CursorShape {
    /// Glyph used by the terminal shell to show the hint
    pub fn glyph(&self) -> &'static str {
        match self {
            CursorShape::Arrow => "➚",
            CursorShape::Horizontal => "↔",
            CursorShape::Vertical => "↕",
            CursorShape::DiagonalNwSe => "⤡",
            CursorShape::DiagonalNeSw => "⤢",
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Controller
// ═══════════════════════════════════════════════════════════════════════════════

/// What the current gesture does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    Idle,
    Moving,
    Resizing(ResizeDirection),
}

/// Geometry change requested by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEffect {
    /// Translate the window without changing its size
    MoveBy { dx: i32, dy: i32 },
    /// Replace the window geometry after a resize step
    ResizeTo {
        direction: ResizeDirection,
        geometry: WindowGeometry,
    },
}

impl WindowGeometry {
    pub fn apply(&mut self, effect: &WindowEffect) {
        match *effect {
            WindowEffect::MoveBy { dx, dy } => {
                self.x += dx;
                self.y += dy;
            }
            WindowEffect::ResizeTo { geometry, .. } => *self = geometry,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Gesture {
    /// Global pointer position at the previous step
    anchor: Point,
    mode: InteractionMode,
}

/// Converts raw pointer events into move/resize intents
#[derive(Debug)]
pub struct WindowInteractionController {
    resize_margin: i32,
    min_size: Size,
    gesture: Option<Gesture>,
    cursor: CursorShape,
}

impl WindowInteractionController {
    pub fn new(resize_margin: i32, min_size: Size) -> Self {
        Self {
            resize_margin,
            min_size,
            gesture: None,
            cursor: CursorShape::Arrow,
        }
    }

    pub fn min_size(&self) -> Size {
        self.min_size
    }

    pub fn cursor(&self) -> CursorShape {
        self.cursor
    }

    pub fn mode(&self) -> InteractionMode {
        self.gesture
            .map(|g| g.mode)
            .unwrap_or(InteractionMode::Idle)
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Classify a window-local position against the four edges
    pub fn classify(&self, local: Point, size: Size) -> EdgeSet {
        let inside =
            local.x >= 0 && local.x < size.width && local.y >= 0 && local.y < size.height;
        if !inside {
            return EdgeSet::NONE;
        }

        let margin = self.resize_margin;
        EdgeSet {
            left: local.x <= margin,
            right: local.x >= size.width - margin,
            top: local.y <= margin,
            bottom: local.y >= size.height - margin,
        }
    }

    /// Start a gesture at `local` (window coordinates) / `global` (screen)
    pub fn pointer_down(&mut self, local: Point, global: Point, size: Size) -> InteractionMode {
        let mode = match self.classify(local, size).direction() {
            Some(direction) => InteractionMode::Resizing(direction),
            None => InteractionMode::Moving,
        };

        self.gesture = Some(Gesture {
            anchor: global,
            mode,
        });
        mode
    }

    /// Track pointer motion.
    ///
    /// Always refreshes the cursor hint from the current position. Returns a
    /// geometry intent only while a gesture is active.
    pub fn pointer_move(
        &mut self,
        local: Point,
        global: Point,
        geometry: &WindowGeometry,
    ) -> Option<WindowEffect> {
        self.cursor = self
            .classify(local, geometry.size())
            .direction()
            .map(|d| d.cursor())
            .unwrap_or(CursorShape::Arrow);

        let gesture = self.gesture.as_mut()?;
        let delta = global - gesture.anchor;
        gesture.anchor = global;

        if delta == Point::default() {
            return None;
        }

        let effect = match gesture.mode {
            InteractionMode::Idle => return None,
            InteractionMode::Moving => WindowEffect::MoveBy {
                dx: delta.x,
                dy: delta.y,
            },
            InteractionMode::Resizing(direction) => WindowEffect::ResizeTo {
                direction,
                geometry: resize(geometry, direction, delta, self.min_size),
            },
        };
        Some(effect)
    }

    /// Finish the gesture and reset the cursor hint
    pub fn pointer_up(&mut self) {
        self.gesture = None;
        self.cursor = CursorShape::Arrow;
    }

    /// Drop any gesture in progress (used by maximize/restore)
    pub fn cancel(&mut self) {
        if self.gesture.take().is_some() {
            log::debug!("Pointer gesture cancelled");
        }
        self.cursor = CursorShape::Arrow;
    }
}

/// Apply one resize step, clamped to `min`.
///
/// Near edges (left/top) shift the origin by the delta actually consumed so
/// the opposite edge stays fixed when the clamp kicks in.
pub fn resize(
    geometry: &WindowGeometry,
    direction: ResizeDirection,
    delta: Point,
    min: Size,
) -> WindowGeometry {
    let edges = direction.edges();
    let mut next = *geometry;

    if edges.left {
        next.width = (geometry.width - delta.x).max(min.width);
        next.x = geometry.x + (geometry.width - next.width);
    } else if edges.right {
        next.width = (geometry.width + delta.x).max(min.width);
    }

    if edges.top {
        next.height = (geometry.height - delta.y).max(min.height);
        next.y = geometry.y + (geometry.height - next.height);
    } else if edges.bottom {
        next.height = (geometry.height + delta.y).max(min.height);
    }

    next
}

/// Stop a resize step at the edges of `bounds`.
///
/// Only the dragged edge is held back; the opposite edge keeps the position
/// it had before the step.
pub fn clamp_resize(
    geometry: &WindowGeometry,
    next: WindowGeometry,
    direction: ResizeDirection,
    bounds: Size,
    min: Size,
) -> WindowGeometry {
    let edges = direction.edges();
    let mut clamped = next;

    if edges.left && next.x < 0 {
        clamped.x = 0;
        clamped.width = (geometry.x + geometry.width).max(min.width);
    } else if edges.right && next.x + next.width > bounds.width {
        clamped.width = (bounds.width - next.x).max(min.width);
    }

    if edges.top && next.y < 0 {
        clamped.y = 0;
        clamped.height = (geometry.y + geometry.height).max(min.height);
    } else if edges.bottom && next.y + next.height > bounds.height {
        clamped.height = (bounds.height - next.y).max(min.height);
    }

    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> WindowInteractionController {
        WindowInteractionController::new(10, Size::new(400, 300))
    }

    #[test]
    fn test_interior_positions_have_no_edge() {
        let c = controller();
        let size = Size::new(800, 600);
        for x in [11, 100, 400, 789] {
            for y in [11, 300, 589] {
                let edges = c.classify(Point::new(x, y), size);
                assert!(edges.is_empty(), "({}, {}) classified as {:?}", x, y, edges);
            }
        }
    }

    #[test]
    fn test_classify_named_directions() {
        let c = controller();
        let size = Size::new(800, 600);
        let cases = [
            (Point::new(3, 4), ResizeDirection::TopLeft),
            (Point::new(795, 2), ResizeDirection::TopRight),
            (Point::new(0, 599), ResizeDirection::BottomLeft),
            (Point::new(790, 590), ResizeDirection::BottomRight),
            (Point::new(10, 300), ResizeDirection::Left),
            (Point::new(790, 300), ResizeDirection::Right),
            (Point::new(400, 0), ResizeDirection::Top),
            (Point::new(400, 595), ResizeDirection::Bottom),
        ];
        for (pos, expected) in cases {
            assert_eq!(c.classify(pos, size).direction(), Some(expected));
        }
    }

    #[test]
    fn test_outside_window_is_not_an_edge() {
        let c = controller();
        let size = Size::new(800, 600);
        assert!(c.classify(Point::new(-1, 5), size).is_empty());
        assert!(c.classify(Point::new(800, 5), size).is_empty());
        assert!(c.classify(Point::new(5, 600), size).is_empty());
    }

    #[test]
    fn test_pointer_down_inside_starts_move() {
        let mut c = controller();
        let mode = c.pointer_down(Point::new(200, 200), Point::new(300, 300), Size::new(800, 600));
        assert_eq!(mode, InteractionMode::Moving);
        assert!(c.is_active());
    }

    #[test]
    fn test_move_gesture_consumes_delta_per_step() {
        let mut c = controller();
        let mut geometry = WindowGeometry::new(100, 100, 800, 600);
        c.pointer_down(Point::new(200, 200), Point::new(300, 300), geometry.size());

        let effect = c
            .pointer_move(Point::new(200, 200), Point::new(305, 298), &geometry)
            .unwrap();
        assert_eq!(effect, WindowEffect::MoveBy { dx: 5, dy: -2 });
        geometry.apply(&effect);

        let effect = c
            .pointer_move(Point::new(200, 200), Point::new(306, 298), &geometry)
            .unwrap();
        assert_eq!(effect, WindowEffect::MoveBy { dx: 1, dy: 0 });
        geometry.apply(&effect);

        assert_eq!(geometry, WindowGeometry::new(106, 98, 800, 600));
    }

    #[test]
    fn test_top_left_resize_moves_origin_and_shrinks() {
        let mut c = controller();
        let mut geometry = WindowGeometry::new(100, 100, 800, 600);
        let mode = c.pointer_down(Point::new(2, 3), Point::new(102, 103), geometry.size());
        assert_eq!(mode, InteractionMode::Resizing(ResizeDirection::TopLeft));

        let effect = c
            .pointer_move(Point::new(2, 3), Point::new(122, 113), &geometry)
            .unwrap();
        geometry.apply(&effect);
        assert_eq!(geometry, WindowGeometry::new(120, 110, 780, 590));
    }

    #[test]
    fn test_top_left_resize_clamps_and_keeps_far_edges_fixed() {
        let geometry = WindowGeometry::new(100, 100, 450, 320);
        let next = resize(
            &geometry,
            ResizeDirection::TopLeft,
            Point::new(200, 100),
            Size::new(400, 300),
        );
        assert_eq!(next.width, 400);
        assert_eq!(next.height, 300);
        assert_eq!(next.x + next.width, 550);
        assert_eq!(next.y + next.height, 420);
    }

    #[test]
    fn test_right_edge_shrink_at_min_size_is_clamped() {
        let geometry = WindowGeometry::new(0, 0, 400, 300);
        let next = resize(
            &geometry,
            ResizeDirection::Right,
            Point::new(-50, 0),
            Size::new(400, 300),
        );
        assert_eq!(next.width, 400);
        assert_eq!(next.x, 0);
    }

    #[test]
    fn test_top_right_corner_changes_both_dimensions() {
        let geometry = WindowGeometry::new(50, 50, 500, 400);
        let next = resize(
            &geometry,
            ResizeDirection::TopRight,
            Point::new(30, -20),
            Size::new(400, 300),
        );
        assert_eq!(next, WindowGeometry::new(50, 30, 530, 420));
    }

    #[test]
    fn test_far_edges_only_change_size() {
        let geometry = WindowGeometry::new(10, 20, 500, 400);
        let next = resize(
            &geometry,
            ResizeDirection::BottomRight,
            Point::new(7, 9),
            Size::new(400, 300),
        );
        assert_eq!(next, WindowGeometry::new(10, 20, 507, 409));
    }

    #[test]
    fn test_resize_direction_fixed_for_gesture() {
        let mut c = controller();
        let mut geometry = WindowGeometry::new(0, 0, 800, 600);
        c.pointer_down(Point::new(795, 300), Point::new(795, 300), geometry.size());

        // Pointer drifts into the interior; the gesture is still a right-edge resize
        let effect = c
            .pointer_move(Point::new(400, 300), Point::new(780, 300), &geometry)
            .unwrap();
        geometry.apply(&effect);
        assert_eq!(geometry.width, 785);
        assert_eq!(c.mode(), InteractionMode::Resizing(ResizeDirection::Right));
        assert_eq!(c.cursor(), CursorShape::Arrow);
    }

    #[test]
    fn test_cursor_hint_tracks_hover_without_gesture() {
        let mut c = controller();
        let geometry = WindowGeometry::new(0, 0, 800, 600);
        let cases = [
            (Point::new(1, 1), CursorShape::DiagonalNwSe),
            (Point::new(799, 599), CursorShape::DiagonalNwSe),
            (Point::new(799, 1), CursorShape::DiagonalNeSw),
            (Point::new(1, 599), CursorShape::DiagonalNeSw),
            (Point::new(1, 300), CursorShape::Horizontal),
            (Point::new(400, 599), CursorShape::Vertical),
            (Point::new(400, 300), CursorShape::Arrow),
        ];
        for (pos, expected) in cases {
            assert!(c.pointer_move(pos, pos, &geometry).is_none());
            assert_eq!(c.cursor(), expected);
        }
    }

    #[test]
    fn test_pointer_up_resets_gesture_and_cursor() {
        let mut c = controller();
        let geometry = WindowGeometry::new(0, 0, 800, 600);
        c.pointer_down(Point::new(1, 300), Point::new(1, 300), geometry.size());
        c.pointer_move(Point::new(1, 300), Point::new(0, 300), &geometry);
        assert_eq!(c.cursor(), CursorShape::Horizontal);

        c.pointer_up();
        assert_eq!(c.mode(), InteractionMode::Idle);
        assert_eq!(c.cursor(), CursorShape::Arrow);
        assert!(c
            .pointer_move(Point::new(1, 300), Point::new(-10, 300), &geometry)
            .is_none());
    }

    #[test]
    fn test_left_resize_at_screen_origin_keeps_right_edge() {
        let geometry = WindowGeometry::new(0, 5, 96, 32);
        let min = Size::new(64, 26);
        let next = resize(&geometry, ResizeDirection::Left, Point::new(-3, 0), min);
        assert_eq!(next.x, -3);

        let clamped = clamp_resize(&geometry, next, ResizeDirection::Left, Size::new(120, 40), min);
        assert_eq!(clamped, geometry);
    }

    #[test]
    fn test_top_left_resize_stops_at_screen_edges() {
        let geometry = WindowGeometry::new(2, 1, 80, 30);
        let min = Size::new(64, 26);
        let next = resize(&geometry, ResizeDirection::TopLeft, Point::new(-5, -4), min);

        let clamped =
            clamp_resize(&geometry, next, ResizeDirection::TopLeft, Size::new(120, 40), min);
        assert_eq!(clamped, WindowGeometry::new(0, 0, 82, 31));
    }

    #[test]
    fn test_right_resize_stops_at_screen_edge() {
        let geometry = WindowGeometry::new(30, 0, 80, 30);
        let min = Size::new(64, 26);
        let next = resize(&geometry, ResizeDirection::Right, Point::new(20, 0), min);

        let clamped = clamp_resize(&geometry, next, ResizeDirection::Right, Size::new(120, 40), min);
        assert_eq!(clamped, WindowGeometry::new(30, 0, 90, 30));
    }

    #[test]
    fn test_clamp_leaves_inward_resize_alone() {
        let geometry = WindowGeometry::new(10, 10, 80, 30);
        let min = Size::new(64, 26);
        let next = resize(&geometry, ResizeDirection::BottomLeft, Point::new(4, -2), min);

        let clamped =
            clamp_resize(&geometry, next, ResizeDirection::BottomLeft, Size::new(120, 40), min);
        assert_eq!(clamped, next);
    }

    #[test]
    fn test_cancel_ends_gesture() {
        let mut c = controller();
        c.pointer_down(Point::new(200, 200), Point::new(200, 200), Size::new(800, 600));
        c.cancel();
        assert!(!c.is_active());
    }
}
