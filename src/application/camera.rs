/// Camera manages viewport and zoom for the diamond view.
///
/// Board coordinates have y pointing up; screen coordinates have y pointing
/// down. Cell `(x, y)` covers `[x, x+1) x [y, y+1)` in board space.
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    pub zoom: f32,  // 1.0 = normal, 2.0 = 2x zoomed in
    /// Keep the whole diamond in view as it grows; cleared by manual control
    pub follow: bool,
    drag_anchor: Option<(f32, f32)>,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
            follow: true,
            drag_anchor: None,
        }
    }

    /// Zoom in by factor
    pub fn zoom_in(&mut self, factor: f32) {
        self.follow = false;
        self.zoom = (self.zoom * factor).clamp(0.02, 10.0);
    }

    /// Zoom out by factor
    pub fn zoom_out(&mut self, factor: f32) {
        self.follow = false;
        self.zoom = (self.zoom / factor).clamp(0.02, 10.0);
    }

    /// Pan camera
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.follow = false;
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Pan by the distance the pointer moved since the last drag update
    pub fn drag(&mut self, pointer: Option<(f32, f32)>) {
        if let (Some(last), Some(now)) = (self.drag_anchor, pointer) {
            self.pan(now.0 - last.0, now.1 - last.1);
        }
        self.drag_anchor = pointer;
    }

    /// Fit a square of `extent` cells centred on `(cx, cy)` into the
    /// viewport. Does nothing once the user has taken manual control.
    pub fn follow_board(&mut self, extent: f32, center: (f32, f32), viewport: (f32, f32), cell_size: f32) {
        if !self.follow || extent <= 0.0 {
            return;
        }
        let fit = viewport.0.min(viewport.1) / (extent * cell_size);
        self.zoom = fit.clamp(0.02, 10.0);
        let scale = cell_size * self.zoom;
        self.offset_x = viewport.0 / 2.0 - center.0 * scale;
        self.offset_y = viewport.1 / 2.0 + center.1 * scale;
    }

    /// Convert board coordinates to screen coordinates
    pub fn board_to_screen(&self, x: f32, y: f32, cell_size: f32) -> (f32, f32) {
        let scale = cell_size * self.zoom;
        (self.offset_x + x * scale, self.offset_y - y * scale)
    }

    /// Convert screen coordinates to board coordinates
    pub fn screen_to_board(&self, screen_x: f32, screen_y: f32, cell_size: f32) -> (f32, f32) {
        let scale = cell_size * self.zoom;
        ((screen_x - self.offset_x) / scale, (self.offset_y - screen_y) / scale)
    }

    /// Reset camera to default and resume following the board
    pub fn reset(&mut self) {
        self.offset_x = 0.0;
        self.offset_y = 0.0;
        self.zoom = 1.0;
        self.follow = true;
        self.drag_anchor = None;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_round_trip() {
        let mut camera = Camera::new();
        camera.follow_board(10.0, (1.0, 1.0), (800.0, 600.0), 10.0);
        let (sx, sy) = camera.board_to_screen(3.5, -2.0, 10.0);
        let (bx, by) = camera.screen_to_board(sx, sy, 10.0);
        assert!((bx - 3.5).abs() < 1e-4);
        assert!((by + 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_follow_centres_board() {
        let mut camera = Camera::new();
        camera.follow_board(20.0, (1.0, 1.0), (800.0, 600.0), 10.0);
        let (sx, sy) = camera.board_to_screen(1.0, 1.0, 10.0);
        assert!((sx - 400.0).abs() < 1e-3);
        assert!((sy - 300.0).abs() < 1e-3);
        assert!((camera.zoom - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_manual_control_stops_following() {
        let mut camera = Camera::new();
        camera.zoom_in(2.0);
        camera.follow_board(20.0, (1.0, 1.0), (800.0, 600.0), 10.0);
        assert_eq!(camera.zoom, 2.0);
        camera.reset();
        assert!(camera.follow);
    }

    #[test]
    fn test_drag_pans_by_pointer_delta() {
        let mut camera = Camera::new();
        camera.drag(Some((10.0, 10.0)));
        camera.drag(Some((15.0, 7.0)));
        assert_eq!((camera.offset_x, camera.offset_y), (5.0, -3.0));
        camera.drag(None);
        camera.drag(Some((100.0, 100.0)));
        assert_eq!((camera.offset_x, camera.offset_y), (5.0, -3.0));
    }
}
