// Camera over the magnified picture: pan, zoom-about-pivot, drag with
// inertial coast, and smooth recenter. Driven by explicit commands plus one
// fixed-dt update per frame; all math is plain f32 with clamps, no fallible
// paths anywhere.

use crate::config::Config;
use crate::vec2::Vec2;

/// Coast speed (px/s) below which drag inertia is considered stopped.
pub const VELOCITY_THRESHOLD: f32 = 15.0;

/// Cursor state as the session tracks it between motion events.
#[derive(Clone, Copy, Debug, Default)]
pub struct Mouse {
    pub curr: Vec2,
    pub prev: Vec2,
    pub drag: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Down,
    Up,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CameraCommand {
    /// Add a zoom rate impulse, holding `pivot` (window space) visually fixed.
    ZoomImpulse { amount: f32, pivot: Vec2 },
    /// Pointer moved from `prev` to `curr` while the drag button was held.
    Drag {
        prev: Vec2,
        curr: Vec2,
        frame_rate: f32,
    },
    /// Keyboard pan: moves the lerp target, never the position directly.
    Pan(PanDirection),
    /// Back to rest state; policy (snap vs animate) comes from the config.
    Recenter,
    /// Kill any inertial coast (sent when a new drag grabs the picture).
    HaltInertia,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Camera {
    pub position: Vec2,
    pub target_position: Vec2,
    pub velocity: Vec2,
    pub scale: f32,
    pub target_scale: f32,
    pub delta_scale: f32,
    pub scale_pivot: Vec2,
    /// True while a smooth recenter is in flight; switches the lerps to the
    /// recenter rate and clears itself on convergence.
    recentering: bool,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            target_scale: 1.0,
            ..Self::default()
        }
    }

    /// Window-space point to world space. Deliberately only divides by the
    /// scale: drag deltas and pivot math subtract two such points, so the
    /// missing translation term cancels. Not a full inverse transform.
    pub fn world(&self, v: Vec2) -> Vec2 {
        v / self.scale
    }

    pub fn handle_command(&mut self, cmd: CameraCommand, config: &Config) {
        match cmd {
            CameraCommand::ZoomImpulse { amount, pivot } => {
                self.delta_scale += amount;
                self.scale_pivot = pivot;
                self.recentering = false;
            }
            CameraCommand::Drag {
                prev,
                curr,
                frame_rate,
            } => {
                let delta = self.world(prev) - self.world(curr);
                self.position += delta;
                // An active grab overrides any pending lerp target.
                self.target_position = self.position;
                self.velocity = delta * frame_rate;
                self.recentering = false;
            }
            CameraCommand::Pan(direction) => {
                let amount = config.camera_pan_amount;
                match direction {
                    PanDirection::Left => self.target_position.x -= amount,
                    PanDirection::Down => self.target_position.y += amount,
                    PanDirection::Up => self.target_position.y -= amount,
                    PanDirection::Right => self.target_position.x += amount,
                }
                self.recentering = false;
            }
            CameraCommand::Recenter => {
                if config.lerp_camera_recenter {
                    self.target_position = Vec2::ZERO;
                    self.target_scale = 1.0;
                    self.velocity = Vec2::ZERO;
                    self.delta_scale = 0.0;
                    self.recentering = true;
                } else {
                    self.position = Vec2::ZERO;
                    self.target_position = Vec2::ZERO;
                    self.velocity = Vec2::ZERO;
                    self.scale = 1.0;
                    self.target_scale = 1.0;
                    self.delta_scale = 0.0;
                    self.recentering = false;
                }
            }
            CameraCommand::HaltInertia => {
                self.velocity = Vec2::ZERO;
            }
        }
    }

    /// One simulation step. Order matters: zoom first (it moves the position
    /// to keep the pivot fixed), then inertial coast, then the target lerps.
    pub fn update(&mut self, dt: f32, mouse: &Mouse, window_size: Vec2, config: &Config) {
        if self.delta_scale.abs() > 0.5 {
            let half_window = window_size * 0.5;
            // World coords of the pivot before and after the scale change;
            // shifting by their difference keeps the pivot visually fixed.
            let p0 = (self.scale_pivot - half_window) / self.scale;
            self.scale = (self.scale + self.delta_scale * dt).max(config.min_scale);
            let p1 = (self.scale_pivot - half_window) / self.scale;
            self.position += p0 - p1;
            self.target_position = self.position;
            self.target_scale = self.scale;
            self.delta_scale -= self.delta_scale * dt * config.scale_friction;
        }

        if !mouse.drag && self.velocity.length() > VELOCITY_THRESHOLD {
            self.position += self.velocity * dt;
            self.target_position = self.position;
            self.velocity -= self.velocity * (dt * config.drag_friction);
        }

        // Target tracking. A no-op during active zoom/drag/coast since the
        // branches above keep position == target_position.
        let (position_speed, scale_speed) = if self.recentering {
            (
                config.camera_recenter_lerp_speed,
                config.camera_recenter_lerp_speed,
            )
        } else {
            (config.camera_position_lerp_speed, config.scale_lerp_speed)
        };
        self.position += (self.target_position - self.position) * (position_speed * dt);
        self.scale += (self.target_scale - self.scale) * scale_speed * dt;
        self.scale = self.scale.max(config.min_scale);

        if self.recentering
            && (self.target_position - self.position).length() < 0.5
            && (self.target_scale - self.scale).abs() < 1e-3
        {
            self.position = self.target_position;
            self.scale = self.target_scale;
            self.recentering = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;
    const WINDOW: Vec2 = Vec2 {
        x: 1000.0,
        y: 800.0,
    };

    fn step(camera: &mut Camera, frames: usize, config: &Config) {
        let mouse = Mouse::default();
        for _ in 0..frames {
            camera.update(DT, &mouse, WINDOW, config);
        }
    }

    #[test]
    fn starts_at_rest() {
        let camera = Camera::new();
        assert_eq!(camera.scale, 1.0);
        assert_eq!(camera.target_scale, 1.0);
        assert_eq!(camera.position, Vec2::ZERO);
        assert_eq!(camera.velocity, Vec2::ZERO);
    }

    #[test]
    fn zoom_impulse_decays_and_scale_stabilizes() {
        let config = Config::default();
        let mut camera = Camera::new();
        camera.handle_command(
            CameraCommand::ZoomImpulse {
                amount: 1.5,
                pivot: Vec2::new(100.0, 100.0),
            },
            &config,
        );

        step(&mut camera, 60, &config);

        // The impulse has fallen below the activation threshold and the
        // zoom has landed above 1.
        assert!(camera.delta_scale.abs() < 0.5);
        assert!(camera.scale > 1.0);

        let settled = camera.scale;
        step(&mut camera, 10, &config);
        assert!((camera.scale - settled).abs() < 1e-4);
    }

    #[test]
    fn zoom_holds_pivot_fixed_in_world_space() {
        let config = Config::default();
        let mut camera = Camera::new();
        let pivot = Vec2::new(320.0, 130.0);
        camera.handle_command(CameraCommand::ZoomImpulse { amount: 2.0, pivot }, &config);

        let mouse = Mouse::default();
        let half_window = WINDOW * 0.5;
        for _ in 0..30 {
            let before = (pivot - half_window) / camera.scale + camera.position;
            camera.update(DT, &mouse, WINDOW, &config);
            let after = (pivot - half_window) / camera.scale + camera.position;
            assert!((after - before).length() < 1e-3);
        }
    }

    #[test]
    fn scale_never_drops_below_min() {
        let config = Config::default();
        let mut camera = Camera::new();
        camera.handle_command(
            CameraCommand::ZoomImpulse {
                amount: -1000.0,
                pivot: Vec2::new(500.0, 400.0),
            },
            &config,
        );

        let mouse = Mouse::default();
        for _ in 0..300 {
            camera.update(DT, &mouse, WINDOW, &config);
            assert!(camera.scale >= config.min_scale);
        }
    }

    #[test]
    fn pan_lerps_position_to_target_monotonically() {
        let config = Config::default();
        let mut camera = Camera::new();
        camera.handle_command(CameraCommand::Pan(PanDirection::Right), &config);
        camera.handle_command(CameraCommand::Pan(PanDirection::Down), &config);
        assert_eq!(camera.position, Vec2::ZERO);
        assert_eq!(
            camera.target_position,
            Vec2::new(config.camera_pan_amount, config.camera_pan_amount)
        );

        let mouse = Mouse::default();
        let mut remaining = (camera.target_position - camera.position).length();
        for _ in 0..300 {
            camera.update(DT, &mouse, WINDOW, &config);
            let next = (camera.target_position - camera.position).length();
            assert!(next <= remaining);
            remaining = next;
        }
        assert!(remaining < 0.5);
    }

    #[test]
    fn drag_sets_velocity_and_pins_target() {
        let config = Config::default();
        let mut camera = Camera::new();
        camera.scale = 2.0;

        let prev = Vec2::new(400.0, 300.0);
        let curr = Vec2::new(460.0, 300.0);
        camera.handle_command(
            CameraCommand::Drag {
                prev,
                curr,
                frame_rate: 60.0,
            },
            &config,
        );

        // Delta is world-space: (prev - curr) / scale.
        assert!((camera.position.x - (-30.0)).abs() < 1e-4);
        assert_eq!(camera.position, camera.target_position);
        assert!((camera.velocity.x - (-1800.0)).abs() < 1e-2);
    }

    #[test]
    fn coast_decays_velocity_below_threshold() {
        let config = Config::default();
        let mut camera = Camera::new();
        camera.handle_command(
            CameraCommand::Drag {
                prev: Vec2::new(0.0, 0.0),
                curr: Vec2::new(20.0, 0.0),
                frame_rate: 60.0,
            },
            &config,
        );
        assert!(camera.velocity.length() > VELOCITY_THRESHOLD);

        let start = camera.position;
        step(&mut camera, 600, &config);

        // Coasted some distance, then the inertia settled.
        assert!((camera.position - start).length() > 0.0);
        assert!(camera.velocity.length() <= VELOCITY_THRESHOLD);
        assert_eq!(camera.position, camera.target_position);
    }

    #[test]
    fn drag_start_halts_inertia() {
        let config = Config::default();
        let mut camera = Camera::new();
        camera.velocity = Vec2::new(500.0, -200.0);
        camera.handle_command(CameraCommand::HaltInertia, &config);
        assert_eq!(camera.velocity, Vec2::ZERO);
    }

    #[test]
    fn smooth_recenter_restores_rest_state() {
        let config = Config::default();
        let mut camera = Camera::new();
        camera.handle_command(
            CameraCommand::ZoomImpulse {
                amount: 3.0,
                pivot: Vec2::new(100.0, 700.0),
            },
            &config,
        );
        step(&mut camera, 120, &config);
        assert!(camera.scale > 1.0);
        assert!(camera.position.length() > 0.0);

        camera.handle_command(CameraCommand::Recenter, &config);
        assert_eq!(camera.delta_scale, 0.0);
        assert_eq!(camera.velocity, Vec2::ZERO);

        step(&mut camera, 600, &config);
        assert!(camera.position.length() < 0.5);
        assert!((camera.scale - 1.0).abs() < 1e-2);
    }

    #[test]
    fn instant_recenter_snaps() {
        let config = Config {
            lerp_camera_recenter: false,
            ..Config::default()
        };
        let mut camera = Camera::new();
        camera.position = Vec2::new(123.0, -45.0);
        camera.scale = 4.2;
        camera.delta_scale = 2.0;
        camera.velocity = Vec2::new(50.0, 50.0);

        camera.handle_command(CameraCommand::Recenter, &config);
        assert_eq!(camera.position, Vec2::ZERO);
        assert_eq!(camera.target_position, Vec2::ZERO);
        assert_eq!(camera.scale, 1.0);
        assert_eq!(camera.delta_scale, 0.0);
        assert_eq!(camera.velocity, Vec2::ZERO);
    }

    #[test]
    fn update_converges_with_no_input() {
        let config = Config::default();
        let mut camera = Camera::new();
        camera.position = Vec2::new(300.0, 200.0);
        camera.target_position = Vec2::new(-100.0, 40.0);
        camera.delta_scale = 0.9;
        camera.velocity = Vec2::new(100.0, 0.0);

        let mouse = Mouse::default();
        let mut speed = camera.velocity.length();
        let mut impulse = camera.delta_scale.abs();
        for _ in 0..600 {
            camera.update(DT, &mouse, WINDOW, &config);
            let next_speed = camera.velocity.length();
            let next_impulse = camera.delta_scale.abs();
            assert!(next_speed <= speed);
            assert!(next_impulse <= impulse);
            speed = next_speed;
            impulse = next_impulse;
        }
        assert!((camera.target_position - camera.position).length() < 0.5);
        assert!(speed <= VELOCITY_THRESHOLD);
        assert!(impulse < 0.5);
    }
}
