// The session glues the two controllers together: it owns the mouse state,
// the window size, and the config, translates raw input events into
// controller commands, and exposes the per-frame numbers the renderer needs.
// Single-threaded by construction; the frame loop owns it exclusively.

use tracing::debug;

use crate::camera::{Camera, CameraCommand, Mouse, PanDirection};
use crate::config::Config;
use crate::flashlight::{Flashlight, FlashlightCommand, INITIAL_DELTA_RADIUS};
use crate::input::{InputEvent, Key, MouseButton};
use crate::vec2::Vec2;

/// Camera half of the per-frame render outputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraView {
    pub position: Vec2,
    pub scale: f32,
}

/// Flashlight half of the per-frame render outputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlashlightView {
    pub enabled: bool,
    pub shadow: f32,
    pub radius: f32,
    pub position: Vec2,
    pub stretch: Vec2,
    pub squeeze: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderParams {
    pub camera: CameraView,
    pub flashlight: FlashlightView,
}

pub struct Session {
    pub camera: Camera,
    pub flashlight: Flashlight,
    pub mouse: Mouse,
    config: Config,
    window_size: Vec2,
    /// Display refresh rate; drag release speed is delta * frame_rate.
    frame_rate: f32,
    quit: bool,
}

impl Session {
    pub fn new(config: Config, window_size: Vec2, frame_rate: f32) -> Self {
        Self {
            camera: Camera::new(),
            flashlight: Flashlight::new(),
            mouse: Mouse::default(),
            config,
            window_size,
            frame_rate,
            quit: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn window_size(&self) -> Vec2 {
        self.window_size
    }

    /// True once the user asked to quit; the frame loop polls this.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Single entry point for all input. Every state transition the
    /// controllers depend on (drag bookkeeping, ctrl routing of the wheel)
    /// lives here rather than being scattered over the frontend.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMoved { x, y } => {
                self.mouse.curr = Vec2::new(x, y);
                if self.mouse.drag {
                    self.camera.handle_command(
                        CameraCommand::Drag {
                            prev: self.mouse.prev,
                            curr: self.mouse.curr,
                            frame_rate: self.frame_rate,
                        },
                        &self.config,
                    );
                }
                self.mouse.prev = self.mouse.curr;
            }
            InputEvent::ButtonPressed { button } => match button {
                MouseButton::Left => {
                    self.mouse.prev = self.mouse.curr;
                    self.mouse.drag = true;
                    self.camera
                        .handle_command(CameraCommand::HaltInertia, &self.config);
                }
                MouseButton::Middle => {
                    self.camera
                        .handle_command(CameraCommand::Recenter, &self.config);
                }
            },
            InputEvent::ButtonReleased { button } => {
                if button == MouseButton::Left {
                    self.mouse.drag = false;
                }
            }
            InputEvent::Scrolled { delta, mods } => {
                if mods.ctrl && self.flashlight.is_enabled {
                    self.flashlight.handle_command(
                        FlashlightCommand::AdjustRadius {
                            amount: delta * INITIAL_DELTA_RADIUS,
                            from_wheel: true,
                        },
                        &self.config,
                    );
                } else {
                    self.camera.handle_command(
                        CameraCommand::ZoomImpulse {
                            amount: delta * self.config.scroll_speed,
                            pivot: self.mouse.curr,
                        },
                        &self.config,
                    );
                }
            }
            InputEvent::KeyPressed { key, mods } => self.handle_key(key, mods.ctrl),
            InputEvent::Resized { width, height } => {
                self.window_size = Vec2::new(width, height);
            }
        }
    }

    fn handle_key(&mut self, key: Key, ctrl: bool) {
        match key {
            Key::ZoomIn | Key::ZoomOut => {
                let sign = if key == Key::ZoomIn { 1.0 } else { -1.0 };
                if ctrl && self.flashlight.is_enabled {
                    self.flashlight.handle_command(
                        FlashlightCommand::AdjustRadius {
                            amount: sign * INITIAL_DELTA_RADIUS,
                            from_wheel: false,
                        },
                        &self.config,
                    );
                } else {
                    self.camera.handle_command(
                        CameraCommand::ZoomImpulse {
                            amount: sign * self.config.scroll_speed,
                            pivot: self.mouse.curr,
                        },
                        &self.config,
                    );
                }
            }
            Key::PanLeft => self.pan(PanDirection::Left),
            Key::PanDown => self.pan(PanDirection::Down),
            Key::PanUp => self.pan(PanDirection::Up),
            Key::PanRight => self.pan(PanDirection::Right),
            Key::Recenter => {
                self.camera
                    .handle_command(CameraCommand::Recenter, &self.config);
            }
            Key::ToggleFlashlight => {
                self.flashlight.handle_command(
                    FlashlightCommand::Toggle {
                        window_size: self.window_size,
                    },
                    &self.config,
                );
                debug!(enabled = self.flashlight.is_enabled, "flashlight toggled");
            }
            Key::Quit => self.quit = true,
        }
    }

    fn pan(&mut self, direction: PanDirection) {
        self.camera
            .handle_command(CameraCommand::Pan(direction), &self.config);
    }

    /// One simulation step: camera first, then flashlight (it reads the
    /// cursor the camera math just used).
    pub fn update(&mut self, dt: f32) {
        self.camera
            .update(dt, &self.mouse, self.window_size, &self.config);
        self.flashlight.update(dt, self.mouse.curr, &self.config);
    }

    /// The numeric outputs the rendering stage consumes each frame.
    pub fn render_params(&self) -> RenderParams {
        RenderParams {
            camera: CameraView {
                position: self.camera.position,
                scale: self.camera.scale,
            },
            flashlight: FlashlightView {
                enabled: self.flashlight.is_enabled,
                shadow: self.flashlight.shadow,
                radius: self.flashlight.radius,
                position: self.flashlight.position,
                stretch: self.flashlight.stretch,
                squeeze: self.flashlight.squeeze,
            },
        }
    }
}
