// Flashlight spotlight: a radius/shadow animation driven by a tiny
// enable/disable state machine, plus a spring-damper bubble that chases the
// cursor and stretches with its own velocity. Same fixed-dt stepping as the
// camera; every quantity is bounded by clamps, nothing here can fail.

use crate::config::Config;
use crate::vec2::Vec2;

/// Radius impulse added per ctrl+wheel notch or ctrl +/- press.
pub const INITIAL_DELTA_RADIUS: f32 = 250.0;
/// Decay rate of the manual radius impulse.
pub const DELTA_RADIUS_DECELERATION: f32 = 10.0;
/// Smallest radius the spotlight may settle at.
pub const MIN_RADIUS: f32 = 50.0;
/// Radius the spotlight contracts to after being switched on.
pub const DEFAULT_RADIUS: f32 = 200.0;
/// Shadow opacity the overlay fades to while enabled.
pub const MAX_SHADOW: f32 = 0.8;

// Bubble physics. Damping is below critical so the bubble overshoots a
// little and wobbles into place.
const BODY_MASS: f32 = 1.0;
const BODY_STIFFNESS: f32 = 120.0;
const BODY_DAMPING_RATIO: f32 = 0.65;

// Velocity-based deformation: stretch grows with speed up to a cap, squeeze
// is the perpendicular counterpart (rough volume conservation).
const DEFORM_SPEED_THRESHOLD: f32 = 0.1;
const STRETCH_PER_SPEED: f32 = 0.0004;
const MAX_STRETCH: f32 = 0.45;
const SQUEEZE_RATIO: f32 = 0.5;
const DEFORM_RESPONSE: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlashlightCommand {
    /// Toggle on/off. The window size decides the oversized start radius of
    /// the contract-inward animation.
    Toggle { window_size: Vec2 },
    /// Manual radius impulse (signed). From the wheel, it also interrupts a
    /// running toggle animation; key presses leave it alone.
    AdjustRadius { amount: f32, from_wheel: bool },
}

#[derive(Clone, Copy, Debug)]
pub struct Flashlight {
    pub is_enabled: bool,
    /// True only while an enable/disable radius transition is in flight.
    pub animating: bool,
    pub radius: f32,
    pub target_radius: f32,
    pub delta_radius: f32,
    /// Shadow opacity in [0, MAX_SHADOW].
    pub shadow: f32,

    // Spring-damper body chasing the cursor.
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub target_pos: Vec2,
    pub mass: f32,
    pub spring_k: f32,
    pub damping: f32,

    // Derived deformation, recovers to zero at rest.
    pub stretch: Vec2,
    pub squeeze: f32,
}

impl Default for Flashlight {
    fn default() -> Self {
        Self::new()
    }
}

impl Flashlight {
    pub fn new() -> Self {
        let critical = 2.0 * (BODY_STIFFNESS * BODY_MASS).sqrt();
        Self {
            is_enabled: false,
            animating: false,
            radius: DEFAULT_RADIUS,
            target_radius: DEFAULT_RADIUS,
            delta_radius: 0.0,
            shadow: 0.0,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            target_pos: Vec2::ZERO,
            mass: BODY_MASS,
            spring_k: BODY_STIFFNESS,
            damping: critical * BODY_DAMPING_RATIO,
            stretch: Vec2::ZERO,
            squeeze: 0.0,
        }
    }

    pub fn handle_command(&mut self, cmd: FlashlightCommand, config: &Config) {
        match cmd {
            FlashlightCommand::Toggle { window_size } => {
                self.is_enabled = !self.is_enabled;
                self.animating = true;
                if self.is_enabled {
                    // Coming in: start past the window edge, contract to the
                    // working radius.
                    self.radius = window_size.x.max(window_size.y) * 1.5;
                    self.target_radius = DEFAULT_RADIUS;
                } else {
                    // Going out: the spotlight grows while the shadow fades.
                    self.target_radius *=
                        config.flashlight_disable_radius_multiplier;
                }
            }
            FlashlightCommand::AdjustRadius { amount, from_wheel } => {
                if self.is_enabled {
                    self.delta_radius += amount;
                    if from_wheel {
                        self.animating = false;
                    }
                }
            }
        }
    }

    /// One simulation step; `cursor` is the pointer in window space.
    pub fn update(&mut self, dt: f32, cursor: Vec2, config: &Config) {
        // Manual radius impulse, gated so it cannot fight a toggle animation.
        if self.is_enabled && !self.animating && self.delta_radius.abs() > 1.0 {
            self.target_radius =
                (self.target_radius + self.delta_radius * dt).max(MIN_RADIUS);
            self.delta_radius -= self.delta_radius * DELTA_RADIUS_DECELERATION * dt;
        }

        self.step_body(dt, cursor);
        self.step_deformation(dt);

        self.radius += (self.target_radius - self.radius) * config.flashlight_lerp_speed * dt;
        if self.animating && (self.target_radius - self.radius).abs() < 1.0 {
            self.radius = self.target_radius;
            self.animating = false;
        }

        let target_shadow = if self.is_enabled { MAX_SHADOW } else { 0.0 };
        self.shadow += (target_shadow - self.shadow) * config.flashlight_lerp_speed * dt;
    }

    /// Spring-damper chase of the cursor. Skipped entirely while disabled so
    /// the invisible bubble never lags behind the pointer.
    fn step_body(&mut self, dt: f32, cursor: Vec2) {
        self.target_pos = cursor;

        if !self.is_enabled {
            self.position = cursor;
            self.velocity = Vec2::ZERO;
            self.acceleration = Vec2::ZERO;
            self.stretch = Vec2::ZERO;
            self.squeeze = 0.0;
            return;
        }

        let spring = (self.position - self.target_pos) * -self.spring_k;
        let damping = self.velocity * -self.damping;
        self.acceleration = (spring + damping) / self.mass;
        // Semi-implicit Euler keeps the oscillation stable at 60 Hz.
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;
    }

    /// Both branches run the same exponential smoothing, only the targets
    /// differ, so crossing the speed threshold never jumps.
    fn step_deformation(&mut self, dt: f32) {
        let speed = self.velocity.length();
        let (target_stretch, target_squeeze) = if speed > DEFORM_SPEED_THRESHOLD {
            let amount = (speed * STRETCH_PER_SPEED).min(MAX_STRETCH);
            (self.velocity.normalize() * amount, amount * SQUEEZE_RATIO)
        } else {
            (Vec2::ZERO, 0.0)
        };

        let blend = DEFORM_RESPONSE * dt;
        self.stretch += (target_stretch - self.stretch) * blend;
        self.squeeze += (target_squeeze - self.squeeze) * blend;
    }
}
