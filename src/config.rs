// Tunables for the motion simulation. The struct is a plain value the host
// constructs (or deserializes) once and passes by reference into every
// update; nothing in here is global state.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hard floor for the camera zoom factor.
    pub min_scale: f32,
    /// Zoom impulse added per wheel notch or +/- key press.
    pub scroll_speed: f32,
    /// Decay rate of the inertial coast after a drag release.
    pub drag_friction: f32,
    /// Decay rate of the zoom impulse.
    pub scale_friction: f32,
    /// Rate at which `scale` chases `target_scale` (smooth recenter zoom).
    pub scale_lerp_speed: f32,
    /// Pixels moved per keyboard pan press.
    pub camera_pan_amount: f32,
    /// Rate at which `position` chases `target_position`.
    pub camera_position_lerp_speed: f32,
    /// Rate for flashlight radius and shadow animation.
    pub flashlight_lerp_speed: f32,
    /// How much the target radius grows when the flashlight is switched off.
    pub flashlight_disable_radius_multiplier: f32,
    /// Recenter policy: animate back to rest (true) or snap instantly.
    pub lerp_camera_recenter: bool,
    /// Lerp rate used while a smooth recenter is in flight.
    pub camera_recenter_lerp_speed: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_scale: 0.01,
            scroll_speed: 1.5,
            drag_friction: 6.0,
            scale_friction: 4.0,
            scale_lerp_speed: 7.0,
            camera_pan_amount: 100.0,
            camera_position_lerp_speed: 6.0,
            flashlight_lerp_speed: 6.0,
            flashlight_disable_radius_multiplier: 3.0,
            lerp_camera_recenter: true,
            camera_recenter_lerp_speed: 8.0,
        }
    }
}
