// loupe: screen-magnifier motion core plus a small software-rendered demo.
//
// The interesting part is the interaction simulation: a camera with
// pan/zoom/drag inertia and a flashlight spotlight with a spring-damper
// bubble. The windowing frontend (main.rs) only translates toolkit events
// into `InputEvent`s, steps the `Session` once per frame at a fixed dt, and
// draws the numbers it gets back.

pub mod camera;
pub mod config;
pub mod draw;
pub mod error;
pub mod flashlight;
pub mod input;
pub mod session;
pub mod types;
pub mod vec2;

pub use camera::{Camera, CameraCommand, Mouse, PanDirection};
pub use config::Config;
pub use error::Error;
pub use flashlight::{Flashlight, FlashlightCommand};
pub use input::{InputEvent, Key, Modifiers, MouseButton};
pub use session::{RenderParams, Session};
pub use vec2::Vec2;
