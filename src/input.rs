// Platform-abstract input events. The windowing frontend translates whatever
// its toolkit reports into these; the session never sees toolkit types.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
}

/// Semantic keys: the frontend owns the physical-key binding (arrows and
/// hjkl both map to the pan keys, for example).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ZoomIn,
    ZoomOut,
    PanLeft,
    PanDown,
    PanUp,
    PanRight,
    Recenter,
    ToggleFlashlight,
    Quit,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to (x, y) in window space.
    PointerMoved { x: f32, y: f32 },
    ButtonPressed { button: MouseButton },
    ButtonReleased { button: MouseButton },
    /// Wheel notches; positive scrolls up (toward the user).
    Scrolled { delta: f32, mods: Modifiers },
    KeyPressed { key: Key, mods: Modifiers },
    Resized { width: f32, height: f32 },
}
