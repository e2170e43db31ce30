// Demo frontend: a window that magnifies a still picture.
// • Drag with the left mouse button to pan (release while moving to coast).
// • Scroll or +/- to zoom about the cursor; 0 or middle-click recenters.
// • F toggles the flashlight spotlight; ctrl+scroll resizes it.
// • Arrows or hjkl pan; Q/ESC quits.

use minifb::{
    Key as MinifbKey, KeyRepeat, MouseButton as MinifbButton, MouseMode, Window, WindowOptions,
};
use tracing::{info, warn};

use loupe::draw::{draw_crosshair, render_view};
use loupe::types::{test_pattern, FrameBuffer};
use loupe::{Config, Error, InputEvent, Key, Modifiers, MouseButton, Session, Vec2};

const WINDOW_WIDTH: usize = 1280;
const WINDOW_HEIGHT: usize = 800;
const FRAME_RATE: f32 = 60.0;

/// Physical key to semantic key. Repeatable bindings (zoom, pan) are listed
/// separately from one-shot ones so key repeat behaves naturally.
const REPEATING_KEYS: &[(MinifbKey, Key)] = &[
    (MinifbKey::Equal, Key::ZoomIn),
    (MinifbKey::NumPadPlus, Key::ZoomIn),
    (MinifbKey::Minus, Key::ZoomOut),
    (MinifbKey::NumPadMinus, Key::ZoomOut),
    (MinifbKey::Left, Key::PanLeft),
    (MinifbKey::H, Key::PanLeft),
    (MinifbKey::Down, Key::PanDown),
    (MinifbKey::J, Key::PanDown),
    (MinifbKey::Up, Key::PanUp),
    (MinifbKey::K, Key::PanUp),
    (MinifbKey::Right, Key::PanRight),
    (MinifbKey::L, Key::PanRight),
];

const ONE_SHOT_KEYS: &[(MinifbKey, Key)] = &[
    (MinifbKey::Key0, Key::Recenter),
    (MinifbKey::F, Key::ToggleFlashlight),
    (MinifbKey::Q, Key::Quit),
    (MinifbKey::Escape, Key::Quit),
];

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    /* --- Source picture ---
       A snapshot.png next to the binary gets magnified; otherwise a
       synthetic test pattern stands in. Capturing the actual screen is the
       host platform's job, not ours. */
    let source = match image::open("snapshot.png") {
        Ok(img) => {
            let fb = FrameBuffer::from_rgb_image(&img.to_rgb8());
            info!(width = fb.width, height = fb.height, "loaded snapshot.png");
            fb
        }
        Err(err) => {
            warn!(%err, "no usable snapshot.png, using test pattern");
            test_pattern(1920, 1200)
        }
    };

    /* --- Window + fixed-rate loop ---
       dt is fixed from the target refresh rate, not measured per frame, so
       the simulation stays deterministic for a given input sequence. */
    let mut window = Window::new(
        "loupe",
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        WindowOptions {
            resize: true,
            ..WindowOptions::default()
        },
    )
    .map_err(Error::WindowInit)?;
    window.set_target_fps(FRAME_RATE as usize);
    let dt = 1.0 / FRAME_RATE;

    let mut session = Session::new(
        Config::default(),
        Vec2::new(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32),
        FRAME_RATE,
    );

    let mut screen = FrameBuffer::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    let mut window_size = (WINDOW_WIDTH, WINDOW_HEIGHT);
    let mut cursor = (0.0f32, 0.0f32);
    let mut left_down = false;
    let mut middle_down = false;

    info!(width = WINDOW_WIDTH, height = WINDOW_HEIGHT, "window ready");

    while window.is_open() && !session.should_quit() {
        /* 1) Resize: keep the session and the pixel buffer in sync. */
        let size = window.get_size();
        if size != window_size {
            window_size = size;
            screen = FrameBuffer::new(size.0, size.1);
            session.handle_event(InputEvent::Resized {
                width: size.0 as f32,
                height: size.1 as f32,
            });
        }

        /* 2) Translate toolkit input into session events. */
        let mods = Modifiers {
            ctrl: window.is_key_down(MinifbKey::LeftCtrl)
                || window.is_key_down(MinifbKey::RightCtrl),
        };

        if let Some(pos) = window.get_mouse_pos(MouseMode::Pass) {
            if pos != cursor {
                cursor = pos;
                session.handle_event(InputEvent::PointerMoved { x: pos.0, y: pos.1 });
            }
        }

        let left_now = window.get_mouse_down(MinifbButton::Left);
        if left_now != left_down {
            left_down = left_now;
            session.handle_event(if left_now {
                InputEvent::ButtonPressed {
                    button: MouseButton::Left,
                }
            } else {
                InputEvent::ButtonReleased {
                    button: MouseButton::Left,
                }
            });
        }

        let middle_now = window.get_mouse_down(MinifbButton::Middle);
        if middle_now && !middle_down {
            session.handle_event(InputEvent::ButtonPressed {
                button: MouseButton::Middle,
            });
        }
        middle_down = middle_now;

        if let Some((_, wheel_y)) = window.get_scroll_wheel() {
            if wheel_y != 0.0 {
                // One impulse per notch regardless of platform step size.
                session.handle_event(InputEvent::Scrolled {
                    delta: wheel_y.signum(),
                    mods,
                });
            }
        }

        for &(physical, key) in REPEATING_KEYS {
            if window.is_key_pressed(physical, KeyRepeat::Yes) {
                session.handle_event(InputEvent::KeyPressed { key, mods });
            }
        }
        for &(physical, key) in ONE_SHOT_KEYS {
            if window.is_key_pressed(physical, KeyRepeat::No) {
                session.handle_event(InputEvent::KeyPressed { key, mods });
            }
        }

        /* 3) One fixed-dt simulation step, then draw what came out. */
        session.update(dt);
        let params = session.render_params();
        render_view(&mut screen, &source, &params);
        draw_crosshair(
            &mut screen,
            cursor.0 as i32,
            cursor.1 as i32,
            12,
            0x00FF_CC33,
        );

        window
            .update_with_buffer(&screen.pixels, screen.width, screen.height)
            .map_err(Error::WindowUpdate)?;
    }

    Ok(())
}
