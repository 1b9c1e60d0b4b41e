//! Turns mouse and keyboard input into viewport changes.
//!
//! The window system is someone else's problem: each frame the caller
//! samples the pointer, the left button, the scroll wheel and the
//! reset key into an `InputState` and hands it to the `Navigator`,
//! which updates the `Viewport` before the next render.

use viewport::Viewport;

/// Default scale multiplier for scrolling down; magnifies.
pub const SCROLL_DOWN_FACTOR: f64 = 1.1;
/// Default scale multiplier for scrolling up; shrinks.
pub const SCROLL_UP_FACTOR: f64 = 0.9;

/// One frame's worth of input.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct InputState {
    /// Pointer position in screen pixels, y growing downward.
    pub cursor: (f64, f64),
    /// The left button went down this frame.
    pub just_pressed: bool,
    /// The left button is down.
    pub pressed: bool,
    /// Vertical scroll this frame; only the sign matters.
    pub scroll: f64,
    /// The reset key is down.
    pub reset: bool,
}

/// Tracks drags across frames and applies input to a viewport.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Navigator {
    anchor: (f64, f64),
    scroll_up_factor: f64,
    scroll_down_factor: f64,
}

impl Default for Navigator {
    fn default() -> Navigator {
        Navigator {
            anchor: (0.0, 0.0),
            scroll_up_factor: SCROLL_UP_FACTOR,
            scroll_down_factor: SCROLL_DOWN_FACTOR,
        }
    }
}

impl Navigator {
    /// A navigator with custom zoom factors.  Both must be positive.
    pub fn with_factors(scroll_up_factor: f64, scroll_down_factor: f64) -> Option<Navigator> {
        let valid = |f: f64| f.is_finite() && f > 0.0;
        if !valid(scroll_up_factor) || !valid(scroll_down_factor) {
            return None;
        }
        Some(Navigator {
            scroll_up_factor,
            scroll_down_factor,
            ..Navigator::default()
        })
    }

    /// Applies one frame of input.  Returns true if the viewport
    /// changed and the frame needs to be rendered again.
    pub fn apply(&mut self, viewport: &mut Viewport, input: &InputState) -> bool {
        let before = *viewport;

        if input.just_pressed {
            self.anchor = input.cursor;
        }

        if input.pressed {
            viewport.pan(input.cursor.0 - self.anchor.0, input.cursor.1 - self.anchor.1);
            self.anchor = input.cursor;
        }

        if input.reset {
            viewport.reset();
        }

        let factor = if input.scroll < 0.0 {
            Some(self.scroll_down_factor)
        } else if input.scroll > 0.0 {
            Some(self.scroll_up_factor)
        } else {
            None
        };
        if let Some(factor) = factor {
            let (px, py) = input.cursor;
            if let Err(e) = viewport.zoom_at(px, py, factor) {
                warn!("Ignoring zoom step: {}", e);
            }
        }

        *viewport != before
    }
}
