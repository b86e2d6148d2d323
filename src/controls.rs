/// Held state of the three game keys, sampled once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

impl Controls {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn fire() -> Self {
        Self {
            fire: true,
            ..Self::default()
        }
    }

    pub fn left() -> Self {
        Self {
            left: true,
            ..Self::default()
        }
    }

    pub fn right() -> Self {
        Self {
            right: true,
            ..Self::default()
        }
    }
}

/// Turns a held signal into one pulse per press.
///
/// Compares each sample with the previous one, so holding the key down for
/// many frames only reports the first of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeTrigger {
    previous: bool,
}

impl EdgeTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `current` and returns `true` on a released -> pressed transition.
    pub fn sample(&mut self, current: bool) -> bool {
        let pressed = current && !self.previous;
        self.previous = current;
        pressed
    }
}
