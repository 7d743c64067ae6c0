use strum_macros::EnumString;

const MIN_SPEED_MULTIPLIER: f64 = 0.1;

/// Discrete user inputs understood by an animation shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum InputEvent {
    #[strum(serialize = "t", serialize = "T")]
    ToggleTrail,
    #[strum(serialize = "up")]
    SpeedUp,
    #[strum(serialize = "down")]
    SlowDown,
    #[strum(serialize = " ", serialize = "space")]
    TogglePause,
}

impl InputEvent {
    /// Map a key name as reported by a windowing toolkit. Unknown keys are ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        key.parse().ok()
    }
}

/// Interactive state of one animation session, replaced on every input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionState {
    pub trail_enabled: bool,
    pub speed_multiplier: f64,
    pub paused: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            trail_enabled: true,
            speed_multiplier: 1.0,
            paused: false,
        }
    }
}

impl SessionState {
    #[must_use]
    pub fn apply(self, event: InputEvent) -> Self {
        let next = match event {
            InputEvent::ToggleTrail => Self {
                trail_enabled: !self.trail_enabled,
                ..self
            },
            InputEvent::SpeedUp => Self {
                speed_multiplier: self.speed_multiplier * 2.0,
                ..self
            },
            InputEvent::SlowDown => Self {
                speed_multiplier: (self.speed_multiplier / 2.0).max(MIN_SPEED_MULTIPLIER),
                ..self
            },
            InputEvent::TogglePause => Self {
                paused: !self.paused,
                ..self
            },
        };

        match event {
            InputEvent::ToggleTrail => log::info!(
                "Trails {}",
                if next.trail_enabled { "enabled" } else { "disabled" }
            ),
            InputEvent::SpeedUp | InputEvent::SlowDown => {
                log::info!("Speed x{:.1}", next.speed_multiplier)
            }
            InputEvent::TogglePause => {
                log::info!("{}", if next.paused { "Paused" } else { "Resumed" })
            }
        }

        next
    }
}
