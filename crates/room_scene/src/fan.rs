//! Desk fan speed and blade animation.

use std::fmt;

/// Radians the blades turn per frame at speed 1.
pub const BLADE_RADIANS_PER_FRAME: f64 = 0.06;
/// Frames the blade multiplier takes to reach a new speed.
pub const SPEED_RAMP_FRAMES: f64 = 60.0;

/// Fan speed step, `0` (off) through `3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FanSpeed(u8);

impl FanSpeed {
    /// Fan switched off.
    pub const OFF: Self = Self(0);
    /// Highest speed step.
    pub const MAX: Self = Self(3);

    /// Validated speed; `None` above [`FanSpeed::MAX`].
    pub const fn new(speed: u8) -> Option<Self> {
        if speed <= Self::MAX.0 {
            Some(Self(speed))
        } else {
            None
        }
    }

    /// All selectable speeds in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::OFF.0..=Self::MAX.0).map(Self)
    }

    /// Raw speed step.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Hint appended to the fan blades banner.
    pub fn hint(self) -> &'static str {
        if self.0 >= 2 {
            "Feeling a chill? Lower the fan speed."
        } else {
            "Temp rising? Increase the fan speed."
        }
    }
}

impl Default for FanSpeed {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            f.write_str("Off")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Blade rotation that ramps smoothly toward the selected speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BladeSpin {
    angle: f64,
    multiplier: f64,
}

impl Default for BladeSpin {
    fn default() -> Self {
        Self {
            angle: 0.0,
            multiplier: f64::from(FanSpeed::default().get()),
        }
    }
}

impl BladeSpin {
    /// Current blade angle in radians.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Current speed multiplier, eased toward the selected speed.
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Advances one frame toward `target`.
    pub fn advance(&mut self, target: FanSpeed) {
        let target = f64::from(target.get());
        let step = f64::from(FanSpeed::MAX.get()) / SPEED_RAMP_FRAMES;
        let delta = target - self.multiplier;
        self.multiplier = if delta.abs() <= step {
            target
        } else {
            self.multiplier + step.copysign(delta)
        };
        self.angle =
            (self.angle + BLADE_RADIANS_PER_FRAME * self.multiplier) % std::f64::consts::TAU;
    }

    /// CSS transform for the blades element.
    pub fn style(&self) -> String {
        format!("transform: rotate({:.4}rad);", self.angle)
    }
}
