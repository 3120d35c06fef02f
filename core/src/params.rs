use alloc::format;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::constants::{self, legacy};

/// Which constants header a parameter set starts from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// 800x600 bounds, 5px balls
    #[default]
    Classic,
    /// 1366x768 bounds, 2px balls
    Wide,
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" => Ok(Preset::Classic),
            "wide" => Ok(Preset::Wide),
            _ => Err(format!(
                "Invalid preset: '{}'. Must be 'classic' or 'wide'",
                s
            )),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::Classic => write!(f, "classic"),
            Preset::Wide => write!(f, "wide"),
        }
    }
}

/// Runtime simulation parameters.
///
/// Only primary values are stored. Radius, bounds and tile size are derived
/// on demand so they can never disagree with the diameter and extents.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimParams {
    pub width: f32,
    pub height: f32,
    pub ball_diam: f32,
    pub gravity: f32,
    pub friction: f32,
    pub wall_force: f32,
    pub coll_force: f32,
    pub coll_friction: f32,
    pub ball_speed: f32,
    pub tile_slots: u32,
    pub target_ball_c: u32,
}

impl SimParams {
    pub const fn preset(preset: Preset) -> Self {
        let (width, height, ball_diam) = match preset {
            Preset::Classic => (constants::WIDTH, constants::HEIGHT, constants::BALL_DIAM),
            Preset::Wide => (legacy::WIDTH, legacy::HEIGHT, legacy::BALL_DIAM),
        };
        Self {
            width,
            height,
            ball_diam,
            gravity: constants::GRAVITY,
            friction: constants::FRICTION,
            wall_force: constants::WALL_FORCE,
            coll_force: constants::COLL_FORCE,
            coll_friction: constants::COLL_FRICTION,
            ball_speed: constants::BALL_SPEED,
            tile_slots: constants::TILE_SLOTS,
            target_ball_c: constants::TARGET_BALL_C,
        }
    }

    #[inline]
    pub fn ball_rad(&self) -> f32 {
        self.ball_diam / 2.0
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.width - self.ball_diam
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.height - self.ball_diam
    }

    /// Width of one spatial partition bucket. Zero when `tile_slots` is zero.
    pub fn tile_width(&self) -> f32 {
        if self.tile_slots == 0 {
            return 0.0;
        }
        self.width / self.tile_slots as f32
    }

    /// Height of one spatial partition bucket. Zero when `tile_slots` is zero.
    pub fn tile_height(&self) -> f32 {
        if self.tile_slots == 0 {
            return 0.0;
        }
        self.height / self.tile_slots as f32
    }

    /// Check every field, reporting the first violation found.
    pub fn validate(&self) -> Result<(), ParamsError> {
        let floats = [
            ("width", self.width),
            ("height", self.height),
            ("ball_diam", self.ball_diam),
            ("gravity", self.gravity),
            ("friction", self.friction),
            ("wall_force", self.wall_force),
            ("coll_force", self.coll_force),
            ("coll_friction", self.coll_friction),
            ("ball_speed", self.ball_speed),
        ];
        for (field, value) in floats {
            if !value.is_finite() {
                return Err(ParamsError::NotFinite { field, value });
            }
            if value.abs() > constants::MAX_EXTENT {
                return Err(ParamsError::TooLarge {
                    field,
                    value,
                    max: constants::MAX_EXTENT,
                });
            }
        }

        for (field, value) in [
            ("width", self.width),
            ("height", self.height),
            ("ball_diam", self.ball_diam),
        ] {
            if value <= 0.0 {
                return Err(ParamsError::NotPositive { field, value });
            }
        }

        if self.ball_diam >= self.width {
            return Err(ParamsError::BallTooLarge {
                axis: "width",
                ball_diam: self.ball_diam,
                extent: self.width,
            });
        }
        if self.ball_diam >= self.height {
            return Err(ParamsError::BallTooLarge {
                axis: "height",
                ball_diam: self.ball_diam,
                extent: self.height,
            });
        }

        for (field, value) in [
            ("friction", self.friction),
            ("coll_friction", self.coll_friction),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ParamsError::OutOfRange {
                    field,
                    value,
                    min: 0.0,
                    max: 1.0,
                });
            }
        }

        for (field, value) in [
            ("wall_force", self.wall_force),
            ("coll_force", self.coll_force),
            ("ball_speed", self.ball_speed),
        ] {
            if value < 0.0 {
                return Err(ParamsError::Negative { field, value });
            }
        }

        if self.tile_slots == 0 {
            return Err(ParamsError::NoTileSlots);
        }
        let tile = if self.tile_width() < self.tile_height() {
            self.tile_width()
        } else {
            self.tile_height()
        };
        if tile < self.ball_diam {
            return Err(ParamsError::TileTooSmall {
                tile,
                ball_diam: self.ball_diam,
            });
        }

        if self.target_ball_c == 0 || self.target_ball_c > constants::MAX_BALL_C {
            return Err(ParamsError::BallCount {
                value: self.target_ball_c,
                max: constants::MAX_BALL_C,
            });
        }

        Ok(())
    }
}

impl Default for SimParams {
    fn default() -> Self {
        SimParams::preset(Preset::default())
    }
}

/// Partial parameter set, typically read from a config file.
/// Unset fields leave the base value untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParamsOverride {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub ball_diam: Option<f32>,
    pub gravity: Option<f32>,
    pub friction: Option<f32>,
    pub wall_force: Option<f32>,
    pub coll_force: Option<f32>,
    pub coll_friction: Option<f32>,
    pub ball_speed: Option<f32>,
    pub tile_slots: Option<u32>,
    pub target_ball_c: Option<u32>,
}

impl ParamsOverride {
    pub fn is_empty(&self) -> bool {
        *self == ParamsOverride::default()
    }

    pub fn apply(&self, base: &SimParams) -> SimParams {
        SimParams {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            ball_diam: self.ball_diam.unwrap_or(base.ball_diam),
            gravity: self.gravity.unwrap_or(base.gravity),
            friction: self.friction.unwrap_or(base.friction),
            wall_force: self.wall_force.unwrap_or(base.wall_force),
            coll_force: self.coll_force.unwrap_or(base.coll_force),
            coll_friction: self.coll_friction.unwrap_or(base.coll_friction),
            ball_speed: self.ball_speed.unwrap_or(base.ball_speed),
            tile_slots: self.tile_slots.unwrap_or(base.tile_slots),
            target_ball_c: self.target_ball_c.unwrap_or(base.target_ball_c),
        }
    }
}

/// Reason a parameter set was rejected
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamsError {
    NotFinite {
        field: &'static str,
        value: f32,
    },
    TooLarge {
        field: &'static str,
        value: f32,
        max: f32,
    },
    NotPositive {
        field: &'static str,
        value: f32,
    },
    Negative {
        field: &'static str,
        value: f32,
    },
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    BallTooLarge {
        axis: &'static str,
        ball_diam: f32,
        extent: f32,
    },
    NoTileSlots,
    TileTooSmall {
        tile: f32,
        ball_diam: f32,
    },
    BallCount {
        value: u32,
        max: u32,
    },
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::NotFinite { field, value } => {
                write!(f, "{} must be finite, got {}", field, value)
            }
            ParamsError::TooLarge { field, value, max } => {
                write!(f, "{} must be within [-{}, {}], got {}", field, max, max, value)
            }
            ParamsError::NotPositive { field, value } => {
                write!(f, "{} must be greater than zero, got {}", field, value)
            }
            ParamsError::Negative { field, value } => {
                write!(f, "{} must not be negative, got {}", field, value)
            }
            ParamsError::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(
                f,
                "{} must be within [{}, {}], got {}",
                field, min, max, value
            ),
            ParamsError::BallTooLarge {
                axis,
                ball_diam,
                extent,
            } => write!(
                f,
                "ball_diam {} leaves no room along {} {}",
                ball_diam, axis, extent
            ),
            ParamsError::NoTileSlots => write!(f, "tile_slots must be at least 1"),
            ParamsError::TileTooSmall { tile, ball_diam } => write!(
                f,
                "tile size {} is smaller than ball_diam {}",
                tile, ball_diam
            ),
            ParamsError::BallCount { value, max } => write!(
                f,
                "target_ball_c must be within [1, {}], got {}",
                max, value
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParamsError {}
