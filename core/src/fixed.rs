// Q16.16 fixed-point export of simulation parameters

use serde::{Deserialize, Serialize};

use crate::params::SimParams;

/// Fixed-point type: Q16.16 format using i64
pub type I = i64;

pub const FRAC_BITS: u32 = 16;
pub const ONE: I = 1i64 << FRAC_BITS;

/// Round-to-nearest conversion, ties away from zero. Out of range values saturate.
#[inline]
pub fn to_fixed(v: f32) -> I {
    let scaled = v as f64 * ONE as f64;
    if scaled >= 0.0 {
        (scaled + 0.5) as I
    } else {
        (scaled - 0.5) as I
    }
}

#[inline]
pub fn from_fixed(x: I) -> f32 {
    (x as f64 / ONE as f64) as f32
}

/// `SimParams` with every float field (and the derived bounds) in Q16.16.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedParams {
    pub width: I,
    pub height: I,
    pub ball_diam: I,
    pub ball_rad: I,
    pub max_x: I,
    pub max_y: I,
    pub gravity: I,
    pub friction: I,
    pub wall_force: I,
    pub coll_force: I,
    pub coll_friction: I,
    pub ball_speed: I,
    pub tile_slots: u32,
    pub target_ball_c: u32,
}

impl From<&SimParams> for FixedParams {
    fn from(p: &SimParams) -> Self {
        Self {
            width: to_fixed(p.width),
            height: to_fixed(p.height),
            ball_diam: to_fixed(p.ball_diam),
            ball_rad: to_fixed(p.ball_rad()),
            max_x: to_fixed(p.max_x()),
            max_y: to_fixed(p.max_y()),
            gravity: to_fixed(p.gravity),
            friction: to_fixed(p.friction),
            wall_force: to_fixed(p.wall_force),
            coll_force: to_fixed(p.coll_force),
            coll_friction: to_fixed(p.coll_friction),
            ball_speed: to_fixed(p.ball_speed),
            tile_slots: p.tile_slots,
            target_ball_c: p.target_ball_c,
        }
    }
}
