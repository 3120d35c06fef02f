// Simulation constants
// Runtime code should go through `SimParams`; these are the defaults it starts from.

/// Simulation width (pixels)
pub const WIDTH: f32 = 800.0;

/// Simulation height (pixels)
pub const HEIGHT: f32 = 600.0;

/// Ball diameter (pixels)
pub const BALL_DIAM: f32 = 5.0;

/// Ball radius (pixels)
pub const BALL_RAD: f32 = BALL_DIAM / 2.0;

/// Largest x a ball's origin may take
pub const MAX_X: f32 = WIDTH - BALL_DIAM;

/// Largest y a ball's origin may take
pub const MAX_Y: f32 = HEIGHT - BALL_DIAM;

/// Downward acceleration (pixels/step^2)
pub const GRAVITY: f32 = 0.05;

/// Fraction of velocity kept each step
pub const FRICTION: f32 = 0.999;

/// Fraction of velocity kept when bouncing off a wall
pub const WALL_FORCE: f32 = 0.8;

/// Strength of the push apart when two balls overlap
pub const COLL_FORCE: f32 = 0.5;

/// Fraction of velocity kept after a ball/ball collision
pub const COLL_FRICTION: f32 = 0.95;

/// Initial ball speed (pixels/step)
pub const BALL_SPEED: f32 = 2.0;

/// Spatial partition buckets per axis
pub const TILE_SLOTS: u32 = 16;

/// Number of balls the simulation aims to keep alive
pub const TARGET_BALL_C: u32 = 1_000;

/// Frames the renderer may have queued at once
pub const MAX_BUFFERS_IN_FLIGHT: u32 = 3;

/// Upper bound accepted for `target_ball_c` at runtime
pub const MAX_BALL_C: u32 = 1_000_000;

/// Largest magnitude accepted for any float parameter (2^20).
/// Keeps every value and derived bound well inside the Q16.16 export range.
pub const MAX_EXTENT: f32 = 1_048_576.0;

/// First header revision: widescreen bounds with 2px balls.
/// Coefficients and counts are shared with the top-level constants.
pub mod legacy {
    /// Simulation width (pixels)
    pub const WIDTH: f32 = 1366.0;

    /// Simulation height (pixels)
    pub const HEIGHT: f32 = 768.0;

    /// Ball diameter (pixels)
    pub const BALL_DIAM: f32 = 2.0;

    /// Ball radius (pixels)
    pub const BALL_RAD: f32 = BALL_DIAM / 2.0;

    /// Largest x a ball's origin may take
    pub const MAX_X: f32 = WIDTH - BALL_DIAM;

    /// Largest y a ball's origin may take
    pub const MAX_Y: f32 = HEIGHT - BALL_DIAM;

    const _: () = assert!(BALL_RAD * 2.0 == BALL_DIAM);
    const _: () = assert!(MAX_X > 0.0 && MAX_Y > 0.0);
}

const _: () = assert!(BALL_RAD * 2.0 == BALL_DIAM);
const _: () = assert!(MAX_X > 0.0 && MAX_Y > 0.0);
const _: () = assert!(TILE_SLOTS > 0);
const _: () = assert!(TARGET_BALL_C <= MAX_BALL_C);
const _: () = assert!(WIDTH <= MAX_EXTENT && HEIGHT <= MAX_EXTENT);
const _: () = assert!(legacy::WIDTH <= MAX_EXTENT && legacy::HEIGHT <= MAX_EXTENT);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_subtract_one_diameter() {
        assert_eq!(MAX_X, WIDTH - BALL_DIAM);
        assert_eq!(MAX_Y, HEIGHT - BALL_DIAM);
        assert_eq!(MAX_X, 795.0);
        assert_eq!(MAX_Y, 595.0);
        assert_eq!(BALL_RAD, 2.5);
    }

    #[test]
    fn legacy_header_values() {
        assert_eq!(legacy::MAX_X, 1364.0);
        assert_eq!(legacy::MAX_Y, 766.0);
        assert_eq!(legacy::BALL_RAD, 1.0);
    }
}
