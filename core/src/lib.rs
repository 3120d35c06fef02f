#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod constants;
pub mod fixed;
pub mod params;

pub use fixed::FixedParams;
pub use params::{ParamsError, ParamsOverride, Preset, SimParams};

use sha2::{Digest, Sha256};

/// Domain prefix for parameter fingerprints
pub const PARAMS_HASH_PREFIX: &[u8] = b"BOUNCEPARAMSv1";

const PARAMS_HASH_WORDS: usize = 11;
const PARAMS_HASH_LEN: usize = PARAMS_HASH_PREFIX.len() + PARAMS_HASH_WORDS * 4;

/// Compute SHA-256 fingerprint of a parameter set
/// Floats are hashed by bit pattern, so 0.0 and -0.0 differ
pub fn compute_params_hash(p: &SimParams) -> [u8; 32] {
    let mut h = Sha256::new();

    // Prefix, then every primary field in declaration order, little-endian
    let mut buf = [0u8; PARAMS_HASH_LEN];
    buf[..PARAMS_HASH_PREFIX.len()].copy_from_slice(PARAMS_HASH_PREFIX);
    let words: [u32; PARAMS_HASH_WORDS] = [
        p.width.to_bits(),
        p.height.to_bits(),
        p.ball_diam.to_bits(),
        p.gravity.to_bits(),
        p.friction.to_bits(),
        p.wall_force.to_bits(),
        p.coll_force.to_bits(),
        p.coll_friction.to_bits(),
        p.ball_speed.to_bits(),
        p.tile_slots,
        p.target_ball_c,
    ];
    for (i, w) in words.iter().enumerate() {
        let at = PARAMS_HASH_PREFIX.len() + i * 4;
        buf[at..at + 4].copy_from_slice(&w.to_le_bytes());
    }

    h.update(buf);

    let out = h.finalize();
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&out);
    arr
}
