//! Tabulated payout curves for fan 0..=10, in quarter-units.
//!
//! Tier 2 and tier 3 are written out in full rather than scaled at runtime
//! so a table audit compares literal values.

/// Highest fan with a tabulated entry.
pub const TABULATED_MAX_FAN: u32 = 10;

const ROWS: usize = TABULATED_MAX_FAN as usize + 1;

/// Full gun: discarder pays alone. Indexed by `[stake][fan]`.
pub(super) const FULL_GUN_DISCARDER: [[u64; ROWS]; 3] = [
    [4, 8, 16, 32, 64, 96, 128, 192, 256, 384, 512],
    [8, 16, 32, 64, 128, 192, 256, 384, 512, 768, 1024],
    [20, 40, 80, 160, 320, 480, 640, 960, 1280, 1920, 2560],
];

/// Half gun: discarder share. Also the per-loser rate on a self-draw.
pub(super) const HALF_GUN_DISCARDER: [[u64; ROWS]; 3] = [
    [2, 4, 8, 16, 32, 48, 64, 96, 128, 192, 256],
    [4, 8, 16, 32, 64, 96, 128, 192, 256, 384, 512],
    [10, 20, 40, 80, 160, 240, 320, 480, 640, 960, 1280],
];

/// Half gun: each bystander's share.
pub(super) const HALF_GUN_OTHERS: [[u64; ROWS]; 3] = [
    [1, 2, 4, 8, 16, 24, 32, 48, 64, 96, 128],
    [2, 4, 8, 16, 32, 48, 64, 96, 128, 192, 256],
    [5, 10, 20, 40, 80, 120, 160, 240, 320, 480, 640],
];
