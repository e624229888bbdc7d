//! Fixed-point trigonometry in a whole-turn angle unit
//!
//! Angles are plain integers counting degrees of one full rotation
//! (`0..TURN`). Lookups accept any integer angle and wrap modulo one
//! turn, so callers never need to normalize first. Sine and cosine come
//! from precomputed tables scaled by [`TRIG_SCALE`].

/// Angle in turn units (degrees). Wraps modulo [`TURN`].
pub type Angle = i32;

/// One full rotation in angle units.
pub const TURN: Angle = 360;

/// A quarter rotation (90 degrees).
pub const QUARTER_TURN: Angle = TURN / 4;

/// Fixed-point scale of the trig tables (table value 1024 == 1.0).
pub const TRIG_SCALE: i32 = 1024;

const SIN_TABLE: [i16; TURN as usize] = [
    0, 18, 36, 54, 71, 89, 107, 125, 143, 160, 178, 195, 213, 230, 248,
    265, 282, 299, 316, 333, 350, 367, 384, 400, 416, 433, 449, 465, 481,
    496, 512, 527, 543, 558, 573, 587, 602, 616, 630, 644, 658, 672, 685,
    698, 711, 724, 737, 749, 761, 773, 784, 796, 807, 818, 828, 839, 849,
    859, 868, 878, 887, 896, 904, 912, 920, 928, 935, 943, 949, 956, 962,
    968, 974, 979, 984, 989, 994, 998, 1002, 1005, 1008, 1011, 1014, 1016,
    1018, 1020, 1022, 1023, 1023, 1024, 1024, 1024, 1023, 1023, 1022, 1020,
    1018, 1016, 1014, 1011, 1008, 1005, 1002, 998, 994, 989, 984, 979, 974,
    968, 962, 956, 949, 943, 935, 928, 920, 912, 904, 896, 887, 878, 868,
    859, 849, 839, 828, 818, 807, 796, 784, 773, 761, 749, 737, 724, 711,
    698, 685, 672, 658, 644, 630, 616, 602, 587, 573, 558, 543, 527, 512,
    496, 481, 465, 449, 433, 416, 400, 384, 367, 350, 333, 316, 299, 282,
    265, 248, 230, 213, 195, 178, 160, 143, 125, 107, 89, 71, 54, 36, 18,
    0, -18, -36, -54, -71, -89, -107, -125, -143, -160, -178, -195, -213,
    -230, -248, -265, -282, -299, -316, -333, -350, -367, -384, -400, -416,
    -433, -449, -465, -481, -496, -512, -527, -543, -558, -573, -587, -602,
    -616, -630, -644, -658, -672, -685, -698, -711, -724, -737, -749, -761,
    -773, -784, -796, -807, -818, -828, -839, -849, -859, -868, -878, -887,
    -896, -904, -912, -920, -928, -935, -943, -949, -956, -962, -968, -974,
    -979, -984, -989, -994, -998, -1002, -1005, -1008, -1011, -1014, -1016,
    -1018, -1020, -1022, -1023, -1023, -1024, -1024, -1024, -1023, -1023,
    -1022, -1020, -1018, -1016, -1014, -1011, -1008, -1005, -1002, -998,
    -994, -989, -984, -979, -974, -968, -962, -956, -949, -943, -935, -928,
    -920, -912, -904, -896, -887, -878, -868, -859, -849, -839, -828, -818,
    -807, -796, -784, -773, -761, -749, -737, -724, -711, -698, -685, -672,
    -658, -644, -630, -616, -602, -587, -573, -558, -543, -527, -512, -496,
    -481, -465, -449, -433, -416, -400, -384, -367, -350, -333, -316, -299,
    -282, -265, -248, -230, -213, -195, -178, -160, -143, -125, -107, -89,
    -71, -54, -36, -18,
];

const COS_TABLE: [i16; TURN as usize] = [
    1024, 1024, 1023, 1023, 1022, 1020, 1018, 1016, 1014, 1011, 1008, 1005,
    1002, 998, 994, 989, 984, 979, 974, 968, 962, 956, 949, 943, 935, 928,
    920, 912, 904, 896, 887, 878, 868, 859, 849, 839, 828, 818, 807, 796,
    784, 773, 761, 749, 737, 724, 711, 698, 685, 672, 658, 644, 630, 616,
    602, 587, 573, 558, 543, 527, 512, 496, 481, 465, 449, 433, 416, 400,
    384, 367, 350, 333, 316, 299, 282, 265, 248, 230, 213, 195, 178, 160,
    143, 125, 107, 89, 71, 54, 36, 18, 0, -18, -36, -54, -71, -89, -107,
    -125, -143, -160, -178, -195, -213, -230, -248, -265, -282, -299, -316,
    -333, -350, -367, -384, -400, -416, -433, -449, -465, -481, -496, -512,
    -527, -543, -558, -573, -587, -602, -616, -630, -644, -658, -672, -685,
    -698, -711, -724, -737, -749, -761, -773, -784, -796, -807, -818, -828,
    -839, -849, -859, -868, -878, -887, -896, -904, -912, -920, -928, -935,
    -943, -949, -956, -962, -968, -974, -979, -984, -989, -994, -998,
    -1002, -1005, -1008, -1011, -1014, -1016, -1018, -1020, -1022, -1023,
    -1023, -1024, -1024, -1024, -1023, -1023, -1022, -1020, -1018, -1016,
    -1014, -1011, -1008, -1005, -1002, -998, -994, -989, -984, -979, -974,
    -968, -962, -956, -949, -943, -935, -928, -920, -912, -904, -896, -887,
    -878, -868, -859, -849, -839, -828, -818, -807, -796, -784, -773, -761,
    -749, -737, -724, -711, -698, -685, -672, -658, -644, -630, -616, -602,
    -587, -573, -558, -543, -527, -512, -496, -481, -465, -449, -433, -416,
    -400, -384, -367, -350, -333, -316, -299, -282, -265, -248, -230, -213,
    -195, -178, -160, -143, -125, -107, -89, -71, -54, -36, -18, 0, 18, 36,
    54, 71, 89, 107, 125, 143, 160, 178, 195, 213, 230, 248, 265, 282, 299,
    316, 333, 350, 367, 384, 400, 416, 433, 449, 465, 481, 496, 512, 527,
    543, 558, 573, 587, 602, 616, 630, 644, 658, 672, 685, 698, 711, 724,
    737, 749, 761, 773, 784, 796, 807, 818, 828, 839, 849, 859, 868, 878,
    887, 896, 904, 912, 920, 928, 935, 943, 949, 956, 962, 968, 974, 979,
    984, 989, 994, 998, 1002, 1005, 1008, 1011, 1014, 1016, 1018, 1020,
    1022, 1023, 1023, 1024,
];

/// Wrap an angle into `0..TURN`.
pub fn normalize_angle(angle: Angle) -> Angle {
    let wrapped = angle % TURN;
    if wrapped < 0 {
        wrapped + TURN
    } else {
        wrapped
    }
}

/// Sine of `angle`, scaled by [`TRIG_SCALE`].
pub fn sin_lookup(angle: Angle) -> i32 {
    i32::from(SIN_TABLE[normalize_angle(angle) as usize])
}

/// Cosine of `angle`, scaled by [`TRIG_SCALE`].
pub fn cos_lookup(angle: Angle) -> i32 {
    i32::from(COS_TABLE[normalize_angle(angle) as usize])
}

/// Project a table value onto a magnitude, dividing the scale back out.
pub fn scale(table_value: i32, magnitude: i32) -> i32 {
    table_value * magnitude / TRIG_SCALE
}

/// Rounded integer square root.
pub fn isqrt(n: u32) -> u32 {
    if n < 2 {
        return n;
    }

    // Newton's method converging to floor(sqrt(n))
    let mut x = n;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }

    // Round to the nearest root: n > x*x + x means (x+1)^2 is closer
    if n - x * x > x {
        x + 1
    } else {
        x
    }
}
