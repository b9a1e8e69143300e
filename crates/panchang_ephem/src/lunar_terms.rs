//! Periodic terms for the Moon's longitude, distance, and latitude.
//!
//! Meeus, _Astronomical Algorithms_ (2nd ed.), tables 47.A and 47.B.
//! Multipliers of D, M, M′, F, then coefficients: Σl and Σb in 1e-6 degree,
//! Σr in 1e-3 km.

/// One row of table 47.A: `(D, M, M′, F, Σl sine coefficient, Σr cosine coefficient)`.
pub(crate) type LongitudeDistanceTerm = (i8, i8, i8, i8, i32, i32);

/// One row of table 47.B: `(D, M, M′, F, Σb sine coefficient)`.
pub(crate) type LatitudeTerm = (i8, i8, i8, i8, i32);

#[rustfmt::skip]
pub(crate) const LONGITUDE_DISTANCE: [LongitudeDistanceTerm; 60] = [
    (0,  0,  1,  0, 6_288_774, -20_905_355),
    (2,  0, -1,  0, 1_274_027,  -3_699_111),
    (2,  0,  0,  0,   658_314,  -2_955_968),
    (0,  0,  2,  0,   213_618,    -569_925),
    (0,  1,  0,  0,  -185_116,      48_888),
    (0,  0,  0,  2,  -114_332,      -3_149),
    (2,  0, -2,  0,    58_793,     246_158),
    (2, -1, -1,  0,    57_066,    -152_138),
    (2,  0,  1,  0,    53_322,    -170_733),
    (2, -1,  0,  0,    45_758,    -204_586),
    (0,  1, -1,  0,   -40_923,    -129_620),
    (1,  0,  0,  0,   -34_720,     108_743),
    (0,  1,  1,  0,   -30_383,     104_755),
    (2,  0,  0, -2,    15_327,      10_321),
    (0,  0,  1,  2,   -12_528,           0),
    (0,  0,  1, -2,    10_980,      79_661),
    (4,  0, -1,  0,    10_675,     -34_782),
    (0,  0,  3,  0,    10_034,     -23_210),
    (4,  0, -2,  0,     8_548,     -21_636),
    (2,  1, -1,  0,    -7_888,      24_208),
    (2,  1,  0,  0,    -6_766,      30_824),
    (1,  0, -1,  0,    -5_163,      -8_379),
    (1,  1,  0,  0,     4_987,     -16_675),
    (2, -1,  1,  0,     4_036,     -12_831),
    (2,  0,  2,  0,     3_994,     -10_445),
    (4,  0,  0,  0,     3_861,     -11_650),
    (2,  0, -3,  0,     3_665,      14_403),
    (0,  1, -2,  0,    -2_689,      -7_003),
    (2,  0, -1,  2,    -2_602,           0),
    (2, -1, -2,  0,     2_390,      10_056),
    (1,  0,  1,  0,    -2_348,       6_322),
    (2, -2,  0,  0,     2_236,      -9_884),
    (0,  1,  2,  0,    -2_120,       5_751),
    (0,  2,  0,  0,    -2_069,           0),
    (2, -2, -1,  0,     2_048,      -4_950),
    (2,  0,  1, -2,    -1_773,       4_130),
    (2,  0,  0,  2,    -1_595,           0),
    (4, -1, -1,  0,     1_215,      -3_958),
    (0,  0,  2,  2,    -1_110,           0),
    (3,  0, -1,  0,      -892,       3_258),
    (2,  1,  1,  0,      -810,       2_616),
    (4, -1, -2,  0,       759,      -1_897),
    (0,  2, -1,  0,      -713,      -2_117),
    (2,  2, -1,  0,      -700,       2_354),
    (2,  1, -2,  0,       691,           0),
    (2, -1,  0, -2,       596,           0),
    (4,  0,  1,  0,       549,      -1_423),
    (0,  0,  4,  0,       537,      -1_117),
    (4, -1,  0,  0,       520,      -1_571),
    (1,  0, -2,  0,      -487,      -1_739),
    (2,  1,  0, -2,      -399,           0),
    (0,  0,  2, -2,      -381,      -4_421),
    (1,  1,  1,  0,       351,           0),
    (3,  0, -2,  0,      -340,           0),
    (4,  0, -3,  0,       330,           0),
    (2, -1,  2,  0,       327,           0),
    (0,  2,  1,  0,      -323,       1_165),
    (1,  1, -1,  0,       299,           0),
    (2,  0,  3,  0,       294,           0),
    (2,  0, -1, -2,         0,       8_752),
];

#[rustfmt::skip]
pub(crate) const LATITUDE: [LatitudeTerm; 60] = [
    (0,  0,  0,  1, 5_128_122),
    (0,  0,  1,  1,   280_602),
    (0,  0,  1, -1,   277_693),
    (2,  0,  0, -1,   173_237),
    (2,  0, -1,  1,    55_413),
    (2,  0, -1, -1,    46_271),
    (2,  0,  0,  1,    32_573),
    (0,  0,  2,  1,    17_198),
    (2,  0,  1, -1,     9_266),
    (0,  0,  2, -1,     8_822),
    (2, -1,  0, -1,     8_216),
    (2,  0, -2, -1,     4_324),
    (2,  0,  1,  1,     4_200),
    (2,  1,  0, -1,    -3_359),
    (2, -1, -1,  1,     2_463),
    (2, -1,  0,  1,     2_211),
    (2, -1, -1, -1,     2_065),
    (0,  1, -1, -1,    -1_870),
    (4,  0, -1, -1,     1_828),
    (0,  1,  0,  1,    -1_794),
    (0,  0,  0,  3,    -1_749),
    (0,  1, -1,  1,    -1_565),
    (1,  0,  0,  1,    -1_491),
    (0,  1,  1,  1,    -1_475),
    (0,  1,  1, -1,    -1_410),
    (0,  1,  0, -1,    -1_344),
    (1,  0,  0, -1,    -1_335),
    (0,  0,  3,  1,     1_107),
    (4,  0,  0, -1,     1_021),
    (4,  0, -1,  1,       833),
    (0,  0,  1, -3,       777),
    (4,  0, -2,  1,       671),
    (2,  0,  0, -3,       607),
    (2,  0,  2, -1,       596),
    (2, -1,  1, -1,       491),
    (2,  0, -2,  1,      -451),
    (0,  0,  3, -1,       439),
    (2,  0,  2,  1,       422),
    (2,  0, -3, -1,       421),
    (2,  1, -1,  1,      -366),
    (2,  1,  0,  1,      -351),
    (4,  0,  0,  1,       331),
    (2, -1,  1,  1,       315),
    (2, -2,  0, -1,       302),
    (0,  0,  1,  3,      -283),
    (2,  1,  1, -1,      -229),
    (1,  1,  0, -1,       223),
    (1,  1,  0,  1,       223),
    (0,  1, -2, -1,      -220),
    (2,  1, -1, -1,      -220),
    (1,  0,  1,  1,      -185),
    (2, -1, -2, -1,       181),
    (0,  1,  2,  1,      -177),
    (4,  0, -2, -1,       176),
    (4, -1, -1, -1,       166),
    (1,  0,  1, -1,      -164),
    (4,  0,  1, -1,       132),
    (1,  0, -1, -1,      -119),
    (4, -1,  0, -1,       115),
    (2, -2,  0,  1,       107),
];
