//! Hand-written topologies: two plaquettes and the IBM Quantum heavy-hex devices.

use crate::generate::Tables;
use crate::topology::{Coordinate, Edge};

/// A topology given as explicit tables rather than a generation rule.
#[derive(Debug)]
pub struct LiteralTable {
    /// Bonds, in the order they are listed.
    pub coupling_map: &'static [Edge],
    /// One `(row, column)` per qubit.
    pub coordinates: &'static [Coordinate],
    /// One field value per qubit.
    pub field_pattern: &'static [f64],
}

impl LiteralTable {
    pub(crate) fn to_tables(&self) -> Tables {
        Tables {
            coupling_map: self.coupling_map.to_vec(),
            coordinates: self.coordinates.to_vec(),
            field_pattern: self.field_pattern.to_vec(),
        }
    }
}

/// Ten-qubit plaquette: an eight-qubit loop with a tail on each side.
#[rustfmt::skip]
pub(crate) static PLAQUETTE_B_10: LiteralTable = LiteralTable {
    coupling_map: &[
        (0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (5, 7), (7, 8),
        (8, 9), (9, 1),
    ],
    coordinates: &[
        (0, 1), (1, 1), (2, 0), (3, 0), (4, 0), (5, 1), (6, 1), (4, 2),
        (3, 2), (2, 2),
    ],
    field_pattern: &[0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0],
};

/// Twelve-qubit plaquette: a ten-qubit loop with a tail on each side.
#[rustfmt::skip]
pub(crate) static PLAQUETTE_B_12: LiteralTable = LiteralTable {
    coupling_map: &[
        (0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 7), (6, 8),
        (8, 9), (9, 10), (10, 11), (11, 1),
    ],
    coordinates: &[
        (0, 1), (1, 1), (2, 0), (3, 0), (4, 0), (5, 0), (6, 1), (7, 1),
        (5, 2), (4, 2), (3, 2), (2, 2),
    ],
    field_pattern: &[0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0],
};

/// Seven-qubit heavy-hex Falcon device.
#[rustfmt::skip]
pub(crate) static FALCON_7: LiteralTable = LiteralTable {
    coupling_map: &[
        (0, 1), (1, 2), (1, 3), (3, 5), (4, 5), (5, 6),
    ],
    coordinates: &[
        (1, 0), (1, 1), (1, 2), (2, 1), (3, 0), (3, 1), (3, 2),
    ],
    field_pattern: &[0.0; 7],
};

/// 27-qubit heavy-hex Falcon device.
#[rustfmt::skip]
pub(crate) static FALCON_27: LiteralTable = LiteralTable {
    coupling_map: &[
        (0, 1), (1, 2), (1, 4), (2, 3), (3, 5), (4, 7), (5, 8), (6, 7),
        (7, 10), (8, 9), (8, 11), (10, 12), (11, 14), (12, 13), (12, 15), (13, 14),
        (14, 16), (15, 18), (16, 19), (17, 18), (18, 21), (19, 20), (19, 22), (21, 23),
        (22, 25), (23, 24), (24, 25), (25, 26),
    ],
    coordinates: &[
        (1, 0), (1, 1), (2, 1), (3, 1), (1, 2), (3, 2), (0, 3), (1, 3),
        (3, 3), (4, 3), (1, 4), (3, 4), (1, 5), (2, 5), (3, 5), (1, 6),
        (3, 6), (0, 7), (1, 7), (3, 7), (4, 7), (1, 8), (3, 8), (1, 9),
        (2, 9), (3, 9), (3, 10),
    ],
    field_pattern: &[0.0; 27],
};

/// 127-qubit heavy-hex Eagle device. Bonds are listed in both directions.
#[rustfmt::skip]
pub(crate) static EAGLE_127: LiteralTable = LiteralTable {
    coupling_map: &[
        (0, 1), (0, 14), (1, 0), (1, 2), (2, 1), (2, 3), (3, 2), (3, 4),
        (4, 3), (4, 5), (4, 15), (5, 4), (5, 6), (6, 5), (6, 7), (7, 6),
        (7, 8), (8, 7), (8, 16), (9, 10), (10, 9), (10, 11), (11, 10), (11, 12),
        (12, 11), (12, 13), (12, 17), (13, 12), (14, 0), (14, 18), (15, 4), (15, 22),
        (16, 8), (16, 26), (17, 12), (17, 30), (18, 14), (18, 19), (19, 18), (19, 20),
        (20, 19), (20, 21), (20, 33), (21, 20), (21, 22), (22, 15), (22, 21), (22, 23),
        (23, 22), (23, 24), (24, 23), (24, 25), (24, 34), (25, 24), (25, 26), (26, 16),
        (26, 25), (26, 27), (27, 26), (27, 28), (28, 27), (28, 29), (28, 35), (29, 28),
        (29, 30), (30, 17), (30, 29), (30, 31), (31, 30), (31, 32), (32, 31), (32, 36),
        (33, 20), (33, 39), (34, 24), (34, 43), (35, 28), (35, 47), (36, 32), (36, 51),
        (37, 38), (37, 52), (38, 37), (38, 39), (39, 33), (39, 38), (39, 40), (40, 39),
        (40, 41), (41, 40), (41, 42), (41, 53), (42, 41), (42, 43), (43, 34), (43, 42),
        (43, 44), (44, 43), (44, 45), (45, 44), (45, 46), (45, 54), (46, 45), (46, 47),
        (47, 35), (47, 46), (47, 48), (48, 47), (48, 49), (49, 48), (49, 50), (49, 55),
        (50, 49), (50, 51), (51, 36), (51, 50), (52, 37), (52, 56), (53, 41), (53, 60),
        (54, 45), (54, 64), (55, 49), (55, 68), (56, 52), (56, 57), (57, 56), (57, 58),
        (58, 57), (58, 59), (58, 71), (59, 58), (59, 60), (60, 53), (60, 59), (60, 61),
        (61, 60), (61, 62), (62, 61), (62, 63), (62, 72), (63, 62), (63, 64), (64, 54),
        (64, 63), (64, 65), (65, 64), (65, 66), (66, 65), (66, 67), (66, 73), (67, 66),
        (67, 68), (68, 55), (68, 67), (68, 69), (69, 68), (69, 70), (70, 69), (70, 74),
        (71, 58), (71, 77), (72, 62), (72, 81), (73, 66), (73, 85), (74, 70), (74, 89),
        (75, 76), (75, 90), (76, 75), (76, 77), (77, 71), (77, 76), (77, 78), (78, 77),
        (78, 79), (79, 78), (79, 80), (79, 91), (80, 79), (80, 81), (81, 72), (81, 80),
        (81, 82), (82, 81), (82, 83), (83, 82), (83, 84), (83, 92), (84, 83), (84, 85),
        (85, 73), (85, 84), (85, 86), (86, 85), (86, 87), (87, 86), (87, 88), (87, 93),
        (88, 87), (88, 89), (89, 74), (89, 88), (90, 75), (90, 94), (91, 79), (91, 98),
        (92, 83), (92, 102), (93, 87), (93, 106), (94, 90), (94, 95), (95, 94), (95, 96),
        (96, 95), (96, 97), (96, 109), (97, 96), (97, 98), (98, 91), (98, 97), (98, 99),
        (99, 98), (99, 100), (100, 99), (100, 101), (100, 110), (101, 100), (101, 102), (102, 92),
        (102, 101), (102, 103), (103, 102), (103, 104), (104, 103), (104, 105), (104, 111), (105, 104),
        (105, 106), (106, 93), (106, 105), (106, 107), (107, 106), (107, 108), (108, 107), (108, 112),
        (109, 96), (109, 114), (110, 100), (110, 118), (111, 104), (111, 122), (112, 108), (112, 126),
        (113, 114), (114, 109), (114, 113), (114, 115), (115, 114), (115, 116), (116, 115), (116, 117),
        (117, 116), (117, 118), (118, 110), (118, 117), (118, 119), (119, 118), (119, 120), (120, 119),
        (120, 121), (121, 120), (121, 122), (122, 111), (122, 121), (122, 123), (123, 122), (123, 124),
        (124, 123), (124, 125), (125, 124), (125, 126), (126, 112), (126, 125),
    ],
    coordinates: &[
        (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (0, 7),
        (0, 8), (0, 9), (0, 10), (0, 11), (0, 12), (0, 13), (1, 0), (1, 4),
        (1, 8), (1, 12), (2, 0), (2, 1), (2, 2), (2, 3), (2, 4), (2, 5),
        (2, 6), (2, 7), (2, 8), (2, 9), (2, 10), (2, 11), (2, 12), (2, 13),
        (2, 14), (3, 2), (3, 6), (3, 10), (3, 14), (4, 0), (4, 1), (4, 2),
        (4, 3), (4, 4), (4, 5), (4, 6), (4, 7), (4, 8), (4, 9), (4, 10),
        (4, 11), (4, 12), (4, 13), (4, 14), (5, 0), (5, 4), (5, 8), (5, 12),
        (6, 0), (6, 1), (6, 2), (6, 3), (6, 4), (6, 5), (6, 6), (6, 7),
        (6, 8), (6, 9), (6, 10), (6, 11), (6, 12), (6, 13), (6, 14), (7, 2),
        (7, 6), (7, 10), (7, 14), (8, 0), (8, 1), (8, 2), (8, 3), (8, 4),
        (8, 5), (8, 6), (8, 7), (8, 8), (8, 9), (8, 10), (8, 11), (8, 12),
        (8, 13), (8, 14), (9, 0), (9, 4), (9, 8), (9, 12), (10, 0), (10, 1),
        (10, 2), (10, 3), (10, 4), (10, 5), (10, 6), (10, 7), (10, 8), (10, 9),
        (10, 10), (10, 11), (10, 12), (10, 13), (10, 14), (11, 2), (11, 6), (11, 10),
        (11, 14), (12, 1), (12, 2), (12, 3), (12, 4), (12, 5), (12, 6), (12, 7),
        (12, 8), (12, 9), (12, 10), (12, 11), (12, 12), (12, 13), (12, 14),
    ],
    field_pattern: &[0.0; 127],
};
