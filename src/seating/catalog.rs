use serde::Serialize;

/// Static identity of a seat before it is placed on the floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatSpec {
    pub id: u32,
    pub employee: &'static str,
    pub is_floater: bool,
    pub block: &'static str,
}

const fn seat(id: u32, employee: &'static str, block: &'static str) -> SeatSpec {
    SeatSpec {
        id,
        employee,
        is_floater: false,
        block,
    }
}

const fn floater(id: u32, block: &'static str) -> SeatSpec {
    SeatSpec {
        id,
        employee: "Free (FLOATER)",
        is_floater: true,
        block,
    }
}

pub const SEAT_CATALOG: [SeatSpec; 45] = [
    // Block 1 (below IP Conference Room)
    seat(1, "Chris Laganiere", "block1"),
    seat(2, "Kabir Mahal", "block1"),
    seat(3, "Adam Z", "block1"),
    seat(4, "Sparsh Agarwal", "block1"),
    seat(8, "Vinesh K", "block1"),
    seat(9, "Rachel Rivera", "block1"),
    seat(10, "Sahil", "block1"),
    seat(11, "Javier", "block1"),
    // Block 2 (right of block 1, below Mini Lounge)
    seat(5, "Aditya Prabhakar", "block2"),
    seat(6, "Helen (Xiaohan) Xue", "block2"),
    seat(7, "Ajinkya Bari", "block2"),
    seat(12, "Dhruven Shah / Eshwar", "block2"),
    seat(13, "Ryan Schwers", "block2"),
    seat(14, "Dave Makhervaks", "block2"),
    // Block 3 (left side of Area-2)
    seat(15, "Sam Puth", "block3"),
    seat(16, "Arnelle Chang", "block3"),
    seat(17, "Allison Chuang", "block3"),
    seat(18, "Allie Ivener", "block3"),
    seat(22, "Jason", "block3"),
    seat(23, "Ani", "block3"),
    seat(24, "Cullen McMahon", "block3"),
    seat(25, "Ryan Douglas", "block3"),
    // Block 4 (right side of Area-2)
    seat(19, "Omri Nachmani", "block4"),
    seat(20, "Madeline Grade", "block4"),
    seat(21, "Patrick vn", "block4"),
    seat(26, "Justin Krogue", "block4"),
    seat(27, "Mehr Kashyap", "block4"),
    seat(28, "Eric Hunter", "block4"),
    // Block 5 (below Area-2, left)
    seat(29, "Sachin Muraldihara", "block5"),
    seat(30, "Chinmay Vinchurkar", "block5"),
    seat(31, "Julie", "block5"),
    seat(35, "Andrew Jones", "block5"),
    seat(36, "Ebube", "block5"),
    seat(37, "Morgan Davis", "block5"),
    // Block 6 (below Area-2, right)
    seat(32, "Kelly McDonald / Jared Hu", "block6"),
    seat(33, "Nikolai Oudalov", "block6"),
    seat(34, "Stephane Colas", "block6"),
    seat(38, "Lillian Cartwright", "block6"),
    seat(39, "Lindsay Maher", "block6"),
    seat(40, "Arvil Nagpal", "block6"),
    // Blocks 7 & 8 (hallway floaters)
    floater(41, "block7"),
    floater(42, "block7"),
    floater(43, "block8"),
    floater(44, "block8"),
    floater(45, "block8"),
];

/// Cell geometry shared by every block, in layout pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    pub seat_size: f64,
    pub seat_spacing: f64,
    pub block_spacing: f64,
}

impl GridMetrics {
    pub const STANDARD: Self = Self {
        seat_size: 40.0,
        seat_spacing: 10.0,
        block_spacing: 60.0,
    };

    #[inline(always)]
    pub fn pitch(&self) -> f64 {
        self.seat_size + self.seat_spacing
    }

    /// Span of `cells` seats plus the gap to the next block.
    pub fn block_extent(&self, cells: u32) -> f64 {
        cells as f64 * self.pitch() + self.block_spacing
    }
}

/// One rectangular group of seats, filled row-major from `origin`.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockSpec {
    pub label: &'static str,
    pub origin: (f64, f64),
    pub columns: u32,
    pub seat_ids: Vec<u32>,
}

/// The eight standard blocks. Origins chain off block 1 so the plan keeps
/// its shape when `metrics` change.
pub fn standard_blocks(metrics: &GridMetrics) -> Vec<BlockSpec> {
    let b1 = (100.0, 200.0);
    let b2 = (b1.0 + metrics.block_extent(4), b1.1);
    let b3 = (b1.0, b1.1 + metrics.block_extent(2));
    let b4 = (b2.0, b3.1);
    let b5 = (b1.0, b3.1 + metrics.block_extent(2));
    let b6 = (b2.0, b5.1);
    // Hallway row sits an extra 80px below the last desk block.
    let b7 = (b1.0, b5.1 + metrics.block_extent(2) + 80.0);
    let b8 = (b7.0 + metrics.block_extent(2), b7.1);

    let block = |label: &'static str, origin: (f64, f64), columns: u32, ids: &[u32]| BlockSpec {
        label,
        origin,
        columns,
        seat_ids: ids.to_vec(),
    };

    vec![
        block("block1", b1, 4, &[1, 2, 3, 4, 8, 9, 10, 11]),
        block("block2", b2, 3, &[5, 6, 7, 12, 13, 14]),
        block("block3", b3, 4, &[15, 16, 17, 18, 22, 23, 24, 25]),
        block("block4", b4, 3, &[19, 20, 21, 26, 27, 28]),
        block("block5", b5, 3, &[29, 30, 31, 35, 36, 37]),
        block("block6", b6, 3, &[32, 33, 34, 38, 39, 40]),
        block("block7", b7, 2, &[41, 42]),
        block("block8", b8, 3, &[43, 44, 45]),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Area {
    pub id: &'static str,
    pub name: &'static str,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
}

pub fn standard_areas() -> Vec<Area> {
    vec![
        Area {
            id: "ip-conference",
            name: "IP Conference Room",
            x: 50.0,
            y: 50.0,
            width: 300.0,
            height: 120.0,
            color: "#dc2626",
        },
        Area {
            id: "mini-lounge",
            name: "Mini Lounge Area",
            x: 400.0,
            y: 50.0,
            width: 250.0,
            height: 120.0,
            color: "#9333ea",
        },
        Area {
            id: "area-2",
            name: "Area-2",
            x: 50.0,
            y: 350.0,
            width: 600.0,
            height: 200.0,
            color: "#e5e7eb",
        },
        Area {
            id: "hallway",
            name: "Hallway",
            x: 200.0,
            y: 700.0,
            width: 300.0,
            height: 60.0,
            color: "#d1d5db",
        },
    ]
}
