//! Embedded 5x7 symbol table.

pub const GLYPH_ROWS: usize = 7;
pub const GLYPH_COLS: usize = 5;

pub type Pattern = [&'static str; GLYPH_ROWS];

/// Symbol drawn between adjacent characters during layout.
pub const SEPARATOR: u8 = b' ';

/// Uppercase letters `A` through `Z`, in code order.
#[rustfmt::skip]
pub const LETTERS: [Pattern; 26] = [
    // A
    [".###.", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"],
    // B
    ["####.", "#...#", "#...#", "####.", "#...#", "#...#", "####."],
    // C
    [".###.", "#...#", "#....", "#....", "#....", "#...#", ".###."],
    // D
    ["####.", "#...#", "#...#", "#...#", "#...#", "#...#", "####."],
    // E
    ["#####", "#....", "#....", "####.", "#....", "#....", "#####"],
    // F
    ["#####", "#....", "#....", "####.", "#....", "#....", "#...."],
    // G
    [".###.", "#...#", "#....", "#.###", "#...#", "#...#", ".####"],
    // H
    ["#...#", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"],
    // I
    [".###.", "..#..", "..#..", "..#..", "..#..", "..#..", ".###."],
    // J
    ["..###", "...#.", "...#.", "...#.", "...#.", "#..#.", ".##.."],
    // K
    ["#...#", "#..#.", "#.#..", "##...", "#.#..", "#..#.", "#...#"],
    // L
    ["#....", "#....", "#....", "#....", "#....", "#....", "#####"],
    // M
    ["#...#", "##.##", "#.#.#", "#.#.#", "#...#", "#...#", "#...#"],
    // N
    ["#...#", "#...#", "##..#", "#.#.#", "#..##", "#...#", "#...#"],
    // O
    [".###.", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."],
    // P
    ["####.", "#...#", "#...#", "####.", "#....", "#....", "#...."],
    // Q
    [".###.", "#...#", "#...#", "#...#", "#.#.#", "#..#.", ".##.#"],
    // R
    ["####.", "#...#", "#...#", "####.", "#.#..", "#..#.", "#...#"],
    // S
    [".####", "#....", "#....", ".###.", "....#", "....#", "####."],
    // T
    ["#####", "..#..", "..#..", "..#..", "..#..", "..#..", "..#.."],
    // U
    ["#...#", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."],
    // V
    ["#...#", "#...#", "#...#", "#...#", "#...#", ".#.#.", "..#.."],
    // W
    ["#...#", "#...#", "#...#", "#.#.#", "#.#.#", "#.#.#", ".#.#."],
    // X
    ["#...#", "#...#", ".#.#.", "..#..", ".#.#.", "#...#", "#...#"],
    // Y
    ["#...#", "#...#", ".#.#.", "..#..", "..#..", "..#..", "..#.."],
    // Z
    ["#####", "....#", "...#.", "..#..", ".#...", "#....", "#####"],
];

/// Punctuation and spacing symbols keyed by their byte code.
#[rustfmt::skip]
pub const SPECIALS: [(u8, Pattern); 7] = [
    (b' ', [".....", ".....", ".....", ".....", ".....", ".....", "....."]),
    (b'.', [".....", ".....", ".....", ".....", ".....", ".##..", ".##.."]),
    (b',', [".....", ".....", ".....", ".....", ".##..", "..#..", ".#..."]),
    (b'!', ["..#..", "..#..", "..#..", "..#..", "..#..", ".....", "..#.."]),
    (b'?', [".###.", "#...#", "....#", "...#.", "..#..", ".....", "..#.."]),
    (b'-', [".....", ".....", ".....", "#####", ".....", ".....", "....."]),
    (b':', [".....", ".##..", ".##..", ".....", ".##..", ".##..", "....."]),
];
