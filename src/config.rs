pub const GRID_SIZE: usize = 6;
pub const FLEET: [usize; 4] = [4, 3, 2, 1];
pub const TOTAL_FLEET_CELLS: usize = 10;
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Letter label for a column index, used only at display and wire
/// boundaries. Internal math stays integer-indexed.
pub fn column_letter(col: usize) -> char {
    (b'A' + col as u8) as char
}

/// Column index for a letter label, if it names a column on this grid.
pub fn column_index(letter: char) -> Option<usize> {
    let idx = (letter.to_ascii_uppercase() as u8).wrapping_sub(b'A') as usize;
    if idx < GRID_SIZE {
        Some(idx)
    } else {
        None
    }
}
