#![cfg(feature = "std")]

//! Terminal rendering and coordinate labels for the CLI.

use crate::board::Board;
use crate::common::Coord;
use crate::config::{column_index, column_letter, GRID_SIZE};

/// Parse a `C4`-style label (letter column, 1-based row) into a `Coord`.
pub fn parse_coord(input: &str) -> Option<Coord> {
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col = column_index(chars.next()?)?;
    let row_str: String = chars.collect();
    let row: usize = row_str.parse().ok()?;
    if row == 0 || row > GRID_SIZE {
        return None;
    }
    Some(Coord::new(row - 1, col))
}

/// Print the board: `X` hit ship segment, `o` miss, `S` hidden ship when
/// `reveal` is set, `.` open water.
pub fn print_board(board: &Board, reveal: bool) {
    print!("   ");
    for c in 0..GRID_SIZE {
        print!(" {}", column_letter(c));
    }
    println!();
    for r in 0..GRID_SIZE {
        print!("{:2} ", r + 1);
        for c in 0..GRID_SIZE {
            let coord = Coord::new(r, c);
            let ch = if board.is_targeted(coord) && board.is_occupied(coord) {
                'X'
            } else if board.is_targeted(coord) {
                'o'
            } else if reveal && board.is_occupied(coord) {
                'S'
            } else {
                '.'
            };
            print!(" {}", ch);
        }
        println!();
    }
}

/// One line per ship: damage out of length, sunk marker.
pub fn print_fleet_status(board: &Board) {
    for ship in board.ships() {
        let sunk = if ship.is_sunk() { " (sunk)" } else { "" };
        println!(
            "  length {}: {}/{} hit{}",
            ship.length(),
            ship.hit_count(),
            ship.length(),
            sunk
        );
    }
}
