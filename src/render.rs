#![cfg(feature = "std")]

//! Text rendering of board projections for the CLI driver.

/// Print an occupancy projection (0/1 per cell) with `A..` column labels
/// and `1..` row labels.
pub fn print_board<const N: usize>(title: &str, cells: &[[u8; N]; N]) {
    println!("\n{}:", title);
    print_grid(cells, |v| if v == 1 { '#' } else { '.' });
}

/// Print a guide-board projection (0 unknown, 1 miss, 2 hit per cell).
pub fn print_guide_board<const N: usize>(title: &str, cells: &[[u8; N]; N]) {
    println!("\n{}:", title);
    print_grid(cells, |v| match v {
        2 => 'x',
        1 => 'o',
        _ => '.',
    });
}

fn print_grid<const N: usize>(cells: &[[u8; N]; N], symbol: impl Fn(u8) -> char) {
    print!("   ");
    for c in 0..N {
        let ch = (b'A' + c as u8) as char;
        print!(" {}", ch);
    }
    println!();
    for (r, row) in cells.iter().enumerate() {
        print!("{:2} ", r + 1);
        for &v in row.iter() {
            print!(" {}", symbol(v));
        }
        println!();
    }
}
