//! N-Queens by backtracking.
//!
//! Queens are placed row by row; column and diagonal occupancy flags make
//! the safety check constant-time, and unwinding a row undoes its flags.
//! A solution is the queen's column in each row.

/// Shared recursion: walk every valid placement, handing each complete
/// board to `visit`.
fn search<F: FnMut(&[usize])>(
    n: usize,
    row: usize,
    placement: &mut Vec<usize>,
    cols: &mut [bool],
    diag_up: &mut [bool],
    diag_down: &mut [bool],
    visit: &mut F,
) {
    if row == n {
        log::trace!("placement found: {placement:?}");
        visit(placement);
        return;
    }

    for col in 0..n {
        let up = row + col;
        let down = row + n - 1 - col;
        if cols[col] || diag_up[up] || diag_down[down] {
            continue;
        }

        cols[col] = true;
        diag_up[up] = true;
        diag_down[down] = true;
        placement.push(col);

        search(n, row + 1, placement, cols, diag_up, diag_down, visit);

        placement.pop();
        cols[col] = false;
        diag_up[up] = false;
        diag_down[down] = false;
    }
}

fn walk<F: FnMut(&[usize])>(n: usize, mut visit: F) {
    if n == 0 {
        visit(&[]);
        return;
    }
    let mut placement = Vec::with_capacity(n);
    let mut cols = vec![false; n];
    let mut diag_up = vec![false; 2 * n - 1];
    let mut diag_down = vec![false; 2 * n - 1];
    search(
        n,
        0,
        &mut placement,
        &mut cols,
        &mut diag_up,
        &mut diag_down,
        &mut visit,
    );
}

/// Every placement of `n` non-attacking queens, one column index per row.
pub fn solutions(n: usize) -> Vec<Vec<usize>> {
    let mut found = Vec::new();
    walk(n, |placement| found.push(placement.to_vec()));
    found
}

/// Number of solutions, without materializing the boards.
pub fn count(n: usize) -> usize {
    let mut total = 0;
    walk(n, |_| total += 1);
    total
}

/// ASCII board for one solution.
pub fn render(solution: &[usize]) -> String {
    let n = solution.len();
    let mut board = String::new();
    for &queen_col in solution {
        for col in 0..n {
            board.push(if col == queen_col { 'Q' } else { '.' });
            if col + 1 < n {
                board.push(' ');
            }
        }
        board.push('\n');
    }
    board
}
