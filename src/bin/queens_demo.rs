//! N-Queens demo: count placements for small boards and draw a few.

use algo_demos::nqueens;

fn main() {
    env_logger::init();

    println!("Solutions per board size:");
    for n in 1..=8 {
        println!("  {n} queens: {:3} solutions", nqueens::count(n));
    }

    println!("\nAll 4-queens placements:");
    for placement in nqueens::solutions(4) {
        println!("{}", nqueens::render(&placement));
    }

    let eight = nqueens::solutions(8);
    println!("First 8-queens placement (of {}):", eight.len());
    if let Some(first) = eight.first() {
        println!("{}", nqueens::render(first));
    }
}
