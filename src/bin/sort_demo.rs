//! Quicksort demo: sort a fixed array and a randomly generated one with
//! both variants, then walk the usual edge cases.

use algo_demos::quicksort::{quicksort, quicksort_in_place};
use rand::Rng;

fn main() {
    env_logger::init();

    let fixed = vec![64, 34, 25, 12, 22, 11, 90, 88, 45, 50];
    println!("Fixed input:      {fixed:?}");
    println!("Out-of-place:     {:?}", quicksort(&fixed));

    let mut in_place = fixed.clone();
    quicksort_in_place(&mut in_place);
    println!("In-place:         {in_place:?}");

    let mut rng = rand::thread_rng();
    let random: Vec<u32> = (0..15).map(|_| rng.gen_range(1..1000)).collect();
    println!("\nRandom input:     {random:?}");
    println!("Sorted:           {:?}", quicksort(&random));

    println!("\nEdge cases:");
    println!("  empty:          {:?}", quicksort::<i32>(&[]));
    println!("  single:         {:?}", quicksort(&[5]));
    println!("  already sorted: {:?}", quicksort(&[1, 2, 3, 4, 5]));
    println!("  reverse sorted: {:?}", quicksort(&[5, 4, 3, 2, 1]));
    println!(
        "  duplicates:     {:?}",
        quicksort(&[3, 1, 4, 1, 5, 9, 2, 6, 5])
    );
}
