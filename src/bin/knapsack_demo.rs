//! 0/1 knapsack demo: solve two fixed instances by dynamic programming and
//! by branch and bound, and show that they agree.

use algo_demos::{branch_bound, knapsack, knapsack::Item};

fn run_instance(name: &str, capacity: usize, items: &[Item]) {
    println!("=== {name} ===");
    println!("Capacity: {capacity}");
    println!("Items (weight, value):");
    for (i, item) in items.iter().enumerate() {
        println!(
            "  item {i}: weight={:3}  value={:3}  ratio={:.2}",
            item.weight,
            item.value,
            item.value as f64 / item.weight as f64
        );
    }

    let solution = knapsack::solve(capacity, items);
    println!("\nDynamic programming:");
    println!("  optimal value: {}", solution.value);
    println!("  chosen items:  {:?}", solution.chosen);
    println!("  total weight:  {}/{capacity}", solution.weight);
    println!(
        "  compact row check: {}",
        knapsack::max_value_compact(capacity, items)
    );

    let result = branch_bound::solve(capacity, items).expect("all weights are positive");
    println!("\nBranch and bound:");
    println!("  optimal value: {}", result.value);
    println!("  chosen items:  {:?}", result.chosen);
    println!("  total weight:  {}/{capacity}", result.weight);
    println!(
        "  nodes: {} explored, {} pruned",
        result.explored, result.pruned
    );

    println!(
        "\nMethods agree: {}\n",
        if result.value == solution.value { "yes" } else { "NO" }
    );
}

fn main() {
    env_logger::init();

    run_instance(
        "Small instance",
        50,
        &[Item::new(10, 60), Item::new(20, 100), Item::new(30, 120)],
    );

    let large: Vec<Item> = [
        (95, 55),
        (4, 10),
        (60, 47),
        (32, 5),
        (23, 4),
        (72, 50),
        (80, 8),
        (62, 61),
        (65, 85),
        (46, 87),
    ]
    .iter()
    .map(|&(w, v)| Item::new(w, v))
    .collect();
    run_instance("Large instance", 269, &large);
}
