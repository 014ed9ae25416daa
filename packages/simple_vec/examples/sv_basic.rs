//! Basic usage of the `simple_vec` crate:
//!
//! * Creating a sequence.
//! * Appending, inserting and erasing items.
//! * Checked and unchecked access.
//! * Watching the capacity grow.

use simple_vec::{SimpleVec, simple_vec};

fn main() {
    let mut names = SimpleVec::new();

    // Every time the sequence runs out of room, its capacity doubles.
    for name in ["Alice", "Bob", "Charlie", "Dave", "Eve"] {
        names.push_back(name.to_string());

        println!(
            "Sequence contains {} items, with a capacity of {}",
            names.len(),
            names.capacity()
        );
    }

    // Positions are plain indexes.
    let removed = names.erase(1);
    println!("Erased {removed}, left with {names:?}");

    names.insert(0, "Zoe".to_string());
    println!("Inserted at the front: {names:?}");

    // Indexing panics when out of bounds, `at()` tells you instead.
    println!("First item: {}", names[0]);

    match names.at(100) {
        Ok(name) => println!("Item 100: {name}"),
        Err(error) => println!("No item 100: {error}"),
    }

    // Shrinking never gives capacity back.
    names.clear();
    println!(
        "After clear: {} items, capacity still {}",
        names.len(),
        names.capacity()
    );

    let numbers = simple_vec![3, 1, 2];
    let mut sorted = numbers.clone();
    sorted.sort_unstable();
    println!(
        "{numbers:?} sorted is {sorted:?}, comparing less: {}",
        numbers < sorted
    );
}
