//! Preallocating storage with `reserve()` and handling allocation failure with the `try_`
//! variants of growing operations.

use simple_vec::{Error, SimpleVec, reserve};

fn main() {
    // Storage for 1000 items, but no items yet.
    let mut readings = SimpleVec::<f64>::from(reserve(1000));
    println!(
        "Reserved sequence: {} items, capacity {}",
        readings.len(),
        readings.capacity()
    );

    for reading in 0..1000_u16 {
        readings.push_back(f64::from(reading) * 0.5);
    }

    // Filling the reservation did not need any reallocation.
    println!(
        "Filled sequence: {} items, capacity {}",
        readings.len(),
        readings.capacity()
    );

    // Asking for more than the address space can hold fails cleanly.
    match readings.try_reserve(usize::MAX) {
        Ok(()) => println!("Somehow reserved usize::MAX items"),
        Err(Error::AllocationFailure {
            slots,
            element_type,
        }) => println!("Could not reserve {slots} items of {element_type}"),
        Err(error) => println!("Unexpected error: {error}"),
    }

    // The sequence is untouched by the failed attempt.
    println!(
        "After failed reserve: {} items, capacity {}",
        readings.len(),
        readings.capacity()
    );
}
