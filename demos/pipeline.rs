//! Building a pipeline once and running it eagerly, lazily, and over nested data.

use serde_json::{json, Value};
use transfold::reducers::{Count, Push};
use transfold::{comp, cursor, filter, flatten, fold, iterator, map, take};

fn main() {
    // One recipe, reused by every run below.
    let evens_squared = comp!(filter(|x: &u64| x % 2 == 0), map(|x: u64| x * x));

    let eager = fold(&evens_squared, Push, 1..=10);
    println!("eager: {eager:?}");

    // Lazy: only as much of the endless source is read as `take` asks for.
    let first_five: Vec<u64> = iterator(comp!(&evens_squared, take(5)), 1..).collect();
    println!("lazy:  {first_five:?}");

    let count = fold(&evens_squared, Count, 1..=100);
    println!("count: {count}");

    // Nested JSON arrays are walked depth-first; only leaves come out.
    let doc = json!([1, [2, [3, "four"]], [], {"five": 5}]);
    let leaves = fold(flatten::<Value>(), Push, vec![doc]);
    println!("leaves: {leaves:?}");

    let tail: Vec<u64> = cursor::drop(3, iterator(&evens_squared, 1..=12)).collect();
    println!("after drop(3): {tail:?}");
}
