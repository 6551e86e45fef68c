mod common;

use common::{counted_source, leaves, pairs};
use serde_json::{json, Value};
use std::cell::Cell;
use std::rc::Rc;
use transfold::reducers::{Count, First, Push};
use transfold::{
    comp, flatten, flatten_with, flatten_with_iter, fold, iterator, map, take, Checked, Nested,
};

#[test]
fn test_scalar_pass_through() {
    let out: Vec<i32> = flatten_with_iter(|_: &i32| None::<Vec<i32>>, vec![1, 2, 3]).collect();
    assert_eq!(out, vec![1, 2, 3]);
}

#[test]
fn test_recursive_expansion_of_objects_and_arrays() {
    let out: Vec<Value> = flatten_with_iter(pairs, [json!({"a": 1, "b": 2}), json!([[{"c": 3}]])]).collect();
    assert_eq!(out, vec![json!("a"), json!(1), json!("b"), json!(2), json!("c"), json!(3)]);
}

#[test]
fn test_strings_are_never_split() {
    let out: Vec<Value> = flatten_with_iter(leaves, [json!("ab"), json!("cd")]).collect();
    assert_eq!(out, vec![json!("ab"), json!("cd")]);

    let out = fold(flatten::<Value>(), Push, [json!(["ab", ["cd"]])]);
    assert_eq!(out, vec![json!("ab"), json!("cd")]);
}

#[test]
fn test_empty_expansion_emits_nothing() {
    let out = fold(flatten::<Value>(), Push, [json!(1), json!([]), json!([[], [2]])]);
    assert_eq!(out, vec![json!(1), json!(2)]);
}

#[test]
fn test_deep_nesting() {
    let mut value = json!("core");
    for _ in 0..200 {
        value = json!([value]);
    }
    let out = fold(flatten::<Value>(), Push, [value]);
    assert_eq!(out, vec![json!("core")]);
}

#[test]
fn test_reduced_stops_siblings_at_every_depth() {
    let visited = Rc::new(Cell::new(0));
    let seen = visited.clone();
    let expand = move |x: &Value| {
        seen.set(seen.get() + 1);
        x.as_array().cloned()
    };

    let mut checked = Checked::new(Push);
    let out = fold(
        comp!(flatten_with(expand), take(2)),
        &mut checked,
        [json!([[1, [2, 3]], 4]), json!(5)],
    );

    assert_eq!(out, vec![json!(1), json!(2)]);
    assert_eq!(checked.steps(), 2);
    assert_eq!(checked.completions(), 1);
    // outer array, [1, [2, 3]], 1, [2, 3], 2: never 3, 4 or 5
    assert_eq!(visited.get(), 5);
}

#[test]
fn test_first_reduces_inside_recursion() {
    let out = fold(flatten::<Value>(), First, [json!([[["x"], "y"]]), json!("z")]);
    assert_eq!(out, Some(json!("x")));
}

#[test]
fn test_lazy_on_infinite_source() {
    let pulled = Rc::new(Cell::new(0));
    let mut it = iterator(
        comp!(map(|x: i32| json!(x)), flatten::<Value>()),
        counted_source(pulled.clone()),
    );
    assert_eq!(it.next(), Some(json!(0)));
    assert_eq!(pulled.get(), 1);
}

#[test]
fn test_one_input_many_outputs_are_buffered() {
    let pulled = Rc::new(Cell::new(0));
    let mut it = iterator(
        comp!(map(|x: i32| json!([x, x, x])), flatten::<Value>()),
        counted_source(pulled.clone()),
    );
    assert_eq!(it.next(), Some(json!(0)));
    assert_eq!(it.next(), Some(json!(0)));
    assert_eq!(it.next(), Some(json!(0)));
    assert_eq!(pulled.get(), 1);
    assert_eq!(it.next(), Some(json!(1)));
    assert_eq!(pulled.get(), 2);
}

#[test]
fn test_nested_from_json() {
    let tree: Nested<u32> = serde_json::from_str("[1, [2, [3, []]], 4]").unwrap();
    let out: Vec<u32> = fold(flatten::<Nested<u32>>(), Push, [tree])
        .into_iter()
        .filter_map(Nested::into_leaf)
        .collect();
    assert_eq!(out, vec![1, 2, 3, 4]);
}

#[test]
fn test_flatten_with_counts_leaves() {
    let count = fold(flatten_with(pairs), Count, [json!({"k": [1, 2], "j": "s"})]);
    // "j", "s", "k", 1, 2
    assert_eq!(count, 5);
}

/// A leaf type that cannot be cloned.
#[derive(Debug, PartialEq)]
struct Token(u32);

#[test]
fn test_flatten_moves_children_without_cloning() {
    let tree = Nested::Seq(vec![
        Nested::Leaf(Token(1)),
        Nested::Seq(vec![Nested::Seq(vec![Nested::Leaf(Token(2))]), Nested::Leaf(Token(3))]),
    ]);
    let out: Vec<Token> = fold(flatten::<Nested<Token>>(), Push, [tree])
        .into_iter()
        .filter_map(Nested::into_leaf)
        .collect();
    assert_eq!(out, vec![Token(1), Token(2), Token(3)]);
}

#[test]
fn test_flatten_reduced_inside_owned_expansion() {
    let tree: Nested<u32> = serde_json::from_str("[[1, [2, 3]], 4]").unwrap();
    let out = fold(comp!(flatten::<Nested<u32>>(), take(2)), Push, [tree]);
    assert_eq!(out, vec![Nested::Leaf(1), Nested::Leaf(2)]);
}
