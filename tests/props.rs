use proptest::prelude::*;
use transfold::reducers::Push;
use transfold::{
    compose, cursor, filter, flatten, fold, iterator, map, reduce, take, Identity, Nested,
    Transducer,
};

fn arb_source() -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(-1000..1000i32, 0..60)
}

fn arb_nested() -> impl Strategy<Value = Nested<i32>> {
    let leaf = any::<i32>().prop_map(Nested::Leaf);
    leaf.prop_recursive(4, 64, 6, |inner| {
        proptest::collection::vec(inner, 0..6).prop_map(Nested::Seq)
    })
}

fn leaves_of(tree: &Nested<i32>, out: &mut Vec<i32>) {
    match tree {
        Nested::Leaf(x) => out.push(*x),
        Nested::Seq(items) => items.iter().for_each(|item| leaves_of(item, out)),
    }
}

// Folding through compose(t1, t2) is the same as folding through t1 into
// the reducer t2 has already wrapped.
proptest! {
    #[test]
    fn prop_composition_law(source in arb_source(), k in 1..5i32) {
        let t1 = map(move |x: i32| x * k);
        let t2 = filter(|x: &i32| x % 3 != 0);

        let composed = fold(compose(&t1, &t2), Push, source.clone());
        let nested = fold(&t1, Transducer::<i32>::apply(&t2, Push), source);

        prop_assert_eq!(composed, nested);
    }
}

// Grouping of composition does not change the result.
proptest! {
    #[test]
    fn prop_composition_associative(source in arb_source(), n in 0..40usize) {
        let a = map(|x: i32| x + 7);
        let b = filter(|x: &i32| x % 2 == 0);
        let c = take(n);

        let left = fold(compose(compose(&a, &b), &c), Push, source.clone());
        let right = fold(compose(&a, compose(&b, &c)), Push, source);

        prop_assert_eq!(left, right);
    }
}

// Identity is a unit on both sides and equals a plain reduce.
proptest! {
    #[test]
    fn prop_identity_unit(source in arb_source()) {
        let t = map(|x: i32| x - 1);
        let plain = fold(&t, Push, source.clone());

        prop_assert_eq!(fold(compose(Identity, &t), Push, source.clone()), plain.clone());
        prop_assert_eq!(fold(compose(&t, Identity), Push, source.clone()), plain);
        prop_assert_eq!(fold(Identity, Push, source.clone()), reduce(Push, source));
    }
}

// The lazy driver yields exactly what the eager driver accumulates.
proptest! {
    #[test]
    fn prop_lazy_matches_eager(source in arb_source(), n in 0..80usize) {
        let xf = compose(filter(|x: &i32| *x > -500), take(n));
        let eager = fold(&xf, Push, source.clone());
        let lazy: Vec<i32> = iterator(&xf, source).collect();
        prop_assert_eq!(eager, lazy);
    }
}

// Flattening a nested tree yields its leaves in depth-first order.
proptest! {
    #[test]
    fn prop_flatten_yields_leaves_in_order(trees in proptest::collection::vec(arb_nested(), 0..5)) {
        let mut expected = Vec::new();
        for tree in &trees {
            leaves_of(tree, &mut expected);
        }

        let out: Vec<i32> = fold(flatten::<Nested<i32>>(), Push, trees)
            .into_iter()
            .filter_map(Nested::into_leaf)
            .collect();

        prop_assert_eq!(out, expected);
    }
}

// drop(n) is the source without its first n elements.
proptest! {
    #[test]
    fn prop_drop_skips_prefix(source in arb_source(), n in 0..80usize) {
        let out: Vec<i32> = cursor::drop(n, source.clone()).collect();
        let expected: Vec<i32> = source.into_iter().skip(n).collect();
        prop_assert_eq!(out, expected);
    }
}
