use crate::comp::{comp_r, CompR, StepFn};
use crate::iterator::{iterator, Transduced};
use crate::reduced::Step;
use crate::reducer::Reducer;
use crate::transducer::Transducer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::marker::PhantomData;

/// Recursive expansion transducer. Built by [`flatten_with`].
///
/// `I` is the children type returned by the expansion function.
pub struct FlattenWith<F, I> {
    f: F,
    _children: PhantomData<fn() -> I>,
}

impl<F: Clone, I> Clone for FlattenWith<F, I> {
    fn clone(&self) -> Self {
        FlattenWith {
            f: self.f.clone(),
            _children: PhantomData,
        }
    }
}

impl<F, I> std::fmt::Debug for FlattenWith<F, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlattenWith").finish_non_exhaustive()
    }
}

/// Recursively expand each input with `f`.
///
/// For every value `x`, `f(&x)` decides:
///
/// - `None`: `x` itself is passed downstream unchanged;
/// - `Some(children)`: every child goes through the same logic, in order,
///   at whatever depth the nesting requires.
///
/// A reduced signal raised while expanding stops the walk at once; the
/// remaining siblings at every level are never visited.
///
/// # Examples
///
/// Objects become key/value pairs, arrays are walked, everything else
/// (strings included) is a leaf:
///
/// ```
/// use serde_json::{json, Value};
/// use transfold::reducers::Push;
/// use transfold::{flatten_with, fold};
///
/// let pairs = |x: &Value| match x {
///     Value::Object(map) => Some(map.iter().map(|(k, v)| json!([k, v])).collect::<Vec<_>>()),
///     Value::Array(items) => Some(items.clone()),
///     _ => None,
/// };
///
/// let out = fold(flatten_with(pairs), Push, [json!({"a": 1, "b": 2}), json!([[{"c": 3}]])]);
/// assert_eq!(out, vec![json!("a"), json!(1), json!("b"), json!(2), json!("c"), json!(3)]);
/// ```
///
/// The expansion function is cloned into every run, so it must be `Clone`:
///
/// ```compile_fail
/// use std::sync::Mutex;
/// use transfold::flatten_with;
///
/// let lock = Mutex::new(());
/// let _ = flatten_with(move |_: &u32| {
///     let _guard = lock.lock();
///     None::<Vec<u32>>
/// });
/// ```
pub fn flatten_with<T, F, I>(f: F) -> FlattenWith<F, I>
where
    F: FnMut(&T) -> Option<I> + Clone,
    I: IntoIterator<Item = T>,
{
    FlattenWith {
        f,
        _children: PhantomData,
    }
}

/// Lazily flatten `source` with `f`.
///
/// Same as `iterator(flatten_with(f), source)`.
///
/// ```
/// use transfold::flatten_with_iter;
///
/// let out: Vec<u32> = flatten_with_iter(|x: &u32| (*x >= 10).then(|| vec![x / 10, x % 10]), [7, 42, 305])
///     .collect();
/// assert_eq!(out, vec![7, 4, 2, 3, 0, 5]);
/// ```
pub fn flatten_with_iter<T, F, I, S>(f: F, source: S) -> Transduced<FlattenWith<F, I>, S::IntoIter>
where
    F: FnMut(&T) -> Option<I> + Clone,
    I: IntoIterator<Item = T>,
    S: IntoIterator<Item = T>,
{
    iterator(flatten_with(f), source)
}

fn flatten_into<T, F, I, R>(f: &mut F, rf: &mut R, acc: R::Acc, input: T) -> Step<R::Acc>
where
    F: FnMut(&T) -> Option<I>,
    I: IntoIterator<Item = T>,
    R: Reducer<T>,
{
    let Some(children) = f(&input) else {
        return rf.step(acc, input);
    };
    let mut acc = acc;
    for child in children {
        match flatten_into(f, rf, acc, child) {
            Step::Continue(next) => acc = next,
            reduced @ Step::Reduced(_) => return reduced,
        }
    }
    Step::Continue(acc)
}

impl<T, F, I> StepFn<T> for FlattenWith<F, I>
where
    F: FnMut(&T) -> Option<I>,
    I: IntoIterator<Item = T>,
{
    type Down = T;

    fn step<R>(&mut self, rf: &mut R, acc: R::Acc, input: T) -> Step<R::Acc>
    where
        R: Reducer<T>,
    {
        flatten_into(&mut self.f, rf, acc, input)
    }
}

impl<T, F, I> Transducer<T> for FlattenWith<F, I>
where
    F: FnMut(&T) -> Option<I> + Clone,
    I: IntoIterator<Item = T>,
{
    type Out = T;
    type Wrapped<R>
        = CompR<R, FlattenWith<F, I>>
    where
        R: Reducer<T>;

    fn apply<R>(&self, reducer: R) -> Self::Wrapped<R>
    where
        R: Reducer<T>,
    {
        comp_r(reducer, self.clone())
    }
}

/// Values that know whether they expand into child values.
///
/// This is the capability check [`flatten`] relies on. `expand` takes the
/// value by ownership so children are moved out, never copied. Text must
/// always come back as `Err(self)`: a string is a leaf, never a sequence of
/// characters.
pub trait Expand: Sized {
    type Children: IntoIterator<Item = Self>;

    /// `Ok(children)` to recurse into, or `Err(self)` for a leaf.
    fn expand(self) -> Result<Self::Children, Self>;
}

/// JSON arrays expand into their elements. Strings, objects, numbers,
/// booleans and null are leaves.
impl Expand for Value {
    type Children = Vec<Value>;

    fn expand(self) -> Result<Vec<Value>, Value> {
        match self {
            Value::Array(items) => Ok(items),
            leaf => Err(leaf),
        }
    }
}

/// An arbitrarily nested sequence of `T`.
///
/// Deserializes from plain JSON nesting, e.g. `[1, [2, [3]]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    Seq(Vec<Nested<T>>),
    Leaf(T),
}

impl<T> Nested<T> {
    /// The leaf value, if this is a leaf.
    pub fn into_leaf(self) -> Option<T> {
        match self {
            Nested::Leaf(value) => Some(value),
            Nested::Seq(_) => None,
        }
    }
}

impl<T> Expand for Nested<T> {
    type Children = Vec<Nested<T>>;

    fn expand(self) -> Result<Vec<Nested<T>>, Nested<T>> {
        match self {
            Nested::Seq(items) => Ok(items),
            leaf => Err(leaf),
        }
    }
}

/// Recursive flattening of [`Expand`] values. Built by [`flatten`].
pub struct Flatten<T> {
    _item: PhantomData<fn(T) -> T>,
}

impl<T> Clone for Flatten<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Flatten<T> {}

impl<T> std::fmt::Debug for Flatten<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Flatten")
    }
}

/// Recursively flatten values by their [`Expand`] capability.
///
/// Behaves like [`flatten_with`], but each value is handed to `expand` by
/// ownership, so subtrees are moved downstream rather than copied once per
/// ancestor.
///
/// ```
/// use serde_json::{json, Value};
/// use transfold::reducers::Push;
/// use transfold::{flatten, fold};
///
/// let out = fold(flatten::<Value>(), Push, [json!([1, ["ab", [null]]]), json!({"k": [2]})]);
/// assert_eq!(out, vec![json!(1), json!("ab"), json!(null), json!({"k": [2]})]);
/// ```
pub fn flatten<T: Expand>() -> Flatten<T> {
    Flatten {
        _item: PhantomData,
    }
}

fn expand_into<T, R>(rf: &mut R, acc: R::Acc, input: T) -> Step<R::Acc>
where
    T: Expand,
    R: Reducer<T>,
{
    let children = match input.expand() {
        Ok(children) => children,
        Err(leaf) => return rf.step(acc, leaf),
    };
    let mut acc = acc;
    for child in children {
        match expand_into(rf, acc, child) {
            Step::Continue(next) => acc = next,
            reduced @ Step::Reduced(_) => return reduced,
        }
    }
    Step::Continue(acc)
}

impl<T: Expand> StepFn<T> for Flatten<T> {
    type Down = T;

    fn step<R>(&mut self, rf: &mut R, acc: R::Acc, input: T) -> Step<R::Acc>
    where
        R: Reducer<T>,
    {
        expand_into(rf, acc, input)
    }
}

impl<T: Expand> Transducer<T> for Flatten<T> {
    type Out = T;
    type Wrapped<R>
        = CompR<R, Flatten<T>>
    where
        R: Reducer<T>;

    fn apply<R>(&self, reducer: R) -> Self::Wrapped<R>
    where
        R: Reducer<T>,
    {
        comp_r(reducer, *self)
    }
}
