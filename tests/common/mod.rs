#![allow(dead_code)]

use serde_json::{json, Value};
use std::cell::Cell;
use std::rc::Rc;
use transfold::{Reducer, Step, Transducer};

/// Collects inputs and signals termination on the `limit`-th step.
/// Records every call so tests can check how it was driven.
#[derive(Debug, Default)]
pub struct StopAfter {
    pub limit: usize,
    pub steps: usize,
    pub completes: usize,
    pub inits: usize,
}

impl StopAfter {
    pub fn new(limit: usize) -> Self {
        StopAfter {
            limit,
            ..Default::default()
        }
    }
}

impl Reducer<i32> for StopAfter {
    type Acc = Vec<i32>;

    fn init(&mut self) -> Vec<i32> {
        self.inits += 1;
        Vec::new()
    }

    fn complete(&mut self, acc: Vec<i32>) -> Vec<i32> {
        self.completes += 1;
        acc
    }

    fn step(&mut self, mut acc: Vec<i32>, input: i32) -> Step<Vec<i32>> {
        self.steps += 1;
        acc.push(input);
        if self.steps >= self.limit {
            Step::Reduced(acc)
        } else {
            Step::Continue(acc)
        }
    }
}

/// Appends a marker value on completion, to observe trailing output.
#[derive(Debug, Default)]
pub struct WithTrailer;

impl Reducer<i32> for WithTrailer {
    type Acc = Vec<i32>;

    fn init(&mut self) -> Vec<i32> {
        Vec::new()
    }

    fn complete(&mut self, mut acc: Vec<i32>) -> Vec<i32> {
        acc.push(-1);
        acc
    }

    fn step(&mut self, mut acc: Vec<i32>, input: i32) -> Step<Vec<i32>> {
        acc.push(input);
        Step::Continue(acc)
    }
}

/// An endless source of `0, 1, 2, ...` that records how many values were pulled.
pub fn counted_source(pulled: Rc<Cell<usize>>) -> impl Iterator<Item = i32> {
    (0..).inspect(move |_| pulled.set(pulled.get() + 1))
}

/// Objects become `[key, value]` pairs, arrays are walked, everything else is a leaf.
pub fn pairs(x: &Value) -> Option<Vec<Value>> {
    match x {
        Value::Object(map) => Some(map.iter().map(|(k, v)| json!([k, v])).collect()),
        Value::Array(items) => Some(items.clone()),
        _ => None,
    }
}

/// Never expands anything.
pub fn leaves(_x: &Value) -> Option<Vec<Value>> {
    None
}

/// Holds each input back by one step and releases the last one, times 100,
/// from `complete`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoldBack;

#[derive(Debug)]
pub struct HoldBackReducer<R> {
    inner: R,
    held: Option<i32>,
}

impl<R: Reducer<i32>> Reducer<i32> for HoldBackReducer<R> {
    type Acc = R::Acc;

    fn init(&mut self) -> R::Acc {
        self.inner.init()
    }

    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        let acc = match self.held.take() {
            Some(last) => self.inner.step(acc, last * 100).into_inner(),
            None => acc,
        };
        self.inner.complete(acc)
    }

    fn step(&mut self, acc: R::Acc, input: i32) -> Step<R::Acc> {
        match self.held.replace(input) {
            Some(previous) => self.inner.step(acc, previous),
            None => Step::Continue(acc),
        }
    }
}

impl Transducer<i32> for HoldBack {
    type Out = i32;
    type Wrapped<R>
        = HoldBackReducer<R>
    where
        R: Reducer<i32>;

    fn apply<R>(&self, reducer: R) -> HoldBackReducer<R>
    where
        R: Reducer<i32>,
    {
        HoldBackReducer {
            inner: reducer,
            held: None,
        }
    }
}
