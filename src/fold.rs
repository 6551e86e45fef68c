use crate::reduced::Step;
use crate::reducer::Reducer;
use crate::transducer::Transducer;

/// Fold `source` through `xform` into `reducer`, starting from `init()`.
///
/// Inputs are stepped in source order. The first reduced signal stops the
/// run without pulling anything further from `source`. `complete` is called
/// exactly once with the final, unwrapped accumulator.
///
/// ```
/// use transfold::reducers::Push;
/// use transfold::{comp, filter, fold, map, take};
///
/// let xf = comp!(filter(|x: &u32| x % 3 == 0), map(|x: u32| x + 1), take(3));
/// assert_eq!(fold(&xf, Push, 1..), vec![4, 7, 10]);
/// // the same transducer drives another, independent run
/// assert_eq!(fold(&xf, Push, 10..13), vec![13]);
/// ```
pub fn fold<In, X, R, S>(xform: X, reducer: R, source: S) -> R::Acc
where
    X: Transducer<In>,
    R: Reducer<X::Out>,
    S: IntoIterator<Item = In>,
{
    let mut rf = xform.apply(reducer);
    let init = rf.init();
    drive(&mut rf, init, source)
}

/// Like [`fold`], but starts from an explicit accumulator instead of
/// `init()`.
pub fn fold_with<In, X, R, S>(xform: X, reducer: R, init: R::Acc, source: S) -> R::Acc
where
    X: Transducer<In>,
    R: Reducer<X::Out>,
    S: IntoIterator<Item = In>,
{
    let mut rf = xform.apply(reducer);
    drive(&mut rf, init, source)
}

/// Fold `source` straight into `reducer`, with no transducer.
pub fn reduce<In, R, S>(mut reducer: R, source: S) -> R::Acc
where
    R: Reducer<In>,
    S: IntoIterator<Item = In>,
{
    let init = reducer.init();
    drive(&mut reducer, init, source)
}

/// Like [`fold`] over a fallible source.
///
/// The first `Err` from `source` ends the run: it is returned as-is,
/// `complete` is never called and the accumulator is dropped.
///
/// ```
/// use transfold::reducers::Push;
/// use transfold::{try_fold, Identity};
///
/// let ok: Result<Vec<u8>, String> = try_fold(Identity, Push, vec![Ok(1), Ok(2)]);
/// assert_eq!(ok, Ok(vec![1, 2]));
///
/// let err = try_fold(Identity, Push, vec![Ok(1), Err("disk gone"), Ok(3)]);
/// assert_eq!(err, Err("disk gone"));
/// ```
pub fn try_fold<In, E, X, R, S>(xform: X, reducer: R, source: S) -> Result<R::Acc, E>
where
    X: Transducer<In>,
    R: Reducer<X::Out>,
    S: IntoIterator<Item = Result<In, E>>,
{
    let mut rf = xform.apply(reducer);
    let mut acc = rf.init();
    for (index, item) in source.into_iter().enumerate() {
        let input = match item {
            Ok(input) => input,
            Err(e) => {
                log::debug!("fold abandoned: source failed at element {index}");
                return Err(e);
            }
        };
        match rf.step(acc, input) {
            Step::Continue(next) => acc = next,
            Step::Reduced(last) => {
                log::trace!("fold reduced after {} steps", index + 1);
                return Ok(rf.complete(last));
            }
        }
    }
    Ok(rf.complete(acc))
}

fn drive<In, R, S>(rf: &mut R, init: R::Acc, source: S) -> R::Acc
where
    R: Reducer<In>,
    S: IntoIterator<Item = In>,
{
    let mut acc = init;
    for (index, input) in source.into_iter().enumerate() {
        match rf.step(acc, input) {
            Step::Continue(next) => acc = next,
            Step::Reduced(last) => {
                log::trace!("fold reduced after {} steps", index + 1);
                return rf.complete(last);
            }
        }
    }
    rf.complete(acc)
}
