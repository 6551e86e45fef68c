mod comp;
pub mod cursor;
mod error;
mod flatten;
mod fold;
mod iterator;
mod reduced;
mod reducer;
pub mod reducers;
mod transducer;
mod xform;

pub use comp::{comp_r, CompR, StepFn};
pub use cursor::{consume, ensure_cursor, Cursor, Dropping, IntoCursor, SeqCursor};
pub use error::ProtocolViolation;
pub use flatten::{flatten, flatten_with, flatten_with_iter, Expand, Flatten, FlattenWith, Nested};
pub use fold::{fold, fold_with, reduce, try_fold};
pub use iterator::{iterator, Transduced};
pub use reduced::{reduced, Step};
pub use reducer::{Checked, Reducer};
pub use transducer::{compose, Comp, Identity, Transducer};
pub use xform::{filter, map, take, Filter, Map, Take, TakeStep};
