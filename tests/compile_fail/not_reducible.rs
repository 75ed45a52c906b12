//! A value with no reducible conversion cannot be reduced.

use reducers::reduce;

struct Opaque;

fn main() {
    let _ = reduce(Opaque, |seed: i32, _value: i32| seed, 0);
}
