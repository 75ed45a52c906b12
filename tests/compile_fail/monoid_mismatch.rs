//! A monoid reduce requires elements of exactly the monoid type.

use reducers::typeclass::{Sum, reduce_monoid};

fn main() {
    let data: [i32; 3] = [1, 2, 3];
    let _: Sum<i32> = reduce_monoid(&data);
}
