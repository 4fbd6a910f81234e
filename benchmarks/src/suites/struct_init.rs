//! Instantiation cost: constructor function vs struct literal vs tuple
//! struct.

use idiobench::{black_box, BenchmarkSuite, Error};

const N: u64 = 1_000_000;

struct Manual {
    x: i64,
    y: i64,
}

impl Manual {
    fn new(x: i64, y: i64) -> Self {
        Manual { x, y }
    }
}

struct Record {
    x: i64,
    y: i64,
}

struct Point(i64, i64);

pub fn suite() -> Result<BenchmarkSuite, Error> {
    BenchmarkSuite::new("struct-init")
        .case("constructor fn", N, || {
            let p = Manual::new(black_box(1), black_box(2));
            black_box(p.x + p.y);
        })?
        .case("struct literal", N, || {
            let p = Record {
                x: black_box(1),
                y: black_box(2),
            };
            black_box(p.x + p.y);
        })?
        .case("tuple struct", N, || {
            let p = Point(black_box(1), black_box(2));
            black_box(p.0 + p.1);
        })
}
