//! Field read cost: direct access vs inherent getter vs trait-object
//! getter.

use idiobench::{black_box, BenchmarkSuite, Error};

const N: u64 = 10_000_000;

struct Entity {
    id: u64,
}

impl Entity {
    fn id(&self) -> u64 {
        self.id
    }
}

trait Identified {
    fn id(&self) -> u64;
}

impl Identified for Entity {
    fn id(&self) -> u64 {
        self.id
    }
}

pub fn suite() -> Result<BenchmarkSuite, Error> {
    let direct = Entity { id: 123 };
    let inherent = Entity { id: 123 };
    let dynamic: Box<dyn Identified> = Box::new(Entity { id: 123 });
    BenchmarkSuite::new("field-access")
        .case("direct field", N, move || {
            black_box(black_box(&direct).id);
        })?
        .case("getter method", N, move || {
            black_box(black_box(&inherent).id());
        })?
        .case("dyn trait getter", N, move || {
            black_box(black_box(dynamic.as_ref()).id());
        })
}
