//! Layering cost: inline domain computation vs a service over a concrete
//! repository vs a service over a `dyn` repository adapter.

use idiobench::{black_box, BenchmarkSuite, Error};

const N: u64 = 1_000_000;

trait ValueSource {
    fn fetch_value(&self) -> i64;
}

struct Repository;

impl Repository {
    fn fetch_value(&self) -> i64 {
        42
    }
}

impl ValueSource for Repository {
    fn fetch_value(&self) -> i64 {
        42
    }
}

struct Service {
    repository: Repository,
}

impl Service {
    fn compute(&self) -> i64 {
        self.repository.fetch_value() * 2
    }
}

struct AdapterService {
    source: Box<dyn ValueSource>,
}

impl AdapterService {
    fn compute(&self) -> i64 {
        self.source.fetch_value() * 2
    }
}

fn domain_compute() -> i64 {
    black_box(42) * 2
}

pub fn suite() -> Result<BenchmarkSuite, Error> {
    let service = Service {
        repository: Repository,
    };
    let adapter = AdapterService {
        source: Box::new(Repository),
    };
    BenchmarkSuite::new("service-layer")
        .case("direct call", N, || {
            black_box(domain_compute());
        })?
        .case("service layer", N, move || {
            black_box(black_box(&service).compute());
        })?
        .case("service + dyn adapter", N, move || {
            black_box(black_box(&adapter).compute());
        })
}
