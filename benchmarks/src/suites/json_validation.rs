//! Parse cost: untyped JSON value vs typed deserialization vs typed
//! deserialization plus field validation.

use idiobench::{black_box, BenchmarkSuite, Error};
use serde::Deserialize;

const N: u64 = 100_000;

const DOC: &str = r#"{"name": "Alice", "age": 30, "email": "alice@example.com"}"#;

#[derive(Deserialize)]
struct User {
    name: String,
    age: u32,
    email: String,
}

impl User {
    fn validate(&self) -> bool {
        !self.name.is_empty() && self.age < 150 && self.email.contains('@')
    }
}

pub fn suite() -> Result<BenchmarkSuite, Error> {
    BenchmarkSuite::new("json-validation")
        .setup(|| {
            // Fail the whole suite up front if the fixture document is bad.
            let user: User = serde_json::from_str(DOC)?;
            anyhow::ensure!(user.validate(), "fixture document failed validation");
            Ok(())
        })
        .case("untyped parse", N, || {
            let value: serde_json::Value = serde_json::from_str(black_box(DOC)).unwrap();
            black_box(value);
        })?
        .case("typed parse", N, || {
            let user: User = serde_json::from_str(black_box(DOC)).unwrap();
            black_box(user.age);
        })?
        .case("typed parse + validation", N, || {
            let user: User = serde_json::from_str(black_box(DOC)).unwrap();
            black_box(user.validate());
        })
}
