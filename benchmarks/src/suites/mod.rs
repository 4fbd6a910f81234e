use idiobench::{BenchmarkSuite, Error};

mod field_access;
mod json_validation;
mod service_layer;
mod struct_init;

/// A named suite constructor, as selected by the driver.
pub struct Registration {
    pub name: &'static str,
    pub build: fn() -> Result<BenchmarkSuite, Error>,
}

/// All sample suites, in display order.
pub fn all() -> Vec<Registration> {
    vec![
        Registration {
            name: "struct-init",
            build: struct_init::suite,
        },
        Registration {
            name: "field-access",
            build: field_access::suite,
        },
        Registration {
            name: "service-layer",
            build: service_layer::suite,
        },
        Registration {
            name: "json-validation",
            build: json_validation::suite,
        },
    ]
}
