use crate::error::Error;

type Workload = Box<dyn Fn()>;
type SetupFn = Box<dyn Fn() -> anyhow::Result<()>>;

/// One named workload within a suite, measured independently.
///
/// Workloads are shared-callable and expected to be side-effect-free by
/// convention; they close over pre-built fixture values instead of mutating
/// external state.
pub struct BenchmarkCase {
    name: String,
    iterations: u64,
    workload: Workload,
}

impl BenchmarkCase {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of back-to-back workload executions within one timed interval.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn workload(&self) -> &dyn Fn() {
        &*self.workload
    }
}

/// A named group of comparable benchmark cases, run and reported together.
///
/// Cases keep their insertion order and that order is the report's display
/// order. The optional setup hook runs exactly once per run, before any case
/// executes; it exists for fixture checks shared by the whole suite and must
/// leave no residual state visible to the cases.
pub struct BenchmarkSuite {
    title: String,
    setup: Option<SetupFn>,
    cases: Vec<BenchmarkCase>,
}

impl BenchmarkSuite {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            setup: None,
            cases: Vec::new(),
        }
    }

    /// Attach a one-time setup hook.
    pub fn setup(mut self, setup: impl Fn() -> anyhow::Result<()> + 'static) -> Self {
        self.setup = Some(Box::new(setup));
        self
    }

    /// Append a case. Case names must be unique within the suite; iteration
    /// counts are taken as-is here and validated by the timer at run time.
    pub fn case(
        mut self,
        name: impl Into<String>,
        iterations: u64,
        workload: impl Fn() + 'static,
    ) -> Result<Self, Error> {
        let name = name.into();
        if self.cases.iter().any(|c| c.name == name) {
            return Err(Error::DuplicateName(name));
        }
        self.cases.push(BenchmarkCase {
            name,
            iterations,
            workload: Box::new(workload),
        });
        Ok(self)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn cases(&self) -> &[BenchmarkCase] {
        &self.cases
    }

    pub(crate) fn setup_fn(&self) -> Option<&(dyn Fn() -> anyhow::Result<()>)> {
        self.setup.as_deref()
    }
}
