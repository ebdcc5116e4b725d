//! Named objective/gradient pairs for the minima-finder runner

use crate::objective::FnObjective;
use crate::{MinFinderError, Result};
use math_minfinder_test_functions::*;

/// Objective built from plain function pointers.
pub type TestObjective = FnObjective<ValueFn, GradientFn>;

/// A test function registered under a name.
#[derive(Debug, Clone)]
pub struct RegisteredFunction {
    name: &'static str,
    label: &'static str,
    objective: TestObjective,
}

impl RegisteredFunction {
    fn new(
        name: &'static str,
        label: &'static str,
        dimension: usize,
        value: ValueFn,
        gradient: GradientFn,
    ) -> Self {
        Self {
            name,
            label,
            objective: FnObjective::new(dimension, value, gradient),
        }
    }

    /// Lookup key, e.g. `"camel"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Human-readable name used in reports, e.g. `"Camel"`.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// The objective/gradient pair.
    pub fn objective(&self) -> &TestObjective {
        &self.objective
    }

    /// Metadata from the test-function crate, if tabulated.
    pub fn metadata(&self) -> Option<FunctionMetadata> {
        get_function_metadata().remove(self.name)
    }
}

/// Ordered registry of test functions.
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
    functions: Vec<RegisteredFunction>,
}

impl FunctionRegistry {
    /// Creates a registry with the five reference functions plus `sphere`.
    pub fn standard() -> Self {
        let functions = vec![
            RegisteredFunction::new("camel", "Camel", 2, camel, camel_gradient),
            RegisteredFunction::new("rastrigin", "Rastrigin", 2, rastrigin, rastrigin_gradient),
            RegisteredFunction::new("griewank", "Griewank", 2, griewank, griewank_gradient),
            RegisteredFunction::new("branin", "Branin", 2, branin, branin_gradient),
            RegisteredFunction::new("shubert", "Shubert", 2, shubert, shubert_gradient),
            RegisteredFunction::new("sphere", "Sphere", 2, sphere, sphere_gradient),
        ];
        Self { functions }
    }

    /// Names run when none are requested explicitly, in run order.
    pub fn standard_run_order() -> [&'static str; 5] {
        ["camel", "rastrigin", "griewank", "branin", "shubert"]
    }

    /// Looks up a function by name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `MinFinderError::UnknownFunction` if no function has this name.
    pub fn get(&self, name: &str) -> Result<&RegisteredFunction> {
        let wanted = name.to_lowercase();
        self.functions
            .iter()
            .find(|f| f.name == wanted)
            .ok_or_else(|| MinFinderError::UnknownFunction {
                name: name.to_string(),
            })
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.iter().map(|f| f.name)
    }

    /// Iterates over all registered functions.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredFunction> {
        self.functions.iter()
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
