//! Specifies logic to read problem from json input.

mod model;
pub use self::model::*;

mod reader;
pub use self::reader::map_to_problem;

use crate::format::MultiFormatError;
use crate::validation::ValidationLimits;
use haulage_core::models::Problem as CoreProblem;
use std::io::{BufReader, Read};

/// Reads specific problem definition from various sources.
pub trait PragmaticProblem: Sized {
    /// Reads problem defined in pragmatic format using default validation limits.
    fn read_pragmatic(self) -> Result<CoreProblem, MultiFormatError> {
        self.read_pragmatic_with_limits(&ValidationLimits::default())
    }

    /// Reads problem defined in pragmatic format using given validation limits.
    fn read_pragmatic_with_limits(self, limits: &ValidationLimits) -> Result<CoreProblem, MultiFormatError>;
}

impl<R: Read> PragmaticProblem for BufReader<R> {
    fn read_pragmatic_with_limits(self, limits: &ValidationLimits) -> Result<CoreProblem, MultiFormatError> {
        map_to_problem(deserialize_problem(self)?, limits)
    }
}

impl PragmaticProblem for String {
    fn read_pragmatic_with_limits(self, limits: &ValidationLimits) -> Result<CoreProblem, MultiFormatError> {
        BufReader::new(self.as_bytes()).read_pragmatic_with_limits(limits)
    }
}

impl PragmaticProblem for Problem {
    fn read_pragmatic_with_limits(self, limits: &ValidationLimits) -> Result<CoreProblem, MultiFormatError> {
        map_to_problem(self, limits)
    }
}
