//! Execution options for the k-block engine.
//!
//! [`KBlockOptions`] carries the only tunable of the engine: whether the
//! complete super-blocks are processed one after another or fanned out over
//! the rayon thread pool. Both policies produce identical output.
use crate::block_maxima::errors::{BlockError, BlockResult};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    #[default]
    Serial,
    Parallel,
}

impl FromStr for Execution {
    type Err = BlockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "serial" => Ok(Execution::Serial),
            "parallel" => Ok(Execution::Parallel),
            _ => Err(BlockError::InvalidExecution {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'serial' or 'parallel'.",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KBlockOptions {
    pub execution: Execution,
}

impl KBlockOptions {
    pub fn new(execution: Execution) -> Self {
        Self { execution }
    }

    /// Build options from an optional policy name; `None` keeps the default.
    pub fn from_name(name: Option<&str>) -> BlockResult<Self> {
        match name {
            Some(name) => Ok(Self::new(name.parse()?)),
            None => Ok(Self::default()),
        }
    }
}
