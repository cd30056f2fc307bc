use std::convert::Infallible;

use sarge::ArgumentType;

use crate::cli::OutputArgs;

impl ArgumentType for OutputArgs {
    type Error = Infallible;

    const REPEATABLE: bool = true;

    /// Split a flag value on commas; `-o table,json=out.json` yields two tokens.
    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        let outputs = match val {
            None => Vec::new(),
            Some(v) => v
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        };

        Some(Ok(OutputArgs {
            outputs,
            ..OutputArgs::default()
        }))
    }

    fn default_value() -> Option<Self> {
        Some(OutputArgs::default())
    }
}
