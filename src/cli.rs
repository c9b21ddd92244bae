//! Command-line argument handling

use crate::types::OutputFormat;

/// Parsed command line of one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// The JSON feature record, if one was given
    pub input: Option<String>,
    /// How to print the prediction
    pub output: OutputFormat,
}

impl Invocation {
    /// Parse arguments (without the program name).
    ///
    /// The first positional argument is the feature record; later ones are
    /// ignored.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut invocation = Self::default();
        for arg in args {
            if arg == "--json" {
                invocation.output = OutputFormat::Json;
            } else if invocation.input.is_none() {
                invocation.input = Some(arg);
            }
        }
        invocation
    }
}
