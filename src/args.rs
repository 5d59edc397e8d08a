//! Code to parse the command line using `clap`, and definitions of the parsed
//! result

use clap::{Parser, ValueEnum};

/// Returns the parsed command line: the `Args` return value's `op` field is
/// the operation desired, `elements` is the sequence to operate on, and
/// `values` holds the `--value` arguments.
#[must_use]
pub fn parsed() -> Args {
    CliArgs::parse().into_args()
}

/// The parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// `op` is the operation requested
    pub op: OpName,
    /// `elements` is the sequence, in command-line order
    pub elements: Vec<String>,
    /// `values` are the arguments of `--value`, in command-line order
    pub values: Vec<String>,
    /// `radix` is `Some(r)` if elements and values should be parsed as
    /// integers in radix `r`, and `None` if they should be left as strings
    pub radix: Option<u32>,
}

/// Name of the requested operation
#[derive(PartialEq, Eq, Debug, Clone, Copy, ValueEnum)]
pub enum OpName {
    /// Print each distinct element once, in order of first appearance
    Unique,
    /// Print the elements that don't equal any --value
    Remove,
    /// Print each distinct element preceded by the number of times it occurs
    Freq,
    /// Print the number of elements equal to the --value
    Count,
    /// Print the index of the first element equal to the --value, or the
    /// number of elements if there is none
    Search,
    /// Print `true` if any element equals any --value, `false` otherwise
    Contains,
}

#[derive(Debug, Parser)]
#[command(name = "seqkit", version)]
/// Apply a sequence operation to the elements given on the command line
struct CliArgs {
    #[arg(value_enum)]
    /// The operation to perform
    op: OpName,

    #[arg(short, long = "value", value_name = "VALUE", allow_negative_numbers = true)]
    /// A value to count, search for, remove, or look for (repeatable)
    values: Vec<String>,

    #[arg(long)]
    /// Treat elements and values as integers instead of strings
    ints: bool,

    #[arg(long, default_value_t = 10, value_name = "RADIX")]
    /// Radix for --ints: 2 through 36, or 0 to use 0x/0o/0b prefixes
    radix: u32,

    #[arg(name = "ELEMENTS", allow_negative_numbers = true)]
    /// The sequence to operate on
    elements: Vec<String>,
}

impl CliArgs {
    fn into_args(self) -> Args {
        let radix = if self.ints { Some(self.radix) } else { None };
        Args { op: self.op, elements: self.elements, values: self.values, radix }
    }
}
