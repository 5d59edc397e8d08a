//! Houses the `calculate` function
//!

use anyhow::{bail, Context, Result};
use std::fmt::Display;
use std::hash::Hash;
use std::io::Write;

use crate::args::{Args, OpName};
use crate::convert::parse_ints;
use crate::{contains, count, freq, remove, search, unique, Frequencies};

/// Runs the operation named by `args.op` on `args.elements` and writes the
/// result to `out`:
///
/// * `OpName::Unique` writes each distinct element once, in order of first appearance,
/// * `OpName::Remove` writes the elements equal to no `--value`,
/// * `OpName::Freq` writes each distinct element preceded by its count,
/// * `OpName::Count` writes how many elements equal the single `--value`,
/// * `OpName::Search` writes the index of the single `--value` (or the number
///   of elements, if it's absent), and
/// * `OpName::Contains` writes `true` or `false`.
///
/// If `args.radix` is `Some(r)`, elements and values are compared as integers
/// in radix `r` rather than as strings.
pub fn calculate(args: &Args, out: impl Write) -> Result<()> {
    match args.radix {
        None => calculate_with(args.op, &args.elements, &args.values, out),
        Some(radix) => {
            let elements = parse_ints(&args.elements, radix).context("Can't read elements as integers")?;
            let values = parse_ints(&args.values, radix).context("Can't read --value as an integer")?;
            calculate_with(args.op, &elements, &values, out)
        }
    }
}

fn calculate_with<T>(operation: OpName, elements: &[T], values: &[T], mut out: impl Write) -> Result<()>
where
    T: Eq + Hash + Clone + Display,
{
    match operation {
        OpName::Unique => output_lines(&unique(&[elements]), out),
        OpName::Remove => output_lines(&remove(elements, values), out),
        OpName::Freq => output_with_count(&freq(elements), out),
        OpName::Count => {
            let value = single_value(operation, values)?;
            writeln!(out, "{}", count(elements, value))?;
            out.flush()?;
            Ok(())
        }
        OpName::Search => {
            let value = single_value(operation, values)?;
            writeln!(out, "{}", search(elements, value))?;
            out.flush()?;
            Ok(())
        }
        OpName::Contains => {
            writeln!(out, "{}", contains(elements, values))?;
            out.flush()?;
            Ok(())
        }
    }
}

/// `Count` and `Search` look for exactly one value.
fn single_value<T>(operation: OpName, values: &[T]) -> Result<&T> {
    match values {
        [value] => Ok(value),
        _ => bail!("{operation:?} needs exactly one --value, got {}", values.len()),
    }
}

fn output_lines<T: Display>(items: &[T], mut out: impl Write) -> Result<()> {
    for item in items {
        writeln!(out, "{item}")?;
    }
    out.flush()?;
    Ok(())
}

/// Writes each value of `tally` preceded by its count, right-aligned to the
/// width of the largest count.
fn output_with_count<T: Display>(tally: &Frequencies<T>, mut out: impl Write) -> Result<()> {
    let Some(max_count) = tally.values().copied().max() else { return Ok(()) };
    let width = (max_count.ilog10() + 1) as usize;
    for (item, n) in tally {
        writeln!(out, "{n:width$} {item}")?;
    }
    out.flush()?;
    Ok(())
}
