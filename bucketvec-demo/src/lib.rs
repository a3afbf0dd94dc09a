//! Walkthrough of the `bucketvec` container.
//!
//! Each `demonstrate_*` function mutates a vector the way a user would and
//! prints a report after every step. Reports go to any `io::Write`, so the
//! binary prints them to stdout and the tests capture them in memory.

use std::fmt::Display;
use std::io::Write;

use anyhow::{Context, Result};
use bucketvec::BucketVec;
use clap::ValueEnum;

/// Which part of the walkthrough to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    /// Every section, sharing state the way a single session would
    All,
    /// Default, sized and initializer construction
    Construction,
    /// Add, insert and remove on integers, strings and floats
    Modify,
    /// Capacity growth when buckets split
    Capacity,
    /// Forward, backward and for-each traversal
    Iteration,
    /// In-place mapping over every element
    Mapping,
}

/// Writes the size, capacity, bucket layout and values of `vec`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn report<T: Display, const N: usize, W: Write>(
    out: &mut W,
    vec: &BucketVec<T, N>,
) -> Result<()> {
    writeln!(out, "size    : {}", vec.len())?;
    writeln!(out, "capacity: {}", vec.capacity())?;
    let lens: Vec<String> = vec.bucket_lens().map(|len| len.to_string()).collect();
    writeln!(out, "buckets : {}", lens.join(", "))?;
    write!(out, "values  : ")?;
    let mut cursor = vec.begin();
    while let Some(value) = cursor.get() {
        write!(out, "{value}, ")?;
        cursor.move_next();
    }
    writeln!(out)?;
    Ok(())
}

fn heading<W: Write>(out: &mut W, title: &str) -> Result<()> {
    writeln!(out, "\n-- {title} --")?;
    Ok(())
}

/// Shows a default vector, a sized vector and one built from a list.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn demonstrate_construction<const N: usize, W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\nDemonstrating Construction")?;

    let v1: BucketVec<i32, N> = BucketVec::default();
    let v2: BucketVec<i32, N> = BucketVec::with_len(20);
    let v3: BucketVec<i32, N> = BucketVec::from([1, 2, 3, 5, 7, 11]);

    heading(out, "v1")?;
    report(out, &v1)?;
    heading(out, "v2")?;
    report(out, &v2)?;
    heading(out, "v3")?;
    report(out, &v3)?;
    Ok(())
}

/// Adds one value, inserts three and removes three, reporting after each.
///
/// `vec` needs at least six elements for every position used here to be
/// valid.
///
/// # Errors
///
/// Returns an error if an index is out of range or writing fails.
pub fn demonstrate_add_insert_remove<T: Display, const N: usize, W: Write>(
    out: &mut W,
    vec: &mut BucketVec<T, N>,
    add_value: T,
    insert_values: [T; 3],
) -> Result<()> {
    writeln!(out, "\nDemonstrating Add/Insert/Remove")?;
    tracing::debug!(len = vec.len(), "add/insert/remove walkthrough");

    vec.add(add_value);
    heading(out, "add")?;
    report(out, vec)?;

    for (index, value) in [0, 4, 9].into_iter().zip(insert_values) {
        vec.insert(index, value)
            .with_context(|| format!("inserting at {index}"))?;
        heading(out, &format!("insert at {index}"))?;
        report(out, vec)?;
    }

    for index in [0, 3, 7] {
        vec.remove(index)
            .with_context(|| format!("removing at {index}"))?;
        heading(out, &format!("remove at {index}"))?;
        report(out, vec)?;
    }
    Ok(())
}

/// Grows an integer vector by front inserts and a string vector by appends
/// until their buckets split.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn demonstrate_capacity<const N: usize, W: Write>(
    out: &mut W,
    numbers: &mut BucketVec<i32, N>,
    words: &mut BucketVec<String, N>,
) -> Result<()> {
    writeln!(out, "\nDemonstrate Capacity")?;

    for value in [29, 31, 47] {
        numbers.insert(0, value)?;
    }
    heading(out, "before split (numbers)")?;
    report(out, numbers)?;
    // Keep inserting at the front until the first bucket splits
    let buckets = numbers.bucket_count();
    let mut next = 41;
    while numbers.bucket_count() == buckets {
        numbers.insert(0, next)?;
        next += 2;
    }
    heading(out, "updated capacity (numbers)")?;
    report(out, numbers)?;

    heading(out, "initial capacity (words)")?;
    report(out, words)?;
    for word in ["twenty-six", "thirty", "thirty-three"] {
        words.add(word.to_string());
    }
    heading(out, "before split (words)")?;
    report(out, words)?;
    let buckets = words.bucket_count();
    let mut count = 0;
    while words.bucket_count() == buckets {
        count += 1;
        words.add(format!("extra-{count}"));
    }
    heading(out, "updated capacity (words)")?;
    report(out, words)?;
    Ok(())
}

/// Walks `vec` forward with a cursor, as a for-each loop, backward from the
/// end, and back and forth from the third element.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn demonstrate_iteration<T: Display, const N: usize, W: Write>(
    out: &mut W,
    vec: &BucketVec<T, N>,
) -> Result<()> {
    writeln!(out, "\nDemonstrate Iteration\n")?;

    write!(out, "Forward: ")?;
    let mut cursor = vec.begin();
    while cursor != vec.end() {
        if let Some(value) = cursor.get() {
            write!(out, "{value}, ")?;
        }
        cursor.move_next();
    }
    writeln!(out)?;

    write!(out, "Backward: ")?;
    let mut cursor = vec.end();
    while cursor != vec.begin() {
        cursor.move_prev();
        if let Some(value) = cursor.get() {
            write!(out, "{value}, ")?;
        }
    }
    writeln!(out)?;

    writeln!(out, "Decrement: ")?;
    let mut cursor = vec.begin();
    cursor.move_next();
    cursor.move_next();
    for step in 0..3 {
        if step > 0 {
            cursor.move_prev();
        }
        if let Some(value) = cursor.get() {
            writeln!(out, "{value}")?;
        }
    }

    write!(out, "For-Each iteration: ")?;
    for value in vec {
        write!(out, "{value}, ")?;
    }
    writeln!(out)?;
    Ok(())
}

/// Reports `vec`, applies `f` to every element, and reports again.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn demonstrate_mapping<T: Display, const N: usize, W: Write>(
    out: &mut W,
    vec: &mut BucketVec<T, N>,
    f: impl FnMut(&mut T),
) -> Result<()> {
    writeln!(out, "\nDemonstrate Mapping")?;

    heading(out, "initial values")?;
    report(out, vec)?;
    writeln!(out, "\n-- applying lambda -- ")?;
    vec.map_in_place(f);
    report(out, vec)?;
    Ok(())
}

fn numbers<const N: usize>() -> BucketVec<i32, N> {
    BucketVec::from([1, 2, 3, 5, 7, 11])
}

fn words<const N: usize>() -> BucketVec<String, N> {
    ["one", "two", "three", "five", "seven", "eleven"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn floats<const N: usize>() -> BucketVec<f64, N> {
    BucketVec::from([1.1, 2.2, 3.3, 5.5, 7.7, 11.1])
}

fn square(x: &mut i32) {
    *x *= *x;
}

fn mark_modified(word: &mut String) {
    word.push_str(" - modified");
}

fn modify_all<const N: usize, W: Write>(
    out: &mut W,
    numbers: &mut BucketVec<i32, N>,
    words: &mut BucketVec<String, N>,
    floats: &mut BucketVec<f64, N>,
) -> Result<()> {
    demonstrate_add_insert_remove(out, numbers, 23, [13, 17, 19])?;
    demonstrate_add_insert_remove(
        out,
        words,
        "twenty-three".to_string(),
        [
            "thirteen".to_string(),
            "seventeen".to_string(),
            "nineteen".to_string(),
        ],
    )?;
    demonstrate_add_insert_remove(out, floats, 23.3, [13.3, 17.7, 19.9])
}

/// Runs the requested part of the walkthrough with buckets of `N` slots.
///
/// # Errors
///
/// Returns an error if a container operation fails or writing fails.
pub fn run<const N: usize, W: Write>(out: &mut W, section: Section) -> Result<()> {
    tracing::debug!(bucket_capacity = N, ?section, "running walkthrough");
    let mut v3 = numbers::<N>();
    let mut v4 = words::<N>();
    let mut v5 = floats::<N>();

    match section {
        Section::All => {
            demonstrate_construction::<N, _>(out)?;
            modify_all(out, &mut v3, &mut v4, &mut v5)?;
            demonstrate_capacity(out, &mut v3, &mut v4)?;
            demonstrate_iteration(out, &v3)?;
            demonstrate_iteration(out, &v4)?;
            demonstrate_mapping(out, &mut v3, square)?;
            demonstrate_mapping(out, &mut v4, mark_modified)?;
        }
        Section::Construction => demonstrate_construction::<N, _>(out)?,
        Section::Modify => modify_all(out, &mut v3, &mut v4, &mut v5)?,
        Section::Capacity => demonstrate_capacity(out, &mut v3, &mut v4)?,
        Section::Iteration => {
            demonstrate_iteration(out, &v3)?;
            demonstrate_iteration(out, &v4)?;
        }
        Section::Mapping => {
            demonstrate_mapping(out, &mut v3, square)?;
            demonstrate_mapping(out, &mut v4, mark_modified)?;
        }
    }
    out.flush().context("flushing report output")?;
    Ok(())
}
