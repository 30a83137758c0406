//! Day 1: each elf's snacks are listed one calorie count per line, elves
//! separated by blank lines.

use tracing::{debug, trace};

use crate::aocsoln::AOCSolution;
use crate::error::{ParseError, Result};

/// Calorie counts carried by one elf, in input order.
pub type Group = Vec<i64>;

pub struct CalorieCounting;

impl AOCSolution for CalorieCounting {
    fn aoc_part1(lines: &[&str]) -> Result<i64> {
        part_one(&parse(lines)?)
    }

    fn aoc_part2(lines: &[&str]) -> Result<i64> {
        part_two(&parse(lines)?)
    }
}

/// Splits the lines into groups. Only empty lines separate groups and a run
/// of them is one separator, so no group is ever empty.
#[inline]
pub fn parse(lines: &[&str]) -> Result<Vec<Group>> {
    let (mut groups, last) = lines.iter().enumerate().try_fold(
        (Vec::new(), Group::new()),
        |(mut groups, mut current), (idx, &line)| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.is_empty() {
                if !current.is_empty() {
                    groups.push(std::mem::take(&mut current));
                }
            } else {
                let calories = line.trim().parse().map_err(|source| ParseError::NotAnInteger {
                    line_no: idx + 1,
                    line: line.to_owned(),
                    source,
                })?;
                current.push(calories);
            }
            Ok::<_, ParseError>((groups, current))
        },
    )?;

    if !last.is_empty() {
        groups.push(last);
    }

    debug!(groups = groups.len(), lines = lines.len(), "parsed calorie groups");
    Ok(groups)
}

fn checked_sum<'a>(values: impl IntoIterator<Item = &'a i64>) -> Result<i64> {
    values
        .into_iter()
        .try_fold(0i64, |acc, &n| acc.checked_add(n))
        .ok_or(ParseError::Overflow)
}

/// Per-group totals, in input order.
pub fn group_sums(groups: &[Group]) -> Result<Vec<i64>> {
    groups
        .iter()
        .map(|group| {
            let total = checked_sum(group)?;
            trace!(items = group.len(), total, "group");
            Ok(total)
        })
        .collect()
}

/// Largest group total, never below 0.
#[inline]
pub fn part_one(groups: &[Group]) -> Result<i64> {
    Ok(group_sums(groups)?.into_iter().fold(0, i64::max))
}

/// Total of the three largest groups, or of all of them when there are fewer.
#[inline]
pub fn part_two(groups: &[Group]) -> Result<i64> {
    let mut totals = group_sums(groups)?;
    totals.sort_unstable_by(|a, b| b.cmp(a));
    checked_sum(totals.iter().take(3))
}
