// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Lit segments `a` through `g` as bits 0 through 6.
type Pattern = u8;

struct Entry {
	patterns: [Pattern; 10],
	output: [Pattern; 4],
}

/// For every digit, the sum over its segments of how many of the
/// ten digits light that segment. These sums are all distinct.
const DIGIT_SCORES: [u32; 10] = [42, 17, 34, 39, 30, 37, 41, 25, 49, 45];

impl Entry {
	fn output_value(&self) -> Option<u32> {
		let frequencies: [u32; 7] = std::array::from_fn(|segment| self.patterns.iter()
			.filter(|&&p| p >> segment & 1 == 1)
			.count() as u32);
		self.output.iter().try_fold(0, |acc, &pattern| {
			let score = (0..7)
				.filter(|segment| pattern >> segment & 1 == 1)
				.map(|segment| frequencies[segment])
				.sum::<u32>();
			let digit = DIGIT_SCORES.iter().position(|&s| s == score)?;
			Some(acc * 10 + digit as u32)
		})
	}
}


fn input_entries_from_str(s: &str) -> Result<Vec<Entry>, parsing::EntriesError> {
	parsing::entries_from_str(s).collect()
}

fn input_entries() -> anyhow::Result<Vec<Entry>> {
	Ok(input_entries_from_str(&crate::util::input(8)?)?)
}


fn part1_impl(input_entries: &[Entry]) -> usize {
	input_entries.iter()
		.flat_map(|entry| entry.output)
		.filter(|pattern| matches!(pattern.count_ones(), 2 | 3 | 4 | 7))
		.count()
}

pub(crate) fn part1() -> anyhow::Result<usize> {
	Ok(part1_impl(&input_entries()?))
}


fn part2_impl(input_entries: &[Entry]) -> Option<u32> {
	input_entries.iter().map(Entry::output_value).sum()
}

pub(crate) fn part2() -> anyhow::Result<u32> {
	part2_impl(&input_entries()?)
		.ok_or_else(|| anyhow::anyhow!("Could not decode all outputs"))
}


mod parsing {
	use std::str::FromStr;
	use super::{Entry, Pattern};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum EntryError {
		#[error("Missing separator")]
		NoSeparator,
		#[error("Expected {expected} patterns, found {found}")]
		PatternCount { expected: usize, found: usize },
		#[error("Invalid segment {found:?}")]
		InvalidSegment { found: char },
	}

	fn patterns_from_str<const N: usize>(s: &str) -> Result<[Pattern; N], EntryError> {
		let patterns = s.split_whitespace()
			.map(|p| p.bytes().try_fold(0, |acc, b| match b {
				b'a'..=b'g' => Ok(acc | 1 << (b - b'a')),
				found => Err(EntryError::InvalidSegment { found: found as char }),
			}))
			.collect::<Result<Vec<_>, _>>()?;
		patterns.try_into().map_err(|patterns: Vec<_>|
			EntryError::PatternCount { expected: N, found: patterns.len() })
	}

	impl FromStr for Entry {
		type Err = EntryError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (patterns, output) = s.split_once('|').ok_or(EntryError::NoSeparator)?;
			Ok(Entry {
				patterns: patterns_from_str(patterns)?,
				output: patterns_from_str(output)?,
			})
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum EntriesError {
		#[error("No entries")]
		Empty,
		#[error("Invalid entry on line {line}")]
		Entry { line: usize, source: EntryError },
	}

	pub(super) fn entries_from_str(s: &str) -> impl Iterator<Item = Result<Entry, EntriesError>> + '_ {
		use {std::iter::once, either::Either::*};
		let s = s.trim_end_matches('\n');
		if s.is_empty() { return Left(once(Err(EntriesError::Empty))) }
		Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| EntriesError::Entry { line: l + 1, source: e })))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edb | fdgacbe cefdb cefbgd gcbe
		edbfga begcd cbg gc gcadebf fbgde acbgfd abcde gfcbed gfec | fcgedb cgb dgebacf gc
		fgaebd cg bdaec gdafb agbcfd gdcbef bgcad gfac gcb cdgabef | cg cg fdcagb cbg
		fbegcd cbd adcefb dageb afcb bc aefdc ecdab fgdeca fcdbega | efabcd cedba gadfec cb
		aecbfdg fbg gf bafeg dbefa fcge gcbea fcaegb dgceab fcbdga | gecf egdcabf bgf bfgea
		fgeab ca afcebg bdacfeg cfaedg gcfdb baec bfadeg bafgc acf | gebdcfa ecba ca fadegcb
		dbcfg fgd bdegcaf fgec aegbdf ecdfab fbedc dacgb gdcebf gf | cefg dcbef fcge gbcadfe
		bdfegc cbegaf gecbf dfcage bdacg ed bedf ced adcbefg gebcd | ed bcgafe cdgba cbgef
		egadfb cdbfeg cegd fecab cgb gbdefca cg fgcdab egfdb bfceg | gbdfcae bgc cg cgb
		gcafb gcf dcaebfg ecagb gf abcdeg gaef cafbge fdbac fegbdc | fgae cfgab fg bagce
	" };

	#[test]
	fn output_value() {
		let entry = "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf"
			.parse::<Entry>().unwrap();
		assert_eq!(entry.output_value(), Some(5353));
	}

	#[test]
	fn part1_impl() {
		assert_eq!(super::part1_impl(&input_entries_from_str(INPUT).unwrap()), 26);
	}

	#[test]
	fn part2_impl() {
		assert_eq!(super::part2_impl(&input_entries_from_str(INPUT).unwrap()), Some(61229));
	}

	#[test]
	fn parsing() {
		assert!(matches!("ab | cd".parse::<Entry>(),
			Err(parsing::EntryError::PatternCount { expected: 10, found: 1 })));
		assert!(matches!("ab cd".parse::<Entry>(), Err(parsing::EntryError::NoSeparator)));
		assert!(matches!("ah | cd".parse::<Entry>(),
			Err(parsing::EntryError::InvalidSegment { found: 'h' })));
		assert!(matches!(input_entries_from_str(""), Err(parsing::EntriesError::Empty)));
		assert!(matches!(input_entries_from_str("ab | cd\n"), Err(parsing::EntriesError::Entry { line: 1, .. })));
		assert_eq!(input_entries_from_str(&format!("{INPUT}\n")).unwrap().len(), 10);
	}

	#[test]
	#[ignore = "requires the puzzle input"]
	fn real_input() {
		assert_eq!(super::part1().unwrap(), 255);
		assert_eq!(super::part2().unwrap(), 982158);
	}
}
