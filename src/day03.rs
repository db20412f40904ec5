// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct Report {
	numbers: Vec<u32>,
	/// Number of bits per number.
	width: usize,
}

impl Report {
	fn count_ones<'a>(numbers: impl IntoIterator<Item = &'a u32>, bit: usize) -> usize {
		numbers.into_iter().filter(|n| *n >> bit & 1 == 1).count()
	}

	/// Narrows the numbers down bit by bit (most significant first) to those whose
	/// bit is the most common one (`MOST_COMMON`), or the least common one.
	/// Ties are broken in favor of 1 for the most common and 0 for the least common.
	fn rating<const MOST_COMMON: bool>(&self) -> Option<u32> {
		use itertools::Itertools as _;

		let mut candidates = self.numbers.clone();
		for bit in (0..self.width).rev() {
			if candidates.len() <= 1 { break }
			let ones = Self::count_ones(&candidates, bit);
			if ones == 0 || ones == candidates.len() { continue }
			let most_common = u32::from(ones * 2 >= candidates.len());
			let keep = if MOST_COMMON { most_common } else { 1 - most_common };
			candidates.retain(|n| n >> bit & 1 == keep);
		}
		candidates.into_iter().exactly_one().ok()
	}
}


fn input_report_from_str(s: &str) -> Result<Report, parsing::ReportError> {
	s.parse()
}

fn input_report() -> anyhow::Result<Report> {
	Ok(input_report_from_str(&crate::util::input(3)?)?)
}


fn part1_impl(input_report: &Report) -> u64 {
	let gamma = (0..input_report.width)
		.filter(|&bit| Report::count_ones(&input_report.numbers, bit) * 2 >= input_report.numbers.len())
		.fold(0_u64, |acc, bit| acc | 1 << bit);
	let epsilon = !gamma & ((1 << input_report.width) - 1);
	gamma * epsilon
}

pub(crate) fn part1() -> anyhow::Result<u64> {
	Ok(part1_impl(&input_report()?))
}


fn part2_impl(input_report: &Report) -> Option<u64> {
	let oxygen_generator = input_report.rating::<true>()?;
	let co2_scrubber = input_report.rating::<false>()?;
	Some(oxygen_generator as u64 * co2_scrubber as u64)
}

pub(crate) fn part2() -> anyhow::Result<u64> {
	part2_impl(&input_report()?)
		.ok_or_else(|| anyhow::anyhow!("Ratings do not narrow down to single numbers"))
}


mod parsing {
	use std::str::FromStr;
	use super::Report;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum ReportError {
		#[error("Empty report")]
		Empty,
		#[error("Numbers wider than 32 bits")]
		TooWide,
		#[error("Line {line} has {found} bits instead of {len}")]
		LineLen { line: usize, len: usize, found: usize },
		#[error("Invalid byte {found:?} at line {line}, column {column}")]
		InvalidByte { line: usize, column: usize, found: char },
	}

	impl FromStr for Report {
		type Err = ReportError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use ReportError as E;
			let s = s.trim_end_matches('\n');

			let width = s.lines().next().map(str::len).filter(|&w| w > 0).ok_or(E::Empty)?;
			if width > 32 { return Err(E::TooWide) }

			let numbers = s.lines()
				.enumerate()
				.map(|(l, line)| {
					if line.len() != width {
						return Err(E::LineLen { line: l + 1, len: width, found: line.len() })
					}
					line.bytes().enumerate().try_fold(0, |acc, (c, b)| match b {
						b'0' | b'1' => Ok(acc << 1 | (b - b'0') as u32),
						found => Err(E::InvalidByte { line: l + 1, column: c + 1, found: found as char }),
					})
				})
				.collect::<Result<_, _>>()?;

			Ok(Report { numbers, width })
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		00100
		11110
		10110
		10111
		10101
		01111
		00111
		11100
		10000
		11001
		00010
		01010
	" };

	#[test]
	fn ratings() {
		let report = input_report_from_str(INPUT).unwrap();
		assert_eq!(report.rating::<true>(), Some(23));
		assert_eq!(report.rating::<false>(), Some(10));
	}

	#[test]
	fn part1_impl() {
		assert_eq!(super::part1_impl(&input_report_from_str(INPUT).unwrap()), 198);
	}

	#[test]
	fn part2_impl() {
		assert_eq!(super::part2_impl(&input_report_from_str(INPUT).unwrap()), Some(230));
		assert_eq!(super::part2_impl(&input_report_from_str("101\n101\n").unwrap()), None);
	}

	#[test]
	fn parsing() {
		assert!(matches!(input_report_from_str(""), Err(parsing::ReportError::Empty)));
		assert_eq!(input_report_from_str("01\n10\n\n").unwrap().numbers, [0b01, 0b10]);
		assert!(matches!(input_report_from_str("01\n011\n"),
			Err(parsing::ReportError::LineLen { line: 2, len: 2, found: 3 })));
		assert!(matches!(input_report_from_str("01\n21\n"),
			Err(parsing::ReportError::InvalidByte { line: 2, column: 1, found: '2' })));
	}

	#[test]
	#[ignore = "requires the puzzle input"]
	fn real_input() {
		assert_eq!(super::part1().unwrap(), 4138664);
		assert_eq!(super::part2().unwrap(), 4273224);
	}
}
