// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashSet;


type Dot = [u32; 2];

#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Clone, Copy)]
enum Fold {
	/// Folds the right half left.
	Left(u32),
	/// Folds the bottom half up.
	Up(u32),
}

struct Manual {
	dots: Vec<Dot>,
	folds: Vec<Fold>,
}

struct Sheet {
	dots: HashSet<Dot>,
	width: u32,
	height: u32,
}

impl Fold {
	/// Returns `None` for dots on the fold line or beyond twice its distance.
	fn apply(self, [x, y]: Dot) -> Option<Dot> {
		let mirror = |c: u32, line: u32| match c.cmp(&line) {
			std::cmp::Ordering::Less => Some(c),
			std::cmp::Ordering::Equal => None,
			std::cmp::Ordering::Greater => (2 * line).checked_sub(c),
		};
		match self {
			Fold::Left(line) => Some([mirror(x, line)?, y]),
			Fold::Up(line) => Some([x, mirror(y, line)?]),
		}
	}
}

impl Manual {
	fn fold<'a>(&self, folds: impl IntoIterator<Item = &'a Fold> + Clone) -> Option<Sheet> {
		let dots = self.dots.iter()
			.map(|&dot| folds.clone().into_iter().try_fold(dot, |dot, fold| fold.apply(dot)))
			.collect::<Option<HashSet<_>>>()?;
		let mut bounds = [None::<u32>; 2];
		for fold in folds {
			let (axis, line) = match *fold { Fold::Left(line) => (0, line), Fold::Up(line) => (1, line) };
			bounds[axis] = Some(bounds[axis].map_or(line, |bound| bound.min(line)));
		}
		let [width, height] = [0, 1].map(|axis| bounds[axis]
			.unwrap_or_else(|| dots.iter().map(|dot| dot[axis] + 1).max().unwrap_or(0)));
		Some(Sheet { dots, width, height })
	}
}

impl std::fmt::Display for Sheet {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		use std::fmt::Write as _;
		for y in 0..self.height {
			if y > 0 { f.write_char('\n')? }
			for x in 0..self.width {
				f.write_char(if self.dots.contains(&[x, y]) { '#' } else { '.' })?;
			}
		}
		Ok(())
	}
}


fn input_manual_from_str(s: &str) -> Result<Manual, parsing::ManualError> {
	s.parse()
}

fn input_manual() -> anyhow::Result<Manual> {
	Ok(input_manual_from_str(&crate::util::input(13)?)?)
}


fn part1_impl(input_manual: &Manual) -> Option<usize> {
	Some(input_manual.fold(input_manual.folds.first())?.dots.len())
}

pub(crate) fn part1() -> anyhow::Result<usize> {
	part1_impl(&input_manual()?)
		.ok_or_else(|| anyhow::anyhow!("Dot on a fold line"))
}


fn part2_impl(input_manual: &Manual) -> Option<String> {
	Some(input_manual.fold(&input_manual.folds)?.to_string())
}

pub(crate) fn part2() -> anyhow::Result<String> {
	part2_impl(&input_manual()?)
		.ok_or_else(|| anyhow::anyhow!("Dot on a fold line"))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Fold, Manual};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum ManualError {
		#[error("Missing comma on line {line}")]
		NoComma { line: usize },
		#[error("Invalid coordinate on line {line}")]
		Coordinate { line: usize, source: ParseIntError },
		#[error("Invalid fold on line {line}")]
		InvalidFold { line: usize },
		#[error("Invalid fold line on line {line}")]
		FoldLine { line: usize, source: ParseIntError },
	}

	impl FromStr for Manual {
		type Err = ManualError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use ManualError as E;
			let s = s.trim_end_matches('\n');

			let mut lines = s.lines().enumerate();
			let dots = lines.by_ref()
				.take_while(|(_, line)| !line.is_empty())
				.map(|(l, line)| -> Result<_, E> {
					let (x, y) = line.split_once(',').ok_or(E::NoComma { line: l + 1 })?;
					let coord = |c: &str| -> Result<u32, _> {
						c.parse().map_err(|e| E::Coordinate { line: l + 1, source: e })
					};
					Ok([coord(x)?, coord(y)?])
				})
				.collect::<Result<_, _>>()?;

			let folds = lines
				.map(|(l, line)| -> Result<_, E> {
					let (axis, n) = line.strip_prefix("fold along ")
						.and_then(|f| f.split_once('='))
						.ok_or(E::InvalidFold { line: l + 1 })?;
					let n = n.parse().map_err(|e| E::FoldLine { line: l + 1, source: e })?;
					match axis {
						"x" => Ok(Fold::Left(n)),
						"y" => Ok(Fold::Up(n)),
						_ => Err(E::InvalidFold { line: l + 1 }),
					}
				})
				.collect::<Result<_, _>>()?;

			Ok(Manual { dots, folds })
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		6,10
		0,14
		9,10
		0,3
		10,4
		4,11
		6,0
		6,12
		4,1
		0,13
		10,12
		3,4
		3,0
		8,4
		1,10
		2,14
		8,10
		9,0

		fold along y=7
		fold along x=5
	" };

	#[test]
	fn parsing() {
		let manual = input_manual_from_str(INPUT).unwrap();
		assert_eq!(manual.dots.len(), 18);
		assert_eq!(manual.folds, [Fold::Up(7), Fold::Left(5)]);
		assert!(matches!(input_manual_from_str("1,2\n\nfold along z=3\n"),
			Err(parsing::ManualError::InvalidFold { line: 3 })));
	}

	#[test]
	fn part1_impl() {
		assert_eq!(super::part1_impl(&input_manual_from_str(INPUT).unwrap()), Some(17));
		assert_eq!(super::part1_impl(&input_manual_from_str("1,7\n\nfold along y=7\n").unwrap()), None);
	}

	#[test]
	fn part2_impl() {
		assert_eq!(super::part2_impl(&input_manual_from_str(INPUT).unwrap()).unwrap(), indoc::indoc! { "
			#####
			#...#
			#...#
			#...#
			#####
			.....
			....." });
	}

	#[test]
	#[ignore = "requires the puzzle input"]
	fn real_input() {
		assert_eq!(super::part1().unwrap(), 729);
	}
}
