// Copyright (c) 2022 Bastiaan Marinus van de Weerd


type Point = [i32; 2];

/// A horizontal, vertical or 45° diagonal line of vents.
#[cfg_attr(test, derive(Debug, PartialEq))]
struct Line {
	from: Point,
	to: Point,
}

impl Line {
	fn is_diagonal(&self) -> bool {
		self.from[0] != self.to[0] && self.from[1] != self.to[1]
	}

	fn points(&self) -> impl Iterator<Item = Point> {
		let [x, y] = self.from;
		let [dx, dy] = [self.to[0] - x, self.to[1] - y];
		let [sx, sy] = [dx.signum(), dy.signum()];
		(0..=dx.abs().max(dy.abs())).map(move |i| [x + i * sx, y + i * sy])
	}
}


fn input_lines_from_str(s: &str) -> Result<Vec<Line>, parsing::LinesError> {
	parsing::lines_from_str(s).collect()
}

fn input_lines() -> anyhow::Result<Vec<Line>> {
	Ok(input_lines_from_str(&crate::util::input(5)?)?)
}


fn part1and2_impl<const DIAGONALS: bool>(input_lines: &[Line]) -> usize {
	use itertools::Itertools as _;

	input_lines.iter()
		.filter(|line| DIAGONALS || !line.is_diagonal())
		.flat_map(Line::points)
		.counts()
		.into_values()
		.filter(|&n| n >= 2)
		.count()
}

pub(crate) fn part1() -> anyhow::Result<usize> {
	Ok(part1and2_impl::<false>(&input_lines()?))
}

pub(crate) fn part2() -> anyhow::Result<usize> {
	Ok(part1and2_impl::<true>(&input_lines()?))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Line, Point};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum LineError {
		#[error("Missing arrow")]
		NoArrow,
		#[error("Missing comma")]
		NoComma,
		#[error("Invalid coordinate")]
		Coordinate(#[source] ParseIntError),
		#[error("Not horizontal, vertical or diagonal")]
		Unaligned,
	}

	fn point_from_str(s: &str) -> Result<Point, LineError> {
		let (x, y) = s.trim().split_once(',').ok_or(LineError::NoComma)?;
		let coord = |c: &str| c.parse().map_err(LineError::Coordinate);
		Ok([coord(x)?, coord(y)?])
	}

	impl FromStr for Line {
		type Err = LineError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (from, to) = s.split_once("->").ok_or(LineError::NoArrow)?;
			let line = Line { from: point_from_str(from)?, to: point_from_str(to)? };
			let [dx, dy] = [0, 1].map(|i| (line.to[i] - line.from[i]).abs());
			if dx != 0 && dy != 0 && dx != dy { return Err(LineError::Unaligned) }
			Ok(line)
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum LinesError {
		#[error("No lines of vents")]
		Empty,
		#[error("Invalid line of vents on line {line}")]
		Line { line: usize, source: LineError },
	}

	pub(super) fn lines_from_str(s: &str) -> impl Iterator<Item = Result<Line, LinesError>> + '_ {
		use {std::iter::once, either::Either::*};
		let s = s.trim_end_matches('\n');
		if s.is_empty() { return Left(once(Err(LinesError::Empty))) }
		Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| LinesError::Line { line: l + 1, source: e })))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		0,9 -> 5,9
		8,0 -> 0,8
		9,4 -> 3,4
		2,2 -> 2,1
		7,0 -> 7,4
		6,4 -> 2,0
		0,9 -> 2,9
		3,4 -> 1,4
		0,0 -> 8,8
		5,5 -> 8,2
	" };
	let lines = input_lines_from_str(INPUT).unwrap();
	assert_eq!(lines[1], Line { from: [8, 0], to: [0, 8] });
	assert_eq!(lines[3].points().collect::<Vec<_>>(), [[2, 2], [2, 1]]);
	assert_eq!(part1and2_impl::<false>(&lines), 5);
	assert_eq!(part1and2_impl::<true>(&lines), 12);
	assert!(input_lines_from_str("0,0 -> 2,1").is_err());
	assert!(input_lines_from_str("0,0 => 2,2").is_err());
	assert!(matches!(input_lines_from_str(""), Err(parsing::LinesError::Empty)));
	assert!(matches!(input_lines_from_str("0,0 -> 2,2\nx\n"), Err(parsing::LinesError::Line { line: 2, .. })));
	assert_eq!(input_lines_from_str("0,0 -> 2,2\n\n").unwrap().len(), 1);
}

#[test]
#[ignore = "requires the puzzle input"]
fn real_input() {
	assert_eq!(part1().unwrap(), 5632);
	assert_eq!(part2().unwrap(), 22213);
}
