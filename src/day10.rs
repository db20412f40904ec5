// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, PartialEq, Eq)]
enum Bracket { Round, Square, Curly, Angle }

#[derive(Clone, Copy)]
enum Token {
	Open(Bracket),
	Close(Bracket),
}

#[cfg_attr(test, derive(Debug, PartialEq))]
enum Status {
	/// The first closing bracket not matching the innermost open one.
	Corrupted(Bracket),
	/// Brackets still open, innermost last.
	Incomplete(Vec<Bracket>),
	Complete,
}

impl Bracket {
	fn corrupted_score(self) -> u64 {
		match self { Bracket::Round => 3, Bracket::Square => 57, Bracket::Curly => 1197, Bracket::Angle => 25137 }
	}

	fn completion_score(self) -> u64 {
		match self { Bracket::Round => 1, Bracket::Square => 2, Bracket::Curly => 3, Bracket::Angle => 4 }
	}
}

fn status(line: &[Token]) -> Status {
	let mut open = vec![];
	for token in line {
		match *token {
			Token::Open(bracket) => open.push(bracket),
			Token::Close(bracket) => if open.pop() != Some(bracket) {
				return Status::Corrupted(bracket)
			},
		}
	}
	if open.is_empty() { Status::Complete } else { Status::Incomplete(open) }
}


fn input_lines_from_str(s: &str) -> Result<Vec<Vec<Token>>, parsing::LinesError> {
	parsing::lines_from_str(s).collect()
}

fn input_lines() -> anyhow::Result<Vec<Vec<Token>>> {
	Ok(input_lines_from_str(&crate::util::input(10)?)?)
}


fn part1_impl(input_lines: &[Vec<Token>]) -> u64 {
	input_lines.iter()
		.filter_map(|line| match status(line) {
			Status::Corrupted(bracket) => Some(bracket.corrupted_score()),
			_ => None,
		})
		.sum()
}

pub(crate) fn part1() -> anyhow::Result<u64> {
	Ok(part1_impl(&input_lines()?))
}


fn part2_impl(input_lines: &[Vec<Token>]) -> Option<u64> {
	let mut scores = input_lines.iter()
		.filter_map(|line| match status(line) {
			Status::Incomplete(open) => Some(open.into_iter().rev()
				.fold(0, |acc, bracket| acc * 5 + bracket.completion_score())),
			_ => None,
		})
		.collect::<Vec<_>>();
	if scores.is_empty() { return None }
	let mid = scores.len() / 2;
	Some(*scores.select_nth_unstable(mid).1)
}

pub(crate) fn part2() -> anyhow::Result<u64> {
	part2_impl(&input_lines()?)
		.ok_or_else(|| anyhow::anyhow!("No incomplete lines"))
}


mod parsing {
	use super::{Bracket, Token};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum LinesError {
		#[error("No lines")]
		Empty,
		#[error("Invalid byte {found:?} at line {line}, column {column}")]
		InvalidByte { line: usize, column: usize, found: char },
	}

	fn token(b: u8) -> Option<Token> {
		use {Bracket::*, Token::*};
		Some(match b {
			b'(' => Open(Round), b')' => Close(Round),
			b'[' => Open(Square), b']' => Close(Square),
			b'{' => Open(Curly), b'}' => Close(Curly),
			b'<' => Open(Angle), b'>' => Close(Angle),
			_ => return None,
		})
	}

	pub(super) fn lines_from_str(s: &str) -> impl Iterator<Item = Result<Vec<Token>, LinesError>> + '_ {
		use {std::iter::once, either::Either::*};
		let s = s.trim_end_matches('\n');
		if s.is_empty() { return Left(once(Err(LinesError::Empty))) }
		Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.bytes()
				.enumerate()
				.map(|(c, b)| token(b)
					.ok_or(LinesError::InvalidByte { line: l + 1, column: c + 1, found: b as char }))
				.collect()))
	}
}
