// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const SIZE: usize = 5;

struct Board([[u8; SIZE]; SIZE]);

struct Bingo {
	draws: Vec<u8>,
	boards: Vec<Board>,
}

impl Board {
	fn lines(&self) -> impl Iterator<Item = [u8; SIZE]> + '_ {
		let rows = self.0.iter().copied();
		let columns = (0..SIZE).map(move |c| std::array::from_fn(|r| self.0[r][c]));
		rows.chain(columns)
	}

	/// Index of the draw completing a row or column first, given at which
	/// draw every number comes up (`usize::MAX` for never).
	fn win_turn(&self, turns: &[usize; 256]) -> Option<usize> {
		self.lines()
			.map(|line| line.iter().map(|&n| turns[n as usize]).max().unwrap_or(usize::MAX))
			.min()
			.filter(|&turn| turn != usize::MAX)
	}

	fn unmarked_sum(&self, turns: &[usize; 256], win_turn: usize) -> u32 {
		self.0.iter().flatten()
			.filter(|&&n| turns[n as usize] > win_turn)
			.map(|&n| n as u32)
			.sum()
	}
}

impl Bingo {
	fn turns(&self) -> [usize; 256] {
		let mut turns = [usize::MAX; 256];
		for (turn, &n) in self.draws.iter().enumerate().rev() {
			turns[n as usize] = turn;
		}
		turns
	}
}


fn input_bingo_from_str(s: &str) -> Result<Bingo, parsing::BingoError> {
	s.parse()
}

fn input_bingo() -> anyhow::Result<Bingo> {
	Ok(input_bingo_from_str(&crate::util::input(4)?)?)
}


/// Score of the first board to win, or of the `LAST` one.
fn part1and2_impl<const LAST: bool>(input_bingo: &Bingo) -> Option<u32> {
	let turns = input_bingo.turns();
	let winners = input_bingo.boards.iter()
		.filter_map(|board| board.win_turn(&turns).map(|turn| (turn, board)));
	let (turn, board) = if LAST {
		winners.max_by_key(|(turn, _)| *turn)
	} else {
		winners.min_by_key(|(turn, _)| *turn)
	}?;
	Some(board.unmarked_sum(&turns, turn) * input_bingo.draws[turn] as u32)
}

pub(crate) fn part1() -> anyhow::Result<u32> {
	part1and2_impl::<false>(&input_bingo()?)
		.ok_or_else(|| anyhow::anyhow!("No board wins"))
}

pub(crate) fn part2() -> anyhow::Result<u32> {
	part1and2_impl::<true>(&input_bingo()?)
		.ok_or_else(|| anyhow::anyhow!("No board wins"))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Bingo, Board, SIZE};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum BingoError {
		#[error("Empty input")]
		Empty,
		#[error("Invalid draw #{index}")]
		Draw { index: usize, source: ParseIntError },
		#[error("Invalid number on line {line}")]
		Number { line: usize, source: ParseIntError },
		#[error("Line {line} has {found} numbers instead of {}", SIZE)]
		RowLen { line: usize, found: usize },
		#[error("Board ending on line {line} has {found} rows instead of {}", SIZE)]
		BoardLen { line: usize, found: usize },
	}

	impl FromStr for Bingo {
		type Err = BingoError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use BingoError as E;

			let mut lines = s.lines().enumerate();
			let (_, draws) = lines.next().ok_or(E::Empty)?;
			let draws = draws.split(',')
				.enumerate()
				.map(|(i, d)| d.trim().parse().map_err(|e| E::Draw { index: i + 1, source: e }))
				.collect::<Result<_, _>>()?;

			let mut boards = vec![];
			let mut rows = Vec::with_capacity(SIZE);
			let mut last_l = 0;

			macro_rules! push_board { () => {
				if !rows.is_empty() {
					let board = std::mem::take(&mut rows).try_into()
						.map_err(|rows: Vec<_>| E::BoardLen { line: last_l + 1, found: rows.len() })?;
					boards.push(Board(board));
				}
			} }

			for (l, line) in lines {
				if line.trim().is_empty() { push_board!(); continue }
				let row = line.split_whitespace()
					.map(|n| n.parse().map_err(|e| E::Number { line: l + 1, source: e }))
					.collect::<Result<Vec<u8>, _>>()?;
				let row: [u8; SIZE] = row.try_into()
					.map_err(|row: Vec<_>| E::RowLen { line: l + 1, found: row.len() })?;
				rows.push(row);
				last_l = l;
			}
			push_board!();

			Ok(Bingo { draws, boards })
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

		22 13 17 11  0
		 8  2 23  4 24
		21  9 14 16  7
		 6 10  3 18  5
		 1 12 20 15 19

		 3 15  0  2 22
		 9 18 13 17  5
		19  8  7 25 23
		20 11 10 24  4
		14 21 16 12  6

		14 21 17 24  4
		10 16 15  9 19
		18  8 23 26 20
		22 11 13  6  5
		 2  0 12  3  7
	" };

	#[test]
	fn win_turns() {
		let bingo = input_bingo_from_str(INPUT).unwrap();
		let turns = bingo.turns();
		let win_turns = bingo.boards.iter().map(|b| b.win_turn(&turns)).collect::<Vec<_>>();
		assert_eq!(win_turns, [Some(13), Some(14), Some(11)]);
	}

	#[test]
	fn part1and2_impl() {
		let bingo = input_bingo_from_str(INPUT).unwrap();
		assert_eq!(super::part1and2_impl::<false>(&bingo), Some(4512));
		assert_eq!(super::part1and2_impl::<true>(&bingo), Some(1924));

		let boards = &INPUT[INPUT.find('\n').unwrap()..];
		let unfinished = input_bingo_from_str(&format!("7,4,9,5,11{boards}")).unwrap();
		assert_eq!(super::part1and2_impl::<false>(&unfinished), None);
	}

	#[test]
	fn parsing() {
		assert!(matches!(input_bingo_from_str(""), Err(parsing::BingoError::Empty)));
		assert!(matches!(input_bingo_from_str("1,x\n"), Err(parsing::BingoError::Draw { index: 2, .. })));
		assert!(matches!(input_bingo_from_str("1\n\n1 2 3 4\n"),
			Err(parsing::BingoError::RowLen { line: 3, found: 4 })));
		assert!(matches!(input_bingo_from_str("1\n\n1 2 3 4 5\n\n"),
			Err(parsing::BingoError::BoardLen { line: 3, found: 1 })));
	}

	#[test]
	#[ignore = "requires the puzzle input"]
	fn real_input() {
		assert_eq!(super::part1().unwrap(), 33462);
		assert_eq!(super::part2().unwrap(), 30070);
	}
}
