// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, PartialEq, Eq)]
enum Cell { Empty, East, South }

#[derive(Clone)]
struct Seafloor {
	cells: Vec<Cell>,
	stride: usize,
}

impl Seafloor {
	/// Moves the east-facing herd, then the south-facing one, each all at once.
	/// Returns whether any sea cucumber moved.
	fn step(&mut self) -> bool {
		let height = self.cells.len() / self.stride;
		let mut moved = false;

		macro_rules! move_herd { ( $herd:ident, $next:expr ) => {
			let moves = self.cells.iter()
				.enumerate()
				.filter(|&(_, &cell)| cell == Cell::$herd)
				.map(|(pos, _)| (pos, $next(pos)))
				.filter(|&(_, next)| self.cells[next] == Cell::Empty)
				.collect::<Vec<_>>();
			moved |= !moves.is_empty();
			for (pos, next) in moves {
				self.cells[pos] = Cell::Empty;
				self.cells[next] = Cell::$herd;
			}
		} }

		let stride = self.stride;
		move_herd!(East, |pos: usize| pos - pos % stride + (pos % stride + 1) % stride);
		move_herd!(South, |pos: usize| (pos / stride + 1) % height * stride + pos % stride);

		moved
	}
}

#[cfg(LOGGING)]
impl std::fmt::Display for Seafloor {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		for row in self.cells.chunks(self.stride) {
			for cell in row {
				write!(f, "{}", match cell { Cell::Empty => '.', Cell::East => '>', Cell::South => 'v' })?;
			}
			writeln!(f)?;
		}
		Ok(())
	}
}


fn input_seafloor_from_str(s: &str) -> Result<Seafloor, parsing::SeafloorError> {
	s.parse()
}

fn input_seafloor() -> anyhow::Result<Seafloor> {
	Ok(input_seafloor_from_str(&crate::util::input(25)?)?)
}


fn part1_impl(input_seafloor: &Seafloor) -> usize {
	let mut seafloor = input_seafloor.clone();
	let mut steps = 1;
	while seafloor.step() {
		steps += 1;

		#[cfg(LOGGING)]
		println!("After {steps} steps:\n{seafloor}");
	}
	steps
}

pub(crate) fn part1() -> anyhow::Result<usize> {
	Ok(part1_impl(&input_seafloor()?))
}


pub(crate) fn part2() -> anyhow::Result<&'static str> {
	Ok("Merry Christmas!")
}


mod parsing {
	use std::str::FromStr;
	use super::{Cell, Seafloor};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum SeafloorError {
		#[error("Empty seafloor")]
		Empty,
		#[error("Line {line} has {found} cells instead of {len}")]
		LineLen { line: usize, len: usize, found: usize },
		#[error("Invalid byte {found:?} at line {line}, column {column}")]
		InvalidByte { line: usize, column: usize, found: char },
	}

	impl FromStr for Seafloor {
		type Err = SeafloorError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use SeafloorError as E;
			let s = s.trim_end_matches('\n');

			let mut stride = None;
			let mut cells = vec![];
			for (l, line) in s.lines().enumerate() {
				let len = *stride.get_or_insert(line.len());
				if line.len() != len { return Err(E::LineLen { line: l + 1, len, found: line.len() }) }
				for (c, b) in line.bytes().enumerate() {
					cells.push(match b {
						b'.' => Cell::Empty,
						b'>' => Cell::East,
						b'v' => Cell::South,
						found => return Err(E::InvalidByte { line: l + 1, column: c + 1, found: found as char }),
					});
				}
			}

			Ok(Seafloor { cells, stride: stride.filter(|&s| s > 0).ok_or(E::Empty)? })
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		v...>>.vv>
		.vv>>.vv..
		>>.>v>...v
		>>v>>.>.v.
		v>v.vv.v..
		>.>>..v...
		.vv..>.>v.
		v.v..>>v.v
		....v..v.>
	" };

	#[test]
	fn step() {
		let mut seafloor = input_seafloor_from_str("...>>>>>...\n").unwrap();
		assert!(seafloor.step());
		assert_eq!(seafloor.cells, input_seafloor_from_str("...>>>>.>..\n").unwrap().cells);
		assert!(seafloor.step());
		assert_eq!(seafloor.cells, input_seafloor_from_str("...>>>.>.>.\n").unwrap().cells);

		let mut seafloor = input_seafloor_from_str(indoc::indoc! { "
			..........
			.>v....v..
			.......>..
			..........
		" }).unwrap();
		assert!(seafloor.step());
		assert_eq!(seafloor.cells, input_seafloor_from_str(indoc::indoc! { "
			..........
			.>........
			..v....v>.
			..........
		" }).unwrap().cells);

		let mut wrapping = input_seafloor_from_str(">.v\n...\n").unwrap();
		assert!(wrapping.step());
		assert_eq!(wrapping.cells, input_seafloor_from_str(".>.\n..v\n").unwrap().cells);
		assert!(wrapping.step());
		assert_eq!(wrapping.cells, input_seafloor_from_str("..>\n..v\n").unwrap().cells);
	}

	#[test]
	fn part1_impl() {
		assert_eq!(super::part1_impl(&input_seafloor_from_str(INPUT).unwrap()), 58);
		assert_eq!(super::part1_impl(&input_seafloor_from_str(">v\nv>\n").unwrap()), 1);
	}

	#[test]
	fn parsing() {
		assert!(matches!(input_seafloor_from_str(""), Err(parsing::SeafloorError::Empty)));
		assert_eq!(input_seafloor_from_str(">.\n.v\n\n").unwrap().cells, [Cell::East, Cell::Empty, Cell::Empty, Cell::South]);
		assert!(matches!(input_seafloor_from_str("..\n.\n"), Err(parsing::SeafloorError::LineLen { line: 2, len: 2, found: 1 })));
		assert!(matches!(input_seafloor_from_str(".<\n"), Err(parsing::SeafloorError::InvalidByte { line: 1, column: 2, found: '<' })));
	}

	#[test]
	#[ignore = "requires the puzzle input"]
	fn real_input() {
		assert_eq!(super::part1().unwrap(), 300);
	}
}
