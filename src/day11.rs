// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone)]
struct Octopuses {
	energies: Vec<u8>,
	stride: usize,
}

impl Octopuses {
	fn neighbors(&self, pos: usize) -> impl Iterator<Item = usize> {
		let (s, h) = (self.stride as isize, (self.energies.len() / self.stride) as isize);
		let (x, y) = ((pos % self.stride) as isize, (pos / self.stride) as isize);
		(-1..=1).flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
			.filter(|&d| d != (0, 0))
			.map(move |(dx, dy)| (x + dx, y + dy))
			.filter(move |&(x, y)| (0..s).contains(&x) && (0..h).contains(&y))
			.map(move |(x, y)| (y * s + x) as usize)
	}

	/// Returns the number of octopuses that flashed.
	fn step(&mut self) -> usize {
		let mut flashing = vec![];
		for (pos, energy) in self.energies.iter_mut().enumerate() {
			*energy += 1;
			if *energy > 9 { flashing.push(pos) }
		}

		let mut flashes = 0;
		while let Some(pos) = flashing.pop() {
			flashes += 1;
			for neighbor in self.neighbors(pos) {
				let energy = &mut self.energies[neighbor];
				*energy += 1;
				if *energy == 10 { flashing.push(neighbor) }
			}
		}

		for energy in &mut self.energies {
			if *energy > 9 { *energy = 0 }
		}

		#[cfg(LOGGING)]
		println!("{self}");

		flashes
	}
}

#[cfg(LOGGING)]
impl std::fmt::Display for Octopuses {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		for row in self.energies.chunks(self.stride) {
			for energy in row { write!(f, "{energy}")? }
			writeln!(f)?;
		}
		Ok(())
	}
}


fn input_octopuses_from_str(s: &str) -> Result<Octopuses, parsing::OctopusesError> {
	s.parse()
}

fn input_octopuses() -> anyhow::Result<Octopuses> {
	Ok(input_octopuses_from_str(&crate::util::input(11)?)?)
}


fn part1_impl<const STEPS: usize>(mut input_octopuses: Octopuses) -> usize {
	(0..STEPS).map(|_| input_octopuses.step()).sum()
}

pub(crate) fn part1() -> anyhow::Result<usize> {
	Ok(part1_impl::<100>(input_octopuses()?))
}


/// First step during which all octopuses flash.
fn part2_impl(mut input_octopuses: Octopuses) -> Option<usize> {
	let count = input_octopuses.energies.len();
	(1..).find(|_| input_octopuses.step() == count)
}

pub(crate) fn part2() -> anyhow::Result<usize> {
	part2_impl(input_octopuses()?)
		.ok_or_else(|| anyhow::anyhow!("Octopuses never synchronize"))
}


mod parsing {
	use std::str::FromStr;
	use super::Octopuses;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum OctopusesError {
		#[error("Empty grid")]
		Empty,
		#[error("Line {line} has {found} octopuses instead of {len}")]
		LineLen { line: usize, len: usize, found: usize },
		#[error("Invalid byte {found:?} at line {line}, column {column}")]
		InvalidByte { line: usize, column: usize, found: char },
	}

	impl FromStr for Octopuses {
		type Err = OctopusesError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use OctopusesError as E;
			let s = s.trim_end_matches('\n');

			let stride = s.lines().next().map(str::len).filter(|&len| len > 0).ok_or(E::Empty)?;
			let mut energies = Vec::with_capacity(s.len());
			for (l, line) in s.lines().enumerate() {
				if line.len() != stride {
					return Err(E::LineLen { line: l + 1, len: stride, found: line.len() })
				}
				for (c, b) in line.bytes().enumerate() {
					match b {
						b'0'..=b'9' => energies.push(b - b'0'),
						found => return Err(E::InvalidByte { line: l + 1, column: c + 1, found: found as char }),
					}
				}
			}

			Ok(Octopuses { energies, stride })
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		5483143223
		2745854711
		5264556173
		6141336146
		6357385478
		4167524645
		2176841721
		6882881134
		4846848554
		5283751526
	" };

	#[test]
	fn step() {
		let mut octopuses = input_octopuses_from_str(indoc::indoc! { "
			11111
			19991
			19191
			19991
			11111
		" }).unwrap();
		assert_eq!(octopuses.step(), 9);
		assert_eq!(octopuses.energies, input_octopuses_from_str(indoc::indoc! { "
			34543
			40004
			50005
			40004
			34543
		" }).unwrap().energies);
		assert_eq!(octopuses.step(), 0);
	}

	#[test]
	fn part1_impl() {
		let octopuses = input_octopuses_from_str(INPUT).unwrap();
		assert_eq!(super::part1_impl::<10>(octopuses.clone()), 204);
		assert_eq!(super::part1_impl::<100>(octopuses), 1656);
	}

	#[test]
	fn parsing() {
		assert_eq!(input_octopuses_from_str("12\n34\n\n").unwrap().energies, [1, 2, 3, 4]);
		assert!(matches!(input_octopuses_from_str(""), Err(parsing::OctopusesError::Empty)));
	}

	#[test]
	fn part2_impl() {
		assert_eq!(super::part2_impl(input_octopuses_from_str(INPUT).unwrap()), Some(195));
	}

	#[test]
	#[ignore = "requires the puzzle input"]
	fn real_input() {
		assert_eq!(super::part1().unwrap(), 1749);
		assert_eq!(super::part2().unwrap(), 285);
	}
}
