// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Sets of caves are bit sets over cave indices.
type Caves = u64;

struct CaveSystem {
	connections: Vec<Caves>,
	small: Caves,
	start: usize,
	end: usize,
}

fn caves(set: Caves) -> impl Iterator<Item = usize> {
	(0..Caves::BITS as usize).filter(move |&i| set >> i & 1 == 1)
}

impl CaveSystem {
	/// Counts the paths from `from` to the end not revisiting any small
	/// cave in `visited`, except for one revisit if `may_revisit`.
	fn count_paths(&self, from: usize, visited: Caves, may_revisit: bool) -> usize {
		if from == self.end { return 1 }
		let visited = visited | (self.small & 1 << from);
		caves(self.connections[from])
			.filter(|&to| to != self.start)
			.map(|to| match (visited >> to & 1 == 1, may_revisit) {
				(false, _) => self.count_paths(to, visited, may_revisit),
				(true, true) => self.count_paths(to, visited, false),
				(true, false) => 0,
			})
			.sum()
	}
}


fn input_cave_system_from_str(s: &str) -> Result<CaveSystem, parsing::CaveSystemError> {
	s.parse()
}

fn input_cave_system() -> anyhow::Result<CaveSystem> {
	Ok(input_cave_system_from_str(&crate::util::input(12)?)?)
}


fn part1and2_impl<const REVISIT: bool>(input_cave_system: &CaveSystem) -> usize {
	input_cave_system.count_paths(input_cave_system.start, 0, REVISIT)
}

pub(crate) fn part1() -> anyhow::Result<usize> {
	Ok(part1and2_impl::<false>(&input_cave_system()?))
}

pub(crate) fn part2() -> anyhow::Result<usize> {
	Ok(part1and2_impl::<true>(&input_cave_system()?))
}


mod parsing {
	use std::{collections::HashMap, str::FromStr};
	use super::{Caves, CaveSystem};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum CaveSystemError {
		#[error("Missing dash on line {line}")]
		NoDash { line: usize },
		#[error("Empty cave name on line {line}")]
		EmptyName { line: usize },
		#[error("Connected big caves on line {line} allow endless paths")]
		BigCavesAdjacent { line: usize },
		#[error("More than {} caves", Caves::BITS)]
		TooManyCaves,
		#[error("No start cave")]
		NoStart,
		#[error("No end cave")]
		NoEnd,
	}

	impl FromStr for CaveSystem {
		type Err = CaveSystemError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use CaveSystemError as E;
			let s = s.trim_end_matches('\n');

			let mut indices = HashMap::new();
			let mut connections = vec![];
			let mut small = 0;

			for (l, line) in s.lines().enumerate() {
				let (a, b) = line.split_once('-').ok_or(E::NoDash { line: l + 1 })?;
				let [a, b] = [a, b].map(|name| {
					if name.is_empty() { return Err(E::EmptyName { line: l + 1 }) }
					let next = indices.len();
					let index = *indices.entry(name).or_insert(next);
					if index >= Caves::BITS as usize { return Err(E::TooManyCaves) }
					if index == connections.len() {
						connections.push(0);
						if name.bytes().all(|b| b.is_ascii_lowercase()) { small |= 1 << index }
					}
					Ok(index)
				});
				let (a, b) = (a?, b?);
				if small & (1 << a | 1 << b) == 0 { return Err(E::BigCavesAdjacent { line: l + 1 }) }
				connections[a] |= 1 << b;
				connections[b] |= 1 << a;
			}

			Ok(CaveSystem {
				start: *indices.get("start").ok_or(E::NoStart)?,
				end: *indices.get("end").ok_or(E::NoEnd)?,
				connections,
				small,
			})
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;
	use test_case::test_case;

	const INPUTS: [&str; 3] = [
		indoc::indoc! { "
			start-A
			start-b
			A-c
			A-b
			b-d
			A-end
			b-end
		" },
		indoc::indoc! { "
			dc-end
			HN-start
			start-kj
			dc-start
			dc-HN
			LN-dc
			HN-end
			kj-sa
			kj-HN
			kj-dc
		" },
		indoc::indoc! { "
			fs-end
			he-DX
			fs-he
			start-DX
			pj-DX
			end-zg
			zg-sl
			zg-pj
			pj-he
			RW-he
			fs-DX
			pj-RW
			zg-RW
			start-pj
			he-WI
			zg-he
			pj-fs
			start-RW
		" },
	];

	#[test_case(0 => (10, 36))]
	#[test_case(1 => (19, 103))]
	#[test_case(2 => (226, 3509))]
	fn part1and2_impl(input: usize) -> (usize, usize) {
		let cave_system = input_cave_system_from_str(INPUTS[input]).unwrap();
		(super::part1and2_impl::<false>(&cave_system), super::part1and2_impl::<true>(&cave_system))
	}

	#[test]
	fn parsing() {
		assert!(matches!(input_cave_system_from_str("start-end\nA-B\n"),
			Err(parsing::CaveSystemError::BigCavesAdjacent { line: 2 })));
		assert!(matches!(input_cave_system_from_str("start-a\n"), Err(parsing::CaveSystemError::NoEnd)));
		assert!(matches!(input_cave_system_from_str("start end\n"),
			Err(parsing::CaveSystemError::NoDash { line: 1 })));
	}

	#[test]
	#[ignore = "requires the puzzle input"]
	fn real_input() {
		assert_eq!(super::part1().unwrap(), 4775);
		assert_eq!(super::part2().unwrap(), 152480);
	}
}
