// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct Heightmap {
	heights: Vec<u8>,
	stride: usize,
}

impl Heightmap {
	/// Returns an [`Iterator`] with as its [`Iterator::Item`]s pairs of position and height.
	fn adjacent_heights(&self, pos: usize) -> impl Iterator<Item = (usize, u8)> + '_ {
		let s = self.stride;
		macro_rules! item { ( $pos:expr ) => { ($pos, self.heights[$pos]) } }
		let above = (pos >= s).then(|| item!(pos - s));
		let left = (pos % s > 0).then(|| item!(pos - 1));
		let right = (pos % s < s - 1).then(|| item!(pos + 1));
		let below = (pos + s < self.heights.len()).then(|| item!(pos + s));
		[above, left, right, below].into_iter().flatten()
	}

	fn low_points(&self) -> impl Iterator<Item = usize> + '_ {
		(0..self.heights.len()).filter(move |&pos| self.adjacent_heights(pos)
			.all(|(_, h)| h > self.heights[pos]))
	}

	/// Size of the region of heights below 9 around `pos`.
	fn basin_size(&self, pos: usize, visited: &mut [bool]) -> usize {
		let mut stack = vec![pos];
		let mut size = 0;
		while let Some(pos) = stack.pop() {
			if visited[pos] || self.heights[pos] == 9 { continue }
			visited[pos] = true;
			size += 1;
			stack.extend(self.adjacent_heights(pos)
				.filter_map(|(pos, h)| (h < 9 && !visited[pos]).then_some(pos)));
		}
		size
	}
}


fn input_heightmap_from_str(s: &str) -> Result<Heightmap, parsing::HeightmapError> {
	s.parse()
}

fn input_heightmap() -> anyhow::Result<Heightmap> {
	Ok(input_heightmap_from_str(&crate::util::input(9)?)?)
}


fn part1_impl(input_heightmap: &Heightmap) -> u32 {
	input_heightmap.low_points()
		.map(|pos| input_heightmap.heights[pos] as u32 + 1)
		.sum()
}

pub(crate) fn part1() -> anyhow::Result<u32> {
	Ok(part1_impl(&input_heightmap()?))
}


fn part2_impl(input_heightmap: &Heightmap) -> usize {
	use itertools::Itertools as _;

	let mut visited = vec![false; input_heightmap.heights.len()];
	input_heightmap.low_points()
		.map(|pos| input_heightmap.basin_size(pos, &mut visited))
		.sorted_by(|a, b| b.cmp(a))
		.take(3)
		.product()
}

pub(crate) fn part2() -> anyhow::Result<usize> {
	Ok(part2_impl(&input_heightmap()?))
}


mod parsing {
	use std::str::FromStr;
	use super::Heightmap;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum HeightmapError {
		#[error("Empty heightmap")]
		Empty,
		#[error("Line {line} has {found} heights instead of {len}")]
		LineLen { line: usize, len: usize, found: usize },
		#[error("Invalid byte {found:?} at line {line}, column {column}")]
		InvalidByte { line: usize, column: usize, found: char },
	}

	impl FromStr for Heightmap {
		type Err = HeightmapError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let s = s.trim_end_matches('\n');
			let stride = s.lines().next().map(str::len).filter(|&len| len > 0)
				.ok_or(HeightmapError::Empty)?;
			let mut heights = Vec::with_capacity(s.len());
			for (l, line) in s.lines().enumerate() {
				if line.len() != stride {
					return Err(HeightmapError::LineLen { line: l + 1, len: stride, found: line.len() })
				}
				for (c, b) in line.bytes().enumerate() {
					if !b.is_ascii_digit() {
						return Err(HeightmapError::InvalidByte { line: l + 1, column: c + 1, found: b as char })
					}
					heights.push(b - b'0');
				}
			}
			Ok(Heightmap { heights, stride })
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		2199943210
		3987894921
		9856789892
		8767896789
		9899965678
	" };
	let heightmap = input_heightmap_from_str(INPUT).unwrap();
	assert_eq!(heightmap.low_points().collect::<Vec<_>>(), [1, 9, 22, 46]);
	assert_eq!(part1_impl(&heightmap), 15);
	assert_eq!(part2_impl(&heightmap), 1134);
	assert_eq!(input_heightmap_from_str("12\n34\n\n").unwrap().heights, [1, 2, 3, 4]);
	assert!(matches!(input_heightmap_from_str("12\n123\n"),
		Err(parsing::HeightmapError::LineLen { line: 2, len: 2, found: 3 })));
}

#[test]
#[ignore = "requires the puzzle input"]
fn real_input() {
	assert_eq!(part1().unwrap(), 514);
}
