// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone)]
struct RiskMap {
	risks: Vec<u8>,
	stride: usize,
}

impl RiskMap {
	fn adjacent(&self, pos: usize) -> impl Iterator<Item = usize> {
		let (s, len) = (self.stride, self.risks.len());
		let above = (pos >= s).then(|| pos - s);
		let left = (pos % s > 0).then(|| pos - 1);
		let right = (pos % s < s - 1).then(|| pos + 1);
		let below = (pos + s < len).then(|| pos + s);
		[above, left, right, below].into_iter().flatten()
	}

	/// The map repeated `n` times in both directions, with risks increasing
	/// by one per repetition to the right or down, wrapping around from 9 to 1.
	fn tiled(&self, n: usize) -> RiskMap {
		let height = self.risks.len() / self.stride;
		let stride = self.stride * n;
		let risks = (0..height * n)
			.flat_map(|y| (0..stride).map(move |x| (x, y)))
			.map(|(x, y)| {
				let risk = self.risks[(y % height) * self.stride + x % self.stride] as usize;
				((risk - 1 + x / self.stride + y / height) % 9 + 1) as u8
			})
			.collect();
		RiskMap { risks, stride }
	}

	/// Dijkstra with a bucket queue: as no risk exceeds 9, all tentative
	/// risks lie within 9 of the current one and 10 buckets suffice.
	fn lowest_total_risk(&self, from: usize, to: usize) -> Option<u32> {
		const BUCKETS: usize = 10;

		let mut totals = vec![u32::MAX; self.risks.len()];
		let mut buckets: [Vec<usize>; BUCKETS] = Default::default();
		let mut pending = 1;
		totals[from] = 0;
		buckets[0].push(from);

		let mut total = 0;
		while pending > 0 {
			let bucket = total as usize % BUCKETS;
			while let Some(pos) = buckets[bucket].pop() {
				pending -= 1;
				if totals[pos] < total { continue }
				if pos == to { return Some(total) }

				#[cfg(LOGGING)]
				println!("{},{} @ {total}", pos % self.stride, pos / self.stride);

				for next in self.adjacent(pos) {
					let next_total = total + self.risks[next] as u32;
					if next_total < totals[next] {
						totals[next] = next_total;
						buckets[next_total as usize % BUCKETS].push(next);
						pending += 1;
					}
				}
			}
			total += 1;
		}

		None
	}
}


fn input_risk_map_from_str(s: &str) -> Result<RiskMap, parsing::RiskMapError> {
	s.parse()
}

fn input_risk_map() -> anyhow::Result<RiskMap> {
	Ok(input_risk_map_from_str(&crate::util::input(15)?)?)
}


fn part1and2_impl<const TILES: usize>(input_risk_map: &RiskMap) -> Option<u32> {
	let risk_map = if TILES > 1 { input_risk_map.tiled(TILES) } else { input_risk_map.clone() };
	risk_map.lowest_total_risk(0, risk_map.risks.len() - 1)
}

pub(crate) fn part1() -> anyhow::Result<u32> {
	part1and2_impl::<1>(&input_risk_map()?)
		.ok_or_else(|| anyhow::anyhow!("No path"))
}

pub(crate) fn part2() -> anyhow::Result<u32> {
	part1and2_impl::<5>(&input_risk_map()?)
		.ok_or_else(|| anyhow::anyhow!("No path"))
}


mod parsing {
	use std::str::FromStr;
	use super::RiskMap;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum RiskMapError {
		#[error("Empty map")]
		Empty,
		#[error("Line {line} has {found} risks instead of {len}")]
		LineLen { line: usize, len: usize, found: usize },
		#[error("Invalid byte {found:?} at line {line}, column {column}")]
		InvalidByte { line: usize, column: usize, found: char },
	}

	impl FromStr for RiskMap {
		type Err = RiskMapError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use RiskMapError as E;
			let s = s.trim_end_matches('\n');

			let stride = s.lines().next().map(str::len).filter(|&len| len > 0).ok_or(E::Empty)?;
			let mut risks = Vec::with_capacity(s.len());
			for (l, line) in s.lines().enumerate() {
				if line.len() != stride {
					return Err(E::LineLen { line: l + 1, len: stride, found: line.len() })
				}
				for (c, b) in line.bytes().enumerate() {
					match b {
						b'1'..=b'9' => risks.push(b - b'0'),
						found => return Err(E::InvalidByte { line: l + 1, column: c + 1, found: found as char }),
					}
				}
			}
			Ok(RiskMap { risks, stride })
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		1163751742
		1381373672
		2136511328
		3694931569
		7463417111
		1319128137
		1359912421
		3125421639
		1293138521
		2311944581
	" };

	#[test]
	fn tiled() {
		let tiled = input_risk_map_from_str("8\n").unwrap().tiled(5);
		assert_eq!(tiled.stride, 5);
		assert_eq!(tiled.risks, [
			8, 9, 1, 2, 3,
			9, 1, 2, 3, 4,
			1, 2, 3, 4, 5,
			2, 3, 4, 5, 6,
			3, 4, 5, 6, 7,
		]);
	}

	#[test]
	fn part1and2_impl() {
		let risk_map = input_risk_map_from_str(INPUT).unwrap();
		assert_eq!(super::part1and2_impl::<1>(&risk_map), Some(40));
		assert_eq!(super::part1and2_impl::<5>(&risk_map), Some(315));
	}

	#[test]
	fn parsing() {
		assert_eq!(input_risk_map_from_str("12\n34\n\n").unwrap().risks, [1, 2, 3, 4]);
		assert!(matches!(input_risk_map_from_str("19\n10\n"),
			Err(parsing::RiskMapError::InvalidByte { line: 2, column: 2, found: '0' })));
	}
}


#[cfg(BENCHING)]
mod bench {
	extern crate test;

	#[bench]
	fn part2(b: &mut test::Bencher) {
		let risk_map = super::input_risk_map().unwrap();
		b.iter(|| super::part1and2_impl::<5>(&risk_map));
	}
}
