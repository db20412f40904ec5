// Copyright (c) 2022 Bastiaan Marinus van de Weerd


fn input_positions_from_str(s: &str) -> Result<Vec<u32>, parsing::PositionsError> {
	parsing::positions_from_str(s).collect()
}

fn input_positions() -> anyhow::Result<Vec<u32>> {
	Ok(input_positions_from_str(&crate::util::input(7)?)?)
}


fn fuel(positions: &[u32], target: u32, cost: impl Fn(u64) -> u64) -> u64 {
	positions.iter().map(|&p| cost(p.abs_diff(target) as u64)).sum()
}

/// The median minimizes the sum of absolute distances.
fn part1_impl(mut input_positions: Vec<u32>) -> u64 {
	if input_positions.is_empty() { return 0 }
	let mid = input_positions.len() / 2;
	let (_, &mut median, _) = input_positions.select_nth_unstable(mid);
	fuel(&input_positions, median, std::convert::identity)
}

pub(crate) fn part1() -> anyhow::Result<u64> {
	Ok(part1_impl(input_positions()?))
}


fn part2_impl(input_positions: &[u32]) -> u64 {
	use itertools::{Itertools as _, MinMaxResult::*};

	let (min, max) = match input_positions.iter().copied().minmax() {
		NoElements => return 0,
		OneElement(p) => (p, p),
		MinMax(min, max) => (min, max),
	};
	(min..=max)
		.map(|target| fuel(input_positions, target, |d| d * (d + 1) / 2))
		.min()
		.unwrap_or(0)
}

pub(crate) fn part2() -> anyhow::Result<u64> {
	Ok(part2_impl(&input_positions()?))
}


mod parsing {
	use std::num::ParseIntError;

	#[derive(Debug, thiserror::Error)]
	#[error("Invalid position #{index}")]
	pub(super) struct PositionsError { index: usize, source: ParseIntError }

	pub(super) fn positions_from_str(s: &str) -> impl Iterator<Item = Result<u32, PositionsError>> + '_ {
		s.trim()
			.split(',')
			.enumerate()
			.map(|(i, p)| p.parse()
				.map_err(|e| PositionsError { index: i + 1, source: e }))
	}
}


#[test]
fn tests() {
	const INPUT: &str = "16,1,2,0,4,2,7,1,2,14\n";
	let positions = input_positions_from_str(INPUT).unwrap();
	assert_eq!(fuel(&positions, 1, std::convert::identity), 41);
	assert_eq!(part1_impl(positions.clone()), 37);
	assert_eq!(fuel(&positions, 2, |d| d * (d + 1) / 2), 206);
	assert_eq!(part2_impl(&positions), 168);
	assert_eq!(part2_impl(&[]), 0);
	assert!(input_positions_from_str("1,a").is_err());
}

#[test]
#[ignore = "requires the puzzle input"]
fn real_input() {
	assert_eq!(part1().unwrap(), 326132);
	assert_eq!(part2().unwrap(), 88612508);
}
