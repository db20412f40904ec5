// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::ops::RangeInclusive;
use rayon::prelude::{IntoParallelIterator as _, ParallelIterator};


/// Lies right of and below the launcher.
#[cfg_attr(test, derive(Debug, PartialEq))]
struct Target {
	x: RangeInclusive<i32>,
	y: RangeInclusive<i32>,
}

impl Target {
	/// Returns the highest `y` reached when the probe hits the target.
	fn launch(&self, [mut vx, mut vy]: [i32; 2]) -> Option<i32> {
		let [mut x, mut y, mut top] = [0; 3];
		while x <= *self.x.end() && y >= *self.y.start() {
			if self.x.contains(&x) && self.y.contains(&y) { return Some(top) }
			x += vx;
			y += vy;
			top = top.max(y);
			vx -= vx.signum();
			vy -= 1;
		}
		None
	}

	/// Any faster horizontally overshoots on the first step, as does
	/// any faster vertically on the step after passing `y = 0` again.
	fn hit_tops(&self) -> impl ParallelIterator<Item = i32> + '_ {
		let vy_max = -*self.y.start();
		(1..=*self.x.end()).into_par_iter()
			.flat_map_iter(move |vx| (*self.y.start()..=vy_max)
				.filter_map(move |vy| self.launch([vx, vy])))
	}
}


fn input_target_from_str(s: &str) -> Result<Target, parsing::TargetError> {
	s.parse()
}

fn input_target() -> anyhow::Result<Target> {
	Ok(input_target_from_str(&crate::util::input(17)?)?)
}


fn part1_impl(input_target: &Target) -> Option<i32> {
	input_target.hit_tops().max()
}

pub(crate) fn part1() -> anyhow::Result<i32> {
	part1_impl(&input_target()?)
		.ok_or_else(|| anyhow::anyhow!("No velocity hits the target"))
}


fn part2_impl(input_target: &Target) -> usize {
	input_target.hit_tops().count()
}

pub(crate) fn part2() -> anyhow::Result<usize> {
	Ok(part2_impl(&input_target()?))
}


mod parsing {
	use std::{num::ParseIntError, ops::RangeInclusive, str::FromStr};
	use super::Target;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum TargetError {
		#[error("Invalid format")]
		Format,
		#[error("Invalid coordinate")]
		Coordinate(#[source] ParseIntError),
		#[error("Target not right of and below the launcher")]
		Unsupported,
	}

	fn range_from_str(s: &str, axis: &str) -> Result<RangeInclusive<i32>, TargetError> {
		let (start, end) = s.trim().strip_prefix(axis)
			.and_then(|r| r.strip_prefix('='))
			.and_then(|r| r.split_once(".."))
			.ok_or(TargetError::Format)?;
		let [start, end] = [start, end].map(|c| c.parse::<i32>());
		let [start, end] = [start.map_err(TargetError::Coordinate)?, end.map_err(TargetError::Coordinate)?];
		Ok(start.min(end)..=start.max(end))
	}

	impl FromStr for Target {
		type Err = TargetError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (x, y) = s.trim().strip_prefix("target area:")
				.and_then(|r| r.split_once(','))
				.ok_or(TargetError::Format)?;
			let target = Target { x: range_from_str(x, "x")?, y: range_from_str(y, "y")? };
			if *target.x.start() <= 0 || *target.y.end() >= 0 { return Err(TargetError::Unsupported) }
			Ok(target)
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = "target area: x=20..30, y=-10..-5\n";
	let target = input_target_from_str(INPUT).unwrap();
	assert_eq!(target, Target { x: 20..=30, y: -10..=-5 });
	assert_eq!(target.launch([7, 2]), Some(3));
	assert_eq!(target.launch([6, 9]), Some(45));
	assert_eq!(target.launch([17, -4]), None);
	assert_eq!(part1_impl(&target), Some(45));
	assert_eq!(part2_impl(&target), 112);
	assert!(matches!(input_target_from_str("target area: x=-30..-20, y=-10..-5"),
		Err(parsing::TargetError::Unsupported)));
}

#[test]
#[ignore = "requires the puzzle input"]
fn real_input() {
	assert_eq!(part1().unwrap(), 7750);
}
