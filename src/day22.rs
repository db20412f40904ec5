// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


/// Bounds are inclusive.
#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct Cuboid {
	min: [i64; 3],
	max: [i64; 3],
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct Step {
	on: bool,
	cuboid: Cuboid,
}

impl Cuboid {
	fn intersection(&self, other: &Cuboid) -> Option<Cuboid> {
		let min: [i64; 3] = std::array::from_fn(|i| self.min[i].max(other.min[i]));
		let max: [i64; 3] = std::array::from_fn(|i| self.max[i].min(other.max[i]));
		(0..3).all(|i| min[i] <= max[i]).then_some(Cuboid { min, max })
	}

	fn volume(&self) -> i64 {
		(0..3).map(|i| self.max[i] - self.min[i] + 1).product()
	}
}

/// Keeps the cuboids lit so far with signs such that the signed sum
/// of their volumes counts every cube once, subtracting the overlap
/// with every new step before adding the step itself if it is on.
fn count_on<'a>(steps: impl IntoIterator<Item = &'a Step>, region: Option<Cuboid>) -> i64 {
	let mut signed: HashMap<Cuboid, i64> = HashMap::new();
	for step in steps {
		let cuboid = match region {
			Some(region) => match step.cuboid.intersection(&region) { Some(c) => c, None => continue },
			None => step.cuboid,
		};

		let mut update = HashMap::new();
		for (other, &sign) in &signed {
			if let Some(overlap) = other.intersection(&cuboid) {
				*update.entry(overlap).or_insert(0) -= sign;
			}
		}
		if step.on { *update.entry(cuboid).or_insert(0) += 1 }

		for (cuboid, sign) in update {
			*signed.entry(cuboid).or_insert(0) += sign;
		}
		signed.retain(|_, sign| *sign != 0);

		#[cfg(LOGGING)]
		println!("{} signed cuboids", signed.len());
	}
	signed.iter().map(|(cuboid, sign)| cuboid.volume() * sign).sum()
}


fn input_steps_from_str(s: &str) -> Result<Vec<Step>, parsing::StepsError> {
	parsing::steps_from_str(s).collect()
}

fn input_steps() -> anyhow::Result<Vec<Step>> {
	Ok(input_steps_from_str(&crate::util::input(22)?)?)
}


fn part1_impl(input_steps: &[Step]) -> i64 {
	count_on(input_steps, Some(Cuboid { min: [-50; 3], max: [50; 3] }))
}

pub(crate) fn part1() -> anyhow::Result<i64> {
	Ok(part1_impl(&input_steps()?))
}


fn part2_impl(input_steps: &[Step]) -> i64 {
	count_on(input_steps, None)
}

pub(crate) fn part2() -> anyhow::Result<i64> {
	Ok(part2_impl(&input_steps()?))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Cuboid, Step};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum StepError {
		#[error("Expected \"on\" or \"off\"")]
		State,
		#[error("Invalid range for axis {axis}")]
		Range { axis: char },
		#[error("Invalid bound")]
		Bound(#[source] ParseIntError),
		#[error("Empty range for axis {axis}")]
		Empty { axis: char },
	}

	impl FromStr for Step {
		type Err = StepError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (on, ranges) = match s.split_once(' ') {
				Some(("on", ranges)) => (true, ranges),
				Some(("off", ranges)) => (false, ranges),
				_ => return Err(StepError::State),
			};
			let mut cuboid = Cuboid { min: [0; 3], max: [0; 3] };
			let mut ranges = ranges.split(',');
			for (i, axis) in ['x', 'y', 'z'].into_iter().enumerate() {
				let (min, max) = ranges.next()
					.and_then(|r| r.strip_prefix(axis))
					.and_then(|r| r.strip_prefix('='))
					.and_then(|r| r.split_once(".."))
					.ok_or(StepError::Range { axis })?;
				cuboid.min[i] = min.parse().map_err(StepError::Bound)?;
				cuboid.max[i] = max.parse().map_err(StepError::Bound)?;
				if cuboid.min[i] > cuboid.max[i] { return Err(StepError::Empty { axis }) }
			}
			if ranges.next().is_some() { return Err(StepError::Range { axis: 'z' }) }
			Ok(Step { on, cuboid })
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum StepsError {
		#[error("No reboot steps")]
		Empty,
		#[error("Invalid reboot step on line {line}")]
		Step { line: usize, source: StepError },
	}

	pub(super) fn steps_from_str(s: &str) -> impl Iterator<Item = Result<Step, StepsError>> + '_ {
		use {std::iter::once, either::Either::*};
		let s = s.trim_end_matches('\n');
		if s.is_empty() { return Left(once(Err(StepsError::Empty))) }
		Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| StepsError::Step { line: l + 1, source: e })))
	}
}


#[cfg(test)]
mod tests {
	use super::*;
	use test_case::test_case;

	const INPUT: &str = indoc::indoc! { "
		on x=10..12,y=10..12,z=10..12
		on x=11..13,y=11..13,z=11..13
		off x=9..11,y=9..11,z=9..11
		on x=10..10,y=10..10,z=10..10
	" };

	/// Mostly within the initialization region, with two steps far outside it.
	const LARGER_INPUT: &str = indoc::indoc! { "
		on x=-20..26,y=-36..17,z=-47..7
		on x=-20..33,y=-21..23,z=-26..28
		on x=-22..28,y=-29..23,z=-38..16
		on x=-46..7,y=-6..46,z=-50..-1
		on x=-49..1,y=-3..46,z=-24..28
		on x=2..47,y=-22..22,z=-23..27
		on x=-27..23,y=-28..26,z=-21..29
		on x=-39..5,y=-6..47,z=-3..44
		on x=-30..21,y=-8..43,z=-13..34
		on x=-22..26,y=-27..20,z=-29..19
		off x=-48..-32,y=26..41,z=-47..-37
		on x=-12..35,y=6..50,z=-50..-2
		off x=-48..-32,y=-32..-16,z=-15..-5
		on x=-18..26,y=-33..15,z=-7..46
		off x=-40..-22,y=-38..-28,z=23..41
		on x=-16..35,y=-41..10,z=-47..6
		off x=-32..-23,y=11..30,z=-14..3
		on x=-49..-5,y=-3..45,z=-29..18
		off x=18..30,y=-20..-8,z=-3..13
		on x=-41..9,y=-7..43,z=-33..15
		on x=-54112..-39298,y=-85059..-49293,z=-27449..7877
		on x=967..23432,y=45373..81175,z=27513..53682
	" };

	#[test]
	fn parsing() {
		let steps = input_steps_from_str(INPUT).unwrap();
		assert_eq!(steps[2], Step { on: false, cuboid: Cuboid { min: [9; 3], max: [11; 3] } });
		assert!(input_steps_from_str("of x=1..2,y=1..2,z=1..2").is_err());
		assert!(input_steps_from_str("on x=1..2,z=1..2,y=1..2").is_err());
		assert!(input_steps_from_str("on x=2..1,y=1..2,z=1..2").is_err());
		assert!(matches!(input_steps_from_str(""), Err(parsing::StepsError::Empty)));
		assert_eq!(input_steps_from_str("on x=1..2,y=1..2,z=1..2\n\n").unwrap().len(), 1);
	}

	#[test_case(INPUT => (39, 39))]
	#[test_case("on x=-100..100,y=0..0,z=0..0\noff x=-10..10,y=0..0,z=0..0\n" => (80, 180))]
	#[test_case("on x=0..9,y=0..9,z=0..9\non x=5..14,y=5..14,z=5..14\n" => (1875, 1875))]
	#[test_case("on x=0..9,y=0..9,z=0..9\non x=5..14,y=5..14,z=5..14\noff x=0..14,y=0..14,z=0..0\n" => (1775, 1775))]
	fn part1and2_impl(input: &str) -> (i64, i64) {
		let steps = input_steps_from_str(input).unwrap();
		(super::part1_impl(&steps), super::part2_impl(&steps))
	}

	#[test]
	fn initialization_region() {
		let steps = input_steps_from_str(LARGER_INPUT).unwrap();
		assert_eq!(steps.len(), 22);
		assert_eq!(super::part1_impl(&steps), 590784);
		assert_eq!(super::part1_impl(&steps[..20]), 590784);
	}

	#[test]
	#[ignore = "requires the puzzle input"]
	fn real_input() {
		assert_eq!(super::part1().unwrap(), 588200);
	}
}


#[cfg(BENCHING)]
mod bench {
	extern crate test;

	#[bench]
	fn part2(b: &mut test::Bencher) {
		let steps = super::input_steps().unwrap();
		b.iter(|| super::part2_impl(&steps));
	}
}
