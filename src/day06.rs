// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Number of fish per timer value; a fish with timer 0 spawns a new one
/// with timer 8 and itself restarts at 6.
type Population = [u64; 9];

fn input_population_from_str(s: &str) -> Result<Population, parsing::TimersError> {
	parsing::population_from_str(s)
}

fn input_population() -> anyhow::Result<Population> {
	Ok(input_population_from_str(&crate::util::input(6)?)?)
}


fn population_after(mut population: Population, days: usize) -> u64 {
	for _ in 0..days {
		population.rotate_left(1);
		population[6] += population[8];
	}
	population.iter().sum()
}

pub(crate) fn part1() -> anyhow::Result<u64> {
	Ok(population_after(input_population()?, 80))
}

pub(crate) fn part2() -> anyhow::Result<u64> {
	Ok(population_after(input_population()?, 256))
}


mod parsing {
	use std::num::ParseIntError;
	use super::Population;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum TimersError {
		#[error("Invalid timer #{index}")]
		Timer { index: usize, source: ParseIntError },
		#[error("Timer #{index} out of range ({found})")]
		OutOfRange { index: usize, found: usize },
	}

	pub(super) fn population_from_str(s: &str) -> Result<Population, TimersError> {
		let mut population = [0; 9];
		for (i, timer) in s.trim().split(',').enumerate() {
			let timer: usize = timer.parse()
				.map_err(|e| TimersError::Timer { index: i + 1, source: e })?;
			*population.get_mut(timer)
				.ok_or(TimersError::OutOfRange { index: i + 1, found: timer })? += 1;
		}
		Ok(population)
	}
}


#[cfg(test)]
mod tests {
	use super::*;
	use test_case::test_case;

	const INPUT: &str = "3,4,3,1,2\n";

	#[test_case(0 => 5)]
	#[test_case(1 => 5)]
	#[test_case(2 => 6)]
	#[test_case(18 => 26)]
	#[test_case(80 => 5934)]
	#[test_case(256 => 26984457539)]
	fn population_after(days: usize) -> u64 {
		super::population_after(input_population_from_str(INPUT).unwrap(), days)
	}

	#[test]
	fn parsing() {
		assert_eq!(input_population_from_str(INPUT).unwrap(), [0, 1, 1, 2, 1, 0, 0, 0, 0]);
		assert!(matches!(input_population_from_str("3,9"),
			Err(parsing::TimersError::OutOfRange { index: 2, found: 9 })));
		assert!(input_population_from_str("3,,4").is_err());
	}

	#[test]
	#[ignore = "requires the puzzle input"]
	fn real_input() {
		assert_eq!(super::part1().unwrap(), 362639);
		assert_eq!(super::part2().unwrap(), 1639854996917);
	}
}
