// Copyright (c) 2022 Bastiaan Marinus van de Weerd


fn input_depths_from_str(s: &str) -> Result<Vec<u32>, parsing::DepthsError> {
	parsing::depths_from_str(s).collect()
}

fn input_depths() -> anyhow::Result<Vec<u32>> {
	Ok(input_depths_from_str(&crate::util::input(1)?)?)
}


/// Counts the depths deeper than the one `WINDOW` measurements earlier,
/// which is what comparing consecutive sums of `WINDOW` depths amounts to.
fn part1and2_impl<const WINDOW: usize>(input_depths: &[u32]) -> usize {
	input_depths.iter()
		.zip(&input_depths[WINDOW.min(input_depths.len())..])
		.filter(|(earlier, later)| later > earlier)
		.count()
}

pub(crate) fn part1() -> anyhow::Result<usize> {
	Ok(part1and2_impl::<1>(&input_depths()?))
}

pub(crate) fn part2() -> anyhow::Result<usize> {
	Ok(part1and2_impl::<3>(&input_depths()?))
}


mod parsing {
	use std::num::ParseIntError;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum DepthsError {
		#[error("No depths")]
		Empty,
		#[error("Invalid depth on line {line}")]
		Depth { line: usize, source: ParseIntError },
	}

	pub(super) fn depths_from_str(s: &str) -> impl Iterator<Item = Result<u32, DepthsError>> + '_ {
		use {std::iter::once, either::Either::*};
		let s = s.trim_end_matches('\n');
		if s.is_empty() { return Left(once(Err(DepthsError::Empty))) }
		Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| DepthsError::Depth { line: l + 1, source: e })))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		199
		200
		208
		210
		200
		207
		240
		269
		260
		263
	" };
	let depths = input_depths_from_str(INPUT).unwrap();
	assert_eq!(part1and2_impl::<1>(&depths), 7);
	assert_eq!(part1and2_impl::<3>(&depths), 5);
	assert_eq!(part1and2_impl::<3>(&depths[..2]), 0);
	assert!(matches!(input_depths_from_str("1\nx\n"), Err(parsing::DepthsError::Depth { line: 2, .. })));
	assert!(matches!(input_depths_from_str(""), Err(parsing::DepthsError::Empty)));
	assert!(matches!(input_depths_from_str("\n\n"), Err(parsing::DepthsError::Empty)));
	assert_eq!(input_depths_from_str("1\n2\n\n").unwrap(), [1, 2]);
}
