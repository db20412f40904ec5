// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


/// Starting positions on the board of 1 through 10, the first player's first.
type Positions = [u8; 2];

fn advance(position: u8, roll: u32) -> u8 {
	((position as u32 + roll - 1) % 10 + 1) as u8
}


fn input_positions_from_str(s: &str) -> Result<Positions, parsing::PositionsError> {
	parsing::positions_from_str(s)
}

fn input_positions() -> anyhow::Result<Positions> {
	Ok(input_positions_from_str(&crate::util::input(21)?)?)
}


fn part1_impl(input_positions: Positions) -> u32 {
	let mut positions = input_positions;
	let mut scores = [0_u32; 2];
	let mut rolls = 0;
	let mut player = 0;
	loop {
		let roll = (0..3).map(|k| (rolls + k) % 100 + 1).sum();
		rolls += 3;
		positions[player] = advance(positions[player], roll);
		scores[player] += positions[player] as u32;
		if scores[player] >= 1000 { return scores[1 - player] * rolls }
		player = 1 - player;
	}
}

pub(crate) fn part1() -> anyhow::Result<u32> {
	Ok(part1_impl(input_positions()?))
}


/// Sums of three rolls of the three-sided die with the number of universes
/// rolling them.
const DIRAC_ROLLS: [(u32, u64); 7] = [(3, 1), (4, 3), (5, 6), (6, 7), (7, 6), (8, 3), (9, 1)];

type Cache = HashMap<(Positions, [u8; 2]), [u64; 2]>;

/// Counts the universes in which each player wins, with the first to move.
fn dirac_wins(positions: Positions, scores: [u8; 2], cache: &mut Cache) -> [u64; 2] {
	if let Some(&wins) = cache.get(&(positions, scores)) { return wins }
	let mut wins = [0; 2];
	for (roll, universes) in DIRAC_ROLLS {
		let position = advance(positions[0], roll);
		let score = scores[0] + position;
		if score >= 21 {
			wins[0] += universes;
		} else {
			let [other, this] = dirac_wins([positions[1], position], [scores[1], score], cache);
			wins[0] += universes * this;
			wins[1] += universes * other;
		}
	}
	cache.insert((positions, scores), wins);
	wins
}

fn part2_impl(input_positions: Positions) -> u64 {
	let wins = dirac_wins(input_positions, [0; 2], &mut Cache::new());
	wins[0].max(wins[1])
}

pub(crate) fn part2() -> anyhow::Result<u64> {
	Ok(part2_impl(input_positions()?))
}


mod parsing {
	use std::num::ParseIntError;
	use super::Positions;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum PositionsError {
		#[error("Expected two players")]
		PlayerCount,
		#[error("Invalid format on line {line}")]
		Format { line: usize },
		#[error("Invalid position on line {line}")]
		Position { line: usize, source: ParseIntError },
		#[error("Position {found} on line {line} is not on the board")]
		OffBoard { line: usize, found: u8 },
	}

	pub(super) fn positions_from_str(s: &str) -> Result<Positions, PositionsError> {
		use PositionsError as E;

		let mut positions = [0; 2];
		let mut lines = s.lines().filter(|line| !line.is_empty()).enumerate();
		for (player, position) in positions.iter_mut().enumerate() {
			let (l, line) = lines.next().ok_or(E::PlayerCount)?;
			let found = line.strip_prefix(&format!("Player {} starting position: ", player + 1))
				.ok_or(E::Format { line: l + 1 })?
				.parse()
				.map_err(|e| E::Position { line: l + 1, source: e })?;
			if !(1..=10).contains(&found) { return Err(E::OffBoard { line: l + 1, found }) }
			*position = found;
		}
		if lines.next().is_some() { return Err(E::PlayerCount) }
		Ok(positions)
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		Player 1 starting position: 4
		Player 2 starting position: 8
	" };
	let positions = input_positions_from_str(INPUT).unwrap();
	assert_eq!(positions, [4, 8]);
	assert_eq!(part1_impl(positions), 739785);
	assert_eq!(dirac_wins(positions, [0; 2], &mut Cache::new()), [444356092776315, 341960390180808]);
	assert_eq!(part2_impl(positions), 444356092776315);
	assert!(input_positions_from_str("Player 1 starting position: 4\n").is_err());
	assert!(input_positions_from_str("Player 1 starting position: 11\nPlayer 2 starting position: 8\n").is_err());
}

#[test]
#[ignore = "requires the puzzle input"]
fn real_input() {
	assert_eq!(part1().unwrap(), 428736);
}
