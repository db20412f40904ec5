// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
enum Amphipod { Amber, Bronze, Copper, Desert }

impl Amphipod {
	const ALL: [Amphipod; 4] = [Amphipod::Amber, Amphipod::Bronze, Amphipod::Copper, Amphipod::Desert];

	fn room(self) -> usize {
		self as usize
	}

	fn energy(self) -> u32 {
		10_u32.pow(self as u32)
	}
}

const HALLWAY_LEN: usize = 11;

/// Hallway position in front of a room.
fn door(room: usize) -> usize {
	2 + 2 * room
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct Burrow<const DEPTH: usize> {
	hallway: [Option<Amphipod>; HALLWAY_LEN],
	/// Front to back.
	rooms: [[Option<Amphipod>; DEPTH]; 4],
}

impl<const DEPTH: usize> Burrow<DEPTH> {
	fn is_organized(&self) -> bool {
		self.rooms.iter().enumerate()
			.all(|(r, room)| room.iter().all(|a| a.map(Amphipod::room) == Some(r)))
	}

	/// Whether the hallway is empty past `from` up to and including `to`.
	fn hallway_clear(&self, from: usize, to: usize) -> bool {
		let range = if from < to { from + 1..=to } else { to..=from - 1 };
		self.hallway[range].iter().all(Option::is_none)
	}

	/// Returns the burrows reachable in one move, with the energy it takes.
	fn moves(&self) -> Vec<(u32, Self)> {
		let mut moves = vec![];

		// Into the back of their own room, if it has no strangers.
		for (h, a) in self.hallway.iter().enumerate().filter_map(|(h, a)| a.map(|a| (h, a))) {
			let r = a.room();
			let room = &self.rooms[r];
			if room.iter().any(|o| o.map_or(false, |o| o != a)) { continue }
			if !self.hallway_clear(h, door(r)) { continue }
			let Some(depth) = room.iter().rposition(Option::is_none) else { continue };
			if !room[..depth].iter().all(Option::is_none) { continue }
			let mut next = *self;
			next.hallway[h] = None;
			next.rooms[r][depth] = Some(a);
			moves.push(((h.abs_diff(door(r)) + depth + 1) as u32 * a.energy(), next));
		}

		// Out of rooms that still have strangers, onto the hallway but not in front of a room.
		for r in 0..4 {
			let Some((depth, a)) = self.rooms[r].iter().enumerate()
				.find_map(|(d, o)| o.map(|a| (d, a))) else { continue };
			if self.rooms[r][depth..].iter().all(|o| o.map(Amphipod::room) == Some(r)) { continue }
			for h in (0..HALLWAY_LEN).filter(|&h| h < 2 || h > door(3) || h % 2 == 1) {
				if !self.hallway_clear(door(r), h) { continue }
				let mut next = *self;
				next.rooms[r][depth] = None;
				next.hallway[h] = Some(a);
				moves.push(((depth + 1 + h.abs_diff(door(r))) as u32 * a.energy(), next));
			}
		}

		moves
	}

	/// Dijkstra over burrow states.
	fn least_energy(&self) -> Option<u32> {
		use std::{cmp::Ordering, collections::{BinaryHeap, HashMap}};

		#[derive(PartialEq, Eq)]
		struct State<const DEPTH: usize> {
			energy: u32,
			burrow: Burrow<DEPTH>,
		}

		impl<const DEPTH: usize> PartialOrd for State<DEPTH> {
			fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
				Some(self.cmp(other))
			}
		}

		impl<const DEPTH: usize> Ord for State<DEPTH> {
			fn cmp(&self, other: &Self) -> Ordering {
				self.energy.cmp(&other.energy).reverse()
					.then_with(|| self.burrow.cmp(&other.burrow))
			}
		}

		let mut heap = BinaryHeap::from([State { energy: 0, burrow: *self }]);
		let mut least = HashMap::from([(*self, 0)]);

		while let Some(State { energy, burrow }) = heap.pop() {
			if burrow.is_organized() { return Some(energy) }
			if least.get(&burrow).map_or(false, |&e| e < energy) { continue }

			#[cfg(LOGGING)]
			println!("{energy}:\n{burrow}");

			for (cost, next) in burrow.moves() {
				let energy = energy + cost;
				if least.get(&next).map_or(true, |&e| energy < e) {
					least.insert(next, energy);
					heap.push(State { energy, burrow: next });
				}
			}
		}

		None
	}
}

impl Burrow<2> {
	/// Inserts the two folded rows of the diagram between the front and back.
	fn unfold(&self) -> Burrow<4> {
		use Amphipod::*;
		const FOLDED: [[Amphipod; 4]; 2] = [[Desert, Copper, Bronze, Amber], [Desert, Bronze, Amber, Copper]];
		Burrow {
			hallway: self.hallway,
			rooms: std::array::from_fn(|r| [
				self.rooms[r][0],
				Some(FOLDED[0][r]),
				Some(FOLDED[1][r]),
				self.rooms[r][1],
			]),
		}
	}
}

impl<const DEPTH: usize> std::fmt::Display for Burrow<DEPTH> {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		let cell = |a: &Option<Amphipod>| a.map_or('.', |a| (b'A' + a as u8) as char);
		writeln!(f, "#############")?;
		writeln!(f, "#{}#", self.hallway.iter().map(cell).collect::<String>())?;
		for depth in 0..DEPTH {
			let [a, b, c, d] = self.rooms.map(|room| cell(&room[depth]));
			if depth == 0 {
				writeln!(f, "###{a}#{b}#{c}#{d}###")?;
			} else {
				writeln!(f, "  #{a}#{b}#{c}#{d}#")?;
			}
		}
		write!(f, "  #########")
	}
}


fn input_burrow_from_str(s: &str) -> Result<Burrow<2>, parsing::BurrowError> {
	s.parse()
}

fn input_burrow() -> anyhow::Result<Burrow<2>> {
	Ok(input_burrow_from_str(&crate::util::input(23)?)?)
}


fn part1_impl(input_burrow: &Burrow<2>) -> Option<u32> {
	input_burrow.least_energy()
}

pub(crate) fn part1() -> anyhow::Result<u32> {
	part1_impl(&input_burrow()?)
		.ok_or_else(|| anyhow::anyhow!("Amphipods cannot be organized"))
}


fn part2_impl(input_burrow: &Burrow<2>) -> Option<u32> {
	input_burrow.unfold().least_energy()
}

pub(crate) fn part2() -> anyhow::Result<u32> {
	part2_impl(&input_burrow()?)
		.ok_or_else(|| anyhow::anyhow!("Amphipods cannot be organized"))
}


mod parsing {
	use std::str::FromStr;
	use super::{door, Amphipod, Burrow, HALLWAY_LEN};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum BurrowError {
		#[error("Diagram ends early")]
		Truncated,
		#[error("Invalid byte {found:?} at line {line}, column {column}")]
		InvalidByte { line: usize, column: usize, found: char },
		#[error("Rooms not {depth} deep at line {line}")]
		RoomDepth { line: usize, depth: usize },
		#[error("Amphipod in front of a room at line {line}, column {column}")]
		Doorway { line: usize, column: usize },
		#[error("Room {room} has an empty space behind an amphipod")]
		RoomGap { room: usize },
		#[error("Expected {expected} amphipods of type {amphipod:?}, found {found}")]
		Count { amphipod: Amphipod, expected: usize, found: usize },
	}

	fn cell(line: &str, l: usize, column: usize) -> Result<Option<Amphipod>, BurrowError> {
		match line.as_bytes().get(column) {
			Some(b'.') => Ok(None),
			Some(&b @ b'A'..=b'D') => Ok(Some(Amphipod::ALL[(b - b'A') as usize])),
			Some(&found) => Err(BurrowError::InvalidByte { line: l + 1, column: column + 1, found: found as char }),
			None => Err(BurrowError::Truncated),
		}
	}

	impl<const DEPTH: usize> FromStr for Burrow<DEPTH> {
		type Err = BurrowError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use BurrowError as E;

			let mut burrow = Burrow { hallway: [None; HALLWAY_LEN], rooms: [[None; DEPTH]; 4] };
			let mut lines = s.lines().enumerate().skip(1);

			let (l, hallway) = lines.next().ok_or(E::Truncated)?;
			for (x, a) in burrow.hallway.iter_mut().enumerate() {
				*a = cell(hallway, l, x + 1)?;
				if a.is_some() && (0..4).any(|r| door(r) == x) {
					return Err(E::Doorway { line: l + 1, column: x + 2 })
				}
			}
			for depth in 0..DEPTH {
				let (l, row) = lines.next().ok_or(E::Truncated)?;
				if row.trim() == "#########" { return Err(E::RoomDepth { line: l + 1, depth: DEPTH }) }
				for (r, room) in burrow.rooms.iter_mut().enumerate() {
					room[depth] = cell(row, l, door(r) + 1)?;
				}
			}
			match lines.next() {
				Some((_, line)) if line.trim() == "#########" => (),
				Some((l, _)) => return Err(E::RoomDepth { line: l + 1, depth: DEPTH }),
				None => return Err(E::Truncated),
			}
			for (r, room) in burrow.rooms.iter().enumerate() {
				if room.windows(2).any(|w| w[0].is_some() && w[1].is_none()) {
					return Err(E::RoomGap { room: r + 1 })
				}
			}

			for amphipod in Amphipod::ALL {
				let found = burrow.hallway.iter().chain(burrow.rooms.iter().flatten())
					.filter(|&&a| a == Some(amphipod))
					.count();
				if found != DEPTH { return Err(E::Count { amphipod, expected: DEPTH, found }) }
			}

			Ok(burrow)
		}
	}
}




#[cfg(BENCHING)]
mod bench {
	extern crate test;

	#[bench]
	fn part2(b: &mut test::Bencher) {
		let burrow = super::input_burrow().unwrap();
		b.iter(|| super::part2_impl(&burrow));
	}
}
