// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::{HashMap, HashSet};


type Vector = [i32; 3];

fn sub(a: Vector, b: Vector) -> Vector { [a[0] - b[0], a[1] - b[1], a[2] - b[2]] }
fn add(a: Vector, b: Vector) -> Vector { [a[0] + b[0], a[1] + b[1], a[2] + b[2]] }

/// Beacons coinciding in an overlap of two scanners.
const MIN_OVERLAP: usize = 12;

/// A signed permutation of the axes with determinant 1.
#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy)]
struct Rotation {
	axes: [usize; 3],
	signs: [i32; 3],
}

impl Rotation {
	/// All 24 rotations, the identity first.
	fn all() -> impl Iterator<Item = Rotation> {
		use itertools::Itertools as _;

		(0..3).permutations(3)
			.cartesian_product(0..8)
			.filter_map(|(axes, flips)| {
				let axes = [axes[0], axes[1], axes[2]];
				let signs = [0, 1, 2].map(|i| if flips >> i & 1 == 1 { -1 } else { 1 });
				let inversions = (0..3).tuple_combinations().filter(|&(i, j)| axes[i] > axes[j]).count();
				let parity = if inversions % 2 == 0 { 1 } else { -1 };
				(parity * signs.iter().product::<i32>() == 1).then_some(Rotation { axes, signs })
			})
	}

	fn apply(&self, v: Vector) -> Vector {
		std::array::from_fn(|i| self.signs[i] * v[self.axes[i]])
	}
}

struct Scanner {
	/// Relative to the scanner, in its own orientation.
	beacons: Vec<Vector>,
	/// Sorted squared distances between all pairs of beacons,
	/// which do not depend on position or orientation.
	fingerprint: Vec<i64>,
}

impl Scanner {
	fn new(beacons: Vec<Vector>) -> Scanner {
		use itertools::Itertools as _;

		let mut fingerprint = beacons.iter()
			.tuple_combinations()
			.map(|(&a, &b)| sub(a, b).iter().map(|&d| d as i64 * d as i64).sum())
			.collect::<Vec<_>>();
		fingerprint.sort_unstable();
		Scanner { beacons, fingerprint }
	}

	/// Counts the distances both fingerprints contain, with multiplicity.
	fn shared_distances(&self, other: &Scanner) -> usize {
		let (mut a, mut b) = (self.fingerprint.iter().peekable(), other.fingerprint.iter().peekable());
		let mut shared = 0;
		while let (Some(x), Some(y)) = (a.peek(), b.peek()) {
			match x.cmp(y) {
				std::cmp::Ordering::Less => { a.next(); }
				std::cmp::Ordering::Greater => { b.next(); }
				std::cmp::Ordering::Equal => { shared += 1; a.next(); b.next(); }
			}
		}
		shared
	}

	/// Finds the rotation and position under which at least [`MIN_OVERLAP`]
	/// of the scanner's beacons coincide with the `placed` ones, returning
	/// the scanner's position and its beacons in that frame.
	fn place(&self, placed: &[Vector], rotations: &[Rotation]) -> Option<(Vector, Vec<Vector>)> {
		use rayon::prelude::{IntoParallelRefIterator as _, ParallelIterator as _};

		rotations.par_iter().find_map_any(|rotation| {
			let rotated = self.beacons.iter().map(|&b| rotation.apply(b)).collect::<Vec<_>>();
			let mut offsets = HashMap::new();
			for &a in placed {
				for &b in &rotated {
					let count = offsets.entry(sub(a, b)).or_insert(0);
					*count += 1;
					if *count >= MIN_OVERLAP {
						let position = sub(a, b);
						return Some((position, rotated.iter().map(|&b| add(b, position)).collect()))
					}
				}
			}
			None
		})
	}
}

struct Map {
	beacons: HashSet<Vector>,
	scanners: Vec<Vector>,
}

/// Places all scanners relative to the first one, trying pairs only
/// when their fingerprints share the distances of a full overlap.
fn map(scanners: &[Scanner]) -> Option<Map> {
	let min_shared = MIN_OVERLAP * (MIN_OVERLAP - 1) / 2;
	let rotations = Rotation::all().collect::<Vec<_>>();

	let mut placed: Vec<Option<(Vector, Vec<Vector>)>> = vec![None; scanners.len()];
	*placed.first_mut()? = Some(([0; 3], scanners[0].beacons.clone()));
	let mut queue = vec![0];

	while let Some(i) = queue.pop() {
		for j in 0..scanners.len() {
			if placed[j].is_some() || scanners[i].shared_distances(&scanners[j]) < min_shared { continue }
			let Some((_, beacons)) = &placed[i] else { continue };
			if let Some(placement) = scanners[j].place(beacons, &rotations) {
				#[cfg(LOGGING)]
				println!("Scanner {j} at {:?} via scanner {i}", placement.0);

				placed[j] = Some(placement);
				queue.push(j);
			}
		}
	}

	let placed = placed.into_iter().collect::<Option<Vec<_>>>()?;
	Some(Map {
		beacons: placed.iter().flat_map(|(_, beacons)| beacons.iter().copied()).collect(),
		scanners: placed.into_iter().map(|(position, _)| position).collect(),
	})
}


fn input_scanners_from_str(s: &str) -> Result<Vec<Scanner>, parsing::ScannersError> {
	parsing::scanners_from_str(s)
}

fn input_map() -> anyhow::Result<Map> {
	let scanners = input_scanners_from_str(&crate::util::input(19)?)?;
	map(&scanners).ok_or_else(|| anyhow::anyhow!("Not all scanners overlap"))
}


fn part1_impl(input_map: &Map) -> usize {
	input_map.beacons.len()
}

pub(crate) fn part1() -> anyhow::Result<usize> {
	Ok(part1_impl(&input_map()?))
}


fn part2_impl(input_map: &Map) -> i32 {
	use itertools::Itertools as _;

	input_map.scanners.iter()
		.tuple_combinations()
		.map(|(&a, &b)| sub(a, b).iter().map(|d| d.abs()).sum())
		.max()
		.unwrap_or(0)
}

pub(crate) fn part2() -> anyhow::Result<i32> {
	Ok(part2_impl(&input_map()?))
}


mod parsing {
	use std::num::ParseIntError;
	use super::{Scanner, Vector};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum ScannersError {
		#[error("No scanners")]
		Empty,
		#[error("Invalid scanner header on line {line}")]
		Header { line: usize },
		#[error("Expected 3 coordinates on line {line}")]
		CoordinateCount { line: usize },
		#[error("Invalid coordinate on line {line}")]
		Coordinate { line: usize, source: ParseIntError },
	}

	pub(super) fn scanners_from_str(s: &str) -> Result<Vec<Scanner>, ScannersError> {
		use ScannersError as E;

		let mut scanners = vec![];
		let mut beacons: Option<Vec<Vector>> = None;
		for (l, line) in s.lines().enumerate() {
			if line.is_empty() { continue }
			if line.starts_with("---") {
				if !(line.starts_with("--- scanner ") && line.ends_with(" ---")) {
					return Err(E::Header { line: l + 1 })
				}
				scanners.extend(beacons.replace(vec![]).map(Scanner::new));
				continue
			}
			let beacons = beacons.as_mut().ok_or(E::Header { line: l + 1 })?;
			let coords = line.split(',')
				.map(|c| c.parse().map_err(|e| E::Coordinate { line: l + 1, source: e }))
				.collect::<Result<Vec<i32>, _>>()?;
			beacons.push(coords.try_into().map_err(|_| E::CoordinateCount { line: l + 1 })?);
		}
		scanners.extend(beacons.map(Scanner::new));

		if scanners.is_empty() { return Err(E::Empty) }
		Ok(scanners)
	}
}
