// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


type Pair = [u8; 2];

struct Manual {
	template: Vec<u8>,
	rules: HashMap<Pair, u8>,
}

impl Manual {
	/// Inserts elements between all pairs for `steps` steps. Only
	/// feasible for few steps, as the polymer about doubles every step.
	#[cfg(test)]
	fn expand(&self, steps: usize) -> Vec<u8> {
		use itertools::Itertools as _;

		let mut polymer = self.template.clone();
		for _ in 0..steps {
			let Some(&last) = polymer.last() else { break };
			let next = polymer.iter()
				.tuple_windows()
				.flat_map(|(&a, &b)| std::iter::once(a).chain(self.rules.get(&[a, b]).copied()))
				.chain(std::iter::once(last))
				.collect();
			polymer = next;
		}
		polymer
	}

	fn pair_counts_after(&self, steps: usize) -> HashMap<Pair, u64> {
		let mut counts = HashMap::new();
		for pair in self.template.windows(2) {
			*counts.entry([pair[0], pair[1]]).or_insert(0) += 1;
		}
		for _ in 0..steps {
			let mut next = HashMap::with_capacity(counts.len());
			for ([a, b], n) in counts {
				match self.rules.get(&[a, b]) {
					Some(&c) => {
						*next.entry([a, c]).or_insert(0) += n;
						*next.entry([c, b]).or_insert(0) += n;
					}
					None => *next.entry([a, b]).or_insert(0) += n,
				}
			}
			counts = next;
		}
		counts
	}

	/// Counts every pair's second element, plus the first
	/// element of the polymer, which never changes.
	fn element_counts_after(&self, steps: usize) -> HashMap<u8, u64> {
		let mut counts = HashMap::new();
		if let Some(&first) = self.template.first() { counts.insert(first, 1); }
		for ([_, b], n) in self.pair_counts_after(steps) {
			*counts.entry(b).or_insert(0) += n;
		}
		counts
	}
}


fn input_manual_from_str(s: &str) -> Result<Manual, parsing::ManualError> {
	s.parse()
}

fn input_manual() -> anyhow::Result<Manual> {
	Ok(input_manual_from_str(&crate::util::input(14)?)?)
}


fn part1and2_impl<const STEPS: usize>(input_manual: &Manual) -> u64 {
	use itertools::{Itertools as _, MinMaxResult::*};

	match input_manual.element_counts_after(STEPS).into_values().minmax() {
		MinMax(min, max) => max - min,
		NoElements | OneElement(_) => 0,
	}
}

pub(crate) fn part1() -> anyhow::Result<u64> {
	Ok(part1and2_impl::<10>(&input_manual()?))
}

pub(crate) fn part2() -> anyhow::Result<u64> {
	Ok(part1and2_impl::<40>(&input_manual()?))
}


mod parsing {
	use std::str::FromStr;
	use super::Manual;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum ManualError {
		#[error("Empty template")]
		EmptyTemplate,
		#[error("Missing blank line after the template")]
		NoBlankLine,
		#[error("Invalid rule on line {line}")]
		InvalidRule { line: usize },
		#[error("Invalid element {found:?} on line {line}")]
		InvalidElement { line: usize, found: char },
	}

	impl FromStr for Manual {
		type Err = ManualError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use ManualError as E;
			let s = s.trim_end_matches('\n');

			let element = |line: usize, b: u8| if b.is_ascii_uppercase() { Ok(b) }
				else { Err(E::InvalidElement { line, found: b as char }) };

			let mut lines = s.lines().enumerate();
			let template = lines.next().map(|(_, t)| t).filter(|t| !t.is_empty())
				.ok_or(E::EmptyTemplate)?
				.bytes()
				.map(|b| element(1, b))
				.collect::<Result<_, _>>()?;
			if !matches!(lines.next(), Some((_, ""))) { return Err(E::NoBlankLine) }

			let rules = lines
				.map(|(l, line)| -> Result<_, E> { match line.as_bytes() {
					&[a, b, b' ', b'-', b'>', b' ', c] =>
						Ok(([element(l + 1, a)?, element(l + 1, b)?], element(l + 1, c)?)),
					_ => Err(E::InvalidRule { line: l + 1 }),
				} })
				.collect::<Result<_, _>>()?;

			Ok(Manual { template, rules })
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		NNCB

		CH -> B
		HH -> N
		CB -> H
		NH -> C
		HB -> C
		HC -> B
		HN -> C
		NN -> C
		BH -> H
		NC -> B
		NB -> B
		BN -> B
		BB -> N
		BC -> B
		CC -> N
		CN -> C
	" };

	#[test]
	fn expand() {
		let manual = input_manual_from_str(INPUT).unwrap();
		let polymers = [
			"NNCB",
			"NCNBCHB",
			"NBCCNBBBCBHCB",
			"NBBBCNCCNBBNBNBBCHBHHBCHB",
			"NBBNBNBBCCNBCNCCNBBNBBNBBBNBBNBBCBHCBHHNHCBBCBHCB",
		];
		for (steps, polymer) in polymers.into_iter().enumerate() {
			assert_eq!(manual.expand(steps), polymer.as_bytes());
		}
		assert_eq!(manual.expand(10).len(), 3073);
	}

	#[test]
	fn element_counts_after() {
		let manual = input_manual_from_str(INPUT).unwrap();
		let counts = manual.element_counts_after(10);
		assert_eq!([b'B', b'C', b'H', b'N'].map(|e| counts[&e]), [1749, 298, 161, 865]);

		let expanded = manual.expand(5);
		let counts = manual.element_counts_after(5);
		for (element, n) in counts {
			assert_eq!(expanded.iter().filter(|&&e| e == element).count() as u64, n);
		}
	}

	#[test]
	fn part1and2_impl() {
		let manual = input_manual_from_str(INPUT).unwrap();
		assert_eq!(super::part1and2_impl::<10>(&manual), 1588);
		assert_eq!(super::part1and2_impl::<40>(&manual), 2188189693529);
	}

	#[test]
	fn parsing() {
		assert!(matches!(input_manual_from_str(""), Err(parsing::ManualError::EmptyTemplate)));
		assert!(matches!(input_manual_from_str("NN\nNN -> C\n"), Err(parsing::ManualError::NoBlankLine)));
		assert!(matches!(input_manual_from_str("NN\n\nNN => C\n"),
			Err(parsing::ManualError::InvalidRule { line: 3 })));
		assert!(matches!(input_manual_from_str("NN\n\nNN -> c\n"),
			Err(parsing::ManualError::InvalidElement { line: 3, found: 'c' })));
	}

	#[test]
	#[ignore = "requires the puzzle input"]
	fn real_input() {
		assert_eq!(super::part1().unwrap(), 2010);
		assert_eq!(super::part2().unwrap(), 2437698971143);
	}
}
