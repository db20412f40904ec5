// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, PartialEq, Eq)]
struct Regular {
	value: u32,
	/// Number of pairs the regular number is nested in.
	depth: u8,
}

/// A snailfish number as its regular numbers from left to right.
#[derive(Clone, PartialEq, Eq)]
struct Number(Vec<Regular>);

impl Number {
	/// Folds adjacent elements of equal depth, which are
	/// exactly the pairs, from the innermost pairs out.
	fn fold_pairs<T>(&self, regular: impl Fn(u32) -> T, pair: impl Fn(T, T) -> T) -> Option<T> {
		let mut stack: Vec<(T, u8)> = Vec::with_capacity(self.0.len());
		for r in &self.0 {
			let (mut item, mut depth) = (regular(r.value), r.depth);
			while stack.last().map_or(false, |(_, d)| *d == depth) {
				if depth == 0 { return None }
				let (left, _) = stack.pop()?;
				item = pair(left, item);
				depth -= 1;
			}
			stack.push((item, depth));
		}
		match (stack.pop(), stack.is_empty()) {
			(Some((item, 0)), true) => Some(item),
			_ => None,
		}
	}

	fn magnitude(&self) -> u64 {
		self.fold_pairs(|value| value as u64, |left, right| 3 * left + 2 * right).unwrap_or(0)
	}

	/// Explodes the leftmost pair nested inside four pairs, if any.
	fn explode(&mut self) -> bool {
		let regulars = &mut self.0;
		let Some(i) = regulars.windows(2)
			.position(|w| w[0].depth > 4 && w[0].depth == w[1].depth) else { return false };
		let [left, right] = [regulars[i], regulars[i + 1]];
		if let Some(prev) = i.checked_sub(1) { regulars[prev].value += left.value }
		if let Some(next) = regulars.get_mut(i + 2) { next.value += right.value }
		regulars.splice(i..=i + 1, [Regular { value: 0, depth: left.depth - 1 }]);
		true
	}

	/// Splits the leftmost regular number of 10 or more, if any.
	fn split(&mut self) -> bool {
		let Some(i) = self.0.iter().position(|r| r.value >= 10) else { return false };
		let Regular { value, depth } = self.0[i];
		self.0.splice(i..=i, [
			Regular { value: value / 2, depth: depth + 1 },
			Regular { value: (value + 1) / 2, depth: depth + 1 },
		]);
		true
	}

	fn reduce(&mut self) {
		while self.explode() || self.split() {}
	}
}

impl std::ops::Add<&Number> for Number {
	type Output = Number;
	fn add(mut self, rhs: &Number) -> Number {
		self.0.extend_from_slice(&rhs.0);
		for regular in &mut self.0 { regular.depth += 1 }
		self.reduce();
		self
	}
}

impl std::fmt::Display for Number {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		let s = self.fold_pairs(|value| value.to_string(), |left, right| format!("[{left},{right}]"))
			.ok_or(std::fmt::Error)?;
		f.write_str(&s)
	}
}

impl std::fmt::Debug for Number {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		std::fmt::Display::fmt(self, f)
	}
}


fn input_numbers_from_str(s: &str) -> Result<Vec<Number>, parsing::NumbersError> {
	parsing::numbers_from_str(s).collect()
}

fn input_numbers() -> anyhow::Result<Vec<Number>> {
	Ok(input_numbers_from_str(&crate::util::input(18)?)?)
}


fn part1_impl(input_numbers: &[Number]) -> u64 {
	let Some((first, rest)) = input_numbers.split_first() else { return 0 };
	rest.iter().fold(first.clone(), |sum, number| sum + number).magnitude()
}

pub(crate) fn part1() -> anyhow::Result<u64> {
	Ok(part1_impl(&input_numbers()?))
}


fn part2_impl(input_numbers: &[Number]) -> u64 {
	use {itertools::Itertools as _, rayon::iter::{ParallelBridge as _, ParallelIterator as _}};

	input_numbers.iter()
		.permutations(2)
		.par_bridge()
		.map(|pair| (pair[0].clone() + pair[1]).magnitude())
		.max()
		.unwrap_or(0)
}

pub(crate) fn part2() -> anyhow::Result<u64> {
	Ok(part2_impl(&input_numbers()?))
}


mod parsing {
	use std::str::FromStr;
	use super::{Number, Regular};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum NumberError {
		#[error("Invalid byte {found:?} at column {column}")]
		InvalidByte { column: usize, found: char },
		#[error("Unbalanced bracket at column {column}")]
		Unbalanced { column: usize },
		#[error("Not a pair of pairs or regular numbers")]
		Malformed,
	}

	impl FromStr for Number {
		type Err = NumberError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use NumberError as E;

			let mut regulars: Vec<Regular> = vec![];
			let mut depth = 0_u8;
			let mut in_regular = false;
			for (c, b) in s.bytes().enumerate() {
				let unbalanced = E::Unbalanced { column: c + 1 };
				match b {
					b'[' => depth = depth.checked_add(1).ok_or(unbalanced)?,
					b']' => depth = depth.checked_sub(1).ok_or(unbalanced)?,
					b',' => (),
					b'0'..=b'9' => {
						let digit = (b - b'0') as u32;
						match regulars.last_mut() {
							Some(last) if in_regular => last.value = last.value * 10 + digit,
							_ => regulars.push(Regular { value: digit, depth }),
						}
					}
					found => return Err(E::InvalidByte { column: c + 1, found: found as char }),
				}
				in_regular = b.is_ascii_digit();
			}

			let number = Number(regulars);
			if depth != 0 || number.fold_pairs(|_| (), |_, _| ()).is_none() { return Err(E::Malformed) }
			Ok(number)
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum NumbersError {
		#[error("No snailfish numbers")]
		Empty,
		#[error("Invalid snailfish number on line {line}")]
		Number { line: usize, source: NumberError },
	}

	pub(super) fn numbers_from_str(s: &str) -> impl Iterator<Item = Result<Number, NumbersError>> + '_ {
		use {std::iter::once, either::Either::*};
		let s = s.trim_end_matches('\n');
		if s.is_empty() { return Left(once(Err(NumbersError::Empty))) }
		Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| NumbersError::Number { line: l + 1, source: e })))
	}
}


#[cfg(test)]
mod tests {
	use super::*;
	use test_case::test_case;

	const INPUT: &str = indoc::indoc! { "
		[[[0,[5,8]],[[1,7],[9,6]]],[[4,[1,2]],[[1,4],2]]]
		[[[5,[2,8]],4],[5,[[9,9],0]]]
		[6,[[[6,2],[5,6]],[[7,6],[4,7]]]]
		[[[6,[0,7]],[0,9]],[4,[9,[9,0]]]]
		[[[7,[6,4]],[3,[1,3]]],[[[5,5],1],9]]
		[[6,[[7,3],[3,2]]],[[[3,8],[5,7]],4]]
		[[[[5,4],[7,7]],8],[[8,3],8]]
		[[9,3],[[9,9],[6,[4,9]]]]
		[[2,[[7,7],7]],[[5,8],[[9,3],[0,2]]]]
		[[[[5,2],5],[8,[3,7]]],[[5,[7,5]],[4,4]]]
	" };

	fn number(s: &str) -> Number {
		s.parse().unwrap()
	}

	#[test_case("[[[[[9,8],1],2],3],4]" => "[[[[0,9],2],3],4]")]
	#[test_case("[7,[6,[5,[4,[3,2]]]]]" => "[7,[6,[5,[7,0]]]]")]
	#[test_case("[[6,[5,[4,[3,2]]]],1]" => "[[6,[5,[7,0]]],3]")]
	#[test_case("[[3,[2,[1,[7,3]]]],[6,[5,[4,[3,2]]]]]" => "[[3,[2,[8,0]]],[9,[5,[4,[3,2]]]]]")]
	fn explode(input: &str) -> String {
		let mut number = number(input);
		assert!(number.explode());
		number.to_string()
	}

	#[test_case("[10,1]" => Some("[[5,5],1]".to_owned()))]
	#[test_case("[3,11]" => Some("[3,[5,6]]".to_owned()))]
	#[test_case("[[[[0,7],4],[15,[0,13]]],[1,1]]" => Some("[[[[0,7],4],[[7,8],[0,13]]],[1,1]]".to_owned()))]
	#[test_case("[[[[0,7],4],[[7,8],[0,13]]],[1,1]]" => Some("[[[[0,7],4],[[7,8],[0,[6,7]]]],[1,1]]".to_owned()))]
	#[test_case("[9,[1,2]]" => None)]
	fn split(input: &str) -> Option<String> {
		let mut number = number(input);
		number.split().then(|| number.to_string())
	}

	#[test]
	fn add() {
		assert_eq!(number("[[[[4,3],4],4],[7,[[8,4],9]]]") + &number("[1,1]"),
			number("[[[[0,7],4],[[7,8],[6,0]]],[8,1]]"));
		let sum = ["[2,2]", "[3,3]", "[4,4]", "[5,5]", "[6,6]"].into_iter()
			.fold(number("[1,1]"), |sum, n| sum + &number(n));
		assert_eq!(sum, number("[[[[5,0],[7,4]],[5,5]],[6,6]]"));
	}

	#[test_case("[[1,2],[[3,4],5]]" => 143)]
	#[test_case("[[[[1,1],[2,2]],[3,3]],[4,4]]" => 445)]
	#[test_case("[[[[8,7],[7,7]],[[8,6],[7,7]]],[[[0,7],[6,6]],[8,7]]]" => 3488)]
	fn magnitude(input: &str) -> u64 {
		number(input).magnitude()
	}

	#[test]
	fn part1_impl() {
		let numbers = input_numbers_from_str(INPUT).unwrap();
		let sum = numbers[1..].iter().fold(numbers[0].clone(), |sum, n| sum + n);
		assert_eq!(sum.to_string(), "[[[[6,6],[7,6]],[[7,7],[7,0]]],[[[7,7],[7,7]],[[7,8],[9,9]]]]");
		assert_eq!(super::part1_impl(&numbers), 4140);
	}

	#[test]
	fn part2_impl() {
		assert_eq!(super::part2_impl(&input_numbers_from_str(INPUT).unwrap()), 3993);
	}

	#[test]
	fn parsing() {
		assert_eq!(number("[12,[3,4]]").to_string(), "[12,[3,4]]");
		assert!(matches!("[1,2".parse::<Number>(), Err(parsing::NumberError::Malformed)));
		assert!(matches!("[1,2]]".parse::<Number>(), Err(parsing::NumberError::Unbalanced { column: 6 })));
		assert!(matches!("[1,[2,3,4]]".parse::<Number>(), Err(parsing::NumberError::Malformed)));
		assert!(matches!("[1;2]".parse::<Number>(),
			Err(parsing::NumberError::InvalidByte { column: 3, found: ';' })));
		assert!(matches!(input_numbers_from_str(""), Err(parsing::NumbersError::Empty)));
		assert!(matches!(input_numbers_from_str("[1,2]\n[1,2\n"), Err(parsing::NumbersError::Number { line: 2, .. })));
		assert_eq!(input_numbers_from_str("[1,2]\n\n").unwrap().len(), 1);
	}

	#[test]
	#[ignore = "requires the puzzle input"]
	fn real_input() {
		assert_eq!(super::part1().unwrap(), 4145);
		assert_eq!(super::part2().unwrap(), 4855);
	}
}


#[cfg(BENCHING)]
mod bench {
	extern crate test;

	#[bench]
	fn part2(b: &mut test::Bencher) {
		let numbers = super::input_numbers().unwrap();
		b.iter(|| super::part2_impl(&numbers));
	}
}
