// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, PartialEq, Eq)]
enum Register { W, X, Y, Z }

#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, PartialEq, Eq)]
enum Operand { Reg(Register), Num(i64) }

#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, PartialEq, Eq)]
enum Op { Add, Mul, Div, Mod, Eql }

#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, PartialEq, Eq)]
enum Instruction {
	Inp(Register),
	Bin(Op, Register, Operand),
}

#[derive(Debug, thiserror::Error)]
enum AluError {
	#[error("Out of input at instruction {index}")]
	OutOfInput { index: usize },
	#[error("Division by zero at instruction {index}")]
	DivisionByZero { index: usize },
	#[error("Invalid modulo operands at instruction {index}")]
	Modulo { index: usize },
}

/// Runs the program from all-zero registers, returning `[w, x, y, z]`.
fn run(program: &[Instruction], input: impl IntoIterator<Item = i64>) -> Result<[i64; 4], AluError> {
	let mut registers = [0_i64; 4];
	let mut input = input.into_iter();
	for (index, &instruction) in program.iter().enumerate() {
		match instruction {
			Instruction::Inp(a) => {
				registers[a as usize] = input.next().ok_or(AluError::OutOfInput { index })?;
			}
			Instruction::Bin(op, a, b) => {
				let lhs = registers[a as usize];
				let rhs = match b { Operand::Reg(b) => registers[b as usize], Operand::Num(n) => n };
				registers[a as usize] = match op {
					Op::Add => lhs + rhs,
					Op::Mul => lhs * rhs,
					Op::Div if rhs == 0 => return Err(AluError::DivisionByZero { index }),
					Op::Div => lhs / rhs,
					Op::Mod if lhs < 0 || rhs <= 0 => return Err(AluError::Modulo { index }),
					Op::Mod => lhs % rhs,
					Op::Eql => (lhs == rhs) as i64,
				};
			}
		}
	}
	Ok(registers)
}


const DIGITS: usize = 14;

/// The parameters in which the model number checker's per-digit blocks differ.
/// Every block pushes the digit plus `y` onto a base-26 stack in `z`, or pops
/// and pushes back unless the digit equals the popped value plus `x`.
#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Clone, Copy)]
struct Block {
	pops: bool,
	x: i64,
	y: i64,
}

struct Monad {
	program: Vec<Instruction>,
	blocks: [Block; DIGITS],
}

impl Monad {
	/// Pairs every popping block with the pushing block it pops,
	/// as `(push, pop, offset)` such that `digit[pop] = digit[push] + offset`.
	fn constraints(&self) -> Option<Vec<(usize, usize, i64)>> {
		let mut stack = vec![];
		let mut constraints = vec![];
		for (pop, block) in self.blocks.iter().enumerate() {
			if !block.pops {
				stack.push((pop, block.y));
				continue
			}
			let (push, y) = stack.pop()?;
			constraints.push((push, pop, y + block.x));
		}
		stack.is_empty().then_some(constraints)
	}

	fn model_number<const LARGEST: bool>(&self) -> Option<u64> {
		let mut digits = [0_i64; DIGITS];
		for (push, pop, offset) in self.constraints()? {
			if offset.abs() > 8 { return None }
			let (low, high) = if offset >= 0 { (1, 9 - offset) } else { (1 - offset, 9) };
			digits[push] = if LARGEST { high } else { low };
			digits[pop] = digits[push] + offset;
		}

		#[cfg(LOGGING)]
		println!("{digits:?}");

		let [.., z] = run(&self.program, digits).ok()?;
		(z == 0).then(|| digits.iter().fold(0, |acc, &d| acc * 10 + d as u64))
	}
}


fn input_monad_from_str(s: &str) -> Result<Monad, parsing::MonadError> {
	s.parse()
}

fn input_monad() -> anyhow::Result<Monad> {
	Ok(input_monad_from_str(&crate::util::input(24)?)?)
}


fn part1and2_impl<const LARGEST: bool>(input_monad: &Monad) -> Option<u64> {
	input_monad.model_number::<LARGEST>()
}

pub(crate) fn part1() -> anyhow::Result<u64> {
	part1and2_impl::<true>(&input_monad()?)
		.ok_or_else(|| anyhow::anyhow!("No valid model number"))
}

pub(crate) fn part2() -> anyhow::Result<u64> {
	part1and2_impl::<false>(&input_monad()?)
		.ok_or_else(|| anyhow::anyhow!("No valid model number"))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Block, Instruction, Monad, Op, Operand, Register, DIGITS};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum InstructionError {
		#[error("Unknown opcode {found:?}")]
		Opcode { found: String },
		#[error("Expected {expected} operands, found {found}")]
		OperandCount { expected: usize, found: usize },
		#[error("Invalid register {found:?}")]
		Register { found: String },
		#[error("Invalid number")]
		Number(#[source] ParseIntError),
	}

	impl FromStr for Register {
		type Err = InstructionError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			match s {
				"w" => Ok(Register::W),
				"x" => Ok(Register::X),
				"y" => Ok(Register::Y),
				"z" => Ok(Register::Z),
				found => Err(InstructionError::Register { found: found.to_owned() }),
			}
		}
	}

	impl FromStr for Operand {
		type Err = InstructionError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			if s.starts_with(|c: char| c.is_ascii_lowercase()) { return Ok(Operand::Reg(s.parse()?)) }
			s.parse().map(Operand::Num).map_err(InstructionError::Number)
		}
	}

	impl FromStr for Instruction {
		type Err = InstructionError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use InstructionError as E;

			let mut words = s.split_whitespace();
			let opcode = words.next().unwrap_or("");
			let operands = words.collect::<Vec<_>>();
			let op = match opcode {
				"inp" => return match operands[..] {
					[a] => Ok(Instruction::Inp(a.parse()?)),
					_ => Err(E::OperandCount { expected: 1, found: operands.len() }),
				},
				"add" => Op::Add,
				"mul" => Op::Mul,
				"div" => Op::Div,
				"mod" => Op::Mod,
				"eql" => Op::Eql,
				found => return Err(E::Opcode { found: found.to_owned() }),
			};
			match operands[..] {
				[a, b] => Ok(Instruction::Bin(op, a.parse()?, b.parse()?)),
				_ => Err(E::OperandCount { expected: 2, found: operands.len() }),
			}
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum MonadError {
		#[error("Invalid instruction on line {line}")]
		Instruction { line: usize, source: InstructionError },
		#[error("Expected {} digit blocks, found {found}", DIGITS)]
		BlockCount { found: usize },
		#[error("Block {block} does not check a digit the usual way")]
		Block { block: usize },
	}

	fn block(instructions: &[Instruction]) -> Option<Block> {
		use {Instruction::*, Op::*, Operand::*, Register::*};

		match *instructions {
			[
				Inp(W),
				Bin(Mul, X, Num(0)),
				Bin(Add, X, Reg(Z)),
				Bin(Mod, X, Num(26)),
				Bin(Div, Z, Num(div)),
				Bin(Add, X, Num(x)),
				Bin(Eql, X, Reg(W)),
				Bin(Eql, X, Num(0)),
				Bin(Mul, Y, Num(0)),
				Bin(Add, Y, Num(25)),
				Bin(Mul, Y, Reg(X)),
				Bin(Add, Y, Num(1)),
				Bin(Mul, Z, Reg(Y)),
				Bin(Mul, Y, Num(0)),
				Bin(Add, Y, Reg(W)),
				Bin(Add, Y, Num(y)),
				Bin(Mul, Y, Reg(X)),
				Bin(Add, Z, Reg(Y)),
			] => match div {
				// A pushing block always pushes, so its digit can never match.
				1 if x > 9 && (0..=16).contains(&y) => Some(Block { pops: false, x, y }),
				26 if x <= 0 && (0..=16).contains(&y) => Some(Block { pops: true, x, y }),
				_ => None,
			},
			_ => None,
		}
	}

	impl FromStr for Monad {
		type Err = MonadError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use MonadError as E;

			let program = s.lines()
				.enumerate()
				.filter(|(_, line)| !line.trim().is_empty())
				.map(|(l, line)| line.parse().map_err(|e| E::Instruction { line: l + 1, source: e }))
				.collect::<Result<Vec<_>, _>>()?;

			let starts = program.iter()
				.enumerate()
				.filter(|(_, i)| matches!(i, Instruction::Inp(_)))
				.map(|(i, _)| i)
				.collect::<Vec<_>>();
			if starts.len() != DIGITS || starts.first() != Some(&0) {
				return Err(E::BlockCount { found: starts.len() })
			}

			let mut blocks = [Block { pops: false, x: 0, y: 0 }; DIGITS];
			for (b, block) in blocks.iter_mut().enumerate() {
				let end = starts.get(b + 1).copied().unwrap_or(program.len());
				*block = self::block(&program[starts[b]..end]).ok_or(E::Block { block: b + 1 })?;
			}

			Ok(Monad { program, blocks })
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	fn program(s: &str) -> Vec<Instruction> {
		s.lines().map(|line| line.parse().unwrap()).collect()
	}

	#[test]
	fn alu() {
		assert_eq!(run(&program("inp x\nmul x -1"), [5]).unwrap(), [0, -5, 0, 0]);
		assert_eq!(run(&program("inp z\ninp x\nmul z 3\neql z x"), [3, 9]).unwrap(), [0, 9, 0, 1]);
		assert_eq!(run(&program("inp z\ninp x\nmul z 3\neql z x"), [3, 8]).unwrap(), [0, 8, 0, 0]);

		let binary = program(indoc::indoc! { "
			inp w
			add z w
			mod z 2
			div w 2
			add y w
			mod y 2
			div w 2
			add x w
			mod x 2
			div w 2
			mod w 2
		" });
		assert_eq!(run(&binary, [13]).unwrap(), [1, 1, 0, 1]);
		assert_eq!(run(&binary, [6]).unwrap(), [0, 1, 1, 0]);

		assert_eq!(run(&program("div w 3"), []).unwrap(), [0; 4]);
		assert_eq!(run(&program("add w -7\ndiv w 2"), []).unwrap(), [-3, 0, 0, 0]);
		assert!(matches!(run(&program("inp w\ninp x"), [1]), Err(AluError::OutOfInput { index: 1 })));
		assert!(matches!(run(&program("div w x"), []), Err(AluError::DivisionByZero { index: 0 })));
		assert!(matches!(run(&program("add w -1\nmod w 2"), []), Err(AluError::Modulo { index: 1 })));
	}

	#[test]
	fn parsing() {
		assert_eq!("add x -12".parse::<Instruction>().unwrap(),
			Instruction::Bin(Op::Add, Register::X, Operand::Num(-12)));
		assert_eq!("eql x w".parse::<Instruction>().unwrap(),
			Instruction::Bin(Op::Eql, Register::X, Operand::Reg(Register::W)));
		assert!(matches!("sub x 1".parse::<Instruction>(), Err(parsing::InstructionError::Opcode { .. })));
		assert!(matches!("inp".parse::<Instruction>(), Err(parsing::InstructionError::OperandCount { expected: 1, found: 0 })));
		assert!(matches!("mul a 2".parse::<Instruction>(), Err(parsing::InstructionError::Register { .. })));
		assert!(matches!(input_monad_from_str("inp w\nadd z w\n"), Err(parsing::MonadError::BlockCount { found: 1 })));
	}

	const PARAMETERS: [(i64, i64, i64); DIGITS] = [
		(1, 11, 6), (1, 13, 14), (1, 15, 14), (26, -8, 10), (1, 13, 9), (1, 15, 12), (26, -11, 8),
		(26, -4, 13), (26, -15, 12), (1, 14, 6), (1, 14, 9), (26, -1, 15), (26, -8, 4), (26, -14, 10),
	];

	fn monad_input(parameters: &[(i64, i64, i64)]) -> String {
		parameters.iter().map(|(div, x, y)| indoc::formatdoc! { "
			inp w
			mul x 0
			add x z
			mod x 26
			div z {}
			add x {}
			eql x w
			eql x 0
			mul y 0
			add y 25
			mul y x
			add y 1
			mul z y
			mul y 0
			add y w
			add y {}
			mul y x
			add z y
		", div, x, y }).collect()
	}

	#[test]
	fn monad() {
		let monad = input_monad_from_str(&monad_input(&PARAMETERS)).unwrap();
		assert_eq!(monad.blocks[3], Block { pops: true, x: -8, y: 10 });
		assert_eq!(monad.constraints().unwrap()[..2], [(2, 3, 6), (5, 6, 1)]);

		let digits = |n: u64| n.to_string().bytes().map(|b| (b - b'0') as i64).collect::<Vec<_>>();
		assert_eq!(run(&monad.program, digits(99394899891971)).unwrap()[3], 0);
		assert_eq!(run(&monad.program, digits(99394899891972)).unwrap()[3], 12);
	}

	#[test]
	fn part1and2_impl() {
		let monad = input_monad_from_str(&monad_input(&PARAMETERS)).unwrap();
		assert_eq!(super::part1and2_impl::<true>(&monad), Some(99394899891971));
		assert_eq!(super::part1and2_impl::<false>(&monad), Some(92171126131911));

		let mut unsatisfiable = PARAMETERS;
		unsatisfiable[3].1 = -30;
		let monad = input_monad_from_str(&monad_input(&unsatisfiable)).unwrap();
		assert_eq!(super::part1and2_impl::<true>(&monad), None);

		let mut unbalanced = PARAMETERS;
		unbalanced[13].0 = 1;
		unbalanced[13].1 = 10;
		let monad = input_monad_from_str(&monad_input(&unbalanced)).unwrap();
		assert_eq!(super::part1and2_impl::<false>(&monad), None);

		let mut unusual = PARAMETERS;
		unusual[0].1 = 5;
		assert!(matches!(input_monad_from_str(&monad_input(&unusual)), Err(parsing::MonadError::Block { block: 1 })));
	}

	#[test]
	#[ignore = "requires the puzzle input"]
	fn real_input() {
		assert_eq!(super::part1().unwrap(), 39924989499969);
	}
}
