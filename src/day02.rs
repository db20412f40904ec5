// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Clone, Copy)]
enum Command {
	Forward(u32),
	Down(u32),
	Up(u32),
}


fn input_commands_from_str(s: &str) -> Result<Vec<Command>, parsing::CommandsError> {
	parsing::commands_from_str(s).collect()
}

fn input_commands() -> anyhow::Result<Vec<Command>> {
	Ok(input_commands_from_str(&crate::util::input(2)?)?)
}


fn part1_impl(input_commands: &[Command]) -> i64 {
	let [position, depth] = input_commands.iter()
		.fold([0_i64; 2], |[position, depth], command| match *command {
			Command::Forward(n) => [position + n as i64, depth],
			Command::Down(n) => [position, depth + n as i64],
			Command::Up(n) => [position, depth - n as i64],
		});
	position * depth
}

pub(crate) fn part1() -> anyhow::Result<i64> {
	Ok(part1_impl(&input_commands()?))
}


fn part2_impl(input_commands: &[Command]) -> i64 {
	let [position, depth, _] = input_commands.iter()
		.fold([0_i64; 3], |[position, depth, aim], command| match *command {
			Command::Forward(n) => [position + n as i64, depth + aim * n as i64, aim],
			Command::Down(n) => [position, depth, aim + n as i64],
			Command::Up(n) => [position, depth, aim - n as i64],
		});
	position * depth
}

pub(crate) fn part2() -> anyhow::Result<i64> {
	Ok(part2_impl(&input_commands()?))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::Command;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum CommandError {
		#[error("Missing space")]
		NoSpace,
		#[error("Unknown command {0:?}")]
		Unknown(String),
		#[error("Invalid amount")]
		Amount(#[source] ParseIntError),
	}

	impl FromStr for Command {
		type Err = CommandError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (command, amount) = s.split_once(' ').ok_or(CommandError::NoSpace)?;
			let amount = amount.parse().map_err(CommandError::Amount)?;
			match command {
				"forward" => Ok(Command::Forward(amount)),
				"down" => Ok(Command::Down(amount)),
				"up" => Ok(Command::Up(amount)),
				unknown => Err(CommandError::Unknown(unknown.to_owned())),
			}
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum CommandsError {
		#[error("No commands")]
		Empty,
		#[error("Invalid command on line {line}")]
		Command { line: usize, source: CommandError },
	}

	pub(super) fn commands_from_str(s: &str) -> impl Iterator<Item = Result<Command, CommandsError>> + '_ {
		use {std::iter::once, either::Either};
		let s = s.trim_end_matches('\n');
		if s.is_empty() { return Either::Left(once(Err(CommandsError::Empty))) }
		Either::Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| CommandsError::Command { line: l + 1, source: e })))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		forward 5
		down 5
		forward 8
		up 3
		down 8
		forward 2
	" };

	#[test]
	fn parsing() {
		let commands = input_commands_from_str(INPUT).unwrap();
		assert_eq!(commands[..3], [Command::Forward(5), Command::Down(5), Command::Forward(8)]);
		assert!(input_commands_from_str("backward 3").is_err());
		assert!(input_commands_from_str("forward").is_err());
		assert!(input_commands_from_str("up -1").is_err());
		assert!(matches!(input_commands_from_str(""), Err(parsing::CommandsError::Empty)));
		assert_eq!(input_commands_from_str("up 3\n\n").unwrap().len(), 1);
	}

	#[test]
	fn part1_impl() {
		assert_eq!(super::part1_impl(&input_commands_from_str(INPUT).unwrap()), 150);
	}

	#[test]
	fn part2_impl() {
		assert_eq!(super::part2_impl(&input_commands_from_str(INPUT).unwrap()), 900);
	}

	#[test]
	#[ignore = "requires the puzzle input"]
	fn real_input() {
		assert_eq!(super::part1().unwrap(), 1938402);
		assert_eq!(super::part2().unwrap(), 1947878632);
	}
}
