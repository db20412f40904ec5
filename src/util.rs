// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{path::{Path, PathBuf}, sync::OnceLock};


/// What the runner gets back from a day's `part1` or `part2`.
pub(crate) type Answer = anyhow::Result<String>;

/// Declares the `dayNN` modules, a `DAYS` list of their numbers,
/// and a `solve` function dispatching to their `part1` and `part2`.
macro_rules! mod_days { ( $( $day:literal ),+ $(,)? ) => { paste::paste! {
	$( mod [<day $day>]; )+

	const DAYS: &[u8] = &[ $( $day ),+ ];

	fn solve(day: u8) -> Option<[$crate::util::Answer; 2]> {
		match day {
			$( $day => Some([
				[<day $day>]::part1().map(|answer| answer.to_string()),
				[<day $day>]::part2().map(|answer| answer.to_string()),
			]), )+
			_ => None,
		}
	}
} } }

pub(crate) use mod_days;


static INPUT_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Has no effect once any input was read.
pub(crate) fn set_input_dir(dir: PathBuf) {
	_ = INPUT_DIR.set(dir);
}

fn input_dir() -> &'static Path {
	INPUT_DIR.get_or_init(|| std::env::var_os("ADVENT21_INPUT_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("input")))
}

/// Reads the puzzle input for `day` from `dayNN.txt` in the input directory.
pub(crate) fn input(day: u8) -> anyhow::Result<String> {
	use anyhow::Context as _;
	let path = input_dir().join(format!("day{day:02}.txt"));
	std::fs::read_to_string(&path)
		.with_context(|| format!("Could not read input from {}", path.display()))
}
