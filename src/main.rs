// Copyright (c) 2022 Bastiaan Marinus van de Weerd

#![cfg_attr(BENCHING, feature(test))]

mod util;
util::mod_days![
	01, 02, 03, 04, 05, 06, 07, 08, 09, 10,
	11, 12, 13, 14, 15, 16, 17, 18, 19, 20,
	21, 22, 23, 24, 25,
];


#[derive(clap::Parser)]
#[command(about = "Solves the puzzles of the 2021 calendar")]
struct Args {
	/// Days to solve; all of them if none are given
	#[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
	days: Vec<u8>,

	/// Directory containing the `dayNN.txt` puzzle inputs
	#[arg(long, env = "ADVENT21_INPUT_DIR")]
	input_dir: Option<std::path::PathBuf>,
}


fn main() -> anyhow::Result<()> {
	use clap::Parser as _;

	let args = Args::parse();
	if let Some(input_dir) = args.input_dir { util::set_input_dir(input_dir) }

	let days = if args.days.is_empty() { DAYS.to_vec() } else { args.days };
	let mut failures = 0;
	for day in days {
		let Some(answers) = solve(day) else { anyhow::bail!("No solution for day {day}") };
		let answers = answers.map(|answer| answer.unwrap_or_else(|e| {
			eprintln!("Day {day:02}: {e:#}");
			failures += 1;
			"-".to_owned()
		}));
		match answers {
			[part1, part2] if part2.contains('\n') =>
				println!("Day {day:02}; part 1: {part1}, part 2:\n{part2}"),
			[part1, part2] =>
				println!("Day {day:02}; part 1: {part1}, part 2: {part2}"),
		}
	}

	if failures > 0 { anyhow::bail!("{failures} part(s) could not be solved") }
	Ok(())
}
