// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone)]
struct Image {
	pixels: Vec<bool>,
	width: usize,
	/// Whether all pixels beyond the bounds are lit.
	background: bool,
}

struct Trench {
	algorithm: [bool; 512],
	image: Image,
}

impl Image {
	fn height(&self) -> usize {
		self.pixels.len() / self.width
	}

	fn pixel(&self, x: isize, y: isize) -> bool {
		if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height() { return self.background }
		self.pixels[y as usize * self.width + x as usize]
	}

	/// Grows the image by one pixel on every side.
	fn enhance(&self, algorithm: &[bool; 512]) -> Image {
		let (width, height) = (self.width + 2, self.height() + 2);
		let pixels = (0..height as isize)
			.flat_map(|y| (0..width as isize).map(move |x| (x - 1, y - 1)))
			.map(|(x, y)| {
				let index = (-1..=1)
					.flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
					.fold(0, |acc, (dx, dy)| acc << 1 | self.pixel(x + dx, y + dy) as usize);
				algorithm[index]
			})
			.collect();
		let background = algorithm[if self.background { 511 } else { 0 }];
		Image { pixels, width, background }
	}
}

#[cfg(LOGGING)]
impl std::fmt::Display for Image {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		for row in self.pixels.chunks(self.width) {
			for &pixel in row { write!(f, "{}", if pixel { '#' } else { '.' })? }
			writeln!(f)?;
		}
		Ok(())
	}
}


fn input_trench_from_str(s: &str) -> Result<Trench, parsing::TrenchError> {
	s.parse()
}

fn input_trench() -> anyhow::Result<Trench> {
	Ok(input_trench_from_str(&crate::util::input(20)?)?)
}


/// Returns `None` when infinitely many pixels are lit.
fn part1and2_impl<const STEPS: usize>(input_trench: &Trench) -> Option<usize> {
	let mut image = input_trench.image.clone();
	for _ in 0..STEPS {
		image = image.enhance(&input_trench.algorithm);

		#[cfg(LOGGING)]
		println!("{image}");
	}
	(!image.background).then(|| image.pixels.iter().filter(|&&p| p).count())
}

pub(crate) fn part1() -> anyhow::Result<usize> {
	part1and2_impl::<2>(&input_trench()?)
		.ok_or_else(|| anyhow::anyhow!("Infinitely many pixels are lit"))
}

pub(crate) fn part2() -> anyhow::Result<usize> {
	part1and2_impl::<50>(&input_trench()?)
		.ok_or_else(|| anyhow::anyhow!("Infinitely many pixels are lit"))
}


mod parsing {
	use std::str::FromStr;
	use super::{Image, Trench};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum TrenchError {
		#[error("Algorithm has {found} entries instead of 512")]
		AlgorithmLen { found: usize },
		#[error("Missing blank line after the algorithm")]
		NoBlankLine,
		#[error("Empty image")]
		EmptyImage,
		#[error("Line {line} has {found} pixels instead of {len}")]
		LineLen { line: usize, len: usize, found: usize },
		#[error("Invalid byte {found:?} at line {line}, column {column}")]
		InvalidByte { line: usize, column: usize, found: char },
	}

	fn pixels(line: &str, l: usize) -> impl Iterator<Item = Result<bool, TrenchError>> + '_ {
		line.bytes().enumerate().map(move |(c, b)| match b {
			b'#' => Ok(true),
			b'.' => Ok(false),
			found => Err(TrenchError::InvalidByte { line: l + 1, column: c + 1, found: found as char }),
		})
	}

	impl FromStr for Trench {
		type Err = TrenchError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use TrenchError as E;

			let (algorithm, image_lines) = s.split_once("\n\n").ok_or(E::NoBlankLine)?;
			let algorithm = pixels(algorithm, 0).collect::<Result<Vec<_>, _>>()?;
			let algorithm = algorithm.try_into()
				.map_err(|algorithm: Vec<_>| E::AlgorithmLen { found: algorithm.len() })?;

			let mut width = None;
			let mut image = vec![];
			// Image lines start at the third line.
			for (l, line) in image_lines.trim_end_matches('\n').lines().enumerate().map(|(l, line)| (l + 2, line)) {
				let len = *width.get_or_insert(line.len());
				if line.len() != len { return Err(E::LineLen { line: l + 1, len, found: line.len() }) }
				for pixel in pixels(line, l) { image.push(pixel?) }
			}

			Ok(Trench {
				algorithm,
				image: Image {
					pixels: image,
					width: width.filter(|&w| w > 0).ok_or(E::EmptyImage)?,
					background: false,
				},
			})
		}
	}
}




#[cfg(BENCHING)]
mod bench {
	extern crate test;

	#[bench]
	fn part2(b: &mut test::Bencher) {
		let trench = super::input_trench().unwrap();
		b.iter(|| super::part1and2_impl::<50>(&trench));
	}
}
