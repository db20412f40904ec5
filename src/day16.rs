// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[cfg_attr(test, derive(PartialEq))]
#[derive(Clone, Copy, Debug)]
enum Op { Sum, Product, Minimum, Maximum, GreaterThan, LessThan, EqualTo }

#[cfg_attr(test, derive(Debug, PartialEq))]
enum Payload {
	Literal(u64),
	Operator(Op, Vec<Packet>),
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct Packet {
	version: u8,
	payload: Payload,
}

impl Packet {
	fn version_sum(&self) -> u64 {
		self.version as u64 + match &self.payload {
			Payload::Literal(_) => 0,
			Payload::Operator(_, packets) => packets.iter().map(Packet::version_sum).sum(),
		}
	}

	/// Comparison operators have exactly two operands and the
	/// others at least one, which parsing ensures.
	fn value(&self) -> u64 {
		let (op, packets) = match &self.payload {
			Payload::Literal(value) => return *value,
			Payload::Operator(op, packets) => (op, packets),
		};
		let mut values = packets.iter().map(Packet::value);
		match op {
			Op::Sum => values.sum(),
			Op::Product => values.product(),
			Op::Minimum => values.min().unwrap_or(0),
			Op::Maximum => values.max().unwrap_or(0),
			Op::GreaterThan | Op::LessThan | Op::EqualTo => {
				let [a, b] = [values.next().unwrap_or(0), values.next().unwrap_or(0)];
				u64::from(match op {
					Op::GreaterThan => a > b,
					Op::LessThan => a < b,
					_ => a == b,
				})
			}
		}
	}
}


fn input_packet_from_str(s: &str) -> Result<Packet, parsing::PacketError> {
	s.parse()
}

fn input_packet() -> anyhow::Result<Packet> {
	Ok(input_packet_from_str(&crate::util::input(16)?)?)
}


fn part1_impl(input_packet: &Packet) -> u64 {
	input_packet.version_sum()
}

pub(crate) fn part1() -> anyhow::Result<u64> {
	Ok(part1_impl(&input_packet()?))
}


fn part2_impl(input_packet: &Packet) -> u64 {
	input_packet.value()
}

pub(crate) fn part2() -> anyhow::Result<u64> {
	Ok(part2_impl(&input_packet()?))
}


mod parsing {
	use std::str::FromStr;
	use super::{Op, Packet, Payload};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum PacketError {
		#[error("Invalid hexadecimal digit {found:?} at column {column}")]
		InvalidDigit { column: usize, found: char },
		#[error("Transmission ends within a packet")]
		Truncated,
		#[error("Literal at bit {bit} does not fit in 64 bits")]
		LiteralOverflow { bit: usize },
		#[error("Sub-packets at bit {bit} overrun their length")]
		LengthMismatch { bit: usize },
		#[error("{op:?} operator at bit {bit} has {found} operands")]
		Arity { bit: usize, op: Op, found: usize },
	}

	/// Reads a transmission's bits most significant first.
	struct Bits {
		nibbles: Vec<u8>,
		pos: usize,
	}

	impl Bits {
		fn read(&mut self, n: usize) -> Result<u64, PacketError> {
			if self.pos + n > self.nibbles.len() * 4 { return Err(PacketError::Truncated) }
			let value = (self.pos..self.pos + n)
				.fold(0, |acc, i| acc << 1 | (self.nibbles[i / 4] >> (3 - i % 4) & 1) as u64);
			self.pos += n;
			Ok(value)
		}

		fn literal(&mut self) -> Result<u64, PacketError> {
			let bit = self.pos;
			let mut value = 0_u64;
			loop {
				let group = self.read(5)?;
				if value >> 60 != 0 { return Err(PacketError::LiteralOverflow { bit }) }
				value = value << 4 | group & 0xf;
				if group & 0x10 == 0 { return Ok(value) }
			}
		}

		fn packet(&mut self) -> Result<Packet, PacketError> {
			let version = self.read(3)? as u8;
			let op = match self.read(3)? {
				4 => return Ok(Packet { version, payload: Payload::Literal(self.literal()?) }),
				0 => Op::Sum,
				1 => Op::Product,
				2 => Op::Minimum,
				3 => Op::Maximum,
				5 => Op::GreaterThan,
				6 => Op::LessThan,
				_ => Op::EqualTo,
			};

			let bit = self.pos;
			let packets = if self.read(1)? == 0 {
				let end = self.read(15)? as usize + self.pos;
				let mut packets = vec![];
				while self.pos < end { packets.push(self.packet()?) }
				if self.pos != end { return Err(PacketError::LengthMismatch { bit }) }
				packets
			} else {
				let count = self.read(11)?;
				(0..count).map(|_| self.packet()).collect::<Result<Vec<_>, _>>()?
			};

			let valid = match op {
				Op::GreaterThan | Op::LessThan | Op::EqualTo => packets.len() == 2,
				_ => !packets.is_empty(),
			};
			if !valid { return Err(PacketError::Arity { bit, op, found: packets.len() }) }

			Ok(Packet { version, payload: Payload::Operator(op, packets) })
		}
	}

	impl FromStr for Packet {
		type Err = PacketError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let nibbles = s.trim().chars()
				.enumerate()
				.map(|(c, found)| found.to_digit(16).map(|d| d as u8)
					.ok_or(PacketError::InvalidDigit { column: c + 1, found }))
				.collect::<Result<_, _>>()?;
			Bits { nibbles, pos: 0 }.packet()
		}
	}
}
