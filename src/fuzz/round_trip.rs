/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug, Clone)]
pub struct FuzzCase {
    commands: Vec<RandomCommand>,
}

#[derive(Arbitrary, Debug, Clone)]
enum RandomCommand {
    Bit(bool),
    Base2(u64, usize),
    Fib(u64),
    Bytes(Vec<u8>),
    Str(String),
}

pub fn harness(data: FuzzCase) {
    let mut data = data;
    // Clamp arguments into the domain of each operation.
    for command in &mut data.commands {
        match command {
            RandomCommand::Base2(value, n_bits) => {
                *n_bits = 1 + *n_bits % 64;
                *value &= u64::MAX >> (64 - *n_bits);
            }
            RandomCommand::Fib(value) => {
                *value = (*value).clamp(1, i64::MAX as u64);
            }
            _ => {}
        }
    }

    let mut buffer = Vec::new();
    {
        let mut writer = BitWriter::new(&mut buffer);
        for command in data.commands.iter() {
            match command {
                RandomCommand::Bit(bit) => writer.write_bit(*bit),
                RandomCommand::Base2(value, n_bits) => writer.write_base2(*value, *n_bits),
                RandomCommand::Fib(value) => {
                    writer.write_fib(*value as i64).unwrap();
                }
                RandomCommand::Bytes(bytes) => writer.write_bytes(bytes),
                RandomCommand::Str(s) => writer.write_string(s),
            };
        }
    }
    // read back
    let mut reader = BitReader::new(buffer);
    for command in data.commands.iter() {
        match command {
            RandomCommand::Bit(bit) => assert_eq!(reader.read_bit(), *bit),
            RandomCommand::Base2(value, n_bits) => {
                assert_eq!(reader.read_base2(*n_bits).unwrap(), *value)
            }
            RandomCommand::Fib(value) => assert_eq!(reader.read_fib(), *value as i64),
            RandomCommand::Bytes(bytes) => assert_eq!(&reader.read_bytes(bytes.len()), bytes),
            RandomCommand::Str(s) => {
                // An embedded NUL truncates on write; the reader gets the
                // prefix before it.
                let nul = s.bytes().position(|byte| byte == 0).unwrap_or(s.len());
                assert_eq!(reader.read_string(), s[..nul]);
            }
        };
    }
}
