#![no_main]

use libfuzzer_sys::fuzz_target;
use rtb_bitstream::fuzz::round_trip::{FuzzCase, harness};

fuzz_target!(|data: FuzzCase| harness(data));
