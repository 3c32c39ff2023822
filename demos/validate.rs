// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use fancy_regex::Regex;
use fluent_regex::RegexBuilder;

pub fn main() {
    date();
    password();
    ipv4();
}

fn date() {
    let pattern = RegexBuilder::new()
        .start_anchor()
        .digit()
        .exactly(4)
        .add("-")
        .digit()
        .exactly(2)
        .add("-")
        .digit()
        .exactly(2)
        .end_anchor()
        .to_pattern();

    let re = Regex::new(&pattern).unwrap();
    println!("{}", re.is_match("2025-04-22").unwrap()); // should be true
    println!("{}", re.is_match("04-22").unwrap()); // should be false
}

fn password() {
    let mut builder = RegexBuilder::new();
    builder
        .start_anchor()
        .has_letter()
        .has_digit()
        .has_special_character()
        .any_character()
        .at_least(8)
        .end_anchor();

    println!("{}", builder.to_regexp());

    let re = Regex::new(&builder.to_pattern()).unwrap();
    println!("{}", re.is_match("s3cret!pass").unwrap()); // should be true
    println!("{}", re.is_match("secretpass").unwrap()); // should be false
}

fn ipv4() {
    let mut builder = RegexBuilder::new();
    builder.start_anchor().ipv4_octet();
    for _ in 0..3 {
        builder.escape_literal(".").ipv4_octet();
    }
    builder.end_anchor();

    let re = Regex::new(&builder.to_pattern()).unwrap();
    println!("{}", re.is_match("192.168.1.1").unwrap()); // should be true
    println!("{}", re.is_match("256.1.1.1").unwrap()); // should be false
}
