// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use fancy_regex::Regex;
use fluent_regex::RegexBuilder;

pub fn main() {
    let mut builder = RegexBuilder::new();
    builder.add("#");
    for name in ["red", "green", "blue"] {
        builder
            .start_named_group(name)
            .add("[0-9a-fA-F]")
            .exactly(2)
            .end_group();
    }

    // #(?<red>[0-9a-fA-F]{2})(?<green>[0-9a-fA-F]{2})(?<blue>[0-9a-fA-F]{2})
    println!("{}", builder);

    let re = Regex::new(&builder.to_pattern()).unwrap();
    let text = "The color is #ffbb33 and the background is #bbdd99.";

    // capture groups all
    for m in re.captures_iter(text) {
        let m = m.unwrap();
        println!("Found match: {}", m.get(0).unwrap().as_str());
        println!("Red: {}", m.name("red").unwrap().as_str());
        println!("Green: {}", m.name("green").unwrap().as_str());
        println!("Blue: {}", m.name("blue").unwrap().as_str());
    }
}
