// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::{Display, Write};

use crate::{
    builder::RegexBuilder,
    flag::{Flag, FlagSet},
};

impl Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char(self.as_char())
    }
}

impl Display for FlagSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for flag in self.iter() {
            write!(f, "{}", flag)?;
        }
        Ok(())
    }
}

impl Display for RegexBuilder {
    // the pattern body only, see `RegexBuilder::to_regexp`
    // for the delimited form.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for fragment in self.fragments() {
            f.write_str(fragment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        builder::RegexBuilder,
        flag::{Flag, FlagSet},
    };

    #[test]
    fn test_print_flags() {
        assert_eq!(Flag::DotAll.to_string(), "s");

        let mut set = FlagSet::new();
        assert_eq!(set.to_string(), "");

        set.insert(Flag::Sticky);
        set.insert(Flag::CaseInsensitive);
        set.insert(Flag::Sticky);
        assert_eq!(set.to_string(), "yi");
    }

    #[test]
    fn test_print_builder() {
        let mut builder = RegexBuilder::new();
        assert_eq!(builder.to_string(), "");

        builder.start_anchor().word().one_or_more().end_anchor().global();

        assert_eq!(builder.to_string(), r"^\w+$");
        assert_eq!(builder.to_string(), builder.to_pattern());
        assert_eq!(format!("{}", builder.flags()), "g");
    }
}
