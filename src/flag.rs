// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

/// A regex engine mode, written after the closing delimiter
/// of a regex literal, e.g. the `i` in `/abc/i`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Flag {
    Global,          // g
    CaseInsensitive, // i
    Multiline,       // m
    DotAll,          // s
    Sticky,          // y
}

impl Flag {
    pub fn as_char(&self) -> char {
        match self {
            Flag::Global => 'g',
            Flag::CaseInsensitive => 'i',
            Flag::Multiline => 'm',
            Flag::DotAll => 's',
            Flag::Sticky => 'y',
        }
    }

    pub fn from_char(c: char) -> Option<Flag> {
        let flag = match c {
            'g' => Flag::Global,
            'i' => Flag::CaseInsensitive,
            'm' => Flag::Multiline,
            's' => Flag::DotAll,
            'y' => Flag::Sticky,
            _ => return None,
        };
        Some(flag)
    }
}

/// The flags activated on a builder.
///
/// Flags are kept in the order they were first activated,
/// activating a flag that is already present changes nothing.
/// There are only five flags, so a `Vec` with a linear
/// lookup is enough.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct FlagSet {
    flags: Vec<Flag>,
}

impl FlagSet {
    pub fn new() -> Self {
        FlagSet { flags: vec![] }
    }

    /// Returns `true` if the flag was not present before.
    pub fn insert(&mut self, flag: Flag) -> bool {
        if self.contains(flag) {
            false
        } else {
            self.flags.push(flag);
            true
        }
    }

    pub fn contains(&self, flag: Flag) -> bool {
        self.flags.contains(&flag)
    }

    pub fn iter(&self) -> impl Iterator<Item = Flag> + '_ {
        self.flags.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Flag, FlagSet};

    #[test]
    fn test_flag_char() {
        let flags = [
            Flag::Global,
            Flag::CaseInsensitive,
            Flag::Multiline,
            Flag::DotAll,
            Flag::Sticky,
        ];

        let chars: String = flags.iter().map(|f| f.as_char()).collect();
        assert_eq!(chars, "gimsy");

        for flag in flags {
            assert_eq!(Flag::from_char(flag.as_char()), Some(flag));
        }

        assert_eq!(Flag::from_char('u'), None);
        assert_eq!(Flag::from_char('G'), None);
    }

    #[test]
    fn test_flag_set_insert() {
        let mut set = FlagSet::new();
        assert!(set.is_empty());

        assert!(set.insert(Flag::Multiline));
        assert!(set.insert(Flag::Global));

        // duplicated
        assert!(!set.insert(Flag::Multiline));
        assert!(!set.insert(Flag::Global));

        assert_eq!(set.len(), 2);
        assert!(set.contains(Flag::Global));
        assert!(!set.contains(Flag::Sticky));

        // first-activation order
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Flag::Multiline, Flag::Global]
        );
    }
}
