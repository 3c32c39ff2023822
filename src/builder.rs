// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::flag::{Flag, FlagSet};

const DIGIT: &str = r"\d";

/// Assembles a regular expression from chained method calls.
///
/// Every pattern method (all but the flag ones and `at_most`) appends one
/// fragment and returns the same builder, so calls can be chained:
///
/// ```
/// use fluent_regex::RegexBuilder;
///
/// let pattern = RegexBuilder::new()
///     .start_anchor()
///     .digit()
///     .exactly(4)
///     .end_anchor()
///     .to_pattern();
///
/// assert_eq!(pattern, r"^\d{4}$");
/// ```
///
/// Nothing is validated: negative counts, unbalanced groups and
/// invalid group names are written out as is, and only fail
/// when the rendered text is compiled by a regex engine.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct RegexBuilder {
    fragments: Vec<String>,
    flags: FlagSet,
}

impl RegexBuilder {
    pub fn new() -> Self {
        RegexBuilder {
            fragments: vec![],
            flags: FlagSet::new(),
        }
    }

    /// Appends a raw fragment verbatim, without escaping.
    pub fn add(&mut self, fragment: &str) -> &mut Self {
        self.fragments.push(fragment.to_owned());
        self
    }

    // Preset charsets

    pub fn digit(&mut self) -> &mut Self {
        self.add(DIGIT)
    }

    pub fn word(&mut self) -> &mut Self {
        self.add(r"\w")
    }

    pub fn whitespace(&mut self) -> &mut Self {
        self.add(r"\s")
    }

    pub fn non_whitespace(&mut self) -> &mut Self {
        self.add(r"\S")
    }

    /// ASCII letters only, use `unicode_char` for other scripts.
    pub fn letter(&mut self) -> &mut Self {
        self.add("[a-zA-Z]")
    }

    pub fn any_character(&mut self) -> &mut Self {
        self.add(".")
    }

    /// `[^chars]`, the `chars` are inserted without escaping,
    /// so ranges such as `a-z` are allowed.
    pub fn not_range(&mut self, chars: &str) -> &mut Self {
        self.add(&format!("[^{}]", chars))
    }

    // Password rules
    //
    // Lookaheads that scan the whole remaining text, so they can be
    // stacked at the start of a pattern to require several kinds of
    // characters in any order.

    pub fn has_special_character(&mut self) -> &mut Self {
        self.add("(?=.*[!@#$%^&*])")
    }

    pub fn has_letter(&mut self) -> &mut Self {
        self.add("(?=.*[a-zA-Z])")
    }

    pub fn has_digit(&mut self) -> &mut Self {
        self.add(r"(?=.*\d)")
    }

    // Quantifiers

    pub fn optional(&mut self) -> &mut Self {
        self.add("?")
    }

    /// Makes the preceding quantifier lazy, e.g. `one_or_more().lazy()`
    /// renders `+?`.
    pub fn lazy(&mut self) -> &mut Self {
        self.add("?")
    }

    pub fn exactly(&mut self, n: i64) -> &mut Self {
        self.add(&format!("{{{}}}", n))
    }

    /// Same as `exactly`.
    pub fn repeat(&mut self, count: i64) -> &mut Self {
        self.add(&format!("{{{}}}", count))
    }

    pub fn at_least(&mut self, n: i64) -> &mut Self {
        self.add(&format!("{{{},}}", n))
    }

    /// Rewrites a trailing `\d` of the last fragment into `\d{0,n}`.
    ///
    /// This is NOT a general "at most" quantifier: when the last fragment
    /// does not end with `\d` (or there is no fragment at all) the builder
    /// is left unchanged. Use `between(0, n)` to bound anything else.
    pub fn at_most(&mut self, n: i64) -> &mut Self {
        if let Some(last) = self.fragments.last_mut() {
            if let Some(head) = last.strip_suffix(DIGIT) {
                *last = format!("{}{}{{0,{}}}", head, DIGIT, n);
            }
        }
        self
    }

    pub fn between(&mut self, min: i64, max: i64) -> &mut Self {
        self.add(&format!("{{{},{}}}", min, max))
    }

    pub fn one_or_more(&mut self) -> &mut Self {
        self.add("+")
    }

    pub fn zero_or_more(&mut self) -> &mut Self {
        self.add("*")
    }

    // Groups
    //
    // The opening and closing calls are independent fragments,
    // balancing them is up to the caller.

    /// Non-capturing group `(?:`.
    pub fn start_group(&mut self) -> &mut Self {
        self.add("(?:")
    }

    pub fn start_capture_group(&mut self) -> &mut Self {
        self.add("(")
    }

    pub fn start_named_group(&mut self, name: &str) -> &mut Self {
        self.add(&format!("(?<{}>", name))
    }

    pub fn end_group(&mut self) -> &mut Self {
        self.add(")")
    }

    // Anchors and boundaries

    pub fn start_anchor(&mut self) -> &mut Self {
        self.add("^")
    }

    pub fn end_anchor(&mut self) -> &mut Self {
        self.add("$")
    }

    pub fn word_boundary(&mut self) -> &mut Self {
        self.add(r"\b")
    }

    pub fn non_word_boundary(&mut self) -> &mut Self {
        self.add(r"\B")
    }

    // Lookaround assertions, the sub-pattern is inserted verbatim.

    pub fn negative_lookahead(&mut self, pattern: &str) -> &mut Self {
        self.add(&format!("(?!{})", pattern))
    }

    pub fn positive_lookahead(&mut self, pattern: &str) -> &mut Self {
        self.add(&format!("(?={})", pattern))
    }

    pub fn positive_lookbehind(&mut self, pattern: &str) -> &mut Self {
        self.add(&format!("(?<={})", pattern))
    }

    pub fn negative_lookbehind(&mut self, pattern: &str) -> &mut Self {
        self.add(&format!("(?<!{})", pattern))
    }

    // Unicode categories

    /// Any Unicode letter, `\p{L}`.
    pub fn unicode_char(&mut self) -> &mut Self {
        self.unicode_char_variant("")
    }

    /// A Unicode letter sub-category, the variant is appended directly
    /// to the category letter, e.g. `"u"` renders `\p{Lu}` (uppercase).
    pub fn unicode_char_variant(&mut self, variant: &str) -> &mut Self {
        self.add(&format!(r"\p{{L{}}}", variant))
    }

    pub fn unicode_digit(&mut self) -> &mut Self {
        self.add(r"\p{N}")
    }

    pub fn unicode_punctuation(&mut self) -> &mut Self {
        self.add(r"\p{P}")
    }

    pub fn unicode_symbol(&mut self) -> &mut Self {
        self.add(r"\p{S}")
    }

    /// Appends `text` with every regex metacharacter escaped so that
    /// it only matches itself. The `/` delimiter is escaped too, so the
    /// fragment stays intact inside the output of `to_regexp`.
    pub fn escape_literal(&mut self, text: &str) -> &mut Self {
        let escaped = regex::escape(text).replace('/', r"\/");
        self.add(&escaped)
    }

    // Composites for common validations

    /// One IPv4 address component, 0 to 255 without leading zeros.
    pub fn ipv4_octet(&mut self) -> &mut Self {
        self.add(r"(25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)")
    }

    /// `http://` or `https://`
    pub fn protocol(&mut self) -> &mut Self {
        self.add(r"https?:\/\/")
    }

    pub fn www(&mut self) -> &mut Self {
        self.add(r"(www\.)?")
    }

    /// A dot followed by two or more ASCII letters, e.g. `.com`.
    pub fn tld(&mut self) -> &mut Self {
        self.add(r"\.[a-zA-Z]{2,}")
    }

    pub fn path(&mut self) -> &mut Self {
        self.add(r"(\/[\w-]*)*")
    }

    // Flags

    /// Activates a flag, activating it again has no effect.
    pub fn flag(&mut self, flag: Flag) -> &mut Self {
        self.flags.insert(flag);
        self
    }

    pub fn global(&mut self) -> &mut Self {
        self.flag(Flag::Global)
    }

    pub fn case_insensitive(&mut self) -> &mut Self {
        self.flag(Flag::CaseInsensitive)
    }

    pub fn multiline(&mut self) -> &mut Self {
        self.flag(Flag::Multiline)
    }

    pub fn dot_all(&mut self) -> &mut Self {
        self.flag(Flag::DotAll)
    }

    pub fn sticky(&mut self) -> &mut Self {
        self.flag(Flag::Sticky)
    }

    // Inspecting and rendering

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn flags(&self) -> &FlagSet {
        &self.flags
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// The pattern body, all fragments joined without separators.
    pub fn to_pattern(&self) -> String {
        self.fragments.concat()
    }

    /// The pattern in regex literal notation, `/body/flags`.
    ///
    /// Engines that do not use this notation (e.g. the `regex` crate)
    /// expect `to_pattern` instead.
    pub fn to_regexp(&self) -> String {
        format!("/{}/{}", self.to_pattern(), self.flags)
    }
}
