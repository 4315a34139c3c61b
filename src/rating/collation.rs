//! Name ordering used as the last ranking tie-break.
//!
//! Names are compared at primary strength for the league's locale: accents
//! and case are ignored, so "Ábel" and "Abel" compare equal and the stable
//! sort keeps their input order. Letters the locale treats as distinct
//! (Spanish `ñ`) still sort on their own.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::Locale;
use log::warn;

pub const DEFAULT_LOCALE: &str = "es";

pub struct NameCollator {
    collator: Option<Collator>,
}

impl NameCollator {
    /// Falls back to the root collation when `locale` is not a valid tag, and
    /// to plain code point order when no collation data can be loaded at all.
    pub fn new(locale: &str) -> Self {
        let tagged = match locale.parse::<Locale>() {
            Ok(parsed) => Collator::try_new(&(&parsed).into(), primary_strength()).ok(),
            Err(err) => {
                warn!("Invalid collation locale {:?}: {}", locale, err);
                None
            }
        };
        let collator = tagged.or_else(|| Collator::try_new(&Default::default(), primary_strength()).ok());
        if collator.is_none() {
            warn!("No collation data available, names compare by code point");
        }

        Self { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let a = collapse_whitespace(a);
        let b = collapse_whitespace(b);
        match &self.collator {
            Some(collator) => collator.compare(&a, &b),
            None => a.cmp(&b),
        }
    }

    /// Pairs of names that compare equal, in sorted order
    pub fn clashes<'a>(&self, names: &[&'a str]) -> Vec<(&'a str, &'a str)> {
        let mut sorted = names.to_vec();
        sorted.sort_by(|a, b| self.compare(a, b));
        sorted
            .windows(2)
            .filter(|pair| self.compare(pair[0], pair[1]) == Ordering::Equal)
            .map(|pair| (pair[0], pair[1]))
            .collect()
    }
}

impl Default for NameCollator {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

fn primary_strength() -> CollatorOptions {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Primary);
    options
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
