//! # Regex Utilities
//!
//! The sentence split pattern needs look-behind, which the [`regex`] crate does not
//! support; the word pattern does not. We'd prefer to stay on [`regex`] when a pattern
//! permits it, and fall up to [`fancy_regex`] only when needed.
//!
//! * Labeling Patterns - [`RegexWrapperPattern`]
//!   * [`RegexWrapperPattern::Basic`] - a pattern which was written for [`regex`].
//!   * [`RegexWrapperPattern::Fancy`] - a pattern which was written for [`fancy_regex`].
//!   * [`RegexWrapperPattern::Adaptive`] - unknown target, try basic; then fall-up to fancy.
//! * Wrapping Compiled Regex - [`RegexWrapper`]

pub mod regex_wrapper;

#[doc(inline)]
pub use regex_wrapper::{ErrorWrapper, MatchesWrapper, RegexWrapper, RegexWrapperPattern};
