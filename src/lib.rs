//! The library code for the `frases` page generator. A run is a single linear
//! pass:
//!
//! 1. Loading the phrase list and the template ([`crate::build`])
//! 2. Laying out one page per phrase, each with a slug-based file name and
//!    links to its neighbours ([`crate::page`], [`crate::slug`])
//! 3. Substituting the placeholders and writing every page to disk
//!    ([`crate::template`], [`crate::build`])
//!
//! The first page's previous link and the last page's next link both point
//! back to the site index. File names are positional (`{N}-{slug}.html`), so
//! adding or removing a phrase renumbers everything after it.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod build;
pub mod config;
pub mod page;
pub mod slug;
pub mod template;
