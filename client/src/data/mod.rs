//! Static site content.
//!
//! Everything here is compiled in; pages read it directly and never mutate it.

pub mod about;
pub mod contact;
pub mod nav;
pub mod particles;
pub mod projects;
pub mod slides;
