//! Navigation logic for cdplus.
//!
//! [`listing::Listing`] orders a directory's entries for display,
//! [`filter`] narrows them by name, and [`navigator::NavigatorState`] ties
//! both together into the event-driven state machine the frontend drives.

pub mod filter;
pub mod listing;
pub mod navigator;
