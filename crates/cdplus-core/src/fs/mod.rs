//! File system abstractions for cdplus.
//!
//! This module provides the listing row type ([`entry::Entry`]) and the
//! directory read service ([`ops::read_directory`], [`ops::DirectoryReader`]).

pub mod entry;
pub mod ops;

pub use entry::{Entry, IconClass};
pub use ops::{read_directory, read_directory_async, DirectoryReader, LocalReader};
