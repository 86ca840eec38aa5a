//! Identity types shared by graphs and records.

use std::{fmt::Debug, hash::Hash};

/// The user id type of a communication record.
pub type UserId = String;

/// A vertex or edge identity.
///
/// `is_absent` marks identities that carry no value (an empty user name read
/// from a record). Graph mutations reject them.
pub trait Id: Clone + Eq + Hash + Ord + Debug {
    fn is_absent(&self) -> bool {
        false
    }
}

impl Id for String {
    fn is_absent(&self) -> bool {
        self.trim().is_empty()
    }
}

impl<'a> Id for &'a str {
    fn is_absent(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Id for i32 {}
impl Id for i64 {}
impl Id for u32 {}
impl Id for u64 {}
impl Id for usize {}
