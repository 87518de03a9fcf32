use std::fmt;
use std::ops::{Add, Sub};


/// An ordered pair of two independently typed values.
///
/// Both fields are always initialized. Comparisons are lexicographic
/// (the first field decides, the second breaks ties) and arithmetic is
/// element-wise; both are only available when the field types support
/// them, so misuse is rejected at compile time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair<T1, T2> {
    first: T1,
    second: T2,
}

impl<T1, T2> Pair<T1, T2> {
    pub fn new(first: T1, second: T2) -> Self {
        Self { first, second }
    }

    pub fn first_ref(&self) -> &T1 {
        &self.first
    }

    pub fn second_ref(&self) -> &T2 {
        &self.second
    }

    pub fn set_first(&mut self, value: T1) {
        self.first = value;
    }

    pub fn set_second(&mut self, value: T2) {
        self.second = value;
    }

    /// Consumes the pair, handing both fields back to the caller.
    pub fn into_parts(self) -> (T1, T2) {
        (self.first, self.second)
    }
}

impl<T1: Clone, T2: Clone> Pair<T1, T2> {
    /// Returns a copy of the first field. Internal state cannot be
    /// mutated through the return value.
    pub fn first(&self) -> T1 {
        self.first.clone()
    }

    /// Returns a copy of the second field.
    pub fn second(&self) -> T2 {
        self.second.clone()
    }
}

impl<T1, T2> From<(T1, T2)> for Pair<T1, T2> {
    fn from((first, second): (T1, T2)) -> Self {
        Self { first, second }
    }
}

impl<T1, T2> From<Pair<T1, T2>> for (T1, T2) {
    fn from(pair: Pair<T1, T2>) -> Self {
        (pair.first, pair.second)
    }
}

impl<T1: Add<Output = T1>, T2: Add<Output = T2>> Add for Pair<T1, T2> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            first: self.first + other.first,
            second: self.second + other.second,
        }
    }
}

impl<T1: Sub<Output = T1>, T2: Sub<Output = T2>> Sub for Pair<T1, T2> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            first: self.first - other.first,
            second: self.second - other.second,
        }
    }
}

// to_string() goes through this impl, so the two renderings cannot diverge
impl<T1: fmt::Display, T2: fmt::Display> fmt::Display for Pair<T1, T2> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}
