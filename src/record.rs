//! The vehicle record and its bounded text fields

use std::fmt;

/// Maximum visible characters kept for a brand
pub const MAX_BRAND_LEN: usize = 19;

/// Maximum visible characters kept for a model
pub const MAX_MODEL_LEN: usize = 29;

/// Owned text holding at most `N` characters
///
/// Longer input is cut at construction; the excess is dropped silently.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoundedText<const N: usize>(String);

impl<const N: usize> BoundedText<N> {
    pub fn new(s: &str) -> Self {
        match s.char_indices().nth(N) {
            Some((cut, _)) => Self(s[..cut].to_string()),
            None => Self(s.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<const N: usize> fmt::Display for BoundedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub type Brand = BoundedText<MAX_BRAND_LEN>;
pub type Model = BoundedText<MAX_MODEL_LEN>;

/// One catalog entry
#[derive(Clone, Debug, PartialEq)]
pub struct Vehicle {
    pub brand: Brand,
    pub model: Model,
    pub year: i32,
    /// Kilometres driven
    pub mileage: i32,
    pub price: f64,
}

impl Vehicle {
    pub fn new(brand: &str, model: &str, year: i32, mileage: i32, price: f64) -> Self {
        Self {
            brand: Brand::new(brand),
            model: Model::new(model),
            year,
            mileage,
            price,
        }
    }

    /// ASCII case-insensitive exact brand match
    pub fn has_brand(&self, brand: &str) -> bool {
        self.brand.as_str().eq_ignore_ascii_case(brand)
    }
}
