//! Person profile — an individual with a display name, age, and email.

use serde::Serialize;

/// A person record. `is_active` is always `true` after construction; no
/// constructor parameter exists to override it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonProfile {
  name:      String,
  age:       i64,
  email:     String,
  is_active: bool,
}

impl PersonProfile {
  /// Build a profile from the given values, stored verbatim. Empty strings
  /// and negative ages are accepted.
  pub fn new(name: impl Into<String>, age: i64, email: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      age,
      email: email.into(),
      is_active: true,
    }
  }

  pub fn name(&self) -> &str { &self.name }

  pub fn age(&self) -> i64 { self.age }

  /// Not checked for format.
  pub fn email(&self) -> &str { &self.email }

  pub fn is_active(&self) -> bool { self.is_active }
}
