//! Group profile — a named group with a fixed title and member count.

use serde::Serialize;

/// A group record. Every instance carries [`GroupProfile::TITLE`] and
/// [`GroupProfile::MEMBER_COUNT`]; neither is parameterised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupProfile {
  title:        String,
  member_count: i64,
}

impl GroupProfile {
  pub const TITLE: &'static str = "core";
  pub const MEMBER_COUNT: i64 = 3;

  pub fn new() -> Self {
    Self {
      title:        Self::TITLE.to_string(),
      member_count: Self::MEMBER_COUNT,
    }
  }

  pub fn title(&self) -> &str { &self.title }

  pub fn member_count(&self) -> i64 { self.member_count }
}

impl Default for GroupProfile {
  fn default() -> Self { Self::new() }
}
