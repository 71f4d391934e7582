//! Workspace profile — a named workspace pinned to a single region.

use serde::Serialize;

/// A workspace record identified by a caller-supplied slug.
///
/// `region` is always [`WorkspaceProfile::REGION`], whatever the slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceProfile {
  slug:   String,
  region: String,
}

impl WorkspaceProfile {
  pub const REGION: &'static str = "eu";

  pub fn new(slug: impl Into<String>) -> Self {
    Self {
      slug:   slug.into(),
      region: Self::REGION.to_string(),
    }
  }

  pub fn slug(&self) -> &str { &self.slug }

  pub fn region(&self) -> &str { &self.region }
}
