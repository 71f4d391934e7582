//! A bundle of one record of each kind, as handed to a test harness.
//!
//! The records are only co-located here; none refers to another.

use serde::Serialize;

use crate::{GroupProfile, PersonProfile, WorkspaceProfile};

pub const SAMPLE_PERSON_NAME: &str = "Alice";
pub const SAMPLE_PERSON_AGE: i64 = 30;
pub const SAMPLE_PERSON_EMAIL: &str = "alice@example.com";
pub const SAMPLE_WORKSPACE_SLUG: &str = "acme-prod";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureSet {
  pub person:    PersonProfile,
  pub group:     GroupProfile,
  pub workspace: WorkspaceProfile,
}

impl FixtureSet {
  pub fn new(
    person: PersonProfile,
    group: GroupProfile,
    workspace: WorkspaceProfile,
  ) -> Self {
    Self {
      person,
      group,
      workspace,
    }
  }

  /// The canonical sample set built from the `SAMPLE_*` constants.
  pub fn sample() -> Self {
    let set = Self::new(
      PersonProfile::new(
        SAMPLE_PERSON_NAME,
        SAMPLE_PERSON_AGE,
        SAMPLE_PERSON_EMAIL,
      ),
      GroupProfile::new(),
      WorkspaceProfile::new(SAMPLE_WORKSPACE_SLUG),
    );
    tracing::debug!(
      workspace = %set.workspace.slug(),
      person = %set.person.name(),
      "loaded sample fixture set"
    );
    set
  }
}
