//! # Project Data Structures
//!
//! The `Project` struct groups spline cases for one job so they can be saved,
//! reloaded and evaluated together. Projects serialize to human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (schema version, title, timestamps)
//! └── cases: Vec<SplineCase> (id + input, in insertion order)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use spline_core::calculations::SplineForm;
//! use spline_core::project::Project;
//!
//! let mut project = Project::new("Gearbox input shafts");
//! let id = project.add_case(SplineForm::demo().to_input());
//!
//! for (case_id, outcome) in project.evaluate() {
//!     assert_eq!(case_id, id);
//!     assert!(outcome.is_ok());
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::calculations::spline::{calculate, SplineInput, SplineResult};
use crate::errors::CalcResult;

/// Current schema version for project files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (schema version, title, timestamps)
    pub meta: ProjectMetadata,

    /// Spline cases in the order they were added
    #[serde(default)]
    pub cases: Vec<SplineCase>,
}

/// One spline coupling in a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplineCase {
    pub id: Uuid,
    pub input: SplineInput,
}

impl Project {
    /// Create a new empty project with a descriptive title.
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                title: title.into(),
                created: now,
                modified: now,
            },
            cases: Vec::new(),
        }
    }

    /// Add a spline case to the project.
    ///
    /// Returns the UUID assigned to the case.
    pub fn add_case(&mut self, input: SplineInput) -> Uuid {
        let id = Uuid::new_v4();
        self.cases.push(SplineCase { id, input });
        self.touch();
        id
    }

    /// Remove a case by UUID.
    ///
    /// Returns the removed input if it existed.
    pub fn remove_case(&mut self, id: &Uuid) -> Option<SplineInput> {
        let index = self.cases.iter().position(|case| case.id == *id)?;
        let case = self.cases.remove(index);
        self.touch();
        Some(case.input)
    }

    /// Get a case input by UUID.
    pub fn get_case(&self, id: &Uuid) -> Option<&SplineInput> {
        self.cases.iter().find(|case| case.id == *id).map(|case| &case.input)
    }

    /// Get a mutable reference to a case input by UUID.
    ///
    /// Marks the project as modified when the case is found.
    pub fn get_case_mut(&mut self, id: &Uuid) -> Option<&mut SplineInput> {
        let now = Utc::now();
        let case = self.cases.iter_mut().find(|case| case.id == *id)?;
        self.meta.modified = now;
        Some(&mut case.input)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn case_count(&self) -> usize {
        self.cases.len()
    }

    /// Run every case in order.
    ///
    /// Each case is independent: a failing case yields its error and the
    /// remaining cases still run.
    pub fn evaluate(&self) -> Vec<(Uuid, CalcResult<SplineResult>)> {
        let outcomes: Vec<_> = self
            .cases
            .iter()
            .map(|case| (case.id, calculate(&case.input)))
            .collect();
        let failed = outcomes.iter().filter(|(_, outcome)| outcome.is_err()).count();
        info!(
            title = %self.meta.title,
            cases = outcomes.len(),
            failed,
            "evaluated project"
        );
        outcomes
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// What the cases have in common (machine, job, design study)
    #[serde(default)]
    pub title: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}
