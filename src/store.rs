//! In-memory project list backed by the REST API.
//!
//! Mutations are synchronous writes to the state. Actions perform exactly one
//! network call and then commit exactly one mutation; a failed call commits
//! nothing. Concurrent actions are not coordinated, so the last response to
//! resolve wins.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use crate::client::{ApiClient, ProjectApi};
use crate::error::Result;
use crate::types::Project;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProjectState {
    pub projects: Vec<Project>,
}

pub struct ProjectStore<A = ApiClient> {
    api: A,
    state: Mutex<ProjectState>,
}

impl<A: ProjectApi> ProjectStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: Mutex::new(ProjectState::default()),
        }
    }

    #[cfg(test)]
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Snapshot of the current project list.
    pub fn projects(&self) -> Vec<Project> {
        self.state().projects.clone()
    }

    /// Replace the project list wholesale.
    pub fn set_projects(&self, projects: Vec<Project>) {
        let mut state = self.state();
        state.projects = projects;
        info!(count = state.projects.len(), "projects replaced");
    }

    /// Append one project to the end of the list.
    pub fn append_project(&self, project: Project) {
        let mut state = self.state();
        state.projects.push(project);
        info!(count = state.projects.len(), "project appended");
    }

    /// Reload the list from `GET {api_url}/projects`.
    pub async fn fetch_projects(&self) -> Result<Vec<Project>> {
        let projects = self.api.list_projects().await.inspect_err(|e| {
            debug!(error = %e, "fetch projects failed");
        })?;

        self.set_projects(projects.clone());
        Ok(projects)
    }

    /// Create a project with `POST {api_url}/projects` and append the
    /// server's record.
    pub async fn add_project(&self, project: &Project) -> Result<Project> {
        let created = self.api.create_project(project).await.inspect_err(|e| {
            debug!(error = %e, "add project failed");
        })?;

        self.append_project(created.clone());
        Ok(created)
    }

    // Commits never run user code under the lock, so a poisoned lock still
    // holds a consistent list.
    fn state(&self) -> MutexGuard<'_, ProjectState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
