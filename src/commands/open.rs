use crate::client::ProjectApi;
use crate::error::Result;
use crate::output;
use crate::router::{Router, View};
use crate::store::ProjectStore;

use super::projects::ProjectRow;

/// Load the application at its root, navigate to `path` if one was given,
/// and render whatever view the final location resolves to.
pub async fn run<A: ProjectApi>(
    store: &ProjectStore<A>,
    router: &mut Router,
    path: Option<String>,
) -> Result<()> {
    let home = router.href(View::ProjectBuilder);
    let mut view = router.replace(&home);
    if let Some(path) = path {
        view = router.push(&path);
    }

    match view {
        Some(View::ProjectBuilder) => render_builder(store).await,
        None => {
            let location = router.current().unwrap_or_default().to_string();
            output::print_message(&format!("No route matches {location}"));
            Ok(())
        }
    }
}

async fn render_builder<A: ProjectApi>(store: &ProjectStore<A>) -> Result<()> {
    store.fetch_projects().await?;

    if !output::is_json_output() {
        println!("{}", output::heading(View::ProjectBuilder.name()));
    }
    output::print_table(&store.projects(), |p| ProjectRow::from(p));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::json;

    use crate::types::Project;

    /// Backend that counts list calls and always returns one project.
    #[derive(Default)]
    struct CountingApi {
        fetches: AtomicUsize,
    }

    impl ProjectApi for CountingApi {
        async fn list_projects(&self) -> Result<Vec<Project>> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(vec![Project::new(json!({"id": 1, "name": "A"}))])
        }

        async fn create_project(&self, project: &Project) -> Result<Project> {
            Ok(project.clone())
        }
    }

    fn fetches(store: &ProjectStore<CountingApi>) -> usize {
        store.api().fetches.load(Ordering::SeqCst)
    }

    #[tokio::test]
    async fn test_default_path_renders_builder() {
        let store = ProjectStore::new(CountingApi::default());
        let mut router = Router::new("/app");

        run(&store, &mut router, None).await.unwrap();

        assert_eq!(fetches(&store), 1);
        assert_eq!(store.projects(), vec![Project::new(json!({"id": 1, "name": "A"}))]);
        assert_eq!(router.current(), Some("/app/"));
    }

    #[tokio::test]
    async fn test_unhandled_path_skips_fetch() {
        let store = ProjectStore::new(CountingApi::default());
        let mut router = Router::new("/app");

        run(&store, &mut router, Some("/elsewhere".to_string()))
            .await
            .unwrap();

        assert_eq!(fetches(&store), 0);
        assert!(store.projects().is_empty());
        assert_eq!(router.current(), Some("/elsewhere"));
    }

    #[tokio::test]
    async fn test_root_outside_base_is_unhandled() {
        let store = ProjectStore::new(CountingApi::default());
        let mut router = Router::new("/app");

        run(&store, &mut router, Some("/".to_string())).await.unwrap();

        assert_eq!(fetches(&store), 0);
        assert!(store.projects().is_empty());
    }

    #[tokio::test]
    async fn test_explicit_builder_path_renders() {
        let store = ProjectStore::new(CountingApi::default());
        let mut router = Router::new("/app");

        run(&store, &mut router, Some("/app/?tab=recent".to_string()))
            .await
            .unwrap();

        assert_eq!(fetches(&store), 1);
        assert_eq!(store.projects().len(), 1);
    }
}
