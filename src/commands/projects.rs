use serde_json::{Map, Value};
use tabled::Tabled;

use crate::cli::ProjectAddArgs;
use crate::client::ProjectApi;
use crate::error::{BuilderError, Result};
use crate::output;
use crate::store::ProjectStore;
use crate::types::Project;

const FIELDS_WIDTH: usize = 60;

#[derive(Tabled)]
pub struct ProjectRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Fields")]
    fields: String,
}

impl From<&Project> for ProjectRow {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id().unwrap_or_else(|| "-".to_string()),
            name: project.name().unwrap_or_default(),
            fields: output::truncate(&project.extra_fields(), FIELDS_WIDTH),
        }
    }
}

pub async fn list<A: ProjectApi>(store: &ProjectStore<A>) -> Result<()> {
    let projects = store.fetch_projects().await?;

    output::print_table(&projects, |p| ProjectRow::from(p));

    Ok(())
}

pub async fn add<A: ProjectApi>(store: &ProjectStore<A>, args: ProjectAddArgs) -> Result<()> {
    let draft = build_draft(&args)?;
    let created = store.add_project(&draft).await?;

    output::print_item(&created, |project| {
        let label = project
            .name()
            .or_else(|| project.id())
            .unwrap_or_else(|| "project".to_string());
        println!("Created {label}");
        println!("{}", serde_json::to_string_pretty(project).unwrap_or_default());
    });

    Ok(())
}

/// Assemble the POST body from either `--data` or `--name`/`--field`.
fn build_draft(args: &ProjectAddArgs) -> Result<Project> {
    if let Some(data) = &args.data {
        let value: Value = serde_json::from_str(data)?;
        if !value.is_object() {
            return Err(BuilderError::NotAnObject);
        }
        return Ok(Project::new(value));
    }

    let mut fields = Map::new();
    if let Some(name) = &args.name {
        fields.insert("name".to_string(), Value::String(name.clone()));
    }
    for field in &args.fields {
        let (key, raw) = parse_field(field)?;
        fields.insert(key, raw);
    }

    Ok(Project::from_fields(fields))
}

fn parse_field(field: &str) -> Result<(String, Value)> {
    let (key, raw) = field
        .split_once('=')
        .filter(|(key, _)| !key.trim().is_empty())
        .ok_or_else(|| BuilderError::InvalidField(field.to_string()))?;

    // Bare words stay strings; numbers, booleans and JSON literals keep their type.
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));

    Ok((key.trim().to_string(), value))
}
