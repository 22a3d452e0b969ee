use anyhow::{Context, Result};
use colored::Colorize;
use formcraft::{render_form, FormSchema, FormSession, FormcraftConfig};
use std::fs;
use std::path::Path;

pub fn execute(schema_path: &Path, output: Option<&Path>, config: &FormcraftConfig) -> Result<()> {
    let schema = FormSchema::load(schema_path)
        .with_context(|| format!("Failed to load schema: {:?}", schema_path))?;

    let html = render(schema, config);

    match output {
        Some(path) => {
            fs::write(path, &html).with_context(|| format!("Failed to write {:?}", path))?;
            eprintln!("{} {}", "Rendered to".green().bold(), path.display());
        }
        None => println!("{}", html),
    }

    Ok(())
}

/// Render a fresh session of `schema`
pub fn render(schema: FormSchema, config: &FormcraftConfig) -> String {
    let session = FormSession::from_config(schema, config);
    render_form(&session, &config.render).into_string()
}
