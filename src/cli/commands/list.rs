use anyhow::Result;

use super::{GlobalOptions, Session};
use crate::api::Project;
use crate::ui::{Spinner, Style};

pub async fn run_list(global: &GlobalOptions) -> Result<()> {
    let session = Session::connect(global, None)?;

    let spinner = Spinner::new("Fetching projects...");
    let projects = session.client.list(&session.config.token).await?;
    spinner.stop();

    if projects.is_empty() {
        crate::status!("No projects available for this token.");
        return Ok(());
    }

    for project in &projects {
        println!("{}", format_project(project));
    }
    Ok(())
}

/// One `list` line: `<id> (admin|contr) <name>`.
fn format_project(project: &Project) -> String {
    format!(
        "{} {} {}",
        Style::header(&project.id),
        Style::role(project.is_admin()),
        Style::value(&project.name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_project_shows_role() {
        let project = Project {
            id: "123.abc".to_string(),
            name: "Website".to_string(),
            description: String::new(),
            created: None,
            owner: "1".to_string(),
        };
        let line = format_project(&project);
        assert!(line.contains("123.abc"));
        assert!(line.contains("(admin)"));
        assert!(line.contains("Website"));

        let project = Project {
            owner: "0".to_string(),
            ..project
        };
        assert!(format_project(&project).contains("(contr)"));
    }
}
