//! # Tree Command Implementation
//!
//! This module implements the `tree` subcommand, which displays every
//! managed project with its resolved dependencies as a tree.
//!
//! Dependencies that are themselves managed projects are expanded, so the
//! tree shows how the projects build on each other. Expansion stops at a
//! project that is already on the current path.
//!
//! This command is a safe, read-only operation that does not modify any files.

use std::borrow::Cow;
use std::io;

use anyhow::Result;
use clap::Args;
use ptree::{print_tree, Style, TreeItem};

use project_manager::phases::orchestrator::LoadedModel;
use project_manager::phases::ProjectSet;
use project_manager::project::DependencySpec;

use super::{load_model, ConfigArgs};

/// Display projects and their dependencies as a tree
#[derive(Args, Debug)]
pub struct TreeArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Maximum depth to display in the tree.
    ///
    /// Use 1 to show only the direct dependencies of each project.
    #[arg(long, value_name = "NUM")]
    pub depth: Option<usize>,
}

/// Execute the `tree` command.
pub fn execute(args: TreeArgs) -> Result<()> {
    let model = load_model(&args.config)?;
    let root = build_tree(&model, args.depth.unwrap_or(usize::MAX));
    print_tree(&root).map_err(|e| anyhow::anyhow!("Failed to display tree: {}", e))?;
    Ok(())
}

/// Build the tree of all projects of a model
fn build_tree(model: &LoadedModel, max_depth: usize) -> TreeNode {
    let children = model
        .projects
        .iter()
        .map(|project| {
            let mut path = vec![project.id()];
            TreeNode {
                label: format!("{} ({})", project.id(), project.coordinate().gav()),
                children: dependency_nodes(
                    &model.projects,
                    project.dependencies(),
                    &mut path,
                    max_depth,
                ),
            }
        })
        .collect();
    TreeNode {
        label: "projects".to_string(),
        children,
    }
}

fn dependency_nodes<'a>(
    projects: &'a ProjectSet,
    dependencies: &'a [DependencySpec],
    path: &mut Vec<&'a str>,
    max_depth: usize,
) -> Vec<TreeNode> {
    if path.len() > max_depth {
        return Vec::new();
    }
    dependencies
        .iter()
        .map(|dependency| {
            let label = format!(
                "{}:{}:{} [{}]",
                dependency.group_id, dependency.artifact_id, dependency.version, dependency.scope
            );
            let managed = projects.iter().find(|p| {
                let c = p.coordinate();
                c.group() == dependency.group_id
                    && c.artifact() == dependency.artifact_id
                    && c.version() == dependency.version
            });
            let children = match managed {
                Some(project) if !path.contains(&project.id()) => {
                    path.push(project.id());
                    let nodes = dependency_nodes(projects, project.dependencies(), path, max_depth);
                    path.pop();
                    nodes
                }
                _ => Vec::new(),
            };
            TreeNode { label, children }
        })
        .collect()
}

/// Tree node structure for ptree visualization
#[derive(Clone)]
struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeItem for TreeNode {
    type Child = TreeNode;

    fn write_self<W: io::Write>(&self, f: &mut W, _style: &Style) -> io::Result<()> {
        write!(f, "{}", self.label)
    }

    fn children(&self) -> Cow<'_, [Self::Child]> {
        Cow::Borrowed(&self.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    use project_manager::config::ManagerConfig;
    use project_manager::phases::orchestrator;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn descriptor(id: &str, dependencies: &str) -> String {
        format!(
            "pm.id={id}\nmvn.group.id=com.x\nmvn.artifact.id={id}\nmvn.version=1.0\npm.dependencies={dependencies}\n"
        )
    }

    fn model(temp: &TempDir) -> LoadedModel {
        let root = temp.path();
        let dirs: Vec<String> = ["app", "core", "util"]
            .iter()
            .map(|d| format!("{d}={}", root.join(d).display()))
            .collect();
        write(&root.join("config/projects.pm"), &dirs.join("\n"));
        write(&root.join("app/src/pm/project.properties"), &descriptor("app", "core"));
        write(&root.join("core/src/pm/project.properties"), &descriptor("core", "util/test"));
        write(&root.join("util/src/pm/project.properties"), &descriptor("util", ""));
        orchestrator::load(&ManagerConfig::new(root.join("config"))).unwrap()
    }

    fn labels(node: &TreeNode) -> Vec<&str> {
        node.children.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn test_tree_expands_managed_dependencies() {
        let temp = TempDir::new().unwrap();
        let tree = build_tree(&model(&temp), usize::MAX);

        assert_eq!(
            labels(&tree),
            vec!["app (com.x:app:1.0)", "core (com.x:core:1.0)", "util (com.x:util:1.0)"]
        );
        let app = &tree.children[0];
        assert_eq!(labels(app), vec!["com.x:core:1.0 [compile]"]);
        assert_eq!(labels(&app.children[0]), vec!["com.x:util:1.0 [test]"]);
    }

    #[test]
    fn test_tree_depth_limit() {
        let temp = TempDir::new().unwrap();
        let tree = build_tree(&model(&temp), 1);
        let app = &tree.children[0];
        assert_eq!(labels(app), vec!["com.x:core:1.0 [compile]"]);
        assert!(app.children[0].children.is_empty());
    }
}
