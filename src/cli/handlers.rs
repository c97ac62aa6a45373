// FILE: src/cli/handlers.rs
use crate::{
    cli::{AnchorCli, OutputFormat},
    AnchorKind, LayoutDocument, LayoutError, LayoutPlan, LinearConstraint, ResolutionStats,
    Resolver, Result,
};

use std::fmt::Write as _;
use std::path::Path;
use std::time::Instant;

// --- RESOLVE ---
pub fn handle_resolve_command(cli: &AnchorCli, matches: &clap::ArgMatches) -> Result<()> {
    let input_path = required(matches, "input")?;
    let format = cli.output_format(matches);

    let start = Instant::now();
    let document = LayoutDocument::load(input_path)?;
    let resolver = Resolver::new(&document);
    let mut plan = resolver.resolve(&document)?;

    if let Some(set) = cli.activate_set(matches) {
        plan.activate_only(&set)?;
        log::info!("Activated constraint set '{}'", set);
    }
    let elapsed = start.elapsed();

    let rendered = match format {
        OutputFormat::Text => render_text(&plan),
        OutputFormat::Json => serde_json::to_string_pretty(&plan)
            .map_err(|e| LayoutError::invalid_format(format!("JSON serialization error: {}", e)))?,
    };

    if let Some(output_file) = matches.get_one::<String>("output") {
        std::fs::write(output_file, rendered)?;
        println!("✅ Constraints saved to {}", output_file);
    } else {
        println!("{}", rendered);
    }

    if matches.get_flag("stats") {
        print_stats(&resolver.stats(&document, &plan), elapsed.as_secs_f64() * 1000.0);
    }
    Ok(())
}

fn render_text(plan: &LayoutPlan<LinearConstraint>) -> String {
    let mut out = String::new();
    for set in plan.iter() {
        let _ = writeln!(out, "[{}]", set.name);
        for constraint in &set.constraints {
            let _ = writeln!(out, "  {}", constraint);
        }
    }
    out.trim_end().to_string()
}

// --- CHECK ---
pub fn handle_check_command(cli: &AnchorCli, matches: &clap::ArgMatches) -> Result<()> {
    let input_path = required(matches, "input")?;
    let recursive = matches.get_flag("recursive");

    if recursive && Path::new(input_path).is_dir() {
        check_directory_recursive(input_path, &cli.extensions())
    } else {
        check_file(Path::new(input_path))
    }
}

/// The validation error is printed by `check_single_file`; the returned
/// error only summarises.
fn check_file(input_path: &Path) -> Result<()> {
    if check_single_file(input_path) {
        Ok(())
    } else {
        Err(LayoutError::invalid_format(format!(
            "{} has errors",
            input_path.display()
        )))
    }
}

fn check_single_file(input_path: &Path) -> bool {
    println!("🔍 Checking {}", input_path.display());
    let result = LayoutDocument::load(input_path)
        .and_then(|document| Resolver::new(&document).validate(&document));
    match result {
        Ok(()) => {
            println!("✅ {} - No issues found", input_path.display());
            true
        }
        Err(e) => {
            println!("❌ {} - {}", input_path.display(), e);
            false
        }
    }
}

fn check_directory_recursive(dir_path: &str, extensions: &[String]) -> Result<()> {
    let mut total_files = 0;
    let mut error_files = 0;

    for entry in walkdir::WalkDir::new(dir_path) {
        let entry = entry.map_err(|e| {
            LayoutError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Directory traversal error: {}", e),
            ))
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches_extension = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext));
        if matches_extension {
            total_files += 1;
            if !check_single_file(entry.path()) {
                error_files += 1;
            }
        }
    }

    println!("\n📊 Check Summary:");
    println!("   Total files: {}", total_files);
    println!("   Files with errors: {}", error_files);

    if error_files > 0 {
        Err(LayoutError::invalid_format(format!(
            "{} layout files have errors",
            error_files
        )))
    } else {
        Ok(())
    }
}

// --- KINDS ---
pub fn handle_kinds_command() -> Result<()> {
    for kind in AnchorKind::all() {
        let far = match kind {
            AnchorKind::Axis(axis) if axis.is_far_edge() => " (far edge, inset negated)",
            _ => "",
        };
        println!("{:<14} {}{}", kind.name(), kind.category(), far);
    }
    Ok(())
}

// --- HELPERS ---
fn required<'a>(matches: &'a clap::ArgMatches, name: &str) -> Result<&'a String> {
    matches
        .get_one::<String>(name)
        .ok_or_else(|| LayoutError::invalid_format(format!("Missing argument: {}", name)))
}

fn print_stats(stats: &ResolutionStats, elapsed_ms: f64) {
    println!("\n📊 Resolution Statistics:");
    println!("   Views: {}", stats.view_count);
    println!("   Rules: {}", stats.rule_count);
    println!("   Sets: {}", stats.set_count);
    println!("   Constraints: {} ({} active)", stats.constraint_count, stats.active_count);
    println!("   Time: {:.2}ms", elapsed_ms);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_render_text_groups_by_set() {
        let document = LayoutDocument::parse(
            r#"
views = ["root", "title"]
[[rules]]
set = "portrait"
view = "title"
anchors = ["top", "trailing"]
to = "root"
constant = 16
"#,
            crate::DocumentFormat::Toml,
        )
        .unwrap();
        let plan = Resolver::new(&document).resolve(&document).unwrap();
        assert_eq!(
            render_text(&plan),
            "[portrait]\n  title.trailing == root.trailing - 16 [active]\n  title.top == root.top + 16 [active]"
        );
    }

    #[test]
    fn test_check_file_returns_summary_error() {
        let temp_dir = TempDir::new().unwrap();
        let good = temp_dir.path().join("good.toml");
        let bad = temp_dir.path().join("bad.toml");
        fs::write(
            &good,
            "views = [\"a\", \"b\"]\n[[rules]]\nview = \"a\"\nanchors = [\"top\"]\nto = \"b\"\n",
        )
        .unwrap();
        fs::write(
            &bad,
            "views = [\"a\"]\n[[rules]]\nview = \"a\"\nanchors = [\"top\"]\nto = \"missing\"\n",
        )
        .unwrap();

        assert!(check_file(&good).is_ok());
        match check_file(&bad) {
            Err(LayoutError::InvalidFormat { message }) => assert!(message.ends_with("has errors")),
            other => panic!("expected summary error, got {:?}", other),
        }
    }

    #[test]
    fn test_check_directory_counts_bad_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("good.toml"),
            "views = [\"a\", \"b\"]\n[[rules]]\nview = \"a\"\nanchors = [\"top\"]\nto = \"b\"\n",
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("bad.json"),
            r#"{"views": ["a"], "rules": [{"view": "a", "anchors": ["top"], "to": "missing"}]}"#,
        )
        .unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();

        let extensions = vec!["toml".to_string(), "json".to_string()];
        let dir = temp_dir.path().to_str().unwrap();
        assert!(check_directory_recursive(dir, &extensions).is_err());

        fs::remove_file(temp_dir.path().join("bad.json")).unwrap();
        assert!(check_directory_recursive(dir, &extensions).is_ok());
    }
}
