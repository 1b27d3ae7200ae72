use std::path::PathBuf;

use clap::Args;

use crate::catalog::{load_catalog, CatalogEntry};
use crate::cli::OutputFormat;
use crate::web::config::DEFAULT_LITERATURE_DIR;

#[derive(Args)]
pub struct CatalogArgs {
    /// Directory whose files make up the catalog
    #[arg(long, default_value = DEFAULT_LITERATURE_DIR)]
    pub literature_dir: PathBuf,
}

/// Print the catalog for `args.literature_dir`.
///
/// # Errors
///
/// Returns an error if the directory cannot be read or JSON output fails.
pub fn run(args: &CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = load_catalog(&args.literature_dir)?;
    print!("{}", render(&catalog, format, verbose)?);
    Ok(())
}

fn render(catalog: &[CatalogEntry], format: OutputFormat, verbose: bool) -> anyhow::Result<String> {
    let mut out = String::new();

    match format {
        OutputFormat::Text => {
            let name_width = catalog
                .iter()
                .map(|e| e.display_name.chars().count().min(50))
                .max()
                .unwrap_or(5)
                .max(5);

            out.push_str(&format!("Literature Catalog ({} files)\n\n", catalog.len()));
            out.push_str(&format!("{:<name_w$} File\n", "Title", name_w = name_width));
            out.push_str(&format!("{}\n", "-".repeat(name_width + 5)));
            for e in catalog {
                out.push_str(&format!(
                    "{:<name_w$} {}\n",
                    truncate(&e.display_name, name_width),
                    e.file_name,
                    name_w = name_width
                ));
                if verbose {
                    out.push_str(&format!("  └─ URL: {}\n", e.url));
                }
            }
        }
        OutputFormat::Json => {
            out.push_str(&serde_json::to_string_pretty(catalog)?);
            out.push('\n');
        }
        OutputFormat::Tsv => {
            out.push_str("display_name\tfile_name\turl\n");
            for e in catalog {
                out.push_str(&format!("{}\t{}\t{}\n", e.display_name, e.file_name, e.url));
            }
        }
    }

    Ok(out)
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
