use anyhow::{bail, Context, Result};
use clap::Parser;
use fs_tree::prelude::*;
use path_clean::PathClean;
use std::path::{Path, PathBuf};

/// Browse the filesystem as a lazily expanded forest
#[derive(Parser, Debug)]
#[command(name = "fs-tree", version, about)]
struct Cli {
    /// Directories to use as roots instead of the host's filesystem roots
    roots: Vec<PathBuf>,

    /// Number of levels to expand below each root
    #[arg(short, long, default_value_t = 1)]
    depth: usize,

    /// Show hidden entries
    #[arg(short, long)]
    all: bool,

    /// Draw [D]/[F] instead of pictographs
    #[arg(long)]
    ascii: bool,

    /// Expand the directories leading to this path
    #[arg(long)]
    reveal: Option<PathBuf>,

    /// Do not print the heading line
    #[arg(long)]
    no_title: bool,
}

impl Cli {
    fn view_options(&self) -> ViewOptions {
        let options = ViewOptions::new()
            .max_depth(self.depth)
            .hidden(if self.all {
                HiddenPolicy::Include
            } else {
                HiddenPolicy::Exclude
            })
            .icons(if self.ascii {
                IconStyle::Ascii
            } else {
                IconStyle::Glyph
            });

        if self.no_title {
            options.title(None::<String>)
        } else {
            options
        }
    }
}

/// Turn user input into the absolute, normalized form the tree uses
fn absolute(path: &Path) -> Result<PathBuf> {
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .context("Failed to read the current directory")?
            .join(path)
    };
    Ok(path.clean())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let options = cli.view_options();
    log::debug!("view options: {:?}", options);

    let roots = if cli.roots.is_empty() {
        list_roots()
    } else {
        let mut roots = Vec::with_capacity(cli.roots.len());
        for path in &cli.roots {
            let path = absolute(path)?;
            if !path.exists() {
                bail!("Root does not exist: {}", path.display());
            }
            roots.push(FsEntry::new(path));
        }
        roots
    };

    let mut model = TreeModel::build_with_policy(roots, options.hidden);

    if let Some(target) = &cli.reveal {
        let target = absolute(target)?;
        if model.reveal(&target).is_none() {
            bail!("Cannot reveal {}", target.display());
        }
    }

    print!("{}", render(&mut model, &options));
    Ok(())
}
