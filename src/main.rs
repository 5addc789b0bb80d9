#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use canopy::cli::{Args, Command};
use canopy::render::{entry_label, render_tree};
use canopy::{logging, Entry};
use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

fn main() {
    match run_app() {
        Ok(()) => {}
        // Downstream closed the pipe (`canopy | head`): nothing left to say.
        Err(e) if is_broken_pipe(&e) => {}
        Err(e) => {
            eprintln!("canopy: {e:#}");
            std::process::exit(1);
        }
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    logging::init(args.verbose, args.quiet);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match &args.command {
        Some(Command::Ls { path, show_hidden }) => list_children(&mut out, path, *show_hidden)?,
        None => {
            let root = Entry::root(&args.path)?;
            let config = args.tree_config();
            info!(root = %root.path().display(), "rendering tree");
            debug!(?config, "traversal settings");
            let lines = render_tree(&mut out, &root, &config).context("failed to write tree")?;
            debug!(lines, "tree written");
        }
    }

    out.flush().context("failed to flush output")?;
    Ok(())
}

fn list_children(out: &mut impl Write, path: &Path, show_hidden: bool) -> Result<()> {
    let dir = Entry::root(path)?;
    for child in dir.visible_children(show_hidden)? {
        writeln!(out, "{}", entry_label(&child)).context("failed to write listing")?;
    }
    Ok(())
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|io| io.kind() == io::ErrorKind::BrokenPipe)
    })
}
