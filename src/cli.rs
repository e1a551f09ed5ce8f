//! Command-line front end.
//!
//! The search tree is passed as JSON (inline, or `@path` for a file); turning
//! query text into a tree is left to whatever parser produces that JSON.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use searchbind_core::config::Config;
use searchbind_core::{
    Blog, BlogPost, Comment, RecordKind, SearchCompiler, SearchNode, TemplateRegistry, User,
};
use searchbind_data::{seed, Dataset, Table};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "searchbind", about = "Compile free-text search trees into record predicates")]
pub struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/searchbind/config.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write debug logs to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the records matching a search as JSON.
    Search {
        #[command(flatten)]
        query: QueryArgs,

        /// Dataset JSON file. The seed dataset is used when omitted.
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Print the compiled predicate for a search.
    Explain {
        #[command(flatten)]
        query: QueryArgs,
    },
    /// List the registered search templates.
    Templates,
}

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Record type or entity set to search (Blog, BlogPosts, comments, ...).
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: RecordKind,

    /// Search tree as JSON, or `@path` to read it from a file.
    #[arg(long)]
    pub query: String,
}

impl QueryArgs {
    pub fn tree(&self) -> anyhow::Result<SearchNode> {
        let json = match self.query.strip_prefix('@') {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("reading search tree from {path}"))?,
            None => self.query.clone(),
        };
        SearchNode::from_json(&json).context("malformed search tree")
    }
}

/// Execute `cli`, writing results to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref()).context("loading config")?;
    let registry =
        TemplateRegistry::from_config(&config.search).context("invalid search template in config")?;
    let compiler = SearchCompiler::with_options(&registry, config.search.match_options());

    match &cli.command {
        Command::Search { query, data } => {
            let dataset = match data {
                Some(path) => Dataset::load(path)?,
                None => seed(),
            };
            let node = query.tree()?;
            tracing::info!(kind = %query.kind, search = %node, "search");
            let matches = search(&compiler, query.kind, &node, &dataset)
                .with_context(|| format!("cannot search {}", query.kind))?;
            serde_json::to_writer_pretty(&mut *out, &matches)?;
            writeln!(out)?;
        }
        Command::Explain { query } => {
            let node = query.tree()?;
            tracing::info!(kind = %query.kind, search = %node, "explain");
            let lambda = compiler
                .lambda(query.kind, &node)
                .with_context(|| format!("cannot search {}", query.kind))?;
            writeln!(out, "{lambda}")?;
        }
        Command::Templates => {
            for template in registry.templates() {
                writeln!(out, "{template}")?;
            }
        }
    }
    Ok(())
}

/// Compile `node` for `kind` and run it against the matching collection.
pub fn search(
    compiler: &SearchCompiler<'_>,
    kind: RecordKind,
    node: &SearchNode,
    dataset: &Dataset,
) -> anyhow::Result<serde_json::Value> {
    match kind {
        RecordKind::User => search_as::<User>(compiler, node, dataset),
        RecordKind::Blog => search_as::<Blog>(compiler, node, dataset),
        RecordKind::BlogPost => search_as::<BlogPost>(compiler, node, dataset),
        RecordKind::Comment => search_as::<Comment>(compiler, node, dataset),
    }
}

fn search_as<T: Table + Serialize>(
    compiler: &SearchCompiler<'_>,
    node: &SearchNode,
    dataset: &Dataset,
) -> anyhow::Result<serde_json::Value> {
    let predicate = compiler.compile::<T>(node)?;
    Ok(serde_json::to_value(dataset.search(&predicate))?)
}
