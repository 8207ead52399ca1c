//! CLI: sample → (generate | tree)
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::{info, warn};

use json_scaffold::codegen::{generate_code, TargetLanguage};
use json_scaffold::input::{self, Document};
use json_scaffold::lower::DedupPolicy;
use json_scaffold::settings::Settings;
use json_scaffold::{build_member, ObjectMember};

const DEFAULT_TARGET: &str = "typescript";

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// infer a type schema from one JSON sample and scaffold C#, TypeScript or JSDoc declarations
#[derive(Parser, Debug)]
#[command(name = "json-scaffold", version)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// infer and emit declarations for a target language
    Generate(GenerateOut),
    /// infer and print the member tree as JSON
    Tree(TreeOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer to select a subnode in each document (e.g. /data/items/0/payload)
    #[arg(long)]
    json_pointer: Option<String>,

    /// JQ pre-process filter for each document; the first output is used
    #[arg(long)]
    jq_expr: Option<String>,

    /// One or more inputs. May be literal paths, quoted glob patterns or '-' for stdin.
    /// Every input is an independent sample.
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(clap::Parser, Debug)]
struct GenerateOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// target language tag: csharp | typescript | jsdoc [default: typescript]
    #[arg(short, long)]
    target: Option<String>,

    /// root type name (defaults to the input file stem, or Root for stdin)
    #[arg(long)]
    root_name: Option<String>,

    /// JSON settings file; flags given here override it
    #[arg(long)]
    settings: Option<PathBuf>,

    /// spaces per indentation level
    #[arg(long)]
    indent: Option<usize>,

    /// when sibling shapes count as the same type
    #[arg(long, value_enum)]
    dedup: Option<DedupPolicy>,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(clap::Parser, Debug)]
struct TreeOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// root member name (defaults to the input file stem, or Root for stdin)
    #[arg(long)]
    root_name: Option<String>,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load_documents(&self) -> Result<Vec<Document>> {
        let mut documents = Vec::new();
        for pattern in &self.input {
            if pattern == input::STDIN {
                documents.push(self.preprocess(input::read_stdin()?)?);
                continue;
            }
            for path in resolve_file_path_patterns([pattern])? {
                documents.push(self.preprocess(input::read_document(&path)?)?);
            }
        }
        Ok(documents)
    }

    fn preprocess(&self, mut doc: Document) -> Result<Document> {
        if let Some(pointer) = self.json_pointer.as_ref() {
            doc.value = input::select_pointer(doc.value, pointer, &doc.origin)?;
        }
        if let Some(jq_expr) = self.jq_expr.as_ref() {
            let mut outputs = crate::jq_exec::run_jaq(jq_expr, &doc.value)
                .with_context(|| format!("failed to apply jq expression to {}", doc.origin))?;
            if outputs.is_empty() {
                bail!("jq expression produced no output for {}", doc.origin);
            }
            if outputs.len() > 1 {
                warn!(origin = %doc.origin, count = outputs.len(), "jq produced several outputs; using the first");
            }
            doc.value = outputs.swap_remove(0);
        }
        Ok(doc)
    }
}

impl GenerateOut {
    fn settings(&self) -> Result<Settings> {
        let from_file = match self.settings.as_ref() {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        Ok(from_file.merge(Settings {
            root_name: self.root_name.clone(),
            target: self.target.clone(),
            indent: self.indent,
            dedup: self.dedup,
        }))
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Generate(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }

                let settings = target.settings()?;
                let tag = settings
                    .target
                    .clone()
                    .unwrap_or_else(|| DEFAULT_TARGET.to_string());
                if let Err(error) = tag.parse::<TargetLanguage>() {
                    eprintln!("{} {error}", "warning:".yellow().bold());
                }
                let options = settings.emit_options();

                let mut chunks = Vec::new();
                for doc in target.input_settings.load_documents()? {
                    let root_name = settings
                        .root_name
                        .clone()
                        .unwrap_or_else(|| doc.default_root_name());
                    info!(origin = %doc.origin, root = %root_name, target = %tag, "generating declarations");

                    let root = build_member(&root_name, &doc.value);
                    let src = generate_code(&root, &tag, &options);
                    if src.is_empty() {
                        eprintln!(
                            "{} {} has no object shape to declare",
                            "warning:".yellow().bold(),
                            doc.origin
                        );
                        continue;
                    }
                    chunks.push(src);
                }
                write_output(target.out.as_deref(), &chunks.join("\n"))
            }
            Command::Tree(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }

                let trees = target
                    .input_settings
                    .load_documents()?
                    .into_iter()
                    .map(|doc| {
                        let root_name = target
                            .root_name
                            .clone()
                            .unwrap_or_else(|| doc.default_root_name());
                        build_member(&root_name, &doc.value)
                    })
                    .collect::<Vec<ObjectMember>>();

                let mut src = match trees.as_slice() {
                    [single] => serde_json::to_string_pretty(single)?,
                    many => serde_json::to_string_pretty(many)?,
                };
                src.push('\n');
                write_output(target.out.as_deref(), &src)
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn write_output(out: Option<&Path>, src: &str) -> Result<()> {
    match out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(out, src)
                .with_context(|| format!("failed to write {}", out.display()))?;
            eprintln!("{} {}", "wrote".green().bold(), out.display());
        }
        None if src.ends_with('\n') => print!("{src}"),
        None => println!("{src}"),
    }
    Ok(())
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern)? {
                out.push(entry?);
                matched_any = true;
            }
            if !matched_any {
                // explicit glob that matched nothing
                bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
