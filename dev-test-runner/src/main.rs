//! Sample runner: every `*.json` under a directory through every target.
//!
//! usage: dev-test-runner [SAMPLES_DIR] [OUT_DIR]
mod keys;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use json_scaffold::codegen::{Codegen, EmitOptions, TargetLanguage};
use json_scaffold::input::read_document;
use json_scaffold::lower::lower_to_decls;
use json_scaffold::build_member;
use rayon::prelude::*;
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct Report {
    sample: PathBuf,
    failures: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let samples_dir = PathBuf::from(args.next().unwrap_or_else(|| "samples".into()));
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "target/samples-out".into()));

    match run(&samples_dir, &out_dir) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("{} {error:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(samples_dir: &Path, out_dir: &Path) -> Result<bool> {
    let pattern = format!("{}/**/*.json", samples_dir.display());
    let samples = glob::glob(&pattern)?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to list samples")?;
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let reports: Vec<Report> = samples
        .par_iter()
        .map(|sample| check_sample(sample, out_dir))
        .collect();

    let mut passed = 0;
    for report in &reports {
        if report.failures.is_empty() {
            passed += 1;
            eprintln!("{} {}", "✅".green(), report.sample.display());
        } else {
            eprintln!("{} {}", "❌".red(), report.sample.display());
            for failure in &report.failures {
                eprintln!("    {failure}");
            }
        }
    }
    let summary = format!("{passed}/{} samples passed", reports.len());
    if passed == reports.len() {
        eprintln!("{}", summary.green().bold());
    } else {
        eprintln!("{}", summary.red().bold());
    }
    Ok(passed == reports.len())
}

fn check_sample(sample: &Path, out_dir: &Path) -> Report {
    let mut failures = Vec::new();
    let doc = match read_document(sample) {
        Ok(doc) => doc,
        Err(error) => {
            failures.push(error.to_string());
            return Report { sample: sample.to_path_buf(), failures };
        }
    };

    let root = build_member(&doc.default_root_name(), &doc.value);
    let options = EmitOptions::default();
    let decls = lower_to_decls(&root, &options);
    debug!(sample = %sample.display(), declarations = decls.len(), "lowered sample");
    let planned: Vec<Vec<String>> = decls
        .iter()
        .map(|d| d.keys().map(str::to_string).collect())
        .collect();

    for target in TargetLanguage::ALL {
        let mut cg = Codegen::new(target, options.clone());
        cg.emit_decls(&decls);
        let src = cg.into_string();

        let rendered = keys::extract_keys(target, &src);
        if rendered != planned {
            failures.push(format!("{target}: rendered keys {rendered:?} != planned {planned:?}"));
        }

        let stem = doc.stem.as_deref().unwrap_or("sample");
        let out = out_dir.join(format!("{stem}.{}", target.extension()));
        if let Err(error) = std::fs::write(&out, &src) {
            failures.push(format!("failed to write {}: {error}", out.display()));
        }
    }

    Report { sample: sample.to_path_buf(), failures }
}
