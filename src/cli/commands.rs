//! CLI command implementations

use crate::cli::{Cli, InputFormat};
use crate::model::Document;
use crate::parser::lexer::is_identifier;
use crate::{Config, Error, Result};
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Read the source file and turn it into intermediate records
fn load_document(source: &Path, input: InputFormat) -> Result<Document> {
    let src = std::fs::read_to_string(source)
        .with_context(|| format!("Cannot open file '{}'", source.display()))?;

    match input {
        InputFormat::Sia => {
            crate::parser::parse_source(&src, &crate::parser::machine_name_for(source))
        }
        InputFormat::Json => {
            let document = serde_json::from_str(&src).map_err(|e| Error::Input {
                file: source.to_path_buf(),
                message: e.to_string(),
            })?;
            validate_records(source, &document)?;
            Ok(document)
        }
    }
}

/// Hold JSON records to the same naming rules the SIA lexer enforces.
///
/// Machine names end up in output file names, so they must be identifiers.
/// Runs before any graph is built or written.
fn validate_records(source: &Path, document: &Document) -> Result<()> {
    let invalid = |message: String| Error::Input {
        file: source.to_path_buf(),
        message,
    };

    for machine in &document.machines {
        if !is_identifier(&machine.name) {
            return Err(invalid(format!("invalid sia name '{}'", machine.name)));
        }
        for state in &machine.states {
            if state.name.is_empty() {
                return Err(invalid(format!("empty state name in sia '{}'", machine.name)));
            }
            for target in &state.targets {
                if target.action.is_empty() {
                    return Err(invalid(format!(
                        "empty action name in state '{}'",
                        state.name
                    )));
                }
                if target.target.is_empty() {
                    return Err(invalid(format!(
                        "empty target name in state '{}'",
                        state.name
                    )));
                }
            }
        }
    }
    Ok(())
}

/// Output path of one machine when a document produces several graphs:
/// `out.graphml` becomes `out_<machine>.graphml`.
pub fn machine_output_path(output: &Path, machine: &str) -> PathBuf {
    let stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("out");
    let file_name = match output.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}_{}.{}", stem, machine, ext),
        None => format!("{}_{}", stem, machine),
    };
    output.with_file_name(file_name)
}

/// Convert command implementation
pub mod convert {
    use super::*;
    use crate::cli::output;
    use crate::diagnostics::SourceContext;
    use crate::export;
    use std::fs::File;
    use std::io::{BufWriter, Write};

    /// Execute the conversion
    pub fn execute(args: Cli, config: Config) -> Result<()> {
        let source = args
            .file
            .ok_or_else(|| Error::custom("Missing argument!"))?;
        let format = args.format.unwrap_or(config.output.format);
        let output_path = args
            .output
            .unwrap_or_else(|| config.default_output_path(format));
        let strict = args.strict || config.diagnostics.strict;

        tracing::info!("Translating {:?} to {}", source, format);
        let document = load_document(&source, args.input)?;
        tracing::debug!("Parsed {} sia definitions", document.machines.len());

        let built = crate::graph::build_document(document)?;

        let ctx = SourceContext::new(&source);
        output::print_diagnostics(&mut std::io::stderr(), &built, &ctx)?;

        let single = built.machines.len() == 1;
        for machine in &built.machines {
            let path = if single {
                output_path.clone()
            } else {
                machine_output_path(&output_path, &machine.graph.name)
            };

            let file = File::create(&path)
                .with_context(|| format!("Cannot create file '{}'", path.display()))?;
            let mut writer = BufWriter::new(file);
            export::write_graph(&mut writer, &machine.graph, format)?;
            writer.flush()?;

            tracing::info!("Wrote graph '{}' to {:?}", machine.graph.name, path);
        }

        output::log_summary(&built);
        if args.stats {
            output::output_table(&mut std::io::stdout(), &built)?;
        }

        let count = built.diagnostic_count();
        if count > 0 {
            tracing::warn!("{} diagnostic(s) reported", count);
            if strict {
                return Err(Error::Strict(count));
            }
        }

        Ok(())
    }
}
