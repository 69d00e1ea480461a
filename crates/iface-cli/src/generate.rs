//! Source collection, multi-file merge and rendering.

use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use iface_core::{AnalysisResult, Method, RenderLine, RenderSpec};
use iface_parser::{AnalyzeOptions, parse_struct};
use iface_render::make_interface;
use tracing::{debug, warn};

/// Fully resolved inputs of one generation run.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone)]
pub struct Settings {
    pub patterns: Vec<String>,
    pub struct_name: String,
    pub interface_name: String,
    pub package: Option<String>,
    pub header: String,
    pub interface_doc: String,
    pub copy_docs: bool,
    pub copy_type_doc: bool,
    pub include_private: bool,
    pub output: Option<PathBuf>,
}

impl Settings {
    const fn analyze_options(&self) -> AnalyzeOptions {
        AnalyzeOptions {
            include_private_methods: self.include_private,
            copy_type_doc: self.copy_type_doc,
        }
    }
}

/// Analyze every source file and render the interface.
///
/// # Errors
/// Fails when a pattern matches nothing, a file cannot be read or parsed,
/// no package name can be determined, or the output does not format.
pub fn generate(settings: &Settings) -> anyhow::Result<Vec<u8>> {
    let paths = expand_sources(&settings.patterns)?;
    let mut results = Vec::with_capacity(paths.len());
    for path in &paths {
        let src = std::fs::read(path)
            .with_context(|| format!("failed to read source file: {}", path.display()))?;
        let result = parse_struct(&src, &settings.struct_name, settings.analyze_options())
            .with_context(|| format!("failed to analyze {}", path.display()))?;
        debug!(path = %path.display(), methods = result.methods.len(), "analyzed source");
        results.push(result);
    }

    let merged = merge(results);
    if merged.is_empty() {
        warn!(struct_name = %settings.struct_name, "no methods found");
    }
    let spec = build_spec(settings, merged)?;
    make_interface(&spec).with_context(|| {
        format!("failed to render interface {}", settings.interface_name)
    })
}

/// Resolve file arguments in order. An existing path is taken as is;
/// anything else is expanded as a glob pattern and must match a file.
///
/// # Errors
/// Fails on an invalid pattern or one that matches no file.
pub fn expand_sources(patterns: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();
    for pattern in patterns {
        let literal = PathBuf::from(pattern);
        let matches: Vec<PathBuf> = if literal.is_file() {
            vec![literal]
        } else {
            glob::glob(pattern)
                .with_context(|| format!("invalid glob pattern: {pattern}"))?
                .filter_map(Result::ok)
                .filter(|p| p.is_file())
                .collect()
        };
        if matches.is_empty() {
            bail!("no source files matched: {pattern}");
        }
        files.extend(matches.into_iter().filter(|p| seen.insert(p.clone())));
    }
    Ok(files)
}

/// Fold per-file results into one, in file order.
///
/// Methods are deduplicated by name with the first occurrence kept, imports
/// by their text. The first non-empty package and type doc win.
#[must_use]
pub fn merge(results: Vec<AnalysisResult>) -> AnalysisResult {
    let mut merged = AnalysisResult::default();
    let mut method_names = HashSet::new();
    let mut imports = HashSet::new();

    for result in results {
        if merged.package.is_empty() {
            merged.package = result.package;
        }
        if merged.type_doc.is_empty() {
            merged.type_doc = result.type_doc;
        }
        for method in result.methods {
            if method_names.insert(method.name.clone()) {
                merged.methods.push(method);
            } else {
                warn!(method = %method.name, "duplicate method; keeping the first definition");
            }
        }
        for import in result.imports {
            if imports.insert(import.clone()) {
                merged.imports.push(import);
            }
        }
    }
    merged
}

/// Turn the merged analysis into renderer input.
///
/// # Errors
/// Fails when neither `--pkg` nor any source names a package.
pub fn build_spec(settings: &Settings, analysis: AnalysisResult) -> anyhow::Result<RenderSpec> {
    let package = match &settings.package {
        Some(package) => package.clone(),
        None if !analysis.package.is_empty() => analysis.package.clone(),
        None => bail!("cannot determine the output package; pass --pkg"),
    };

    let interface_doc = if settings.interface_doc.is_empty() && settings.copy_type_doc {
        analysis.type_doc.clone()
    } else {
        settings.interface_doc.clone()
    };

    let lines: Vec<RenderLine> = analysis
        .methods
        .iter()
        .flat_map(|method| method_lines(method, settings.copy_docs))
        .collect();

    Ok(RenderSpec {
        header: settings.header.clone(),
        package,
        interface_name: settings.interface_name.clone(),
        interface_doc,
        lines,
        imports: analysis.imports,
    })
}

fn method_lines(method: &Method, copy_docs: bool) -> Vec<RenderLine> {
    if copy_docs {
        method.render_lines()
    } else {
        vec![method.signature_line()]
    }
}

/// Write to `path`, or to stdout when absent.
///
/// # Errors
/// Fails when the destination cannot be written.
pub fn write_output(path: Option<&Path>, rendered: &[u8]) -> anyhow::Result<()> {
    if let Some(path) = path {
        std::fs::write(path, rendered)
            .with_context(|| format!("failed to write output file: {}", path.display()))?;
        debug!(path = %path.display(), bytes = rendered.len(), "wrote interface");
        return Ok(());
    }
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered)
        .and_then(|()| stdout.flush())
        .context("failed to write to stdout")
}
