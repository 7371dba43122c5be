//! Silver and gold stages.
//!
//! The silver stage for one dataset runs, in order:
//! 1. **Load**: the dataset's adapter reads the raw source
//! 2. **Normalize**: the adapter maps it onto the canonical schema
//! 3. **Label**: `outcome_dm` is derived when the source lacks it
//! 4. **Validate**: the table is coerced and checked against the schema
//! 5. **Persist**: the validated table is written as parquet
//!
//! The gold stage merges every persisted silver table.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use hds_adapters::{AdapterRegistry, Fetcher};
use hds_config::{ConfigPaths, DatasetRegistry, load_criteria};
use hds_model::{LabelCriteria, SilverFrame, SilverFrameMeta};
use hds_output::{DataLayout, build_gold, list_silver_files, read_silver, write_silver};
use hds_transform::apply_labels;
use hds_validate::{SchemaError, collect_issues, validate};
use polars::prelude::DataFrame;
use tracing::{error, info, info_span};

/// Everything the silver stage needs, loaded once per run.
pub struct PipelineContext {
    pub adapters: AdapterRegistry,
    pub datasets: DatasetRegistry,
    pub criteria: LabelCriteria,
    pub layout: DataLayout,
}

impl PipelineContext {
    /// Loads the registry and criteria from `config_dir`.
    pub fn load(config_dir: &Path, data_dir: &Path, fetcher: Arc<dyn Fetcher>) -> Result<Self> {
        let paths = ConfigPaths::new(config_dir);
        let datasets = DatasetRegistry::load(&paths.registry()).context("load dataset registry")?;
        let criteria = load_criteria(&paths.criteria()).context("load label criteria")?;
        Ok(Self {
            adapters: AdapterRegistry::builtin(fetcher),
            datasets,
            criteria,
            layout: DataLayout::new(data_dir),
        })
    }
}

/// Result of the silver stage for one dataset.
#[derive(Debug)]
pub struct SilverOutcome {
    pub dataset: String,
    pub adapter: &'static str,
    pub location: Option<String>,
    pub rows: usize,
    pub positives: usize,
    pub labeled_rows: usize,
    pub extra_columns: Vec<String>,
    pub path: PathBuf,
}

/// Runs load, normalize, label and validate for `dataset` without writing.
pub fn build_silver(ctx: &PipelineContext, dataset: &str) -> Result<(SilverFrame, &'static str)> {
    let entry = ctx.datasets.get(dataset)?;
    let adapter = ctx
        .adapters
        .build(&entry.adapter, entry.descriptor(dataset))
        .with_context(|| format!("build adapter `{}` for {dataset}", entry.adapter))?;

    let raw = adapter
        .load_raw()
        .with_context(|| format!("load raw data for {dataset}"))?;
    info!(rows = raw.height(), columns = raw.width(), "loaded raw table");

    let canonical = adapter
        .to_silver(&raw)
        .with_context(|| format!("normalize {dataset}"))?;
    let labeled = apply_labels(canonical, &ctx.criteria)
        .with_context(|| format!("derive labels for {dataset}"))?;

    let frame = validate_logged(labeled, dataset)?.with_meta(SilverFrameMeta {
        source_location: entry.location().map(str::to_string),
        silver_file: None,
    });
    Ok((frame, adapter.kind()))
}

fn validate_logged(df: DataFrame, dataset: &str) -> Result<SilverFrame> {
    match validate(df.clone(), dataset) {
        Ok(frame) => Ok(frame),
        Err(err @ SchemaError::Invalid { .. }) => {
            for issue in collect_issues(&df) {
                error!(column = issue.column(), kind = issue.kind(), "{issue}");
            }
            Err(err).with_context(|| format!("validate {dataset}"))
        }
        Err(err) => Err(err).with_context(|| format!("validate {dataset}")),
    }
}

/// Runs the silver stage for `dataset` and writes its parquet file.
pub fn run_silver(ctx: &PipelineContext, dataset: &str) -> Result<SilverOutcome> {
    let span = info_span!("silver", dataset = %dataset);
    let _guard = span.enter();

    let (frame, adapter) = build_silver(ctx, dataset)?;
    let path = write_silver(&ctx.layout, &frame)
        .with_context(|| format!("write silver table for {dataset}"))?;

    let outcome = frame.data().column("outcome_dm")?;
    let positives = outcome
        .i64()?
        .into_iter()
        .filter(|value| *value == Some(1))
        .count();
    Ok(SilverOutcome {
        dataset: dataset.to_string(),
        adapter,
        location: frame.meta().source_location.clone(),
        rows: frame.record_count(),
        positives,
        labeled_rows: frame.record_count() - outcome.null_count(),
        extra_columns: frame.extra_columns(),
        path,
    })
}

/// Result of the gold stage.
#[derive(Debug)]
pub struct GoldOutcome {
    pub path: PathBuf,
    pub rows: usize,
    pub sources: usize,
}

/// Merges every silver file under `layout` into the gold file.
pub fn run_gold(layout: &DataLayout) -> Result<GoldOutcome> {
    let sources = list_silver_files(layout).context("list silver files")?.len();
    let (path, rows) = build_gold(layout).context("build gold table")?;
    info!(sources, rows, path = %path.display(), "gold table written");
    Ok(GoldOutcome {
        path,
        rows,
        sources,
    })
}

/// A silver file with its first rows.
#[derive(Debug)]
pub struct InspectedTable {
    pub path: PathBuf,
    pub rows: usize,
    pub columns: usize,
    pub head: DataFrame,
}

/// Reads every silver file and keeps its first `head_rows` rows.
pub fn inspect_silver(layout: &DataLayout, head_rows: usize) -> Result<Vec<InspectedTable>> {
    list_silver_files(layout)
        .context("list silver files")?
        .into_iter()
        .map(|path| {
            let frame = read_silver(&path).with_context(|| format!("read {}", path.display()))?;
            let data = frame.data();
            Ok(InspectedTable {
                rows: data.height(),
                columns: data.width(),
                head: data.head(Some(head_rows)),
                path,
            })
        })
        .collect()
}
