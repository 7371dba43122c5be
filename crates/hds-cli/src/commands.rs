use std::sync::Arc;

use anyhow::{Context, Result};
use comfy_table::Table;
use hds_cli::http::HttpFetcher;
use hds_cli::pipeline::{
    GoldOutcome, InspectedTable, PipelineContext, SilverOutcome, inspect_silver, run_gold,
    run_silver,
};
use hds_config::{ConfigPaths, DatasetRegistry};
use hds_output::DataLayout;

use crate::cli::{Cli, InspectArgs, SilverArgs};
use crate::summary::apply_table_style;

pub fn run_silver_command(cli: &Cli, args: &SilverArgs) -> Result<SilverOutcome> {
    let fetcher = HttpFetcher::new().context("create http client")?;
    let ctx = PipelineContext::load(&cli.config_dir, &cli.data_dir, Arc::new(fetcher))?;
    run_silver(&ctx, &args.dataset)
}

pub fn run_gold_command(cli: &Cli) -> Result<GoldOutcome> {
    run_gold(&DataLayout::new(&cli.data_dir))
}

pub fn run_datasets(cli: &Cli) -> Result<()> {
    let paths = ConfigPaths::new(&cli.config_dir);
    let registry = DatasetRegistry::load(&paths.registry()).context("load dataset registry")?;
    let layout = DataLayout::new(&cli.data_dir);

    let mut table = Table::new();
    table.set_header(vec!["Dataset", "Adapter", "Country", "Year", "Source", "Silver"]);
    apply_table_style(&mut table);
    for (key, entry) in registry.iter() {
        let silver = if layout.silver_file(key).is_file() {
            "yes"
        } else {
            "-"
        };
        table.add_row(vec![
            key.to_string(),
            entry.adapter.clone(),
            entry.country.clone(),
            entry.year.to_string(),
            entry.location().unwrap_or("-").to_string(),
            silver.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_inspect(cli: &Cli, args: &InspectArgs) -> Result<Vec<InspectedTable>> {
    inspect_silver(&DataLayout::new(&cli.data_dir), args.rows)
}
