//! Command implementations.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use tracing::info;

use asset_analytics::{aggregate, paginate};
use asset_ingest::read_raw_rows;
use asset_map::{HeaderResolver, SynonymTable};
use asset_model::{Record, Summary};
use asset_normalize::{DatasetNormalizer, RowNormalizer, SupportScheme};

use crate::cli::{FieldsArgs, ProcessArgs};
use crate::render::{print_fields, print_summary};

pub struct ProcessResult {
    pub records: Vec<Record>,
    pub summary: Summary,
    pub reference_date: NaiveDate,
}

pub fn run_process(args: &ProcessArgs) -> Result<()> {
    let scheme = if args.strict {
        SupportScheme::Strict
    } else {
        SupportScheme::Lenient
    };
    let reference_date = args.now.unwrap_or_else(|| Utc::now().date_naive());

    let result = process_file(args, scheme, reference_date)?;

    if let Some(path) = &args.export {
        asset_report::write_csv_file(&result.records, path)?;
        info!(path = %path.display(), "wrote normalized export");
    }

    let limit = args.limit.unwrap_or(result.records.len());
    let page = paginate(&result.records, args.offset, limit);

    if args.json {
        let payload = serde_json::json!({
            "records": page,
            "summary": result.summary,
            "referenceDate": result.reference_date.to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print_summary(&result.summary, result.reference_date, page.len());
    }
    Ok(())
}

fn process_file(
    args: &ProcessArgs,
    scheme: SupportScheme,
    reference_date: NaiveDate,
) -> Result<ProcessResult> {
    let rows = read_raw_rows(&args.input)
        .with_context(|| format!("ingest {}", args.input.display()))?;
    info!(rows = rows.len(), "decoded input rows");

    let normalizer = DatasetNormalizer::new(RowNormalizer::new(HeaderResolver::default(), scheme));
    let records = normalizer.normalize_all(&rows);
    let summary = aggregate(&records, reference_date);
    info!(
        records = records.len(),
        manufacturers = summary.manufacturer_count,
        "normalized dataset"
    );

    Ok(ProcessResult {
        records,
        summary,
        reference_date,
    })
}

pub fn run_fields(args: &FieldsArgs) -> Result<()> {
    let table = SynonymTable::builtin();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        print_fields(&table);
    }
    Ok(())
}
