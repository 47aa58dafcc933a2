// src/export/classified.rs

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, BooleanArray, Int32Array, StringArray, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::{fs::File, path::Path, sync::Arc};
use tracing::info;

use crate::process::classify::{ClassifiedRecord, ClassifiedSet};

/// Fixed columns followed by one boolean column per theme.
pub fn classified_schema(theme_names: &[String]) -> Schema {
    let mut fields = vec![
        Field::new("row", DataType::UInt64, false),
        Field::new("ethical_text", DataType::Utf8, false),
        Field::new("has_ethics", DataType::Boolean, false),
        Field::new("release_year", DataType::Int32, false),
        Field::new("era", DataType::Utf8, false),
        Field::new("creator", DataType::Utf8, false),
        Field::new("creator_label", DataType::Utf8, false),
        Field::new("task", DataType::Utf8, false),
        Field::new("domain", DataType::Utf8, false),
    ];
    fields.extend(
        theme_names
            .iter()
            .map(|name| Field::new(name, DataType::Boolean, false)),
    );
    Schema::new(fields)
}

fn strings<F>(records: &[ClassifiedRecord], f: F) -> ArrayRef
where
    F: Fn(&ClassifiedRecord) -> &str,
{
    Arc::new(StringArray::from_iter_values(records.iter().map(f)))
}

/// The whole classified set as one batch.
pub fn to_record_batch(set: &ClassifiedSet) -> Result<RecordBatch> {
    let recs = &set.records;
    let mut cols: Vec<ArrayRef> = vec![
        Arc::new(UInt64Array::from_iter_values(
            recs.iter().map(|r| r.row as u64),
        )),
        strings(recs, |r| r.ethical_text.as_str()),
        Arc::new(BooleanArray::from(
            recs.iter().map(|r| r.has_ethics).collect::<Vec<_>>(),
        )),
        Arc::new(Int32Array::from_iter_values(
            recs.iter().map(|r| r.release_year),
        )),
        strings(recs, |r| r.era.name()),
        strings(recs, |r| r.creator.as_str()),
        strings(recs, |r| r.creator_label.label()),
        strings(recs, |r| r.task.as_str()),
        strings(recs, |r| r.domain.label()),
    ];
    for i in 0..set.theme_names.len() {
        cols.push(Arc::new(BooleanArray::from(
            recs.iter()
                .map(|r| r.themes.get(i).copied().unwrap_or(false))
                .collect::<Vec<_>>(),
        )));
    }

    let schema = Arc::new(classified_schema(&set.theme_names));
    RecordBatch::try_new(schema, cols).context("building classified record batch")
}

/// Write the classified set to a Snappy-compressed Parquet file.
#[tracing::instrument(level = "info", skip(set), fields(path = %path.as_ref().display()))]
pub fn write_classified<P: AsRef<Path>>(set: &ClassifiedSet, path: P) -> Result<()> {
    let path = path.as_ref();
    let batch = to_record_batch(set)?;

    let file =
        File::create(path).with_context(|| format!("creating parquet file {:?}", path))?;
    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();
    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))
        .context("creating Arrow writer for classified records")?;
    writer.write(&batch).context("writing classified batch")?;
    writer.close().context("closing parquet writer")?;

    info!(rows = batch.num_rows(), "classified records exported");
    Ok(())
}
