use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use fleet_core::pricing::PricingConfig;
use fleet_core::ride::Ride;
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;

pub(crate) fn export_rides_to_parquet_impl(
    rides: &[Ride<'_>],
    pricing: &PricingConfig,
    file: std::fs::File,
) -> Result<(), Box<dyn std::error::Error>> {
    let batch = build_record_batch(rides, pricing)?;
    let props = WriterProperties::builder().build();
    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))?;
    writer.write(&batch)?;
    writer.close()?;

    Ok(())
}

fn build_record_batch(
    rides: &[Ride<'_>],
    pricing: &PricingConfig,
) -> Result<RecordBatch, arrow::error::ArrowError> {
    let schema = Arc::new(parquet_schema());
    let arrays = build_arrays(rides, pricing);

    RecordBatch::try_new(schema, arrays)
}

fn parquet_schema() -> Schema {
    Schema::new(vec![
        Field::new("vehicle_id", DataType::Utf8, false),
        Field::new("user_id", DataType::Utf8, true),
        Field::new("started_at", DataType::Int64, false),
        Field::new("ended_at", DataType::Int64, false),
        Field::new("start_x", DataType::Float64, false),
        Field::new("start_y", DataType::Float64, false),
        Field::new("end_x", DataType::Float64, false),
        Field::new("end_y", DataType::Float64, false),
        Field::new("distance", DataType::Float64, false),
        Field::new("duration_seconds", DataType::UInt64, false),
        Field::new("duration_minutes", DataType::UInt64, false),
        Field::new("cost", DataType::Float64, false),
    ])
}

fn build_arrays(rides: &[Ride<'_>], pricing: &PricingConfig) -> Vec<ArrayRef> {
    let f64_column = |f: fn(&Ride<'_>) -> f64| -> ArrayRef {
        Arc::new(Float64Array::from(rides.iter().map(f).collect::<Vec<_>>()))
    };

    vec![
        Arc::new(StringArray::from(
            rides.iter().map(|r| r.vehicle_id()).collect::<Vec<_>>(),
        )),
        Arc::new(StringArray::from(
            rides.iter().map(|r| r.user_id()).collect::<Vec<_>>(),
        )),
        Arc::new(Int64Array::from(
            rides.iter().map(|r| r.start().timestamp).collect::<Vec<_>>(),
        )),
        Arc::new(Int64Array::from(
            rides.iter().map(|r| r.end().timestamp).collect::<Vec<_>>(),
        )),
        f64_column(|r| r.start().location.x),
        f64_column(|r| r.start().location.y),
        f64_column(|r| r.end().location.x),
        f64_column(|r| r.end().location.y),
        f64_column(|r| r.distance()),
        Arc::new(UInt64Array::from(
            rides.iter().map(|r| r.duration_seconds()).collect::<Vec<_>>(),
        )),
        Arc::new(UInt64Array::from(
            rides.iter().map(|r| r.duration_minutes()).collect::<Vec<_>>(),
        )),
        Arc::new(Float64Array::from(
            rides.iter().map(|r| r.cost(pricing)).collect::<Vec<_>>(),
        )),
    ]
}
