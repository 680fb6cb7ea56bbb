//! Cell and row conversion from calamine ranges

use calamine::{Data, Range};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

use domain_claims::{CellValue, ClaimSchema, ClaimSet, SchemaError};

/// Converts one calamine cell.
///
/// Error cells and non-finite floats become empty cells, the same way a
/// blank cell would read. Dates are kept as text.
pub fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) if s.is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(Decimal::from(*i)),
        Data::Float(f) => Decimal::from_f64(*f)
            .map(|d| CellValue::Number(d.normalize()))
            .unwrap_or(CellValue::Empty),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => CellValue::Text(naive.to_string()),
            None => CellValue::Text(dt.as_f64().to_string()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}

/// Reads the header row. Blank headers are named `Unnamed: <index>`.
pub fn header_names(row: &[Data]) -> Vec<String> {
    row.iter()
        .enumerate()
        .map(|(i, data)| match cell_value(data) {
            CellValue::Empty => format!("Unnamed: {}", i),
            other => other.display(),
        })
        .collect()
}

/// Builds a claim set from a sheet range whose first row is the header.
///
/// Rows with no content at all are skipped. Every other row must map onto
/// the schema; the first bad amount cell aborts the conversion.
pub fn claim_set_from_range(
    range: &Range<Data>,
    schema: &ClaimSchema,
) -> Result<ClaimSet, SchemaError> {
    let mut rows = range.rows();
    let header = rows.next().ok_or(SchemaError::EmptySheet)?;
    let columns = header_names(header);
    let index = schema.resolve(&columns)?;

    // 1-based sheet row of the header
    let first_row = range.start().map(|(r, _)| r as usize + 1).unwrap_or(1);

    let mut records = Vec::with_capacity(range.height().saturating_sub(1));
    let mut skipped = 0usize;
    for (offset, row) in rows.enumerate() {
        let mut cells: Vec<CellValue> = row.iter().map(cell_value).collect();
        if cells.iter().all(CellValue::is_empty) {
            skipped += 1;
            continue;
        }
        cells.resize(columns.len(), CellValue::Empty);

        let row_number = first_row + offset + 1;
        records.push(schema.record_from_row(&index, cells, row_number)?);
    }

    debug!(
        columns = columns.len(),
        rows = records.len(),
        skipped_blank = skipped,
        "Sheet range converted"
    );

    Ok(ClaimSet::new(columns, records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::CellErrorType;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cell_value_variants() {
        assert_eq!(cell_value(&Data::Empty), CellValue::Empty);
        assert_eq!(cell_value(&Data::String(String::new())), CellValue::Empty);
        assert_eq!(cell_value(&Data::Error(CellErrorType::NA)), CellValue::Empty);
        assert_eq!(cell_value(&Data::Int(42)), CellValue::Number(dec!(42)));
        assert_eq!(cell_value(&Data::Float(60000.0)), CellValue::Number(dec!(60000)));
        assert_eq!(cell_value(&Data::Float(1250.75)), CellValue::Number(dec!(1250.75)));
        assert_eq!(cell_value(&Data::Float(f64::NAN)), CellValue::Empty);
        assert_eq!(cell_value(&Data::Bool(true)), CellValue::Bool(true));
        assert_eq!(
            cell_value(&Data::String("YES".into())),
            CellValue::Text("YES".into())
        );
    }

    #[test]
    fn test_blank_headers_get_positional_names() {
        let names = header_names(&[
            Data::String("Paid_Status".into()),
            Data::Empty,
            Data::Int(2024),
        ]);
        assert_eq!(names, vec!["Paid_Status", "Unnamed: 1", "2024"]);
    }
}
