// crates/skiresort-core/src/loader/standard.rs
use crate::error::LoadError;
use crate::model::{convert, Resort};
use crate::raw::ResortRaw;
use crate::schema::Column;
use csv::{ReaderBuilder, StringRecord, Trim};

/// Columns every source file must provide.
pub const REQUIRED_COLUMNS: [Column; 13] = [
    Column::Resort,
    Column::Latitude,
    Column::Longitude,
    Column::Country,
    Column::Continent,
    Column::Price,
    Column::HighestPoint,
    Column::TotalSlopes,
    Column::SnowCannons,
    Column::ChildFriendly,
    Column::Snowparks,
    Column::Nightskiing,
    Column::SummerSkiing,
];

/// Parse decoded CSV text into resorts, in row order.
///
/// Only headers are trimmed. Cells reach the model as written, so a flag
/// cell must be exactly `Yes` and numbers must not be padded. The first bad
/// row aborts the whole parse.
pub fn parse_resorts(text: &str, delimiter: u8) -> Result<Vec<Resort>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(Trim::Headers)
        .from_reader(text.as_bytes());

    let headers = reader.headers().map_err(csv_error)?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column.header()) {
            return Err(LoadError::MissingColumn(column.header()));
        }
    }

    let mut resorts = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record).map_err(csv_error)? {
        let line = record.position().map(|p| p.line());
        let raw: ResortRaw = record
            .deserialize(Some(&headers))
            .map_err(|e| field_error(e, &headers, line))?;
        resorts.push(convert::from_raw(raw, line)?);
    }
    Ok(resorts)
}

fn csv_error(err: csv::Error) -> LoadError {
    LoadError::Csv {
        line: err.position().map(|p| p.line()),
        message: err.to_string(),
    }
}

/// Attach the offending column name to a type coercion failure.
fn field_error(err: csv::Error, headers: &StringRecord, line: Option<u64>) -> LoadError {
    match err.kind() {
        csv::ErrorKind::Deserialize { err: de, .. } => LoadError::InvalidValue {
            line,
            column: de
                .field()
                .and_then(|i| headers.get(i as usize))
                .unwrap_or("?")
                .to_string(),
            message: de.kind().to_string(),
        },
        _ => LoadError::Csv {
            line,
            message: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Resort,Latitude,Longitude,Country,Continent,Price,Highest point,\
Total slopes,Snow cannons,Child friendly,Snowparks,Nightskiing,Summer skiing";

    #[test]
    fn parses_minimal_columns() {
        let text = format!(
            "{HEADER}\nHemsedal,60.86,8.55,Norway,Europe,50,1450,49,100,Yes,Yes,Yes,No\n"
        );
        let resorts = parse_resorts(&text, b',').unwrap();
        assert_eq!(resorts.len(), 1);
        assert_eq!(resorts[0].total_slopes, 49);
        assert_eq!(resorts[0].lowest_point, None);
        assert_eq!(resorts[0].nightskiing, "Yes");
    }

    #[test]
    fn bad_number_reports_line_and_column() {
        let text = format!(
            "{HEADER}\nA,60,8,Norway,Europe,50,1450,49,100,Yes,Yes,Yes,No\n\
             B,60,8,Norway,Europe,cheap,1450,49,100,Yes,Yes,Yes,No\n"
        );
        match parse_resorts(&text, b',').unwrap_err() {
            LoadError::InvalidValue { line, column, .. } => {
                assert_eq!(line, Some(3));
                assert_eq!(column, "Price");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_required_number_fails() {
        let text = format!("{HEADER}\nA,60,8,Norway,Europe,50,1450,,100,Yes,Yes,Yes,No\n");
        assert!(matches!(
            parse_resorts(&text, b','),
            Err(LoadError::InvalidValue { .. })
        ));
    }

    #[test]
    fn flag_cells_are_kept_raw() {
        let text = format!("{HEADER}\nA,60,8,Norway,Europe,50,1450,49,100, Yes,Yes ,No,No\n");
        let resorts = parse_resorts(&text, b',').unwrap();
        assert_eq!(resorts[0].child_friendly, " Yes");
        assert_eq!(resorts[0].snowparks, "Yes ");
        assert!(!resorts[0].has(crate::schema::Feature::ChildFriendly));
    }

    #[test]
    fn padded_headers_still_match() {
        let text = format!(
            "{}\nA,60,8,Norway,Europe,50,1450,49,100,Yes,Yes,Yes,No\n",
            HEADER.replace(",", " , ")
        );
        assert_eq!(parse_resorts(&text, b',').unwrap().len(), 1);
    }

    #[test]
    fn missing_column_is_named() {
        let text = "Resort,Country\nA,Norway\n";
        assert!(matches!(
            parse_resorts(text, b','),
            Err(LoadError::MissingColumn("Latitude"))
        ));
    }

    #[test]
    fn semicolon_delimiter() {
        let text = format!(
            "{}\nA;60;8;Norway;Europe;50;1450;49;100;Yes;Yes;Yes;No\n",
            HEADER.replace(',', ";")
        );
        assert_eq!(parse_resorts(&text, b';').unwrap().len(), 1);
    }
}
