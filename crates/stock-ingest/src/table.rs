use stock_model::CellValue;

use crate::columns::placeholder_header;

/// Header row and data rows as read from a file, before schema checks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    /// Raw header strings (blank headers replaced by placeholders).
    pub headers: Vec<String>,
    /// Data rows, each padded or truncated to `headers.len()`.
    pub rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    /// Builds a table from a header row and data rows.
    ///
    /// Fully blank data rows are dropped.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let headers: Vec<String> = headers
            .into_iter()
            .enumerate()
            .map(|(idx, header)| {
                if header.trim().is_empty() {
                    placeholder_header(idx)
                } else {
                    header
                }
            })
            .collect();
        let width = headers.len();
        let rows = rows
            .into_iter()
            .filter(|row| !is_blank_row(row))
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();
        Self { headers, rows }
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// True when every cell is missing or whitespace-only text.
pub fn is_blank_row(row: &[CellValue]) -> bool {
    row.iter().all(|cell| match cell {
        CellValue::Empty => true,
        CellValue::Text(value) => value.trim().is_empty(),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_pads_and_drops_blank_rows() {
        let table = RawTable::from_rows(
            vec!["Category".to_string(), "".to_string(), "Item".to_string()],
            vec![
                vec![CellValue::text("Tea")],
                vec![CellValue::Empty, CellValue::text("  ")],
                vec![
                    CellValue::text("Coffee"),
                    CellValue::Int(1),
                    CellValue::text("Latte"),
                    CellValue::text("extra"),
                ],
            ],
        );
        assert_eq!(table.headers, vec!["Category", "unnamed_1", "Item"]);
        assert_eq!(table.height(), 2);
        assert_eq!(
            table.rows[0],
            vec![CellValue::text("Tea"), CellValue::Empty, CellValue::Empty]
        );
        assert_eq!(table.rows[1].len(), 3);
    }
}
