use std::path::Path;

use rust_xlsxwriter::{ColNum, RowNum, Workbook, XlsxError};
use tracing::info;

use super::Table;
use crate::Result;

pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

impl Table {
    pub fn save_xlsx<P>(&self, path: P, sheet_name: &str) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        self.workbook(sheet_name)?.save(path)?;
        info!(path = %path.display(), sheet = sheet_name, rows = self.len(), "wrote xlsx");
        Ok(())
    }

    pub fn to_xlsx_buffer(&self, sheet_name: &str) -> Result<Vec<u8>> {
        Ok(self.workbook(sheet_name)?.save_to_buffer()?)
    }

    fn workbook(&self, sheet_name: &str) -> core::result::Result<Workbook, XlsxError> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(sheet_name)?;

        for (col, header) in self.headers.iter().enumerate() {
            sheet.write_string(0, col_num(col)?, header)?;
        }
        for (i, values) in self.rows.iter().enumerate() {
            let row = row_num(i + 1)?;
            for (col, value) in values.iter().enumerate() {
                sheet.write_number(row, col_num(col)?, *value)?;
            }
        }

        Ok(workbook)
    }
}

fn row_num(index: usize) -> core::result::Result<RowNum, XlsxError> {
    RowNum::try_from(index).map_err(|_| XlsxError::RowColumnLimitError)
}

fn col_num(index: usize) -> core::result::Result<ColNum, XlsxError> {
    ColNum::try_from(index).map_err(|_| XlsxError::RowColumnLimitError)
}
