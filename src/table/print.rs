use std::fmt::{self, Display};

use comfy_table::presets::UTF8_NO_BORDERS;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table as TextTable};

use super::Table;

impl Table {
    fn text_table(&self) -> TextTable {
        let mut table = TextTable::new();
        table
            .load_preset(UTF8_NO_BORDERS)
            .set_content_arrangement(ContentArrangement::Disabled)
            .set_header(self.headers.iter().map(Cell::new));
        for row in &self.rows {
            table.add_row(
                row.iter()
                    .map(|value| Cell::new(value).set_alignment(CellAlignment::Right)),
            );
        }
        table
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.text_table())
    }
}
