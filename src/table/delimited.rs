use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use super::Table;
use crate::Result;

impl Table {
    pub fn write_csv<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row.iter().map(ToString::to_string))?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn save_csv<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        self.write_csv(File::create(path)?)?;
        info!(path = %path.display(), rows = self.len(), "wrote csv");
        Ok(())
    }
}
