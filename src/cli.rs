use std::io::Write;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::Level;

use crate::table::DEFAULT_SHEET_NAME;
use crate::{Result, RollConfig, Value};

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "shdroll",
    version,
    about = "Hackable dice roller: roll sets of dice from the command line."
)]
pub struct Args {
    // ---------------- dice ----------------
    /// Lowest face of the die: 7, 0, -3, etc.
    #[arg(long, short, default_value_t = 1, allow_negative_numbers = true)]
    pub base: i64,

    /// Number of sides on the die. Must be at least 1.
    #[arg(long, short, default_value_t = 6, allow_negative_numbers = true)]
    pub sides: i64,

    /// Number of dice thrown at once. Must be at least 1.
    #[arg(long, short, default_value_t = 1, allow_negative_numbers = true)]
    pub dice: i64,

    /// Number of times the set of dice is thrown. Must be at least 1.
    #[arg(long, short, default_value_t = 1, allow_negative_numbers = true)]
    pub rolls: i64,

    // ---------------- transforms ----------------
    /// Added to each die. Negative to subtract. Excludes --mult.
    #[arg(long, short, allow_negative_numbers = true)]
    pub add: Option<Value>,

    /// Multiplied with each die. Below one to divide. Excludes --add.
    #[arg(long, short, allow_negative_numbers = true)]
    pub mult: Option<Value>,

    /// Added to the total of each throw. Excludes --mult-total.
    #[arg(long, allow_negative_numbers = true)]
    pub add_total: Option<Value>,

    /// Multiplied with the total of each throw. Excludes --add-total.
    #[arg(long, allow_negative_numbers = true)]
    pub mult_total: Option<Value>,

    /// Added to the grand total of all throws. Excludes --mult-grand-total.
    #[arg(long, allow_negative_numbers = true)]
    pub add_grand_total: Option<Value>,

    /// Multiplied with the grand total of all throws. Excludes --add-grand-total.
    #[arg(long, allow_negative_numbers = true)]
    pub mult_grand_total: Option<Value>,

    /// Seed for a reproducible run. Omit to seed from the OS.
    #[arg(long)]
    pub seed: Option<u64>,

    // ---------------- output ----------------
    /// Also write the table, with totals, as CSV.
    #[arg(long, value_name = "PATH")]
    pub to_csv: Option<PathBuf>,

    /// Also write the table, with totals, as an Excel workbook.
    #[arg(long, value_name = "PATH")]
    pub to_xlsx: Option<PathBuf>,

    /// Worksheet name used with --to-xlsx.
    #[arg(long, default_value = DEFAULT_SHEET_NAME)]
    pub sheet_name: String,

    /// Print the parsed arguments before the table.
    #[arg(long)]
    pub print_args: bool,

    /// Log verbosity on stderr: -v info, -vv debug, -vvv trace.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    #[must_use]
    pub fn config(&self) -> RollConfig {
        RollConfig {
            base: self.base,
            sides: self.sides,
            dice: self.dice,
            rolls: self.rolls,
            add: self.add,
            mult: self.mult,
            add_total: self.add_total,
            mult_total: self.mult_total,
            add_grand_total: self.add_grand_total,
            mult_grand_total: self.mult_grand_total,
            seed: self.seed,
        }
    }

    #[must_use]
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// Rolls the configured series, prints it to `out` and writes any requested
/// exports. `out` is flushed before returning.
pub fn run<W>(args: &Args, out: &mut W) -> Result<()>
where
    W: Write,
{
    if args.print_args {
        writeln!(out, "{args:?}")?;
    }

    let series = args.config().series()?;
    write!(out, "{series}")?;
    out.flush()?;

    if args.to_csv.is_some() || args.to_xlsx.is_some() {
        let table = series.table(true);
        if let Some(path) = &args.to_csv {
            table.save_csv(path)?;
        }
        if let Some(path) = &args.to_xlsx {
            table.save_xlsx(path, &args.sheet_name)?;
        }
    }

    Ok(())
}
