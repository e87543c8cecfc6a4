use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use nba_week::{format_sunday_label, WeekToSundayResolver};

/// Resolve NBA week offsets to the Sunday that starts each week.
#[derive(Parser)]
#[command(name = "nba-week", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the Sunday label for a week offset (e.g. 0 → "Oct. 13")
    Label {
        /// NBA week offset
        #[arg(allow_hyphen_values = true)]
        week: i32,

        /// Print week, ISO date and label as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the NBA week containing a date
    Week {
        /// Date as YYYY-MM-DD
        date: String,
    },
    /// Print every week in the table
    Table {
        /// Print the table as a JSON array
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let resolver = WeekToSundayResolver::season_2024_25();

    match cli.command {
        Command::Label { week, json } => {
            if json {
                let resolved = resolver.describe(week)?;
                println!("{}", serde_json::to_string_pretty(&resolved)?);
            } else {
                println!("{}", resolver.resolve(week)?);
            }
        }
        Command::Week { date } => {
            let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .with_context(|| format!("invalid date '{date}', expected YYYY-MM-DD"))?;
            println!("{}", resolver.week_for_date(date)?);
        }
        Command::Table { json } => {
            if json {
                let rows = resolver
                    .records()
                    .iter()
                    .map(|r| resolver.describe(r.week()))
                    .collect::<Result<Vec<_>, _>>()?;
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for record in resolver.records() {
                    let sunday = record.sunday()?;
                    println!(
                        "{}\t{}\t{}",
                        record.week(),
                        sunday.format("%Y-%m-%d"),
                        format_sunday_label(sunday)
                    );
                }
            }
        }
    }

    Ok(())
}
