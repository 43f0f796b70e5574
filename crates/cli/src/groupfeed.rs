//! groupfeed - Group a feed of geotagged posts into proximity clusters
//!
//! A command line tool that reads a JSON array of posts and prints the
//! grouped feed, either flat or bucketed into trip days, as JSON or as an
//! indented text outline.

use chrono::{Duration, NaiveDate};
use clap::{ArgAction, Parser, ValueEnum};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use stopover_core::error::Result;
use stopover_core::grouping::{
    GroupingParams, group_posts_by_day_with_params, group_similar_posts_with_params,
};
use stopover_core::model::{Post, PostGroup, read_posts};

/// Output type for the grouped feed.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputType {
    /// Pretty-printed JSON (default)
    #[default]
    Json,
    /// Indented text outline with Day headers
    Text,
}

/// A command line tool that groups a feed of geotagged, timestamped posts
/// into proximity clusters for compact display.
#[derive(Parser, Debug)]
#[command(name = "groupfeed")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON array of posts, or - for stdin
    file: PathBuf,

    /// Bucket posts into trip days before grouping
    #[arg(short = 'D', long = "by-day", action = ArgAction::SetTrue)]
    by_day: bool,

    /// Trip start date (YYYY-MM-DD); implies --by-day with derived days
    #[arg(short = 's', long = "start-date")]
    start_date: Option<NaiveDate>,

    // === Grouping options ===
    /// Temporal gate between a group seed and a candidate, in minutes
    #[arg(short = 'T', long = "time-margin-mins", default_value = "120")]
    time_margin_mins: i64,

    /// Spatial gate between coordinates, in kilometres
    #[arg(short = 'k', long = "distance-margin-km", default_value = "0.5")]
    distance_margin_km: f64,

    /// Shared place-label tokens must be longer than this to match
    #[arg(long = "min-token-len", default_value = "2")]
    min_token_len: usize,

    // === Output options ===
    /// Output format
    #[arg(short = 't', long = "output-type", value_enum, default_value = "json")]
    output_type: OutputType,

    /// Output file path, or - for stdout
    #[arg(short = 'o', long = "outfile", default_value = "-")]
    outfile: String,
}

fn build_params(args: &Args) -> GroupingParams {
    GroupingParams::new(
        Duration::minutes(args.time_margin_mins),
        args.distance_margin_km,
        args.min_token_len,
    )
}

fn load_posts(path: &PathBuf) -> Result<Vec<Post>> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        read_posts(buf.as_bytes())
    } else {
        read_posts(File::open(path)?)
    }
}

fn write_group_text<W: Write>(writer: &mut W, group: &PostGroup, indent: &str) -> io::Result<()> {
    writeln!(
        writer,
        "{indent}{} [{} - {}] ({} posts)",
        group.location,
        group.start_time.format("%Y-%m-%d %H:%M"),
        group.end_time.format("%H:%M"),
        group.posts.len()
    )?;
    for post in &group.posts {
        writeln!(
            writer,
            "{indent}  #{} {}{}",
            post.id,
            post.effective_timestamp().format("%H:%M"),
            post.location
                .as_deref()
                .map(|l| format!(" {l}"))
                .unwrap_or_default()
        )?;
    }
    Ok(())
}

fn write_flat<W: Write>(writer: &mut W, groups: &[PostGroup], output: OutputType) -> Result<()> {
    match output {
        OutputType::Json => serde_json::to_writer_pretty(&mut *writer, groups)?,
        OutputType::Text => {
            for group in groups {
                write_group_text(writer, group, "")?;
            }
        }
    }
    Ok(())
}

fn write_by_day<W: Write>(
    writer: &mut W,
    days: &BTreeMap<u32, Vec<PostGroup>>,
    output: OutputType,
) -> Result<()> {
    match output {
        OutputType::Json => serde_json::to_writer_pretty(&mut *writer, days)?,
        OutputType::Text => {
            for (day, groups) in days {
                writeln!(writer, "Day {day}")?;
                for group in groups {
                    write_group_text(writer, group, "  ")?;
                }
            }
        }
    }
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let posts = load_posts(&args.file)?;
    let params = build_params(args);

    let mut writer: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        Box::new(BufWriter::new(File::create(&args.outfile)?))
    };

    if args.by_day || args.start_date.is_some() {
        let days = group_posts_by_day_with_params(&posts, args.start_date, &params);
        write_by_day(&mut writer, &days, args.output_type)?;
    } else {
        let groups = group_similar_posts_with_params(&posts, &params);
        write_flat(&mut writer, &groups, args.output_type)?;
    }

    writer.flush()?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("groupfeed: {e}");
        std::process::exit(1);
    }
}
