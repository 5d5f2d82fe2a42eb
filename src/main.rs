// Wed Aug 26 2026 - Alex

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tail_align::report::{LayoutWalk, MemberSetReport};
use tail_align::ui::{CellAlign, TableBuilder};
use tail_align::{sort_sizes_descending, utils, SizeRecord};

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Tail-aligned storage size demonstration", long_about = None)]
struct Args {
    #[arg(short, long)]
    json: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,

    #[arg(long)]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    // RUST_LOG takes precedence over the built-in colored logger.
    if std::env::var_os("RUST_LOG").is_some() {
        utils::logging::init_from_env();
    } else {
        utils::logging::init_logger(args.verbose);
    }

    println!("{}", "Tail-Aligned Storage Demonstration".cyan().bold());
    println!("{}", "=".repeat(50).cyan());
    println!();

    let member_sets = vec![
        vec![
            SizeRecord::of::<[u8; 2]>("[u8; 2]"),
            SizeRecord::of::<f64>("f64"),
            SizeRecord::of::<i32>("i32"),
            SizeRecord::of::<*const ()>("*const ()"),
            SizeRecord::of::<[i16; 3]>("[i16; 3]"),
        ],
        vec![
            SizeRecord::of::<[u8; 2]>("[u8; 2]"),
            SizeRecord::of::<f64>("f64"),
            SizeRecord::of::<i32>("i32"),
            SizeRecord::of::<*const ()>("*const ()"),
        ],
    ];

    let mut reports = Vec::new();

    for (i, mut members) in member_sets.into_iter().enumerate() {
        println!("{}", format!("--- Test #{} ---", i + 1).yellow().bold());
        println!();

        log::debug!("Walking member set #{} ({} members)", i + 1, members.len());

        reports.push(show_member_set(
            format!("test{}-original", i + 1),
            "Original order",
            &members,
        )?);

        sort_sizes_descending(&mut members);

        reports.push(show_member_set(
            format!("test{}-sorted", i + 1),
            "Sorted largest to smallest",
            &members,
        )?);
    }

    if let Some(path) = &args.json {
        save_reports(&reports, path)?;
        println!("{} Report saved to: {}", "[+]".green(), path.display());
    }

    Ok(())
}

fn show_member_set(
    name: String,
    heading: &str,
    members: &[SizeRecord],
) -> anyhow::Result<MemberSetReport> {
    let report = MemberSetReport::build(name, members)
        .context("Failed to walk member set")?;

    println!("{}", format!("{}:", heading).cyan());
    print_members(members);
    println!();

    println!("Assuming we build the structure member-wise-incrementally...");
    print_walk(&report.incremental);
    println!();

    println!("Assuming we build the structure with full knowledge...");
    println!("Alignment requirement: {}", report.alignment_requirement);
    print_walk(&report.informed);
    println!();

    Ok(report)
}

fn print_members(members: &[SizeRecord]) {
    let mut table = TableBuilder::new()
        .with_headers(&["#", "Size", "Member"])
        .with_alignment(1, CellAlign::Right);

    for (i, member) in members.iter().enumerate() {
        table = table.add_row(&[
            i.to_string(),
            member.size().to_string(),
            member.label().to_string(),
        ]);
    }

    println!("{}", table.build());
}

fn print_walk(walk: &LayoutWalk) {
    for step in &walk.steps {
        println!(
            "{} bytes of padding before member {} ({})",
            step.padding, step.index, step.label
        );
    }
    if walk.trailing_padding > 0 {
        println!("{} bytes of padding at the end", walk.trailing_padding);
    }
    println!("Total size: {} bytes", walk.total_size.to_string().green());
}

fn save_reports(reports: &[MemberSetReport], path: &PathBuf) -> anyhow::Result<()> {
    let json_string = serde_json::to_string_pretty(reports)
        .context("Failed to serialize reports")?;

    let mut file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    file.write_all(json_string.as_bytes())?;

    Ok(())
}
