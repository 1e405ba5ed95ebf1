#![forbid(unsafe_code)]

mod script;

use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode, WriteLogger};
use strata_blocks::{BlockRegistry, BlockState};
use strata_sections::SectionRegistry;
use strata_sync::SectionSync;
use strata_world::MemoryWorld;

use crate::script::{Scenario, Script};

#[derive(Parser, Debug)]
#[command(
    name = "strata",
    about = "Replays host events against the mirrored overlap of stacked world sections"
)]
struct Args {
    /// Section layout (TOML)
    #[arg(long, default_value = "config/sections.toml")]
    sections: PathBuf,
    /// Block and item registry (TOML)
    #[arg(long, default_value = "config/blocks.toml")]
    blocks: PathBuf,
    /// Locks, initial blocks and events to replay (TOML)
    #[arg(long)]
    script: PathBuf,
    /// Overrides RUST_LOG (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<LevelFilter>,
    /// Also write the log to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(args: &Args) -> Result<(), Box<dyn Error>> {
    match &args.log_file {
        Some(path) => {
            let level = args.log_level.unwrap_or(LevelFilter::Info);
            CombinedLogger::init(vec![
                TermLogger::new(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto),
                WriteLogger::new(level, Config::default(), File::create(path)?),
            ])?;
        }
        None => {
            let mut builder =
                env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
            if let Some(level) = args.log_level {
                builder.filter_level(level);
            }
            builder.init();
        }
    }
    Ok(())
}

fn describe(blocks: &BlockRegistry, state: &BlockState) -> String {
    let name = blocks.name_of(state);
    let mut out = name.to_string();
    if state.waterlogged() == Some(true) {
        out.push_str(" (waterlogged)");
    }
    if let Some(inv) = state.inventory() {
        let items: Vec<String> = inv
            .stacks()
            .map(|s| format!("{} x{}", blocks.item_name(s.item), s.count))
            .collect();
        out.push_str(&format!(" [{}]", items.join(", ")));
    }
    if let Some(text) = state.sign_text() {
        out.push_str(&format!(" {:?}", text.lines()));
    }
    out
}

fn print_summary(world: &MemoryWorld, sections: &SectionRegistry, blocks: &BlockRegistry) {
    for section in sections.iter() {
        println!("section {} ({}..={})", section.name, section.bounds.min, section.bounds.max);
        for (pos, state) in world.blocks_in(section.id) {
            println!("  {} {}", pos, describe(blocks, state));
        }
    }
    for (id, e) in world.entities() {
        println!(
            "{} {} x{} in {} at ({:.1}, {:.1}, {:.1})",
            id,
            blocks.item_name(e.stack.item),
            e.stack.count,
            sections.name_of(e.at.section),
            e.at.pos.x,
            e.at.pos.y,
            e.at.pos.z
        );
    }
    for (agent, at) in world.opened() {
        println!("{} opened {} {}", agent, sections.name_of(at.section), at.pos);
    }
    for (agent, msg) in world.messages() {
        println!("to {}: {}", agent, msg);
    }
    let stats = world.stats();
    println!(
        "writes={} blocks={} chunks={} entities={}",
        stats.writes, stats.blocks, stats.chunk_entries, stats.entities
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(&args)?;

    let sections = Arc::new(SectionRegistry::load_from_path(&args.sections)?);
    let blocks = Arc::new(BlockRegistry::load_from_path(&args.blocks)?);
    log::info!(
        "loaded {} section(s), {} link(s), {} block type(s) from {} and {}",
        sections.len(),
        sections.links().len(),
        blocks.blocks.len(),
        args.sections.display(),
        args.blocks.display()
    );

    let script = Script::load_from_path(&args.script)?;
    let Scenario {
        mut world,
        locks,
        deliveries,
    } = Scenario::build(&script, &sections, &blocks)?;
    let sync = SectionSync::new(sections.clone(), blocks.clone(), locks);

    for delivery in &deliveries {
        let verdict = sync.deliver(&mut world, delivery);
        println!(
            "[{}] {} at {} {} -> {:?}",
            delivery.seq,
            delivery.event.kind(),
            sections.name_of(delivery.event.location().section),
            delivery.event.location().pos,
            verdict
        );
    }
    print_summary(&world, &sections, &blocks);
    Ok(())
}
