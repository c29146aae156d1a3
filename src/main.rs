use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use finwise::{App, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "finwise")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Load and save progress for this run even if the config leaves it off
    #[arg(long, global = true)]
    persist: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List pillars and how far you are through each
    Pillars,
    /// List the sections of a pillar
    Sections {
        /// Pillar id
        pillar: u32,
    },
    /// Bookmark a section, or remove its bookmark
    Bookmark {
        /// Pillar id
        pillar: u32,
        /// Section id
        section: String,
    },
    /// Mark a section complete
    Complete {
        /// Pillar id
        pillar: u32,
        /// Section id
        section: String,
    },
    /// Take the quiz at the end of a pillar
    Quiz {
        /// Pillar id
        pillar: u32,
    },
    /// Show reading progress for a scroll position
    Scroll {
        /// Distance scrolled from the top
        offset: f64,
        /// Maximum scrollable distance
        height: f64,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finwise=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = Config::load()?;
    if cli.persist {
        config.persist_progress = true;
    }
    let mut app = App::new(config)?;
    let mut stdout = io::stdout();

    match cli.command {
        Some(Commands::Pillars) | None => {
            app.list_pillars(&mut stdout)?;
        }
        Some(Commands::Sections { pillar }) => {
            app.list_sections(pillar, &mut stdout)?;
        }
        Some(Commands::Bookmark { pillar, section }) => {
            let bookmarked = app.toggle_bookmark(pillar, &section)?;
            if bookmarked {
                println!("Bookmarked {}", section);
            } else {
                println!("Removed bookmark {}", section);
            }
            app.save()?;
        }
        Some(Commands::Complete { pillar, section }) => {
            app.mark_complete(pillar, &section)?;
            let pillar = app.pillar(pillar)?;
            println!(
                "Completed {} ({})",
                section,
                app.tracker(pillar.id).summary(pillar.section_count())
            );
            app.save()?;
        }
        Some(Commands::Quiz { pillar }) => {
            app.run_quiz(pillar, io::stdin().lock(), &mut stdout)?;
            println!();
        }
        Some(Commands::Scroll { offset, height }) => {
            println!("{:.1}%", app.scroll_progress(offset, height));
        }
    }

    Ok(())
}
