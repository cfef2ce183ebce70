mod logger;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use menu_print::MenuStore;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "menup", about = "Print-ready CMYK menu PDFs", version)]
struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the print PDF for a menu
    Generate {
        /// Menu store (JSON)
        #[arg(short, long)]
        store: PathBuf,

        /// Menu id
        #[arg(short, long)]
        menu: String,

        /// Output PDF file (default: <menu name>_CMYK_Print.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print options (JSON)
        #[arg(long)]
        options: Option<PathBuf>,

        /// Print a near-black background as rich black
        #[arg(long)]
        rich_black: bool,

        /// Show statistics only, don't generate PDF
        #[arg(long)]
        stats_only: bool,
    },

    /// Add items from a CSV file to a menu
    Import {
        /// Menu store (JSON)
        #[arg(short, long)]
        store: PathBuf,

        /// Menu id
        #[arg(short, long)]
        menu: String,

        /// Input CSV file (columns: section, name, price, description)
        #[arg(long)]
        csv: PathBuf,
    },

    /// Create a menu with default colors
    New {
        /// Menu store (JSON), created if missing
        #[arg(short, long)]
        store: PathBuf,

        /// Template preset or stored template id
        #[arg(short, long, default_value = "a4")]
        template: String,

        /// Menu name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Show how colors will print
    Colors {
        /// Hex colors (#RRGGBB)
        #[arg(required = true, num_args = 1..)]
        hex: Vec<String>,
    },

    /// List available templates
    Templates {
        /// Also list templates stored in this file
        #[arg(short, long)]
        store: Option<PathBuf>,
    },
}

fn print_statistics(stats: &menu_print::PrintStatistics) {
    println!("Print Statistics:");
    println!("  Layout: {}", stats.policy);
    println!(
        "  Sheet: {:.1} x {:.1} mm ({} panel(s))",
        stats.sheet_width_mm, stats.sheet_height_mm, stats.panels
    );
    let orientation = match stats.orientation {
        menu_print::Orientation::Portrait => "portrait",
        menu_print::Orientation::Landscape => "landscape",
    };
    println!("  Orientation: {}", orientation);
    println!("  Output pages: {}", stats.output_pages);
    println!(
        "  Sections: {}/{}",
        stats.sections_placed, stats.total_sections
    );
    println!("  Items: {}/{}", stats.items_placed, stats.total_items);
    if stats.dropped_sections > 0 || stats.dropped_items > 0 {
        println!(
            "  Left out: {} section(s), {} item(s)",
            stats.dropped_sections, stats.dropped_items
        );
    }
}

fn print_template(template: &menu_print::Template) {
    println!(
        "  {:<14} {:<14} {:>6.1} x {:>5.1} mm  {} panel(s), {}",
        template.id,
        template.name,
        template.width_mm,
        template.height_mm,
        template.panels,
        template.fold_type.name()
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::StderrLogger::new(cli.verbose).init()?;

    match cli.command {
        Commands::Generate {
            store,
            menu,
            output,
            options,
            rich_black,
            stats_only,
        } => {
            let mut print_options = match options {
                Some(path) => menu_print::PrintOptions::load(&path)
                    .await
                    .with_context(|| format!("loading options from {}", path.display()))?,
                None => menu_print::PrintOptions::default(),
            };
            print_options.rich_black_background |= rich_black;

            let store = menu_print::JsonMenuStore::open(&store)
                .await
                .map_err(|e| menu_print::MenuPrintError::GenerationFailed(e.to_string()))?;
            let document = menu_print::fetch_for_print(&store, &menu).await?;

            let stats = menu_print::calculate_statistics(&document, &print_options)?;
            print_statistics(&stats);

            if stats_only {
                return Ok(());
            }

            let output = output.unwrap_or_else(|| {
                PathBuf::from(menu_print::print_filename(&document.menu.name))
            });
            let report = menu_print::generate_pdf(&document, &print_options, &output).await?;
            if report.is_truncated() {
                eprintln!("Warning: content did not fit the folded sheet and was left out");
            }
            println!("Generated {} page(s) → {}", report.pages, output.display());
        }

        Commands::Import { store, menu, csv } => {
            let mut store = menu_print::JsonMenuStore::open(&store).await?;
            let rows = menu_print::import::load_items_from_csv(&csv).await?;

            let target = store
                .menu_mut(&menu)
                .ok_or_else(|| anyhow!("menu '{}' not found", menu))?;
            let added = menu_print::import::merge_into_menu(target, rows);
            store.save().await?;

            println!("Imported {} item(s) into {}", added, menu);
        }

        Commands::New {
            store,
            template,
            name,
        } => {
            let mut store = menu_print::JsonMenuStore::open_or_default(&store).await?;
            let menu = store.create_menu(&template)?;
            if let Some(name) = name {
                menu.name = name;
            }
            let id = menu.id.clone();
            store.save().await?;

            println!("Created {} in {}", id, store.path().display());
        }

        Commands::Colors { hex } => {
            for value in hex {
                match menu_print::hex_to_rgb(&value) {
                    Some(rgb) => {
                        println!("{}", value);
                        println!("  RGB:   {}", rgb);
                        println!("  CMYK:  {}", menu_print::rgb_to_cmyk(rgb));
                        println!("  Print: {}", menu_print::cmyk_for_print(&value, false));
                        if menu_print::color::is_near_black(rgb) {
                            println!(
                                "  Print (rich black): {}",
                                menu_print::cmyk_for_print(&value, true)
                            );
                        }
                    }
                    None => println!(
                        "{}: not a color, prints as {}",
                        value,
                        menu_print::Cmyk::PURE_BLACK
                    ),
                }
            }
        }

        Commands::Templates { store } => {
            let templates = match store {
                Some(path) => {
                    menu_print::JsonMenuStore::open(&path)
                        .await?
                        .list_templates()
                        .await?
                }
                None => menu_print::TemplatePreset::ALL
                    .iter()
                    .map(|preset| preset.template())
                    .collect(),
            };

            println!("Templates:");
            for template in &templates {
                print_template(template);
            }
        }
    }

    Ok(())
}
