use blocksched::{
    Dataset, FilterMode, ScheduleView, block_groups, instructors, load_dataset_from_json,
    render_view, save_dataset_to_json, venue_groups,
};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[clap(
    name = "blocksched",
    about = "Browse class block schedules as a weekly time grid",
    version
)]
struct Args {
    /// Load the timetable from a JSON file instead of the bundled one
    #[clap(short, long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    data: Option<PathBuf>,

    /// Draw the grid without colored cells
    #[clap(long)]
    plain: bool,

    /// With no subcommand an interactive shell starts
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show one block's weekly schedule
    Block { key: String },
    /// Show every session held in venues matching a name
    Venue {
        #[clap(required = true, value_name = "NAME")]
        name: Vec<String>,
    },
    /// Show every session taught by instructors matching a name
    Instructor {
        #[clap(required = true, value_name = "NAME")]
        name: Vec<String>,
    },
    /// List block keys by program and year level
    Blocks,
    /// List venues by floor, labs, and others
    Venues,
    /// List instructors
    Instructors,
}

fn main() {
    let args = Args::parse();

    let dataset = match &args.data {
        Some(path) => match load_dataset_from_json(path) {
            Ok(dataset) => dataset,
            Err(err) => {
                eprintln!("Error loading {}: {}", path.display(), err);
                std::process::exit(1);
            }
        },
        None => Dataset::embedded(),
    };

    let use_color = !args.plain;
    let mut view = ScheduleView::new(dataset);

    match args.command {
        Some(command) => run_command(&mut view, command, use_color),
        None => run_shell(&mut view, use_color),
    }
}

fn run_command(view: &mut ScheduleView, command: Command, use_color: bool) {
    match command {
        Command::Block { key } => {
            view.set_mode(FilterMode::Block);
            view.set_value(key);
            println!("{}", render_view(view, use_color));
        }
        Command::Venue { name } => {
            view.set_mode(FilterMode::Venue);
            view.set_value(name.join(" "));
            println!("{}", render_view(view, use_color));
        }
        Command::Instructor { name } => {
            view.set_mode(FilterMode::Instructor);
            view.set_value(name.join(" "));
            println!("{}", render_view(view, use_color));
        }
        Command::Blocks => print_block_groups(view.dataset()),
        Command::Venues => print_venue_groups(view.dataset()),
        Command::Instructors => print_instructors(view.dataset()),
    }
}

fn run_shell(view: &mut ScheduleView, use_color: bool) {
    println!("Block Schedule Viewer - type 'help' for commands\n");
    println!("{}", render_view(view, use_color));

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "show" => println!("{}", render_view(view, use_color)),
            "mode" => match parts.next() {
                Some(name) => match FilterMode::from_str(name) {
                    Ok(mode) => {
                        view.set_mode(mode);
                        println!("Filter mode set to {}.", mode.as_str());
                        println!("{}", render_view(view, use_color));
                    }
                    Err(_) => {
                        println!("Unknown mode '{}'. Use 'modes' to list options.", name);
                    }
                },
                None => println!("Usage: mode <block|venue|instructor>"),
            },
            "modes" => print_modes(),
            "filter" => {
                let value = parts.collect::<Vec<_>>().join(" ");
                if value.is_empty() {
                    println!("Usage: filter <value>");
                } else {
                    view.set_value(value);
                    println!("{}", render_view(view, use_color));
                }
            }
            "clear" => {
                view.clear_value();
                println!("{}", render_view(view, use_color));
            }
            "blocks" => print_block_groups(view.dataset()),
            "venues" => print_venue_groups(view.dataset()),
            "instructors" => print_instructors(view.dataset()),
            "load" => match parts.next() {
                Some(path) => match load_dataset_from_json(path) {
                    Ok(dataset) => {
                        view.set_dataset(dataset);
                        println!("Loaded {}.", path);
                        println!("{}", render_view(view, use_color));
                    }
                    Err(e) => println!("Error loading {}: {}", path, e),
                },
                None => println!("Usage: load <path>"),
            },
            "save" => match parts.next() {
                Some(path) => match save_dataset_to_json(view.dataset(), path) {
                    Ok(()) => println!("Saved {}.", path),
                    Err(e) => println!("Error saving {}: {}", path, e),
                },
                None => println!("Usage: save <path>"),
            },
            other => {
                println!("Unknown command '{}'. Type 'help' for commands.", other);
            }
        }
    }
}

fn print_help() {
    println!(
        "Commands:\n  help                     Show this help\n  show                     Redraw the current view\n  mode <name>              Choose how 'filter' matches (block, venue, instructor)\n  modes                    List filter modes\n  filter <value>           Apply a filter value (rest of line)\n  clear                    Clear the filter\n  blocks                   List block keys by program and year level\n  venues                   List venues by floor, labs, and others\n  instructors              List instructors\n  load <path>              Load a timetable JSON file\n  save <path>              Save the current timetable as JSON\n  quit|exit                Exit"
    );
}

fn print_modes() {
    println!("Filter modes:");
    for (key, description) in FilterMode::variants() {
        println!("  {:<11} {}", key, description);
    }
}

fn print_block_groups(dataset: &Dataset) {
    let groups = block_groups(dataset);
    let mut current_program: Option<&str> = None;
    for group in &groups {
        if current_program != Some(group.program.as_str()) {
            println!("{}", group.program);
            current_program = Some(group.program.as_str());
        }
        println!("  {}: {}", group.year_label, group.blocks.join(", "));
    }
}

fn print_venue_groups(dataset: &Dataset) {
    for group in venue_groups(dataset) {
        println!("{}: {}", group.label, group.venues.join(", "));
    }
}

fn print_instructors(dataset: &Dataset) {
    for name in instructors(dataset) {
        println!("{}", name);
    }
}
