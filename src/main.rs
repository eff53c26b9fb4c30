use std::{io::IsTerminal, path::PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use plates_rs::{
    app_state::AppState,
    bar::Bar,
    config,
    inventory::Inventory,
    preferences::{FileStore, Preferences},
    report,
    unit::{Unit, Weight},
};

#[derive(Parser)]
#[command(name = "plates", about = "Work out which plates to load on a bar")]
struct Args {
    /// Directory holding saved plates and bar weights
    #[arg(long, global = true)]
    store_dir: Option<PathBuf>,

    /// Never colour the bar diagram
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate the plates for a target weight, e.g. `100`, `225lb`
    Calc {
        #[arg(value_parser = clap::value_parser!(Weight), allow_negative_numbers = true)]
        target: Weight,
        /// Unit for numbers without a suffix
        #[arg(long, value_enum, default_value_t = Unit::Kg)]
        unit: Unit,
        #[arg(long, short, value_enum, default_value_t = Bar::Olympic)]
        equipment: Bar,
        /// Print the allocation as JSON, in kilograms
        #[arg(long)]
        json: bool,
    },
    /// List the available bars and handles
    Equipment {
        #[arg(long, value_enum, default_value_t = Unit::Kg)]
        unit: Unit,
    },
    /// Show or edit the plate inventory
    Plates {
        /// Edit the dumbbell plates instead of the barbell plates
        #[arg(long, global = true)]
        dumbbell: bool,
        #[arg(long, global = true, value_enum, default_value_t = Unit::Kg)]
        unit: Unit,
        #[command(subcommand)]
        command: Option<PlatesCommand>,
    },
    /// Set the custom bar or dumbbell handle weight
    Bar {
        #[command(subcommand)]
        command: BarCommand,
    },
    /// Restore every saved preference to its default
    Reset,
}

#[derive(Subcommand)]
enum PlatesCommand {
    List,
    /// Add a plate weight (starts with a pair)
    Add { weight: f64 },
    /// Remove the plate at a listed position
    Remove { position: usize },
    /// Set how many plates of a listed position are available
    Set {
        position: usize,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    Inc { position: usize },
    Dec { position: usize },
}

#[derive(Subcommand)]
enum BarCommand {
    /// Weight of the `custom` bar, in the unit it will be used with
    Custom { weight: f64 },
    /// Weight of a dumbbell handle, in the unit it will be used with
    Handle { weight: f64 },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let color = !args.no_color && std::io::stdout().is_terminal();

    let mut store = FileStore::new(config::resolve_store_dir(args.store_dir.as_deref()));
    tracing::debug!(dir = %store.dir().display(), "using preference store");
    let mut preferences = Preferences::load(&store);

    match args.command {
        Command::Calc {
            target,
            unit,
            equipment,
            json,
        } => {
            let unit = target.unit.unwrap_or(unit);
            let state = AppState::new(target.value, unit, equipment, preferences);

            if !state.should_show_result() {
                println!("Enter a target weight above zero.");
                return Ok(());
            }
            if !state.target_on_step() {
                tracing::warn!(
                    target = state.target_weight,
                    step = unit.step(),
                    "target is not a multiple of the usual step"
                );
            }

            let allocation = state.calculate();
            if json {
                println!("{}", serde_json::to_string_pretty(&allocation)?);
                return Ok(());
            }
            println!(
                "{}",
                report::render(&allocation, state.bar_weight_kg(), unit, state.kind(), color)
            );
        }
        Command::Equipment { unit } => {
            for bar in Bar::ALL {
                match bar {
                    Bar::Custom => println!("{:<10} {:<9} {}", bar.id(), bar.kind(), bar.name()),
                    _ => println!(
                        "{:<10} {:<9} {} ({} {unit})",
                        bar.id(),
                        bar.kind(),
                        bar.name(),
                        bar.default_weight(unit)
                    ),
                }
            }
        }
        Command::Plates {
            dumbbell,
            unit,
            command,
        } => {
            let bar = if dumbbell { Bar::Dumbbell } else { Bar::Olympic };
            let mut state = AppState::new(0.0, unit, bar, preferences);
            let command = command.unwrap_or(PlatesCommand::List);
            let changed = edit_plates(state.active_plates_mut(), &command, unit)?;

            if changed {
                if dumbbell {
                    state.preferences.save_dumbbell_plates(&mut store)?;
                } else {
                    state.preferences.save_barbell_plates(&mut store)?;
                }
                tracing::info!(dumbbell, "saved plate inventory");
            }

            print_plates(state.active_plates(), unit);
        }
        Command::Bar { command } => match command {
            BarCommand::Custom { weight } => {
                preferences.custom_bar_weight = non_negative(weight)?;
                preferences.save_custom_bar_weight(&mut store)?;
                println!("Custom bar weight set to {weight}.");
            }
            BarCommand::Handle { weight } => {
                preferences.dumbbell_handle_weight = non_negative(weight)?;
                preferences.save_dumbbell_handle_weight(&mut store)?;
                println!("Dumbbell handle weight set to {weight}.");
            }
        },
        Command::Reset => {
            Preferences::default()
                .save_all(&mut store)
                .context("failed to reset preferences")?;
            println!("Preferences reset to defaults.");
        }
    }

    Ok(())
}

/// Applies one editor command. Returns whether the inventory changed.
fn edit_plates(
    inventory: &mut Inventory,
    command: &PlatesCommand,
    unit: Unit,
) -> anyhow::Result<bool> {
    match *command {
        PlatesCommand::List => return Ok(false),
        PlatesCommand::Add { weight } => {
            inventory.add(weight, unit)?;
        }
        PlatesCommand::Remove { position } => {
            inventory.remove(index(inventory, position)?)?;
        }
        PlatesCommand::Set { position, quantity } => {
            inventory.set_quantity(index(inventory, position)?, quantity)?;
        }
        PlatesCommand::Inc { position } => inventory.increment(index(inventory, position)?)?,
        PlatesCommand::Dec { position } => inventory.decrement(index(inventory, position)?)?,
    }
    Ok(true)
}

/// Listed positions start at 1.
fn index(inventory: &Inventory, position: usize) -> anyhow::Result<usize> {
    if position == 0 || position > inventory.len() {
        bail!("No plate at position {position}.");
    }
    Ok(position - 1)
}

fn non_negative(weight: f64) -> anyhow::Result<f64> {
    if !weight.is_finite() || weight < 0.0 {
        bail!("Weight must be zero or more, got {weight}.");
    }
    Ok(weight)
}

fn print_plates(inventory: &Inventory, unit: Unit) {
    println!("Available plates ({unit})");
    for (position, plate) in inventory.plates().iter().enumerate() {
        println!(
            "{:>3}. {} {unit} × {}",
            position + 1,
            unit.display_precise(plate.weight()),
            plate.quantity()
        );
    }
}
