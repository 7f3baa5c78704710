use chiptally::session::Controller;
use chiptally::session::Mode;
use chiptally::session::Phase;
use chiptally::session::Table;
use chiptally::session::Tier;
use chiptally::Chips;
use clap::Parser;
use colored::*;
use dialoguer::Input;
use dialoguer::Select;
use std::time::SystemTime;

/// terminal front end for the session engine. everything in this file
/// is presentation: the controller decides what is offered and what
/// each intent does to the table.
#[derive(Parser)]
#[command(name = "chiptally")]
#[command(about = "Single-player poker chip stack and pot tracker.")]
struct Args {
    /// seed the stack and skip the setup prompt
    #[arg(long)]
    stack: Option<Chips>,
}

fn main() -> anyhow::Result<()> {
    chiptally::log();
    let args = Args::parse();
    let mut controller = Controller::new();
    if let Some(stack) = args.stack {
        controller.setup(&stack.to_string());
    }
    loop {
        match controller.table().phase() {
            Phase::Setup => setup(&mut controller)?,
            Phase::Active => {
                render(controller.table());
                if !play(&mut controller)? {
                    break;
                }
            }
        }
    }
    Ok(())
}

fn setup(controller: &mut Controller) -> anyhow::Result<()> {
    let raw = Input::<String>::new()
        .with_prompt("Initial chips")
        .allow_empty(true)
        .interact_text()?;
    controller.setup(&raw);
    Ok(())
}

fn render(table: &Table) {
    println!();
    println!("{}", table);
    for record in table.history().iter() {
        println!("  {:<24} {}", record.to_string(), ago(record.at).dimmed());
    }
}

fn ago(at: SystemTime) -> String {
    let secs = at.elapsed().unwrap_or_default().as_secs();
    match secs {
        0..60 => format!("{}s ago", secs),
        _ => format!("{}m ago", secs / 60),
    }
}

fn play(controller: &mut Controller) -> anyhow::Result<bool> {
    let mut choices = Vec::with_capacity(6);
    if controller.can_bet() {
        choices.push("Bet");
    }
    choices.push("Win");
    if controller.can_fold() {
        choices.push("Fold");
    }
    if controller.can_all_in() {
        choices.push("All In");
    }
    choices.push("Reset");
    choices.push("Quit");
    let selection = Select::new()
        .items(choices.as_slice())
        .default(0)
        .report(false)
        .interact()?;
    match choices[selection] {
        "Bet" => {
            if let Some(amount) = pick(controller, Mode::Bet)? {
                controller.bet(amount);
            }
        }
        "Win" => {
            if let Some(bonus) = pick(controller, Mode::Win)? {
                controller.win(bonus);
            }
        }
        "Fold" => controller.fold(),
        "All In" => controller.all_in(),
        "Reset" => controller.reset(),
        "Quit" => return Ok(false),
        _ => unreachable!(),
    }
    Ok(true)
}

fn pick(controller: &Controller, mode: Mode) -> anyhow::Result<Option<Chips>> {
    let prompt = match mode {
        Mode::Bet => "How much to bet?".to_string(),
        Mode::Win => match controller.table().pot() {
            0 => "How much won?".to_string(),
            pot => format!("Pot: {} chips. Bonus chips won?", pot),
        },
    };
    let amounts = controller.choices(mode);
    let items = amounts
        .iter()
        .map(|&amount| {
            amount
                .to_string()
                .color(Tier::from(amount).color())
                .to_string()
        })
        .chain(std::iter::once("Back".dimmed().to_string()))
        .collect::<Vec<_>>();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(items.as_slice())
        .default(0)
        .report(false)
        .interact()?;
    Ok(amounts.get(selection).copied())
}
