//! LED Console Controller
//!
//! This demo drives a small LED machine from the keyboard.
//!
//! Key concepts:
//! - Declaring state and event domains with `symbol_enum!`
//! - Wiring a transition table with plain functions as handlers
//! - Passing a caller-owned output payload through every step
//! - Mapping raw input to event codes, so bad input is reported, not fatal
//!
//! Run with: cargo run --example led_console
//! Set RUST_LOG=fsm_table=trace to watch the engine dispatch.

use fsm_table::builder::MachineBuilder;
use fsm_table::core::{Code, Symbol};
use fsm_table::engine::{Machine, Status};
use fsm_table::symbol_enum;
use std::io::{self, BufRead};
use tracing_subscriber::EnvFilter;

symbol_enum! {
    enum Led {
        On,
        Off,
        Blink,
    }
}

symbol_enum! {
    enum LedEvent {
        TurnOn,
        TurnOff,
        SetToggle,
        Tick,
    }
}

struct Lamp {
    lit: bool,
}

fn turn_off(_: &(), lamp: &mut Lamp) -> Code<Led> {
    println!("Static: LED off");
    lamp.lit = false;
    Led::Off.into()
}

fn turn_on(_: &(), lamp: &mut Lamp) -> Code<Led> {
    println!("Static: LED on");
    lamp.lit = true;
    Led::On.into()
}

fn set_toggle(_: &(), _: &mut Lamp) -> Code<Led> {
    println!("Switched to toggle mode");
    Led::Blink.into()
}

fn toggle(_: &(), lamp: &mut Lamp) -> Code<Led> {
    lamp.lit = !lamp.lit;
    if lamp.lit {
        println!("Toggled: LED on");
    } else {
        println!("Toggled: LED off");
    }
    Led::Blink.into()
}

fn led_machine() -> Machine<Led, LedEvent, (), Lamp> {
    MachineBuilder::new("led")
        .on(Led::On, LedEvent::TurnOff, turn_off)
        .on(Led::Off, LedEvent::TurnOn, turn_on)
        .on(Led::On, LedEvent::SetToggle, set_toggle)
        .on(Led::Off, LedEvent::SetToggle, set_toggle)
        .on(Led::Blink, LedEvent::TurnOn, turn_on)
        .on(Led::Blink, LedEvent::TurnOff, turn_off)
        .on(Led::Blink, LedEvent::Tick, toggle)
        .build()
        .expect("LED table is well formed")
}

/// Digits map straight to event codes; anything else lands past the sentinel.
fn parse_event(line: &str) -> Option<Code<LedEvent>> {
    let byte = *line.trim().as_bytes().first()?;
    Some(Code::from_raw(byte.wrapping_sub(b'0')))
}

fn describe(status: Status) -> Option<&'static str> {
    match status {
        Status::Ok => None,
        Status::InvalidEvent => Some("invalid event"),
        Status::InvalidState => Some("invalid state"),
        Status::NoTransition => Some("nothing done"),
        Status::NullHandler => Some("handler not wired"),
    }
}

fn print_available(machine: &Machine<Led, LedEvent, (), Lamp>) {
    let Some(state) = machine.state() else {
        return;
    };
    let events: Vec<String> = machine
        .definition()
        .events_from(state)
        .into_iter()
        .map(|event| format!("{} {}", event.index(), event.name()))
        .collect();
    println!("    From {}: {}", state.name(), events.join(", "));
}

fn print_instructions() {
    println!("    Available events:");
    println!("    0 Turn on (when blinking or off)");
    println!("    1 Turn off (when blinking or on)");
    println!("    2 Set toggle mode (when not in toggle mode)");
    println!("    3 Toggle tick (toggle LED when in toggle mode)");
    println!("    q Quit");
    println!("    LED currently turned on.");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut machine = led_machine();
    let mut lamp = Lamp { lit: true };

    print_instructions();

    for line in io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        if line.trim() == "q" {
            break;
        }
        let Some(event) = parse_event(&line) else {
            continue;
        };

        let result = machine.step(event, &(), &mut lamp);
        let status = Status::of(&result);
        if let Some(message) = describe(status) {
            println!("{message}");
        }
        if status == Status::NoTransition {
            print_available(&machine);
        }
    }

    println!(
        "Final state: {}, LED {}",
        machine.current_state(),
        if lamp.lit { "on" } else { "off" }
    );
}
