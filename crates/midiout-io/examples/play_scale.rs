//! Plays a C major scale on the first output port whose name matches the
//! first argument (default: "IAC"), or on a virtual port when none matches.
//!
//! ```text
//! cargo run -p midiout-io --example play_scale -- "Synth"
//! ```

use std::thread;
use std::time::Duration;

use midiout_io::{set_verbose, Output};

const CHANNEL: u8 = 1;
const SCALE: [u8; 8] = [60, 62, 64, 65, 67, 69, 71, 72];

fn main() -> midiout_io::Result<()> {
    tracing_subscriber::fmt().init();
    set_verbose(true);

    let fragment = std::env::args().nth(1).unwrap_or_else(|| "IAC".to_string());
    let mut out = Output::builder().client_name("play-scale").build()?;

    if !out.open_port_by_name(&fragment) && !out.open_virtual_port("play-scale") {
        eprintln!("ERROR: no port matching '{}' and no virtual port support.", fragment);
        std::process::exit(1);
    }
    println!("Playing on: {}", out.name());

    out.send_program_change(CHANNEL, 1)?;
    out.send_control_change(CHANNEL, 7, 100)?;

    for &pitch in &SCALE {
        out.send_note_on(CHANNEL, pitch, 100)?;
        thread::sleep(Duration::from_millis(250));
        out.send_note_off(CHANNEL, pitch, 0)?;
    }

    // Sweep the bend wheel up and back to center
    for step in 0..=16 {
        out.send_pitch_bend(CHANNEL, 8192 + step * 511)?;
        thread::sleep(Duration::from_millis(20));
    }
    out.send_pitch_bend(CHANNEL, 8192)?;

    out.close_port();
    Ok(())
}
