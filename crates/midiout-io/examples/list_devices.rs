use midiout_io::Output;

fn main() {
    let out = Output::new("list-devices");

    println!("=== MIDI Output Devices ===");
    let devices = out.list_devices();
    if devices.is_empty() {
        println!("  (none found)");
    }
    for dev in &devices {
        println!("  [{}] {}", dev.index, dev.name);
    }
}
