//! Built-in concept table used when the config does not provide one.

use super::{Concept, IconKind};

fn concept(kind: IconKind, queries: &[&str], include: &[&str], exclude: &[&str]) -> Concept {
    let owned = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    Concept {
        id: kind.id().to_string(),
        queries: owned(queries),
        include: owned(include),
        exclude: owned(exclude),
    }
}

/// One concept per [`IconKind`], in [`IconKind::ALL`] order.
pub fn default_concepts() -> Vec<Concept> {
    use IconKind::*;
    vec![
        concept(RamModule, &["ram-module", "computer-ram"], &["ram"], &["battering", "zodiac", "lamb"]),
        concept(SsdDrive, &["ssd", "solid-state-drive"], &["ssd", "solid-state"], &["hard-disk"]),
        concept(CpuChip, &["cpu-chip", "processor-chip"], &["cpu", "processor", "chip"], &["case-cpu"]),
        concept(
            GpuCard,
            &["gpu-card", "graphics-card"],
            &["gpu", "graphics-card", "graphic-card"],
            &["gift", "graph"],
        ),
        concept(Motherboard, &["motherboard"], &["motherboard"], &[]),
        concept(CoolingFan, &["cooling-fan", "computer-fan"], &["fan"], &["ceiling", "table-fan"]),
        concept(
            UsbDrive,
            &["usb-drive", "flash-drive", "usb-flash-drive"],
            &["usb", "flash-drive"],
            &["plug", "cable"],
        ),
        concept(
            HardDrive,
            &["hard-disk-drive", "hard-drive"],
            &["hard-disk", "hard-drive", "hdd"],
            &["ssd"],
        ),
        concept(FloppyDisk, &["floppy-disk"], &["floppy"], &[]),
        concept(Cd, &["cd-disc", "compact-disc", "cd"], &["cd", "disc"], &["dvd-player"]),
        concept(HdmiCable, &["hdmi-cable", "hdmi"], &["hdmi", "cable"], &["adapter-only"]),
        concept(
            CircuitBoard,
            &["circuit-board", "pcb-board"],
            &["circuit-board", "pcb", "motherboard"],
            &["board-game"],
        ),
        concept(BinaryPattern, &["binary", "digital-panel"], &["binary", "code", "digital"], &["bitcoin"]),
        concept(
            SamsungLaptopSilhouette,
            &["samsung-laptop", "laptop"],
            &["samsung", "laptop"],
            &["tablet"],
        ),
        concept(MonitorSilhouette, &["computer-monitor", "monitor"], &["monitor"], &["tv-remote"]),
        concept(MemoryChip, &["memory-chip", "chip-module"], &["memory-chip", "chip"], &["sd-card"]),
    ]
}
