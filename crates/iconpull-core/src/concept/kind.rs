//! Closed set of built-in icon ids.
//!
//! The external renderer keys its scene builders by the same ids, so this
//! enum is the naming contract between the downloader and the renderer:
//! whatever `<id>.png` one of them writes, the other can look up.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IconKind {
    RamModule,
    SsdDrive,
    CpuChip,
    GpuCard,
    Motherboard,
    CoolingFan,
    UsbDrive,
    HardDrive,
    FloppyDisk,
    Cd,
    HdmiCable,
    CircuitBoard,
    BinaryPattern,
    SamsungLaptopSilhouette,
    MonitorSilhouette,
    MemoryChip,
}

impl IconKind {
    /// Every icon kind in canonical processing order.
    pub const ALL: [IconKind; 16] = [
        IconKind::RamModule,
        IconKind::SsdDrive,
        IconKind::CpuChip,
        IconKind::GpuCard,
        IconKind::Motherboard,
        IconKind::CoolingFan,
        IconKind::UsbDrive,
        IconKind::HardDrive,
        IconKind::FloppyDisk,
        IconKind::Cd,
        IconKind::HdmiCable,
        IconKind::CircuitBoard,
        IconKind::BinaryPattern,
        IconKind::SamsungLaptopSilhouette,
        IconKind::MonitorSilhouette,
        IconKind::MemoryChip,
    ];

    pub fn id(self) -> &'static str {
        match self {
            IconKind::RamModule => "ram-module",
            IconKind::SsdDrive => "ssd-drive",
            IconKind::CpuChip => "cpu-chip",
            IconKind::GpuCard => "gpu-card",
            IconKind::Motherboard => "motherboard",
            IconKind::CoolingFan => "cooling-fan",
            IconKind::UsbDrive => "usb-drive",
            IconKind::HardDrive => "hard-drive",
            IconKind::FloppyDisk => "floppy-disk",
            IconKind::Cd => "cd",
            IconKind::HdmiCable => "hdmi-cable",
            IconKind::CircuitBoard => "circuit-board",
            IconKind::BinaryPattern => "binary-pattern",
            IconKind::SamsungLaptopSilhouette => "samsung-laptop-silhouette",
            IconKind::MonitorSilhouette => "monitor-silhouette",
            IconKind::MemoryChip => "memory-chip",
        }
    }

    /// Output file name shared by both producers (`<id>.png`).
    pub fn file_name(self) -> String {
        format!("{}.png", self.id())
    }

    pub fn from_id(id: &str) -> Option<IconKind> {
        IconKind::ALL.iter().copied().find(|k| k.id() == id)
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
