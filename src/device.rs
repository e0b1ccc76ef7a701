//! Device registry.
//!
//! The set of devices is closed: every device the builder knows about is a
//! constant here. Behaviour only ever branches on [`Device::is_desktop`].

use std::fmt;
use std::hash::{Hash, Hasher};

use clap::builder::{PossibleValue, PossibleValuesParser, TypedValueParser};

/// A named deployment target.
#[derive(Debug, Clone, Copy)]
pub struct Device {
    name: &'static str,
    target: &'static str,
    is_desktop: bool,
}

impl Device {
    pub const ANDROID: Device = Device {
        name: "android",
        target: "aarch64-linux-android",
        is_desktop: false,
    };

    /// Only a subset of the projects are available on desktops.
    pub const WINDOWS: Device = Device {
        name: "windows",
        target: "x86_64-pc-windows-msvc",
        is_desktop: true,
    };

    /// All known devices, in CLI order.
    pub fn all() -> &'static [Device] {
        &DEVICES
    }

    /// Look up a device by its exact name.
    pub fn from_name(name: &str) -> Option<Device> {
        Self::all().iter().copied().find(|d| d.name == name)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Target triple handed to the toolchain.
    pub fn target(&self) -> &'static str {
        self.target
    }

    pub fn is_desktop(&self) -> bool {
        self.is_desktop
    }

    /// File name of the desktop program produced by a desktop build.
    pub fn desktop_program_name(&self) -> Option<&'static str> {
        match self.name {
            "windows" => Some("brave_fabric_desktop.exe"),
            _ => None,
        }
    }

    /// Human-readable platform name used in status messages.
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    fn possible_value(&self) -> PossibleValue {
        let help = if self.is_desktop {
            format!("{} (desktop)", self.target)
        } else {
            self.target.to_string()
        };
        PossibleValue::new(self.name).help(help)
    }
}

static DEVICES: [Device; 2] = [Device::ANDROID, Device::WINDOWS];

impl PartialEq for Device {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Device {}

impl Hash for Device {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// CLI parser for a device argument.
///
/// clap rejects anything outside [`Device::all`] as a usage error listing the
/// valid names; accepted names resolve through [`Device::from_name`].
pub fn value_parser() -> impl TypedValueParser<Value = Device> {
    PossibleValuesParser::new(Device::all().iter().map(Device::possible_value))
        .try_map(|name| {
            Device::from_name(&name).ok_or_else(|| format!("unknown device '{}'", name))
        })
}
