// Pattern: Bridge
// Remote controls (abstraction) and devices (implementation) vary
// independently. Remotes only use the primitive `Device` operations.

use tracing::debug;

// ============================================================================
// Implementation side: devices
// ============================================================================

pub const MAX_VOLUME: u8 = 100;

pub trait Device {
    fn is_enabled(&self) -> bool;
    fn enable(&mut self);
    fn disable(&mut self);
    fn volume(&self) -> u8;
    /// Values outside `0..=100` are ignored.
    fn set_volume(&mut self, volume: i32);
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct DeviceState {
    enabled: bool,
    volume: u8,
}

impl DeviceState {
    fn with_volume(volume: u8) -> Self {
        Self {
            enabled: false,
            volume,
        }
    }

    fn set_volume(&mut self, volume: i32) {
        match u8::try_from(volume) {
            Ok(v) if v <= MAX_VOLUME => self.volume = v,
            _ => debug!(volume, "volume out of range, ignored"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tv {
    state: DeviceState,
}

impl Default for Tv {
    fn default() -> Self {
        Self {
            state: DeviceState::with_volume(50),
        }
    }
}

impl Device for Tv {
    fn is_enabled(&self) -> bool {
        self.state.enabled
    }

    fn enable(&mut self) {
        self.state.enabled = true;
    }

    fn disable(&mut self) {
        self.state.enabled = false;
    }

    fn volume(&self) -> u8 {
        self.state.volume
    }

    fn set_volume(&mut self, volume: i32) {
        self.state.set_volume(volume);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Radio {
    state: DeviceState,
}

impl Default for Radio {
    fn default() -> Self {
        Self {
            state: DeviceState::with_volume(30),
        }
    }
}

impl Device for Radio {
    fn is_enabled(&self) -> bool {
        self.state.enabled
    }

    fn enable(&mut self) {
        self.state.enabled = true;
    }

    fn disable(&mut self) {
        self.state.enabled = false;
    }

    fn volume(&self) -> u8 {
        self.state.volume
    }

    fn set_volume(&mut self, volume: i32) {
        self.state.set_volume(volume);
    }
}

// ============================================================================
// Abstraction side: remotes
// ============================================================================

/// Shared remote behaviour, written once against `Device`.
pub trait Remote {
    fn device(&mut self) -> &mut dyn Device;

    fn toggle_power(&mut self) -> String {
        let device = self.device();
        if device.is_enabled() {
            device.disable();
            "RemoteControl: Turning off the device.".to_string()
        } else {
            device.enable();
            "RemoteControl: Turning on the device.".to_string()
        }
    }

    fn volume_up(&mut self) -> String {
        let device = self.device();
        let target = i32::from(device.volume()) + 10;
        device.set_volume(target);
        format!("RemoteControl: Increasing volume to {}.", device.volume())
    }

    fn volume_down(&mut self) -> String {
        let device = self.device();
        let target = i32::from(device.volume()) - 10;
        device.set_volume(target);
        format!("RemoteControl: Decreasing volume to {}.", device.volume())
    }
}

pub struct RemoteControl {
    device: Box<dyn Device>,
}

impl RemoteControl {
    pub fn new(device: Box<dyn Device>) -> Self {
        Self { device }
    }
}

impl Remote for RemoteControl {
    fn device(&mut self) -> &mut dyn Device {
        self.device.as_mut()
    }
}

pub struct AdvancedRemoteControl {
    device: Box<dyn Device>,
}

impl AdvancedRemoteControl {
    pub fn new(device: Box<dyn Device>) -> Self {
        Self { device }
    }

    pub fn mute(&mut self) -> String {
        self.device.set_volume(0);
        "AdvancedRemoteControl: Muting the device.".to_string()
    }
}

impl Remote for AdvancedRemoteControl {
    fn device(&mut self) -> &mut dyn Device {
        self.device.as_mut()
    }
}

fn client_code(remote: &mut dyn Remote) {
    println!("{}", remote.toggle_power());
    println!("{}", remote.volume_up());
    println!("{}", remote.volume_down());
    println!("{}", remote.volume_down());
}

pub fn run_demo() {
    println!("Client: Testing TV remote control...");
    let mut tv_remote = RemoteControl::new(Box::new(Tv::default()));
    client_code(&mut tv_remote);
    println!();

    println!("Client: Testing Radio remote control...");
    let mut radio_remote = AdvancedRemoteControl::new(Box::new(Radio::default()));
    client_code(&mut radio_remote);
    println!("{}", radio_remote.mute());
    println!("{}", radio_remote.volume_down());
}
