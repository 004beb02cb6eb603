// Pattern: Abstract Factory
// A factory produces a whole family of widgets that belong together. The
// client only sees the Button/Checkbox traits; the Platform enum decides
// which family it gets.

use crate::error::PatternError;
use std::str::FromStr;

// ============================================================================
// Products
// ============================================================================

pub trait Button {
    fn render(&self) -> String;
}

pub trait Checkbox {
    fn render(&self) -> String;
}

pub struct WindowsButton;
impl Button for WindowsButton {
    fn render(&self) -> String {
        "Rendering a Windows button".to_string()
    }
}

pub struct WindowsCheckbox;
impl Checkbox for WindowsCheckbox {
    fn render(&self) -> String {
        "Rendering a Windows checkbox".to_string()
    }
}

pub struct MacOsButton;
impl Button for MacOsButton {
    fn render(&self) -> String {
        "Rendering a macOS button".to_string()
    }
}

pub struct MacOsCheckbox;
impl Checkbox for MacOsCheckbox {
    fn render(&self) -> String {
        "Rendering a macOS checkbox".to_string()
    }
}

// ============================================================================
// Factories
// ============================================================================

pub trait GuiFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

pub struct WindowsFactory;
impl GuiFactory for WindowsFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WindowsCheckbox)
    }
}

pub struct MacOsFactory;
impl GuiFactory for MacOsFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacOsButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(MacOsCheckbox)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
}

impl Platform {
    pub fn factory(self) -> Box<dyn GuiFactory> {
        match self {
            Platform::Windows => Box::new(WindowsFactory),
            Platform::MacOs => Box::new(MacOsFactory),
        }
    }
}

impl FromStr for Platform {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" => Ok(Platform::Windows),
            "macos" | "mac" => Ok(Platform::MacOs),
            _ => Err(PatternError::UnknownPlatform(s.to_string())),
        }
    }
}

/// Client code: only talks to the abstract types.
pub fn render_ui(factory: &dyn GuiFactory) -> Vec<String> {
    let button = factory.create_button();
    let checkbox = factory.create_checkbox();
    vec![button.render(), checkbox.render()]
}

pub fn run_demo() {
    for (label, platform) in [("Windows", Platform::Windows), ("MacOS", Platform::MacOs)] {
        println!("Client: Testing client code with the {label} factory...");
        for line in render_ui(platform.factory().as_ref()) {
            println!("{line}");
        }
        println!();
    }
}
