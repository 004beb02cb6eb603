// Pattern: Builder
// A reusable builder assembles a custom computer step by step. `build` hands
// the product over and starts again from a blank one.

use crate::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Computer {
    pub processor: Option<String>,
    #[serde(rename = "RAM")]
    pub ram: Option<String>,
    pub hard_drive: Option<String>,
    pub graphics_card: Option<String>,
}

impl Computer {
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Default)]
pub struct ComputerBuilder {
    computer: Computer,
}

impl ComputerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn processor(&mut self, processor: impl Into<String>) -> &mut Self {
        self.computer.processor = Some(processor.into());
        self
    }

    pub fn ram(&mut self, ram: impl Into<String>) -> &mut Self {
        self.computer.ram = Some(ram.into());
        self
    }

    pub fn hard_drive(&mut self, hard_drive: impl Into<String>) -> &mut Self {
        self.computer.hard_drive = Some(hard_drive.into());
        self
    }

    pub fn graphics_card(&mut self, graphics_card: impl Into<String>) -> &mut Self {
        self.computer.graphics_card = Some(graphics_card.into());
        self
    }

    pub fn build(&mut self) -> Computer {
        std::mem::take(&mut self.computer)
    }
}

pub fn run_demo() -> Result<()> {
    let mut builder = ComputerBuilder::new();
    let custom_pc = builder
        .processor("AMD Ryzen 7")
        .ram("32GB")
        .hard_drive("1TB SSD")
        .graphics_card("Nvidia RTX 3070")
        .build();
    println!("{}", custom_pc.to_pretty_json()?);

    let office_pc = builder.processor("Intel Core i5").ram("16GB").build();
    println!("Reused builder:");
    println!("{}", office_pc.to_pretty_json()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gaming(builder: &mut ComputerBuilder) -> Computer {
        builder
            .processor("AMD Ryzen 7")
            .ram("32GB")
            .hard_drive("1TB SSD")
            .graphics_card("Nvidia RTX 3070")
            .build()
    }

    #[test]
    fn test_builds_all_parts() {
        let pc = gaming(&mut ComputerBuilder::new());
        assert_eq!(pc.processor.as_deref(), Some("AMD Ryzen 7"));
        assert_eq!(pc.ram.as_deref(), Some("32GB"));
        assert_eq!(pc.hard_drive.as_deref(), Some("1TB SSD"));
        assert_eq!(pc.graphics_card.as_deref(), Some("Nvidia RTX 3070"));
    }

    #[test]
    fn test_equivalent_builds_are_equal_but_distinct() {
        let mut builder = ComputerBuilder::new();
        let first = gaming(&mut builder);
        let second = gaming(&mut builder);
        assert_eq!(first, second);
        assert!(!std::ptr::eq(&first, &second));
    }

    #[test]
    fn test_build_resets_builder() {
        let mut builder = ComputerBuilder::new();
        gaming(&mut builder);

        let bare = builder.processor("Intel Core i5").build();
        assert_eq!(bare.processor.as_deref(), Some("Intel Core i5"));
        assert_eq!(bare.ram, None);
        assert_eq!(bare.graphics_card, None);
    }

    #[test]
    fn test_json_rendering_uses_camel_case_field_names() {
        let json = ComputerBuilder::new().ram("8GB").build().to_pretty_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["RAM"], "8GB");
        assert!(value["hardDrive"].is_null());
    }
}
