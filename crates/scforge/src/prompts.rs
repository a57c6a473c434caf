//! Terminal prompt helpers
//!
//! Thin wrappers over `dialoguer`; numeric inputs re-prompt on parse
//! failure, so every function returns a usable value or an I/O error.

use anyhow::Result;
use dialoguer::{Input, Select};

use script_generator::ValueRange;

/// Prompt for a non-empty string.
pub fn input_text(prompt: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|s: &String| {
            if s.trim().is_empty() {
                Err("a value is required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value.trim().to_string())
}

pub fn input_f64(prompt: &str) -> Result<f64> {
    Ok(Input::new().with_prompt(prompt).interact_text()?)
}

pub fn input_usize(prompt: &str) -> Result<usize> {
    Ok(Input::new().with_prompt(prompt).interact_text()?)
}

pub fn input_u32(prompt: &str) -> Result<u32> {
    Ok(Input::new().with_prompt(prompt).interact_text()?)
}

/// Prompt for the min and max of a sampling range.
pub fn input_range(label: &str) -> Result<ValueRange> {
    let min = input_f64(&format!("Min {}", label))?;
    let max = input_f64(&format!("Max {}", label))?;
    Ok(ValueRange::new(min, max))
}

/// Prompt for one of a fixed set of options; returns the selected index.
pub fn select(prompt: &str, items: &[&str]) -> Result<usize> {
    Ok(Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()?)
}
