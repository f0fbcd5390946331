//! District reference data

use serde::Deserialize;
use std::sync::LazyLock;

const DISTRICTS_JSON: &str = include_str!("../../data/districts.json");

/// A selectable district
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct District {
    pub id: u32,
    pub name: String,
}

static DISTRICTS: LazyLock<Vec<District>> = LazyLock::new(|| {
    serde_json::from_str(DISTRICTS_JSON).unwrap_or_else(|e| {
        tracing::error!("Failed to parse district list: {e}");
        Vec::new()
    })
});

/// All districts, in the order they are offered
pub fn all() -> &'static [District] {
    &DISTRICTS
}

/// Display name for a district id stored in the form
pub fn name_for(id: &str) -> Option<&'static str> {
    all()
        .iter()
        .find(|d| d.id.to_string() == id)
        .map(|d| d.name.as_str())
}

/// Step the district selection forward or backward.
///
/// The empty selection ("None") sits before the first district, and
/// stepping wraps around in both directions.
pub fn step(current: &str, forward: bool) -> String {
    let districts = all();
    // Position 0 is "None", 1..=len are districts
    let slots = districts.len() + 1;
    let position = districts
        .iter()
        .position(|d| d.id.to_string() == current)
        .map(|i| i + 1)
        .unwrap_or(0);

    let next = if forward {
        (position + 1) % slots
    } else {
        (position + slots - 1) % slots
    };

    match next {
        0 => String::new(),
        n => districts[n - 1].id.to_string(),
    }
}
