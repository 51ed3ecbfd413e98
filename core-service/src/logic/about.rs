//! About - static project description for the third tab

use serde::Serialize;

use crate::constants::{APP_NAME, APP_TAGLINE, APP_VERSION};

#[derive(Debug, Clone, Serialize)]
pub struct GlossaryEntry {
    pub field: &'static str,
    pub unit: Option<&'static str>,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutInfo {
    pub title: &'static str,
    pub tagline: &'static str,
    pub version: &'static str,
    pub introduction: Vec<&'static str>,
    pub glossary: Vec<GlossaryEntry>,
    pub conclusion: &'static str,
}

const INTRODUCTION: [&str; 2] = [
    "This project revolves around using data from a manufacturing company's industrial devices. \
     The data helps predict when these devices need maintenance, preventing breakdowns and saving \
     money. As companies grow, keeping track of maintenance manually becomes hard. So, we propose \
     a smart solution: using data from sensors to predict when maintenance is needed.",
    "The goal is to analyze the data from these sensors to figure out the best time to do \
     maintenance on the devices. We'll use advanced techniques to do this efficiently.",
];

const CONCLUSION: &str = "By studying this data, we have created accurate models to predict \
     maintenance needs. This will help the company know when to fix their devices, reducing \
     downtime and costs. Automating this process is a modern solution to the challenges of \
     keeping up with maintenance as companies get bigger and their operations get more complex.";

const GLOSSARY: [GlossaryEntry; 6] = [
    GlossaryEntry {
        field: "Type",
        unit: None,
        description: "Categorized as L, M, or H representing low (50% of all products), \
                      medium (30%), and high (20%) product quality variants, each with a \
                      variant-specific serial number.",
    },
    GlossaryEntry {
        field: "Air Temperature",
        unit: Some("K"),
        description: "The temperature of the surrounding air measured in Kelvin.",
    },
    GlossaryEntry {
        field: "Process Temperature",
        unit: Some("K"),
        description: "The temperature of the manufacturing process measured in Kelvin.",
    },
    GlossaryEntry {
        field: "Rotational Speed",
        unit: Some("rpm"),
        description: "The speed at which the device rotates, measured in revolutions per minute.",
    },
    GlossaryEntry {
        field: "Torque",
        unit: Some("Nm"),
        description: "The torque applied to the device, measured in Newton-meters.",
    },
    GlossaryEntry {
        field: "Tool Wear",
        unit: Some("min"),
        description: "The duration of tool usage, measured in minutes.",
    },
];

pub fn about() -> AboutInfo {
    AboutInfo {
        title: APP_NAME,
        tagline: APP_TAGLINE,
        version: APP_VERSION,
        introduction: INTRODUCTION.to_vec(),
        glossary: GLOSSARY.to_vec(),
        conclusion: CONCLUSION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glossary_covers_every_input() {
        let info = about();
        let fields: Vec<_> = info.glossary.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "Type",
                "Air Temperature",
                "Process Temperature",
                "Rotational Speed",
                "Torque",
                "Tool Wear"
            ]
        );
        assert_eq!(info.title, "Predictive Maintenance for Industrial Devices");
    }

    #[test]
    fn test_serializes_units_as_null_when_absent() {
        let json = serde_json::to_value(about()).unwrap();
        assert!(json["glossary"][0]["unit"].is_null());
        assert_eq!(json["glossary"][1]["unit"], "K");
        assert_eq!(json["introduction"].as_array().unwrap().len(), 2);
    }
}
