//! The résumé content model.
//!
//! A `ContentModel` is a plain value: every field is always present (empty
//! strings and sequences are allowed), so layout code never branches on
//! absence. The only place a field can be missing is the JSON boundary, which
//! reports it as a `ModelError`.

use serde::{Deserialize, Serialize};
use std::io::Read;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid content model: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Identity {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub year: String,
}

/// An immutable-per-export snapshot of résumé data.
///
/// Order of `experiences`, `education` and `skills` is render order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContentModel {
    pub identity: Identity,
    pub summary: String,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
}

impl ContentModel {
    /// Parses a model from JSON. Every field is required.
    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ModelError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The model a fresh editing session starts from.
    pub fn starter() -> Self {
        Self {
            identity: Identity {
                name: "Your Name".to_string(),
                title: "Senior Product Designer".to_string(),
                email: "name@example.com".to_string(),
                phone: "+00 000 000".to_string(),
            },
            summary: "Strategic product designer with a record of shipping delightful experiences."
                .to_string(),
            experiences: vec![Experience {
                role: "Senior Designer".to_string(),
                company: "Acme Inc".to_string(),
                period: "2020 \u{2014} Present".to_string(),
                bullets: vec![
                    "Led product redesign".to_string(),
                    "Improved metrics by 32%".to_string(),
                ],
            }],
            education: vec![Education {
                school: "University X".to_string(),
                degree: "B.A. Design".to_string(),
                year: "2017".to_string(),
            }],
            skills: vec![
                "Product Design".to_string(),
                "Figma".to_string(),
                "Research".to_string(),
            ],
        }
    }
}
