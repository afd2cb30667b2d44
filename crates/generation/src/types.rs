//! Common types for site generation requests and results

use serde::{Deserialize, Serialize};

/// Kind of business the generated site is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BusinessType {
    ProductSales,
    Services,
    Appointments,
    Restaurant,
    HardwareStore,
    Digital,
    Other,
}

impl BusinessType {
    /// Identifier as it appears on the wire (kebab-case)
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessType::ProductSales => "product-sales",
            BusinessType::Services => "services",
            BusinessType::Appointments => "appointments",
            BusinessType::Restaurant => "restaurant",
            BusinessType::HardwareStore => "hardware-store",
            BusinessType::Digital => "digital",
            BusinessType::Other => "other",
        }
    }
}

/// Site feature the caller wants included
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    ShowProducts,
    Catalog,
    Whatsapp,
    Appointments,
    ContactForm,
    Hours,
    Location,
}

/// Primary goal of the generated site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    Sell,
    Messages,
    AppointmentsGoal,
    Information,
}

/// Visual style of the generated site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    Modern,
    Minimalist,
    Classic,
    Colorful,
}

/// A validated generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteRequest {
    pub business_type: BusinessType,
    pub features: Vec<Feature>,
    pub goal: Goal,
    pub style: Style,
}

/// Generated site code, one string per section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedSite {
    pub html: String,
    pub css: String,
    pub js: String,
}

impl GeneratedSite {
    /// Per-section character counts, for logging and response metadata
    pub fn stats(&self) -> SiteStats {
        SiteStats {
            html_chars: self.html.len(),
            css_chars: self.css.len(),
            js_chars: self.js.len(),
        }
    }
}

/// Output size summary
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SiteStats {
    pub html_chars: usize,
    pub css_chars: usize,
    pub js_chars: usize,
}
