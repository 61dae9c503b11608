//! The vHAL property — the canonical unit of the domain.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// 32-bit vHAL property identifier.
///
/// The high bits encode the reserved range: system properties live below
/// `0x7000_0000`, vendor properties occupy `0x7000_0000..=0x7FFF_FFFF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PropertyId(pub u32);

/// First identifier of the reserved vendor range (inclusive).
pub const VENDOR_RANGE_START: u32 = 0x7000_0000;
/// Last identifier of the reserved vendor range (inclusive).
pub const VENDOR_RANGE_END: u32 = 0x7FFF_FFFF;

impl PropertyId {
    /// Whether this identifier falls inside the reserved vendor range.
    pub fn is_vendor(self) -> bool {
        (VENDOR_RANGE_START..=VENDOR_RANGE_END).contains(&self.0)
    }

    /// Canonical hex rendering, e.g. `0x15400300`. Every generated artifact
    /// that mentions the identifier goes through this one representation.
    pub fn to_hex(self) -> String {
        format!("0x{:08X}", self.0)
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Closed set of vHAL property data types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    Boolean,
    Int32,
    Int64,
    Float,
    String,
    Bytes,
    Int32Vec,
    Int64Vec,
    FloatVec,
    StringVec,
    BytesVec,
    Mixed,
}

impl PropertyType {
    /// Canonical vHAL spelling (`INT32`, `FLOAT_VEC`, ...).
    pub fn label(self) -> &'static str {
        match self {
            PropertyType::Boolean => "BOOLEAN",
            PropertyType::Int32 => "INT32",
            PropertyType::Int64 => "INT64",
            PropertyType::Float => "FLOAT",
            PropertyType::String => "STRING",
            PropertyType::Bytes => "BYTES",
            PropertyType::Int32Vec => "INT32_VEC",
            PropertyType::Int64Vec => "INT64_VEC",
            PropertyType::FloatVec => "FLOAT_VEC",
            PropertyType::StringVec => "STRING_VEC",
            PropertyType::BytesVec => "BYTES_VEC",
            PropertyType::Mixed => "MIXED",
        }
    }

    /// Scalar numeric types may carry `units` / `min_value` / `max_value`.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            PropertyType::Int32 | PropertyType::Int64 | PropertyType::Float
        )
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Property access mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessMode {
    Read,
    Write,
    ReadWrite,
}

impl AccessMode {
    pub fn label(self) -> &'static str {
        match self {
            AccessMode::Read => "READ",
            AccessMode::Write => "WRITE",
            AccessMode::ReadWrite => "READ_WRITE",
        }
    }

    pub fn is_readable(self) -> bool {
        matches!(self, AccessMode::Read | AccessMode::ReadWrite)
    }

    pub fn is_writable(self) -> bool {
        matches!(self, AccessMode::Write | AccessMode::ReadWrite)
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the property's value evolves over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeMode {
    Static,
    OnChange,
    Continuous,
}

impl ChangeMode {
    pub fn label(self) -> &'static str {
        match self {
            ChangeMode::Static => "STATIC",
            ChangeMode::OnChange => "ON_CHANGE",
            ChangeMode::Continuous => "CONTINUOUS",
        }
    }
}

impl fmt::Display for ChangeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Canonical stored form of a property name: trimmed and uppercased.
/// Lookups normalize through the same function, so comparison is
/// case-insensitive and whitespace-tolerant.
pub fn canonical_name(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// A vHAL property definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Canonical name: uppercase, underscore-delimited, unique per catalog.
    pub name: String,
    pub id: PropertyId,
    pub property_type: PropertyType,
    /// Functional category (`HVAC`, `SEAT`, `LIGHTS`, `VENDOR`, ...).
    /// Open set — vendors introduce their own groups.
    pub group: String,
    pub access: AccessMode,
    pub change_mode: ChangeMode,
    pub description: String,
    pub units: Option<String>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    /// Zone identifiers this property applies to; empty means global.
    pub areas: Vec<String>,
    /// Label → integer mapping, only meaningful for enumerated `INT32`.
    /// BTreeMap so iteration (and rendering) order is stable.
    pub enum_values: BTreeMap<String, i32>,
    /// Names of properties this one depends on.
    pub dependencies: Vec<String>,
    /// Required and > 0 iff `change_mode == Continuous`.
    pub sample_rate_hz: Option<f32>,
}

impl Property {
    /// Minimal property; the remaining fields start empty/None.
    pub fn new(
        name: impl Into<String>,
        id: PropertyId,
        property_type: PropertyType,
        group: impl Into<String>,
        access: AccessMode,
        change_mode: ChangeMode,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: canonical_name(&name.into()),
            id,
            property_type,
            group: canonical_name(&group.into()),
            access,
            change_mode,
            description: description.into(),
            units: None,
            min_value: None,
            max_value: None,
            areas: Vec::new(),
            enum_values: BTreeMap::new(),
            dependencies: Vec::new(),
            sample_rate_hz: None,
        }
    }

    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min_value = Some(min);
        self.max_value = Some(max);
        self
    }

    pub fn with_areas(mut self, areas: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.areas = areas.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_enum_values(
        mut self,
        values: impl IntoIterator<Item = (impl Into<String>, i32)>,
    ) -> Self {
        self.enum_values = values.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }

    pub fn with_dependencies(
        mut self,
        deps: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.dependencies = deps
            .into_iter()
            .map(|d| canonical_name(&d.into()))
            .collect();
        self
    }

    pub fn with_sample_rate(mut self, hz: f32) -> Self {
        self.sample_rate_hz = Some(hz);
        self
    }

    pub fn depends_on(&self, name: &str) -> bool {
        let needle = canonical_name(name);
        self.dependencies.iter().any(|d| *d == needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_name() {
        assert_eq!(canonical_name("  hvac_fan_speed \n"), "HVAC_FAN_SPEED");
        assert_eq!(canonical_name("HVAC_FAN_SPEED"), "HVAC_FAN_SPEED");
    }

    #[test]
    fn test_vendor_range() {
        assert!(!PropertyId(0x1540_0300).is_vendor());
        assert!(PropertyId(0x7000_0000).is_vendor());
        assert!(PropertyId(0x7FFF_FFFF).is_vendor());
        assert!(!PropertyId(0x8000_0000).is_vendor());
    }

    #[test]
    fn test_id_hex_is_canonical() {
        assert_eq!(PropertyId(0x1540_0300).to_hex(), "0x15400300");
        assert_eq!(format!("{}", PropertyId(0x7000_00AB)), "0x700000AB");
    }

    #[test]
    fn test_builder_normalizes_dependencies() {
        let p = Property::new(
            "vendor_cabin_scent",
            PropertyId(0x7000_0001),
            PropertyType::Int32,
            "vendor",
            AccessMode::ReadWrite,
            ChangeMode::OnChange,
            "Cabin scent diffuser level",
        )
        .with_dependencies(["hvac_power_on"]);

        assert_eq!(p.name, "VENDOR_CABIN_SCENT");
        assert_eq!(p.group, "VENDOR");
        assert!(p.depends_on("HVAC_POWER_ON"));
        assert!(p.depends_on(" hvac_power_on "));
    }
}
