//! Artifact renderers.
//!
//! Every function here is a pure function of the validated property (plus
//! caller options for the PR description). All of them read the identifier,
//! name, type, access and change mode through the same canonical accessors
//! (`PropertyId::to_hex`, the enum `label()`s) — no artifact reformats or
//! recomputes those values on its own.

use serde::Serialize;

use crate::model::Property;

use super::GenerateOptions;

/// `SNAKE_CASE` → `SnakeCase`, for generated binding method names.
pub(super) fn to_camel(name: &str) -> String {
    name.split('_')
        .filter(|seg| !seg.is_empty())
        .map(|seg| {
            let mut chars = seg.chars();
            match chars.next() {
                Some(first) => {
                    first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
                }
                None => String::new(),
            }
        })
        .collect()
}

fn java_type(p: &Property) -> &'static str {
    use crate::model::PropertyType::*;
    match p.property_type {
        Boolean => "Boolean",
        Int32 => "Integer",
        Int64 => "Long",
        Float => "Float",
        String => "String",
        Bytes => "byte[]",
        Int32Vec => "Integer[]",
        Int64Vec => "Long[]",
        FloatVec => "Float[]",
        StringVec => "String[]",
        BytesVec => "byte[][]",
        Mixed => "Object",
    }
}

fn json_default(p: &Property) -> serde_json::Value {
    use crate::model::PropertyType::*;
    match p.property_type {
        Boolean => serde_json::json!(false),
        Int32 | Int64 => serde_json::json!(0),
        Float => serde_json::json!(0.0),
        String => serde_json::json!(""),
        Bytes | Int32Vec | Int64Vec | FloatVec | StringVec | BytesVec => serde_json::json!([]),
        Mixed => serde_json::json!({}),
    }
}

/// HAL/AIDL property definition block.
pub(super) fn type_definition(p: &Property) -> String {
    let mut out = String::new();
    out.push_str("// VehicleProperty.aidl\n\n");
    out.push_str("/**\n");
    out.push_str(&format!(" * {}\n", p.description));
    out.push_str(" *\n");
    out.push_str(&format!(" * @change_mode {}\n", p.change_mode.label()));
    out.push_str(&format!(" * @access {}\n", p.access.label()));
    out.push_str(&format!(" * @data_type {}\n", p.property_type.label()));
    if let Some(units) = &p.units {
        out.push_str(&format!(" * @unit {units}\n"));
    }
    out.push_str(" */\n");
    out.push_str(&format!("{} = {},\n", p.name, p.id.to_hex()));

    if !p.enum_values.is_empty() {
        out.push_str(&format!("\n/**\n * Values for {}.\n */\n", p.name));
        out.push_str(&format!("enum {}Values : int32_t {{\n", to_camel(&p.name)));
        for (label, value) in &p.enum_values {
            out.push_str(&format!("    {label} = {value},\n"));
        }
        out.push_str("};\n");
    }
    out
}

/// Framework binding: property id constant plus manager accessors.
pub(super) fn binding(p: &Property) -> String {
    let camel = to_camel(&p.name);
    let jtype = java_type(p);

    let mut out = String::new();
    out.push_str("// VehiclePropertyIds.java\n\n");
    out.push_str("/**\n");
    out.push_str(&format!(" * {}\n", p.description));
    out.push_str(" */\n");
    out.push_str(&format!(
        "public static final int {} = {};\n",
        p.name,
        p.id.to_hex()
    ));

    out.push_str("\n// CarPropertyManager.java\n");
    if p.access.is_readable() {
        out.push_str(&format!(
            "\n/** Returns the current value of {}. */\n\
             public {jtype} get{camel}(int areaId) {{\n    \
             return getProperty({jtype}.class, VehiclePropertyIds.{}, areaId).getValue();\n}}\n",
            p.name, p.name
        ));
    }
    if p.access.is_writable() {
        out.push_str(&format!(
            "\n/** Sets {}. */\n\
             public void set{camel}(int areaId, {jtype} value) {{\n    \
             setProperty({jtype}.class, VehiclePropertyIds.{}, areaId, value);\n}}\n",
            p.name, p.name
        ));
    }
    out
}

/// HAL-side unit test skeleton exercising configuration and access modes.
pub(super) fn unit_test(p: &Property) -> String {
    let mut out = String::new();
    out.push_str("// VehicleHalTest.cpp\n\n");
    out.push_str(&format!("TEST_F(VehicleHalTest, {}Config) {{\n", to_camel(&p.name)));
    out.push_str(&format!(
        "    auto configs = mHal->getPropConfigs({{toInt(VehicleProperty::{})}});\n",
        p.name
    ));
    out.push_str("    ASSERT_EQ(configs.size(), 1u);\n");
    out.push_str("    const auto& config = configs[0];\n");
    out.push_str(&format!(
        "    EXPECT_EQ(config.prop, {});\n",
        p.id.to_hex()
    ));
    out.push_str(&format!(
        "    EXPECT_EQ(config.access, VehiclePropertyAccess::{});\n",
        p.access.label()
    ));
    out.push_str(&format!(
        "    EXPECT_EQ(config.changeMode, VehiclePropertyChangeMode::{});\n",
        p.change_mode.label()
    ));
    if let (Some(min), Some(max)) = (p.min_value, p.max_value) {
        out.push_str(&format!(
            "    EXPECT_EQ(config.areaConfigs[0].minValue, {min});\n\
             \x20   EXPECT_EQ(config.areaConfigs[0].maxValue, {max});\n"
        ));
    }
    if let Some(rate) = p.sample_rate_hz {
        out.push_str(&format!(
            "    EXPECT_EQ(config.maxSampleRate, {rate}f);\n"
        ));
    }
    out.push_str("}\n");

    if p.access.is_readable() {
        out.push_str(&format!(
            "\nTEST_F(VehicleHalTest, {}Read) {{\n    \
             auto value = mHal->get(makeRequest(VehicleProperty::{}));\n    \
             ASSERT_EQ(value.status, StatusCode::OK);\n}}\n",
            to_camel(&p.name),
            p.name
        ));
    }
    if p.access.is_writable() {
        out.push_str(&format!(
            "\nTEST_F(VehicleHalTest, {}Write) {{\n    \
             auto status = mHal->set(makeValue(VehicleProperty::{}));\n    \
             ASSERT_EQ(status, StatusCode::OK);\n}}\n",
            to_camel(&p.name),
            p.name
        ));
    }
    out
}

/// Serialized shape of the build-fragment artifact. Field order is fixed by
/// the struct definition, which is what keeps the rendering byte-stable.
#[derive(Serialize)]
struct BuildFragment<'a> {
    property: &'a str,
    id: String,
    #[serde(rename = "type")]
    property_type: &'a str,
    group: &'a str,
    access: &'a str,
    #[serde(rename = "changeMode")]
    change_mode: &'a str,
    #[serde(rename = "defaultValue")]
    default_value: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    units: Option<&'a str>,
    #[serde(rename = "minValue", skip_serializing_if = "Option::is_none")]
    min_value: Option<f64>,
    #[serde(rename = "maxValue", skip_serializing_if = "Option::is_none")]
    max_value: Option<f64>,
    #[serde(rename = "sampleRateHz", skip_serializing_if = "Option::is_none")]
    sample_rate_hz: Option<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    areas: Vec<&'a str>,
    #[serde(rename = "enumValues", skip_serializing_if = "Vec::is_empty")]
    enum_values: Vec<(&'a str, i32)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    dependencies: Vec<&'a str>,
}

/// Emulator/default-config JSON fragment.
pub(super) fn build_fragment(p: &Property) -> String {
    let fragment = BuildFragment {
        property: &p.name,
        id: p.id.to_hex(),
        property_type: p.property_type.label(),
        group: &p.group,
        access: p.access.label(),
        change_mode: p.change_mode.label(),
        default_value: json_default(p),
        units: p.units.as_deref(),
        min_value: p.min_value,
        max_value: p.max_value,
        sample_rate_hz: p.sample_rate_hz,
        areas: p.areas.iter().map(String::as_str).collect(),
        enum_values: p
            .enum_values
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .collect(),
        dependencies: p.dependencies.iter().map(String::as_str).collect(),
    };
    // A struct of strings and numbers cannot fail to serialize.
    let mut json = serde_json::to_string_pretty(&fragment)
        .expect("build fragment serializes infallibly");
    json.push('\n');
    json
}

/// Human-readable change description for review communication.
pub(super) fn pr_description(p: &Property, options: &GenerateOptions) -> String {
    let readable = to_camel(&p.name)
        .chars()
        .flat_map(|c| {
            if c.is_ascii_uppercase() {
                vec![' ', c]
            } else {
                vec![c]
            }
        })
        .collect::<String>()
        .trim_start()
        .to_string();

    let mut out = String::new();
    out.push_str(&format!(
        "# Add {readable} vHAL property ({})\n\n",
        p.property_type.label()
    ));
    out.push_str(&format!(
        "This change implements the `{}` property ({}).\n\n**Overview:** {}\n",
        p.name,
        p.id.to_hex(),
        p.description
    ));

    out.push_str("\n## Changes\n\n");
    out.push_str(&format!("- Property `{}` (ID `{}`)\n", p.name, p.id.to_hex()));
    out.push_str(&format!("- Type `{}`, group `{}`\n", p.property_type.label(), p.group));
    out.push_str(&format!(
        "- Access `{}`, change mode `{}`\n",
        p.access.label(),
        p.change_mode.label()
    ));
    out.push_str("- HAL definition, framework binding, HAL unit tests, emulator configuration\n");

    out.push_str("\n## Technical details\n\n");
    if let Some(units) = &p.units {
        out.push_str(&format!("- Units: `{units}`\n"));
    }
    if let (Some(min), Some(max)) = (p.min_value, p.max_value) {
        out.push_str(&format!("- Value range: `{min}` to `{max}`\n"));
    }
    if let Some(rate) = p.sample_rate_hz {
        out.push_str(&format!("- Sample rate: `{rate} Hz`\n"));
    }
    if !p.areas.is_empty() {
        out.push_str(&format!("- Areas: {}\n", join_coded(&p.areas)));
    }
    if !p.enum_values.is_empty() {
        out.push_str("- Enumerated values:\n");
        for (label, value) in &p.enum_values {
            out.push_str(&format!("  - `{label}` = `{value}`\n"));
        }
    }
    if !p.dependencies.is_empty() {
        out.push_str(&format!(
            "- Depends on: {}\n",
            join_coded(&p.dependencies)
        ));
    }

    out.push_str("\n## Testing\n\n");
    out.push_str("- HAL property configuration validation\n");
    if p.access.is_readable() {
        out.push_str("- Property read path\n");
    }
    if p.access.is_writable() {
        out.push_str("- Property write path and input validation\n");
    }
    if !p.areas.is_empty() {
        out.push_str("- Per-area behavior\n");
    }
    if p.min_value.is_some() {
        out.push_str("- Boundary values\n");
    }

    out.push_str("\n## Review checklist\n\n");
    out.push_str("- [ ] Property ID is unique and follows the vendor range convention\n");
    out.push_str("- [ ] Access and change mode match the intended behavior\n");
    out.push_str("- [ ] Generated tests pass\n");
    for note in &options.reviewer_notes {
        out.push_str(&format!("- [ ] {note}\n"));
    }

    out.push_str("\n## References\n\n");
    out.push_str("- https://source.android.com/docs/automotive/vhal\n");
    out.push_str("- https://source.android.com/docs/automotive/vhal/properties\n");
    if let Some(reference) = &options.source_reference {
        out.push_str(reference);
        if !reference.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

fn join_coded(items: &[String]) -> String {
    items
        .iter()
        .map(|i| format!("`{i}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_camel() {
        assert_eq!(to_camel("HVAC_FAN_SPEED"), "HvacFanSpeed");
        assert_eq!(to_camel("VENDOR_CABIN_SCENT"), "VendorCabinScent");
        assert_eq!(to_camel("VIN"), "Vin");
    }
}
