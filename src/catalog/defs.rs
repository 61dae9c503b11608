//! Builtin platform property definitions.
//!
//! Distilled from the Android automotive property set: identifiers follow the
//! platform's group-prefixed scheme (HVAC `0x1540____`, SEAT `0x15B0____`,
//! LIGHTS `0x15C0____`, POWER `0x15D0____`, BODY `0x15E0____`). Dependency
//! edges capture which properties must exist before a feature is functional,
//! e.g. every HVAC feature needs `HVAC_POWER_ON`, and each `*_MOVE` control
//! needs its `*_POS` counterpart.

use crate::model::{AccessMode, ChangeMode, Property, PropertyId, PropertyType};

use AccessMode::{Read, ReadWrite};
use ChangeMode::{Continuous, OnChange, Static};
use PropertyType::{Boolean, Float, Int32};

fn prop(
    name: &str,
    id: u32,
    ty: PropertyType,
    group: &str,
    access: AccessMode,
    change_mode: ChangeMode,
    description: &str,
) -> Property {
    Property::new(name, PropertyId(id), ty, group, access, change_mode, description)
}

/// The fixed builtin definition table. Loaded once at catalog construction.
pub fn builtin_properties() -> Vec<Property> {
    vec![
        // ==================================================================
        // HVAC
        // ==================================================================
        prop("HVAC_POWER_ON", 0x1540_0100, Boolean, "HVAC", ReadWrite, OnChange,
            "Master power switch for the HVAC climate control system"),
        prop("HVAC_FAN_DIRECTION", 0x1540_0200, Int32, "HVAC", ReadWrite, OnChange,
            "Airflow direction of the climate control fan")
            .with_enum_values([("FACE", 1), ("FLOOR", 2), ("DEFROST", 4)])
            .with_dependencies(["HVAC_POWER_ON"]),
        prop("HVAC_FAN_SPEED", 0x1540_0300, Int32, "HVAC", ReadWrite, OnChange,
            "Fan speed setting for the HVAC climate control system")
            .with_range(0.0, 6.0)
            .with_areas(["ROW_1_LEFT", "ROW_1_RIGHT"])
            .with_dependencies(["HVAC_POWER_ON"]),
        prop("HVAC_TEMPERATURE_CURRENT", 0x1540_0400, Float, "HVAC", Read, OnChange,
            "Current cabin temperature measured by the climate system")
            .with_units("celsius")
            .with_dependencies(["HVAC_POWER_ON"]),
        prop("HVAC_TEMPERATURE_SET", 0x1540_0500, Float, "HVAC", ReadWrite, OnChange,
            "Target cabin temperature setpoint")
            .with_units("celsius")
            .with_range(16.0, 32.0)
            .with_areas(["ROW_1_LEFT", "ROW_1_RIGHT"])
            .with_dependencies(["HVAC_POWER_ON"]),
        prop("HVAC_DEFROSTER", 0x1540_0600, Boolean, "HVAC", ReadWrite, OnChange,
            "Windshield defroster on/off state")
            .with_areas(["WINDSHIELD_FRONT", "WINDSHIELD_REAR"])
            .with_dependencies(["HVAC_POWER_ON", "HVAC_FAN_SPEED"]),
        prop("HVAC_AC_ON", 0x1540_0700, Boolean, "HVAC", ReadWrite, OnChange,
            "Air conditioning compressor on/off state")
            .with_dependencies(["HVAC_POWER_ON", "HVAC_FAN_SPEED"]),
        prop("HVAC_MAX_AC_ON", 0x1540_0800, Boolean, "HVAC", ReadWrite, OnChange,
            "Maximum air conditioning mode")
            .with_dependencies(["HVAC_AC_ON"]),
        prop("HVAC_MAX_DEFROST_ON", 0x1540_0900, Boolean, "HVAC", ReadWrite, OnChange,
            "Maximum defrost mode")
            .with_dependencies(["HVAC_DEFROSTER"]),
        prop("HVAC_RECIRC_ON", 0x1540_0A00, Boolean, "HVAC", ReadWrite, OnChange,
            "Cabin air recirculation on/off state")
            .with_dependencies(["HVAC_POWER_ON"]),
        prop("HVAC_DUAL_ON", 0x1540_0B00, Boolean, "HVAC", ReadWrite, OnChange,
            "Dual zone temperature coupling between driver and passenger")
            .with_dependencies(["HVAC_TEMPERATURE_SET"]),
        prop("HVAC_AUTO_ON", 0x1540_0C00, Boolean, "HVAC", ReadWrite, OnChange,
            "Automatic climate control mode")
            .with_dependencies(["HVAC_POWER_ON", "HVAC_TEMPERATURE_SET", "HVAC_FAN_SPEED"]),
        prop("HVAC_SEAT_TEMPERATURE", 0x1540_0D00, Int32, "HVAC", ReadWrite, OnChange,
            "Seat heating and cooling level")
            .with_range(-3.0, 3.0)
            .with_areas(["ROW_1_LEFT", "ROW_1_RIGHT"])
            .with_dependencies(["HVAC_POWER_ON"]),
        prop("HVAC_SIDE_MIRROR_HEAT", 0x1540_0E00, Int32, "HVAC", ReadWrite, OnChange,
            "Side mirror heating level")
            .with_range(0.0, 2.0)
            .with_dependencies(["HVAC_POWER_ON"]),
        prop("HVAC_STEERING_WHEEL_HEAT", 0x1540_0F00, Int32, "HVAC", ReadWrite, OnChange,
            "Steering wheel heating and cooling level")
            .with_range(-2.0, 2.0)
            .with_dependencies(["HVAC_POWER_ON"]),
        prop("HVAC_TEMPERATURE_DISPLAY_UNITS", 0x1540_1000, Int32, "HVAC", ReadWrite, OnChange,
            "Temperature units used by the climate display")
            .with_enum_values([("CELSIUS", 0x30), ("FAHRENHEIT", 0x31)]),
        prop("HVAC_ACTUAL_FAN_SPEED_RPM", 0x1540_1100, Int32, "HVAC", Read, Continuous,
            "Measured fan rotation speed")
            .with_units("rpm")
            .with_sample_rate(1.0)
            .with_dependencies(["HVAC_FAN_SPEED"]),
        prop("HVAC_AUTO_RECIRC_ON", 0x1540_1200, Boolean, "HVAC", ReadWrite, OnChange,
            "Automatic recirculation based on air quality")
            .with_dependencies(["HVAC_RECIRC_ON"]),
        prop("HVAC_SEAT_VENTILATION", 0x1540_1300, Int32, "HVAC", ReadWrite, OnChange,
            "Seat ventilation fan level")
            .with_range(0.0, 3.0)
            .with_areas(["ROW_1_LEFT", "ROW_1_RIGHT"])
            .with_dependencies(["HVAC_POWER_ON"]),
        // ==================================================================
        // SEAT
        // ==================================================================
        prop("SEAT_MEMORY_SELECT", 0x15B0_0100, Int32, "SEAT", ReadWrite, OnChange,
            "Select and recall a stored seat memory preset")
            .with_range(1.0, 3.0)
            .with_areas(["ROW_1_LEFT", "ROW_1_RIGHT"])
            .with_dependencies(["SEAT_FORE_AFT_POS", "SEAT_HEIGHT_POS", "SEAT_BACKREST_ANGLE_1_POS"]),
        prop("SEAT_MEMORY_SET", 0x15B0_0200, Int32, "SEAT", ReadWrite, OnChange,
            "Store the current seat position into a memory preset")
            .with_range(1.0, 3.0)
            .with_dependencies(["SEAT_MEMORY_SELECT"]),
        prop("SEAT_BELT_BUCKLED", 0x15B0_0300, Boolean, "SEAT", Read, OnChange,
            "Seat belt buckle state"),
        prop("SEAT_BELT_HEIGHT_POS", 0x15B0_0400, Int32, "SEAT", ReadWrite, OnChange,
            "Seat belt shoulder anchor height position"),
        prop("SEAT_BELT_HEIGHT_MOVE", 0x15B0_0500, Int32, "SEAT", ReadWrite, OnChange,
            "Seat belt shoulder anchor height movement command")
            .with_dependencies(["SEAT_BELT_HEIGHT_POS"]),
        prop("SEAT_FORE_AFT_POS", 0x15B0_0600, Int32, "SEAT", ReadWrite, OnChange,
            "Seat position along the fore and aft track"),
        prop("SEAT_FORE_AFT_MOVE", 0x15B0_0700, Int32, "SEAT", ReadWrite, OnChange,
            "Seat fore and aft movement command")
            .with_dependencies(["SEAT_FORE_AFT_POS"]),
        prop("SEAT_BACKREST_ANGLE_1_POS", 0x15B0_0800, Int32, "SEAT", ReadWrite, OnChange,
            "Primary backrest recline angle position"),
        prop("SEAT_BACKREST_ANGLE_1_MOVE", 0x15B0_0900, Int32, "SEAT", ReadWrite, OnChange,
            "Primary backrest recline movement command")
            .with_dependencies(["SEAT_BACKREST_ANGLE_1_POS"]),
        prop("SEAT_HEIGHT_POS", 0x15B0_0A00, Int32, "SEAT", ReadWrite, OnChange,
            "Seat cushion height position"),
        prop("SEAT_HEIGHT_MOVE", 0x15B0_0B00, Int32, "SEAT", ReadWrite, OnChange,
            "Seat cushion height movement command")
            .with_dependencies(["SEAT_HEIGHT_POS"]),
        prop("SEAT_TILT_POS", 0x15B0_0C00, Int32, "SEAT", ReadWrite, OnChange,
            "Seat cushion tilt angle position"),
        prop("SEAT_TILT_MOVE", 0x15B0_0D00, Int32, "SEAT", ReadWrite, OnChange,
            "Seat cushion tilt movement command")
            .with_dependencies(["SEAT_TILT_POS"]),
        prop("SEAT_LUMBAR_FORE_AFT_POS", 0x15B0_0E00, Int32, "SEAT", ReadWrite, OnChange,
            "Lumbar support fore and aft position")
            .with_dependencies(["SEAT_BACKREST_ANGLE_1_POS"]),
        prop("SEAT_LUMBAR_FORE_AFT_MOVE", 0x15B0_0F00, Int32, "SEAT", ReadWrite, OnChange,
            "Lumbar support fore and aft movement command")
            .with_dependencies(["SEAT_LUMBAR_FORE_AFT_POS"]),
        prop("SEAT_HEADREST_HEIGHT_POS", 0x15B0_1000, Int32, "SEAT", ReadWrite, OnChange,
            "Headrest height position")
            .with_dependencies(["SEAT_HEIGHT_POS"]),
        prop("SEAT_HEADREST_HEIGHT_MOVE", 0x15B0_1100, Int32, "SEAT", ReadWrite, OnChange,
            "Headrest height movement command")
            .with_dependencies(["SEAT_HEADREST_HEIGHT_POS"]),
        prop("SEAT_OCCUPANCY", 0x15B0_1200, Int32, "SEAT", Read, OnChange,
            "Occupancy state detected for the seat")
            .with_enum_values([("UNKNOWN", 0), ("VACANT", 1), ("OCCUPIED", 2)]),
        // ==================================================================
        // LIGHTS
        // ==================================================================
        prop("HEADLIGHTS_STATE", 0x15C0_0100, Int32, "LIGHTS", Read, OnChange,
            "Current headlight state")
            .with_enum_values([("OFF", 0), ("ON", 1), ("DAYTIME_RUNNING", 2)]),
        prop("HEADLIGHTS_SWITCH", 0x15C0_0200, Int32, "LIGHTS", ReadWrite, OnChange,
            "Headlight switch position requested by the driver")
            .with_enum_values([("OFF", 0), ("ON", 1), ("AUTO", 0x100)])
            .with_dependencies(["HEADLIGHTS_STATE"]),
        prop("HIGH_BEAM_LIGHTS_STATE", 0x15C0_0300, Int32, "LIGHTS", Read, OnChange,
            "Current high beam state")
            .with_dependencies(["HEADLIGHTS_STATE"]),
        prop("HIGH_BEAM_LIGHTS_SWITCH", 0x15C0_0400, Int32, "LIGHTS", ReadWrite, OnChange,
            "High beam switch position")
            .with_dependencies(["HIGH_BEAM_LIGHTS_STATE"]),
        prop("HAZARD_LIGHTS_STATE", 0x15C0_0500, Int32, "LIGHTS", Read, OnChange,
            "Current hazard light state"),
        prop("HAZARD_LIGHTS_SWITCH", 0x15C0_0600, Int32, "LIGHTS", ReadWrite, OnChange,
            "Hazard light switch position")
            .with_dependencies(["HAZARD_LIGHTS_STATE"]),
        prop("CABIN_LIGHTS_STATE", 0x15C0_0700, Int32, "LIGHTS", Read, OnChange,
            "Current cabin light state"),
        prop("CABIN_LIGHTS_SWITCH", 0x15C0_0800, Int32, "LIGHTS", ReadWrite, OnChange,
            "Cabin light switch position")
            .with_dependencies(["CABIN_LIGHTS_STATE"]),
        prop("READING_LIGHTS_STATE", 0x15C0_0900, Int32, "LIGHTS", Read, OnChange,
            "Current reading light state")
            .with_areas(["ROW_1_LEFT", "ROW_1_RIGHT"]),
        prop("READING_LIGHTS_SWITCH", 0x15C0_0A00, Int32, "LIGHTS", ReadWrite, OnChange,
            "Reading light switch position")
            .with_areas(["ROW_1_LEFT", "ROW_1_RIGHT"])
            .with_dependencies(["READING_LIGHTS_STATE"]),
        // ==================================================================
        // POWER
        // ==================================================================
        prop("IGNITION_STATE", 0x15D0_0100, Int32, "POWER", Read, OnChange,
            "Vehicle ignition state")
            .with_enum_values([
                ("UNDEFINED", 0), ("LOCK", 1), ("OFF", 2), ("ACC", 3), ("ON", 4), ("START", 5),
            ]),
        prop("EV_BATTERY_LEVEL", 0x15D0_0200, Float, "POWER", Read, Continuous,
            "Remaining energy in the traction battery")
            .with_units("Wh")
            .with_sample_rate(1.0),
        prop("FUEL_LEVEL", 0x15D0_0300, Float, "POWER", Read, Continuous,
            "Remaining fuel in the tank")
            .with_units("mL")
            .with_sample_rate(1.0),
        prop("RANGE_REMAINING", 0x15D0_0400, Float, "POWER", Read, Continuous,
            "Estimated remaining driving range")
            .with_units("m")
            .with_sample_rate(1.0),
        prop("ENGINE_RPM", 0x15D0_0500, Float, "POWER", Read, Continuous,
            "Engine rotation speed")
            .with_units("rpm")
            .with_sample_rate(10.0),
        prop("ENGINE_COOLANT_TEMP", 0x15D0_0600, Float, "POWER", Read, Continuous,
            "Engine coolant temperature")
            .with_units("celsius")
            .with_sample_rate(1.0),
        prop("TIRE_PRESSURE", 0x15D0_0700, Float, "POWER", Read, Continuous,
            "Tire pressure per wheel")
            .with_units("kPa")
            .with_sample_rate(1.0)
            .with_areas(["WHEEL_FRONT_LEFT", "WHEEL_FRONT_RIGHT", "WHEEL_REAR_LEFT", "WHEEL_REAR_RIGHT"]),
        prop("VEHICLE_SPEED_DISPLAY_UNITS", 0x15D0_0800, Int32, "POWER", ReadWrite, OnChange,
            "Speed units used by the instrument display")
            .with_enum_values([("METERS_PER_SEC", 0x01), ("KILOMETERS_PER_HOUR", 0x10), ("MILES_PER_HOUR", 0x90)]),
        prop("VIN", 0x15D0_0900, PropertyType::String, "POWER", Read, Static,
            "Vehicle identification number"),
        // ==================================================================
        // BODY
        // ==================================================================
        prop("DOOR_POS", 0x15E0_0100, Int32, "BODY", ReadWrite, OnChange,
            "Door open position")
            .with_areas(["ROW_1_LEFT", "ROW_1_RIGHT", "ROW_2_LEFT", "ROW_2_RIGHT"]),
        prop("DOOR_MOVE", 0x15E0_0200, Int32, "BODY", ReadWrite, OnChange,
            "Door movement command")
            .with_dependencies(["DOOR_POS"]),
        prop("DOOR_LOCK", 0x15E0_0300, Boolean, "BODY", ReadWrite, OnChange,
            "Door lock state")
            .with_areas(["ROW_1_LEFT", "ROW_1_RIGHT", "ROW_2_LEFT", "ROW_2_RIGHT"]),
        prop("MIRROR_Z_POS", 0x15E0_0400, Int32, "BODY", ReadWrite, OnChange,
            "Mirror tilt position around the Z axis"),
        prop("MIRROR_Z_MOVE", 0x15E0_0500, Int32, "BODY", ReadWrite, OnChange,
            "Mirror Z axis movement command")
            .with_dependencies(["MIRROR_Z_POS"]),
        prop("MIRROR_Y_POS", 0x15E0_0600, Int32, "BODY", ReadWrite, OnChange,
            "Mirror pan position around the Y axis"),
        prop("MIRROR_Y_MOVE", 0x15E0_0700, Int32, "BODY", ReadWrite, OnChange,
            "Mirror Y axis movement command")
            .with_dependencies(["MIRROR_Y_POS"]),
        prop("MIRROR_FOLD", 0x15E0_0800, Boolean, "BODY", ReadWrite, OnChange,
            "Mirror fold state"),
        prop("WINDOW_POS", 0x15E0_0900, Int32, "BODY", ReadWrite, OnChange,
            "Window open position")
            .with_areas(["ROW_1_LEFT", "ROW_1_RIGHT", "ROW_2_LEFT", "ROW_2_RIGHT"]),
        prop("WINDOW_MOVE", 0x15E0_0A00, Int32, "BODY", ReadWrite, OnChange,
            "Window movement command")
            .with_dependencies(["WINDOW_POS"]),
        prop("WINDOW_LOCK", 0x15E0_0B00, Boolean, "BODY", ReadWrite, OnChange,
            "Rear window lockout state"),
    ]
}
