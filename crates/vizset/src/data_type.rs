//! Physical data types associated with visualization values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use vizset_core::validate::Validate;
use vizset_core::{tagged_union, DefaultOr, Result, SchemaError};

vizset_core::fixed_tag!(pub struct DataTypeTag = "DataType";);
vizset_core::fixed_tag!(pub struct GenericDataTypeTag = "GenericDataType";);
vizset_core::fixed_tag!(pub struct GenericKindTag = "GenericType";);

/// The named physical quantity a data set represents.
///
/// The kind governs the behavior of the data type and its acceptable
/// units in consuming engines; here it is carried as an opaque, closed
/// enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataKind {
    ActivityLevel,
    AerosolOpticalDepth,
    AirSpeed,
    AirTemperature,
    AirTemperatureDelta,
    Albedo,
    Angle,
    Area,
    AtmosphericStationPressure,
    CeilingHeight,
    ClothingInsulation,
    ConvectionCoefficient,
    CoolingDegreeTime,
    Current,
    DewPointTemperature,
    DiffuseHorizontalIlluminance,
    DiffuseHorizontalIrradiance,
    DiffuseHorizontalRadiation,
    DirectHorizontalIrradiance,
    DirectHorizontalRadiation,
    DirectNormalIlluminance,
    DirectNormalIrradiance,
    DirectNormalRadiation,
    DiscomfortReason,
    Distance,
    DryBulbTemperature,
    EffectiveRadiantField,
    Energy,
    EnergyFlux,
    EnergyIntensity,
    Enthalpy,
    ExtraterrestrialDirectNormalRadiation,
    ExtraterrestrialHorizontalRadiation,
    Fraction,
    GlobalHorizontalIlluminance,
    GlobalHorizontalIrradiance,
    GlobalHorizontalRadiation,
    GroundTemperature,
    HeatingDegreeTime,
    HorizontalInfraredRadiationIntensity,
    HumidityRatio,
    Illuminance,
    Irradiance,
    LiquidPrecipitationDepth,
    LiquidPrecipitationQuantity,
    Luminance,
    Mass,
    MassFlowRate,
    MeanRadiantTemperature,
    MetabolicRate,
    OpaqueSkyCover,
    OperativeTemperature,
    OperativeTemperatureDelta,
    PercentagePeopleDissatisfied,
    Power,
    PrecipitableWater,
    PredictedMeanVote,
    Pressure,
    PrevailingOutdoorTemperature,
    RValue,
    RadiantCoefficient,
    RadiantTemperature,
    RadiantTemperatureDelta,
    Radiation,
    RelativeHumidity,
    SkyTemperature,
    SnowDepth,
    SpecificEnergy,
    Speed,
    StandardEffectiveTemperature,
    Temperature,
    TemperatureDelta,
    TemperatureTime,
    ThermalComfort,
    ThermalCondition,
    ThermalConditionElevenPoint,
    ThermalConditionFivePoint,
    ThermalConditionNinePoint,
    ThermalConditionSevenPoint,
    Time,
    TotalSkyCover,
    #[serde(rename = "UTCICategory")]
    UtciCategory,
    UValue,
    UniversalThermalClimateIndex,
    Visibility,
    Voltage,
    Volume,
    VolumeFlowRate,
    VolumeFlowRateIntensity,
    WetBulbTemperature,
    WindDirection,
    WindSpeed,
    ZenithLuminance,
}

/// A named physical data type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataType {
    /// Wire discriminant, always `"DataType"`.
    #[serde(rename = "type", default)]
    pub type_tag: DataTypeTag,
    /// The physical quantity this data represents.
    pub data_type: DataKind,
    /// Text for how the data type displays, possibly more specific than
    /// the quantity name.
    pub name: String,
}

impl DataType {
    /// Creates a data type with a display name.
    pub fn new(data_type: DataKind, name: impl Into<String>) -> Self {
        Self {
            type_tag: DataTypeTag,
            data_type,
            name: name.into(),
        }
    }
}

impl Validate for DataType {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// A user-defined data type outside the closed [`DataKind`] enumeration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenericDataType {
    /// Wire discriminant, always `"GenericDataType"`.
    #[serde(rename = "type", default)]
    pub type_tag: GenericDataTypeTag,
    /// Fixed quantity marker, always `"GenericType"`.
    #[serde(default)]
    pub data_type: GenericKindTag,
    /// Text for how the data type displays.
    pub name: String,
    /// Base unit of the data type, standard SI where possible.
    pub base_unit: String,
    /// Lower limit below which values are physically or mathematically
    /// impossible. The sentinel means negative infinity.
    #[serde(default)]
    pub min: DefaultOr<f64>,
    /// Upper limit above which values are physically or mathematically
    /// impossible. The sentinel means positive infinity.
    #[serde(default)]
    pub max: DefaultOr<f64>,
    /// Optional abbreviation for the data type.
    #[serde(default)]
    pub abbreviation: String,
    /// Optional categories that the numerical values relate to, e.g.
    /// `{-1: "Cold", 0: "Neutral", 1: "Hot"}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_descr: Option<BTreeMap<i64, String>>,
    /// Whether the data represents conditions at a single instant in time
    /// rather than an average or accumulation over time.
    #[serde(default = "default_true")]
    pub point_in_time: bool,
    /// Whether the data can be cumulative when represented over time.
    /// Cannot be true together with `point_in_time`.
    #[serde(default)]
    pub cumulative: bool,
}

fn default_true() -> bool {
    true
}

impl GenericDataType {
    /// Creates a point-in-time generic data type with open bounds.
    pub fn new(name: impl Into<String>, base_unit: impl Into<String>) -> Self {
        Self {
            type_tag: GenericDataTypeTag,
            data_type: GenericKindTag,
            name: name.into(),
            base_unit: base_unit.into(),
            min: DefaultOr::Default,
            max: DefaultOr::Default,
            abbreviation: String::new(),
            unit_descr: None,
            point_in_time: true,
            cumulative: false,
        }
    }
}

impl Validate for GenericDataType {
    fn validate(&self) -> Result<()> {
        if self.point_in_time && self.cumulative {
            return Err(SchemaError::field(
                "GenericDataType.cumulative",
                "cannot be true when point_in_time is also true",
            ));
        }
        Ok(())
    }
}

tagged_union! {
    /// Either a named physical data type or a user-defined generic one.
    pub enum AnyDataType {
        DataType,
        GenericDataType,
    }
}
