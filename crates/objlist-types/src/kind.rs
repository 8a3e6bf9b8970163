use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Slot number within a single object group.
pub type SlotIndex = u16;

/// The kind of content object an entry names.
///
/// The discriminant order is the declared group order: flat indices are laid
/// out by concatenating groups in exactly this sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum ObjectType {
    Ride = 0,
    SmallScenery = 1,
    LargeScenery = 2,
    Walls = 3,
    Banners = 4,
    Paths = 5,
    PathBits = 6,
    SceneryGroup = 7,
    ParkEntrance = 8,
    Water = 9,
    ScenarioText = 10,
    TerrainSurface = 11,
    TerrainEdge = 12,
    Station = 13,
    Music = 14,
}

impl ObjectType {
    /// Number of declared object types.
    pub const COUNT: usize = 15;

    /// All object types in declared order.
    pub const ALL: [ObjectType; Self::COUNT] = [
        Self::Ride,
        Self::SmallScenery,
        Self::LargeScenery,
        Self::Walls,
        Self::Banners,
        Self::Paths,
        Self::PathBits,
        Self::SceneryGroup,
        Self::ParkEntrance,
        Self::Water,
        Self::ScenarioText,
        Self::TerrainSurface,
        Self::TerrainEdge,
        Self::Station,
        Self::Music,
    ];

    /// The raw type value stored in an entry's flags.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Position of this type in declared order.
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Short lowercase name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ride => "ride",
            Self::SmallScenery => "small_scenery",
            Self::LargeScenery => "large_scenery",
            Self::Walls => "walls",
            Self::Banners => "banners",
            Self::Paths => "paths",
            Self::PathBits => "path_bits",
            Self::SceneryGroup => "scenery_group",
            Self::ParkEntrance => "park_entrance",
            Self::Water => "water",
            Self::ScenarioText => "scenario_text",
            Self::TerrainSurface => "terrain_surface",
            Self::TerrainEdge => "terrain_edge",
            Self::Station => "station",
            Self::Music => "music",
        }
    }
}

impl TryFrom<u8> for ObjectType {
    type Error = TypeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(TypeError::InvalidType(value))
    }
}

impl From<ObjectType> for u8 {
    fn from(ty: ObjectType) -> Self {
        ty.as_u8()
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Chunk encoding a persistence layer should use when writing a group.
///
/// Only the selection lives here; the encoders themselves are external.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum EncodingScheme {
    /// Stored verbatim.
    None = 0,
    /// Run-length encoded.
    Rle = 1,
    /// Run-length encoded after repeat compression.
    RleCompressed = 2,
    /// Bitwise rotation per byte.
    Rotate = 3,
}

impl EncodingScheme {
    /// The legacy chunk header byte for this scheme.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for EncodingScheme {
    type Error = TypeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Rle),
            2 => Ok(Self::RleCompressed),
            3 => Ok(Self::Rotate),
            other => Err(TypeError::InvalidEncoding(other)),
        }
    }
}

impl fmt::Display for EncodingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Rle => write!(f, "rle"),
            Self::RleCompressed => write!(f, "rle_compressed"),
            Self::Rotate => write!(f, "rotate"),
        }
    }
}
